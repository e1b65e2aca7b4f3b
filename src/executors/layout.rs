//! Layout command executor

use console::style;
use miette::{Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::LayoutConfig;
use crate::executors::CommandExecutor;
use crate::pipeline::layout_document;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

pub struct LayoutExecutor;

impl CommandExecutor for LayoutExecutor {
    type Config = LayoutConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Computing layout for {}...",
            style("📊").cyan(),
            style(config.file.display()).bold()
        );

        let outcome = layout_document(&config.file, &config.layout)
            .wrap_err_with(|| format!("Failed to lay out '{}'", config.file.display()))?;

        let report = match config.output_format {
            OutputFormat::Human => {
                HumanReportGenerator::new(config.max_nodes).generate_report(&outcome)
            }
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&outcome),
        }
        .wrap_err("Failed to generate report")?;

        print!("{report}");
        Ok(())
    }
}

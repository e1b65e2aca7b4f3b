//! Draw command executor

use std::path::{Path, PathBuf};

use console::style;
use indicatif::ParallelProgressIterator;
use miette::{Result, WrapErr};
use rayon::prelude::*;

use crate::config::DrawConfig;
use crate::discovery::discover_documents;
use crate::executors::CommandExecutor;
use crate::pipeline::draw_document;
use crate::progress::ProgressReporter;
use crate::render::RenderStyle;
use crate::utils::string::pluralize;

pub struct DrawExecutor;

impl CommandExecutor for DrawExecutor {
    type Config = DrawConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let render_style = config.render_style();

        match config.file.as_deref() {
            Some(file) => draw_single(&config, &render_style, file),
            None => draw_batch(&config, &render_style),
        }
    }
}

fn draw_one(config: &DrawConfig, render_style: &RenderStyle, path: &Path) -> Result<PathBuf> {
    draw_document(
        path,
        &config.output_dir,
        config.format,
        render_style,
        &config.layout,
    )
    .wrap_err_with(|| format!("Failed to draw '{}'", path.display()))
}

fn draw_single(config: &DrawConfig, render_style: &RenderStyle, file: &Path) -> Result<()> {
    eprintln!(
        "{} Drawing {} as {}...",
        style("📊").cyan(),
        style(file.display()).bold(),
        config.format.extension()
    );

    let written = draw_one(config, render_style, file)?;

    eprintln!(
        "{} Wrote {}",
        style("✓").green(),
        style(written.display()).bold()
    );
    Ok(())
}

fn draw_batch(config: &DrawConfig, render_style: &RenderStyle) -> Result<()> {
    let documents = discover_documents(&config.input_dir)
        .wrap_err("Failed to discover input documents")?;

    if documents.is_empty() {
        eprintln!(
            "{} No *.json documents found in {}",
            style("ℹ").blue(),
            style(config.input_dir.display()).bold()
        );
        return Ok(());
    }

    eprintln!(
        "{} Drawing {} {} from {} as {}...",
        style("📊").cyan(),
        style(documents.len()).bold(),
        pluralize("document", documents.len()),
        style(config.input_dir.display()).bold(),
        config.format.extension()
    );

    let mut progress = ProgressReporter::new();
    let bar = progress.start_batch(documents.len());

    if config.fail_fast {
        let result = documents
            .par_iter()
            .progress_with(bar)
            .try_for_each(|path| draw_one(config, render_style, path).map(|_| ()));
        if result.is_err() {
            progress.abort_batch();
        } else {
            progress.finish_batch(documents.len(), 0);
        }
        return result;
    }

    let (written, failures): (Vec<PathBuf>, Vec<(PathBuf, miette::Report)>) = documents
        .par_iter()
        .progress_with(bar)
        .map(|path| match draw_one(config, render_style, path) {
            Ok(output) => Ok(output),
            Err(e) => Err((path.clone(), e)),
        })
        .partition_map(|result| match result {
            Ok(v) => rayon::iter::Either::Left(v),
            Err(e) => rayon::iter::Either::Right(e),
        });

    progress.finish_batch(written.len(), failures.len());

    for output in &written {
        eprintln!("  {} {}", style("✓").green(), output.display());
    }
    report_failures(&failures);

    if !failures.is_empty() {
        miette::bail!(
            "{} of {} {} failed to draw",
            failures.len(),
            documents.len(),
            pluralize("document", documents.len())
        );
    }

    Ok(())
}

fn report_failures(failures: &[(PathBuf, miette::Report)]) {
    for (path, error) in failures {
        eprintln!(
            "{} Failed to draw '{}':\n{:?}",
            style("⚠").yellow(),
            path.display(),
            error
        );
    }
}

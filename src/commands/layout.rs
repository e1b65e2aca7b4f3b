//! Layout command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{LayoutConfig, LayoutOptions};
use crate::error::DepDrawError;

impl FromCommand for LayoutConfig {
    fn from_command(command: Commands) -> Result<Self, DepDrawError> {
        match command {
            Commands::Layout {
                file,
                layout,
                output_format,
                max_nodes,
            } => LayoutConfig::builder()
                .with_file(file)
                .with_layout(LayoutOptions::try_from(layout)?)
                .with_output_format(output_format)
                .with_max_nodes(max_nodes)
                .build(),
            _ => Err(DepDrawError::ConfigurationError {
                message: "Invalid command type for LayoutConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(LayoutConfig);

/// Execute the layout command for printing a computed layout
pub fn execute_layout_command(command: Commands) -> Result<()> {
    let config = LayoutConfig::from_command(command)
        .wrap_err("Failed to parse layout command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::layout::LayoutExecutor;
    LayoutExecutor::execute(config)
}

//! Draw command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{DrawConfig, LayoutOptions};
use crate::error::DepDrawError;

impl FromCommand for DrawConfig {
    fn from_command(command: Commands) -> Result<Self, DepDrawError> {
        match command {
            Commands::Draw {
                file,
                input_dir,
                output_dir,
                layout,
                render,
                fail_fast,
            } => DrawConfig::builder()
                .with_file(file)
                .with_input_dir(input_dir)
                .with_output_dir(output_dir)
                .with_format(render.format)
                .with_canvas_size(render.size)
                .with_layout(LayoutOptions::try_from(layout)?)
                .with_fail_fast(fail_fast)
                .build(),
            _ => Err(DepDrawError::ConfigurationError {
                message: "Invalid command type for DrawConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(DrawConfig);

/// Execute the draw command for writing diagram images
pub fn execute_draw_command(command: Commands) -> Result<()> {
    let config = DrawConfig::from_command(command)
        .wrap_err("Failed to parse draw command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::draw::DrawExecutor;
    DrawExecutor::execute(config)
}

//! Command implementations for depdraw CLI
//!
//! This module contains the implementations for each CLI command:
//! - draw: Draw one document or a directory of documents as images
//! - layout: Print the computed layout of a document

pub mod draw;
pub mod layout;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Draw { .. } => draw::execute_draw_command(command),
        Commands::Layout { .. } => layout::execute_layout_command(command),
    }
}

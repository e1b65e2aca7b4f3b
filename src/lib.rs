//! # depdraw - Draw Dependency Graphs as Diagrams
//!
//! depdraw reads JSON dependency documents, turns them into a directed graph
//! hanging off a synthetic `"super"` root, and draws that graph. Graphs that
//! form a tree get a deterministic hierarchical layout (radial by default);
//! anything else falls back to a seeded force-directed layout.
//!
//! ## Main Components
//!
//! - **Input**: Parses dependency documents and normalizes node colors
//! - **Graph**: Builds the dependency graph and classifies it as a tree or not
//! - **Layout**: Hierarchical, radial and force-directed placement
//! - **Render**: SVG output, rasterized to PNG or JPEG on request
//! - **Reports**: Human-readable and JSON descriptions of a layout
//!
//! ## Usage
//!
//! ### Example: Laying Out a Document
//!
//! ```
//! use depdraw::graph::{DependencyGraphBuilder, TreeClassifier};
//! use depdraw::input::DependencyDocument;
//! use depdraw::layout::{LayoutSelector, LayoutStrategy};
//!
//! # fn main() -> miette::Result<()> {
//! let document = DependencyDocument::parse_str(
//!     "pipeline.json",
//!     r#"{
//!         "Nodes": [
//!             { "NodeName": "Mass.Group", "Color": "blue",
//!               "SubNodeIndices": ["Mass.Steer"], "OriginalDependencies": [] },
//!             { "NodeName": "Mass.Steer", "Color": "red",
//!               "SubNodeIndices": [], "OriginalDependencies": [] }
//!         ]
//!     }"#,
//! )?;
//!
//! // Step 1: Build the graph; "super" is added above every parentless node
//! let graph = DependencyGraphBuilder::default().build(&document.into_records()?)?;
//! assert!(TreeClassifier::is_tree(&graph));
//!
//! // Step 2: Pick a layout
//! let outcome = LayoutSelector::default().select(&graph)?;
//! assert_eq!(outcome.strategy, LayoutStrategy::Radial);
//! assert_eq!(outcome.positions.len(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Writing an Image
//!
//! ```no_run
//! use std::path::Path;
//!
//! use depdraw::config::LayoutOptions;
//! use depdraw::pipeline::draw_document;
//! use depdraw::render::{ImageFormat, RenderStyle};
//!
//! # fn main() -> miette::Result<()> {
//! let written = draw_document(
//!     Path::new("data/pipeline.json"),
//!     Path::new("out"),
//!     ImageFormat::Png,
//!     &RenderStyle::default(),
//!     &LayoutOptions::default(),
//! )?;
//! println!("wrote {}", written.display());
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod discovery;
pub mod error;
pub mod executors;
pub mod graph;
pub mod input;
pub mod layout;
pub mod pipeline;
pub mod render;
pub mod reports;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}

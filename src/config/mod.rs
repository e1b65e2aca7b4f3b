//! # Configuration Module
//!
//! This module provides configuration structures for all depdraw commands.
//! Each command has its own config module with a builder for easy
//! construction.
//!
//! ## Command Configurations
//!
//! - **DrawConfig**: Configuration for the `draw` command that writes images
//! - **LayoutConfig**: Configuration for the `layout` command that prints a
//!   computed layout
//! - **LayoutOptions**: Graph construction and layout settings shared by both
//!
//! ## Example
//!
//! ```
//! use depdraw::common::ConfigBuilder;
//! use depdraw::config::{DrawConfig, LayoutOptions};
//! use depdraw::layout::TreeStyle;
//! use depdraw::render::ImageFormat;
//!
//! # fn main() -> Result<(), depdraw::error::DepDrawError> {
//! let layout = LayoutOptions::builder()
//!     .tree_style(TreeStyle::TopDown)
//!     .build()?;
//!
//! let config = DrawConfig::builder()
//!     .with_file(Some("graph.json".into()))
//!     .with_input_dir("./data".into())
//!     .with_output_dir("./out".into())
//!     .with_format(ImageFormat::Png)
//!     .with_canvas_size(1200)
//!     .with_layout(layout)
//!     .with_fail_fast(false)
//!     .build()?;
//!
//! assert_eq!(config.render_style().canvas_size, 1200);
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod draw;
pub mod layout;

pub use common::LayoutOptions;
pub use draw::DrawConfig;
pub use layout::LayoutConfig;

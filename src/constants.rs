//! Configuration constants for depdraw
//!
//! This module contains the default values used throughout the application.
//! Most of them can be overridden through command-line flags or the matching
//! `DEPDRAW_*` environment variables.

use std::time::Duration;

/// Graph construction
pub mod graph {
    /// Name of the synthetic root placed above every parentless node
    pub const SUPER_ROOT: &str = "super";
}

/// Hierarchical and force-directed layout defaults
pub mod layout {
    /// Horizontal space given to the root of a top-down tree
    pub const TREE_WIDTH: f64 = 1.0;

    /// Vertical distance between tree levels
    pub const VERTICAL_GAP: f64 = 0.2;

    /// Vertical position of the tree root
    pub const VERTICAL_START: f64 = 0.0;

    /// Horizontal position of the tree root
    pub const X_CENTER: f64 = 0.5;

    /// Optimal node distance of the spring layout
    pub const SPRING_K: f64 = 0.3;

    /// Iteration budget of the spring layout
    pub const SPRING_ITERATIONS: usize = 50;

    /// Seed of the spring layout's initial positions
    pub const SPRING_SEED: u64 = 0;
}

/// Image output
pub mod render {
    /// Edge length of the square canvas, in pixels
    pub const CANVAS_SIZE: u32 = 2400;

    /// Margin around the drawing, in pixels
    pub const PADDING: f64 = 80.0;

    /// Largest node radius, used for small graphs
    pub const MAX_NODE_RADIUS: f64 = 36.0;

    /// Smallest node radius, used for very large graphs
    pub const MIN_NODE_RADIUS: f64 = 6.0;

    pub const FONT_SIZE: f64 = 14.0;

    pub const FONT_FAMILY: &str = "DejaVu Sans, Arial, sans-serif";

    pub const NODE_OPACITY: f64 = 0.7;

    pub const JPEG_QUALITY: u8 = 90;
}

/// Input and output locations
pub mod paths {
    /// Directory scanned for `*.json` documents when no file is given
    pub const DEFAULT_INPUT_DIR: &str = "./data";

    /// Directory images are written to
    pub const DEFAULT_OUTPUT_DIR: &str = "./data";
}

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
}

/// Output formatting configuration
pub mod output {
    /// Default report format of the `layout` command
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default image format of the `draw` command
    pub const DEFAULT_IMAGE_FORMAT: &str = "jpg";
}

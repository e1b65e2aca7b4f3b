//! Common functionality shared across commands

use clap::Args;

use crate::constants::layout::{SPRING_ITERATIONS, SPRING_K, SPRING_SEED};
use crate::constants::render::CANVAS_SIZE;
use crate::graph::{EdgeSource, LabelStyle};
use crate::layout::TreeStyle;
use crate::render::ImageFormat;

/// Graph construction and layout arguments shared by `draw` and `layout`
#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    /// Which declared relationship becomes the graph's edges
    #[arg(
        long,
        value_enum,
        default_value = "sub-nodes",
        env = "DEPDRAW_EDGE_SOURCE"
    )]
    pub edge_source: EdgeSource,

    /// Node label style
    #[arg(long, value_enum, default_value = "full", env = "DEPDRAW_LABELS")]
    pub labels: LabelStyle,

    /// How trees are presented
    #[arg(long, value_enum, default_value = "radial", env = "DEPDRAW_TREE_STYLE")]
    pub tree_style: TreeStyle,

    /// Optimal node distance of the force-directed layout
    #[arg(long, default_value_t = SPRING_K, env = "DEPDRAW_REPULSION")]
    pub repulsion: f64,

    /// Iterations of the force-directed layout
    #[arg(long, default_value_t = SPRING_ITERATIONS, env = "DEPDRAW_ITERATIONS")]
    pub iterations: usize,

    /// Seed of the force-directed layout
    #[arg(long, default_value_t = SPRING_SEED, env = "DEPDRAW_SEED")]
    pub seed: u64,
}

/// Image output arguments of `draw`
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Image format
    #[arg(
        short,
        long,
        value_enum,
        default_value = crate::constants::output::DEFAULT_IMAGE_FORMAT,
        env = "DEPDRAW_FORMAT"
    )]
    pub format: ImageFormat,

    /// Canvas edge length in pixels
    #[arg(long, default_value_t = CANVAS_SIZE, env = "DEPDRAW_SIZE")]
    pub size: u32,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::DepDrawError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::DepDrawError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::DepDrawError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

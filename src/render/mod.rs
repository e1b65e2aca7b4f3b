//! # Render Module
//!
//! Turns a [`LayoutOutcome`] into an image.
//!
//! [`SvgRenderer`] always produces SVG text; [`write_image`] then either
//! stores that text as is or rasterizes it to PNG or JPEG.
//!
//! [`LayoutOutcome`]: crate::layout::LayoutOutcome

mod raster;
mod svg;

pub use raster::write_image;
pub use svg::SvgRenderer;

use crate::constants::render::{
    CANVAS_SIZE, FONT_FAMILY, FONT_SIZE, MAX_NODE_RADIUS, MIN_NODE_RADIUS, NODE_OPACITY, PADDING,
};

/// Output image encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ImageFormat {
    #[default]
    Jpg,
    Png,
    Svg,
}

impl ImageFormat {
    /// File extension, without the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

/// Canvas and glyph dimensions used by [`SvgRenderer`]
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    /// Edge length of the square canvas, in pixels
    pub canvas_size: u32,
    pub padding: f64,
    pub max_node_radius: f64,
    pub min_node_radius: f64,
    pub font_size: f64,
    pub font_family: String,
    pub node_opacity: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            canvas_size: CANVAS_SIZE,
            padding: PADDING,
            max_node_radius: MAX_NODE_RADIUS,
            min_node_radius: MIN_NODE_RADIUS,
            font_size: FONT_SIZE,
            font_family: FONT_FAMILY.to_string(),
            node_opacity: NODE_OPACITY,
        }
    }
}

impl RenderStyle {
    pub fn with_canvas_size(mut self, canvas_size: u32) -> Self {
        self.canvas_size = canvas_size;
        self
    }

    /// Node radius for a graph of `node_count` nodes
    ///
    /// Small graphs get the largest radius; it shrinks with the square root of
    /// the node count and never drops below the minimum.
    pub fn node_radius(&self, node_count: usize) -> f64 {
        let scale = (self.canvas_size as f64 / CANVAS_SIZE as f64).max(0.1);
        let shrink = (16.0 / node_count.max(1) as f64).sqrt().min(1.0);
        (self.max_node_radius * scale * shrink).max(self.min_node_radius * scale)
    }
}

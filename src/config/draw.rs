//! Draw command configuration

use std::path::PathBuf;

use super::LayoutOptions;
use crate::constants::render::PADDING;
use crate::error::DepDrawError;
use crate::render::{ImageFormat, RenderStyle};

#[derive(Debug, Clone)]
pub struct DrawConfig {
    /// Single document to draw; `None` draws every document in `input_dir`
    pub file: Option<PathBuf>,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub format: ImageFormat,
    pub canvas_size: u32,
    pub layout: LayoutOptions,
    pub fail_fast: bool,
}

impl DrawConfig {
    pub fn builder() -> DrawConfigBuilder {
        DrawConfigBuilder::new()
    }

    pub fn render_style(&self) -> RenderStyle {
        RenderStyle::default().with_canvas_size(self.canvas_size)
    }
}

#[derive(Default)]
pub struct DrawConfigBuilder {
    file: Option<Option<PathBuf>>,
    input_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    format: Option<ImageFormat>,
    canvas_size: Option<u32>,
    layout: Option<LayoutOptions>,
    fail_fast: Option<bool>,
}

impl DrawConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, file: Option<PathBuf>) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_input_dir(mut self, input_dir: PathBuf) -> Self {
        self.input_dir = Some(input_dir);
        self
    }

    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = Some(output_dir);
        self
    }

    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_canvas_size(mut self, canvas_size: u32) -> Self {
        self.canvas_size = Some(canvas_size);
        self
    }

    pub fn with_layout(mut self, layout: LayoutOptions) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = Some(fail_fast);
        self
    }
}

fn missing(field: &str) -> DepDrawError {
    DepDrawError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}

impl crate::common::ConfigBuilder for DrawConfigBuilder {
    type Config = DrawConfig;

    fn build(self) -> Result<Self::Config, DepDrawError> {
        let canvas_size = self.canvas_size.ok_or_else(|| missing("canvas_size"))?;
        if f64::from(canvas_size) <= 2.0 * PADDING {
            return Err(DepDrawError::ConfigurationError {
                message: format!(
                    "Canvas size {canvas_size} leaves no room inside the {PADDING}px padding"
                ),
            });
        }

        Ok(DrawConfig {
            file: self.file.ok_or_else(|| missing("file"))?,
            input_dir: self.input_dir.ok_or_else(|| missing("input_dir"))?,
            output_dir: self.output_dir.ok_or_else(|| missing("output_dir"))?,
            format: self.format.ok_or_else(|| missing("format"))?,
            canvas_size,
            layout: self.layout.ok_or_else(|| missing("layout"))?,
            fail_fast: self.fail_fast.ok_or_else(|| missing("fail_fast"))?,
        })
    }
}

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use resvg::tiny_skia::{Color, Pixmap, Transform};
use resvg::usvg;

use super::ImageFormat;
use crate::constants::render::{FONT_FAMILY, JPEG_QUALITY};
use crate::error::DepDrawError;

fn render_error(message: impl Into<String>) -> DepDrawError {
    DepDrawError::RenderError {
        message: message.into(),
    }
}

/// Write an SVG document to `path` in the requested format
///
/// SVG is stored verbatim. PNG and JPEG are rasterized at the document's own
/// size onto a white background.
pub fn write_image(svg: &str, path: &Path, format: ImageFormat) -> Result<(), DepDrawError> {
    match format {
        ImageFormat::Svg => std::fs::write(path, svg).map_err(DepDrawError::from),
        ImageFormat::Png => {
            let pixmap = rasterize(svg)?;
            pixmap
                .save_png(path)
                .map_err(|e| render_error(format!("failed to encode PNG: {e}")))
        }
        ImageFormat::Jpg => {
            let pixmap = rasterize(svg)?;
            encode_jpeg(&pixmap, path)
        }
    }
}

fn rasterize(svg: &str) -> Result<Pixmap, DepDrawError> {
    let mut options = usvg::Options {
        font_family: primary_font(FONT_FAMILY).to_string(),
        ..usvg::Options::default()
    };
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| render_error(format!("failed to parse SVG: {e}")))?;

    let size = tree.size().to_int_size();
    let mut pixmap = Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        render_error(format!(
            "failed to allocate a {}x{} pixmap",
            size.width(),
            size.height()
        ))
    })?;
    pixmap.fill(Color::WHITE);

    resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());
    Ok(pixmap)
}

// The background is opaque, so premultiplied and straight RGBA coincide
fn encode_jpeg(pixmap: &Pixmap, path: &Path) -> Result<(), DepDrawError> {
    let rgba = image::RgbaImage::from_raw(pixmap.width(), pixmap.height(), pixmap.data().to_vec())
        .ok_or_else(|| render_error("pixmap buffer does not match its dimensions"))?;
    let rgb = image::DynamicImage::ImageRgba8(rgba).to_rgb8();

    let file = File::create(path).map_err(DepDrawError::from)?;
    let mut writer = BufWriter::new(file);
    JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY)
        .encode_image(&rgb)
        .map_err(|e| render_error(format!("failed to encode JPEG: {e}")))
}

fn primary_font(families: &str) -> &str {
    families
        .split(',')
        .map(|family| family.trim().trim_matches('"'))
        .find(|family| !family.is_empty())
        .unwrap_or("sans-serif")
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    const SMALL_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="30" viewBox="0 0 40 30">
  <circle cx="20" cy="15" r="10" fill="#0000FF" fill-opacity="0.7"/>
</svg>"##;

    #[test]
    fn test_svg_written_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("graph.svg");

        write_image(SMALL_SVG, &path, ImageFormat::Svg).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), SMALL_SVG);
    }

    #[test]
    fn test_png_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("graph.png");

        write_image(SMALL_SVG, &path, ImageFormat::Png).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_jpeg_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("graph.jpg");

        write_image(SMALL_SVG, &path, ImageFormat::Jpg).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_invalid_svg_is_render_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.png");

        let err = write_image("<svg", &path, ImageFormat::Png).unwrap_err();
        assert!(matches!(err, DepDrawError::RenderError { .. }));
    }

    #[test]
    fn test_primary_font() {
        assert_eq!(primary_font("DejaVu Sans, Arial"), "DejaVu Sans");
        assert_eq!(primary_font("\"Fira Code\""), "Fira Code");
        assert_eq!(primary_font(""), "sans-serif");
    }
}

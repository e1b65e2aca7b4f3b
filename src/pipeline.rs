//! Per-document processing shared by the `draw` and `layout` commands
//!
//! Every stage works on owned data and shares nothing with other documents,
//! so a batch can run one document per rayon task.

use std::path::{Path, PathBuf};

use crate::config::LayoutOptions;
use crate::discovery::output_path_for;
use crate::error::DepDrawError;
use crate::input::load_records;
use crate::layout::LayoutOutcome;
use crate::render::{ImageFormat, RenderStyle, SvgRenderer, write_image};

/// Load a document, build its graph and lay it out
pub fn layout_document(path: &Path, options: &LayoutOptions) -> Result<LayoutOutcome, DepDrawError> {
    let records = load_records(path)?;
    let graph = options.graph_builder().build(&records)?;
    options.selector().select(&graph)
}

/// Render a computed layout to SVG text
pub fn render_svg(outcome: &LayoutOutcome, style: &RenderStyle) -> Result<String, DepDrawError> {
    let mut buffer = Vec::new();
    SvgRenderer::new(style.clone()).render(outcome, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| DepDrawError::RenderError {
        message: format!("SVG output is not valid UTF-8: {e}"),
    })
}

/// Lay out `path` and write the image into `output_dir`, returning its path
pub fn draw_document(
    path: &Path,
    output_dir: &Path,
    format: ImageFormat,
    style: &RenderStyle,
    options: &LayoutOptions,
) -> Result<PathBuf, DepDrawError> {
    let outcome = layout_document(path, options)?;
    let svg = render_svg(&outcome, style)?;

    std::fs::create_dir_all(output_dir)?;
    let output = output_path_for(path, output_dir, format.extension());
    write_image(&svg, &output, format)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::layout::LayoutStrategy;

    const TREE: &str = r#"{
        "Nodes": [
            { "NodeName": "A", "Color": "blue", "SubNodeIndices": ["B"], "OriginalDependencies": [] },
            { "NodeName": "B", "Color": "red", "SubNodeIndices": [], "OriginalDependencies": [] }
        ]
    }"#;

    #[test]
    fn test_layout_document() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tree.json");
        fs::write(&path, TREE).unwrap();

        let outcome = layout_document(&path, &LayoutOptions::default()).unwrap();

        assert_eq!(outcome.strategy, LayoutStrategy::Radial);
        assert_eq!(outcome.positions.len(), 3);
    }

    #[test]
    fn test_draw_document_creates_output_dir() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tree.json");
        fs::write(&path, TREE).unwrap();
        let output_dir = temp.path().join("nested").join("out");

        let written = draw_document(
            &path,
            &output_dir,
            ImageFormat::Svg,
            &RenderStyle::default(),
            &LayoutOptions::default(),
        )
        .unwrap();

        assert_eq!(written, output_dir.join("tree.svg"));
        let svg = fs::read_to_string(written).unwrap();
        assert!(svg.contains(">A</text>"));
    }

    #[test]
    fn test_missing_document() {
        let temp = TempDir::new().unwrap();
        let err = layout_document(&temp.path().join("absent.json"), &LayoutOptions::default())
            .unwrap_err();
        assert!(matches!(err, DepDrawError::FileReadError { .. }));
    }
}

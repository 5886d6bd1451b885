/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Reading and writing paper files.
//!
//! The exchange format is the persisted JSON document, pretty-printed on
//! export. YAML is accepted on load for hand-written papers and edit lists.

use std::fs;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine};
use ieeedoc_core::{Command, Figure, PaperData};

use crate::ProcessorError;

/// Default file name for exported papers.
pub const EXPORT_FILE_NAME: &str = "ieee-paper.json";

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Serialize `paper` as pretty-printed JSON.
pub fn export_json(paper: &PaperData) -> Result<String, ProcessorError> {
    serde_json::to_string_pretty(paper).map_err(|e| ProcessorError::SerializeError(e.to_string()))
}

/// Parse a JSON paper.
///
/// On error nothing is returned, so the caller's current paper stays as it
/// was.
pub fn import_json(content: &str) -> Result<PaperData, ProcessorError> {
    Ok(serde_json::from_str(content)?)
}

/// Load a paper from a JSON or YAML file.
pub fn load_paper(path: &Path) -> Result<PaperData, ProcessorError> {
    let content = fs::read_to_string(path)?;
    if is_yaml(path) {
        Ok(serde_yaml::from_str(&content)?)
    } else {
        import_json(&content)
    }
}

/// Write `paper` to `path` as pretty JSON.
pub fn save_paper(path: &Path, paper: &PaperData) -> Result<(), ProcessorError> {
    let json = export_json(paper)?;
    fs::write(path, json)?;
    tracing::debug!(path = %path.display(), "saved paper");
    Ok(())
}

fn image_mime_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "svg" => Some("image/svg+xml"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// Read an image file into a new figure with the bytes embedded as a data
/// URL and the placeholder caption.
pub fn figure_from_image(id: impl Into<String>, path: &Path) -> Result<Figure, ProcessorError> {
    let mime_type = image_mime_type(path)
        .ok_or_else(|| ProcessorError::UnsupportedImage(path.display().to_string()))?;
    let bytes = fs::read(path)?;
    let src = format!("data:{};base64,{}", mime_type, STANDARD.encode(&bytes));
    Ok(Figure::new(id, src, Figure::NEW_CAPTION))
}

/// Load a list of edit commands. A file holding a single command is
/// accepted too.
pub fn load_commands(path: &Path) -> Result<Vec<Command>, ProcessorError> {
    let content = fs::read_to_string(path)?;
    if is_yaml(path) {
        // Check for syntax errors first
        let _: serde_yaml::Value = serde_yaml::from_str(&content)?;
        if let Ok(commands) = serde_yaml::from_str::<Vec<Command>>(&content) {
            return Ok(commands);
        }
        Ok(vec![serde_yaml::from_str::<Command>(&content)?])
    } else {
        let _: serde_json::Value = serde_json::from_str(&content)?;
        if let Ok(commands) = serde_json::from_str::<Vec<Command>>(&content) {
            return Ok(commands);
        }
        Ok(vec![serde_json::from_str::<Command>(&content)?])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ieeedoc_core::embedded;

    #[test]
    fn malformed_import_is_a_parse_error() {
        match import_json("{\"title\": ") {
            Err(ProcessorError::ParseError(format, _)) => assert_eq!(format, "JSON"),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn export_is_pretty_and_importable() {
        let paper = embedded::template();
        let json = export_json(&paper).unwrap();
        assert!(json.contains("\n  \"title\": \"Your Paper Title Here\""));
        assert_eq!(import_json(&json).unwrap(), paper);
    }

    #[test]
    fn loads_yaml_and_json_command_files() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = dir.path().join("edits.yaml");
        fs::write(&yaml, "- op: set-title\n  title: Grasping\n- op: move-section\n  from: 0\n  to: 2\n")
            .unwrap();
        let commands = load_commands(&yaml).unwrap();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[1], Command::MoveSection { from: 0, to: 2 });

        let json = dir.path().join("edit.json");
        fs::write(&json, r#"{"op": "remove-figure", "id": "f1"}"#).unwrap();
        assert_eq!(
            load_commands(&json).unwrap(),
            vec![Command::RemoveFigure { id: "f1".into() }]
        );
    }

    #[test]
    fn image_becomes_data_url() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("plot.PNG");
        fs::write(&png, [0x89, b'P', b'N', b'G']).unwrap();
        let figure = figure_from_image("f1", &png).unwrap();
        assert_eq!(figure.src, "data:image/png;base64,iVBORw==");
        assert_eq!(figure.caption, Figure::NEW_CAPTION);
        assert_eq!(figure.width, None);

        let txt = dir.path().join("notes.txt");
        fs::write(&txt, "x").unwrap();
        assert!(matches!(
            figure_from_image("f2", &txt),
            Err(ProcessorError::UnsupportedImage(_))
        ));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EXPORT_FILE_NAME);
        let paper = embedded::template().with_title("Saved");
        save_paper(&path, &paper).unwrap();
        assert_eq!(load_paper(&path).unwrap(), paper);
    }
}

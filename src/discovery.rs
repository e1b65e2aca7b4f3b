use std::path::{Path, PathBuf};

use crate::error::DepDrawError;

/// Find every `*.json` document directly inside `dir`, sorted by path
pub fn discover_documents(dir: &Path) -> Result<Vec<PathBuf>, DepDrawError> {
    if !dir.is_dir() {
        return Err(DepDrawError::ConfigurationError {
            message: format!("Input directory '{}' does not exist", dir.display()),
        });
    }

    // The directory itself may contain glob metacharacters such as `[`
    let pattern = format!("{}/*.json", glob::Pattern::escape(&dir.to_string_lossy()));

    let entries = glob::glob(&pattern).map_err(|e| DepDrawError::ConfigurationError {
        message: format!("Invalid input pattern '{pattern}': {e}"),
    })?;

    let mut documents = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => documents.push(path),
            Ok(_) => {}
            Err(e) => {
                eprintln!(
                    "{} Skipping unreadable entry {}: {}",
                    console::style("⚠").yellow(),
                    e.path().display(),
                    e.error()
                );
            }
        }
    }

    documents.sort();
    Ok(documents)
}

/// Output path for a document: `<output_dir>/<basename>.<extension>`
pub fn output_path_for(input: &Path, output_dir: &Path, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "graph".to_string());

    output_dir.join(format!("{stem}.{extension}"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_discovers_only_json_files_sorted() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.json"), "{}").unwrap();
        fs::write(temp.path().join("a.json"), "{}").unwrap();
        fs::write(temp.path().join("notes.txt"), "").unwrap();
        fs::create_dir(temp.path().join("nested.json")).unwrap();

        let found = discover_documents(temp.path()).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_directory_name_with_glob_metacharacters() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("run[1]*?");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("a.json"), "{}").unwrap();

        let found = discover_documents(&dir).unwrap();

        assert_eq!(found, vec![dir.join("a.json")]);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let err = discover_documents(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, DepDrawError::ConfigurationError { .. }));
    }

    #[test]
    fn test_output_path_for() {
        let out = output_path_for(
            Path::new("/in/PrePhysics.json"),
            Path::new("/out"),
            "jpg",
        );
        assert_eq!(out, PathBuf::from("/out/PrePhysics.jpg"));
    }
}

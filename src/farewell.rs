/// Reads the farewell poem fully into memory at startup so it is always
/// available as the final exit message, however the session ends.
pub fn load_farewell(path: &std::path::Path) -> Result<String, FarewellError> {
    std::fs::read_to_string(path).map_err(|source| FarewellError::Io {
        source,
        path: path.to_path_buf(),
    })
}

#[derive(Debug)]
pub enum FarewellError {
    Io {
        source: std::io::Error,
        path: std::path::PathBuf,
    },
}

impl std::fmt::Display for FarewellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FarewellError::Io {
                source: error,
                path,
            } => {
                write!(
                    f,
                    "Failed to read farewell file '{}': {}",
                    path.display(),
                    error
                )
            }
        }
    }
}

impl std::error::Error for FarewellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FarewellError::Io { source: error, .. } => Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FarewellError, load_farewell};

    #[test]
    fn when_the_file_exists_then_its_full_contents_are_returned() {
        let path = std::env::temp_dir().join(format!("skywatch-farewell-{}", std::process::id()));
        std::fs::write(&path, "Oh! I have slipped\nthe surly bonds of Earth\n")
            .expect("temp file should be writable");

        let poem = load_farewell(&path).expect("Test should pass");
        assert!(poem.starts_with("Oh! I have slipped"));
        assert!(poem.ends_with("of Earth\n"));

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn when_the_file_is_missing_then_an_io_error_is_returned() {
        let path = std::path::Path::new("/nonexistent/skywatch-poem.txt");
        assert!(matches!(
            load_farewell(path),
            Err(FarewellError::Io { .. })
        ));
    }
}

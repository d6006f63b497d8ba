use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a chromosome description file.
pub fn read_description(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read chromosome description {}", path.display()))
}

/// Write `text` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            println!("{text}");
            Ok(())
        }
    }
}

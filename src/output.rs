use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const INDEX_FILE: &str = "index.html";

/// Writes `index.html` under `output_dir`, creating the directory first.
pub fn write_site(output_dir: &Path, html: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(INDEX_FILE);
    fs::write(&path, html)?;
    log::debug!("Wrote {} bytes to {}", html.len(), path.display());
    Ok(path)
}

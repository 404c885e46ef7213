// src/file.rs

use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use crate::config::consts::EXPORT_EXT;
use crate::stamp::RunStamp;

/// `{dir}/{base}_{stamp}.csv`
pub fn export_path(dir: &Path, base_filename: &str, stamp: &RunStamp) -> PathBuf {
    let stamp = stamp.to_string();
    dir.join(join!(base_filename, "_", &stamp, ".", EXPORT_EXT))
}

/// `{provider}_{content_type}_streams`, with the provider name made file-safe.
pub fn export_base_name(provider_name: &str, content_type: &str) -> String {
    let stem = crate::core::sanitize::sanitize_file_stem(provider_name);
    join!(&stem, "_", content_type, "_streams")
}

/// Ensure the parent dir exists, then create/truncate the file.
pub fn create_table(path: &Path) -> std::io::Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(BufWriter::new(File::create(path)?))
}

pub fn ensure_directory(dir: &Path) -> std::io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

//! Writes the placeholder blob to one file per nominal size.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::blob::IconBlob;
use crate::config::OutputConfig;
use crate::layout::icon_path;

/// Lines printed once every icon has been written.
pub const COMPLETION_LINES: [&str; 2] = [
    "All placeholder icons created successfully!",
    "The extension is now ready to load in Chrome.",
];

/// State of one icon file on disk relative to the placeholder blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconStatus {
    /// File exists and matches the placeholder byte for byte.
    Ready,
    /// No file at the expected path.
    Missing,
    /// File exists with different content.
    Mismatch { actual_len: u64 },
}

/// Verification result for a single size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconReport {
    pub size: u32,
    pub path: PathBuf,
    pub status: IconStatus,
}

pub struct IconWriter {
    blob: IconBlob,
    output: OutputConfig,
}

impl IconWriter {
    pub fn new(blob: IconBlob, output: OutputConfig) -> Self {
        Self { blob, output }
    }

    pub fn blob(&self) -> &IconBlob {
        &self.blob
    }

    /// Write the placeholder for one nominal size and report it on `out`.
    ///
    /// The parent directory must exist. Returns the path written.
    pub fn create_icon(&self, size: u32, out: &mut impl Write) -> Result<PathBuf> {
        let path = icon_path(&self.output.dir, size);

        {
            let mut file = File::create(&path)
                .with_context(|| format!("Failed to create icon file: {}", path.display()))?;
            file.write_all(self.blob.as_bytes())
                .with_context(|| format!("Failed to write icon file: {}", path.display()))?;
        }

        debug!(size, path = %path.display(), bytes = self.blob.len(), "Wrote icon");
        writeln!(out, "Created {}", path.display())?;
        Ok(path)
    }

    /// Write every configured size in order, then the completion lines.
    ///
    /// Stops at the first failure; sizes after it are not attempted.
    pub fn run(&self, out: &mut impl Write) -> Result<Vec<PathBuf>> {
        if self.output.create_dir {
            fs::create_dir_all(&self.output.dir).with_context(|| {
                format!(
                    "Failed to create output directory: {}",
                    self.output.dir.display()
                )
            })?;
        }

        let mut written = Vec::with_capacity(self.output.sizes.len());
        for &size in &self.output.sizes {
            written.push(self.create_icon(size, out)?);
        }

        info!(
            count = written.len(),
            dir = %self.output.dir.display(),
            "Placeholder icons written"
        );

        for line in COMPLETION_LINES {
            writeln!(out, "{line}")?;
        }
        out.flush()?;

        Ok(written)
    }

    /// Compare each configured icon on disk against the placeholder.
    pub fn verify(&self) -> Result<Vec<IconReport>> {
        self.output
            .sizes
            .iter()
            .map(|&size| {
                let path = icon_path(&self.output.dir, size);
                let status = self.check_icon(&path)?;
                debug!(size, path = %path.display(), status = ?status, "Checked icon");
                Ok(IconReport { size, path, status })
            })
            .collect()
    }

    fn check_icon(&self, path: &Path) -> Result<IconStatus> {
        let contents = match fs::read(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(IconStatus::Missing),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read icon file: {}", path.display()));
            }
        };

        if contents == self.blob.as_bytes() {
            Ok(IconStatus::Ready)
        } else {
            Ok(IconStatus::Mismatch {
                actual_len: contents.len() as u64,
            })
        }
    }
}

#[cfg(test)]
#[path = "writer_test.rs"]
mod tests;

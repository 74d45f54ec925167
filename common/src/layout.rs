//! Output file naming.

use std::path::{Path, PathBuf};

/// Nominal icon sizes a browser extension manifest usually references.
pub const DEFAULT_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Directory the icons are written to, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "icons";

/// File name for an icon of the given nominal size, e.g. `icon16.png`.
pub fn icon_filename(size: u32) -> String {
    format!("icon{size}.png")
}

/// Full output path for an icon of the given nominal size.
pub fn icon_path(dir: impl AsRef<Path>, size: u32) -> PathBuf {
    dir.as_ref().join(icon_filename(size))
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;

//! Output naming and directory preparation
//!
//! Drawables land in `res/drawable-<tier>/` beneath the working directory,
//! mirroring an Android project's resource layout.

use std::fs;
use std::io;
use std::path::Path;

use crate::density::DENSITY_TIERS;

/// Root directory that holds the per-tier drawable directories
pub const OUTPUT_ROOT: &str = "res";

/// Resolve the raster file name for one input
///
/// Prefers the explicit output name when given, otherwise the input's file
/// name. A `.png` suffix is kept as-is, a `.svg` suffix is swapped for
/// `.png`, and any other name gets `.png` appended.
pub fn resolve_output_name(explicit: Option<&str>, input: &Path) -> String {
    let name = match explicit {
        Some(name) => name.to_string(),
        None => input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };

    if name.ends_with(".png") {
        name
    } else if let Some(stem) = name.strip_suffix(".svg") {
        format!("{}.png", stem)
    } else {
        format!("{}.png", name)
    }
}

/// Create the drawable directory tree under `base`
///
/// Creates `res/drawable-<tier>` for every density tier. When `res/`
/// already exists nothing is created at all; missing tier subdirectories
/// are not backfilled.
pub fn prepare_directories(base: &Path) -> io::Result<()> {
    let root = base.join(OUTPUT_ROOT);
    if root.exists() {
        return Ok(());
    }
    for tier in &DENSITY_TIERS {
        fs::create_dir_all(root.join(tier.dir_name()))?;
    }
    Ok(())
}

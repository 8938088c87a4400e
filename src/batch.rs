//! Batch driver: renders the fixed icon size list to disk.
//!
//! One render-and-write pass per size, in order, fail-fast. Files already
//! written before a failure are left in place.

use crate::error::Result;
use crate::icon::IconBadge;
use crate::output::PngEncoder;
use std::fs;
use std::path::{Path, PathBuf};

/// The icon sizes the browser manifest declares, smallest first.
pub const ICON_SIZES: [u32; 5] = [16, 32, 48, 96, 128];

/// Default output directory, relative to the extension root.
pub const OUTPUT_DIR: &str = "public/icon";

/// Render every size in `sizes` and write `<size>.png` files into
/// `output_dir`, creating the directory (and parents) if absent.
///
/// Existing files of the same name are overwritten, so re-running is
/// idempotent. Progress is printed per icon; the returned paths are the
/// files written, in input order.
///
/// # Errors
///
/// Returns an error on the first render or I/O failure. No cleanup is
/// attempted for files written earlier in the same run.
pub fn generate_all(sizes: &[u32], output_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity(sizes.len());

    for &size in sizes {
        println!("Rendering {size}x{size} icon...");

        let canvas = IconBadge::new(size).render()?;
        let path = output_dir.join(format!("{size}.png"));
        PngEncoder::write_to_file(&canvas, &path)?;

        println!("  wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}

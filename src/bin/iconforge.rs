//! iconforge - generate the toolbar icon set.
//!
//! Renders the badge at every manifest size and writes the PNGs into
//! `public/icon/`. No flags: the size list and output directory are fixed.

use iconforge::batch::{generate_all, ICON_SIZES, OUTPUT_DIR};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Generating toolbar icon set...");

    let written = generate_all(&ICON_SIZES, Path::new(OUTPUT_DIR))?;

    println!();
    println!("All icons generated. Saved in: {OUTPUT_DIR}/");
    for path in &written {
        println!("  - {}", path.display());
    }

    Ok(())
}

//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate. Icons are written as
//! RGBA8 so the transparent background survives losslessly.

use crate::canvas::Canvas;
use crate::error::Result;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// PNG encoder for canvas output.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a canvas to a PNG file, overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(canvas: &Canvas, path: P) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);

        let mut encoder = png::Encoder::new(writer, canvas.width(), canvas.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(canvas.pixels())?;

        Ok(())
    }

    /// Encode a canvas to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(canvas: &Canvas) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();

        {
            let mut encoder = png::Encoder::new(&mut buffer, canvas.width(), canvas.height());
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder.write_header()?;
            writer.write_image_data(canvas.pixels())?;
        }

        Ok(buffer)
    }
}

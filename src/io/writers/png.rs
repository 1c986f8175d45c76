use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::RgbaImage;
use image::codecs::png::PngEncoder;

use crate::error::Result;
use crate::io::writers::ensure_parent_dir;

/// Encode `img` as PNG at `output`, whatever the file extension says.
pub fn write_rgba_png(output: &Path, img: &RgbaImage) -> Result<()> {
    ensure_parent_dir(output)?;
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    img.write_with_encoder(PngEncoder::new(&mut writer))?;
    writer.flush()?;
    Ok(())
}

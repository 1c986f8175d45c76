use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::RgbaImage;
use tracing::debug;

use crate::error::{Error, Result};
use crate::io::writers::ensure_parent_dir;

/// Bundle every image into one `.ico` container, in the given order.
pub fn write_ico(output: &Path, images: &[RgbaImage]) -> Result<()> {
    if images.is_empty() {
        return Err(Error::Processing(format!(
            "no images to bundle into {}",
            output.display()
        )));
    }

    let mut icon_dir = IconDir::new(ResourceType::Icon);
    for img in images {
        let (width, height) = img.dimensions();
        debug!("ico entry {}x{}", width, height);
        let image = IconImage::from_rgba_data(width, height, img.as_raw().clone());
        icon_dir.add_entry(IconDirEntry::encode(&image)?);
    }

    ensure_parent_dir(output)?;
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    icon_dir.write(&mut writer)?;
    writer.flush()?;
    Ok(())
}

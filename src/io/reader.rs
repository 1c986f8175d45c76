use std::path::Path;

use image::{DynamicImage, ImageReader};
use tracing::debug;

use crate::error::{Error, Result};

/// Decode the image at `input`.
///
/// A missing file is reported as `Error::MissingInput` so callers can tell
/// it apart from decode failures.
pub fn open_image(input: &Path) -> Result<DynamicImage> {
    if !input.exists() {
        return Err(Error::MissingInput(input.to_path_buf()));
    }
    let img = ImageReader::open(input)?.with_guessed_format()?.decode()?;
    debug!(
        "Loaded {} ({}x{}, {:?})",
        input.display(),
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img)
}

use image::{DynamicImage, RgbaImage};
use tracing::{debug, info};

use crate::core::params::BorderParams;
use crate::core::processing::composite::{circular, compose_border};
use crate::core::processing::resize::{crop_to_square, resize_rgba, square_resize};
use crate::error::{Error, Result};
use crate::types::ResampleFilter;

/// Content after the optional square crop and resize, ready for masking.
pub fn prepare_content(img: RgbaImage, params: &BorderParams) -> Result<RgbaImage> {
    if !params.square_crop {
        if params.size.is_some() {
            debug!("size is only applied together with square_crop; ignoring");
        }
        return Ok(img);
    }
    let square = crop_to_square(&img);
    match params.size {
        Some(size) => resize_rgba(&square, size, size, params.filter),
        None => Ok(square),
    }
}

/// Normalize to RGBA, prepare the content and surround it with a rounded ring.
pub fn border_pipeline(img: DynamicImage, params: &BorderParams) -> Result<RgbaImage> {
    params.validate()?;
    let rgba = img.to_rgba8();
    let content = prepare_content(rgba, params)?;
    info!(
        "Content {}x{}, border {}px, corner radius {}px, color {}",
        content.width(),
        content.height(),
        params.border_width,
        params.corner_radius,
        params.border_color
    );
    compose_border(
        &content,
        params.border_width,
        params.corner_radius,
        params.border_color,
    )
}

/// Center-crop, resample to `size x size` and cut to the inscribed circle.
pub fn circular_icon(img: &RgbaImage, size: u32, filter: ResampleFilter) -> Result<RgbaImage> {
    if size == 0 {
        return Err(Error::ZeroSize { size });
    }
    let square = square_resize(img, size, filter)?;
    circular(square)
}

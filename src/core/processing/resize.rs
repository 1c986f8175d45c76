use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::{RgbaImage, imageops};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::ResampleFilter;

/// Offsets and side length of the centred square inside `width x height`.
pub fn center_square(width: u32, height: u32) -> (u32, u32, u32) {
    let side = width.min(height);
    ((width - side) / 2, (height - side) / 2, side)
}

/// Center-crop to a square whose side is the shorter image dimension.
pub fn crop_to_square(img: &RgbaImage) -> RgbaImage {
    let (width, height) = img.dimensions();
    let (left, top, side) = center_square(width, height);
    if left == 0 && top == 0 && side == width && side == height {
        return img.clone();
    }
    debug!(
        "Cropping {}x{} to {}x{} at ({}, {})",
        width, height, side, side, left, top
    );
    imageops::crop_imm(img, left, top, side, side).to_image()
}

fn resize_alg(filter: ResampleFilter) -> ResizeAlg {
    match filter {
        ResampleFilter::Nearest => ResizeAlg::Nearest,
        ResampleFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
        ResampleFilter::CatmullRom => ResizeAlg::Convolution(FilterType::CatmullRom),
        ResampleFilter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
    }
}

/// Resample an RGBA image to exactly `target_width x target_height`.
pub fn resize_rgba(
    img: &RgbaImage,
    target_width: u32,
    target_height: u32,
    filter: ResampleFilter,
) -> Result<RgbaImage> {
    if target_width == 0 || target_height == 0 {
        return Err(Error::ZeroSize {
            size: target_width.min(target_height),
        });
    }
    let (width, height) = img.dimensions();
    if (width, height) == (target_width, target_height) {
        return Ok(img.clone());
    }

    info!(
        "Resizing {}x{} -> {}x{} ({})",
        width, height, target_width, target_height, filter
    );

    let resize_options = ResizeOptions::new().resize_alg(resize_alg(filter));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(width, height, img.as_raw().clone(), PixelType::U8x4)?;
    let mut dst_image = Image::new(target_width, target_height, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    RgbaImage::from_raw(target_width, target_height, dst_image.into_vec()).ok_or_else(|| {
        Error::Processing(format!(
            "resized buffer does not fit {}x{}",
            target_width, target_height
        ))
    })
}

/// Center-crop to a square, then resample it to `size x size`.
pub fn square_resize(img: &RgbaImage, size: u32, filter: ResampleFilter) -> Result<RgbaImage> {
    let square = crop_to_square(img);
    resize_rgba(&square, size, size, filter)
}

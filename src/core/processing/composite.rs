//! Mask-driven compositing: paste-through-mask, alpha replacement, and the
//! rounded border compositor built on top of them.
use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::core::processing::mask::{CLEAR, Mask, OPAQUE};
use crate::error::{Error, Result};
use crate::types::{BorderColor, Bounds, Shape};

fn blend_channel(src: u8, dst: u8, m: u8) -> u8 {
    let m = m as u32;
    ((src as u32 * m + dst as u32 * (255 - m) + 127) / 255) as u8
}

/// Paste `layer` onto `canvas` at `(x, y)`, weighting each pixel by `mask`.
///
/// Every channel, alpha included, is blended as
/// `src * m + dst * (255 - m)`; a binary mask therefore replaces or keeps.
/// Pixels falling outside the canvas are skipped.
pub fn paste_masked(
    canvas: &mut RgbaImage,
    layer: &RgbaImage,
    (x, y): (u32, u32),
    mask: &Mask,
) -> Result<()> {
    if layer.dimensions() != (mask.width(), mask.height()) {
        return Err(Error::Processing(format!(
            "mask {}x{} does not match layer {}x{}",
            mask.width(),
            mask.height(),
            layer.width(),
            layer.height()
        )));
    }
    let (cw, ch) = canvas.dimensions();
    for (lx, ly, src) in layer.enumerate_pixels() {
        let (tx, ty) = (x + lx, y + ly);
        if tx >= cw || ty >= ch {
            continue;
        }
        match mask.get(lx, ly) {
            CLEAR => {}
            OPAQUE => canvas.put_pixel(tx, ty, *src),
            m => {
                let dst = canvas.get_pixel_mut(tx, ty);
                for c in 0..4 {
                    dst.0[c] = blend_channel(src.0[c], dst.0[c], m);
                }
            }
        }
    }
    Ok(())
}

/// Replace the alpha channel of `img` with `mask`, leaving colour untouched.
pub fn apply_alpha_mask(img: &mut RgbaImage, mask: &Mask) -> Result<()> {
    if img.dimensions() != (mask.width(), mask.height()) {
        return Err(Error::Processing(format!(
            "mask {}x{} does not match image {}x{}",
            mask.width(),
            mask.height(),
            img.width(),
            img.height()
        )));
    }
    for (x, y, px) in img.enumerate_pixels_mut() {
        px.0[3] = mask.get(x, y);
    }
    Ok(())
}

/// Copy of `img` that is fully transparent wherever `mask` is clear.
pub fn masked_copy(img: &RgbaImage, mask: &Mask) -> Result<RgbaImage> {
    let mut out = RgbaImage::from_pixel(img.width(), img.height(), Rgba([0, 0, 0, 0]));
    paste_masked(&mut out, img, (0, 0), mask)?;
    Ok(out)
}

/// Masks that drive one border composition.
#[derive(Debug, Clone)]
pub struct BorderMasks {
    /// Rounded shape of the whole canvas, radius `corner_radius + border_width`
    pub outer: Mask,
    /// Content area inside the ring, radius `corner_radius`
    pub inner: Mask,
    /// `outer` minus `inner`
    pub ring: Mask,
    /// Rounded shape of the content itself
    pub content: Mask,
}

impl BorderMasks {
    pub fn build(
        content_width: u32,
        content_height: u32,
        border_width: u32,
        corner_radius: u32,
    ) -> Result<Self> {
        let overflow = |arg: &'static str, value: u32| Error::InvalidArgument {
            arg,
            value: value.to_string(),
        };
        let both_sides = border_width
            .checked_mul(2)
            .ok_or_else(|| overflow("border_width", border_width))?;
        let width = content_width
            .checked_add(both_sides)
            .ok_or_else(|| overflow("border_width", border_width))?;
        let height = content_height
            .checked_add(both_sides)
            .ok_or_else(|| overflow("border_width", border_width))?;
        let outer_radius = corner_radius
            .checked_add(border_width)
            .ok_or_else(|| overflow("corner_radius", corner_radius))?;

        let outer = Mask::rounded_rect(width, height, outer_radius);
        let inner = Mask::filled(
            width,
            height,
            Shape::RoundedRect {
                bounds: Bounds::inset(width, height, border_width),
                radius: corner_radius,
            },
        );
        let ring = Mask::ring(&outer, &inner)?;
        let content = Mask::rounded_rect(content_width, content_height, corner_radius);

        debug!(
            "Border masks {}x{}: ring={}px content={}px",
            width,
            height,
            ring.count_opaque(),
            content.count_opaque()
        );

        Ok(Self {
            outer,
            inner,
            ring,
            content,
        })
    }
}

/// Surround `content` with a rounded ring of `color`.
///
/// The result is `content + 2 * border_width` in each dimension: the ring is
/// painted through the ring mask, then the content, rounded with
/// `corner_radius`, is pasted at `(border_width, border_width)`. Everything
/// outside both shapes stays transparent.
pub fn compose_border(
    content: &RgbaImage,
    border_width: u32,
    corner_radius: u32,
    color: BorderColor,
) -> Result<RgbaImage> {
    let (cw, ch) = content.dimensions();
    let masks = BorderMasks::build(cw, ch, border_width, corner_radius)?;
    let (width, height) = (masks.ring.width(), masks.ring.height());

    let mut result = RgbaImage::from_pixel(width, height, BorderColor::TRANSPARENT.to_rgba());

    let border_layer = RgbaImage::from_pixel(width, height, color.to_rgba());
    paste_masked(&mut result, &border_layer, (0, 0), &masks.ring)?;

    let rounded = masked_copy(content, &masks.content)?;
    paste_masked(
        &mut result,
        &rounded,
        (border_width, border_width),
        &masks.content,
    )?;

    Ok(result)
}

/// Circular crop: the alpha channel becomes the inscribed-ellipse mask.
pub fn circular(mut img: RgbaImage) -> Result<RgbaImage> {
    let mask = Mask::inscribed_ellipse(img.width(), img.height());
    apply_alpha_mask(&mut img, &mask)?;
    Ok(img)
}

//! Single-channel opacity masks and the filled shapes drawn into them.
//!
//! Rasterization is binary: a pixel is sampled at its centre
//! `(x + 0.5, y + 0.5)` and is either fully inside a shape (255) or fully
//! outside (0).
use ndarray::{Array2, Zip};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{Bounds, Shape};

pub const OPAQUE: u8 = 255;
pub const CLEAR: u8 = 0;

/// Grayscale mask laid out as `(rows, cols)`, same as the image it drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    data: Array2<u8>,
}

impl Mask {
    /// A fully transparent `width x height` mask.
    pub fn zeros(width: u32, height: u32) -> Self {
        Self {
            data: Array2::zeros((height as usize, width as usize)),
        }
    }

    /// Draw one filled shape into a zeroed `width x height` canvas.
    pub fn filled(width: u32, height: u32, shape: Shape) -> Self {
        let mut mask = Self::zeros(width, height);
        match shape {
            Shape::RoundedRect { bounds, radius } => mask.fill_rounded_rect(bounds, radius),
            Shape::InscribedEllipse => mask.fill_inscribed_ellipse(),
        }
        mask
    }

    /// Rounded rectangle covering the whole canvas.
    pub fn rounded_rect(width: u32, height: u32, radius: u32) -> Self {
        Self::filled(
            width,
            height,
            Shape::RoundedRect {
                bounds: Bounds::full(width, height),
                radius,
            },
        )
    }

    /// Ellipse inscribed in the canvas; a circle when the canvas is square.
    pub fn inscribed_ellipse(width: u32, height: u32) -> Self {
        Self::filled(width, height, Shape::InscribedEllipse)
    }

    /// Pixels covered by `outer` but not by `inner`.
    pub fn ring(outer: &Mask, inner: &Mask) -> Result<Mask> {
        if outer.data.dim() != inner.data.dim() {
            return Err(Error::Processing(format!(
                "ring masks differ in size: outer {}x{}, inner {}x{}",
                outer.width(),
                outer.height(),
                inner.width(),
                inner.height()
            )));
        }
        let data = Zip::from(&outer.data)
            .and(&inner.data)
            .par_map_collect(|&o, &i| if o > CLEAR && i == CLEAR { OPAQUE } else { CLEAR });
        Ok(Self { data })
    }

    pub fn width(&self) -> u32 {
        self.data.ncols() as u32
    }

    pub fn height(&self) -> u32 {
        self.data.nrows() as u32
    }

    /// Value at column `x`, row `y`.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[[y as usize, x as usize]]
    }

    pub fn count_opaque(&self) -> usize {
        self.data.iter().filter(|&&v| v > CLEAR).count()
    }

    fn fill_rounded_rect(&mut self, bounds: Bounds, radius: u32) {
        if bounds.x1 < bounds.x0 || bounds.y1 < bounds.y0 {
            return;
        }
        // Continuous box spanned by the inclusive pixel bounds
        let left = bounds.x0 as f64;
        let top = bounds.y0 as f64;
        let right = bounds.x1 as f64 + 1.0;
        let bottom = bounds.y1 as f64 + 1.0;
        let r = (radius as f64).min((right - left) / 2.0).min((bottom - top) / 2.0);

        debug!(
            "rounded rect [{}, {}]x[{}, {}] radius={} (requested {})",
            bounds.x0, bounds.x1, bounds.y0, bounds.y1, r, radius
        );

        Zip::indexed(&mut self.data).par_for_each(|(row, col), v| {
            let px = col as f64 + 0.5;
            let py = row as f64 + 0.5;
            if px < left || px > right || py < top || py > bottom {
                return;
            }
            // Nearest point of the box shrunk by r; corners become arcs of radius r
            let cx = px.clamp(left + r, right - r);
            let cy = py.clamp(top + r, bottom - r);
            let (dx, dy) = (px - cx, py - cy);
            if dx * dx + dy * dy <= r * r {
                *v = OPAQUE;
            }
        });
    }

    fn fill_inscribed_ellipse(&mut self) {
        let a = self.width() as f64 / 2.0;
        let b = self.height() as f64 / 2.0;
        if a == 0.0 || b == 0.0 {
            return;
        }
        Zip::indexed(&mut self.data).par_for_each(|(row, col), v| {
            let nx = (col as f64 + 0.5 - a) / a;
            let ny = (row as f64 + 0.5 - b) / b;
            if nx * nx + ny * ny <= 1.0 {
                *v = OPAQUE;
            }
        });
    }
}

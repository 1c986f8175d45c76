//! Shared types used across roundel.
//! Includes the border colour (`BorderColor`), the resampling filter choice
//! (`ResampleFilter`) and the shape descriptors consumed by the mask builder.
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// An RGBA colour, 8 bits per channel.
///
/// Serialized as a four element array (`[r, g, b, a]`). Parsed from the
/// command line as `#RRGGBB`, `#RRGGBBAA`, or `r,g,b[,a]`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct BorderColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl BorderColor {
    pub const WHITE: BorderColor = BorderColor::rgba(255, 255, 255, 255);
    pub const TRANSPARENT: BorderColor = BorderColor::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }
}

impl Default for BorderColor {
    fn default() -> Self {
        BorderColor::WHITE
    }
}

impl From<[u8; 4]> for BorderColor {
    fn from(c: [u8; 4]) -> Self {
        BorderColor::rgba(c[0], c[1], c[2], c[3])
    }
}

impl From<BorderColor> for [u8; 4] {
    fn from(c: BorderColor) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

impl FromStr for BorderColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidArgument {
            arg: "color",
            value: s.to_string(),
        };
        let trimmed = s.trim();

        if let Some(hex) = trimmed.strip_prefix('#') {
            if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
                return Err(invalid());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
            let a = if hex.len() == 8 { channel(6)? } else { 255 };
            return Ok(BorderColor::rgba(channel(0)?, channel(2)?, channel(4)?, a));
        }

        let parts = trimmed
            .split(',')
            .map(|p| p.trim().parse::<u8>().map_err(|_| invalid()))
            .collect::<Result<Vec<u8>, Error>>()?;
        match parts.as_slice() {
            [r, g, b] => Ok(BorderColor::rgba(*r, *g, *b, 255)),
            [r, g, b, a] => Ok(BorderColor::rgba(*r, *g, *b, *a)),
            _ => Err(invalid()),
        }
    }
}

impl std::fmt::Display for BorderColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// Resampling filter used when scaling content down to a target size.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    Nearest,
    Bilinear,
    CatmullRom,
    #[default]
    Lanczos3,
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResampleFilter::Nearest => write!(f, "Nearest"),
            ResampleFilter::Bilinear => write!(f, "Bilinear"),
            ResampleFilter::CatmullRom => write!(f, "CatmullRom"),
            ResampleFilter::Lanczos3 => write!(f, "Lanczos3"),
        }
    }
}

/// Inclusive pixel bounds `[x0, x1] x [y0, y1]`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Bounds {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl Bounds {
    /// Bounds covering a whole `width x height` canvas.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x0: 0,
            y0: 0,
            x1: width.saturating_sub(1),
            y1: height.saturating_sub(1),
        }
    }

    /// Bounds of a canvas shrunk by `inset` pixels on every side.
    pub fn inset(width: u32, height: u32, inset: u32) -> Self {
        Self {
            x0: inset,
            y0: inset,
            x1: width.saturating_sub(inset.saturating_add(1)),
            y1: height.saturating_sub(inset.saturating_add(1)),
        }
    }
}

/// A filled shape rasterized by the mask builder.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Shape {
    /// Rounded rectangle with the given corner radius in pixels.
    RoundedRect { bounds: Bounds, radius: u32 },
    /// The largest ellipse that fits the whole canvas.
    InscribedEllipse,
}

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{BorderColor, ResampleFilter};

/// Border parameters suitable for config files and presets.
///
/// `Default` reproduces the stock asset styling: a 15px opaque white ring
/// around content with 25px corners, no square crop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderParams {
    /// Ring thickness in pixels
    pub border_width: u32,
    /// Corner radius of the content; the outer edge uses `corner_radius + border_width`
    pub corner_radius: u32,
    pub border_color: BorderColor,
    /// Center-crop the content to a square before masking
    pub square_crop: bool,
    /// Side length after square crop; None keeps the cropped size
    pub size: Option<u32>,
    pub filter: ResampleFilter,
}

impl Default for BorderParams {
    fn default() -> Self {
        Self {
            border_width: 15,
            corner_radius: 25,
            border_color: BorderColor::WHITE,
            square_crop: false,
            size: None,
            filter: ResampleFilter::Lanczos3,
        }
    }
}

impl BorderParams {
    pub fn validate(&self) -> Result<()> {
        if let Some(size) = self.size {
            if size == 0 {
                return Err(Error::ZeroSize { size });
            }
        }
        Ok(())
    }
}

/// One standalone circular PNG in an icon set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconTarget {
    /// Output path, relative to the icon set root
    pub path: PathBuf,
    pub size: u32,
}

impl IconTarget {
    pub fn new(path: impl Into<PathBuf>, size: u32) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }
}

/// Multi-resolution `.ico` bundled alongside the PNGs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcoBundle {
    pub path: PathBuf,
    pub sizes: Vec<u32>,
}

impl Default for IcoBundle {
    fn default() -> Self {
        Self {
            path: PathBuf::from("src/app/favicon.ico"),
            sizes: vec![32, 16],
        }
    }
}

/// Icon set description: every circular output generated from one logo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconSetParams {
    pub targets: Vec<IconTarget>,
    pub ico: IcoBundle,
    pub filter: ResampleFilter,
}

impl Default for IconSetParams {
    fn default() -> Self {
        Self {
            targets: vec![
                IconTarget::new("public/favicon-16x16.png", 16),
                IconTarget::new("public/favicon-32x32.png", 32),
                IconTarget::new("public/favicon-96x96.png", 96),
                IconTarget::new("public/apple-touch-icon.png", 180),
                IconTarget::new("public/web-app-manifest-192x192.png", 192),
                IconTarget::new("public/web-app-manifest-512x512.png", 512),
                IconTarget::new("src/app/icon.png", 512),
            ],
            ico: IcoBundle::default(),
            filter: ResampleFilter::Lanczos3,
        }
    }
}

impl IconSetParams {
    pub fn validate(&self) -> Result<()> {
        let mut sizes = self
            .targets
            .iter()
            .map(|t| t.size)
            .chain(self.ico.sizes.iter().copied());
        if let Some(size) = sizes.find(|&s| s == 0) {
            return Err(Error::ZeroSize { size });
        }
        // ICO directory entries cannot describe anything larger
        if let Some(size) = self.ico.sizes.iter().find(|&&s| s > 256) {
            return Err(Error::InvalidArgument {
                arg: "ico.sizes",
                value: size.to_string(),
            });
        }
        Ok(())
    }
}

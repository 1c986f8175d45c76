//! High-level, ergonomic library API: add a rounded border to an asset on
//! disk or in memory, and generate a circular icon set from one logo. Prefer
//! these entrypoints over the low-level processing modules.
use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbaImage};
use tracing::{info, warn};

use crate::core::params::{BorderParams, IconSetParams};
use crate::core::processing::pipeline::{border_pipeline, circular_icon};
use crate::error::Result;
use crate::io::{open_image, write_ico, write_rgba_png};
use crate::types::ResampleFilter;

/// Summary of one bordered image written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderReport {
    pub output: PathBuf,
    pub original_size: (u32, u32),
    pub new_size: (u32, u32),
    pub border_width: u32,
    pub corner_radius: u32,
}

/// Outcome of an icon set run; entries are independent of one another
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconBatchReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
    /// The `.ico` bundle, when it was written
    pub ico: Option<PathBuf>,
}

impl IconBatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty() && self.ico.is_some()
    }
}

/// True when both paths name the same file, through `.` segments or symlinks.
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Add a rounded border to an in-memory image.
pub fn add_border_to_buffer(img: DynamicImage, params: &BorderParams) -> Result<RgbaImage> {
    border_pipeline(img, params)
}

/// Add a rounded border to the image at `input` and save it as PNG at `output`.
///
/// `input` and `output` may be the same file; the source is fully decoded
/// before anything is written, and each run adds another ring.
pub fn add_border_to_path(input: &Path, output: &Path, params: &BorderParams) -> Result<BorderReport> {
    let img = open_image(input)?;
    let original_size = (img.width(), img.height());

    if same_file(input, output) {
        warn!("Overwriting input in place: {}", input.display());
    }

    let result = border_pipeline(img, params)?;
    write_rgba_png(output, &result)?;

    let report = BorderReport {
        output: output.to_path_buf(),
        original_size,
        new_size: result.dimensions(),
        border_width: params.border_width,
        corner_radius: params.corner_radius,
    };
    info!("Created bordered image: {}", output.display());
    info!("Original size: {}x{}", original_size.0, original_size.1);
    info!("New size: {}x{}", report.new_size.0, report.new_size.1);
    info!("Border width: {}px", params.border_width);
    info!("Corner radius: {}px", params.corner_radius);
    Ok(report)
}

/// Circular `size x size` icon from an in-memory logo.
pub fn create_circular_icon(
    logo: &DynamicImage,
    size: u32,
    filter: ResampleFilter,
) -> Result<RgbaImage> {
    circular_icon(&logo.to_rgba8(), size, filter)
}

/// Generate every circular PNG of `params` plus the `.ico` bundle under `root`.
///
/// A missing logo fails before anything is written. After that, a failing
/// entry is logged and recorded in the report while the rest carry on.
pub fn generate_icon_set(logo: &Path, root: &Path, params: &IconSetParams) -> Result<IconBatchReport> {
    params.validate()?;
    let source = open_image(logo)?.to_rgba8();
    let mut report = IconBatchReport::default();

    for target in &params.targets {
        let output = root.join(&target.path);
        let written = circular_icon(&source, target.size, params.filter)
            .and_then(|icon| write_rgba_png(&output, &icon));
        match written {
            Ok(()) => {
                info!("Created {}", output.display());
                report.written.push(output);
            }
            Err(e) => {
                warn!("Error creating {}: {}", output.display(), e);
                report.failed.push((output, e.to_string()));
            }
        }
    }

    let ico_path = root.join(&params.ico.path);
    let bundled = params
        .ico
        .sizes
        .iter()
        .map(|&size| circular_icon(&source, size, params.filter))
        .collect::<Result<Vec<_>>>()
        .and_then(|icons| write_ico(&ico_path, &icons));
    match bundled {
        Ok(()) => {
            info!("Created {}", ico_path.display());
            report.ico = Some(ico_path);
        }
        Err(e) => {
            warn!("Error creating {}: {}", ico_path.display(), e);
            report.failed.push((ico_path, e.to_string()));
        }
    }

    info!(
        "Icon set complete: written={} failed={}",
        report.written.len() + usize::from(report.ico.is_some()),
        report.failed.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circular_icon_from_rectangular_logo() {
        let logo = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            120,
            90,
            image::Rgb([5, 6, 7]),
        ));
        let icon = create_circular_icon(&logo, 16, ResampleFilter::Lanczos3).unwrap();
        assert_eq!(icon.dimensions(), (16, 16));
        assert_eq!(icon.get_pixel(0, 0).0[3], 0);
        assert_eq!(icon.get_pixel(8, 8).0[3], 255);
    }

    #[test]
    fn buffer_border_matches_params() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(10, 10));
        let out = add_border_to_buffer(img, &BorderParams::default()).unwrap();
        assert_eq!(out.dimensions(), (40, 40));
    }

    #[test]
    fn huge_border_width_is_an_error() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(4, 4));
        let params = BorderParams {
            border_width: 1 << 31,
            corner_radius: 0,
            ..BorderParams::default()
        };
        let err = add_border_to_buffer(img, &params).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidArgument { arg: "border_width", .. }
        ));
    }

    #[test]
    fn same_file_sees_through_parent_segments() {
        let dir = tempfile::tempdir().unwrap();
        let asset = dir.path().join("a.png");
        fs::write(&asset, b"").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let dotted = dir.path().join("sub").join("..").join("a.png");
        assert_ne!(asset, dotted);
        assert!(same_file(&asset, &dotted));
        assert!(!same_file(&asset, &dir.path().join("b.png")));
    }

    #[cfg(unix)]
    #[test]
    fn same_file_follows_symlinks() {
        let dir = tempfile::tempdir().unwrap();
        let asset = dir.path().join("a.png");
        let link = dir.path().join("link.png");
        fs::write(&asset, b"").unwrap();
        std::os::unix::fs::symlink(&asset, &link).unwrap();
        assert!(same_file(&asset, &link));
    }

    #[test]
    fn empty_report_is_not_a_success() {
        assert!(!IconBatchReport::default().is_success());
    }
}

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use ico::IconDir;
use image::{Rgb, RgbImage};
use roundel::{Error, IcoBundle, IconSetParams, IconTarget, ResampleFilter, generate_icon_set};

fn write_logo(dir: &Path) -> PathBuf {
    let logo = dir.join("public/aj-logo.jpg");
    fs::create_dir_all(logo.parent().unwrap()).unwrap();
    RgbImage::from_fn(300, 200, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 120]))
        .save(&logo)
        .unwrap();
    logo
}

fn png_files(root: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|e| e == "png") {
                found.push(path);
            }
        }
    }
    found
}

fn assert_circular(path: &Path, size: u32) {
    let icon = image::open(path).unwrap().to_rgba8();
    assert_eq!(icon.dimensions(), (size, size), "{}", path.display());
    let c = size as f64 / 2.0;
    for (x, y, px) in icon.enumerate_pixels() {
        let dx = x as f64 + 0.5 - c;
        let dy = y as f64 + 0.5 - c;
        let expected = if (dx * dx + dy * dy).sqrt() <= c { 255 } else { 0 };
        assert_eq!(px.0[3], expected, "{} pixel ({x}, {y})", path.display());
    }
}

#[test]
fn default_set_writes_every_icon_and_a_two_entry_ico() {
    let root = tempfile::tempdir().unwrap();
    let logo = write_logo(root.path());
    let params = IconSetParams::default();

    let report = generate_icon_set(&logo, root.path(), &params).unwrap();
    assert!(report.is_success());
    assert_eq!(report.written.len(), params.targets.len());
    assert_eq!(png_files(root.path()).len(), params.targets.len());

    for target in &params.targets {
        assert_circular(&root.path().join(&target.path), target.size);
    }

    let ico_path = root.path().join("src/app/favicon.ico");
    assert_eq!(report.ico.as_deref(), Some(ico_path.as_path()));
    let icon_dir = IconDir::read(File::open(&ico_path).unwrap()).unwrap();
    let mut sizes: Vec<u32> = icon_dir.entries().iter().map(|e| e.width()).collect();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![16, 32]);
}

#[test]
fn custom_mapping_produces_exactly_n_pngs() {
    let root = tempfile::tempdir().unwrap();
    let logo = write_logo(root.path());
    let params = IconSetParams {
        targets: vec![
            IconTarget::new("out/a.png", 20),
            IconTarget::new("out/b.png", 33),
            IconTarget::new("out/nested/c.png", 64),
        ],
        ico: IcoBundle {
            path: PathBuf::from("out/site.ico"),
            sizes: vec![48, 24],
        },
        filter: ResampleFilter::CatmullRom,
    };

    let report = generate_icon_set(&logo, root.path(), &params).unwrap();
    assert!(report.is_success());
    assert_eq!(png_files(&root.path().join("out")).len(), 3);
    assert_circular(&root.path().join("out/b.png"), 33);

    let icon_dir = IconDir::read(File::open(root.path().join("out/site.ico")).unwrap()).unwrap();
    assert_eq!(icon_dir.entries().len(), 2);
}

#[test]
fn one_failing_entry_does_not_stop_the_others() {
    let root = tempfile::tempdir().unwrap();
    let logo = write_logo(root.path());
    // A regular file where a directory is needed
    fs::write(root.path().join("blocked"), b"").unwrap();

    let params = IconSetParams {
        targets: vec![
            IconTarget::new("icons/first.png", 16),
            IconTarget::new("blocked/second.png", 16),
            IconTarget::new("icons/third.png", 32),
        ],
        ico: IcoBundle {
            path: PathBuf::from("icons/favicon.ico"),
            sizes: vec![32, 16],
        },
        ..IconSetParams::default()
    };

    let report = generate_icon_set(&logo, root.path(), &params).unwrap();
    assert!(!report.is_success());
    assert_eq!(report.written.len(), 2);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, root.path().join("blocked/second.png"));
    assert!(report.ico.is_some());
    assert!(root.path().join("icons/third.png").exists());
}

#[test]
fn missing_logo_writes_nothing() {
    let root = tempfile::tempdir().unwrap();
    let err = generate_icon_set(
        &root.path().join("public/aj-logo.jpg"),
        root.path(),
        &IconSetParams::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::MissingInput(_)));
    assert_eq!(fs::read_dir(root.path()).unwrap().count(), 0);
}

#![doc = r#"
roundel — rounded borders and circular favicons for static web assets.

This crate post-processes the images in a web project's public asset folder:
it surrounds an image with a solid-colour ring whose corners are rounded, and
it cuts a logo into circular icons at every favicon size, bundling two of
them into a `.ico` container. It powers the `roundel` CLI and can be used
directly from Rust.

Add a border in place
---------------------
```rust,no_run
use std::path::Path;
use roundel::{add_border_to_path, BorderParams};

fn main() -> roundel::Result<()> {
    let asset = Path::new("public/tomo-image.png");
    let report = add_border_to_path(asset, asset, &BorderParams::default())?;
    println!("{}x{} -> {}x{}",
        report.original_size.0, report.original_size.1,
        report.new_size.0, report.new_size.1);
    Ok(())
}
```

Square-cropped variant in memory
--------------------------------
```rust
use image::{DynamicImage, RgbaImage};
use roundel::{add_border_to_buffer, BorderColor, BorderParams};

fn main() -> roundel::Result<()> {
    let params = BorderParams {
        border_width: 6,
        corner_radius: 12,
        border_color: BorderColor::rgba(20, 20, 20, 255),
        square_crop: true,
        size: Some(64),
        ..BorderParams::default()
    };
    let img = DynamicImage::ImageRgba8(RgbaImage::new(120, 80));
    let out = add_border_to_buffer(img, &params)?;
    assert_eq!(out.dimensions(), (76, 76));
    Ok(())
}
```

Generate a favicon set
----------------------
```rust,no_run
use std::path::Path;
use roundel::{generate_icon_set, IconSetParams};

fn main() -> roundel::Result<()> {
    let report = generate_icon_set(
        Path::new("public/aj-logo.jpg"),
        Path::new("."),
        &IconSetParams::default(),
    )?;
    println!("written={} failed={}", report.written.len(), report.failed.len());
    Ok(())
}
```

Error handling
--------------
All public functions return `roundel::Result<T>`. `Error::MissingInput` is the
one failure the CLI reports and exits cleanly on; anything else is fatal.

```rust,no_run
use std::path::Path;
use roundel::{add_border_to_path, BorderParams, Error};

fn main() {
    let path = Path::new("public/missing.png");
    match add_border_to_path(path, path, &BorderParams::default()) {
        Ok(_) => {}
        Err(Error::MissingInput(p)) => eprintln!("Error: Input file not found: {}", p.display()),
        Err(other) => panic!("{other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — mask builder, compositor, crop/resize helpers and parameters.
- [`io`] — image decoding and PNG/ICO writers.
- [`types`] — colours, filters and shape descriptors.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::params::{BorderParams, IcoBundle, IconSetParams, IconTarget};
pub use crate::core::processing::mask::Mask;
pub use error::{Error, Result};
pub use types::{Bounds, BorderColor, ResampleFilter, Shape};

pub use api::{
    BorderReport, IconBatchReport, add_border_to_buffer, add_border_to_path, create_circular_icon,
    generate_icon_set,
};

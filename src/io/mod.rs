//! I/O layer: decoding source assets and writing PNG/ICO outputs.
pub mod reader;
pub mod writers;

pub use reader::open_image;
pub use writers::icon::write_ico;
pub use writers::png::write_rgba_png;

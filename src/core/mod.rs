//! Core building blocks: the mask builder, the compositor, crop/resize
//! helpers and the parameter records. These are primitives consumed by the
//! high-level `api` module.
pub mod params;
pub mod processing;

pub mod icon;
pub mod png;

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Create the directory `output` will be written into, if it is missing.
pub(crate) fn ensure_parent_dir(output: &Path) -> Result<()> {
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent)?;
            Ok(())
        }
        _ => Ok(()),
    }
}

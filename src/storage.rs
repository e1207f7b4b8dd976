use std::fs;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::TextureError;
use crate::logger::log_line;

/// Write `img` as a PNG at `path`, creating missing parent directories.
/// An existing file at `path` is replaced.
pub fn save_texture(img: &RgbaImage, path: &Path) -> Result<(), TextureError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| TextureError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
        log_line(&format!("ensured directory {}", parent.display()));
    }

    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| TextureError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    if let Ok(meta) = fs::metadata(path) {
        log_line(&format!("wrote {} ({} bytes)", path.display(), meta.len()));
    }
    Ok(())
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("failed to create directory {}: {}", .path.display(), .source)]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write PNG {}: {}", .path.display(), .source)]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub mod config;
pub mod error;
pub mod icon;
pub mod logger;
pub mod storage;

pub use error::TextureError;

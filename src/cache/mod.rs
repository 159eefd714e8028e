//! Caching layer for API responses and artwork preloading

pub mod image_preload;
pub mod response_cache;

pub use image_preload::{ImagePreloader, PreloadSignal, PreloadState};
pub use response_cache::ResponseCache;

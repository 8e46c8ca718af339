use std::path::Path;

use image::RgbaImage;

#[derive(Debug, thiserror::Error)]
pub enum ImageLoadError {
    #[error("image request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to read image: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Fetch an image from a URL or read it from disk, then decode it.
///
/// Any error here is the card's "image failed to load" signal.
pub async fn load_image(location: &str) -> Result<RgbaImage, ImageLoadError> {
    let bytes = if is_remote(location) {
        reqwest::get(location)
            .await?
            .error_for_status()?
            .bytes()
            .await?
            .to_vec()
    } else {
        tokio::fs::read(Path::new(location)).await?
    };
    let decoded = image::load_from_memory(&bytes)?;
    Ok(decoded.to_rgba8())
}

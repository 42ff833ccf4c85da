/// Image fetching
///
/// ureq is blocking, so every request runs on tokio's blocking pool and
/// the decoded RGBA pixels come back as an iced image handle.
use iced::widget::image::Handle;
use std::io::Read;
use std::time::Duration;
use tokio::task;

use crate::error::FetchError;

const USER_AGENT: &str = concat!("image-gallery/", env!("CARGO_PKG_VERSION"));

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Upper bound on a response body (CDN thumbnails are a few dozen KB)
const MAX_BODY_BYTES: u64 = 16 * 1024 * 1024;

/// Fetch and decode the image at `url`
pub async fn fetch_image(url: String) -> Result<Handle, FetchError> {
    task::spawn_blocking(move || fetch_image_blocking(&url))
        .await
        .map_err(|e| FetchError::Join(e.to_string()))?
}

fn fetch_image_blocking(url: &str) -> Result<Handle, FetchError> {
    let response = ureq::get(url)
        .set("User-Agent", USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .call()
        .map_err(|e| FetchError::Http {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(MAX_BODY_BYTES)
        .read_to_end(&mut bytes)
        .map_err(|e| FetchError::Read(e.to_string()))?;

    tracing::trace!(url, bytes = bytes.len(), "downloaded image");

    decode(&bytes)
}

/// Decode encoded image bytes (JPEG/PNG/WebP) into an RGBA handle
pub fn decode(bytes: &[u8]) -> Result<Handle, FetchError> {
    let rgba = image::load_from_memory(bytes)
        .map_err(|e| FetchError::Decode(e.to_string()))?
        .to_rgba8();

    let (width, height) = rgba.dimensions();
    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}

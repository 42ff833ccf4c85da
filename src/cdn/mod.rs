/// Image CDN collaborator
///
/// This module handles:
/// - Building image URLs from the `<base>/id/<id>/<width>/<height>` template
/// - Fetching and decoding images off the UI thread (fetch.rs)
///
/// The CDN is opaque: no retries and no caching beyond what the gallery
/// keeps for the current session.

pub mod fetch;

use crate::state::candidates::ImageId;

/// URL of image `id` at the requested size
pub fn image_url(base: &str, id: ImageId, width: u32, height: u32) -> String {
    format!("{}/id/{}/{}/{}", base, id, width, height)
}

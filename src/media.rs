// SPDX-License-Identifier: MPL-2.0
//! Remote artwork retrieval and caching.
//!
//! Every image on the page is referenced by an opaque URI. Fetching
//! happens once per URI on a background task; the resulting handle (or
//! failure) is cached so the view layer can render a ready image, a
//! loading hint, or a placeholder without ever blocking.

use crate::error::{Error, Result};
use iced::widget::image::Handle;
use std::collections::HashMap;

const USER_AGENT: &str = concat!("SplitStage/", env!("CARGO_PKG_VERSION"));

/// Downloads an image into a ready-to-render handle.
///
/// Decoding is deferred to the renderer; this only validates the HTTP
/// exchange. The redirect limit guards against loops on misconfigured
/// image hosts.
///
/// # Errors
///
/// Returns [`Error::Http`] when the client cannot be built, the request
/// fails, or the server responds with a non-success status.
pub async fn fetch_image(url: String) -> Result<Handle> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| Error::Http(e.to_string()))?;

    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        return Err(Error::Http(format!("HTTP status: {}", response.status())));
    }

    let bytes = response.bytes().await?;
    Ok(Handle::from_bytes(bytes.to_vec()))
}

/// Lifecycle of one remote image.
#[derive(Debug, Clone)]
pub enum RemoteImage {
    /// Fetch dispatched, no response yet.
    Loading,
    /// Fetched successfully; handle is ready to render.
    Ready(Handle),
    /// Fetch failed; the view shows a placeholder with the alt text.
    Failed,
}

/// Cache of remote images keyed by source URI.
#[derive(Debug, Clone, Default)]
pub struct ImageCache {
    entries: HashMap<String, RemoteImage>,
}

impl ImageCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a URI as in flight. Returns whether a fetch should actually
    /// be dispatched (false when the URI is already loading or resolved).
    pub fn mark_loading(&mut self, url: &str) -> bool {
        if self.entries.contains_key(url) {
            return false;
        }
        self.entries.insert(url.to_string(), RemoteImage::Loading);
        true
    }

    /// Records the outcome of a fetch.
    pub fn resolve(&mut self, url: String, result: Result<Handle>) {
        let entry = match result {
            Ok(handle) => RemoteImage::Ready(handle),
            Err(_) => RemoteImage::Failed,
        };
        self.entries.insert(url, entry);
    }

    /// Returns the lifecycle state of a URI, if it was ever requested.
    #[must_use]
    pub fn get(&self, url: &str) -> Option<&RemoteImage> {
        self.entries.get(url)
    }

    /// Returns the handle for a URI when the fetch has completed.
    #[must_use]
    pub fn handle(&self, url: &str) -> Option<&Handle> {
        match self.entries.get(url) {
            Some(RemoteImage::Ready(handle)) => Some(handle),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://images.example/photo.jpg";

    #[test]
    fn mark_loading_is_idempotent() {
        let mut cache = ImageCache::new();
        assert!(cache.mark_loading(URL));
        assert!(!cache.mark_loading(URL));
        assert!(matches!(cache.get(URL), Some(RemoteImage::Loading)));
    }

    #[test]
    fn resolve_success_stores_handle() {
        let mut cache = ImageCache::new();
        cache.mark_loading(URL);
        cache.resolve(URL.to_string(), Ok(Handle::from_rgba(1, 1, vec![0; 4])));

        assert!(matches!(cache.get(URL), Some(RemoteImage::Ready(_))));
        assert!(cache.handle(URL).is_some());
    }

    #[test]
    fn resolve_failure_marks_entry_failed() {
        let mut cache = ImageCache::new();
        cache.mark_loading(URL);
        cache.resolve(URL.to_string(), Err(Error::Http("boom".into())));

        assert!(matches!(cache.get(URL), Some(RemoteImage::Failed)));
        assert!(cache.handle(URL).is_none());
    }

    #[test]
    fn unknown_url_has_no_entry() {
        let cache = ImageCache::new();
        assert!(cache.get(URL).is_none());
        assert!(cache.handle(URL).is_none());
    }

    #[tokio::test]
    async fn fetch_image_reports_unreachable_host() {
        // Port 9 (discard) is not listening; the connect error must
        // surface as an Http error, not a panic.
        let result = fetch_image("http://127.0.0.1:9/missing.jpg".to_string()).await;
        assert!(matches!(result, Err(Error::Http(_))));
    }
}

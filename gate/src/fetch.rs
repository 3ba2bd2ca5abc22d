//! Text fetching seam

use async_trait::async_trait;

use crate::error::Result;

/// GET a resource and return its whole body as text.
///
/// Futures are `?Send`: the browser implementation holds JS handles.
#[async_trait(?Send)]
pub trait TextFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String>;
}

#[async_trait(?Send)]
impl<T: TextFetcher + ?Sized> TextFetcher for &T {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        (**self).fetch_text(path).await
    }
}

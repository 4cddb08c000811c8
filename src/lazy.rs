//! Lazy image loading.
//!
//! Images carry their real source in `data-src` and get it only once they
//! come near the viewport. The `lazy` marker class comes off when the image
//! has actually loaded.

/// The source to promote for an image whose deferred source is `data_src`.
///
/// Empty values are skipped so an image is never pointed at the page itself.
pub fn promoted_source(data_src: Option<&str>) -> Option<&str> {
    data_src.map(str::trim).filter(|src| !src.is_empty())
}

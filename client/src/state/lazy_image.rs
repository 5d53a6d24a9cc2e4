//! Deferred background images.

#[cfg(test)]
#[path = "lazy_image_test.rs"]
mod lazy_image_test;

pub const DATA_SRC_ATTR: &str = "data-src";
pub const LAZY_IMAGE_SELECTOR: &str = ".image-placeholder[data-src]";

/// `background-image` value for a deferred source, or `None` for an empty one.
#[must_use]
pub fn background_image(src: &str) -> Option<String> {
    let src = src.trim();
    (!src.is_empty()).then(|| format!("url({src})"))
}

/// A placeholder element carrying a deferred source.
pub trait DeferredImage {
    fn source(&self) -> Option<String>;
    fn set_background(&mut self, css: &str);
    fn clear_source(&mut self);
}

/// Swaps in the deferred source. An empty source leaves the placeholder and its
/// `data-src` untouched. Returns whether the image was loaded.
pub fn load_deferred(image: &mut impl DeferredImage) -> bool {
    let Some(css) = image.source().as_deref().and_then(background_image) else {
        return false;
    };
    image.set_background(&css);
    image.clear_source();
    true
}

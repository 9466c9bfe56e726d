//! # Slideshow Module
//!
//! Cyclic index over the hero images.
//!
//! ```text
//!   index:  0 ──tick──► 1 ──tick──► ... ──tick──► N-1 ──tick──► 0
//!                ▲
//!                └── set_index(i) jumps directly, i must be in [0, N)
//! ```
//!
//! The timer that drives `tick()` lives in the host; this type only holds
//! the index and never fails once constructed.

use serde::Serialize;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

/// Hero slideshow position over a fixed, non-empty image list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideshowState {
    images: Vec<String>,
    index: usize,
}

impl SlideshowState {
    /// Creates a slideshow starting at the first image.
    ///
    /// ## Errors
    /// `CoreError::EmptySlideshow` if `images` is empty.
    pub fn new(images: Vec<String>) -> CoreResult<Self> {
        if images.is_empty() {
            return Err(CoreError::EmptySlideshow);
        }
        Ok(SlideshowState { images, index: 0 })
    }

    /// Advances to the next image, wrapping to the first.
    pub fn tick(&mut self) -> usize {
        self.index = (self.index + 1) % self.images.len();
        self.index
    }

    /// Jumps to `index`. Out-of-range values leave the state unchanged.
    pub fn set_index(&mut self, index: usize) -> CoreResult<()> {
        if index >= self.images.len() {
            return Err(CoreError::SlideIndexOutOfRange {
                index,
                len: self.images.len(),
            });
        }
        self.index = index;
        Ok(())
    }

    /// Image at the current index.
    pub fn current(&self) -> &str {
        &self.images[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Never true for a constructed slideshow.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Serializable snapshot of the current position.
    pub fn view(&self) -> SlideView {
        SlideView {
            index: self.index,
            total: self.images.len(),
            image: self.current().to_string(),
        }
    }
}

/// Current slide as shown to the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SlideView {
    pub index: usize,
    pub total: usize,
    pub image: String,
}

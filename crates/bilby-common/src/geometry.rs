//! Plain geometry values.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described by its side lengths.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its side lengths, stored unchanged.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The area of the rectangle, `width * height`.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

//! The measurement capability required of every content unit.
//!
//! The layout engine never looks inside the content it places. The only thing
//! it asks of a unit is how wide it is, expressed in the same unit as the
//! layout configuration (points, pixels, terminal cells...).

use std::rc::Rc;
use std::sync::Arc;

/// A content unit with a horizontal extent.
///
/// Implementations must return a finite, non-negative width. The engine
/// rejects anything else instead of guessing what the caller meant.
pub trait Measurable {
    fn width(&self) -> f32;
}

impl<T: Measurable + ?Sized> Measurable for &T {
    #[inline]
    fn width(&self) -> f32 {
        (**self).width()
    }
}

impl<T: Measurable + ?Sized> Measurable for Box<T> {
    #[inline]
    fn width(&self) -> f32 {
        (**self).width()
    }
}

impl<T: Measurable + ?Sized> Measurable for Rc<T> {
    #[inline]
    fn width(&self) -> f32 {
        (**self).width()
    }
}

impl<T: Measurable + ?Sized> Measurable for Arc<T> {
    #[inline]
    fn width(&self) -> f32 {
        (**self).width()
    }
}

use crate::janggi::Color;

/// Trait for types that can be seen from the opponent's perspective.
pub trait Perspective: Copy {
    /// Flips the perspective.
    fn flip(&self) -> Self;

    /// Sets the perspective to the side of the given [`Color`].
    ///
    /// Values are expressed from red's point of view.
    #[inline(always)]
    fn perspective(&self, side: Color) -> Self {
        match side {
            Color::Red => *self,
            Color::Blue => self.flip(),
        }
    }
}

//! Source locations.
//!
//! A [`Span`] is a half-open byte range into the input. Error messages
//! speak in 1-based byte positions, see [`Span::position`].

use std::fmt;
use std::ops::Range;

/// Byte range `start..end` into the source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Zero-width span at `offset`, used for end of input.
    #[inline]
    pub const fn point(offset: u32) -> Self {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// Build a span from `usize` offsets.
    ///
    /// Offsets beyond `u32::MAX` are clamped; inputs that large are not
    /// supported.
    pub fn from_range(range: Range<usize>) -> Self {
        let clamp = |offset: usize| u32::try_from(offset).unwrap_or(u32::MAX);
        Span {
            start: clamp(range.start),
            end: clamp(range.end),
        }
    }

    /// 1-based position of the first byte.
    ///
    /// This counts bytes, not characters. Falcon tokens are ASCII, but a
    /// comment holding multi-byte UTF-8 moves every later position past the
    /// character count. Rendered diagnostics also give a character-based
    /// `line:col`.
    #[inline]
    pub const fn position(&self) -> u32 {
        self.start.saturating_add(1)
    }

    /// Smallest span covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.position())
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Span;
    crate::static_assert_size!(Span, 8);
}

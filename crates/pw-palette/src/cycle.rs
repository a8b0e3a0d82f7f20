//! Color and style cycles.
//!
//! Both cycles are plain modular counters. They never end: `next` always
//! returns `Some`, so callers can `zip` them against any finite rect list.
//! Cloning a cycle forks its state; the clone advances independently.

use std::iter::FusedIterator;

use pw_color::Color;
use serde::Serialize;
use tracing::trace;

use crate::{PaletteError, Result};

// ---------------------------------------------------------------------------
// ColorCycle
// ---------------------------------------------------------------------------

/// Repeats a list of colors forever, starting at the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCycle {
    colors: Vec<Color>,
    index: usize,
}

impl ColorCycle {
    /// Start a cycle at position 0.
    ///
    /// # Errors
    ///
    /// [`PaletteError::EmptyPalette`] if `colors` is empty.
    pub fn new(colors: impl Into<Vec<Color>>) -> Result<Self> {
        let colors = colors.into();
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        Ok(Self::from_non_empty(colors))
    }

    /// Caller guarantees `colors` is non-empty.
    pub(crate) const fn from_non_empty(colors: Vec<Color>) -> Self {
        Self { colors, index: 0 }
    }

    /// The color at the current position; advances by one.
    pub fn next_color(&mut self) -> Color {
        let color = self.colors[self.index];
        self.index = (self.index + 1) % self.colors.len();
        color
    }

    /// Position of the next color to be returned.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.index
    }

    /// Number of distinct colors in one lap.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false: empty cycles can't be constructed.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Iterator for ColorCycle {
    type Item = Color;

    fn next(&mut self) -> Option<Color> {
        Some(self.next_color())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for ColorCycle {}

// ---------------------------------------------------------------------------
// StyleFrame
// ---------------------------------------------------------------------------

/// How one stripe rect is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleFrame {
    /// Solid fill.
    Fill(Color),
    /// Not drawn at all.
    Hidden,
}

impl StyleFrame {
    /// The fill color, if any.
    #[inline]
    #[must_use]
    pub const fn fill(self) -> Option<Color> {
        match self {
            Self::Fill(c) => Some(c),
            Self::Hidden => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

// ---------------------------------------------------------------------------
// StyleCycle
// ---------------------------------------------------------------------------

/// Length of one style period.
///
/// One period covers two stripes of three rects each. The hidden slots are
/// the `left` and `bottom` faces of the first stripe and the `top_right`
/// face of the second, which is what leaves alternate arms of the pinwheel
/// open.
pub const STYLE_PERIOD: usize = 6;

/// `true` = filled, `false` = hidden.
const PATTERN: [bool; STYLE_PERIOD] = [true, false, false, false, true, true];

/// Repeats the fill/hidden pattern forever, drawing a new color for every
/// filled slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleCycle {
    colors: ColorCycle,
    phase: usize,
}

impl StyleCycle {
    /// Start a style cycle at the beginning of a period.
    #[must_use]
    pub const fn new(colors: ColorCycle) -> Self {
        Self { colors, phase: 0 }
    }

    /// Shorthand for `StyleCycle::new(ColorCycle::new(colors)?)`.
    ///
    /// # Errors
    ///
    /// [`PaletteError::EmptyPalette`] if `colors` is empty.
    pub fn from_colors(colors: impl Into<Vec<Color>>) -> Result<Self> {
        ColorCycle::new(colors).map(Self::new)
    }

    /// The next style; advances the period and, for filled slots, the
    /// color cycle.
    pub fn next_style(&mut self) -> StyleFrame {
        let filled = PATTERN[self.phase];
        self.phase = (self.phase + 1) % STYLE_PERIOD;
        let frame = if filled {
            StyleFrame::Fill(self.colors.next_color())
        } else {
            StyleFrame::Hidden
        };
        trace!(phase = self.phase, ?frame, "style");
        frame
    }

    /// Position within the current period (0-based).
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> usize {
        self.phase
    }
}

impl Iterator for StyleCycle {
    type Item = StyleFrame;

    fn next(&mut self) -> Option<StyleFrame> {
        Some(self.next_style())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for StyleCycle {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const A: Color = Color::rgb8(0xAA, 0, 0);
    const B: Color = Color::rgb8(0, 0xBB, 0);
    const C: Color = Color::rgb8(0, 0, 0xCC);

    // ── ColorCycle ───────────────────────────────────────────────────────

    #[test]
    fn color_cycle_wraps() {
        let cycle = ColorCycle::new(vec![A, B, C]).unwrap();
        let got: Vec<Color> = cycle.take(7).collect();
        assert_eq!(got, vec![A, B, C, A, B, C, A]);
    }

    #[test]
    fn color_cycle_single() {
        let mut cycle = ColorCycle::new([A]).unwrap();
        for _ in 0..10 {
            assert_eq!(cycle.next_color(), A);
        }
        assert_eq!(cycle.position(), 0);
    }

    #[test]
    fn color_cycle_empty_fails() {
        assert_eq!(
            ColorCycle::new(Vec::<Color>::new()),
            Err(PaletteError::EmptyPalette)
        );
    }

    #[test]
    fn fresh_cycles_are_independent() {
        let mut first = ColorCycle::new(vec![A, B]).unwrap();
        assert_eq!(first.next_color(), A);
        let mut second = ColorCycle::new(vec![A, B]).unwrap();
        assert_eq!(second.next_color(), A);
        assert_eq!(first.next_color(), B);
    }

    #[test]
    fn clone_forks_state() {
        let mut a = ColorCycle::new(vec![A, B, C]).unwrap();
        a.next_color();
        let mut b = a.clone();
        assert_eq!(a.next_color(), B);
        assert_eq!(a.next_color(), C);
        assert_eq!(b.next_color(), B);
    }

    // ── StyleCycle ───────────────────────────────────────────────────────

    #[test]
    fn single_color_pattern_holds_for_three_periods() {
        let styles: Vec<StyleFrame> = StyleCycle::from_colors([A]).unwrap().take(18).collect();
        for (i, frame) in styles.iter().enumerate() {
            match i % STYLE_PERIOD {
                0 | 4 | 5 => assert_eq!(*frame, StyleFrame::Fill(A), "slot {i}"),
                _ => assert_eq!(*frame, StyleFrame::Hidden, "slot {i}"),
            }
        }
    }

    #[test]
    fn two_colors_advance_on_every_fill() {
        let styles: Vec<StyleFrame> = StyleCycle::from_colors([A, B]).unwrap().take(12).collect();
        assert_eq!(styles[0], StyleFrame::Fill(A));
        assert_eq!(styles[4], StyleFrame::Fill(B));
        assert_eq!(styles[5], StyleFrame::Fill(A));
        assert_eq!(styles[6], StyleFrame::Fill(B));
        assert_eq!(styles[10], StyleFrame::Fill(A));
        assert_eq!(styles[11], StyleFrame::Fill(B));
        for i in [1, 2, 3, 7, 8, 9] {
            assert!(styles[i].is_hidden(), "slot {i}");
        }
    }

    #[test]
    fn three_fills_per_period() {
        let fills = StyleCycle::from_colors([A, B, C])
            .unwrap()
            .take(STYLE_PERIOD * 4)
            .filter_map(StyleFrame::fill)
            .count();
        assert_eq!(fills, 12);
    }

    #[test]
    fn style_cycle_empty_fails() {
        assert_eq!(
            StyleCycle::from_colors(Vec::<Color>::new()),
            Err(PaletteError::EmptyPalette)
        );
    }

    #[test]
    fn phase_wraps() {
        let mut styles = StyleCycle::from_colors([A]).unwrap();
        for _ in 0..STYLE_PERIOD {
            styles.next_style();
        }
        assert_eq!(styles.phase(), 0);
    }

    #[test]
    fn style_frame_accessors() {
        assert_eq!(StyleFrame::Fill(C).fill(), Some(C));
        assert_eq!(StyleFrame::Hidden.fill(), None);
        assert!(!StyleFrame::Fill(C).is_hidden());
    }
}

//! Segment layout.
//!
//! The selection model and hit tester never measure anything themselves; they
//! read bounding boxes through `LayoutProvider`. `RowLayout` is a reference
//! provider that lays labels out left to right the way a horizontal stack
//! with proportional fill does.

use unicode_width::UnicodeWidthChar;

use crate::primitives::{Rect, Size};
use crate::selection::IndicatorGeometry;
use crate::style::{Emphasis, LabelStyle, SegmentedStyle};

/// Source of post-layout segment bounding boxes, in layout order.
pub trait LayoutProvider {
    /// Number of segments that currently have a bounding box.
    fn segment_count(&self) -> usize;

    /// Bounding box of segment `index`, or `None` past the end.
    fn bounding_box(&self, index: usize) -> Option<Rect>;
}

impl LayoutProvider for [Rect] {
    fn segment_count(&self) -> usize {
        self.len()
    }

    fn bounding_box(&self, index: usize) -> Option<Rect> {
        self.get(index).copied()
    }
}

impl LayoutProvider for Vec<Rect> {
    fn segment_count(&self) -> usize {
        self.len()
    }

    fn bounding_box(&self, index: usize) -> Option<Rect> {
        self.get(index).copied()
    }
}

/// Intrinsic size of a label.
pub trait TextMeasure {
    fn measure(&self, text: &str, style: &LabelStyle) -> Size;
}

/// Fixed-advance text measurement.
///
/// Width is the Unicode display width (CJK and emoji count double) times
/// `advance * font_size`; height is `line_height * font_size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    /// Advance of a single-width cell, as a fraction of the font size.
    pub advance: f32,
    /// Line height, as a multiple of the font size.
    pub line_height: f32,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self {
            advance: 0.6,
            line_height: 1.2,
        }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str, style: &LabelStyle) -> Size {
        let cells: f32 = text
            .chars()
            .map(|c| UnicodeWidthChar::width(c).unwrap_or(0) as f32)
            .sum();
        Size::new(
            cells * self.advance * style.font_size,
            self.line_height * style.font_size,
        )
    }
}

/// Result of a row layout pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SegmentLayout {
    boxes: Vec<Rect>,
    /// Top edge of the indicator bar.
    indicator_track_y: f32,
}

impl SegmentLayout {
    pub fn boxes(&self) -> &[Rect] {
        &self.boxes
    }

    pub fn indicator_track_y(&self) -> f32 {
        self.indicator_track_y
    }

    /// Screen rect of the indicator bar for the given geometry.
    pub fn indicator_rect(&self, geometry: &IndicatorGeometry, style: &SegmentedStyle) -> Rect {
        Rect::new(
            geometry.x,
            self.indicator_track_y,
            geometry.width,
            style.indicator_height,
        )
    }
}

impl LayoutProvider for SegmentLayout {
    fn segment_count(&self) -> usize {
        self.boxes.len()
    }

    fn bounding_box(&self, index: usize) -> Option<Rect> {
        self.boxes.get(index).copied()
    }
}

/// Horizontal row layout with proportional fill.
///
/// Segments keep their intrinsic width ratio; the space left in `bounds` after
/// spacing is shared out in that ratio. An unbounded (non-finite) width keeps
/// intrinsic widths as they are.
#[derive(Debug, Clone)]
pub struct RowLayout<M = MonospaceMeasure> {
    measure: M,
}

impl RowLayout<MonospaceMeasure> {
    /// Row layout using the default monospace width estimate.
    pub fn monospace() -> Self {
        Self::new(MonospaceMeasure::default())
    }
}

impl<M: TextMeasure> RowLayout<M> {
    pub fn new(measure: M) -> Self {
        Self { measure }
    }

    pub fn layout<'s>(
        &self,
        segments: impl IntoIterator<Item = (&'s str, Emphasis)>,
        style: &SegmentedStyle,
        bounds: Rect,
    ) -> SegmentLayout {
        let sizes: Vec<Size> = segments
            .into_iter()
            .map(|(text, emphasis)| self.measure.measure(text, &style.label_style(emphasis)))
            .collect();

        let row_height = sizes.iter().map(|s| s.height).fold(0.0, f32::max);
        let indicator_track_y = bounds.y + row_height + style.indicator_spacing;

        if sizes.is_empty() {
            return SegmentLayout {
                boxes: Vec::new(),
                indicator_track_y,
            };
        }

        let gaps = style.spacing * (sizes.len() - 1) as f32;
        let intrinsic: f32 = sizes.iter().map(|s| s.width).sum();
        let widths: Vec<f32> = if !bounds.width.is_finite() {
            sizes.iter().map(|s| s.width).collect()
        } else {
            let available = (bounds.width - gaps).max(0.0);
            if intrinsic > 0.0 {
                sizes
                    .iter()
                    .map(|s| s.width * available / intrinsic)
                    .collect()
            } else {
                vec![available / sizes.len() as f32; sizes.len()]
            }
        };

        let mut cursor = bounds.x;
        let boxes = widths
            .into_iter()
            .map(|width| {
                let rect = Rect::new(cursor, bounds.y, width, row_height);
                cursor += width + style.spacing;
                rect
            })
            .collect();

        SegmentLayout {
            boxes,
            indicator_track_y,
        }
    }
}

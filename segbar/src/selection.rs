//! Selection model.
//!
//! Owns the ordered segment labels and the selected index, and derives the
//! indicator geometry from whatever layout the caller passes in. Geometry is
//! never cached: every read takes the layout explicitly.

use crate::error::{SelectionError, StyleError};
use crate::layout::LayoutProvider;
use crate::observer::{SelectionObservers, SubscriptionId};
use crate::style::{Emphasis, validate_proportion};

/// Target position of the indicator bar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IndicatorGeometry {
    /// Left edge; always the left edge of the selected segment.
    pub x: f32,
    pub width: f32,
}

#[derive(Debug)]
pub struct SelectionModel {
    labels: Vec<String>,
    current: usize,
    width_proportion: f32,
    observers: SelectionObservers,
}

impl Default for SelectionModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionModel {
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            current: 0,
            width_proportion: 1.0,
            observers: SelectionObservers::new(),
        }
    }

    /// Create a model with a validated indicator width proportion.
    pub fn with_width_proportion(width_proportion: f32) -> Result<Self, StyleError> {
        let mut model = Self::new();
        model.set_width_proportion(width_proportion)?;
        Ok(model)
    }

    // =====================================================================
    // Collection
    // =====================================================================

    pub fn count(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Labels paired with their emphasis, in layout order.
    pub fn segments(&self) -> impl Iterator<Item = (&str, Emphasis)> {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.as_str(), self.emphasis(i)))
    }

    /// Add a segment at the end. The selection does not move.
    pub fn append(&mut self, label: impl Into<String>) {
        self.labels.push(label.into());
    }

    /// Insert a segment at `index`, shifting later segments right.
    ///
    /// An index at or past the end appends. Inserting at or before the
    /// selected segment moves `current_index` along with it, so the same
    /// label stays selected. No notification is sent either way.
    pub fn insert(&mut self, label: impl Into<String>, index: usize) {
        let label = label.into();
        if index >= self.labels.len() {
            tracing::debug!(index, count = self.labels.len(), "insert past end, appending");
            self.labels.push(label);
            return;
        }

        let had_selection = !self.labels.is_empty();
        self.labels.insert(index, label);
        if had_selection && index <= self.current {
            self.current += 1;
        }
    }

    // =====================================================================
    // Selection
    // =====================================================================

    /// Index of the selected segment. Meaningless while the model is empty.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.label(self.current)
    }

    pub fn width_proportion(&self) -> f32 {
        self.width_proportion
    }

    pub fn set_width_proportion(&mut self, width_proportion: f32) -> Result<(), StyleError> {
        self.width_proportion = validate_proportion(width_proportion)?;
        Ok(())
    }

    /// Select segment `index` and return the new indicator geometry.
    ///
    /// On success every observer is notified, even when `index` was already
    /// selected. On error nothing changes and nobody is notified.
    pub fn select<L: LayoutProvider + ?Sized>(
        &mut self,
        index: usize,
        layout: &L,
    ) -> Result<IndicatorGeometry, SelectionError> {
        let count = self.labels.len();
        if index >= count {
            return Err(SelectionError::OutOfRange { index, count });
        }

        let Some(geometry) = self.geometry_at(index, layout) else {
            let laid_out = layout.segment_count();
            tracing::warn!(index, laid_out, "select against a stale layout");
            return Err(SelectionError::StaleLayout { index, laid_out });
        };

        self.current = index;
        tracing::debug!(index, x = geometry.x, width = geometry.width, "segment selected");
        self.observers.notify(index);
        Ok(geometry)
    }

    /// Indicator geometry for the current selection.
    ///
    /// `None` when there are no segments or `layout` has no box for the
    /// selected one.
    pub fn compute_indicator_geometry<L: LayoutProvider + ?Sized>(
        &self,
        layout: &L,
    ) -> Option<IndicatorGeometry> {
        if self.labels.is_empty() {
            return None;
        }
        self.geometry_at(self.current, layout)
    }

    fn geometry_at<L: LayoutProvider + ?Sized>(
        &self,
        index: usize,
        layout: &L,
    ) -> Option<IndicatorGeometry> {
        let bounds = layout.bounding_box(index)?;
        Some(IndicatorGeometry {
            x: bounds.x,
            width: bounds.width * self.width_proportion,
        })
    }

    /// Emphasis of segment `index`: focused for the selected one, default otherwise.
    pub fn emphasis(&self, index: usize) -> Emphasis {
        if index == self.current {
            Emphasis::Focused
        } else {
            Emphasis::Default
        }
    }

    // =====================================================================
    // Observers
    // =====================================================================

    pub fn subscribe(&mut self, listener: impl FnMut(usize) + 'static) -> SubscriptionId {
        self.observers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}

//! Segmented control.
//!
//! `SegmentedControl` ties the selection model to pointer input, the style
//! configuration and the indicator animation. It never lays itself out: every
//! call that needs geometry takes the current `LayoutProvider`.
//!
//! # Lifecycle
//!
//! Construction posts a single `SegmentedMessage::InitialLayout` to the run
//! loop so the first indicator position is computed after the host has laid
//! the control out. Dropping the control cancels that message if it has not
//! been delivered yet.
//!
//! ```ignore
//! let mut run_loop = RunLoop::new();
//! let mut control = SegmentedControl::new(SegmentedStyle::default(), &mut run_loop)?;
//! control.append("Inbox");
//! control.append("Archive");
//!
//! let layout = control.lay_out(&RowLayout::monospace(), bounds);
//! for message in run_loop.drain() {
//!     control.update(message, &layout);
//! }
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::animation::IndicatorAnimation;
use crate::deferred::{CancelToken, RunLoop};
use crate::error::{SelectionError, StyleError};
use crate::event::{EventResult, MouseButton, MouseEvent};
use crate::hit_test;
use crate::layout::{LayoutProvider, RowLayout, SegmentLayout, TextMeasure};
use crate::observer::SubscriptionId;
use crate::primitives::Rect;
use crate::selection::{IndicatorGeometry, SelectionModel};
use crate::style::{LabelStyle, SegmentedStyle};

/// Counter for generating unique control IDs.
static CONTROL_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a control instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(u64);

impl ControlId {
    /// Create a new unique control ID.
    pub fn new() -> Self {
        Self(CONTROL_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ControlId {
    fn default() -> Self {
        Self::new()
    }
}

/// Messages a control sends to, or receives from, its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentedMessage {
    /// Deferred first layout for the given control.
    InitialLayout(ControlId),
    /// A tap selected the segment at this index.
    Selected(usize),
}

pub struct SegmentedControl {
    id: ControlId,
    model: SelectionModel,
    style: SegmentedStyle,
    animation: IndicatorAnimation,
    /// Cancelled on drop; guards the deferred initial layout.
    lifetime: CancelToken,
}

impl SegmentedControl {
    /// Create an empty control and schedule its initial layout on `run_loop`.
    pub fn new(
        style: SegmentedStyle,
        run_loop: &mut RunLoop<SegmentedMessage>,
    ) -> Result<Self, StyleError> {
        style.validate()?;
        let control = Self {
            id: ControlId::new(),
            model: SelectionModel::with_width_proportion(style.indicator_width_proportion)?,
            animation: IndicatorAnimation::new(style.animation_duration()),
            style,
            lifetime: CancelToken::new(),
        };
        run_loop.post(
            control.lifetime.clone(),
            SegmentedMessage::InitialLayout(control.id),
        );
        Ok(control)
    }

    pub fn id(&self) -> ControlId {
        self.id
    }

    pub fn model(&self) -> &SelectionModel {
        &self.model
    }

    pub fn style(&self) -> &SegmentedStyle {
        &self.style
    }

    /// Replace the style and move the indicator to match it.
    ///
    /// An invalid style is rejected and the current one kept.
    pub fn set_style<L: LayoutProvider + ?Sized>(
        &mut self,
        style: SegmentedStyle,
        layout: &L,
    ) -> Result<(), StyleError> {
        if let Err(e) = style.validate() {
            tracing::warn!("Rejected style update: {}", e);
            return Err(e);
        }
        self.model
            .set_width_proportion(style.indicator_width_proportion)?;
        self.animation.set_duration(style.animation_duration());
        self.style = style;
        self.refresh(layout);
        Ok(())
    }

    // =====================================================================
    // Segments
    // =====================================================================

    pub fn count(&self) -> usize {
        self.model.count()
    }

    pub fn current_index(&self) -> usize {
        self.model.current_index()
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.model.selected_label()
    }

    pub fn append(&mut self, label: impl Into<String>) {
        self.model.append(label);
    }

    pub fn insert(&mut self, label: impl Into<String>, index: usize) {
        self.model.insert(label, index);
    }

    /// Select a segment, notify observers and start the indicator slide.
    pub fn select<L: LayoutProvider + ?Sized>(
        &mut self,
        index: usize,
        layout: &L,
    ) -> Result<IndicatorGeometry, SelectionError> {
        let geometry = self.model.select(index, layout)?;
        self.animation.set_target(geometry);
        Ok(geometry)
    }

    /// Recompute the indicator for the current selection without notifying.
    ///
    /// Call after anything that moves segment boxes: new segments, a resize,
    /// a style change.
    pub fn refresh<L: LayoutProvider + ?Sized>(&mut self, layout: &L) -> Option<IndicatorGeometry> {
        let geometry = self.model.compute_indicator_geometry(layout)?;
        self.animation.set_target(geometry);
        Some(geometry)
    }

    /// Lay the labels out in a row inside `bounds`.
    pub fn lay_out<M: TextMeasure>(&self, row: &RowLayout<M>, bounds: Rect) -> SegmentLayout {
        row.layout(self.model.segments(), &self.style, bounds)
    }

    /// Each label with the text style it should be drawn in, in layout order.
    pub fn styled_labels(&self) -> Vec<(&str, LabelStyle)> {
        self.model
            .segments()
            .map(|(label, emphasis)| (label, self.style.label_style(emphasis)))
            .collect()
    }

    // =====================================================================
    // Events
    // =====================================================================

    /// Route a pointer event. A tap on a segment selects it.
    pub fn handle_mouse<L: LayoutProvider + ?Sized>(
        &mut self,
        event: &MouseEvent,
        layout: &L,
    ) -> EventResult<SegmentedMessage> {
        let MouseEvent::ButtonReleased {
            button: MouseButton::Left,
            position,
        } = *event
        else {
            return EventResult::Ignored;
        };

        let Some(index) = hit_test::resolve(position, layout) else {
            return EventResult::Ignored;
        };

        match self.select(index, layout) {
            Ok(_) => EventResult::Message(SegmentedMessage::Selected(index)),
            Err(e) => {
                tracing::warn!("Tap on segment {} not applied: {}", index, e);
                EventResult::Ignored
            }
        }
    }

    /// Handle a message drained from the run loop.
    ///
    /// Only this control's `InitialLayout` does anything; everything else is
    /// ignored.
    pub fn update<L: LayoutProvider + ?Sized>(
        &mut self,
        message: SegmentedMessage,
        layout: &L,
    ) -> Option<IndicatorGeometry> {
        match message {
            SegmentedMessage::InitialLayout(id) if id == self.id => self.refresh(layout),
            _ => None,
        }
    }

    // =====================================================================
    // Indicator
    // =====================================================================

    /// Advance the indicator slide. Returns whether another frame is needed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.animation.tick(dt)
    }

    /// Where the indicator is drawn this frame.
    pub fn indicator(&self) -> Option<IndicatorGeometry> {
        self.animation.current()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    // =====================================================================
    // Observers
    // =====================================================================

    pub fn subscribe(&mut self, listener: impl FnMut(usize) + 'static) -> SubscriptionId {
        self.model.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.model.unsubscribe(id)
    }
}

impl Drop for SegmentedControl {
    fn drop(&mut self) {
        self.lifetime.cancel();
    }
}

//! segbar: segmented control with a sliding indicator bar
//!
//! A row of text segments with one of them focused and a bar under the
//! focused segment that slides when the selection changes.
//!
//! # Architecture
//!
//! The crate owns selection state and geometry, not pixels. Segment bounding
//! boxes come from a `LayoutProvider` supplied by the host on every call;
//! `RowLayout` is a reference provider. Pointer input is mapped to a segment
//! with `hit_test::resolve`, fed to `SelectionModel::select`, and the
//! resulting `IndicatorGeometry` drives `IndicatorAnimation`.
//! `SegmentedControl` wires these together.
//!
//! # Usage
//!
//! ```ignore
//! use segbar::{MouseEvent, Point, Rect, RowLayout, RunLoop, SegmentedControl, SegmentedStyle};
//!
//! let mut run_loop = RunLoop::new();
//! let mut control = SegmentedControl::new(SegmentedStyle::default(), &mut run_loop)?;
//! control.append("title1");
//! control.append("title2");
//! let subscription = control.subscribe(|index| println!("selected {index}"));
//!
//! let layout = control.lay_out(&RowLayout::monospace(), Rect::new(0.0, 0.0, 320.0, 44.0));
//! for message in run_loop.drain() {
//!     control.update(message, &layout);
//! }
//! control.handle_mouse(&MouseEvent::tap(Point::new(200.0, 10.0)), &layout);
//! control.unsubscribe(subscription);
//! ```

// Core primitives
pub mod primitives;
pub mod error;

// Selection and geometry
pub mod selection;
pub mod layout;

// Configuration
pub mod style;

// Notifications and scheduling
pub mod observer;
pub mod deferred;
pub mod event;

// Presentation state
pub mod animation;
pub mod control;

// Re-export core types
pub use primitives::{Color, Point, Rect, Size};
pub use error::{SelectionError, StyleError};
pub use selection::{IndicatorGeometry, SelectionModel};
pub use layout::{LayoutProvider, MonospaceMeasure, RowLayout, SegmentLayout, TextMeasure};
pub use style::{Emphasis, FontWeight, LabelStyle, SegmentedStyle};
pub use observer::{SelectionObservers, SubscriptionId};
pub use deferred::{CancelToken, RunLoop};
pub use event::{EventResult, MouseButton, MouseEvent};
pub use animation::IndicatorAnimation;
pub use control::{ControlId, SegmentedControl, SegmentedMessage};

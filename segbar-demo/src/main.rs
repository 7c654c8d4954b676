//! segbar demo - headless walkthrough of a segmented control.
//!
//! Builds a three-segment control, lays it out in a phone-width row, delivers
//! the deferred initial layout and then taps each segment, logging indicator
//! geometry as it goes. Run with `RUST_LOG=debug` to see the library's own
//! tracing.
//!
//! Usage: `segbar-demo [style.json]`

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use segbar::{
    MouseEvent, Point, Rect, RowLayout, RunLoop, SegmentedControl, SegmentedMessage,
    SegmentedStyle,
};
use tracing_subscriber::EnvFilter;

/// Frame step used to play the indicator slide.
const FRAME: Duration = Duration::from_millis(16);

fn load_style() -> Result<SegmentedStyle> {
    match std::env::args().nth(1) {
        Some(path) => SegmentedStyle::load(&path)
            .with_context(|| format!("Failed to load style from {}", path)),
        None => Ok(SegmentedStyle {
            spacing: 4.0,
            indicator_width_proportion: 0.7,
            focused_font_size: 24.0,
            ..SegmentedStyle::default()
        }),
    }
}

fn main() -> Result<()> {
    // Set up logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let style = load_style()?;
    tracing::info!("Starting segbar demo with style {:?}", style);

    let mut run_loop = RunLoop::new();
    let mut control = SegmentedControl::new(style, &mut run_loop).context("Invalid style")?;
    control.append("title1");
    control.append("title2 with some description");
    control.append("🦘wallaby");

    let selections = Rc::new(RefCell::new(Vec::new()));
    let log = selections.clone();
    let subscription = control.subscribe(move |index| {
        tracing::info!("Selection changed to segment {}", index);
        log.borrow_mut().push(index);
    });

    let row = RowLayout::monospace();
    let bounds = Rect::new(0.0, 0.0, 375.0, 44.0);
    let layout = control.lay_out(&row, bounds);
    for (i, rect) in layout.boxes().iter().enumerate() {
        tracing::info!("Segment {} at {:?}", i, rect);
    }

    for message in run_loop.drain() {
        if let Some(geometry) = control.update(message, &layout) {
            tracing::info!("Initial indicator at x={} width={}", geometry.x, geometry.width);
        }
    }

    let centers: Vec<Point> = layout.boxes().iter().map(Rect::center).collect();
    for center in centers.into_iter().rev() {
        let result = control.handle_mouse(&MouseEvent::tap(center), &layout);
        if let Some(SegmentedMessage::Selected(index)) = result.into_message() {
            let frames = play_slide(&mut control);
            let label = control.selected_label().unwrap_or_default();
            tracing::info!("Tapped {:?} (segment {}), slide took {} frames", label, index, frames);

            // Focus styling moves with the selection, so the row is re-laid out.
            let relaid = control.lay_out(&row, bounds);
            if let Some(geometry) = control.refresh(&relaid) {
                let bar = relaid.indicator_rect(&geometry, control.style());
                tracing::info!("Indicator bar at {:?}", bar);
            }
        }
    }

    let miss = control.handle_mouse(&MouseEvent::tap(Point::new(-10.0, 10.0)), &layout);
    tracing::info!("Tap outside the control handled: {}", miss.is_handled());

    for (label, label_style) in control.styled_labels() {
        tracing::info!(
            "{:?}: {}pt {:?} {}",
            label,
            label_style.font_size,
            label_style.weight,
            label_style.color.to_hex()
        );
    }

    control.unsubscribe(subscription);
    tracing::info!("Selections observed: {:?}", selections.borrow());
    Ok(())
}

/// Tick the indicator until it settles. Returns the number of frames.
fn play_slide(control: &mut SegmentedControl) -> usize {
    let mut frames = 0;
    while control.is_animating() {
        control.tick(FRAME);
        frames += 1;
    }
    frames
}

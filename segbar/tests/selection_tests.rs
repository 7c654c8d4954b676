//! Integration tests for selection, hit testing and the control lifecycle.
//!
//! These drive the public API the way a host toolkit would: lay the control
//! out, drain the run loop, feed pointer events and read back geometry.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use segbar::{
    Emphasis, EventResult, IndicatorGeometry, MouseEvent, Point, Rect, RowLayout, RunLoop,
    SegmentedControl, SegmentedMessage, SegmentedStyle, SelectionError, SelectionModel, StyleError,
    hit_test,
};

/// Evenly spaced boxes, 40 wide and 20 tall, starting at x = 0.
fn row_of(n: usize) -> Vec<Rect> {
    (0..n)
        .map(|i| Rect::new(i as f32 * 40.0, 0.0, 40.0, 20.0))
        .collect()
}

fn model_with(labels: &[&str]) -> SelectionModel {
    let mut model = SelectionModel::new();
    for label in labels {
        model.append(*label);
    }
    model
}

fn focused_count(model: &SelectionModel) -> usize {
    model
        .segments()
        .filter(|(_, emphasis)| *emphasis == Emphasis::Focused)
        .count()
}

// =========================================================================
// Selection model properties
// =========================================================================

#[test]
fn exactly_one_segment_focused_after_every_select() {
    let mut model = model_with(&["a", "b", "c", "d"]);
    let layout = row_of(4);
    for index in [3, 0, 2, 2, 1] {
        model.select(index, &layout).unwrap();
        assert_eq!(focused_count(&model), 1);
        assert_eq!(model.emphasis(index), Emphasis::Focused);
    }
}

#[test]
fn geometry_is_idempotent() {
    let mut model = SelectionModel::with_width_proportion(0.7).unwrap();
    model.append("a");
    model.append("b");
    let layout = row_of(2);
    model.select(1, &layout).unwrap();

    let first = model.compute_indicator_geometry(&layout);
    let second = model.compute_indicator_geometry(&layout);
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn select_succeeds_only_in_range() {
    let mut model = model_with(&["a", "b", "c"]);
    let layout = row_of(3);
    model.select(1, &layout).unwrap();

    for index in 0..3 {
        assert!(model.select(index, &layout).is_ok());
    }
    model.select(1, &layout).unwrap();
    for index in [3, 4, usize::MAX] {
        assert_eq!(
            model.select(index, &layout),
            Err(SelectionError::OutOfRange { index, count: 3 })
        );
        assert_eq!(model.current_index(), 1);
    }
}

#[test]
fn scenario_a_geometry_tracks_selected_segment() {
    let mut model = SelectionModel::with_width_proportion(0.7).unwrap();
    model.append("title1");
    model.append("title2");
    let layout = vec![
        Rect::new(0.0, 0.0, 60.0, 20.0),
        Rect::new(64.0, 0.0, 120.0, 20.0),
    ];

    let geometry = model.select(1, &layout).unwrap();
    assert_eq!(geometry.x, 64.0);
    assert_eq!(geometry.width, 120.0 * 0.7);
}

#[test]
fn scenario_b_select_on_empty_fails() {
    let mut model = SelectionModel::new();
    let layout: Vec<Rect> = Vec::new();
    assert_eq!(
        model.select(0, &layout),
        Err(SelectionError::OutOfRange { index: 0, count: 0 })
    );
    assert_eq!(model.current_index(), 0);
}

#[test]
fn scenario_c_insert_keeps_selected_segment() {
    let mut model = model_with(&["orig0", "orig1", "orig2"]);
    model.select(2, &row_of(3)).unwrap();
    assert_eq!(model.selected_label(), Some("orig2"));

    model.insert("X", 1);

    assert_eq!(
        model.labels().collect::<Vec<_>>(),
        vec!["orig0", "X", "orig1", "orig2"]
    );
    // The index moved with the segment; it still names orig2.
    assert_eq!(model.current_index(), 3);
    assert_eq!(model.selected_label(), Some("orig2"));
    assert_eq!(focused_count(&model), 1);
}

#[test]
fn notifications_only_on_successful_select() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut model = SelectionModel::new();
    let log = seen.clone();
    let subscription = model.subscribe(move |index| log.borrow_mut().push(index));

    model.append("a");
    model.insert("b", 0);
    model.insert("c", 10);
    assert!(seen.borrow().is_empty());

    let layout = row_of(3);
    model.select(2, &layout).unwrap();
    model.select(2, &layout).unwrap();
    let _ = model.select(5, &layout);
    assert_eq!(*seen.borrow(), vec![2, 2]);

    assert!(model.unsubscribe(subscription));
    model.select(0, &layout).unwrap();
    assert_eq!(*seen.borrow(), vec![2, 2]);
}

// =========================================================================
// Hit testing
// =========================================================================

#[test]
fn touching_boxes_tie_break_to_lower_index() {
    let layout = vec![
        Rect::new(0.0, 0.0, 10.0, 10.0),
        Rect::new(10.0, 0.0, 10.0, 10.0),
    ];
    assert_eq!(hit_test::resolve(Point::new(10.0, 5.0), &layout), Some(0));
}

#[test]
fn point_outside_every_box_misses() {
    let layout = row_of(3);
    assert_eq!(hit_test::resolve(Point::new(500.0, 5.0), &layout), None);
    assert_eq!(hit_test::resolve(Point::new(20.0, 25.0), &layout), None);
}

// =========================================================================
// Control lifecycle
// =========================================================================

#[test]
fn tap_flow_end_to_end() {
    let mut run_loop = RunLoop::new();
    let style = SegmentedStyle {
        spacing: 4.0,
        indicator_width_proportion: 0.7,
        focused_font_size: 24.0,
        ..SegmentedStyle::default()
    };
    let mut control = SegmentedControl::new(style, &mut run_loop).unwrap();
    control.append("title1");
    control.append("title2 with some description");
    control.append("🦘wallaby");

    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = seen.clone();
    control.subscribe(move |index| log.borrow_mut().push(index));

    let layout = control.lay_out(&RowLayout::monospace(), Rect::new(0.0, 0.0, 375.0, 44.0));
    for message in run_loop.drain() {
        control.update(message, &layout);
    }
    let first = layout.boxes()[0];
    assert_eq!(
        control.indicator(),
        Some(IndicatorGeometry {
            x: first.x,
            width: first.width * 0.7
        })
    );

    let target = layout.boxes()[2];
    let result = control.handle_mouse(&MouseEvent::tap(target.center()), &layout);
    assert_eq!(result, EventResult::Message(SegmentedMessage::Selected(2)));
    assert_eq!(*seen.borrow(), vec![2]);
    assert_eq!(control.selected_label(), Some("🦘wallaby"));

    let miss = control.handle_mouse(&MouseEvent::tap(Point::new(400.0, 10.0)), &layout);
    assert_eq!(miss, EventResult::Ignored);
    assert_eq!(*seen.borrow(), vec![2]);
}

#[test]
fn initial_layout_after_teardown_is_noop() {
    let mut run_loop = RunLoop::new();
    let keep = SegmentedControl::new(SegmentedStyle::default(), &mut run_loop).unwrap();
    let gone = SegmentedControl::new(SegmentedStyle::default(), &mut run_loop).unwrap();
    let gone_id = gone.id();
    drop(gone);

    let messages = run_loop.drain();
    assert_eq!(messages, vec![SegmentedMessage::InitialLayout(keep.id())]);
    assert!(!messages.contains(&SegmentedMessage::InitialLayout(gone_id)));
}

// =========================================================================
// Style configuration
// =========================================================================

#[test]
fn style_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r##"{{ "spacing": 4, "indicator_width_proportion": 0.7, "indicator_color": "#FF3B30" }}"##
    )
    .unwrap();

    let style = SegmentedStyle::load(file.path()).unwrap();
    assert_eq!(style.spacing, 4.0);
    assert_eq!(style.indicator_width_proportion, 0.7);
    assert_eq!(style.indicator_color.to_hex(), "#FF3B30");
    assert_eq!(style.indicator_height, 4.0);
}

#[test]
fn style_load_reports_invalid_values() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "indicator_width_proportion": 1.5 }}"#).unwrap();

    let err = SegmentedStyle::load(file.path()).unwrap_err();
    assert!(matches!(
        err,
        StyleError::Invalid {
            field: "indicator_width_proportion",
            ..
        }
    ));
}

#[test]
fn style_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SegmentedStyle::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, StyleError::Io(_)));
}

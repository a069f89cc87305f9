use chrono::NaiveDate;
use rangepick::shortcuts::{default_shortcuts, find_shortcut};
use rangepick::{Boundary, DateRange, PickerOptions, RangePicker, compute_next_state};

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
}

fn range(start: Option<u32>, end: Option<u32>) -> DateRange {
    DateRange::new(start.map(d), end.map(d))
}

#[test]
fn test_idempotent_toggle() {
    let first = compute_next_state(DateRange::EMPTY, d(8), false, None);
    assert_eq!(first.range, range(Some(8), None));

    let second = compute_next_state(first.range, d(8), false, None);
    assert_eq!(second.range, DateRange::EMPTY);
}

#[test]
fn test_ordering_independent_of_click_order() {
    let late_first = compute_next_state(DateRange::EMPTY, d(14), false, None).range;
    let late_first = compute_next_state(late_first, d(10), false, None).range;

    let early_first = compute_next_state(DateRange::EMPTY, d(10), false, None).range;
    let early_first = compute_next_state(early_first, d(14), false, None).range;

    assert_eq!(late_first, range(Some(10), Some(14)));
    assert_eq!(early_first, late_first);
}

#[test]
fn test_single_day_allowance() {
    let result = compute_next_state(range(Some(8), None), d(8), true, None);
    assert_eq!(result.range, range(Some(8), Some(8)));

    let result = compute_next_state(range(Some(8), None), d(8), false, None);
    assert_eq!(result.range, DateRange::EMPTY);
}

#[test]
fn test_new_selection_reset() {
    let result = compute_next_state(range(Some(10), Some(14)), d(12), false, None);
    assert_eq!(result.range, range(Some(12), None));
}

#[test]
fn test_boundary_toggle_off_on_repeat_click() {
    let result = compute_next_state(range(Some(14), Some(18)), d(14), false, Some(Boundary::Start));
    assert_eq!(result.range, range(None, Some(18)));
    assert_eq!(result.boundary, Some(Boundary::Start));
}

#[test]
fn test_dragging_start_past_lone_end_swaps_roles() {
    let result = compute_next_state(range(None, Some(18)), d(22), false, Some(Boundary::Start));
    assert_eq!(result.range, range(Some(18), Some(22)));
    assert_eq!(result.boundary, Some(Boundary::End));
}

#[test]
fn test_dragging_start_past_full_range_keeps_dragged_boundary() {
    let result = compute_next_state(range(Some(10), Some(18)), d(22), false, Some(Boundary::Start));
    assert_eq!(result.range, range(Some(22), None));
    assert_eq!(result.boundary, Some(Boundary::Start));
}

#[test]
fn test_timestamps_normalize_to_days() {
    use rangepick::dates::{are_same_day, normalize_to_day};

    let clicked = d(10).and_hms_opt(15, 30, 0).unwrap();
    let selected = d(10).and_hms_opt(0, 0, 0).unwrap();
    assert!(are_same_day(clicked, selected));

    let result = compute_next_state(
        range(Some(10), None),
        normalize_to_day(clicked),
        false,
        None,
    );
    assert_eq!(result.range, DateRange::EMPTY);
}

#[test]
fn test_picker_session_with_shortcut_then_clicks() {
    let today = d(15);
    let options = PickerOptions {
        allow_single_day_range: false,
        boundary_to_modify: Some(Boundary::End),
        min_date: d(1),
        max_date: d(31),
    };
    let mut picker = RangePicker::uncontrolled(options, DateRange::EMPTY).unwrap();

    let shortcuts = default_shortcuts(today, options.allow_single_day_range);
    let week = find_shortcut(&shortcuts, "Past week").unwrap();
    assert_eq!(picker.apply_shortcut(week).unwrap(), range(Some(8), Some(15)));

    // Extending the end
    let result = picker.click(d(20)).unwrap();
    assert_eq!(result.range, range(Some(8), Some(20)));
    assert_eq!(result.boundary, Some(Boundary::End));

    // Hover previews a crossing without committing it
    let preview = picker.hover(d(3)).unwrap();
    assert_eq!(preview.range, range(None, Some(3)));
    assert_eq!(picker.value(), range(Some(8), Some(20)));

    picker.leave();
    assert_eq!(picker.displayed_range(), range(Some(8), Some(20)));
}

#[test]
fn test_concurrent_callers_share_nothing() {
    let handles: Vec<_> = (1..=8)
        .map(|offset| {
            std::thread::spawn(move || {
                let mut current = DateRange::EMPTY;
                for day in [10 + offset, 2 + offset] {
                    current = compute_next_state(current, d(day), false, None).range;
                }
                current
            })
        })
        .collect();

    for (offset, handle) in (1..=8).zip(handles) {
        assert_eq!(handle.join().unwrap(), range(Some(2 + offset), Some(10 + offset)));
    }
}

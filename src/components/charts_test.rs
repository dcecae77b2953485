use super::*;

fn series(data: Vec<f64>) -> ChartSeries {
    ChartSeries {
        label: "s".to_owned(),
        data,
        colors: Vec::new(),
    }
}

// =============================================================
// Scaling
// =============================================================

#[test]
fn max_value_never_below_one() {
    assert_eq!(max_value(&[series(vec![0.0, 0.0])]), 1.0);
    assert_eq!(max_value(&[]), 1.0);
    assert_eq!(max_value(&[series(vec![3.0]), series(vec![7.0])]), 7.0);
}

#[test]
fn bar_rects_fill_frame_and_scale_heights() {
    let rects = bar_rects(&[5.0, 10.0], 10.0);
    assert_eq!(rects.len(), 2);
    // Tallest bar spans the full drawable height.
    let (_, y, _, h) = rects[1];
    assert!((h - (CHART_HEIGHT - TOP_MARGIN)).abs() < 1e-9);
    assert!((y - TOP_MARGIN).abs() < 1e-9);
    // Half-height bar.
    let (_, _, _, h0) = rects[0];
    assert!((h0 - (CHART_HEIGHT - TOP_MARGIN) / 2.0).abs() < 1e-9);
    // Bars stay inside the frame.
    for (x, _, w, _) in rects {
        assert!(x >= 0.0 && x + w <= CHART_WIDTH);
    }
}

// =============================================================
// Pie geometry
// =============================================================

#[test]
fn pie_slices_partition_the_circle() {
    let slices = pie_slices(&[1.0, 1.0, 2.0]);
    assert_eq!(slices, vec![(0.0, 0.25), (0.25, 0.5), (0.5, 1.0)]);
}

#[test]
fn pie_slices_of_zero_total_are_empty() {
    assert!(pie_slices(&[0.0, 0.0]).is_empty());
    assert!(pie_slices(&[]).is_empty());
}

#[test]
fn pie_slice_path_sets_large_arc_flag_past_half() {
    let small = pie_slice_path(160.0, 100.0, 90.0, 0.0, 0.25);
    assert!(small.contains(" 0 0 1 "), "{small}");
    let large = pie_slice_path(160.0, 100.0, 90.0, 0.25, 1.0);
    assert!(large.contains(" 0 1 1 "), "{large}");
}

// =============================================================
// Line geometry
// =============================================================

#[test]
fn polyline_spreads_points_across_width() {
    let points = polyline_points(&[0.0, 5.0, 10.0], 10.0);
    let coords: Vec<&str> = points.split(' ').collect();
    assert_eq!(coords.len(), 3);
    assert!(coords[0].starts_with("0.0,"));
    assert!(coords[2].starts_with(&format!("{CHART_WIDTH:.1},")));
}

#[test]
fn single_point_centers_horizontally() {
    let points = polyline_points(&[4.0], 4.0);
    assert!(points.starts_with(&format!("{:.1},", CHART_WIDTH / 2.0)));
}

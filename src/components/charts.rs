//! Inline SVG bar, pie, and line charts for the dashboard.
//!
//! The geometry lives in plain helpers so layout math is testable
//! without a browser; the components only stamp the results into SVG.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use leptos::prelude::*;

use crate::state::dashboard::{ChartData, ChartSeries};

const CHART_WIDTH: f64 = 320.0;
const CHART_HEIGHT: f64 = 200.0;
// Headroom above the tallest value so bars/points never touch the frame.
const TOP_MARGIN: f64 = 20.0;
const FALLBACK_COLOR: &str = "#613B8E";

fn max_value(series: &[ChartSeries]) -> f64 {
    series
        .iter()
        .flat_map(|s| s.data.iter().copied())
        .fold(1.0_f64, f64::max)
}

/// Bar geometry: `(x, y, width, height)` per value, scaled to the frame.
fn bar_rects(data: &[f64], max: f64) -> Vec<(f64, f64, f64, f64)> {
    let slot = CHART_WIDTH / data.len().max(1) as f64;
    let bar_width = slot * 0.6;
    data.iter()
        .enumerate()
        .map(|(i, &v)| {
            let height = (v / max) * (CHART_HEIGHT - TOP_MARGIN);
            let x = i as f64 * slot + (slot - bar_width) / 2.0;
            (x, CHART_HEIGHT - height, bar_width, height)
        })
        .collect()
}

/// Cumulative `(start, end)` fractions of the whole, one pair per value.
fn pie_slices(data: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = data.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = 0.0;
    data.iter()
        .map(|&v| {
            let end = start + v / total;
            let slice = (start, end);
            start = end;
            slice
        })
        .collect()
}

/// SVG path for one pie slice between two fractions of the circle,
/// starting at twelve o'clock.
fn pie_slice_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let angle = |frac: f64| frac * std::f64::consts::TAU - std::f64::consts::FRAC_PI_2;
    let (a0, a1) = (angle(start), angle(end));
    let (x0, y0) = (cx + r * a0.cos(), cy + r * a0.sin());
    let (x1, y1) = (cx + r * a1.cos(), cy + r * a1.sin());
    let large = i32::from(end - start > 0.5);
    format!("M{cx:.1} {cy:.1} L{x0:.1} {y0:.1} A{r:.1} {r:.1} 0 {large} 1 {x1:.1} {y1:.1} Z")
}

/// `points` attribute for a polyline over evenly spaced x positions.
fn polyline_points(data: &[f64], max: f64) -> String {
    let step = if data.len() > 1 {
        CHART_WIDTH / (data.len() - 1) as f64
    } else {
        0.0
    };
    data.iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = if data.len() > 1 {
                i as f64 * step
            } else {
                CHART_WIDTH / 2.0
            };
            let y = CHART_HEIGHT - (v / max) * (CHART_HEIGHT - TOP_MARGIN);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn view_box() -> String {
    format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
}

fn legend(labels: Vec<String>, colors: Vec<String>) -> impl IntoView {
    view! {
        <figcaption class="chart__legend">
            {labels
                .into_iter()
                .zip(colors)
                .map(|(label, color)| {
                    view! {
                        <span class="chart__legend-item">
                            <span class="chart__swatch" style:background-color=color></span>
                            {label}
                        </span>
                    }
                })
                .collect::<Vec<_>>()}
        </figcaption>
    }
}

/// Vertical bar chart, one bar per label.
#[component]
pub fn BarChart(data: ChartData) -> impl IntoView {
    let Some(series) = data.series.first().cloned() else {
        return view! { <p class="chart__empty">"Sem dados."</p> }.into_any();
    };
    let max = max_value(std::slice::from_ref(&series));
    let colors: Vec<String> = (0..series.data.len())
        .map(|i| {
            series
                .colors
                .get(i)
                .cloned()
                .unwrap_or_else(|| FALLBACK_COLOR.to_owned())
        })
        .collect();
    let bars = bar_rects(&series.data, max)
        .into_iter()
        .zip(colors.clone())
        .map(|((x, y, w, h), color)| {
            view! {
                <rect
                    x=format!("{x:.1}")
                    y=format!("{y:.1}")
                    width=format!("{w:.1}")
                    height=format!("{h:.1}")
                    fill=color
                />
            }
        })
        .collect::<Vec<_>>();

    view! {
        <figure class="chart chart--bar">
            <svg viewBox=view_box() role="img" aria-label=series.label>
                {bars}
            </svg>
            {legend(data.labels, colors)}
        </figure>
    }
    .into_any()
}

/// Pie chart of the first series.
#[component]
pub fn PieChart(data: ChartData) -> impl IntoView {
    let Some(series) = data.series.first().cloned() else {
        return view! { <p class="chart__empty">"Sem dados."</p> }.into_any();
    };
    let (cx, cy) = (CHART_WIDTH / 2.0, CHART_HEIGHT / 2.0);
    let r = (CHART_HEIGHT - TOP_MARGIN) / 2.0;
    let colors: Vec<String> = (0..series.data.len())
        .map(|i| {
            series
                .colors
                .get(i)
                .cloned()
                .unwrap_or_else(|| FALLBACK_COLOR.to_owned())
        })
        .collect();
    let slices = pie_slices(&series.data);
    let paths = if slices.len() == 1 {
        // A single slice is the full disc; the arc path degenerates.
        vec![
            view! {
                <path
                    d=format!(
                        "M{:.1} {:.1} m-{r:.1} 0 a{r:.1} {r:.1} 0 1 0 {:.1} 0 a{r:.1} {r:.1} 0 1 0 -{:.1} 0",
                        cx, cy, r * 2.0, r * 2.0,
                    )
                    fill=colors[0].clone()
                />
            },
        ]
    } else {
        slices
            .into_iter()
            .zip(colors.clone())
            .map(|((start, end), color)| {
                view! { <path d=pie_slice_path(cx, cy, r, start, end) fill=color/> }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <figure class="chart chart--pie">
            <svg viewBox=view_box() role="img" aria-label=series.label>
                {paths}
            </svg>
            {legend(data.labels, colors)}
        </figure>
    }
    .into_any()
}

/// Line chart; every series becomes one polyline.
#[component]
pub fn LineChart(data: ChartData) -> impl IntoView {
    if data.series.is_empty() {
        return view! { <p class="chart__empty">"Sem dados."</p> }.into_any();
    }
    let max = max_value(&data.series);
    let strokes: Vec<String> = data
        .series
        .iter()
        .map(|s| {
            s.colors
                .first()
                .cloned()
                .unwrap_or_else(|| FALLBACK_COLOR.to_owned())
        })
        .collect();
    let lines = data
        .series
        .iter()
        .zip(strokes.clone())
        .map(|(series, stroke)| {
            view! {
                <polyline
                    points=polyline_points(&series.data, max)
                    fill="none"
                    stroke=stroke
                    stroke-width="2"
                />
            }
        })
        .collect::<Vec<_>>();
    let series_labels: Vec<String> = data.series.iter().map(|s| s.label.clone()).collect();

    view! {
        <figure class="chart chart--line">
            <svg viewBox=view_box() role="img">
                <line
                    x1="0"
                    y1=format!("{CHART_HEIGHT:.1}")
                    x2=format!("{CHART_WIDTH:.1}")
                    y2=format!("{CHART_HEIGHT:.1}")
                    stroke="#ccc"
                ></line>
                {lines}
            </svg>
            {legend(series_labels, strokes)}
        </figure>
    }
    .into_any()
}

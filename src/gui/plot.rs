// src/gui/plot.rs
//
// ChartSpec → egui_plot. One function per family:
// - radar: polar polygons on a unit circle with metric spokes
// - bar/line/scatter/area: metric index on x, value on y
// - box: one box per (team, metric), player points jittered beside it
//
// Team traces use their palette color; players fall back to PLAYER_PALETTE.

use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{
    uniform_grid_spacer, Bar, BarChart, BoxElem, BoxPlot, BoxSpread, GridMark, Legend, Line,
    Plot, PlotPoint, PlotPoints, Points, Polygon, Text,
};

use crate::chart::{ChartKind, ChartSpec, DistributionTrace, SeriesTrace, SlotColor, Trace};

const PLAYER_PALETTE: [Color32; 4] = [
    Color32::from_rgb(99, 110, 250),
    Color32::from_rgb(239, 85, 59),
    Color32::from_rgb(0, 204, 150),
    Color32::from_rgb(171, 99, 250),
];

const GRID: Color32 = Color32::from_gray(120);

fn rgb(c: SlotColor) -> Color32 {
    Color32::from_rgb(c.rgb[0], c.rgb[1], c.rgb[2])
}

fn series_color(t: &SeriesTrace) -> Color32 {
    match t.color {
        Some(c) => rgb(c),
        None => PLAYER_PALETTE[t.slot % PLAYER_PALETTE.len()],
    }
}

/// Metric name for an integer x; blank between categories.
fn category_label(labels: &[String], x: f64) -> String {
    let i = x.round();
    if (x - i).abs() > 1e-6 || i < 0.0 {
        return s!();
    }
    labels.get(i as usize).cloned().unwrap_or_default()
}

pub fn draw(ui: &mut Ui, spec: &ChartSpec, height: f32) {
    let id = format!("chart_{}", spec.category);
    match spec.kind {
        ChartKind::Radar => radar(ui, &id, spec, height),
        ChartKind::Box => box_plot(ui, &id, spec, height),
        ChartKind::Bar | ChartKind::Line | ChartKind::Scatter | ChartKind::Area => {
            cartesian(ui, &id, spec, height)
        }
    }
}

fn series(spec: &ChartSpec) -> Vec<&SeriesTrace> {
    spec.traces.iter().filter_map(Trace::as_series).collect()
}

/* ---------------- Radar ---------------- */

fn radar(ui: &mut Ui, id: &str, spec: &ChartSpec, height: f32) {
    let n = spec.metrics.len().max(1);
    // First metric at 12 o'clock, clockwise.
    let at = move |i: usize, r: f64| {
        let a = FRAC_PI_2 - TAU * i as f64 / n as f64;
        [r * a.cos(), r * a.sin()]
    };
    let traces = series(spec);

    Plot::new(id)
        .height(height)
        .data_aspect(1.0)
        .legend(Legend::default())
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .include_x(-1.35)
        .include_x(1.35)
        .include_y(-1.2)
        .include_y(1.2)
        .show(ui, |plot_ui| {
            for ring in [0.25, 0.5, 0.75, 1.0] {
                let pts: Vec<[f64; 2]> = (0..=n).map(|i| at(i % n, ring)).collect();
                plot_ui.line(Line::new("", pts).color(GRID.gamma_multiply(0.5)).width(1.0));
            }
            for (i, metric) in spec.metrics.iter().enumerate() {
                plot_ui.line(Line::new("", vec![[0.0, 0.0], at(i, 1.0)]).color(GRID).width(1.0));
                let [x, y] = at(i, 1.18);
                plot_ui.text(Text::new("", PlotPoint::new(x, y), metric.as_str()).color(GRID));
            }

            for t in &traces {
                let color = series_color(t);
                let pts: Vec<[f64; 2]> = t.values.iter().enumerate().map(|(i, &r)| at(i, r)).collect();

                if pts.len() >= 3 {
                    plot_ui.polygon(
                        Polygon::new(t.name.clone(), PlotPoints::new(pts))
                            .fill_color(color.gamma_multiply(0.25))
                            .stroke(Stroke::new(2.0, color)),
                    );
                } else {
                    // One or two metrics: a spoke per value, there is no area to fill.
                    for p in &pts {
                        plot_ui.line(Line::new(t.name.clone(), vec![[0.0, 0.0], *p]).color(color).width(2.0));
                    }
                    plot_ui.points(Points::new(t.name.clone(), pts).color(color).radius(4.0));
                }
            }
        });
}

/* ---------------- Bar / Line / Scatter / Area ---------------- */

fn cartesian(ui: &mut Ui, id: &str, spec: &ChartSpec, height: f32) {
    let labels = spec.metrics.clone();
    let traces = series(spec);
    let groups = traces.len().max(1) as f64;
    let kind = spec.kind;

    Plot::new(id)
        .height(height)
        .legend(Legend::default())
        .allow_scroll(false)
        .allow_drag(false)
        .include_y(0.0)
        .include_x(-0.5)
        .include_x(labels.len() as f64 - 0.5)
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .x_axis_formatter(move |mark: GridMark, _range| category_label(&labels, mark.value))
        .show(ui, |plot_ui| {
            for (k, t) in traces.iter().enumerate() {
                let color = series_color(t);
                let pts: Vec<[f64; 2]> = t.values.iter().enumerate().map(|(x, &y)| [x as f64, y]).collect();

                match kind {
                    ChartKind::Bar => {
                        let w = 0.8 / groups;
                        let offset = (k as f64 - (groups - 1.0) / 2.0) * w;
                        let bars = pts
                            .iter()
                            .map(|&[x, y]| Bar::new(x + offset, y).width(w))
                            .collect();
                        plot_ui.bar_chart(BarChart::new(t.name.clone(), bars).color(color));
                    }
                    ChartKind::Line => {
                        plot_ui.line(Line::new(t.name.clone(), pts.clone()).color(color).width(2.0));
                        plot_ui.points(Points::new(t.name.clone(), pts).color(color).radius(3.5));
                    }
                    ChartKind::Scatter => {
                        let r = t.marker_size.map(|s| s / 2.0).unwrap_or(3.5);
                        plot_ui.points(Points::new(t.name.clone(), pts).color(color).radius(r));
                    }
                    ChartKind::Area => {
                        plot_ui.line(Line::new(t.name.clone(), pts).color(color).width(2.0).fill(0.0_f32));
                    }
                    ChartKind::Radar | ChartKind::Box => {}
                }
            }
        });
}

/* ---------------- Box ---------------- */

/// Deterministic jitter in [-0.5, 0.5] so points don't dance between frames.
fn jitter(i: usize) -> f64 {
    ((i * 7919) % 101) as f64 / 100.0 - 0.5
}

fn box_plot(ui: &mut Ui, id: &str, spec: &ChartSpec, height: f32) {
    let labels = spec.metrics.clone();
    let dists: Vec<&DistributionTrace> = spec.traces.iter().filter_map(Trace::as_distribution).collect();
    let groups = dists.iter().map(|t| t.slot + 1).max().unwrap_or(1) as f64;
    let w = 0.8 / groups;

    let x_of = |t: &DistributionTrace| {
        let m = spec.metrics.iter().position(|m| *m == t.metric).unwrap_or(0) as f64;
        m + (t.slot as f64 - (groups - 1.0) / 2.0) * w
    };

    // (trace name, point, player) for hover text
    let mut hover: Vec<(String, [f64; 2], String)> = Vec::new();
    let mut placed: Vec<(&DistributionTrace, f64, Vec<[f64; 2]>)> = Vec::new();
    for t in &dists {
        let x = x_of(t);
        let pts: Vec<[f64; 2]> = t
            .values
            .iter()
            .enumerate()
            .map(|(i, &y)| [x - w * 0.45 + jitter(i) * w * 0.3 * t.jitter as f64, y])
            .collect();
        for (p, label) in pts.iter().zip(&t.labels) {
            hover.push((t.name.clone(), *p, label.clone()));
        }
        placed.push((t, x, pts));
    }

    Plot::new(id)
        .height(height)
        .legend(Legend::default())
        .allow_scroll(false)
        .allow_drag(false)
        .include_y(0.0)
        .include_y(1.0)
        .include_x(-0.5)
        .include_x(labels.len() as f64 - 0.5)
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .x_axis_formatter(move |mark: GridMark, _range| category_label(&labels, mark.value))
        .label_formatter(move |name, value| {
            let nearest = hover
                .iter()
                .filter(|(n, _, _)| n == name)
                .min_by(|a, b| {
                    let da = (a.1[0] - value.x).powi(2) + (a.1[1] - value.y).powi(2);
                    let db = (b.1[0] - value.x).powi(2) + (b.1[1] - value.y).powi(2);
                    da.total_cmp(&db)
                });
            match nearest {
                Some((_, _, player)) => format!("{player}\n{:.3}", value.y),
                None => format!("{:.3}", value.y),
            }
        })
        .show(ui, |plot_ui| {
            for (t, x, pts) in placed {
                let color = rgb(t.color);
                if let Some(sum) = t.summary() {
                    let elem = BoxElem::new(x, BoxSpread::new(sum.min, sum.q1, sum.median, sum.q3, sum.max))
                        .box_width(w * 0.5)
                        .name(t.name.clone());
                    plot_ui.box_plot(BoxPlot::new(t.name.clone(), vec![elem]).color(color));
                }
                plot_ui.points(Points::new(t.name.clone(), pts).color(color).radius(t.marker_size / 2.0));
            }
        });
}

//! Line chart drawing on an egui painter: axes, grid, tick labels, series,
//! an optional vertical marker, and legend items.

use bevy_egui::egui;

const MARGIN_LEFT: f32 = 44.0;
const MARGIN_BOTTOM: f32 = 34.0;
const MARGIN_TOP: f32 = 24.0;
const MARGIN_RIGHT: f32 = 10.0;
const TICKS: usize = 5;

pub(crate) struct LineSeries {
    /// `[x, y]` pairs in data space, sorted by x.
    pub points: Vec<[f64; 2]>,
    pub color: egui::Color32,
    pub label: String,
}

pub(crate) struct ChartAxes<'a> {
    /// Caption centred above the plot.
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
    /// Draw a vertical guide at this x value when it is inside the x range.
    pub marker_x: Option<f64>,
}

/// `(min, max)` of the finite values, widened to at least `min_span`.
pub(crate) fn padded_range(values: impl Iterator<Item = f64>, min_span: f64) -> Option<(f64, f64)> {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })?;
    if hi - lo < min_span {
        let mid = (lo + hi) / 2.0;
        Some((mid - min_span / 2.0, mid + min_span / 2.0))
    } else {
        Some((lo, hi))
    }
}

pub(crate) fn draw_line_chart(
    ui: &mut egui::Ui,
    series: &[LineSeries],
    axes: &ChartAxes<'_>,
    width: f32,
    height: f32,
) {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 2.0, egui::Color32::from_gray(30));

    let plot = egui::Rect::from_min_max(
        egui::pos2(rect.min.x + MARGIN_LEFT, rect.min.y + MARGIN_TOP),
        egui::pos2(rect.max.x - MARGIN_RIGHT, rect.max.y - MARGIN_BOTTOM),
    );

    let all = || series.iter().flat_map(|s| s.points.iter());
    let (Some((x_min, x_max)), Some((y_min, y_max))) = (
        padded_range(all().map(|p| p[0]), 1.0),
        padded_range(all().map(|p| p[1]), 1.0),
    ) else {
        return;
    };

    let to_screen = |x: f64, y: f64| {
        let fx = ((x - x_min) / (x_max - x_min)) as f32;
        let fy = ((y - y_min) / (y_max - y_min)) as f32;
        egui::pos2(
            plot.min.x + fx * plot.width(),
            plot.max.y - fy * plot.height(),
        )
    };

    let grid = egui::Stroke::new(0.3, egui::Color32::from_gray(60));
    let tick_font = egui::FontId::proportional(10.0);
    let text_color = egui::Color32::from_gray(170);

    // Grid lines and tick labels
    for i in 0..=TICKS {
        let f = i as f64 / TICKS as f64;

        let y_val = y_min + f * (y_max - y_min);
        let y = to_screen(x_min, y_val).y;
        painter.line_segment([egui::pos2(plot.min.x, y), egui::pos2(plot.max.x, y)], grid);
        painter.text(
            egui::pos2(plot.min.x - 4.0, y),
            egui::Align2::RIGHT_CENTER,
            format!("{y_val:.0}"),
            tick_font.clone(),
            text_color,
        );

        let x_val = x_min + f * (x_max - x_min);
        let x = to_screen(x_val, y_min).x;
        painter.line_segment([egui::pos2(x, plot.min.y), egui::pos2(x, plot.max.y)], grid);
        painter.text(
            egui::pos2(x, plot.max.y + 3.0),
            egui::Align2::CENTER_TOP,
            format!("{x_val:.0}"),
            tick_font.clone(),
            text_color,
        );
    }

    painter.text(
        egui::pos2(plot.center().x, rect.min.y + 4.0),
        egui::Align2::CENTER_TOP,
        axes.title,
        egui::FontId::proportional(13.0),
        egui::Color32::from_gray(220),
    );

    // Axis labels
    painter.text(
        egui::pos2(plot.center().x, rect.max.y - 2.0),
        egui::Align2::CENTER_BOTTOM,
        axes.x_label,
        egui::FontId::proportional(11.0),
        text_color,
    );
    painter.text(
        egui::pos2(rect.min.x + 2.0, plot.min.y - 4.0),
        egui::Align2::LEFT_BOTTOM,
        axes.y_label,
        egui::FontId::proportional(11.0),
        text_color,
    );

    if let Some(mx) = axes.marker_x.filter(|x| (x_min..=x_max).contains(x)) {
        let x = to_screen(mx, y_min).x;
        painter.line_segment(
            [egui::pos2(x, plot.min.y), egui::pos2(x, plot.max.y)],
            egui::Stroke::new(1.0, egui::Color32::from_gray(200)),
        );
    }

    // Series
    for s in series {
        let points: Vec<egui::Pos2> = s
            .points
            .iter()
            .filter(|p| p[1].is_finite())
            .map(|p| to_screen(p[0], p[1]))
            .collect();
        for window in points.windows(2) {
            painter.line_segment([window[0], window[1]], egui::Stroke::new(1.5, s.color));
        }
    }

    // Hover readout: nearest sample of each series at the cursor's x
    if let Some(pos) = response.hover_pos().filter(|p| plot.contains(*p)) {
        let x_val = x_min + ((pos.x - plot.min.x) / plot.width()) as f64 * (x_max - x_min);
        let mut line_y = plot.min.y + 4.0;
        for s in series {
            let nearest = s
                .points
                .iter()
                .min_by(|a, b| (a[0] - x_val).abs().total_cmp(&(b[0] - x_val).abs()));
            if let Some(p) = nearest {
                painter.text(
                    egui::pos2(plot.max.x - 4.0, line_y),
                    egui::Align2::RIGHT_TOP,
                    format!("{}: {:.1} @ {:.0}", s.label, p[1], p[0]),
                    tick_font.clone(),
                    s.color,
                );
                line_y += 12.0;
            }
        }
    }
}

pub(crate) fn legend_item(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 1.0, color);
    ui.label(text);
}

//! SVG chart rendering: equity curve over drawdown.

use std::fmt::Write;

const WIDTH: f64 = 700.0;
const HEIGHT: f64 = 400.0;
const PADDING: f64 = 40.0;
const PANEL_GAP: f64 = 30.0;
/// Share of the plot height given to the equity panel.
const EQUITY_SHARE: f64 = 0.65;
/// Points beyond this are decimated by a fixed stride.
const MAX_POINTS: usize = 2000;

struct Panel {
    top: f64,
    height: f64,
}

/// Render a two-panel SVG: equity on top, drawdown (filled) below.
///
/// `equity` and `drawdown` must be index-aligned.
pub fn render_equity_drawdown_svg(equity: &[f64], drawdown: &[f64]) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH:.0}" height="{HEIGHT:.0}" viewBox="0 0 {WIDTH:.0} {HEIGHT:.0}">"#
    );
    let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);

    if equity.is_empty() || equity.len() != drawdown.len() {
        let _ = writeln!(
            svg,
            r#"<text x="{:.0}" y="{:.0}" font-family="sans-serif" font-size="14">No equity data available.</text>"#,
            PADDING,
            HEIGHT / 2.0
        );
        svg.push_str("</svg>\n");
        return svg;
    }

    let plot_height = HEIGHT - 2.0 * PADDING - PANEL_GAP;
    let equity_panel = Panel {
        top: PADDING,
        height: plot_height * EQUITY_SHARE,
    };
    let dd_panel = Panel {
        top: PADDING + plot_height * EQUITY_SHARE + PANEL_GAP,
        height: plot_height * (1.0 - EQUITY_SHARE),
    };

    let (eq_min, eq_max) = bounds(equity);
    let dd_min = drawdown.iter().copied().fold(0.0_f64, f64::min);

    draw_frame(&mut svg, &equity_panel, "Equity (x)", eq_min, eq_max);
    draw_frame(&mut svg, &dd_panel, "Drawdown", dd_min, 0.0);

    let eq_points = polyline_points(equity, &equity_panel, eq_min, eq_max);
    let _ = writeln!(
        svg,
        r##"<polyline fill="none" stroke="#1f77b4" stroke-width="1" points="{eq_points}"/>"##
    );

    let dd_points = polyline_points(drawdown, &dd_panel, dd_min, 0.0);
    let baseline = dd_panel.top;
    let last_x = PADDING + (WIDTH - 2.0 * PADDING);
    let _ = writeln!(
        svg,
        r##"<polygon fill="#d62728" fill-opacity="0.3" stroke="#d62728" stroke-width="1" points="{PADDING:.1},{baseline:.1} {dd_points} {last_x:.1},{baseline:.1}"/>"##
    );

    svg.push_str("</svg>\n");
    svg
}

fn bounds(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}

fn draw_frame(svg: &mut String, panel: &Panel, label: &str, min: f64, max: f64) {
    let plot_width = WIDTH - 2.0 * PADDING;
    let bottom = panel.top + panel.height;
    let _ = writeln!(
        svg,
        r##"<rect x="{PADDING:.1}" y="{:.1}" width="{plot_width:.1}" height="{:.1}" fill="none" stroke="#888888" stroke-width="0.5"/>"##,
        panel.top, panel.height
    );
    let _ = writeln!(
        svg,
        r#"<text x="{PADDING:.1}" y="{:.1}" font-family="sans-serif" font-size="11">{label}</text>"#,
        panel.top - 6.0
    );
    let _ = writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" font-family="sans-serif" font-size="9" text-anchor="end">{max:.4}</text>"#,
        PADDING - 4.0,
        panel.top + 9.0
    );
    let _ = writeln!(
        svg,
        r#"<text x="{:.1}" y="{bottom:.1}" font-family="sans-serif" font-size="9" text-anchor="end">{min:.4}</text>"#,
        PADDING - 4.0
    );
}

fn polyline_points(values: &[f64], panel: &Panel, min: f64, max: f64) -> String {
    let plot_width = WIDTH - 2.0 * PADDING;
    let range = max - min;
    let scale_y = if range > 0.0 { panel.height / range } else { 0.0 };
    let scale_x = if values.len() > 1 {
        plot_width / (values.len() - 1) as f64
    } else {
        0.0
    };
    let stride = values.len().div_ceil(MAX_POINTS).max(1);

    let mut indices: Vec<usize> = (0..values.len()).step_by(stride).collect();
    if indices.last() != Some(&(values.len() - 1)) {
        indices.push(values.len() - 1);
    }

    indices
        .into_iter()
        .map(|i| {
            let x = PADDING + i as f64 * scale_x;
            let y = if range > 0.0 {
                panel.top + panel.height - (values[i] - min) * scale_y
            } else {
                panel.top + panel.height / 2.0
            };
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

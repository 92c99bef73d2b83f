use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, GraphType, Paragraph, Wrap},
};
use yield_core::SweepRange;

use crate::state::{model::Slider, session::Session};

use super::theme::Theme;

/// Yield axis padding, as a fraction of the plotted span.
const Y_PADDING: f64 = 0.05;

pub fn header(session: &Session) -> Paragraph<'_> {
    let fit = session.fit();

    let line1 = Line::from(vec![
        Span::styled("Rice Yield Forecast", Theme::title()),
        Span::styled("  |  ", Theme::muted()),
        Span::styled(
            format!("{} model", session.model().regressor().kind()),
            Theme::dim(),
        ),
    ]);

    let line2 = Line::from(vec![
        Span::styled("Model accuracy (R²): ", Theme::text()),
        Span::styled(format!("{:.2}", fit.r2), r2_style(fit.r2.value())),
        Span::styled(
            format!("  on {} historical record(s)", fit.samples),
            Theme::dim(),
        ),
    ]);

    Paragraph::new(vec![line1, line2])
        .block(panel(" Overview ", false))
        .wrap(Wrap { trim: true })
}

/// A gauge showing where the slider value sits within its range.
pub fn slider(slider: &Slider, selected: bool) -> Gauge<'_> {
    let title = format!(" {} ", slider.kind.label());
    let label = format!(
        "{:.*} {}",
        slider.decimals(),
        slider.value(),
        slider.kind.unit()
    );

    let gauge_style = if selected {
        Theme::gauge_focus()
    } else {
        Theme::gauge()
    };

    Gauge::default()
        .block(panel(&title, selected))
        .gauge_style(gauge_style)
        .ratio(slider.ratio())
        .label(Span::styled(label, Theme::text().add_modifier(Modifier::BOLD)))
}

pub fn headline(session: &Session) -> Paragraph<'_> {
    let title = format!(" Predicted yield (t) at pH {:.1} ", session.reference_ph());

    let line = match session.forecast() {
        Ok(forecast) => Line::from(Span::styled(
            format_thousands(forecast.headline, 2),
            Theme::figure(),
        )),
        Err(_) => Line::from(Span::styled("unavailable", Theme::error())),
    };

    Paragraph::new(vec![Line::from(""), line])
        .block(panel(&title, false))
        .alignment(Alignment::Center)
}

pub fn fit(session: &Session) -> Paragraph<'_> {
    let fit = session.fit();
    let range = session.sweep_range();

    let mut lines = vec![
        kv("rmse", format!("{:.3}", fit.rmse)),
        kv("mae", format!("{:.3}", fit.mae)),
        kv(
            "ph sweep",
            format!(
                "{:.1} to {:.1} by {}",
                range.start(),
                range.end(),
                range.step()
            ),
        ),
    ];

    if let Some(peak) = session.forecast().ok().and_then(|f| f.curve.peak()) {
        lines.push(kv(
            "best ph",
            format!(
                "{:.1} ({})",
                peak.ph,
                format_thousands(peak.predicted_yield, 2)
            ),
        ));
    }

    Paragraph::new(lines)
        .block(panel(" Diagnostics ", false))
        .wrap(Wrap { trim: true })
}

/// Plots the predicted yield across the acidity sweep.
///
/// `curve` holds the `(ph, yield)` pairs and `reference` the headline point.
pub fn chart<'a>(
    curve: &'a [(f64, f64)],
    reference: &'a [(f64, f64)],
    range: SweepRange,
    bounds: (f64, f64),
) -> Chart<'a> {
    let datasets = vec![
        Dataset::default()
            .name("predicted yield")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Theme::curve())
            .data(curve),
        Dataset::default()
            .name("reference ph")
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Theme::marker())
            .data(reference),
    ];

    let (lo, hi) = y_bounds(bounds);

    Chart::new(datasets)
        .block(panel(" Yield vs soil pH ", false))
        .x_axis(
            Axis::default()
                .title(Span::styled("pH", Theme::dim()))
                .style(Theme::muted())
                .bounds([range.start(), range.end()])
                .labels(axis_labels(range.start(), range.end(), 1)),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("yield (t)", Theme::dim()))
                .style(Theme::muted())
                .bounds([lo, hi])
                .labels(axis_labels(lo, hi, 2)),
        )
}

/// Placeholder shown in the chart area when the forecast could not be computed.
pub fn chart_error(reason: &str) -> Paragraph<'_> {
    Paragraph::new(vec![
        Line::from(Span::styled("Prediction failed", Theme::error())),
        Line::from(""),
        Line::from(Span::styled(reason, Theme::text())),
    ])
    .block(panel(" Yield vs soil pH ", false))
    .wrap(Wrap { trim: true })
}

pub fn status(session: &Session) -> Paragraph<'_> {
    let line = match session.forecast() {
        Ok(_) => Line::from(vec![
            Span::styled("↑/↓", Theme::accent_sky()),
            Span::styled(" select  ", Theme::muted()),
            Span::styled("←/→", Theme::accent_sky()),
            Span::styled(" adjust  ", Theme::muted()),
            Span::styled("PgUp/PgDn", Theme::accent_sky()),
            Span::styled(" ×10  ", Theme::muted()),
            Span::styled("r", Theme::accent_sky()),
            Span::styled(" reset  ", Theme::muted()),
            Span::styled("q", Theme::accent_sky()),
            Span::styled(" quit", Theme::muted()),
        ]),
        Err(reason) => Line::from(vec![
            Span::styled("error: ", Theme::error()),
            Span::styled(reason, Theme::warn()),
        ]),
    };

    Paragraph::new(line).style(Theme::base())
}

/// Formats `value` with `decimals` digits and comma-grouped thousands.
pub fn format_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int, frac) = match formatted.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(formatted.len() + int.len() / 3 + 1);
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if let Some(frac) = frac {
        grouped.push('.');
        grouped.push_str(frac);
    }

    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    if value.is_sign_negative() && !is_zero {
        grouped.insert(0, '-');
    }

    grouped
}

fn panel(title: &str, focused: bool) -> Block<'static> {
    let border = if focused {
        Theme::border_focus()
    } else {
        Theme::border()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title.to_string())
        .title_style(Theme::title())
        .style(Theme::base())
}

fn kv(key: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:<10}"), Theme::dim()),
        Span::styled(value, Theme::text()),
    ])
}

fn r2_style(r2: f64) -> Style {
    if r2 >= 0.8 {
        Theme::ok()
    } else if r2 >= 0.5 {
        Theme::warn()
    } else {
        Theme::error()
    }
}

fn y_bounds((lo, hi): (f64, f64)) -> (f64, f64) {
    let span = hi - lo;
    if span <= f64::EPSILON * hi.abs().max(1.0) {
        return (lo - 0.5, hi + 0.5);
    }

    (lo - span * Y_PADDING, hi + span * Y_PADDING)
}

fn axis_labels(lo: f64, hi: f64, decimals: usize) -> Vec<Span<'static>> {
    let mid = (lo + hi) / 2.0;
    [lo, mid, hi]
        .into_iter()
        .map(|v| Span::styled(format!("{v:.decimals$}"), Theme::muted()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_thousands(4523.456, 2), "4,523.46");
        assert_eq!(format_thousands(1234567.0, 2), "1,234,567.00");
        assert_eq!(format_thousands(999.994, 2), "999.99");
        assert_eq!(format_thousands(999.999, 2), "1,000.00");
    }

    #[test]
    fn small_and_negative_values() {
        assert_eq!(format_thousands(0.0, 2), "0.00");
        assert_eq!(format_thousands(4.87, 1), "4.9");
        assert_eq!(format_thousands(-12345.5, 1), "-12,345.5");
        assert_eq!(format_thousands(-0.001, 2), "0.00");
    }

    #[test]
    fn no_decimals() {
        assert_eq!(format_thousands(1500.0, 0), "1,500");
    }

    #[test]
    fn flat_curves_get_padded_bounds() {
        assert_eq!(y_bounds((4.0, 4.0)), (3.5, 4.5));

        let (lo, hi) = y_bounds((2.0, 4.0));
        assert!((lo - 1.9).abs() < 1e-12);
        assert!((hi - 4.1).abs() < 1e-12);
    }
}

use ratatui::{widgets::Block, Frame};

use crate::state::session::Session;

use super::{layout, theme::Theme, widgets};

/// Draws the whole dashboard.
pub fn draw(f: &mut Frame, session: &Session) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let (header_area, body_area, status_area) = layout::vertical(area);
    let (controls_area, chart_area) = layout::body(body_area);

    let sliders = session.sliders();
    let (sliders_area, headline_area, fit_area) = layout::controls(controls_area, sliders.len());

    f.render_widget(widgets::header(session), header_area);

    for (i, (slider, row)) in sliders
        .iter()
        .zip(layout::sliders(sliders_area, sliders.len()))
        .enumerate()
    {
        f.render_widget(widgets::slider(slider, i == session.selected()), row);
    }

    f.render_widget(widgets::headline(session), headline_area);
    f.render_widget(widgets::fit(session), fit_area);

    match session.forecast() {
        Ok(forecast) => {
            let curve = forecast.curve.as_xy();
            let reference = [(session.reference_ph(), forecast.headline)];
            let bounds = forecast
                .curve
                .yield_bounds()
                .map_or((forecast.headline, forecast.headline), |(lo, hi)| {
                    (lo.min(forecast.headline), hi.max(forecast.headline))
                });

            f.render_widget(
                widgets::chart(&curve, &reference, session.sweep_range(), bounds),
                chart_area,
            );
        }
        Err(reason) => f.render_widget(widgets::chart_error(reason), chart_area),
    }

    f.render_widget(widgets::status(session), status_area);
}

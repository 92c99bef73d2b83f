use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computes the main layout regions.
///
/// # Returns
/// (header, body, status)
pub fn vertical(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(12),
            Constraint::Length(1),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Splits body into (controls, chart).
pub fn body(area: Rect) -> (Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(area);

    (cols[0], cols[1])
}

/// Splits controls into (sliders, headline, fit).
pub fn controls(area: Rect, nsliders: usize) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(nsliders as u16 * 3),
            Constraint::Length(5),
            Constraint::Min(6),
        ])
        .split(area);

    (rows[0], rows[1], rows[2])
}

/// Splits the inner sliders panel into one row per slider.
pub fn sliders(area: Rect, nsliders: usize) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            (0..nsliders)
                .map(|_| Constraint::Length(3))
                .chain(std::iter::once(Constraint::Min(0)))
                .collect::<Vec<_>>(),
        )
        .split(area)
        .iter()
        .take(nsliders)
        .copied()
        .collect()
}

/// Centers a rectangle taking the given percentages of `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vert[1])[1]
}

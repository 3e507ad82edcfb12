use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub hero: Option<Rect>,
    pub alert: Option<Rect>,
    pub form: Rect,
    pub footer: Rect,
    pub status_bar: Rect,
}

/// Widest the form column gets, per screen.
pub const AUTH_WIDTH: u16 = 56;
pub const APPLICATION_WIDTH: u16 = 80;

/// `alert_height` is the banner's row count, zero when none is showing.
pub fn compute_layout(area: Rect, show_hero: bool, alert_height: u16, form_width: u16) -> AppLayout {
    // Main vertical split: header | content | footer | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Content
            Constraint::Length(1), // Footer
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let header = main_chunks[0];
    let footer = main_chunks[2];
    let status_bar = main_chunks[3];

    // Center the content column horizontally
    let [column] = Layout::horizontal([Constraint::Max(form_width)])
        .flex(Flex::Center)
        .areas(main_chunks[1]);

    let content_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if show_hero { 3 } else { 0 }),  // Hero
            Constraint::Length(alert_height),                   // Alert banner
            Constraint::Min(3),                                  // Form
        ])
        .split(column);

    AppLayout {
        header,
        hero: show_hero.then_some(content_chunks[0]),
        alert: (alert_height > 0).then_some(content_chunks[1]),
        form: content_chunks[2],
        footer,
        status_bar,
    }
}

/// Centered popup rectangle, `pct_w`/`pct_h` percent of `area` with minimums.
pub fn popup_area(area: Rect, pct_w: u16, pct_h: u16, min_w: u16, min_h: u16) -> Rect {
    let w = percent_of(area.width, pct_w)
        .max(min_w)
        .min(area.width.saturating_sub(4));
    let h = percent_of(area.height, pct_h)
        .max(min_h)
        .min(area.height.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w, h)
}

fn percent_of(len: u16, pct: u16) -> u16 {
    (u32::from(len) * u32::from(pct) / 100) as u16
}

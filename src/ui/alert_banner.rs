use crate::app::alert::AlertKind;
use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

/// Message rows shown before the banner stops growing.
const MAX_LINES: u16 = 6;

/// Banner with the current alert and a countdown rule along its bottom
/// border. Draws nothing when no alert is showing.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(alert) = state.alert.current() else {
        return;
    };

    let style = match alert.kind {
        AlertKind::Success => Theme::alert_success(),
        AlertKind::Error => Theme::alert_error(),
    };
    let icon = icon(alert.kind);

    let ratio = state.alert.remaining_ratio(Instant::now());
    let bar_width = (area.width.saturating_sub(2) as f64 * ratio).round() as usize;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(style)
        .title_bottom(Line::from(Span::styled("━".repeat(bar_width), style)))
        .title(Line::from(Span::styled(" Esc × ", Theme::hint())).right_aligned());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = Line::from(vec![
        Span::styled(format!(" {} ", icon), style.add_modifier(Modifier::BOLD)),
        Span::styled(alert.message.as_str(), style),
    ]);
    frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), inner);
}

fn icon(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Success => "✔",
        AlertKind::Error => "✖",
    }
}

/// Rows the banner needs in a column `width` wide, borders included.
/// Zero when no alert is showing.
pub fn height(state: &AppState, width: u16) -> u16 {
    let Some(alert) = state.alert.current() else {
        return 0;
    };
    let text = format!(" {} {}", icon(alert.kind), alert.message);
    wrapped_lines(&text, width.saturating_sub(2)).min(MAX_LINES) + 2
}

/// Greedy word wrap line count, long words split across rows.
fn wrapped_lines(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut lines = 1;
    let mut used = 0;
    for word in text.split_whitespace() {
        let w = word.width();
        if used > 0 && used + 1 + w <= width {
            used += 1 + w;
            continue;
        }
        if used > 0 {
            lines += 1;
        }
        used = w;
        while used > width {
            lines += 1;
            used -= width;
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn counts_wrapped_rows() {
        assert_eq!(wrapped_lines("", 10), 1);
        assert_eq!(wrapped_lines("short", 10), 1);
        assert_eq!(wrapped_lines("one two three", 7), 2);
        assert_eq!(wrapped_lines("abcdefghijklmnopqrstuvwxy", 10), 3);
    }

    #[test]
    fn height_follows_the_message() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(height(&state, 56), 0);

        state.alert.error("Passwords do not match.", Instant::now());
        assert_eq!(height(&state, 56), 3);

        state.alert.error("word ".repeat(200), Instant::now());
        assert_eq!(height(&state, 56), MAX_LINES + 2);
    }
}

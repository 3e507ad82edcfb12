use crate::app::forms::EntryKind;
use crate::app::state::AppState;
use crate::ui::layout::popup_area;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};

pub fn render(frame: &mut Frame, state: &AppState) {
    let browser = &state.file_browser;
    if !browser.visible {
        return;
    }

    let popup = popup_area(frame.area(), 70, 80, 50, 14);

    // Clear background
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Choose your résumé ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused())
        .style(Style::default().bg(Theme::BG_SURFACE));

    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    if inner.height < 5 || inner.width < 20 {
        return;
    }

    // Current directory
    let path_area = Rect::new(inner.x, inner.y, inner.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" 📁 ", Theme::directory()),
            Span::styled(browser.dir.display().to_string(), Theme::directory()),
        ])),
        path_area,
    );

    // Separator
    let sep_area = Rect::new(inner.x, inner.y + 1, inner.width, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "─".repeat(inner.width as usize),
            Style::default().fg(Theme::BORDER_DIM),
        )),
        sep_area,
    );

    // List area: path + separator above, filter + help below
    let list_h = (inner.height as usize).saturating_sub(4);
    let list_area = Rect::new(
        inner.x,
        inner.y + 2,
        inner.width.saturating_sub(1),
        list_h as u16,
    );

    let start = visible_start(browser.selected, browser.scroll_offset, list_h);
    let end = (start + list_h).min(browser.entries.len());

    let mut lines: Vec<Line> = Vec::new();
    if browser.entries.is_empty() {
        lines.push(Line::from(Span::styled(
            "  (empty)",
            Style::default().fg(Theme::TEXT_MUTED),
        )));
    }
    for (i, entry) in browser.entries.iter().enumerate().take(end).skip(start) {
        let (icon, base) = match entry.kind {
            EntryKind::Parent => ("↩ ", Theme::directory()),
            EntryKind::Directory => ("▸ ", Theme::directory()),
            EntryKind::File => ("📄", Style::default().fg(Theme::TEXT_PRIMARY)),
        };
        let style = if i == browser.selected {
            Theme::selected_row()
        } else {
            base
        };
        lines.push(Line::from(Span::styled(format!(" {} {}", icon, entry.name), style)));
    }
    frame.render_widget(Paragraph::new(lines), list_area);

    // Scrollbar
    if browser.entries.len() > list_h {
        let scrollbar_area = Rect::new(
            inner.x + inner.width.saturating_sub(1),
            inner.y + 2,
            1,
            list_h as u16,
        );
        let mut scrollbar_state =
            ScrollbarState::new(browser.entries.len().saturating_sub(list_h)).position(start);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }

    // Allow-list footer
    let filter_area = Rect::new(inner.x, inner.y + inner.height - 2, inner.width, 1);
    let exts = browser
        .extensions()
        .iter()
        .map(|e| format!(".{}", e))
        .collect::<Vec<_>>()
        .join(" ");
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" Showing folders and {}", exts), Theme::hint())),
        filter_area,
    );

    // Keybinding help
    let help_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
    let help = Line::from(vec![
        Span::styled(" ↑↓", Theme::key_hint()),
        Span::styled(" Navigate  ", Theme::hint()),
        Span::styled("Enter", Theme::key_hint()),
        Span::styled(" Open/Select  ", Theme::hint()),
        Span::styled("Backspace", Theme::key_hint()),
        Span::styled(" Parent  ", Theme::hint()),
        Span::styled("Esc", Theme::key_hint()),
        Span::styled(" Close", Theme::hint()),
    ]);
    frame.render_widget(Paragraph::new(help), help_area);
}

/// First listed row so that `selected` is inside a window of `height` rows.
fn visible_start(selected: usize, offset: usize, height: usize) -> usize {
    if height == 0 {
        return offset;
    }
    if selected < offset {
        selected
    } else if selected >= offset + height {
        selected + 1 - height
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::visible_start;

    #[test]
    fn window_follows_selection() {
        assert_eq!(visible_start(0, 0, 10), 0);
        assert_eq!(visible_start(14, 0, 10), 5);
        assert_eq!(visible_start(2, 5, 10), 2);
        assert_eq!(visible_start(7, 5, 10), 5);
    }
}

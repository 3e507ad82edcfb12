//! Labelled input box shared by every form.

use crate::app::forms::TextField;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

/// Bordered block styled by focus. `fading` wins over focus.
pub fn field_block(title: &str, focused: bool, fading: bool) -> Block<'_> {
    let (border_style, border_type) = if fading {
        (Theme::border_fading(), Theme::border_type())
    } else if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };
    Block::default()
        .title(format!(" {} ", title))
        .title_style(if focused { Theme::title() } else { Theme::hint() })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1))
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    placeholder: &str,
    field: &TextField,
    focused: bool,
    fading: bool,
) {
    let block = field_block(label, focused, fading);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if field.text.is_empty() {
        frame.render_widget(Paragraph::new(placeholder).style(Theme::placeholder()), inner);
        if focused {
            frame.set_cursor_position((inner.x, inner.y));
        }
        return;
    }

    let (line, before) = field.cursor_line();
    let before_width = if field.masked {
        before.chars().count()
    } else {
        UnicodeWidthStr::width(before)
    } as u16;

    // Scroll so the cursor stays inside the box
    let row_offset = (line as u16).saturating_sub(inner.height.saturating_sub(1));
    let col_offset = before_width.saturating_sub(inner.width.saturating_sub(1));

    let paragraph = Paragraph::new(field.display())
        .style(Theme::input_text())
        .scroll((row_offset, col_offset));
    frame.render_widget(paragraph, inner);

    if focused {
        let cursor_x = inner.x + before_width - col_offset;
        let cursor_y = inner.y + line as u16 - row_offset;
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), cursor_y));
    }
}

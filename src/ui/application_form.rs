use crate::api::Position;
use crate::app::forms::ApplicationField;
use crate::app::state::AppState;
use crate::ui::auth_form::render_submit;
use crate::ui::field;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

const RESUME_PROMPT: &str = "Press Enter to upload your résumé";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let fading = state.transition > 0;
    let block = Block::default()
        .title(Line::from(" Submit your application ").centered())
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(if fading { Theme::border_fading() } else { Theme::border() });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Length(1), // Subtitle
        Constraint::Length(3), // Phone
        Constraint::Length(3), // Position
        Constraint::Min(5),    // Motivation
        Constraint::Length(4), // Résumé
        Constraint::Length(1), // Spacer
        Constraint::Length(1), // Submit
    ])
    .split(inner);

    let form = &state.application;

    frame.render_widget(
        Paragraph::new("We look forward to discovering your profile.")
            .style(Theme::hint())
            .centered(),
        rows[0],
    );

    field::render(
        frame,
        rows[1],
        "Phone number",
        "0555 12 34 56",
        &form.phone,
        form.focus == ApplicationField::Phone,
        fading,
    );

    render_position(
        frame,
        rows[2],
        form.position,
        form.focus == ApplicationField::Position,
        fading,
    );

    field::render(
        frame,
        rows[3],
        "Cover letter",
        "Tell us why you want to join (Enter for a new line)",
        &form.motivation,
        form.focus == ApplicationField::Motivation,
        fading,
    );

    render_resume(frame, rows[4], state, form.focus == ApplicationField::Resume, fading);

    render_submit(
        frame,
        rows[6],
        "SEND MY APPLICATION",
        form.focus == ApplicationField::Submit,
    );
}

fn render_position(frame: &mut Frame, area: Rect, position: Position, focused: bool, fading: bool) {
    let block = field::field_block("Position", focused, fading);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![Span::styled("◀ ", Theme::key_hint())];
    for (i, p) in Position::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Theme::border()));
        }
        let style = if *p == position {
            Theme::tab_active()
        } else {
            Theme::tab_inactive()
        };
        spans.push(Span::styled(p.label(), style));
    }
    spans.push(Span::styled(" ▶", Theme::key_hint()));
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

/// Drop-zone style box: the chosen file name, or the upload prompt.
fn render_resume(frame: &mut Frame, area: Rect, state: &AppState, focused: bool, fading: bool) {
    let block = field::field_block("Résumé", focused, fading)
        .border_type(ratatui::widgets::BorderType::Double);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = match &state.application.resume {
        Some(file) => Line::from(vec![
            Span::styled("📄 ", Theme::brand()),
            Span::styled(file.file_name.as_str(), Theme::brand()),
        ]),
        None => Line::from(Span::styled(format!("⇪ {}", RESUME_PROMPT), Theme::brand())),
    };
    let hint = Line::from(Span::styled(state.config.ui.resume_hint.as_str(), Theme::hint()));
    frame.render_widget(Paragraph::new(vec![label.centered(), hint.centered()]), inner);
}

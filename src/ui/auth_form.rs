use crate::app::forms::{AuthView, LoginField, RegisterField};
use crate::app::state::AppState;
use crate::ui::field;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let fading = state.transition > 0;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(if fading { Theme::border_fading() } else { Theme::border() });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let view = state.auth.view;
    let field_count: u16 = match view {
        AuthView::Login => 2,
        AuthView::Register => 4,
    };

    let mut constraints = vec![Constraint::Length(2)]; // Tabs
    constraints.extend((0..field_count).map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Length(1)); // Spacer
    constraints.push(Constraint::Length(1)); // Submit
    constraints.push(Constraint::Min(0));
    let rows = Layout::vertical(constraints).split(inner);

    render_tabs(frame, rows[0], view);

    let submit_row = rows[field_count as usize + 2];
    match view {
        AuthView::Login => {
            let form = &state.auth.login;
            field::render(
                frame,
                rows[1],
                "Email address",
                "you@example.com",
                &form.email,
                form.focus == LoginField::Email,
                fading,
            );
            field::render(
                frame,
                rows[2],
                "Password",
                "",
                &form.password,
                form.focus == LoginField::Password,
                fading,
            );
            render_submit(frame, submit_row, "ENTER →", form.focus == LoginField::Submit);
        }
        AuthView::Register => {
            let form = &state.auth.register;
            let fields = [
                ("Full name", "", &form.name, RegisterField::Name),
                ("Email address", "you@example.com", &form.email, RegisterField::Email),
                ("Create a password", "", &form.password, RegisterField::Password),
                ("Confirm the password", "", &form.confirm_password, RegisterField::ConfirmPassword),
            ];
            for (i, (label, placeholder, value, which)) in fields.into_iter().enumerate() {
                field::render(
                    frame,
                    rows[i + 1],
                    label,
                    placeholder,
                    value,
                    form.focus == which,
                    fading,
                );
            }
            render_submit(frame, submit_row, "SIGN UP →", form.focus == RegisterField::Submit);
        }
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, view: AuthView) {
    let (login_style, register_style) = match view {
        AuthView::Login => (Theme::tab_active(), Theme::tab_inactive()),
        AuthView::Register => (Theme::tab_inactive(), Theme::tab_active()),
    };
    let tabs = Line::from(vec![
        Span::styled("F1 ", Theme::key_hint()),
        Span::styled("LOG IN", login_style),
        Span::raw("     "),
        Span::styled("F2 ", Theme::key_hint()),
        Span::styled("SIGN UP", register_style),
    ])
    .centered();
    frame.render_widget(Paragraph::new(tabs), area);
}

pub fn render_submit(frame: &mut Frame, area: Rect, label: &str, focused: bool) {
    let style = if focused {
        Theme::button()
    } else {
        Theme::button_idle()
    };
    let button = Line::from(Span::styled(format!("  {}  ", label), style)).centered();
    frame.render_widget(Paragraph::new(button), area);
}

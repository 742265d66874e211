use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::generator::{Field, RequestState};
use crate::ui::header::Header;
use crate::ui::layout::{body_panels, form_slots, layout_regions};
use crate::ui::theme::{
    ACCENT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, LABEL_TEXT, STATUS_ERROR, STATUS_OK,
};

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

const FORM_FIELDS: [Field; 3] = [Field::Topic, Field::Audience, Field::Length];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new();
    frame.render_widget(header_widget.widget(app.backend_url()), header);

    frame.render_widget(Clear, body);
    let (form_area, output_area) = body_panels(body);
    draw_form(frame, app, form_area);
    draw_output(frame, app, output_area);

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer), footer);
}

fn draw_form(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let state = app.generator();
    let slots = form_slots(area, FORM_FIELDS.len());

    for (field, slot) in FORM_FIELDS.iter().zip(slots) {
        let focused = state.focus == *field;
        let value: &str = match field {
            Field::Topic => &state.form.topic,
            Field::Audience => &state.form.audience,
            Field::Length => &state.form.length_input,
        };

        let border_color = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
        let label_style = if focused {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(LABEL_TEXT)
        };

        let block = Block::default()
            .title(Span::styled(field.label(), label_style))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let mut spans = vec![Span::styled(
            value.to_string(),
            Style::default().fg(HEADER_TEXT),
        )];
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), slot);
    }
}

fn draw_output(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let state = app.generator();

    let (title_color, lines, scroll) = match &state.request {
        RequestState::Idle => (
            GLOBAL_BORDER,
            vec![Line::from(Span::styled(
                "Fill in the form and press Enter to generate a draft.",
                Style::default().fg(LABEL_TEXT),
            ))],
            0,
        ),
        RequestState::Loading => {
            let spinner = SPINNER_FRAMES[app.tick_count() % SPINNER_FRAMES.len()];
            (
                ACCENT,
                vec![Line::from(Span::styled(
                    format!("{} Generating draft…", spinner),
                    Style::default().fg(ACCENT),
                ))],
                0,
            )
        }
        RequestState::Success { draft } => (
            STATUS_OK,
            draft
                .lines()
                .map(|line| Line::from(line.to_string()))
                .collect(),
            state.scroll,
        ),
        RequestState::Failed { message } => (
            STATUS_ERROR,
            vec![Line::from(Span::styled(
                message.clone(),
                Style::default().fg(STATUS_ERROR),
            ))],
            0,
        ),
    };

    let block = Block::default()
        .title(Span::styled("Draft", Style::default().fg(title_color)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(widget, area);
}

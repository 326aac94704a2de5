use crate::ui::app::App;
use crate::ui::dialog::render_error_dialog;
use crate::ui::footer::Footer;
use crate::ui::form::{ConvertFormState, FormFocus};
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::selection::SelectionGroup;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, STATUS_OK, TEXT, TEXT_DIM,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(), header);
    frame.render_widget(Clear, body);
    draw_form(frame, body, app.form());
    frame.render_widget(Footer::new().widget(footer), footer);

    if let Some(error) = &app.form().error {
        render_error_dialog(frame, error);
    }
}

fn draw_form(frame: &mut Frame<'_>, area: Rect, form: &ConvertFormState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(area);

    draw_group(
        frame,
        rows[0],
        " FROM base ",
        &form.from,
        form.focus == FormFocus::FromGroup,
    );
    draw_group(
        frame,
        rows[1],
        " TO base ",
        &form.to,
        form.focus == FormFocus::ToGroup,
    );
    draw_input(frame, rows[2], form);
    draw_result(frame, rows[3], form);
}

fn draw_group(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &'static str,
    group: &SelectionGroup,
    focused: bool,
) {
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![Span::raw(" ")];
    for (index, base) in group.options().iter().enumerate() {
        let selected = group.is_selected(index);
        let under_cursor = focused && group.cursor() == index;

        let mut style = if selected {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT)
        };
        if under_cursor {
            style = style.bg(ACTIVE_HIGHLIGHT);
        }

        let marker = if selected { "●" } else { "○" };
        spans.push(Span::styled(
            format!(" {marker} {} ({}) ", base.label(), base.radix()),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn draw_input(frame: &mut Frame<'_>, area: Rect, form: &ConvertFormState) {
    let focused = form.focus == FormFocus::Input && !form.error_visible();
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(" Number ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![Span::styled(
        format!(" {}", form.input),
        Style::default().fg(TEXT),
    )];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(ACCENT)));
    } else if form.input.is_empty() {
        spans.push(Span::styled(
            "type a number",
            Style::default().fg(TEXT_DIM),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn draw_result(frame: &mut Frame<'_>, area: Rect, form: &ConvertFormState) {
    let block = Block::default()
        .title(" Result ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = match form.result_line() {
        Some(result) => Line::from(vec![
            Span::styled(" ✔ ", Style::default().fg(STATUS_OK)),
            Span::styled(result, Style::default().fg(TEXT)),
        ]),
        None => Line::from(Span::styled(
            " Select bases, type a number, press Enter.",
            Style::default().fg(TEXT_DIM),
        )),
    };
    frame.render_widget(Paragraph::new(line), inner);
}

//! Modal error dialog rendering.

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::convert::ConvertError;
use crate::ui::layout::centered_rect;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, DIALOG_BORDER, STATUS_ERROR, TEXT};

const DIALOG_WIDTH: u16 = 60;
const DIALOG_HEIGHT: u16 = 7;

/// Render the error dialog on top of the form.
///
/// The dialog blocks every key except the acknowledge keys; the key routing
/// lives in `input`, this only draws.
pub fn render_error_dialog(frame: &mut Frame<'_>, error: &ConvertError) {
    let area = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Error ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DIALOG_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(STATUS_ERROR),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " OK ",
            Style::default()
                .fg(TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        inner,
    );
}

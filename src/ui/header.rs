use crate::content::ContentState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    url: &'a str,
    state: &'a ContentState,
    spinner: char,
}

impl<'a> Header<'a> {
    pub fn new(url: &'a str, state: &'a ContentState, spinner: char) -> Self {
        Self {
            url,
            state,
            spinner,
        }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status, status_style) = if self.state.is_loading() {
            (format!("{} Loading", self.spinner), Style::default().fg(ACCENT))
        } else if self.state.error.is_some() {
            ("● Error".to_string(), Style::default().fg(STATUS_ERROR))
        } else if self.state.content.is_some() {
            ("● Ready".to_string(), Style::default().fg(STATUS_OK))
        } else {
            ("○ Idle".to_string(), separator_style)
        };
        let chars = self
            .state
            .content
            .as_deref()
            .map_or(0, |content| content.chars().count());

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(status, status_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.url, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} chars", chars), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

use crate::content::AnalysisTask;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, results_rect, task_columns};
use crate::ui::results::result_lines;
use crate::ui::theme::{
    ACCENT, DISABLED_TEXT, GLOBAL_BORDER, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App<'_>) {
    let area = frame.area();
    let state = app.state();
    let regions = layout_regions(area, state.error.is_some());

    let header = Header::new(app.url(), state, app.spinner_frame());
    frame.render_widget(header.widget(), regions.header);

    if let Some(error) = &state.error {
        let banner = Paragraph::new(Line::from(vec![
            Span::styled(error.as_str(), Style::default().fg(STATUS_ERROR)),
            Span::styled("   [D] Dismiss", Style::default().fg(DISABLED_TEXT)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(STATUS_ERROR)),
        );
        frame.render_widget(banner, regions.error);
    }

    frame.render_widget(Clear, regions.content);
    let body = match state.content.as_deref() {
        Some("") => Paragraph::new(Span::styled(
            "(page returned no content)",
            Style::default().fg(DISABLED_TEXT),
        )),
        Some(content) => content_paragraph(content)
            .style(Style::default().fg(HEADER_TEXT))
            .scroll((app.content_scroll(), 0)),
        None if state.is_loading() => Paragraph::new(Span::styled(
            format!("{} Fetching page...", app.spinner_frame()),
            Style::default().fg(ACCENT),
        )),
        None => Paragraph::new(Span::styled(
            "Press L to load the page",
            Style::default().fg(DISABLED_TEXT),
        )),
    };
    frame.render_widget(
        body.block(
            Block::default()
                .title(" Content ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        regions.content,
    );

    for (index, (task, column)) in AnalysisTask::ALL
        .into_iter()
        .zip(task_columns(regions.tasks))
        .enumerate()
    {
        frame.render_widget(task_button(app, task, index + 1), column);
    }

    frame.render_widget(
        Footer::new(app.results_dialog().is_visible()).widget(regions.footer),
        regions.footer,
    );

    if let Some(task) = app.results_dialog().task() {
        let popup_area = results_rect(area, state.error.is_some());
        frame.render_widget(Clear, popup_area);
        let popup = Block::default()
            .title(Span::styled(format!(" {} ", task.label()), Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER));
        let widget = results_paragraph(result_lines(state, task))
            .block(popup)
            .scroll((app.results_dialog().scroll(), 0));
        frame.render_widget(widget, popup_area);
    }
}

/// Page text, wrapped the way the content pane draws it.
pub fn content_paragraph(content: &str) -> Paragraph<'_> {
    Paragraph::new(content).wrap(Wrap { trim: false })
}

/// Popup body, wrapped the way the result popup draws it.
pub fn results_paragraph(lines: Vec<String>) -> Paragraph<'static> {
    Paragraph::new(lines.into_iter().map(Line::from).collect::<Vec<_>>())
        .wrap(Wrap { trim: false })
}

fn task_button(app: &App<'_>, task: AnalysisTask, key: usize) -> Paragraph<'static> {
    let state = app.state();
    let (label, style) = if state.is_task_loading(task) {
        (
            format!("{} {}", app.spinner_frame(), task.label()),
            Style::default().fg(ACCENT),
        )
    } else if app.is_task_enabled(task) {
        (
            format!("[{}] {}", key, task.label()),
            Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
        )
    } else {
        (
            format!("[{}] {}", key, task.label()),
            Style::default().fg(DISABLED_TEXT),
        )
    };

    Paragraph::new(Span::styled(label, style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}

use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::widgets::Paragraph;

/// Screen split, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub error: Rect,
    pub content: Rect,
    pub tasks: Rect,
    pub footer: Rect,
}

/// The error banner only takes space while there is an error to show.
pub fn layout_regions(area: Rect, show_error: bool) -> Regions {
    let error_height = if show_error { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(error_height),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);
    Regions {
        header: chunks[0],
        error: chunks[1],
        content: chunks[2],
        tasks: chunks[3],
        footer: chunks[4],
    }
}

/// Three equal columns, one per analysis button.
pub fn task_columns(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Text area of the bordered content block.
pub fn content_viewport(area: Rect, show_error: bool) -> Rect {
    layout_regions(area, show_error).content.inner(Margin::new(1, 1))
}

/// Outer rect of the result popup.
pub fn results_rect(area: Rect, show_error: bool) -> Rect {
    centered_rect(60, 50, layout_regions(area, show_error).content)
}

/// Text area of the bordered result popup.
pub fn results_viewport(area: Rect, show_error: bool) -> Rect {
    results_rect(area, show_error).inner(Margin::new(1, 1))
}

/// Highest scroll offset that still fills `viewport`, counted in wrapped rows.
///
/// `paragraph` must carry the same wrapping it is drawn with and no block.
pub fn scroll_limit(paragraph: &Paragraph<'_>, viewport: Rect) -> u16 {
    if viewport.width == 0 || viewport.height == 0 {
        return 0;
    }
    let rows = paragraph.line_count(viewport.width);
    u16::try_from(rows.saturating_sub(usize::from(viewport.height))).unwrap_or(u16::MAX)
}

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::{
    app::{App, Focus},
    form::TITLE_PLACEHOLDER,
    results::{render_cards, render_detail},
    state::SearchPhase,
};

const HEADER: &str = "Content Recommender";

/// Screen regions, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub title_input: Rect,
    /// Zero-sized when the content-type selector is disabled
    pub content_type: Rect,
    pub count: Rect,
    pub status: Rect,
    pub results: Rect,
    pub footer: Rect,
}

pub fn screen_layout(area: Rect, content_type_selector: bool) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Form
            Constraint::Length(1), // Status
            Constraint::Min(0),    // Results
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let selector_width = if content_type_selector { 16 } else { 0 };
    let form = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),
            Constraint::Length(selector_width),
            Constraint::Length(11),
        ])
        .split(rows[1]);

    ScreenLayout {
        header: rows[0],
        title_input: form[0],
        content_type: form[1],
        count: form[2],
        status: rows[2],
        results: rows[3],
        footer: rows[4],
    }
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            title,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
}

fn selector_line(value: String, focused: bool) -> Line<'static> {
    let arrow = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(vec![
        Span::styled("‹ ", arrow),
        Span::styled(value, Style::default().fg(Color::White)),
        Span::styled(" ›", arrow),
    ])
    .alignment(Alignment::Center)
}

/// Longest suffix of `text` that fits in `max_width` display columns
pub fn visible_tail(text: &str, max_width: usize) -> &str {
    let mut width = text.width();
    for (start, c) in text.char_indices() {
        if width <= max_width {
            return &text[start..];
        }
        width -= c.width().unwrap_or(0);
    }
    ""
}

fn render_form(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let form = app.form();
    let focus = app.focus();

    let area = layout.title_input;
    // one column stays free for the cursor
    let shown = visible_tail(form.title(), usize::from(area.width.saturating_sub(3)));
    let title_text = if form.title().is_empty() {
        Span::styled(TITLE_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(shown.to_string(), Style::default().fg(Color::White))
    };
    let title_input = Paragraph::new(Line::from(title_text))
        .block(field_block("Search", focus == Focus::Title));
    frame.render_widget(title_input, area);

    if focus == Focus::Title && !app.results_view().is_detail_open() && area.width > 2 {
        let offset = u16::try_from(shown.width()).unwrap_or(u16::MAX);
        frame.set_cursor_position((area.x + 1 + offset, area.y + 1));
    }

    if let Some(content_type) = form.content_type() {
        let selector = Paragraph::new(selector_line(
            content_type.selector_label().to_string(),
            focus == Focus::ContentType,
        ))
        .block(field_block("Type", focus == Focus::ContentType));
        frame.render_widget(selector, layout.content_type);
    }

    let count = Paragraph::new(selector_line(
        form.count().to_string(),
        focus == Focus::Count,
    ))
    .block(field_block("Count", focus == Focus::Count));
    frame.render_widget(count, layout.count);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let search = app.search();
    let line = match search.phase() {
        SearchPhase::Loading => Line::from(Span::styled(
            "Loading recommendations...",
            Style::default().fg(Color::Cyan),
        )),
        SearchPhase::Failure => Line::from(Span::styled(
            search.error().unwrap_or_default().to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        SearchPhase::Success if search.results().is_empty() => Line::from(Span::styled(
            "No recommendations found.",
            Style::default().fg(Color::DarkGray),
        )),
        SearchPhase::Success | SearchPhase::Idle => Line::raw(""),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Enter", key),
        Span::raw(": Search/Open | "),
        Span::styled("Tab", key),
        Span::raw(": Next field | "),
        Span::styled("←→", key),
        Span::raw(": Change | "),
        Span::styled("Esc", key),
        Span::raw(": Close/Quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Draws the whole screen from the app's current state
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = screen_layout(area, app.form().has_content_type_selector());

    let header = Paragraph::new(Line::from(Span::styled(
        HEADER,
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(header, layout.header);

    render_form(frame, &layout, app);
    render_status(frame, layout.status, app);

    let search = app.search();
    render_cards(
        frame,
        layout.results,
        search.results(),
        app.results_view(),
        app.focus() == Focus::Results,
    );
    render_footer(frame, layout.footer);

    let view = app.results_view();
    if view.is_detail_open() {
        if let Some(item) = search.results().get(view.selected()) {
            render_detail(frame, area, item, search.results_content_type());
        }
    }
}

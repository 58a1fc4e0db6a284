//! Result display: one card per recommendation plus a detail overlay.
//!
//! Rendering here is a pure function of the items, the selection, and the
//! content type of the search that produced them.
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::models::{ContentType, RecommendationItem};

pub const CARD_WIDTH: u16 = 30;
pub const CARD_HEIGHT: u16 = 4;

const DETAIL_WIDTH: u16 = 70;
/// Blank line, score, blank line, close hint
const DETAIL_FOOTER_ROWS: u16 = 4;

/// Shortens `title` to `max_width` display columns, marking the cut with an ellipsis
pub fn truncate_title(title: &str, max_width: usize) -> String {
    if title.width() <= max_width {
        return title.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut truncated = String::new();
    for c in title.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        truncated.push(c);
    }
    truncated.push('…');
    truncated
}

/// Selection within the result grid and whether the detail view is open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultsView {
    selected: usize,
    detail_open: bool,
}

impl ResultsView {
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_detail_open(&self) -> bool {
        self.detail_open
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn select(&mut self, index: usize, len: usize) {
        if index < len {
            self.selected = index;
        }
    }

    pub fn move_left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_right(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self, columns: usize) {
        if self.selected >= columns {
            self.selected -= columns;
        }
    }

    pub fn move_down(&mut self, columns: usize, len: usize) {
        if self.selected + columns < len {
            self.selected += columns;
        }
    }

    /// Opens the detail view for the selected card; no-op without results
    pub fn open_detail(&mut self, len: usize) {
        if self.selected < len {
            self.detail_open = true;
        }
    }

    pub fn close_detail(&mut self) {
        self.detail_open = false;
    }
}

/// Placement of cards inside the results area
///
/// Cards flow left to right in as many columns as fit, and the window scrolls
/// by whole rows so the selected card stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardGrid {
    area: Rect,
    columns: usize,
    visible_rows: usize,
    first_row: usize,
    item_count: usize,
}

impl CardGrid {
    pub fn new(area: Rect, item_count: usize, selected: usize) -> Self {
        let columns = usize::from((area.width / CARD_WIDTH).max(1));
        let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
        let selected_row = selected / columns;
        let first_row = selected_row.saturating_sub(visible_rows - 1);

        Self {
            area,
            columns,
            visible_rows,
            first_row,
            item_count,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Visible cards as `(item index, area)` pairs
    pub fn cards(&self) -> Vec<(usize, Rect)> {
        let start = self.first_row * self.columns;
        let end = ((self.first_row + self.visible_rows) * self.columns).min(self.item_count);

        (start..end)
            .map(|index| {
                let row = (index / self.columns - self.first_row) as u16;
                let col = (index % self.columns) as u16;
                let rect = Rect::new(
                    self.area.x + col * CARD_WIDTH,
                    self.area.y + row * CARD_HEIGHT,
                    CARD_WIDTH,
                    CARD_HEIGHT,
                );
                (index, rect.intersection(self.area))
            })
            .collect()
    }

    /// Index of the card under the given terminal cell
    pub fn hit(&self, column: u16, row: u16) -> Option<usize> {
        self.cards()
            .into_iter()
            .find(|(_, rect)| {
                column >= rect.x
                    && column < rect.x + rect.width
                    && row >= rect.y
                    && row < rect.y + rect.height
            })
            .map(|(index, _)| index)
    }
}

fn card_lines(item: &RecommendationItem) -> Vec<Line<'static>> {
    let inner_width = usize::from(CARD_WIDTH - 2);
    vec![
        Line::from(Span::styled(
            truncate_title(&item.title, inner_width),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Similarity: {}", item.similarity_percent()),
            Style::default().fg(Color::Gray),
        )),
    ]
}

/// Renders the visible cards; the selected one is highlighted when `focused`
pub fn render_cards(
    frame: &mut Frame,
    area: Rect,
    items: &[RecommendationItem],
    view: &ResultsView,
    focused: bool,
) {
    let grid = CardGrid::new(area, items.len(), view.selected());

    for (index, rect) in grid.cards() {
        let border_style = if focused && index == view.selected() {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let card = Paragraph::new(card_lines(&items[index]))
            .block(Block::default().borders(Borders::ALL).border_style(border_style));
        frame.render_widget(card, rect);
    }
}

/// Compute a centered rectangle with fixed dimensions.
fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn detail_body(item: &RecommendationItem, content_type: ContentType) -> Paragraph<'static> {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                item.title.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" ({})", content_type.item_label()),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::raw(""),
        Line::raw(item.description.clone()),
    ];
    Paragraph::new(lines).wrap(Wrap { trim: false })
}

fn detail_footer(item: &RecommendationItem) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!("Similarity Score: {}", item.similarity_percent()),
            Style::default().fg(Color::Gray),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Esc", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw(": Close"),
        ]),
    ])
}

/// Area covered by the detail overlay; clicks outside it dismiss the overlay
///
/// The height follows the wrapped title and description, capped at `area`.
pub fn detail_area(area: Rect, item: &RecommendationItem, content_type: ContentType) -> Rect {
    let width = DETAIL_WIDTH.min(area.width);
    let body_rows = detail_body(item, content_type).line_count(width.saturating_sub(2));
    let height = u16::try_from(body_rows)
        .unwrap_or(u16::MAX)
        .saturating_add(DETAIL_FOOTER_ROWS + 2);
    centered_fixed(width, height, area)
}

/// Renders the detail overlay. The score and close hint stay pinned to the
/// bottom; only the description is clipped when the terminal is too short.
pub fn render_detail(
    frame: &mut Frame,
    area: Rect,
    item: &RecommendationItem,
    content_type: ContentType,
) {
    let modal_area = detail_area(area, item, content_type);
    let block = Block::default()
        .title(" Details ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(modal_area);
    let [body, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(DETAIL_FOOTER_ROWS)])
            .areas(inner);

    frame.render_widget(Clear, modal_area);
    frame.render_widget(block, modal_area);
    frame.render_widget(detail_body(item, content_type), body);
    frame.render_widget(detail_footer(item), footer);
}

use std::sync::Arc;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    layout::{Position, Rect},
    Frame,
};
use tokio::sync::mpsc;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{ContentType, RecommendationItem, RecommendationRequest},
    services::RecommendationService,
    ui::{
        form::QueryForm,
        results::{detail_area, CardGrid, ResultsView},
        state::{RequestSeq, SearchState},
        view,
    },
};

/// Which part of the screen receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Title,
    ContentType,
    Count,
    Results,
}

/// A settled search, sent from the request task back to the UI loop
#[derive(Debug)]
pub struct SearchOutcome {
    pub seq: RequestSeq,
    pub content_type: ContentType,
    pub result: AppResult<Vec<RecommendationItem>>,
}

/// Top-level state holder: wires the query form to the recommendation
/// service and the service's answers into [`SearchState`]
pub struct App {
    service: Arc<dyn RecommendationService>,
    form: QueryForm,
    focus: Focus,
    search: SearchState,
    results_view: ResultsView,
    /// Label used for results when the form has no content-type selector
    fallback_content_type: ContentType,
    outcome_tx: mpsc::UnboundedSender<SearchOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SearchOutcome>,
    viewport: Rect,
    should_quit: bool,
}

impl App {
    pub fn new(service: Arc<dyn RecommendationService>, config: &Config) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

        tracing::info!(
            service = service.name(),
            content_type_selector = config.content_type_selector,
            "Front end initialised"
        );

        Self {
            service,
            form: QueryForm::from_config(config),
            focus: Focus::Title,
            search: SearchState::new(),
            results_view: ResultsView::default(),
            fallback_content_type: config.default_content_type,
            outcome_tx,
            outcome_rx,
            viewport: Rect::default(),
            should_quit: false,
        }
    }

    pub fn form(&self) -> &QueryForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut QueryForm {
        &mut self.form
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn results_view(&self) -> &ResultsView {
        &self.results_view
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Submits the form; returns `false` when the title is blank
    pub fn submit(&mut self) -> bool {
        match self.form.submit() {
            Some(request) => {
                self.dispatch(request);
                true
            }
            None => {
                tracing::debug!("Ignoring submit with blank title");
                false
            }
        }
    }

    /// Sends `request` on a background task. Earlier in-flight requests are
    /// not cancelled; their outcomes are discarded when they arrive.
    fn dispatch(&mut self, request: RecommendationRequest) {
        let seq = self.search.begin();
        let content_type = request.content_type.unwrap_or(self.fallback_content_type);
        let service = Arc::clone(&self.service);
        let tx = self.outcome_tx.clone();

        tracing::debug!(seq, title = %request.title, "Dispatching search");

        tokio::spawn(async move {
            let result =
                tokio::spawn(async move { service.fetch_recommendations(&request).await })
                    .await
                    .unwrap_or_else(|e| Err(AppError::from(e)));

            let _ = tx.send(SearchOutcome {
                seq,
                content_type,
                result,
            });
        });
    }

    fn apply(&mut self, outcome: SearchOutcome) {
        if let Err(e) = &outcome.result {
            tracing::warn!(seq = outcome.seq, error = %e, "Search failed");
        }
        if self
            .search
            .complete(outcome.seq, outcome.content_type, outcome.result)
        {
            self.results_view.reset();
        }
    }

    /// Applies every outcome that has already arrived. Call once per tick.
    pub fn poll(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply(outcome);
        }
    }

    /// Waits for the next outcome and applies it
    pub async fn settle(&mut self) {
        if let Some(outcome) = self.outcome_rx.recv().await {
            self.apply(outcome);
        }
    }

    fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::Title];
        if self.form.has_content_type_selector() {
            order.push(Focus::ContentType);
        }
        order.push(Focus::Count);
        order.push(Focus::Results);
        order
    }

    fn cycle_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (pos + 1) % order.len()
        } else {
            (pos + order.len() - 1) % order.len()
        };
        self.focus = order[next];
    }

    fn results_grid(&self) -> CardGrid {
        let area = view::screen_layout(self.viewport, self.form.has_content_type_selector()).results;
        CardGrid::new(
            area,
            self.search.results().len(),
            self.results_view.selected(),
        )
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            Event::Resize(width, height) => {
                self.viewport = Rect::new(0, 0, *width, *height);
            }
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.results_view.is_detail_open() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.results_view.close_detail();
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.cycle_focus(true);
                return;
            }
            KeyCode::BackTab => {
                self.cycle_focus(false);
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Title => match key.code {
                KeyCode::Enter => {
                    self.submit();
                }
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.form.clear_title();
                }
                // chords like Alt+x or Ctrl+w are not text
                KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                    self.form.push_char(c)
                }
                KeyCode::Backspace => self.form.pop_char(),
                _ => {}
            },
            Focus::ContentType => match key.code {
                KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                    if let Some(request) = self.form.toggle_content_type() {
                        self.dispatch(request);
                    }
                }
                KeyCode::Enter => {
                    self.submit();
                }
                _ => {}
            },
            Focus::Count => match key.code {
                KeyCode::Left => self.form.prev_count(),
                KeyCode::Right => self.form.next_count(),
                KeyCode::Enter => {
                    self.submit();
                }
                _ => {}
            },
            Focus::Results => {
                let len = self.search.results().len();
                let columns = self.results_grid().columns();
                match key.code {
                    KeyCode::Left => self.results_view.move_left(),
                    KeyCode::Right => self.results_view.move_right(len),
                    KeyCode::Up => self.results_view.move_up(columns),
                    KeyCode::Down => self.results_view.move_down(columns, len),
                    KeyCode::Enter => self.results_view.open_detail(len),
                    _ => {}
                }
            }
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if self.results_view.is_detail_open() {
            let inside = self
                .search
                .results()
                .get(self.results_view.selected())
                .map(|item| {
                    detail_area(self.viewport, item, self.search.results_content_type())
                })
                .is_some_and(|modal| modal.contains(Position::new(mouse.column, mouse.row)));
            if !inside {
                self.results_view.close_detail();
            }
            return;
        }

        if let Some(index) = self.results_grid().hit(mouse.column, mouse.row) {
            let len = self.search.results().len();
            self.focus = Focus::Results;
            self.results_view.select(index, len);
            self.results_view.open_detail(len);
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.viewport = frame.area();
        view::draw(frame, self);
    }
}

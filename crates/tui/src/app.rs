//! The application: owns the state, drives the event loop, draws frames.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tack_config::Config;
use tack_protocol::Message;
use tack_store::MemoryStore;

use crate::{
    AppState, Focus,
    event::{event_to_message, poll_event},
    layout::{
        HEADER_HEIGHT, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH, STATUS_BAR_HEIGHT,
        TASK_CARD_HEIGHT,
    },
    style::BoardStyle,
    terminal::AppTerminal,
    widgets::{
        description_area_dimensions, max_scroll_offset, render_board, render_detail_panel,
        render_help_overlay, render_status_bar, render_status_bar_with_message,
    },
};

/// Ties the pieces together: state, message dispatch, and rendering.
#[derive(Debug)]
pub struct App {
    state: AppState,
    exiting: bool,
    /// Terminal area as of the last frame; click hit-testing works
    /// against this, not the live size.
    viewport: Rect,
    /// Whether the last frame included the header row.
    header_shown: bool,
    /// Accent and dim colors shared by every widget.
    style: BoardStyle,
}

impl App {
    /// Creates an application over the given board store.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_store::MemoryStore;
    /// use tack_tui::App;
    ///
    /// let app = App::new(MemoryStore::new());
    /// ```
    #[must_use]
    pub fn new(store: MemoryStore) -> Self {
        Self {
            state: AppState::new(store),
            exiting: false,
            viewport: Rect::default(),
            header_shown: true,
            style: BoardStyle::default(),
        }
    }

    /// Creates an application with colors taken from the configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_config::Config;
    /// use tack_store::MemoryStore;
    /// use tack_tui::App;
    ///
    /// let app = App::with_config(MemoryStore::new(), &Config::new());
    /// ```
    #[must_use]
    pub fn with_config(store: MemoryStore, config: &Config) -> Self {
        Self {
            style: BoardStyle::from_config(config),
            ..Self::new(store)
        }
    }

    /// Read access to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Consumes the application and hands back the board store, so the
    /// caller can persist whatever the session changed.
    #[must_use]
    pub fn into_store(self) -> MemoryStore {
        self.state.into_store()
    }

    /// Applies one message to the state.
    ///
    /// An open help overlay swallows almost everything: `Quit` still
    /// quits, `ToggleHelp` and `Escape` close the overlay, and any
    /// other message merely dismisses it.
    pub fn update(&mut self, msg: Message) {
        if self.state.help_visible {
            match msg {
                Message::Quit => self.exiting = true,
                Message::ToggleHelp | Message::Escape => self.state.toggle_help(),
                _ => {
                    let _ = self.state.dismiss_help();
                }
            }
            return;
        }

        match msg {
            Message::Quit => self.exiting = true,
            Message::Escape => self.escape(),
            Message::Select => {
                // Nothing highlighted, nothing to open
                if self.state.selected_task.is_some() {
                    self.state.toggle_detail();
                }
            }
            Message::Back => {
                if self.state.detail_visible {
                    self.state.toggle_detail();
                }
            }
            Message::Carry => self.carry_or_drop(),
            Message::Archive => {
                if self.state.focus == Focus::Board {
                    let _ = self.state.archive_selected();
                }
            }
            Message::ToggleHelp => self.state.toggle_help(),
            Message::ClickAt { column, row } => self.handle_click(column, row),
            other if other.is_navigation() => self.navigate(other),
            _ => {}
        }
    }

    /// Escape backs out of things one layer at a time: an active carry,
    /// then the detail panel, then the selection itself.
    fn escape(&mut self) {
        if self.state.is_carrying() {
            self.state.cancel_carry();
        } else if self.state.detail_visible {
            self.state.toggle_detail();
        } else {
            self.state.clear_selection();
        }
    }

    /// Space picks the highlighted card up, or sets a held one down.
    fn carry_or_drop(&mut self) {
        if self.state.focus != Focus::Board {
            return;
        }
        if self.state.is_carrying() {
            let _ = self.state.set_down();
        } else {
            self.state.pick_up();
        }
    }

    /// Routes an arrow-key message to whichever pane has focus.
    ///
    /// On the board the arrows move the selection; in the detail panel
    /// only up and down do anything, scrolling the description.
    fn navigate(&mut self, msg: Message) {
        match self.state.focus {
            Focus::Board => match msg {
                Message::NavigateLeft => self.state.navigate_left(),
                Message::NavigateRight => self.state.navigate_right(),
                Message::NavigateUp => self.state.navigate_up(),
                Message::NavigateDown => self.state.navigate_down(),
                _ => {}
            },
            Focus::Detail => {
                match msg {
                    Message::NavigateUp => self.state.scroll_detail(-1),
                    Message::NavigateDown => self.state.scroll_detail(1),
                    _ => return,
                }
                self.fit_detail_scroll();
            }
        }
    }

    /// Content area below the header, as of the last frame.
    fn content_area(&self) -> Rect {
        let header_offset = if self.header_shown { HEADER_HEIGHT } else { 0 };
        Rect {
            x: self.viewport.x,
            y: self.viewport.y + header_offset,
            width: self.viewport.width,
            height: self.viewport.height.saturating_sub(header_offset),
        }
    }

    /// Board area within the content area, excluding the hint row.
    fn board_area(&self) -> Rect {
        let content = self.content_area();
        Rect {
            height: content.height.saturating_sub(STATUS_BAR_HEIGHT),
            ..content
        }
    }

    /// A click on a card selects it and opens its detail panel.
    ///
    /// Clicks only mean anything on the board view; the carry gesture
    /// is keyboard-driven, so they are ignored while a card is held.
    fn handle_click(&mut self, column: u16, row: u16) {
        if self.state.focus != Focus::Board
            || self.state.detail_visible
            || self.state.is_carrying()
        {
            return;
        }

        if let Some((lane, card)) = self.card_at(column, row) {
            self.state.selected_column = lane;
            self.state.selected_task = Some(card);
            self.state.toggle_detail();
        }
    }

    /// Hit-tests terminal coordinates against the card grid.
    ///
    /// Returns `(column index, task index)` when the position lands on
    /// an existing card, `None` for borders, gaps, and empty space.
    fn card_at(&self, column: u16, row: u16) -> Option<(usize, usize)> {
        let board_area = self.board_area();
        if !board_area.contains((column, row).into()) {
            return None;
        }

        // Columns share the width equally; clicks in the remainder on
        // the right edge count toward the last column.
        let count = self.state.column_count();
        if count == 0 {
            return None;
        }
        let lane_width = board_area.width / count as u16;
        if lane_width == 0 {
            return None;
        }
        let lane = ((column.saturating_sub(board_area.x) / lane_width) as usize).min(count - 1);

        // The first row of a column is its top border; cards stack
        // below it at a fixed height.
        let card = (row.saturating_sub(board_area.y + 1) / TASK_CARD_HEIGHT) as usize;

        let board = self.state.board();
        let exists = board.get(lane).is_some_and(|tasks| card < tasks.len());
        exists.then_some((lane, card))
    }

    /// Re-clamps the detail scroll against the actual content height.
    fn fit_detail_scroll(&mut self) {
        let area = self.content_area();
        let Some(task) = self.state.selected_task() else {
            return;
        };
        let max = description_area_dimensions(task, area)
            .map(|(height, width)| max_scroll_offset(task, height, width))
            .unwrap_or(0);
        self.state.clamp_detail_scroll(max);
    }

    /// Draws one frame.
    ///
    /// Degrades gracefully as the terminal shrinks: tight heights drop
    /// the header to reclaim rows, and anything below the minimum size
    /// is replaced by a resize notice.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.viewport = area;

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_shown = false;
            self.render_undersized_notice(frame, area);
            return;
        }

        self.header_shown = area.height >= MIN_HEIGHT_WITH_HEADER;
        let content = if self.header_shown {
            let [header, content] =
                Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
                    .areas(area);
            self.render_header(frame, header);
            content
        } else {
            area
        };

        // Board and detail are alternate screens, never side by side
        if self.state.detail_visible {
            self.render_detail(frame, content);
        } else {
            let [board, hints] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)])
                    .areas(content);
            self.render_board_area(frame, board);
            self.render_status_area(frame, hints);
        }

        if self.state.help_visible {
            render_help_overlay(area, frame.buffer_mut());
        }
    }

    /// Tells the user the terminal is too small to draw anything useful.
    fn render_undersized_notice(&self, frame: &mut Frame, area: Rect) {
        let notice = Paragraph::new(vec![
            Line::from(format!(
                "Terminal too small ({}\u{d7}{})",
                area.width, area.height
            )),
            Line::from(format!("Minimum: {MIN_WIDTH}\u{d7}{MIN_HEIGHT} (w\u{d7}h)")),
        ])
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(ratatui::widgets::Wrap { trim: false });

        let top = area.height.saturating_sub(2) / 2;
        let centered = Rect {
            y: area.y + top,
            height: area.height.saturating_sub(top),
            ..area
        };
        frame.render_widget(notice, centered);
    }

    /// Runs the event loop until the user quits.
    ///
    /// Each iteration draws a frame, then waits briefly for an input
    /// event and applies it.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing or event polling fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tack_store::MemoryStore;
    /// use tack_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(MemoryStore::new());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        while !self.exiting {
            terminal.draw(|frame| self.view(frame))?;

            let Some(event) = poll_event()? else {
                continue;
            };
            if let Some(msg) = event_to_message(&event) {
                self.update(msg);
            }
        }
        Ok(())
    }

    /// Header row: application title on the left, help cue on the right.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // "Press ? for help" is 16 columns, plus one of padding
        let [title_area, cue_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(17)]).areas(inner);

        let title = Line::from(vec![
            Span::styled(
                "tack",
                Style::default()
                    .fg(self.style.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled("Kanban Board", Style::default().fg(Color::White)),
        ]);
        frame.render_widget(Paragraph::new(title), title_area);

        let dim = Style::default().fg(Color::DarkGray);
        let cue = Line::from(vec![
            Span::styled("Press ", dim),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", dim),
        ]);
        frame.render_widget(Paragraph::new(cue).alignment(Alignment::Right), cue_area);
    }

    /// The board itself, one column per status.
    fn render_board_area(&self, frame: &mut Frame, area: Rect) {
        let board = self.state.board();
        let carried = self.state.carried_task().map(|task| &task.id);
        render_board(
            &board,
            self.state.selected_column,
            self.state.selected_task,
            carried,
            &self.style,
            area,
            frame.buffer_mut(),
        );
    }

    /// Bottom hint row; announces the held card during a carry.
    fn render_status_area(&self, frame: &mut Frame, area: Rect) {
        let carried = self.state.carried_task().map(|task| task.name.clone());
        let buf = frame.buffer_mut();
        match carried {
            Some(name) => {
                let message = format!("Carrying \"{name}\"");
                render_status_bar_with_message(&message, area, buf);
            }
            None => render_status_bar(area, buf),
        }
    }

    /// Full-screen detail panel for the selected task.
    fn render_detail(&self, frame: &mut Frame, area: Rect) {
        if let Some(task) = self.state.selected_task() {
            let scroll = self.state.detail_scroll;
            render_detail_panel(task, scroll, &self.style, area, frame.buffer_mut());
        }
    }
}

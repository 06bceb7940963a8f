//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. Each tick drains the
//! controller's outcome channel before drawing, so background fetch
//! completions always land on this thread — the layer state and the surface
//! have no concurrent writers.

use crate::{
    controller::{Outcome, SearchController},
    event::{self, AppEvent},
    layers::{LayerState, LayerStateMachine},
    surface::CanvasMap,
    theme::Theme,
    widgets::{
        map_pane::MapPane,
        results::{ResultList, ResultListState},
        search_bar::{SearchBar, SearchBarState},
        status::StatusLine,
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pinpoint_core::{config::Config, LonLat};
use pinpoint_core::Feature;
use pinpoint_source::{FeatureStore, SourceError};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout},
    Frame, Terminal,
};
use std::{io, sync::Arc, time::Duration};
use tokio::sync::mpsc::UnboundedReceiver;

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Search bar is active; keys insert text.
    Search,
    Results,
    Map,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    focus: Focus,
    search: SearchBarState,
    results: ResultListState,
    map: CanvasMap,
    machine: LayerStateMachine,
    controller: SearchController,
    rx: UnboundedReceiver<Outcome>,
    theme: Theme,
    quit: bool,
}

impl App {
    pub fn new(
        config: Config,
        theme: Theme,
        store: Arc<FeatureStore>,
        initial: Result<Vec<Feature>, SourceError>,
    ) -> Self {
        let mut map = CanvasMap::new(
            LonLat::new(config.map.center_lon, config.map.center_lat),
            config.map.zoom,
        );
        let mut machine = LayerStateMachine::new(config.map.select_zoom);
        let (mut controller, rx) = SearchController::new(store, config.search.radius_deg);
        controller.bootstrap(initial, &mut machine, &mut map);

        App {
            focus: Focus::Search,
            search: SearchBarState::default(),
            results: ResultListState::default(),
            map,
            machine,
            controller,
            rx,
            theme,
            quit: false,
        }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on
    /// exit.
    pub async fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            // Apply any fetch completions that arrived since the last tick.
            while let Ok(outcome) = self.rx.try_recv() {
                self.controller
                    .apply(outcome, &mut self.machine, &mut self.map);
            }
            self.results.clamp(self.controller.results.len());

            {
                let s = &*self;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                let raw = ct_event::read()?;
                if let Event::Key(key) = &raw {
                    if key.kind != crossterm::event::KeyEventKind::Press {
                        continue;
                    }
                }
                let app_event = if self.focus == Focus::Search {
                    event::to_app_event_insert(raw)
                } else {
                    event::to_app_event(raw)
                };
                if let Some(ev) = app_event {
                    tracing::debug!(focus = ?self.focus, event = ?ev, "key event");
                    self.handle(ev);
                }
            }
        }
        Ok(())
    }

    fn handle(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.quit = true,

            // Tab-cycle focus: Search → Results → Map → Search
            AppEvent::FocusNext => {
                self.focus = match self.focus {
                    Focus::Search => Focus::Results,
                    Focus::Results => Focus::Map,
                    Focus::Map => Focus::Search,
                };
            }

            AppEvent::SearchFocus => self.focus = Focus::Search,

            AppEvent::Escape => {
                if self.focus == Focus::Search {
                    self.focus = Focus::Results;
                }
            }

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => self.dispatch_to_focused(other),
        }
    }

    /// Route an event to the pane that owns the current focus.
    fn dispatch_to_focused(&mut self, event: AppEvent) {
        match self.focus {
            Focus::Search => match event {
                AppEvent::Enter => self.focus = Focus::Results,
                ev => {
                    if self.search.handle(&ev) {
                        self.controller
                            .on_input(&self.search.input, &mut self.machine, &mut self.map);
                    }
                }
            },
            Focus::Results => match event {
                AppEvent::Enter => {
                    let selected = self.controller.results.get(self.results.cursor).cloned();
                    if let Some(feature) = selected {
                        self.search.clear();
                        self.controller.on_select(feature);
                    }
                }
                ev @ AppEvent::Nav(_) => {
                    self.results.handle(&ev, self.controller.results.len());
                }
                _ => {}
            },
            Focus::Map => match event {
                AppEvent::Nav(direction) => self.map.pan(direction),
                AppEvent::ZoomIn => self.map.zoom_in(),
                AppEvent::ZoomOut => self.map.zoom_out(),
                _ => {}
            },
        }
    }

    fn status_left(&self) -> String {
        let state = match self.machine.state() {
            LayerState::Base => "browsing".to_string(),
            LayerState::Selected(f) => format!("selected: {}", f.label()),
            LayerState::SelectedWithNearby(f, nearby) => {
                format!("selected: {} (+{} nearby)", f.label(), nearby.len())
            }
        };
        format!(
            " {state} | {} features | {} results",
            self.controller.collection().len(),
            self.controller.results.len()
        )
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Vertical: 3-line search bar | body | 1-line status
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(area);

    // Horizontal body split: result list | map pane
    let horiz = Layout::default()
        .direction(LayoutDir::Horizontal)
        .constraints([Constraint::Percentage(32), Constraint::Fill(1)])
        .split(vert[1]);

    frame.render_widget(
        SearchBar::new(&app.search, app.focus == Focus::Search, &app.theme),
        vert[0],
    );
    frame.render_widget(
        ResultList::new(
            &app.controller.results,
            &app.results,
            app.focus == Focus::Results,
            &app.theme,
        ),
        horiz[0],
    );
    frame.render_widget(
        MapPane::new(&app.map, app.focus == Focus::Map, &app.theme),
        horiz[1],
    );
    frame.render_widget(
        StatusLine::new(
            app.status_left(),
            app.controller.last_error.as_deref(),
            &app.theme,
        ),
        vert[2],
    );

    // Position the terminal cursor when the search bar is focused
    if app.focus == Focus::Search {
        let bar = SearchBar::new(&app.search, true, &app.theme);
        let (cx, cy) = bar.cursor_position(vert[0]);
        frame.set_cursor_position((cx, cy));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

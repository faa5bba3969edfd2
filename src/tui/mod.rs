//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading**: draws every ~80ms so the pending spinner moves.
//! - **Idle**: sleeps up to 500ms, only redraws on events, terminal resize
//!   or actions arriving from background tasks.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::generation::{GenerateRequest, HttpGenerator, TextGenerator};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    InputBox, InputEvent, MessageListState, SessionPanelEvent, SessionPanelState, SettingsEvent,
    SettingsPanelState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::Regions;

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sessions,
    Input,
    Settings,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Sessions => Focus::Input,
            Focus::Input => Focus::Settings,
            Focus::Settings => Focus::Sessions,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Sessions => Focus::Settings,
            Focus::Input => Focus::Sessions,
            Focus::Settings => Focus::Input,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub message_list: MessageListState,
    pub input_box: InputBox,
    pub session_panel: SessionPanelState,
    pub settings_panel: SettingsPanelState,
    pub focus: Focus,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            message_list: MessageListState::new(),
            input_box: InputBox::new(),
            session_panel: SessionPanelState::new(),
            settings_panel: SettingsPanelState::new(),
            focus: Focus::Input, // User expects to type immediately
        }
    }

    /// Copy props from `App` into the persistent components before a frame.
    fn sync_props(&mut self, app: &App) {
        self.input_box.disabled = app.is_loading;
        self.input_box.focused = self.focus == Focus::Input;
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Outcome of routing one terminal event.
enum Routed {
    Nothing,
    Dispatch(Action),
}

/// Translate a terminal event into an action, updating presentation state
/// along the way. `regions` is the layout of the last drawn frame.
fn route_event(event: &TuiEvent, tui: &mut TuiState, regions: &Regions) -> Routed {
    match event {
        TuiEvent::Resize => Routed::Nothing,
        TuiEvent::ForceQuit => Routed::Dispatch(Action::Quit),
        TuiEvent::NewSession => Routed::Dispatch(Action::NewSession),
        TuiEvent::FocusNext => {
            tui.focus = tui.focus.next();
            Routed::Nothing
        }
        TuiEvent::FocusPrev => {
            tui.focus = tui.focus.prev();
            Routed::Nothing
        }
        TuiEvent::Escape => {
            tui.focus = Focus::Input;
            Routed::Nothing
        }
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.message_list.handle_event(event);
            Routed::Nothing
        }
        TuiEvent::MouseClick(column, row) => {
            let Some(focus) = regions.focus_at(*column, *row) else {
                return Routed::Nothing;
            };
            tui.focus = focus;
            match focus {
                Focus::Sessions => tui
                    .session_panel
                    .click(regions.sessions, *row)
                    .map_or(Routed::Nothing, session_action),
                Focus::Settings if *row == regions.settings_gauge().y => tui
                    .settings_panel
                    .click(regions.settings_gauge(), *column)
                    .map_or(Routed::Nothing, settings_action),
                _ => Routed::Nothing,
            }
        }
        _ => match tui.focus {
            Focus::Input => match tui.input_box.handle_event(event) {
                Some(InputEvent::Submit(text)) => Routed::Dispatch(Action::Submit(text)),
                Some(InputEvent::ContentChanged) | None => Routed::Nothing,
            },
            Focus::Sessions => tui
                .session_panel
                .handle_event(event)
                .map_or(Routed::Nothing, session_action),
            Focus::Settings => tui
                .settings_panel
                .handle_event(event)
                .map_or(Routed::Nothing, settings_action),
        },
    }
}

fn session_action(event: SessionPanelEvent) -> Routed {
    match event {
        SessionPanelEvent::Create => Routed::Dispatch(Action::NewSession),
        SessionPanelEvent::Select(index) => Routed::Dispatch(Action::SelectSession(index)),
    }
}

fn settings_action(event: SettingsEvent) -> Routed {
    match event {
        SettingsEvent::Changed(value) => Routed::Dispatch(Action::SetNextWords(value)),
    }
}

/// Apply an action and run its effect. Returns true when the app should quit.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    let changes_session = match action {
        Action::NewSession => true,
        Action::SelectSession(index) => index < app.sessions.len(),
        _ => false,
    };
    let effect = update(app, action);

    if changes_session && let Some(active) = app.sessions.active() {
        tui.session_panel.highlight_session(active);
        tui.message_list.reset();
    }

    match effect {
        Effect::None => false,
        Effect::SpawnRequest(request) => {
            spawn_request(app, request, tx.clone());
            false
        }
        Effect::Quit => true,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let generator: Arc<dyn TextGenerator> = Arc::new(HttpGenerator::new(&config.endpoint));
    let mut app = App::from_config(generator, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    spawn_health_probe(&app, tx.clone());

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    'main: loop {
        tui.sync_props(&app);

        if app.is_loading {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short while loading (~12fps), long when idle
        let timeout = if app.is_loading {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        let regions = Regions::compute(terminal.get_frame().area());

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Routed::Dispatch(action) = route_event(&event, &mut tui, &regions) {
                if dispatch(&mut app, &mut tui, action, &tx) {
                    break 'main;
                }
                // Props may have changed (e.g. a submit disabled the input)
                tui.sync_props(&app);
            }
        }

        // Handle background task actions (responses, health probe)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, &mut tui, action, &tx) {
                break 'main;
            }
        }
    }

    info!("Quill shutting down");
    ratatui::restore();
    Ok(())
}

fn spawn_health_probe(app: &App, tx: mpsc::Sender<Action>) {
    let generator = app.generator.clone();
    tokio::spawn(async move {
        let reachable = generator.is_reachable().await;
        info!("Health probe for {}: reachable={}", generator.name(), reachable);
        if tx.send(Action::ServiceStatus(reachable)).is_err() {
            warn!("Failed to send service status: receiver dropped");
        }
    });
}

fn spawn_request(app: &App, request: GenerateRequest, tx: mpsc::Sender<Action>) {
    info!(
        "Spawning generation request ({} words) to {}",
        request.next_words,
        app.generator.name()
    );

    let generator = app.generator.clone();
    tokio::spawn(async move {
        let request_start = Instant::now();
        let result = generator.generate(&request).await;
        debug!(
            "Generation finished in {}ms (ok={})",
            request_start.elapsed().as_millis(),
            result.is_ok()
        );
        if tx.send(Action::from_generation(result)).is_err() {
            warn!("Failed to send generation result: receiver dropped");
        }
    });
}

//! rolodex is a terminal browser for a remote user directory: one fetch of
//! the user collection at startup, a searchable list on the left, and the
//! selected user's details on the right.

mod base;
#[cfg(test)]
mod base_tests;
mod config;
mod keys;
mod widgets;
mod worker;

use std::fs;
use std::io::{self, Stdout};
use std::sync::mpsc::Receiver;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
    Terminal,
};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::base::DirectoryStore;
use crate::config::{version, ApplicationSettings, Args};
use crate::keys::{decode_event, AppEvent};
use crate::widgets::{detail_pane, search_bar, user_list, UserListState};
use crate::worker::{ClientWorker, WorkerReply};
use rolodex_api::DirectoryClient;

const LOG_FILE: &str = "rolodex.log";

type DirTerminal = Terminal<CrosstermBackend<Stdout>>;

struct Application {
    /// View state, written only by this event loop
    store: DirectoryStore,
    /// Cursor and scroll state for the list pane
    list_state: UserListState,
    /// Settled load results from the worker
    replies: Receiver<WorkerReply>,
    /// Event poll interval
    tick: Duration,
    /// Set when the user asks to exit
    should_quit: bool,
}

impl Application {
    fn new(settings: &ApplicationSettings) -> Self {
        let client = DirectoryClient::new(settings.endpoint.clone());
        let (requester, replies) = ClientWorker::spawn(client);

        // The one load of this activation; search and selection never
        // trigger another. The requester is dropped right after, so the
        // worker exits once the load settles.
        requester.load_users();

        Application {
            store: DirectoryStore::new(),
            list_state: UserListState::new(),
            replies,
            tick: settings.tick,
            should_quit: false,
        }
    }

    /// Apply any settled worker replies without blocking
    fn drain_replies(&mut self) {
        while let Ok(reply) = self.replies.try_recv() {
            match reply {
                WorkerReply::UsersLoaded(users) => self.store.users_loaded(users),
                WorkerReply::LoadFailed => self.store.load_failed(),
            }

            self.list_state.clamp(self.store.visible_users().len());
        }
    }

    fn select_at(&mut self, index: usize) {
        let user = self.store.visible_users().get(index).cloned();

        if let Some(user) = user {
            self.list_state.set_cursor(index);
            self.store.select(user);
        }
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SearchPush(c) => {
                self.store.search_push(c);
                self.list_state.clamp(self.store.visible_users().len());
            },
            AppEvent::SearchPop => {
                self.store.search_pop();
                self.list_state.clamp(self.store.visible_users().len());
            },
            AppEvent::SearchClear => {
                self.store.search_clear();
                self.list_state.clamp(self.store.visible_users().len());
            },
            AppEvent::Move(motion) => {
                self.list_state.move_to(motion, self.store.visible_users().len());
            },
            AppEvent::SelectCursor => self.select_at(self.list_state.cursor()),
            AppEvent::Click { column, row } => {
                if let Some(index) = self.list_state.hit(column, row) {
                    self.select_at(index);
                }
            },
            AppEvent::Resize => {},
            AppEvent::Quit => self.should_quit = true,
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(frame.area());

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(outer[0]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(panes[0]);

        let loading = self.store.phase().is_loading();

        let list_title = format!(
            "Users ({}/{})",
            self.store.visible_users().len(),
            self.store.all_users().len()
        );

        frame.render_widget(search_bar(self.store.search_term()), left[0]);
        frame.render_stateful_widget(
            user_list(self.store.visible_users())
                .loading(loading)
                .block(Block::default().borders(Borders::ALL).title(list_title)),
            left[1],
            &mut self.list_state,
        );
        frame.render_widget(detail_pane(self.store.selected()).loading(loading), panes[1]);
        frame.render_widget(footer(), outer[1]);
    }
}

fn footer() -> Paragraph<'static> {
    let key = Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(Color::DarkGray);

    Paragraph::new(Line::from(vec![
        Span::styled("type", key),
        Span::styled(" search  ", text),
        Span::styled("up/down", key),
        Span::styled(" move  ", text),
        Span::styled("enter/click", key),
        Span::styled(" select  ", text),
        Span::styled("esc", key),
        Span::styled(" clear  ", text),
        Span::styled("ctrl-c", key),
        Span::styled(" quit", text),
    ]))
}

fn init_tracing(settings: &ApplicationSettings) -> anyhow::Result<WorkerGuard> {
    fs::create_dir_all(&settings.log_dir).with_context(|| {
        format!("failed to create log directory {}", settings.log_dir.display())
    })?;

    // Stdout belongs to the TUI; diagnostics go to a file.
    let appender = tracing_appender::rolling::never(&settings.log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("ROLODEX_LOG")
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

fn setup_terminal() -> anyhow::Result<DirTerminal> {
    enable_raw_mode().context("failed to enable raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("failed to enter alternate screen")?;

    Terminal::new(CrosstermBackend::new(stdout)).context("failed to create terminal")
}

fn restore_terminal(terminal: &mut DirTerminal) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    Ok(())
}

fn run(terminal: &mut DirTerminal, mut app: Application) -> anyhow::Result<()> {
    while !app.should_quit {
        app.drain_replies();
        terminal.draw(|frame| app.draw(frame))?;

        if event::poll(app.tick)? {
            if let Some(event) = decode_event(event::read()?) {
                app.handle_event(event);
            }
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = ApplicationSettings::from_args(args)?;
    let _guard = init_tracing(&settings)?;

    info!(version = %version(), endpoint = %settings.endpoint, "starting rolodex");

    let app = Application::new(&settings);

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, app);
    restore_terminal(&mut terminal)?;

    result
}

// App state and main event loop.
// Holds the resolved profile, its derived views, and keyboard-driven selection.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::prelude::*;
use ratatui::widgets::ListState;

use starmap::ResolvedDataset;
use starmap::derive::Presentation;

use crate::ui;

/// Active tab in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    Profile,
    #[default]
    Projects,
    Skills,
    Activity,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Profile, Tab::Projects, Tab::Skills, Tab::Activity];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Profile => "Profile",
            Tab::Projects => "Projects",
            Tab::Skills => "Skills",
            Tab::Activity => "Activity",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Profile => Tab::Projects,
            Tab::Projects => Tab::Skills,
            Tab::Skills => Tab::Activity,
            Tab::Activity => Tab::Profile,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Tab::Profile => Tab::Activity,
            Tab::Projects => Tab::Profile,
            Tab::Skills => Tab::Projects,
            Tab::Activity => Tab::Skills,
        }
    }
}

/// Main application state.
pub struct App {
    /// Currently active tab.
    pub active_tab: Tab,
    pub dataset: ResolvedDataset,
    pub presentation: Presentation,
    pub projects_state: ListState,
    pub activity_state: ListState,
    /// Whether the app should exit.
    pub should_quit: bool,
    rng: StdRng,
}

impl App {
    pub fn new(dataset: ResolvedDataset, presentation: Presentation, rng: StdRng) -> Self {
        let mut projects_state = ListState::default();
        if !presentation.projects.is_empty() {
            projects_state.select(Some(0));
        }
        let mut activity_state = ListState::default();
        if !presentation.timeline.is_empty() {
            activity_state.select(Some(0));
        }

        Self {
            active_tab: Tab::default(),
            dataset,
            presentation,
            projects_state,
            activity_state,
            should_quit: false,
            rng,
        }
    }

    /// Build an app that re-rolls layouts from a fresh random seed.
    pub fn with_entropy(dataset: ResolvedDataset, presentation: Presentation) -> Self {
        Self::new(dataset, presentation, StdRng::from_entropy())
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.active_tab = self.active_tab.next(),
            KeyCode::BackTab => self.active_tab = self.active_tab.prev(),
            KeyCode::Char('j') | KeyCode::Down => self.move_selection(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection(-1),
            KeyCode::Char('r') => {
                self.presentation.reroll_layout(&mut self.rng);
            }
            _ => {}
        }
    }

    /// Move the selection in the active tab's list, staying within bounds.
    fn move_selection(&mut self, delta: i64) {
        let (state, len) = match self.active_tab {
            Tab::Projects => (&mut self.projects_state, self.presentation.projects.len()),
            Tab::Activity => (&mut self.activity_state, self.presentation.timeline.len()),
            Tab::Profile | Tab::Skills => return,
        };
        if len == 0 {
            return;
        }

        let current = state.selected().unwrap_or(0) as i64;
        let next = (current + delta).clamp(0, len as i64 - 1);
        state.select(Some(next as usize));
    }
}

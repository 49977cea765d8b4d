//! The portfolio application
//!
//! Core application state and event dispatch.
//! Handler implementations live in the sibling modules, each adding an
//! `impl<H: Host> App<H>` block for its concern.

mod actions;
mod collapsible;
mod events;
mod init;
mod modal;
mod navigation;
mod render;
mod search;
mod state;
mod theme;
mod toast;

pub use actions::ActionKind;
pub use events::{ActionTrigger, UiEvent};
pub use render::RenderedCard;
pub use state::{LoadState, UiState};

use std::collections::BTreeSet;

use crate::config::FolioConfig;
use crate::host::{Binding, Host, ViewBindings};
use crate::model::{PortfolioData, Project};

/// Application state, generic over the host it renders into
pub struct App<H: Host> {
    host: H,
    config: FolioConfig,
    view: ViewBindings,
    state: UiState,
    data: Option<PortfolioData>,
    featured: Option<Project>,
    cards: Vec<RenderedCard>,
    bound: BTreeSet<Binding>,
}

impl<H: Host> App<H> {
    pub fn new(host: H, config: FolioConfig) -> Self {
        let state = UiState::new(config.default_theme);
        Self {
            host,
            config,
            view: ViewBindings::default(),
            state,
            data: None,
            featured: None,
            cards: Vec::new(),
            bound: BTreeSet::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Loaded document, once the fetch has succeeded
    pub fn data(&self) -> Option<&PortfolioData> {
        self.data.as_ref()
    }

    pub fn featured(&self) -> Option<&Project> {
        self.featured.as_ref()
    }

    /// Project cards currently rendered on the projects page
    pub fn cards(&self) -> &[RenderedCard] {
        &self.cards
    }

    pub fn is_bound(&self, binding: Binding) -> bool {
        self.bound.contains(&binding)
    }

    /// Attach a listener group; repeated binds are ignored
    fn bind(&mut self, binding: Binding) {
        if self.bound.insert(binding) {
            self.host.bind(binding);
        }
    }
}

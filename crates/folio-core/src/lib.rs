//! Folio Core - Shared library for the portfolio single-page app
//!
//! This crate provides everything that does not depend on a browser:
//! - Data model for the portfolio document (profile, skills, projects)
//! - Markup rendering with uniform HTML escaping
//! - Search index and substring filtering
//! - Data loading over HTTP, from disk, or from canned responses
//! - The `Host` abstraction, typed view bindings, and the `App` that drives them
//!
//! Front-ends implement [`Host`] and feed [`UiEvent`]s into [`App::dispatch`].

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod host;
pub mod loader;
pub mod markup;
pub mod model;
pub mod search;

// Re-exports for convenience
pub use app::{ActionKind, ActionTrigger, App, UiEvent, UiState};
pub use config::FolioConfig;
pub use error::{ConfigError, LoadError, ViewError};
pub use host::{Binding, Display, Host, MemoryHost, Slot, Target, TimerId, ViewBindings};
pub use loader::{load_data, DataSource, FileSource, HttpSource, StaticSource};
pub use model::{Category, FeaturedRef, PortfolioData, Profile, Project, Skill, Theme};

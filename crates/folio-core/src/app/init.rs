//! Startup sequence
//!
//! `boot` makes the shell interactive without any data; `finish_load`
//! renders whatever the fetch produced. Browsers call the two separately so
//! the page responds while the fetch is in flight.

use tracing::{error, info};

use super::{App, LoadState};
use crate::error::{LoadError, ViewError};
use crate::host::{Binding, Host, Slot, Target, ViewBindings};
use crate::loader::{load_data, DataSource};
use crate::markup;
use crate::model::PortfolioData;

impl<H: Host> App<H> {
    /// Validate the shell, apply the theme, and bind data-independent listeners
    pub fn boot(&mut self) -> Result<(), ViewError> {
        self.view = ViewBindings::resolve(&self.host)?;

        let year = self.host.current_year().to_string();
        self.host.set_text(Target::Slot(Slot::Year), &year);

        let theme = self.persisted_theme();
        self.set_theme(theme);

        for binding in Binding::STATIC {
            self.bind(binding);
        }
        info!("Shell ready, theme {}", theme.as_str());
        Ok(())
    }

    /// Render the loaded document, or report why it could not be loaded
    pub fn finish_load(&mut self, result: Result<PortfolioData, LoadError>) {
        let data = match result {
            Ok(data) => data,
            Err(err) => {
                error!("Failed to load portfolio data: {}", err);
                self.state.load = LoadState::Failed;
                let body = markup::load_error_body(&err.to_string(), &self.config.data_url);
                self.open_modal("Error", &body);
                return;
            }
        };

        self.render_profile(&data.profile);
        self.bind(Binding::TopButtons);
        self.bind(Binding::Search);

        self.render_skills(&data.skills);
        self.bind(Binding::SkillChips);

        self.render_projects(&data.projects);

        let featured = data.find_featured();
        if featured.is_none() && data.featured.is_some() {
            info!("Featured project does not resolve, hiding featured card");
        }
        self.render_featured(featured);
        if self.featured.is_some() {
            self.bind(Binding::Featured);
        }

        self.data = Some(data);
        self.state.load = LoadState::Loaded;
    }

    /// Boot, fetch, and render in one go
    pub async fn start<S: DataSource + ?Sized>(&mut self, source: &S) -> Result<(), ViewError> {
        self.boot()?;
        let result = load_data(source).await;
        self.finish_load(result);
        Ok(())
    }
}

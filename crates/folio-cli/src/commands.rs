//! Subcommand implementations

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::Datelike;
use folio_core::{load_data, markup, App, Category, DataSource, FileSource, FolioConfig, HttpSource};
use serde::Serialize;
use tracing::info;
use url::Url;

use crate::shell;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

/// Outcome of a successful `check`
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub shell: String,
    pub data: String,
    pub profile: String,
    pub skills: usize,
    pub excel_projects: usize,
    pub sql_projects: usize,
    pub featured: Option<String>,
}

impl CheckReport {
    pub fn print(&self, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(self)?);
            return Ok(());
        }
        println!("✓ {} renders {}", self.shell, self.data);
        println!("  Profile:  {}", self.profile);
        println!("  Skills:   {}", self.skills);
        println!(
            "  Projects: {} excel, {} sql",
            self.excel_projects, self.sql_projects
        );
        match &self.featured {
            Some(title) => println!("  Featured: {}", title),
            None => println!("  Featured: (hidden)"),
        }
        Ok(())
    }
}

/// Explicit config, else `folio.toml` if present, else defaults
pub fn load_config(path: Option<&Path>) -> Result<FolioConfig> {
    match path {
        Some(path) => FolioConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            FolioConfig::load(Path::new(DEFAULT_CONFIG_FILE))
                .with_context(|| format!("Failed to load {}", DEFAULT_CONFIG_FILE))
        }
        None => Ok(FolioConfig::default()),
    }
}

/// An http(s) URL or a file path relative to `base_dir`
pub fn data_source(location: &str, base_dir: &Path) -> Box<dyn DataSource> {
    match Url::parse(location) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Box::new(HttpSource::from_url(url)),
        _ => Box::new(FileSource::new(base_dir.join(location))),
    }
}

/// Run the full startup pipeline headless against a shell and data document
///
/// Without `data`, the configured data URL is resolved next to the shell,
/// the same way a browser resolves it against the page.
pub async fn check(shell_path: &Path, data: Option<&str>, config: FolioConfig) -> Result<CheckReport> {
    let html = std::fs::read_to_string(shell_path)
        .with_context(|| format!("Failed to read shell {}", shell_path.display()))?;
    let host = shell::host_from_html(&html, chrono::Local::now().year())?;

    let source = match data {
        Some(location) => data_source(location, Path::new(".")),
        None => {
            let shell_dir = shell_path.parent().map(PathBuf::from).unwrap_or_default();
            data_source(&config.data_url, &shell_dir)
        }
    };

    let mut app = App::new(host, config);
    app.boot()
        .with_context(|| format!("Shell {} is incomplete", shell_path.display()))?;

    let result = load_data(source.as_ref()).await;
    let failure = result.as_ref().err().map(ToString::to_string);
    app.finish_load(result);
    if let Some(reason) = failure {
        bail!("Data document {} did not load: {}", source.location(), reason);
    }

    let Some(loaded) = app.data() else {
        bail!("Data document {} did not render", source.location());
    };
    let report = CheckReport {
        shell: shell_path.display().to_string(),
        data: source.location().to_string(),
        profile: loaded.profile.name.clone(),
        skills: loaded.skills.len(),
        excel_projects: loaded.projects.get(Category::Excel).len(),
        sql_projects: loaded.projects.get(Category::Sql).len(),
        featured: app.featured().map(|p| p.title.clone()),
    };
    info!(
        "Checked {}: {} cards rendered",
        report.shell,
        app.cards().len()
    );
    Ok(report)
}

/// Project card markup for one category, or both
pub async fn render(data: &str, category: Option<Category>) -> Result<String> {
    let source = data_source(data, Path::new("."));
    let document = load_data(source.as_ref())
        .await
        .with_context(|| format!("Failed to load {}", source.location()))?;

    let categories = match category {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };
    let mut out = String::new();
    for category in categories {
        out.push_str(&format!("<!-- {} -->\n", category.key()));
        out.push_str(&markup::project_column(
            document.projects.get(category),
            category,
        ));
        out.push('\n');
    }
    Ok(out)
}

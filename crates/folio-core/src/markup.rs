//! Markup generation
//!
//! Pure functions from model values to HTML strings. Every interpolated value
//! goes through [`escape_html`], including tags, URLs, and attribute values.
//! Interactive elements carry `data-action` attributes and are wired up by the
//! delegated action handler; no markup here contains inline script.

use crate::model::{Category, Links, Project, Skill};
use crate::search::search_index;

/// Escape the five HTML-significant characters
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Element id of a rendered project card
pub fn card_id(category: Category, index: usize) -> String {
    format!("card-{}-{}", category.key(), index)
}

/// Render one project card
pub fn project_card(project: &Project, category: Category, index: usize) -> String {
    let title = escape_html(&project.title);

    let preview_btn = match project.preview() {
        Some(img) => format!(
            r#"<button class="btn" data-action="preview" data-img="{}" data-title="{}">Preview</button>"#,
            escape_html(img),
            title
        ),
        None => disabled_button("btn", "No preview yet", "Preview"),
    };
    let github_btn = link_button(project.github(), "GitHub", "Add githubUrl in projects.json");
    let open_btn = link_button(project.open(), "Open", "Add openUrl in projects.json");

    let highlights: String = project
        .shown_highlights()
        .iter()
        .map(|h| format!("<li>{}</li>", escape_html(h)))
        .collect();
    let highlights = if highlights.is_empty() {
        String::new()
    } else {
        format!(r#"<ul class="list compact" style="margin-top:10px;">{highlights}</ul>"#)
    };

    let tags: String = project
        .tags
        .iter()
        .map(|t| format!(r#"<span class="tag">{}</span>"#, escape_html(t)))
        .collect();

    format!(
        r#"<div class="projectCard hoverPop" id="{id}" data-search="{search}">
  <div class="projectTitle">{title}</div>
  <div class="projectSub">{subtitle}</div>
  <div class="projectDesc">{description}</div>
  {highlights}
  <div class="row" style="margin-top:10px;">{preview_btn}{github_btn}{open_btn}</div>
  <div class="tagRow">{tags}</div>
</div>"#,
        id = card_id(category, index),
        search = escape_html(&search_index(project)),
        subtitle = escape_html(&project.subtitle),
        description = escape_html(&project.description),
    )
}

fn link_button(url: Option<&str>, label: &str, missing_hint: &str) -> String {
    match url {
        Some(url) => format!(
            r#"<button class="btn ghost" data-action="{action}" data-url="{url}">{label}</button>"#,
            action = label.to_lowercase(),
            url = escape_html(url),
        ),
        None => disabled_button("btn ghost", missing_hint, label),
    }
}

fn disabled_button(class: &str, hint: &str, label: &str) -> String {
    format!(
        r#"<button class="{class}" disabled title="{}">{label}</button>"#,
        escape_html(hint)
    )
}

/// All cards of one category, in document order
pub fn project_column(projects: &[Project], category: Category) -> String {
    projects
        .iter()
        .enumerate()
        .map(|(i, p)| project_card(p, category, i))
        .collect()
}

/// Skill chips; selection is routed through `data-skill`
pub fn skill_chips(skills: &[Skill]) -> String {
    skills
        .iter()
        .enumerate()
        .map(|(i, s)| {
            format!(
                r#"<button class="skillChip" data-skill="{i}">{}</button>"#,
                escape_html(&s.name)
            )
        })
        .collect()
}

/// Featured highlight list items
pub fn highlight_items(highlights: &[String]) -> String {
    highlights
        .iter()
        .map(|h| format!("<li>{}</li>", escape_html(h)))
        .collect()
}

/// Full-width image for the preview modal
pub fn preview_body(image: &str) -> String {
    format!(
        r#"<img src="{}" style="width:100%; border-radius:14px; border:1px solid var(--border);" />"#,
        escape_html(image)
    )
}

pub fn help_body(data_url: &str) -> String {
    format!(
        r#"<ul class="list compact">
  <li>Projects auto-load from <code>{}</code></li>
  <li>To add a new Excel project: add a new object under <b>projects.excel</b></li>
  <li>To add a new SQL project: add a new object under <b>projects.sql</b></li>
</ul>"#,
        escape_html(data_url)
    )
}

/// Contact dialog with open and copy buttons for each profile link
pub fn contact_body(links: &Links) -> String {
    format!(
        r#"<p class="muted">Open my profiles:</p>
<div class="row">{}{}</div>
<div style="margin-top:10px;">{}{}</div>"#,
        contact_button("btn", "open", &links.linkedin, "LinkedIn"),
        contact_button("btn ghost", "open", &links.github, "GitHub"),
        contact_button("btn ghost", "copy", &links.linkedin, "Copy LinkedIn"),
        contact_button("btn ghost", "copy", &links.github, "Copy GitHub"),
    )
}

fn contact_button(class: &str, action: &str, link: &str, label: &str) -> String {
    if link.trim().is_empty() {
        return disabled_button(class, "Link not set yet", label);
    }
    let attr = if action == "copy" { "data-text" } else { "data-url" };
    format!(
        r#"<button class="{class}" data-action="{action}" {attr}="{}">{label}</button>"#,
        escape_html(link)
    )
}

/// Body of the modal shown when the data document cannot be loaded
pub fn load_error_body(message: &str, data_url: &str) -> String {
    format!(
        r#"<p class="muted">{}</p>
<p class="muted">Make sure you created <code>{}</code> and that the site is served over HTTP (for example with a local dev server), not opened as a file.</p>"#,
        escape_html(message),
        escape_html(data_url)
    )
}

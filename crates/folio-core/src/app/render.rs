//! Rendering the loaded document into the host
//!
//! Every render is a full replace of its target, never incremental.

use tracing::{debug, info};

use super::App;
use crate::constants::labels;
use crate::host::{Display, Host, Slot, Target};
use crate::markup;
use crate::model::{Category, Profile, Project, ProjectGroups, Skill};
use crate::search::search_index;

/// A project card present on the projects page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard {
    pub element_id: String,
    pub category: Category,
    pub search_index: String,
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

fn href(url: &str) -> &str {
    if url.trim().is_empty() {
        "#"
    } else {
        url
    }
}

impl<H: Host> App<H> {
    pub fn render_profile(&mut self, profile: &Profile) {
        let host = &mut self.host;

        host.set_text(
            Target::Slot(Slot::ProfileName),
            or_default(&profile.name, labels::DEFAULT_NAME),
        );
        host.set_text(
            Target::Slot(Slot::ProfileHeadline),
            or_default(&profile.headline, labels::DEFAULT_HEADLINE),
        );
        host.set_text(Target::Slot(Slot::ProfileSummary), &profile.summary);
        host.set_text(
            Target::Slot(Slot::CoreSkills),
            &profile.core_skills.join(labels::CORE_SKILL_SEPARATOR),
        );
        host.set_text(
            Target::Slot(Slot::CurrentFocus),
            or_default(&profile.current_focus, labels::DEFAULT_FOCUS),
        );

        host.set_text(Target::Slot(Slot::AboutSummary), &profile.summary);
        host.set_text(Target::Slot(Slot::AboutGitHub), "GitHub Profile");
        host.set_attribute(Target::Slot(Slot::AboutGitHub), "href", href(&profile.links.github));
        host.set_text(Target::Slot(Slot::AboutLinkedIn), "LinkedIn Profile");
        host.set_attribute(
            Target::Slot(Slot::AboutLinkedIn),
            "href",
            href(&profile.links.linkedin),
        );
    }

    /// Replace all skill chips
    pub fn render_skills(&mut self, skills: &[Skill]) {
        self.host
            .set_html(Target::Slot(Slot::SkillChips), &markup::skill_chips(skills));
        self.state.selected_skill = None;
    }

    /// Show a skill's detail text
    pub fn select_skill(&mut self, index: usize) {
        let Some(skill) = self.data.as_ref().and_then(|d| d.skills.get(index)) else {
            debug!("No skill at index {}", index);
            return;
        };
        let (name, text) = (skill.name.clone(), skill.text.clone());

        self.host.set_text(Target::Slot(Slot::SkillInfo), &text);
        self.state.selected_skill = Some(index);
        self.show_toast(format!("Skill: {name}"));
    }

    /// Replace both project columns and rebuild the search index
    pub fn render_projects(&mut self, projects: &ProjectGroups) {
        self.cards.clear();
        for category in Category::ALL {
            let list = projects.get(category);
            let slot = match category {
                Category::Excel => Slot::ExcelProjects,
                Category::Sql => Slot::SqlProjects,
            };
            self.host.set_html(
                Target::Slot(slot),
                &markup::project_column(list, category),
            );
            self.cards
                .extend(list.iter().enumerate().map(|(i, p)| RenderedCard {
                    element_id: markup::card_id(category, i),
                    category,
                    search_index: search_index(p),
                }));
        }
        self.state.search_query.clear();
        info!("Rendered {} project cards", self.cards.len());
    }

    /// Populate the featured card, or hide it when nothing resolves
    pub fn render_featured(&mut self, featured: Option<&Project>) {
        let card = Target::Slot(Slot::FeaturedCard);
        let Some(project) = featured else {
            self.host.set_display(card, Display::None);
            self.featured = None;
            return;
        };

        let host = &mut self.host;
        // Leave the shell's own layout alone unless an earlier render hid it
        if host.display(card) == Some(Display::None) {
            host.set_display(card, Display::Block);
        }
        host.set_text(
            Target::Slot(Slot::FeaturedTitle),
            &format!("⭐ Featured Project — {}", project.title),
        );
        host.set_text(Target::Slot(Slot::FeaturedDesc), &project.description);
        host.set_text(
            Target::Slot(Slot::FeaturedText),
            if project.subtitle.is_empty() {
                "Featured"
            } else {
                "Featured Project"
            },
        );

        let image = Target::Slot(Slot::FeaturedImage);
        host.set_attribute(image, "src", project.preview().unwrap_or(""));
        host.set_display(
            image,
            if project.preview().is_some() {
                Display::Block
            } else {
                Display::None
            },
        );

        host.set_html(
            Target::Slot(Slot::FeaturedHighlights),
            &markup::highlight_items(project.shown_highlights()),
        );

        self.featured = Some(project.clone());
    }
}

//! Typed view bindings
//!
//! Every fixed element the app writes to is a [`Slot`]. The whole set is
//! checked once at startup so a broken shell fails with one diagnostic
//! instead of a trail of silent no-ops.

use tracing::info;

use super::{Host, Target};
use crate::error::ViewError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    // Presenter
    Toast,
    ModalOverlay,
    ModalTitle,
    ModalBody,
    ModalClose,

    // Navigation
    BrandHome,
    ExploreProjects,

    // Top buttons
    ThemeButton,
    HelpButton,
    ContactButton,
    ContactButtonAlt,
    OpenLinkedIn,
    OpenGitHub,
    DownloadResume,
    ScrollTop,
    CopyAbout,

    // Search
    SearchInput,
    ClearSearch,

    // Profile
    ProfileName,
    ProfileHeadline,
    ProfileSummary,
    CoreSkills,
    CurrentFocus,
    AboutSummary,
    AboutGitHub,
    AboutLinkedIn,
    Year,

    // Skills
    SkillChips,
    SkillInfo,

    // Projects
    ExcelProjects,
    SqlProjects,

    // Featured
    FeaturedCard,
    FeaturedTitle,
    FeaturedText,
    FeaturedDesc,
    FeaturedImage,
    FeaturedHighlights,
    FeaturedPreview,
    FeaturedGitHub,
    FeaturedOpen,
}

impl Slot {
    pub const ALL: [Slot; 40] = [
        Slot::Toast,
        Slot::ModalOverlay,
        Slot::ModalTitle,
        Slot::ModalBody,
        Slot::ModalClose,
        Slot::BrandHome,
        Slot::ExploreProjects,
        Slot::ThemeButton,
        Slot::HelpButton,
        Slot::ContactButton,
        Slot::ContactButtonAlt,
        Slot::OpenLinkedIn,
        Slot::OpenGitHub,
        Slot::DownloadResume,
        Slot::ScrollTop,
        Slot::CopyAbout,
        Slot::SearchInput,
        Slot::ClearSearch,
        Slot::ProfileName,
        Slot::ProfileHeadline,
        Slot::ProfileSummary,
        Slot::CoreSkills,
        Slot::CurrentFocus,
        Slot::AboutSummary,
        Slot::AboutGitHub,
        Slot::AboutLinkedIn,
        Slot::Year,
        Slot::SkillChips,
        Slot::SkillInfo,
        Slot::ExcelProjects,
        Slot::SqlProjects,
        Slot::FeaturedCard,
        Slot::FeaturedTitle,
        Slot::FeaturedText,
        Slot::FeaturedDesc,
        Slot::FeaturedImage,
        Slot::FeaturedHighlights,
        Slot::FeaturedPreview,
        Slot::FeaturedGitHub,
        Slot::FeaturedOpen,
    ];

    /// Element id in the host document
    pub fn id(&self) -> &'static str {
        match self {
            Slot::Toast => "toast",
            Slot::ModalOverlay => "modalOverlay",
            Slot::ModalTitle => "modalTitle",
            Slot::ModalBody => "modalBody",
            Slot::ModalClose => "modalCloseBtn",
            Slot::BrandHome => "brandHome",
            Slot::ExploreProjects => "btnExploreProjects",
            Slot::ThemeButton => "themeBtn",
            Slot::HelpButton => "helpBtn",
            Slot::ContactButton => "contactBtn",
            Slot::ContactButtonAlt => "openContactBtn2",
            Slot::OpenLinkedIn => "btnOpenLinkedIn",
            Slot::OpenGitHub => "btnOpenGitHub",
            Slot::DownloadResume => "downloadResumeBtn",
            Slot::ScrollTop => "scrollTopBtn",
            Slot::CopyAbout => "copyAboutBtn",
            Slot::SearchInput => "searchInput",
            Slot::ClearSearch => "clearSearchBtn",
            Slot::ProfileName => "profileName",
            Slot::ProfileHeadline => "profileHeadline",
            Slot::ProfileSummary => "profileSummary",
            Slot::CoreSkills => "coreSkillsText",
            Slot::CurrentFocus => "currentFocusText",
            Slot::AboutSummary => "aboutSummary",
            Slot::AboutGitHub => "aboutGitHub",
            Slot::AboutLinkedIn => "aboutLinkedIn",
            Slot::Year => "year",
            Slot::SkillChips => "skillChips",
            Slot::SkillInfo => "skillInfo",
            Slot::ExcelProjects => "excelProjects",
            Slot::SqlProjects => "sqlProjects",
            Slot::FeaturedCard => "featuredCard",
            Slot::FeaturedTitle => "featuredTitle",
            Slot::FeaturedText => "featuredText",
            Slot::FeaturedDesc => "featuredDesc",
            Slot::FeaturedImage => "featuredImg",
            Slot::FeaturedHighlights => "featuredHighlights",
            Slot::FeaturedPreview => "btnFeaturedPreview",
            Slot::FeaturedGitHub => "btnFeaturedGitHub",
            Slot::FeaturedOpen => "btnFeaturedOpen",
        }
    }

    /// Reverse lookup from an element id
    pub fn from_id(id: &str) -> Option<Slot> {
        Slot::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// Validated snapshot of the host document's structure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewBindings {
    pages: Vec<String>,
    toggles: Vec<String>,
}

impl ViewBindings {
    /// Check every slot and discover pages and collapsible sections
    pub fn resolve<H: Host + ?Sized>(host: &H) -> Result<Self, ViewError> {
        let missing: Vec<&'static str> = Slot::ALL
            .iter()
            .filter(|slot| !host.exists(Target::Slot(**slot)))
            .map(Slot::id)
            .collect();
        if !missing.is_empty() {
            return Err(ViewError::MissingSlots(missing));
        }

        let bindings = Self {
            pages: host.page_keys(),
            toggles: host.toggle_targets(),
        };
        info!(
            "View bound: {} pages, {} collapsible sections",
            bindings.pages.len(),
            bindings.toggles.len()
        );
        Ok(bindings)
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn has_page(&self, key: &str) -> bool {
        self.pages.iter().any(|p| p == key)
    }

    pub fn has_toggle(&self, body_id: &str) -> bool {
        self.toggles.iter().any(|t| t == body_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;
    use std::collections::HashSet;

    #[test]
    fn test_slot_ids_are_unique() {
        let ids: HashSet<_> = Slot::ALL.iter().map(Slot::id).collect();
        assert_eq!(ids.len(), Slot::ALL.len());
    }

    #[test]
    fn test_from_id_round_trips() {
        for slot in Slot::ALL {
            assert_eq!(Slot::from_id(slot.id()), Some(slot));
        }
        assert_eq!(Slot::from_id("nope"), None);
    }

    #[test]
    fn test_resolve_complete_shell() {
        let host = MemoryHost::shell();
        let view = ViewBindings::resolve(&host).unwrap();
        assert!(view.has_page("home"));
        assert!(view.has_page("projects"));
        assert!(!view.has_page("blog"));
        assert!(view.has_toggle("excelBody"));
    }

    #[test]
    fn test_resolve_reports_all_missing_slots() {
        let mut host = MemoryHost::shell();
        host.remove_element("toast");
        host.remove_element("featuredImg");

        let err = ViewBindings::resolve(&host).unwrap_err();
        let ViewError::MissingSlots(missing) = &err;
        assert_eq!(missing, &vec!["toast", "featuredImg"]);
        assert_eq!(
            err.to_string(),
            "host document is missing required elements: toast, featuredImg"
        );
    }
}

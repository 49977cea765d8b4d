//! In-memory host
//!
//! Records every mutation instead of touching a real document. Used by the
//! tests and by the CLI's headless `check` run.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::time::Duration;

use super::{Binding, Display, Host, Slot, Target};
use crate::host::TimerId;

#[derive(Debug, Clone)]
pub struct ElementState {
    pub text: String,
    pub html: String,
    pub value: String,
    pub display: Display,
    pub classes: BTreeSet<String>,
    pub attributes: BTreeMap<String, String>,
}

impl Default for ElementState {
    fn default() -> Self {
        Self {
            text: String::new(),
            html: String::new(),
            value: String::new(),
            display: Display::Block,
            classes: BTreeSet::new(),
            attributes: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryHost {
    elements: HashMap<String, ElementState>,
    pages: Vec<String>,
    toggles: Vec<String>,
    storage: HashMap<String, String>,
    pending_timers: BTreeSet<TimerId>,
    next_timer: u64,
    opened: Vec<String>,
    clipboard: Vec<String>,
    scrolls: usize,
    bound: Vec<Binding>,
    year: i32,
}

fn key(target: Target<'_>) -> String {
    match target {
        Target::Slot(slot) => slot.id().to_string(),
        Target::Element(id) => id.to_string(),
        Target::Page(page) => format!("page-{page}"),
        Target::NavButton(page) => format!("nav:{page}"),
        Target::Chevron(body) => format!("chev:{body}"),
        Target::Body => "body".to_string(),
    }
}

impl MemoryHost {
    /// Empty document with only a body
    pub fn new() -> Self {
        let mut host = Self {
            year: 1970,
            ..Default::default()
        };
        host.elements.insert(key(Target::Body), ElementState::default());
        host
    }

    /// Complete shell: every slot, home/projects/about pages with nav
    /// buttons, and two open collapsible project sections
    pub fn shell() -> Self {
        let mut host = Self::new();
        for slot in Slot::ALL {
            host.add_element(slot.id());
        }
        for page in ["home", "projects", "about"] {
            host.add_page(page);
        }
        for body in ["excelBody", "sqlBody"] {
            host.add_toggle(body);
        }
        host.element_mut(Target::Slot(Slot::Toast)).display = Display::None;
        host.element_mut(Target::Slot(Slot::ModalOverlay)).display = Display::None;
        host
    }

    pub fn add_element(&mut self, id: &str) {
        self.elements.entry(id.to_string()).or_default();
    }

    pub fn remove_element(&mut self, id: &str) {
        self.elements.remove(id);
    }

    /// Add `.page#page-<key>` and its `.navBtn[data-page=<key>]`
    pub fn add_page(&mut self, page: &str) {
        self.pages.push(page.to_string());
        self.elements.entry(key(Target::Page(page))).or_default();
        self.elements
            .entry(key(Target::NavButton(page)))
            .or_default();
    }

    /// Add an open collapsible body with its chevron
    pub fn add_toggle(&mut self, body_id: &str) {
        self.toggles.push(body_id.to_string());
        self.add_element(body_id);
        self.elements
            .entry(key(Target::Chevron(body_id)))
            .or_default();
    }

    pub fn set_year(&mut self, year: i32) {
        self.year = year;
    }

    fn element_mut(&mut self, target: Target<'_>) -> &mut ElementState {
        self.elements.entry(key(target)).or_default()
    }

    /// Mutable access that drops writes to fixed targets that do not exist
    fn existing_mut(&mut self, target: Target<'_>) -> Option<&mut ElementState> {
        match target {
            Target::Element(_) => Some(self.element_mut(target)),
            _ => self.elements.get_mut(&key(target)),
        }
    }

    pub fn element(&self, target: Target<'_>) -> Option<&ElementState> {
        self.elements.get(&key(target))
    }

    pub fn text(&self, target: Target<'_>) -> Option<&str> {
        self.element(target).map(|e| e.text.as_str())
    }

    pub fn html(&self, target: Target<'_>) -> Option<&str> {
        self.element(target).map(|e| e.html.as_str())
    }

    pub fn attribute(&self, target: Target<'_>, name: &str) -> Option<&str> {
        self.element(target)
            .and_then(|e| e.attributes.get(name))
            .map(String::as_str)
    }

    pub fn input_value(&self, target: Target<'_>) -> Option<&str> {
        self.element(target).map(|e| e.value.as_str())
    }

    pub fn opened_urls(&self) -> &[String] {
        &self.opened
    }

    pub fn clipboard_writes(&self) -> &[String] {
        &self.clipboard
    }

    pub fn scroll_count(&self) -> usize {
        self.scrolls
    }

    pub fn bound(&self) -> &[Binding] {
        &self.bound
    }

    pub fn pending_timers(&self) -> Vec<TimerId> {
        self.pending_timers.iter().copied().collect()
    }

    pub fn storage(&self) -> &HashMap<String, String> {
        &self.storage
    }
}

impl Host for MemoryHost {
    fn exists(&self, target: Target<'_>) -> bool {
        self.elements.contains_key(&key(target))
    }

    fn page_keys(&self) -> Vec<String> {
        self.pages.clone()
    }

    fn toggle_targets(&self) -> Vec<String> {
        self.toggles.clone()
    }

    fn set_text(&mut self, target: Target<'_>, text: &str) {
        if let Some(el) = self.existing_mut(target) {
            el.text = text.to_string();
            el.html.clear();
        }
    }

    fn set_html(&mut self, target: Target<'_>, html: &str) {
        if let Some(el) = self.existing_mut(target) {
            el.html = html.to_string();
            el.text.clear();
        }
    }

    fn set_attribute(&mut self, target: Target<'_>, name: &str, value: &str) {
        if let Some(el) = self.existing_mut(target) {
            el.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn set_display(&mut self, target: Target<'_>, display: Display) {
        if let Some(el) = self.existing_mut(target) {
            el.display = display;
        }
    }

    fn display(&self, target: Target<'_>) -> Option<Display> {
        self.element(target).map(|e| e.display)
    }

    fn set_class(&mut self, target: Target<'_>, class: &str, enabled: bool) {
        if let Some(el) = self.existing_mut(target) {
            if enabled {
                el.classes.insert(class.to_string());
            } else {
                el.classes.remove(class);
            }
        }
    }

    fn has_class(&self, target: Target<'_>, class: &str) -> bool {
        self.element(target)
            .is_some_and(|e| e.classes.contains(class))
    }

    fn set_input_value(&mut self, target: Target<'_>, value: &str) {
        if let Some(el) = self.existing_mut(target) {
            el.value = value.to_string();
        }
    }

    fn scroll_to_top(&mut self) {
        self.scrolls += 1;
    }

    fn open_url(&mut self, url: &str) {
        self.opened.push(url.to_string());
    }

    fn write_clipboard(&mut self, text: &str) {
        self.clipboard.push(text.to_string());
    }

    fn storage_get(&self, key: &str) -> Option<String> {
        self.storage.get(key).cloned()
    }

    fn storage_set(&mut self, key: &str, value: &str) {
        self.storage.insert(key.to_string(), value.to_string());
    }

    fn set_timeout(&mut self, _delay: Duration) -> TimerId {
        self.next_timer += 1;
        let id = TimerId(self.next_timer);
        self.pending_timers.insert(id);
        id
    }

    fn clear_timeout(&mut self, id: TimerId) {
        self.pending_timers.remove(&id);
    }

    fn bind(&mut self, binding: Binding) {
        if !self.bound.contains(&binding) {
            self.bound.push(binding);
        }
    }

    fn current_year(&self) -> i32 {
        self.year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_to_missing_fixed_targets_are_dropped() {
        let mut host = MemoryHost::new();
        host.set_text(Target::Slot(Slot::Toast), "hi");
        assert!(!host.exists(Target::Slot(Slot::Toast)));
    }

    #[test]
    fn test_element_targets_are_created_on_write() {
        let mut host = MemoryHost::new();
        host.set_display(Target::Element("card-excel-0"), Display::None);
        assert_eq!(
            host.display(Target::Element("card-excel-0")),
            Some(Display::None)
        );
    }

    #[test]
    fn test_text_replaces_html() {
        let mut host = MemoryHost::shell();
        let target = Target::Slot(Slot::SkillInfo);
        host.set_html(target, "<b>x</b>");
        host.set_text(target, "plain");
        assert_eq!(host.text(target), Some("plain"));
        assert_eq!(host.html(target), Some(""));
    }

    #[test]
    fn test_timers() {
        let mut host = MemoryHost::new();
        let a = host.set_timeout(Duration::from_millis(10));
        let b = host.set_timeout(Duration::from_millis(10));
        assert_ne!(a, b);
        host.clear_timeout(a);
        assert_eq!(host.pending_timers(), vec![b]);
    }
}

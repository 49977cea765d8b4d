//! Headless view of an HTML page shell
//!
//! Parses the shell with `scraper` and mirrors the parts the app cares
//! about into a [`MemoryHost`]: element ids, `.page` sections, and
//! `[data-toggle]` collapsible headers.

use anyhow::{anyhow, Result};
use folio_core::MemoryHost;
use scraper::{Html, Selector};

const PAGE_ID_PREFIX: &str = "page-";

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("invalid selector {css:?}: {e:?}"))
}

/// Build a host holding every element the shell declares
pub fn host_from_html(html: &str, year: i32) -> Result<MemoryHost> {
    let document = Html::parse_document(html);
    let mut host = MemoryHost::new();
    host.set_year(year);

    for el in document.select(&selector("[id]")?) {
        if let Some(id) = el.value().id() {
            host.add_element(id);
        }
    }

    for page in document.select(&selector(".page[id]")?) {
        let key = page
            .value()
            .id()
            .and_then(|id| id.strip_prefix(PAGE_ID_PREFIX));
        if let Some(key) = key {
            host.add_page(key);
        }
    }

    for toggle in document.select(&selector("[data-toggle]")?) {
        if let Some(body) = toggle.value().attr("data-toggle") {
            host.add_toggle(body);
        }
    }

    Ok(host)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{Host, Target};

    const SHELL: &str = r#"<!doctype html>
<html>
  <body>
    <nav>
      <button class="navBtn" data-page="home">Home</button>
      <button class="navBtn" data-page="about">About</button>
    </nav>
    <section class="page" id="page-home"><h1 id="profileName"></h1></section>
    <section class="page" id="page-about"></section>
    <section class="hero" id="hero"></section>
    <div class="sectionHeader" data-toggle="excelBody">Excel <span class="chev">▾</span></div>
    <div id="excelBody"></div>
  </body>
</html>"#;

    #[test]
    fn test_pages_and_toggles_discovered() {
        let host = host_from_html(SHELL, 2026).unwrap();
        assert_eq!(host.page_keys(), ["home", "about"]);
        assert_eq!(host.toggle_targets(), ["excelBody"]);
        assert!(host.exists(Target::Element("profileName")));
        assert!(host.exists(Target::Chevron("excelBody")));
        assert_eq!(host.current_year(), 2026);
    }

    #[test]
    fn test_non_page_ids_are_plain_elements() {
        let host = host_from_html(SHELL, 2026).unwrap();
        assert!(host.exists(Target::Element("hero")));
        assert!(!host.page_keys().contains(&"hero".to_string()));
    }
}

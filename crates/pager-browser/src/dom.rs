//! Pager element lookup and rendering.
//!
//! The hosting page renders two pagers: a single "next" link that works
//! without script, and a full pagination control that starts hidden. Once
//! storage is confirmed the single pager is hidden and the full control is
//! revealed and kept in sync with the `NavigationState`.
//!
//! # DOM Requirements
//!
//! All roles are looked up with `querySelectorAll`, so a page may render the
//! control more than once (above and below the listing). Missing roles are
//! skipped.

use pager_core::{Direction, NavigationState};
use wasm_bindgen::JsCast;

/// Class toggled on a control's item element while it is disabled.
pub const DISABLED_CLASS: &str = "disabled";

/// CSS selectors for each pager role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerSelectors {
    /// Script-free fallback pager, hidden on mount.
    pub single_pager: String,
    /// Full pagination control, shown on mount.
    pub pagination: String,
    /// Item wrapping the next link; receives the disabled class.
    pub next_item: String,
    /// Item wrapping the previous link; receives the disabled class.
    pub previous_item: String,
    pub next_link: String,
    pub previous_link: String,
    /// Receives the "N to M" result range.
    pub label: String,
}

impl Default for PagerSelectors {
    fn default() -> Self {
        Self {
            single_pager: ".paging-container .single-pager".into(),
            pagination: ".paging-container .pagination".into(),
            next_item: ".pagination .next".into(),
            previous_item: ".pagination .previous".into(),
            next_link: ".paging-next-link".into(),
            previous_link: ".paging-previous-link".into(),
            label: ".paging_text".into(),
        }
    }
}

/// Resolved pager elements.
pub struct PagerElements {
    single_pager: Vec<web_sys::Element>,
    pagination: Vec<web_sys::Element>,
    next_items: Vec<web_sys::Element>,
    previous_items: Vec<web_sys::Element>,
    next_links: Vec<web_sys::Element>,
    previous_links: Vec<web_sys::Element>,
    labels: Vec<web_sys::Element>,
}

impl PagerElements {
    /// Look up every role in `document`.
    pub fn query(document: &web_sys::Document, selectors: &PagerSelectors) -> Self {
        Self {
            single_pager: query_all(document, &selectors.single_pager),
            pagination: query_all(document, &selectors.pagination),
            next_items: query_all(document, &selectors.next_item),
            previous_items: query_all(document, &selectors.previous_item),
            next_links: query_all(document, &selectors.next_link),
            previous_links: query_all(document, &selectors.previous_link),
            labels: query_all(document, &selectors.label),
        }
    }

    /// Link elements for one direction.
    pub fn links(&self, direction: Direction) -> &[web_sys::Element] {
        match direction {
            Direction::Next => &self.next_links,
            Direction::Previous => &self.previous_links,
        }
    }

    /// Hide the single pager and show the full control.
    pub fn reveal_pagination(&self) {
        for el in &self.single_pager {
            set_display(el, Some("none"));
        }
        for el in &self.pagination {
            let _ = el.remove_attribute("hidden");
            set_display(el, None);
        }
    }

    /// Apply hrefs, disabled classes and the range label.
    pub fn render(&self, state: &NavigationState) {
        render_control(&self.next_items, &self.next_links, state.url(Direction::Next));
        render_control(
            &self.previous_items,
            &self.previous_links,
            state.url(Direction::Previous),
        );

        if let Some(label) = state.label {
            let text = label.to_string();
            for el in &self.labels {
                el.set_text_content(Some(&text));
            }
        }
    }
}

fn render_control(items: &[web_sys::Element], links: &[web_sys::Element], href: Option<&str>) {
    for item in items {
        let class_list = item.class_list();
        if href.is_some() {
            let _ = class_list.remove_1(DISABLED_CLASS);
        } else {
            let _ = class_list.add_1(DISABLED_CLASS);
        }
    }

    if let Some(href) = href {
        for link in links {
            let _ = link.set_attribute("href", href);
        }
    }
}

fn query_all(document: &web_sys::Document, selector: &str) -> Vec<web_sys::Element> {
    let Ok(node_list) = document.query_selector_all(selector) else {
        tracing::warn!(selector, "invalid pager selector");
        return Vec::new();
    };

    (0..node_list.length())
        .filter_map(|i| node_list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

fn set_display(el: &web_sys::Element, value: Option<&str>) {
    let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() else {
        return;
    };
    let style = html.style();
    let _ = match value {
        Some(value) => style.set_property("display", value),
        None => style.remove_property("display").map(|_| ()),
    };
}

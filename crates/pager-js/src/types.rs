//! Types exposed to JavaScript via wasm-bindgen.

use pager_browser::{Direction, MountedPager, PagerSelectors};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// A mounted pager.
///
/// Listeners stay attached until `free()` is called, or forever after
/// `forget()`.
#[wasm_bindgen]
pub struct JsPager {
    inner: Option<MountedPager>,
}

#[wasm_bindgen]
impl JsPager {
    /// Pages advanced past page 1.
    #[wasm_bindgen(getter)]
    pub fn depth(&self) -> usize {
        self.inner.as_ref().map_or(0, MountedPager::depth)
    }

    #[wasm_bindgen(getter, js_name = nextUrl)]
    pub fn next_url(&self) -> Option<String> {
        self.url(Direction::Next)
    }

    #[wasm_bindgen(getter, js_name = previousUrl)]
    pub fn previous_url(&self) -> Option<String> {
        self.url(Direction::Previous)
    }

    /// The "N to M" range text, if the page has results.
    #[wasm_bindgen(getter)]
    pub fn label(&self) -> Option<String> {
        let state = self.inner.as_ref()?.state();
        state.label.map(|label| label.to_string())
    }

    /// Keep listeners attached after this handle is garbage collected.
    pub fn forget(&mut self) {
        if let Some(pager) = self.inner.take() {
            pager.forget();
        }
    }
}

impl JsPager {
    pub(crate) fn new(inner: MountedPager) -> Self {
        Self { inner: Some(inner) }
    }

    fn url(&self, direction: Direction) -> Option<String> {
        let state = self.inner.as_ref()?.state();
        state.url(direction).map(str::to_owned)
    }
}

/// Selector overrides accepted from JS. Missing fields keep the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JsSelectors {
    single_pager: Option<String>,
    pagination: Option<String>,
    next_item: Option<String>,
    previous_item: Option<String>,
    next_link: Option<String>,
    previous_link: Option<String>,
    label: Option<String>,
}

impl JsSelectors {
    pub fn into_selectors(self) -> PagerSelectors {
        let defaults = PagerSelectors::default();
        PagerSelectors {
            single_pager: self.single_pager.unwrap_or(defaults.single_pager),
            pagination: self.pagination.unwrap_or(defaults.pagination),
            next_item: self.next_item.unwrap_or(defaults.next_item),
            previous_item: self.previous_item.unwrap_or(defaults.previous_item),
            next_link: self.next_link.unwrap_or(defaults.next_link),
            previous_link: self.previous_link.unwrap_or(defaults.previous_link),
            label: self.label.unwrap_or(defaults.label),
        }
    }
}

//! WASM bindings for the cursor pager.
//!
//! The hosting page calls `mountPager(paging_config)` once the pager markup
//! is in the document:
//!
//! ```js
//! import init, { mountPager } from "./pager_js.js";
//! await init();
//! mountPager(paging_config)?.forget();
//! ```

use pager_browser::PagingConfig;
use serde::Deserialize;
use serde_wasm_bindgen::Deserializer;
use wasm_bindgen::prelude::*;

mod types;

pub use types::*;

/// Initialize panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    {
        use tracing::Level;
        use tracing::subscriber::set_global_default;
        use tracing_subscriber::Registry;
        use tracing_subscriber::layer::SubscriberExt;

        let console_level = if cfg!(debug_assertions) {
            Level::DEBUG
        } else {
            Level::INFO
        };

        let wasm_layer = tracing_wasm::WASMLayer::new(
            tracing_wasm::WASMLayerConfigBuilder::new()
                .set_max_level(console_level)
                .build(),
        );

        // The host page may have installed its own subscriber already.
        let _ = set_global_default(Registry::default().with(wasm_layer));
    }
}

/// Mount the cursor pager using the default selectors.
///
/// Returns `undefined` when the pager stays inert (no local storage, or the
/// history was corrupted and the page is being reset to page 1).
///
/// # Arguments
/// * `config` - The `paging_config` object: `uri`, `storage_key`, `cursor`,
///   `next_cursor`, `limit`, `results`, and optionally `current_cursor`
#[wasm_bindgen(js_name = mountPager)]
pub fn mount_pager(config: JsValue) -> Result<Option<JsPager>, JsError> {
    mount_pager_with(config, None)
}

/// Mount the cursor pager with selector overrides.
///
/// # Arguments
/// * `config` - The `paging_config` object
/// * `selectors` - Optional object with any of `singlePager`, `pagination`,
///   `nextItem`, `previousItem`, `nextLink`, `previousLink`, `label`
#[wasm_bindgen(js_name = mountPagerWith)]
pub fn mount_pager_with(
    config: JsValue,
    selectors: Option<JsValue>,
) -> Result<Option<JsPager>, JsError> {
    let config = PagingConfig::deserialize(Deserializer::from(config))
        .map_err(|e| JsError::new(&format!("Invalid paging config: {}", e)))?;

    let selectors = selectors
        .map(|v| JsSelectors::deserialize(Deserializer::from(v)))
        .transpose()
        .map_err(|e| JsError::new(&format!("Invalid pager selectors: {}", e)))?
        .unwrap_or_default()
        .into_selectors();

    let pager = pager_browser::mount_with(config, &selectors)
        .map_err(|e| JsError::new(&e.to_string()))?;

    Ok(pager.map(JsPager::new))
}

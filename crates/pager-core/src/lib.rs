//! pager-core: cursor-stack pagination logic without browser dependencies.
//!
//! Cursor-based listings only hand out "next" tokens, so stepping backwards
//! needs a remembered history of the cursors already followed. This crate
//! provides:
//! - `PagingConfig` - per-render configuration supplied by the hosting page
//! - `CursorStack` - the ordered history, persisted as a comma-joined string
//! - `CursorStore` trait for the persistence layer, plus `MemoryStore`
//! - `compute_navigation_state` / `apply_click` - the pure navigation rules
//! - `CursorNavigator<S>` - ties the above to a store with persist-before-navigate
//!
//! The DOM adapter lives in `pager-browser`.

pub mod config;
pub mod error;
pub mod navigation;
pub mod navigator;
pub mod picker;
pub mod stack;
pub mod store;
pub mod url;

pub use config::PagingConfig;
pub use error::{PagerError, StoreError};
pub use navigation::{Direction, NavigationState, RangeLabel, apply_click, compute_navigation_state};
pub use navigator::{ClickOutcome, CursorNavigator};
pub use picker::{AssetBrowser, AssetRequest, AssetType, PickerOutcome};
pub use smol_str::SmolStr;
pub use stack::{CursorStack, DELIMITER};
pub use store::{CursorStore, MemoryStore};
pub use url::{add_params, base_uri, query_param};

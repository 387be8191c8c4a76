//! Browser DOM layer for the cursor pager.
//!
//! This crate binds `pager-core`'s `CursorNavigator` to a rendered page. It
//! assumes a `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `storage`: `CursorStore` over `window.localStorage`
//! - `dom`: role selectors and rendering a `NavigationState` onto elements
//! - `mount`: initialization, corruption redirect, click listeners
//!
//! # Re-exports
//!
//! This crate re-exports `pager-core` for convenience, so consumers only
//! need to depend on `pager-browser`.

pub use pager_core;
pub use pager_core::*;

pub mod dom;
pub mod mount;
pub mod storage;

pub use dom::{PagerElements, PagerSelectors};
pub use mount::{MountedPager, mount, mount_with, with_location_query};
pub use storage::LocalCursorStore;

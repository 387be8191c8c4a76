//! `CursorNavigator`: the cursor stack bound to its persisted copy.
//!
//! # Lifecycle
//!
//! 1. `load` rebuilds the stack from the store (or reports corruption)
//! 2. `state` gives the links and label to render
//! 3. `on_click` mutates the stack and persists it before returning
//!    `ClickOutcome::Follow`, so the destination page loads the new stack
//!
//! The click handlers are the only code that writes to the store.

use crate::config::PagingConfig;
use crate::error::PagerError;
use crate::navigation::{Direction, NavigationState, apply_click, compute_navigation_state};
use crate::stack::CursorStack;
use crate::store::CursorStore;
use crate::url::base_uri;

/// What the UI should do with the click event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// State is persisted; let the browser follow `href`.
    Follow(String),
    /// Prevent default navigation and stop propagation.
    Suppressed,
}

pub struct CursorNavigator<S> {
    config: PagingConfig,
    store: S,
    stack: CursorStack,
}

impl<S: CursorStore> CursorNavigator<S> {
    /// Rebuild the navigator from persisted history.
    ///
    /// With cursor mode off the store is not read and the stack starts empty.
    /// Returns `HistoryCorrupted` if the page was reached with a cursor but no
    /// history is stored, or if the stored value is malformed. A missing
    /// `current_cursor` is taken from the `cursor` parameter of `uri`.
    pub fn load(config: PagingConfig, store: S) -> Result<Self, PagerError> {
        let uri = config.uri.clone();
        let config = config.with_request_query(&uri);

        if !config.cursor_mode {
            return Ok(Self {
                config,
                store,
                stack: CursorStack::new(),
            });
        }

        let stored = match store.get(&config.storage_key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key = %config.storage_key, "failed to read cursor history: {}", err);
                None
            }
        };

        let stack = match stored.as_deref() {
            None | Some("") if config.expects_history() => {
                return Err(corrupted(&config, "no history stored for a page past the first"));
            }
            None | Some("") => CursorStack::new(),
            Some(value) => CursorStack::parse(value)
                .map_err(|_| corrupted(&config, "stored history contains an empty cursor"))?,
        };

        if let Some(current) = &config.current_cursor {
            if stack.last() != Some(current) {
                // Browser back/forward skips the click handlers.
                tracing::warn!(
                    key = %config.storage_key,
                    depth = stack.len(),
                    "cursor history does not end with the current page's cursor"
                );
            }
        }

        tracing::debug!(key = %config.storage_key, depth = stack.len(), "loaded cursor history");

        Ok(Self {
            config,
            store,
            stack,
        })
    }

    pub fn config(&self) -> &PagingConfig {
        &self.config
    }

    pub fn stack(&self) -> &CursorStack {
        &self.stack
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Links, enabled flags and label for the current stack.
    pub fn state(&self) -> NavigationState {
        compute_navigation_state(&self.config, &self.stack)
    }

    /// Handle activation of a control.
    ///
    /// On `Follow` the new stack has already been written to the store. A
    /// disabled control, or a failed write, leaves both the stack and the
    /// store untouched and returns `Suppressed`.
    pub fn on_click(&mut self, direction: Direction) -> ClickOutcome {
        let Some(href) = self.state().url(direction).map(str::to_owned) else {
            tracing::debug!(%direction, "ignoring click on disabled control");
            return ClickOutcome::Suppressed;
        };

        let next = match apply_click(direction, &self.config, &self.stack) {
            Ok(next) => next,
            Err(err) => {
                tracing::debug!(%direction, "ignoring click: {}", err);
                return ClickOutcome::Suppressed;
            }
        };

        if let Err(err) = self.store.set(&self.config.storage_key, &next.to_persisted()) {
            tracing::error!(key = %self.config.storage_key, %direction, "failed to persist cursor history: {}", err);
            return ClickOutcome::Suppressed;
        }

        tracing::info!(%direction, depth = next.len(), "cursor history updated");
        self.stack = next;
        ClickOutcome::Follow(href)
    }
}

fn corrupted(config: &PagingConfig, reason: &'static str) -> PagerError {
    tracing::warn!(key = %config.storage_key, reason, "cursor history corrupted, resetting to page 1");
    PagerError::HistoryCorrupted {
        key: config.storage_key.clone(),
        reason,
        redirect_to: base_uri(&config.uri).to_owned(),
    }
}

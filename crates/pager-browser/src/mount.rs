//! Mounting the pager onto a rendered page.
//!
//! # How it works
//!
//! 1. Open local storage; without it nothing is set up and the page keeps
//!    its script-free single pager. A config without `current_cursor` takes
//!    it from the `cursor` parameter of `location.search`
//! 2. Swap the single pager for the full pagination control
//! 3. Load the cursor history; on corruption replace the location with the
//!    listing's page 1 and stop
//! 4. Render links, disabled classes and the range label
//! 5. Attach click listeners that persist the history before the browser
//!    follows the link, or cancel the event for disabled controls

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use pager_core::{
    ClickOutcome, CursorNavigator, Direction, NavigationState, PagerError, PagingConfig,
};

use crate::dom::{PagerElements, PagerSelectors};
use crate::storage::{LocalCursorStore, js_message};

type SharedNavigator = Rc<RefCell<CursorNavigator<LocalCursorStore>>>;

/// A pager attached to the page.
///
/// Dropping it detaches the click listeners. Call `forget` for pagers that
/// live as long as the page.
pub struct MountedPager {
    navigator: SharedNavigator,
    listeners: Vec<EventListener>,
}

impl MountedPager {
    /// Current navigation state.
    pub fn state(&self) -> NavigationState {
        self.navigator.borrow().state()
    }

    /// Number of pages advanced past page 1.
    pub fn depth(&self) -> usize {
        self.navigator.borrow().stack().len()
    }

    /// Run a click through the same path the listeners use.
    pub fn click(&self, direction: Direction) -> ClickOutcome {
        self.navigator.borrow_mut().on_click(direction)
    }

    /// Keep the listeners attached for the rest of the page's life.
    pub fn forget(self) {
        for listener in self.listeners {
            listener.forget();
        }
    }
}

/// Mount with the default selectors.
pub fn mount(config: PagingConfig) -> Result<Option<MountedPager>, PagerError> {
    mount_with(config, &PagerSelectors::default())
}

/// Mount the pager described by `config` onto the elements matched by
/// `selectors`.
///
/// Returns `Ok(None)` when the pager stays inert: no local storage, or the
/// history was corrupted and the page is being replaced.
pub fn mount_with(
    config: PagingConfig,
    selectors: &PagerSelectors,
) -> Result<Option<MountedPager>, PagerError> {
    let store = match LocalCursorStore::open() {
        Ok(store) => store,
        Err(PagerError::StorageUnavailable) => {
            tracing::debug!("no local storage, leaving the single pager in place");
            return Ok(None);
        }
        Err(err) => return Err(err),
    };

    let config = with_location_query(config);

    let document = gloo_utils::document();
    let elements = PagerElements::query(&document, selectors);
    elements.reveal_pagination();

    let navigator = match CursorNavigator::load(config, store) {
        Ok(navigator) => navigator,
        Err(err) => {
            if let Some(target) = err.redirect_target() {
                redirect(target);
                return Ok(None);
            }
            return Err(err);
        }
    };

    elements.render(&navigator.state());

    let navigator = Rc::new(RefCell::new(navigator));
    let mut listeners = Vec::new();
    for direction in [Direction::Next, Direction::Previous] {
        for link in elements.links(direction) {
            listeners.push(click_listener(link, direction, navigator.clone()));
        }
    }

    tracing::debug!(listeners = listeners.len(), "pager mounted");

    Ok(Some(MountedPager {
        navigator,
        listeners,
    }))
}

/// Fill a missing `current_cursor` from the page's own query string.
///
/// The server may render `paging_config` without the cursor it was asked
/// for; the request URL still carries it.
pub fn with_location_query(config: PagingConfig) -> PagingConfig {
    match gloo_utils::window().location().search() {
        Ok(search) => config.with_request_query(&search),
        Err(e) => {
            tracing::warn!("could not read location.search: {}", js_message(&e));
            config
        }
    }
}

fn click_listener(
    link: &web_sys::Element,
    direction: Direction,
    navigator: SharedNavigator,
) -> EventListener {
    EventListener::new_with_options(
        link,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let outcome = navigator.borrow_mut().on_click(direction);
            if outcome == ClickOutcome::Suppressed {
                event.prevent_default();
                event.stop_propagation();
            }
        },
    )
}

fn redirect(target: &str) {
    if let Err(e) = gloo_utils::window().location().replace(target) {
        tracing::error!(
            redirect_to = target,
            "failed to reset pager to page 1: {}",
            js_message(&e)
        );
    }
}

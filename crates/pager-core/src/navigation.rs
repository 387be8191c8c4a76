//! Pure navigation rules: what the controls point at, and how clicks change
//! the stack.
//!
//! Nothing in here touches storage. `CursorNavigator` wires these to a
//! `CursorStore`.

use std::fmt;

use serde::Serialize;

use crate::config::PagingConfig;
use crate::error::PagerError;
use crate::stack::CursorStack;
use crate::url::add_params;

/// Which pagination control was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Next,
    Previous,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Next => f.write_str("next"),
            Direction::Previous => f.write_str("previous"),
        }
    }
}

/// The 1-based, inclusive range of results shown on the current page.
///
/// Assumes every earlier page was full, so it is exact only when that holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeLabel {
    pub start: u64,
    pub end: u64,
}

impl RangeLabel {
    /// `None` when the page has no results.
    pub fn compute(depth: usize, limit: u32, result_count: u32) -> Option<Self> {
        if result_count == 0 {
            return None;
        }
        let start_index = (depth as u64).saturating_mul(u64::from(limit));
        let end_index = start_index.saturating_add(u64::from(result_count));
        Some(Self {
            start: start_index.saturating_add(1),
            end: end_index,
        })
    }
}

impl fmt::Display for RangeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Everything the rendering layer needs for one page.
///
/// A control is enabled exactly when its URL is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    pub next_url: Option<String>,
    pub prev_url: Option<String>,
    pub label: Option<RangeLabel>,
}

impl NavigationState {
    pub fn next_enabled(&self) -> bool {
        self.next_url.is_some()
    }

    pub fn prev_enabled(&self) -> bool {
        self.prev_url.is_some()
    }

    pub fn url(&self, direction: Direction) -> Option<&str> {
        match direction {
            Direction::Next => self.next_url.as_deref(),
            Direction::Previous => self.prev_url.as_deref(),
        }
    }
}

/// Compute link targets, enabled flags and the range label.
pub fn compute_navigation_state(config: &PagingConfig, stack: &CursorStack) -> NavigationState {
    let limit_param = config.limit.to_string();
    let limit = limit_param.as_str();

    let next_url = config
        .next_cursor
        .as_ref()
        .map(|cursor| add_params(&config.uri, &[("cursor", cursor.as_str()), ("limit", limit)]));

    // Page 1 is the cursor-less request.
    let prev_url = match (stack.len(), stack.previous()) {
        (0, _) => None,
        (_, Some(cursor)) => Some(add_params(
            &config.uri,
            &[("cursor", cursor.as_str()), ("limit", limit)],
        )),
        (_, None) => Some(add_params(&config.uri, &[("limit", limit)])),
    };

    NavigationState {
        next_url,
        prev_url,
        label: RangeLabel::compute(stack.len(), config.limit, config.result_count),
    }
}

/// Apply a click to `stack`, returning the stack the destination page will see.
///
/// Next pushes the configured next cursor; previous pops. Clicking a control
/// that would be disabled returns `DisabledActionInvoked` and leaves nothing
/// to persist.
pub fn apply_click(
    direction: Direction,
    config: &PagingConfig,
    stack: &CursorStack,
) -> Result<CursorStack, PagerError> {
    let mut next = stack.clone();
    match direction {
        Direction::Next => {
            let cursor = config
                .next_cursor
                .as_ref()
                .ok_or(PagerError::DisabledActionInvoked(direction))?;
            next.push(cursor.clone());
        }
        Direction::Previous => {
            next.pop()
                .ok_or(PagerError::DisabledActionInvoked(direction))?;
        }
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PagingConfig {
        PagingConfig::new("/items", "items", 20)
    }

    fn stack(tokens: &[&str]) -> CursorStack {
        tokens.iter().copied().collect()
    }

    #[test]
    fn test_next_disabled_without_cursor() {
        let state = compute_navigation_state(&config(), &stack(&[]));
        assert!(!state.next_enabled());
        assert_eq!(state.next_url, None);
    }

    #[test]
    fn test_next_link_carries_cursor_and_limit() {
        let state = compute_navigation_state(&config().with_next_cursor("abc"), &stack(&[]));
        assert_eq!(state.next_url.as_deref(), Some("/items?cursor=abc&limit=20"));
    }

    #[test]
    fn test_previous_link_selection() {
        let cfg = config();

        let empty = compute_navigation_state(&cfg, &stack(&[]));
        assert!(!empty.prev_enabled());

        let one = compute_navigation_state(&cfg, &stack(&["x"]));
        assert_eq!(one.prev_url.as_deref(), Some("/items?limit=20"));

        let two = compute_navigation_state(&cfg, &stack(&["x", "y"]));
        assert_eq!(two.prev_url.as_deref(), Some("/items?cursor=x&limit=20"));
    }

    #[test]
    fn test_links_merge_into_existing_query() {
        let cfg = PagingConfig::new("/items?sort=name", "items", 20).with_next_cursor("abc");
        let state = compute_navigation_state(&cfg, &stack(&["x"]));
        assert_eq!(
            state.next_url.as_deref(),
            Some("/items?sort=name&cursor=abc&limit=20")
        );
        assert_eq!(state.prev_url.as_deref(), Some("/items?sort=name&limit=20"));
    }

    #[test]
    fn test_range_label() {
        let cfg = config().with_results(15);
        let state = compute_navigation_state(&cfg, &stack(&["a", "b"]));
        assert_eq!(state.label, Some(RangeLabel { start: 41, end: 55 }));
        assert_eq!(state.label.unwrap().to_string(), "41 to 55");
    }

    #[test]
    fn test_no_label_without_results() {
        let state = compute_navigation_state(&config(), &stack(&["a"]));
        assert_eq!(state.label, None);
    }

    #[test]
    fn test_label_saturates_on_huge_depth() {
        let label = RangeLabel::compute(usize::MAX, u32::MAX, 10).unwrap();
        assert_eq!((label.start, label.end), (u64::MAX, u64::MAX));
    }

    #[test]
    fn test_first_page_label() {
        let label = RangeLabel::compute(0, 10, 10).unwrap();
        assert_eq!((label.start, label.end), (1, 10));
    }

    #[test]
    fn test_next_then_previous_is_identity() {
        let cfg = config().with_next_cursor("c");
        let start = stack(&["a", "b"]);

        let forward = apply_click(Direction::Next, &cfg, &start).unwrap();
        assert_eq!(forward, stack(&["a", "b", "c"]));

        let back = apply_click(Direction::Previous, &cfg, &forward).unwrap();
        assert_eq!(back, start);
    }

    #[test]
    fn test_disabled_clicks_are_rejected() {
        let cfg = config();
        assert_eq!(
            apply_click(Direction::Next, &cfg, &stack(&["a"])),
            Err(PagerError::DisabledActionInvoked(Direction::Next))
        );
        assert_eq!(
            apply_click(Direction::Previous, &cfg, &stack(&[])),
            Err(PagerError::DisabledActionInvoked(Direction::Previous))
        );
    }

    #[test]
    fn test_navigation_state_snapshot() {
        let cfg = PagingConfig::new("/admin/widgets", "widgets", 5)
            .with_next_cursor("Cg0SC3dpZGdldC0xMA")
            .with_current_cursor("Cg0SC3dpZGdldC0wNQ")
            .with_results(5);
        let state = compute_navigation_state(&cfg, &stack(&["Cg0SC3dpZGdldC0wNQ"]));
        insta::assert_yaml_snapshot!(state);
    }
}

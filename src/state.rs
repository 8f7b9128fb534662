//! Filter State
//!
//! Explicit state container for the recommender: the current filter
//! selection, the phase of the one in-flight request, and the pure
//! transition functions the components drive it with.

use crate::models::{RecommendRequest, RecommendationItem};

/// Fixed message shown for every transport, server, or decode failure.
/// The underlying detail goes to the console, never to the page.
pub const FETCH_ERROR_MESSAGE: &str =
    "Failed to fetch recommendations. Please check your connection and try again.";

/// Shown for a successful response with zero matches.
pub const NO_RESULTS_MESSAGE: &str = "No results found. Try different filters!";

/// Phase of the recommendation request. Exactly one variant holds at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(Vec<RecommendationItem>),
    Error(&'static str),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }
}

/// The user's current filter selection.
///
/// The cuisine and food-type vectors carry set semantics: no duplicates,
/// insertion order preserved but not meaningful.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub selected_cuisines: Vec<String>,
    pub selected_food_types: Vec<String>,
    pub price_range: (u32, u32),
}

/// Toggle `value` in a selection set: remove it if present, insert otherwise.
pub fn toggle(set: &mut Vec<String>, value: &str) {
    if let Some(pos) = set.iter().position(|v| v == value) {
        set.remove(pos);
    } else {
        set.push(value.to_string());
    }
}

/// Move the low slider handle. Handles may not cross; the moved handle yields.
pub fn move_low(range: (u32, u32), low: u32) -> (u32, u32) {
    (low.min(range.1), range.1)
}

/// Move the high slider handle. Handles may not cross; the moved handle yields.
pub fn move_high(range: (u32, u32), high: u32) -> (u32, u32) {
    (range.0, high.max(range.0))
}

/// Build the request body from a snapshot of the filter selection.
pub fn build_request(filter: &FilterState) -> RecommendRequest {
    RecommendRequest {
        cuisines: filter.selected_cuisines.clone(),
        food_types: filter.selected_food_types.clone(),
        min_price: filter.price_range.0,
        max_price: filter.price_range.1,
    }
}

/// Map a resolved request back into a `RequestState`.
///
/// Each submit is tagged with a monotonically increasing sequence number at
/// issue time. A resolution whose tag is no longer the latest issued is
/// discarded (`None`): only the most recent request's result is ever shown,
/// regardless of the order in which overlapping responses arrive.
pub fn apply_outcome(
    latest_seq: u64,
    response_seq: u64,
    outcome: Result<Vec<RecommendationItem>, String>,
) -> Option<RequestState> {
    if response_seq != latest_seq {
        return None;
    }
    Some(match outcome {
        Ok(items) => RequestState::Success(items),
        Err(_) => RequestState::Error(FETCH_ERROR_MESSAGE),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecommendationItem;

    fn make_item(name: &str) -> RecommendationItem {
        RecommendationItem {
            item_name: name.to_string(),
            restaurant_name: "Spice Hub".to_string(),
            price: Some(200.0),
            food_type: "Veg".to_string(),
            cuisine: "North Indian".to_string(),
        }
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let mut set = vec!["Chinese".to_string()];

        toggle(&mut set, "Italian");
        assert_eq!(set, vec!["Chinese".to_string(), "Italian".to_string()]);

        toggle(&mut set, "Italian");
        assert_eq!(set, vec!["Chinese".to_string()]);
    }

    #[test]
    fn test_toggle_removes_existing_value() {
        let mut set = vec!["Veg".to_string(), "Non-Veg".to_string()];
        toggle(&mut set, "Veg");
        assert_eq!(set, vec!["Non-Veg".to_string()]);
    }

    #[test]
    fn test_slider_handles_cannot_cross() {
        // Low handle dragged past the high handle stops at it
        assert_eq!(move_low((100, 1000), 1200), (1000, 1000));
        assert_eq!(move_low((100, 1000), 500), (500, 1000));

        // Same for the high handle dragged below the low one
        assert_eq!(move_high((100, 1000), 50), (100, 100));
        assert_eq!(move_high((100, 1000), 2000), (100, 2000));
    }

    #[test]
    fn test_build_request_snapshots_current_selection() {
        let mut filter = FilterState {
            selected_cuisines: Vec::new(),
            selected_food_types: Vec::new(),
            price_range: (100, 1000),
        };
        toggle(&mut filter.selected_cuisines, "North Indian");
        toggle(&mut filter.selected_cuisines, "Chinese");
        toggle(&mut filter.selected_food_types, "Veg");
        filter.price_range = (250, 800);

        let request = build_request(&filter);
        assert_eq!(
            request.cuisines,
            vec!["North Indian".to_string(), "Chinese".to_string()]
        );
        assert_eq!(request.food_types, vec!["Veg".to_string()]);
        assert_eq!(request.min_price, 250);
        assert_eq!(request.max_price, 800);
    }

    #[test]
    fn test_empty_success_is_not_an_error() {
        let state = apply_outcome(1, 1, Ok(Vec::new())).unwrap();
        assert_eq!(state, RequestState::Success(Vec::new()));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_failure_maps_to_fixed_message() {
        let state = apply_outcome(1, 1, Err("backend returned status 500".to_string())).unwrap();
        assert_eq!(state, RequestState::Error(FETCH_ERROR_MESSAGE));
        // The submit control keys off is_loading, so it re-enables here
        assert!(!state.is_loading());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        // Request #1 issued, then request #2 issued; #2 resolves first.
        let second = apply_outcome(2, 2, Ok(vec![make_item("Paneer Tikka")]));
        assert!(matches!(second, Some(RequestState::Success(_))));

        // #1 resolves late and must not overwrite #2's result.
        let first = apply_outcome(2, 1, Ok(vec![make_item("Veg Manchurian")]));
        assert_eq!(first, None);

        // A late failure from a superseded request is equally ignored.
        let stale_err = apply_outcome(2, 1, Err("timeout".to_string()));
        assert_eq!(stale_err, None);
    }
}

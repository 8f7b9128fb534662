//! Results Panel Component
//!
//! Renders whatever the request state calls for: nothing while idle or
//! loading, the fixed error message, the "no results" message, or one row
//! per recommendation in response order.

use leptos::prelude::*;

use crate::state::{RequestState, NO_RESULTS_MESSAGE};

#[component]
pub fn ResultsPanel(request_state: ReadSignal<RequestState>) -> impl IntoView {
    view! {
        <div class="results-panel">
            {move || match request_state.get() {
                RequestState::Idle | RequestState::Loading => ().into_any(),
                RequestState::Error(message) => {
                    view! { <p class="error-message">{message}</p> }.into_any()
                }
                RequestState::Success(items) if items.is_empty() => {
                    view! { <p class="no-results">{NO_RESULTS_MESSAGE}</p> }.into_any()
                }
                RequestState::Success(items) => {
                    view! {
                        <ul class="results-list">
                            {items
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <li>
                                            <span class="item-name">{item.item_name.clone()}</span>
                                            <span class="restaurant-name">
                                                "at " {item.restaurant_name.clone()}
                                            </span>
                                            {item
                                                .price_label()
                                                .map(|price| {
                                                    view! { <span class="price-tag">{price}</span> }
                                                })}
                                            <span class="tags">
                                                {format!("{} | {}", item.food_type, item.cuisine)}
                                            </span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

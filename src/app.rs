//! Kya Khaega Frontend App
//!
//! Root component: login screen first, then the filter-and-recommend view.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{FilterPanel, LoginPage, ResultsPanel};
use crate::config::AppConfig;
use crate::state::{self, FilterState, RequestState};

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppConfig::from_document());

    let (entered, set_entered) = signal(false);

    view! {
        <Show
            when=move || entered.get()
            fallback=move || view! { <LoginPage set_entered=set_entered/> }
        >
            <Recommender/>
        </Show>
    }
}

/// The filter-and-recommend controller: owns the filter selection and the
/// request state, builds the request on submit, and maps the resolution
/// back into renderable state.
#[component]
fn Recommender() -> impl IntoView {
    let config = expect_context::<AppConfig>();

    let (selected_cuisines, set_selected_cuisines) = signal(Vec::<String>::new());
    let (selected_food_types, set_selected_food_types) = signal(Vec::<String>::new());
    let (price_range, set_price_range) = signal(config.initial_range);
    let (request_state, set_request_state) = signal(RequestState::Idle);
    // Sequence number of the most recently issued request; resolutions
    // tagged with an older number are discarded.
    let (latest_seq, set_latest_seq) = signal(0u64);

    let endpoint = config.recommend_endpoint.clone();
    let on_suggest = move |_| {
        let seq = latest_seq.get_untracked() + 1;
        set_latest_seq.set(seq);
        set_request_state.set(RequestState::Loading);

        let request = state::build_request(&FilterState {
            selected_cuisines: selected_cuisines.get_untracked(),
            selected_food_types: selected_food_types.get_untracked(),
            price_range: price_range.get_untracked(),
        });
        let endpoint = endpoint.clone();

        spawn_local(async move {
            let outcome = api::fetch_recommendations(&endpoint, &request).await;
            if let Err(detail) = &outcome {
                web_sys::console::error_1(
                    &format!("[API] recommend request #{seq} failed: {detail}").into(),
                );
            }
            match state::apply_outcome(latest_seq.get_untracked(), seq, outcome) {
                Some(next) => set_request_state.set(next),
                None => web_sys::console::log_1(
                    &format!("[API] discarding stale response for request #{seq}").into(),
                ),
            }
        });
    };

    view! {
        <div class="container">
            <header>
                <h1>"Kya Khaega?"</h1>
                <p>"Let us help you decide what to eat in Pune!"</p>
            </header>

            <FilterPanel
                selected_cuisines=selected_cuisines
                set_selected_cuisines=set_selected_cuisines
                selected_food_types=selected_food_types
                set_selected_food_types=set_selected_food_types
                price_range=price_range
                set_price_range=set_price_range
            />

            <button
                class="suggest-button"
                on:click=on_suggest
                prop:disabled=move || request_state.get().is_loading()
            >
                {move || {
                    if request_state.get().is_loading() { "Thinking..." } else { "Find Me Food!" }
                }}
            </button>

            <ResultsPanel request_state=request_state/>
        </div>
    }
}

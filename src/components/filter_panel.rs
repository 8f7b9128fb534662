//! Filter Panel Component
//!
//! Cuisine and food-type checkbox fieldsets plus the price range slider.

use leptos::prelude::*;

use crate::components::PriceRangeSlider;
use crate::state;

/// Cuisine checkbox options
pub const CUISINE_OPTIONS: &[&str] = &[
    "Indian (General)",
    "North Indian",
    "South Indian",
    "Chinese",
    "Italian",
    "Continental",
    "Maharashtrian",
    "Mughlai",
    "Beverages",
    "Desserts",
    "Other",
];

/// Food type checkbox options
pub const FOOD_TYPE_OPTIONS: &[&str] = &["Veg", "Non-Veg"];

#[component]
pub fn FilterPanel(
    selected_cuisines: ReadSignal<Vec<String>>,
    set_selected_cuisines: WriteSignal<Vec<String>>,
    selected_food_types: ReadSignal<Vec<String>>,
    set_selected_food_types: WriteSignal<Vec<String>>,
    price_range: ReadSignal<(u32, u32)>,
    set_price_range: WriteSignal<(u32, u32)>,
) -> impl IntoView {
    view! {
        <div class="selection-panel">
            <fieldset>
                <legend>"Select Cuisine(s)"</legend>
                <CheckboxGroup
                    options=CUISINE_OPTIONS
                    selected=selected_cuisines
                    set_selected=set_selected_cuisines
                />
            </fieldset>

            <fieldset>
                <legend>"Select Food Type(s)"</legend>
                <CheckboxGroup
                    options=FOOD_TYPE_OPTIONS
                    selected=selected_food_types
                    set_selected=set_selected_food_types
                />
            </fieldset>

            <fieldset>
                <legend>"Price Range"</legend>
                <PriceRangeSlider price_range=price_range set_price_range=set_price_range/>
            </fieldset>
        </div>
    }
}

/// One set of toggleable checkboxes backed by a selection signal.
#[component]
fn CheckboxGroup(
    options: &'static [&'static str],
    selected: ReadSignal<Vec<String>>,
    set_selected: WriteSignal<Vec<String>>,
) -> impl IntoView {
    view! {
        {options
            .iter()
            .map(|option| {
                let value = option.to_string();
                let checked = {
                    let value = value.clone();
                    move || selected.get().iter().any(|v| *v == value)
                };
                let on_change =
                    move |_| set_selected.update(|set| state::toggle(set, &value));

                view! {
                    <label>
                        <input type="checkbox" prop:checked=checked on:change=on_change/>
                        {*option}
                    </label>
                }
            })
            .collect_view()}
    }
}

//! Price Range Slider Component
//!
//! Dual-handle range control. The handles cannot cross, so the state layer
//! always sees `low <= high` and does no validation of its own.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::state;

#[component]
pub fn PriceRangeSlider(
    price_range: ReadSignal<(u32, u32)>,
    set_price_range: WriteSignal<(u32, u32)>,
) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let min = config.price_min;
    let max = config.price_max;
    let step = config.price_step;

    let on_low = move |ev| {
        let low = event_target_value(&ev).parse().unwrap_or(min);
        set_price_range.update(|range| *range = state::move_low(*range, low));
    };
    let on_high = move |ev| {
        let high = event_target_value(&ev).parse().unwrap_or(max);
        set_price_range.update(|range| *range = state::move_high(*range, high));
    };

    view! {
        <div class="price-slider-container">
            <div class="price-display">
                {move || {
                    let (low, high) = price_range.get();
                    format!("₹{low} - ₹{high}")
                }}
            </div>
            <input
                type="range"
                class="price-handle low"
                min=min
                max=max
                step=step
                prop:value=move || price_range.get().0.to_string()
                on:input=on_low
            />
            <input
                type="range"
                class="price-handle high"
                min=min
                max=max
                step=step
                prop:value=move || price_range.get().1.to_string()
                on:input=on_high
            />
        </div>
    }
}

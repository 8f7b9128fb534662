//! Login Page Component
//!
//! Static login screen shown before the recommender. There is no account
//! system: submitting performs no credential handling and only dismisses
//! this screen.

use leptos::prelude::*;

/// Decorative floating food icons
const FLOATING_ICONS: &[(&str, &str)] = &[
    ("🍕", "floating-icon top-left"),
    ("🍔", "floating-icon top-right"),
    ("🍜", "floating-icon bottom-left"),
    ("🧋", "floating-icon bottom-right"),
];

#[component]
pub fn LoginPage(set_entered: WriteSignal<bool>) -> impl IntoView {
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_entered.set(true);
    };

    view! {
        <div class="login-screen">
            {FLOATING_ICONS
                .iter()
                .map(|(icon, class)| view! { <span class=*class>{*icon}</span> })
                .collect_view()}

            <div class="login-card">
                <h1>"🍽️ Kya Khaega"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input type="email" placeholder="Email"/>
                    <input type="password" placeholder="Password"/>
                    <button type="submit">"Login"</button>
                </form>
                <p class="signup-hint">
                    "Don't have an account? " <a href="#">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}

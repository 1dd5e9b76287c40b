//! Navbar Component
//!
//! Top navigation with route links and the theme toggle.

use leptos::prelude::*;

use crate::app::Route;
use crate::context::{Theme, ThemeContext};

#[component]
pub fn Navbar(route: ReadSignal<Route>) -> impl IntoView {
    let theme_ctx = use_context::<ThemeContext>().expect("ThemeContext should be provided");
    let theme = theme_ctx.theme;

    let link_class = move |target: Route| {
        if route.get() == target {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    view! {
        <nav class="navbar">
            <a href="#/" class="brand">"TaskDeck"</a>
            <div class="nav-links">
                <a href="#/" class=move || link_class(Route::Tasks)>"Tasks"</a>
                <a href="#/posts" class=move || link_class(Route::Posts)>"Posts"</a>
                <button class="theme-toggle" on:click=move |_| theme_ctx.toggle()>
                    {move || match theme.get() {
                        Theme::Light => "🌙 Dark Mode",
                        Theme::Dark => "☀️ Light Mode",
                    }}
                </button>
            </div>
        </nav>
    }
}

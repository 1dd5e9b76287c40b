//! TaskDeck Frontend App
//!
//! Root component: provides theme and task store, switches screens on the
//! location hash, and renders the layout shell.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Footer, Navbar, PostsPage, TaskPage};
use crate::context::{Theme, ThemeContext};
use crate::storage;
use crate::store::AppState;

/// Screens reachable from the navbar, parsed from the location hash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Tasks,
    Posts,
    NotFound,
}

impl Route {
    pub fn from_hash(hash: &str) -> Self {
        match hash.trim_start_matches('#') {
            "" | "/" => Route::Tasks,
            "/posts" => Route::Posts,
            _ => Route::NotFound,
        }
    }
}

fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    // Theme context (default light, session-lived)
    let (theme, set_theme) = signal(Theme::Light);
    provide_context(ThemeContext::new((theme, set_theme)));

    // Task store, seeded from localStorage once at startup
    provide_context(Store::new(AppState {
        tasks: storage::load_tasks(),
    }));

    // Hash routing; the listener lives for the whole session
    let (route, set_route) = signal(Route::from_hash(&current_hash()));
    let _ = window_event_listener(ev::hashchange, move |_| {
        set_route.set(Route::from_hash(&current_hash()));
    });

    view! {
        <div class="app-shell" class:dark=move || theme.get() == Theme::Dark>
            <Navbar route=route />
            <main class="page-content">
                {move || match route.get() {
                    Route::Tasks => view! { <TaskPage /> }.into_any(),
                    Route::Posts => view! { <PostsPage /> }.into_any(),
                    Route::NotFound => view! { <h1 class="not-found">"404 - Not Found"</h1> }.into_any(),
                }}
            </main>
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::from_hash(""), Route::Tasks);
        assert_eq!(Route::from_hash("#"), Route::Tasks);
        assert_eq!(Route::from_hash("#/"), Route::Tasks);
        assert_eq!(Route::from_hash("#/posts"), Route::Posts);
        assert_eq!(Route::from_hash("#/missing"), Route::NotFound);
    }
}

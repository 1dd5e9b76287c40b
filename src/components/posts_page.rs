//! Posts Page
//!
//! Paginated, searchable viewer over the remote posts resource. UI state
//! (page, committed query) drives exactly one fetch per change through a
//! reactive effect. Overlapping fetches are not cancelled; the last
//! response to resolve wins.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::Post;

const POSTS_PER_PAGE: u32 = 10;

#[component]
pub fn PostsPage() -> impl IntoView {
    let (posts, set_posts) = signal(Vec::<Post>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (current_page, set_current_page) = signal(1u32);
    let (total_count, set_total_count) = signal(0u32);
    let (draft_query, set_draft_query) = signal(String::new());
    let (committed_query, set_committed_query) = signal(String::new());

    // One fetch per (page, committed query) change
    Effect::new(move |_| {
        let page = current_page.get();
        let query = committed_query.get();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_posts(page, POSTS_PER_PAGE, &query).await {
                Ok(result) => {
                    set_posts.set(result.posts);
                    set_total_count.set(result.total_count);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[posts] Fetch failed: {}", e).into());
                    set_error.set(Some(
                        "Could not fetch data from the API. Please try again.".to_string(),
                    ));
                }
            }
            set_loading.set(false);
        });
    });

    let total_pages = Memo::new(move |_| api::total_pages(total_count.get(), POSTS_PER_PAGE));

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // A new search restarts pagination in the same transition
        set_current_page.set(1);
        set_committed_query.set(draft_query.get());
    };

    let prev_disabled = move || current_page.get() == 1 || loading.get();
    let next_disabled = move || current_page.get() >= total_pages.get() || loading.get();

    view! {
        <div class="posts-page">
            {move || match error.get() {
                Some(message) => view! {
                    <div class="api-error">
                        <h2>"API Error"</h2>
                        <p>{message}</p>
                    </div>
                }.into_any(),
                None => view! {
                    <div class="posts-content">
                        <h1>"Fetched Posts (JSONPlaceholder)"</h1>

                        <form class="search-form" on:submit=on_search>
                            <input
                                type="text"
                                placeholder="Search posts by title or body..."
                                prop:value=move || draft_query.get()
                                on:input=move |ev| set_draft_query.set(event_target_value(&ev))
                            />
                            <button type="submit" class="btn primary">"Search"</button>
                        </form>

                        <Show
                            when=move || !loading.get()
                            fallback=|| view! { <div class="loading">"Loading posts..."</div> }
                        >
                            <div class="post-grid">
                                <For
                                    each=move || posts.get()
                                    key=|post| post.id
                                    children=move |post| {
                                        view! {
                                            <div class="post-card">
                                                <h2 class="post-title">{post.title}</h2>
                                                <p class="post-body">{post.body}</p>
                                                <p class="post-meta">{format!("User ID: {}", post.user_id)}</p>
                                            </div>
                                        }
                                    }
                                />
                            </div>

                            <div class="pagination">
                                <button
                                    class="btn secondary"
                                    disabled=prev_disabled
                                    on:click=move |_| set_current_page.update(|p| *p = p.saturating_sub(1).max(1))
                                >
                                    "Previous"
                                </button>
                                <span class="page-indicator">
                                    {move || format!("Page {} of {}", current_page.get(), total_pages.get())}
                                </span>
                                <button
                                    class="btn secondary"
                                    disabled=next_disabled
                                    on:click=move |_| set_current_page.update(|p| *p += 1)
                                >
                                    "Next"
                                </button>
                            </div>

                            <p class="result-count">
                                {move || format!(
                                    "Showing {} results. Total posts: {}",
                                    posts.get().len(),
                                    total_count.get(),
                                )}
                            </p>
                        </Show>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

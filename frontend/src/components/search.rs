//! 搜索结果页。搜索词在挂载时从查询串读取一次；
//! 原地改写 `q` 不会让本页重渲染。

use crate::components::product_card::{EmptyState, ProductGrid, SkeletonGrid};
use crate::session::use_session;
use crate::web::fetch::RequestTracker;
use crate::web::router::current_location;
use kawaii_shared::Product;
use kawaii_shared::query::{ProductQuery, query_param};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn SearchPage() -> impl IntoView {
    let session = use_session();

    let (_, search) = current_location();
    let term = query_param(&search, "q")
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());

    let (results, set_results) = signal(Vec::<Product>::new());
    let (loading, set_loading) = signal(term.is_some());
    let tracker = RequestTracker::new();

    {
        let term = term.clone();
        Effect::new(move |_| {
            // 空搜索词：不发请求，直接进空结果态
            let Some(term) = term.clone() else {
                return;
            };
            let api = session.api();
            let token = tracker.begin();
            spawn_local(async move {
                let query = ProductQuery::for_search(&term);
                match api.get_products(&query).await {
                    Ok(list) => {
                        if token.is_current() {
                            set_results.set(list);
                            set_loading.set(false);
                        }
                    }
                    Err(err) => {
                        web_sys::console::log_1(
                            &format!("[Search] Query failed: {err}").into(),
                        );
                        if token.is_current() {
                            set_results.set(Vec::new());
                            set_loading.set(false);
                        }
                    }
                }
            });
        });
    }

    let heading = match &term {
        Some(term) => format!("Results for \"{term}\""),
        None => "Search".to_string(),
    };

    view! {
        <div class="max-w-6xl mx-auto p-4 space-y-6">
            <h1 class="text-3xl font-bold">{heading}</h1>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <SkeletonGrid count=8 /> }
            >
                {move || {
                    let list = results.get();
                    if list.is_empty() {
                        view! { <EmptyState message="No products matched your search." /> }.into_any()
                    } else {
                        view! { <ProductGrid products=list /> }.into_any()
                    }
                }}
            </Show>
        </div>
    }
}

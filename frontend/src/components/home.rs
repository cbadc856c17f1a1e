//! 目录根页：分类入口加一条"热门精选"展示带。

use crate::components::product_card::{ProductGrid, SkeletonGrid};
use crate::session::use_session;
use crate::web::fetch::RequestTracker;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use kawaii_shared::query::{ProductQuery, SortKey};
use kawaii_shared::{
    CATEGORY_ACTION_FIGURES, CATEGORY_PLUSHES, CATEGORY_TSHIRTS, Product,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

const CATEGORY_TILES: [(&str, &str, &str); 3] = [
    (CATEGORY_PLUSHES, "Plushes", "Soft friends from your favorite series"),
    (CATEGORY_TSHIRTS, "T-Shirts", "Wear your fandom, oversized or regular"),
    (CATEGORY_ACTION_FIGURES, "Action Figures", "Premium and sustainable collectibles"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    let (popular, set_popular) = signal(Vec::<Product>::new());
    let (loading, set_loading) = signal(true);
    let tracker = RequestTracker::new();

    // 挂载时拉取一次；离开本页后迟到的响应被丢弃。
    Effect::new(move |_| {
        let api = session.api();
        let token = tracker.begin();
        set_loading.set(true);
        spawn_local(async move {
            let query = ProductQuery {
                sort_by: Some(SortKey::Popularity),
                ..ProductQuery::default()
            };
            match api.get_products(&query).await {
                Ok(products) => {
                    if token.is_current() {
                        set_popular.set(products);
                        set_loading.set(false);
                    }
                }
                Err(err) => {
                    web_sys::console::log_1(
                        &format!("[Home] Failed to load popular picks: {err}").into(),
                    );
                    if token.is_current() {
                        set_popular.set(Vec::new());
                        set_loading.set(false);
                    }
                }
            }
        });
    });

    view! {
        <div class="max-w-6xl mx-auto p-4 space-y-10">
            <div class="hero bg-base-200 rounded-box py-12">
                <div class="hero-content text-center">
                    <div class="max-w-md space-y-3">
                        <h1 class="text-4xl font-bold">"Kawaii Shop"</h1>
                        <p class="text-base-content/70">
                            "Plushes, shirts and figures from the series you love."
                        </p>
                    </div>
                </div>
            </div>

            <div class="grid md:grid-cols-3 gap-4">
                {CATEGORY_TILES
                    .into_iter()
                    .map(|(slug, title, blurb)| view! {
                        <Link to=AppRoute::category_path(slug, None) class="card bg-base-100 shadow hover:shadow-xl transition-shadow">
                            <div class="card-body">
                                <h2 class="card-title">{title}</h2>
                                <p class="text-base-content/70">{blurb}</p>
                            </div>
                        </Link>
                    })
                    .collect_view()}
            </div>

            <section class="space-y-4">
                <h2 class="text-2xl font-bold">"Popular picks"</h2>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <SkeletonGrid count=8 /> }
                >
                    {move || {
                        let products = popular.get();
                        if products.is_empty() {
                            view! { <p class="text-base-content/60 py-8">"Nothing to show yet."</p> }.into_any()
                        } else {
                            view! { <ProductGrid products=products /> }.into_any()
                        }
                    }}
                </Show>
            </section>
        </div>
    }
}

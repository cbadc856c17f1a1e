//! 分类页：带筛选的商品列表，外加手办分类的策展布局
//!
//! (路由参数, 筛选状态) 每变化一次就发一次商品查询，整体替换上一次结果集。
//! 不带子分类的 `action-figures` 是硬编码特例：
//! 渲染两个策展子系列入口，零商品请求。

use crate::components::product_card::{EmptyState, ProductGrid, SkeletonGrid};
use crate::session::use_session;
use crate::web::fetch::RequestTracker;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use kawaii_shared::query::{ProductQuery, SortKey};
use kawaii_shared::{
    ANIME_SERIES, CATEGORY_ACTION_FIGURES, Product, SUBCATEGORY_PREMIUM, SUBCATEGORY_SUSTAINABLE,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 单个策展子系列入口。
pub struct CuratedChoice {
    pub title: &'static str,
    pub blurb: &'static str,
    pub subcategory: &'static str,
}

const CURATED_FIGURES: [CuratedChoice; 2] = [
    CuratedChoice {
        title: "Premium Collection",
        blurb: "High-grade PVC, metal joints, collector detail.",
        subcategory: SUBCATEGORY_PREMIUM,
    },
    CuratedChoice {
        title: "Sustainable Collection",
        blurb: "Recycled materials, biodegradable paint.",
        subcategory: SUBCATEGORY_SUSTAINABLE,
    },
];

/// 给定路由下本页的形态：策展导航或商品列表。
pub enum CategoryPlan {
    Curated(&'static [CuratedChoice; 2]),
    Listing,
}

pub fn plan(slug: &str, subcategory: Option<&str>) -> CategoryPlan {
    if slug == CATEGORY_ACTION_FIGURES && subcategory.is_none() {
        CategoryPlan::Curated(&CURATED_FIGURES)
    } else {
        CategoryPlan::Listing
    }
}

fn category_title(slug: &str) -> String {
    let mut words: Vec<String> = slug
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();
    if words.is_empty() {
        words.push(slug.to_string());
    }
    words.join(" ")
}

#[component]
pub fn CategoryPage(slug: String, subcategory: Option<String>) -> impl IntoView {
    match plan(&slug, subcategory.as_deref()) {
        CategoryPlan::Curated(choices) => view! {
            <div class="max-w-4xl mx-auto p-4 space-y-6">
                <h1 class="text-3xl font-bold">{category_title(&slug)}</h1>
                <div class="grid md:grid-cols-2 gap-6">
                    {choices
                        .iter()
                        .map(|choice| view! {
                            <Link
                                to=AppRoute::category_path(&slug, Some(choice.subcategory))
                                class="card bg-base-100 shadow-xl hover:shadow-2xl transition-shadow"
                            >
                                <div class="card-body items-center text-center py-16">
                                    <h2 class="card-title text-2xl">{choice.title}</h2>
                                    <p class="text-base-content/70">{choice.blurb}</p>
                                </div>
                            </Link>
                        })
                        .collect_view()}
                </div>
            </div>
        }
        .into_any(),
        CategoryPlan::Listing => view! { <CategoryListing slug=slug subcategory=subcategory /> }.into_any(),
    }
}

#[component]
fn CategoryListing(slug: String, subcategory: Option<String>) -> impl IntoView {
    let session = use_session();

    let (products, set_products) = signal(Vec::<Product>::new());
    let (loading, set_loading) = signal(true);

    let (series, set_series) = signal(String::new());
    let (sort, set_sort) = signal(SortKey::Newest);
    let (price_min, set_price_min) = signal(String::new());
    let (price_max, set_price_max) = signal(String::new());

    let tracker = RequestTracker::new();
    let title = category_title(&slug);
    let subtitle = subcategory.clone();

    // 路由参数在一次挂载内固定（路由变更会重挂载本页）；
    // 筛选信号触发重查。每次运行整体替换结果集。
    Effect::new(move |_| {
        let query = ProductQuery {
            anime_series: Some(series.get()).filter(|s| !s.is_empty()),
            sort_by: Some(sort.get()),
            price_min: price_min.get().trim().parse::<f64>().ok(),
            price_max: price_max.get().trim().parse::<f64>().ok(),
            ..ProductQuery::for_category(&slug, subcategory.as_deref())
        };
        let api = session.api();
        let token = tracker.begin();
        set_loading.set(true);
        spawn_local(async move {
            match api.get_products(&query).await {
                Ok(list) => {
                    if token.is_current() {
                        set_products.set(list);
                        set_loading.set(false);
                    }
                }
                Err(err) => {
                    // 查询失败与"无结果"不作区分：记录后退回空列表
                    web_sys::console::log_1(
                        &format!("[Category] Product query failed: {err}").into(),
                    );
                    if token.is_current() {
                        set_products.set(Vec::new());
                        set_loading.set(false);
                    }
                }
            }
        });
    });

    view! {
        <div class="max-w-6xl mx-auto p-4 space-y-6">
            <div>
                <h1 class="text-3xl font-bold">{title}</h1>
                {subtitle.map(|sub| view! { <p class="text-base-content/60">{category_title(&sub)}</p> })}
            </div>

            <div class="flex flex-wrap items-end gap-3 bg-base-100 rounded-box p-4 shadow">
                <label class="form-control">
                    <span class="label-text mb-1">"Anime series"</span>
                    <select
                        class="select select-bordered select-sm"
                        on:change=move |ev| set_series.set(event_target_value(&ev))
                    >
                        <option value="">"All series"</option>
                        {ANIME_SERIES
                            .iter()
                            .map(|s| view! { <option value=*s>{*s}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="form-control">
                    <span class="label-text mb-1">"Sort by"</span>
                    <select
                        class="select select-bordered select-sm"
                        on:change=move |ev| {
                            if let Some(key) = SortKey::from_param(&event_target_value(&ev)) {
                                set_sort.set(key);
                            }
                        }
                    >
                        {SortKey::ALL
                            .iter()
                            .copied()
                            .map(|key| view! { <option value=key.as_param()>{key.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="form-control">
                    <span class="label-text mb-1">"Min price"</span>
                    <input
                        type="number"
                        min="0"
                        class="input input-bordered input-sm w-24"
                        prop:value=price_min
                        on:input=move |ev| set_price_min.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-control">
                    <span class="label-text mb-1">"Max price"</span>
                    <input
                        type="number"
                        min="0"
                        class="input input-bordered input-sm w-24"
                        prop:value=price_max
                        on:input=move |ev| set_price_max.set(event_target_value(&ev))
                    />
                </label>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <SkeletonGrid count=8 /> }
            >
                {move || {
                    let list = products.get();
                    if list.is_empty() {
                        view! { <EmptyState message="No products match these filters." /> }.into_any()
                    } else {
                        view! { <ProductGrid products=list /> }.into_any()
                    }
                }}
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_figures_root_renders_two_curated_choices() {
        match plan(CATEGORY_ACTION_FIGURES, None) {
            CategoryPlan::Curated(choices) => {
                assert_eq!(choices.len(), 2);
                assert_eq!(choices[0].subcategory, SUBCATEGORY_PREMIUM);
                assert_eq!(choices[1].subcategory, SUBCATEGORY_SUSTAINABLE);
            }
            CategoryPlan::Listing => panic!("expected the curated layout"),
        }
    }

    #[test]
    fn subcategory_or_other_slug_gets_a_listing() {
        assert!(matches!(
            plan(CATEGORY_ACTION_FIGURES, Some(SUBCATEGORY_PREMIUM)),
            CategoryPlan::Listing
        ));
        assert!(matches!(plan("plushes", None), CategoryPlan::Listing));
        assert!(matches!(plan("t-shirts", None), CategoryPlan::Listing));
    }

    #[test]
    fn titles_are_capitalized_per_word() {
        assert_eq!(category_title("action-figures"), "Action Figures");
        assert_eq!(category_title("plushes"), "Plushes");
    }
}

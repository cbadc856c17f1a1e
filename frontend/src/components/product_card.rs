//! 商品卡片网格的共享件：商品卡、骨架占位、空结果态。
//! 目录页、分类页、搜索页都经由这里渲染。

use crate::web::router::Link;
use kawaii_shared::Product;
use leptos::prelude::*;

pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let detail_path = format!("/product/{}", urlencoding::encode(&product.id));
    let image = product.images.first().cloned();
    let series = product.anime_series.clone();
    let out_of_stock = product.stock == 0;

    view! {
        <Link to=detail_path class="card bg-base-100 shadow hover:shadow-xl transition-shadow">
            <figure class="aspect-square bg-base-200">
                {match image {
                    Some(src) => view! { <img src=src alt=product.name.clone() class="object-cover w-full h-full" /> }.into_any(),
                    None => view! { <div class="w-full h-full flex items-center justify-center text-base-content/30">"No image"</div> }.into_any(),
                }}
            </figure>
            <div class="card-body p-4">
                <h3 class="card-title text-sm line-clamp-2">{product.name.clone()}</h3>
                {series.map(|s| view! { <div class="badge badge-ghost badge-sm">{s}</div> })}
                <div class="flex items-center justify-between mt-2">
                    <span class="font-bold text-primary">{format_price(product.price)}</span>
                    <Show when=move || out_of_stock>
                        <span class="badge badge-error badge-outline badge-sm">"Sold out"</span>
                    </Show>
                </div>
            </div>
        </Link>
    }
}

#[component]
pub fn ProductGrid(products: Vec<Product>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4">
            <For
                each=move || products.clone()
                key=|product| product.id.clone()
                children=move |product| view! { <ProductCard product=product /> }
            />
        </div>
    }
}

/// 列表请求在途时渲染固定数量的占位卡片。
#[component]
pub fn SkeletonGrid(#[prop(default = 8)] count: usize) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4">
            {(0..count)
                .map(|_| view! {
                    <div class="card bg-base-100 shadow">
                        <div class="skeleton aspect-square rounded-b-none"></div>
                        <div class="card-body p-4 gap-2">
                            <div class="skeleton h-4 w-3/4"></div>
                            <div class="skeleton h-4 w-1/3"></div>
                        </div>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

/// 空结果态，附一条回目录根的路。
#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="text-center py-16 space-y-4">
            <p class="text-xl text-base-content/60">{message}</p>
            <Link to="/" class="btn btn-primary btn-outline">"Back to the shop"</Link>
        </div>
    }
}

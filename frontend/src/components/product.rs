//! 商品详情页：变体选择、数量夹取、加入购物车。

use crate::cart_store::use_cart;
use crate::components::product_card::{EmptyState, format_price};
use crate::session::use_session;
use crate::web::fetch::RequestTracker;
use crate::web::router::use_router;
use kawaii_shared::cart::clamp_quantity;
use kawaii_shared::{CartItem, Product};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 购物车请求落定后的阻塞式提示。徽标不做乐观更新。
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
pub fn ProductPage(id: String) -> impl IntoView {
    let session = use_session();
    let cart = use_cart();
    let router = use_router();

    let (product, set_product) = signal(Option::<Product>::None);
    let (loading, set_loading) = signal(true);
    let (quantity, set_quantity) = signal(1u32);
    let (sel_size, set_sel_size) = signal(Option::<String>::None);
    let (sel_color, set_sel_color) = signal(Option::<String>::None);
    let (sel_fit, set_sel_fit) = signal(Option::<String>::None);
    let (busy, set_busy) = signal(false);

    let tracker = RequestTracker::new();

    // 挂载时拉取；id 在一次挂载内固定（路由变更会重挂载）。
    Effect::new(move |_| {
        let api = session.api();
        let id = id.clone();
        let token = tracker.begin();
        spawn_local(async move {
            match api.get_product(&id).await {
                Ok(p) => {
                    if token.is_current() {
                        // 变体状态从各自第一个可用选项初始化
                        set_sel_size.set(p.sizes.first().cloned());
                        set_sel_color.set(p.colors.first().cloned());
                        set_sel_fit.set(p.fit_type.clone());
                        set_quantity.set(1);
                        set_product.set(Some(p));
                        set_loading.set(false);
                    }
                }
                Err(err) => {
                    web_sys::console::log_1(
                        &format!("[Product] Failed to load product: {err}").into(),
                    );
                    if token.is_current() {
                        set_product.set(None);
                        set_loading.set(false);
                    }
                }
            }
        });
    });

    let stock = move || product.get_untracked().map(|p| p.stock).unwrap_or(0);

    let on_decrement = move |_| {
        set_quantity.update(|q| *q = clamp_quantity(i64::from(*q) - 1, stock()));
    };
    // 库存为零时加号在下界等效于空操作
    let on_increment = move |_| {
        set_quantity.update(|q| *q = clamp_quantity(i64::from(*q) + 1, stock()));
    };

    let cart_for_add = cart.clone();
    let on_add_to_cart = move |_| {
        let state = session.state.get_untracked();
        // 未认证的点击改道登录页，不打 API
        if state.user.is_none() {
            router.navigate("/login");
            return;
        }
        let Some(p) = product.get_untracked() else {
            return;
        };
        let item = CartItem {
            product_id: p.id.clone(),
            quantity: quantity.get_untracked(),
            selected_size: sel_size.get_untracked(),
            selected_color: sel_color.get_untracked(),
            selected_fit: sel_fit.get_untracked(),
        };
        let api = state.api.clone();
        let cart = cart_for_add.clone();
        set_busy.set(true);
        spawn_local(async move {
            match api.add_to_cart(&item).await {
                Ok(()) => {
                    alert("Added to cart!");
                    cart.refresh(api);
                }
                Err(err) => alert(&format!("Could not add to cart: {err}")),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="max-w-5xl mx-auto p-4">
            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex justify-center py-24">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
            >
                {
                    let on_add_to_cart = on_add_to_cart.clone();
                    move || {
                    let Some(p) = product.get() else {
                        return view! { <EmptyState message="This product could not be found." /> }.into_any();
                    };
                    let out_of_stock = p.stock == 0;
                    let sizes = p.sizes.clone();
                    let colors = p.colors.clone();
                    view! {
                        <div class="grid md:grid-cols-2 gap-8">
                            <figure class="bg-base-200 rounded-box aspect-square overflow-hidden">
                                {p.images.first().cloned().map(|src| view! {
                                    <img src=src alt=p.name.clone() class="object-cover w-full h-full" />
                                })}
                            </figure>
                            <div class="space-y-4">
                                <h1 class="text-3xl font-bold">{p.name.clone()}</h1>
                                {p.anime_series.clone().map(|s| view! {
                                    <div class="badge badge-secondary badge-outline">{s}</div>
                                })}
                                <p class="text-2xl font-bold text-primary">{format_price(p.price)}</p>
                                <p class="text-base-content/80">{p.description.clone()}</p>

                                <ul class="text-sm text-base-content/60 space-y-1">
                                    {p.material.clone().map(|m| view! { <li>"Material: " {m}</li> })}
                                    {p.dimensions.clone().map(|d| view! { <li>"Dimensions: " {d}</li> })}
                                </ul>

                                <Show when={let has = !sizes.is_empty(); move || has}>
                                    <label class="form-control max-w-xs">
                                        <span class="label-text mb-1">"Size"</span>
                                        <select
                                            class="select select-bordered select-sm"
                                            on:change=move |ev| set_sel_size.set(Some(event_target_value(&ev)))
                                        >
                                            {sizes.clone().into_iter()
                                                .map(|s| view! { <option value=s.clone()>{s.clone()}</option> })
                                                .collect_view()}
                                        </select>
                                    </label>
                                </Show>

                                <Show when={let has = !colors.is_empty(); move || has}>
                                    <label class="form-control max-w-xs">
                                        <span class="label-text mb-1">"Color"</span>
                                        <select
                                            class="select select-bordered select-sm"
                                            on:change=move |ev| set_sel_color.set(Some(event_target_value(&ev)))
                                        >
                                            {colors.clone().into_iter()
                                                .map(|c| view! { <option value=c.clone()>{c.clone()}</option> })
                                                .collect_view()}
                                        </select>
                                    </label>
                                </Show>

                                {p.fit_type.clone().map(|fit| view! {
                                    <p class="text-sm">"Fit: " <span class="badge badge-ghost">{fit}</span></p>
                                })}

                                <div class="flex items-center gap-3">
                                    <div class="join">
                                        <button class="btn btn-sm join-item" on:click=on_decrement>"−"</button>
                                        <span class="btn btn-sm join-item no-animation pointer-events-none w-12">
                                            {move || quantity.get()}
                                        </span>
                                        <button class="btn btn-sm join-item" on:click=on_increment>"+"</button>
                                    </div>
                                    <span class="text-sm text-base-content/60">
                                        {if out_of_stock {
                                            "Out of stock".to_string()
                                        } else {
                                            format!("{} in stock", p.stock)
                                        }}
                                    </span>
                                </div>

                                <button
                                    class="btn btn-primary w-full md:w-auto"
                                    disabled=move || out_of_stock || busy.get()
                                    on:click=on_add_to_cart.clone()
                                >
                                    {move || if busy.get() { "Adding..." } else { "Add to cart" }}
                                </button>
                            </div>
                        </div>
                    }
                    .into_any()
                }}
            </Show>
        </div>
    }
}

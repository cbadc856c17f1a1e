//! 购物车页
//!
//! 挂载时与每次变更后都重新拉取，商品并发解析，合计永远基于最新数据重算。
//! 商品查询失败的行从列表与合计中静默剔除；删除仅按商品 id 匹配，
//! 同 id 的所有变体行会被一并移除（服务端契约如此）。

use crate::cart_store::use_cart;
use crate::components::product_card::format_price;
use crate::session::use_session;
use crate::web::fetch::RequestTracker;
use crate::web::router::Link;
use futures::future::join_all;
use kawaii_shared::cart::{CartLine, cart_total, resolve_lines};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::{BTreeSet, HashMap};

#[component]
pub fn CartPage() -> impl IntoView {
    let session = use_session();
    let cart = use_cart();

    let (lines, set_lines) = signal(Vec::<CartLine>::new());
    let (resolving, set_resolving) = signal(true);
    let tracker = RequestTracker::new();

    // 挂载时重新拉取。后续变更都走共享 store，
    // 徽标与本页收敛到同一份服务端真相。
    {
        let cart = cart.clone();
        Effect::new(move |_| {
            let state = session.state.get_untracked();
            if state.user.is_some() {
                cart.refresh(state.api.clone());
            }
        });
    }

    // store 快照每次变化都重新把购物车行与商品连接。
    {
        let cart_signal = cart.cart;
        let tracker = tracker.clone();
        Effect::new(move |_| {
            let items = cart_signal.get().items;
            let api = session.api();
            let token = tracker.begin();
            set_resolving.set(true);
            spawn_local(async move {
                let ids: Vec<String> = items
                    .iter()
                    .map(|item| item.product_id.clone())
                    .collect::<BTreeSet<_>>()
                    .into_iter()
                    .collect();

                // 每个不同的商品 id 一次请求，并发发起。
                let results = join_all(ids.iter().map(|id| api.get_product(id))).await;

                let mut products = HashMap::new();
                for result in results {
                    match result {
                        Ok(product) => {
                            products.insert(product.id.clone(), product);
                        }
                        Err(err) => {
                            // 有损降级：对应行直接消失
                            web_sys::console::log_1(
                                &format!("[Cart] Product lookup failed: {err}").into(),
                            );
                        }
                    }
                }

                if token.is_current() {
                    set_lines.set(resolve_lines(&items, &products));
                    set_resolving.set(false);
                }
            });
        });
    }

    let total = move || cart_total(&lines.get());

    let cart_for_rows = cart.clone();
    view! {
        <div class="max-w-4xl mx-auto p-4 space-y-6">
            <h1 class="text-3xl font-bold">"Your cart"</h1>
            {move || {
                let state = session.state.get();
                if state.loading {
                    return view! {
                        <div class="flex justify-center py-24">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    }
                    .into_any();
                }
                if state.user.is_none() {
                    return view! {
                        <div class="card bg-base-100 shadow max-w-md mx-auto">
                            <div class="card-body items-center text-center space-y-2">
                                <p>"Sign in to see your cart."</p>
                                <Link to="/login" class="btn btn-primary">"Sign in"</Link>
                            </div>
                        </div>
                    }
                    .into_any();
                }

                let cart = cart_for_rows.clone();
                view! {
                    <Show
                        when=move || !resolving.get()
                        fallback=|| view! {
                            <div class="flex justify-center py-24">
                                <span class="loading loading-spinner loading-lg text-primary"></span>
                            </div>
                        }
                    >
                        {
                            let cart = cart.clone();
                            move || {
                                let current = lines.get();
                                if current.is_empty() {
                                    return view! {
                                        <div class="text-center py-16 space-y-4">
                                            <p class="text-xl text-base-content/60">"Your cart is empty."</p>
                                            <Link to="/" class="btn btn-primary btn-outline">"Browse the shop"</Link>
                                        </div>
                                    }
                                    .into_any();
                                }
                                let cart = cart.clone();
                                view! {
                                    <div class="space-y-4">
                                        <For
                                            each=move || lines.get()
                                            key=|line| format!(
                                                "{}|{}|{}",
                                                line.item.product_id,
                                                line.item.selected_size.as_deref().unwrap_or(""),
                                                line.item.selected_color.as_deref().unwrap_or(""),
                                            )
                                            children=move |line| {
                                                let product_id = line.item.product_id.clone();
                                                let cart = cart.clone();
                                                let on_remove = move |_| {
                                                    let api = session.api();
                                                    let cart = cart.clone();
                                                    let id = product_id.clone();
                                                    spawn_local(async move {
                                                        match api.remove_from_cart(&id).await {
                                                            // 重新拉取，绝不本地拼接
                                                            Ok(()) => cart.refresh(api),
                                                            Err(err) => web_sys::console::error_1(
                                                                &format!("[Cart] Remove failed: {err}").into(),
                                                            ),
                                                        }
                                                    });
                                                };
                                                view! {
                                                    <div class="card card-side bg-base-100 shadow">
                                                        <figure class="w-24 h-24 bg-base-200 shrink-0">
                                                            {line.product.images.first().cloned().map(|src| view! {
                                                                <img src=src alt=line.product.name.clone() class="object-cover w-full h-full" />
                                                            })}
                                                        </figure>
                                                        <div class="card-body py-3 flex-row items-center justify-between gap-4">
                                                            <div>
                                                                <h3 class="font-bold">{line.product.name.clone()}</h3>
                                                                <div class="flex gap-1 text-xs">
                                                                    {line.item.selected_size.clone().map(|s| view! { <span class="badge badge-ghost badge-sm">{s}</span> })}
                                                                    {line.item.selected_color.clone().map(|c| view! { <span class="badge badge-ghost badge-sm">{c}</span> })}
                                                                    {line.item.selected_fit.clone().map(|f| view! { <span class="badge badge-ghost badge-sm">{f}</span> })}
                                                                </div>
                                                                <p class="text-sm text-base-content/60">
                                                                    {format!("{} × {}", line.item.quantity, format_price(line.product.price))}
                                                                </p>
                                                            </div>
                                                            <div class="flex items-center gap-3">
                                                                <span class="font-bold">{format_price(line.subtotal())}</span>
                                                                <button class="btn btn-ghost btn-sm text-error" on:click=on_remove>
                                                                    "Remove"
                                                                </button>
                                                            </div>
                                                        </div>
                                                    </div>
                                                }
                                            }
                                        />
                                        <div class="flex justify-end items-center gap-4 border-t border-base-300 pt-4">
                                            <span class="text-lg">"Total"</span>
                                            <span class="text-2xl font-bold text-primary">
                                                {move || format_price(total())}
                                            </span>
                                        </div>
                                    </div>
                                }
                                .into_any()
                            }
                        }
                    </Show>
                }
                .into_any()
            }}
        </div>
    }
}

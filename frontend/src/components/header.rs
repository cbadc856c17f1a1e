//! 壳层头部：导航、搜索框、购物车徽标、认证菜单。
//! 徽标订阅共享购物车 store，从不自己做购物车算术。

use crate::cart_store::use_cart;
use crate::session::{logout, use_session};
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use kawaii_shared::{CATEGORY_ACTION_FIGURES, CATEGORY_PLUSHES, CATEGORY_TSHIRTS};
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let cart = use_cart();
    let router = use_router();

    let (term, set_term) = signal(String::new());
    let cart_count = cart.count_signal();
    let session_state = session.state;

    // 纯空白搜索词被抑制：完全不导航
    let on_search = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(path) = AppRoute::search_path(&term.get()) {
            router.navigate(&path);
            set_term.set(String::new());
        }
    };

    let on_logout = move |_| {
        logout(&session);
        router.navigate("/");
    };

    view! {
        <header class="navbar bg-base-100 shadow sticky top-0 z-40 gap-2">
            <div class="flex-none">
                <Link to="/" class="btn btn-ghost text-xl text-primary font-bold">"Kawaii Shop"</Link>
            </div>
            <nav class="flex-none hidden md:flex gap-1">
                <Link to=AppRoute::category_path(CATEGORY_PLUSHES, None) class="btn btn-ghost btn-sm">"Plushes"</Link>
                <Link to=AppRoute::category_path(CATEGORY_TSHIRTS, None) class="btn btn-ghost btn-sm">"T-Shirts"</Link>
                <Link to=AppRoute::category_path(CATEGORY_ACTION_FIGURES, None) class="btn btn-ghost btn-sm">"Action Figures"</Link>
            </nav>
            <form class="flex-1 px-2" on:submit=on_search>
                <input
                    type="search"
                    placeholder="Search merch..."
                    class="input input-bordered input-sm w-full max-w-xs"
                    prop:value=term
                    on:input=move |ev| set_term.set(event_target_value(&ev))
                />
            </form>
            <div class="flex-none gap-2">
                <Link to="/cart" class="btn btn-ghost btn-circle">
                    <div class="indicator">
                        <span class="text-xl">"🛒"</span>
                        <Show when={move || cart_count.get() > 0}>
                            <span class="badge badge-sm badge-primary indicator-item">
                                {move || cart_count.get()}
                            </span>
                        </Show>
                    </div>
                </Link>
                {move || {
                    let state = session_state.get();
                    if state.loading {
                        view! { <span class="loading loading-spinner loading-sm"></span> }.into_any()
                    } else if let Some(user) = state.user {
                        view! {
                            <div class="dropdown dropdown-end">
                                <div tabindex="0" role="button" class="btn btn-ghost btn-sm gap-2">
                                    {user.picture.clone().map(|src| view! {
                                        <img src=src alt="avatar" class="w-6 h-6 rounded-full" />
                                    })}
                                    <span class="hidden md:inline">{user.name.clone()}</span>
                                </div>
                                <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-100 rounded-box w-40">
                                    <li><a on:click=on_logout>"Sign out"</a></li>
                                </ul>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! { <Link to="/login" class="btn btn-primary btn-sm">"Sign in"</Link> }.into_any()
                    }
                }}
            </div>
        </header>
    }
}

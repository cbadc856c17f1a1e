//! Kawaii Shop 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `session`: 会话状态管理
//! - `cart_store`: 购物车共享状态
//! - `components`: UI 组件层

mod api;
mod cart_store;
mod components {
    pub mod auth_callback;
    pub mod cart;
    pub mod category;
    pub mod footer;
    pub mod header;
    pub mod home;
    pub mod login;
    mod product_card;
    pub mod product;
    pub mod search;
}
mod config;
mod session;

use crate::components::auth_callback::AuthCallbackPage;
use crate::components::cart::CartPage;
use crate::components::category::CategoryPage;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::product::ProductPage;
use crate::components::search::SearchPage;
use crate::session::{SessionContext, init_session};

use leptos::prelude::*;

// 原生 Web API 封装模块
pub(crate) mod web {
    pub mod fetch;
    pub mod route;
    pub mod router;
    mod storage;

    pub use storage::LocalStorage;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Category { slug, subcategory } => {
            view! { <CategoryPage slug=slug subcategory=subcategory /> }.into_any()
        }
        AppRoute::Product { id } => view! { <ProductPage id=id /> }.into_any(),
        AppRoute::Cart => view! { <CartPage /> }.into_any(),
        AppRoute::Search => view! { <SearchPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::AuthCallback => view! { <AuthCallbackPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"This page wandered off."</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建会话上下文
    let session = SessionContext::new();
    provide_context(session);

    // 2. 初始化会话（从 LocalStorage 重放令牌）
    init_session(&session);

    // 3. 提供购物车共享状态（跟随会话自动刷新/清空）
    cart_store::provide_cart(session);

    // 4. 认证信号注入路由服务（解耦！）
    let is_authenticated = session.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <div class="min-h-screen flex flex-col bg-base-200">
                <Header />
                <main class="flex-1">
                    <RouterOutlet matcher=route_matcher />
                </main>
                <Footer />
            </div>
        </Router>
    }
}

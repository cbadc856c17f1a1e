//! 登录页。跳转 Google 是一次整页导航，
//! 所以这里用普通锚点而非路由器链接。

use crate::config;
use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="max-w-md mx-auto p-4 py-16">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body items-center text-center space-y-4">
                    <h1 class="card-title text-2xl">"Welcome back"</h1>
                    <p class="text-base-content/70">
                        "Sign in to fill your cart with plushes, shirts and figures."
                    </p>
                    <a class="btn btn-primary w-full" href=config::google_auth_url()>
                        "Sign in with Google"
                    </a>
                </div>
            </div>
        </div>
    }
}

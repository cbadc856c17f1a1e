//! OAuth 回调页：用授权码换取会话，然后交还给商店。
//! 每次挂载恰好执行一次。

use crate::config;
use crate::session::{login, use_session};
use crate::web::router::{current_location, use_router};
use kawaii_shared::query::query_param;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (error, set_error) = signal(Option::<String>::None);

    Effect::new(move |_| {
        let (_, search) = current_location();
        let Some(code) = query_param(&search, "code").filter(|c| !c.is_empty()) else {
            set_error.set(Some(
                "The sign-in provider did not return an authorization code.".to_string(),
            ));
            return;
        };

        let api = session.api();
        spawn_local(async move {
            // redirect_uri 必须与出站跳转时使用的一致
            match api.google_auth(&code, &config::oauth_redirect_uri()).await {
                Ok(auth) => {
                    login(&session, auth.user, auth.session_token);
                    router.navigate("/");
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[Auth] Code exchange failed: {err}").into(),
                    );
                    set_error.set(Some(err));
                }
            }
        });
    });

    view! {
        <div class="max-w-md mx-auto p-4 py-16 text-center">
            {move || match error.get() {
                None => view! {
                    <div class="space-y-4">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                        <p class="text-base-content/70">"Signing you in..."</p>
                    </div>
                }
                .into_any(),
                Some(err) => view! {
                    <div class="card bg-base-100 shadow">
                        <div class="card-body items-center space-y-2">
                            <h1 class="card-title text-error">"Sign-in failed"</h1>
                            <p class="text-sm text-base-content/70">{err}</p>
                            <a class="btn btn-primary btn-sm" href="/login">"Try again"</a>
                        </div>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

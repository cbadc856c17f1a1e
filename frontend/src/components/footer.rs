//! 壳层底部。

use crate::web::route::AppRoute;
use crate::web::router::Link;
use kawaii_shared::{CATEGORY_ACTION_FIGURES, CATEGORY_PLUSHES, CATEGORY_TSHIRTS};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer p-10 bg-neutral text-neutral-content mt-12">
            <aside>
                <p class="font-bold text-lg">"Kawaii Shop"</p>
                <p>"Anime merch for every fandom."</p>
            </aside>
            <nav>
                <h6 class="footer-title">"Categories"</h6>
                <Link to=AppRoute::category_path(CATEGORY_PLUSHES, None) class="link link-hover">"Plushes"</Link>
                <Link to=AppRoute::category_path(CATEGORY_TSHIRTS, None) class="link link-hover">"T-Shirts"</Link>
                <Link to=AppRoute::category_path(CATEGORY_ACTION_FIGURES, None) class="link link-hover">"Action Figures"</Link>
            </nav>
        </footer>
    }
}

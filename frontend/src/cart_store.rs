//! 购物车状态
//!
//! 头部徽标与购物车页共用同一个提供者：谁改了购物车就调 `refresh`，
//! 所有订阅者跟着收敛，不再各自发起互不同步的拉取。
//! 本地从不改写行数据，真相永远来自服务端的下一次拉取。

use crate::api::ShopApi;
use crate::session::SessionContext;
use crate::web::fetch::RequestTracker;
use kawaii_shared::Cart;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone)]
pub struct CartContext {
    /// 最近一次拉取的购物车快照
    pub cart: ReadSignal<Cart>,
    set_cart: WriteSignal<Cart>,
    tracker: RequestTracker,
}

impl CartContext {
    fn new() -> Self {
        let (cart, set_cart) = signal(Cart::default());
        Self {
            cart,
            set_cart,
            tracker: RequestTracker::new(),
        }
    }

    /// 徽标计数信号：所有行数量之和。
    pub fn count_signal(&self) -> Signal<u32> {
        let cart = self.cart;
        Signal::derive(move || cart.with(Cart::total_quantity))
    }

    /// 从服务端重新拉取。匿名会话直接清空。
    /// 迟到的响应由令牌拦下，后发请求赢。
    pub fn refresh(&self, api: ShopApi) {
        if !api.has_token() {
            self.set_cart.set(Cart::default());
            return;
        }

        let token = self.tracker.begin();
        let set_cart = self.set_cart;
        spawn_local(async move {
            match api.get_cart().await {
                Ok(cart) => {
                    if token.is_current() {
                        set_cart.set(cart);
                    }
                }
                Err(err) => {
                    web_sys::console::log_1(
                        &format!("[Cart] Refresh failed, keeping last snapshot: {err}").into(),
                    );
                }
            }
        });
    }

    /// 本地清空（登出时）。
    pub fn clear(&self) {
        // 先作废在途请求，防止旧会话的响应复活徽标
        let _ = self.tracker.begin();
        self.set_cart.set(Cart::default());
    }
}

/// 提供购物车上下文，并在会话用户变化时自动刷新/清空。
pub fn provide_cart(session: SessionContext) -> CartContext {
    let cart = CartContext::new();
    provide_context(cart.clone());

    let effect_cart = cart.clone();
    Effect::new(move |_| {
        let state = session.state.get();
        if state.loading {
            return;
        }
        if state.user.is_some() {
            effect_cart.refresh(state.api.clone());
        } else {
            effect_cart.clear();
        }
    });

    cart
}

/// 从 Context 获取购物车上下文
pub fn use_cart() -> CartContext {
    use_context::<CartContext>().expect("CartContext should be provided")
}

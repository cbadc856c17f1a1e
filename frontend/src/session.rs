//! 会话模块
//!
//! 管理认证状态，与路由系统解耦。会话只有三个入口：
//! `init_session`（启动时重放持久化令牌）、`login`、`logout`。
//! API 客户端实例放在会话状态里，令牌只存在于它身上，
//! 保证"令牌存在 ⟺ 认证头存在"这一不变量。

use crate::api::ShopApi;
use crate::config;
use crate::web::LocalStorage;
use kawaii_shared::{Profile, SESSION_TOKEN_KEY};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 会话状态
#[derive(Clone)]
pub struct SessionState {
    /// API 客户端实例。匿名时也存在，只是没有令牌。
    pub api: ShopApi,
    /// 当前用户；`None` 即未认证。
    pub user: Option<Profile>,
    /// 启动时的令牌重放是否仍在进行
    pub loading: bool,
}

impl SessionState {
    /// 令牌重放失败后的状态转移：清掉认证头与内存档案，结束 loading。
    /// 纯内存操作；持久化令牌由调用方负责删除。
    fn apply_replay_failure(&mut self) {
        self.api.clear_token();
        self.user = None;
        self.loading = false;
    }
}

/// 会话上下文：读写信号对，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: ReadSignal<SessionState>,
    pub set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState {
            api: ShopApi::new(config::api_base_url()),
            user: None,
            loading: true,
        });
        Self { state, set_state }
    }

    /// 认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().user.is_some())
    }

    /// 取一份当前 API 客户端用于发请求（非响应式读取）。
    pub fn api(&self) -> ShopApi {
        self.state.get_untracked().api.clone()
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// 初始化会话：重放持久化令牌
///
/// 有令牌则挂上认证头并请求档案；档案失败（过期、网络错误）时
/// 清掉持久化令牌与认证头，回到匿名。两条路径都恰好结束一次 loading。
pub fn init_session(ctx: &SessionContext) {
    let Some(token) = LocalStorage::get(SESSION_TOKEN_KEY) else {
        ctx.set_state.update(|state| state.loading = false);
        return;
    };

    ctx.set_state
        .update(|state| state.api.attach_token(token));

    let api = ctx.api();
    let set_state = ctx.set_state;
    spawn_local(async move {
        match api.get_profile().await {
            Ok(profile) => {
                set_state.update(|state| {
                    state.user = Some(profile);
                    state.loading = false;
                });
            }
            Err(err) => {
                // 无声降级：坏令牌直接丢弃，不向用户报错
                web_sys::console::log_1(
                    &format!("[Session] Token replay failed, clearing session: {err}").into(),
                );
                LocalStorage::remove(SESSION_TOKEN_KEY);
                set_state.update(SessionState::apply_replay_failure);
            }
        }
    });
}

/// 登录：回调页完成外部交换后同步写入会话并持久化令牌。无服务端往返。
pub fn login(ctx: &SessionContext, profile: Profile, token: String) {
    LocalStorage::set(SESSION_TOKEN_KEY, &token);
    ctx.set_state.update(|state| {
        state.api.attach_token(token);
        state.user = Some(profile);
        state.loading = false;
    });
}

/// 登出：尽力通知服务端（失败只记录），随后无条件清空
/// 内存档案、持久化令牌与认证头。从客户端看登出永远成功。
pub fn logout(ctx: &SessionContext) {
    let api = ctx.api();
    spawn_local(async move {
        if let Err(err) = api.logout().await {
            web_sys::console::error_1(&format!("[Session] Logout request failed: {err}").into());
        }
    });

    LocalStorage::remove(SESSION_TOKEN_KEY);
    ctx.set_state.update(|state| {
        state.api.clear_token();
        state.user = None;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    // 对应错误分级：认证失败静默清会话，不向用户呈现
    #[test]
    fn failed_token_replay_ends_unauthenticated_without_token() {
        let mut api = ShopApi::new("https://shop.example".to_string());
        api.attach_token("expired-tok".to_string());
        let mut state = SessionState {
            api,
            user: Some(Profile {
                id: "u-1".into(),
                email: "a@b.c".into(),
                name: "A".into(),
                picture: None,
            }),
            loading: true,
        };

        state.apply_replay_failure();

        assert!(state.user.is_none());
        assert!(!state.api.has_token());
        assert!(!state.loading);
    }
}

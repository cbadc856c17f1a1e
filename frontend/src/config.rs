//! 运行时配置
//!
//! 商店 API 与前端同源部署，基址取自 window.location.origin。
//! Google OAuth 的客户端标识在构建期注入。

/// OAuth 客户端标识。未注入时保留占位值，登录跳转会被外部端点拒绝，
/// 但商店的匿名浏览不受影响。
pub const GOOGLE_CLIENT_ID: &str = match option_env!("KAWAII_GOOGLE_CLIENT_ID") {
    Some(value) => value,
    None => "your_google_client_id_here",
};

const GOOGLE_AUTHORIZE_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";

/// API 基址（同源）。
pub fn api_base_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// OAuth 回调地址：`<origin>/auth/callback`，必须与身份提供方登记的一致。
pub fn oauth_redirect_uri() -> String {
    format!("{}/auth/callback", api_base_url())
}

/// 外部授权端点的完整跳转 URL。
pub fn google_auth_url() -> String {
    format!(
        "{}?client_id={}&redirect_uri={}&response_type=code&scope={}",
        GOOGLE_AUTHORIZE_ENDPOINT,
        urlencoding::encode(GOOGLE_CLIENT_ID),
        urlencoding::encode(&oauth_redirect_uri()),
        urlencoding::encode("openid email profile"),
    )
}

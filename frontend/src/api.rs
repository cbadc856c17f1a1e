//! 远程商店 API 客户端
//!
//! 单一配置好的 HTTP 客户端：一个基址加一个可选的 Bearer 令牌。
//! 令牌存在与 `Authorization` 头存在从构造上保持同步。
//! 这里不做超时、不做重试、不做取消。

use gloo_net::http::{Request, RequestBuilder};
use kawaii_shared::query::ProductQuery;
use kawaii_shared::{AuthResponse, Cart, CartItem, GoogleAuthRequest, Product, Profile};

#[derive(Clone, Debug, PartialEq)]
pub struct ShopApi {
    pub base_url: String,
    token: Option<String>,
}

impl ShopApi {
    pub fn new(base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            token: None,
        }
    }

    pub fn attach_token(&mut self, token: String) {
        self.token = Some(token);
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    // 认证头：仅在令牌存在时返回
    fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {token}"))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.bearer() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    /// 获取当前用户档案。失败（令牌过期、网络错误）一律视为未认证。
    pub async fn get_profile(&self) -> Result<Profile, String> {
        let url = self.url("/api/profile");
        let res = self
            .authorize(Request::get(&url))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("Profile request rejected: {}", res.status()));
        }

        res.json::<Profile>().await.map_err(|e| e.to_string())
    }

    /// 用 OAuth 授权码换取会话。回调页专用。
    pub async fn google_auth(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<AuthResponse, String> {
        let url = self.url("/api/auth/google");
        let body = GoogleAuthRequest {
            code: code.to_string(),
            redirect_uri: redirect_uri.to_string(),
        };
        let res = Request::post(&url)
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("Sign-in exchange failed: {}", res.status()));
        }

        res.json::<AuthResponse>().await.map_err(|e| e.to_string())
    }

    /// 通知服务端登出。尽力而为：调用方记录失败即可，不向用户呈现。
    pub async fn logout(&self) -> Result<(), String> {
        let url = self.url("/api/auth/logout");
        let res = self
            .authorize(Request::post(&url))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("Logout request rejected: {}", res.status()));
        }
        Ok(())
    }

    /// 按筛选/排序条件获取商品列表
    pub async fn get_products(&self, query: &ProductQuery) -> Result<Vec<Product>, String> {
        let qs = query.to_query_string();
        let url = if qs.is_empty() {
            self.url("/api/products")
        } else {
            format!("{}?{}", self.url("/api/products"), qs)
        };
        let res = Request::get(&url).send().await.map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("Failed to load products: {}", res.status()));
        }

        res.json::<Vec<Product>>().await.map_err(|e| e.to_string())
    }

    /// 获取单个商品
    pub async fn get_product(&self, id: &str) -> Result<Product, String> {
        let url = self.url(&format!("/api/products/{}", urlencoding::encode(id)));
        let res = Request::get(&url).send().await.map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("Failed to load product {}: {}", id, res.status()));
        }

        res.json::<Product>().await.map_err(|e| e.to_string())
    }

    /// 获取当前会话的购物车
    pub async fn get_cart(&self) -> Result<Cart, String> {
        let url = self.url("/api/cart");
        let res = self
            .authorize(Request::get(&url))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("Failed to load cart: {}", res.status()));
        }

        res.json::<Cart>().await.map_err(|e| e.to_string())
    }

    /// 添加一行到购物车（携带数量与三个变体字段）
    pub async fn add_to_cart(&self, item: &CartItem) -> Result<(), String> {
        let url = self.url("/api/cart/add");
        let res = self
            .authorize(Request::post(&url))
            .json(item)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("Failed to add to cart: {}", res.status()));
        }
        Ok(())
    }

    /// 按商品 id 删除。服务端不区分变体：同 id 的所有行都会被移除。
    pub async fn remove_from_cart(&self, product_id: &str) -> Result<(), String> {
        let url = self.url(&format!("/api/cart/{}", urlencoding::encode(product_id)));
        let res = self
            .authorize(Request::delete(&url))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("Failed to remove from cart: {}", res.status()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_trimmed_and_joined() {
        let api = ShopApi::new("https://shop.example/".to_string());
        assert_eq!(api.base_url, "https://shop.example");
        assert_eq!(api.url("/api/cart"), "https://shop.example/api/cart");
        assert_eq!(api.url("api/cart"), "https://shop.example/api/cart");
    }

    #[test]
    fn bearer_header_tracks_token_presence() {
        let mut api = ShopApi::new("https://shop.example".to_string());
        assert_eq!(api.bearer(), None);
        assert!(!api.has_token());

        api.attach_token("tok-1".to_string());
        assert_eq!(api.bearer().as_deref(), Some("Bearer tok-1"));
        assert!(api.has_token());

        api.clear_token();
        assert_eq!(api.bearer(), None);
        assert!(!api.has_token());
    }
}

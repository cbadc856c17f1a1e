//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖 DOM 或 web_sys，可在原生目标下直接测试。
//! 定义店面的所有路由及其属性。

use kawaii_shared::query;
use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 商店首页（目录根）
    #[default]
    Home,
    /// 分类列表。子分类来自查询串，参与路由身份：
    /// 切换子分类就是一次路由变更。
    Category {
        slug: String,
        subcategory: Option<String>,
    },
    /// 商品详情
    Product { id: String },
    /// 购物车（未登录时页面自行渲染登录提示）
    Cart,
    /// 搜索结果。搜索词不进路由身份：页面挂载时读取一次查询串，
    /// 原地改写 `q` 不会触发重渲染。
    Search,
    /// 登录页
    Login,
    /// OAuth 回调
    AuthCallback,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将浏览器的 pathname + search 解析为路由。
    pub fn from_location(path: &str, search: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Home,
            ["category", slug] => Self::Category {
                slug: (*slug).to_string(),
                subcategory: query::query_param(search, "subcategory")
                    .filter(|s| !s.is_empty()),
            },
            ["product", id] => Self::Product {
                id: (*id).to_string(),
            },
            ["cart"] => Self::Cart,
            ["search"] => Self::Search,
            ["login"] => Self::Login,
            ["auth", "callback"] => Self::AuthCallback,
            _ => Self::NotFound,
        }
    }

    /// 路由的规范路径（含必要的查询串）。
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Category { slug, subcategory } => {
                Self::category_path(slug, subcategory.as_deref())
            }
            Self::Product { id } => format!("/product/{}", urlencoding::encode(id)),
            Self::Cart => "/cart".to_string(),
            Self::Search => "/search".to_string(),
            Self::Login => "/login".to_string(),
            Self::AuthCallback => "/auth/callback".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// 已认证用户是否应该离开此路由（登录页、回调页）。
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::AuthCallback)
    }

    /// 认证成功时的重定向目标。
    pub fn auth_success_redirect() -> Self {
        Self::Home
    }

    /// 分类页路径，子分类追加为查询参数。
    pub fn category_path(slug: &str, subcategory: Option<&str>) -> String {
        let base = format!("/category/{}", urlencoding::encode(slug));
        match subcategory {
            Some(sub) => format!("{}?subcategory={}", base, urlencoding::encode(sub)),
            None => base,
        }
    }

    /// 搜索结果页路径。空白搜索词返回 `None`，调用方必须抑制导航。
    pub fn search_path(term: &str) -> Option<String> {
        query::search_query(term).map(|encoded| format!("/search?q={}", encoded))
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_screen_path() {
        assert_eq!(AppRoute::from_location("/", ""), AppRoute::Home);
        assert_eq!(
            AppRoute::from_location("/product/p-9", ""),
            AppRoute::Product { id: "p-9".into() }
        );
        assert_eq!(AppRoute::from_location("/cart", ""), AppRoute::Cart);
        assert_eq!(AppRoute::from_location("/login", ""), AppRoute::Login);
        assert_eq!(
            AppRoute::from_location("/auth/callback", "?code=abc"),
            AppRoute::AuthCallback
        );
        assert_eq!(
            AppRoute::from_location("/no/such/page", ""),
            AppRoute::NotFound
        );
    }

    #[test]
    fn category_route_carries_subcategory_from_query() {
        assert_eq!(
            AppRoute::from_location("/category/action-figures", "?subcategory=premium"),
            AppRoute::Category {
                slug: "action-figures".into(),
                subcategory: Some("premium".into()),
            }
        );
        assert_eq!(
            AppRoute::from_location("/category/t-shirts", ""),
            AppRoute::Category {
                slug: "t-shirts".into(),
                subcategory: None,
            }
        );
        // 空值等同于未筛选
        assert_eq!(
            AppRoute::from_location("/category/t-shirts", "?subcategory="),
            AppRoute::Category {
                slug: "t-shirts".into(),
                subcategory: None,
            }
        );
    }

    #[test]
    fn search_term_is_not_part_of_route_identity() {
        let a = AppRoute::from_location("/search", "?q=naruto");
        let b = AppRoute::from_location("/search", "?q=bleach");
        assert_eq!(a, b);
    }

    #[test]
    fn canonical_paths_round_trip() {
        for route in [
            AppRoute::Home,
            AppRoute::Category {
                slug: "plushes".into(),
                subcategory: None,
            },
            AppRoute::Category {
                slug: "action-figures".into(),
                subcategory: Some("sustainable".into()),
            },
            AppRoute::Product { id: "p-1".into() },
            AppRoute::Cart,
            AppRoute::Login,
            AppRoute::AuthCallback,
        ] {
            let path = route.to_path();
            let (p, q) = path.split_once('?').unwrap_or((path.as_str(), ""));
            assert_eq!(AppRoute::from_location(p, q), route);
        }
    }

    #[test]
    fn search_path_suppresses_blank_terms() {
        assert_eq!(AppRoute::search_path(""), None);
        assert_eq!(AppRoute::search_path("   \t"), None);
    }

    #[test]
    fn search_path_encodes_term_exactly() {
        let path = AppRoute::search_path("naruto hoodie").unwrap();
        assert_eq!(path, "/search?q=naruto%20hoodie");
        let q = kawaii_shared::query::query_param(path.split_once('?').unwrap().1, "q");
        assert_eq!(q.as_deref(), Some("naruto hoodie"));
    }
}

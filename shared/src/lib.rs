//! Kawaii Shop 共享领域模型
//!
//! 前端与远程商店 API 之间的协议类型。所有实体由远程 API 持有并修改，
//! 客户端只保存只读或直写副本。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod cart;
pub mod query;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// LocalStorage 中持久化会话令牌的固定键。
pub const SESSION_TOKEN_KEY: &str = "kawaii_session_token";

pub const CATEGORY_PLUSHES: &str = "plushes";
pub const CATEGORY_TSHIRTS: &str = "t-shirts";
pub const CATEGORY_ACTION_FIGURES: &str = "action-figures";

pub const SUBCATEGORY_PREMIUM: &str = "premium";
pub const SUBCATEGORY_SUSTAINABLE: &str = "sustainable";

/// 可供筛选的动漫系列（与商品库的 anime_series 字段对应）。
pub const ANIME_SERIES: &[&str] = &[
    "Naruto",
    "One Piece",
    "Dragon Ball",
    "Attack on Titan",
    "My Hero Academia",
    "Demon Slayer",
    "Jujutsu Kaisen",
    "Tokyo Ghoul",
    "Death Note",
    "Bleach",
    "Hunter x Hunter",
    "Fullmetal Alchemist",
    "One Punch Man",
    "Mob Psycho 100",
    "Assassination Classroom",
    "Haikyuu",
    "Kuroko no Basketball",
    "Food Wars",
    "Pokemon",
    "Digimon",
    "Sailor Moon",
    "Cardcaptor Sakura",
    "Evangelion",
    "Cowboy Bebop",
    "Studio Ghibli",
    "Your Name",
    "Weathering With You",
    "Violet Evergarden",
    "Kimetsu no Yaiba",
    "Fire Force",
    "Dr. Stone",
];

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 当前登录用户的档案。除展示字段外对客户端不透明。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
}

/// 商品。客户端视角完全只读。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub anime_series: Option<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub fit_type: Option<String>,
    #[serde(default)]
    pub popularity_score: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// 购物车行。行的身份是 (product_id, selected_size, selected_color)：
/// 仅变体不同的两行是两条独立记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: String,
    pub quantity: u32,
    #[serde(default)]
    pub selected_size: Option<String>,
    #[serde(default)]
    pub selected_color: Option<String>,
    #[serde(default)]
    pub selected_fit: Option<String>,
}

impl CartItem {
    /// 行身份键。selected_fit 不参与身份判定（服务端合并时同样忽略它）。
    pub fn line_key(&self) -> (&str, Option<&str>, Option<&str>) {
        (
            &self.product_id,
            self.selected_size.as_deref(),
            self.selected_color.as_deref(),
        )
    }
}

/// 购物车：服务端按会话持有，客户端副本总是重新拉取的瞬时投影。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl Cart {
    /// 徽标计数：所有行的数量之和。
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// 模拟服务端 `DELETE /api/cart/{product_id}` 的语义：
    /// 只按 product_id 匹配，尺码/颜色不同的行会被一并移除。
    pub fn remove_product(&mut self, product_id: &str) {
        self.items.retain(|item| item.product_id != product_id);
    }
}

/// `POST /api/auth/google` 的请求体：授权码换会话。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleAuthRequest {
    pub code: String,
    pub redirect_uri: String,
}

/// `POST /api/auth/google` 的响应：外部 OAuth 交换完成后由回调页消费。
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub user: Profile,
    pub session_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_decodes_from_full_api_shape() {
        let json = r#"{
            "id": "p-1",
            "name": "Naruto Plush Character 1",
            "description": "Super soft and cuddly plush.",
            "category": "plushes",
            "subcategory": null,
            "images": ["https://img.example/a", "https://img.example/b"],
            "price": 18.49,
            "stock": 12,
            "dimensions": "9 inches tall",
            "material": "Premium polyester filling",
            "anime_series": "Naruto",
            "sizes": [],
            "colors": ["Original", "Pink"],
            "fit_type": null,
            "reviews": [],
            "popularity_score": 42,
            "created_at": "2024-06-01T12:00:00+00:00"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "p-1");
        assert_eq!(product.price, 18.49);
        assert_eq!(product.stock, 12);
        assert_eq!(product.anime_series.as_deref(), Some("Naruto"));
        assert_eq!(product.colors.len(), 2);
        assert!(product.created_at.is_some());
    }

    #[test]
    fn product_decodes_with_sparse_fields() {
        // The API omits fields that are irrelevant per category.
        let json = r#"{
            "id": "p-2",
            "name": "Figure",
            "description": "d",
            "category": "action-figures",
            "price": 49.99
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.stock, 0);
        assert!(product.sizes.is_empty());
        assert!(product.fit_type.is_none());
        assert!(product.created_at.is_none());
    }

    #[test]
    fn variant_lines_have_distinct_identity() {
        let black = CartItem {
            product_id: "p-1".into(),
            quantity: 1,
            selected_size: Some("M".into()),
            selected_color: Some("Black".into()),
            selected_fit: Some("regular".into()),
        };
        let white = CartItem {
            selected_color: Some("White".into()),
            ..black.clone()
        };
        assert_ne!(black.line_key(), white.line_key());

        // fit 不参与身份判定
        let oversized = CartItem {
            selected_fit: Some("oversized".into()),
            ..black.clone()
        };
        assert_eq!(black.line_key(), oversized.line_key());
    }

    #[test]
    fn total_quantity_sums_every_line() {
        let cart = Cart {
            items: vec![
                CartItem {
                    product_id: "a".into(),
                    quantity: 2,
                    selected_size: None,
                    selected_color: None,
                    selected_fit: None,
                },
                CartItem {
                    product_id: "b".into(),
                    quantity: 3,
                    selected_size: None,
                    selected_color: None,
                    selected_fit: None,
                },
            ],
        };
        assert_eq!(cart.total_quantity(), 5);
    }

    // Known server behavior, intentionally replicated rather than fixed:
    // removal is keyed by product id only, so a size-M and a size-L line of
    // the same shirt disappear together.
    #[test]
    fn remove_product_drops_all_variant_lines() {
        let mut cart = Cart {
            items: vec![
                CartItem {
                    product_id: "shirt".into(),
                    quantity: 1,
                    selected_size: Some("M".into()),
                    selected_color: Some("Black".into()),
                    selected_fit: None,
                },
                CartItem {
                    product_id: "shirt".into(),
                    quantity: 2,
                    selected_size: Some("L".into()),
                    selected_color: Some("White".into()),
                    selected_fit: None,
                },
                CartItem {
                    product_id: "plush".into(),
                    quantity: 1,
                    selected_size: None,
                    selected_color: None,
                    selected_fit: None,
                },
            ],
        };
        cart.remove_product("shirt");
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].product_id, "plush");
    }

    #[test]
    fn auth_response_ignores_unknown_fields() {
        let json = r#"{
            "user": {"id": "u-1", "email": "a@b.c", "name": "A", "picture": null},
            "session_token": "tok-123",
            "expires_at": "2024-06-08T12:00:00+00:00"
        }"#;
        let resp: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.session_token, "tok-123");
        assert_eq!(resp.user.name, "A");
    }
}

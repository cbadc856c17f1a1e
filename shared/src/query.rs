//! 商品查询参数构造与 URL 查询串解析
//!
//! `GET /api/products` 的筛选/排序参数在这里统一拼装，
//! 路由层解析查询串也走这里，保证编解码对称。

use serde::{Deserialize, Serialize};

/// 排序键。值与服务端 `sort_by` 参数一一对应。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
    Popularity,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Newest,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Popularity,
    ];

    /// 服务端接受的参数值。
    pub fn as_param(self) -> &'static str {
        match self {
            SortKey::Newest => "created_at",
            SortKey::PriceLow => "price_low",
            SortKey::PriceHigh => "price_high",
            SortKey::Popularity => "popularity",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_param() == value)
    }

    /// 筛选下拉框里的展示文案。
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Newest => "Newest",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Popularity => "Most Popular",
        }
    }
}

/// 一次商品列表查询。`None` 的字段不会出现在查询串里。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub anime_series: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<SortKey>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}

impl ProductQuery {
    pub fn for_category(category: &str, subcategory: Option<&str>) -> Self {
        Self {
            category: Some(category.to_string()),
            subcategory: subcategory.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn for_search(term: &str) -> Self {
        Self {
            search: Some(term.to_string()),
            ..Self::default()
        }
    }

    /// 拼装查询串（不含 `?`）。参数顺序固定，值做百分号编码。
    pub fn to_query_string(&self) -> String {
        let mut params: Vec<String> = Vec::new();
        let mut push = |key: &str, value: &str| {
            params.push(format!("{}={}", key, urlencoding::encode(value)));
        };
        if let Some(category) = &self.category {
            push("category", category);
        }
        if let Some(subcategory) = &self.subcategory {
            push("subcategory", subcategory);
        }
        if let Some(series) = &self.anime_series {
            push("anime_series", series);
        }
        if let Some(search) = &self.search {
            push("search", search);
        }
        if let Some(sort) = self.sort_by {
            push("sort_by", sort.as_param());
        }
        if let Some(min) = self.price_min {
            push("price_min", &min.to_string());
        }
        if let Some(max) = self.price_max {
            push("price_max", &max.to_string());
        }
        params.join("&")
    }
}

/// 解析 URL 查询串（可带或不带前导 `?`）为键值对。
/// `+` 按表单编码习惯还原为空格，其后再做百分号解码。
pub fn parse_query(raw: &str) -> Vec<(String, String)> {
    raw.trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

/// 取查询串中第一个匹配键的值。
pub fn query_param(raw: &str, key: &str) -> Option<String> {
    parse_query(raw)
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        // 非法编码原样保留，不让一个坏参数拖垮整个解析
        Err(_) => spaced,
    }
}

/// 规整搜索词：空白修剪后为空则返回 `None`（调用方应抑制导航），
/// 否则返回编码好的 `q=` 参数值。
pub fn search_query(term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(urlencoding::encode(trimmed).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_query_keeps_parameter_order() {
        let query = ProductQuery {
            category: Some("t-shirts".into()),
            subcategory: None,
            anime_series: Some("One Piece".into()),
            search: None,
            sort_by: Some(SortKey::PriceLow),
            price_min: Some(10.0),
            price_max: Some(49.5),
        };
        assert_eq!(
            query.to_query_string(),
            "category=t-shirts&anime_series=One%20Piece&sort_by=price_low&price_min=10&price_max=49.5"
        );
    }

    #[test]
    fn empty_query_builds_empty_string() {
        assert_eq!(ProductQuery::default().to_query_string(), "");
    }

    #[test]
    fn category_helper_carries_subcategory() {
        let query = ProductQuery::for_category("action-figures", Some("premium"));
        assert_eq!(
            query.to_query_string(),
            "category=action-figures&subcategory=premium"
        );
    }

    #[test]
    fn sort_key_params_round_trip() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_param(key.as_param()), Some(key));
        }
        assert_eq!(SortKey::from_param("bogus"), None);
    }

    #[test]
    fn parse_query_decodes_percent_and_plus() {
        let pairs = parse_query("?q=naruto%20hoodie&subcategory=premium&empty=");
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "naruto hoodie".to_string()),
                ("subcategory".to_string(), "premium".to_string()),
                ("empty".to_string(), String::new()),
            ]
        );
        assert_eq!(
            query_param("q=one+piece+figure", "q").as_deref(),
            Some("one piece figure")
        );
    }

    #[test]
    fn search_query_suppresses_blank_terms() {
        assert_eq!(search_query(""), None);
        assert_eq!(search_query("   "), None);
        assert_eq!(search_query("\t\n"), None);
    }

    #[test]
    fn search_query_round_trips_exactly() {
        let encoded = search_query("naruto hoodie").unwrap();
        assert_eq!(encoded, "naruto%20hoodie");
        let decoded = urlencoding::decode(&encoded).unwrap();
        assert_eq!(decoded, "naruto hoodie");
    }
}

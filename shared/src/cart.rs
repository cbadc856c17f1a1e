//! 购物车展示计算
//!
//! 合计与徽标数永远基于最新拉取的购物车加上解析到的商品价格重新计算，
//! 绝不沿用跨页面的本地算术结果。

use crate::{CartItem, Product};
use std::collections::HashMap;

/// 解析成功的购物车行：原始行加上按 id 找到的商品。
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item: CartItem,
    pub product: Product,
}

impl CartLine {
    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.item.quantity)
    }
}

/// 将购物车行与商品表按 id 连接。
/// 查不到商品的行被静默跳过：既不进列表也不计入合计。
pub fn resolve_lines(items: &[CartItem], products: &HashMap<String, Product>) -> Vec<CartLine> {
    items
        .iter()
        .filter_map(|item| {
            products.get(&item.product_id).map(|product| CartLine {
                item: item.clone(),
                product: product.clone(),
            })
        })
        .collect()
}

/// 合计 = Σ 价格 × 数量（仅解析成功的行）。
pub fn cart_total(lines: &[CartLine]) -> f64 {
    lines.iter().map(CartLine::subtotal).sum()
}

/// 数量选择器的夹取：结果始终落在 `[1, stock]`。
/// 库存为零时固定在 1，加号按钮等效于空操作。
pub fn clamp_quantity(desired: i64, stock: u32) -> u32 {
    if stock == 0 {
        return 1;
    }
    desired.clamp(1, i64::from(stock)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.into(),
            name: format!("Product {id}"),
            description: String::new(),
            category: "plushes".into(),
            subcategory: None,
            images: Vec::new(),
            price,
            stock: 10,
            dimensions: None,
            material: None,
            anime_series: None,
            sizes: Vec::new(),
            colors: Vec::new(),
            fit_type: None,
            popularity_score: 0,
            created_at: None,
        }
    }

    fn item(product_id: &str, quantity: u32) -> CartItem {
        CartItem {
            product_id: product_id.into(),
            quantity,
            selected_size: None,
            selected_color: None,
            selected_fit: None,
        }
    }

    #[test]
    fn unresolved_lines_are_skipped_and_contribute_zero() {
        let mut products = HashMap::new();
        products.insert("a".to_string(), product("a", 19.99));
        // "ghost" 已被下架，商品查询会失败
        let items = vec![item("a", 2), item("ghost", 5)];

        let lines = resolve_lines(&items, &products);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].item.product_id, "a");
        assert!((cart_total(&lines) - 39.98).abs() < 1e-9);
    }

    #[test]
    fn total_covers_variant_lines_of_one_product() {
        let mut products = HashMap::new();
        products.insert("shirt".to_string(), product("shirt", 25.0));
        let mut m = item("shirt", 1);
        m.selected_size = Some("M".into());
        let mut l = item("shirt", 3);
        l.selected_size = Some("L".into());

        let lines = resolve_lines(&[m, l], &products);
        assert_eq!(lines.len(), 2);
        assert!((cart_total(&lines) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_cart_totals_zero() {
        let lines = resolve_lines(&[], &HashMap::new());
        assert!(lines.is_empty());
        assert_eq!(cart_total(&lines), 0.0);
    }

    #[test]
    fn quantity_never_leaves_valid_range() {
        assert_eq!(clamp_quantity(0, 5), 1);
        assert_eq!(clamp_quantity(-3, 5), 1);
        assert_eq!(clamp_quantity(3, 5), 3);
        assert_eq!(clamp_quantity(6, 5), 5);
    }

    #[test]
    fn zero_stock_pins_quantity_at_floor() {
        // 加号在库存为零时是空操作：1 + 1 仍然是 1
        assert_eq!(clamp_quantity(2, 0), 1);
        assert_eq!(clamp_quantity(1, 0), 1);
    }
}

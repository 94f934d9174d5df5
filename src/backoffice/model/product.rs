use super::{merge, Record, RecordId, RecordKind, RecordPatch};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub discount_percentage: f64,
    pub rating: f64,
    pub stock: u32,
    pub brand: String,
    pub category: String,
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: u32,
    pub brand: String,
    pub category: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Partial product update. `id` selects the product; every other field is
/// applied only when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(default)]
    pub id: RecordId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl ProductPatch {
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn stock(mut self, stock: u32) -> Self {
        self.stock = Some(stock);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl RecordPatch for ProductPatch {
    fn target(&self) -> RecordId {
        self.id
    }

    fn retarget(&mut self, id: RecordId) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingTier {
    Good,
    Fair,
    Poor,
}

impl Product {
    pub fn stock_level(&self) -> StockLevel {
        match self.stock {
            s if s > 50 => StockLevel::High,
            s if s > 20 => StockLevel::Medium,
            _ => StockLevel::Low,
        }
    }

    pub fn rating_tier(&self) -> RatingTier {
        if self.rating >= 4.0 {
            RatingTier::Good
        } else if self.rating >= 3.0 {
            RatingTier::Fair
        } else {
            RatingTier::Poor
        }
    }

    /// Price after applying `discount_percentage`.
    pub fn discounted_price(&self) -> f64 {
        self.price * (1.0 - self.discount_percentage / 100.0)
    }
}

impl Record for Product {
    type New = NewProduct;
    type Patch = ProductPatch;

    const KIND: RecordKind = RecordKind::Product;

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn build(id: RecordId, payload: NewProduct, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: payload.title,
            description: payload.description,
            price: payload.price,
            discount_percentage: payload.discount_percentage,
            rating: payload.rating,
            stock: payload.stock,
            brand: payload.brand,
            category: payload.category,
            thumbnail: payload.thumbnail,
            images: payload.images,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: ProductPatch, now: DateTime<Utc>) {
        merge(&mut self.title, patch.title);
        merge(&mut self.description, patch.description);
        merge(&mut self.price, patch.price);
        merge(&mut self.discount_percentage, patch.discount_percentage);
        merge(&mut self.rating, patch.rating);
        merge(&mut self.stock, patch.stock);
        merge(&mut self.brand, patch.brand);
        merge(&mut self.category, patch.category);
        merge(&mut self.thumbnail, patch.thumbnail);
        merge(&mut self.images, patch.images);
        self.updated_at = now;
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.title.as_str()),
            Cow::Borrowed(self.description.as_str()),
            Cow::Borrowed(self.brand.as_str()),
        ]
    }

    fn label(&self) -> String {
        self.title.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn payload() -> NewProduct {
        NewProduct {
            title: "Pixel 8".into(),
            description: "Google phone".into(),
            price: 699.0,
            discount_percentage: 10.0,
            rating: 4.2,
            stock: 12,
            brand: "Google".into(),
            category: "smartphones".into(),
            thumbnail: String::new(),
            images: vec![],
        }
    }

    #[test]
    fn build_stamps_both_timestamps() {
        let now = Utc::now();
        let product = Product::build(7, payload(), now);
        assert_eq!(product.id, 7);
        assert_eq!(product.created_at, now);
        assert_eq!(product.updated_at, now);
        assert_eq!(product.title, "Pixel 8");
    }

    #[test]
    fn apply_merges_present_fields_only() {
        let created = Utc::now();
        let mut product = Product::build(1, payload(), created);
        let later = created + Duration::seconds(5);

        product.apply(ProductPatch::new(1).price(999.0), later);

        assert_eq!(product.price, 999.0);
        assert_eq!(product.title, "Pixel 8");
        assert_eq!(product.stock, 12);
        assert_eq!(product.created_at, created);
        assert_eq!(product.updated_at, later);
    }

    #[test]
    fn derived_indicators() {
        let mut product = Product::build(1, payload(), Utc::now());
        assert_eq!(product.stock_level(), StockLevel::Low);
        assert_eq!(product.rating_tier(), RatingTier::Good);
        assert!((product.discounted_price() - 629.1).abs() < 1e-9);

        product.stock = 51;
        product.rating = 3.0;
        assert_eq!(product.stock_level(), StockLevel::High);
        assert_eq!(product.rating_tier(), RatingTier::Fair);

        product.stock = 21;
        product.rating = 2.9;
        assert_eq!(product.stock_level(), StockLevel::Medium);
        assert_eq!(product.rating_tier(), RatingTier::Poor);
    }

    #[test]
    fn patch_deserializes_without_id() {
        let patch: ProductPatch = serde_json::from_str(r#"{"price": 999}"#).unwrap();
        assert_eq!(patch.id, 0);
        assert_eq!(patch.price, Some(999.0));
        assert!(patch.title.is_none());
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let product = Product::build(3, payload(), Utc::now());
        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("discountPercentage").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("discount_percentage").is_none());
    }
}

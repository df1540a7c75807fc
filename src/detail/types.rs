//! Detail API payloads and the normalized output record

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// `PromoPrice` value meaning "no promotion"
pub const NO_PROMOTION: i64 = -1;

/// One element of the partner API response
///
/// Every field is required; a missing one fails decoding.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawItem {
    #[serde(deserialize_with = "text_field")]
    pub item_id: String,
    #[serde(deserialize_with = "text_field")]
    pub name: String,
    #[serde(deserialize_with = "text_field")]
    pub url: String,
    /// Currently listed price
    pub price: Number,
    /// Pre-discount price, `0` when there is no promotion
    pub old_price: Number,
    #[serde(deserialize_with = "text_field")]
    pub vendor: String,
}

/// Normalized product entry, one CSV row
///
/// Field order here is the column order of the output table. Prices keep
/// the textual form the API sent, so `100` is written as `100`, not `100.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRecord {
    #[serde(rename = "ItemId")]
    pub identifier: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Url")]
    pub url: String,
    /// Regular price
    #[serde(rename = "Price")]
    pub price: Number,
    /// Discounted price or `NO_PROMOTION`
    #[serde(rename = "PromoPrice")]
    pub promo_price: Number,
    #[serde(rename = "Brand")]
    pub brand: String,
}

impl DetailRecord {
    pub fn has_promotion(&self) -> bool {
        self.promo_price.as_i64() != Some(NO_PROMOTION)
    }
}

impl From<RawItem> for DetailRecord {
    /// The API reports a promotion as `Price` = discounted, `OldPrice` =
    /// regular. Without one, `OldPrice` is `0` and `Price` is regular.
    fn from(item: RawItem) -> Self {
        let (price, promo_price) = if is_zero(&item.old_price) {
            (item.price, Number::from(NO_PROMOTION))
        } else {
            (item.old_price, item.price)
        };

        Self {
            identifier: item.item_id,
            name: item.name,
            url: item.url,
            price,
            promo_price,
            brand: item.vendor,
        }
    }
}

/// `0`, `0.0` and `-0.0` all mean "no old price"
fn is_zero(value: &Number) -> bool {
    value.as_f64() == Some(0.0)
}

/// Accepts a string, a number, or null for a textual field
///
/// The API emits `ItemId` as a number for some partners and a string for
/// others.
fn text_field<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

//! 共有データ型
//!
//! - InventoryItem: インベントリから抽出した売却候補
//! - AuctionItem: レビューシートの1行（価格・除外フラグ付き）
//! - AuctionSheet: レビューシート全体

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 価格が不明な場合の表記
pub const UNKNOWN_PRICE: &str = "unknown";

/// オークション価格
///
/// JSONでは数値、または文字列 `"unknown"` として表現する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawPrice", into = "RawPrice")]
pub enum Price {
    Known(u64),
    #[default]
    Unknown,
}

impl Price {
    pub fn is_known(&self) -> bool {
        matches!(self, Price::Known(_))
    }

    pub fn value(&self) -> Option<u64> {
        match self {
            Price::Known(v) => Some(*v),
            Price::Unknown => None,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Known(v) => write!(f, "{}", v),
            Price::Unknown => write!(f, "{}", UNKNOWN_PRICE),
        }
    }
}

impl FromStr for Price {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == "?" || trimmed.eq_ignore_ascii_case(UNKNOWN_PRICE) {
            return Ok(Price::Unknown);
        }
        trimmed
            .parse::<u64>()
            .map(Price::Known)
            .map_err(|_| Error::Parse(format!("価格が数値ではありません: {}", trimmed)))
    }
}

/// シリアライズ用の中間表現
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(u64),
    Text(String),
}

impl TryFrom<RawPrice> for Price {
    type Error = Error;

    fn try_from(raw: RawPrice) -> Result<Self> {
        match raw {
            RawPrice::Number(v) => Ok(Price::Known(v)),
            RawPrice::Text(s) => s.parse(),
        }
    }
}

impl From<Price> for RawPrice {
    fn from(price: Price) -> Self {
        match price {
            Price::Known(v) => RawPrice::Number(v),
            Price::Unknown => RawPrice::Text(UNKNOWN_PRICE.to_string()),
        }
    }
}

/// インベントリから抽出した売却候補
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InventoryItem {
    pub name: String,
    pub id: String,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}

/// レビューシートの1行
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionItem {
    pub name: String,

    pub id: String,

    #[serde(default)]
    pub price: Price,

    #[serde(default)]
    pub excluded: bool,
}

impl AuctionItem {
    pub fn from_inventory(item: &InventoryItem, price: Price) -> Self {
        Self {
            name: item.name.clone(),
            id: item.id.clone(),
            price,
            excluded: false,
        }
    }
}

/// レビューシート
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionSheet {
    /// 取り込み日時（RFC3339）
    #[serde(default)]
    pub imported_at: String,

    #[serde(default)]
    pub items: Vec<AuctionItem>,
}

impl AuctionSheet {
    pub fn new(imported_at: impl Into<String>, items: Vec<AuctionItem>) -> Self {
        Self {
            imported_at: imported_at.into(),
            items,
        }
    }

    /// 除外されていない行
    pub fn included(&self) -> impl Iterator<Item = &AuctionItem> {
        self.items.iter().filter(|i| !i.excluded)
    }

    /// 除外された行の名前
    pub fn excluded_names(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|i| i.excluded)
            .map(|i| i.name.clone())
            .collect()
    }
}

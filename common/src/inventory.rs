//! Zealインベントリ出力のパーサー
//!
//! タブ区切り: `Location  Name  ID  Count  Slots`
//! 売却対象になるのはスタックされていない単品（Slots < 1）のみ。

use crate::types::InventoryItem;
use std::collections::HashSet;

/// 売却対象外の名前の接頭辞
pub const RESERVED_PREFIXES: &[&str] = &["Nili", "Word", "Sali", "Part"];

/// 売却対象外の名前
pub const PLACEHOLDER_NAMES: &[&str] = &["Currency", "Empty"];

const COL_LOCATION: usize = 0;
const COL_NAME: usize = 1;
const COL_ID: usize = 2;
const COL_SLOTS: usize = 4;

/// 行の判定結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowVerdict {
    Sellable(InventoryItem),
    Skipped(SkipReason),
}

/// 除外理由
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Malformed,
    Excluded,
    Header,
    Bank,
    Placeholder,
    InvalidSlots(String),
    Stacked,
    Reserved,
}

/// 除外リストに該当するか
///
/// 除外エントリがアイテム名を含んでいれば該当（大文字小文字を区別）。
pub fn is_excluded(name: &str, exclusions: &[String]) -> bool {
    !name.is_empty() && exclusions.iter().any(|entry| entry.contains(name))
}

/// 1行を判定
pub fn classify_row(line: &str, exclusions: &[String]) -> RowVerdict {
    let cols: Vec<&str> = line.trim_end_matches(['\r', '\n']).split('\t').collect();
    if cols.len() <= COL_SLOTS {
        return RowVerdict::Skipped(SkipReason::Malformed);
    }

    let location = cols[COL_LOCATION];
    let name = cols[COL_NAME];

    if is_excluded(name, exclusions) {
        return RowVerdict::Skipped(SkipReason::Excluded);
    }
    if location == "Location" {
        return RowVerdict::Skipped(SkipReason::Header);
    }
    if location.starts_with("Bank") {
        return RowVerdict::Skipped(SkipReason::Bank);
    }
    if name.trim().is_empty() || PLACEHOLDER_NAMES.contains(&name) {
        return RowVerdict::Skipped(SkipReason::Placeholder);
    }

    let slots_raw = cols[COL_SLOTS].trim();
    match slots_raw.parse::<i64>() {
        Ok(slots) if slots >= 1 => return RowVerdict::Skipped(SkipReason::Stacked),
        Ok(_) => {}
        Err(_) => return RowVerdict::Skipped(SkipReason::InvalidSlots(slots_raw.to_string())),
    }

    if RESERVED_PREFIXES.iter().any(|p| name.starts_with(p)) {
        return RowVerdict::Skipped(SkipReason::Reserved);
    }

    RowVerdict::Sellable(InventoryItem::new(name, cols[COL_ID].trim()))
}

/// インベントリ全体から売却候補を抽出（重複は先頭のみ残す）
pub fn parse_inventory(content: &str, exclusions: &[String]) -> Vec<InventoryItem> {
    let mut seen = HashSet::new();
    content
        .lines()
        .filter_map(|line| match classify_row(line, exclusions) {
            RowVerdict::Sellable(item) => Some(item),
            RowVerdict::Skipped(_) => None,
        })
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

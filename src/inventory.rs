use crate::error::{AuctionBuilderError, Result};
use auction_builder_common::inventory::{classify_row, RowVerdict, SkipReason};
use auction_builder_common::InventoryItem;
use std::collections::HashSet;
use std::path::Path;

/// Zealのインベントリ出力を読み込み、売却候補を抽出
pub fn load_inventory(path: &Path, exclusions: &[String]) -> Result<Vec<InventoryItem>> {
    if !path.exists() {
        return Err(AuctionBuilderError::MissingFile(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let mut seen = HashSet::new();
    let mut items = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        match classify_row(line, exclusions) {
            RowVerdict::Sellable(item) => {
                if seen.insert(item.clone()) {
                    items.push(item);
                }
            }
            RowVerdict::Skipped(SkipReason::InvalidSlots(value)) => {
                tracing::warn!(line = line_no + 1, value = %value, "Slots列が数値ではないため無視");
            }
            RowVerdict::Skipped(SkipReason::Malformed) if !line.trim().is_empty() => {
                tracing::debug!(line = line_no + 1, "列数不足の行を無視");
            }
            RowVerdict::Skipped(reason) => {
                tracing::trace!(line = line_no + 1, ?reason, "対象外");
            }
        }
    }

    tracing::debug!(path = %path.display(), count = items.len(), "インベントリ読み込み完了");
    Ok(items)
}

//! オークションマクロ行の生成
//!
//! ```text
//! Page1Button3Name=Auction3
//! Page1Button3Color=0
//! Page1Button3Line1=/auction WTS 013073 Bone Chips 50, 007007 Rusty Dagger 100, ...
//! ```

use crate::error::{Error, Result};
use crate::layout::{
    HotkeySlot, AUCTION_COMMAND, BUTTON_NAME_PREFIX, ID_WIDTH, ITEMS_PER_BUTTON,
    ITEMS_PER_LINE, ITEM_SEPARATOR,
};
use crate::types::AuctionItem;

/// アイテムIDを6桁にゼロ埋め
///
/// # Examples
/// ```
/// use auction_builder_common::normalize_id;
///
/// assert_eq!(normalize_id("12345").unwrap(), "012345");
/// assert_eq!(normalize_id("123456").unwrap(), "123456");
/// ```
pub fn normalize_id(id: &str) -> Result<String> {
    let trimmed = id.trim();
    if trimmed.is_empty() || trimmed.len() > ID_WIDTH || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::Parse(format!(
            "アイテムIDは{}桁以内の数字である必要があります: {:?}",
            ID_WIDTH, id
        )));
    }
    Ok(format!("{:0>width$}", trimmed, width = ID_WIDTH))
}

/// 必要なボタン数
pub fn button_count(item_count: usize) -> usize {
    item_count.div_ceil(ITEMS_PER_BUTTON)
}

/// マクロ行の1アイテム分
pub fn format_entry(item: &AuctionItem) -> Result<String> {
    Ok(format!("{} {} {}", normalize_id(&item.id)?, item.name, item.price))
}

pub fn name_line(slot: &HotkeySlot, button: u32) -> String {
    format!("Page{}Button{}Name={}{}", slot.page, button, BUTTON_NAME_PREFIX, button)
}

pub fn color_line(slot: &HotkeySlot, button: u32) -> String {
    format!("Page{}Button{}Color=0", slot.page, button)
}

/// マクロ行を生成
///
/// 渡されたアイテムはすべて出力する（除外済みの行は呼び出し側で取り除く）。
/// ボタンは `slot.button` から連番で増え、各ボタンは名前行・色行の後に
/// 最大5行（1行6アイテム）を持つ。
pub fn build_macro_lines(items: &[AuctionItem], slot: &HotkeySlot) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    for (button_offset, button_items) in items.chunks(ITEMS_PER_BUTTON).enumerate() {
        let button = slot.nth_button(button_offset)?;
        lines.push(name_line(slot, button));
        lines.push(color_line(slot, button));

        for (line_idx, line_items) in button_items.chunks(ITEMS_PER_LINE).enumerate() {
            let entries = line_items
                .iter()
                .map(format_entry)
                .collect::<Result<Vec<_>>>()?;
            lines.push(format!(
                "Page{}Button{}Line{}={}{}",
                slot.page,
                button,
                line_idx + 1,
                AUCTION_COMMAND,
                entries.join(ITEM_SEPARATOR)
            ));
        }
    }

    Ok(lines)
}

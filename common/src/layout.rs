//! マクロ配置の定数とホットキー位置
//!
//! EverQuestのソーシャルボタン1つには5行のマクロを登録でき、
//! 1行には6アイテムまで並べる。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 1行あたりのアイテム数
pub const ITEMS_PER_LINE: usize = 6;

/// 1ボタンあたりの行数
pub const LINES_PER_BUTTON: usize = 5;

/// 1ボタンあたりのアイテム数
pub const ITEMS_PER_BUTTON: usize = ITEMS_PER_LINE * LINES_PER_BUTTON;

/// アイテムIDの桁数
pub const ID_WIDTH: usize = 6;

/// ボタン名の接頭辞（`Name=Auction3` など）
pub const BUTTON_NAME_PREFIX: &str = "Auction";

/// マクロ行の先頭コマンド
pub const AUCTION_COMMAND: &str = "/auction WTS ";

/// アイテム間の区切り
pub const ITEM_SEPARATOR: &str = ", ";

/// ソーシャルボタンのページ数
pub const SOCIAL_PAGES: u32 = 10;

/// 1ページあたりのボタン数
pub const BUTTONS_PER_PAGE: u32 = 12;

/// 生成マクロの開始位置（ページ・ボタン）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotkeySlot {
    pub page: u32,
    pub button: u32,
}

impl HotkeySlot {
    pub fn new(page: u32, button: u32) -> Self {
        Self { page, button }
    }

    /// 開始位置から `offset` 個目のボタン番号
    pub fn nth_button(&self, offset: usize) -> Result<u32> {
        u32::try_from(offset)
            .ok()
            .and_then(|offset| self.button.checked_add(offset))
            .ok_or_else(|| {
                Error::Parse(format!(
                    "ボタン番号が範囲外です: Button{}から{}個目",
                    self.button, offset
                ))
            })
    }

    /// `buttons` 個のボタンを生成したときの最終ボタン番号
    pub fn last_button(&self, buttons: usize) -> Result<u32> {
        self.nth_button(buttons.max(1) - 1)
    }

    /// この位置から `buttons` 個を生成するとき、ボタン `button` が範囲内か
    pub fn covers(&self, page: u32, button: u32, buttons: usize) -> bool {
        buttons > 0
            && page == self.page
            && button >= self.button
            // 番号が溢れる範囲は上限なしとみなす
            && self.last_button(buttons).map_or(true, |last| button <= last)
    }
}

impl Default for HotkeySlot {
    fn default() -> Self {
        Self { page: 1, button: 1 }
    }
}

impl fmt::Display for HotkeySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page{}Button{}", self.page, self.button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_per_button() {
        assert_eq!(ITEMS_PER_BUTTON, 30);
    }

    #[test]
    fn test_covers_range() {
        let slot = HotkeySlot::new(2, 3);
        assert!(slot.covers(2, 3, 2));
        assert!(slot.covers(2, 4, 2));
        assert!(!slot.covers(2, 5, 2));
        assert!(!slot.covers(2, 2, 2));
        assert!(!slot.covers(1, 3, 2));
        assert!(!slot.covers(2, 3, 0));
    }

    #[test]
    fn test_last_button() {
        let slot = HotkeySlot::new(1, 4);
        assert_eq!(slot.last_button(0).unwrap(), 4);
        assert_eq!(slot.last_button(1).unwrap(), 4);
        assert_eq!(slot.last_button(3).unwrap(), 6);
    }

    #[test]
    fn test_last_button_overflow_is_error() {
        let slot = HotkeySlot::new(1, u32::MAX);
        assert_eq!(slot.last_button(1).unwrap(), u32::MAX);
        assert!(matches!(slot.last_button(2), Err(Error::Parse(_))));
        assert!(slot.covers(1, u32::MAX, 2));
        assert!(!slot.covers(1, u32::MAX - 1, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(HotkeySlot::new(1, 10).to_string(), "Page1Button10");
    }
}

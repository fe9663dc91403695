//! Auction Builder Common Library
//!
//! CLIから使う入出力なしのロジック:
//! インベントリ抽出・価格集計・マクロ行生成・iniファイルの再構成

pub mod types;
pub mod layout;
pub mod error;
pub mod pricing;
pub mod auction_page;
pub mod inventory;
pub mod macro_builder;
pub mod ini;
pub mod settings;
pub mod export;

pub use types::{AuctionItem, AuctionSheet, InventoryItem, Price, UNKNOWN_PRICE};
pub use layout::HotkeySlot;
pub use error::{Error, Result};
pub use pricing::{aggregate_price, round_up_to_step};
pub use auction_page::{auction_query_name, extract_samples};
pub use inventory::{is_excluded, parse_inventory};
pub use macro_builder::{build_macro_lines, button_count, normalize_id};
pub use ini::{LineEnding, MacroFile};
pub use settings::{parse_legacy_settings, LegacySettings};

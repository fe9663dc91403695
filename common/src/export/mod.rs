//! Export core modules shared by the CLI.

/// レビューシートのシート名
pub const SHEET_NAME: &str = "Auctions";

/// レビューシートの列見出し
pub const SHEET_HEADERS: [&str; 4] = ["Item", "ID", "Price", "Exclude"];

#[cfg(feature = "excel")]
pub mod sheet_core;

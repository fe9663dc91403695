//! レビューシートの読み書き
//!
//! 拡張子で形式を切り替える:
//! - `.json`: serde_json（整形出力）
//! - `.xlsx`: 表計算ソフトで確認・編集する用

use crate::error::{AuctionBuilderError, Result};
use auction_builder_common::export::{sheet_core, SHEET_HEADERS, SHEET_NAME};
use auction_builder_common::{AuctionItem, AuctionSheet, Price};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::{Path, PathBuf};

pub const DEFAULT_SHEET_FILE: &str = "auction-sheet.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Json,
    Xlsx,
}

impl SheetFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(SheetFormat::Json),
            "xlsx" => Ok(SheetFormat::Xlsx),
            _ => Err(AuctionBuilderError::InvalidConfiguration(format!(
                "シートの拡張子は .json か .xlsx にしてください: {}",
                path.display()
            ))),
        }
    }
}

pub fn default_sheet_path() -> PathBuf {
    PathBuf::from(DEFAULT_SHEET_FILE)
}

pub fn save_sheet(path: &Path, sheet: &AuctionSheet) -> Result<()> {
    match SheetFormat::from_path(path)? {
        SheetFormat::Json => {
            let content = serde_json::to_string_pretty(sheet)?;
            std::fs::write(path, content)?;
        }
        SheetFormat::Xlsx => {
            let buffer = sheet_core::generate_sheet_buffer(&sheet.items)
                .map_err(AuctionBuilderError::Spreadsheet)?;
            std::fs::write(path, buffer)?;
        }
    }
    tracing::debug!(path = %path.display(), rows = sheet.items.len(), "シート保存");
    Ok(())
}

pub fn load_sheet(path: &Path) -> Result<AuctionSheet> {
    let format = SheetFormat::from_path(path)?;
    if !path.exists() {
        return Err(AuctionBuilderError::MissingFile(path.display().to_string()));
    }

    match format {
        SheetFormat::Json => {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        }
        SheetFormat::Xlsx => load_xlsx(path),
    }
}

fn load_xlsx(path: &Path) -> Result<AuctionSheet> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| AuctionBuilderError::Spreadsheet(format!("Excelを開けません: {}", e)))?;

    let names = workbook.sheet_names().to_vec();
    let sheet_name = names
        .iter()
        .find(|name| name.as_str() == SHEET_NAME)
        .or_else(|| names.first())
        .cloned()
        .ok_or_else(|| AuctionBuilderError::Spreadsheet("シートがありません".into()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| AuctionBuilderError::Spreadsheet(format!("シート読み込みエラー: {}", e)))?;

    Ok(AuctionSheet::new(String::new(), rows_to_items(&range)?))
}

fn rows_to_items(range: &Range<Data>) -> Result<Vec<AuctionItem>> {
    let mut items = Vec::new();

    for (row_idx, row) in range.rows().enumerate() {
        let name = cell_text(row.first());
        if row_idx == 0 && name == SHEET_HEADERS[0] {
            continue;
        }
        if name.is_empty() {
            continue;
        }

        let price_text = cell_text(row.get(2));
        let price = price_text.parse::<Price>().map_err(|_| {
            AuctionBuilderError::Spreadsheet(format!(
                "{}行目: 価格が不正です: {:?}",
                row_idx + 1,
                price_text
            ))
        })?;

        items.push(AuctionItem {
            name,
            id: cell_text(row.get(1)),
            price,
            excluded: cell_flag(row.get(3)),
        });
    }

    Ok(items)
}

fn cell_text(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) => String::new(),
        Some(Data::String(s)) => s.trim().to_string(),
        // Excelで数値化されたID・価格は小数点なしで戻す
        Some(Data::Float(f)) if f.fract() == 0.0 => format!("{}", *f as i64),
        Some(Data::Int(i)) => i.to_string(),
        Some(other) => other.to_string().trim().to_string(),
    }
}

fn cell_flag(cell: Option<&Data>) -> bool {
    match cell {
        Some(Data::Bool(b)) => *b,
        Some(Data::Int(i)) => *i != 0,
        Some(Data::Float(f)) => *f != 0.0,
        Some(Data::String(s)) => matches!(
            s.trim().to_lowercase().as_str(),
            "true" | "yes" | "y" | "x" | "1"
        ),
        _ => false,
    }
}

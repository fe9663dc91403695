//! レビューシートExcel生成（共通ライブラリ）
//!
//! 1行目が見出し、2行目以降が `Item | ID | Price | Exclude`。

use super::{SHEET_HEADERS, SHEET_NAME};
use crate::types::{AuctionItem, Price};
use rust_xlsxwriter::*;

/// 列幅（px）
const COLUMN_WIDTHS: [u32; 4] = [220, 70, 70, 60];

/// レビューシートをバッファに生成
pub fn generate_sheet_buffer(items: &[AuctionItem]) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)
        .map_err(|e| format!("シート名設定エラー: {}", e))?;

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width_pixels(col as u16, *width)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
    }

    for (col, header) in SHEET_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| format!("見出し書き込みエラー: {}", e))?;
    }
    worksheet.set_freeze_panes(1, 0)
        .map_err(|e| format!("ウィンドウ枠固定エラー: {}", e))?;

    for (idx, item) in items.iter().enumerate() {
        let row = idx as u32 + 1;
        worksheet.write_string(row, 0, &item.name)
            .map_err(|e| format!("値書き込みエラー: {}", e))?;
        // IDは先頭ゼロを保つため文字列で書く
        worksheet.write_string(row, 1, &item.id)
            .map_err(|e| format!("値書き込みエラー: {}", e))?;
        match item.price {
            Price::Known(v) => worksheet.write_number(row, 2, v as f64),
            Price::Unknown => worksheet.write_string(row, 2, crate::types::UNKNOWN_PRICE),
        }
        .map_err(|e| format!("値書き込みエラー: {}", e))?;
        worksheet.write_boolean(row, 3, item.excluded)
            .map_err(|e| format!("値書き込みエラー: {}", e))?;
    }

    workbook.save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}

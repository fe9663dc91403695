pub mod writer;

use crate::error::{AuctionBuilderError, Result};
use auction_builder_common::{
    build_macro_lines, button_count, is_excluded, AuctionItem, HotkeySlot, MacroFile,
};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    /// ファイルを書き換えずに結果だけ返す
    pub dry_run: bool,
}

/// エクスポート結果
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    pub exported: usize,
    /// 除外された行の名前（除外リストへの追加候補）
    pub excluded_names: Vec<String>,
    pub buttons: usize,
    pub first_button: u32,
    pub last_button: u32,
    /// 削除した既存行の数
    pub replaced_lines: usize,
    /// 追加したマクロ行
    pub lines: Vec<String>,
}

/// 設定の除外リストに該当する行を除外扱いにし、新たに除外した件数を返す
pub fn apply_config_exclusions(items: &mut [AuctionItem], exclusions: &[String]) -> usize {
    let mut marked = 0;
    for item in items.iter_mut().filter(|i| !i.excluded) {
        if is_excluded(&item.name, exclusions) {
            item.excluded = true;
            marked += 1;
        }
    }
    marked
}

/// 除外されていない行をマクロ化（ファイルには触れない）
pub fn preview_macros(items: &[AuctionItem], slot: &HotkeySlot) -> Result<Vec<String>> {
    let included: Vec<AuctionItem> = items.iter().filter(|i| !i.excluded).cloned().collect();
    if included.is_empty() {
        return Err(AuctionBuilderError::NoData);
    }
    Ok(build_macro_lines(&included, slot)?)
}

/// キャラクターiniへオークションマクロを書き込む
///
/// 以前に生成したマクロ行と、今回のボタン範囲にある行を取り除いてから
/// 新しい行をファイル末尾に追加する。
pub fn export_macros(
    items: &[AuctionItem],
    ini_path: &Path,
    slot: &HotkeySlot,
    options: &ExportOptions,
) -> Result<ExportSummary> {
    if !ini_path.exists() {
        return Err(AuctionBuilderError::MissingFile(ini_path.display().to_string()));
    }
    if items.is_empty() {
        return Err(AuctionBuilderError::NoData);
    }

    let (included, excluded): (Vec<AuctionItem>, Vec<AuctionItem>) =
        items.iter().cloned().partition(|i| !i.excluded);
    if included.is_empty() {
        return Err(AuctionBuilderError::NoData);
    }

    let buttons = button_count(included.len());
    let last_button = slot.last_button(buttons)?;
    let lines = build_macro_lines(&included, slot)?;

    let content = std::fs::read_to_string(ini_path)?;
    let file = MacroFile::parse(&content, slot, buttons);
    tracing::debug!(
        preserved = file.preserved().len(),
        replaced = file.replaced().len(),
        "ini解析"
    );

    if options.dry_run {
        tracing::info!(path = %ini_path.display(), "dry-run: ファイルは変更しません");
    } else {
        writer::write_atomic(ini_path, &file.render(&lines))?;
    }

    Ok(ExportSummary {
        exported: included.len(),
        excluded_names: excluded.into_iter().map(|i| i.name).collect(),
        buttons,
        first_button: slot.button,
        last_button,
        replaced_lines: file.replaced().len(),
        lines,
    })
}

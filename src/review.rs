//! 対話式レビューモジュール
//!
//! インポートしたシートを確認し、出品しないアイテムの除外と
//! 価格不明アイテムの価格入力を行う。

use crate::error::{AuctionBuilderError, Result};
use crate::sheet::{load_sheet, save_sheet};
use auction_builder_common::{AuctionItem, AuctionSheet, Price};
use dialoguer::{Confirm, Input, MultiSelect};
use std::path::Path;

/// レビュー結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewStats {
    pub excluded: usize,
    pub priced: usize,
}

/// 選択肢の表示文字列
pub fn row_label(item: &AuctionItem) -> String {
    format!("{:<36} {:>6}  {}", item.name, item.id, item.price)
}

/// 選択された行だけを除外にする
pub fn apply_exclusions(items: &mut [AuctionItem], selected: &[usize]) -> usize {
    for (idx, item) in items.iter_mut().enumerate() {
        item.excluded = selected.contains(&idx);
    }
    items.iter().filter(|i| i.excluded).count()
}

/// 価格不明かつ除外されていない行
pub fn unknown_price_rows(items: &[AuctionItem]) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, i)| !i.excluded && !i.price.is_known())
        .map(|(idx, _)| idx)
        .collect()
}

/// シートファイルを対話式でレビュー
pub fn run_interactive_review(input_path: &Path, output_path: Option<&Path>) -> Result<()> {
    let mut sheet = load_sheet(input_path)?;

    if sheet.items.is_empty() {
        println!("シートに行がありません");
        return Ok(());
    }

    let stats = review_sheet(&mut sheet)?;

    let output = output_path.unwrap_or(input_path);
    save_sheet(output, &sheet)?;

    println!(
        "\n✓ 保存しました: {} (除外 {}件 / 価格入力 {}件)",
        output.display(),
        stats.excluded,
        stats.priced
    );
    Ok(())
}

/// メモリ上のシートを対話式でレビュー
pub fn review_sheet(sheet: &mut AuctionSheet) -> Result<ReviewStats> {
    let labels: Vec<String> = sheet.items.iter().map(row_label).collect();
    let defaults: Vec<bool> = sheet.items.iter().map(|i| i.excluded).collect();

    let selected = MultiSelect::new()
        .with_prompt("除外するアイテムを選択 (Space:切替 Enter:確定)")
        .items(&labels)
        .defaults(&defaults)
        .interact()
        .map_err(prompt_error)?;

    let mut stats = ReviewStats {
        excluded: apply_exclusions(&mut sheet.items, &selected),
        priced: 0,
    };

    let unknown = unknown_price_rows(&sheet.items);
    if unknown.is_empty() {
        return Ok(stats);
    }

    let edit = Confirm::new()
        .with_prompt(format!("価格不明のアイテムが{}件あります。価格を入力しますか?", unknown.len()))
        .default(false)
        .interact()
        .map_err(prompt_error)?;
    if !edit {
        return Ok(stats);
    }

    println!("空Enterで unknown のまま");
    for (count, &idx) in unknown.iter().enumerate() {
        let input: String = Input::new()
            .with_prompt(format!("[{}/{}] {}", count + 1, unknown.len(), sheet.items[idx].name))
            .allow_empty(true)
            .validate_with(|s: &String| -> std::result::Result<(), String> {
                s.parse::<Price>().map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text()
            .map_err(prompt_error)?;

        let price: Price = input.parse()?;
        if price.is_known() {
            sheet.items[idx].price = price;
            stats.priced += 1;
        }
    }

    Ok(stats)
}

fn prompt_error(e: dialoguer::Error) -> AuctionBuilderError {
    AuctionBuilderError::Prompt(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<AuctionItem> {
        vec![
            AuctionItem { name: "Bone Chips".into(), id: "13073".into(), price: Price::Known(50), excluded: false },
            AuctionItem { name: "Rusty Dagger".into(), id: "7007".into(), price: Price::Unknown, excluded: true },
            AuctionItem { name: "Cloth Cap".into(), id: "1001".into(), price: Price::Unknown, excluded: false },
        ]
    }

    #[test]
    fn test_apply_exclusions_replaces_flags() {
        let mut rows = items();
        let count = apply_exclusions(&mut rows, &[0]);
        assert_eq!(count, 1);
        assert!(rows[0].excluded);
        assert!(!rows[1].excluded);
        assert!(!rows[2].excluded);
    }

    #[test]
    fn test_unknown_price_rows_skip_excluded() {
        assert_eq!(unknown_price_rows(&items()), vec![2]);
    }

    #[test]
    fn test_row_label() {
        let label = row_label(&items()[0]);
        assert!(label.starts_with("Bone Chips"));
        assert!(label.contains("13073"));
        assert!(label.ends_with("50"));
    }
}

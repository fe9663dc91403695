//! iniへのマクロ出力の統合テスト

use auction_builder::error::AuctionBuilderError;
use auction_builder::export::{apply_config_exclusions, export_macros, preview_macros, ExportOptions};
use auction_builder_common::{AuctionItem, HotkeySlot, Price};
use std::path::Path;
use tempfile::tempdir;

fn create_item(index: usize) -> AuctionItem {
    AuctionItem {
        name: format!("Item {}", index),
        id: format!("{}", 1000 + index),
        price: Price::Known(50 * index as u64),
        excluded: false,
    }
}

fn create_items(count: usize) -> Vec<AuctionItem> {
    (1..=count).map(create_item).collect()
}

fn write_ini(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("mule_pq.proj.ini");
    std::fs::write(&path, content).expect("ini書き込み失敗");
    path
}

const BASE_INI: &str = "[Socials]\n\
    Page1Button3Name=Sit\n\
    Page1Button3Line1=/sit\n\
    [Options]\n\
    ChatFontSize=3\n";

#[test]
fn test_export_appends_after_preserved_lines() {
    let dir = tempdir().expect("Failed to create temp dir");
    let ini = write_ini(dir.path(), BASE_INI);

    let summary = export_macros(&create_items(7), &ini, &HotkeySlot::new(1, 1), &ExportOptions::default()).unwrap();
    assert_eq!(summary.exported, 7);
    assert_eq!(summary.buttons, 1);
    assert_eq!((summary.first_button, summary.last_button), (1, 1));
    assert_eq!(summary.replaced_lines, 0);

    let content = std::fs::read_to_string(&ini).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(&lines[..5], BASE_INI.lines().collect::<Vec<_>>().as_slice());
    assert_eq!(lines[5], "Page1Button1Name=Auction1");
    assert_eq!(lines[6], "Page1Button1Color=0");
    assert_eq!(
        lines[7],
        "Page1Button1Line1=/auction WTS 001001 Item 1 50, 001002 Item 2 100, 001003 Item 3 150, \
         001004 Item 4 200, 001005 Item 5 250, 001006 Item 6 300"
    );
    assert_eq!(lines[8], "Page1Button1Line2=/auction WTS 001007 Item 7 350");
    assert_eq!(lines.len(), 9);
    assert!(content.ends_with('\n'));
}

/// 再エクスポートで前回の生成行だけが置き換わる
#[test]
fn test_export_is_idempotent() {
    let dir = tempdir().expect("Failed to create temp dir");
    let ini = write_ini(dir.path(), BASE_INI);
    let slot = HotkeySlot::new(1, 1);
    let items = create_items(40);

    export_macros(&items, &ini, &slot, &ExportOptions::default()).unwrap();
    let first = std::fs::read_to_string(&ini).unwrap();

    let summary = export_macros(&items, &ini, &slot, &ExportOptions::default()).unwrap();
    let second = std::fs::read_to_string(&ini).unwrap();

    assert_eq!(first, second);
    // 2ボタン分: 名前・色 ×2 + 5行 + 2行
    assert_eq!(summary.replaced_lines, 11);
    assert!(second.contains("Page1Button3Line1=/sit"));
    assert!(second.contains("ChatFontSize=3"));
}

/// アイテムが減ったとき、前回の余分なボタンも消える
#[test]
fn test_export_removes_stale_buttons() {
    let dir = tempdir().expect("Failed to create temp dir");
    let ini = write_ini(dir.path(), BASE_INI);
    let slot = HotkeySlot::new(1, 1);

    export_macros(&create_items(61), &ini, &slot, &ExportOptions::default()).unwrap();
    assert!(std::fs::read_to_string(&ini).unwrap().contains("Page1Button3Name=Auction3"));

    export_macros(&create_items(2), &ini, &slot, &ExportOptions::default()).unwrap();
    let content = std::fs::read_to_string(&ini).unwrap();
    assert!(!content.contains("Button2"));
    assert!(!content.contains("Page1Button3"));
    assert!(content.contains("Page1Button1Line1=/auction WTS 001001 Item 1 50, 001002 Item 2 100"));
}

/// 31件 → 2ボタン、2つ目は1件だけ
#[test]
fn test_export_31_items_two_buttons() {
    let dir = tempdir().expect("Failed to create temp dir");
    let ini = write_ini(dir.path(), "");

    let summary = export_macros(&create_items(31), &ini, &HotkeySlot::new(2, 4), &ExportOptions::default()).unwrap();
    assert_eq!(summary.buttons, 2);
    assert_eq!((summary.first_button, summary.last_button), (4, 5));

    let content = std::fs::read_to_string(&ini).unwrap();
    let second: Vec<&str> = content.lines().filter(|l| l.starts_with("Page2Button5")).collect();
    assert_eq!(
        second,
        vec![
            "Page2Button5Name=Auction5",
            "Page2Button5Color=0",
            "Page2Button5Line1=/auction WTS 001031 Item 31 1550",
        ]
    );
}

#[test]
fn test_export_missing_ini() {
    let dir = tempdir().expect("Failed to create temp dir");
    let ini = dir.path().join("missing.ini");

    let result = export_macros(&create_items(3), &ini, &HotkeySlot::default(), &ExportOptions::default());
    assert!(matches!(result, Err(AuctionBuilderError::MissingFile(_))));
    assert!(!ini.exists());
}

#[test]
fn test_export_no_data_leaves_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let ini = write_ini(dir.path(), BASE_INI);

    let result = export_macros(&[], &ini, &HotkeySlot::default(), &ExportOptions::default());
    assert!(matches!(result, Err(AuctionBuilderError::NoData)));

    let mut items = create_items(2);
    items.iter_mut().for_each(|i| i.excluded = true);
    let result = export_macros(&items, &ini, &HotkeySlot::default(), &ExportOptions::default());
    assert!(matches!(result, Err(AuctionBuilderError::NoData)));

    assert_eq!(std::fs::read_to_string(&ini).unwrap(), BASE_INI);
}

#[test]
fn test_export_skips_excluded_and_reports_names() {
    let dir = tempdir().expect("Failed to create temp dir");
    let ini = write_ini(dir.path(), BASE_INI);
    let mut items = create_items(3);
    items[1].excluded = true;

    let summary = export_macros(&items, &ini, &HotkeySlot::default(), &ExportOptions::default()).unwrap();
    assert_eq!(summary.exported, 2);
    assert_eq!(summary.excluded_names, vec!["Item 2"]);
    assert!(!std::fs::read_to_string(&ini).unwrap().contains("Item 2"));
}

#[test]
fn test_export_dry_run_does_not_write() {
    let dir = tempdir().expect("Failed to create temp dir");
    let ini = write_ini(dir.path(), BASE_INI);

    let summary = export_macros(&create_items(3), &ini, &HotkeySlot::default(), &ExportOptions { dry_run: true }).unwrap();
    assert_eq!(summary.lines.len(), 3);
    assert_eq!(std::fs::read_to_string(&ini).unwrap(), BASE_INI);
}

#[test]
fn test_export_keeps_crlf() {
    let dir = tempdir().expect("Failed to create temp dir");
    let ini = write_ini(dir.path(), "[Socials]\r\nPage1Button3Name=Sit\r\n");

    export_macros(&create_items(1), &ini, &HotkeySlot::default(), &ExportOptions::default()).unwrap();
    let content = std::fs::read_to_string(&ini).unwrap();
    assert_eq!(
        content,
        "[Socials]\r\nPage1Button3Name=Sit\r\nPage1Button1Name=Auction1\r\nPage1Button1Color=0\r\n\
         Page1Button1Line1=/auction WTS 001001 Item 1 50\r\n"
    );
}

#[test]
fn test_export_invalid_id_leaves_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let ini = write_ini(dir.path(), BASE_INI);
    let mut items = create_items(2);
    items[0].id = "1234567".into();

    let result = export_macros(&items, &ini, &HotkeySlot::default(), &ExportOptions::default());
    assert!(matches!(result, Err(AuctionBuilderError::Common(_))));
    assert_eq!(std::fs::read_to_string(&ini).unwrap(), BASE_INI);
}

/// ボタン番号が溢れる場合は書き込まずにエラー
#[test]
fn test_export_button_overflow_leaves_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let ini = write_ini(dir.path(), BASE_INI);

    let result = export_macros(&create_items(31), &ini, &HotkeySlot::new(1, u32::MAX), &ExportOptions::default());
    assert!(matches!(result, Err(AuctionBuilderError::Common(_))));
    assert_eq!(std::fs::read_to_string(&ini).unwrap(), BASE_INI);
}

#[test]
fn test_config_exclusions_apply_before_export() {
    let mut items = create_items(3);
    let marked = apply_config_exclusions(&mut items, &["Item 3".to_string()]);
    assert_eq!(marked, 1);
    assert!(items[2].excluded);

    let lines = preview_macros(&items, &HotkeySlot::default()).unwrap();
    assert_eq!(lines.len(), 3);
    assert!(!lines[2].contains("Item 3"));
}

#[test]
fn test_preview_no_data() {
    let result = preview_macros(&[], &HotkeySlot::default());
    assert!(matches!(result, Err(AuctionBuilderError::NoData)));
}

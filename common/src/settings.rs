//! 旧形式 `settings` ファイルの読み込み
//!
//! ```text
//! [config]
//! page=1
//! button=1
//! auctions=5
//! outputfile=C:\EQ\Mule_pq.proj-Inventory.txt
//! mule_ini=C:\EQ\Mule_pq.proj.ini
//! [exclusions]
//! Bone Chips
//! ```

use crate::error::{Error, Result};

/// 旧形式の設定内容
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacySettings {
    pub hotkey_page: u32,
    pub hotkey_button: u32,
    pub auction_count: usize,
    pub inventory_path: String,
    pub ini_path: String,
    pub exclusions: Vec<String>,
}

/// 旧形式の設定を解析
///
/// 6項目（page / button / auctions / outputfile / mule_ini / [exclusions]）が
/// すべて揃っていなければエラー。
pub fn parse_legacy_settings(text: &str) -> Result<LegacySettings> {
    let mut page = None;
    let mut button = None;
    let mut auctions = None;
    let mut outputfile = None;
    let mut mule_ini = None;
    let mut exclusions = None::<Vec<String>>;

    for raw in text.lines() {
        let line = raw.trim();

        if let Some(list) = exclusions.as_mut() {
            if !line.is_empty() {
                list.push(line.to_string());
            }
            continue;
        }

        if line.eq_ignore_ascii_case("[exclusions]") {
            exclusions = Some(Vec::new());
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim();
        match key.trim() {
            "page" => page = Some(parse_number("page", value)?),
            "button" => button = Some(parse_number("button", value)?),
            "auctions" => auctions = Some(parse_number("auctions", value)? as usize),
            "outputfile" => outputfile = Some(value.to_string()),
            "mule_ini" => mule_ini = Some(value.to_string()),
            _ => {}
        }
    }

    let mut missing = Vec::new();
    if page.is_none() { missing.push("page"); }
    if button.is_none() { missing.push("button"); }
    if auctions.is_none() { missing.push("auctions"); }
    if outputfile.is_none() { missing.push("outputfile"); }
    if mule_ini.is_none() { missing.push("mule_ini"); }
    if exclusions.is_none() { missing.push("[exclusions]"); }
    if !missing.is_empty() {
        return Err(Error::Config(format!("settingsに不足している項目: {}", missing.join(", "))));
    }

    Ok(LegacySettings {
        hotkey_page: page.unwrap_or_default(),
        hotkey_button: button.unwrap_or_default(),
        auction_count: auctions.unwrap_or_default(),
        inventory_path: outputfile.unwrap_or_default(),
        ini_path: mule_ini.unwrap_or_default(),
        exclusions: exclusions.unwrap_or_default(),
    })
}

fn parse_number(key: &str, value: &str) -> Result<u32> {
    value
        .parse()
        .map_err(|_| Error::Config(format!("{} が数値ではありません: {:?}", key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETTINGS: &str = "[config]\n\
        page=2\n\
        button=3\n\
        auctions=5\n\
        outputfile=C:\\EQ\\Mule-Inventory.txt\n\
        mule_ini=C:\\EQ\\Mule_pq.proj.ini\n\
        [exclusions]\n\
        Bone Chips\n\
        \n\
        Rusty Dagger";

    #[test]
    fn test_parse_legacy_settings() {
        let s = parse_legacy_settings(SETTINGS).unwrap();
        assert_eq!(s.hotkey_page, 2);
        assert_eq!(s.hotkey_button, 3);
        assert_eq!(s.auction_count, 5);
        assert_eq!(s.inventory_path, "C:\\EQ\\Mule-Inventory.txt");
        assert_eq!(s.ini_path, "C:\\EQ\\Mule_pq.proj.ini");
        assert_eq!(s.exclusions, vec!["Bone Chips", "Rusty Dagger"]);
    }

    #[test]
    fn test_missing_fields() {
        let err = parse_legacy_settings("[config]\npage=1\n").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("button"));
        assert!(msg.contains("[exclusions]"));
    }

    #[test]
    fn test_non_numeric_page() {
        let text = SETTINGS.replace("page=2", "page=two");
        assert!(matches!(parse_legacy_settings(&text), Err(Error::Config(_))));
    }

    #[test]
    fn test_exclusions_may_be_empty() {
        let text = "page=1\nbutton=1\nauctions=3\noutputfile=a\nmule_ini=b\n[exclusions]\n";
        let s = parse_legacy_settings(text).unwrap();
        assert!(s.exclusions.is_empty());
    }
}

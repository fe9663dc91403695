use crate::error::{AuctionBuilderError, Result};
use auction_builder_common::layout::{BUTTONS_PER_PAGE, SOCIAL_PAGES};
use auction_builder_common::{HotkeySlot, LegacySettings};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_AUCTION_URL: &str = "https://eqtunnelauctions.com/item.php";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Zealのインベントリ出力（*-Inventory.txt）
    pub inventory_path: String,
    /// キャラクターiniファイル（*_pq.proj.ini）
    pub ini_path: String,
    pub hotkey_page: u32,
    pub hotkey_button: u32,
    /// 平均に使う落札件数
    pub auction_count: usize,
    pub auction_url: String,
    pub timeout_seconds: u64,
    pub accept_invalid_certs: bool,
    pub exclusions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inventory_path: String::new(),
            ini_path: String::new(),
            hotkey_page: 1,
            hotkey_button: 1,
            auction_count: 5,
            auction_url: DEFAULT_AUCTION_URL.into(),
            timeout_seconds: 30,
            accept_invalid_certs: false,
            exclusions: Vec::new(),
        }
    }
}

/// コマンドラインからの一時的な上書き
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub inventory: Option<PathBuf>,
    pub ini: Option<PathBuf>,
    pub page: Option<u32>,
    pub button: Option<u32>,
    pub auctions: Option<usize>,
}

/// 価格取得の設定
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    pub timeout: Duration,
    pub accept_invalid_certs: bool,
}

/// インポート実行時の設定（検証済み）
#[derive(Debug, Clone)]
pub struct ImportSettings {
    pub inventory_path: PathBuf,
    pub auction_count: usize,
    pub exclusions: Vec<String>,
    pub fetch: FetchSettings,
}

/// エクスポート実行時の設定（検証済み）
#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub ini_path: PathBuf,
    pub slot: HotkeySlot,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| {
            AuctionBuilderError::InvalidConfiguration("ホームディレクトリが見つかりません".into())
        })?;
        Ok(home.join(".config").join("auction-builder").join("config.json"))
    }

    pub fn with_overrides(&self, overrides: &Overrides) -> Self {
        let mut config = self.clone();
        if let Some(path) = &overrides.inventory {
            config.inventory_path = path.display().to_string();
        }
        if let Some(path) = &overrides.ini {
            config.ini_path = path.display().to_string();
        }
        if let Some(page) = overrides.page {
            config.hotkey_page = page;
        }
        if let Some(button) = overrides.button {
            config.hotkey_button = button;
        }
        if let Some(auctions) = overrides.auctions {
            config.auction_count = auctions;
        }
        config
    }

    pub fn import_settings(&self) -> Result<ImportSettings> {
        let mut problems = Vec::new();
        if self.inventory_path.trim().is_empty() {
            problems.push("インベントリファイル (inventoryPath) が未設定".to_string());
        }
        if self.auction_count == 0 {
            problems.push("落札件数 (auctionCount) は1以上".to_string());
        }
        if self.auction_url.trim().is_empty() {
            problems.push("オークションURL (auctionUrl) が未設定".to_string());
        }
        if self.timeout_seconds == 0 {
            problems.push("タイムアウト (timeoutSeconds) は1以上".to_string());
        }
        check(problems)?;

        Ok(ImportSettings {
            inventory_path: PathBuf::from(self.inventory_path.trim()),
            auction_count: self.auction_count,
            exclusions: self.exclusions.clone(),
            fetch: FetchSettings {
                base_url: self.auction_url.trim().to_string(),
                timeout: Duration::from_secs(self.timeout_seconds),
                accept_invalid_certs: self.accept_invalid_certs,
            },
        })
    }

    pub fn export_settings(&self) -> Result<ExportSettings> {
        let mut problems = Vec::new();
        if self.ini_path.trim().is_empty() {
            problems.push("iniファイル (iniPath) が未設定".to_string());
        }
        problems.extend(self.slot_problems());
        check(problems)?;

        Ok(ExportSettings {
            ini_path: PathBuf::from(self.ini_path.trim()),
            slot: HotkeySlot::new(self.hotkey_page, self.hotkey_button),
        })
    }

    /// 検証済みのマクロ開始位置（プレビュー用、iniは不要）
    pub fn hotkey_slot(&self) -> Result<HotkeySlot> {
        check(self.slot_problems())?;
        Ok(HotkeySlot::new(self.hotkey_page, self.hotkey_button))
    }

    fn slot_problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if !(1..=SOCIAL_PAGES).contains(&self.hotkey_page) {
            problems.push(format!("ホットキーページ (hotkeyPage) は1〜{}", SOCIAL_PAGES));
        }
        if !(1..=BUTTONS_PER_PAGE).contains(&self.hotkey_button) {
            problems.push(format!("ホットキーボタン (hotkeyButton) は1〜{}", BUTTONS_PER_PAGE));
        }
        problems
    }

    /// 除外リストに追加（既存は無視）し、追加件数を返す
    pub fn add_exclusions<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut added = 0;
        for name in names {
            let name = name.into();
            let name = name.trim();
            if name.is_empty() || self.exclusions.iter().any(|e| e == name) {
                continue;
            }
            self.exclusions.push(name.to_string());
            added += 1;
        }
        added
    }

    /// 除外リストから削除し、削除件数を返す
    pub fn remove_exclusions(&mut self, names: &[String]) -> usize {
        let before = self.exclusions.len();
        self.exclusions.retain(|e| !names.iter().any(|n| n.trim() == e.as_str()));
        before - self.exclusions.len()
    }

    /// 旧形式settingsの内容を取り込む
    pub fn apply_legacy(&mut self, legacy: LegacySettings) -> usize {
        self.hotkey_page = legacy.hotkey_page;
        self.hotkey_button = legacy.hotkey_button;
        self.auction_count = legacy.auction_count;
        self.inventory_path = legacy.inventory_path;
        self.ini_path = legacy.ini_path;
        self.add_exclusions(legacy.exclusions)
    }
}

fn check(problems: Vec<String>) -> Result<()> {
    if problems.is_empty() {
        Ok(())
    } else {
        Err(AuctionBuilderError::InvalidConfiguration(problems.join(", ")))
    }
}

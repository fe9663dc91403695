use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuctionBuilderError {
    #[error("ファイルが見つかりません: {0}。設定を確認してください")]
    MissingFile(String),

    #[error("価格取得エラー ({item}): {reason}")]
    NetworkFetch { item: String, reason: String },

    #[error("出力するデータがありません。先にインポートしてください")]
    NoData,

    #[error("設定が不正です: {0}")]
    InvalidConfiguration(String),

    #[error("シート読み書きエラー: {0}")]
    Spreadsheet(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] auction_builder_common::Error),
}

impl AuctionBuilderError {
    pub fn fetch(item: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        AuctionBuilderError::NetworkFetch {
            item: item.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuctionBuilderError>;

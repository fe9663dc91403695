//! オークション履歴サイトへのHTTPアクセス

use super::AuctionSource;
use crate::config::FetchSettings;
use crate::error::{AuctionBuilderError, Result};
use auction_builder_common::auction_query_name;
use reqwest::Url;

pub struct HttpAuctionSource {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpAuctionSource {
    pub fn new(settings: &FetchSettings) -> Result<Self> {
        let base_url = Url::parse(&settings.base_url).map_err(|e| {
            AuctionBuilderError::InvalidConfiguration(format!(
                "auctionUrl が不正です ({}): {}",
                settings.base_url, e
            ))
        })?;

        if settings.accept_invalid_certs {
            tracing::warn!("TLS証明書の検証を無効化しています");
        }

        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .danger_accept_invalid_certs(settings.accept_invalid_certs)
            .user_agent(concat!("auction-builder/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                AuctionBuilderError::InvalidConfiguration(format!("HTTPクライアント生成エラー: {}", e))
            })?;

        Ok(Self { client, base_url })
    }

    /// アイテムの履歴ページURL（`?itemstr=Spell%3A+Complete+Heal` 形式）
    pub fn item_url(&self, item_name: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("itemstr", &auction_query_name(item_name));
        url
    }
}

impl AuctionSource for HttpAuctionSource {
    async fn fetch_page(&self, item_name: &str) -> Result<String> {
        let url = self.item_url(item_name);
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AuctionBuilderError::fetch(item_name, describe(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuctionBuilderError::fetch(item_name, format!("HTTP {}", status)));
        }

        response
            .text()
            .await
            .map_err(|e| AuctionBuilderError::fetch(item_name, describe(&e)))
    }
}

fn describe(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("タイムアウト: {}", e)
    } else if e.is_connect() {
        format!("接続エラー: {}", e)
    } else {
        e.to_string()
    }
}

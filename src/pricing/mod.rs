//! 価格取得モジュール
//!
//! アイテムごとに履歴ページを取得し、落札価格を集計する。
//! 取得に失敗したアイテムは `unknown` として処理を続ける。

mod http;

pub use http::HttpAuctionSource;

use crate::error::Result;
use auction_builder_common::{aggregate_price, extract_samples, AuctionItem, InventoryItem, Price};
use indicatif::{ProgressBar, ProgressStyle};

/// 履歴ページの取得元
#[allow(async_fn_in_trait)]
pub trait AuctionSource {
    /// アイテム名に対応する履歴ページの本文を取得
    async fn fetch_page(&self, item_name: &str) -> Result<String>;
}

/// 1アイテム分の進捗
#[derive(Debug)]
pub struct PriceProgress {
    /// 1始まりの番号
    pub index: usize,
    pub total: usize,
    pub item: AuctionItem,
    /// 価格を `unknown` にした原因
    pub failure: Option<crate::error::AuctionBuilderError>,
}

/// 価格取得の逐次実行
///
/// `next_progress` を呼ぶたびに1アイテムを取得して結果を返す。
/// 全件終わると `None`。やり直す場合は作り直す。
pub struct PriceRun<'a, S> {
    source: &'a S,
    items: std::iter::Enumerate<std::slice::Iter<'a, InventoryItem>>,
    total: usize,
    sample_count: usize,
}

impl<'a, S: AuctionSource> PriceRun<'a, S> {
    pub fn new(items: &'a [InventoryItem], source: &'a S, sample_count: usize) -> Self {
        Self {
            source,
            items: items.iter().enumerate(),
            total: items.len(),
            sample_count,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub async fn next_progress(&mut self) -> Option<PriceProgress> {
        let (idx, inventory_item) = self.items.next()?;

        let (price, failure) =
            match lookup_price(self.source, &inventory_item.name, self.sample_count).await {
                Ok(price) => (price, None),
                Err(e) => (Price::Unknown, Some(e)),
            };

        Some(PriceProgress {
            index: idx + 1,
            total: self.total,
            item: AuctionItem::from_inventory(inventory_item, price),
            failure,
        })
    }
}

/// 1アイテムの価格を取得
pub async fn lookup_price<S: AuctionSource>(
    source: &S,
    item_name: &str,
    sample_count: usize,
) -> Result<Price> {
    let html = source.fetch_page(item_name).await?;
    let samples = extract_samples(&html);
    if samples.is_empty() {
        tracing::debug!(item = item_name, "落札履歴なし");
    }
    Ok(aggregate_price(&samples, sample_count)?)
}

/// 価格取得の結果
#[derive(Debug, Default)]
pub struct PricingOutcome {
    pub items: Vec<AuctionItem>,
    /// 取得に失敗したアイテム数
    pub failures: usize,
}

/// 全アイテムの価格を取得（進捗バー付き）
pub async fn price_items<S: AuctionSource>(
    items: &[InventoryItem],
    source: &S,
    sample_count: usize,
    verbose: bool,
) -> PricingOutcome {
    let mut run = PriceRun::new(items, source, sample_count);
    let pb = ProgressBar::new(run.total() as u64);
    if let Ok(style) = ProgressStyle::with_template("  [{bar:30}] {pos}/{len} {wide_msg}") {
        pb.set_style(style.progress_chars("=> "));
    }

    let mut outcome = PricingOutcome {
        items: Vec::with_capacity(items.len()),
        failures: 0,
    };

    while let Some(progress) = run.next_progress().await {
        pb.set_position(progress.index as u64);
        pb.set_message(progress.item.name.clone());

        if let Some(err) = &progress.failure {
            outcome.failures += 1;
            tracing::warn!(item = %progress.item.name, error = %err, "価格取得に失敗、unknownとして続行");
            pb.println(format!("  ⚠ {}", err));
        } else if verbose {
            pb.println(format!(
                "  [{}/{}] {} → {}",
                progress.index, progress.total, progress.item.name, progress.item.price
            ));
        }

        outcome.items.push(progress.item);
    }

    pb.finish_and_clear();
    outcome
}

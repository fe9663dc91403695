//! 価格集計
//!
//! 直近の落札価格を先頭から最大N件だけ平均し、50単位に切り上げる。

use crate::error::{Error, Result};
use crate::types::Price;

/// 価格の丸め単位
pub const PRICE_STEP: u64 = 50;

/// 落札価格リストから販売価格を算出
///
/// - 先頭から `min(sample_count, samples.len())` 件を合計
/// - 実際に使った件数で整数除算（端数切り捨て）
/// - 50の倍数に切り上げ
///
/// サンプルが空、または `sample_count` が0の場合は `Price::Unknown`。
///
/// # Examples
/// ```
/// use auction_builder_common::{aggregate_price, Price};
///
/// let price = aggregate_price(&["10", "20"], 3).unwrap();
/// assert_eq!(price, Price::Known(50));
/// ```
pub fn aggregate_price<S: AsRef<str>>(samples: &[S], sample_count: usize) -> Result<Price> {
    let divisor = sample_count.min(samples.len());
    if divisor == 0 {
        return Ok(Price::Unknown);
    }

    let mut sum: u64 = 0;
    for sample in &samples[..divisor] {
        let value = parse_sample(sample.as_ref())?;
        sum = sum
            .checked_add(value)
            .ok_or_else(|| Error::Parse("価格の合計が大きすぎます".into()))?;
    }

    round_up_to_step(sum / divisor as u64)
        .map(Price::Known)
        .ok_or_else(|| Error::Parse("価格が大きすぎます".into()))
}

/// 50の倍数に切り上げ（溢れる場合は `None`）
pub fn round_up_to_step(value: u64) -> Option<u64> {
    value.div_ceil(PRICE_STEP).checked_mul(PRICE_STEP)
}

fn parse_sample(sample: &str) -> Result<u64> {
    let trimmed = sample.trim();
    trimmed
        .parse::<u64>()
        .map_err(|_| Error::Parse(format!("落札価格が数値ではありません: {:?}", trimmed)))
}

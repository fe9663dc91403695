use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// ログ出力を初期化（標準エラー出力）
///
/// `RUST_LOG` が設定されていればそれを優先する。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // テストなどで二重初期化された場合は無視
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

use auction_builder::{cli, config, error, export, inventory, logging, pricing, review, sheet};
use auction_builder_common::{parse_legacy_settings, AuctionSheet, HotkeySlot};
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, ExportSettings, Overrides};
use error::{AuctionBuilderError, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let mut config = Config::load()?;

    match cli.command {
        Commands::Import { inventory, output, auctions } => {
            println!("📦 auction-builder - インポート\n");

            let overrides = Overrides { inventory, auctions, ..Default::default() };
            let auction_sheet = import_sheet(&config.with_overrides(&overrides), cli.verbose, 2).await?;

            println!("[2/2] シートを保存中...");
            sheet::save_sheet(&output, &auction_sheet)?;
            println!("✔ シートを保存: {}", output.display());

            println!("\n✅ インポート完了");
        }

        Commands::Review { sheet, output } => {
            println!("📝 auction-builder - レビュー\n");
            review::run_interactive_review(&sheet, output.as_deref())?;
        }

        Commands::Export { sheet, ini, page, button, dry_run } => {
            println!("📄 auction-builder - エクスポート\n");

            let overrides = Overrides { ini, page, button, ..Default::default() };
            let settings = config.with_overrides(&overrides).export_settings()?;

            let mut auction_sheet = sheet::load_sheet(&sheet)?;
            println!("[1/1] iniに書き込み中...");
            export_sheet(&mut config, &mut auction_sheet, &settings, dry_run)?;

            println!("\n✅ エクスポート完了");
        }

        Commands::Run { inventory, ini, page, button, auctions, review, sheet, dry_run } => {
            println!("🚀 auction-builder - 一括処理\n");

            let overrides = Overrides { inventory, ini, page, button, auctions };
            let run_config = config.with_overrides(&overrides);
            // 価格取得の前に検証しておく
            let settings = run_config.export_settings()?;

            let mut auction_sheet = import_sheet(&run_config, cli.verbose, 4).await?;

            println!("[2/4] シートを保存中...");
            let sheet_path = sheet.unwrap_or_else(sheet::default_sheet_path);
            sheet::save_sheet(&sheet_path, &auction_sheet)?;
            println!("✔ シートを保存: {}\n", sheet_path.display());

            if review {
                println!("[3/4] レビュー中...");
                let stats = review::review_sheet(&mut auction_sheet)?;
                sheet::save_sheet(&sheet_path, &auction_sheet)?;
                println!("✔ 除外 {}件 / 価格入力 {}件\n", stats.excluded, stats.priced);
            } else {
                println!("[3/4] レビューをスキップ\n");
            }

            println!("[4/4] iniに書き込み中...");
            export_sheet(&mut config, &mut auction_sheet, &settings, dry_run)?;

            println!("\n✅ 完了");
        }

        Commands::Config {
            show,
            set_inventory,
            set_ini,
            set_page,
            set_button,
            set_auctions,
            set_url,
            set_timeout,
            accept_invalid_certs,
            import_legacy,
        } => {
            let mut changed = false;

            if let Some(path) = import_legacy {
                if !path.exists() {
                    return Err(AuctionBuilderError::MissingFile(path.display().to_string()));
                }
                let legacy = parse_legacy_settings(&std::fs::read_to_string(&path)?)?;
                let added = config.apply_legacy(legacy);
                println!("✔ 旧設定を取り込みました（除外 {}件追加）", added);
                changed = true;
            }
            if let Some(path) = set_inventory {
                config.inventory_path = path.display().to_string();
                changed = true;
            }
            if let Some(path) = set_ini {
                config.ini_path = path.display().to_string();
                changed = true;
            }
            if let Some(page) = set_page {
                config.hotkey_page = page;
                changed = true;
            }
            if let Some(button) = set_button {
                config.hotkey_button = button;
                changed = true;
            }
            if let Some(count) = set_auctions {
                config.auction_count = count;
                changed = true;
            }
            if let Some(url) = set_url {
                config.auction_url = url;
                changed = true;
            }
            if let Some(secs) = set_timeout {
                config.timeout_seconds = secs;
                changed = true;
            }
            if let Some(accept) = accept_invalid_certs {
                config.accept_invalid_certs = accept;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                print_config(&config);
            }
        }

        Commands::Exclude { add, remove, list } => {
            let added = config.add_exclusions(add);
            let removed = config.remove_exclusions(&remove);
            if added > 0 || removed > 0 {
                config.save()?;
                println!("✔ 除外リストを更新しました（追加 {}件 / 削除 {}件）", added, removed);
            }

            if list || (added == 0 && removed == 0) {
                println!("除外リスト ({}件):", config.exclusions.len());
                for name in &config.exclusions {
                    println!("  {}", name);
                }
            }
        }

        Commands::Preview { sheet, page, button } => {
            let overrides = Overrides { page, button, ..Default::default() };
            let slot = config.with_overrides(&overrides).hotkey_slot()?;

            let mut auction_sheet = sheet::load_sheet(&sheet)?;
            export::apply_config_exclusions(&mut auction_sheet.items, &config.exclusions);
            for line in export::preview_macros(&auction_sheet.items, &slot)? {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

/// インベントリ読み込みと価格取得（ステップ1）
async fn import_sheet(config: &Config, verbose: bool, steps: usize) -> Result<AuctionSheet> {
    let settings = config.import_settings()?;

    println!("[1/{}] インベントリを読み込み中...", steps);
    let items = inventory::load_inventory(&settings.inventory_path, &settings.exclusions)?;
    println!("✔ {}件の出品候補を検出", items.len());

    let source = pricing::HttpAuctionSource::new(&settings.fetch)?;
    let outcome = pricing::price_items(&items, &source, settings.auction_count, verbose).await;
    if outcome.failures > 0 {
        println!("⚠ {}件の価格取得に失敗（unknown）", outcome.failures);
    }
    println!("✔ 価格取得完了\n");

    Ok(AuctionSheet::new(chrono::Utc::now().to_rfc3339(), outcome.items))
}

/// シートをiniに書き込み、除外した名前を除外リストに保存
fn export_sheet(
    config: &mut Config,
    auction_sheet: &mut AuctionSheet,
    settings: &ExportSettings,
    dry_run: bool,
) -> Result<()> {
    export::apply_config_exclusions(&mut auction_sheet.items, &config.exclusions);

    let options = export::ExportOptions { dry_run };
    let summary = export::export_macros(&auction_sheet.items, &settings.ini_path, &settings.slot, &options)?;

    if dry_run {
        for line in &summary.lines {
            println!("  {}", line);
        }
        println!("✔ dry-run: {}件 / {}ボタン（{}行を置き換え予定）", summary.exported, summary.buttons, summary.replaced_lines);
        return Ok(());
    }

    println!(
        "✔ {}件を Page{} Button{}〜{} に書き込み: {}",
        summary.exported,
        settings.slot.page,
        summary.first_button,
        summary.last_button,
        settings.ini_path.display()
    );

    let added = config.add_exclusions(summary.excluded_names);
    if added > 0 {
        config.save()?;
        println!("✔ 除外リストに{}件追加", added);
    }
    Ok(())
}

fn print_config(config: &Config) {
    let or_unset = |s: &str| if s.is_empty() { "未設定".to_string() } else { s.to_string() };
    println!("設定:");
    println!("  インベントリ: {}", or_unset(&config.inventory_path));
    println!("  ini: {}", or_unset(&config.ini_path));
    println!("  ページ/ボタン: {}", HotkeySlot::new(config.hotkey_page, config.hotkey_button));
    println!("  落札件数: {}", config.auction_count);
    println!("  URL: {}", config.auction_url);
    println!("  タイムアウト: {}秒", config.timeout_seconds);
    println!("  証明書検証: {}", if config.accept_invalid_certs { "無効" } else { "有効" });
    println!("  除外: {}件", config.exclusions.len());
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "auction-builder")]
#[command(about = "EverQuestオークションマクロ生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// インベントリを読み込み、価格を取得してシートを出力
    Import {
        /// Zealのインベントリファイル（省略時は設定値）
        #[arg(short, long)]
        inventory: Option<PathBuf>,

        /// 出力シート (.json/.xlsx)
        #[arg(short, long, default_value = "auction-sheet.json")]
        output: PathBuf,

        /// 平均に使う落札件数
        #[arg(short, long)]
        auctions: Option<usize>,
    },

    /// シートを対話的に確認（除外・価格入力）
    Review {
        /// シートファイル
        #[arg(required = true)]
        sheet: PathBuf,

        /// 出力先（省略時は上書き）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// シートからマクロを生成してiniに書き込み
    Export {
        /// シートファイル
        #[arg(required = true)]
        sheet: PathBuf,

        /// キャラクターiniファイル
        #[arg(long)]
        ini: Option<PathBuf>,

        /// ホットキーページ
        #[arg(short, long)]
        page: Option<u32>,

        /// 開始ボタン番号
        #[arg(short, long)]
        button: Option<u32>,

        /// ドライラン（iniを変更しない）
        #[arg(long)]
        dry_run: bool,
    },

    /// インポートからiniへの書き込みまで一括実行
    Run {
        /// Zealのインベントリファイル
        #[arg(short, long)]
        inventory: Option<PathBuf>,

        /// キャラクターiniファイル
        #[arg(long)]
        ini: Option<PathBuf>,

        /// ホットキーページ
        #[arg(short, long)]
        page: Option<u32>,

        /// 開始ボタン番号
        #[arg(short, long)]
        button: Option<u32>,

        /// 平均に使う落札件数
        #[arg(short, long)]
        auctions: Option<usize>,

        /// 書き込み前に対話レビューを行う
        #[arg(short, long)]
        review: bool,

        /// 中間シートの保存先
        #[arg(short, long)]
        sheet: Option<PathBuf>,

        /// ドライラン（iniを変更しない）
        #[arg(long)]
        dry_run: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// インベントリファイルを設定
        #[arg(long)]
        set_inventory: Option<PathBuf>,

        /// iniファイルを設定
        #[arg(long)]
        set_ini: Option<PathBuf>,

        /// ホットキーページを設定
        #[arg(long)]
        set_page: Option<u32>,

        /// 開始ボタン番号を設定
        #[arg(long)]
        set_button: Option<u32>,

        /// 落札件数を設定
        #[arg(long)]
        set_auctions: Option<usize>,

        /// オークションサイトURLを設定
        #[arg(long)]
        set_url: Option<String>,

        /// タイムアウト秒数を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// TLS証明書エラーを許容するか
        #[arg(long)]
        accept_invalid_certs: Option<bool>,

        /// 旧形式のsettingsファイルを取り込む
        #[arg(long)]
        import_legacy: Option<PathBuf>,
    },

    /// 除外リスト管理
    Exclude {
        /// 追加するアイテム名
        #[arg(short, long)]
        add: Vec<String>,

        /// 削除するアイテム名
        #[arg(short, long)]
        remove: Vec<String>,

        /// 一覧を表示
        #[arg(short, long)]
        list: bool,
    },

    /// 生成されるマクロ行を表示（ファイルは変更しない）
    Preview {
        /// シートファイル
        #[arg(required = true)]
        sheet: PathBuf,

        /// ホットキーページ
        #[arg(short, long)]
        page: Option<u32>,

        /// 開始ボタン番号
        #[arg(short, long)]
        button: Option<u32>,
    },
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photo-prune")]
#[command(about = "端末バックアップ済みのクラウド写真を抽出するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 端末エクスポート（テキスト）をローカル在庫CSVに変換
    Convert {
        /// ショートカットの書き出しファイル
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// 出力するローカル在庫CSV
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// ローカル在庫とクラウド在庫を突合して削除候補CSVを出力
    Diff {
        /// ローカル在庫CSV（filename,creationTime）
        #[arg(short, long)]
        local: Option<PathBuf>,

        /// クラウド在庫CSV（filename,creationTime,id）
        #[arg(short, long)]
        cloud: Option<PathBuf>,

        /// 出力する削除候補CSV
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// データフォルダを設定
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "anisong")]
#[command(about = "アニメ主題歌カタログ検索ツール", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 検索語（末尾に op2 / ed / ins1 などで種別指定。省略時は対話入力）
    pub query: Vec<String>,

    /// カタログJSONファイル（省略時は設定値）
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// 番号を指定して選択（対話選択をスキップ）
    #[arg(short, long)]
    pub select: Option<String>,

    /// URLを表示するだけでブラウザを開かない
    #[arg(long)]
    pub no_open: bool,

    /// 同じレコードの重複一致をまとめる
    #[arg(short, long)]
    pub unique: bool,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// 位置引数を1つの検索語に結合（引数なしなら None）
    pub fn query_text(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.query.join(" "))
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 動画配信のベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// カタログJSONのパスを設定
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// 選択時にブラウザを開くか (true/false)
        #[arg(long)]
        set_open_browser: Option<bool>,
    },
}

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::pipeline::ConvertOptions;
use crate::reader::{MalformedRows, DEFAULT_INPUT_FILE};
use crate::writer::OutputFormat;

#[derive(Parser)]
#[command(name = "cubiomes-markers")]
#[command(version, about = "cubiomes-viewerのCSVからBlueMap用POIマーカーを生成", long_about = None)]
pub struct Cli {
    /// サブコマンド省略時は convert を既定値で実行
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// ワールド設定JSONファイル（省略時は既定パス → 組み込み設定）
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// CSVをマーカーJSONに変換
    Convert(ConvertArgs),

    /// 設定を表示/初期化
    Config {
        /// 有効な設定を表示
        #[arg(long)]
        show: bool,

        /// 組み込み設定を既定パスに書き出す
        #[arg(long)]
        init: bool,

        /// --init で既存ファイルを上書き
        #[arg(long)]
        force: bool,
    },

    /// BlueMapのweb/assets/に必要なアイコン一覧
    Icons,
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// cubiomes-viewerのエクスポートCSV
    #[arg(short, long, default_value = DEFAULT_INPUT_FILE)]
    pub input: PathBuf,

    /// 出力ディレクトリ
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// 出力するワールド（複数指定可、省略時は全ワールド）
    #[arg(short, long = "world")]
    pub worlds: Vec<String>,

    /// 全ワールドをまとめて markers.json 1つに出力
    #[arg(long, conflicts_with = "worlds")]
    pub single: bool,

    /// インデント付きJSONで出力
    #[arg(long)]
    pub pretty: bool,

    /// フィールド不足の行があれば中断（既定は警告して読み飛ばす）
    #[arg(long)]
    pub strict: bool,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            output_dir: PathBuf::from("."),
            worlds: Vec::new(),
            single: false,
            pretty: false,
            strict: false,
        }
    }
}

impl ConvertArgs {
    pub fn to_options(&self) -> ConvertOptions {
        ConvertOptions {
            input: self.input.clone(),
            output_dir: self.output_dir.clone(),
            format: if self.pretty {
                OutputFormat::Pretty
            } else {
                OutputFormat::Compact
            },
            malformed: if self.strict {
                MalformedRows::Abort
            } else {
                MalformedRows::Skip
            },
            worlds: self.worlds.clone(),
        }
    }
}

/// ロガーに上書きするレベル
///
/// `--verbose`はDebug、`RUST_LOG`が無ければInfo、あれば`RUST_LOG`に任せる。
pub fn log_level(verbose: bool, rust_log_set: bool) -> Option<log::LevelFilter> {
    if verbose {
        Some(log::LevelFilter::Debug)
    } else if rust_log_set {
        None
    } else {
        Some(log::LevelFilter::Info)
    }
}

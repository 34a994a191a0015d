use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarkerError {
    #[error("入力ファイルが見つかりません。cubiomes-viewerで構造物一覧をエクスポートし、次のファイル名で保存してください: {0}")]
    InputNotFound(String),

    #[error("CSVの{line}行目を解析できません: {reason}")]
    Parse { line: u64, reason: String },

    #[error("CSV読み込みエラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("設定ファイルが既に存在します（--forceで上書き）: {0}")]
    ConfigExists(String),

    #[error("ワールドが設定にありません: {0}")]
    UnknownWorld(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MarkerError>;

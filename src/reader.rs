//! cubiomes-viewer CSVエクスポートの読み込み
//!
//! 先頭6行のヘッダを読み飛ばし、`;`区切りの各行を構造物タイプごとにまとめる。
//! 座標は数値に変換せず、文字列のままJSONへ渡す。

use crate::error::{MarkerError, Result};
use indexmap::IndexMap;
use std::path::Path;

/// 読み飛ばすヘッダ行数
pub const HEADER_LINES: usize = 6;

/// 既定の入力ファイル名
pub const DEFAULT_INPUT_FILE: &str = "cubiomes-export.csv";

/// CSV 1行分のPOI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poi {
    pub structure_type: String,
    pub x: String,
    pub y: String,
}

/// 座標ペア（CSVのトークンそのまま）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    pub x: String,
    pub y: String,
}

/// 構造物タイプ → 座標リスト（ファイル順、キーは初出順）
pub type SeedPois = IndexMap<String, Vec<Coordinate>>;

/// 解析できなかった行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// ファイル内の行番号（1始まり）
    pub line: u64,
    pub reason: String,
}

impl From<ParseError> for MarkerError {
    fn from(e: ParseError) -> Self {
        MarkerError::Parse {
            line: e.line,
            reason: e.reason,
        }
    }
}

/// フィールド不足の行の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedRows {
    /// 警告を出して読み飛ばす
    #[default]
    Skip,
    /// 最初の不正行でエラーにする
    Abort,
}

#[derive(Debug, Clone, Default)]
pub struct ReadOutcome {
    pub pois: SeedPois,
    /// 取り込んだ行数
    pub rows: usize,
    pub skipped: Vec<ParseError>,
}

impl ReadOutcome {
    fn push(&mut self, poi: Poi) {
        self.pois
            .entry(poi.structure_type)
            .or_default()
            .push(Coordinate { x: poi.x, y: poi.y });
        self.rows += 1;
    }
}

pub fn read_cubiomes_csv(path: &Path, policy: MalformedRows) -> Result<ReadOutcome> {
    if !path.is_file() {
        return Err(MarkerError::InputNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let outcome = parse_cubiomes_csv(&content, policy)?;
    log::info!(
        "{}: {}行, {}タイプ, {}行スキップ",
        path.display(),
        outcome.rows,
        outcome.pois.len(),
        outcome.skipped.len()
    );
    Ok(outcome)
}

pub fn parse_cubiomes_csv(content: &str, policy: MalformedRows) -> Result<ReadOutcome> {
    // 行端の空白だけ取り除く（フィールド内の空白はそのまま）。空行も残して行番号を保つ
    let body = content
        .lines()
        .skip(HEADER_LINES)
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(body.as_bytes());

    let mut outcome = ReadOutcome::default();

    for record in reader.records() {
        let record = record?;

        let line = HEADER_LINES as u64 + record.position().map(|p| p.line()).unwrap_or(0);

        match parse_record(&record, line) {
            Ok(poi) => outcome.push(poi),
            Err(e) => match policy {
                MalformedRows::Abort => return Err(e.into()),
                MalformedRows::Skip => {
                    log::warn!("{}行目をスキップ: {}", e.line, e.reason);
                    outcome.skipped.push(e);
                }
            },
        }
    }

    Ok(outcome)
}

// 先頭フィールド（行番号/シード）は捨てる
fn parse_record(record: &csv::StringRecord, line: u64) -> std::result::Result<Poi, ParseError> {
    let mut fields = record.iter().skip(1);

    let mut next_field = |name: &str| match fields.next() {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(ParseError {
            line,
            reason: format!("{}がありません（フィールド数: {}）", name, record.len()),
        }),
    };

    let structure_type = next_field("構造物タイプ")?;
    let x = next_field("x座標")?;
    let y = next_field("y座標")?;

    Ok(Poi { structure_type, x, y })
}

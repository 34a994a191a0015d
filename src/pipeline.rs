//! 読み込み → マーカー生成 → 書き出し
//!
//! CSVは1回だけ読み、選択されたワールドごとにマーカーファイルを出力する。

use crate::config::MarkerConfig;
use crate::error::{MarkerError, Result};
use crate::markers::{build_marker_sets, marker_count};
use crate::reader::{read_cubiomes_csv, MalformedRows, ParseError, DEFAULT_INPUT_FILE};
use crate::writer::{output_path_for_world, write_marker_sets, OutputFormat};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub malformed: MalformedRows,
    /// 出力するワールド名（空なら全ワールド）
    pub worlds: Vec<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            output_dir: PathBuf::from("."),
            format: OutputFormat::default(),
            malformed: MalformedRows::default(),
            worlds: Vec::new(),
        }
    }
}

/// ワールド1つ分の出力結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldOutput {
    pub world: Option<String>,
    pub path: PathBuf,
    pub marker_sets: usize,
    pub markers: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ConversionReport {
    pub rows: usize,
    pub skipped: Vec<ParseError>,
    pub outputs: Vec<WorldOutput>,
}

pub fn convert(config: &MarkerConfig, options: &ConvertOptions) -> Result<ConversionReport> {
    // 入力とワールド指定の確認は何も出力する前に行う
    if !options.input.is_file() {
        return Err(MarkerError::InputNotFound(options.input.display().to_string()));
    }
    let worlds = config.select(&options.worlds)?;

    let outcome = read_cubiomes_csv(&options.input, options.malformed)?;

    let mut report = ConversionReport {
        rows: outcome.rows,
        skipped: outcome.skipped,
        outputs: Vec::with_capacity(worlds.len()),
    };

    for world in worlds {
        log::info!("{} のマーカーを生成中...", world.display_name());

        let marker_sets = build_marker_sets(&world.icons, &outcome.pois);
        let path = output_path_for_world(&options.output_dir, world.name.as_deref());
        write_marker_sets(&path, &marker_sets, options.format)?;

        let output = WorldOutput {
            world: world.name.clone(),
            path,
            marker_sets: marker_sets.len(),
            markers: marker_count(&marker_sets),
        };
        log::debug!("{:?}", output);
        report.outputs.push(output);
    }

    Ok(report)
}

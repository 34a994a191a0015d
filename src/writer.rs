use crate::error::Result;
use crate::markers::MarkerSets;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// 1行のJSON
    #[default]
    Compact,
    /// インデント付き
    Pretty,
}

/// ワールド名から出力ファイルパスを決める
///
/// 名前なし → `markers.json`、それ以外 → `markers-<world>.json`
pub fn output_path_for_world(output_dir: &Path, world: Option<&str>) -> PathBuf {
    match world {
        Some(name) => output_dir.join(format!("markers-{}.json", name)),
        None => output_dir.join("markers.json"),
    }
}

/// マーカーセットをJSONで書き出す（既存ファイルは上書き）
pub fn write_marker_sets(path: &Path, marker_sets: &MarkerSets, format: OutputFormat) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    match format {
        OutputFormat::Compact => serde_json::to_writer(&mut writer, marker_sets)?,
        OutputFormat::Pretty => serde_json::to_writer_pretty(&mut writer, marker_sets)?,
    }
    writer.flush()?;
    Ok(())
}

//! 変換パイプラインの統合テスト
//!
//! CSV → マーカーJSONの一連の処理を一時ディレクトリで検証

use cubiomes_bluemap_markers::config::{MarkerConfig, WorldConfig};
use cubiomes_bluemap_markers::error::MarkerError;
use cubiomes_bluemap_markers::pipeline::{convert, ConvertOptions};
use cubiomes_bluemap_markers::reader::MalformedRows;
use cubiomes_bluemap_markers::writer::OutputFormat;
use serde_json::Value;
use std::path::Path;
use tempfile::tempdir;

const SAMPLE_CSV: &str = "\
Sep=;
Seed: 4242
MC: 1.21
Generated by cubiomes-viewer

seed;structure;x;z;details
4242;village;100;200
4242;fortress;-300;48
4242;village;-1024;512
4242;shipwreck;5;5
4242;end_city;9000;-9000
4242;trail_ruins;16;32
4242;village;0;0
";

fn write_csv(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("cubiomes-export.csv");
    std::fs::write(&path, content).expect("CSV書き込み失敗");
    path
}

fn options(dir: &Path) -> ConvertOptions {
    ConvertOptions {
        input: dir.join("cubiomes-export.csv"),
        output_dir: dir.to_path_buf(),
        ..Default::default()
    }
}

fn read_json(path: &Path) -> Value {
    let content = std::fs::read_to_string(path).expect("JSON読み込み失敗");
    serde_json::from_str(&content).expect("JSONパース失敗")
}

/// 仕様例: 村1件
#[test]
fn test_single_village_sample() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_csv(dir.path(), "h1\nh2\nh3\nh4\nh5\nh6\n1;village;100;200\n");

    let mut world = WorldConfig::unnamed(Default::default());
    world.icons.insert("village".into(), "village.png".into());
    let config = MarkerConfig { worlds: vec![world] };

    let report = convert(&config, &options(dir.path())).expect("変換失敗");
    assert_eq!(report.rows, 1);
    assert_eq!(report.outputs.len(), 1);
    assert_eq!(report.outputs[0].path, dir.path().join("markers.json"));

    let json = read_json(&dir.path().join("markers.json"));
    let marker = &json["village_set"]["markers"]["village_1"];
    assert_eq!(json["village_set"]["label"], "Villages");
    assert_eq!(marker["type"], "poi");
    assert_eq!(marker["label"], "Village No. 1");
    assert_eq!(marker["detail"], "A Village!");
    assert_eq!(marker["position"], serde_json::json!({"x": "100", "y": 64, "z": "200"}));
    assert_eq!(marker["icon"], "assets/village.png");
    assert_eq!(marker["anchor"], serde_json::json!({"x": 10, "y": 10}));
    assert_eq!(marker["min-distance"], 10);
    assert_eq!(marker["max-distance"], 10_000_000);
    assert_eq!(marker["classes"], serde_json::json!(["my-custom-class"]));
}

/// 組み込み設定でワールドごとにファイルが出力される
#[test]
fn test_builtin_worlds_output() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_csv(dir.path(), SAMPLE_CSV);

    let report = convert(&MarkerConfig::builtin(), &options(dir.path())).expect("変換失敗");
    assert_eq!(report.rows, 7);
    assert!(report.skipped.is_empty());

    let names: Vec<_> = report
        .outputs
        .iter()
        .map(|o| o.path.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(
        names,
        vec!["markers-overworld.json", "markers-nether.json", "markers-end.json"]
    );

    let overworld = read_json(&dir.path().join("markers-overworld.json"));
    let sets: Vec<_> = overworld.as_object().unwrap().keys().cloned().collect();
    assert_eq!(sets, vec!["village_set", "trail_ruins_set"]);
    assert_eq!(overworld["village_set"]["markers"].as_object().unwrap().len(), 3);
    assert_eq!(overworld["village_set"]["sorting"], 0);
    assert_eq!(overworld["trail_ruins_set"]["sorting"], 4);
    assert_eq!(overworld["trail_ruins_set"]["label"], "Trail Ruins");
    assert_eq!(
        overworld["village_set"]["markers"]["village_3"]["position"]["x"],
        "0"
    );

    let nether = read_json(&dir.path().join("markers-nether.json"));
    assert_eq!(nether["fortress_set"]["markers"]["fortress_1"]["position"]["z"], "48");
    assert_eq!(nether.as_object().unwrap().len(), 1);

    let end = read_json(&dir.path().join("markers-end.json"));
    assert_eq!(end["end_city_set"]["label"], "End Citys");

    assert_eq!(report.outputs[0].markers, 4);
    assert_eq!(report.outputs[1].markers, 1);
}

/// 同じ入力から同じバイト列が出力される
#[test]
fn test_output_is_deterministic() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_csv(dir.path(), SAMPLE_CSV);
    let config = MarkerConfig::builtin();

    convert(&config, &options(dir.path())).expect("変換失敗");
    let first = std::fs::read(dir.path().join("markers-overworld.json")).unwrap();

    convert(&config, &options(dir.path())).expect("変換失敗");
    let second = std::fs::read(dir.path().join("markers-overworld.json")).unwrap();

    assert_eq!(first, second);
}

/// 入力ファイルが無い場合は何も出力しない
#[test]
fn test_missing_input_creates_nothing() {
    let dir = tempdir().expect("Failed to create temp dir");

    let result = convert(&MarkerConfig::builtin(), &options(dir.path()));
    assert!(matches!(result, Err(MarkerError::InputNotFound(_))));

    let entries = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 0);
}

/// ワールド指定
#[test]
fn test_world_filter() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_csv(dir.path(), SAMPLE_CSV);

    let opts = ConvertOptions {
        worlds: vec!["nether".to_string()],
        ..options(dir.path())
    };
    let report = convert(&MarkerConfig::builtin(), &opts).expect("変換失敗");

    assert_eq!(report.outputs.len(), 1);
    assert!(dir.path().join("markers-nether.json").exists());
    assert!(!dir.path().join("markers-overworld.json").exists());
}

/// 存在しないワールド指定は出力前にエラー
#[test]
fn test_unknown_world() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_csv(dir.path(), SAMPLE_CSV);

    let opts = ConvertOptions {
        worlds: vec!["aether".to_string()],
        ..options(dir.path())
    };
    let result = convert(&MarkerConfig::builtin(), &opts);
    assert!(matches!(result, Err(MarkerError::UnknownWorld(_))));
    assert!(!dir.path().join("markers-overworld.json").exists());
}

/// 単一ワールドにまとめた出力
#[test]
fn test_single_world_output() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_csv(dir.path(), SAMPLE_CSV);

    let opts = ConvertOptions {
        format: OutputFormat::Pretty,
        ..options(dir.path())
    };
    let report = convert(&MarkerConfig::builtin().single(), &opts).expect("変換失敗");
    assert_eq!(report.outputs.len(), 1);
    assert!(report.outputs[0].world.is_none());

    let json = read_json(&dir.path().join("markers.json"));
    let sets: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    assert_eq!(
        sets,
        vec!["village_set", "fortress_set", "end_city_set", "trail_ruins_set"]
    );
    assert_eq!(report.outputs[0].markers, 6);
}

/// 不正行の扱い
#[test]
fn test_malformed_rows_policy() {
    let dir = tempdir().expect("Failed to create temp dir");
    let content = format!("{}4242;village\n", SAMPLE_CSV);
    write_csv(dir.path(), &content);

    let report = convert(&MarkerConfig::builtin(), &options(dir.path())).expect("変換失敗");
    assert_eq!(report.rows, 7);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line, 14);

    let strict = ConvertOptions {
        malformed: MalformedRows::Abort,
        ..options(dir.path())
    };
    let result = convert(&MarkerConfig::builtin(), &strict);
    assert!(matches!(result, Err(MarkerError::Parse { line: 14, .. })));
}

//! マーカー生成モジュール
//!
//! ## 処理フロー
//! 1. CSVに出現した順に構造物タイプを列挙
//! 2. アイコン設定に無いタイプはスキップ
//! 3. 座標ごとに1始まりの番号でPOIマーカーを作成

pub mod naming;
pub mod types;

pub use types::{Anchor, Marker, MarkerIcon, MarkerSet, MarkerSets, Position, MARKER_HEIGHT};

use crate::config::IconConfig;
use crate::reader::SeedPois;

/// アイコンが割り当てられた構造物タイプごとにマーカーセットを生成
///
/// セットの`sorting`はCSV内でのタイプの出現順（スキップしたタイプも数える）。
pub fn build_marker_sets(icons: &IconConfig, pois: &SeedPois) -> MarkerSets {
    let mut marker_sets = MarkerSets::new();

    for (j, (structure_type, coords)) in pois.iter().enumerate() {
        let Some(icon) = icons.get(structure_type) else {
            log::debug!("アイコン未設定のためスキップ: {}", structure_type);
            continue;
        };

        let icon = MarkerIcon::resolve(icon);
        let type_name = naming::display_name(structure_type);
        let mut marker_set = MarkerSet::new(naming::plural_display_name(structure_type), j);

        for (i, coord) in coords.iter().enumerate().map(|(i, c)| (i + 1, c)) {
            let position = Position {
                x: coord.x.clone(),
                y: MARKER_HEIGHT,
                z: coord.y.clone(),
            };
            marker_set.markers.insert(
                naming::marker_name(structure_type, i),
                Marker::poi(position, &type_name, i, &icon),
            );
        }

        marker_sets.insert(naming::marker_set_name(structure_type), marker_set);
    }

    marker_sets
}

/// 全セットのマーカー数
pub fn marker_count(marker_sets: &MarkerSets) -> usize {
    marker_sets.values().map(|s| s.markers.len()).sum()
}

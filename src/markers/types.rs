use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// マーカーのY座標（CSVは平面座標のみ）
pub const MARKER_HEIGHT: i32 = 64;
pub const MIN_DISTANCE: u32 = 10;
pub const MAX_DISTANCE: u32 = 10_000_000;
pub const DEFAULT_CLASS: &str = "my-custom-class";

/// BlueMapの"web"フォルダからの相対パス
pub const ASSETS_DIR: &str = "assets";
pub const FALLBACK_ICON: &str = "assets/poi.svg";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: String,
    pub y: i32,
    pub z: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    pub x: i32,
    pub y: i32,
}

impl Anchor {
    /// 汎用アイコン用
    pub const FALLBACK: Anchor = Anchor { x: 25, y: 45 };
    pub const ICON: Anchor = Anchor { x: 10, y: 10 };
}

/// 解決済みのアイコンとアンカー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerIcon {
    pub path: String,
    pub anchor: Anchor,
}

impl MarkerIcon {
    pub fn resolve(icon: &str) -> Self {
        if icon.is_empty() {
            Self {
                path: FALLBACK_ICON.to_string(),
                anchor: Anchor::FALLBACK,
            }
        } else {
            Self {
                path: format!("{}/{}", ASSETS_DIR, icon),
                anchor: Anchor::ICON,
            }
        }
    }
}

/// POIマーカー（BlueMapのmarker定義）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    #[serde(rename = "type")]
    pub kind: String,
    pub position: Position,
    /// webuiに表示される名前
    pub label: String,
    /// HTML可
    pub detail: String,
    pub icon: String,
    pub anchor: Anchor,
    pub sorting: usize,
    pub listed: bool,
    pub classes: Vec<String>,
    #[serde(rename = "min-distance")]
    pub min_distance: u32,
    #[serde(rename = "max-distance")]
    pub max_distance: u32,
}

impl Marker {
    pub fn poi(position: Position, display_name: &str, index: usize, icon: &MarkerIcon) -> Self {
        Self {
            kind: "poi".to_string(),
            position,
            label: format!("{} No. {}", display_name, index),
            detail: format!("A {}!", display_name),
            icon: icon.path.clone(),
            anchor: icon.anchor,
            sorting: index,
            listed: true,
            classes: vec![DEFAULT_CLASS.to_string()],
            min_distance: MIN_DISTANCE,
            max_distance: MAX_DISTANCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerSet {
    pub label: String,
    pub toggleable: bool,
    #[serde(rename = "default-hidden")]
    pub default_hidden: bool,
    pub sorting: usize,
    pub markers: IndexMap<String, Marker>,
}

impl MarkerSet {
    pub fn new(label: String, sorting: usize) -> Self {
        Self {
            label,
            toggleable: true,
            default_hidden: true,
            sorting,
            markers: IndexMap::new(),
        }
    }
}

/// マーカーセット名 → マーカーセット
pub type MarkerSets = IndexMap<String, MarkerSet>;

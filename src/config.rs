//! ワールド別アイコン設定
//!
//! 構造物タイプ → アイコンファイル名の対応をワールドごとに持つ。
//! 設定に無いタイプはマーカーセットを生成しない。

use crate::error::{MarkerError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// 構造物タイプ → アイコンファイル名（空文字はアイコン未割当）
pub type IconConfig = IndexMap<String, String>;

/// 1ワールド分の設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// ワールド名（Noneは名前なしの単一ワールド）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub icons: IconConfig,
}

impl WorldConfig {
    pub fn named(name: &str, icons: &[(&str, &str)]) -> Self {
        Self {
            name: Some(name.to_string()),
            icons: to_icon_config(icons),
        }
    }

    pub fn unnamed(icons: IconConfig) -> Self {
        Self { name: None, icons }
    }

    /// 表示用の名前
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(default)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerConfig {
    pub worlds: Vec<WorldConfig>,
}

// 件数が多すぎてwebuiが重くなるもの（ruined_portal, buried_treasure,
// shipwreck, ocean_ruin, amethyst_geode）は既定では出力しない
const OVERWORLD_ICONS: &[(&str, &str)] = &[
    ("stronghold", "stronghold.png"),
    ("mansion", "mansion.png"),
    ("swamp_hut", "hut.png"),
    ("monument", "monument.png"),
    ("ancient_city", "ancient_city.png"),
    ("desert_well", "well.png"),
    ("jungle_pyramid", "jungle.png"),
    ("igloo", "igloo.png"),
    ("pillager_outpost", "outpost.png"),
    ("desert_pyramid", "desert.png"),
    ("village", "village.png"),
    ("trail_ruins", "trails.png"),
];

const NETHER_ICONS: &[(&str, &str)] = &[
    ("ruined_portal_nether", "portal.png"),
    ("fortress", "fortress.png"),
    ("bastion_remnant", "bastion.png"),
];

const END_ICONS: &[(&str, &str)] = &[
    ("end_city", "endcity.png"),
    ("end_gateway", "gateway.png"),
];

fn to_icon_config(icons: &[(&str, &str)]) -> IconConfig {
    icons
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl MarkerConfig {
    /// 組み込みの3ワールド設定（overworld / nether / end）
    pub fn builtin() -> Self {
        Self {
            worlds: vec![
                WorldConfig::named("overworld", OVERWORLD_ICONS),
                WorldConfig::named("nether", NETHER_ICONS),
                WorldConfig::named("end", END_ICONS),
            ],
        }
    }

    /// 全ワールドのアイコンを1つの名前なしワールドにまとめる
    ///
    /// 同じタイプが複数ワールドにある場合は先に出たものを使う。
    pub fn single(&self) -> Self {
        let mut icons = IconConfig::new();
        for world in &self.worlds {
            for (structure_type, icon) in &world.icons {
                icons
                    .entry(structure_type.clone())
                    .or_insert_with(|| icon.clone());
            }
        }
        Self {
            worlds: vec![WorldConfig::unnamed(icons)],
        }
    }

    /// 設定の読み込み
    ///
    /// 優先順位:
    /// 1. 明示されたパス（存在しなければエラー）
    /// 2. 既定パスの設定ファイル
    /// 3. 組み込み設定
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            if !path.is_file() {
                return Err(MarkerError::Config(format!(
                    "設定ファイルが見つかりません: {}",
                    path.display()
                )));
            }
            return Self::load_from(path);
        }

        match Self::config_path() {
            Ok(default_path) if default_path.is_file() => Self::load_from(&default_path),
            _ => {
                log::debug!("設定ファイルなし、組み込み設定を使用");
                Ok(Self::builtin())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: MarkerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        log::info!("設定を読み込み: {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// 組み込み設定を書き出す（既存ファイルは`force`時のみ上書き）
    pub fn init(path: &Path, force: bool) -> Result<PathBuf> {
        if path.exists() && !force {
            return Err(MarkerError::ConfigExists(path.display().to_string()));
        }
        Self::builtin().save(path)?;
        Ok(path.to_path_buf())
    }

    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| MarkerError::Config("設定ディレクトリが見つかりません".into()))?;
        Ok(dir.join("cubiomes-markers").join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.worlds.is_empty() {
            return Err(MarkerError::Config("ワールドが1つもありません".into()));
        }

        let mut seen = HashSet::new();
        for world in &self.worlds {
            if let Some(name) = &world.name {
                // 出力ファイル名 markers-<name>.json に使う
                if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
                    return Err(MarkerError::Config(format!(
                        "ワールド名が不正です（空・パス区切りは不可）: {}",
                        name
                    )));
                }
            }
            if !seen.insert(world.name.as_deref()) {
                return Err(MarkerError::Config(format!(
                    "ワールド名が重複しています: {}",
                    world.display_name()
                )));
            }
        }
        Ok(())
    }

    pub fn world(&self, name: &str) -> Option<&WorldConfig> {
        self.worlds.iter().find(|w| w.name.as_deref() == Some(name))
    }

    /// 指定名のワールドだけを設定順で返す（空なら全ワールド）
    pub fn select(&self, names: &[String]) -> Result<Vec<&WorldConfig>> {
        if names.is_empty() {
            return Ok(self.worlds.iter().collect());
        }

        for name in names {
            if self.world(name).is_none() {
                return Err(MarkerError::UnknownWorld(name.clone()));
            }
        }

        Ok(self
            .worlds
            .iter()
            .filter(|w| {
                w.name
                    .as_ref()
                    .is_some_and(|n| names.iter().any(|s| s == n))
            })
            .collect())
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

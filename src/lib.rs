//! cubiomes-viewerのCSVエクスポートをBlueMapのマーカーセットJSONに変換する

pub mod cli;
pub mod config;
pub mod error;
pub mod markers;
pub mod pipeline;
pub mod reader;
pub mod writer;

pub use config::{IconConfig, MarkerConfig, WorldConfig};
pub use error::{MarkerError, Result};
pub use markers::{build_marker_sets, MarkerSets};
pub use pipeline::{convert, ConversionReport, ConvertOptions};
pub use reader::{read_cubiomes_csv, MalformedRows, SeedPois};
pub use writer::{write_marker_sets, OutputFormat};

use clap::Parser;
use cubiomes_bluemap_markers::{cli, config, error, pipeline};
use cli::{log_level, Cli, Commands, ConvertArgs};
use config::MarkerConfig;
use error::{MarkerError, Result};

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if let Some(level) = log_level(cli.verbose, std::env::var_os("RUST_LOG").is_some()) {
        logger.filter_level(level);
    }
    logger.init();

    match run(cli) {
        Ok(()) => {}
        Err(e @ MarkerError::InputNotFound(_)) => {
            println!("{}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("エラー: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Convert(ConvertArgs::default()));

    match command {
        Commands::Convert(args) => {
            println!("🗺  cubiomes-markers - マーカー生成\n");

            let options = args.to_options();
            // 設定より先に入力を確認し、案内文を優先する
            if !options.input.is_file() {
                return Err(MarkerError::InputNotFound(options.input.display().to_string()));
            }

            let config = MarkerConfig::load(cli.config.as_deref())?;
            let config = if args.single { config.single() } else { config };

            println!("[1/2] {} を読み込み中...", options.input.display());
            let report = pipeline::convert(&config, &options)?;
            println!("✔ {}件のPOIを読み込み", report.rows);
            if !report.skipped.is_empty() {
                println!("  ⚠ {}行をスキップ（フィールド不足）", report.skipped.len());
            }

            println!("\n[2/2] マーカーを出力中...");
            for output in &report.outputs {
                println!(
                    "✔ {}: {}セット / {}マーカー → {}",
                    output.world.as_deref().unwrap_or("(default)"),
                    output.marker_sets,
                    output.markers,
                    output.path.display()
                );
            }

            println!("\n✅ 完了");
            println!("  JSONの内容を各ワールドのBlueMap設定ファイルにコピーしてください");
        }

        Commands::Config { show, init, force } => {
            if init {
                let path = MarkerConfig::init(&MarkerConfig::config_path()?, force)?;
                println!("✔ 設定ファイルを作成しました: {}", path.display());
            }

            if show || !init {
                let config = MarkerConfig::load(cli.config.as_deref())?;
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        }

        Commands::Icons => {
            let config = MarkerConfig::load(cli.config.as_deref())?;
            println!("BlueMapの web/assets/ に以下のアイコンを配置してください:");
            for world in &config.worlds {
                println!("\n[{}]", world.display_name());
                for (structure_type, icon) in &world.icons {
                    let icon = if icon.is_empty() {
                        "poi.svg (汎用)"
                    } else {
                        icon.as_str()
                    };
                    println!("  {:<24} {}", structure_type, icon);
                }
            }
        }
    }

    Ok(())
}

use clap::Parser;
use photo_prune_common::normalize::canonical_time;
use photo_prune_rust::{cli, config, error, pipeline};
use cli::{Cli, Commands};
use config::{Config, PathOverrides};
use error::Result;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    // RUST_LOG が指定されていればそれを優先
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Convert { input, output } => {
            println!("📱 photo-prune - 端末エクスポート変換\n");

            let paths = config.resolve(PathOverrides {
                shortcut_export: input,
                local_inventory: output,
                ..Default::default()
            });

            println!("- 変換中: {}", paths.shortcut_export.display());
            let count = pipeline::run_convert(&paths)?;
            println!("✔ {}件をローカル在庫に出力: {}", count, paths.local_inventory.display());

            println!("\n✅ 変換完了");
        }

        Commands::Diff { local, cloud, output } => {
            println!("🔍 photo-prune - 在庫突合\n");

            let paths = config.resolve(PathOverrides {
                local_inventory: local,
                cloud_inventory: cloud,
                output,
                ..Default::default()
            });

            println!("- ローカル在庫: {}", paths.local_inventory.display());
            println!("- クラウド在庫: {}", paths.cloud_inventory.display());
            let result = pipeline::run_diff(&paths)?;

            let stats = &result.stats;
            println!("\n突合結果:");
            println!("  境界日時: {}", canonical_time(&result.boundary));
            println!("  ローカル在庫: {}件", stats.local_records);
            println!("  クラウド在庫: {}件", stats.cloud_records);
            println!("  拡張子で除外: {}件", stats.skipped_extension);
            println!("  境界より前: {}件", stats.before_boundary);
            println!("  ローカルと一致: {}件", stats.matched_local);
            println!("  削除候補: {}件", stats.candidates);
            println!("\n✔ 削除候補を保存: {}", paths.output.display());

            println!("\n✅ 突合完了");
        }

        Commands::Config { set_data_dir, show } => {
            let mut config = config;

            if let Some(dir) = set_data_dir {
                config.set_data_dir(dir)?;
                println!("✔ データフォルダを設定しました");
            }

            if show {
                let paths = config.resolve(PathOverrides::default());
                println!("設定:");
                println!("  データフォルダ: {}", config.data_dir.display());
                println!("  端末エクスポート: {}", paths.shortcut_export.display());
                println!("  ローカル在庫: {}", paths.local_inventory.display());
                println!("  クラウド在庫: {}", paths.cloud_inventory.display());
                println!("  削除候補: {}", paths.output.display());
            }
        }
    }

    Ok(())
}

use anyhow::Context;
use clap::Parser;
use movie_catalog::app::browse::run_browser;
use movie_catalog::app::export::Exporter;
use movie_catalog::app::render;
use movie_catalog::utils::error::ErrorSeverity;
use movie_catalog::utils::{logger, validation::validate_path, validation::Validate};
use movie_catalog::{
    Catalog, CatalogConfig, CatalogEngine, CatalogError, CatalogFilter, CatalogPipeline, CliConfig,
    Command, LocalStorage, OmdbClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, cli.log_json);

    tracing::info!("Starting movie-catalog CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入目錄
    let loaded = match &cli.catalog {
        Some(path) => {
            tracing::info!("📁 Loading catalog from: {}", path);
            CatalogConfig::from_file(path)
        }
        None => CatalogConfig::builtin(),
    };
    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    config.apply_overrides(
        cli.endpoint.as_deref(),
        cli.api_key.as_deref(),
        cli.concurrent_requests,
    );

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    // 不需要查詢 OMDb 的指令直接用空目錄執行
    if cli.command.is_offline() {
        return run_command(&cli, &Catalog::default()).await;
    }

    let source = match OmdbClient::from_config(&config) {
        Ok(source) => source,
        Err(e) => exit_with(&e),
    };
    let engine = CatalogEngine::new(CatalogPipeline::new(source, config));

    let catalog = match engine.load().await {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(
                "❌ Catalog load failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            exit_with(&e);
        }
    };

    run_command(&cli, &catalog).await
}

async fn run_command(cli: &CliConfig, catalog: &Catalog) -> anyhow::Result<()> {
    match &cli.command {
        Command::List { category, search } => {
            let filter = CatalogFilter::new(*category, search.clone().unwrap_or_default());
            let movies = catalog.filter(&filter);
            if cli.json {
                println!("{}", render::listing_json(&movies, &filter)?);
            } else {
                print!("{}", render::render_header(catalog));
                println!();
                print!("{}", render::render_listing(&movies, &filter));
            }
        }
        Command::Show { imdb_id } => {
            let details = match catalog.details(imdb_id) {
                Some(details) => details,
                None => exit_with(&CatalogError::NotFound {
                    query: imdb_id.clone(),
                }),
            };
            if cli.json {
                println!("{}", render::details_json(&details)?);
            } else {
                print!("{}", render::render_details(&details));
            }
        }
        Command::Export {
            format,
            output,
            category,
            search,
        } => {
            validate_path("output", output)?;
            let filter = CatalogFilter::new(*category, search.clone().unwrap_or_default());
            let movies = catalog.filter(&filter);
            let exporter = Exporter::new(LocalStorage::new(output.clone()));
            let path = exporter
                .export(&movies, *format)
                .await
                .with_context(|| format!("failed to export catalog to {}", output))?;
            println!("📁 Output saved to: {}", path);
        }
        Command::Browse => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            run_browser(catalog, stdin.lock(), stdout.lock()).context("browse session failed")?;
        }
        Command::Categories => {
            if cli.json {
                println!("{}", render::categories_json()?);
            } else {
                print!("{}", render::render_categories(Default::default()));
            }
        }
    }

    Ok(())
}

/// 輸出使用者看得懂的錯誤並依嚴重程度決定退出碼
fn exit_with(e: &CatalogError) -> ! {
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 4,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

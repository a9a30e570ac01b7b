use clap::Parser;
use folio_site::domain::contact::ContactSubmission;
use folio_site::utils::error::ErrorSeverity;
use folio_site::utils::{logger, validation::Validate};
use folio_site::{
    App, CliConfig, Command, FormStatus, HttpFormRelay, LocalStorage, PageRenderer, SiteConfig,
    SiteError,
};

fn load_config(cli: &CliConfig) -> Result<SiteConfig, SiteError> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            SiteConfig::from_file(path)?
        }
        None => SiteConfig::default(),
    };

    // 套用命令列覆蓋設定
    if let Some(theme) = cli.theme {
        config.site.theme = theme;
        tracing::info!("🔧 Theme overridden to: {}", theme);
    }

    config.validate()?;
    Ok(config)
}

async fn run(cli: CliConfig) -> Result<(), SiteError> {
    let config = load_config(&cli)?;
    let relay = HttpFormRelay::new(config.relay.endpoint.clone());
    let mut app = App::new(&config, relay);

    match cli.command {
        Command::Render { output } => {
            let directory = output.unwrap_or_else(|| config.output.directory.clone());
            let storage = LocalStorage::new(&directory);
            let renderer = PageRenderer::new(
                config.site.theme,
                config.site.base_path.clone(),
                config.identity(),
            );
            let bytes = renderer.write_page(&storage, &app.view(0)).await?;
            println!("✅ Wrote {}/index.html ({} bytes)", directory, bytes);
        }
        Command::Contact {
            name,
            email,
            subject,
            message,
        } => {
            app.contact
                .fill(ContactSubmission::new(name, email, subject, message));
            match app.contact.submit().await {
                Ok(FormStatus::Success) => println!("✅ Message sent"),
                Ok(status) => {
                    // 回傳 relay 的原始錯誤
                    return Err(app.contact.take_failure().unwrap_or_else(|| {
                        SiteError::ConfigError {
                            message: format!("Unexpected form status: {:?}", status),
                        }
                    }));
                }
                Err(errors) => {
                    for (field, error) in errors.iter() {
                        eprintln!("  {}: {}", field, error.message(field));
                    }
                    return Err(SiteError::ValidationError {
                        message: format!("{} field(s) need attention", errors.len()),
                    });
                }
            }
        }
        Command::Sections => {
            for id in app.shell.scroll_spy().sections() {
                println!("{}", id);
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!(
            "❌ Command failed: {} (Severity: {:?})",
            e,
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 2,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

use clap::Parser;
use osdk::utils::logger;
use osdk::{
    Cli, Commands, Esp32Helper, HelperRegistry, IdfForwarder, IdfInvocation, ProjectStatus,
    Workspace,
};

fn main() {
    let cli = Cli::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting osdk CLI");
    if cli.verbose {
        tracing::debug!("CLI args: {:?}", cli);
    }

    if let Err(e) = run(&cli) {
        tracing::error!("❌ Command failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());

        // 輸出用戶友好的錯誤信息
        eprintln!("❌ {}", e);
        eprintln!("💡 建議: {}", e.recovery_suggestion());

        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> osdk::Result<()> {
    // 以目前目錄為專案根目錄，顯式建構 workspace
    let cwd = std::env::current_dir()?;
    let workspace = Workspace::discover(&cwd)?;

    match &cli.command {
        Commands::Idf {
            idf_command,
            idf_flags,
        } => {
            // 註冊各平台助手
            let mut helpers = HelperRegistry::new();
            helpers.register(Box::new(Esp32Helper::new()));

            let forwarder = IdfForwarder::new(&workspace, &helpers);
            let invocation = IdfInvocation::new(idf_command.clone(), idf_flags.clone());
            forwarder.run(&invocation)?;

            println!("✅ Command completed successfully!");
        }
        Commands::Config { platform } => {
            let platform = osdk::core::project::configure(&workspace, platform)?;
            println!("✅ Platform set to {}", platform);
        }
        Commands::Info => {
            let status = osdk::core::project::status(&workspace)?;
            display_status(&status);
        }
    }

    Ok(())
}

fn display_status(status: &ProjectStatus) {
    println!("📋 Project Summary:");
    println!("  Project: {} v{}", status.name, status.version);

    if status.configured {
        println!(
            "  Platform: {}",
            status.platform.as_deref().unwrap_or("(not set)")
        );
    } else {
        println!("  Platform: not configured");
    }
}

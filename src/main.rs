use caser::config::cli::StderrNotifier;
use caser::utils::logger;
use caser::{CaseCommand, CaserError, CliConfig, ConversionReport, Settings, StdioBuffer, TransformMode};
use clap::error::ErrorKind;
use clap::Parser;

/// 參數錯誤與設定錯誤共用結束碼 1；2 保留給編碼錯誤
const USAGE_EXIT_CODE: i32 = 1;

fn main() -> anyhow::Result<()> {
    let cli = match CliConfig::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => USAGE_EXIT_CODE,
            };
            e.print()?;
            std::process::exit(code);
        }
    };

    if cli.list_modes {
        for mode in TransformMode::ALL {
            println!("{}\t{}", mode, mode.label());
        }
        return Ok(());
    }

    // 合併命令列與設定檔
    let settings = match Settings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, None);
            fail(&e);
        }
    };

    if settings.json {
        logger::init_json_logger(settings.log_level.as_deref());
    } else {
        logger::init_cli_logger(settings.verbose, settings.log_level.as_deref());
    }
    tracing::debug!("Effective settings: {:?}", settings);

    match convert(&settings) {
        Ok(report) => {
            if settings.json {
                eprintln!("{}", report.to_json()?);
            }
            Ok(())
        }
        Err(e) => fail(&e),
    }
}

fn convert(settings: &Settings) -> caser::Result<ConversionReport> {
    let buffer = StdioBuffer::read_from(std::io::stdin().lock(), std::io::stdout(), settings.encoding)?;
    let notifier = StderrNotifier::new(settings.quiet || settings.json);

    let mut command = CaseCommand::new(buffer, notifier);
    command.run(settings.mode)
}

fn fail(e: &CaserError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

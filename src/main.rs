use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use flow_units::config::{self, DEFAULT_CONFIG_PATH};
use flow_units::i18n::{self, keys, Translator};
use flow_units::ui_cli::{Cli, Command};
use flow_units::{app, logging};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let mut cfg = match config::load_or_default(&config_path) {
        Ok(cfg) => cfg,
        Err(err) => {
            let tr = Translator::new(&i18n::resolve_language(cli.lang.as_deref(), None));
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            return ExitCode::FAILURE;
        }
    };

    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(&cfg.language));
    let tr = Translator::new_with_pack(&lang, cli.locales.as_deref());
    let command = cli.command.unwrap_or(Command::Interactive);

    match app::run(command, &mut cfg, &config_path, &tr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

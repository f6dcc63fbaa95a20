use std::path::Path;

use crate::config::{Config, ConfigError};
use crate::i18n::{self, Translator};
use crate::quantity::VolumetricFlow;
use crate::ui_cli::{self, Command, MenuChoice};
use crate::units::VolumetricFlowUnit;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 대화형 입력 중 stdin 이 닫힘
    InputClosed,
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::InputClosed => write!(f, "입력이 닫혔습니다"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::InputClosed => None,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

/// 인자와 설정을 합친 변환 요청.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest {
    pub flow: VolumetricFlow,
    pub to: VolumetricFlowUnit,
    pub precision: Option<u8>,
}

/// 생략된 단위와 자릿수를 설정의 기본값으로 채운다.
pub fn resolve_conversion(
    value: f64,
    from: Option<VolumetricFlowUnit>,
    to: Option<VolumetricFlowUnit>,
    precision: Option<u8>,
    config: &Config,
) -> ConversionRequest {
    let from = from.unwrap_or(config.default_from);
    ConversionRequest {
        flow: VolumetricFlow::new(value, from),
        to: to.unwrap_or(config.default_to),
        precision: precision.or(config.precision),
    }
}

/// 하위 명령 하나를 실행한다. 대화형 명령이면 메뉴 루프로 들어간다.
pub fn run(
    command: Command,
    config: &mut Config,
    config_path: &Path,
    tr: &Translator,
) -> Result<(), AppError> {
    tracing::debug!(?command, lang = tr.language_code(), "명령 실행");
    match command {
        Command::Convert {
            value,
            from,
            to,
            precision,
        } => {
            let req = resolve_conversion(value, from, to, precision, config);
            println!(
                "{}",
                ui_cli::render_conversion(req.flow, req.to, req.precision)
            );
        }
        Command::Table {
            value,
            from,
            precision,
        } => {
            let req = resolve_conversion(value, from, None, precision, config);
            for line in ui_cli::render_table(req.flow, req.precision) {
                println!("{line}");
            }
        }
        Command::Units => {
            for line in ui_cli::render_units() {
                println!("{line}");
            }
        }
        Command::Interactive => run_interactive(config, config_path, tr)?,
    }
    Ok(())
}

/// CLI 대화형 메뉴 루프를 실행한다.
fn run_interactive(
    config: &mut Config,
    config_path: &Path,
    tr: &Translator,
) -> Result<(), AppError> {
    loop {
        let choice = match ui_cli::main_menu(tr) {
            Ok(choice) => choice,
            Err(AppError::InputClosed) => MenuChoice::Exit,
            Err(e) => return Err(e),
        };
        let step = match choice {
            MenuChoice::Convert => ui_cli::handle_convert(tr, config),
            MenuChoice::Table => ui_cli::handle_table(tr, config),
            MenuChoice::Units => {
                ui_cli::handle_units(tr);
                Ok(())
            }
            MenuChoice::Settings => change_settings(config, config_path, tr),
            MenuChoice::Exit => {
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        };
        match step {
            Ok(()) => {}
            Err(AppError::InputClosed) => break,
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

fn change_settings(
    config: &mut Config,
    config_path: &Path,
    tr: &Translator,
) -> Result<(), AppError> {
    if ui_cli::handle_settings(tr, config)? {
        config.save(config_path)?;
        println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
    }
    Ok(())
}

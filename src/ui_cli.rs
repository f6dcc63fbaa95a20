use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::quantity::VolumetricFlow;
use crate::units::VolumetricFlowUnit;

/// 명령행 인자.
#[derive(Debug, Parser)]
#[command(name = "flow_units_cli", version, about = "Volumetric flow unit converter")]
pub struct Cli {
    /// 설정 파일 경로 (기본: flow_units.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// UI 언어 (ko, en, auto)
    #[arg(long, global = true)]
    pub lang: Option<String>,
    /// TOML 언어팩 디렉터리
    #[arg(long, global = true)]
    pub locales: Option<PathBuf>,
    /// 로그 상세도. 여러 번 줄수록 자세해진다.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// 값을 한 단위에서 다른 단위로 변환한다.
    #[command(allow_negative_numbers = true)]
    Convert {
        value: f64,
        #[arg(long, value_enum)]
        from: Option<VolumetricFlowUnit>,
        #[arg(long, value_enum)]
        to: Option<VolumetricFlowUnit>,
        #[arg(long)]
        precision: Option<u8>,
    },
    /// 값을 모든 단위로 환산해 표로 보여준다.
    #[command(allow_negative_numbers = true)]
    Table {
        value: f64,
        #[arg(long, value_enum)]
        from: Option<VolumetricFlowUnit>,
        #[arg(long)]
        precision: Option<u8>,
    },
    /// 지원 단위를 나열한다.
    Units,
    /// 대화형 메뉴.
    Interactive,
}

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    Table,
    Units,
    Settings,
    Exit,
}

/// clap 에서 쓰는 단위 이름. 예: `liters-per-minute`.
pub fn unit_name(unit: VolumetricFlowUnit) -> String {
    unit.to_possible_value()
        .map(|v| v.get_name().to_string())
        .unwrap_or_else(|| format!("{unit:?}"))
}

/// 자릿수가 있으면 그만큼, 없으면 f64 기본 출력.
pub fn format_value(value: f64, precision: Option<u8>) -> String {
    match precision.map(usize::from) {
        Some(p) => format!("{value:.p$}"),
        None => value.to_string(),
    }
}

/// 변환 결과 한 줄. 예: `6000 L/min`.
pub fn render_conversion(
    flow: VolumetricFlow,
    to: VolumetricFlowUnit,
    precision: Option<u8>,
) -> String {
    let shown = flow.display_in(to);
    match precision.map(usize::from) {
        Some(p) => format!("{shown:.p$}"),
        None => shown.to_string(),
    }
}

/// 모든 단위로 환산한 표.
pub fn render_table(flow: VolumetricFlow, precision: Option<u8>) -> Vec<String> {
    VolumetricFlowUnit::ALL
        .iter()
        .map(|&unit| {
            format!(
                "{:>8}  {}",
                unit.symbol(),
                format_value(flow.value_in(unit), precision)
            )
        })
        .collect()
}

/// 단위 이름, 기호, 1 m³/s 기준 계수 목록.
pub fn render_units() -> Vec<String> {
    VolumetricFlowUnit::ALL
        .iter()
        .map(|&unit| {
            format!(
                "{:<30} {:<8} {}",
                unit_name(unit),
                unit.symbol(),
                unit.factor()
            )
        })
        .collect()
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("\n{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CONVERT));
    println!("{}", tr.t(keys::MAIN_MENU_TABLE));
    println!("{}", tr.t(keys::MAIN_MENU_UNITS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Convert),
            "2" => return Ok(MenuChoice::Table),
            "3" => return Ok(MenuChoice::Units),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_convert(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("\n{}", tr.t(keys::CONVERT_HEADING));
    let value = read_f64(tr)?;
    let from = read_unit(tr, tr.t(keys::CONVERT_FROM_UNIT), cfg.default_from)?;
    let to = read_unit(tr, tr.t(keys::CONVERT_TO_UNIT), cfg.default_to)?;
    let flow = VolumetricFlow::new(value, from);
    println!(
        "{}: {}",
        tr.t(keys::CONVERT_RESULT),
        render_conversion(flow, to, cfg.precision)
    );
    Ok(())
}

/// 전체 단위 표 메뉴를 처리한다.
pub fn handle_table(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("\n{}", tr.t(keys::TABLE_HEADING));
    let value = read_f64(tr)?;
    let from = read_unit(tr, tr.t(keys::CONVERT_FROM_UNIT), cfg.default_from)?;
    for line in render_table(VolumetricFlow::new(value, from), cfg.precision) {
        println!("{line}");
    }
    Ok(())
}

pub fn handle_units(tr: &Translator) {
    println!("\n{}", tr.t(keys::UNITS_HEADING));
    for line in render_units() {
        println!("{line}");
    }
}

/// 설정 메뉴를 처리한다. 설정이 바뀌었으면 true.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("\n{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{}: {}",
        tr.t(keys::SETTINGS_CURRENT_FROM),
        cfg.default_from.symbol()
    );
    println!(
        "{}: {}",
        tr.t(keys::SETTINGS_CURRENT_TO),
        cfg.default_to.symbol()
    );
    println!(
        "{}: {}",
        tr.t(keys::SETTINGS_CURRENT_PRECISION),
        cfg.precision
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            cfg.default_from = read_unit(tr, tr.t(keys::CONVERT_FROM_UNIT), cfg.default_from)?;
        }
        "2" => {
            cfg.default_to = read_unit(tr, tr.t(keys::CONVERT_TO_UNIT), cfg.default_to)?;
        }
        "3" => {
            let s = read_line(tr.t(keys::SETTINGS_PROMPT_PRECISION))?;
            match parse_precision(&s) {
                Some(p) => cfg.precision = p,
                None => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    return Ok(false);
                }
            }
        }
        "0" => return Ok(false),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(false);
        }
    }
    Ok(true)
}

/// 자릿수 입력을 해석한다. 빈 값은 `Some(None)`(기본 출력), 0~255 밖이거나 숫자가 아니면 `None`.
pub fn parse_precision(input: &str) -> Option<Option<u8>> {
    let s = input.trim();
    if s.is_empty() {
        return Some(None);
    }
    s.parse::<u8>().ok().map(Some)
}

/// 메뉴 번호(1부터)를 단위로 바꾼다.
pub fn unit_from_menu_number(n: usize) -> Option<VolumetricFlowUnit> {
    n.checked_sub(1)
        .and_then(|i| VolumetricFlowUnit::ALL.get(i))
        .copied()
}

fn read_unit(
    tr: &Translator,
    label: &str,
    default: VolumetricFlowUnit,
) -> Result<VolumetricFlowUnit, AppError> {
    println!("{label} {}", tr.t(keys::UNIT_KEEP_DEFAULT));
    for (i, unit) in VolumetricFlowUnit::ALL.iter().enumerate() {
        let marker = if *unit == default { "*" } else { " " };
        println!("{marker}{:>2}) {}", i + 1, unit.symbol());
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
        let sel = sel.trim();
        if sel.is_empty() {
            return Ok(default);
        }
        if let Some(unit) = sel.parse::<usize>().ok().and_then(unit_from_menu_number) {
            return Ok(unit);
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}

fn read_f64(tr: &Translator) -> Result<f64, AppError> {
    loop {
        let s = read_line(tr.t(keys::PROMPT_VALUE))?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

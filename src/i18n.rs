use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CONVERT: &str = "main_menu.convert";
    pub const MAIN_MENU_TABLE: &str = "main_menu.table";
    pub const MAIN_MENU_UNITS: &str = "main_menu.units";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_VALUE: &str = "prompt.value";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const CONVERT_HEADING: &str = "convert.heading";
    pub const CONVERT_FROM_UNIT: &str = "convert.from_unit";
    pub const CONVERT_TO_UNIT: &str = "convert.to_unit";
    pub const CONVERT_RESULT: &str = "convert.result";

    pub const TABLE_HEADING: &str = "table.heading";
    pub const UNITS_HEADING: &str = "units.heading";
    pub const UNIT_KEEP_DEFAULT: &str = "unit.keep_default";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_FROM: &str = "settings.current_from";
    pub const SETTINGS_CURRENT_TO: &str = "settings.current_to";
    pub const SETTINGS_CURRENT_PRECISION: &str = "settings.current_precision";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_PRECISION: &str = "settings.prompt_precision";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        if overrides.is_some() {
            tracing::debug!(lang = lang_code, "언어팩 로드");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 순이며, 모르는 키는 키 자체를 돌려준다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        let built_in = match self.lang {
            Language::En => en(key),
            Language::Ko => ko(key),
        };
        built_in.unwrap_or(key)
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 중첩 테이블은 점으로 이은 키로 펼친다.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = dir.join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // en-us → en
    let (base, _) = lang.split_once(['-', '_'])?;
    try_load(base)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use self::keys::*;
    let s = match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "=== 체적 유량 변환기 ===",
        MAIN_MENU_CONVERT => "1) 단위 변환",
        MAIN_MENU_TABLE => "2) 전체 단위 표",
        MAIN_MENU_UNITS => "3) 단위 목록",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_VALUE => "값 입력: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        CONVERT_HEADING => "-- 단위 변환 --",
        CONVERT_FROM_UNIT => "입력 단위",
        CONVERT_TO_UNIT => "변환 단위",
        CONVERT_RESULT => "변환 결과",
        TABLE_HEADING => "-- 전체 단위 표 --",
        UNITS_HEADING => "-- 지원 단위 (1 m³/s 기준 계수) --",
        UNIT_KEEP_DEFAULT => "(엔터: 기본값 유지)",
        SETTINGS_HEADING => "-- 설정 --",
        SETTINGS_CURRENT_FROM => "기본 입력 단위",
        SETTINGS_CURRENT_TO => "기본 출력 단위",
        SETTINGS_CURRENT_PRECISION => "출력 소수 자릿수",
        SETTINGS_OPTIONS => "1) 기본 입력 단위 변경  2) 기본 출력 단위 변경  3) 자릿수 변경  0) 돌아가기",
        SETTINGS_PROMPT_PRECISION => "자릿수 (빈 값이면 기본 출력): ",
        SETTINGS_INVALID => "잘못된 선택입니다.",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        _ => return None,
    };
    Some(s)
}

fn en(key: &str) -> Option<&'static str> {
    use self::keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "=== Volumetric Flow Converter ===",
        MAIN_MENU_CONVERT => "1) Convert",
        MAIN_MENU_TABLE => "2) Table of all units",
        MAIN_MENU_UNITS => "3) List units",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_VALUE => "Value: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please choose again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        CONVERT_HEADING => "-- Convert --",
        CONVERT_FROM_UNIT => "From unit",
        CONVERT_TO_UNIT => "To unit",
        CONVERT_RESULT => "Result",
        TABLE_HEADING => "-- All units --",
        UNITS_HEADING => "-- Supported units (factor per 1 m³/s) --",
        UNIT_KEEP_DEFAULT => "(Enter: keep default)",
        SETTINGS_HEADING => "-- Settings --",
        SETTINGS_CURRENT_FROM => "Default input unit",
        SETTINGS_CURRENT_TO => "Default output unit",
        SETTINGS_CURRENT_PRECISION => "Output precision",
        SETTINGS_OPTIONS => "1) Change input unit  2) Change output unit  3) Change precision  0) Back",
        SETTINGS_PROMPT_PRECISION => "Digits (empty for default output): ",
        SETTINGS_INVALID => "Invalid selection.",
        SETTINGS_SAVED => "Settings saved.",
        _ => return None,
    };
    Some(s)
}

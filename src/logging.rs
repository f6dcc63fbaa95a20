//! CLI 로그 초기화. 로그는 항상 stderr 로 나가고, 결과 출력(stdout)과 섞이지 않는다.

use tracing_subscriber::EnvFilter;

/// `-v` 횟수에 대응하는 기본 로그 레벨.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// 전역 subscriber 를 설치한다. `RUST_LOG` 가 있으면 그것이 우선한다.
/// 이미 설치돼 있으면 아무것도 하지 않는다.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

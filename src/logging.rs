use log::LevelFilter;
use std::io::Write;

/// 로거를 초기화한다. 인자 → RUST_LOG → 설정 기본값 → info 순으로 레벨을 정한다.
pub fn init_logging(level: Option<&str>, default_level: &str) {
    let log_level = level
        .and_then(|l| l.parse::<LevelFilter>().ok())
        .or_else(|| std::env::var("RUST_LOG").ok().and_then(|v| v.parse().ok()))
        .or_else(|| default_level.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = env_logger::Builder::new()
        .filter_level(log_level)
        .format(|buf, record| {
            writeln!(buf, "[{:5} {}] {}", record.level(), record.target(), record.args())
        })
        .try_init();
    log::debug!("logger initialized (level: {log_level})");
}

use clap::Parser;
use chemical_mixing_toolbox::{app, config, logging};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), app::AppError> {
    let cli = app::Cli::parse();
    let cfg = config::load_or_default(&cli.config)?;
    logging::init_logging(cli.log_level.as_deref(), &cfg.log_level);
    let output = app::run(&cli.command, &cfg)?;
    print!("{output}");
    Ok(())
}

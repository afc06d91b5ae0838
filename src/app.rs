use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{Config, OutputFormat};
use crate::mixing::{performance_curve, MixingEngine};
use crate::report;
use crate::scenario::{self, ScenarioError};

/// 약품 주입·정적 혼합 설비 평가 도구
#[derive(Debug, Parser)]
#[command(name = "chemical_mixing_toolbox")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "In-line chemical injection and mixing performance calculator", long_about = None)]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 시나리오를 평가하고 결과를 출력
    Evaluate {
        /// 시나리오 TOML 파일
        scenario: PathBuf,
        /// 출력 형식 (생략 시 설정값)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// 거리별 CoV·용해율 곡선 출력
    Curve {
        scenario: PathBuf,
        /// 표본 개수
        #[arg(short, long, default_value_t = 21)]
        points: usize,
        /// 필요 혼합 거리 대비 곡선 길이 배수
        #[arg(short, long, default_value_t = 1.5)]
        span: f64,
    },
    /// 시나리오 템플릿 출력
    Template,
}

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] crate::config::ConfigError),
    /// 시나리오 파일 오류
    #[error(transparent)]
    Scenario(#[from] ScenarioError),
    /// 결과 직렬화 오류
    #[error("결과 직렬화 오류: {0}")]
    Output(#[from] toml::ser::Error),
}

/// 명령을 실행하고 출력할 문자열을 돌려준다.
pub fn run(command: &Command, config: &Config) -> Result<String, AppError> {
    let engine = MixingEngine::new(config.constants.clone());
    match command {
        Command::Evaluate { scenario, format } => {
            let inputs = scenario::load_scenario(scenario)?;
            let results = engine.evaluate(&inputs);
            log::info!(
                "CoV={:.4}, 필요 거리={:.2} m, 종합 판정={}",
                results.mixer_cov,
                results.mixing_distance_needed_m,
                results.is_compliant
            );
            match format.unwrap_or(config.output_format) {
                OutputFormat::Text => Ok(report::format_report(&inputs, &results)),
                OutputFormat::Toml => Ok(toml::to_string_pretty(&results)?),
            }
        }
        Command::Curve {
            scenario,
            points,
            span,
        } => {
            let inputs = scenario::load_scenario(scenario)?;
            let results = engine.evaluate(&inputs);
            let curve = performance_curve(&inputs, &results, engine.constants(), *points, *span);
            Ok(report::format_curve(&curve))
        }
        Command::Template => Ok(scenario::template()?),
    }
}

use serde::{Deserialize, Serialize};

use super::compliance::downstream_decay_rate;
use super::constants::MixingConstants;
use super::dissolution::dissolved_fraction_pct;
use super::inputs::MixingInputs;
use super::numeric::{clamp_cov, safe_div};
use super::results::CalculationResults;

/// 주입점으로부터 거리별 CoV·용해율 표본.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub distance_m: f64,
    pub cov: f64,
    pub dissolved_pct: f64,
}

/// 차트용 성능 곡선 데이터를 만든다.
///
/// 장치 구간에서는 초기 CoV(√α)에서 장치 CoV까지 로그 선형으로 줄고,
/// 하류에서는 `CoV·exp(−k·(x − Lm)/D_h)`로 감쇠한다.
/// 끝 거리는 `span × 필요 혼합 거리`이며 장치 길이보다 짧지 않다.
pub fn performance_curve(
    inputs: &MixingInputs,
    results: &CalculationResults,
    constants: &MixingConstants,
    points: usize,
    span: f64,
) -> Vec<CurvePoint> {
    if points == 0 {
        return Vec::new();
    }
    let eps = constants.epsilon;
    let (floor, ceiling) = (constants.cov_floor, constants.cov_ceiling);
    let decay_rate = downstream_decay_rate(inputs.conduit_type, constants);
    let device_length = results.mixed_length_m.max(0.0);
    let end = (results.mixing_distance_needed_m * span.max(1.0)).max(device_length);

    let initial_cov = clamp_cov(results.dilution_ratio.sqrt(), floor, ceiling);
    let ln_start = initial_cov.ln();
    let ln_device = results.mixer_cov.ln();

    let step = if points > 1 {
        end / (points - 1) as f64
    } else {
        0.0
    };

    (0..points)
        .map(|i| {
            let x = step * i as f64;
            let cov = if x <= device_length {
                let t = safe_div(x, device_length, eps).min(1.0);
                (ln_start + (ln_device - ln_start) * t).exp()
            } else {
                let diameters = safe_div(x - device_length, results.hydraulic_diameter_m, eps);
                results.mixer_cov * (-decay_rate * diameters).exp()
            };
            let dissolved_pct = if inputs.is_lime() {
                let time_s = safe_div(x, results.velocity_m_per_s, eps);
                dissolved_fraction_pct(results.dissolution_rate_per_s, time_s)
            } else {
                100.0
            };
            CurvePoint {
                distance_m: x,
                cov: clamp_cov(cov, floor, ceiling),
                dissolved_pct,
            }
        })
        .collect()
}

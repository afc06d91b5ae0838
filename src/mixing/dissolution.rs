use super::constants::MixingConstants;
use super::numeric::safe_div;

/// 석회 용해 속도 계산 입력.
#[derive(Debug, Clone)]
pub struct DissolutionInput {
    /// 포화 농도 [mg/L]
    pub saturation_limit_mg_per_l: f64,
    /// 주입률 [mg/L]
    pub dose_mg_per_l: f64,
    pub g_value_per_s: f64,
    pub velocity_m_per_s: f64,
}

/// 석회 용해 속도 계산 결과.
#[derive(Debug, Clone)]
pub struct DissolutionResult {
    /// 1차 용해 속도 상수 [1/s]
    pub rate_per_s: f64,
    /// 95% 용해 시간 [s]
    pub time_to_95_s: f64,
    /// 95% 용해 거리 [m]
    pub distance_to_95_m: f64,
}

/// 수온에 따른 Ca(OH)₂ 포화 농도 [mg/L]. 2차식 근사.
///
/// 약 4 °C에서 최대값을 가지며 그 이상에서는 수온이 오를수록 감소한다.
pub fn lime_saturation_limit(water_temperature_c: f64, constants: &MixingConstants) -> f64 {
    let t = water_temperature_c;
    constants.lime_saturation_a + constants.lime_saturation_b * t + constants.lime_saturation_c * t * t
}

/// 1차 용해 모델로 95% 용해 시간·거리를 구한다.
///
/// k = k₀·√(max(1, G)/100)·max(0.1, (Cs − C)/Cs)
pub fn compute_dissolution(input: &DissolutionInput, constants: &MixingConstants) -> DissolutionResult {
    let eps = constants.epsilon;
    let saturation_limit_mg_per_l = input.saturation_limit_mg_per_l;
    let headroom = safe_div(
        saturation_limit_mg_per_l - input.dose_mg_per_l,
        saturation_limit_mg_per_l,
        eps,
    );
    let rate_per_s = constants.dissolution_base_rate
        * (input.g_value_per_s.max(1.0) / 100.0).sqrt()
        * headroom.max(0.1);
    let time_to_95_s = safe_div(20f64.ln(), rate_per_s, eps);

    DissolutionResult {
        rate_per_s,
        time_to_95_s,
        distance_to_95_m: time_to_95_s * input.velocity_m_per_s,
    }
}

/// 시간 t [s] 동안 용해된 비율 [%]. 0~100으로 제한된다.
pub fn dissolved_fraction_pct(rate_per_s: f64, time_s: f64) -> f64 {
    let pct = (1.0 - (-rate_per_s * time_s).exp()) * 100.0;
    if pct.is_finite() {
        pct.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

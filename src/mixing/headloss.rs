use super::constants::MixingConstants;
use super::inputs::MixerModel;
use super::numeric::safe_div;

/// 손실수두·G값 계산 입력.
#[derive(Debug, Clone)]
pub struct HeadlossInput {
    pub mixer_model: MixerModel,
    pub friction_factor: f64,
    pub mixed_length_m: f64,
    pub velocity_m_per_s: f64,
    pub hydraulic_diameter_m: f64,
    pub area_m2: f64,
    /// 체적 유량 [m³/s]
    pub flow_m3_per_s: f64,
    pub density_kg_per_m3: f64,
    pub viscosity_pa_s: f64,
}

/// 손실수두·G값 계산 결과.
#[derive(Debug, Clone)]
pub struct HeadlossResult {
    pub headloss_m: f64,
    pub headloss_kpa: f64,
    /// 소산 동력 [W]
    pub power_w: f64,
    /// 평균 속도경사 [1/s]
    pub g_value_per_s: f64,
}

/// h = FD·Lm·v² / (2g·D_h), 웨어는 고정값.
///
/// G = √(P / (μ·V)), V = A·max(Lm, D_h)
pub fn compute_headloss(input: &HeadlossInput, constants: &MixingConstants) -> HeadlossResult {
    let eps = constants.epsilon;
    let g = constants.gravity_m_per_s2;

    let headloss_m = match input.mixer_model {
        MixerModel::Weir => constants.weir_headloss_m,
        _ => safe_div(
            input.friction_factor * input.mixed_length_m * input.velocity_m_per_s.powi(2),
            2.0 * g * input.hydraulic_diameter_m,
            eps,
        ),
    };
    let headloss_kpa = headloss_m * input.density_kg_per_m3 * g / 1000.0;
    let power_w = headloss_kpa * 1000.0 * input.flow_m3_per_s;

    let volume_m3 = input.area_m2 * input.mixed_length_m.max(input.hydraulic_diameter_m);
    let g_value_per_s = safe_div(power_w, input.viscosity_pa_s * volume_m3, eps)
        .max(0.0)
        .sqrt();

    HeadlossResult {
        headloss_m,
        headloss_kpa,
        power_w,
        g_value_per_s,
    }
}

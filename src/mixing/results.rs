use serde::{Deserialize, Serialize};

use super::momentum::MomentumRegime;

/// 한 번의 평가에서 파생된 결과 스냅샷.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResults {
    // 수리
    pub velocity_m_per_s: f64,
    pub reynolds: f64,
    pub hydraulic_diameter_m: f64,
    /// 통수 단면적 [m²]
    pub wetted_area_m2: f64,
    pub wetted_perimeter_m: f64,

    // 주입
    pub injected_density_kg_per_m3: f64,
    pub injected_viscosity_pa_s: f64,
    pub total_injection_flow_l_per_h: f64,
    pub total_injection_flow_m3_per_s: f64,
    pub chemical_fraction: f64,
    pub water_fraction: f64,
    pub momentum_ratio: f64,
    pub momentum_regime: MomentumRegime,
    pub suggested_orifice_mm: f64,

    // 혼합 장치
    pub dilution_ratio: f64,
    pub l_over_d: f64,
    pub mixer_cov: f64,
    pub friction_factor: f64,
    pub mixed_length_m: f64,
    pub correlation_branch: String,
    pub manufacturer_guidance: String,

    // 손실·에너지
    pub headloss_m: f64,
    pub headloss_kpa: f64,
    pub power_w: f64,
    pub g_value_per_s: f64,

    // 용해
    pub lime_saturation_limit_mg_per_l: f64,
    pub dissolution_rate_per_s: f64,
    pub dissolution_time_95_s: f64,
    pub dissolution_distance_95_m: f64,
    pub dissolved_at_target_pct: f64,

    // 판정
    pub mixing_distance_needed_m: f64,
    pub mixing_time_needed_s: f64,
    pub is_cov_compliant: bool,
    pub is_compliant: bool,
    pub is_time_compliant: bool,
    /// 경고/주의 메시지
    pub warnings: Vec<String>,
}

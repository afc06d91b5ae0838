use serde::{Deserialize, Serialize};

/// 엔진이 사용하는 물리·경험 상수 묶음.
///
/// 평가 중에는 변경되지 않으며, config.toml의 `[constants]` 섹션에서
/// 일부만 덮어쓸 수 있다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MixingConstants {
    /// 중력가속도 [m/s²]
    pub gravity_m_per_s2: f64,
    /// 희석수 밀도 [kg/m³]
    pub water_density_kg_per_m3: f64,
    /// 희석수 점도 [Pa·s]
    pub water_viscosity_pa_s: f64,
    /// 0 나눗셈 대신 쓰는 하한값
    pub epsilon: f64,
    pub cov_floor: f64,
    pub cov_ceiling: f64,
    /// 설계 목표 운동량비
    pub target_momentum_ratio: f64,
    /// 이 값 미만이면 Low
    pub momentum_low_threshold: f64,
    /// 이 값 초과면 High
    pub momentum_high_threshold: f64,
    /// 운전 상태 운동량비 계산에 쓰는 기준 오리피스 [m]
    pub reference_orifice_m: f64,
    /// 관로 하류 감쇠율 = 계수 · √마찰계수
    pub pipe_decay_coefficient: f64,
    pub pipe_decay_friction_factor: f64,
    pub channel_decay_rate: f64,
    /// 웨어 고정 손실수두 [m]
    pub weir_headloss_m: f64,
    /// 기본 마찰계수 계산용 관 조도 [m]
    pub pipe_roughness_m: f64,
    /// 석회 포화 농도 [mg/L] = a + b·T + c·T², 약 4 °C에서 최대
    pub lime_saturation_a: f64,
    pub lime_saturation_b: f64,
    pub lime_saturation_c: f64,
    /// 용해 속도 기준값 [1/s]
    pub dissolution_base_rate: f64,
    /// 준수 판정에 필요한 최소 용해율 [%]
    pub dissolved_threshold_pct: f64,
}

impl Default for MixingConstants {
    fn default() -> Self {
        Self {
            gravity_m_per_s2: 9.81,
            water_density_kg_per_m3: 1000.0,
            water_viscosity_pa_s: 0.001,
            epsilon: 1e-9,
            cov_floor: 0.0001,
            cov_ceiling: 1.0,
            target_momentum_ratio: 0.22,
            momentum_low_threshold: 0.16,
            momentum_high_threshold: 0.24,
            reference_orifice_m: 0.025,
            pipe_decay_coefficient: 0.75,
            pipe_decay_friction_factor: 0.02,
            channel_decay_rate: 0.6,
            weir_headloss_m: 0.15,
            pipe_roughness_m: 0.000045,
            lime_saturation_a: 1800.0,
            lime_saturation_b: 0.95,
            lime_saturation_c: -0.1185,
            dissolution_base_rate: 0.3,
            dissolved_threshold_pct: 90.0,
        }
    }
}

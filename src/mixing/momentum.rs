use std::fmt;

use serde::{Deserialize, Serialize};

use crate::units::{convert_length, LengthUnit};

use super::constants::MixingConstants;
use super::inputs::InjectionType;
use super::numeric::safe_div;

/// 제트/주류 운동량비 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MomentumRegime {
    Low,
    Intermediate,
    High,
}

impl fmt::Display for MomentumRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MomentumRegime::Low => "Low",
            MomentumRegime::Intermediate => "Intermediate",
            MomentumRegime::High => "High",
        };
        f.write_str(s)
    }
}

/// 운동량비 계산 입력.
#[derive(Debug, Clone)]
pub struct MomentumInput {
    pub injection_type: InjectionType,
    /// 총 주입 유량 [m³/s]
    pub injection_flow_m3_per_s: f64,
    pub injected_density_kg_per_m3: f64,
    pub bulk_density_kg_per_m3: f64,
    pub bulk_velocity_m_per_s: f64,
    pub hydraulic_diameter_m: f64,
}

/// 운동량비 계산 결과.
#[derive(Debug, Clone)]
pub struct MomentumResult {
    /// 기준 오리피스로 계산한 현재 운동량비
    pub momentum_ratio: f64,
    pub regime: MomentumRegime,
    /// 목표 운동량비를 만족하는 오리피스 직경 [mm]
    pub suggested_orifice_mm: f64,
}

/// 구간 경계값은 고정이며 경계값 자체는 Intermediate로 본다.
pub fn classify_momentum_ratio(ratio: f64, constants: &MixingConstants) -> MomentumRegime {
    if ratio < constants.momentum_low_threshold {
        MomentumRegime::Low
    } else if ratio > constants.momentum_high_threshold {
        MomentumRegime::High
    } else {
        MomentumRegime::Intermediate
    }
}

/// 주입점당 유량으로 운동량비와 권장 오리피스 직경을 구한다.
///
/// R = √(ρj/ρb) · (vj·d) / (vb·D_h)
pub fn resolve_momentum(input: &MomentumInput, constants: &MixingConstants) -> MomentumResult {
    let eps = constants.epsilon;
    let points = f64::from(input.injection_type.points());
    let flow_per_point = input.injection_flow_m3_per_s / points;
    let density_ratio_sqrt = safe_div(
        input.injected_density_kg_per_m3,
        input.bulk_density_kg_per_m3,
        eps,
    )
    .max(0.0)
    .sqrt();
    let bulk_term = input.bulk_velocity_m_per_s * input.hydraulic_diameter_m;

    // 목표 운동량비 식을 d에 대해 정리
    let suggested_orifice_m = safe_div(
        4.0 * flow_per_point * density_ratio_sqrt,
        std::f64::consts::PI * constants.target_momentum_ratio * bulk_term,
        eps,
    );

    let d0 = constants.reference_orifice_m;
    let orifice_area = std::f64::consts::PI * d0 * d0 / 4.0;
    let jet_velocity_m_per_s = safe_div(flow_per_point, orifice_area, eps);
    let momentum_ratio = density_ratio_sqrt * safe_div(jet_velocity_m_per_s * d0, bulk_term, eps);
    let regime = classify_momentum_ratio(momentum_ratio, constants);

    MomentumResult {
        momentum_ratio,
        regime,
        suggested_orifice_mm: convert_length(
            suggested_orifice_m,
            LengthUnit::Meter,
            LengthUnit::Millimeter,
        ),
    }
}

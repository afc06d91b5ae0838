use crate::units::{convert_flow, FlowUnit};

use super::constants::MixingConstants;
use super::inputs::{ConduitShape, ConduitType};
use super::numeric::safe_div;

/// 단면·수리 계산 입력.
#[derive(Debug, Clone)]
pub struct HydraulicsInput {
    pub conduit_type: ConduitType,
    pub conduit_shape: ConduitShape,
    /// 관경 또는 폭 [m]
    pub dimension_m: f64,
    /// 높이 또는 수심 [m]
    pub height_m: f64,
    /// 체적 유량 [m³/h]
    pub flow_m3_per_h: f64,
    pub density_kg_per_m3: f64,
    pub viscosity_pa_s: f64,
}

/// 단면·수리 계산 결과.
#[derive(Debug, Clone)]
pub struct HydraulicsResult {
    /// 통수 단면적 [m²]
    pub area_m2: f64,
    /// 윤변 [m]
    pub wetted_perimeter_m: f64,
    /// 수력 직경 [m]
    pub hydraulic_diameter_m: f64,
    /// 체적 유량 [m³/s]
    pub flow_m3_per_s: f64,
    /// 평균 유속 [m/s]
    pub velocity_m_per_s: f64,
    pub reynolds: f64,
}

/// 유로 형상에서 단면적, 윤변, 수력 직경, 유속, 레이놀즈수를 구한다.
///
/// - 원형 관: D_h = D
/// - 사각 덕트: D_h = 4A/P
/// - 개수로: 수면을 윤변에서 제외 (P = b + 2h)
pub fn resolve_hydraulics(input: &HydraulicsInput, constants: &MixingConstants) -> HydraulicsResult {
    let eps = constants.epsilon;
    let width = input.dimension_m.max(0.0);
    let height = input.height_m.max(0.0);

    let (area_m2, wetted_perimeter_m, hydraulic_diameter_m) =
        match (input.conduit_type, input.conduit_shape) {
            (ConduitType::Pipe, ConduitShape::Circular) => {
                let area = std::f64::consts::PI * (width / 2.0).powi(2);
                (area, std::f64::consts::PI * width, width)
            }
            (ConduitType::Pipe, ConduitShape::Rectangular) => {
                let area = width * height;
                let perimeter = 2.0 * (width + height);
                (area, perimeter, safe_div(4.0 * area, perimeter, eps))
            }
            (ConduitType::Channel, _) => {
                let area = width * height;
                let perimeter = width + 2.0 * height;
                (area, perimeter, safe_div(4.0 * area, perimeter, eps))
            }
        };

    let flow_m3_per_s = convert_flow(
        input.flow_m3_per_h.max(0.0),
        FlowUnit::CubicMeterPerHour,
        FlowUnit::CubicMeterPerSecond,
    );
    let velocity_m_per_s = safe_div(flow_m3_per_s, area_m2, eps);
    let reynolds = safe_div(
        input.density_kg_per_m3 * velocity_m_per_s * hydraulic_diameter_m,
        input.viscosity_pa_s,
        eps,
    );

    log::debug!(
        "hydraulics: A={area_m2:.4} m², D_h={hydraulic_diameter_m:.4} m, v={velocity_m_per_s:.3} m/s, Re={reynolds:.3e}"
    );

    HydraulicsResult {
        area_m2,
        wetted_perimeter_m,
        hydraulic_diameter_m,
        flow_m3_per_s,
        velocity_m_per_s,
        reynolds,
    }
}

/// 층류는 64/Re, 난류는 Haaland 근사로 Darcy 마찰계수를 구한다.
pub fn darcy_friction_factor(reynolds: f64, roughness_m: f64, diameter_m: f64, eps: f64) -> f64 {
    if reynolds < 2300.0 {
        64.0 / reynolds.max(1.0)
    } else {
        let roughness_ratio = safe_div(roughness_m.max(0.0), diameter_m, eps);
        let log_term = (roughness_ratio / 3.7).powf(1.11) + 6.9 / reynolds;
        let inv_sqrt_f = -1.8 * log_term.log10();
        1.0 / inv_sqrt_f.powi(2)
    }
}

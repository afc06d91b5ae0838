use crate::units::{convert_flow, FlowUnit};

use super::constants::MixingConstants;
use super::numeric::safe_div;

/// 약품·희석수 혼합 입력.
#[derive(Debug, Clone)]
pub struct InjectionBlendInput {
    /// 약품 유량 [L/h]
    pub chemical_flow_l_per_h: f64,
    /// 희석수 유량 [L/h]
    pub dilution_water_flow_l_per_h: f64,
    pub chemical_density_kg_per_m3: f64,
    pub chemical_viscosity_pa_s: f64,
}

/// 주입 유체 물성.
#[derive(Debug, Clone)]
pub struct InjectionBlendResult {
    /// 약품 분율
    pub chemical_fraction: f64,
    /// 희석수 분율 (항상 1 - 약품 분율)
    pub water_fraction: f64,
    pub density_kg_per_m3: f64,
    pub viscosity_pa_s: f64,
    /// 총 주입 유량 [L/h]
    pub total_flow_l_per_h: f64,
    /// 총 주입 유량 [m³/s]
    pub total_flow_m3_per_s: f64,
}

/// 약품과 희석수를 합친 주입 유체의 밀도와 점도를 구한다.
///
/// 밀도는 분율 가중 선형 혼합, 점도는 로그 혼합 규칙(ln μ = Σ x·ln μᵢ)을 쓴다.
pub fn resolve_injection_blend(
    input: &InjectionBlendInput,
    constants: &MixingConstants,
) -> InjectionBlendResult {
    let eps = constants.epsilon;
    let total_flow_l_per_h = input.chemical_flow_l_per_h + input.dilution_water_flow_l_per_h;
    let chemical_fraction = safe_div(input.chemical_flow_l_per_h, total_flow_l_per_h, eps);
    let water_fraction = 1.0 - chemical_fraction;

    let density_kg_per_m3 = chemical_fraction * input.chemical_density_kg_per_m3
        + water_fraction * constants.water_density_kg_per_m3;

    // ln(0) 방지
    let ln_mu_chem = input.chemical_viscosity_pa_s.max(eps).ln();
    let ln_mu_water = constants.water_viscosity_pa_s.max(eps).ln();
    let viscosity_pa_s = (chemical_fraction * ln_mu_chem + water_fraction * ln_mu_water).exp();

    InjectionBlendResult {
        chemical_fraction,
        water_fraction,
        density_kg_per_m3,
        viscosity_pa_s,
        total_flow_l_per_h,
        total_flow_m3_per_s: convert_flow(
            total_flow_l_per_h,
            FlowUnit::LiterPerHour,
            FlowUnit::CubicMeterPerSecond,
        ),
    }
}

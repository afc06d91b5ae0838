use crate::units::{convert_flow, FlowUnit};

use super::compliance::{resolve_compliance, ComplianceInput};
use super::constants::MixingConstants;
use super::correlation::CorrelationInput;
use super::dissolution::{compute_dissolution, lime_saturation_limit, DissolutionInput};
use super::headloss::{compute_headloss, HeadlossInput};
use super::hydraulics::{darcy_friction_factor, resolve_hydraulics, HydraulicsInput};
use super::injection::{resolve_injection_blend, InjectionBlendInput};
use super::inputs::MixingInputs;
use super::momentum::{resolve_momentum, MomentumInput, MomentumRegime};
use super::numeric::safe_div;
use super::results::CalculationResults;

/// 주입·혼합 설비 평가 엔진.
///
/// 상태가 없으며 같은 입력에 대해 항상 같은 결과를 돌려준다.
#[derive(Debug, Clone, Default)]
pub struct MixingEngine {
    constants: MixingConstants,
}

impl MixingEngine {
    pub fn new(constants: MixingConstants) -> Self {
        Self { constants }
    }

    pub fn constants(&self) -> &MixingConstants {
        &self.constants
    }

    /// 입력 스냅샷 하나를 평가한다. 실패하지 않는다.
    pub fn evaluate(&self, inputs: &MixingInputs) -> CalculationResults {
        let c = &self.constants;
        let eps = c.epsilon;

        let blend = resolve_injection_blend(
            &InjectionBlendInput {
                chemical_flow_l_per_h: inputs.chemical_flow_l_per_h,
                dilution_water_flow_l_per_h: inputs.dilution_water_flow_l_per_h,
                chemical_density_kg_per_m3: inputs.chemical_density_kg_per_m3,
                chemical_viscosity_pa_s: inputs.chemical_viscosity_pa_s,
            },
            c,
        );

        let hyd = resolve_hydraulics(
            &HydraulicsInput {
                conduit_type: inputs.conduit_type,
                conduit_shape: inputs.conduit_shape,
                dimension_m: inputs.dimension_m,
                height_m: inputs.secondary_or_width(),
                flow_m3_per_h: inputs.flow_rate_m3_per_h,
                density_kg_per_m3: inputs.density_kg_per_m3,
                viscosity_pa_s: inputs.viscosity_pa_s,
            },
            c,
        );

        let momentum = resolve_momentum(
            &MomentumInput {
                injection_type: inputs.injection_type,
                injection_flow_m3_per_s: blend.total_flow_m3_per_s,
                injected_density_kg_per_m3: blend.density_kg_per_m3,
                bulk_density_kg_per_m3: inputs.density_kg_per_m3,
                bulk_velocity_m_per_s: hyd.velocity_m_per_s,
                hydraulic_diameter_m: hyd.hydraulic_diameter_m,
            },
            c,
        );

        let bulk_flow_l_per_h = convert_flow(
            inputs.flow_rate_m3_per_h,
            FlowUnit::CubicMeterPerHour,
            FlowUnit::LiterPerHour,
        );
        let dilution_ratio = safe_div(bulk_flow_l_per_h, blend.total_flow_l_per_h, eps);
        let l_over_d = safe_div(inputs.available_length_m, hyd.hydraulic_diameter_m, eps);

        let performance = inputs.mixer_model.evaluate(
            &CorrelationInput {
                conduit_type: inputs.conduit_type,
                injection_type: inputs.injection_type,
                pitch_ratio: inputs.pitch_ratio,
                reynolds: hyd.reynolds,
                dilution_ratio,
                num_elements: inputs.num_elements,
                l_over_d,
                momentum_ratio: momentum.momentum_ratio,
                hydraulic_diameter_m: hyd.hydraulic_diameter_m,
                available_length_m: inputs.available_length_m,
                default_friction_factor: darcy_friction_factor(
                    hyd.reynolds,
                    c.pipe_roughness_m,
                    hyd.hydraulic_diameter_m,
                    eps,
                ),
            },
            c,
        );
        log::debug!(
            "{:?}: branch={}, CoV={:.4}, FD={:.4}, Lm={:.3} m",
            inputs.mixer_model,
            performance.branch,
            performance.cov,
            performance.friction_factor,
            performance.mixed_length_m
        );

        let loss = compute_headloss(
            &HeadlossInput {
                mixer_model: inputs.mixer_model,
                friction_factor: performance.friction_factor,
                mixed_length_m: performance.mixed_length_m,
                velocity_m_per_s: hyd.velocity_m_per_s,
                hydraulic_diameter_m: hyd.hydraulic_diameter_m,
                area_m2: hyd.area_m2,
                flow_m3_per_s: hyd.flow_m3_per_s,
                density_kg_per_m3: inputs.density_kg_per_m3,
                viscosity_pa_s: inputs.viscosity_pa_s,
            },
            c,
        );

        let is_lime = inputs.is_lime();
        let saturation_limit = lime_saturation_limit(inputs.water_temperature_c, c);
        let kinetics = is_lime.then(|| {
            compute_dissolution(
                &DissolutionInput {
                    saturation_limit_mg_per_l: saturation_limit,
                    dose_mg_per_l: inputs.chemical_dose_mg_per_l,
                    g_value_per_s: loss.g_value_per_s,
                    velocity_m_per_s: hyd.velocity_m_per_s,
                },
                c,
            )
        });

        let verdict = resolve_compliance(
            &ComplianceInput {
                conduit_type: inputs.conduit_type,
                mixer_cov: performance.cov,
                target_cov: inputs.target_cov,
                mixed_length_m: performance.mixed_length_m,
                hydraulic_diameter_m: hyd.hydraulic_diameter_m,
                velocity_m_per_s: hyd.velocity_m_per_s,
                target_mixing_time_s: inputs.target_mixing_time_s,
                lime_kinetics: kinetics
                    .as_ref()
                    .map(|k| (k.rate_per_s, k.distance_to_95_m)),
            },
            c,
        );

        let mut warnings = Vec::new();
        if blend.total_flow_l_per_h <= 0.0 {
            warnings.push("주입 유량이 0입니다. 희석비와 CoV는 의미가 없습니다.".to_string());
        }
        if hyd.reynolds < 2300.0 {
            warnings.push(format!(
                "Re {:.0} (<2300): 층류 영역으로 상관식 적용 범위를 벗어납니다.",
                hyd.reynolds
            ));
        }
        match momentum.regime {
            MomentumRegime::Low => warnings.push(format!(
                "운동량비 {:.3} (<{}): 제트 관통이 부족합니다. 권장 오리피스 {:.1} mm를 검토하십시오.",
                momentum.momentum_ratio, c.momentum_low_threshold, momentum.suggested_orifice_mm
            )),
            MomentumRegime::High => warnings.push(format!(
                "운동량비 {:.3} (>{}): 제트가 반대편 벽에 충돌할 수 있습니다. 권장 오리피스 {:.1} mm를 검토하십시오.",
                momentum.momentum_ratio, c.momentum_high_threshold, momentum.suggested_orifice_mm
            )),
            MomentumRegime::Intermediate => {}
        }
        if performance.cov >= c.cov_ceiling {
            warnings.push("예측 CoV가 상한(1.0)에 도달했습니다. 혼합이 거의 일어나지 않습니다.".to_string());
        }
        if verdict.dissolution_governs {
            warnings.push(format!(
                "석회 95% 용해 거리({:.1} m)가 혼합 거리({:.1} m)보다 깁니다.",
                verdict.mixing_distance_needed_m, verdict.blending_distance_m
            ));
        }

        CalculationResults {
            velocity_m_per_s: hyd.velocity_m_per_s,
            reynolds: hyd.reynolds,
            hydraulic_diameter_m: hyd.hydraulic_diameter_m,
            wetted_area_m2: hyd.area_m2,
            wetted_perimeter_m: hyd.wetted_perimeter_m,
            injected_density_kg_per_m3: blend.density_kg_per_m3,
            injected_viscosity_pa_s: blend.viscosity_pa_s,
            total_injection_flow_l_per_h: blend.total_flow_l_per_h,
            total_injection_flow_m3_per_s: blend.total_flow_m3_per_s,
            chemical_fraction: blend.chemical_fraction,
            water_fraction: blend.water_fraction,
            momentum_ratio: momentum.momentum_ratio,
            momentum_regime: momentum.regime,
            suggested_orifice_mm: momentum.suggested_orifice_mm,
            dilution_ratio,
            l_over_d,
            mixer_cov: performance.cov,
            friction_factor: performance.friction_factor,
            mixed_length_m: performance.mixed_length_m,
            correlation_branch: performance.branch.to_string(),
            manufacturer_guidance: inputs.mixer_model.guidance().to_string(),
            headloss_m: loss.headloss_m,
            headloss_kpa: loss.headloss_kpa,
            power_w: loss.power_w,
            g_value_per_s: loss.g_value_per_s,
            lime_saturation_limit_mg_per_l: saturation_limit,
            dissolution_rate_per_s: kinetics.as_ref().map_or(0.0, |k| k.rate_per_s),
            dissolution_time_95_s: kinetics.as_ref().map_or(0.0, |k| k.time_to_95_s),
            dissolution_distance_95_m: kinetics.as_ref().map_or(0.0, |k| k.distance_to_95_m),
            dissolved_at_target_pct: verdict.dissolved_at_target_pct,
            mixing_distance_needed_m: verdict.mixing_distance_needed_m,
            mixing_time_needed_s: verdict.mixing_time_needed_s,
            is_cov_compliant: verdict.is_cov_compliant,
            is_compliant: verdict.is_compliant,
            is_time_compliant: verdict.is_time_compliant,
            warnings,
        }
    }
}

/// 기본 상수로 평가한다.
pub fn evaluate(inputs: &MixingInputs) -> CalculationResults {
    MixingEngine::default().evaluate(inputs)
}

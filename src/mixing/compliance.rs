use super::constants::MixingConstants;
use super::dissolution::dissolved_fraction_pct;
use super::inputs::ConduitType;
use super::numeric::safe_div;

/// 혼합 거리·준수 판정 입력.
#[derive(Debug, Clone)]
pub struct ComplianceInput {
    pub conduit_type: ConduitType,
    pub mixer_cov: f64,
    pub target_cov: f64,
    pub mixed_length_m: f64,
    pub hydraulic_diameter_m: f64,
    pub velocity_m_per_s: f64,
    pub target_mixing_time_s: f64,
    /// 석회일 때만 `Some((용해 속도 [1/s], 95% 용해 거리 [m]))`
    pub lime_kinetics: Option<(f64, f64)>,
}

/// 혼합 거리·준수 판정 결과.
#[derive(Debug, Clone)]
pub struct ComplianceResult {
    /// CoV 기준 필요 거리 [m]
    pub blending_distance_m: f64,
    /// 최종 필요 거리 [m] (석회는 용해 거리와 큰 값)
    pub mixing_distance_needed_m: f64,
    pub mixing_time_needed_s: f64,
    /// 필요 혼합 시간에서의 용해율 [%]
    pub dissolved_at_target_pct: f64,
    pub is_cov_compliant: bool,
    pub is_compliant: bool,
    pub is_time_compliant: bool,
    /// 용해 거리가 혼합 거리보다 길어 지배 조건이 된 경우
    pub dissolution_governs: bool,
}

/// 장치 하류 CoV 감쇠율. 관로는 고정 마찰계수를 가정한다.
pub fn downstream_decay_rate(conduit_type: ConduitType, constants: &MixingConstants) -> f64 {
    match conduit_type {
        ConduitType::Pipe => {
            constants.pipe_decay_coefficient * constants.pipe_decay_friction_factor.sqrt()
        }
        ConduitType::Channel => constants.channel_decay_rate,
    }
}

/// 목표 CoV와 용해 조건을 합쳐 필요 거리와 준수 여부를 판정한다.
pub fn resolve_compliance(input: &ComplianceInput, constants: &MixingConstants) -> ComplianceResult {
    let eps = constants.epsilon;
    let decay_rate = downstream_decay_rate(input.conduit_type, constants);
    let is_cov_compliant = input.mixer_cov <= input.target_cov;

    let blending_distance_m = if is_cov_compliant {
        input.mixed_length_m
    } else {
        let extra_diameters = safe_div(
            safe_div(input.mixer_cov, input.target_cov, eps).ln(),
            decay_rate,
            eps,
        );
        input.mixed_length_m + extra_diameters * input.hydraulic_diameter_m
    };

    let (mixing_distance_needed_m, dissolution_governs) = match input.lime_kinetics {
        Some((_, distance_to_95_m)) if distance_to_95_m > blending_distance_m => {
            (distance_to_95_m, true)
        }
        _ => (blending_distance_m, false),
    };
    let mixing_time_needed_s = safe_div(mixing_distance_needed_m, input.velocity_m_per_s, eps);

    let dissolved_at_target_pct = match input.lime_kinetics {
        Some((rate_per_s, _)) => dissolved_fraction_pct(rate_per_s, mixing_time_needed_s),
        None => 100.0,
    };

    let is_dissolved = input.lime_kinetics.is_none()
        || dissolved_at_target_pct > constants.dissolved_threshold_pct;

    ComplianceResult {
        blending_distance_m,
        mixing_distance_needed_m,
        mixing_time_needed_s,
        dissolved_at_target_pct,
        is_cov_compliant,
        is_compliant: is_cov_compliant && is_dissolved,
        is_time_compliant: mixing_time_needed_s <= input.target_mixing_time_s,
        dissolution_governs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ComplianceInput {
        ComplianceInput {
            conduit_type: ConduitType::Pipe,
            mixer_cov: 0.2,
            target_cov: 0.05,
            mixed_length_m: 4.0,
            hydraulic_diameter_m: 0.5,
            velocity_m_per_s: 1.0,
            target_mixing_time_s: 60.0,
            lime_kinetics: None,
        }
    }

    #[test]
    fn compliant_cov_needs_only_device_length() {
        let mut input = base();
        input.mixer_cov = 0.04;
        let res = resolve_compliance(&input, &MixingConstants::default());
        assert!(res.is_cov_compliant && res.is_compliant);
        assert_eq!(res.mixing_distance_needed_m, 4.0);
        assert_eq!(res.mixing_time_needed_s, 4.0);
    }

    #[test]
    fn extra_length_from_pipe_decay() {
        let res = resolve_compliance(&base(), &MixingConstants::default());
        let decay = 0.75 * 0.02f64.sqrt();
        let expected = 4.0 + (0.2f64 / 0.05).ln() / decay * 0.5;
        assert!((res.mixing_distance_needed_m - expected).abs() < 1e-9);
        assert!(!res.is_compliant);
    }

    #[test]
    fn channel_decay_is_fixed() {
        let mut input = base();
        input.conduit_type = ConduitType::Channel;
        let c = MixingConstants::default();
        assert_eq!(downstream_decay_rate(ConduitType::Channel, &c), 0.6);
        let res = resolve_compliance(&input, &c);
        let expected = 4.0 + (0.2f64 / 0.05).ln() / 0.6 * 0.5;
        assert!((res.mixing_distance_needed_m - expected).abs() < 1e-9);
    }

    #[test]
    fn lime_dissolution_can_govern() {
        let mut input = base();
        input.mixer_cov = 0.01;
        input.lime_kinetics = Some((0.01, 300.0));
        let res = resolve_compliance(&input, &MixingConstants::default());
        assert!(res.dissolution_governs);
        assert_eq!(res.mixing_distance_needed_m, 300.0);
        // t95 거리에서 용해율은 1 - e^{-3} ≈ 95%
        assert!((res.dissolved_at_target_pct - (1.0 - (-3.0f64).exp()) * 100.0).abs() < 1e-9);
        assert!(res.is_compliant);
        assert!(!res.is_time_compliant);
    }

    #[test]
    fn poorly_dissolved_lime_is_not_compliant() {
        let mut input = base();
        input.mixer_cov = 0.01;
        input.lime_kinetics = Some((0.001, 1.0));
        let res = resolve_compliance(&input, &MixingConstants::default());
        assert!(res.is_cov_compliant);
        assert!(res.dissolved_at_target_pct < 90.0);
        assert!(!res.is_compliant);
    }
}

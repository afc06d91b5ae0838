//! 혼합 장치별 CoV 경험 상관식.
//!
//! 각 장치는 자신의 상관식, 마찰계수(FD), 혼합 길이(Lm), 제조사 권고 문구를 가진다.
//! 상관식 결과는 항상 CoV 범위로 잘리고, 유한하지 않으면 최악값 1.0이 된다.

use super::constants::MixingConstants;
use super::inputs::{ConduitType, InjectionType, MixerModel, PitchRatio};
use super::numeric::clamp_cov;

/// 상관식 평가에 필요한 무차원 수와 형상 값.
#[derive(Debug, Clone)]
pub struct CorrelationInput {
    pub conduit_type: ConduitType,
    pub injection_type: InjectionType,
    pub pitch_ratio: PitchRatio,
    pub reynolds: f64,
    /// 희석비 α = 주 유량 / 주입 유량
    pub dilution_ratio: f64,
    pub num_elements: f64,
    /// 설치 길이 / 수력 직경
    pub l_over_d: f64,
    /// 기준 오리피스 운동량비
    pub momentum_ratio: f64,
    pub hydraulic_diameter_m: f64,
    pub available_length_m: f64,
    /// 장치 고유 값이 없을 때 쓰는 관 마찰계수
    pub default_friction_factor: f64,
}

/// 장치 평가 결과.
#[derive(Debug, Clone)]
pub struct MixerPerformance {
    pub cov: f64,
    pub friction_factor: f64,
    /// 장치(또는 자연 혼합 구간) 길이 [m]
    pub mixed_length_m: f64,
    /// 선택된 상관식 이름 (로그·보고서용)
    pub branch: &'static str,
}

/// 장치 고유 상관식이 없는 경우 쓰는 기본 FD와 Lm.
struct Defaults {
    friction_factor: f64,
    mixed_length_m: f64,
}

fn power_law(coefficient: f64, terms: &[(f64, f64)]) -> f64 {
    terms
        .iter()
        .fold(coefficient, |acc, &(base, exponent)| acc * base.powf(exponent))
}

impl MixerModel {
    /// 장치별 상관식을 평가한다.
    pub fn evaluate(self, input: &CorrelationInput, constants: &MixingConstants) -> MixerPerformance {
        let defaults = Defaults {
            friction_factor: input.default_friction_factor,
            mixed_length_m: input.available_length_m.max(0.0),
        };
        let raw = match self {
            MixerModel::None | MixerModel::Baffles | MixerModel::Weir => {
                natural_decay(input, &defaults, constants)
            }
            MixerModel::KenicsKm => kenics(input),
            MixerModel::Hev => hev(input, &defaults),
            MixerModel::Smv => smv(input),
            MixerModel::Stm => stm(input),
        };
        if !raw.cov.is_finite() {
            log::warn!(
                "{:?} ({}) 상관식 결과가 유한하지 않아 CoV=1.0으로 처리합니다.",
                self,
                raw.branch
            );
        }
        MixerPerformance {
            cov: clamp_cov(raw.cov, constants.cov_floor, constants.cov_ceiling),
            ..raw
        }
    }

    /// 제조사 권고 문구. 계산값이 아닌 고정 안내문이다.
    pub fn guidance(self) -> &'static str {
        match self {
            MixerModel::None => {
                "정적 혼합 장치 없음: 자연 난류 확산에만 의존하므로 주입점 하류에 충분한 직관 길이(통상 50~100 D 이상)를 확보하십시오."
            }
            MixerModel::KenicsKm => {
                "Kenics KM: 주입점은 첫 엘리먼트 상류 1~2 D 이내에 두고, 좌·우선 엘리먼트를 교대로 배치하십시오."
            }
            MixerModel::Hev => {
                "HEV: 첫 탭 열 상류 최소 1 D 지점에서 관 중심을 향해 주입하십시오. 저압손 장치로 긴 L/D 구간에서 효과가 큽니다."
            }
            MixerModel::Smv => {
                "SMV: 고성능·고압손 장치입니다. 부유물이나 스케일이 많은 유체에서는 막힘 점검 주기를 짧게 잡으십시오."
            }
            MixerModel::Stm => {
                "STM: 피치비가 작을수록 혼합은 빠르지만 압력손실이 커집니다. 개수로 설치 시 엘리먼트가 수심 전체를 덮도록 배치하십시오."
            }
            MixerModel::Baffles => {
                "배플: 전용 상관식이 없어 자연 혼합 기준으로 보수적으로 평가합니다. 제조사 성능 자료로 확인하십시오."
            }
            MixerModel::Weir => {
                "웨어: 고정 손실수두 0.15 m를 가정합니다. 낙하 수맥 직하부에 주입하면 혼합이 가장 좋습니다."
            }
        }
    }
}

/// 장치 없이 관·수로 자체 난류로 혼합되는 경우.
fn natural_decay(
    input: &CorrelationInput,
    defaults: &Defaults,
    constants: &MixingConstants,
) -> MixerPerformance {
    let cov = match input.conduit_type {
        ConduitType::Channel => power_law(
            1.0,
            &[(input.l_over_d, -0.55), (input.momentum_ratio.max(0.01), -0.2)],
        ),
        ConduitType::Pipe => {
            let initial_cov = input.dilution_ratio.sqrt();
            let decay = constants.pipe_decay_coefficient
                * defaults.friction_factor.max(0.0).sqrt()
                * input.l_over_d;
            initial_cov * (-decay).exp()
        }
    };
    MixerPerformance {
        cov,
        friction_factor: defaults.friction_factor,
        mixed_length_m: defaults.mixed_length_m,
        branch: match input.conduit_type {
            ConduitType::Channel => "natural/channel",
            ConduitType::Pipe => "natural/pipe",
        },
    }
}

fn kenics(input: &CorrelationInput) -> MixerPerformance {
    let (cov, branch) = match input.injection_type {
        InjectionType::Single => (
            power_law(
                0.5,
                &[
                    (input.reynolds, -0.25),
                    (input.dilution_ratio, 0.5),
                    (input.num_elements, -1.9),
                ],
            ),
            "kenics/single",
        ),
        InjectionType::Twin => (
            power_law(
                0.35,
                &[
                    (input.reynolds, -0.25),
                    (input.dilution_ratio, 0.5),
                    (input.num_elements, -1.75),
                ],
            ),
            "kenics/twin",
        ),
    };
    MixerPerformance {
        cov,
        friction_factor: 1.9,
        mixed_length_m: 1.5 * input.num_elements * input.hydraulic_diameter_m,
        branch,
    }
}

fn hev(input: &CorrelationInput, defaults: &Defaults) -> MixerPerformance {
    let base = [(input.reynolds, -0.25), (input.dilution_ratio, 0.5)];
    let (cov, branch) = match input.conduit_type {
        ConduitType::Channel => (
            power_law(0.5, &[base[0], base[1], (input.num_elements, -1.2)]),
            "hev/channel",
        ),
        // L/D = 3에서 두 식이 연속이 되도록 계수를 맞춤
        ConduitType::Pipe if input.l_over_d <= 3.0 => (
            power_law(0.65, &[base[0], base[1], (input.l_over_d, -0.9)]),
            "hev/pipe-short",
        ),
        ConduitType::Pipe => (
            power_law(1.33, &[base[0], base[1], (input.l_over_d, -1.55)]),
            "hev/pipe-long",
        ),
    };
    MixerPerformance {
        cov,
        friction_factor: defaults.friction_factor,
        mixed_length_m: input.num_elements * input.hydraulic_diameter_m,
        branch,
    }
}

fn smv(input: &CorrelationInput) -> MixerPerformance {
    MixerPerformance {
        cov: power_law(
            0.15,
            &[
                (input.reynolds, -0.1),
                (input.dilution_ratio, 0.5),
                (input.num_elements, -2.4),
            ],
        ),
        friction_factor: 10.1,
        mixed_length_m: input.num_elements * input.hydraulic_diameter_m,
        branch: "smv",
    }
}

struct StmCoefficients {
    coefficient: f64,
    element_exponent: f64,
    friction_factor: f64,
    branch: &'static str,
}

fn stm_coefficients(pitch_ratio: PitchRatio, conduit_type: ConduitType) -> StmCoefficients {
    let (coefficient, element_exponent, friction_factor, branch) = match (pitch_ratio, conduit_type)
    {
        (PitchRatio::Tight, ConduitType::Pipe) => (0.12, 1.8, 2.8, "stm/1.125/pipe"),
        (PitchRatio::Tight, ConduitType::Channel) => (0.18, 1.6, 2.2, "stm/1.125/channel"),
        (PitchRatio::Standard, ConduitType::Pipe) => (0.15, 1.6, 2.0, "stm/1.5/pipe"),
        (PitchRatio::Standard, ConduitType::Channel) => (0.22, 1.45, 1.6, "stm/1.5/channel"),
        (PitchRatio::Open, ConduitType::Pipe) => (0.19, 1.4, 1.3, "stm/2.25/pipe"),
        (PitchRatio::Open, ConduitType::Channel) => (0.27, 1.3, 1.0, "stm/2.25/channel"),
    };
    StmCoefficients {
        coefficient,
        element_exponent,
        friction_factor,
        branch,
    }
}

fn stm(input: &CorrelationInput) -> MixerPerformance {
    let c = stm_coefficients(input.pitch_ratio, input.conduit_type);
    let length_factor = match input.conduit_type {
        ConduitType::Channel => 0.5,
        ConduitType::Pipe => 0.8,
    };
    MixerPerformance {
        cov: power_law(
            c.coefficient,
            &[
                (input.reynolds, -0.2),
                (input.dilution_ratio, 0.5),
                (input.num_elements, -c.element_exponent),
            ],
        ),
        friction_factor: c.friction_factor,
        mixed_length_m: length_factor * input.num_elements * input.hydraulic_diameter_m,
        branch: c.branch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipe_input() -> CorrelationInput {
        CorrelationInput {
            conduit_type: ConduitType::Pipe,
            injection_type: InjectionType::Single,
            pitch_ratio: PitchRatio::Open,
            reynolds: 6.6e5,
            dilution_ratio: 7000.0,
            num_elements: 6.0,
            l_over_d: 12.5,
            momentum_ratio: 0.2,
            hydraulic_diameter_m: 0.8,
            available_length_m: 10.0,
            default_friction_factor: 0.012,
        }
    }

    #[test]
    fn kenics_constants() {
        let res = MixerModel::KenicsKm.evaluate(&pipe_input(), &MixingConstants::default());
        assert_eq!(res.friction_factor, 1.9);
        assert!((res.mixed_length_m - 1.5 * 6.0 * 0.8).abs() < 1e-12);
        assert!(res.cov > 0.0001 && res.cov < 1.0, "cov={}", res.cov);
    }

    #[test]
    fn twin_injection_uses_its_own_branch() {
        let mut input = pipe_input();
        let single = MixerModel::KenicsKm.evaluate(&input, &MixingConstants::default());
        input.injection_type = InjectionType::Twin;
        let twin = MixerModel::KenicsKm.evaluate(&input, &MixingConstants::default());
        assert_eq!(twin.branch, "kenics/twin");
        assert_ne!(single.cov, twin.cov);
    }

    #[test]
    fn hev_short_and_long_meet_at_three_diameters() {
        let c = MixingConstants::default();
        let mut input = pipe_input();
        input.l_over_d = 3.0;
        let short = MixerModel::Hev.evaluate(&input, &c);
        input.l_over_d = 3.0 + 1e-9;
        let long = MixerModel::Hev.evaluate(&input, &c);
        assert_eq!(short.branch, "hev/pipe-short");
        assert_eq!(long.branch, "hev/pipe-long");
        assert!((short.cov - long.cov).abs() / short.cov < 0.01);
    }

    #[test]
    fn smv_is_high_loss() {
        let res = MixerModel::Smv.evaluate(&pipe_input(), &MixingConstants::default());
        assert_eq!(res.friction_factor, 10.1);
        assert!((res.mixed_length_m - 4.8).abs() < 1e-12);
    }

    #[test]
    fn stm_pitch_and_topology() {
        let c = MixingConstants::default();
        let mut input = pipe_input();
        input.pitch_ratio = PitchRatio::Tight;
        let tight = MixerModel::Stm.evaluate(&input, &c);
        input.pitch_ratio = PitchRatio::Open;
        let open = MixerModel::Stm.evaluate(&input, &c);
        assert!(tight.friction_factor > open.friction_factor);
        assert!(tight.cov < open.cov);
        assert!((open.mixed_length_m - 0.8 * 6.0 * 0.8).abs() < 1e-12);

        input.conduit_type = ConduitType::Channel;
        let channel = MixerModel::Stm.evaluate(&input, &c);
        assert!((channel.mixed_length_m - 0.5 * 6.0 * 0.8).abs() < 1e-12);
    }

    #[test]
    fn baffles_fall_back_to_natural_decay() {
        let c = MixingConstants::default();
        let none = MixerModel::None.evaluate(&pipe_input(), &c);
        let baffles = MixerModel::Baffles.evaluate(&pipe_input(), &c);
        assert_eq!(none.cov, baffles.cov);
        assert_eq!(baffles.friction_factor, 0.012);
        assert_eq!(baffles.mixed_length_m, 10.0);
    }

    #[test]
    fn natural_channel_floors_momentum_ratio() {
        let c = MixingConstants::default();
        let mut input = pipe_input();
        input.conduit_type = ConduitType::Channel;
        input.l_over_d = 200.0;
        input.momentum_ratio = 0.0;
        let zero = MixerModel::None.evaluate(&input, &c);
        input.momentum_ratio = 0.01;
        let floored = MixerModel::None.evaluate(&input, &c);
        assert_eq!(zero.cov, floored.cov);
    }

    #[test]
    fn natural_pipe_decays_from_dilution_ratio() {
        let mut input = pipe_input();
        input.dilution_ratio = 4.0;
        input.l_over_d = 40.0;
        let res = MixerModel::None.evaluate(&input, &MixingConstants::default());
        let expected = 2.0 * (-0.75 * 0.012f64.sqrt() * 40.0).exp();
        assert_eq!(res.branch, "natural/pipe");
        assert!(expected > 0.0001 && expected < 1.0);
        assert!((res.cov - expected).abs() < 1e-12, "cov={}", res.cov);
    }

    #[test]
    fn hev_channel_uses_element_count() {
        let mut input = pipe_input();
        input.conduit_type = ConduitType::Channel;
        let res = MixerModel::Hev.evaluate(&input, &MixingConstants::default());
        let expected = 0.5 * 6.6e5f64.powf(-0.25) * 7000f64.sqrt() * 6f64.powf(-1.2);
        assert_eq!(res.branch, "hev/channel");
        assert!(expected > 0.0001 && expected < 1.0);
        assert!((res.cov - expected).abs() < 1e-12, "cov={}", res.cov);
        assert_eq!(res.friction_factor, 0.012);
        assert!((res.mixed_length_m - 6.0 * 0.8).abs() < 1e-12);
    }

    #[test]
    fn non_finite_result_is_worst_case() {
        let mut input = pipe_input();
        input.reynolds = 0.0;
        input.dilution_ratio = 0.0;
        for model in [MixerModel::KenicsKm, MixerModel::Smv, MixerModel::Stm] {
            let res = model.evaluate(&input, &MixingConstants::default());
            assert_eq!(res.cov, 1.0, "{model:?}");
        }
    }

    #[test]
    fn every_model_has_guidance() {
        for model in [
            MixerModel::None,
            MixerModel::KenicsKm,
            MixerModel::Hev,
            MixerModel::Smv,
            MixerModel::Stm,
            MixerModel::Baffles,
            MixerModel::Weir,
        ] {
            assert!(!model.guidance().is_empty());
        }
    }
}

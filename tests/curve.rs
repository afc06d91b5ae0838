//! 성능 곡선 데이터 테스트.
use chemical_mixing_toolbox::mixing::{
    performance_curve, MixerModel, MixingConstants, MixingEngine, MixingInputs,
};

#[test]
fn curve_spans_required_distance_and_decreases() {
    let inputs = MixingInputs {
        mixer_model: MixerModel::KenicsKm,
        num_elements: 4.0,
        ..MixingInputs::default()
    };
    let engine = MixingEngine::default();
    let res = engine.evaluate(&inputs);
    let curve = performance_curve(&inputs, &res, engine.constants(), 31, 2.0);

    assert_eq!(curve.len(), 31);
    assert_eq!(curve[0].distance_m, 0.0);
    let last = curve.last().expect("points");
    assert!((last.distance_m - 2.0 * res.mixing_distance_needed_m).abs() < 1e-9);
    for pair in curve.windows(2) {
        assert!(pair[1].cov <= pair[0].cov);
        assert!((0.0001..=1.0).contains(&pair[1].cov));
    }
    // 필요 거리 부근에서 목표 CoV에 도달
    let at_target = curve
        .iter()
        .find(|p| p.distance_m >= res.mixing_distance_needed_m)
        .expect("point past target");
    assert!(at_target.cov <= inputs.target_cov + 1e-9);
}

#[test]
fn curve_reports_lime_dissolution() {
    let inputs = MixingInputs {
        chemical: "Lime".to_string(),
        ..MixingInputs::default()
    };
    let constants = MixingConstants::default();
    let res = MixingEngine::new(constants.clone()).evaluate(&inputs);
    let curve = performance_curve(&inputs, &res, &constants, 5, 1.0);
    assert_eq!(curve[0].dissolved_pct, 0.0);
    assert!(curve[4].dissolved_pct > curve[1].dissolved_pct);
}

#[test]
fn empty_and_single_point_curves() {
    let inputs = MixingInputs::default();
    let constants = MixingConstants::default();
    let res = MixingEngine::default().evaluate(&inputs);
    assert!(performance_curve(&inputs, &res, &constants, 0, 1.0).is_empty());
    let one = performance_curve(&inputs, &res, &constants, 1, 1.0);
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].distance_m, 0.0);
}

//! 보고서·CLI 명령 출력 테스트.
use chemical_mixing_toolbox::app::{run, Command};
use chemical_mixing_toolbox::config::Config;
use chemical_mixing_toolbox::mixing::{evaluate, CurvePoint, MixerModel, MixingInputs};
use chemical_mixing_toolbox::report::{format_curve, format_report};

#[test]
fn report_lists_verdict_and_guidance() {
    let inputs = MixingInputs {
        mixer_model: MixerModel::Hev,
        ..MixingInputs::default()
    };
    let res = evaluate(&inputs);
    let text = format_report(&inputs, &res);
    assert!(text.contains("-- 판정 --"));
    assert!(text.contains(MixerModel::Hev.guidance()));
    assert!(!text.contains("석회 용해"));
}

#[test]
fn lime_report_has_dissolution_section() {
    let inputs = MixingInputs {
        chemical: "Lime".to_string(),
        ..MixingInputs::default()
    };
    let text = format_report(&inputs, &evaluate(&inputs));
    assert!(text.contains("-- 석회 용해 --"));
}

#[test]
fn curve_table_has_header_and_rows() {
    let text = format_curve(&[]);
    assert_eq!(text.lines().count(), 1);

    let points = [
        CurvePoint { distance_m: 0.0, cov: 0.5, dissolved_pct: 0.0 },
        CurvePoint { distance_m: 12.5, cov: 0.0421, dissolved_pct: 96.31 },
    ];
    let text = format_curve(&points);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2], format!("{:>10} {:>10} {:>10}", "12.50", "0.0421", "96.3"));
}

#[test]
fn report_shows_both_stream_fractions() {
    let inputs = MixingInputs::default();
    let text = format_report(&inputs, &evaluate(&inputs));
    assert!(text.contains("약품 분율 0.048"));
    assert!(text.contains("희석수 분율 0.952"));
}

#[test]
fn template_command_prints_scenario() {
    let out = run(&Command::Template, &Config::default()).expect("template");
    assert!(out.contains("mixer_model = \"NONE\""));
    assert!(out.contains("pitch_ratio = \"2.25:1\""));
}

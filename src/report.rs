use std::fmt::Write;

use crate::mixing::{CalculationResults, CurvePoint, MixingInputs};

fn yes_no(value: bool) -> &'static str {
    if value {
        "만족"
    } else {
        "불만족"
    }
}

fn render(write: impl FnOnce(&mut String) -> std::fmt::Result) -> String {
    let mut out = String::new();
    let _ = write(&mut out);
    out
}

/// 평가 결과를 사람이 읽는 보고서로 만든다.
pub fn format_report(inputs: &MixingInputs, res: &CalculationResults) -> String {
    render(|out| write_report(out, inputs, res))
}

fn write_report(
    out: &mut String,
    inputs: &MixingInputs,
    res: &CalculationResults,
) -> std::fmt::Result {
    writeln!(out, "=== 약품 주입·혼합 평가 ===")?;
    writeln!(
        out,
        "유로: {:?}/{:?}, 장치: {:?} ({}), 약품: {}",
        inputs.conduit_type,
        inputs.conduit_shape,
        inputs.mixer_model,
        res.correlation_branch,
        inputs.chemical
    )?;

    writeln!(out, "\n-- 수리 --")?;
    writeln!(
        out,
        "단면적: {:.4} m², 윤변: {:.3} m, 수력 직경: {:.4} m",
        res.wetted_area_m2, res.wetted_perimeter_m, res.hydraulic_diameter_m
    )?;
    writeln!(
        out,
        "유속: {:.3} m/s, Re={:.3e}",
        res.velocity_m_per_s, res.reynolds
    )?;

    writeln!(out, "\n-- 주입 --")?;
    writeln!(
        out,
        "총 주입 유량: {:.1} L/h (약품 분율 {:.3}, 희석수 분율 {:.3}), 밀도: {:.1} kg/m³, 점도: {:.3e} Pa·s",
        res.total_injection_flow_l_per_h,
        res.chemical_fraction,
        res.water_fraction,
        res.injected_density_kg_per_m3,
        res.injected_viscosity_pa_s
    )?;
    writeln!(
        out,
        "운동량비: {:.3} ({}), 권장 오리피스: {:.1} mm",
        res.momentum_ratio, res.momentum_regime, res.suggested_orifice_mm
    )?;

    writeln!(out, "\n-- 혼합 --")?;
    writeln!(
        out,
        "희석비 α: {:.1}, L/D: {:.2}, CoV: {:.4} (목표 {:.4})",
        res.dilution_ratio, res.l_over_d, res.mixer_cov, inputs.target_cov
    )?;
    writeln!(
        out,
        "FD: {:.4}, 혼합 길이: {:.3} m",
        res.friction_factor, res.mixed_length_m
    )?;
    writeln!(
        out,
        "손실수두: {:.4} m ({:.3} kPa), 소산 동력: {:.1} W, G: {:.1} 1/s",
        res.headloss_m, res.headloss_kpa, res.power_w, res.g_value_per_s
    )?;

    if inputs.is_lime() {
        writeln!(out, "\n-- 석회 용해 --")?;
        writeln!(
            out,
            "포화 농도: {:.0} mg/L, 속도 상수: {:.4} 1/s",
            res.lime_saturation_limit_mg_per_l, res.dissolution_rate_per_s
        )?;
        writeln!(
            out,
            "95% 용해: {:.1} s / {:.1} m, 목표 지점 용해율: {:.1} %",
            res.dissolution_time_95_s, res.dissolution_distance_95_m, res.dissolved_at_target_pct
        )?;
    }

    writeln!(out, "\n-- 판정 --")?;
    writeln!(
        out,
        "필요 혼합 거리: {:.2} m, 필요 혼합 시간: {:.1} s (목표 {:.1} s)",
        res.mixing_distance_needed_m, res.mixing_time_needed_s, inputs.target_mixing_time_s
    )?;
    writeln!(
        out,
        "CoV: {}, 시간: {}, 종합: {}",
        yes_no(res.is_cov_compliant),
        yes_no(res.is_time_compliant),
        yes_no(res.is_compliant)
    )?;
    writeln!(out, "\n제조사 권고: {}", res.manufacturer_guidance)?;
    for w in &res.warnings {
        writeln!(out, "경고: {w}")?;
    }
    Ok(())
}

/// 성능 곡선 표본을 표로 만든다.
pub fn format_curve(points: &[CurvePoint]) -> String {
    render(|out| write_curve(out, points))
}

fn write_curve(out: &mut String, points: &[CurvePoint]) -> std::fmt::Result {
    writeln!(out, "{:>10} {:>10} {:>10}", "거리[m]", "CoV", "용해[%]")?;
    for p in points {
        writeln!(
            out,
            "{:>10.2} {:>10.4} {:>10.1}",
            p.distance_m, p.cov, p.dissolved_pct
        )?;
    }
    Ok(())
}

//! 0 나눗셈과 범위 이탈을 흡수하는 수치 보조 함수.

/// 분모가 0(절댓값이 `floor` 미만)이면 `floor`로 치환한다.
pub fn guard(denominator: f64, floor: f64) -> f64 {
    if denominator.abs() < floor {
        floor
    } else {
        denominator
    }
}

/// 하한이 보장된 나눗셈.
pub fn safe_div(numerator: f64, denominator: f64, floor: f64) -> f64 {
    numerator / guard(denominator, floor)
}

/// CoV를 [floor, ceiling] 범위로 자른다. 유한하지 않은 값은 최악값(ceiling)으로 본다.
pub fn clamp_cov(value: f64, floor: f64, ceiling: f64) -> f64 {
    if value.is_finite() {
        value.clamp(floor, ceiling)
    } else {
        ceiling
    }
}

use serde::{Deserialize, Serialize};

/// 유로 형태. 관로(만관) 또는 개수로.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConduitType {
    Pipe,
    Channel,
}

/// 단면 형상. 개수로는 항상 사각형으로 취급한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConduitShape {
    Circular,
    Rectangular,
}

/// 혼합 장치 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MixerModel {
    /// 장치 없음(자연 혼합)
    None,
    KenicsKm,
    Hev,
    Smv,
    Stm,
    Baffles,
    Weir,
}

/// 주입 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InjectionType {
    Single,
    Twin,
}

impl InjectionType {
    /// 주입점 개수.
    pub fn points(self) -> u32 {
        match self {
            InjectionType::Single => 1,
            InjectionType::Twin => 2,
        }
    }
}

/// STM 엘리먼트 피치비. STM 외 장치에서는 무시된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PitchRatio {
    #[serde(rename = "1.125:1")]
    Tight,
    #[serde(rename = "1.5:1")]
    Standard,
    #[default]
    #[serde(rename = "2.25:1")]
    Open,
}

/// 주입·혼합 설비 평가 입력 스냅샷.
///
/// 주 유량은 m³/h, 약품·희석수 유량은 L/h, 수온은 °C, 주입률은 mg/L 단위이다.
/// 그 외 치수와 물성은 SI 기준(m, kg/m³, Pa·s)이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixingInputs {
    pub conduit_type: ConduitType,
    pub conduit_shape: ConduitShape,
    /// 관경 또는 수로 폭 [m]
    pub dimension_m: f64,
    /// 사각 덕트 높이 또는 개수로 수심 [m]. 없으면 폭과 같게 본다.
    #[serde(default)]
    pub secondary_dimension_m: Option<f64>,
    /// 주 유량 [m³/h]
    pub flow_rate_m3_per_h: f64,
    /// 주 유체 밀도 [kg/m³]
    pub density_kg_per_m3: f64,
    /// 주 유체 점도 [Pa·s]
    pub viscosity_pa_s: f64,
    pub mixer_model: MixerModel,
    pub num_elements: f64,
    /// 설치 가능 길이 [m]
    pub available_length_m: f64,
    pub injection_type: InjectionType,
    #[serde(default)]
    pub pitch_ratio: PitchRatio,
    /// 약품 이름. "Lime"을 포함하면 용해 속도 모델을 적용한다.
    pub chemical: String,
    /// 약품 주입률 [mg/L]
    pub chemical_dose_mg_per_l: f64,
    /// 약품 유량 [L/h]
    pub chemical_flow_l_per_h: f64,
    /// 희석수 유량 [L/h]
    pub dilution_water_flow_l_per_h: f64,
    /// 약품 밀도 [kg/m³]
    pub chemical_density_kg_per_m3: f64,
    /// 약품 점도 [Pa·s]
    pub chemical_viscosity_pa_s: f64,
    pub target_cov: f64,
    /// 목표 혼합 시간 [s]
    pub target_mixing_time_s: f64,
    /// 수온 [°C]
    pub water_temperature_c: f64,
}

impl MixingInputs {
    /// 석회 계열 약품인지 여부.
    pub fn is_lime(&self) -> bool {
        self.chemical.contains("Lime")
    }

    /// 높이(수심). 지정되지 않으면 폭을 그대로 쓴다.
    pub fn secondary_or_width(&self) -> f64 {
        self.secondary_dimension_m.unwrap_or(self.dimension_m)
    }
}

impl Default for MixingInputs {
    /// 구경 800 mm 관로, 정적 혼합기 없음, 일반 응집제 주입 기준값.
    fn default() -> Self {
        Self {
            conduit_type: ConduitType::Pipe,
            conduit_shape: ConduitShape::Circular,
            dimension_m: 0.8,
            secondary_dimension_m: None,
            flow_rate_m3_per_h: 1500.0,
            density_kg_per_m3: 1000.0,
            viscosity_pa_s: 0.001,
            mixer_model: MixerModel::None,
            num_elements: 6.0,
            available_length_m: 10.0,
            injection_type: InjectionType::Single,
            pitch_ratio: PitchRatio::Open,
            chemical: "Ferric Chloride".to_string(),
            chemical_dose_mg_per_l: 20.0,
            chemical_flow_l_per_h: 10.0,
            dilution_water_flow_l_per_h: 200.0,
            chemical_density_kg_per_m3: 1400.0,
            chemical_viscosity_pa_s: 0.012,
            target_cov: 0.05,
            target_mixing_time_s: 30.0,
            water_temperature_c: 15.0,
        }
    }
}

//! 시나리오·설정 TOML 파싱 테스트.
use chemical_mixing_toolbox::config::{Config, OutputFormat};
use chemical_mixing_toolbox::mixing::{
    ConduitShape, ConduitType, InjectionType, MixerModel, MixingInputs, PitchRatio,
};
use chemical_mixing_toolbox::scenario::{parse_scenario, template};

const STM_CHANNEL: &str = r#"
conduit_type = "CHANNEL"
conduit_shape = "RECTANGULAR"
dimension_m = 1.5
secondary_dimension_m = 0.8
flow_rate_m3_per_h = 4000.0
density_kg_per_m3 = 998.0
viscosity_pa_s = 0.0011
mixer_model = "STM"
num_elements = 4.0
available_length_m = 12.0
injection_type = "TWIN"
pitch_ratio = "1.125:1"
chemical = "Lime Slurry"
chemical_dose_mg_per_l = 30.0
chemical_flow_l_per_h = 120.0
dilution_water_flow_l_per_h = 0.0
chemical_density_kg_per_m3 = 1150.0
chemical_viscosity_pa_s = 0.02
target_cov = 0.1
target_mixing_time_s = 60.0
water_temperature_c = 12.0
"#;

#[test]
fn parses_enum_spellings() {
    let inputs = parse_scenario(STM_CHANNEL).expect("scenario");
    assert_eq!(inputs.conduit_type, ConduitType::Channel);
    assert_eq!(inputs.conduit_shape, ConduitShape::Rectangular);
    assert_eq!(inputs.mixer_model, MixerModel::Stm);
    assert_eq!(inputs.injection_type, InjectionType::Twin);
    assert_eq!(inputs.pitch_ratio, PitchRatio::Tight);
    assert_eq!(inputs.secondary_dimension_m, Some(0.8));
    assert!(inputs.is_lime());
}

#[test]
fn optional_fields_default() {
    let src: String = STM_CHANNEL
        .lines()
        .filter(|l| !l.starts_with("secondary_dimension_m") && !l.starts_with("pitch_ratio"))
        .collect::<Vec<_>>()
        .join("\n");
    let inputs = parse_scenario(&src).expect("scenario");
    assert_eq!(inputs.secondary_dimension_m, None);
    assert_eq!(inputs.pitch_ratio, PitchRatio::Open);
    assert_eq!(inputs.secondary_or_width(), 1.5);
}

#[test]
fn unknown_mixer_is_rejected() {
    let src = STM_CHANNEL.replace("\"STM\"", "\"PADDLE\"");
    assert!(parse_scenario(&src).is_err());
}

#[test]
fn template_parses_back_to_defaults() {
    let text = template().expect("template");
    let inputs = parse_scenario(&text).expect("template scenario");
    assert_eq!(inputs, MixingInputs::default());
}

#[test]
fn config_overrides_subset_of_constants() {
    let cfg: Config = toml::from_str(
        r#"
output_format = "toml"

[constants]
weir_headloss_m = 0.2
"#,
    )
    .expect("config");
    assert_eq!(cfg.output_format, OutputFormat::Toml);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.constants.weir_headloss_m, 0.2);
    assert_eq!(cfg.constants.target_momentum_ratio, 0.22);
}

#[test]
fn bundled_scenarios_load() {
    use chemical_mixing_toolbox::scenario::load_scenario;
    use std::path::Path;

    let kenics = load_scenario(Path::new("scenarios/kenics_pipe.toml")).expect("kenics");
    assert_eq!(kenics.mixer_model, MixerModel::KenicsKm);
    let lime = load_scenario(Path::new("scenarios/lime_channel.toml")).expect("lime");
    assert_eq!(lime.pitch_ratio, PitchRatio::Standard);
    assert!(lime.is_lime());
    assert!(load_scenario(Path::new("scenarios/missing.toml")).is_err());
}

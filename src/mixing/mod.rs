//! 약품 주입·혼합 설비 평가 엔진.
//!
//! 주입 유체 물성 → 수리 → 운동량비 → 장치별 CoV → 손실·G값 → 석회 용해 → 준수 판정
//! 순서로 한 번에 계산한다. 반복이나 내부 상태는 없다.

pub mod compliance;
pub mod constants;
pub mod correlation;
pub mod curve;
pub mod dissolution;
pub mod engine;
pub mod headloss;
pub mod hydraulics;
pub mod injection;
pub mod inputs;
pub mod momentum;
pub mod numeric;
pub mod results;

pub use constants::MixingConstants;
pub use curve::{performance_curve, CurvePoint};
pub use engine::{evaluate, MixingEngine};
pub use inputs::{ConduitShape, ConduitType, InjectionType, MixerModel, MixingInputs, PitchRatio};
pub use momentum::MomentumRegime;
pub use results::CalculationResults;

//! 계산 엔진을 라이브러리로 분리하여 CLI 뿐 아니라 외부 화면·차트에서도 쓸 수 있게 한다.

pub mod app;
pub mod config;
pub mod logging;
pub mod mixing;
pub mod report;
pub mod scenario;
pub mod units;

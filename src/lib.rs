//! 체적 유량 값 타입과 단위 변환 로직을 라이브러리로 분리하여 CLI 외의 코드에서도 쓸 수 있게 한다.

pub mod app;
pub mod config;
pub mod i18n;
pub mod logging;
pub mod quantity;
pub mod ui_cli;
pub mod units;

pub use quantity::{UnitDisplay, VolumetricFlow};
pub use units::{convert_volumetric_flow, VolumetricFlowUnit};

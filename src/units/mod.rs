//! 단위 정의 및 변환 모듈 모음.

pub mod volumetric_flow;

pub use volumetric_flow::{convert_volumetric_flow, VolumetricFlowUnit};

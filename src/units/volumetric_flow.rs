use serde::{Deserialize, Serialize};

/// 체적 유량 단위. 내부 기준은 입방미터 매 초(m³/s)이다.
///
/// 변형(variant) 순서는 고정이다. [`VolumetricFlowUnit::ALL`] 과 직렬화 결과가 이 순서를 따른다.
/// 갤런은 미국 액량 갤런이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum VolumetricFlowUnit {
    CubicCentimetersPerHour,
    CubicCentimetersPerMinute,
    CubicCentimetersPerSecond,
    CubicMetersPerHour,
    CubicMetersPerMinute,
    CubicMetersPerSecond,
    GallonsPerHour,
    GallonsPerMinute,
    GallonsPerSecond,
    LitersPerHour,
    LitersPerMinute,
    LitersPerSecond,
    MillilitersPerHour,
    MillilitersPerMinute,
    MillilitersPerSecond,
}

impl VolumetricFlowUnit {
    /// 내부 기준 단위.
    pub const BASE: Self = VolumetricFlowUnit::CubicMetersPerSecond;

    /// 모든 단위를 선언 순서대로 담는다.
    pub const ALL: [Self; 15] = [
        VolumetricFlowUnit::CubicCentimetersPerHour,
        VolumetricFlowUnit::CubicCentimetersPerMinute,
        VolumetricFlowUnit::CubicCentimetersPerSecond,
        VolumetricFlowUnit::CubicMetersPerHour,
        VolumetricFlowUnit::CubicMetersPerMinute,
        VolumetricFlowUnit::CubicMetersPerSecond,
        VolumetricFlowUnit::GallonsPerHour,
        VolumetricFlowUnit::GallonsPerMinute,
        VolumetricFlowUnit::GallonsPerSecond,
        VolumetricFlowUnit::LitersPerHour,
        VolumetricFlowUnit::LitersPerMinute,
        VolumetricFlowUnit::LitersPerSecond,
        VolumetricFlowUnit::MillilitersPerHour,
        VolumetricFlowUnit::MillilitersPerMinute,
        VolumetricFlowUnit::MillilitersPerSecond,
    ];

    /// 1 m³/s 가 이 단위로 몇인지를 반환한다. 0 인 계수는 없다.
    pub const fn factor(self) -> f64 {
        match self {
            VolumetricFlowUnit::CubicCentimetersPerHour => 3_600_000_000.0,
            VolumetricFlowUnit::CubicCentimetersPerMinute => 60_000_000.0,
            VolumetricFlowUnit::CubicCentimetersPerSecond => 1_000_000.0,
            VolumetricFlowUnit::CubicMetersPerHour => 3_600.0,
            VolumetricFlowUnit::CubicMetersPerMinute => 60.0,
            VolumetricFlowUnit::CubicMetersPerSecond => 1.0,
            VolumetricFlowUnit::GallonsPerHour => 951_019.388_489_36,
            VolumetricFlowUnit::GallonsPerMinute => 15_850.323_141_489,
            VolumetricFlowUnit::GallonsPerSecond => 264.172_052_358_15,
            VolumetricFlowUnit::LitersPerHour => 3_600_000.0,
            VolumetricFlowUnit::LitersPerMinute => 60_000.0,
            VolumetricFlowUnit::LitersPerSecond => 1_000.0,
            VolumetricFlowUnit::MillilitersPerHour => 3_600_000_000.0,
            VolumetricFlowUnit::MillilitersPerMinute => 60_000_000.0,
            VolumetricFlowUnit::MillilitersPerSecond => 1_000_000.0,
        }
    }

    /// 표시용 단위 기호.
    pub const fn symbol(self) -> &'static str {
        match self {
            VolumetricFlowUnit::CubicCentimetersPerHour => "cm³/h",
            VolumetricFlowUnit::CubicCentimetersPerMinute => "cm³/min",
            VolumetricFlowUnit::CubicCentimetersPerSecond => "cm³/s",
            VolumetricFlowUnit::CubicMetersPerHour => "m³/h",
            VolumetricFlowUnit::CubicMetersPerMinute => "m³/min",
            VolumetricFlowUnit::CubicMetersPerSecond => "m³/s",
            VolumetricFlowUnit::GallonsPerHour => "gal/h",
            VolumetricFlowUnit::GallonsPerMinute => "gal/min",
            VolumetricFlowUnit::GallonsPerSecond => "gal/s",
            VolumetricFlowUnit::LitersPerHour => "L/h",
            VolumetricFlowUnit::LitersPerMinute => "L/min",
            VolumetricFlowUnit::LitersPerSecond => "L/s",
            VolumetricFlowUnit::MillilitersPerHour => "mL/h",
            VolumetricFlowUnit::MillilitersPerMinute => "mL/min",
            VolumetricFlowUnit::MillilitersPerSecond => "mL/s",
        }
    }
}

/// 체적 유량을 변환한다.
///
/// 같은 단위끼리는 값을 그대로 돌려준다(부동소수 왕복 오차 없음).
/// 그 외에는 기준 단위 대비 계수로 한 번 곱하고 나눈다.
pub fn convert_volumetric_flow(
    value: f64,
    from: VolumetricFlowUnit,
    to: VolumetricFlowUnit,
) -> f64 {
    if from == to {
        return value;
    }
    value * to.factor() / from.factor()
}

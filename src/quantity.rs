//! 체적 유량 값 타입.
//!
//! 값은 항상 내부 기준 단위(m³/s)로 저장되며 생성 후 바뀌지 않는다.
//! 연산은 모두 새 값을 돌려준다.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::units::{convert_volumetric_flow, VolumetricFlowUnit};

/// 내부 기준 단위(m³/s)로 환산된 체적 유량.
///
/// 비교와 동등성은 기준 값의 `f64` 비교를 그대로 따른다(허용 오차 없음).
/// 맨 `f64` 와 비교하면 그 수를 이미 m³/s 로 본다.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VolumetricFlow(f64);

impl VolumetricFlow {
    /// 0 m³/s.
    pub const ZERO: Self = VolumetricFlow(0.0);

    /// 주어진 단위의 값으로 생성한다.
    pub fn new(value: f64, unit: VolumetricFlowUnit) -> Self {
        VolumetricFlow(convert_volumetric_flow(
            value,
            unit,
            VolumetricFlowUnit::BASE,
        ))
    }

    /// 이미 m³/s 인 값으로 생성한다.
    pub const fn from_base(value: f64) -> Self {
        VolumetricFlow(value)
    }

    /// 기준 단위(m³/s) 값.
    pub const fn value(self) -> f64 {
        self.0
    }

    /// 원하는 단위로 환산한 값을 반환한다.
    pub fn value_in(self, unit: VolumetricFlowUnit) -> f64 {
        convert_volumetric_flow(self.0, VolumetricFlowUnit::BASE, unit)
    }

    pub fn cubic_centimeters_per_hour(self) -> f64 {
        self.value_in(VolumetricFlowUnit::CubicCentimetersPerHour)
    }

    pub fn cubic_centimeters_per_minute(self) -> f64 {
        self.value_in(VolumetricFlowUnit::CubicCentimetersPerMinute)
    }

    pub fn cubic_centimeters_per_second(self) -> f64 {
        self.value_in(VolumetricFlowUnit::CubicCentimetersPerSecond)
    }

    pub fn cubic_meters_per_hour(self) -> f64 {
        self.value_in(VolumetricFlowUnit::CubicMetersPerHour)
    }

    pub fn cubic_meters_per_minute(self) -> f64 {
        self.value_in(VolumetricFlowUnit::CubicMetersPerMinute)
    }

    pub fn cubic_meters_per_second(self) -> f64 {
        self.value_in(VolumetricFlowUnit::CubicMetersPerSecond)
    }

    pub fn gallons_per_hour(self) -> f64 {
        self.value_in(VolumetricFlowUnit::GallonsPerHour)
    }

    pub fn gallons_per_minute(self) -> f64 {
        self.value_in(VolumetricFlowUnit::GallonsPerMinute)
    }

    pub fn gallons_per_second(self) -> f64 {
        self.value_in(VolumetricFlowUnit::GallonsPerSecond)
    }

    pub fn liters_per_hour(self) -> f64 {
        self.value_in(VolumetricFlowUnit::LitersPerHour)
    }

    pub fn liters_per_minute(self) -> f64 {
        self.value_in(VolumetricFlowUnit::LitersPerMinute)
    }

    pub fn liters_per_second(self) -> f64 {
        self.value_in(VolumetricFlowUnit::LitersPerSecond)
    }

    pub fn milliliters_per_hour(self) -> f64 {
        self.value_in(VolumetricFlowUnit::MillilitersPerHour)
    }

    pub fn milliliters_per_minute(self) -> f64 {
        self.value_in(VolumetricFlowUnit::MillilitersPerMinute)
    }

    pub fn milliliters_per_second(self) -> f64 {
        self.value_in(VolumetricFlowUnit::MillilitersPerSecond)
    }

    /// 절댓값.
    pub fn abs(self) -> Self {
        VolumetricFlow(self.0.abs())
    }

    /// 다른 유량과 비교한다. 상대가 없으면 항상 `Less` 를 반환한다.
    ///
    /// NaN 끼리는 같고, NaN 은 다른 모든 값보다 작다.
    pub fn compare_to(self, other: Option<&VolumetricFlow>) -> Ordering {
        match other {
            Some(other) => compare_nan_low(self.0, other.0),
            None => Ordering::Less,
        }
    }

    /// 기준 단위 숫자와 비교한다. 값이 없으면 `Less`.
    pub fn compare_to_value(self, other: Option<f64>) -> Ordering {
        match other {
            Some(other) => compare_nan_low(self.0, other),
            None => Ordering::Less,
        }
    }

    /// 상대가 없으면 `false`. `==` 와 같은 IEEE 비교라 NaN 은 NaN 과도 같지 않다.
    pub fn equals(self, other: Option<&VolumetricFlow>) -> bool {
        other.is_some_and(|o| self == *o)
    }

    pub fn equals_value(self, other: Option<f64>) -> bool {
        other.is_some_and(|o| self == o)
    }

    /// 지정 단위로 환산한 값과 단위 기호를 함께 출력하는 어댑터.
    /// 정밀도 등 서식 옵션은 숫자 부분에 적용된다.
    pub fn display_in(self, unit: VolumetricFlowUnit) -> UnitDisplay {
        UnitDisplay {
            value: self.value_in(unit),
            unit,
        }
    }
}

fn compare_nan_low(a: f64, b: f64) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ord) => ord,
        None => match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            _ => Ordering::Greater,
        },
    }
}

impl From<f64> for VolumetricFlow {
    fn from(value: f64) -> Self {
        VolumetricFlow::from_base(value)
    }
}

impl From<VolumetricFlow> for f64 {
    fn from(value: VolumetricFlow) -> Self {
        value.0
    }
}

impl Hash for VolumetricFlow {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // ==에서 같은 +0.0/-0.0 은 같은 해시를 가져야 한다.
        let v = if self.0 == 0.0 { 0.0_f64 } else { self.0 };
        v.to_bits().hash(state);
    }
}

impl PartialEq<f64> for VolumetricFlow {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl PartialEq<VolumetricFlow> for f64 {
    fn eq(&self, other: &VolumetricFlow) -> bool {
        *self == other.0
    }
}

impl PartialOrd<f64> for VolumetricFlow {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}

impl PartialOrd<VolumetricFlow> for f64 {
    fn partial_cmp(&self, other: &VolumetricFlow) -> Option<Ordering> {
        self.partial_cmp(&other.0)
    }
}

impl Add for VolumetricFlow {
    type Output = VolumetricFlow;

    fn add(self, rhs: Self) -> Self::Output {
        VolumetricFlow(self.0 + rhs.0)
    }
}

impl Sub for VolumetricFlow {
    type Output = VolumetricFlow;

    fn sub(self, rhs: Self) -> Self::Output {
        VolumetricFlow(self.0 - rhs.0)
    }
}

impl Mul<f64> for VolumetricFlow {
    type Output = VolumetricFlow;

    fn mul(self, rhs: f64) -> Self::Output {
        VolumetricFlow(self.0 * rhs)
    }
}

impl Div<f64> for VolumetricFlow {
    type Output = VolumetricFlow;

    fn div(self, rhs: f64) -> Self::Output {
        VolumetricFlow(self.0 / rhs)
    }
}

impl Sum for VolumetricFlow {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(VolumetricFlow::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a VolumetricFlow> for VolumetricFlow {
    fn sum<I: Iterator<Item = &'a VolumetricFlow>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// 기준 값을 단위 없이 출력한다. 서식 옵션(`{:.2}`, 폭, 정렬)은 `f64` 에 그대로 넘긴다.
impl fmt::Display for VolumetricFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::LowerExp for VolumetricFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerExp::fmt(&self.0, f)
    }
}

impl fmt::UpperExp for VolumetricFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperExp::fmt(&self.0, f)
    }
}

/// [`VolumetricFlow::display_in`] 결과. 예: `100 L/s`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDisplay {
    value: f64,
    unit: VolumetricFlowUnit,
}

impl UnitDisplay {
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> VolumetricFlowUnit {
        self.unit
    }
}

impl fmt::Display for UnitDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        write!(f, " {}", self.unit.symbol())
    }
}

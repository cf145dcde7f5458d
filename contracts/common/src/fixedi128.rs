use soroban_fixed_point_math::FixedPoint;

use crate::FEE_RATE_FACTOR;

/// Fixed type with inner type of i128 and fixed denominator 10e9
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct FixedI128(i128);

impl FixedI128 {
    pub const DENOMINATOR: i128 = 1_000_000_000;
    pub const ZERO: FixedI128 = FixedI128(0);
    pub const ONE: FixedI128 = FixedI128(Self::DENOMINATOR);

    pub const fn into_inner(self) -> i128 {
        self.0
    }

    pub fn from_inner<T: Into<i128>>(inner: T) -> FixedI128 {
        FixedI128(inner.into())
    }

    /// Construct fixed value from rational
    pub fn from_rational<N: Into<i128>, D: Into<i128>>(nom: N, denom: D) -> Option<FixedI128> {
        Self::DENOMINATOR
            .checked_mul(nom.into())?
            .checked_div(denom.into())
            .map(FixedI128)
    }

    /// Construct fixed value from fee rate
    /// rate expressed as 0.0001% - 1, 100% - 1_000_000
    pub fn from_fee_rate<T: Into<i128>>(rate: T) -> Option<FixedI128> {
        Self::from_rational(rate, FEE_RATE_FACTOR)
    }

    /// Calculates product of fixed value and int value rounding towards zero.
    pub fn mul_int<T: Into<i128>>(self, other: T) -> Option<i128> {
        self.0.fixed_mul_floor(other.into(), Self::DENOMINATOR)
    }

    /// Calculates product of fixed value and int value and rounds towards infinity.
    pub fn mul_int_ceil<T: Into<i128>>(self, other: T) -> Option<i128> {
        self.0.fixed_mul_ceil(other.into(), Self::DENOMINATOR)
    }
}

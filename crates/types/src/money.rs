//! Integer price and quantity newtypes.
//!
//! Prices are integer ticks and quantities are integer lots, both signed
//! 64-bit. Keeping them as distinct newtypes prevents mixing the two in
//! book arithmetic while the derive set keeps operator syntax available.

use derive_more::{Add, AddAssign, From, Into, Neg, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Price in integer ticks.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    Add,
    Sub,
    Neg,
    AddAssign,
    SubAssign,
    Sum,
    From,
    Into,
)]
pub struct Price(pub i64);

impl Price {
    pub const ZERO: Price = Price(0);

    /// Raw tick count.
    #[inline]
    pub fn raw(self) -> i64 {
        self.0
    }

    /// A tradable price is strictly positive.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.0 > 0
    }

    /// Absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Price(self.0.abs())
    }
}

impl fmt::Debug for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Price({})", self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<i64> for Price {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

/// Quantity in integer lots.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    Add,
    Sub,
    Neg,
    AddAssign,
    SubAssign,
    Sum,
    From,
    Into,
)]
pub struct Qty(pub i64);

impl Qty {
    pub const ZERO: Qty = Qty(0);

    /// Raw lot count.
    #[inline]
    pub fn raw(self) -> i64 {
        self.0
    }

    /// A tradable quantity is strictly positive.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Qty(self.0.abs())
    }

    /// Minimum of two quantities.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Qty(self.0.min(other.0))
    }
}

impl fmt::Debug for Qty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Qty({})", self.0)
    }
}

impl fmt::Display for Qty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<i64> for Qty {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

/// Mid price of the two best quotes, or zero when either side is empty.
#[inline]
pub fn mid_price(best_bid: Price, best_ask: Price) -> Price {
    if best_bid.is_valid() && best_ask.is_valid() {
        Price((best_bid.0 + best_ask.0) / 2)
    } else {
        Price::ZERO
    }
}

/// Bid-ask spread, or zero when either side is empty.
#[inline]
pub fn spread(best_bid: Price, best_ask: Price) -> Price {
    if best_bid.is_valid() && best_ask.is_valid() {
        best_ask - best_bid
    } else {
        Price::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_validity() {
        assert!(Price(1).is_valid());
        assert!(!Price::ZERO.is_valid());
        assert!(!Price(-5).is_valid());
    }

    #[test]
    fn test_qty_arithmetic() {
        let mut q = Qty(10);
        q += Qty(5);
        q -= Qty(3);
        assert_eq!(q, 12);
        assert_eq!(Qty(-7).abs(), 7);
        assert_eq!(Qty(10).min(Qty(3)), 3);
    }

    #[test]
    fn test_mid_price_requires_both_sides() {
        assert_eq!(mid_price(Price(10000), Price(10002)), 10001);
        assert_eq!(mid_price(Price::ZERO, Price(10002)), 0);
        assert_eq!(mid_price(Price(10000), Price::ZERO), 0);
    }

    #[test]
    fn test_spread_requires_both_sides() {
        assert_eq!(spread(Price(10000), Price(10002)), 2);
        assert_eq!(spread(Price::ZERO, Price(10002)), 0);
        assert_eq!(spread(Price(10000), Price::ZERO), 0);
    }
}

use bigdecimal::{BigDecimal, ParseBigDecimalError, ToPrimitive};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

const SCALE: i64 = 100;
const QTY_SCALE: i64 = 1_000;

#[derive(Debug, Clone, Copy, Default)]
/// A monetary value stored as a whole number of cents.
///
/// Wrapping an `i64` keeps ledger sums exact: balances are folded over many
/// small entries and must never pick up float drift. Two-decimal rendering is
/// presentation-only; the stored cent count is the authoritative value.
///
/// # Examples
/// ```
/// use credit_ledger::common::money::Money;
///
/// let amount = Money::new(650); // $6.50
/// assert_eq!(amount.as_cents(), 650);
/// assert_eq!(amount.to_string_2dp(), "6.50");
/// ```
pub struct Money(i64);

impl Money {
    pub fn new(cents: i64) -> Self {
        Self(cents)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_cents(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn to_string_2dp(&self) -> String {
        let bd = BigDecimal::from(self.0) / BigDecimal::from(SCALE);
        format!("{:.2}", bd)
    }

    /// Whole-unit rendering, used for mobile-money figures which the shop
    /// quotes without cents.
    pub fn to_string_0dp(&self) -> String {
        let bd = BigDecimal::from(self.0) / BigDecimal::from(SCALE);
        format!("{:.0}", bd.round(0))
    }

    /// Line extension: this unit price times a (possibly fractional)
    /// quantity, rounded half away from zero to the nearest cent.
    pub fn extend(&self, qty: Quantity) -> Money {
        let num = i128::from(self.0) * i128::from(qty.raw());
        let scale = i128::from(QTY_SCALE);
        let half = scale / 2;
        let cents = if num >= 0 {
            (num + half) / scale
        } else {
            (num - half) / scale
        };
        Money(cents as i64)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        // Scale to cents
        let scaled = (bd * BigDecimal::from(SCALE)).round(0);
        let cents: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(cents))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_2dp())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.0.cmp(&other.0))
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// An item quantity in thousandths, so weight-unit lines ("1.25 kg") stay
/// exact alongside whole piece counts.
pub struct Quantity(i64);

impl Quantity {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn from_units(units: i64) -> Self {
        Self(units * QTY_SCALE)
    }

    pub fn raw(&self) -> i64 {
        self.0
    }
}

impl std::str::FromStr for Quantity {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty quantity".into()));
        }

        let bd: BigDecimal = t.parse()?;
        let scaled = (bd * BigDecimal::from(QTY_SCALE)).round(0);
        let raw: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("quantity overflow".into()))?;

        Ok(Quantity(raw))
    }
}

impl fmt::Display for Quantity {
    /// Renders without trailing zeros: "2" for two pieces, "1.25" for a
    /// fractional weight.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bd = (BigDecimal::from(self.0) / BigDecimal::from(QTY_SCALE)).normalized();
        write!(f, "{}", bd)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(Money::zero(), Money(0));
    }

    #[test]
    fn test_as_cents() {
        assert_eq!(Money(1234).as_cents(), 1234);
        assert_eq!(Money::zero().as_cents(), 0);
        assert_eq!(Money(-999).as_cents(), -999);
    }

    #[test]
    fn test_from_str_valid() {
        assert_eq!(Money::from_str("1").unwrap(), Money(100));
        assert_eq!(Money::from_str("1.5").unwrap(), Money(150));
        assert_eq!(Money::from_str("12.34").unwrap(), Money(1234));
        assert_eq!(Money::from_str("0.01").unwrap(), Money(1));
        assert_eq!(Money::from_str("  2.00 ").unwrap(), Money(200));
    }

    #[test]
    fn test_from_str_rounding() {
        assert_eq!(Money::from_str("1.999").unwrap(), Money(200));
        assert_eq!(Money::from_str("0.001").unwrap(), Money(0));
    }

    #[test]
    fn test_from_str_invalid() {
        assert!(Money::from_str("").is_err());
        assert!(Money::from_str("   ").is_err());
        assert!(Money::from_str("abc").is_err());
    }

    #[test]
    fn test_to_string_2dp() {
        assert_eq!(Money(100).to_string_2dp(), "1.00");
        assert_eq!(Money(1234).to_string_2dp(), "12.34");
        assert_eq!(Money(1).to_string_2dp(), "0.01");
        assert_eq!(Money(0).to_string_2dp(), "0.00");
        assert_eq!(Money(-800).to_string_2dp(), "-8.00");
    }

    #[test]
    fn test_to_string_0dp() {
        assert_eq!(Money(10000).to_string_0dp(), "100");
        assert_eq!(Money(0).to_string_0dp(), "0");
    }

    #[test]
    fn test_display() {
        assert_eq!(Money(100).to_string(), "1.00");
        assert_eq!(Money(50).to_string(), "0.50");
    }

    #[test]
    fn test_add_sub() {
        assert_eq!(Money(100) + Money(50), Money(150));
        assert_eq!(Money(150) - Money(50), Money(100));
        assert_eq!(Money(100) - Money(100), Money::zero());
    }

    #[test]
    fn test_assign_ops() {
        let mut m = Money(100);
        m += Money(50);
        assert_eq!(m, Money(150));
        m -= Money(150);
        assert_eq!(m, Money::zero());
    }

    #[test]
    fn test_ordering() {
        assert!(Money(100) < Money(150));
        assert!(Money(150) > Money(100));
        assert!(Money(100) <= Money(100));
    }

    #[test]
    fn test_is_positive() {
        assert!(Money(1).is_positive());
        assert!(!Money(0).is_positive());
        assert!(!Money(-1).is_positive());
    }

    #[test]
    fn test_quantity_from_str() {
        assert_eq!(Quantity::from_str("2").unwrap(), Quantity(2000));
        assert_eq!(Quantity::from_str("1.25").unwrap(), Quantity(1250));
        assert_eq!(Quantity::from_str("0.5").unwrap(), Quantity(500));
        assert!(Quantity::from_str("").is_err());
        assert!(Quantity::from_str("two").is_err());
    }

    #[test]
    fn test_quantity_display_trims_zeros() {
        assert_eq!(Quantity::from_units(2).to_string(), "2");
        assert_eq!(Quantity(1250).to_string(), "1.25");
        assert_eq!(Quantity(500).to_string(), "0.5");
    }

    #[test]
    fn test_extend() {
        // $3.00 x 2 = $6.00
        assert_eq!(Money(300).extend(Quantity::from_units(2)), Money(600));
        // $4.00 x 1.25 = $5.00
        assert_eq!(Money(400).extend(Quantity(1250)), Money(500));
        // $0.99 x 0.333 rounds to the nearest cent
        assert_eq!(Money(99).extend(Quantity(333)), Money(33));
    }
}

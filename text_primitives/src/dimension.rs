// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

coded_enum! {
    /// The unit a [`Dimension`] is expressed in.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[non_exhaustive]
    pub enum DimensionUnit {
        /// Physical pixels. This is the default unit.
        #[default]
        Px = 0,
        /// Density-independent (virtual) pixels.
        Vp = 1,
        /// Font pixels, scaled by the user's font size preference.
        Fp = 2,
        /// A fraction of the containing size, where `1.0` is 100%.
        Percent = 3,
        /// Logical pixels relative to the design width.
        Lpx = 4,
        /// Resolved by the layout engine.
        Auto = 5,
        /// The value is a `calc()` expression carried separately.
        Calc = 6,
    }
}

impl DimensionUnit {
    /// The suffix used when formatting a value in this unit.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Vp => "vp",
            Self::Fp => "fp",
            Self::Percent => "%",
            Self::Lpx => "lpx",
            Self::Auto => "auto",
            Self::Calc => "calc",
        }
    }
}

/// A length: a number together with its [`DimensionUnit`].
///
/// Equality is exact on the value and the unit, so `Dimension::px(1.0)` and
/// `Dimension::vp(1.0)` are different lengths.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Dimension {
    value: f64,
    unit: DimensionUnit,
}

impl Dimension {
    /// Creates a dimension with an explicit unit.
    pub const fn new(value: f64, unit: DimensionUnit) -> Self {
        Self { value, unit }
    }

    /// Creates a dimension in physical pixels.
    pub const fn px(value: f64) -> Self {
        Self::new(value, DimensionUnit::Px)
    }

    /// Creates a dimension in virtual pixels.
    pub const fn vp(value: f64) -> Self {
        Self::new(value, DimensionUnit::Vp)
    }

    /// Creates a dimension in font pixels.
    pub const fn fp(value: f64) -> Self {
        Self::new(value, DimensionUnit::Fp)
    }

    /// Creates a percentage; `0.5` is 50%.
    pub const fn percent(value: f64) -> Self {
        Self::new(value, DimensionUnit::Percent)
    }

    /// The numeric part.
    pub const fn value(self) -> f64 {
        self.value
    }

    /// The unit part.
    pub const fn unit(self) -> DimensionUnit {
        self.unit
    }

    /// Returns `true` when the value is finite and not negative.
    pub fn is_non_negative(self) -> bool {
        self.value.is_finite() && self.value >= 0.0
    }

    /// Parses a value with an optional unit suffix, such as `12`, `12px`, `1.5vp` or `50%`.
    ///
    /// A bare number is in [`DimensionUnit::Px`]. Percentages are stored as fractions.
    ///
    /// ```
    /// use text_primitives::Dimension;
    ///
    /// assert_eq!(Dimension::parse("16vp"), Some(Dimension::vp(16.0)));
    /// assert_eq!(Dimension::parse("23"), Some(Dimension::px(23.0)));
    /// assert_eq!(Dimension::parse("50%"), Some(Dimension::percent(0.5)));
    /// assert_eq!(Dimension::parse("vp"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(number) = s.strip_suffix('%') {
            return Some(Self::percent(number.trim().parse::<f64>().ok()? / 100.0));
        }
        // Longest suffixes first so `lpx` is not read as `px`.
        for unit in [
            DimensionUnit::Lpx,
            DimensionUnit::Px,
            DimensionUnit::Vp,
            DimensionUnit::Fp,
        ] {
            if let Some(number) = s.strip_suffix(unit.suffix()) {
                return Some(Self::new(number.trim().parse().ok()?, unit));
            }
        }
        Some(Self::px(s.parse().ok()?))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            DimensionUnit::Percent => write!(f, "{}%", self.value * 100.0),
            DimensionUnit::Auto | DimensionUnit::Calc => f.write_str(self.unit.suffix()),
            unit => write!(f, "{}{}", self.value, unit.suffix()),
        }
    }
}

/// A length that is either a plain [`Dimension`] or a `calc()` expression.
#[derive(Clone, Debug, PartialEq)]
pub enum CalcDimension {
    /// A plain length.
    Dimension(Dimension),
    /// A `calc()` expression, resolved by the layout engine.
    Calc(String),
}

impl CalcDimension {
    /// Returns the plain length, if this is not an expression.
    pub fn dimension(&self) -> Option<Dimension> {
        match self {
            Self::Dimension(dimension) => Some(*dimension),
            Self::Calc(_) => None,
        }
    }

    /// Returns the expression text, if this is an expression.
    pub fn expression(&self) -> Option<&str> {
        match self {
            Self::Dimension(_) => None,
            Self::Calc(expression) => Some(expression),
        }
    }
}

impl Default for CalcDimension {
    fn default() -> Self {
        Self::Dimension(Dimension::default())
    }
}

impl From<Dimension> for CalcDimension {
    fn from(dimension: Dimension) -> Self {
        Self::Dimension(dimension)
    }
}

/// A box-edge length (padding, margin): a [`CalcDimension`] used as a layout length.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CalcLength(CalcDimension);

impl CalcLength {
    /// Creates a length from a plain dimension or an expression.
    pub fn new(value: impl Into<CalcDimension>) -> Self {
        Self(value.into())
    }

    /// Creates a length from a `calc()` expression.
    pub fn calc(expression: impl Into<String>) -> Self {
        Self(CalcDimension::Calc(expression.into()))
    }

    /// The underlying value.
    pub fn as_calc_dimension(&self) -> &CalcDimension {
        &self.0
    }

    /// Returns the plain length, if this is not an expression.
    pub fn dimension(&self) -> Option<Dimension> {
        self.0.dimension()
    }

    /// Returns the expression text, if this is an expression.
    pub fn expression(&self) -> Option<&str> {
        self.0.expression()
    }
}

impl From<Dimension> for CalcLength {
    fn from(dimension: Dimension) -> Self {
        Self::new(dimension)
    }
}

use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign},
};

/// Number of fractional bits carried by [`Fixed`].
pub const FRACTION_BITS: u32 = 6;
/// Raw value of one whole pixel.
pub const SUB_PIXEL_SCALE: i32 = 1 << FRACTION_BITS;

/// 26.6 fixed-point scalar in pixels.
///
/// Glyph advances are accumulated in this unit so that summing many glyphs on
/// one line does not drift the way repeated `f32` additions do.
///
/// Arithmetic saturates at the `i32` range (about ±33.5M pixels).
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed(i32);

/// **Y-axis goes down**
pub type FixedPoint = euclid::default::Point2D<Fixed>;
/// Rectangle in fixed-point units, `min` inclusive and `max` exclusive.
pub type FixedRect = euclid::default::Box2D<Fixed>;

impl Fixed {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(SUB_PIXEL_SCALE);

    /// Whole pixels.
    pub const fn from_int(px: i32) -> Self {
        Self(px << FRACTION_BITS)
    }

    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Rounds `px` to the nearest sub-pixel step.
    pub fn from_f32(px: f32) -> Self {
        Self((px * SUB_PIXEL_SCALE as f32).round() as i32)
    }

    pub const fn raw(self) -> i32 {
        self.0
    }

    pub fn to_f32(self) -> f32 {
        self.0 as f32 / SUB_PIXEL_SCALE as f32
    }

    pub const fn floor(self) -> i32 {
        self.0 >> FRACTION_BITS
    }

    pub const fn ceil(self) -> i32 {
        (self.0 + SUB_PIXEL_SCALE - 1) >> FRACTION_BITS
    }

    /// Half-way values round up.
    pub const fn round(self) -> i32 {
        (self.0 + SUB_PIXEL_SCALE / 2) >> FRACTION_BITS
    }
}

impl fmt::Debug for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.0 >> FRACTION_BITS, self.0 & (SUB_PIXEL_SCALE - 1))
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f32())
    }
}

impl Add for Fixed {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Fixed {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Fixed {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Fixed {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Fixed {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

/// Scaling by a whole count, e.g. a number of lines.
impl Mul<i32> for Fixed {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self(self.0.saturating_mul(rhs))
    }
}

impl Sum for Fixed {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Fixed> for Fixed {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

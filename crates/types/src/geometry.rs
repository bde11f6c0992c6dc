//! Axis-indexed geometry: per-axis pairs, float vectors and boxes.
use crate::axis::Dimension;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};

/// A pair of values, one per physical axis.
///
/// Slot 0 is read as `x` or `w`, slot 1 as `y` or `h`. The names are views
/// over the same two slots, never separate fields.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(transparent)]
pub struct Dim<T> {
    values: [T; 2],
}

/// Per-axis counts, e.g. grid spans.
pub type DimSize = Dim<usize>;

impl<T> Dim<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { values: [x, y] }
    }

    pub fn values(&self) -> &[T; 2] {
        &self.values
    }

    pub fn into_values(self) -> [T; 2] {
        self.values
    }

    /// Applies `f` to both slots.
    pub fn map<U, F>(self, mut f: F) -> Dim<U>
    where
        F: FnMut(T) -> U,
    {
        let [x, y] = self.values;
        Dim::new(f(x), f(y))
    }
}

impl<T: Copy> Dim<T> {
    pub const fn splat(value: T) -> Self {
        Self {
            values: [value, value],
        }
    }

    #[inline]
    pub fn x(&self) -> T {
        self.values[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.values[1]
    }

    #[inline]
    pub fn w(&self) -> T {
        self.values[0]
    }

    #[inline]
    pub fn h(&self) -> T {
        self.values[1]
    }

    pub fn set_x(&mut self, value: T) {
        self.values[0] = value;
    }

    pub fn set_y(&mut self, value: T) {
        self.values[1] = value;
    }

    pub fn set_w(&mut self, value: T) {
        self.values[0] = value;
    }

    pub fn set_h(&mut self, value: T) {
        self.values[1] = value;
    }
}

impl<T> Index<usize> for Dim<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<T> IndexMut<usize> for Dim<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.values[index]
    }
}

impl<T> Index<Dimension> for Dim<T> {
    type Output = T;

    #[inline]
    fn index(&self, dim: Dimension) -> &T {
        &self.values[axis_slot(dim)]
    }
}

impl<T> IndexMut<Dimension> for Dim<T> {
    #[inline]
    fn index_mut(&mut self, dim: Dimension) -> &mut T {
        &mut self.values[axis_slot(dim)]
    }
}

impl<T> From<[T; 2]> for Dim<T> {
    fn from(values: [T; 2]) -> Self {
        Self { values }
    }
}

impl<T> From<(T, T)> for Dim<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

fn axis_slot(dim: Dimension) -> usize {
    match dim.slot() {
        Some(slot) => slot,
        None => panic!("Dimension::Null does not address an axis slot"),
    }
}

/// A float pair with component-wise arithmetic, used for positions and extents.
///
/// Equality is exact: values are discrete layout results, not measurements.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(transparent)]
pub struct DimFloat {
    values: [f32; 2],
}

impl DimFloat {
    pub const ZERO: DimFloat = DimFloat { values: [0.0, 0.0] };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { values: [x, y] }
    }

    pub const fn splat(value: f32) -> Self {
        Self::new(value, value)
    }

    /// True when both components equal zero.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.values[0] == 0.0 && self.values[1] == 0.0
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.values[0]
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.values[1]
    }

    #[inline]
    pub fn w(&self) -> f32 {
        self.values[0]
    }

    #[inline]
    pub fn h(&self) -> f32 {
        self.values[1]
    }

    pub fn set_x(&mut self, value: f32) {
        self.values[0] = value;
    }

    pub fn set_y(&mut self, value: f32) {
        self.values[1] = value;
    }

    pub fn set_w(&mut self, value: f32) {
        self.values[0] = value;
    }

    pub fn set_h(&mut self, value: f32) {
        self.values[1] = value;
    }

    pub fn values(&self) -> &[f32; 2] {
        &self.values
    }
}

impl From<f32> for DimFloat {
    fn from(value: f32) -> Self {
        Self::splat(value)
    }
}

impl From<Dim<f32>> for DimFloat {
    fn from(dim: Dim<f32>) -> Self {
        Self {
            values: dim.into_values(),
        }
    }
}

impl From<DimFloat> for Dim<f32> {
    fn from(dim: DimFloat) -> Self {
        Dim::from(dim.values)
    }
}

impl Index<usize> for DimFloat {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.values[index]
    }
}

impl IndexMut<usize> for DimFloat {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.values[index]
    }
}

impl Index<Dimension> for DimFloat {
    type Output = f32;

    #[inline]
    fn index(&self, dim: Dimension) -> &f32 {
        &self.values[axis_slot(dim)]
    }
}

impl IndexMut<Dimension> for DimFloat {
    #[inline]
    fn index_mut(&mut self, dim: Dimension) -> &mut f32 {
        &mut self.values[axis_slot(dim)]
    }
}

impl Add for DimFloat {
    type Output = DimFloat;

    #[inline]
    fn add(self, rhs: DimFloat) -> DimFloat {
        DimFloat::new(self.x() + rhs.x(), self.y() + rhs.y())
    }
}

impl Sub for DimFloat {
    type Output = DimFloat;

    #[inline]
    fn sub(self, rhs: DimFloat) -> DimFloat {
        DimFloat::new(self.x() - rhs.x(), self.y() - rhs.y())
    }
}

impl Mul for DimFloat {
    type Output = DimFloat;

    #[inline]
    fn mul(self, rhs: DimFloat) -> DimFloat {
        DimFloat::new(self.x() * rhs.x(), self.y() * rhs.y())
    }
}

// Zero divisors yield inf/NaN; callers guard them.
impl Div for DimFloat {
    type Output = DimFloat;

    #[inline]
    fn div(self, rhs: DimFloat) -> DimFloat {
        DimFloat::new(self.x() / rhs.x(), self.y() / rhs.y())
    }
}

/// Whether a [`BoxFloat`] has been written since construction or `clear()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoxState {
    #[default]
    Unset,
    Set,
}

impl BoxState {
    fn from_content(values: &[f32; 4]) -> Self {
        if values.iter().all(|v| *v == 0.0) {
            BoxState::Unset
        } else {
            BoxState::Set
        }
    }
}

/// An axis-aligned box stored as `(x, y, w, h)`.
///
/// The same four slots are also exposed as `(x0, y0, x1, y1)`. Slots 2 and 3
/// hold extents, not a second corner.
///
/// A box is null until something writes it. Bulk writes (`new`, `assign`)
/// derive nullity from content, so an all-zero assignment leaves it null.
/// Indexed writes always mark it set, even when the written value is zero.
/// `clear()` zeroes it and makes it null again.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxFloat {
    values: [f32; 4],
    state: BoxState,
}

impl BoxFloat {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        let values = [x, y, w, h];
        Self {
            values,
            state: BoxState::from_content(&values),
        }
    }

    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn from_i32(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self::new(x as f32, y as f32, w as f32, h as f32)
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.state == BoxState::Unset
    }

    /// Content-only test, independent of the set/unset state.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| *v == 0.0)
    }

    pub fn state(&self) -> BoxState {
        self.state
    }

    /// Overwrites all four components and re-derives nullity from them.
    pub fn assign(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.values = [x, y, w, h];
        self.state = BoxState::from_content(&self.values);
    }

    pub fn assign_uniform(&mut self, value: f32) {
        self.assign(value, value, value, value);
    }

    pub fn clear(&mut self) {
        self.values = [0.0; 4];
        self.state = BoxState::Unset;
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.values[0]
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.values[1]
    }

    #[inline]
    pub fn w(&self) -> f32 {
        self.values[2]
    }

    #[inline]
    pub fn h(&self) -> f32 {
        self.values[3]
    }

    #[inline]
    pub fn x0(&self) -> f32 {
        self.values[0]
    }

    #[inline]
    pub fn y0(&self) -> f32 {
        self.values[1]
    }

    #[inline]
    pub fn x1(&self) -> f32 {
        self.values[2]
    }

    #[inline]
    pub fn y1(&self) -> f32 {
        self.values[3]
    }

    pub fn values(&self) -> &[f32; 4] {
        &self.values
    }

    /// Mutable access to the raw components. Marks the box as set.
    pub fn as_mut_slice(&mut self) -> &mut [f32; 4] {
        self.state = BoxState::Set;
        &mut self.values
    }

    /// Touching edges count as intersecting.
    pub fn intersects(&self, other: &BoxFloat) -> bool {
        !(other.x() > self.x() + self.w()
            || other.y() > self.y() + self.h()
            || other.x() + other.w() < self.x()
            || other.y() + other.h() < self.y())
    }

    pub fn offset(&self) -> DimFloat {
        DimFloat::new(self.x0(), self.y0())
    }

    /// Origin plus the extent slots, i.e. the far corner.
    pub fn size(&self) -> DimFloat {
        DimFloat::new(self.x0(), self.y0()) + DimFloat::new(self.x1(), self.y1())
    }

    /// The extent slots `(w, h)` as stored.
    pub fn extent(&self) -> DimFloat {
        DimFloat::new(self.w(), self.h())
    }

    /// Parses `"x y w h"`, `"w h"` (at the origin) or a single uniform value.
    pub fn parse_shorthand(input: &str) -> Result<Self, String> {
        let values = input
            .split_whitespace()
            .map(|part| {
                part.parse::<f32>()
                    .map_err(|e| format!("Invalid number '{}': {}", part, e))
            })
            .collect::<Result<Vec<f32>, String>>()?;

        match values.as_slice() {
            [v] => Ok(Self::uniform(*v)),
            [w, h] => Ok(Self::new(0.0, 0.0, *w, *h)),
            [x, y, w, h] => Ok(Self::new(*x, *y, *w, *h)),
            _ => Err(format!(
                "Invalid box shorthand: expected 1, 2, or 4 values, got {}",
                values.len()
            )),
        }
    }
}

impl From<[f32; 4]> for BoxFloat {
    fn from([x, y, w, h]: [f32; 4]) -> Self {
        Self::new(x, y, w, h)
    }
}

impl Index<usize> for BoxFloat {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.values[index]
    }
}

impl IndexMut<usize> for BoxFloat {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        self.state = BoxState::Set;
        &mut self.values[index]
    }
}

impl Serialize for BoxFloat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.values.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BoxFloat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum BoxFloatDef {
            Str(String),
            Array([f32; 4]),
        }

        match BoxFloatDef::deserialize(deserializer)? {
            BoxFloatDef::Str(s) => Self::parse_shorthand(&s).map_err(de::Error::custom),
            BoxFloatDef::Array(values) => Ok(Self::from(values)),
        }
    }
}

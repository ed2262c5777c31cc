//! Hex coordinate primitives: [`Axial`], [`Cube`] and [`FracCube`].
//!
//! Axial coordinates are the storage form; cube coordinates carry the
//! implicit third axis so that distance, neighbour and rounding math stay
//! symmetric. The mapping is `cube(x, y) = (x, -x - y, y)`, i.e. the axial
//! `y` field is the cube `z` axis.

use std::fmt;
use std::ops::{Add, Mul, Sub};

// ---------------------------------------------------------------------------
// Axial
// ---------------------------------------------------------------------------

/// A hex position in axial form. Equality and hashing are by `(x, y)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Axial {
    pub x: i32,
    pub y: i32,
}

/// The six neighbour offsets, in the fixed order used by every neighbour
/// enumeration in this crate.
pub const DIRECTIONS: [Axial; 6] = [
    Axial::new(1, 0),
    Axial::new(1, -1),
    Axial::new(0, -1),
    Axial::new(-1, 0),
    Axial::new(-1, 1),
    Axial::new(0, 1),
];

impl Axial {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new axial coordinate.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Identity key of this coordinate.
    #[inline]
    pub const fn key(self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// The cube form of this coordinate.
    #[inline]
    pub const fn to_cube(self) -> Cube {
        Cube::new(self.x, -self.x - self.y, self.y)
    }

    /// `self + rhs`, or `None` if either component overflows.
    #[inline]
    pub const fn checked_add(self, rhs: Axial) -> Option<Axial> {
        match (self.x.checked_add(rhs.x), self.y.checked_add(rhs.y)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// The six adjacent coordinates, in [`DIRECTIONS`] order.
    #[inline]
    pub fn neighbors(self) -> [Axial; 6] {
        DIRECTIONS.map(|d| self + d)
    }

    /// Hex distance to `other`.
    #[inline]
    pub fn distance(self, other: Axial) -> i32 {
        distance(self, other)
    }
}

impl fmt::Display for Axial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Axial {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Axial {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Axial {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl From<Cube> for Axial {
    #[inline]
    fn from(c: Cube) -> Self {
        to_axial(c)
    }
}

// ---------------------------------------------------------------------------
// Cube
// ---------------------------------------------------------------------------

/// A hex position in cube form. `x + y + z == 0` for every value built
/// through this module.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cube {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Cube {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Whether the sum-to-zero constraint holds.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.x + self.y + self.z == 0
    }

    /// Hex distance between two cube coordinates, saturating at `i32::MAX`.
    #[inline]
    pub fn distance(self, other: Cube) -> i32 {
        let d = |a: i32, b: i32| (a as i64 - b as i64).abs();
        saturate((d(self.x, other.x) + d(self.y, other.y) + d(self.z, other.z)) / 2)
    }
}

impl Add for Cube {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Cube {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<i32> for Cube {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl From<Axial> for Cube {
    #[inline]
    fn from(a: Axial) -> Self {
        to_cube(a)
    }
}

// ---------------------------------------------------------------------------
// FracCube
// ---------------------------------------------------------------------------

/// A real-valued cube coordinate, produced by interpolation and turned
/// back into a lattice point with [`round`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FracCube {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl FracCube {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Linear interpolation between two points, `t` in `[0, 1]`.
    #[inline]
    pub fn lerp(self, other: FracCube, t: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
        )
    }

    /// Nearest lattice point. See [`round`].
    #[inline]
    pub fn round(self) -> Cube {
        round(self)
    }
}

impl From<Cube> for FracCube {
    #[inline]
    fn from(c: Cube) -> Self {
        Self::new(c.x as f64, c.y as f64, c.z as f64)
    }
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Axial to cube: `(x, y) -> (x, -x - y, y)`.
#[inline]
pub const fn to_cube(a: Axial) -> Cube {
    a.to_cube()
}

/// Cube to axial: `(x, y, z) -> (x, z)`.
#[inline]
pub const fn to_axial(c: Cube) -> Axial {
    Axial::new(c.x, c.z)
}

/// Round a fractional cube coordinate to the nearest valid lattice point.
///
/// Each component is rounded independently, then the component with the
/// largest rounding residual is recomputed from the other two so that the
/// result sums to zero. `x` is only recomputed when its residual strictly
/// dominates both others; between `y` and `z`, a tie recomputes `z`.
pub fn round(c: FracCube) -> Cube {
    let mut rx = c.x.round();
    let mut ry = c.y.round();
    let mut rz = c.z.round();

    let dx = (rx - c.x).abs();
    let dy = (ry - c.y).abs();
    let dz = (rz - c.z).abs();

    if dx > dy && dx > dz {
        rx = -ry - rz;
    } else if dy > dz {
        ry = -rx - rz;
    } else {
        rz = -rx - ry;
    }

    Cube::new(rx as i32, ry as i32, rz as i32)
}

/// Hex distance: `(|ax - bx| + |ax + ay - bx - by| + |ay - by|) / 2`.
///
/// Computed in `i64`; a distance beyond `i32::MAX` saturates.
#[inline]
pub fn distance(a: Axial, b: Axial) -> i32 {
    let (ax, ay, bx, by) = (a.x as i64, a.y as i64, b.x as i64, b.y as i64);
    saturate(((ax - bx).abs() + (ax + ay - bx - by).abs() + (ay - by).abs()) / 2)
}

#[inline]
fn saturate(d: i64) -> i32 {
    i32::try_from(d).unwrap_or(i32::MAX)
}

/// Every hex on the straight line from `a` to `b`, both ends included.
pub fn line(a: Axial, b: Axial) -> Vec<Axial> {
    let n = distance(a, b);
    if n == 0 {
        return vec![a];
    }
    // Nudge off exact edges so ties round consistently along the line.
    let eps = FracCube::new(1e-6, 2e-6, -3e-6);
    let fa = FracCube::from(a.to_cube());
    let fb = FracCube::from(b.to_cube());
    let fa = FracCube::new(fa.x + eps.x, fa.y + eps.y, fa.z + eps.z);
    let fb = FracCube::new(fb.x + eps.x, fb.y + eps.y, fb.z + eps.z);
    (0..=n)
        .map(|i| to_axial(fa.lerp(fb, i as f64 / n as f64).round()))
        .collect()
}

/// The hexes at exactly `radius` steps from `center`, starting at the
/// corner in direction `DIRECTIONS[4]`. A zero radius yields just `center`.
pub fn ring(center: Axial, radius: i32) -> Vec<Axial> {
    if radius <= 0 {
        return vec![center];
    }
    let mut out = Vec::with_capacity(6 * radius as usize);
    let mut cur = center + DIRECTIONS[4] * radius;
    for dir in DIRECTIONS {
        for _ in 0..radius {
            out.push(cur);
            cur = cur + dir;
        }
    }
    out
}

/// Every hex within `radius` steps of `center`, ring by ring outwards.
pub fn disc(center: Axial, radius: i32) -> Vec<Axial> {
    (0..=radius.max(0)).flat_map(|r| ring(center, r)).collect()
}

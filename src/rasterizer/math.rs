//! Vector math for 2D rasterization
//!
//! Small `Copy` value types. Every operator builds a new vector; nothing
//! mutates in place except the explicit `set`/`IndexMut` accessors on Vec3.

use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};
use serde::{Serialize, Deserialize};

/// Positional access on a Vec3 outside 0..=2
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    pub index: usize,
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Index must be 0, 1, or 2 (got {})", self.index)
    }
}

impl std::error::Error for IndexOutOfRange {}

// ============================================================================
// Vec2
// ============================================================================

/// 2D Vector (screen-space points and edges)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const ONE: Vec2 = Vec2 { x: 1.0, y: 1.0 };
    pub const HALF: Vec2 = Vec2 { x: 0.5, y: 0.5 };
    pub const RIGHT: Vec2 = Vec2 { x: 1.0, y: 0.0 };
    pub const UP: Vec2 = Vec2 { x: 0.0, y: 1.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Rotate 90 degrees: (x, y) -> (y, -x)
    pub fn perpendicular(self) -> Vec2 {
        Vec2 {
            x: self.y,
            y: -self.x,
        }
    }

    pub fn scale(self, s: f32) -> Vec2 {
        Vec2 {
            x: self.x * s,
            y: self.y * s,
        }
    }

    /// Linear interpolation, `t` clamped to [0, 1]
    pub fn lerp(a: Vec2, b: Vec2, t: f32) -> Vec2 {
        let t = t.clamp(0.0, 1.0);
        a + (b - a) * t
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Sub<Vec2> for f32 {
    type Output = Vec2;
    fn sub(self, v: Vec2) -> Vec2 {
        Vec2 {
            x: self - v.x,
            y: self - v.y,
        }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, s: f32) -> Vec2 {
        self.scale(s)
    }
}

impl Mul<Vec2> for f32 {
    type Output = Vec2;
    fn mul(self, v: Vec2) -> Vec2 {
        v.scale(self)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    fn div(self, s: f32) -> Vec2 {
        self.scale(1.0 / s)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl From<Vec3> for Vec2 {
    fn from(v: Vec3) -> Self {
        Vec2 { x: v.x, y: v.y }
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

// ============================================================================
// Vec3
// ============================================================================

/// 3D Vector, also used as an RGB color with components in [0, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };
    pub const ONE: Vec3 = Vec3 { x: 1.0, y: 1.0, z: 1.0 };
    pub const RIGHT: Vec3 = Vec3 { x: 1.0, y: 0.0, z: 0.0 };
    pub const UP: Vec3 = Vec3 { x: 0.0, y: 1.0, z: 0.0 };
    pub const FORWARD: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 1.0 };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Color constructor (r, g, b map to x, y, z)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { x: r, y: g, z: b }
    }

    pub fn r(self) -> f32 {
        self.x
    }

    pub fn g(self) -> f32 {
        self.y
    }

    pub fn b(self) -> f32 {
        self.z
    }

    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn sqr_len(self) -> f32 {
        self.dot(self)
    }

    pub fn len(self) -> f32 {
        self.sqr_len().sqrt()
    }

    /// Unit vector in the same direction; the zero vector stays zero
    pub fn normalize(self) -> Vec3 {
        let l = self.len();
        if l == 0.0 {
            return Vec3::ZERO;
        }
        self / l
    }

    pub fn scale(self, s: f32) -> Vec3 {
        Vec3 {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }

    /// Linear interpolation, `t` clamped to [0, 1]
    pub fn lerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
        let t = t.clamp(0.0, 1.0);
        a + (b - a) * t
    }

    pub fn get(self, index: usize) -> Result<f32, IndexOutOfRange> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(IndexOutOfRange { index }),
        }
    }

    pub fn set(&mut self, index: usize, value: f32) -> Result<(), IndexOutOfRange> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => return Err(IndexOutOfRange { index }),
        }
        Ok(())
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Sub<Vec3> for f32 {
    type Output = Vec3;
    fn sub(self, v: Vec3) -> Vec3 {
        Vec3 {
            x: self - v.x,
            y: self - v.y,
            z: self - v.z,
        }
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, s: f32) -> Vec3 {
        self.scale(s)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, v: Vec3) -> Vec3 {
        v.scale(self)
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;
    fn div(self, s: f32) -> Vec3 {
        self.scale(1.0 / s)
    }
}

/// Componentwise reciprocal-style division: s / (x, y, z)
impl Div<Vec3> for f32 {
    type Output = Vec3;
    fn div(self, v: Vec3) -> Vec3 {
        Vec3 {
            x: self / v.x,
            y: self / v.y,
            z: self / v.z,
        }
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("{}", IndexOutOfRange { index }),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("{}", IndexOutOfRange { index }),
        }
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}, {}>", self.x, self.y, self.z)
    }
}

// ============================================================================
// Side test
// ============================================================================

pub fn dot(a: Vec2, b: Vec2) -> f32 {
    a.dot(b)
}

pub fn perpendicular(v: Vec2) -> Vec2 {
    v.perpendicular()
}

/// Half-plane test for `p` against the directed edge a -> b.
/// Points exactly on the line count as being on the right side.
pub fn point_on_right_side_of_line(a: Vec2, b: Vec2, p: Vec2) -> bool {
    let ap = p - a;
    let ab_perp = perpendicular(b - a);
    dot(ap, ab_perp) >= 0.0
}

/// Inclusive point-in-triangle test, independent of winding order.
/// Interior points land on the same side of all three edges: the right side
/// for one winding, the left side for the other.
pub fn point_in_triangle(a: Vec2, b: Vec2, c: Vec2, p: Vec2) -> bool {
    let side_ab = point_on_right_side_of_line(a, b, p);
    let side_bc = point_on_right_side_of_line(b, c, p);
    let side_ca = point_on_right_side_of_line(c, a, p);
    side_ab == side_bc && side_bc == side_ca
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert!((a.dot(b) - 32.0).abs() < 0.001);
    }

    #[test]
    fn test_vec3_cross() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(a.cross(b), Vec3::FORWARD);
        assert_eq!(b.cross(a), -Vec3::FORWARD);
    }

    #[test]
    fn test_normalize() {
        let n = Vec3::new(3.0, 0.0, 4.0).normalize();
        assert!((n.len() - 1.0).abs() < 1e-6);
        assert!((n.x - 0.6).abs() < 1e-6);
        assert!((n.z - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_zero_is_zero() {
        let n = Vec3::ZERO.normalize();
        assert_eq!(n, Vec3::ZERO);
        assert!(n.x.is_finite() && n.y.is_finite() && n.z.is_finite());
    }

    #[test]
    fn test_lerp_clamps() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(5.0, -2.0);
        assert_eq!(Vec2::lerp(a, b, -3.0), a);
        assert_eq!(Vec2::lerp(a, b, 0.0), a);
        assert_eq!(Vec2::lerp(a, b, 7.5), b);
        assert_eq!(Vec2::lerp(a, b, 1.0), b);
        assert_eq!(Vec2::lerp(a, b, 0.5), Vec2::new(3.0, 0.0));

        let c = Vec3::ZERO;
        let d = Vec3::new(2.0, 4.0, 8.0);
        assert_eq!(Vec3::lerp(c, d, -0.1), c);
        assert_eq!(Vec3::lerp(c, d, 1.1), d);
        assert_eq!(Vec3::lerp(c, d, 0.25), Vec3::new(0.5, 1.0, 2.0));
    }

    #[test]
    fn test_perpendicular() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(perpendicular(v), Vec2::new(4.0, -3.0));
        assert_eq!(dot(v, v.perpendicular()), 0.0);
    }

    #[test]
    fn test_scalar_operators() {
        let v = Vec2::new(2.0, -4.0);
        assert_eq!(v * 2.0, 2.0 * v);
        assert_eq!(v / 2.0, Vec2::new(1.0, -2.0));
        assert_eq!(1.0 - v, Vec2::new(-1.0, 5.0));

        let w = Vec3::new(1.0, 2.0, 4.0);
        assert_eq!(1.0 / w, Vec3::new(1.0, 0.5, 0.25));
        assert_eq!(1.0 - w, Vec3::new(0.0, -1.0, -3.0));
        assert_eq!(Vec2::from(w), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_unit_constants() {
        assert_eq!(Vec2::ONE * 0.5, Vec2::HALF);
        assert_eq!(Vec2::lerp(Vec2::ZERO, Vec2::ONE, 0.5), Vec2::HALF);
        assert_eq!(Vec2::RIGHT.perpendicular(), -Vec2::UP);
        assert_eq!(Vec2::UP.perpendicular(), Vec2::RIGHT);
        assert_eq!(Vec3::RIGHT.cross(Vec3::UP), Vec3::FORWARD);
    }

    #[test]
    fn test_vec3_index() {
        let mut v = Vec3::rgb(0.1, 0.2, 0.3);
        assert_eq!(v[0], v.r());
        assert_eq!(v[1], v.g());
        assert_eq!(v[2], v.b());
        v[2] = 1.0;
        assert_eq!(v.b(), 1.0);
        assert_eq!(v.get(3), Err(IndexOutOfRange { index: 3 }));
        assert_eq!(v.set(7, 0.0), Err(IndexOutOfRange { index: 7 }));
        assert!(v.set(0, 0.5).is_ok());
        assert_eq!(v.get(0), Ok(0.5));
    }

    #[test]
    #[should_panic(expected = "Index must be 0, 1, or 2")]
    fn test_vec3_index_out_of_range_panics() {
        let v = Vec3::ONE;
        let _ = v[3];
    }

    #[test]
    fn test_display() {
        assert_eq!(Vec2::new(1.0, 2.5).to_string(), "<1, 2.5>");
        assert_eq!(Vec3::new(1.0, 0.0, -2.0).to_string(), "<1, 0, -2>");
    }

    #[test]
    fn test_point_in_triangle_winding_agnostic() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        let c = Vec2::new(5.0, 10.0);

        let inside = [Vec2::new(5.0, 3.0), Vec2::new(2.0, 1.0), Vec2::new(5.0, 9.0)];
        for p in inside {
            assert!(point_in_triangle(a, b, c, p), "{} should be inside", p);
            assert!(point_in_triangle(a, c, b, p), "{} should be inside (reversed)", p);
        }

        let outside = [Vec2::new(-1.0, 0.0), Vec2::new(5.0, 11.0), Vec2::new(9.0, 5.0), Vec2::new(5.0, -0.5)];
        for p in outside {
            assert!(!point_in_triangle(a, b, c, p), "{} should be outside", p);
            assert!(!point_in_triangle(a, c, b, p), "{} should be outside (reversed)", p);
        }
    }

    #[test]
    fn test_point_on_edge_is_inside() {
        // Interior is on the right of every edge for this winding, so the
        // zero dot product of an edge point agrees with the other two edges.
        let a = Vec2::new(0.0, 10.0);
        let b = Vec2::new(10.0, 0.0);
        let c = Vec2::new(0.0, 0.0);
        assert!(point_on_right_side_of_line(a, b, Vec2::new(1.0, 1.0)));
        assert!(point_in_triangle(a, b, c, Vec2::new(5.0, 0.0)));
        assert!(point_in_triangle(a, b, c, Vec2::new(0.0, 5.0)));
        assert!(point_in_triangle(a, b, c, Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn test_point_on_edge_opposite_winding() {
        // With the interior on the left, an edge point's `>= 0` side disagrees
        // with the other two edges and the point tests outside.
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        let c = Vec2::new(0.0, 10.0);
        assert!(!point_on_right_side_of_line(a, b, Vec2::new(1.0, 1.0)));
        assert!(!point_in_triangle(a, b, c, Vec2::new(5.0, 0.0)));
        assert!(point_in_triangle(a, b, c, Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn test_degenerate_triangle_is_deterministic() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(5.0, 5.0);
        let c = Vec2::new(10.0, 10.0);
        let p = Vec2::new(3.0, 1.0);
        let first = point_in_triangle(a, b, c, p);
        assert_eq!(first, point_in_triangle(a, b, c, p));
        // every edge has zero area, so points on the shared line test inside
        assert!(point_in_triangle(a, b, c, Vec2::new(7.0, 7.0)));
    }
}

//! Minimal 3-component vector arithmetic used by the integrator.

/// A 3D vector of `f64` components. Plain value type, no invariants;
/// non-finite components propagate like any other float.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3 { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3 { x, y, z }
    }

    /// Component-wise sum.
    pub fn add(self, other: Vector3) -> Vector3 {
        Vector3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }

    /// Component-wise difference `self - other`.
    pub fn sub(self, other: Vector3) -> Vector3 {
        Vector3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }

    /// Multiply every component by the scalar `k`.
    pub fn scale(self, k: f64) -> Vector3 {
        Vector3 {
            x: self.x * k,
            y: self.y * k,
            z: self.z * k,
        }
    }

    /// Euclidean norm.
    pub fn magnitude(self) -> f64 {
        f64::sqrt(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::Vector3;
    use approx::assert_relative_eq;

    #[test]
    fn add_then_sub_is_identity() {
        let a = Vector3::new(1.5, -2.25, 3.125);
        let b = Vector3::new(-0.5, 10.0, 1e-3);
        let r = a.add(b).sub(b);
        assert_relative_eq!(r.x, a.x, epsilon = 1e-12);
        assert_relative_eq!(r.y, a.y, epsilon = 1e-12);
        assert_relative_eq!(r.z, a.z, epsilon = 1e-12);
    }

    #[test]
    fn scale_by_one_is_identity() {
        let a = Vector3::new(4.0, -7.5, 0.25);
        assert_eq!(a.scale(1.0), a);
    }

    #[test]
    fn magnitude_of_zero_is_zero() {
        assert_eq!(Vector3::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn magnitude_matches_pythagoras() {
        let a = Vector3::new(3.0, 4.0, 0.0);
        assert_eq!(a.magnitude(), 5.0);
    }
}

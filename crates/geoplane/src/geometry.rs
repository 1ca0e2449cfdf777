//! Plane normals from survey points.

use nalgebra::{Point3, Vector3};

/// Survey point in a consistent local or projected frame (x east, y north, z up).
pub type Point3D = Point3<f64>;

/// Normal vector of the plane through three points.
///
/// Pre: any three points; they need not be distinct.
/// Post: returns `(p2 - p1) × (p3 - p1)`. Collinear or coincident input yields
/// the zero vector, which the orientation solver maps to a flat plane.
#[inline]
pub fn plane_normal(p1: &Point3D, p2: &Point3D, p3: &Point3D) -> Vector3<f64> {
    let v1 = p2 - p1;
    let v2 = p3 - p1;
    v1.cross(&v2)
}

/// Normal of the same plane, computed on the points scaled into `[-1, 1]`.
///
/// Pre: finite points.
/// Post: same direction as [`plane_normal`] but always finite, where the plain
/// cross product overflows for coordinates beyond ~1e154. All-zero input
/// gives the zero vector.
pub fn plane_normal_rescaled(p1: &Point3D, p2: &Point3D, p3: &Point3D) -> Vector3<f64> {
    let scale = [p1, p2, p3]
        .iter()
        .map(|p| p.coords.amax())
        .fold(0.0, f64::max);
    if scale == 0.0 || !scale.is_finite() {
        return Vector3::zeros();
    }
    plane_normal(&(*p1 / scale), &(*p2 / scale), &(*p3 / scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::point;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn normal_of_axis_triangle() {
        let n = plane_normal(
            &point![0.0, 0.0, 100.0],
            &point![10.0, 0.0, 120.0],
            &point![0.0, 10.0, 110.0],
        );
        assert_eq!(n, Vector3::new(-200.0, -100.0, 100.0));
    }

    #[test]
    fn collinear_points_give_zero_normal() {
        let n = plane_normal(
            &point![0.0, 0.0, 0.0],
            &point![1.0, 1.0, 1.0],
            &point![2.0, 2.0, 2.0],
        );
        assert_eq!(n, Vector3::zeros());
    }

    #[test]
    fn rescaled_normal_is_finite_for_huge_coordinates() {
        let (a, b, c) = (
            point![0.0, 0.0, 0.0],
            point![1e200, 1e200, 1e200],
            point![1e200, 1e200, -1e200],
        );
        assert!(!plane_normal(&a, &b, &c).iter().all(|v| v.is_finite()));
        let n = plane_normal_rescaled(&a, &b, &c);
        assert_eq!(n, Vector3::new(-2.0, 2.0, 0.0));
    }

    #[test]
    fn rescaled_normal_keeps_direction() {
        let (a, b, c) = (
            point![0.0, 0.0, 100.0],
            point![10.0, 0.0, 120.0],
            point![0.0, 10.0, 110.0],
        );
        let raw = plane_normal(&a, &b, &c).normalize();
        let scaled = plane_normal_rescaled(&a, &b, &c).normalize();
        assert!((raw - scaled).norm() < 1e-12);
        assert_eq!(
            plane_normal_rescaled(&Point3D::origin(), &Point3D::origin(), &Point3D::origin()),
            Vector3::zeros()
        );
    }

    #[test]
    fn normal_is_orthogonal_to_edges_seeded() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let mut draw = || {
                Point3D::new(
                    rng.gen_range(-1e3..1e3),
                    rng.gen_range(-1e3..1e3),
                    rng.gen_range(-1e2..1e2),
                )
            };
            let (a, b, c) = (draw(), draw(), draw());
            let n = plane_normal(&a, &b, &c);
            let scale = n.norm() * (b - a).norm().max((c - a).norm()) + 1.0;
            assert!(n.dot(&(b - a)).abs() / scale < 1e-9);
            assert!(n.dot(&(c - a)).abs() / scale < 1e-9);
        }
    }
}

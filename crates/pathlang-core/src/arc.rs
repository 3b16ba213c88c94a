//! Elliptical arc helpers for backends without a native arc primitive.

use crate::geom::{Point, point, vector};
use crate::geometry::{ArcSegment, Segment};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Center parameterization of an arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArcParameterization {
    CenterParameters {
        center: Point,
        /// Radii, scaled up when too small to span the endpoints.
        radius_x: f64,
        radius_y: f64,
        /// Angle of the start point on the unit circle, in radians.
        theta1: f64,
        /// Signed sweep from the start point, in radians.
        delta_theta: f64,
    },
    /// Treat the arc as a line to the end point.
    LineTo,
    /// Start equals end: nothing to draw.
    Omit,
}

impl ArcSegment {
    /// Endpoint-to-center conversion, as in section B.2.4 of the SVG 2 implementation notes.
    pub fn center_parameterization(&self) -> ArcParameterization {
        if self.from == self.to {
            return ArcParameterization::Omit;
        }
        let mut rx = self.radius_x.abs();
        let mut ry = self.radius_y.abs();
        if rx == 0.0 || ry == 0.0 {
            return ArcParameterization::LineTo;
        }

        let (sin_phi, cos_phi) = self.rotation.sin_cos();
        let half = (self.from - self.to) / 2.0;
        let x1 = cos_phi * half.x + sin_phi * half.y;
        let y1 = -sin_phi * half.x + cos_phi * half.y;

        let lambda = (x1 * x1) / (rx * rx) + (y1 * y1) / (ry * ry);
        if lambda > 1.0 {
            let s = lambda.sqrt();
            rx *= s;
            ry *= s;
        }

        // Work in radius-relative units so huge radii neither overflow nor underflow.
        let (px, py) = (x1 / rx, y1 / ry);
        let d = px.hypot(py);
        let (ux, uy) = if d == 0.0 { (0.0, 0.0) } else { (px / d, py / d) };
        let mut coef = (1.0 - d * d).max(0.0).sqrt();
        if self.large_arc == self.sweep_clockwise {
            coef = -coef;
        }
        let cx1 = coef * rx * uy;
        let cy1 = -coef * ry * ux;

        let mid = self.from.lerp(self.to, 0.5);
        let center = point(
            cos_phi * cx1 - sin_phi * cy1 + mid.x,
            sin_phi * cx1 + cos_phi * cy1 + mid.y,
        );

        let u = vector((x1 - cx1) / rx, (y1 - cy1) / ry);
        let v = vector((-x1 - cx1) / rx, (-y1 - cy1) / ry);
        let theta1 = u.y.atan2(u.x);
        let mut delta_theta = u.cross(v).atan2(u.dot(v));
        if self.sweep_clockwise && delta_theta < 0.0 {
            delta_theta += TAU;
        } else if !self.sweep_clockwise && delta_theta > 0.0 {
            delta_theta -= TAU;
        }

        ArcParameterization::CenterParameters {
            center,
            radius_x: rx,
            radius_y: ry,
            theta1,
            delta_theta,
        }
    }

    /// Approximates the arc with cubic beziers spanning at most a quarter turn each. Degenerate
    /// arcs become a single line (or nothing when start equals end).
    pub fn to_cubics(&self) -> Vec<Segment> {
        let (center, rx, ry, theta1, delta_theta) = match self.center_parameterization() {
            ArcParameterization::Omit => return Vec::new(),
            ArcParameterization::LineTo => return vec![Segment::Line { to: self.to }],
            ArcParameterization::CenterParameters {
                center,
                radius_x,
                radius_y,
                theta1,
                delta_theta,
            } => (center, radius_x, radius_y, theta1, delta_theta),
        };

        let (sin_phi, cos_phi) = self.rotation.sin_cos();
        let map = |x: f64, y: f64| {
            let (x, y) = (x * rx, y * ry);
            point(
                center.x + cos_phi * x - sin_phi * y,
                center.y + sin_phi * x + cos_phi * y,
            )
        };

        let pieces = (delta_theta.abs() / FRAC_PI_2 - 1e-9).ceil().max(1.0) as usize;
        let step = delta_theta / pieces as f64;
        let k = 4.0 / 3.0 * (step / 4.0).tan();

        let mut out = Vec::with_capacity(pieces);
        let mut a0 = theta1;
        for i in 0..pieces {
            let a1 = a0 + step;
            let (s0, c0) = a0.sin_cos();
            let (s1, c1) = a1.sin_cos();
            let to = if i + 1 == pieces {
                self.to
            } else {
                map(c1, s1)
            };
            out.push(Segment::Cubic {
                control1: map(c0 - k * s0, s0 + k * c0),
                control2: map(c1 + k * s1, s1 - k * c1),
                to,
            });
            a0 = a1;
        }
        out
    }
}

/// Normalizes an angle into `[0, 2π)`.
pub(crate) fn normalize_angle(angle: f64) -> f64 {
    let a = angle % TAU;
    if a < 0.0 { a + TAU } else { a }
}

/// Whether `angle` lies on the sweep from `theta1` by `delta_theta`.
pub(crate) fn angle_in_sweep(angle: f64, theta1: f64, delta_theta: f64) -> bool {
    let offset = if delta_theta >= 0.0 {
        normalize_angle(angle - theta1)
    } else {
        normalize_angle(theta1 - angle)
    };
    offset <= delta_theta.abs() || delta_theta.abs() >= 2.0 * PI
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arc(from: Point, to: Point, r: f64, large_arc: bool, sweep_clockwise: bool) -> ArcSegment {
        ArcSegment {
            from,
            to,
            radius_x: r,
            radius_y: r,
            rotation: 0.0,
            large_arc,
            sweep_clockwise,
        }
    }

    fn close(a: Point, b: Point) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn half_circle_center_is_the_midpoint() {
        let a = arc(point(0.0, 0.0), point(20.0, 0.0), 10.0, false, true);
        let ArcParameterization::CenterParameters {
            center,
            delta_theta,
            ..
        } = a.center_parameterization()
        else {
            panic!("expected center parameters");
        };
        assert!(close(center, point(10.0, 0.0)));
        assert!((delta_theta - PI).abs() < 1e-9);
    }

    #[test]
    fn small_radii_are_scaled_up() {
        let a = arc(point(0.0, 0.0), point(20.0, 0.0), 1.0, false, false);
        let ArcParameterization::CenterParameters { radius_x, .. } = a.center_parameterization()
        else {
            panic!("expected center parameters");
        };
        assert!((radius_x - 10.0).abs() < 1e-9);
    }

    #[test]
    fn huge_radii_keep_the_center_finite() {
        let a = arc(point(0.0, 0.0), point(1e-10, 0.0), 1e200, false, true);
        let ArcParameterization::CenterParameters {
            center,
            radius_x,
            delta_theta,
            ..
        } = a.center_parameterization()
        else {
            panic!("expected center parameters");
        };
        assert_eq!(radius_x, 1e200);
        assert!((center.x - 5e-11).abs() < 1e-20, "{center:?}");
        assert!((center.y / 1e200 - 1.0).abs() < 1e-9, "{center:?}");
        assert!(delta_theta > 0.0 && delta_theta < 1e-9, "{delta_theta}");
    }

    #[test]
    fn degenerate_arcs() {
        let same = arc(point(1.0, 1.0), point(1.0, 1.0), 5.0, false, false);
        assert_eq!(same.center_parameterization(), ArcParameterization::Omit);
        assert!(same.to_cubics().is_empty());

        let flat = arc(point(0.0, 0.0), point(5.0, 0.0), 0.0, false, false);
        assert_eq!(
            flat.to_cubics(),
            vec![Segment::Line {
                to: point(5.0, 0.0)
            }]
        );
    }

    #[test]
    fn quarter_turn_pieces_stay_on_the_circle() {
        let a = arc(point(10.0, 0.0), point(-10.0, 0.0), 10.0, true, true);
        let cubics = a.to_cubics();
        assert_eq!(cubics.len(), 2);
        assert!(close(cubics[0].end(), point(0.0, 10.0)));
        assert_eq!(cubics[1].end(), point(-10.0, 0.0));
    }

    #[test]
    fn sweep_membership() {
        assert!(angle_in_sweep(FRAC_PI_2, 0.0, PI));
        assert!(!angle_in_sweep(-FRAC_PI_2, 0.0, PI));
        assert!(angle_in_sweep(-FRAC_PI_2, 0.0, -PI));
    }
}

use crate::{Error, JointAdapter, JointSelector, Result};
use std::f64::consts::TAU;

// Rounding slack of the cosine-law ratio on the annulus boundary
const REACH_TOL: f64 = 1e-12;

/// Link lengths of a two-link SCARA arm.
///
/// The base joint sits on the origin. Link `arm_a` connects the base to the
/// elbow, and link `arm_b` connects the elbow to the end-effector.
///
/// Both joint solvers use the same branch: the elbow is on the
/// counter-clockwise side of the base-effector line. The angles are
///
/// + `theta1`: angle of the base-elbow link, in `[0, 2π)`
/// + `theta2`: angle between the two links, in `[0, π]`, zero when the arm is
///   fully extended
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "Arms")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManipulatorGeometry {
    arm_a: f64,
    arm_b: f64,
}

// Unchecked lengths from a config file
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct Arms {
    arm_a: f64,
    arm_b: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<Arms> for ManipulatorGeometry {
    type Error = Error;

    fn try_from(Arms { arm_a, arm_b }: Arms) -> Result<Self> {
        Self::new(arm_a, arm_b)
    }
}

impl ManipulatorGeometry {
    /// Create a new geometry. Both lengths must be positive and finite.
    pub fn new(arm_a: f64, arm_b: f64) -> Result<Self> {
        let valid = |l: f64| l.is_finite() && l > 0.;
        if valid(arm_a) && valid(arm_b) {
            Ok(Self { arm_a, arm_b })
        } else {
            Err(Error::InvalidArm { arm_a, arm_b })
        }
    }

    /// An example arm with two 50mm links.
    pub const fn example() -> Self {
        Self { arm_a: 50., arm_b: 50. }
    }

    /// Length of the base-elbow link.
    pub const fn arm_a(&self) -> f64 {
        self.arm_a
    }

    /// Length of the elbow-effector link.
    pub const fn arm_b(&self) -> f64 {
        self.arm_b
    }

    /// Inner and outer radius of the workspace annulus.
    pub fn reach(&self) -> [f64; 2] {
        [(self.arm_a - self.arm_b).abs(), self.arm_a + self.arm_b]
    }

    /// Check if both joint angles can be solved at the target.
    pub fn is_reachable(&self, x: f64, y: f64) -> bool {
        self.inverse(x, y).is_ok()
    }

    /// Angle of the base-elbow link for the target `(x, y)`.
    pub fn first_joint_angle(&self, x: f64, y: f64) -> Result<f64> {
        let Self { arm_a: a, arm_b: b } = *self;
        let r = self.radius(x, y)?;
        // (a² + r² - b²) / 2ar
        let d = (a / r + r / a - (b / a) * (b / r)) / 2.;
        let beta = acos_in_reach(d, r)?;
        Ok(wrap(y.atan2(x) + beta))
    }

    /// Angle between the two links for the target `(x, y)`.
    pub fn second_joint_angle(&self, x: f64, y: f64) -> Result<f64> {
        let Self { arm_a: a, arm_b: b } = *self;
        let r = self.radius(x, y)?;
        // (r² - a² - b²) / 2ab
        let d = ((r / a) * (r / b) - a / b - b / a) / 2.;
        acos_in_reach(d, r)
    }

    // Distance to the base, the cutoff scales with the arm
    fn radius(&self, x: f64, y: f64) -> Result<f64> {
        let r = x.hypot(y);
        if r <= f64::EPSILON * (self.arm_a + self.arm_b) {
            Err(Error::Degenerate)
        } else {
            Ok(r)
        }
    }

    /// Solve `[theta1, theta2]` for the target `(x, y)`.
    pub fn inverse(&self, x: f64, y: f64) -> Result<[f64; 2]> {
        Ok([self.first_joint_angle(x, y)?, self.second_joint_angle(x, y)?])
    }

    /// Elbow position of the base joint angle.
    pub fn elbow(&self, theta1: f64) -> [f64; 2] {
        [self.arm_a * theta1.cos(), self.arm_a * theta1.sin()]
    }

    /// End-effector position of the joint angles.
    pub fn forward(&self, [theta1, theta2]: [f64; 2]) -> [f64; 2] {
        let [x, y] = self.elbow(theta1);
        let a = theta1 - theta2;
        [x + self.arm_b * a.cos(), y + self.arm_b * a.sin()]
    }

    /// Bind the joint solver to an adapter.
    pub fn adapter(&self, selector: JointSelector) -> JointAdapter {
        JointAdapter::with_geometry(*self, selector)
    }

    /// Adapters of the first and the second joint.
    pub fn adapters(&self) -> [JointAdapter; 2] {
        [JointSelector::First, JointSelector::Second].map(|s| self.adapter(s))
    }
}

fn acos_in_reach(d: f64, radius: f64) -> Result<f64> {
    // Also rejects NaN
    if d.abs() <= 1. + REACH_TOL {
        Ok(d.clamp(-1., 1.).acos())
    } else {
        Err(Error::Unreachable { radius })
    }
}

fn wrap(a: f64) -> f64 {
    let a = a.rem_euclid(TAU);
    if a < TAU {
        a
    } else {
        0.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn invalid_arms() {
        for [a, b] in [
            [0., 1.],
            [1., 0.],
            [-3., 2.],
            [1., f64::NAN],
            [f64::INFINITY, 1.],
        ] {
            let e = ManipulatorGeometry::new(a, b).unwrap_err();
            assert!(matches!(e, Error::InvalidArm { .. }));
        }
        let geo = ManipulatorGeometry::new(30., 20.).unwrap();
        assert_eq!(geo.reach(), [10., 50.]);
    }

    #[test]
    fn fully_extended() {
        let geo = ManipulatorGeometry::example();
        let [t1, t2] = geo.inverse(100., 0.).unwrap();
        assert_abs_diff_eq!(t1, 0., epsilon = 1e-9);
        assert_abs_diff_eq!(t2, 0., epsilon = 1e-9);
        let [t1, t2] = geo.inverse(0., 100.).unwrap();
        assert_abs_diff_eq!(t1, FRAC_PI_2, epsilon = 1e-9);
        assert_abs_diff_eq!(t2, 0., epsilon = 1e-9);
    }

    #[test]
    fn folded_on_axis() {
        let geo = ManipulatorGeometry::example();
        let [t1, t2] = geo.inverse(70., 0.).unwrap();
        assert_abs_diff_eq!(t1, 0.7f64.acos(), epsilon = 1e-12);
        assert_abs_diff_eq!(t2, (-0.02f64).acos(), epsilon = 1e-12);
        // Right angle at the elbow
        let [t1, t2] = geo.inverse(50., 50.).unwrap();
        assert_abs_diff_eq!(t1, FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(t2, FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_base() {
        let geo = ManipulatorGeometry::example();
        assert_eq!(geo.first_joint_angle(0., 0.), Err(Error::Degenerate));
        assert_eq!(geo.second_joint_angle(0., 0.), Err(Error::Degenerate));
        assert!(!geo.is_reachable(0., 0.));
    }

    #[test]
    fn out_of_reach() {
        let geo = ManipulatorGeometry::new(30., 20.).unwrap();
        for (x, y) in [(60., 0.), (36., 48.), (5., 0.), (0., -3.)] {
            let e = geo.first_joint_angle(x, y).unwrap_err();
            assert!(matches!(e, Error::Unreachable { .. }), "{e}");
            let e = geo.second_joint_angle(x, y).unwrap_err();
            assert!(matches!(e, Error::Unreachable { .. }), "{e}");
        }
        let Err(Error::Unreachable { radius }) = geo.second_joint_angle(36., 48.) else {
            panic!("expect unreachable");
        };
        assert_abs_diff_eq!(radius, 60., epsilon = 1e-12);
        let e = geo.first_joint_angle(f64::NAN, 1.).unwrap_err();
        assert!(e.is_unreachable());
    }

    #[test]
    fn extreme_scales() {
        for l in [1e160, 1e-17, 1e-300, 1e300] {
            let geo = ManipulatorGeometry::new(l, l).unwrap();
            let [t1, t2] = geo.inverse(2. * l, 0.).unwrap();
            assert_abs_diff_eq!(t1, 0., epsilon = 1e-6);
            assert_abs_diff_eq!(t2, 0., epsilon = 1e-6);
            let [t1, t2] = geo.inverse(1.4 * l, 0.).unwrap();
            assert_abs_diff_eq!(t1, 0.7f64.acos(), epsilon = 1e-12);
            assert_abs_diff_eq!(t2, (-0.02f64).acos(), epsilon = 1e-12);
            let e = geo.inverse(2.5 * l, 0.).unwrap_err();
            assert!(matches!(e, Error::Unreachable { .. }), "{e}");
            assert_eq!(geo.inverse(0., 0.), Err(Error::Degenerate));
        }
    }

    #[test]
    fn annulus_boundary() {
        let geo = ManipulatorGeometry::new(30., 20.).unwrap();
        // Inner circle, the arm folds back
        let [_, t2] = geo.inverse(0., 10.).unwrap();
        assert_abs_diff_eq!(t2, PI, epsilon = 1e-9);
        // Outer circle in the third quadrant
        let p = [-50. * 0.6, -50. * 0.8];
        let t = geo.inverse(p[0], p[1]).unwrap();
        let [x, y] = geo.forward(t);
        assert_abs_diff_eq!(x, p[0], epsilon = 1e-9);
        assert_abs_diff_eq!(y, p[1], epsilon = 1e-9);
    }

    #[test]
    fn first_angle_wrapped() {
        let geo = ManipulatorGeometry::example();
        // Slightly below the positive X axis, fully extended
        let a = -0.1f64;
        let t1 = geo.first_joint_angle(100. * a.cos(), 100. * a.sin()).unwrap();
        assert_abs_diff_eq!(t1, TAU + a, epsilon = 1e-6);
        assert_eq!(wrap(-1e-18), 0.);
        assert_eq!(wrap(TAU), 0.);
    }
}

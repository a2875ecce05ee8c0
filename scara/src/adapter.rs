use crate::{AxisFlags, Coord, Error, ManipulatorGeometry, Result, Trajectory};

/// Position function of an actuator.
///
/// A stepper solver evaluates the actuator coordinate at any time of a
/// segment, and only considers the segments moving along
/// [`StepperKinematics::active_flags()`].
pub trait StepperKinematics: Send + Sync {
    /// Axes that the position depends on.
    fn active_flags(&self) -> AxisFlags;

    /// Actuator coordinate of `segment` at `move_time`.
    fn calc_position(&self, segment: &dyn Trajectory, move_time: f64) -> Result<f64>;
}

/// Rotary joint of a SCARA arm.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum JointSelector {
    /// Base joint (stepper code `a`)
    First,
    /// Elbow joint (stepper code `b`)
    Second,
}

impl JointSelector {
    /// Stepper code of the joint.
    pub const fn code(&self) -> char {
        match self {
            Self::First => 'a',
            Self::Second => 'b',
        }
    }

    /// Get the lowercase name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
        }
    }
}

impl std::fmt::Display for JointSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<char> for JointSelector {
    type Error = Error;

    fn try_from(code: char) -> Result<Self> {
        match code.to_ascii_lowercase() {
            'a' => Ok(Self::First),
            'b' => Ok(Self::Second),
            _ => Err(Error::InvalidSelector(code)),
        }
    }
}

/// A joint angle solver bound to an arm.
///
/// The adapter is immutable, so it can be evaluated from any thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointAdapter {
    geo: ManipulatorGeometry,
    selector: JointSelector,
}

impl JointAdapter {
    /// Create a joint adapter from the arm lengths.
    pub fn new(selector: JointSelector, arm_a: f64, arm_b: f64) -> Result<Self> {
        let geo = ManipulatorGeometry::new(arm_a, arm_b)
            .inspect_err(|e| log::debug!("reject {selector} joint: {e}"))?;
        Ok(Self::with_geometry(geo, selector))
    }

    /// Create a joint adapter from a stepper code, `a` or `b`.
    pub fn from_code(code: char, arm_a: f64, arm_b: f64) -> Result<Self> {
        let selector = JointSelector::try_from(code)
            .inspect_err(|e| log::debug!("reject joint: {e}"))?;
        Self::new(selector, arm_a, arm_b)
    }

    /// Create a joint adapter from a checked geometry.
    pub fn with_geometry(geo: ManipulatorGeometry, selector: JointSelector) -> Self {
        log::debug!(
            "bind {selector} joint: arm_a={}, arm_b={}",
            geo.arm_a(),
            geo.arm_b()
        );
        Self { geo, selector }
    }

    /// The joint of this adapter.
    pub const fn selector(&self) -> JointSelector {
        self.selector
    }

    /// The arm geometry.
    pub const fn geometry(&self) -> &ManipulatorGeometry {
        &self.geo
    }

    /// Both joints depend on the planar position only.
    pub const fn active_flags(&self) -> AxisFlags {
        AxisFlags::new().with_x().with_y()
    }

    /// Joint angle at the target `(x, y)`.
    pub fn angle_at(&self, x: f64, y: f64) -> Result<f64> {
        match self.selector {
            JointSelector::First => self.geo.first_joint_angle(x, y),
            JointSelector::Second => self.geo.second_joint_angle(x, y),
        }
    }

    /// Joint angle of `segment` at `move_time`.
    pub fn calc_position(&self, segment: &dyn Trajectory, move_time: f64) -> Result<f64> {
        let Coord { x, y, .. } = segment.coord_at(move_time);
        self.angle_at(x, y).inspect_err(|e| {
            log::trace!("{} joint at ({x}, {y}), t={move_time}: {e}", self.selector);
        })
    }
}

impl StepperKinematics for JointAdapter {
    fn active_flags(&self) -> AxisFlags {
        JointAdapter::active_flags(self)
    }

    fn calc_position(&self, segment: &dyn Trajectory, move_time: f64) -> Result<f64> {
        JointAdapter::calc_position(self, segment, move_time)
    }
}

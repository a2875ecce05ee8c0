/// Result type of this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors of arm configuration and joint evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// Arm lengths must be positive and finite
    InvalidArm {
        /// Length of the base-elbow link
        arm_a: f64,
        /// Length of the elbow-effector link
        arm_b: f64,
    },
    /// Unknown joint selector code
    InvalidSelector(char),
    /// The target lies outside the reachable annulus
    Unreachable {
        /// Distance from the base to the target
        radius: f64,
    },
    /// The target coincides with the base axis
    Degenerate,
}

impl Error {
    /// Check if the error is raised while configuring an adapter.
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::InvalidArm { .. } | Self::InvalidSelector(_))
    }

    /// Check if the error is raised by an unreachable pose.
    ///
    /// The degenerate pose is a boundary case of unreachable poses.
    pub const fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable { .. } | Self::Degenerate)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArm { arm_a, arm_b } => {
                write!(f, "invalid arm lengths: arm_a={arm_a}, arm_b={arm_b}")
            }
            Self::InvalidSelector(c) => write!(f, "invalid joint selector: {c:?}"),
            Self::Unreachable { radius } => write!(f, "unreachable pose at radius {radius}"),
            Self::Degenerate => write!(f, "degenerate pose on the base axis"),
        }
    }
}

impl std::error::Error for Error {}

#[test]
fn error_kind() {
    let e = Error::InvalidArm { arm_a: 0., arm_b: 1. };
    assert!(e.is_config() && !e.is_unreachable());
    assert!(Error::InvalidSelector('c').is_config());
    assert!(Error::Unreachable { radius: 60. }.is_unreachable());
    assert!(Error::Degenerate.is_unreachable());
    assert!(!Error::Degenerate.is_config());
    assert_eq!(Error::InvalidSelector('c').to_string(), "invalid joint selector: 'c'");
}

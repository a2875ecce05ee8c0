/// Cartesian axes that an actuator position depends on.
///
/// The solver only searches moves that travel along one of these axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct AxisFlags(u8);

impl AxisFlags {
    const X: u8 = 1;
    const Y: u8 = 1 << 1;
    const Z: u8 = 1 << 2;

    /// Create an empty flag set.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Depend on the X axis.
    pub const fn with_x(self) -> Self {
        Self(self.0 | Self::X)
    }

    /// Depend on the Y axis.
    pub const fn with_y(self) -> Self {
        Self(self.0 | Self::Y)
    }

    /// Depend on the Z axis.
    pub const fn with_z(self) -> Self {
        Self(self.0 | Self::Z)
    }

    /// Check the X axis.
    pub const fn has_x(&self) -> bool {
        self.0 & Self::X != 0
    }

    /// Check the Y axis.
    pub const fn has_y(&self) -> bool {
        self.0 & Self::Y != 0
    }

    /// Check the Z axis.
    pub const fn has_z(&self) -> bool {
        self.0 & Self::Z != 0
    }

    /// Check if no axis is set.
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for AxisFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl std::fmt::Display for AxisFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (set, name) in [(self.has_x(), 'X'), (self.has_y(), 'Y'), (self.has_z(), 'Z')] {
            if set {
                write!(f, "{name}")?;
            }
        }
        Ok(())
    }
}

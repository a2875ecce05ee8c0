/// Cartesian position of the tool head.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coord {
    /// X position
    pub x: f64,
    /// Y position
    pub y: f64,
    /// Z position
    pub z: f64,
}

impl Coord {
    /// Create a new coordinate.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a coordinate on the XY plane.
    pub const fn planar(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.)
    }
}

impl From<[f64; 2]> for Coord {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::planar(x, y)
    }
}

impl From<[f64; 3]> for Coord {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// A time-parameterized motion segment.
///
/// Implementations are queried with a time offset measured from the start of
/// the segment.
pub trait Trajectory {
    /// Interpolated position at `move_time`.
    fn coord_at(&self, move_time: f64) -> Coord;
}

impl<T: Trajectory + ?Sized> Trajectory for &T {
    fn coord_at(&self, move_time: f64) -> Coord {
        T::coord_at(self, move_time)
    }
}

/// A straight segment with constant acceleration.
///
/// The travelled distance is `(start_v + half_accel * t) * t` along the unit
/// direction `axes_r`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Move {
    /// Duration of the move
    pub move_t: f64,
    /// Velocity at the start of the move
    pub start_v: f64,
    /// Half of the acceleration
    pub half_accel: f64,
    /// Start position
    pub start_pos: Coord,
    /// Unit direction of the move
    pub axes_r: Coord,
}

impl Move {
    /// A constant velocity move between two planar points.
    ///
    /// A zero-length move or a non-positive velocity yields a stationary move.
    pub fn linear(from: [f64; 2], to: [f64; 2], velocity: f64) -> Self {
        let [dx, dy] = [to[0] - from[0], to[1] - from[1]];
        let dist = dx.hypot(dy);
        let (axes_r, start_v, move_t) = if dist > 0. && velocity > 0. {
            (Coord::planar(dx / dist, dy / dist), velocity, dist / velocity)
        } else {
            (Coord::default(), 0., 0.)
        };
        Self {
            move_t,
            start_v,
            half_accel: 0.,
            start_pos: from.into(),
            axes_r,
        }
    }

    /// Distance travelled at `move_time`.
    pub fn distance_at(&self, move_time: f64) -> f64 {
        (self.start_v + self.half_accel * move_time) * move_time
    }
}

impl Trajectory for Move {
    fn coord_at(&self, move_time: f64) -> Coord {
        let dist = self.distance_at(move_time);
        let Coord { x, y, z } = self.start_pos;
        let r = self.axes_r;
        Coord::new(x + r.x * dist, y + r.y * dist, z + r.z * dist)
    }
}

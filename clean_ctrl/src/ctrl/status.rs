//! Pose and status reports of the cleaning robot

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use std::fmt;

use super::Heading;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Position of the robot on the grid and the direction it is facing.
///
/// The origin `(0, 0)` is the recharge station.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pose {
    pub x: i64,
    pub y: i64,
    pub heading: Heading,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// The result of executing a single command.
///
/// The `Display` implementation produces the status string reported to
/// operators:
///
/// - `Normal`: `(x,y,H)`
/// - `Blocked`: `(x,y,H),(tx,ty)`
/// - `LowBattery`: `!(x,y,H)`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// The command was executed, the robot is now at the given pose.
    Normal(Pose),

    /// A forward move was refused because an obstacle occupies `target`. The
    /// robot did not move.
    Blocked {
        pose: Pose,
        target: (i64, i64),
    },

    /// Battery charge is critical, the command was not executed.
    LowBattery(Pose),
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Pose {
    /// The pose of a freshly initialised robot, at the station facing north.
    pub const fn initial() -> Self {
        Pose {
            x: 0,
            y: 0,
            heading: Heading::North,
        }
    }

    /// The cell directly in front of the robot.
    pub fn ahead(&self) -> (i64, i64) {
        let (dx, dy) = self.heading.step();
        (self.x + dx, self.y + dy)
    }

    /// True if at the recharge station facing east.
    pub fn is_docked(&self) -> bool {
        self.x == 0 && self.y == 0 && self.heading == Heading::East
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.heading)
    }
}

impl Status {
    /// The robot's pose at the end of the command.
    pub fn pose(&self) -> Pose {
        match self {
            Status::Normal(p) | Status::LowBattery(p) => *p,
            Status::Blocked { pose, .. } => *pose,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Normal(p) => write!(f, "{}", p),
            Status::Blocked { pose, target } => {
                write!(f, "{},({},{})", pose, target.0, target.1)
            }
            Status::LowBattery(p) => write!(f, "!{}", p),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_status_strings() {
        let pose = Pose { x: 0, y: 1, heading: Heading::North };
        assert_eq!(Status::Normal(pose).to_string(), "(0,1,N)");

        let pose = Pose::initial();
        assert_eq!(
            Status::Blocked { pose, target: pose.ahead() }.to_string(),
            "(0,0,N),(0,1)"
        );

        let pose = Pose { x: 1, y: 1, heading: Heading::North };
        assert_eq!(Status::LowBattery(pose).to_string(), "!(1,1,N)");

        let pose = Pose { x: -3, y: -12, heading: Heading::West };
        assert_eq!(pose.to_string(), "(-3,-12,W)");
        assert_eq!(
            Status::Blocked { pose, target: pose.ahead() }.to_string(),
            "(-3,-12,W),(-4,-12)"
        );
    }

    #[test]
    fn test_is_docked() {
        assert!(!Pose::initial().is_docked());
        assert!(Pose { x: 0, y: 0, heading: Heading::East }.is_docked());
        assert!(!Pose { x: 1, y: 0, heading: Heading::East }.is_docked());
    }
}

//! # Cleaning robot control module
//!
//! [`CleaningRobot`] tracks the robot's pose on the grid and executes one
//! [`Command`] at a time. Battery charge is checked before every command:
//!
//! - at or below the critical threshold the command is refused, cleaning is
//!   switched off and the recharge LED is switched on,
//! - at or below the low threshold the robot navigates itself back to the
//!   recharge station at the origin, once,
//! - otherwise the command is executed.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod cmd;
mod nav;
mod params;
mod state;
mod status;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use cmd::*;
pub use params::*;
pub use state::*;
pub use status::*;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors that can occur during CleanCtrl operation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CleanCtrlError {
    #[error("The robot has not been initialised")]
    NotInitialised,

    #[error(
        "An obstacle at {target:?} blocks the way back to the recharge station \
         (robot at {pose})"
    )]
    ObstacleOnReturnPath {
        pose: Pose,
        target: (i64, i64),
    },
}

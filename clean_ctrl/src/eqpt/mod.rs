//! # Equipment interfaces
//!
//! The controller never touches hardware directly. It is handed an
//! [`Actuators`] and a [`Sensors`] implementation when it is constructed:
//!
//! - [`sim`] provides simulated equipment which records actuation and plays
//!   back scripted sensor readings. It never sleeps.
//! - `pi` drives the real robot through the Raspberry Pi's GPIO and I2C
//!   buses. It is only built for ARM Linux targets.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

/// Simulated equipment
pub mod sim;

/// Raspberry Pi equipment
#[cfg(all(target_arch = "arm", target_os = "linux"))]
pub mod pi;

// ---------------------------------------------------------------------------
// TRAITS
// ---------------------------------------------------------------------------

/// Outputs of the robot.
///
/// All calls are fire and forget, failures belong to the implementation.
pub trait Actuators {
    /// Run the wheel motor for one forward step.
    fn drive_wheel_motor(&mut self);

    /// Run the rotation motor for one 90 degree turn.
    fn drive_rotation_motor(&mut self, dir: RotationDir);

    /// Switch the cleaning system on or off.
    fn set_cleaning_system(&mut self, on: bool);

    /// Switch the recharge LED on or off.
    fn set_recharge_led(&mut self, on: bool);
}

/// Inputs of the robot.
pub trait Sensors {
    /// True if the infrared sensor sees an obstacle in front of the robot.
    fn obstacle_found(&mut self) -> bool;

    /// Battery charge remaining in percent, between 0 and 100.
    fn charge_left(&mut self) -> u8;
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Direction of the rotation motor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationDir {
    Left,
    Right,
}

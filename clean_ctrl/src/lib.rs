//! # Cleaning robot library
//!
//! Control software for a grid based cleaning robot. The robot executes
//! forward and turn commands, refuses to move into obstacles, and manages its
//! battery by returning to the recharge station at the origin when charge is
//! low and shutting down its cleaning system when charge is critical.
//!
//! ```
//! use clean_lib::ctrl::{CleaningRobot, parse_commands};
//! use clean_lib::eqpt::sim::{SimActuators, SimSensors};
//!
//! let mut robot = CleaningRobot::with_default_params(
//!     SimActuators::new(),
//!     SimSensors::new(100)
//! );
//! robot.initialize_robot();
//!
//! let statuses = robot.execute_sequence(parse_commands("frf").unwrap()).unwrap();
//! assert_eq!(statuses.last().unwrap().to_string(), "(1,1,E)");
//! ```

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Cleaning robot control - command execution, battery policy and navigation
pub mod ctrl;

/// Equipment - the actuator and sensor interfaces and their implementations
pub mod eqpt;

//! Simulated equipment
//!
//! [`SimActuators`] records every call made to it so the sequence of
//! actuations can be inspected, [`SimSensors`] returns fixed readings or
//! plays back scripted ones.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use log::trace;
use std::collections::VecDeque;

use super::{Actuators, RotationDir, Sensors};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Simulated actuators.
#[derive(Debug, Default)]
pub struct SimActuators {
    /// Every actuation in the order it was made.
    pub calls: Vec<ActuatorCall>,

    /// Current state of the cleaning system output.
    pub cleaning_system: bool,

    /// Current state of the recharge LED output.
    pub recharge_led: bool,
}

/// Simulated sensors.
///
/// Scripted readings are consumed first, one per read. Once a script is
/// empty the fixed reading is returned.
#[derive(Debug)]
pub struct SimSensors {
    /// Obstacle reading used once the obstacle script is exhausted.
    pub obstacle: bool,

    /// Charge reading used once the charge script is exhausted.
    pub charge_pct: u8,

    obstacle_script: VecDeque<bool>,
    charge_script: VecDeque<u8>,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// A single call made to the simulated actuators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActuatorCall {
    WheelMotor,
    RotationMotor(RotationDir),
    CleaningSystem(bool),
    RechargeLed(bool),
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl SimActuators {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded calls equal to `call`.
    pub fn count(&self, call: ActuatorCall) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }
}

impl Actuators for SimActuators {
    fn drive_wheel_motor(&mut self) {
        trace!("sim: wheel motor");
        self.calls.push(ActuatorCall::WheelMotor);
    }

    fn drive_rotation_motor(&mut self, dir: RotationDir) {
        trace!("sim: rotation motor {:?}", dir);
        self.calls.push(ActuatorCall::RotationMotor(dir));
    }

    fn set_cleaning_system(&mut self, on: bool) {
        trace!("sim: cleaning system {}", on);
        self.cleaning_system = on;
        self.calls.push(ActuatorCall::CleaningSystem(on));
    }

    fn set_recharge_led(&mut self, on: bool) {
        trace!("sim: recharge LED {}", on);
        self.recharge_led = on;
        self.calls.push(ActuatorCall::RechargeLed(on));
    }
}

impl SimSensors {
    /// Sensors with no obstacle and the given battery charge.
    pub fn new(charge_pct: u8) -> Self {
        SimSensors {
            obstacle: false,
            charge_pct,
            obstacle_script: VecDeque::new(),
            charge_script: VecDeque::new(),
        }
    }

    /// Queue obstacle readings to be returned before the fixed reading.
    pub fn script_obstacles<I>(&mut self, readings: I)
    where
        I: IntoIterator<Item = bool>
    {
        self.obstacle_script.extend(readings);
    }

    /// Queue charge readings to be returned before the fixed reading.
    pub fn script_charge<I>(&mut self, readings: I)
    where
        I: IntoIterator<Item = u8>
    {
        self.charge_script.extend(readings);
    }
}

impl Default for SimSensors {
    fn default() -> Self {
        SimSensors::new(100)
    }
}

impl Sensors for SimSensors {
    fn obstacle_found(&mut self) -> bool {
        self.obstacle_script.pop_front().unwrap_or(self.obstacle)
    }

    fn charge_left(&mut self) -> u8 {
        self.charge_script.pop_front().unwrap_or(self.charge_pct)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_scripted_readings() {
        let mut sensors = SimSensors::new(80);
        sensors.script_charge(vec![50, 20]);
        sensors.script_obstacles(vec![true]);

        assert_eq!(sensors.charge_left(), 50);
        assert_eq!(sensors.charge_left(), 20);
        assert_eq!(sensors.charge_left(), 80);

        assert!(sensors.obstacle_found());
        assert!(!sensors.obstacle_found());
    }

    #[test]
    fn test_actuator_record() {
        let mut act = SimActuators::new();
        act.drive_wheel_motor();
        act.drive_rotation_motor(RotationDir::Left);
        act.set_recharge_led(true);

        assert_eq!(act.count(ActuatorCall::WheelMotor), 1);
        assert_eq!(
            act.calls,
            vec![
                ActuatorCall::WheelMotor,
                ActuatorCall::RotationMotor(RotationDir::Left),
                ActuatorCall::RechargeLed(true)
            ]
        );
        assert!(act.recharge_led);
        assert!(!act.cleaning_system);
    }
}

//! Parameters structure for the cleaning robot controller

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

// Internal
use util::params;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for the cleaning robot controller.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Params {

    // ---- BATTERY POLICY ----

    /// At or below this charge commands are refused, cleaning is switched off
    /// and the recharge LED is switched on.
    ///
    /// Units: percent
    pub critical_charge_pct: u8,

    /// At or below this charge (and above `critical_charge_pct`) the robot
    /// navigates back to the recharge station.
    ///
    /// Units: percent
    pub low_charge_pct: u8,

    /// Clear the returning-to-base flag once the robot has docked, allowing a
    /// later low charge to trigger another return. When false the flag stays
    /// set for the lifetime of the robot and only the first low charge
    /// triggers a return.
    pub rearm_return_after_docking: bool,

    // ---- HARDWARE ----

    /// Time the motors are left running for a single command.
    ///
    /// Units: milliseconds
    pub motor_settle_ms: u64,

    /// I2C address of the battery fuel gauge.
    pub battery_gauge_i2c_addr: u16,

    /// Fuel gauge register holding the state of charge. The most significant
    /// byte read from this register is the charge in percent.
    pub battery_gauge_soc_reg: u8,

    /// GPIO pin assignments.
    pub pins: PinParams,
}

/// GPIO pin assignments, using BCM numbering.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PinParams {
    /// Recharge LED output (header pin 12)
    pub recharge_led: u8,

    /// Cleaning system output (header pin 13)
    pub cleaning_system: u8,

    /// Infrared obstacle sensor input (header pin 15)
    pub infrared: u8,

    /// Wheel motor PWM, PWMA (header pin 16)
    pub wheel_pwm: u8,

    /// Wheel motor direction, AIN1 (header pin 22)
    pub wheel_in1: u8,

    /// Wheel motor direction, AIN2 (header pin 18)
    pub wheel_in2: u8,

    /// Rotation motor PWM, PWMB (header pin 32)
    pub rotation_pwm: u8,

    /// Rotation motor direction, BIN1 (header pin 29)
    pub rotation_in1: u8,

    /// Rotation motor direction, BIN2 (header pin 31)
    pub rotation_in2: u8,

    /// Motor driver standby, STBY (header pin 33)
    pub standby: u8,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error(
        "Charge thresholds must satisfy critical < low <= 100, found critical = {0}, \
         low = {1}"
    )]
    InvalidChargeThresholds(u8, u8),

    #[error("GPIO pin {0} is assigned more than once")]
    DuplicatePin(u8),
}

/// Errors raised while loading the controller parameters.
#[derive(Debug, Error)]
pub enum ParamsLoadError {
    #[error("Failed to load parameters: {0}")]
    ParamLoadError(params::LoadError),

    #[error("Loaded parameters are invalid: {0}")]
    ParamsInvalid(ParamsError),
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for Params {
    fn default() -> Self {
        Params {
            critical_charge_pct: 10,
            low_charge_pct: 24,
            rearm_return_after_docking: false,
            motor_settle_ms: 1000,
            battery_gauge_i2c_addr: 0x36,
            battery_gauge_soc_reg: 0x04,
            pins: PinParams::default(),
        }
    }
}

impl Default for PinParams {
    fn default() -> Self {
        PinParams {
            recharge_led: 18,
            cleaning_system: 27,
            infrared: 22,
            wheel_pwm: 23,
            wheel_in1: 25,
            wheel_in2: 24,
            rotation_pwm: 12,
            rotation_in1: 5,
            rotation_in2: 6,
            standby: 13,
        }
    }
}

impl Params {

    /// Load the parameters from a file in the software root's params
    /// directory and check they are valid.
    pub fn load(param_file_path: &str) -> Result<Self, ParamsLoadError> {
        let params: Params = params::load(param_file_path)
            .map_err(ParamsLoadError::ParamLoadError)?;

        params.are_valid().map_err(ParamsLoadError::ParamsInvalid)?;

        Ok(params)
    }

    /// Determines if the parameters are valid.
    pub fn are_valid(&self) -> Result<(), ParamsError> {
        if self.critical_charge_pct >= self.low_charge_pct
            || self.low_charge_pct > 100
        {
            return Err(ParamsError::InvalidChargeThresholds(
                self.critical_charge_pct,
                self.low_charge_pct
            ))
        }

        let mut seen = HashSet::new();
        for pin in self.pins.all().iter() {
            if !seen.insert(*pin) {
                return Err(ParamsError::DuplicatePin(*pin))
            }
        }

        Ok(())
    }
}

impl PinParams {
    /// Every assigned pin.
    pub fn all(&self) -> [u8; 10] {
        [
            self.recharge_led,
            self.cleaning_system,
            self.infrared,
            self.wheel_pwm,
            self.wheel_in1,
            self.wheel_in2,
            self.rotation_pwm,
            self.rotation_in1,
            self.rotation_in2,
            self.standby,
        ]
    }
}

//! Raspberry Pi equipment
//!
//! Motors are driven through a TB6612FNG style dual H-bridge: the wheel motor
//! on channel A, the rotation motor on channel B. Each command runs a motor
//! for `motor_settle_ms` and then stops it. The obstacle sensor is a digital
//! infrared input and battery charge comes from an I2C fuel gauge.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{error, trace};
use rppal::gpio::{Gpio, InputPin, OutputPin};
use rppal::i2c::I2c;
use std::thread;
use std::time::Duration;
use thiserror::Error;

// Internal
use super::{Actuators, RotationDir, Sensors};
use crate::ctrl::Params;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// GPIO driven actuators.
pub struct PiActuators {
    recharge_led: OutputPin,
    cleaning_system: OutputPin,

    wheel_pwm: OutputPin,
    wheel_in1: OutputPin,
    wheel_in2: OutputPin,

    rotation_pwm: OutputPin,
    rotation_in1: OutputPin,
    rotation_in2: OutputPin,

    standby: OutputPin,

    settle: Duration,
}

/// GPIO and I2C backed sensors.
pub struct PiSensors {
    infrared: InputPin,
    gauge: I2c,
    soc_reg: u8,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum PiEqptError {
    #[error("GPIO error: {0}")]
    Gpio(#[from] rppal::gpio::Error),

    #[error("I2C error: {0}")]
    I2c(#[from] rppal::i2c::Error),
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl PiActuators {
    /// Claim the output pins named in the parameters.
    pub fn new(gpio: &Gpio, params: &Params) -> Result<Self, PiEqptError> {
        let pins = &params.pins;
        let out = |pin: u8| -> Result<OutputPin, PiEqptError> {
            Ok(gpio.get(pin)?.into_output_low())
        };

        Ok(PiActuators {
            recharge_led: out(pins.recharge_led)?,
            cleaning_system: out(pins.cleaning_system)?,
            wheel_pwm: out(pins.wheel_pwm)?,
            wheel_in1: out(pins.wheel_in1)?,
            wheel_in2: out(pins.wheel_in2)?,
            rotation_pwm: out(pins.rotation_pwm)?,
            rotation_in1: out(pins.rotation_in1)?,
            rotation_in2: out(pins.rotation_in2)?,
            standby: out(pins.standby)?,
            settle: Duration::from_millis(params.motor_settle_ms),
        })
    }
}

impl Actuators for PiActuators {
    fn drive_wheel_motor(&mut self) {
        trace!("Driving wheel motor for {:?}", self.settle);

        // Clockwise
        self.wheel_in1.set_high();
        self.wheel_in2.set_low();
        self.wheel_pwm.set_high();
        self.standby.set_high();

        thread::sleep(self.settle);

        self.wheel_in1.set_low();
        self.wheel_in2.set_low();
        self.wheel_pwm.set_low();
        self.standby.set_low();
    }

    fn drive_rotation_motor(&mut self, dir: RotationDir) {
        trace!("Driving rotation motor {:?} for {:?}", dir, self.settle);

        match dir {
            RotationDir::Left => {
                self.rotation_in1.set_high();
                self.rotation_in2.set_low();
            }
            RotationDir::Right => {
                self.rotation_in1.set_low();
                self.rotation_in2.set_high();
            }
        }
        self.rotation_pwm.set_high();
        self.standby.set_high();

        thread::sleep(self.settle);

        self.rotation_in1.set_low();
        self.rotation_in2.set_low();
        self.rotation_pwm.set_low();
        self.standby.set_low();
    }

    fn set_cleaning_system(&mut self, on: bool) {
        set_output(&mut self.cleaning_system, on);
    }

    fn set_recharge_led(&mut self, on: bool) {
        set_output(&mut self.recharge_led, on);
    }
}

impl PiSensors {
    /// Claim the infrared input and open the fuel gauge on the default I2C
    /// bus.
    pub fn new(gpio: &Gpio, params: &Params) -> Result<Self, PiEqptError> {
        let infrared = gpio.get(params.pins.infrared)?.into_input();

        let mut gauge = I2c::new()?;
        gauge.set_slave_address(params.battery_gauge_i2c_addr)?;

        Ok(PiSensors {
            infrared,
            gauge,
            soc_reg: params.battery_gauge_soc_reg,
        })
    }
}

impl Sensors for PiSensors {
    fn obstacle_found(&mut self) -> bool {
        self.infrared.is_high()
    }

    /// A failed read is reported as an empty battery so the controller falls
    /// back to its safe state.
    fn charge_left(&mut self) -> u8 {
        let mut buf = [0u8; 2];
        match self.gauge.write_read(&[self.soc_reg], &mut buf) {
            Ok(_) => buf[0].min(100),
            Err(e) => {
                error!("Failed to read the battery fuel gauge: {}", e);
                0
            }
        }
    }
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

fn set_output(pin: &mut OutputPin, on: bool) {
    if on {
        pin.set_high();
    }
    else {
        pin.set_low();
    }
}

//! Implementations for the CleaningRobot state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, info, trace, warn};

// Internal
use super::{CleanCtrlError, Command, Heading, Params, ParamsError, Pose, Status};
use crate::eqpt::{Actuators, RotationDir, Sensors};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Cleaning robot controller state.
pub struct CleaningRobot<A, S>
where
    A: Actuators,
    S: Sensors
{
    pub(crate) params: Params,

    pub(crate) actuators: A,
    pub(crate) sensors: S,

    /// `None` until the robot is initialised.
    pub(crate) pose: Option<Pose>,

    pub(crate) cleaning_system_on: bool,
    pub(crate) recharge_led_on: bool,

    /// Set when a low charge sends the robot back to the recharge station.
    pub(crate) returning_to_base: bool,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl<A, S> CleaningRobot<A, S>
where
    A: Actuators,
    S: Sensors
{
    /// Create a new, uninitialised, robot.
    pub fn new(actuators: A, sensors: S, params: Params) -> Result<Self, ParamsError> {
        params.are_valid()?;

        Ok(CleaningRobot {
            params,
            actuators,
            sensors,
            pose: None,
            cleaning_system_on: false,
            recharge_led_on: false,
            returning_to_base: false,
        })
    }

    /// Create a new, uninitialised, robot using the default parameters.
    pub fn with_default_params(actuators: A, sensors: S) -> Self {
        CleaningRobot {
            params: Params::default(),
            actuators,
            sensors,
            pose: None,
            cleaning_system_on: false,
            recharge_led_on: false,
            returning_to_base: false,
        }
    }

    /// Place the robot on the recharge station facing north.
    pub fn initialize_robot(&mut self) {
        self.pose = Some(Pose::initial());
        debug!("Robot initialised at {}", Pose::initial());
    }

    /// The `(x,y,H)` status string for the current pose.
    pub fn robot_status(&self) -> Result<String, CleanCtrlError> {
        Ok(self.current_pose()?.to_string())
    }

    /// Execute a single command.
    ///
    /// Battery charge is checked first and may pre-empt the command, see the
    /// module documentation. An obstacle in front of the robot is reported in
    /// the returned status, it is not an error.
    ///
    /// # Errors
    /// - `NotInitialised` if `initialize_robot` hasn't been called.
    /// - `ObstacleOnReturnPath` if this command started a return to the
    ///   recharge station and the way was blocked.
    pub fn execute(&mut self, cmd: Command) -> Result<Status, CleanCtrlError> {
        let pose = self.current_pose()?;

        let charge = self.sensors.charge_left();
        trace!("Executing '{}' from {} with {}% charge", cmd, pose, charge);

        if charge <= self.params.critical_charge_pct {
            warn!("Battery critical ({}%), refusing '{}'", charge, cmd);
            self.manage_cleaning_system();
            return Ok(Status::LowBattery(pose))
        }

        if charge <= self.params.low_charge_pct && !self.returning_to_base {
            info!(
                "Battery low ({}%), returning to the recharge station from {}",
                charge,
                pose
            );
            self.returning_to_base = true;
            return self.go_to_recharge_station()
        }

        let status = match cmd {
            Command::Forward => self.move_forward(pose),
            Command::TurnLeft => self.rotate(pose, RotationDir::Left),
            Command::TurnRight => self.rotate(pose, RotationDir::Right),
        };

        Ok(status)
    }

    /// Execute commands in order, stopping at the first error.
    pub fn execute_sequence<I>(&mut self, cmds: I) -> Result<Vec<Status>, CleanCtrlError>
    where
        I: IntoIterator<Item = Command>
    {
        cmds.into_iter().map(|c| self.execute(c)).collect()
    }

    /// Switch the cleaning system and recharge LED according to the battery
    /// charge.
    ///
    /// At or below the critical charge cleaning is switched off and the
    /// recharge LED on, otherwise the reverse.
    pub fn manage_cleaning_system(&mut self) {
        let critical = self.sensors.charge_left() <= self.params.critical_charge_pct;

        self.actuators.set_cleaning_system(!critical);
        self.actuators.set_recharge_led(critical);
        self.cleaning_system_on = !critical;
        self.recharge_led_on = critical;

        debug!(
            "Cleaning system {}, recharge LED {}",
            on_off(self.cleaning_system_on),
            on_off(self.recharge_led_on)
        );
    }

    // ---- ACCESSORS ----

    /// Current pose, or `None` if the robot is not initialised.
    pub fn pose(&self) -> Option<Pose> {
        self.pose
    }

    /// Current position, or `None` if the robot is not initialised.
    pub fn position(&self) -> Option<(i64, i64)> {
        self.pose.map(|p| (p.x, p.y))
    }

    /// Current heading, or `None` if the robot is not initialised.
    pub fn heading(&self) -> Option<Heading> {
        self.pose.map(|p| p.heading)
    }

    pub fn cleaning_system_on(&self) -> bool {
        self.cleaning_system_on
    }

    pub fn recharge_led_on(&self) -> bool {
        self.recharge_led_on
    }

    pub fn returning_to_base(&self) -> bool {
        self.returning_to_base
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn actuators(&self) -> &A {
        &self.actuators
    }

    pub fn sensors_mut(&mut self) -> &mut S {
        &mut self.sensors
    }

    // ---- PRIVATE ----

    pub(crate) fn current_pose(&self) -> Result<Pose, CleanCtrlError> {
        self.pose.ok_or(CleanCtrlError::NotInitialised)
    }

    /// Move one cell forward unless an obstacle is in the way.
    ///
    /// The wheel motor is always driven, the obstacle sensor is read
    /// afterwards.
    fn move_forward(&mut self, pose: Pose) -> Status {
        let target = pose.ahead();

        self.actuators.drive_wheel_motor();

        if self.sensors.obstacle_found() {
            warn!("Obstacle at {:?}, staying at {}", target, pose);
            return Status::Blocked { pose, target }
        }

        let new_pose = Pose {
            x: target.0,
            y: target.1,
            heading: pose.heading,
        };
        self.pose = Some(new_pose);
        debug!("Moved to {}", new_pose);

        Status::Normal(new_pose)
    }

    fn rotate(&mut self, pose: Pose, dir: RotationDir) -> Status {
        let heading = match dir {
            RotationDir::Left => pose.heading.left(),
            RotationDir::Right => pose.heading.right(),
        };

        self.actuators.drive_rotation_motor(dir);

        let new_pose = Pose { heading, ..pose };
        self.pose = Some(new_pose);
        debug!("Turned {:?} to {}", dir, new_pose);

        Status::Normal(new_pose)
    }
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

fn on_off(on: bool) -> &'static str {
    if on { "on" } else { "off" }
}

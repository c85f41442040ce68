//! Navigation back to the recharge station
//!
//! The robot returns to the origin one axis at a time: first x, then y. Each
//! leg turns the robot to face the origin along that axis and drives forward
//! until the coordinate is zero. Finally the robot turns to face east. Every
//! step goes through [`CleaningRobot::execute`], so the battery is checked
//! before each one.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{error, info, trace, warn};

// Internal
use super::{CleanCtrlError, CleaningRobot, Command, Heading, Pose, Status};
use crate::eqpt::{Actuators, Sensors};

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl<A, S> CleaningRobot<A, S>
where
    A: Actuators,
    S: Sensors
{
    /// Navigate back to the recharge station at the origin, ending facing
    /// east.
    ///
    /// If the battery becomes critical on the way the robot stops where it is
    /// and the low battery status is returned.
    ///
    /// # Errors
    /// - `NotInitialised` if the robot hasn't been initialised.
    /// - `ObstacleOnReturnPath` as soon as any forward move is blocked. The
    ///   robot is left where the obstacle stopped it.
    pub fn go_to_recharge_station(&mut self) -> Result<Status, CleanCtrlError> {
        let pose = self.current_pose()?;
        info!("Navigating to the recharge station from {}", pose);

        let x_leg = if pose.x > 0 {
            Some((Heading::West, Command::TurnLeft))
        }
        else if pose.x < 0 {
            Some((Heading::East, Command::TurnRight))
        }
        else {
            None
        };

        if let Some((heading, turn)) = x_leg {
            if let Some(s) = self.return_along(heading, turn, |p| p.x == 0)? {
                return Ok(s)
            }
        }

        let pose = self.current_pose()?;
        let y_leg = if pose.y > 0 {
            Some((Heading::South, Command::TurnLeft))
        }
        else if pose.y < 0 {
            Some((Heading::North, Command::TurnRight))
        }
        else {
            None
        };

        if let Some((heading, turn)) = y_leg {
            if let Some(s) = self.return_along(heading, turn, |p| p.y == 0)? {
                return Ok(s)
            }
        }

        if let Some(s) = self.turn_to(Heading::East, Command::TurnLeft)? {
            return Ok(s)
        }

        let pose = self.current_pose()?;
        info!("Docked at the recharge station {}", pose);

        if self.params.rearm_return_after_docking {
            self.returning_to_base = false;
        }

        Ok(Status::Normal(pose))
    }

    /// Turn to `heading` then drive forward until `arrived`.
    ///
    /// Returns `Some(status)` if the battery became critical.
    fn return_along<F>(
        &mut self,
        heading: Heading,
        turn: Command,
        arrived: F
    ) -> Result<Option<Status>, CleanCtrlError>
    where
        F: Fn(&Pose) -> bool
    {
        if let Some(s) = self.turn_to(heading, turn)? {
            return Ok(Some(s))
        }

        while !arrived(&self.current_pose()?) {
            match self.execute(Command::Forward)? {
                s @ Status::LowBattery(_) => return Ok(Some(halted(s))),
                Status::Blocked { pose, target } => {
                    error!(
                        "Way back to the recharge station blocked at {:?}",
                        target
                    );
                    return Err(CleanCtrlError::ObstacleOnReturnPath { pose, target })
                }
                Status::Normal(p) => trace!("Return step to {}", p),
            }
        }

        Ok(None)
    }

    /// Repeat `turn` until the robot faces `heading`.
    ///
    /// Returns `Some(status)` if the battery became critical.
    fn turn_to(
        &mut self,
        heading: Heading,
        turn: Command
    ) -> Result<Option<Status>, CleanCtrlError> {
        while self.current_pose()?.heading != heading {
            if let s @ Status::LowBattery(_) = self.execute(turn)? {
                return Ok(Some(halted(s)))
            }
        }

        Ok(None)
    }
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

fn halted(status: Status) -> Status {
    warn!(
        "Battery critical, stopped short of the recharge station at {}",
        status.pose()
    );
    status
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ctrl::Params;
    use crate::eqpt::sim::{ActuatorCall, SimActuators, SimSensors};
    use crate::eqpt::RotationDir;

    fn robot_at(x: i64, y: i64, heading: Heading, charge_pct: u8)
        -> CleaningRobot<SimActuators, SimSensors>
    {
        let mut robot = CleaningRobot::with_default_params(
            SimActuators::new(),
            SimSensors::new(charge_pct)
        );
        robot.initialize_robot();
        robot.pose = Some(Pose { x, y, heading });
        robot
    }

    #[test]
    fn test_go_to_recharge_station() {
        let mut r = robot_at(1, 2, Heading::North, 100);

        let status = r.go_to_recharge_station().unwrap();
        assert_eq!(status.to_string(), "(0,0,E)");
        assert_eq!(r.robot_status().unwrap(), "(0,0,E)");

        // Invoked directly navigation doesn't touch the flag
        assert!(!r.returning_to_base());
    }

    #[test]
    fn test_return_from_every_quadrant() {
        let headings = [Heading::North, Heading::East, Heading::South, Heading::West];

        for x in -2..=2 {
            for y in -2..=2 {
                for h in headings.iter() {
                    let mut r = robot_at(x, y, *h, 100);
                    let status = r.go_to_recharge_station().unwrap();

                    assert!(status.pose().is_docked(), "from ({},{},{})", x, y, h);
                    assert_eq!(
                        r.actuators().count(ActuatorCall::WheelMotor),
                        (x.abs() + y.abs()) as usize
                    );
                }
            }
        }
    }

    #[test]
    fn test_turn_directions() {
        // x < 0 turns right to face east
        let mut r = robot_at(-1, 0, Heading::North, 100);
        r.go_to_recharge_station().unwrap();
        assert_eq!(
            r.actuators().calls,
            vec![
                ActuatorCall::RotationMotor(RotationDir::Right),
                ActuatorCall::WheelMotor
            ]
        );

        // y > 0 turns left to face south, then left to face east
        let mut r = robot_at(0, 1, Heading::North, 100);
        r.go_to_recharge_station().unwrap();
        assert_eq!(
            r.actuators().calls,
            vec![
                ActuatorCall::RotationMotor(RotationDir::Left),
                ActuatorCall::RotationMotor(RotationDir::Left),
                ActuatorCall::WheelMotor,
                ActuatorCall::RotationMotor(RotationDir::Left),
            ]
        );
    }

    #[test]
    fn test_obstacle_on_return_path() {
        let mut r = robot_at(2, 0, Heading::West, 100);
        r.sensors_mut().script_obstacles(vec![false, true]);

        assert_eq!(
            r.go_to_recharge_station(),
            Err(CleanCtrlError::ObstacleOnReturnPath {
                pose: Pose { x: 1, y: 0, heading: Heading::West },
                target: (0, 0)
            })
        );
        assert_eq!(r.position(), Some((1, 0)));
    }

    #[test]
    fn test_low_battery_triggers_return() {
        let mut r = robot_at(0, 0, Heading::North, 100);
        r.execute_sequence(vec![Command::Forward, Command::Forward, Command::TurnRight])
            .unwrap();
        assert_eq!(r.robot_status().unwrap(), "(0,2,E)");

        r.sensors_mut().charge_pct = 24;

        // The requested command is not executed, the robot goes home instead
        let status = r.execute(Command::Forward).unwrap();
        assert_eq!(status.to_string(), "(0,0,E)");
        assert!(r.returning_to_base());

        // Once home, commands are executed again
        assert_eq!(r.execute(Command::Forward).unwrap().to_string(), "(1,0,E)");
        assert_eq!(r.robot_status().unwrap(), "(1,0,E)");
    }

    #[test]
    fn test_return_is_triggered_once() {
        let mut r = robot_at(3, 0, Heading::East, 20);

        r.execute(Command::TurnLeft).unwrap();
        assert_eq!(r.robot_status().unwrap(), "(0,0,E)");

        r.execute(Command::Forward).unwrap();
        r.execute(Command::Forward).unwrap();
        assert_eq!(r.robot_status().unwrap(), "(2,0,E)");
        assert!(r.returning_to_base());
    }

    #[test]
    fn test_rearm_after_docking() {
        let mut params = Params::default();
        params.rearm_return_after_docking = true;

        let mut r = CleaningRobot::new(
            SimActuators::new(),
            SimSensors::new(100),
            params
        ).unwrap();
        r.initialize_robot();
        r.pose = Some(Pose { x: 3, y: 0, heading: Heading::East });

        r.sensors_mut().charge_pct = 20;
        r.execute(Command::Forward).unwrap();
        assert_eq!(r.robot_status().unwrap(), "(0,0,E)");
        assert!(!r.returning_to_base());

        // The next command at low charge sends the robot home again, where it
        // already is
        assert_eq!(r.execute(Command::Forward).unwrap().to_string(), "(0,0,E)");
        assert_eq!(r.actuators().count(ActuatorCall::WheelMotor), 3);
    }

    #[test]
    fn test_blocked_return_via_execute() {
        let mut r = robot_at(0, -2, Heading::North, 15);
        r.sensors_mut().obstacle = true;

        assert_eq!(
            r.execute(Command::TurnLeft),
            Err(CleanCtrlError::ObstacleOnReturnPath {
                pose: Pose { x: 0, y: -2, heading: Heading::North },
                target: (0, -1)
            })
        );
        assert!(r.returning_to_base());
    }

    #[test]
    fn test_critical_battery_during_return() {
        let mut r = robot_at(3, 0, Heading::West, 100);

        // Low charge starts the return, one step is taken, then the battery
        // goes critical
        r.sensors_mut().script_charge(vec![20, 20]);
        r.sensors_mut().charge_pct = 8;

        let status = r.execute(Command::Forward).unwrap();
        assert_eq!(status.to_string(), "!(2,0,W)");
        assert_eq!(r.position(), Some((2, 0)));
        assert!(!r.cleaning_system_on());
        assert!(r.recharge_led_on());
    }
}

//! Simulated-annealing cooling schedule and convergence detection.
//!
//! [`CoolingSchedule`] tracks the current temperature and the number of
//! completed steps. A driver calls [`CoolingSchedule::cool`] once after every
//! layout step and asks [`CoolingSchedule::convergence`] whether to keep
//! going.
//!
//! Because the temperature decays geometrically with a factor strictly below
//! one, it always crosses the floor after a bounded number of steps (see
//! [`CoolingSchedule::steps_to_floor`]). A driver that honours the schedule
//! cannot loop forever, even if the layout never settles.

use std::fmt;

use log::trace;

use crate::{DriftError, config::CoolingConfig};

/// Whether a layout should keep iterating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convergence {
    /// Neither stopping condition holds yet.
    Running,
    /// The largest displacement dropped below the move threshold.
    Settled,
    /// The temperature dropped below the floor.
    Frozen,
}

impl Convergence {
    /// Returns true for [`Convergence::Settled`] and [`Convergence::Frozen`]
    pub fn is_done(self) -> bool {
        self != Self::Running
    }
}

impl fmt::Display for Convergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Running => "running",
            Self::Settled => "settled",
            Self::Frozen => "frozen",
        };
        f.write_str(name)
    }
}

/// Geometric cooling schedule.
///
/// # Examples
///
/// ```
/// # use drift::cooling::{CoolingSchedule, Convergence};
/// # use drift::config::CoolingConfig;
/// let mut schedule = CoolingSchedule::new(&CoolingConfig::default()).unwrap();
/// assert_eq!(schedule.temperature(), 100.0);
///
/// schedule.cool();
/// assert!((schedule.temperature() - 95.0).abs() < 1e-9);
/// assert_eq!(schedule.convergence(10.0), Convergence::Running);
/// assert_eq!(schedule.convergence(0.1), Convergence::Settled);
/// ```
#[derive(Debug, Clone)]
pub struct CoolingSchedule {
    config: CoolingConfig,
    temperature: f64,
    iteration: usize,
}

impl CoolingSchedule {
    /// Creates a schedule at its initial temperature.
    ///
    /// # Errors
    ///
    /// Returns [`DriftError::InvalidParameter`] if the configuration would
    /// not terminate, see [`CoolingConfig::validate`].
    pub fn new(config: &CoolingConfig) -> Result<Self, DriftError> {
        config.validate()?;
        Ok(Self {
            config: config.clone(),
            temperature: config.initial_temperature(),
            iteration: 0,
        })
    }

    /// Returns the current temperature
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Returns how many times [`Self::cool`] has been called since the last reset
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Returns the schedule's configuration
    pub fn config(&self) -> &CoolingConfig {
        &self.config
    }

    /// Applies one decay step and returns the new temperature
    pub fn cool(&mut self) -> f64 {
        self.temperature *= self.config.decay();
        self.iteration += 1;
        trace!(iteration = self.iteration, temperature = self.temperature; "Cooled");
        self.temperature
    }

    /// Restores the initial temperature and clears the iteration count
    pub fn reset(&mut self) {
        self.temperature = self.config.initial_temperature();
        self.iteration = 0;
    }

    /// Checks the stopping conditions.
    ///
    /// Either condition alone stops the layout: a displacement below the move
    /// threshold reports [`Convergence::Settled`], otherwise a temperature
    /// below the floor reports [`Convergence::Frozen`].
    pub fn convergence(&self, max_displacement: f64) -> Convergence {
        if max_displacement < self.config.move_threshold() {
            Convergence::Settled
        } else if self.temperature < self.config.temperature_floor() {
            Convergence::Frozen
        } else {
            Convergence::Running
        }
    }

    /// Number of [`Self::cool`] calls needed, starting from the initial
    /// temperature, before the temperature falls below the floor.
    ///
    /// Uses the same repeated multiplication as [`Self::cool`], so the count
    /// matches what a driver observes exactly.
    pub fn steps_to_floor(&self) -> usize {
        let mut temperature = self.config.initial_temperature();
        let mut steps = 0;
        while temperature >= self.config.temperature_floor() {
            temperature *= self.config.decay();
            steps += 1;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn schedule() -> CoolingSchedule {
        CoolingSchedule::new(&CoolingConfig::default()).unwrap()
    }

    #[test]
    fn test_temperature_strictly_decreases() {
        let mut schedule = schedule();
        let mut previous = schedule.temperature();
        for _ in 0..200 {
            let next = schedule.cool();
            assert!(next < previous, "{next} is not below {previous}");
            assert!(next > 0.0);
            previous = next;
        }
        assert_eq!(schedule.iteration(), 200);
    }

    #[test]
    fn test_default_schedule_freezes_after_90_steps() {
        let mut schedule = schedule();
        assert_eq!(schedule.steps_to_floor(), 90);

        let mut steps = 0;
        while schedule.convergence(f64::MAX) == Convergence::Running {
            schedule.cool();
            steps += 1;
            assert!(steps <= 1000, "schedule did not terminate");
        }
        assert_eq!(steps, 90);
        assert_eq!(schedule.convergence(f64::MAX), Convergence::Frozen);
        assert!(schedule.temperature() < 1.0);
    }

    #[test]
    fn test_either_condition_stops() {
        let mut schedule = schedule();
        assert_eq!(schedule.convergence(0.49), Convergence::Settled);
        assert_eq!(schedule.convergence(0.5), Convergence::Running);

        for _ in 0..schedule.steps_to_floor() {
            schedule.cool();
        }
        assert_eq!(schedule.convergence(50.0), Convergence::Frozen);
        assert_eq!(schedule.convergence(0.1), Convergence::Settled);
        assert!(Convergence::Frozen.is_done());
        assert!(!Convergence::Running.is_done());
    }

    #[test]
    fn test_reset() {
        let mut schedule = schedule();
        schedule.cool();
        schedule.cool();
        schedule.reset();
        assert_eq!(schedule.temperature(), 100.0);
        assert_eq!(schedule.iteration(), 0);
    }

    #[test]
    fn test_alternate_schedule() {
        let config = CoolingConfig::new(10.0, 0.5, 1.0, 0.0);
        let mut schedule = CoolingSchedule::new(&config).unwrap();
        // 10 -> 5 -> 2.5 -> 1.25 -> 0.625
        assert_eq!(schedule.steps_to_floor(), 4);
        schedule.cool();
        assert_approx_eq!(f64, schedule.temperature(), 5.0);
        // A zero threshold never reports settled
        assert_eq!(schedule.convergence(0.0), Convergence::Running);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = CoolingConfig::new(100.0, 1.0, 1.0, 0.5);
        assert!(CoolingSchedule::new(&config).is_err());
    }

    #[test]
    fn test_convergence_display() {
        assert_eq!(Convergence::Settled.to_string(), "settled");
        assert_eq!(Convergence::Frozen.to_string(), "frozen");
    }
}

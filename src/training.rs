use crate::message::InfoMessage;
use crate::types::Reading;

/// Metres covered per step.
pub const LEN_STEP: f64 = 0.65;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_HOUR: f64 = 60.0;

/// Shared calculator for every workout kind.
///
/// `spent_calories` has no default: each workout kind must bring its own formula.
pub trait Training {
    fn name(&self) -> &'static str;

    fn reading(&self) -> &Reading;

    /// Distance covered by a single action, in metres.
    fn step_length(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in km.
    fn distance(&self) -> f64 {
        f64::from(self.reading().action) * self.step_length() / M_IN_KM
    }

    /// Mean speed in km/h. Zero duration yields a non-finite value.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.reading().duration
    }

    /// Kilocalories burned.
    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.name().to_string(),
            duration: self.reading().duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub reading: Reading,
}

impl Running {
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub const fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            reading: Reading {
                action,
                duration,
                weight,
            },
        }
    }
}

impl Training for Running {
    fn name(&self) -> &'static str {
        "Running"
    }

    fn reading(&self) -> &Reading {
        &self.reading
    }

    fn spent_calories(&self) -> f64 {
        let r = &self.reading;
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * r.weight
            / M_IN_KM
            * r.duration
            * MIN_IN_HOUR
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    pub reading: Reading,
    /// Centimetres.
    pub height: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    const KMH_IN_MSEC: f64 = 0.278;
    const CM_IN_M: f64 = 100.0;

    pub const fn new(action: u32, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            reading: Reading {
                action,
                duration,
                weight,
            },
            height,
        }
    }
}

impl Training for SportsWalking {
    fn name(&self) -> &'static str {
        "SportsWalking"
    }

    fn reading(&self) -> &Reading {
        &self.reading
    }

    fn spent_calories(&self) -> f64 {
        let r = &self.reading;
        // km/h -> m/s before squaring; height is divided in cm then scaled back.
        let speed_ms = self.mean_speed() * Self::KMH_IN_MSEC;
        (Self::CALORIES_WEIGHT_MULTIPLIER * r.weight
            + (speed_ms.powi(2) / self.height * Self::CM_IN_M)
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * r.weight)
            * r.duration
            * MIN_IN_HOUR
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub reading: Reading,
    /// Metres.
    pub length_pool: f64,
    pub count_pool: u32,
}

impl Swimming {
    pub const LEN_STEP: f64 = 1.38;
    const CALORIES_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub const fn new(
        action: u32,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u32,
    ) -> Self {
        Self {
            reading: Reading {
                action,
                duration,
                weight,
            },
            length_pool,
            count_pool,
        }
    }
}

impl Training for Swimming {
    fn name(&self) -> &'static str {
        "Swimming"
    }

    fn reading(&self) -> &Reading {
        &self.reading
    }

    fn step_length(&self) -> f64 {
        Self::LEN_STEP
    }

    /// Derived from pool laps, not strokes.
    fn mean_speed(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / M_IN_KM / self.reading.duration
    }

    fn spent_calories(&self) -> f64 {
        let r = &self.reading;
        (self.mean_speed() + Self::CALORIES_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * r.weight
            * r.duration
    }
}

/// Closed set of workout kinds produced by [`crate::package::read_package`].
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn inner(&self) -> &dyn Training {
        match self {
            Self::Running(t) => t,
            Self::SportsWalking(t) => t,
            Self::Swimming(t) => t,
        }
    }
}

impl Training for Workout {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn reading(&self) -> &Reading {
        self.inner().reading()
    }

    fn step_length(&self) -> f64 {
        self.inner().step_length()
    }

    fn distance(&self) -> f64 {
        self.inner().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.inner().mean_speed()
    }

    fn spent_calories(&self) -> f64 {
        self.inner().spent_calories()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn swimming_uses_pool_laps_for_speed() {
        let t = Swimming::new(720, 1.0, 80.0, 25.0, 40);
        assert!(close(t.step_length(), 1.38));
        assert!(close(t.distance(), 720.0 * 1.38 / 1000.0));
        assert!(close(t.mean_speed(), 1.0));
        assert!(close(t.spent_calories(), 336.0));
    }

    #[test]
    fn running_speed_is_distance_over_duration() {
        let t = Running::new(15000, 1.5, 75.0);
        assert!(close(t.step_length(), LEN_STEP));
        assert!(close(t.distance(), 9.75));
        assert!(close(t.mean_speed(), 9.75 / 1.5));
    }

    #[test]
    fn running_calories() {
        let t = Running::new(15000, 1.0, 75.0);
        assert!((t.spent_calories() - 797.805).abs() < 1e-6);
    }

    #[test]
    fn walking_calories() {
        let t = SportsWalking::new(9000, 1.0, 75.0, 180.0);
        assert!(close(t.distance(), 5.85));
        assert!(close(t.mean_speed(), 5.85));
        assert!((t.spent_calories() - 349.251_747_525).abs() < 1e-6);
    }

    #[test]
    fn workout_delegates_to_variant() {
        let w = Workout::Swimming(Swimming::new(720, 1.0, 80.0, 25.0, 40));
        assert_eq!(w.name(), "Swimming");
        assert!(close(w.step_length(), 1.38));
        assert!(close(w.mean_speed(), 1.0));
        assert!(close(w.spent_calories(), 336.0));
    }

    #[test]
    fn zero_duration_is_not_finite() {
        let t = Running::new(1000, 0.0, 70.0);
        assert!(t.mean_speed().is_infinite());
        assert!(!t.spent_calories().is_finite());

        let idle = Running::new(0, 0.0, 70.0);
        assert!(idle.mean_speed().is_nan());
    }

    #[test]
    fn zero_height_is_not_finite() {
        let t = SportsWalking::new(9000, 1.0, 75.0, 0.0);
        assert!(t.spent_calories().is_infinite());
    }
}

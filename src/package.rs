use crate::dlog;
use crate::errors::PackageError;
use crate::training::{Running, SportsWalking, Swimming, Workout};
use crate::types::Package;
use std::fmt;
use std::str::FromStr;

/// Workout codes understood by the sensor protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutCode {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutCode {
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
        }
    }

    /// Positional field names, in package order.
    pub const fn field_names(self) -> &'static [&'static str] {
        match self {
            Self::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
            Self::Running => &["action", "duration", "weight"],
            Self::SportsWalking => &["action", "duration", "weight", "height"],
        }
    }

    pub const fn arity(self) -> usize {
        self.field_names().len()
    }

    /// Build the workout from fields already checked against [`Self::arity`].
    fn construct(self, f: &[f64]) -> Result<Workout, PackageError> {
        let action = count_field(self, "action", f[0])?;
        let (duration, weight) = (f[1], f[2]);
        Ok(match self {
            Self::Running => Workout::Running(Running::new(action, duration, weight)),
            Self::SportsWalking => {
                Workout::SportsWalking(SportsWalking::new(action, duration, weight, f[3]))
            }
            Self::Swimming => {
                let count_pool = count_field(self, "count_pool", f[4])?;
                Workout::Swimming(Swimming::new(action, duration, weight, f[3], count_pool))
            }
        })
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutCode {
    type Err = PackageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| PackageError::UnknownWorkoutType(s.to_string()))
    }
}

fn count_field(code: WorkoutCode, field: &'static str, value: f64) -> Result<u32, PackageError> {
    let whole = value.is_finite() && value.fract() == 0.0;
    if !whole || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(PackageError::InvalidField {
            code: code.as_str(),
            field,
            value,
        });
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = value as u32;
    Ok(n)
}

/// Fields whose zero value makes the formulas divide by zero.
fn zero_divisors(code: WorkoutCode, fields: &[f64]) -> Vec<&'static str> {
    let divisors: &[usize] = match code {
        WorkoutCode::SportsWalking => &[1, 3],
        WorkoutCode::Running | WorkoutCode::Swimming => &[1],
    };
    divisors
        .iter()
        .filter(|&&i| fields[i] == 0.0)
        .map(|&i| code.field_names()[i])
        .collect()
}

/// Turn a raw sensor package into a workout.
///
/// Zero duration or height is accepted and later yields non-finite results.
pub fn read_package(code: &str, fields: &[f64]) -> Result<Workout, PackageError> {
    let code: WorkoutCode = code.parse()?;
    if fields.len() != code.arity() {
        return Err(PackageError::FieldCount {
            code: code.as_str(),
            expected: code.arity(),
            got: fields.len(),
        });
    }

    for field in zero_divisors(code, fields) {
        tracing::warn!(%code, field, "zero divisor; speed or calories will not be finite");
    }

    dlog!("read_package code={code} fields={fields:?}");
    code.construct(fields)
}

impl FromStr for Package {
    type Err = PackageError;

    /// Parses `CODE:f1,f2,...`, e.g. `RUN:15000,1,75`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: String| PackageError::Malformed {
            input: s.to_string(),
            reason,
        };

        let (code, rest) = s
            .split_once(':')
            .ok_or_else(|| malformed("expected CODE:f1,f2,...".to_string()))?;

        let fields = rest
            .split(',')
            .map(str::trim)
            .enumerate()
            .map(|(i, t)| {
                if t.is_empty() {
                    return Err(malformed(format!("field {} is empty", i + 1)));
                }
                t.parse::<f64>()
                    .map_err(|e| malformed(format!("field {t:?}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self(code.trim().to_string(), fields))
    }
}

/// Packages processed when none are supplied.
pub fn demo_packages() -> Vec<Package> {
    vec![
        Package("SWM".to_string(), vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package("RUN".to_string(), vec![15000.0, 1.0, 75.0]),
        Package("WLK".to_string(), vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

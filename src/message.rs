use crate::training::Training;
use serde::Serialize;

/// Summary of a finished workout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoMessage {
    pub training_type: String,
    /// Hours.
    pub duration: f64,
    /// Km.
    pub distance: f64,
    /// Km/h.
    pub speed: f64,
    pub calories: f64,
}

impl InfoMessage {
    pub fn get_message(&self) -> String {
        format!(
            "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }

    /// One-line JSON object. Non-finite values serialize as `null`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

pub fn render(training: &impl Training) -> String {
    training.show_training_info().get_message()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(duration: f64, distance: f64, speed: f64, calories: f64) -> InfoMessage {
        InfoMessage {
            training_type: "Running".to_string(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    #[test]
    fn always_three_decimals() {
        let m = msg(1.0, 12_345.678_9, 0.000_4, 0.000_6);
        assert_eq!(
            m.get_message(),
            "Training type: Running; Duration: 1.000 h.; Distance: 12345.679 km; \
             Avg speed: 0.000 km/h; Calories burned: 0.001."
        );
    }

    #[test]
    fn non_finite_values_are_rendered() {
        let m = msg(0.0, 1.0, f64::INFINITY, f64::NAN);
        let s = m.get_message();
        assert!(s.contains("Avg speed: inf km/h"), "{s}");
        assert!(s.contains("Calories burned: NaN."), "{s}");
    }

    #[test]
    fn json_has_all_fields() {
        let m = msg(1.0, 9.75, 9.75, 797.805);
        let v: serde_json::Value = serde_json::from_str(&m.to_json().unwrap()).unwrap();
        assert_eq!(v["training_type"], "Running");
        assert_eq!(v["distance"], 9.75);
        assert_eq!(v["calories"], 797.805);
    }
}

use serde::Deserialize;

/// Measurements every workout carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Steps or strokes.
    pub action: u32,
    /// Hours.
    pub duration: f64,
    /// Kilograms.
    pub weight: f64,
}

/// One raw package as delivered by the sensor: a workout code plus positional fields.
///
/// Deserializes from the `["SWM", [720, 1, 80, 25, 40]]` pair form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Package(pub String, pub Vec<f64>);

impl Package {
    pub fn code(&self) -> &str {
        &self.0
    }

    pub fn fields(&self) -> &[f64] {
        &self.1
    }
}

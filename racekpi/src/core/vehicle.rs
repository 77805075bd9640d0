use serde::Deserialize;

/// * `model` - Car model, e.g. Red Bull F1
/// * `top_speed` - (km/h) Maximum velocity of the car
#[derive(Debug, Deserialize, Clone)]
pub struct VehicleRecord {
    model: String,
    top_speed: f64,
}

impl VehicleRecord {
    pub fn new(model: &str, top_speed: f64) -> VehicleRecord {
        VehicleRecord {
            model: model.to_owned(),
            top_speed,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn top_speed(&self) -> f64 {
        self.top_speed
    }
}

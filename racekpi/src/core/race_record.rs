use serde::Deserialize;

/// * `circuit` - Circuit name, e.g. Interlagos
/// * `lap_count` - Total number of laps in the race
/// * `total_time` - (s) Total race time
/// * `lap_times` - (s) Recorded lap times, should contain `lap_count` entries (not enforced)
/// * `max_lateral_g` - (G) Peak lateral acceleration
/// * `max_longitudinal_g` - (G) Peak longitudinal acceleration
/// * `coasting_time` - (s) Time spent with neither throttle nor brake applied
///
/// A RaceRecord is never modified after construction. KPIs share it via `Rc<RaceRecord>`.
#[derive(Debug, Deserialize, Clone)]
pub struct RaceRecord {
    circuit: String,
    lap_count: u32,
    total_time: f64,
    lap_times: Vec<f64>,
    max_lateral_g: f64,
    max_longitudinal_g: f64,
    coasting_time: f64,
}

impl RaceRecord {
    pub fn new(
        circuit: &str,
        lap_count: u32,
        total_time: f64,
        lap_times: Vec<f64>,
        max_lateral_g: f64,
        max_longitudinal_g: f64,
        coasting_time: f64,
    ) -> RaceRecord {
        RaceRecord {
            circuit: circuit.to_owned(),
            lap_count,
            total_time,
            lap_times,
            max_lateral_g,
            max_longitudinal_g,
            coasting_time,
        }
    }

    pub fn circuit(&self) -> &str {
        &self.circuit
    }

    pub fn lap_count(&self) -> u32 {
        self.lap_count
    }

    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    pub fn lap_times(&self) -> &[f64] {
        &self.lap_times
    }

    pub fn max_lateral_g(&self) -> f64 {
        self.max_lateral_g
    }

    pub fn max_longitudinal_g(&self) -> f64 {
        self.max_longitudinal_g
    }

    pub fn coasting_time(&self) -> f64 {
        self.coasting_time
    }
}

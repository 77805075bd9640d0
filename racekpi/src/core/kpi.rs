use crate::core::race_record::RaceRecord;
use helpers::general::min;
use std::error::Error;
use std::fmt;
use std::rc::Rc;

/// KpiError is returned if a KPI cannot be derived from the race record it refers to.
#[derive(Debug, Clone, PartialEq)]
pub enum KpiError {
    InvalidRaceConfiguration,
    NoLapData,
}

impl fmt::Display for KpiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KpiError::InvalidRaceConfiguration => {
                write!(f, "invalid race configuration: lap count is zero")
            }
            KpiError::NoLapData => write!(f, "no lap data: lap times are empty"),
        }
    }
}

impl Error for KpiError {}

/// Kpi is implemented by every metric that can be derived from a single race record.
/// `evaluate` must not have side effects.
pub trait Kpi {
    fn evaluate(&self) -> Result<f64, KpiError>;

    /// Label used for console output and diagnostics.
    fn name(&self) -> &'static str;

    fn unit(&self) -> &'static str;
}

/// Average time per lap, i.e. total race time divided by the number of laps.
#[derive(Debug, Clone)]
pub struct AverageSpeed {
    race: Rc<RaceRecord>,
}

impl AverageSpeed {
    pub fn new(race: Rc<RaceRecord>) -> AverageSpeed {
        AverageSpeed { race }
    }
}

impl Kpi for AverageSpeed {
    fn evaluate(&self) -> Result<f64, KpiError> {
        if self.race.lap_count() == 0 {
            return Err(KpiError::InvalidRaceConfiguration);
        }
        Ok(self.race.total_time() / self.race.lap_count() as f64)
    }

    fn name(&self) -> &'static str {
        "Velocidade Média"
    }

    fn unit(&self) -> &'static str {
        "s/volta"
    }
}

#[derive(Debug, Clone)]
pub struct MaxLateralG {
    race: Rc<RaceRecord>,
}

impl MaxLateralG {
    pub fn new(race: Rc<RaceRecord>) -> MaxLateralG {
        MaxLateralG { race }
    }
}

impl Kpi for MaxLateralG {
    fn evaluate(&self) -> Result<f64, KpiError> {
        Ok(self.race.max_lateral_g())
    }

    fn name(&self) -> &'static str {
        "Máximo G Lateral"
    }

    fn unit(&self) -> &'static str {
        "G"
    }
}

#[derive(Debug, Clone)]
pub struct MaxLongitudinalG {
    race: Rc<RaceRecord>,
}

impl MaxLongitudinalG {
    pub fn new(race: Rc<RaceRecord>) -> MaxLongitudinalG {
        MaxLongitudinalG { race }
    }
}

impl Kpi for MaxLongitudinalG {
    fn evaluate(&self) -> Result<f64, KpiError> {
        Ok(self.race.max_longitudinal_g())
    }

    fn name(&self) -> &'static str {
        "Máximo G Longitudinal"
    }

    fn unit(&self) -> &'static str {
        "G"
    }
}

/// Minimum of the recorded lap times.
#[derive(Debug, Clone)]
pub struct FastestLap {
    race: Rc<RaceRecord>,
}

impl FastestLap {
    pub fn new(race: Rc<RaceRecord>) -> FastestLap {
        FastestLap { race }
    }
}

impl Kpi for FastestLap {
    fn evaluate(&self) -> Result<f64, KpiError> {
        min(self.race.lap_times()).ok_or(KpiError::NoLapData)
    }

    fn name(&self) -> &'static str {
        "Tempo de Volta Mais Rápida"
    }

    fn unit(&self) -> &'static str {
        "segundos"
    }
}

#[derive(Debug, Clone)]
pub struct CoastingTime {
    race: Rc<RaceRecord>,
}

impl CoastingTime {
    pub fn new(race: Rc<RaceRecord>) -> CoastingTime {
        CoastingTime { race }
    }
}

impl Kpi for CoastingTime {
    fn evaluate(&self) -> Result<f64, KpiError> {
        Ok(self.race.coasting_time())
    }

    fn name(&self) -> &'static str {
        "Tempo em Coasting"
    }

    fn unit(&self) -> &'static str {
        "segundos"
    }
}

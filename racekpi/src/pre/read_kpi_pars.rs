use crate::core::driver::DriverRecord;
use crate::core::race_record::RaceRecord;
use crate::core::vehicle::VehicleRecord;
use anyhow::Context;
use serde::Deserialize;
use std::fs::OpenOptions;
use std::path::Path;

/// KpiPars is used to store the records the KPIs are calculated for.
#[derive(Debug, Deserialize, Clone)]
pub struct KpiPars {
    pub driver: DriverRecord,
    pub vehicle: VehicleRecord,
    pub race: RaceRecord,
}

/// sample_kpi_pars returns the built-in sample race that is used if no parameter file is given.
pub fn sample_kpi_pars() -> KpiPars {
    KpiPars {
        driver: DriverRecord::new("Max Verstappen", 27),
        vehicle: VehicleRecord::new("Red Bull F1", 340.0),
        race: RaceRecord::new(
            "Interlagos",
            50,
            3600.0,
            vec![72.1, 73.2, 71.9, 72.0, 73.5],
            1.8,
            1.2,
            0.0,
        ),
    }
}

/// read_kpi_pars reads the JSON file and decodes the JSON string into the parameters struct.
pub fn read_kpi_pars(filepath: &Path) -> anyhow::Result<KpiPars> {
    // open file
    let fh = OpenOptions::new()
        .read(true)
        .open(filepath)
        .context(format!(
            "Failed to open parameter file {}!",
            filepath.display()
        ))?;

    // read and parse parameter file content
    let pars = serde_json::from_reader(&fh).context(format!(
        "Failed to parse parameter file {}!",
        filepath.display()
    ))?;
    Ok(pars)
}

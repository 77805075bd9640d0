use crate::pre::read_kpi_pars::KpiPars;
use anyhow::Context;
use helpers::general::InputValueError;
use log::warn;

/// check_kpi_pars assures that the inserted parameters are within reasonable limits and raises an
/// error if not. Zero laps and missing lap times are accepted, they are reported by the affected
/// KPIs.
pub fn check_kpi_pars(kpi_pars: &KpiPars) -> anyhow::Result<()> {
    // VEHICLE -------------------------------------------------------------------------------------
    let top_speed = kpi_pars.vehicle.top_speed();
    if !top_speed.is_finite() || top_speed <= 0.0 {
        return Err(InputValueError).context(format!(
            "top_speed is {}km/h, but must be a positive number!",
            top_speed
        ));
    }

    // RACE ----------------------------------------------------------------------------------------
    let race = &kpi_pars.race;

    if !race.total_time().is_finite() || race.total_time() <= 0.0 {
        return Err(InputValueError).context(format!(
            "total_time is {}s, but must be a positive number!",
            race.total_time()
        ));
    }

    if let Some((i, lap_time)) = race
        .lap_times()
        .iter()
        .enumerate()
        .find(|&(_, &t)| !t.is_finite() || t <= 0.0)
    {
        return Err(InputValueError).context(format!(
            "The {}. lap time is {}s, but must be a positive number!",
            i + 1,
            lap_time
        ));
    }

    if !race.max_lateral_g().is_finite() || !race.max_longitudinal_g().is_finite() {
        return Err(InputValueError)
            .context("max_lateral_g and max_longitudinal_g must be finite numbers!");
    }

    if !race.coasting_time().is_finite() || race.coasting_time() < 0.0 {
        return Err(InputValueError).context(format!(
            "coasting_time is {}s, but must not be negative!",
            race.coasting_time()
        ));
    }

    if race.lap_times().len() != race.lap_count() as usize {
        warn!(
            "Race at {} has {} laps, but {} lap times were recorded",
            race.circuit(),
            race.lap_count(),
            race.lap_times().len()
        );
    }

    Ok(())
}

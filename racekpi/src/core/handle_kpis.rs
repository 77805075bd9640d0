use crate::core::kpi::{AverageSpeed, CoastingTime, FastestLap, MaxLateralG, MaxLongitudinalG};
use crate::core::kpi_registry::KpiRegistry;
use crate::core::race_record::RaceRecord;
use crate::pre::read_kpi_pars::KpiPars;
use helpers::general::argmin;
use log::debug;
use std::rc::Rc;

/// register_standard_kpis creates the standard set of KPIs for the inserted race record. The
/// registration order determines the numbering in the report.
pub fn register_standard_kpis(race: &Rc<RaceRecord>) -> KpiRegistry {
    let mut registry = KpiRegistry::new();

    registry.register(Box::new(AverageSpeed::new(Rc::clone(race))));
    registry.register(Box::new(MaxLateralG::new(Rc::clone(race))));
    registry.register(Box::new(MaxLongitudinalG::new(Rc::clone(race))));
    registry.register(Box::new(FastestLap::new(Rc::clone(race))));
    registry.register(Box::new(CoastingTime::new(Rc::clone(race))));

    registry
}

/// handle_kpis creates the shared race record on the basis of the inserted parameters and returns
/// the registry holding all KPIs that refer to it.
pub fn handle_kpis(kpi_pars: &KpiPars) -> KpiRegistry {
    let race = Rc::new(kpi_pars.race.to_owned());

    if let Some(idx) = argmin(race.lap_times()) {
        debug!(
            "Fastest lap is entry {} of {} recorded lap times",
            idx + 1,
            race.lap_times().len()
        );
    }

    register_standard_kpis(&race)
}

use crate::core::kpi::{Kpi, KpiError};
use log::{debug, error};
use std::fmt::Write;

/// KpiOutcome contains the result of a single KPI evaluation.
/// * `index` - Position of the KPI in the registry (starting at 1)
/// * `name` - Label of the KPI
/// * `unit` - Unit of the KPI value
/// * `value` - Calculated value or the reason why it could not be calculated
#[derive(Debug, Clone, PartialEq)]
pub struct KpiOutcome {
    pub index: usize,
    pub name: &'static str,
    pub unit: &'static str,
    pub value: Result<f64, KpiError>,
}

/// KpiRegistry owns the registered KPIs and evaluates them in registration order.
#[derive(Default)]
pub struct KpiRegistry {
    kpis: Vec<Box<dyn Kpi>>,
}

impl KpiRegistry {
    pub fn new() -> KpiRegistry {
        KpiRegistry { kpis: Vec::new() }
    }

    /// register appends the KPI to the registry. Duplicates are allowed.
    pub fn register(&mut self, kpi: Box<dyn Kpi>) {
        self.kpis.push(kpi);
    }

    pub fn len(&self) -> usize {
        self.kpis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kpis.is_empty()
    }

    /// evaluate_all evaluates every registered KPI. A failing KPI does not stop the evaluation of
    /// the remaining ones.
    pub fn evaluate_all(&self) -> Vec<KpiOutcome> {
        self.kpis
            .iter()
            .enumerate()
            .map(|(i, kpi)| KpiOutcome {
                index: i + 1,
                name: kpi.name(),
                unit: kpi.unit(),
                value: kpi.evaluate(),
            })
            .collect()
    }

    /// report returns one line per registered KPI.
    pub fn report(&self) -> String {
        format_outcomes(&self.evaluate_all())
    }

    /// print_kpis prints the report to the console output and logs the failed KPIs.
    pub fn print_kpis(&self) {
        let outcomes = self.evaluate_all();

        for outcome in outcomes.iter() {
            match &outcome.value {
                Ok(value) => debug!(
                    "{}. {}: {} {}",
                    outcome.index, outcome.name, value, outcome.unit
                ),
                Err(e) => error!("KPI {} ({}) failed: {}", outcome.index, outcome.name, e),
            }
        }

        print!("{}", format_outcomes(&outcomes));
    }
}

fn format_outcomes(outcomes: &[KpiOutcome]) -> String {
    let mut tmp_string_report = String::new();

    for outcome in outcomes.iter() {
        match &outcome.value {
            Ok(value) => {
                writeln!(
                    &mut tmp_string_report,
                    "KPI {} calculado: {}",
                    outcome.index, value
                )
                .unwrap();
            }
            Err(e) => {
                writeln!(
                    &mut tmp_string_report,
                    "KPI {} não calculado ({}): {}",
                    outcome.index, outcome.name, e
                )
                .unwrap();
            }
        }
    }

    tmp_string_report
}

pub mod core {
    pub mod driver;
    pub mod handle_kpis;
    pub mod kpi;
    pub mod kpi_registry;
    pub mod race_record;
    pub mod vehicle;
}

pub mod post {
    pub mod race_info;
}

pub mod pre {
    pub mod check_kpi_pars;
    pub mod kpi_opts;
    pub mod read_kpi_pars;
}

#[cfg(test)]
mod test_data {
    use crate::core::race_record::RaceRecord;
    use std::rc::Rc;

    pub fn interlagos() -> Rc<RaceRecord> {
        Rc::new(RaceRecord::new(
            "Interlagos",
            50,
            3600.0,
            vec![72.1, 73.2, 71.9, 72.0, 73.5],
            1.8,
            1.2,
            0.0,
        ))
    }

    pub fn race_with(lap_count: u32, total_time: f64, lap_times: Vec<f64>) -> Rc<RaceRecord> {
        Rc::new(RaceRecord::new(
            "Monza", lap_count, total_time, lap_times, 2.1, -0.4, 3.5,
        ))
    }
}

#[cfg(test)]
mod kpi_tests {
    use crate::core::kpi::{
        AverageSpeed, CoastingTime, FastestLap, Kpi, KpiError, MaxLateralG, MaxLongitudinalG,
    };
    use crate::core::race_record::RaceRecord;
    use crate::test_data::{interlagos, race_with};
    use approx::assert_ulps_eq;
    use std::rc::Rc;

    #[test]
    fn test_interlagos_kpis() {
        let race = interlagos();
        assert_ulps_eq!(AverageSpeed::new(Rc::clone(&race)).evaluate().unwrap(), 72.0);
        assert_ulps_eq!(MaxLateralG::new(Rc::clone(&race)).evaluate().unwrap(), 1.8);
        assert_ulps_eq!(MaxLongitudinalG::new(Rc::clone(&race)).evaluate().unwrap(), 1.2);
        assert_ulps_eq!(FastestLap::new(Rc::clone(&race)).evaluate().unwrap(), 71.9);
        assert_ulps_eq!(CoastingTime::new(Rc::clone(&race)).evaluate().unwrap(), 0.0);
    }

    #[test]
    fn test_average_speed() {
        let race = race_with(3, 250.5, vec![83.0, 84.0, 83.5]);
        assert_ulps_eq!(AverageSpeed::new(race).evaluate().unwrap(), 250.5 / 3.0);
    }
    #[test]
    fn test_average_speed_zero_laps() {
        let race = race_with(0, 3600.0, vec![72.1]);
        assert_eq!(
            AverageSpeed::new(race).evaluate(),
            Err(KpiError::InvalidRaceConfiguration)
        );
    }

    #[test]
    fn test_fastest_lap_order_invariant() {
        let laps = vec![72.1, 73.2, 71.9, 72.0, 73.5];
        let mut reversed = laps.clone();
        reversed.reverse();
        let mut sorted = laps.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

        for lap_times in vec![laps, reversed, sorted] {
            let race = race_with(5, 362.7, lap_times);
            assert_ulps_eq!(FastestLap::new(race).evaluate().unwrap(), 71.9);
        }
    }
    #[test]
    fn test_fastest_lap_no_lap_data() {
        let race = race_with(50, 3600.0, vec![]);
        assert_eq!(FastestLap::new(race).evaluate(), Err(KpiError::NoLapData));
    }

    #[test]
    fn test_passthrough_negative_and_zero() {
        let race = Rc::new(RaceRecord::new(
            "Spa",
            44,
            5000.0,
            vec![105.0],
            -0.5,
            0.0,
            -1.25,
        ));
        assert_ulps_eq!(MaxLateralG::new(Rc::clone(&race)).evaluate().unwrap(), -0.5);
        assert_ulps_eq!(MaxLongitudinalG::new(Rc::clone(&race)).evaluate().unwrap(), 0.0);
        assert_ulps_eq!(CoastingTime::new(Rc::clone(&race)).evaluate().unwrap(), -1.25);
    }

    #[test]
    fn test_evaluate_does_not_modify_record() {
        let race = interlagos();
        let kpi = FastestLap::new(Rc::clone(&race));
        assert_eq!(kpi.evaluate(), kpi.evaluate());
        assert_eq!(race.lap_times(), &[72.1, 73.2, 71.9, 72.0, 73.5]);
    }

    #[test]
    fn test_kpi_error_display() {
        assert_eq!(
            KpiError::InvalidRaceConfiguration.to_string(),
            "invalid race configuration: lap count is zero"
        );
        assert_eq!(
            KpiError::NoLapData.to_string(),
            "no lap data: lap times are empty"
        );
    }
}

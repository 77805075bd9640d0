use crate::core::driver::DriverRecord;
use crate::core::race_record::RaceRecord;
use crate::core::vehicle::VehicleRecord;
use std::fmt::Write;

/// race_info returns the descriptive header containing driver, car, and race information.
pub fn race_info(driver: &DriverRecord, vehicle: &VehicleRecord, race: &RaceRecord) -> String {
    let mut tmp_string_info = String::from("=== Informações da Corrida ===\n");

    writeln!(
        &mut tmp_string_info,
        "Piloto: {}, Idade: {}",
        driver.name(),
        driver.age()
    )
    .unwrap();
    writeln!(
        &mut tmp_string_info,
        "Carro: {}, Velocidade Máxima: {} km/h",
        vehicle.model(),
        vehicle.top_speed()
    )
    .unwrap();
    writeln!(
        &mut tmp_string_info,
        "Circuito: {}, Voltas: {}, Tempo Total: {} segundos",
        race.circuit(),
        race.lap_count(),
        race.total_time()
    )
    .unwrap();

    tmp_string_info
}

/// print_race_info prints the header followed by an empty line to the console output.
pub fn print_race_info(driver: &DriverRecord, vehicle: &VehicleRecord, race: &RaceRecord) {
    println!("{}", race_info(driver, vehicle, race));
}

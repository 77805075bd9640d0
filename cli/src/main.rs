use clap::Parser;
use log::info;
use racekpi::core::handle_kpis::handle_kpis;
use racekpi::post::race_info::print_race_info;
use racekpi::pre::check_kpi_pars::check_kpi_pars;
use racekpi::pre::kpi_opts::KpiOpts;
use racekpi::pre::read_kpi_pars::{read_kpi_pars, sample_kpi_pars};

fn main() -> anyhow::Result<()> {
    // PRE-PROCESSING ------------------------------------------------------------------------------
    // get options from the command line arguments and set up logging
    let kpi_opts: KpiOpts = KpiOpts::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if kpi_opts.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .init();

    // read parameters (use the sample race if no parameter file was inserted) and check them
    let kpi_pars = match &kpi_opts.parfile_path {
        Some(parfile_path) => {
            info!("Reading parameter file {}", parfile_path.display());
            read_kpi_pars(parfile_path.as_path())?
        }
        None => sample_kpi_pars(),
    };

    check_kpi_pars(&kpi_pars)?;

    // EXECUTION -----------------------------------------------------------------------------------
    let registry = handle_kpis(&kpi_pars);

    info!(
        "Calculating {} KPIs for {}",
        registry.len(),
        kpi_pars.race.circuit()
    );

    // POST-PROCESSING -----------------------------------------------------------------------------
    print_race_info(&kpi_pars.driver, &kpi_pars.vehicle, &kpi_pars.race);

    println!("=== KPIs ===");
    registry.print_kpis();

    Ok(())
}

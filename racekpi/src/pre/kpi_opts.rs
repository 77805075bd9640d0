use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[clap(
    version = "0.1.0",
    author = "Alexander Heilmeier <alexander.heilmeier@tum.de>",
    name = "RACE-KPI",
    about = "Calculates key performance indicators of a race record"
)]
pub struct KpiOpts {
    // FLAGS ---------------------------------------------------------------------------------------
    /// Activate debug logging (additionally lists every KPI with its label and unit)
    #[clap(short, long)]
    pub debug: bool,

    // OPTIONS -------------------------------------------------------------------------------------
    /// Set path to a JSON parameter file (the built-in sample race is used if not set)
    #[clap(short, long, value_parser)]
    pub parfile_path: Option<PathBuf>,
}

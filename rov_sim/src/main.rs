//! Rover simulation executable entry point.
//!
//! # Architecture
//!
//! The execution consists of:
//!
//!     - Initialise the session and logging
//!     - Load the simulation parameters (map, initial pose, command batches)
//!     - For each command batch:
//!         - Place a new rover at the initial pose
//!         - Send the batch and report where the rover ended up
//!         - Save the batch report into the session directory

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{Report, eyre::WrapErr};
use log::{info, warn};
use structopt::StructOpt;

// Internal
use rov_lib::{
    params::SimParams,
    report::{BatchOutcome, BatchReport},
    rover_ctrl::LogSink,
};
use util::{
    logger::{logger_init, LevelFilter},
    session::Session,
};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Command line options.
#[derive(Debug, StructOpt)]
#[structopt(name = "rov_sim", about = "Drive a simulated rover over a wrap-around grid")]
struct Opt {
    /// Parameter file, relative to the `params` directory of the software
    /// root (`ROV_SIM_ROOT` or the current directory).
    #[structopt(short, long, default_value = "rov_sim.toml")]
    params: String,

    /// Log every rotation and move the rover makes.
    #[structopt(short, long)]
    debug: bool,

    /// Minimum log level, one of info, debug or trace.
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {
    color_eyre::install()?;

    let opt = Opt::from_args();

    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session = Session::new(
        "rov_sim",
        "sessions"
    ).wrap_err("Failed to create the session")?;

    // The rover's debug trace is logged at debug level, so make sure it's
    // visible when requested.
    let level = if opt.debug && opt.log_level < LevelFilter::Debug {
        LevelFilter::Debug
    } else {
        opt.log_level
    };

    // Initialise logger
    logger_init(level, &session)
        .wrap_err("Failed to initialise logging")?;

    info!("Rover Simulation Executable\n");
    info!("Session directory: {:?}\n", session.session_root);

    // ---- LOAD PARAMETERS ----

    let params: SimParams = util::params::load(&opt.params)
        .wrap_err_with(|| format!("Could not load simulation params from {}", opt.params))?;

    info!("Using map:\n{}", params.map);
    info!(
        "Initial position: [{}, {}, {}]",
        params.initial_row,
        params.initial_col,
        params.initial_heading
    );

    // ---- RUN BATCHES ----

    let mut num_completed = 0;

    for (i, commands) in params.batches.iter().enumerate() {
        let report = BatchReport::run(i, &params, commands, opt.debug, LogSink)
            .wrap_err("Could not place the rover at its initial position")?;

        match report.outcome {
            BatchOutcome::Completed => num_completed += 1,
            _ => warn!("Batch {} did not complete: {:?}", i, report.outcome),
        }

        session
            .save(format!("reports/batch_{}.json", i), &report)
            .wrap_err("Could not save the batch report")?;
    }

    info!(
        "{} of {} batches completed",
        num_completed,
        params.batches.len()
    );

    Ok(())
}

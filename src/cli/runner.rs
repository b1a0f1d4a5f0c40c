use std::process::ExitCode;

use chrono::{DateTime, Local};
use clap::CommandFactory;
use clap::error::ErrorKind;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use bibsnet::{
    PredictCommand, PredictorDefaults, RunConfiguration, RunOutcome, RunReport, prepare_run,
    run_prediction,
};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Print a clap-formatted usage error and exit with clap's usage status.
fn usage_error(err: AppError) -> ! {
    CliArgs::command()
        .error(ErrorKind::ValueValidation, err)
        .exit()
}

fn configure(args: &CliArgs) -> Result<RunConfiguration, AppError> {
    let defaults = PredictorDefaults::from_current_exe().map_err(AppError::Defaults)?;
    let executable = args.nnunet.clone().unwrap_or(defaults.executable);
    let task = args.task.unwrap_or(defaults.task);
    let model = args.model.clone().unwrap_or(defaults.model);

    Ok(prepare_run(&args.input, &args.output, &executable, task, &model)?)
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

pub fn run(args: CliArgs, started: DateTime<Local>) -> ExitCode {
    if args.log {
        init_logging();
    }

    let config = match configure(&args) {
        Ok(config) => config,
        Err(e) if e.is_usage() => usage_error(e),
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.dry_run {
        let command = PredictCommand::from_config(&config);
        println!("{}", command.display());
        match serde_json::to_string_pretty(&config) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", bibsnet::Error::from(e));
                return ExitCode::FAILURE;
            }
        }
        info!("Dry run: predictor not started");
        return ExitCode::SUCCESS;
    }

    let outcome = match run_prediction(&config) {
        Ok(exit) => RunOutcome::from(exit),
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            RunOutcome::Crashed { code: 1 }
        }
    };

    let report = RunReport::since(outcome, started);
    match outcome {
        RunOutcome::Succeeded => info!("Predictor finished"),
        RunOutcome::Crashed { code } => error!("Predictor failed with exit code {}", code),
    }
    println!("{}", report);
    exit_code(report.exit_code())
}

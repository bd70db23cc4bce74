#[macro_use]
extern crate log;

use log::LevelFilter;
use std::error::Error;
use std::{fs, path::PathBuf, process::exit};
use structopt::StructOpt;

use salvo::configuration::{
    command_line::Opt,
    record::ExecutionRecord,
    settings::Settings,
};
use salvo::report::{render::Renderer, summary::summarize};

fn main() {
    let options = Opt::from_args();

    if let Err(e) = init_logging(options.log_level(), &options.log_output_file) {
        eprintln!("Failed to initialize logging {}", e);
        exit(2);
    }

    if let Err(e) = run(options) {
        error!("Failed to generate report {}", e);
        exit(1);
    }
}

fn run(options: Opt) -> Result<(), Box<dyn Error>> {
    let settings = Settings::load(options.settings.as_deref())?;
    debug!("Initiated settings {:#?}", settings);

    let record = ExecutionRecord::from_path(&options.record)?;
    info!(
        "Summarizing {} suites from {}",
        record.suites.len(),
        options.record.display()
    );
    let summaries = record
        .suites
        .iter()
        .map(|suite| summarize(suite, &settings, &options.groups))
        .collect::<Result<Vec<_>, _>>()?;

    let report = Renderer::new(&settings)?.render(&settings.title, &summaries)?;
    match &options.output {
        Some(path) => {
            fs::write(path, report)?;
            info!("Report written to {}", path.display());
        }
        None => print!("{}", report),
    }
    Ok(())
}

fn init_logging(level: LevelFilter, output: &Option<PathBuf>) -> Result<(), fern::InitError> {
    let mut dispatcher = fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}:{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record
                    .line()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "".to_owned()),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr());

    if let Some(log_file) = output {
        dispatcher = dispatcher.chain(fern::log_file(log_file)?)
    }
    dispatcher.apply()?;
    info!("Logging level {} enabled", level);
    Ok(())
}

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use sncalc::calculate;
use sncalc::cli::Cli;
use sncalc::output::render;
use std::error::Error;
use std::path::Path;

const LOG_CONFIG: &str = "log4rs.yml";

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    if let Err(e) = init_logging() {
        eprintln!("Error initializing log4rs: {e}");
    }
    log::info!("#Start main()");

    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = Cli::parse_args().into_config()?;
    let result = calculate(&config.address, config.prefix)?;
    print!("{}", render(&result, config.format, config.color)?);
    Ok(())
}

/// Load `log4rs.yml` when present, otherwise log warnings and errors to stderr.
fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG).exists() {
        log4rs::init_file(LOG_CONFIG, Default::default())?;
        return Ok(());
    }
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}

use std::fs;
use std::process;

use clap::{ArgAction, Parser};
use tracing::Level;

use microdata::core::{
    extract_microdata_from_target, print_error_message, print_info_message, MicrodataOptions,
    MicrodataResult,
};
use microdata::env::EnvConfig;

#[derive(Parser, Debug)]
#[command(name = "microdata")]
#[command(version)]
#[command(about = "Extracts HTML microdata items as JSON", long_about = None)]
struct Cli {
    /// HTML file to read, or `-` for stdin
    #[arg(value_name = "TARGET")]
    target: Option<String>,

    /// Base URL for relative URL properties [env: MICRODATA_BASE_URL]
    #[arg(short = 'b', long, value_name = "URL")]
    base_url: Option<String>,

    /// Character encoding of the input
    #[arg(short = 'e', long, value_name = "LABEL")]
    encoding: Option<String>,

    /// Only output items carrying this type (repeatable)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    types: Vec<String>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Write the JSON to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Suppress log output
    #[arg(short, long)]
    silent: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Ignore `<base href>` when resolving relative URLs
    #[arg(long)]
    no_base_element: bool,
}

impl Cli {
    fn options(&self, config: &EnvConfig) -> MicrodataOptions {
        let mut options = MicrodataOptions::from(config);
        if self.base_url.is_some() {
            options.base_url = self.base_url.clone();
        }
        options.encoding = self.encoding.clone();
        options.types = self.types.clone();
        options.pretty = self.pretty;
        options.use_base_element = !self.no_base_element;
        options
    }

    fn log_level(&self, config: &EnvConfig) -> Level {
        match self.verbose {
            // EnvConfig has already validated the name
            0 => config.log_level.parse().unwrap_or(Level::WARN),
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn init_logging(cli: &Cli, config: &EnvConfig) {
    if cli.silent {
        return;
    }

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cli.log_level(config))
        .with_ansi(!config.no_color)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> MicrodataResult<()> {
    let config = EnvConfig::from_env()?;
    init_logging(cli, &config);

    let options = cli.options(&config);
    let microdata = extract_microdata_from_target(cli.target.as_deref(), &options)?;
    let json = microdata.to_json(options.pretty)?;

    match &cli.output {
        Some(path) if path != "-" => {
            fs::write(path, format!("{json}\n"))?;
            tracing::info!("Wrote {} item(s) to {path}", microdata.items.len());
        }
        _ => print_info_message(&json),
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        print_error_message(&format!("Error: {error}"));
        process::exit(1);
    }
}

//! binnet: filter waste containers or list the stations they form.
//!
//! Reads a containers file and a paths file, then prints either the
//! containers passing the filter together with their direct neighbors,
//! or the stations obtained by merging containers at the same location.
#![allow(clippy::uninlined_format_args)]

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use binnet_algorithms::{
    filtered_listing, station_listing, StationClustering, StationConfig, StationLookup,
};
use binnet_core::{CapacityRange, FilterCriteria};
use binnet_io::{Dataset, LoadOptions, ReportWriter};
use clap::{ArgAction, Parser, ValueEnum};
use thiserror::Error;

/// Result type for CLI operations.
type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Load(#[from] binnet_io::Error),

    #[error("invalid filter: {0}")]
    Filter(#[from] binnet_core::Error),
}

/// Public access selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Access {
    /// Public containers only
    #[value(name = "Y", alias = "y")]
    Public,
    /// Non-public containers only
    #[value(name = "N", alias = "n")]
    Private,
}

/// Waste container listings and station graphs.
#[derive(Parser, Debug)]
#[command(name = "binnet")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Waste type codes to keep: A plastics/aluminium, P paper,
    /// B biodegradable, G clear glass, C colored glass, T textile
    #[arg(
        short = 't',
        long = "types",
        value_name = "CODES",
        conflicts_with_all = ["stations", "describe"]
    )]
    types: Option<String>,

    /// Inclusive capacity range, 0-0 for any
    #[arg(
        short = 'c',
        long,
        value_name = "MIN-MAX",
        allow_hyphen_values = true,
        conflicts_with_all = ["stations", "describe"]
    )]
    capacity: Option<CapacityRange>,

    /// Keep only public (Y) or non-public (N) containers
    #[arg(short = 'p', long, value_enum, conflicts_with_all = ["stations", "describe"])]
    public: Option<Access>,

    /// List stations instead of containers
    #[arg(short = 's', long)]
    stations: bool,

    /// Link stations through any member container, not only the founder
    #[arg(long, requires = "stations")]
    link_members: bool,

    /// Print every field of one container and exit
    #[arg(long, value_name = "ID", conflicts_with = "stations")]
    describe: Option<String>,

    /// Field delimiter of both input files, a single ASCII character
    #[arg(short = 'd', long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Containers file: id,x,y,type,capacity,name,street,number,public
    containers: PathBuf,

    /// Paths file: id_a,id_b,distance
    paths: PathBuf,
}

impl Cli {
    fn criteria(&self) -> Result<FilterCriteria> {
        let mut criteria = match &self.types {
            Some(codes) => FilterCriteria::from_codes(codes)?,
            None => FilterCriteria::new(),
        };
        if let Some(capacity) = self.capacity {
            criteria = criteria.with_capacity(capacity);
        }
        if let Some(access) = self.public {
            criteria = criteria.with_public(access == Access::Public);
        }
        Ok(criteria)
    }

    fn station_config(&self) -> StationConfig {
        let lookup = if self.link_members {
            StationLookup::AnyMember
        } else {
            StationLookup::Founding
        };
        StationConfig::new().with_lookup(lookup)
    }
}

fn parse_delimiter(text: &str) -> std::result::Result<u8, String> {
    match text.as_bytes() {
        [byte] if byte.is_ascii() && !matches!(byte, b'\n' | b'\r') => Ok(*byte),
        _ => Err(format!("expected a single ASCII character, got {:?}", text)),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Produces the complete output of one run. Nothing is printed until the
/// whole report has been rendered.
fn run(cli: &Cli) -> Result<Vec<u8>> {
    let criteria = cli.criteria()?;
    let options = LoadOptions::new().with_delimiter(cli.delimiter);

    log::info!(
        "loading {} and {}",
        cli.containers.display(),
        cli.paths.display()
    );
    let dataset = Dataset::load(&cli.containers, &cli.paths, &options)?;
    log::info!(
        "{} containers, {} paths",
        dataset.containers().len(),
        dataset.paths().len()
    );

    let mut writer = ReportWriter::new(Vec::new());

    if let Some(id) = &cli.describe {
        match dataset.find_container(id) {
            Some(container) => writer.write_container_detail(container)?,
            None => log::warn!("container {} not found", id),
        }
    } else if cli.stations {
        let clustering = StationClustering::new(cli.station_config());
        let graph = clustering.cluster(dataset.containers(), &dataset);
        writer.write_station_listing(&station_listing(&graph))?;
    } else {
        let entries = filtered_listing(dataset.containers(), &dataset, &criteria);
        writer.write_container_listing(&entries)?;
    }

    Ok(writer.into_inner())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = match run(&cli) {
        Ok(output) => output,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout.write_all(&output).and_then(|()| stdout.flush()) {
        eprintln!("error: {}", CliError::from(err));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

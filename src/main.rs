use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use innova_climate::{
    climate::service::Outcome, setup_platform, ClimateState, EntityDescriptor, PlatformConfig,
    ServiceCall, Simulator, Status,
};
use log::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about = "Innova heat pump climate entity")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the entity descriptor as JSON
    Describe {
        #[command(flatten)]
        platform: PlatformArgs,

        /// Status JSON file used for the unit's temperature bounds and identity
        #[arg(long)]
        status: Option<PathBuf>,
    },

    /// Read status JSON objects from stdin, one per line, and print the climate state for each
    Map,

    /// Run service calls from stdin, one JSON object per line, against a simulated unit
    Simulate {
        #[command(flatten)]
        platform: PlatformArgs,

        /// Initial status JSON file of the simulated unit
        #[arg(long)]
        status: PathBuf,

        /// Power the simulated unit on whenever a mode is set
        #[arg(long)]
        implicit_power_on: bool,
    },
}

#[derive(Args, Debug)]
struct PlatformArgs {
    /// Platform config JSON file
    #[arg(long, conflicts_with_all = ["host", "name"])]
    config: Option<PathBuf>,

    /// Address of the unit
    #[arg(long)]
    host: Option<String>,

    /// Entity name, overrides the name reported by the unit
    #[arg(long)]
    name: Option<String>,
}

impl PlatformArgs {
    fn config(&self) -> anyhow::Result<PlatformConfig> {
        let config = match (&self.config, &self.host) {
            (Some(path), _) => PlatformConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            (None, Some(host)) => PlatformConfig {
                host: host.clone(),
                name: self.name.clone(),
            },
            (None, None) => bail!("either --config or --host is required"),
        };
        config.validate()?;
        Ok(config)
    }
}

fn read_status(path: &Path) -> anyhow::Result<Status> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read status {}", path.display()))?;
    Ok(serde_json::from_str(&contents)?)
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", serde_json::to_string(value)?)?;
    stdout.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Describe { platform, status } => {
            let config = platform.config()?;
            let status = match status {
                Some(path) => read_status(&path)?,
                None => Status::default(),
            };

            let climate = setup_platform(&config, |host| Ok(Simulator::new(host, status)))?;
            let descriptor = EntityDescriptor::new(&config.host, &climate);
            descriptor.write_to(io::stdout())?;
        }
        Command::Map => {
            for line in io::stdin().lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                let status: Status = serde_json::from_str(&line)?;
                print_json(&ClimateState::from(&status))?;
            }
        }
        Command::Simulate {
            platform,
            status,
            implicit_power_on,
        } => {
            let config = platform.config()?;
            let status = read_status(&status)?;

            let mut climate = setup_platform(&config, |host| {
                Ok(Simulator::new(host, status).with_implicit_power_on(implicit_power_on))
            })?;
            print_json(&climate.state())?;

            for line in io::stdin().lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }

                let call: ServiceCall = line.parse()?;
                match call.apply(&mut climate) {
                    Ok(Outcome::Applied) => info!("applied {:?}", call),
                    Ok(Outcome::Ignored) => info!("ignored {:?}", call),
                    Err(e) => warn!("{:?} failed: {}", call, e),
                }

                climate.refresh()?;
                print_json(&climate.state())?;
            }
        }
    }

    Ok(())
}

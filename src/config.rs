use clap::{ArgAction, Parser, ValueHint};
use std::{net::SocketAddr, path::PathBuf, time::Duration};

pub const DEFAULT_HUMIDITY_URL: &str = "https://forecast7.com/en/40d48n104d90/windsor/";
pub const DEFAULT_HUMIDITY_MARKER: &str = "Windsor, CO";

#[derive(Parser, Debug)]
#[command(name = "th_dashboard", version, about = "Temperature and humidity dashboard over a CSV log")]
pub struct Args {
    /// CSV log with `timestamp, temperature, humidity` records, oldest first
    #[arg(short, long, env = "TH_LOG_FILE", value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// Fetch the current outdoor humidity from the weather page
    #[arg(long = "ch", env = "TH_FETCH_HUMIDITY", default_value_t = true, action = ArgAction::Set)]
    pub fetch_humidity: bool,

    /// Calendar days of history read from the end of the log
    #[arg(
        long,
        env = "TH_LASTN",
        default_value_t = 31,
        value_parser = clap::value_parser!(u32).range(1..=31)
    )]
    pub lastn: u32,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Weather page scraped for the current humidity
    #[arg(long, env = "TH_HUMIDITY_URL", default_value = DEFAULT_HUMIDITY_URL)]
    pub humidity_url: String,

    /// Locality text that precedes the humidity on the weather page
    #[arg(long, env = "TH_HUMIDITY_MARKER", default_value = DEFAULT_HUMIDITY_MARKER)]
    pub humidity_marker: String,

    /// Upper bound on the weather page request
    #[arg(long, env = "TH_HUMIDITY_TIMEOUT_SECS", default_value_t = 5)]
    pub humidity_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct HumidityConfig {
    pub url: String,
    pub marker: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub log_path: PathBuf,
    pub retain_days: u32,
    pub addr: SocketAddr,
    /// `None` disables the lookup.
    pub humidity: Option<HumidityConfig>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let humidity = args.fetch_humidity.then(|| HumidityConfig {
            url: args.humidity_url,
            marker: args.humidity_marker,
            timeout: Duration::from_secs(args.humidity_timeout_secs),
        });
        Self {
            log_path: args.file,
            retain_days: args.lastn,
            addr: SocketAddr::from(([0, 0, 0, 0], args.port)),
            humidity,
        }
    }
}

impl Config {
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
            retain_days: 31,
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            humidity: None,
        }
    }
}

use anyhow::Context;
use chrono::Timelike;
use clap::Parser;
use sky_color::{daily_schedule, resolve_with, Daypart, Hour, ZipCode, MAX_ZIP_LEN};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "sky-color")]
#[command(about = "Find the sky color of a zip code")]
struct CliConfig {
    /// Zip code (up to 5 digits)
    #[arg(value_parser = parse_zip)]
    zip: ZipCode,

    /// Hour of the day, 0-23 (defaults to the current local hour)
    #[arg(long, value_parser = parse_hour)]
    hour: Option<Hour>,

    /// Print the color for every hour of the day
    #[arg(long, conflicts_with = "hour")]
    schedule: bool,

    #[arg(long, short, help = "Enable verbose output")]
    verbose: bool,
}

fn parse_zip(s: &str) -> Result<ZipCode, String> {
    let zip = ZipCode::parse(s).map_err(|e| e.to_string())?;
    if zip.len() > MAX_ZIP_LEN {
        return Err(format!("at most {MAX_ZIP_LEN} digits are allowed"));
    }
    Ok(zip)
}

fn parse_hour(s: &str) -> Result<Hour, String> {
    let h: u8 = s.parse().map_err(|_| format!("{s:?} is not an hour"))?;
    Hour::new(h).map_err(|e| e.to_string())
}

fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("sky_color=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("sky_color=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if config.schedule {
        for (h, c) in Hour::all().zip(daily_schedule(&config.zip)) {
            println!("{h}  {c}  {:?}", Daypart::of(h));
        }
        return Ok(())
    }

    let hour = match config.hour {
        Some(h) => h,
        None => {
            let h = chrono::Local::now().hour();
            tracing::info!("using local hour {h}");
            Hour::new(h as u8).context("local clock returned an invalid hour")?
        }
    };
    let color: sky_color::ColorValue = resolve_with(&config.zip, hour);
    println!("{color}");
    Ok(())
}

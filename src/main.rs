use miette::miette;
use weather::{generate_daily_summary, generate_summary, WeatherDataset};

fn main() -> miette::Result<()> {
    env_logger::init();

    let file = std::env::args()
        .nth(1)
        .ok_or_else(|| miette!(help = "weather-summary <file.csv>", "Missing filename"))?;
    log::info!("opening {file}");

    let dataset = WeatherDataset::load(&file)?;
    log::debug!("loaded {} days from {file}", dataset.len());

    let overview = generate_summary(&dataset)?;
    let daily = generate_daily_summary(&dataset)?;

    print!("{overview}\n{daily}");

    Ok(())
}

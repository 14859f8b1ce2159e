use chrono::Utc;
use clap::{Parser, ValueEnum};
use mars_config::{find_mission, load_missions};
use mars_time_converter::{MarsClock, parse_utc};

#[derive(Parser)]
#[command(author, version, about = "Convert a UTC date to Local True Solar Time")]
struct Cli {
    /// UTC date, ISO-8601 or YYYY-DDDTHH:MM:SS[.ffffff]; defaults to now
    #[arg(long)]
    date: Option<String>,

    /// Mission name from the catalog (case-insensitive)
    #[arg(long, default_value = "InSight")]
    mission: String,

    /// Mission catalog: a TOML file, a directory of TOML files, or a YAML list
    #[arg(long, default_value = "configs/missions")]
    catalog: String,

    /// Output form
    #[arg(long, value_enum, default_value_t = Output::Date)]
    output: Output,
}

#[derive(Copy, Clone, ValueEnum)]
enum Output {
    /// Formatted SSSST HH:MM:SS.ffffff
    Date,
    /// Decimal hours on the true solar clock face
    Decimal,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let missions = load_missions(&cli.catalog)?;
    let mission = find_mission(&missions, &cli.mission)?;
    let clock = MarsClock::new(mission.site()?);

    let instant = match &cli.date {
        Some(s) => parse_utc(s)?,
        None => Utc::now(),
    };

    let ltst = clock.utc_to_ltst(&instant);
    match cli.output {
        Output::Date => println!("{ltst}"),
        Output::Decimal => println!("{:.9}", ltst.hours()),
    }
    Ok(())
}

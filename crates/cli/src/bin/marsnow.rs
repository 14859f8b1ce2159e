use chrono::Utc;
use clap::{Parser, ValueEnum};
use mars_config::{find_mission, load_missions};
use mars_time_converter::MarsClock;
use mars_time_converter::instant::format_utc;

#[derive(Parser)]
#[command(author, version, about = "Print the current Mars local time for a mission site")]
struct Cli {
    /// Mission name from the catalog (case-insensitive)
    #[arg(long, default_value = "InSight")]
    mission: String,

    /// Mission catalog: a TOML file, a directory of TOML files, or a YAML list
    #[arg(long, default_value = "configs/missions")]
    catalog: String,

    /// What to print
    #[arg(long, value_enum, default_value_t = Output::Full)]
    output: Output,
}

#[derive(Copy, Clone, ValueEnum)]
enum Output {
    /// Sol number and LMST, plus the UTC span of the current sol
    Full,
    /// Formatted LMST only
    Date,
    /// Integer sol only
    Sol,
    /// Decimal sol count
    Decimal,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let missions = load_missions(&cli.catalog)?;
    let mission = find_mission(&missions, &cli.mission)?;
    let clock = MarsClock::new(mission.site()?);

    let now = Utc::now();
    let lmst = clock.utc_to_lmst(&now);

    match cli.output {
        Output::Date => println!("{lmst}"),
        Output::Sol => println!("{}", lmst.sol),
        Output::Decimal => println!("{:.9}", clock.sol_number(&now)),
        Output::Full => {
            let sol_start = clock.sol_to_utc(lmst.sol as f64)?;
            let sol_end = clock.sol_to_utc((lmst.sol + 1) as f64)?;
            println!("{}: now it is {lmst}", mission.name);
            println!(
                "sol {} runs from {} UTC to {} UTC",
                lmst.sol,
                format_utc(&sol_start),
                format_utc(&sol_end)
            );
        }
    }
    Ok(())
}

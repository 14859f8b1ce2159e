use clap::Parser;
use mars_config::{find_mission, load_missions};
use mars_time_converter::MarsClock;
use mars_time_converter::instant::format_utc;

#[derive(Parser)]
#[command(author, version, about = "Convert a Mars time back to UTC")]
struct Cli {
    /// Mars time: 'SSSST HH:MM:SS.ffffff' without the space (e.g. 0265T11:47:23.564662)
    /// or a bare decimal sol count
    #[arg(long)]
    lmst: String,

    /// Mission name from the catalog (case-insensitive)
    #[arg(long, default_value = "InSight")]
    mission: String,

    /// Mission catalog: a TOML file, a directory of TOML files, or a YAML list
    #[arg(long, default_value = "configs/missions")]
    catalog: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let missions = load_missions(&cli.catalog)?;
    let mission = find_mission(&missions, &cli.mission)?;
    let clock = MarsClock::new(mission.site()?);

    let instant = clock.lmst_to_utc(&cli.lmst)?;
    println!("{}", format_utc(&instant));
    Ok(())
}

use std::path::PathBuf;

use chrono::Duration;
use clap::Parser;
use mars_config::{find_mission, load_missions};
use mars_time_converter::constants::SECONDS_PER_SOL;
use mars_time_converter::instant::format_utc;
use mars_time_converter::{MarsClock, parse_utc, solar};
use plotters::prelude::*;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Sample equation of time vs. solar declination over a span of sols"
)]
struct Cli {
    /// UTC start date, ISO-8601 or day-of-year form
    #[arg(long)]
    start: String,

    /// Number of sols to sample (one Mars year is ~669)
    #[arg(long, default_value_t = 669)]
    sols: u32,

    /// CSV output path ('-' for stdout)
    #[arg(long, default_value = "artifacts/analemma.csv")]
    csv: PathBuf,

    /// Optional PNG scatter of the analemma
    #[arg(long)]
    plot: Option<PathBuf>,

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
    let start = parse_utc(&cli.start)?;

    // one sample per sol, taken at the same LMST so the analemma closes
    let mut samples = Vec::with_capacity(cli.sols as usize);
    for n in 0..cli.sols {
        let instant = start + Duration::microseconds((n as f64 * SECONDS_PER_SOL * 1e6) as i64);
        let eot_minutes = clock.utc_to_eot(&instant) * 4.0; // 1 degree = 4 minutes
        let declination = solar::solar_declination_at(&instant);
        let ls = clock.utc_to_ls(&instant);
        samples.push((instant, ls, eot_minutes, declination));
    }

    if let Some(parent) = cli.csv.parent() {
        if !parent.as_os_str().is_empty() && cli.csv != PathBuf::from("-") {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut writer: csv::Writer<Box<dyn std::io::Write>> = if cli.csv == PathBuf::from("-") {
        csv::Writer::from_writer(Box::new(std::io::stdout()))
    } else {
        csv::Writer::from_writer(Box::new(std::fs::File::create(&cli.csv)?))
    };
    writer.write_record(["utc", "ls_deg", "eot_minutes", "declination_deg"])?;
    for (instant, ls, eot, decl) in &samples {
        writer.write_record([
            format_utc(instant),
            format!("{ls:.5}"),
            format!("{eot:.5}"),
            format!("{decl:.5}"),
        ])?;
    }
    writer.flush()?;

    if let Some(plot_path) = &cli.plot {
        if let Some(parent) = plot_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        render_analemma(plot_path, &samples)?;
        println!("analemma plot written to {}", plot_path.display());
    }
    Ok(())
}

fn render_analemma(
    path: &PathBuf,
    samples: &[(chrono::DateTime<chrono::Utc>, f64, f64, f64)],
) -> anyhow::Result<()> {
    let root = BitMapBackend::new(path, (900, 900)).into_drawing_area();
    root.fill(&WHITE)?;

    let (eot_min, eot_max) = min_max(samples.iter().map(|s| s.2));
    let (dec_min, dec_max) = min_max(samples.iter().map(|s| s.3));
    let pad_x = 0.05 * (eot_max - eot_min).max(1.0);
    let pad_y = 0.05 * (dec_max - dec_min).max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption("Mars analemma", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(
            eot_min - pad_x..eot_max + pad_x,
            dec_min - pad_y..dec_max + pad_y,
        )?;
    chart
        .configure_mesh()
        .x_desc("equation of time (minutes)")
        .y_desc("solar declination (degrees)")
        .draw()?;
    chart.draw_series(
        samples
            .iter()
            .map(|s| Circle::new((s.2, s.3), 2, BLUE.filled())),
    )?;
    root.present()?;
    Ok(())
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rave_bodygraph::{gate_center, map_longitude};
use rave_chart::{AVAILABLE_FEATURES, ChartConfig, ChartResult, compute_chart};
use rave_ephem::{AnalyticEphemeris, Ephemeris, NodeMode, TableEphemeris, design_julian_date};
use rave_time::{BirthTime, CivilTime, TimeUnit, timestamp_range};
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "rave", version, about = "Bodygraph charts from birth times")]
struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that computes charts.
#[derive(clap::Args)]
struct ChartOpts {
    /// UTC offset of the local time, hours
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    utc_offset: f64,
    /// Chart config TOML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Report the mean lunar node instead of the true node
    #[arg(long)]
    mean_node: bool,
    /// Precomputed longitude table (TOML) instead of the built-in ephemeris
    #[arg(long)]
    table: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart for a birth time
    Chart {
        /// Local time, "YYYY-MM-DD HH:MM[:SS]"
        #[arg(long)]
        date: String,
        #[command(flatten)]
        opts: ChartOpts,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        /// Comma-separated JSON keys to keep (implies --json)
        #[arg(long, value_delimiter = ',')]
        features: Vec<String>,
    },
    /// Gate, line, color, tone and base of an ecliptic longitude
    Gate {
        /// Tropical ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Birth and design Julian Dates
    DesignDate {
        /// Local time, "YYYY-MM-DD HH:MM[:SS]"
        #[arg(long)]
        date: String,
        #[command(flatten)]
        opts: ChartOpts,
    },
    /// Charts for a range of timestamps stepping back from --end
    Scan {
        /// Earliest local time
        #[arg(long)]
        start: String,
        /// Latest local time
        #[arg(long)]
        end: String,
        /// years, months, days, hours or minutes
        #[arg(long, default_value = "days")]
        unit: TimeUnit,
        /// Units per step
        #[arg(long, default_value_t = 1)]
        interval: u32,
        /// Share of the span to cover, (0, 1]
        #[arg(long, default_value_t = 1.0)]
        fraction: f64,
        #[command(flatten)]
        opts: ChartOpts,
    },
    /// List the keys of a JSON chart
    Features,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    match cli.command {
        Commands::Chart {
            date,
            opts,
            json,
            features,
        } => {
            let birth = parse_birth(&date, opts.utc_offset)?;
            let config = load_config(&opts)?;
            let eph = load_ephemeris(&opts, &config)?;
            let chart = compute_chart(&birth, &eph, &config)
                .with_context(|| format!("computing chart for {birth}"))?;
            if json || !features.is_empty() {
                let value = filter_features(serde_json::to_value(&chart)?, &features);
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                print_chart(&chart);
            }
        }

        Commands::Gate { lon } => {
            if !lon.is_finite() {
                bail!("longitude must be finite");
            }
            let pos = map_longitude(lon);
            let center = gate_center(pos.gate).map_or("?", |c| c.code());
            println!(
                "Gate {}.{} (color {}, tone {}, base {}) - center {}",
                pos.gate, pos.line, pos.color, pos.tone, pos.base, center
            );
        }

        Commands::DesignDate { date, opts } => {
            let birth = parse_birth(&date, opts.utc_offset)?;
            let config = load_config(&opts)?;
            let eph = load_ephemeris(&opts, &config)?;
            let birth_jd = birth.to_jd_ut()?;
            let design_jd = design_julian_date(&eph, birth_jd, &config.design)?;
            println!("Birth:  {birth} (JD {birth_jd:.6} UT)");
            println!(
                "Design: {} (JD {design_jd:.6} UT), {:.3} days earlier",
                CivilTime::from_jd(design_jd),
                birth_jd - design_jd
            );
        }

        Commands::Scan {
            start,
            end,
            unit,
            interval,
            fraction,
            opts,
        } => {
            let start = parse_birth(&start, opts.utc_offset)?;
            let end = parse_birth(&end, opts.utc_offset)?;
            let config = load_config(&opts)?;
            let eph = load_ephemeris(&opts, &config)?;
            let times = timestamp_range(&start, &end, fraction, unit, interval)?;
            debug!(count = times.len(), unit = unit.name(), "scan");
            for t in times {
                let t = t.with_offset(opts.utc_offset);
                let chart = compute_chart(&t, &eph, &config)
                    .with_context(|| format!("computing chart for {t}"))?;
                println!(
                    "{}  {:<22} {:<7} {:<4} {}",
                    chart.birth_date,
                    chart.energy_type,
                    chart.authority,
                    chart.profile,
                    chart.incarnation_cross
                );
            }
        }

        Commands::Features => {
            for key in AVAILABLE_FEATURES {
                println!("{key}");
            }
        }
    }

    Ok(())
}

fn parse_birth(date: &str, utc_offset: f64) -> Result<BirthTime> {
    let birth: BirthTime = date
        .parse()
        .with_context(|| format!("invalid date {date:?}"))?;
    let birth = birth.with_offset(utc_offset);
    birth.validate()?;
    Ok(birth)
}

fn load_config(opts: &ChartOpts) -> Result<ChartConfig> {
    let mut config = match &opts.config {
        Some(path) => ChartConfig::from_file(path)?,
        None => ChartConfig::default(),
    };
    if opts.mean_node {
        config.node_mode = NodeMode::Mean;
    }
    Ok(config)
}

fn load_ephemeris(opts: &ChartOpts, config: &ChartConfig) -> Result<Box<dyn Ephemeris>> {
    Ok(match &opts.table {
        Some(path) => Box::new(load_table(path)?),
        None => Box::new(AnalyticEphemeris::new(config.node_mode)),
    })
}

fn load_table(path: &Path) -> Result<TableEphemeris> {
    let table = TableEphemeris::from_file(path)
        .with_context(|| format!("loading longitude table {}", path.display()))?;
    debug!(samples = table.len(), "longitude table");
    Ok(table)
}

/// Keep only the requested top-level keys. A filter that matches nothing
/// returns the full record.
fn filter_features(value: Value, features: &[String]) -> Value {
    if features.is_empty() {
        return value;
    }
    let Value::Object(map) = value else {
        return value;
    };
    let kept: serde_json::Map<String, Value> = map
        .iter()
        .filter(|(k, _)| features.iter().any(|f| f.trim() == k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    if kept.is_empty() {
        Value::Object(map)
    } else {
        Value::Object(kept)
    }
}

fn print_chart(chart: &ChartResult) {
    println!("Birth:       {}", chart.birth_date);
    println!("Design:      {} UT", chart.design_date);
    println!("Type:        {}", chart.energy_type);
    println!("Strategy:    {}", chart.strategy);
    println!("Authority:   {} ({})", chart.authority_name, chart.authority);
    println!("Profile:     {}", chart.profile);
    println!("Cross:       {}", chart.incarnation_cross);
    println!("Defined:     {}", chart.defined_centers.join(", "));
    println!("Undefined:   {}", chart.undefined_centers.join(", "));
    println!("Split:       {}", chart.split);
    let v = chart.variables;
    println!(
        "Variables:   right {}/{}  left {}/{}",
        v.right_up, v.right_down, v.left_up, v.left_down
    );
    println!("Channels:");
    for c in &chart.active_channels {
        match c.circuit {
            Some(circuit) => println!("  {:<6} {} [{circuit}] - {}", c.channel, c.name, c.description),
            None => println!("  {:<6} {} - {}", c.channel, c.name, c.description),
        }
    }
    println!("{:<12} {:>9} {:>9}", "Body", "Personal.", "Design");
    for (p, d) in chart.personality_gates.iter().zip(&chart.design_gates) {
        println!(
            "{:<12} {:>9} {:>9}",
            p.body,
            format!("{}.{}", p.gate, p.line),
            format!("{}.{}", d.gate, d.line)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Value {
        serde_json::json!({ "energy_type": "GENERATOR", "authority": "SL", "split": 1 })
    }

    #[test]
    fn filter_keeps_requested_keys() {
        let v = filter_features(sample(), &["authority".into(), "split".into()]);
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(obj.contains_key("authority"));
    }

    #[test]
    fn filter_with_no_match_returns_all() {
        let v = filter_features(sample(), &["nonsense".into()]);
        assert_eq!(v, sample());
    }

    #[test]
    fn empty_filter_is_identity() {
        assert_eq!(filter_features(sample(), &[]), sample());
    }

    #[test]
    fn parse_birth_applies_offset() {
        let b = parse_birth("1968-02-21 11:15", 3.0).unwrap();
        assert_eq!(b.utc_offset_hours, 3.0);
        assert!((b.to_jd_ut().unwrap() - 2_439_907.843_75).abs() < 1e-6);
        assert!(parse_birth("1968-02-30 11:15", 0.0).is_err());
        assert!(parse_birth("12:00", 0.0).is_err());
    }

    #[test]
    fn cli_parses_chart_command() {
        let cli = Cli::try_parse_from([
            "rave", "chart", "--date", "1968-02-21 11:15", "--utc-offset", "-3.5", "--features",
            "profile,authority",
        ])
        .unwrap();
        match cli.command {
            Commands::Chart { opts, features, .. } => {
                assert_eq!(opts.utc_offset, -3.5);
                assert_eq!(features, ["profile", "authority"]);
            }
            _ => panic!("expected chart"),
        }
    }
}

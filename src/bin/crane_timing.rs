use std::env;
use std::time::Instant;

use cranes_dp::{Algorithm, GridBuilder};
use serde::Serialize;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("crane_timing: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(72));
    eprintln!("Crane unloading timing: exhaustive search vs dynamic programming");
    eprintln!("{}", "=".repeat(72));
    eprintln!("  grids: n x n, n = 2..={}, seed {}", options.max_size, options.seed);
    eprintln!(
        "  exhaustive runs (and score checks) only for n <= {}",
        options.verify_limit
    );
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();
    for n in sizes(options.max_size) {
        measurements.extend(run_size(n, &options, &mut sys));
    }

    print_summary(&measurements);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("crane_timing output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
    max_size: usize,
    seed: u64,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 10usize;
        let mut max_size = 20usize;
        let mut seed = 42u64;

        while let Some(arg) = args.next() {
            let arg: String = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            }
            let (key, inline) = match arg.split_once('=') {
                Some((key, value)) => (key.to_string(), Some(value.to_string())),
                None => (arg.clone(), None),
            };
            let mut value = || -> Result<String, String> {
                match inline.clone() {
                    Some(v) => Ok(v),
                    None => args
                        .next()
                        .map(Into::into)
                        .ok_or_else(|| format!("missing value after {key}")),
                }
            };
            match key.as_str() {
                "--format" => format = OutputFormat::from_str(&value()?)?,
                "--verify-limit" => verify_limit = parse_number(&value()?, "verify limit")?,
                "--max-size" => max_size = parse_number(&value()?, "max size")?,
                "--seed" => seed = parse_number(&value()?, "seed")?,
                _ => return Err(format!("unrecognized argument '{key}'")),
            }
        }

        if max_size < 2 {
            return Err("max size must be at least 2".to_string());
        }
        Ok(Self {
            format,
            verify_limit,
            max_size,
            seed,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin crane_timing [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Largest n for which exhaustive search runs (default: 10)
  --max-size <N>                Largest grid side length (default: 20)
  --seed <N>                    Seed for random grids (default: 42)
  -h, --help                    Print this help message

Examples:
  cargo run --release --bin crane_timing
  cargo run --release --bin crane_timing -- --format table --verify-limit 8
"
        );
    }
}

fn parse_number<N: std::str::FromStr>(value: &str, what: &str) -> Result<N, String> {
    value
        .parse::<N>()
        .map_err(|_| format!("{what} must be a non-negative integer"))
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone, Serialize)]
struct Measurement {
    algorithm: &'static str,
    n: usize,
    cranes: usize,
    path_len: usize,
    wall_s: f64,
    rss_delta_kib: u64,
    verification: VerificationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

/// 2..=10 one by one, then doubling up to `max_size`.
fn sizes(max_size: usize) -> Vec<usize> {
    let mut out: Vec<usize> = (2..=max_size.min(10)).collect();
    let mut n = 16;
    while n <= max_size {
        out.push(n);
        n *= 2;
    }
    if out.last() != Some(&max_size) {
        out.push(max_size);
    }
    out
}

fn run_size(n: usize, options: &Options, sys: &mut System) -> Vec<Measurement> {
    let grid = GridBuilder::new(n, n)
        .with_seed(options.seed.wrapping_add(n as u64))
        .build();
    let verify = n <= options.verify_limit;

    eprint!("  n={n:<5} ");
    let mut out = Vec::new();
    let mut oracle = None;
    for algorithm in Algorithm::ALL {
        if algorithm == Algorithm::Exhaustive && !verify {
            continue;
        }
        let before = rss_kib(sys);
        let start = Instant::now();
        let result = algorithm.try_solve(&grid);
        let wall_s = start.elapsed().as_secs_f64();
        let rss_delta_kib = rss_kib(sys).saturating_sub(before);

        let (cranes, path_len, verification, detail) = match result {
            Ok(path) => {
                let cranes = path.total_cranes();
                let (status, detail) = match (algorithm, oracle) {
                    (Algorithm::Exhaustive, _) => {
                        oracle = Some(cranes);
                        (VerificationStatus::NotChecked, None)
                    }
                    (Algorithm::DynProg, Some(expected)) if expected == cranes => {
                        (VerificationStatus::Passed, None)
                    }
                    (Algorithm::DynProg, Some(expected)) => (
                        VerificationStatus::Failed,
                        Some(format!("expected {expected} cranes, got {cranes}")),
                    ),
                    (Algorithm::DynProg, None) => (VerificationStatus::NotChecked, None),
                };
                (cranes, path.len(), status, detail)
            }
            Err(err) => (0, 0, VerificationStatus::Failed, Some(err.to_string())),
        };

        eprint!(
            "{} {}={:.6}s ",
            verification.icon(),
            algorithm.name(),
            wall_s
        );
        out.push(Measurement {
            algorithm: algorithm.name(),
            n,
            cranes,
            path_len,
            wall_s,
            rss_delta_kib,
            verification,
            detail,
        });
    }
    eprintln!();
    out
}

fn print_summary(measurements: &[Measurement]) {
    let failed: Vec<&Measurement> = measurements
        .iter()
        .filter(|m| m.verification == VerificationStatus::Failed)
        .collect();
    let passed = measurements
        .iter()
        .filter(|m| m.verification == VerificationStatus::Passed)
        .count();

    eprintln!();
    eprintln!("{}", "=".repeat(72));
    eprintln!("  runs: {}", measurements.len());
    eprintln!("  ✓ scores matching exhaustive search: {passed}");
    eprintln!("  ✗ failures: {}", failed.len());
    for m in &failed {
        eprintln!(
            "     {} n={}: {}",
            m.algorithm,
            m.n,
            m.detail.as_deref().unwrap_or("")
        );
    }
    eprintln!("{}", "=".repeat(72));
    eprintln!();
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("algorithm,n,cranes,path_len,wall_s,rss_delta_kib,verification,detail");
    for m in measurements {
        let detail = m
            .detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{},{},{:.9},{},{},\"{}\"",
            m.algorithm,
            m.n,
            m.cranes,
            m.path_len,
            m.wall_s,
            m.rss_delta_kib,
            m.verification.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    println!(
        "{:<11}  {:>5}  {:>6}  {:>8}  {:>12}  {:>13}  {:<11}  detail",
        "algorithm", "n", "cranes", "path_len", "wall_s", "rss_delta_kib", "status"
    );
    println!("{}", "-".repeat(86));
    for m in measurements {
        println!(
            "{:<11}  {:>5}  {:>6}  {:>8}  {:>12.6}  {:>13}  {:<11}  {}",
            m.algorithm,
            m.n,
            m.cranes,
            m.path_len,
            m.wall_s,
            m.rss_delta_kib,
            m.verification.label(),
            m.detail.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    let text = serde_json::to_string_pretty(measurements).map_err(|err| err.to_string())?;
    println!("{text}");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

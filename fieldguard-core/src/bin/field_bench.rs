//! Form Field Benchmarking Tool
//!
//! Measures throughput of the sanitizers and validators over a large file
//! with one field value per line, such as an export of submitted names or
//! search queries.
//!
//! ## Usage
//!
//! ```bash
//! # Benchmark name cleansing
//! ./target/release/field_bench /path/to/names.txt name
//!
//! # Benchmark search tokenization
//! ./target/release/field_bench /path/to/queries.txt query
//!
//! # Benchmark telephone or postcode validation
//! ./target/release/field_bench /path/to/phones.txt phone
//! ./target/release/field_bench /path/to/postcodes.txt postcode
//!
//! # Run every mode over the same file (default)
//! ./target/release/field_bench /path/to/fields.txt all
//! ```
//!
//! Set `RUST_LOG=fieldguard_core=trace` to see individual rejections.
//!
//! ## Output
//!
//! ```text
//! === Telephone ===
//! --------------------------------
//! Mode        : Telephone
//! Elapsed     : 0.052 s
//! Throughput  : 0.184 GiB/s
//! Records     : 1_000_000
//! Accepted    : 912_331
//! Records/sec : 19_230_769
//! --------------------------------
//! ```

use std::env;
use std::fs;
use std::io;
use std::time::{Duration, Instant};

use fieldguard_core::analyzer::{NameNormalizer, SearchTokenizer};
use fieldguard_core::validate::postcode;
use fieldguard_core::validate::UkTelephone;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Name,
    Query,
    Phone,
    Postcode,
    All,
}

impl Mode {
    fn parse(arg: Option<&str>) -> Option<Self> {
        match arg {
            None | Some("all") => Some(Mode::All),
            Some("name") => Some(Mode::Name),
            Some("query") => Some(Mode::Query),
            Some("phone") => Some(Mode::Phone),
            Some("postcode") => Some(Mode::Postcode),
            Some(_) => None,
        }
    }

    fn includes(self, other: Mode) -> bool {
        self == Mode::All || self == other
    }
}

#[derive(Debug, Default)]
struct Tally {
    records: u64,
    accepted: u64,
}

impl Tally {
    fn record(&mut self, accepted: bool) {
        self.records += 1;
        self.accepted += u64::from(accepted);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed when embedded; that is fine.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init();
}

fn main() -> io::Result<()> {
    init_logging();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: field_bench <path> [name|query|phone|postcode|all]");
        std::process::exit(1);
    }

    let path = &args[1];
    let Some(mode) = Mode::parse(args.get(2).map(String::as_str)) else {
        eprintln!("unknown mode {:?}", args[2]);
        std::process::exit(1);
    };

    info!(path = %path, ?mode, "loading input");
    let bytes = fs::read(path)?;
    let input = String::from_utf8(bytes)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    let lines: Vec<&str> = input.lines().collect();

    println!("File size: {}", fmt_bytes(input.len() as u64));
    println!("Records:   {}", fmt_count(lines.len() as u64));
    println!("Mode:      {:?}\n", mode);

    if mode.includes(Mode::Name) {
        bench_name(&lines, input.len());
    }
    if mode.includes(Mode::Query) {
        bench_query(&lines, input.len());
    }
    if mode.includes(Mode::Phone) {
        bench_phone(&lines, input.len());
    }
    if mode.includes(Mode::Postcode) {
        bench_postcode(&lines, input.len());
    }

    Ok(())
}

fn bench_name(lines: &[&str], input_bytes: usize) {
    let normalizer = NameNormalizer::new();
    let mut out = String::with_capacity(256);

    println!("=== Name ===");

    let (elapsed, tally) = time_runs(|| {
        let mut tally = Tally::default();
        for &line in lines {
            normalizer.cleanse_into(line, &mut out);
            tally.record(!out.is_empty());
        }
        tally
    });

    print_perf("Name", input_bytes, elapsed, &tally);
}

fn bench_query(lines: &[&str], input_bytes: usize) {
    let tokenizer = SearchTokenizer::new();

    println!("=== Query ===");

    let (elapsed, tally) = time_runs(|| {
        let mut tally = Tally::default();
        for &line in lines {
            tally.records += 1;
            tokenizer.for_each_term(line, |_term, _pos| tally.accepted += 1);
        }
        tally
    });

    debug!(terms = tally.accepted, "query terms kept");
    print_perf("Query", input_bytes, elapsed, &tally);
}

fn bench_phone(lines: &[&str], input_bytes: usize) {
    bench_predicate("Telephone", lines, input_bytes, |line| {
        UkTelephone::parse(line).is_ok()
    });
}

fn bench_postcode(lines: &[&str], input_bytes: usize) {
    bench_predicate("Postcode", lines, input_bytes, postcode::is_valid_partial);
}

fn bench_predicate<P>(label: &str, lines: &[&str], input_bytes: usize, predicate: P)
where
    P: Fn(&str) -> bool,
{
    println!("=== {} ===", label);

    let (elapsed, tally) = time_runs(|| {
        let mut tally = Tally::default();
        for &line in lines {
            tally.record(predicate(line));
        }
        tally
    });

    print_perf(label, input_bytes, elapsed, &tally);
}

/// Runs `pass` untimed `WARMUP_RUNS` times, then reports the mean wall
/// time of `MEASURE_RUNS` timed passes and the tally of the last one.
fn time_runs<F: FnMut() -> Tally>(mut pass: F) -> (Duration, Tally) {
    (0..WARMUP_RUNS).for_each(|_| {
        std::hint::black_box(pass());
    });

    let start = Instant::now();
    let mut last = Tally::default();
    for _ in 0..MEASURE_RUNS {
        last = std::hint::black_box(pass());
    }

    (start.elapsed() / MEASURE_RUNS as u32, last)
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, tally: &Tally) {
    let secs = elapsed.as_secs_f64().max(f64::EPSILON);
    let gib = input_bytes as f64 / (1024.0 * 1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.3} GiB/s", gib / secs);
    println!("Records     : {}", fmt_count(tally.records));
    println!("Accepted    : {}", fmt_count(tally.accepted));
    println!(
        "Records/sec : {}",
        fmt_count((tally.records as f64 / secs) as u64)
    );
    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    const UNITS: [&str; 3] = ["KiB", "MiB", "GiB"];

    let mut size = b as f64;
    let mut unit = None;
    for name in UNITS {
        if size < 1024.0 {
            break;
        }
        size /= 1024.0;
        unit = Some(name);
    }

    match unit {
        Some(name) => format!("{size:.2} {name}"),
        None => format!("{b} B"),
    }
}

/// Groups digits in threes with `_`, e.g. `1_000_000`.
fn fmt_count(n: u64) -> String {
    let digits = n.to_string();
    let head = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    out.push_str(&digits[..head]);
    for group in digits.as_bytes()[head..].chunks(3) {
        if !out.is_empty() {
            out.push('_');
        }
        out.extend(group.iter().map(|&d| d as char));
    }

    out
}

use clap::Parser;

use vecbench::constants::{LANES, LARGE_COUNT, REPETITIONS, SMALL_COUNT};
use vecbench::util::Timed;
use vecbench::{bench_rng, run_suite, CASES};

/// vecbench - vec3 vs vec4, interleaved vs wide-batch layout timings
///
/// Sizes, lane width and repetition count are fixed at compile time. With no
/// arguments every case runs.
#[derive(Parser, Debug)]
#[command(name = "vecbench", version, about)]
struct Cli {
    /// Only run cases whose label contains this text (e.g. "vector<", "wide")
    #[arg(long, value_name = "TEXT")]
    filter: Option<String>,

    /// Print the case labels and exit
    #[arg(long)]
    list: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let filter = cli.filter.as_deref();

    if cli.list {
        for case in CASES.iter().filter(|c| c.matches(filter)) {
            println!("{}", case.label());
        }
        return;
    }

    log::info!(
        "small={} large={} lanes={} repetitions={}",
        SMALL_COUNT,
        LARGE_COUNT,
        LANES,
        REPETITIONS
    );

    let _t = Timed::info("benchmark suite");
    let mut rng = bench_rng();
    let ran = run_suite(&mut rng, filter, |m| println!("{}", m));
    if ran == 0 {
        log::warn!("no case matches filter {:?}", filter.unwrap_or_default());
    }
}

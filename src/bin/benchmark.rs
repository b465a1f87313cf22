use city_routes::benchmark::{run_benchmark, BenchmarkConfig};
use colored::*;
use std::env;
use std::process;

fn usage() -> ! {
    eprintln!("usage: benchmark [--json] [--seed N] [--edge-factor K] [--start V] [--sizes a,b,c]");
    process::exit(2);
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> T {
    match value.as_deref().map(|s| s.parse::<T>()) {
        Some(Ok(v)) => v,
        _ => {
            eprintln!("invalid or missing value for {}", flag);
            usage();
        }
    }
}

fn main() {
    // Initialize logging
    env_logger::init();

    let mut config = BenchmarkConfig::default();
    let mut json = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--seed" => config = config.with_seed(parse_value(&arg, args.next())),
            "--edge-factor" => config = config.with_edge_factor(parse_value(&arg, args.next())),
            "--start" => config = config.with_start(parse_value(&arg, args.next())),
            "--sizes" => {
                let raw: String = parse_value(&arg, args.next());
                let sizes: Result<Vec<usize>, _> = raw.split(',').map(|s| s.trim().parse()).collect();
                match sizes {
                    Ok(sizes) => config = config.with_sizes(sizes),
                    Err(_) => {
                        eprintln!("invalid size list {:?}", raw);
                        usage();
                    }
                }
            }
            _ => usage(),
        }
    }

    if !json {
        println!("=====================================================");
        println!("{}", "Benchmark: Dijkstra vs (n+m) ln n".bright_green());
        println!("Edge factor: {} edges per vertex, seed {}", config.edge_factor, config.seed);
        println!("=====================================================");
    }

    let report = match run_benchmark(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{} {}", "benchmark failed:".red(), e);
            process::exit(1);
        }
    };

    if json {
        match report.to_json() {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("{} {}", "could not serialize report:".red(), e);
                process::exit(1);
            }
        }
    } else {
        print!("{}", report);
    }
}

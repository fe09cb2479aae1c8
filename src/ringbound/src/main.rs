use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use ringcore::BoundedRingBuffer;
use serde::Serialize;

/// Summary of one demo run, printable as JSON with `--json`.
#[derive(Debug, Serialize)]
struct DemoReport {
    capacity: usize,
    accepted_writes: usize,
    rejected_writes: usize,
    drained: Vec<u64>,
    rejected_reads: usize,
}

fn main() -> Result<()> {
    let matches = Command::new("ringbound")
        .version("0.1")
        .about("Bounded ring buffer demonstration driver")
        .subcommand(
            Command::new("demo")
                .about("Fill the buffer, overflow it once, then drain it dry")
                .arg(
                    Arg::new("capacity")
                        .long("capacity")
                        .default_value("5")
                        .help("Number of slots in the buffer"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print a JSON summary instead of per-step lines"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("demo", sub_matches)) => {
            let capacity: usize = sub_matches
                .get_one::<String>("capacity")
                .unwrap()
                .parse()?;
            let as_json = sub_matches.get_flag("json");

            let report = run_demo(capacity, !as_json)?;
            if as_json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
        _ => {
            println!("Use --help for usage.");
        }
    }
    Ok(())
}

/// Writes `1..=capacity`, attempts one extra write, drains everything in
/// FIFO order, then attempts one extra read. Rejections are expected and
/// counted, not treated as errors.
fn run_demo(capacity: usize, verbose: bool) -> Result<DemoReport> {
    let mut buffer = BoundedRingBuffer::new(capacity)?;

    let mut accepted_writes = 0;
    let mut rejected_writes = 0;
    for value in 1..=(capacity as u64 + 1) {
        match buffer.try_push(value) {
            Ok(()) => {
                accepted_writes += 1;
                if verbose {
                    println!("Wrote {} to buffer", value);
                }
            }
            Err(rejected) => {
                rejected_writes += 1;
                if verbose {
                    println!("Buffer full. Couldn't write {}", rejected);
                }
            }
        }
    }

    let mut drained = Vec::with_capacity(capacity);
    while let Some(value) = buffer.try_pop() {
        drained.push(value);
        if verbose {
            println!("Read {} from buffer", value);
        }
    }

    let mut rejected_reads = 0;
    if buffer.try_pop().is_none() {
        rejected_reads += 1;
        if verbose {
            println!("Buffer empty. Couldn't read");
        }
    }

    Ok(DemoReport {
        capacity,
        accepted_writes,
        rejected_writes,
        drained,
        rejected_reads,
    })
}

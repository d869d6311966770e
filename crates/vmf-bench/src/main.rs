use std::path::Path;
use std::process::ExitCode;

use vmf_bench::args::{BenchArgs, USAGE};
use vmf_bench::report::{self, Baseline};
use vmf_bench::runner::{SceneRun, SceneTimer};
use vmf_bench::scenes;
use vmf_bench::BenchError;
use vmf_core::IdAllocator;
use vmf_persist::SaveOptions;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match BenchArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };
    if args.help {
        print!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `false` when the run drifted from the baseline.
fn run(args: &BenchArgs) -> Result<bool, BenchError> {
    let timer = SceneTimer::new(args.iterations);
    let runs = scenes::standard_scenes()
        .iter()
        .map(|config| timer.measure(config))
        .collect::<Result<Vec<SceneRun>, _>>()?;

    println!("\n## vmf-bench ({} passes per scene)\n", args.iterations);
    println!("{}", report::format_markdown(&runs));

    if let Some(path) = &args.emit {
        emit_largest(path)?;
    }

    // Compare before saving so --baseline and --output may name the same file.
    let mut clean = true;
    if let Some(path) = &args.baseline {
        match report::load_baseline(path)? {
            Some(baseline) => {
                let drifts = report::compare(&runs, &baseline, args.threshold_pct);
                print!("{}", report::format_drift(&drifts, args.threshold_pct));
                clean = drifts.is_empty();
            }
            None => log::warn!("No baseline at {}, skipping comparison", path.display()),
        }
    }

    if let Some(path) = &args.output {
        let baseline = Baseline {
            label: format!("vmf-bench-{}", std::process::id()),
            scenes: runs,
        };
        report::save_baseline(path, &baseline)?;
        log::info!("Saved baseline to {}", path.display());
    }

    Ok(clean)
}

fn emit_largest(path: &Path) -> Result<(), BenchError> {
    let Some(largest) = scenes::standard_scenes()
        .into_iter()
        .max_by_key(|config| config.solid_count)
    else {
        return Ok(());
    };
    let document = scenes::build_scene(&IdAllocator::new(), largest.solid_count);
    vmf_persist::save_to_path(&document, SaveOptions::default(), path)?;
    log::info!("Wrote scene '{}' to {}", largest.name, path.display());
    Ok(())
}

use std::fmt::{self, Write as _};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::runner::SceneRun;
use crate::BenchError;

/// A saved set of scene measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub label: String,
    pub scenes: Vec<SceneRun>,
}

/// Load a baseline. A missing file is `Ok(None)`; a malformed one is an error.
pub fn load_baseline(path: &Path) -> Result<Option<Baseline>, BenchError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(BenchError::ReadBaseline {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    serde_json::from_str(&text)
        .map(Some)
        .map_err(|source| BenchError::ParseBaseline {
            path: path.to_path_buf(),
            source,
        })
}

pub fn save_baseline(path: &Path, baseline: &Baseline) -> Result<(), BenchError> {
    let write_json = || -> io::Result<()> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let mut out = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut out, baseline)?;
        out.write_all(b"\n")?;
        out.flush()
    };
    write_json().map_err(|source| BenchError::WriteBaseline {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Build,
    Serialize,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Build => "build",
            Phase::Serialize => "serialize",
        })
    }
}

/// A difference from the baseline that fails the run.
#[derive(Debug, Clone, PartialEq)]
pub enum Drift {
    /// Mean time of one phase grew past the threshold.
    Slower {
        scene: String,
        phase: Phase,
        percent: f64,
    },
    /// The scene serialized to a different number of bytes. Generated scenes
    /// are deterministic, so any change here is a change in the output format.
    OutputSize {
        scene: String,
        before: usize,
        after: usize,
    },
}

impl fmt::Display for Drift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Drift::Slower {
                scene,
                phase,
                percent,
            } => write!(f, "{scene}: {phase} +{percent:.1}%"),
            Drift::OutputSize {
                scene,
                before,
                after,
            } => {
                let delta = *after as i64 - *before as i64;
                write!(f, "{scene}: output {before} -> {after} bytes ({delta:+})")
            }
        }
    }
}

/// Compare a run against a baseline. Scenes are matched on name and solid
/// count; scenes absent from either side are ignored.
pub fn compare(current: &[SceneRun], baseline: &Baseline, threshold_pct: f64) -> Vec<Drift> {
    let mut drifts = Vec::new();

    for run in current {
        let Some(base) = baseline
            .scenes
            .iter()
            .find(|b| b.scene == run.scene && b.solid_count == run.solid_count)
        else {
            log::debug!("Scene '{}' has no baseline entry", run.scene);
            continue;
        };

        if base.output_bytes != run.output_bytes {
            drifts.push(Drift::OutputSize {
                scene: run.scene.clone(),
                before: base.output_bytes,
                after: run.output_bytes,
            });
        }

        let phases = [
            (Phase::Build, base.build.mean_ms, run.build.mean_ms),
            (Phase::Serialize, base.serialize.mean_ms, run.serialize.mean_ms),
        ];
        for (phase, before, after) in phases {
            if before <= 0.0 {
                continue;
            }
            let percent = (after / before - 1.0) * 100.0;
            if percent > threshold_pct {
                drifts.push(Drift::Slower {
                    scene: run.scene.clone(),
                    phase,
                    percent,
                });
            }
        }
    }

    drifts
}

const COLUMNS: [&str; 7] = [
    "Scene",
    "Solids",
    "Bytes",
    "Build mean / p95 (ms)",
    "Serialize mean / p95 (ms)",
    "Serialize max (ms)",
    "MB/s",
];

/// Markdown table with one row per scene.
pub fn format_markdown(runs: &[SceneRun]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "| {} |", COLUMNS.join(" | "));
    let _ = writeln!(out, "|{}", "---|".repeat(COLUMNS.len()));

    for run in runs {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {:.2} / {:.2} | {:.2} / {:.2} | {:.2} | {:.1} |",
            run.scene,
            run.solid_count,
            run.output_bytes,
            run.build.mean_ms,
            run.build.p95_ms,
            run.serialize.mean_ms,
            run.serialize.p95_ms,
            run.serialize.max_ms,
            throughput_mb_s(run),
        );
    }
    out
}

/// Serialized megabytes per second at the mean serialize time.
fn throughput_mb_s(run: &SceneRun) -> f64 {
    if run.serialize.mean_ms > 0.0 {
        run.output_bytes as f64 / run.serialize.mean_ms / 1000.0
    } else {
        0.0
    }
}

/// Plain-text verdict for a comparison.
pub fn format_drift(drifts: &[Drift], threshold_pct: f64) -> String {
    if drifts.is_empty() {
        return format!("No drift: sizes unchanged, timings within {threshold_pct:.0}%.\n");
    }

    let mut out = format!("{} drift(s) against baseline:\n", drifts.len());
    for drift in drifts {
        let _ = writeln!(out, "  - {drift}");
    }
    out
}

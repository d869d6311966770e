use std::time::Instant;

use serde::{Deserialize, Serialize};
use vmf_core::IdAllocator;

use crate::scenes::{self, SceneConfig};
use crate::BenchError;

/// Summary of one timed phase, in milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseStats {
    pub mean_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

impl PhaseStats {
    /// Summarize raw samples. An empty slice summarizes to all zeros.
    pub fn from_samples(samples: &[f64]) -> Self {
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let (Some(&min_ms), Some(&max_ms)) = (sorted.first(), sorted.last()) else {
            return Self::default();
        };
        Self {
            mean_ms: sorted.iter().sum::<f64>() / sorted.len() as f64,
            median_ms: nearest_rank(&sorted, 0.50),
            p95_ms: nearest_rank(&sorted, 0.95),
            min_ms,
            max_ms,
        }
    }
}

/// Nearest-rank percentile of an ascending, non-empty slice.
fn nearest_rank(sorted: &[f64], quantile: f64) -> f64 {
    let rank = (quantile * sorted.len() as f64).ceil() as usize;
    sorted[rank.clamp(1, sorted.len()) - 1]
}

/// Measurements for one scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneRun {
    pub scene: String,
    pub solid_count: usize,
    pub iterations: u32,
    /// Length of the serialized map. Identical on every pass.
    pub output_bytes: usize,
    pub build: PhaseStats,
    pub serialize: PhaseStats,
}

/// Builds and serializes generated maps, timing the two phases apart.
pub struct SceneTimer {
    iterations: u32,
}

impl SceneTimer {
    pub fn new(iterations: u32) -> Self {
        Self {
            iterations: iterations.max(1),
        }
    }

    /// Time `config` for the configured number of passes. Every pass starts
    /// from a fresh allocator, so each one must serialize to the same length.
    pub fn measure(&self, config: &SceneConfig) -> Result<SceneRun, BenchError> {
        log::info!("Scene '{}': {} solids", config.name, config.solid_count);

        let passes = self.iterations as usize;
        let mut build_ms = Vec::with_capacity(passes);
        let mut serialize_ms = Vec::with_capacity(passes);
        let mut buffer = Vec::new();
        let mut output_bytes = None;

        for _ in 0..passes {
            let ids = IdAllocator::new();
            let started = Instant::now();
            let document = scenes::build_scene(&ids, config.solid_count);
            build_ms.push(elapsed_ms(started));

            buffer.clear();
            let started = Instant::now();
            vmf_persist::write_document(&document, &mut buffer).map_err(|source| {
                BenchError::Serialize {
                    scene: config.name.to_string(),
                    source,
                }
            })?;
            serialize_ms.push(elapsed_ms(started));

            match output_bytes {
                None => output_bytes = Some(buffer.len()),
                Some(first) if first != buffer.len() => {
                    return Err(BenchError::UnstableOutput {
                        scene: config.name.to_string(),
                        first,
                        later: buffer.len(),
                    });
                }
                Some(_) => {}
            }
        }

        let run = SceneRun {
            scene: config.name.to_string(),
            solid_count: config.solid_count,
            iterations: self.iterations,
            output_bytes: output_bytes.unwrap_or_default(),
            build: PhaseStats::from_samples(&build_ms),
            serialize: PhaseStats::from_samples(&serialize_ms),
        };
        log::debug!(
            "Scene '{}': build {:.2}ms, serialize {:.2}ms, {} bytes",
            run.scene,
            run.build.mean_ms,
            run.serialize.mean_ms,
            run.output_bytes
        );
        Ok(run)
    }
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_of_no_samples_are_zero() {
        assert_eq!(PhaseStats::from_samples(&[]), PhaseStats::default());
    }

    #[test]
    fn test_stats_use_nearest_rank() {
        let stats = PhaseStats::from_samples(&[4.0, 1.0, 3.0, 2.0]);
        assert_eq!(stats.min_ms, 1.0);
        assert_eq!(stats.max_ms, 4.0);
        assert_eq!(stats.mean_ms, 2.5);
        assert_eq!(stats.median_ms, 2.0);
        assert_eq!(stats.p95_ms, 4.0);
    }

    #[test]
    fn test_single_sample() {
        let stats = PhaseStats::from_samples(&[7.5]);
        assert_eq!(stats.median_ms, 7.5);
        assert_eq!(stats.p95_ms, 7.5);
    }

    #[test]
    fn test_measure_reports_serialized_length() {
        let config = SceneConfig {
            name: "tiny",
            solid_count: 4,
        };
        let run = SceneTimer::new(3).measure(&config).expect("measure");

        let document = scenes::build_scene(&IdAllocator::new(), 4);
        let expected = vmf_persist::save_to_string(&document).expect("serialize").len();
        assert_eq!(run.scene, "tiny");
        assert_eq!(run.solid_count, 4);
        assert_eq!(run.iterations, 3);
        assert_eq!(run.output_bytes, expected);
        assert!(run.build.min_ms <= run.build.max_ms);
    }

    #[test]
    fn test_zero_iterations_still_runs_once() {
        let config = SceneConfig {
            name: "empty",
            solid_count: 0,
        };
        let run = SceneTimer::new(0).measure(&config).expect("measure");
        assert_eq!(run.iterations, 1);
        assert!(run.output_bytes > 0);
    }
}

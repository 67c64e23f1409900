//! Progress logging for the iterative estimators.
//!
//! [`TrainingLogger`] wraps the `log` facade so estimator internals never
//! call it directly. Verbosity is decided per run through
//! [`Verbosity`] in the params: `Silent` suppresses everything (the
//! default, and what tests use), `Info` emits one line per recorded
//! step plus start/finish banners, the finish line carrying the elapsed
//! wall time.

use std::time::Instant;

/// How chatty an estimator run is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// No output at all.
    #[default]
    Silent,
    /// Start/finish banners and per-step objective lines.
    Info,
}

/// Per-run logger owned by an estimator for the duration of `fit`.
#[derive(Debug)]
pub struct TrainingLogger {
    label: &'static str,
    verbosity: Verbosity,
    started: Option<Instant>,
}

impl TrainingLogger {
    pub fn new(label: &'static str, verbosity: Verbosity) -> Self {
        Self {
            label,
            verbosity,
            started: None,
        }
    }

    /// Stamp the run start and announce the iteration count.
    pub fn start_training(&mut self, n_steps: usize) {
        self.started = Some(Instant::now());
        if self.verbosity >= Verbosity::Info {
            log::info!("[{}] starting: {} steps", self.label, n_steps);
        }
    }

    /// One objective reading at a given step index.
    pub fn log_step(&self, step: usize, objective_name: &str, value: f64) {
        if self.verbosity >= Verbosity::Info {
            log::info!("[{}] step {}: {} = {:.6e}", self.label, step, objective_name, value);
        }
    }

    /// A held-out evaluation, reported once after the run.
    pub fn log_evaluation(&self, set: &str, objective_name: &str, value: f64) {
        if self.verbosity >= Verbosity::Info {
            log::info!("[{}] {}-{} = {:.6e}", self.label, set, objective_name, value);
        }
    }

    pub fn finish_training(&self) {
        if self.verbosity >= Verbosity::Info {
            match self.started {
                Some(started) => {
                    log::info!("[{}] finished in {:.3?}", self.label, started.elapsed())
                }
                None => log::info!("[{}] finished", self.label),
            }
        }
    }
}

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use sprite_assign::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Renders population-search progress as a bar on stderr.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::with_draw_target(Some(0), target).with_style(Self::bar_style());
        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb_clone = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::SearchStart {
                    n_struct,
                    n_combinations,
                } => {
                    pb.reset();
                    pb.set_length(n_struct);
                    pb.set_message(format!("{} combinations", n_combinations));
                }
                Progress::StructureDone { .. } => pb.inc(1),
                Progress::SearchFinish { best_structure } => {
                    pb.finish_with_message(format!("best structure {}", best_structure));
                }
                Progress::ClusterSkipped {
                    n_combinations,
                    limit,
                } => {
                    pb.abandon_with_message(format!(
                        "skipped: {} combinations > limit {}",
                        n_combinations, limit
                    ));
                }
            }
        })
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<24} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .expect("Failed to create bar style template")
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

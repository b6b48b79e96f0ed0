/// Milestones of a population search.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    SearchStart { n_struct: u64, n_combinations: u64 },
    /// Emitted once per structure, in completion order.
    StructureDone { structure: usize, rg2: f64 },
    SearchFinish { best_structure: usize },
    ClusterSkipped { n_combinations: u64, limit: u64 },
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards search progress to an optional observer.
///
/// The callback may be invoked from several worker threads at once when the
/// `parallel` feature is enabled.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

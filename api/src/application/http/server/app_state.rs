use std::sync::Arc;

use labellens_core::{application::LabelLensService, domain::label_analysis::LabelAnalysisService};

use crate::args::Args;

/// Shared handler state. Generic over the analysis service so tests can swap the model.
#[derive(Clone)]
pub struct AppState<S = LabelLensService>
where
    S: LabelAnalysisService + Clone + 'static,
{
    pub args: Arc<Args>,
    pub service: S,
}

impl<S> AppState<S>
where
    S: LabelAnalysisService + Clone + 'static,
{
    pub fn new(args: Arc<Args>, service: S) -> Self {
        Self { args, service }
    }
}

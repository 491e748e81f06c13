use std::sync::Arc;

use tastefusion_core::application::TasteFusionService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: TasteFusionService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: TasteFusionService) -> Self {
        Self { args, service }
    }
}

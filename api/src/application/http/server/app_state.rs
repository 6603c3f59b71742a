use std::sync::Arc;

use dieta_core::application::DietaService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: DietaService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: DietaService) -> Self {
        Self { args, service }
    }
}

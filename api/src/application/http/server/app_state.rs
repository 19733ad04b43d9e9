use std::sync::Arc;

use skinsafe_core::application::SkinsafeService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: SkinsafeService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SkinsafeService) -> Self {
        Self { args, service }
    }
}

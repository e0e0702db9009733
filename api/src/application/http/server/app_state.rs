use std::sync::Arc;

use supomeshi_core::application::SupomeshiService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: SupomeshiService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SupomeshiService) -> Self {
        Self { args, service }
    }
}

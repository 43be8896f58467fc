use std::{sync::Arc, time::Instant};

use consumewise_core::application::ConsumeWiseService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<ConsumeWiseService>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: ConsumeWiseService) -> Self {
        Self {
            args,
            service: Arc::new(service),
            started_at: Instant::now(),
        }
    }
}

use std::sync::Arc;

use crate::platform::PlatformClient;

#[derive(Clone)]
pub struct AppState {
    pub platform: Arc<dyn PlatformClient>,
}

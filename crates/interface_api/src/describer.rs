//! Description service used when no image model is attached

use async_trait::async_trait;
use core_kernel::{DescriptionService, DomainPort, ImageRef, PortError};
use tracing::debug;

/// Refuses every image; callers are expected to send narrative text
pub struct UnconfiguredDescriptionService;

impl DomainPort for UnconfiguredDescriptionService {}

#[async_trait]
impl DescriptionService for UnconfiguredDescriptionService {
    async fn describe(&self, image: &ImageRef) -> Result<String, PortError> {
        debug!(image = %image, "Image description requested without an image model");
        Err(PortError::unavailable("image description model"))
    }
}

use futures::StreamExt;

use crate::services::common::Property;

/// Process-wide abort flag observed by background monitors.
///
/// Clones share the same flag. Once requested it stays set.
#[derive(Clone, Debug)]
pub struct AbortSignal {
    flag: Property<bool>,
}

impl AbortSignal {
    /// Create a signal that has not been requested yet
    pub fn new() -> Self {
        Self {
            flag: Property::new(false),
        }
    }

    /// Request every observer to stop
    pub fn request(&self) {
        self.flag.set(true);
    }

    /// Whether an abort has been requested
    pub fn is_requested(&self) -> bool {
        self.flag.get()
    }

    /// Resolve once an abort has been requested
    pub async fn requested(&self) {
        let mut changes = Box::pin(self.flag.watch());
        while let Some(aborted) = changes.next().await {
            if aborted {
                return;
            }
        }

        std::future::pending::<()>().await;
    }
}

impl Default for AbortSignal {
    fn default() -> Self {
        Self::new()
    }
}

use crate::ports::RequestClassifierPort;
use std::sync::Arc;
use tracing::debug;
use webgate_domain::{Disposition, HostAction};

/// Classifier verdict paired with the host action it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestVerdict {
    pub disposition: Disposition,
    pub action: HostAction,
}

pub struct ClassifyRequestUseCase {
    classifier: Arc<dyn RequestClassifierPort>,
}

impl ClassifyRequestUseCase {
    pub fn new(classifier: Arc<dyn RequestClassifierPort>) -> Self {
        Self { classifier }
    }

    pub fn execute(&self, url: &str, is_main_frame: bool) -> RequestVerdict {
        let disposition = self.classifier.classify(url, is_main_frame);
        let action = HostAction::for_request(disposition, is_main_frame);

        debug!(
            url,
            is_main_frame,
            disposition = %disposition,
            action = %action,
            blocked = disposition.is_blocked(),
            matched_domain = self.classifier.policy().matching_allowed_domain(url),
            media_kind = self.classifier.media_kind(url).map(|k| k.as_str()),
            matched_ad = self.classifier.matching_ad_domain(url),
            "Request classified"
        );

        RequestVerdict {
            disposition,
            action,
        }
    }
}

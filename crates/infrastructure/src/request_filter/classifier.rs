use super::ads::{is_ad_url, matching_ad_domain};
use super::media::{is_media_url, media_kind};
use std::sync::Arc;
use webgate_application::ports::RequestClassifierPort;
use webgate_domain::{Disposition, MediaKind, PolicyConfig};

/// Decide the disposition of one request against `policy`.
///
/// Pure: the result depends only on the arguments. The order of the checks is
/// the tie-break contract between overlapping rules.
///
/// Top-level navigations:
///   empty URL / not allow-listed → BlockDomainNotAllowed
///   ad URL (ad blocker on)       → AllowMainNavigationBlockedAd
///   otherwise                    → Allow
///
/// Sub-resources skip the allow-list:
///   empty URL                    → BlockDomainNotAllowed
///   media URL (block media on)   → BlockMediaSubresource
///   ad URL (ad blocker on)       → BlockAdSubresource
///   otherwise                    → Allow
#[inline]
pub fn classify(url: &str, is_main_frame: bool, policy: &PolicyConfig) -> Disposition {
    if url.is_empty() {
        return Disposition::BlockDomainNotAllowed;
    }

    if is_main_frame {
        if !policy.is_url_allowed(url) {
            return Disposition::BlockDomainNotAllowed;
        }
        if policy.ad_blocker() && is_ad_url(url) {
            return Disposition::AllowMainNavigationBlockedAd;
        }
        return Disposition::Allow;
    }

    if policy.block_media() && is_media_url(url) {
        return Disposition::BlockMediaSubresource;
    }
    if policy.ad_blocker() && is_ad_url(url) {
        return Disposition::BlockAdSubresource;
    }
    Disposition::Allow
}

/// The request policy engine.
///
/// Holds only the shared, immutable policy; the lookup tables are process-wide
/// statics. Cloning is an `Arc` bump and instances can be shared across
/// interception threads without locking.
#[derive(Debug, Clone)]
pub struct RequestClassifier {
    policy: Arc<PolicyConfig>,
}

impl RequestClassifier {
    pub fn new(policy: Arc<PolicyConfig>) -> Self {
        Self { policy }
    }
}

impl RequestClassifierPort for RequestClassifier {
    #[inline]
    fn classify(&self, url: &str, is_main_frame: bool) -> Disposition {
        classify(url, is_main_frame, &self.policy)
    }

    fn is_media_url(&self, url: &str) -> bool {
        is_media_url(url)
    }

    fn is_ad_url(&self, url: &str) -> bool {
        is_ad_url(url)
    }

    fn media_kind(&self, url: &str) -> Option<MediaKind> {
        media_kind(url)
    }

    fn matching_ad_domain(&self, url: &str) -> Option<&'static str> {
        matching_ad_domain(url)
    }

    fn policy(&self) -> &PolicyConfig {
        &self.policy
    }
}

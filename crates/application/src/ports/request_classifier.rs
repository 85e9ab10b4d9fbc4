use webgate_domain::{Disposition, MediaKind, PolicyConfig};

/// Application-layer port for the request policy engine.
///
/// All request interception goes through this port. The implementation lives
/// in the infrastructure layer and is injected at startup.
///
/// Every method is synchronous, allocation-free and safe to call concurrently
/// from any interception thread: the policy is immutable after load and the
/// lookup tables are process-wide constants.
pub trait RequestClassifierPort: Send + Sync {
    /// Decide what happens to a request.
    ///
    /// Evaluation order:
    ///   1. Empty URL                         → BlockDomainNotAllowed
    ///   2. Main frame, not on allow-list     → BlockDomainNotAllowed
    ///   3. Main frame, ad URL (ad blocker)   → AllowMainNavigationBlockedAd
    ///   4. Main frame                        → Allow
    ///   5. Sub-resource, media (block media) → BlockMediaSubresource
    ///   6. Sub-resource, ad URL (ad blocker) → BlockAdSubresource
    ///   7. Sub-resource                      → Allow
    fn classify(&self, url: &str, is_main_frame: bool) -> Disposition;

    /// Case-insensitive media extension / embedded player match.
    fn is_media_url(&self, url: &str) -> bool;

    /// Case-insensitive ad / tracking domain fragment match.
    fn is_ad_url(&self, url: &str) -> bool;

    /// Media category of `url`, for diagnostics.
    fn media_kind(&self, url: &str) -> Option<MediaKind>;

    /// The ad fragment contained in `url`, for diagnostics.
    fn matching_ad_domain(&self, url: &str) -> Option<&'static str>;

    /// The policy this classifier evaluates against.
    fn policy(&self) -> &PolicyConfig;
}

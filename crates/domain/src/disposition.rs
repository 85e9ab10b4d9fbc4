use std::fmt;

/// Notice the host shows when a navigation is refused.
pub const URL_NOT_ALLOWED_NOTICE: &str = "This URL is not allowed";

/// Verdict for a single request.
///
/// Produced fresh per request; holds no reference to the policy it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disposition {
    /// Request proceeds unmodified.
    Allow,
    /// Top-level navigation to an ad domain. Suppressed, but it passed the
    /// allow-list so the host has already shown its progress indicator.
    AllowMainNavigationBlockedAd,
    /// Target matched no allowed domain. Terminal for the navigation.
    BlockDomainNotAllowed,
    /// Media sub-resource while media blocking is on.
    BlockMediaSubresource,
    /// Ad sub-resource while the ad blocker is on.
    BlockAdSubresource,
}

impl Disposition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Allow => "ALLOW",
            Disposition::AllowMainNavigationBlockedAd => "ALLOW_MAIN_NAVIGATION_BLOCKED_AD",
            Disposition::BlockDomainNotAllowed => "BLOCK_DOMAIN_NOT_ALLOWED",
            Disposition::BlockMediaSubresource => "BLOCK_MEDIA_SUBRESOURCE",
            Disposition::BlockAdSubresource => "BLOCK_AD_SUBRESOURCE",
        }
    }

    /// True for the `BLOCK_*` verdicts. Both `ALLOW*` verdicts passed the
    /// allow-list and report false.
    pub fn is_blocked(&self) -> bool {
        !matches!(
            self,
            Disposition::Allow | Disposition::AllowMainNavigationBlockedAd
        )
    }

    pub fn all() -> &'static [Disposition] {
        &[
            Disposition::Allow,
            Disposition::AllowMainNavigationBlockedAd,
            Disposition::BlockDomainNotAllowed,
            Disposition::BlockMediaSubresource,
            Disposition::BlockAdSubresource,
        ]
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Neutral response the host substitutes for a dropped sub-resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticResponse {
    pub mime_type: &'static str,
    pub encoding: &'static str,
    pub body: &'static [u8],
}

impl SyntheticResponse {
    pub const EMPTY: SyntheticResponse = SyntheticResponse {
        mime_type: "text/plain",
        encoding: "UTF-8",
        body: &[],
    };
}

/// What the host must do with a request, derived from its `Disposition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    /// Sub-resource fetch continues untouched.
    Proceed,
    /// Show the progress indicator and load the navigation.
    LoadWithProgress,
    /// Drop the navigation. `hide_progress` tells the host to clear an
    /// indicator that no page-finished event will ever clear.
    SuppressNavigation { hide_progress: bool },
    /// Answer the request with a synthetic response instead of fetching it.
    RespondEmpty(SyntheticResponse),
    /// Abandon the navigation and surface a notice to the user.
    RefuseWithNotice { message: &'static str },
}

impl HostAction {
    pub fn for_request(disposition: Disposition, is_main_frame: bool) -> Self {
        match disposition {
            Disposition::Allow if is_main_frame => HostAction::LoadWithProgress,
            Disposition::Allow => HostAction::Proceed,
            Disposition::AllowMainNavigationBlockedAd => HostAction::SuppressNavigation {
                hide_progress: true,
            },
            Disposition::BlockMediaSubresource | Disposition::BlockAdSubresource => {
                HostAction::RespondEmpty(SyntheticResponse::EMPTY)
            }
            Disposition::BlockDomainNotAllowed => HostAction::RefuseWithNotice {
                message: URL_NOT_ALLOWED_NOTICE,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HostAction::Proceed => "proceed",
            HostAction::LoadWithProgress => "load-with-progress",
            HostAction::SuppressNavigation { .. } => "suppress-navigation",
            HostAction::RespondEmpty(_) => "respond-empty",
            HostAction::RefuseWithNotice { .. } => "refuse-with-notice",
        }
    }
}

impl fmt::Display for HostAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

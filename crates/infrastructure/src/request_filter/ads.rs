use aho_corasick::AhoCorasick;
use std::sync::LazyLock;

/// Ad and tracking fragments. Plain substrings: no wildcard or TLD awareness.
pub const AD_DOMAINS: &[&str] = &[
    "doubleclick.net",
    "googlesyndication.com",
    "googleadservices.com",
    "advertising.com",
    "adnxs.com",
    "quantserve.com",
    "scorecardresearch.com",
    "facebook.com/tr",
    "connect.facebook.net",
    "google-analytics.com",
    "googletagmanager.com",
    "advertising.amazon.com",
    "ads.yahoo.com",
];

static AD_PATTERNS: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(AD_DOMAINS)
        .expect("ad patterns are valid literals")
});

/// Case-insensitive containment of any `AD_DOMAINS` fragment.
#[inline]
pub fn is_ad_url(url: &str) -> bool {
    AD_PATTERNS.is_match(url)
}

/// The ad fragment found in `url`, for diagnostics.
pub fn matching_ad_domain(url: &str) -> Option<&'static str> {
    AD_PATTERNS
        .find(url)
        .map(|m| AD_DOMAINS[m.pattern().as_usize()])
}

//! Request policy engine: allow-list, media and ad detection.
pub mod ads;
pub mod classifier;
pub mod media;

pub use ads::{is_ad_url, matching_ad_domain, AD_DOMAINS};
pub use classifier::{classify, RequestClassifier};
pub use media::{is_media_url, media_kind};

use aho_corasick::AhoCorasick;
use std::sync::LazyLock;
use webgate_domain::MediaKind;

pub const IMAGE_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".webp", ".svg", ".ico",
];

pub const VIDEO_EXTENSIONS: &[&str] = &[
    ".mp4", ".webm", ".ogg", ".mov", ".avi", ".mkv", ".flv", ".m4v", ".3gp",
];

/// `.ogg` is also listed under video. Video is checked first, so an `.ogg`
/// URL reports `MediaKind::Video`; the boolean answer is the same either way.
pub const AUDIO_EXTENSIONS: &[&str] = &[
    ".mp3", ".wav", ".ogg", ".m4a", ".aac", ".flac", ".wma",
];

/// Embedded player paths. Matched anywhere in the URL.
pub const EMBED_PATTERNS: &[&str] = &[
    "youtube.com/embed",
    "youtube-nocookie.com/embed",
    "player.vimeo.com",
    "dailymotion.com/embed",
    "streamable.com/e/",
    "streamable.com/o/",
];

const EXTENSION_TABLES: [(MediaKind, &[&str]); 3] = [
    (MediaKind::Image, IMAGE_EXTENSIONS),
    (MediaKind::Video, VIDEO_EXTENSIONS),
    (MediaKind::Audio, AUDIO_EXTENSIONS),
];

/// Substring automaton over `"{ext}?"` (extension followed by a query string)
/// and the embedded player paths. `kinds[pattern_id]` is the category.
struct MediaPatterns {
    automaton: AhoCorasick,
    kinds: Vec<MediaKind>,
}

static MEDIA_PATTERNS: LazyLock<MediaPatterns> = LazyLock::new(|| {
    let mut patterns: Vec<String> = Vec::new();
    let mut kinds: Vec<MediaKind> = Vec::new();

    for (kind, table) in EXTENSION_TABLES {
        for ext in table {
            let pattern = format!("{ext}?");
            if !patterns.contains(&pattern) {
                patterns.push(pattern);
                kinds.push(kind);
            }
        }
    }
    for pattern in EMBED_PATTERNS {
        patterns.push((*pattern).to_string());
        kinds.push(MediaKind::EmbeddedPlayer);
    }

    let automaton = AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(&patterns)
        .expect("media patterns are valid literals");

    MediaPatterns { automaton, kinds }
});

#[inline]
fn ends_with_ignore_ascii_case(haystack: &str, suffix: &str) -> bool {
    let (h, s) = (haystack.as_bytes(), suffix.as_bytes());
    h.len() >= s.len() && h[h.len() - s.len()..].eq_ignore_ascii_case(s)
}

/// Category of a media URL, or `None` if it is not one.
///
/// Check order:
///   1. Extension suffix (image, video, audio)
///   2. Extension followed by `?` anywhere, or an embedded player path
pub fn media_kind(url: &str) -> Option<MediaKind> {
    for (kind, table) in EXTENSION_TABLES {
        if table.iter().any(|ext| ends_with_ignore_ascii_case(url, ext)) {
            return Some(kind);
        }
    }

    let patterns = &*MEDIA_PATTERNS;
    patterns
        .automaton
        .find(url)
        .map(|m| patterns.kinds[m.pattern().as_usize()])
}

#[inline]
pub fn is_media_url(url: &str) -> bool {
    media_kind(url).is_some()
}

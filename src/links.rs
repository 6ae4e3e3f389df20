/// Link classification and display labels for Artist Moodboard
use url::Url;

/// Longest label shown for a link before it gets truncated
pub const LABEL_MAX_CHARS: usize = 15;

const ELLIPSIS: &str = "...";

/// File extensions that mark a link as an image
const IMAGE_EXTENSIONS: [&str; 7] = [".jpg", ".jpeg", ".png", ".gif", ".webp", ".svg", ".bmp"];

/// Hosts whose links are treated as images even without an extension
const IMAGE_HOSTS: [&str; 11] = [
    "imgur",
    "i.redd.it",
    "pbs.twimg",
    "instagram",
    "artstation",
    "deviantart",
    "pixiv",
    "behance",
    "dribbble",
    "unsplash",
    "pexels",
];

/// Decide whether a link probably points at an image
///
/// The check is a case-insensitive substring match against a fixed list of
/// image extensions and image-hosting sites. It never parses the link, so
/// malformed input simply classifies as "not an image".
///
/// Examples:
/// - https://i.imgur.com/abc → true
/// - https://x.com/pic.PNG → true
/// - https://example.com/about → false
pub fn is_image_url(link: &str) -> bool {
    let lower = link.to_lowercase();

    IMAGE_EXTENSIONS.iter().any(|ext| lower.contains(ext))
        || IMAGE_HOSTS.iter().any(|host| lower.contains(host))
}

/// Build the short label shown for a link in the artist list
///
/// Algorithm:
/// 1. Parse the link as a URL
/// 2. Use the last non-empty path segment
/// 3. If the path is empty or just "/", use the hostname
/// 4. If parsing fails, use the raw string
/// 5. Truncate to `LABEL_MAX_CHARS` characters and append "..."
pub fn format_link_label(link: &str) -> String {
    let label = Url::parse(link)
        .ok()
        .and_then(|url| last_path_segment(&url).or_else(|| url.host_str().map(str::to_string)))
        .unwrap_or_else(|| link.to_string());

    truncate_label(&label)
}

fn last_path_segment(url: &Url) -> Option<String> {
    url.path_segments()?
        .filter(|segment| !segment.is_empty())
        .last()
        .map(str::to_string)
}

fn truncate_label(label: &str) -> String {
    if label.chars().count() > LABEL_MAX_CHARS {
        let head: String = label.chars().take(LABEL_MAX_CHARS).collect();
        format!("{}{}", head, ELLIPSIS)
    } else {
        label.to_string()
    }
}

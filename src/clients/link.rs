const ALBUM_MARKER: &str = "/album/";
const TRACK_MARKER: &str = "/track/";

/// What a direct link points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    Album(String),
    Track(String),
}

/// Extracts the album or track id from links like `https://host/album/42`.
///
/// The album marker wins when both are present. Returns `None` when neither
/// marker is found or the segment after it is empty.
pub fn parse_link(url: &str) -> Option<LinkTarget> {
    if let Some(rest) = after_marker(url, ALBUM_MARKER) {
        return first_segment(rest).map(LinkTarget::Album);
    }
    after_marker(url, TRACK_MARKER)
        .and_then(first_segment)
        .map(LinkTarget::Track)
}

fn after_marker<'a>(url: &'a str, marker: &str) -> Option<&'a str> {
    url.split_once(marker).map(|(_, rest)| rest)
}

fn first_segment(rest: &str) -> Option<String> {
    let id = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn album_link() {
        assert_eq!(
            parse_link("https://x/album/42"),
            Some(LinkTarget::Album("42".into()))
        );
        assert_eq!(
            parse_link("https://x/album/42/tracks"),
            Some(LinkTarget::Album("42".into()))
        );
    }

    #[test]
    fn track_link() {
        assert_eq!(
            parse_link("https://x/track/9"),
            Some(LinkTarget::Track("9".into()))
        );
        assert_eq!(
            parse_link("https://x/en/track/9?utm=share"),
            Some(LinkTarget::Track("9".into()))
        );
    }

    #[test]
    fn album_marker_checked_first() {
        assert_eq!(
            parse_link("https://x/track/1/album/7"),
            Some(LinkTarget::Album("7".into()))
        );
        // an empty album id does not fall through to the track marker
        assert_eq!(parse_link("https://x/album//track/3"), None);
    }

    #[test]
    fn unsupported_links() {
        assert_eq!(parse_link("https://x/other/1"), None);
        assert_eq!(parse_link("https://x/album/"), None);
        assert_eq!(parse_link("https://x/track/?q=1"), None);
        assert_eq!(parse_link(""), None);
    }
}

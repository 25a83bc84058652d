//! Core record types for one scraping run.

/// Suffix the CMS appends when it elides a long title/artist/genre.
pub const TRUNCATION_MARKER: &str = "..";

/// One submission from the venue listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Identifier from the `num` query parameter of the detail link.
    /// Kept as text to preserve whatever format the site uses.
    pub number: String,
    pub title: String,
    pub artist: String,
    pub genre: String,
    /// Absolute detail-page URL: venue host and path, the link's query string.
    pub url: String,
}

impl Entry {
    /// True if any display field ends with the truncation marker, meaning
    /// the detail page has to be fetched to recover the full text. Fields
    /// are checked in the fixed order title, artist, genre and the first
    /// match decides.
    pub fn is_truncated(&self) -> bool {
        [&self.title, &self.artist, &self.genre]
            .iter()
            .any(|s| s.ends_with(TRUNCATION_MARKER))
    }
}

/// Counters for the silent-skip and best-effort branches of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ListingStats {
    /// Listing boxes seen on the page.
    pub boxes: usize,
    /// Boxes dropped because their detail link did not parse.
    pub skipped: usize,
    /// Entries left with truncated fields after a failed detail fetch.
    pub stale: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, artist: &str, genre: &str) -> Entry {
        Entry {
            number: "1".into(),
            title: title.into(),
            artist: artist.into(),
            genre: genre.into(),
            url: "http://example.com/list.php?num=1".into(),
        }
    }

    #[test]
    fn truncation_checks_all_three_fields() {
        assert!(entry("Long Song Titl..", "DJ Foo", "Electronic").is_truncated());
        assert!(entry("Song", "Very Long Artist Nam..", "Pop").is_truncated());
        assert!(entry("Song", "Artist", "Progressive Hous..").is_truncated());
        assert!(!entry("Song", "Artist", "Pop").is_truncated());
    }

    #[test]
    fn marker_must_be_a_suffix() {
        assert!(!entry("Dotted.. Middle", "Artist", "Pop").is_truncated());
    }
}

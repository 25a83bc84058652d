//! Listing-page extraction and best-effort detail-page resolution.
//!
//! The listing page shows one "box" per submission. Long titles, artist
//! names, and genres are elided with a `..` suffix; recovering the full
//! text takes a second fetch of the entry's detail page, which lives on
//! the venue's own host and script path and is addressed purely by query
//! string.

use scraper::Html;
use url::Url;

use crate::dom;
use crate::error::FetchError;
use crate::fetch::force_http;
use crate::types::{Entry, ListingStats};

// Listing page structure.
const BOX: &str = ".main_body_div .pabat_readform_list_box";
const BOX_TITLE_LINK: &str = ".pabat_readform_list_title_name a";
const BOX_ARTIST: &str = ".pabat_readform_list_artist span";
const BOX_GENRE: &str = ".pabat_readform_list_genre span";

// Detail page structure.
const DETAIL_TITLE: &str = ".pabat_readform_title";
const DETAIL_GENRE: &str = ".pabat_readform_genre";
const DETAIL_INFO_TEXT: &str =
    ".pabat_readform_border_r_2_ano .pabat_readform_w445_in_cont .pabat_readform_w445_right_text";

/// Untruncated fields recovered from a detail page.
#[derive(Debug, PartialEq, Eq)]
pub struct DetailFields {
    pub title: String,
    pub artist: String,
    pub genre: String,
}

/// Walk the listing document and collect entries in document order.
///
/// `fetch_detail` is invoked at most once per entry, only when a field is
/// truncated. Boxes whose detail link does not parse are dropped silently;
/// entries whose detail fetch fails keep their truncated fields. Both
/// branches are counted in the returned stats, so the caller can report
/// them without changing the output.
pub fn collect_entries<F>(doc: &Html, venue: &Url, mut fetch_detail: F) -> (Vec<Entry>, ListingStats)
where
    F: FnMut(&Url) -> Result<Html, FetchError>,
{
    let mut entries = Vec::new();
    let mut stats = ListingStats::default();

    for bx in dom::select_all(doc.root_element(), BOX) {
        stats.boxes += 1;
        let Some(mut entry) = extract_box(bx, venue) else {
            stats.skipped += 1;
            continue;
        };

        if entry.is_truncated() && !resolve_entry(&mut entry, &mut fetch_detail) {
            stats.stale += 1;
        }

        entries.push(entry);
    }

    (entries, stats)
}

/// Pull the five fields out of one listing box.
///
/// Returns `None` when the box's href does not parse as a URL relative to
/// the venue; the box is then skipped without an error.
fn extract_box(bx: scraper::ElementRef, venue: &Url) -> Option<Entry> {
    let title = dom::first_text(bx, BOX_TITLE_LINK);
    let href = dom::first_attr(bx, BOX_TITLE_LINK, "href").unwrap_or_default();
    let artist = dom::first_text(bx, BOX_ARTIST);
    let genre = dom::first_text(bx, BOX_GENRE);

    let link = Url::options().base_url(Some(venue)).parse(&href).ok()?;

    let number = link
        .query_pairs()
        .find(|(key, _)| key == "num")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default();

    // Detail pages live at the venue's own host and path; only the query
    // string of the listing link carries over.
    let mut url = venue.clone();
    force_http(&mut url);
    url.set_query(link.query());

    Some(Entry {
        number,
        title,
        artist,
        genre,
        url: url.to_string(),
    })
}

/// Fetch the detail page and overwrite the entry's display fields.
///
/// Returns false when resolution failed and the entry was left as-is.
/// `url` and `number` are never touched.
fn resolve_entry<F>(entry: &mut Entry, fetch_detail: &mut F) -> bool
where
    F: FnMut(&Url) -> Result<Html, FetchError>,
{
    let Ok(mut detail_url) = Url::parse(&entry.url) else {
        return false;
    };
    force_http(&mut detail_url);

    match fetch_detail(&detail_url) {
        Ok(doc) => {
            let fields = resolve_fields(&doc);
            entry.title = fields.title;
            entry.artist = fields.artist;
            entry.genre = fields.genre;
            true
        }
        Err(_) => false,
    }
}

/// Extract the untruncated fields from a detail document.
///
/// The artist is split across "info text" nodes: the first is the primary
/// artist, the second (when present and not the placeholder `-`) is a
/// secondary artist joined with `" / "`. Any further nodes are unrelated
/// info rows and ignored.
pub fn resolve_fields(doc: &Html) -> DetailFields {
    let root = doc.root_element();

    let title = dom::first_text(root, DETAIL_TITLE);
    let genre = dom::first_text(root, DETAIL_GENRE);

    let info = dom::select_all(root, DETAIL_INFO_TEXT);
    let mut artist = info.first().map(|el| dom::text_of(*el)).unwrap_or_default();
    if let Some(second) = info.get(1) {
        let text = dom::text_of(*second);
        if text != "-" {
            artist.push_str(" / ");
            artist.push_str(&text);
        }
    }

    DetailFields { title, artist, genre }
}

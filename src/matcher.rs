use crate::config::BrandEntry;
use crate::model::SearchResultItem;
use url::Url;

/// Maps a result item to the first configured brand whose terms match.
///
/// The search text is the lowercased title and snippet joined by a single
/// space; the host is the lowercased domain component of the link. A term
/// matching either is enough. Brands are tried in declaration order and the
/// first brand with a matching term wins, so overlapping terms resolve to
/// whichever brand is declared first.
pub fn classify<'a>(item: &SearchResultItem, brands: &'a [BrandEntry]) -> Option<&'a str> {
    let text = format!("{} {}", item.title, item.snippet).to_lowercase();
    let host = host_of(&item.link);

    for brand in brands {
        for term in &brand.terms {
            if text.contains(term.as_str()) || host.contains(term.as_str()) {
                return Some(&brand.name);
            }
        }
    }
    None
}

/// Lowercased host of a link, or empty when the link does not parse.
/// Malformed links never fail classification, they just match nothing.
fn host_of(link: &str) -> String {
    Url::parse(link)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_lowercase()))
        .unwrap_or_default()
}

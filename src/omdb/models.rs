/// Value the catalog puts in the poster field when it has no image for a
/// title.
pub const POSTER_SENTINEL: &str = "N/A";

/// Normalized per-movie record used throughout the view layer.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieSummary {
    /// Opaque catalog identifier, unique within one result set. Used as the
    /// list key when rendering.
    pub id: String,
    pub title: String,
    /// May be the `"N/A"` sentinel; prefer [`MovieSummary::poster`].
    pub poster_url: String,
    /// The catalog returns years as text ("2024", sometimes "2024–").
    pub year: String,
    /// Content rating. The search endpoint never returns it; carried for a
    /// future detail lookup.
    pub rating: Option<String>,
}

impl MovieSummary {
    /// Poster URL with the catalog's "no image" sentinel mapped to `None`,
    /// so callers cannot forget the fallback rendering.
    pub fn poster(&self) -> Option<&str> {
        if self.poster_url.is_empty() || self.poster_url == POSTER_SENTINEL {
            None
        } else {
            Some(&self.poster_url)
        }
    }
}

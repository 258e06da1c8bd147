/// Descriptive fields for one movie, as reported by the metadata source.
///
/// Values are kept verbatim; `rating` in particular is whatever string the
/// upstream returned (e.g. `"8.8"` or `"N/A"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieMetadata {
    pub title: String,
    pub plot: String,
    pub poster: String,
    pub rating: String,
    pub genre: String,
    pub director: String,
}

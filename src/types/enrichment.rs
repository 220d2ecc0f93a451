/// Partial bookmark fields derived for a URL by the metadata lookup.
///
/// `degraded` is set when the lookup failed or reported failure and the
/// fields were filled from local fallbacks instead; the caller may surface
/// that as a soft warning, but the result is still usable.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedMetadata {
    /// The normalized URL the lookup ran against.
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub favicon: Option<String>,
    pub degraded: bool,
}

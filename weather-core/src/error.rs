//! Error kinds produced while fetching and converting a weather feed.

/// Every failure the fetch pipeline can surface to its caller.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// Network failure or non-success HTTP status.
    #[error("transport failure: {0}")]
    Transport(String),

    /// Response body is not a well-formed markup document.
    #[error("parse failure: {0}")]
    Parse(String),

    /// A required section is absent from the document.
    #[error("missing section: <{0}>")]
    MissingSection(String),

    /// No `[a-z_]+.gif` token could be found in an icon reference.
    #[error("malformed icon reference: {0:?}")]
    MalformedIconReference(String),
}

impl From<quick_xml::Error> for WeatherError {
    fn from(err: quick_xml::Error) -> Self {
        WeatherError::Parse(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for WeatherError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        WeatherError::Parse(err.to_string())
    }
}

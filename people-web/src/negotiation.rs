//! Request format negotiation.

use std::convert::Infallible;

use http::request::Parts;

mod header {
    //! Well-known header names.

    pub(super) const X_REQUESTED_WITH: http::HeaderName =
        http::HeaderName::from_static("x-requested-with");
}

/// A request format extractor.
///
/// The format is decided once per request, from its declared `Content-Type`,
/// and handlers branch on the result. A request declares JSON by setting a
/// `Content-Type` whose media type is `application/json`; any other request is
/// treated as a regular browser request.
#[derive(Debug, Clone)]
pub enum ContentFormat {
    /// A regular browser request, answered with HTML.
    Html,

    /// A request that declares a JSON body and expects a JSON response.
    Json {
        /// Whether the request carried the `X-Requested-With` marker header.
        requested_with: bool,
    },
}

impl<S: Send + Sync> axum::extract::FromRequestParts<S> for ContentFormat {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let headers = &parts.headers;

        let declares_json = headers
            .get(http::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .is_some_and(|media_type| media_type.trim().eq_ignore_ascii_case("application/json"));

        if declares_json {
            Ok(Self::Json {
                requested_with: headers.get(header::X_REQUESTED_WITH).is_some(),
            })
        } else {
            Ok(Self::Html)
        }
    }
}

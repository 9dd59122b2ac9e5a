//! The application routes.

use std::fmt::Display;

/// The set of routes served by the person controller.
///
/// Each variant renders as the path it is served at, which is how templates
/// get their form actions and how handlers build redirects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonRoute {
    /// The home page, which doubles as a creation form.
    Index,

    /// The standalone creation form.
    NewForm,

    /// The detail page of one person.
    Show {
        /// The person identifier.
        id: i64,
    },

    /// The edit form of one person.
    Edit {
        /// The person identifier.
        id: i64,
    },

    /// The list of all persons.
    List,

    /// The submission target of the standalone creation form.
    Create,

    /// The submission target of the home page form.
    AddPerson,

    /// The JSON listing endpoint.
    ListJson,
}

impl Display for PersonRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index | Self::AddPerson => write!(f, "/"),
            Self::NewForm => write!(f, "/persons/new"),
            Self::Show { id } => write!(f, "/persons/{id}"),
            Self::Edit { id } => write!(f, "/persons/{id}/edit"),
            Self::List | Self::Create => write!(f, "/persons"),
            Self::ListJson => write!(f, "/api/persons"),
        }
    }
}

impl PersonRoute {
    /// Turn the route into a redirect response.
    pub fn as_redirect_response(&self) -> axum::response::Response {
        http::Response::builder()
            .status(http::StatusCode::SEE_OTHER)
            .header(http::header::LOCATION, self.to_string())
            .body(axum::body::Body::empty())
            .expect("failed to create redirect response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(PersonRoute::Index.to_string(), "/");
        assert_eq!(PersonRoute::NewForm.to_string(), "/persons/new");
        assert_eq!(PersonRoute::Show { id: 42 }.to_string(), "/persons/42");
        assert_eq!(PersonRoute::Edit { id: 42 }.to_string(), "/persons/42/edit");
        assert_eq!(PersonRoute::List.to_string(), "/persons");
        assert_eq!(PersonRoute::Create.to_string(), "/persons");
        assert_eq!(PersonRoute::AddPerson.to_string(), "/");
        assert_eq!(PersonRoute::ListJson.to_string(), "/api/persons");
    }

    #[test]
    fn test_as_redirect_response() {
        let response = PersonRoute::List.as_redirect_response();

        assert_eq!(response.status(), http::StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(http::header::LOCATION).unwrap(),
            "/persons"
        );
    }
}

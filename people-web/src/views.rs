//! The HTML views.

use crate::{
    form::{FormErrors, PersonForm},
    model::Person,
    route::PersonRoute,
};

/// Render a template into an Axum response.
pub trait RenderIntoResponse: Sized {
    /// Render the template into a response.
    fn render_into_response(self) -> axum::response::Response;
}

impl<T: askama::Template> RenderIntoResponse for T {
    fn render_into_response(self) -> axum::response::Response {
        use axum::response::IntoResponse;
        use tracing::error;

        match self.render() {
            Ok(body) => {
                let mut headers = http::HeaderMap::new();
                headers.insert(
                    http::header::CONTENT_TYPE,
                    http::HeaderValue::from_static("text/html; charset=utf-8"),
                );

                (http::StatusCode::OK, headers, body).into_response()
            }
            Err(err) => {
                error!(
                    "Failed to render template `{}`: {err}",
                    std::any::type_name::<T>()
                );

                http::StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// A person, as shown in HTML pages.
///
/// Stored persons always have an identifier, so the `Option` is flattened away
/// before the value reaches a template.
#[derive(Debug)]
pub struct PersonRow {
    /// The person identifier.
    pub id: i64,

    /// The person's name.
    pub name: String,

    /// The person's age, in years.
    pub age: i32,
}

impl PersonRow {
    /// Get the URL of the person's detail page.
    pub fn show_url(&self) -> String {
        PersonRoute::Show { id: self.id }.to_string()
    }

    /// Get the URL of the person's edit form.
    pub fn edit_url(&self) -> String {
        PersonRoute::Edit { id: self.id }.to_string()
    }
}

impl From<Person> for PersonRow {
    fn from(person: Person) -> Self {
        Self {
            id: person.id.unwrap_or_default(),
            name: person.name,
            age: person.age,
        }
    }
}

/// The home page.
///
/// Embeds the same creation form as [`PersonFormPage`], except that it posts
/// back to the home page.
#[derive(Debug, askama::Template)]
#[template(path = "index.html.jinja")]
pub struct IndexPage {
    /// The creation form state.
    pub form: PersonForm,

    /// The validation errors of the last submission.
    pub errors: FormErrors,

    /// The URL the form posts to.
    pub action: String,
}

impl IndexPage {
    /// Create the page, with a blank form.
    pub fn new() -> Self {
        Self::with_rejected_form(PersonForm::default(), FormErrors::default())
    }

    /// Create the page again, echoing back a rejected submission.
    pub fn with_rejected_form(form: PersonForm, errors: FormErrors) -> Self {
        Self {
            form,
            errors,
            action: PersonRoute::AddPerson.to_string(),
        }
    }
}

impl Default for IndexPage {
    fn default() -> Self {
        Self::new()
    }
}

/// The person creation and edition form page.
#[derive(Debug, askama::Template)]
#[template(path = "person-form.html.jinja")]
pub struct PersonFormPage {
    /// The form state.
    pub form: PersonForm,

    /// The validation errors of the last submission.
    pub errors: FormErrors,

    /// The URL the form posts to.
    pub action: String,
}

impl PersonFormPage {
    /// Create the page, with a blank form.
    pub fn new() -> Self {
        Self::with_rejected_form(PersonForm::default(), FormErrors::default())
    }

    /// Create the page, pre-filled with an existing person.
    pub fn edit(person: &Person) -> Self {
        Self::with_rejected_form(PersonForm::from_person(person), FormErrors::default())
    }

    /// Create the page again, echoing back a rejected submission.
    pub fn with_rejected_form(form: PersonForm, errors: FormErrors) -> Self {
        Self {
            form,
            errors,
            action: PersonRoute::Create.to_string(),
        }
    }
}

impl Default for PersonFormPage {
    fn default() -> Self {
        Self::new()
    }
}

/// The page listing all persons.
#[derive(Debug, askama::Template)]
#[template(path = "person-list.html.jinja")]
pub struct PersonListPage {
    /// The persons to list, in storage order.
    pub persons: Vec<PersonRow>,
}

impl PersonListPage {
    /// Create the page.
    pub fn new(persons: Vec<Person>) -> Self {
        Self {
            persons: persons.into_iter().map(Into::into).collect(),
        }
    }
}

/// The detail page of one person.
#[derive(Debug, askama::Template)]
#[template(path = "person-detail.html.jinja")]
pub struct PersonDetailPage {
    /// The person to show.
    pub person: PersonRow,
}

impl PersonDetailPage {
    /// Create the page.
    pub fn new(person: Person) -> Self {
        Self {
            person: person.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use askama::Template;

    use super::*;

    #[test]
    fn test_index_page_posts_back_to_the_home_page() {
        let html = IndexPage::new().render().unwrap();

        assert!(html.contains(r#"<form method="post" action="/">"#));
        assert!(html.contains(r#"name="name""#));
        assert!(html.contains(r#"name="age""#));
    }

    #[test]
    fn test_new_person_page_posts_to_the_collection() {
        let html = PersonFormPage::new().render().unwrap();

        assert!(html.contains(r#"<form method="post" action="/persons">"#));
        assert!(html.contains("New person"));
    }

    #[test]
    fn test_edit_page_is_prefilled_and_carries_the_id() {
        let person = Person {
            id: Some(7),
            ..Person::new("Ada", 30)
        };

        let html = PersonFormPage::edit(&person).render().unwrap();

        assert!(html.contains("Edit person"));
        assert!(html.contains(r#"value="Ada""#));
        assert!(html.contains(r#"value="30""#));
        assert!(html.contains(r#"<input type="hidden" name="id" value="7">"#));
    }

    #[test]
    fn test_rejected_form_echoes_values_and_messages() {
        let form = PersonForm {
            id: None,
            name: "Ada".to_owned(),
            age: "abc".to_owned(),
        };
        let errors = form.validate().unwrap_err();

        let html = PersonFormPage::with_rejected_form(form, errors)
            .render()
            .unwrap();

        assert!(html.contains(r#"value="Ada""#));
        assert!(html.contains(r#"value="abc""#));
        assert!(html.contains("must be a whole number"));
    }

    #[test]
    fn test_list_page_links_every_person() {
        let html = PersonListPage::new(vec![
            Person {
                id: Some(1),
                ..Person::new("Ada", 30)
            },
            Person {
                id: Some(2),
                ..Person::new("Alan", 41)
            },
        ])
        .render()
        .unwrap();

        assert!(html.contains(r#"<a href="/persons/1">Ada</a>"#));
        assert!(html.contains(r#"<a href="/persons/2">Alan</a>"#));
        assert!(html.contains(r#"href="/persons/2/edit""#));
    }

    #[test]
    fn test_list_page_without_persons() {
        let html = PersonListPage::new(Vec::new()).render().unwrap();

        assert!(html.contains("No persons yet."));
    }

    #[test]
    fn test_detail_page_shows_the_person() {
        let html = PersonDetailPage::new(Person {
            id: Some(3),
            ..Person::new("Grace", 36)
        })
        .render()
        .unwrap();

        assert!(html.contains("Grace"));
        assert!(html.contains("36"));
        assert!(html.contains(r#"href="/persons/3/edit""#));
    }
}

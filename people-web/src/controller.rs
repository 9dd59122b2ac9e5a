//! The person controller.

use std::sync::Arc;

use axum::{
    Router,
    extract::{FromRequest, Path, Request, State},
    response::{IntoResponse, Response},
    routing::get,
};
use axum_extra::extract::Form;
use serde::Serialize;
use tracing::{debug, error, info};

use crate::{
    form::{FormErrors, PersonForm},
    model::Person,
    negotiation::ContentFormat,
    route::PersonRoute,
    store::{PersonStore, StoreError},
    views::{IndexPage, PersonDetailPage, PersonFormPage, PersonListPage, RenderIntoResponse},
};

/// The largest accepted JSON creation request body, in bytes.
const MAX_JSON_BODY_SIZE: usize = 64 * 1024;

/// The web controller for the person directory.
///
/// The controller exposes one method per operation and holds its collaborators
/// directly: construct it with a [`PersonStore`] implementation and turn it
/// into a router with [`PersonController::into_router`].
#[derive(Debug)]
pub struct PersonController<S> {
    /// The person store.
    store: Arc<S>,
}

impl<S> Clone for PersonController<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: PersonStore> PersonController<S> {
    /// Create a controller over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Turn the controller into a router serving all of its operations.
    pub fn into_router(self) -> Router {
        Router::new()
            .route("/", get(render_index::<S>).post(add_person::<S>))
            .route("/persons", get(list::<S>).post(create::<S>))
            .route("/persons/new", get(render_new_form::<S>))
            .route("/persons/{id}", get(show::<S>))
            .route("/persons/{id}/edit", get(edit::<S>))
            .route("/api/persons", get(list_as_json::<S>))
            .with_state(self)
    }

    /// Render the home page, with a blank creation form.
    pub fn render_index(&self) -> Response {
        IndexPage::new().render_into_response()
    }

    /// Render the standalone creation form.
    pub fn render_new_form(&self) -> Response {
        PersonFormPage::new().render_into_response()
    }

    /// Show one person, as HTML or JSON depending on the request format.
    ///
    /// An unknown identifier redirects to the person list instead of producing
    /// a 404, for both formats.
    pub async fn show(&self, id: i64, format: ContentFormat) -> Result<Response, StoreError> {
        match self.store.find_by_id(id).await? {
            Some(person) => Ok(match format {
                ContentFormat::Json { .. } => axum::Json(person).into_response(),
                ContentFormat::Html => PersonDetailPage::new(person).render_into_response(),
            }),
            None => {
                debug!("No person with id {id}: redirecting to the list.");

                Ok(PersonRoute::List.as_redirect_response())
            }
        }
    }

    /// Render the edit form of one person, pre-filled with their values.
    ///
    /// An unknown identifier redirects to the person list.
    pub async fn edit(&self, id: i64) -> Result<Response, StoreError> {
        match self.store.find_by_id(id).await? {
            Some(person) => Ok(PersonFormPage::edit(&person).render_into_response()),
            None => {
                debug!("No person with id {id}: redirecting to the list.");

                Ok(PersonRoute::List.as_redirect_response())
            }
        }
    }

    /// List all persons, as HTML or JSON depending on the request format.
    pub async fn list(&self, format: ContentFormat) -> Result<Response, StoreError> {
        let persons = self.store.list().await?;

        Ok(match format {
            ContentFormat::Json { .. } => axum::Json(persons).into_response(),
            ContentFormat::Html => PersonListPage::new(persons).render_into_response(),
        })
    }

    /// List all persons as JSON, regardless of the request format.
    pub async fn list_as_json(&self) -> Result<Response, StoreError> {
        let persons = self.store.list().await?;

        Ok(axum::Json(persons).into_response())
    }

    /// Create a person from the standalone creation form or from a JSON body.
    ///
    /// A request that declares JSON must also carry the `X-Requested-With`
    /// marker header; without it, the request is rejected with a CSRF error
    /// envelope. The JSON path always answers with a status envelope, while
    /// the form path redirects to the person list on success and re-renders
    /// the form with field errors on rejected input.
    pub async fn create(
        &self,
        format: ContentFormat,
        request: Request,
    ) -> Result<Response, StoreError> {
        match format {
            ContentFormat::Json { requested_with } => {
                if !requested_with {
                    debug!("Rejecting a JSON creation request without the marker header.");

                    return Ok(CreateStatus::error("CSRF protection").into_response());
                }

                let body = match axum::body::to_bytes(request.into_body(), MAX_JSON_BODY_SIZE).await
                {
                    Ok(body) => body,
                    Err(err) => {
                        debug!("Failed to read a JSON creation request body: {err}");

                        return Ok(CreateStatus::error("parse error").into_response());
                    }
                };

                let person = match serde_json::from_slice::<Person>(&body) {
                    Ok(person) => person,
                    Err(err) => {
                        debug!("Failed to parse a JSON creation request body: {err}");

                        return Ok(CreateStatus::error("parse error").into_response());
                    }
                };

                let person = self.store.create(person).await?;

                info!("Created person `{}` from a JSON request.", person.name);

                Ok(CreateStatus::success().into_response())
            }
            ContentFormat::Html => {
                let form = match Form::<PersonForm>::from_request(request, &()).await {
                    Ok(Form(form)) => form,
                    Err(rejection) => return Ok(rejection.into_response()),
                };

                self.submit_person_form(form, SubmitOrigin::NewForm).await
            }
        }
    }

    /// Create a person from the form embedded in the home page.
    ///
    /// Same validation as [`PersonController::create`], but success redirects
    /// to the home page and rejected input re-renders the home page.
    pub async fn add_person(&self, form: PersonForm) -> Result<Response, StoreError> {
        self.submit_person_form(form, SubmitOrigin::Index).await
    }

    /// Validate a submitted form and create the person.
    ///
    /// The origin decides where success redirects to and which page carries
    /// the field errors back to the user.
    async fn submit_person_form(
        &self,
        form: PersonForm,
        origin: SubmitOrigin,
    ) -> Result<Response, StoreError> {
        match form.validate() {
            Ok(person) => {
                let person = self.store.create(person).await?;

                info!("Created person `{}`.", person.name);

                Ok(origin.success_route().as_redirect_response())
            }
            Err(errors) => {
                debug!("Rejected a person form submission: re-rendering with field errors.");

                Ok(origin.failure_view(form, errors))
            }
        }
    }
}

/// Where a person form was submitted from.
///
/// Each origin carries its own success redirect and failure view, mirroring
/// the two POST entry points.
#[derive(Debug, Clone, Copy)]
enum SubmitOrigin {
    /// The standalone creation form.
    NewForm,

    /// The creation form embedded in the home page.
    Index,
}

impl SubmitOrigin {
    /// Get the route to redirect to after a successful creation.
    fn success_route(self) -> PersonRoute {
        match self {
            Self::NewForm => PersonRoute::List,
            Self::Index => PersonRoute::Index,
        }
    }

    /// Re-render the originating page, echoing back the rejected form.
    fn failure_view(self, form: PersonForm, errors: FormErrors) -> Response {
        match self {
            Self::NewForm => {
                PersonFormPage::with_rejected_form(form, errors).render_into_response()
            }
            Self::Index => IndexPage::with_rejected_form(form, errors).render_into_response(),
        }
    }
}

/// The JSON status envelope returned by the JSON creation path.
#[derive(Debug, Serialize)]
struct CreateStatus {
    /// Either `success` or `error`.
    status: &'static str,

    /// The error message, present on errors only.
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

impl CreateStatus {
    /// The envelope of a successful creation.
    fn success() -> Self {
        Self {
            status: "success",
            message: None,
        }
    }

    /// The envelope of a rejected creation request.
    fn error(message: &'static str) -> Self {
        Self {
            status: "error",
            message: Some(message),
        }
    }
}

impl IntoResponse for CreateStatus {
    fn into_response(self) -> Response {
        let status = if self.message.is_none() {
            http::StatusCode::OK
        } else {
            http::StatusCode::BAD_REQUEST
        };

        (status, axum::Json(self)).into_response()
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        error!("The person store failed: {self}");

        http::StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

async fn render_index<S: PersonStore>(State(controller): State<PersonController<S>>) -> Response {
    controller.render_index()
}

async fn render_new_form<S: PersonStore>(
    State(controller): State<PersonController<S>>,
) -> Response {
    controller.render_new_form()
}

async fn show<S: PersonStore>(
    State(controller): State<PersonController<S>>,
    Path(id): Path<i64>,
    format: ContentFormat,
) -> Result<Response, StoreError> {
    controller.show(id, format).await
}

async fn edit<S: PersonStore>(
    State(controller): State<PersonController<S>>,
    Path(id): Path<i64>,
) -> Result<Response, StoreError> {
    controller.edit(id).await
}

async fn list<S: PersonStore>(
    State(controller): State<PersonController<S>>,
    format: ContentFormat,
) -> Result<Response, StoreError> {
    controller.list(format).await
}

async fn list_as_json<S: PersonStore>(
    State(controller): State<PersonController<S>>,
) -> Result<Response, StoreError> {
    controller.list_as_json().await
}

async fn create<S: PersonStore>(
    State(controller): State<PersonController<S>>,
    format: ContentFormat,
    request: Request,
) -> Result<Response, StoreError> {
    controller.create(format, request).await
}

async fn add_person<S: PersonStore>(
    State(controller): State<PersonController<S>>,
    Form(form): Form<PersonForm>,
) -> Result<Response, StoreError> {
    controller.add_person(form).await
}

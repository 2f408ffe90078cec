use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;

use crate::access::{
    authorize_path, navigation_for, portal_title, quick_actions_for, AccessDecision,
    SessionProvider, SIGN_IN_PATH,
};

use super::domain::{ApplicantId, EmploymentKind, ListingId};
use super::query::{FilterParams, SalaryBucket, SortKey};
use super::repository::{ApplicationStore, CatalogRepository};
use super::service::{ApplicationDraft, CatalogService, CatalogServiceError};

/// Shared state for the catalog routes: the service plus the stub session.
pub struct CatalogApi<R, A, S> {
    pub service: Arc<CatalogService<R, A>>,
    pub sessions: Arc<S>,
}

impl<R, A, S> Clone for CatalogApi<R, A, S> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            sessions: self.sessions.clone(),
        }
    }
}

/// Router builder exposing the catalog, navigation, and access endpoints.
pub fn catalog_router<R, A, S>(api: CatalogApi<R, A, S>) -> Router
where
    R: CatalogRepository + 'static,
    A: ApplicationStore + 'static,
    S: SessionProvider + 'static,
{
    Router::new()
        .route("/api/v1/jobs", get(search_handler::<R, A, S>))
        .route("/api/v1/jobs/:listing_id", get(detail_handler::<R, A, S>))
        .route(
            "/api/v1/jobs/:listing_id/apply",
            post(apply_handler::<R, A, S>),
        )
        .route(
            "/api/v1/me/applications",
            get(my_applications_handler::<R, A, S>),
        )
        .route("/api/v1/categories", get(categories_handler::<R, A, S>))
        .route("/api/v1/navigation", get(navigation_handler::<R, A, S>))
        .route(
            "/api/v1/access/decision",
            post(access_decision_handler::<R, A, S>),
        )
        .route(
            "/api/v1/session",
            get(session_handler::<R, A, S>).delete(sign_out_handler::<R, A, S>),
        )
        .with_state(api)
}

/// Wire form of the filter controls. Unknown employment kinds, buckets, and
/// sort keys behave like the cleared control rather than failing the request.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchRequest {
    #[serde(default)]
    search: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    category: String,
    /// Comma-separated employment kinds, e.g. `full-time,contract`.
    #[serde(default)]
    job_type: String,
    #[serde(default)]
    experience: String,
    #[serde(default)]
    remote_only: bool,
    #[serde(default)]
    salary: String,
    #[serde(default)]
    sort: String,
}

impl SearchRequest {
    pub(crate) fn into_params(self) -> FilterParams {
        let kinds: Vec<EmploymentKind> = self
            .job_type
            .split(',')
            .filter_map(EmploymentKind::parse)
            .collect();
        FilterParams {
            search: self.search,
            location: self.location,
            category: self.category,
            kinds,
            experience: self.experience,
            remote_only: self.remote_only,
            salary: SalaryBucket::parse(&self.salary),
            sort: SortKey::parse(&self.sort).unwrap_or_default(),
        }
    }
}

fn service_error_response(error: CatalogServiceError) -> Response {
    let status = match &error {
        CatalogServiceError::SignInRequired => StatusCode::UNAUTHORIZED,
        CatalogServiceError::RoleNotAllowed(_) => StatusCode::FORBIDDEN,
        CatalogServiceError::UnknownListing(_) => StatusCode::NOT_FOUND,
        CatalogServiceError::AlreadyApplied(_) => StatusCode::CONFLICT,
        CatalogServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let mut payload = json!({ "error": error.to_string() });
    if matches!(error, CatalogServiceError::SignInRequired) {
        payload["redirect_to"] = json!(SIGN_IN_PATH);
    }
    (status, Json(payload)).into_response()
}

pub(crate) async fn search_handler<R, A, S>(
    State(api): State<CatalogApi<R, A, S>>,
    Query(request): Query<SearchRequest>,
) -> Response
where
    R: CatalogRepository + 'static,
    A: ApplicationStore + 'static,
    S: SessionProvider + 'static,
{
    let params = request.into_params();
    match api.service.search(&params) {
        Ok(outcome) => {
            let payload = json!({
                "total": outcome.total,
                "matched": outcome.matched.len(),
                "sort": params.sort.label(),
                "listings": outcome.matched,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn detail_handler<R, A, S>(
    State(api): State<CatalogApi<R, A, S>>,
    Path(listing_id): Path<String>,
) -> Response
where
    R: CatalogRepository + 'static,
    A: ApplicationStore + 'static,
    S: SessionProvider + 'static,
{
    let id = ListingId(listing_id);
    match api.service.listing_detail(&id) {
        Ok(Some(detail)) => (StatusCode::OK, Json(detail)).into_response(),
        Ok(None) => {
            // Display state, not a failure: mirror the "Job Not Found" screen.
            let payload = json!({
                "listing_id": id.0,
                "error": "job not found",
                "back_to": "/jobs",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn apply_handler<R, A, S>(
    State(api): State<CatalogApi<R, A, S>>,
    Path(listing_id): Path<String>,
    Json(draft): Json<ApplicationDraft>,
) -> Response
where
    R: CatalogRepository + 'static,
    A: ApplicationStore + 'static,
    S: SessionProvider + 'static,
{
    let identity = api.sessions.current_identity();
    let applied_date = Local::now().date_naive();
    match api.service.apply(
        identity.as_ref(),
        &ListingId(listing_id),
        draft,
        applied_date,
    ) {
        Ok(application) => (StatusCode::ACCEPTED, Json(application)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn my_applications_handler<R, A, S>(
    State(api): State<CatalogApi<R, A, S>>,
) -> Response
where
    R: CatalogRepository + 'static,
    A: ApplicationStore + 'static,
    S: SessionProvider + 'static,
{
    let Some(identity) = api.sessions.current_identity() else {
        return service_error_response(CatalogServiceError::SignInRequired);
    };
    let applicant = ApplicantId(identity.email);
    match api.service.applications_for(&applicant) {
        Ok(overview) => (StatusCode::OK, Json(overview)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn categories_handler<R, A, S>(State(api): State<CatalogApi<R, A, S>>) -> Response
where
    R: CatalogRepository + 'static,
    A: ApplicationStore + 'static,
    S: SessionProvider + 'static,
{
    match api.service.category_summaries() {
        Ok(summaries) => (StatusCode::OK, Json(summaries)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn navigation_handler<R, A, S>(State(api): State<CatalogApi<R, A, S>>) -> Response
where
    R: CatalogRepository + 'static,
    A: ApplicationStore + 'static,
    S: SessionProvider + 'static,
{
    // The sidebar renders nothing for signed-out visitors.
    match api.sessions.current_identity() {
        Some(identity) => {
            let payload = json!({
                "signed_in": true,
                "portal": portal_title(identity.role),
                "items": navigation_for(identity.role),
                "quick_actions": quick_actions_for(identity.role),
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        None => {
            let payload = json!({
                "signed_in": false,
                "items": [],
                "quick_actions": [],
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AccessDecisionRequest {
    pub(crate) path: String,
}

pub(crate) async fn access_decision_handler<R, A, S>(
    State(api): State<CatalogApi<R, A, S>>,
    Json(request): Json<AccessDecisionRequest>,
) -> Json<serde_json::Value>
where
    R: CatalogRepository + 'static,
    A: ApplicationStore + 'static,
    S: SessionProvider + 'static,
{
    let identity = api.sessions.current_identity();
    let decision = authorize_path(identity.as_ref(), &request.path);
    let payload = match decision {
        AccessDecision::Render => json!({ "decision": decision, "path": request.path }),
        AccessDecision::RedirectToLogin => json!({
            "decision": decision,
            "path": request.path,
            "redirect_to": decision.redirect_target(),
        }),
    };
    Json(payload)
}

pub(crate) async fn session_handler<R, A, S>(State(api): State<CatalogApi<R, A, S>>) -> Response
where
    R: CatalogRepository + 'static,
    A: ApplicationStore + 'static,
    S: SessionProvider + 'static,
{
    match api.sessions.current_identity() {
        Some(identity) => {
            let payload = json!({ "signed_in": true, "identity": identity });
            (StatusCode::OK, Json(payload)).into_response()
        }
        None => {
            let payload = json!({ "signed_in": false });
            (StatusCode::OK, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn sign_out_handler<R, A, S>(State(api): State<CatalogApi<R, A, S>>) -> StatusCode
where
    R: CatalogRepository + 'static,
    A: ApplicationStore + 'static,
    S: SessionProvider + 'static,
{
    api.sessions.sign_out();
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{Identity, Role};
    use crate::catalog::domain::{Category, CompanyProfile, JobApplication, JobListing};
    use crate::catalog::repository::RepositoryError;
    use crate::catalog::seed;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct SeededCatalog;

    impl CatalogRepository for SeededCatalog {
        fn listings(&self) -> Result<Vec<JobListing>, RepositoryError> {
            Ok(seed::listings())
        }

        fn listing(&self, id: &ListingId) -> Result<Option<JobListing>, RepositoryError> {
            Ok(seed::listings().into_iter().find(|l| &l.id == id))
        }

        fn company_by_name(
            &self,
            name: &str,
        ) -> Result<Option<CompanyProfile>, RepositoryError> {
            Ok(seed::companies().into_iter().find(|c| c.name == name))
        }

        fn categories(&self) -> Result<Vec<Category>, RepositoryError> {
            Ok(seed::categories())
        }
    }

    #[derive(Default)]
    struct SeededStore {
        records: Mutex<HashMap<String, JobApplication>>,
    }

    impl ApplicationStore for SeededStore {
        fn insert(&self, application: JobApplication) -> Result<JobApplication, RepositoryError> {
            let mut guard = self.records.lock().expect("store mutex poisoned");
            guard.insert(application.id.0.clone(), application.clone());
            Ok(application)
        }

        fn for_applicant(
            &self,
            applicant: &ApplicantId,
        ) -> Result<Vec<JobApplication>, RepositoryError> {
            let guard = self.records.lock().expect("store mutex poisoned");
            Ok(guard
                .values()
                .filter(|record| &record.applicant_id == applicant)
                .cloned()
                .collect())
        }

        fn for_listing(
            &self,
            listing: &ListingId,
        ) -> Result<Vec<JobApplication>, RepositoryError> {
            let guard = self.records.lock().expect("store mutex poisoned");
            Ok(guard
                .values()
                .filter(|record| &record.job_id == listing)
                .cloned()
                .collect())
        }
    }

    #[derive(Default)]
    struct FixedSession {
        identity: Mutex<Option<Identity>>,
    }

    impl FixedSession {
        fn signed_in(identity: Identity) -> Self {
            Self {
                identity: Mutex::new(Some(identity)),
            }
        }
    }

    impl SessionProvider for FixedSession {
        fn current_identity(&self) -> Option<Identity> {
            self.identity.lock().expect("session mutex poisoned").clone()
        }

        fn sign_out(&self) {
            *self.identity.lock().expect("session mutex poisoned") = None;
        }
    }

    fn api(session: FixedSession) -> CatalogApi<SeededCatalog, SeededStore, FixedSession> {
        CatalogApi {
            service: Arc::new(CatalogService::new(
                Arc::new(SeededCatalog),
                Arc::new(SeededStore::default()),
            )),
            sessions: Arc::new(session),
        }
    }

    #[test]
    fn search_request_parses_job_types_and_sort() {
        let request = SearchRequest {
            job_type: "full-time,contract,freelance".to_string(),
            salary: "100k+".to_string(),
            sort: "salary-high".to_string(),
            ..SearchRequest::default()
        };
        let params = request.into_params();
        assert_eq!(
            params.kinds,
            vec![EmploymentKind::FullTime, EmploymentKind::Contract]
        );
        assert_eq!(params.salary, Some(SalaryBucket::Above100k));
        assert_eq!(params.sort, SortKey::SalaryHigh);
    }

    #[test]
    fn unknown_sort_and_bucket_fall_back_to_defaults() {
        let request = SearchRequest {
            salary: "1M+".to_string(),
            sort: "loudest".to_string(),
            ..SearchRequest::default()
        };
        let params = request.into_params();
        assert_eq!(params.salary, None);
        assert_eq!(params.sort, SortKey::Newest);
    }

    #[tokio::test]
    async fn detail_endpoint_resolves_unknown_ids_to_not_found() {
        let api = api(FixedSession::default());
        let response =
            detail_handler(State(api), Path("999".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn apply_without_session_points_at_sign_in() {
        let api = api(FixedSession::default());
        let response = apply_handler(
            State(api),
            Path("1".to_string()),
            Json(ApplicationDraft::default()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn student_session_can_apply() {
        let student = Identity::new(Role::Student, "Sam Doe", "sam@example.edu");
        let api = api(FixedSession::signed_in(student));
        let response = apply_handler(
            State(api),
            Path("1".to_string()),
            Json(ApplicationDraft::default()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }

    #[tokio::test]
    async fn company_session_cannot_apply() {
        let recruiter = Identity::new(Role::Company, "Recruiter", "hr@acme.com");
        let api = api(FixedSession::signed_in(recruiter));
        let response = apply_handler(
            State(api),
            Path("1".to_string()),
            Json(ApplicationDraft::default()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn access_decision_reports_redirects_for_gated_paths() {
        let api = api(FixedSession::default());
        let Json(body) = access_decision_handler(
            State(api),
            Json(AccessDecisionRequest {
                path: "/admin/users".to_string(),
            }),
        )
        .await;
        assert_eq!(body["decision"], "redirect_to_login");
        assert_eq!(body["redirect_to"], SIGN_IN_PATH);
    }

    #[tokio::test]
    async fn navigation_is_empty_when_signed_out() {
        let api = api(FixedSession::default());
        let response = navigation_handler(State(api)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}

//! HTTP client for the Campus REST API

use std::time::Duration;

use reqwest::{header, Client, RequestBuilder, StatusCode};
use serde::Deserialize;

use crate::error::{ApiError, Result};
use crate::session::SessionStore;
use crate::types::*;

/// HTTP client for the Campus REST API
///
/// Reads the shared session store before every request and attaches
/// `Authorization: Bearer <access>` when a session is present. It never
/// writes the store; sign-in and sign-out do that.
///
/// # Example
///
/// ```rust,no_run
/// use campus_client::{ApiClient, ClientConfig, SessionStore};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = SessionStore::new();
/// let client = ApiClient::new(ClientConfig::default(), store.clone());
///
/// // Unauthenticated until a session is stored
/// let tokens = client.login("amara", "hunter2").await?;
///
/// // Browse the course catalog
/// let courses = client.list_courses().await?;
/// # Ok(())
/// # }
/// ```
pub struct ApiClient {
    config: ClientConfig,
    store: SessionStore,
    client: Client,
}

impl ApiClient {
    /// Create a new API client sharing the given session store.
    pub fn new(config: ClientConfig, store: SessionStore) -> Self {
        let mut config = config;
        config.base_url = config.base_url.trim_end_matches('/').to_string();

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            config,
            store,
            client,
        }
    }

    /// The session store this client reads tokens from.
    pub fn session(&self) -> &SessionStore {
        &self.store
    }

    // ==================== Auth API ====================

    /// Exchange credentials for a token pair.
    ///
    /// Bad credentials surface as `ApiError::Authentication`. The returned
    /// tokens are not stored here; the caller decides what to do with them.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair> {
        let url = format!("{}/auth/login/", self.config.base_url);
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self
            .authed(self.client.post(&url))
            .header(header::CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Self-registration for student and mentor accounts
    pub async fn register(&self, request: &RegisterRequest) -> Result<()> {
        let url = format!("{}/auth/register/", self.config.base_url);

        let response = self
            .authed(self.client.post(&url))
            .header(header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        self.handle_no_content(response).await
    }

    // ==================== Accounts API ====================

    /// List all users (admin)
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let url = format!("{}/accounts/admin/users/", self.config.base_url);
        let response = self.authed(self.client.get(&url)).send().await?;
        self.handle_response(response).await
    }

    /// Delete a user (admin). Returns false when the user no longer exists.
    pub async fn delete_user(&self, id: i64) -> Result<bool> {
        let url = format!("{}/accounts/admin/users/{}/delete/", self.config.base_url, id);
        let response = self.authed(self.client.delete(&url)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        self.handle_no_content(response).await?;
        Ok(true)
    }

    /// List mentor accounts
    pub async fn list_mentors(&self) -> Result<Vec<UserRef>> {
        let url = format!("{}/accounts/mentors/", self.config.base_url);
        let response = self.authed(self.client.get(&url)).send().await?;
        self.handle_response(response).await
    }

    /// List student accounts
    pub async fn list_students(&self) -> Result<Vec<UserRef>> {
        let url = format!("{}/accounts/students/", self.config.base_url);
        let response = self.authed(self.client.get(&url)).send().await?;
        self.handle_response(response).await
    }

    /// Create a mentor account (admin)
    pub async fn create_mentor(&self, request: &CreateMentorRequest) -> Result<()> {
        let url = format!("{}/accounts/admin/create-mentor/", self.config.base_url);

        let response = self
            .authed(self.client.post(&url))
            .header(header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        self.handle_no_content(response).await
    }

    // ==================== Courses API ====================

    /// List every course (admin)
    pub async fn list_courses_admin(&self) -> Result<Vec<Course>> {
        let url = format!("{}/courses/admin/", self.config.base_url);
        let response = self.authed(self.client.get(&url)).send().await?;
        self.handle_response(response).await
    }

    /// Create a course (admin)
    pub async fn create_course(&self, input: &CreateCourseInput) -> Result<()> {
        let url = format!("{}/courses/admin/", self.config.base_url);

        let response = self
            .authed(self.client.post(&url))
            .header(header::CONTENT_TYPE, "application/json")
            .json(input)
            .send()
            .await?;

        self.handle_no_content(response).await
    }

    /// Delete a course (admin). Returns false when it no longer exists.
    pub async fn delete_course(&self, id: i64) -> Result<bool> {
        let url = format!("{}/courses/admin/{}/delete/", self.config.base_url, id);
        let response = self.authed(self.client.delete(&url)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        self.handle_no_content(response).await?;
        Ok(true)
    }

    /// Courses belonging to the signed-in user (enrolled or owned)
    pub async fn list_my_courses(&self) -> Result<Vec<Course>> {
        let url = format!("{}/courses/my-courses/", self.config.base_url);
        let response = self.authed(self.client.get(&url)).send().await?;
        self.handle_response(response).await
    }

    /// Full course catalog
    pub async fn list_courses(&self) -> Result<Vec<Course>> {
        let url = format!("{}/courses/", self.config.base_url);
        let response = self.authed(self.client.get(&url)).send().await?;
        self.handle_response(response).await
    }

    /// List chapters of a course (admin/mentor management view)
    pub async fn list_chapters_admin(&self, course_id: i64) -> Result<Vec<Chapter>> {
        let url = format!("{}/courses/admin/{}/chapters/", self.config.base_url, course_id);
        let response = self.authed(self.client.get(&url)).send().await?;
        self.handle_response(response).await
    }

    /// Add a chapter to a course
    pub async fn create_chapter(&self, course_id: i64, input: &CreateChapterInput) -> Result<()> {
        let url = format!("{}/courses/admin/{}/chapters/", self.config.base_url, course_id);

        let response = self
            .authed(self.client.post(&url))
            .header(header::CONTENT_TYPE, "application/json")
            .json(input)
            .send()
            .await?;

        self.handle_no_content(response).await
    }

    /// Delete a chapter. Returns false when it no longer exists.
    pub async fn delete_chapter(&self, id: i64) -> Result<bool> {
        let url = format!("{}/courses/admin/chapters/{}/delete/", self.config.base_url, id);
        let response = self.authed(self.client.delete(&url)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        self.handle_no_content(response).await?;
        Ok(true)
    }

    /// Add a lesson to a chapter
    pub async fn create_lesson(&self, chapter_id: i64, input: &CreateLessonInput) -> Result<()> {
        let url = format!(
            "{}/courses/lessons/chapter/{}/create/",
            self.config.base_url, chapter_id
        );

        let response = self
            .authed(self.client.post(&url))
            .header(header::CONTENT_TYPE, "application/json")
            .json(input)
            .send()
            .await?;

        self.handle_no_content(response).await
    }

    /// List lessons of a chapter
    pub async fn list_lessons(&self, chapter_id: i64) -> Result<Vec<Lesson>> {
        let url = format!(
            "{}/courses/lessons/chapter/{}/",
            self.config.base_url, chapter_id
        );
        let response = self.authed(self.client.get(&url)).send().await?;
        self.handle_response(response).await
    }

    /// List chapters of a course (student view)
    pub async fn list_student_chapters(&self, course_id: i64) -> Result<Vec<Chapter>> {
        let url = format!(
            "{}/courses/student/{}/chapters/",
            self.config.base_url, course_id
        );
        let response = self.authed(self.client.get(&url)).send().await?;
        self.handle_response(response).await
    }

    // ==================== Progress API ====================

    /// Progress of the signed-in student in a course
    pub async fn get_course_progress(&self, course_id: i64) -> Result<CourseProgress> {
        let url = format!(
            "{}/courses/student/{}/progress/",
            self.config.base_url, course_id
        );
        let response = self.authed(self.client.get(&url)).send().await?;
        self.handle_response(response).await
    }

    /// Per-student progress roster for a course (admin/mentor)
    pub async fn list_students_progress(&self, course_id: i64) -> Result<Vec<StudentProgressRow>> {
        let url = format!(
            "{}/courses/admin/course/{}/students-progress/",
            self.config.base_url, course_id
        );
        let response = self.authed(self.client.get(&url)).send().await?;
        self.handle_response(response).await
    }

    /// Enroll a student in a course.
    ///
    /// A duplicate assignment comes back as `ApiError::Conflict`.
    pub async fn assign_course(&self, request: &AssignCourseRequest) -> Result<()> {
        let url = format!("{}/progress/assign/", self.config.base_url);

        let response = self
            .authed(self.client.post(&url))
            .header(header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        self.handle_no_content(response).await
    }

    /// Mark a lesson completed for the signed-in student.
    ///
    /// Re-submitting an already completed lesson comes back as
    /// `ApiError::Conflict`; callers reconcile that to the completed state.
    pub async fn complete_lesson(&self, lesson_id: i64) -> Result<()> {
        let url = format!(
            "{}/progress/lesson/{}/complete/",
            self.config.base_url, lesson_id
        );

        let response = self.authed(self.client.post(&url)).send().await?;
        self.handle_no_content(response).await
    }

    // ==================== Certificates API ====================

    /// Request a certificate for a completed course.
    ///
    /// Generation is idempotent server-side: repeating the call for an
    /// already certified course may return the same identifier.
    pub async fn generate_certificate(&self, course_id: i64) -> Result<GeneratedCertificate> {
        let url = format!(
            "{}/certificates/generate/{}/",
            self.config.base_url, course_id
        );

        let response = self.authed(self.client.post(&url)).send().await?;
        self.handle_response(response).await
    }

    /// Download the certificate artifact by id
    pub async fn download_certificate(&self, certificate_id: &str) -> Result<Vec<u8>> {
        let url = format!(
            "{}/certificates/download/{}/",
            self.config.base_url,
            urlencoding::encode(certificate_id)
        );

        let response = self.authed(self.client.get(&url)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(certificate_id.to_string()));
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, body));
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// Public certificate verification.
    ///
    /// Unauthenticated by design: no bearer header, no session store read,
    /// reachable with no session at all.
    pub async fn verify_certificate(&self, certificate_id: &str) -> Result<VerifyResponse> {
        let url = format!(
            "{}/certificates/verify/{}/",
            self.config.base_url,
            urlencoding::encode(certificate_id)
        );

        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    // ==================== Helper Methods ====================

    /// Attach the bearer token when a session is present.
    ///
    /// Reads the store at send time so a sign-out between two calls is
    /// always observed.
    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.store.access_token() {
            Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, body));
        }

        // Parse from text so a malformed payload surfaces as a JSON error,
        // not a transport error.
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn handle_no_content(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, body));
        }
        Ok(())
    }
}

/// Map a non-success status to the error taxonomy
fn status_error(status: StatusCode, body: String) -> ApiError {
    let mut message = error_message(&body);
    if message.is_empty() {
        message = status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string();
    }

    match status {
        StatusCode::UNAUTHORIZED => ApiError::Authentication(message),
        StatusCode::FORBIDDEN => ApiError::Forbidden(message),
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        StatusCode::CONFLICT => ApiError::Conflict(message),
        _ => ApiError::Server {
            status: status.as_u16(),
            message,
        },
    }
}

/// Pull a human-readable message out of an error body.
///
/// The backend wraps errors as {"detail"}, {"message"} or {"error"}
/// depending on the view; fall back to the raw body.
fn error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        detail: Option<String>,
        message: Option<String>,
        error: Option<String>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.detail.or(parsed.message).or(parsed.error) {
            return message;
        }
    }
    body.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Role, Session};

    fn test_session() -> Session {
        Session {
            access: "tok".to_string(),
            refresh: "ref".to_string(),
            role: Role::Student,
            user_id: None,
            expires_at: None,
        }
    }

    #[test]
    fn test_base_url_trailing_slash_normalized() {
        let client = ApiClient::new(
            ClientConfig {
                base_url: "http://localhost:8000/api/".to_string(),
                ..Default::default()
            },
            SessionStore::new(),
        );
        assert_eq!(client.config.base_url, "http://localhost:8000/api");
    }

    #[test]
    fn test_bearer_attached_only_when_signed_in() {
        let store = SessionStore::new();
        let client = ApiClient::new(ClientConfig::default(), store.clone());
        let url = "http://localhost:8000/api/courses/";

        let request = client.authed(client.client.get(url)).build().unwrap();
        assert!(request.headers().get(header::AUTHORIZATION).is_none());

        store.set(test_session());
        let request = client.authed(client.client.get(url)).build().unwrap();
        assert_eq!(
            request.headers().get(header::AUTHORIZATION).unwrap(),
            "Bearer tok"
        );

        // Sign-out between calls is observed on the next request.
        store.clear();
        let request = client.authed(client.client.get(url)).build().unwrap();
        assert!(request.headers().get(header::AUTHORIZATION).is_none());
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"detail":"No active account"}"#),
            "No active account"
        );
        assert_eq!(error_message(r#"{"message":"nope"}"#), "nope");
        assert_eq!(error_message(r#"{"error":"boom"}"#), "boom");
        assert_eq!(error_message("plain text"), "plain text");
        assert_eq!(error_message(""), "");
    }

    #[test]
    fn test_status_error_mapping() {
        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED, String::new()),
            ApiError::Authentication(_)
        ));
        assert!(matches!(
            status_error(StatusCode::FORBIDDEN, String::new()),
            ApiError::Forbidden(_)
        ));
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND, String::new()),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            status_error(StatusCode::CONFLICT, String::new()),
            ApiError::Conflict(_)
        ));

        match status_error(StatusCode::BAD_GATEWAY, "upstream down".to_string()) {
            ApiError::Server { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream down");
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[test]
    fn test_status_error_falls_back_to_reason() {
        match status_error(StatusCode::UNAUTHORIZED, String::new()) {
            ApiError::Authentication(message) => assert_eq!(message, "Unauthorized"),
            other => panic!("expected authentication error, got {other:?}"),
        }
    }
}

//! Wire types for the Campus API

use serde::{Deserialize, Serialize};

use crate::session::Role;

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the Campus REST API
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            timeout_secs: 30,
        }
    }
}

// ============================================================================
// Auth Types
// ============================================================================

/// Request body for login
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Token pair returned by login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// Access token (embeds the role claim)
    pub access: String,
    /// Refresh token
    pub refresh: String,
}

/// Request body for self-registration
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub role: Role,
}

// ============================================================================
// Account Types
// ============================================================================

/// User row from the admin users listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub role: Role,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Minimal user reference from the mentor/student pickers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRef {
    pub id: i64,
    pub username: String,
}

/// Request body for admin mentor creation
#[derive(Debug, Clone, Serialize)]
pub struct CreateMentorRequest {
    pub username: String,
    pub password: String,
}

// ============================================================================
// Course Types
// ============================================================================

/// Course as returned by the listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Owning mentor id
    #[serde(default)]
    pub mentor: Option<i64>,
}

/// Chapter within a course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub id: i64,
    pub title: String,
    /// Explicit ordering; lists are sorted by (position, id)
    #[serde(default)]
    pub position: Option<i64>,
}

/// Lesson within a chapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    /// Explicit ordering; lists are sorted by (position, id)
    #[serde(default)]
    pub position: Option<i64>,
}

/// Input for creating a course
#[derive(Debug, Clone, Serialize)]
pub struct CreateCourseInput {
    pub title: String,
    pub description: String,
    /// Owning mentor id
    pub mentor: i64,
}

/// Input for creating a chapter
#[derive(Debug, Clone, Serialize)]
pub struct CreateChapterInput {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

/// Input for creating a lesson
#[derive(Debug, Clone, Serialize)]
pub struct CreateLessonInput {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

// ============================================================================
// Progress Types
// ============================================================================

/// Request body for assigning a course to a student
#[derive(Debug, Clone, Serialize)]
pub struct AssignCourseRequest {
    pub student_id: i64,
    pub course_id: i64,
}

/// Per-course progress for the requesting student
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseProgress {
    /// Completion percentage as reported by the backend
    pub percentage: f64,
    /// Completed lesson ids, when the backend includes them
    #[serde(default)]
    pub completed_lessons: Vec<i64>,
}

/// Per-student progress row for a course's roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProgressRow {
    pub student_id: i64,
    pub student_name: String,
    pub percentage: f64,
}

// ============================================================================
// Certificate Types
// ============================================================================

/// Response from certificate generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedCertificate {
    pub certificate_id: String,
}

/// Response from the public verification endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub valid: bool,
    #[serde(default)]
    pub student: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub certificate_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000/api");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_user_deserializes_without_active_flag() {
        let user: User =
            serde_json::from_str(r#"{"id": 3, "username": "ada", "role": "MENTOR"}"#).unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.role, Role::Mentor);
        assert!(user.is_active);
    }

    #[test]
    fn test_chapter_position_defaults_to_none() {
        let chapter: Chapter = serde_json::from_str(r#"{"id": 1, "title": "Intro"}"#).unwrap();
        assert_eq!(chapter.position, None);

        let chapter: Chapter =
            serde_json::from_str(r#"{"id": 1, "title": "Intro", "position": 2}"#).unwrap();
        assert_eq!(chapter.position, Some(2));
    }

    #[test]
    fn test_create_lesson_input_skips_empty_fields() {
        let input = CreateLessonInput {
            title: "Borrowing".to_string(),
            content: None,
            video_url: None,
            position: None,
        };
        let json = serde_json::to_string(&input).unwrap();
        assert_eq!(json, r#"{"title":"Borrowing"}"#);
    }

    #[test]
    fn test_verify_response_invalid_shape() {
        let res: VerifyResponse = serde_json::from_str(r#"{"valid": false}"#).unwrap();
        assert!(!res.valid);
        assert_eq!(res.student, None);
        assert_eq!(res.course, None);
    }

    #[test]
    fn test_course_progress_without_completed_set() {
        let progress: CourseProgress = serde_json::from_str(r#"{"percentage": 62.5}"#).unwrap();
        assert_eq!(progress.percentage, 62.5);
        assert!(progress.completed_lessons.is_empty());
    }
}

//! Mentor dashboard controller

use campus_client::{
    ApiClient, AssignCourseRequest, Course, CreateChapterInput, StudentProgressRow, UserRef,
};
use tracing::{info, warn};

use crate::error::{Result, SdkError};
use crate::scope::ViewScope;

/// Outcome of assigning a course to a student
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOutcome {
    Assigned,
    /// The student already had the course; surfaces as a warning
    AlreadyAssigned,
}

/// View state for the mentor dashboard
#[derive(Debug, Default)]
pub struct MentorDashboard {
    pub students: Vec<UserRef>,
    pub courses: Vec<Course>,
    /// Course whose roster is on screen, if any
    pub progress_for: Option<i64>,
    pub progress_rows: Vec<StudentProgressRow>,
    scope: ViewScope,
}

impl MentorDashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the student picker and the course catalog.
    pub async fn load(&mut self, client: &ApiClient) -> Result<()> {
        let ticket = self.scope.ticket();
        let students = client.list_students().await?;
        let courses = client.list_courses().await?;

        if self.scope.is_current(ticket) {
            self.students = students;
            self.courses = courses;
        }
        Ok(())
    }

    /// Enroll a student in a course.
    ///
    /// Both picks are required. A duplicate enrollment degrades to
    /// AlreadyAssigned instead of failing.
    pub async fn assign_course(
        &self,
        client: &ApiClient,
        student_id: Option<i64>,
        course_id: Option<i64>,
    ) -> Result<AssignOutcome> {
        let (student_id, course_id) = match (student_id, course_id) {
            (Some(student), Some(course)) => (student, course),
            _ => {
                return Err(SdkError::Validation(
                    "pick a student and a course".to_string(),
                ))
            }
        };

        let request = AssignCourseRequest {
            student_id,
            course_id,
        };
        match client.assign_course(&request).await {
            Ok(()) => {
                info!(student_id, course_id, "course assigned");
                Ok(AssignOutcome::Assigned)
            }
            Err(e) if e.is_conflict() => {
                warn!(student_id, course_id, "course already assigned");
                Ok(AssignOutcome::AlreadyAssigned)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Add a chapter to one of this mentor's courses.
    pub async fn add_chapter(&self, client: &ApiClient, course_id: i64, title: &str) -> Result<()> {
        if title.trim().is_empty() {
            return Err(SdkError::Validation("chapter title is required".to_string()));
        }

        let input = CreateChapterInput {
            title: title.trim().to_string(),
            position: None,
        };
        client.create_chapter(course_id, &input).await?;
        info!(course_id, title = %input.title, "chapter added");
        Ok(())
    }

    /// Show the per-student roster for a course.
    pub async fn load_progress(&mut self, client: &ApiClient, course_id: i64) -> Result<()> {
        let ticket = self.scope.ticket();
        let rows = client.list_students_progress(course_id).await?;

        if self.scope.is_current(ticket) {
            self.progress_for = Some(course_id);
            self.progress_rows = rows;
        }
        Ok(())
    }

    pub fn leave(&mut self) {
        self.scope.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_client::{ClientConfig, SessionStore};

    fn offline_client() -> ApiClient {
        ApiClient::new(ClientConfig::default(), SessionStore::new())
    }

    #[tokio::test]
    async fn test_assign_requires_both_picks() {
        let client = offline_client();
        let dash = MentorDashboard::new();

        for (student, course) in [(None, None), (Some(1), None), (None, Some(2))] {
            let err = dash
                .assign_course(&client, student, course)
                .await
                .unwrap_err();
            assert!(matches!(err, SdkError::Validation(_)));
        }
    }

    #[tokio::test]
    async fn test_add_chapter_requires_title() {
        let client = offline_client();
        let dash = MentorDashboard::new();
        let err = dash.add_chapter(&client, 1, "").await.unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }
}

//! Admin dashboard and course manager controllers

use campus_client::{
    ApiClient, Chapter, Course, CreateChapterInput, CreateCourseInput, CreateLessonInput,
    CreateMentorRequest, Lesson, StudentProgressRow, User, UserRef,
};
use tracing::info;

use crate::dashboard::{sort_chapters, sort_lessons};
use crate::error::{Result, SdkError};
use crate::scope::ViewScope;

/// View state for the admin dashboard
#[derive(Debug, Default)]
pub struct AdminDashboard {
    pub users: Vec<User>,
    pub courses: Vec<Course>,
    pub mentors: Vec<UserRef>,
    /// Course whose roster is on screen, if any
    pub progress_for: Option<i64>,
    pub progress_rows: Vec<StudentProgressRow>,
    scope: ViewScope,
}

impl AdminDashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load users, courses, and the mentor picker.
    pub async fn load(&mut self, client: &ApiClient) -> Result<()> {
        let ticket = self.scope.ticket();
        let users = client.list_users().await?;
        let courses = client.list_courses_admin().await?;
        let mentors = client.list_mentors().await?;

        if self.scope.is_current(ticket) {
            self.users = users;
            self.courses = courses;
            self.mentors = mentors;
        }
        Ok(())
    }

    /// Delete a user. Returns false when the user was already gone.
    pub async fn delete_user(&mut self, client: &ApiClient, user_id: i64) -> Result<bool> {
        let existed = client.delete_user(user_id).await?;
        self.users.retain(|u| u.id != user_id);
        info!(user_id, existed, "user deleted");
        Ok(existed)
    }

    /// Create a course. Title, description, and mentor are all required.
    pub async fn create_course(
        &mut self,
        client: &ApiClient,
        title: &str,
        description: &str,
        mentor_id: Option<i64>,
    ) -> Result<()> {
        let mentor = mentor_id
            .ok_or_else(|| SdkError::Validation("pick a mentor for the course".to_string()))?;
        if title.trim().is_empty() || description.trim().is_empty() {
            return Err(SdkError::Validation(
                "title and description are required".to_string(),
            ));
        }

        let input = CreateCourseInput {
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            mentor,
        };
        client.create_course(&input).await?;
        info!(title = %input.title, mentor, "course created");

        self.courses = client.list_courses_admin().await?;
        Ok(())
    }

    /// Delete a course. Returns false when it was already gone.
    pub async fn delete_course(&mut self, client: &ApiClient, course_id: i64) -> Result<bool> {
        let existed = client.delete_course(course_id).await?;
        self.forget_course(course_id);
        info!(course_id, existed, "course deleted");
        Ok(existed)
    }

    /// Drop a course row and any roster shown for it.
    ///
    /// One state update for both, so a render between them can never show
    /// a roster for a course that no longer exists.
    fn forget_course(&mut self, course_id: i64) {
        self.courses.retain(|c| c.id != course_id);
        if self.progress_for == Some(course_id) {
            self.progress_for = None;
            self.progress_rows.clear();
        }
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

    /// Create a mentor account and refresh the picker.
    pub async fn create_mentor(
        &mut self,
        client: &ApiClient,
        username: &str,
        password: &str,
    ) -> Result<()> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(SdkError::Validation(
                "username and password are required".to_string(),
            ));
        }

        let request = CreateMentorRequest {
            username: username.trim().to_string(),
            password: password.to_string(),
        };
        client.create_mentor(&request).await?;
        info!(username = %request.username, "mentor created");

        self.mentors = client.list_mentors().await?;
        Ok(())
    }

    /// Forget this screen; results that arrive later are discarded.
    pub fn leave(&mut self) {
        self.scope.invalidate();
    }
}

/// Chapter and lesson manager for one course
#[derive(Debug)]
pub struct ChapterManager {
    pub course_id: i64,
    pub chapters: Vec<Chapter>,
    /// Chapter whose lessons are expanded, if any
    pub open_chapter: Option<i64>,
    pub lessons: Vec<Lesson>,
    scope: ViewScope,
}

impl ChapterManager {
    pub fn new(course_id: i64) -> Self {
        Self {
            course_id,
            chapters: Vec::new(),
            open_chapter: None,
            lessons: Vec::new(),
            scope: ViewScope::new(),
        }
    }

    /// Load the course's chapters in explicit order.
    pub async fn load(&mut self, client: &ApiClient) -> Result<()> {
        let ticket = self.scope.ticket();
        let mut chapters = client.list_chapters_admin(self.course_id).await?;
        sort_chapters(&mut chapters);

        if self.scope.is_current(ticket) {
            self.chapters = chapters;
        }
        Ok(())
    }

    /// Add a chapter and reload the list.
    pub async fn add_chapter(
        &mut self,
        client: &ApiClient,
        title: &str,
        position: Option<i64>,
    ) -> Result<()> {
        if title.trim().is_empty() {
            return Err(SdkError::Validation("chapter title is required".to_string()));
        }

        let input = CreateChapterInput {
            title: title.trim().to_string(),
            position,
        };
        client.create_chapter(self.course_id, &input).await?;
        info!(course_id = self.course_id, title = %input.title, "chapter added");

        self.load(client).await
    }

    /// Delete a chapter. Returns false when it was already gone.
    pub async fn delete_chapter(&mut self, client: &ApiClient, chapter_id: i64) -> Result<bool> {
        let existed = client.delete_chapter(chapter_id).await?;
        self.forget_chapter(chapter_id);
        info!(chapter_id, existed, "chapter deleted");
        Ok(existed)
    }

    /// Drop a chapter row; collapses its lessons if they were open.
    fn forget_chapter(&mut self, chapter_id: i64) {
        self.chapters.retain(|c| c.id != chapter_id);
        if self.open_chapter == Some(chapter_id) {
            self.open_chapter = None;
            self.lessons.clear();
        }
    }

    /// Expand a chapter's lessons in explicit order.
    pub async fn open_lessons(&mut self, client: &ApiClient, chapter_id: i64) -> Result<()> {
        let ticket = self.scope.ticket();
        let mut lessons = client.list_lessons(chapter_id).await?;
        sort_lessons(&mut lessons);

        if self.scope.is_current(ticket) {
            self.open_chapter = Some(chapter_id);
            self.lessons = lessons;
        }
        Ok(())
    }

    /// Add a lesson to a chapter. Only the title is required; blank
    /// content and video fields are not sent.
    pub async fn add_lesson(
        &mut self,
        client: &ApiClient,
        chapter_id: i64,
        title: &str,
        content: Option<String>,
        video_url: Option<String>,
    ) -> Result<()> {
        if title.trim().is_empty() {
            return Err(SdkError::Validation("lesson title is required".to_string()));
        }

        let input = CreateLessonInput {
            title: title.trim().to_string(),
            content: content.filter(|c| !c.trim().is_empty()),
            video_url: video_url.filter(|v| !v.trim().is_empty()),
            position: None,
        };
        client.create_lesson(chapter_id, &input).await?;
        info!(chapter_id, title = %input.title, "lesson added");

        if self.open_chapter == Some(chapter_id) {
            self.open_lessons(client, chapter_id).await?;
        }
        Ok(())
    }

    pub fn leave(&mut self) {
        self.scope.invalidate();
    }
}

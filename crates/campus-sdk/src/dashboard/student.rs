//! Student dashboard and course detail controllers

use std::collections::{HashMap, HashSet};

use campus_client::{ApiClient, Chapter, Course, CourseProgress, Lesson};
use tracing::warn;

use crate::certificate::{self, CertificateFile, CertificateStage};
use crate::dashboard::{sort_chapters, sort_lessons};
use crate::error::Result;
use crate::progress::{self, MarkOutcome};
use crate::scope::ViewScope;

/// View state for the student dashboard
#[derive(Debug, Default)]
pub struct StudentDashboard {
    pub courses: Vec<Course>,
    /// Completion percentage per course id
    pub progress: HashMap<i64, u8>,
    /// Certificate ids issued this session, per course id
    pub certificates: HashMap<i64, String>,
    scope: ViewScope,
}

impl StudentDashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load enrolled courses, then fan out one progress fetch per course.
    pub async fn load(&mut self, client: &ApiClient) -> Result<()> {
        let ticket = self.scope.ticket();
        let courses = client.list_my_courses().await?;
        let board = progress::load_progress_board(client, &courses).await;

        if self.scope.is_current(ticket) {
            self.courses = courses;
            self.progress = board;
        }
        Ok(())
    }

    /// Completion percentage for a course, 0 when unknown.
    pub fn percentage(&self, course_id: i64) -> u8 {
        self.progress.get(&course_id).copied().unwrap_or(0)
    }

    /// Certificate stage for a course, recomputed on every render.
    pub fn certificate_stage(&self, course_id: i64) -> CertificateStage {
        certificate::stage_for(
            self.percentage(course_id),
            self.certificates.get(&course_id).map(String::as_str),
        )
    }

    /// Issue (or re-issue) the certificate for a completed course, then
    /// download its artifact.
    pub async fn download_certificate(
        &mut self,
        client: &ApiClient,
        course_id: i64,
    ) -> Result<CertificateFile> {
        let percentage = self.percentage(course_id);
        let certificate_id = certificate::issue(client, course_id, percentage).await?;
        let file = certificate::download(client, &certificate_id).await?;
        self.certificates.insert(course_id, certificate_id);
        Ok(file)
    }

    pub fn leave(&mut self) {
        self.scope.invalidate();
    }
}

/// One student's view of one course
#[derive(Debug)]
pub struct CourseDetail {
    pub course_id: i64,
    pub chapters: Vec<Chapter>,
    /// Chapter whose lessons are expanded, if any
    pub open_chapter: Option<i64>,
    pub lessons: Vec<Lesson>,
    /// Completed lesson ids, seeded and refreshed from the backend
    pub completed: HashSet<i64>,
    /// Percentage as last reported by the backend
    pub percentage: u8,
    scope: ViewScope,
}

impl CourseDetail {
    pub fn new(course_id: i64) -> Self {
        Self {
            course_id,
            chapters: Vec::new(),
            open_chapter: None,
            lessons: Vec::new(),
            completed: HashSet::new(),
            percentage: 0,
            scope: ViewScope::new(),
        }
    }

    /// Load chapters in explicit order plus the current progress.
    pub async fn load(&mut self, client: &ApiClient) -> Result<()> {
        let ticket = self.scope.ticket();
        let mut chapters = client.list_student_chapters(self.course_id).await?;
        sort_chapters(&mut chapters);
        let progress = client.get_course_progress(self.course_id).await?;

        if self.scope.is_current(ticket) {
            self.chapters = chapters;
            self.apply_progress(progress);
        }
        Ok(())
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

    /// Mark a lesson complete and re-sync progress from the backend.
    ///
    /// A duplicate completion reconciles to the completed state either
    /// way; the percentage always comes back from the backend's set, never
    /// a local counter.
    pub async fn mark_completed(
        &mut self,
        client: &ApiClient,
        lesson_id: i64,
    ) -> Result<MarkOutcome> {
        let outcome = progress::mark_lesson_complete(client, lesson_id).await?;
        self.completed.insert(lesson_id);

        match client.get_course_progress(self.course_id).await {
            Ok(progress) => self.apply_progress(progress),
            Err(e) => warn!(course_id = self.course_id, error = %e, "progress refresh failed"),
        }
        Ok(outcome)
    }

    /// Fold a backend progress report into view state.
    fn apply_progress(&mut self, progress: CourseProgress) {
        self.percentage = crate::progress::clamp_percentage(progress.percentage);
        self.completed.extend(progress.completed_lessons.iter().copied());
    }

    pub fn is_completed(&self, lesson_id: i64) -> bool {
        self.completed.contains(&lesson_id)
    }

    pub fn leave(&mut self) {
        self.scope.invalidate();
    }
}

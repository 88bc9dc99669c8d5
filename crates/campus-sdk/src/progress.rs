//! Completion percentages and lesson-completion reconciliation

use std::collections::{HashMap, HashSet};

use campus_client::{ApiClient, Course};
use futures::future::join_all;
use tracing::warn;

use crate::error::Result;

/// Completion percentage of a course from its authoritative completed set.
///
/// A course with no lessons is 0% complete, never a division fault.
/// Integer floor: 100 is reserved for full completion.
pub fn completion_percentage(total_lessons: usize, completed: &HashSet<i64>) -> u8 {
    if total_lessons == 0 {
        return 0;
    }
    let done = completed.len().min(total_lessons);
    ((done * 100) / total_lessons) as u8
}

/// Clamp a backend-reported percentage into [0, 100].
///
/// Floors for the same reason as `completion_percentage`: only a fully
/// complete course reads 100.
pub fn clamp_percentage(raw: f64) -> u8 {
    raw.floor().clamp(0.0, 100.0) as u8
}

/// Outcome of marking a lesson complete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    /// Newly recorded by the backend
    Completed,
    /// The backend already had it; same end state
    AlreadyCompleted,
}

/// Mark a lesson complete, reconciling duplicates.
///
/// A conflict from the backend means the lesson was already completed.
/// Both outcomes leave the lesson completed; only real failures error.
pub async fn mark_lesson_complete(client: &ApiClient, lesson_id: i64) -> Result<MarkOutcome> {
    match client.complete_lesson(lesson_id).await {
        Ok(()) => Ok(MarkOutcome::Completed),
        Err(e) if e.is_conflict() => {
            warn!(lesson_id, "lesson already completed");
            Ok(MarkOutcome::AlreadyCompleted)
        }
        Err(e) => Err(e.into()),
    }
}

/// Fetch the completion percentage of every course concurrently.
///
/// One independent request per course; completions fill disjoint slots of
/// the returned map, so ordering between them is irrelevant. A failed
/// fetch records 0 for its course and the rest proceed.
pub async fn load_progress_board(client: &ApiClient, courses: &[Course]) -> HashMap<i64, u8> {
    let fetches = courses.iter().map(|course| async move {
        let percentage = match client.get_course_progress(course.id).await {
            Ok(progress) => clamp_percentage(progress.percentage),
            Err(e) => {
                warn!(course_id = course.id, error = %e, "progress fetch failed");
                0
            }
        };
        (course.id, percentage)
    });

    join_all(fetches).await.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(ids: &[i64]) -> HashSet<i64> {
        ids.iter().copied().collect()
    }

    #[test]
    fn test_empty_course_is_zero() {
        assert_eq!(completion_percentage(0, &HashSet::new()), 0);
        assert_eq!(completion_percentage(0, &set_of(&[1, 2, 3])), 0);
    }

    #[test]
    fn test_full_completion_is_hundred() {
        assert_eq!(completion_percentage(1, &set_of(&[10])), 100);
        assert_eq!(completion_percentage(4, &set_of(&[1, 2, 3, 4])), 100);
    }

    #[test]
    fn test_partial_completion_stays_below_hundred() {
        assert_eq!(completion_percentage(3, &set_of(&[1])), 33);
        assert_eq!(completion_percentage(3, &set_of(&[1, 2])), 66);
        assert_eq!(completion_percentage(200, &set_of(&(1..=199).collect::<Vec<_>>())), 99);
    }

    #[test]
    fn test_percentage_bounds_and_monotonicity() {
        let total = 7;
        let mut completed = HashSet::new();
        let mut last = 0;
        for id in 1..=10 {
            completed.insert(id);
            let pct = completion_percentage(total, &completed);
            assert!(pct <= 100);
            assert!(pct >= last, "percentage must not decrease as the set grows");
            last = pct;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn test_oversized_completed_set_caps_at_hundred() {
        // Stale ids from a deleted lesson must not push past 100.
        assert_eq!(completion_percentage(2, &set_of(&[1, 2, 3, 4])), 100);
    }

    #[test]
    fn test_clamp_percentage() {
        assert_eq!(clamp_percentage(0.0), 0);
        assert_eq!(clamp_percentage(62.5), 62);
        assert_eq!(clamp_percentage(99.9), 99);
        assert_eq!(clamp_percentage(100.0), 100);
        assert_eq!(clamp_percentage(140.0), 100);
        assert_eq!(clamp_percentage(-3.0), 0);
    }
}

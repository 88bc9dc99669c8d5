//! Per-role dashboard controllers
//!
//! Uniform shape across roles: issue a request, await the tagged result,
//! update the relevant slice of view state. Rendering reads the state
//! fields and never talks to the network itself.

pub mod admin;
pub mod mentor;
pub mod student;

use campus_client::{Chapter, Lesson};

/// Order chapters by explicit position, then id.
///
/// Arrival order from the backend is unspecified and never trusted.
/// Chapters without a position sort last.
pub fn sort_chapters(chapters: &mut [Chapter]) {
    chapters.sort_by_key(|c| (c.position.unwrap_or(i64::MAX), c.id));
}

/// Order lessons by explicit position, then id.
pub fn sort_lessons(lessons: &mut [Lesson]) {
    lessons.sort_by_key(|l| (l.position.unwrap_or(i64::MAX), l.id));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter(id: i64, position: Option<i64>) -> Chapter {
        Chapter {
            id,
            title: format!("chapter {id}"),
            position,
        }
    }

    #[test]
    fn test_chapters_sort_by_position_then_id() {
        let mut chapters = vec![
            chapter(4, Some(2)),
            chapter(1, Some(3)),
            chapter(9, Some(1)),
            chapter(2, Some(2)),
        ];
        sort_chapters(&mut chapters);
        let ids: Vec<i64> = chapters.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![9, 2, 4, 1]);
    }

    #[test]
    fn test_unpositioned_chapters_sort_last_by_id() {
        let mut chapters = vec![chapter(7, None), chapter(3, Some(5)), chapter(2, None)];
        sort_chapters(&mut chapters);
        let ids: Vec<i64> = chapters.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 2, 7]);
    }

    #[test]
    fn test_lessons_sort_by_position_then_id() {
        let mut lessons = vec![
            Lesson {
                id: 5,
                title: "b".to_string(),
                content: None,
                video_url: None,
                position: None,
            },
            Lesson {
                id: 8,
                title: "a".to_string(),
                content: None,
                video_url: None,
                position: Some(1),
            },
        ];
        sort_lessons(&mut lessons);
        let ids: Vec<i64> = lessons.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![8, 5]);
    }
}

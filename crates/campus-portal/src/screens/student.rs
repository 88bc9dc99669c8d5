//! Student screens: enrolled courses, lesson completion, certificates

use std::fs;

use anyhow::Result;
use campus_sdk::{
    auth, ApiClient, CertificateStage, CourseDetail, MarkOutcome, Route, StudentDashboard,
};

use crate::config::Args;
use crate::prompt;
use crate::screens::may_enter;

/// Student dashboard loop. Returns when the student signs out.
pub async fn show(client: &ApiClient, args: &Args) -> Result<()> {
    let mut board = StudentDashboard::new();
    if let Err(e) = board.load(client).await {
        println!("Could not load your courses: {}", e);
    }

    loop {
        println!();
        println!("My courses");
        if board.courses.is_empty() {
            println!("  (nothing assigned yet)");
        }
        for course in &board.courses {
            println!(
                "  {:>4}  {:<32} {:>3}%  {}",
                course.id,
                course.title,
                board.percentage(course.id),
                stage_label(&board.certificate_stage(course.id)),
            );
        }
        println!("  [o] Open a course");
        println!("  [c] Download a certificate");
        println!("  [r] Reload");
        println!("  [s] Sign out");
        match prompt::line("> ")?.as_str() {
            "o" => {
                if let Some(course_id) = prompt::id("Course id: ")? {
                    course(client, course_id).await?;
                    // Completions changed behind the board's back; refresh.
                    if let Err(e) = board.load(client).await {
                        println!("Reload failed: {}", e);
                    }
                }
            }
            "c" => download(client, args, &mut board).await?,
            "r" => {
                if let Err(e) = board.load(client).await {
                    println!("Reload failed: {}", e);
                }
            }
            "s" => {
                board.leave();
                auth::sign_out(client);
                println!("Signed out.");
                return Ok(());
            }
            _ => println!("Unknown choice."),
        }
    }
}

fn stage_label(stage: &CertificateStage) -> &'static str {
    match stage {
        CertificateStage::NotEligible => "",
        CertificateStage::Eligible => "certificate ready",
        CertificateStage::Generated { .. } => "certificate issued",
    }
}

/// Detail view of one enrolled course.
async fn course(client: &ApiClient, course_id: i64) -> Result<()> {
    if !may_enter(Route::StudentCourse(course_id), client) {
        return Ok(());
    }
    let mut detail = CourseDetail::new(course_id);
    if let Err(e) = detail.load(client).await {
        println!("Could not load the course: {}", e);
    }

    loop {
        println!();
        println!("Course {} ({}% complete)", detail.course_id, detail.percentage);
        for chapter in &detail.chapters {
            let marker = if detail.open_chapter == Some(chapter.id) { "*" } else { " " };
            println!("  {} {:>4}  {}", marker, chapter.id, chapter.title);
        }
        if detail.open_chapter.is_some() {
            for lesson in &detail.lessons {
                let done = if detail.is_completed(lesson.id) { "x" } else { " " };
                println!("       [{}] {:>4}  {}", done, lesson.id, lesson.title);
            }
        }
        println!("  [o] Open a chapter");
        println!("  [v] View a lesson");
        println!("  [m] Mark a lesson complete");
        println!("  [b] Back");
        match prompt::line("> ")?.as_str() {
            "o" => {
                if let Some(chapter_id) = prompt::id("Chapter id: ")? {
                    if let Err(e) = detail.open_lessons(client, chapter_id).await {
                        println!("Could not load lessons: {}", e);
                    }
                }
            }
            "v" => view_lesson(&detail)?,
            "m" => {
                if let Some(lesson_id) = prompt::id("Lesson id: ")? {
                    match detail.mark_completed(client, lesson_id).await {
                        Ok(MarkOutcome::Completed) => {
                            println!("Done. {}% of the course complete.", detail.percentage)
                        }
                        Ok(MarkOutcome::AlreadyCompleted) => {
                            println!("That lesson was already complete.")
                        }
                        Err(e) => println!("Could not record the completion: {}", e),
                    }
                }
            }
            "b" => {
                detail.leave();
                return Ok(());
            }
            _ => println!("Unknown choice."),
        }
    }
}

fn view_lesson(detail: &CourseDetail) -> Result<()> {
    let Some(lesson_id) = prompt::id("Lesson id: ")? else {
        return Ok(());
    };
    match detail.lessons.iter().find(|lesson| lesson.id == lesson_id) {
        Some(lesson) => {
            println!();
            println!("# {}", lesson.title);
            if let Some(content) = &lesson.content {
                println!("{}", content);
            }
            if let Some(video) = &lesson.video_url {
                println!("Video: {}", video);
            }
        }
        None => println!("No lesson {} in the open chapter.", lesson_id),
    }
    Ok(())
}

async fn download(client: &ApiClient, args: &Args, board: &mut StudentDashboard) -> Result<()> {
    let Some(course_id) = prompt::id("Course id: ")? else {
        return Ok(());
    };
    let file = match board.download_certificate(client, course_id).await {
        Ok(file) => file,
        Err(e) => {
            println!("Could not fetch the certificate: {}", e);
            return Ok(());
        }
    };
    let path = args.output_dir.join(&file.suggested_name);
    match fs::write(&path, &file.bytes) {
        Ok(()) => println!("Certificate saved to {}.", path.display()),
        Err(e) => println!("Could not write {}: {}", path.display(), e),
    }
    Ok(())
}

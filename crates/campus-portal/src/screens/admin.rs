//! Admin screens: accounts, courses, chapter and lesson authoring, rosters

use anyhow::Result;
use campus_sdk::{auth, AdminDashboard, ApiClient, ChapterManager, Route};

use crate::prompt;
use crate::screens::{may_enter, print_roster};

/// Admin dashboard loop. Returns when the admin signs out.
pub async fn show(client: &ApiClient) -> Result<()> {
    let mut board = AdminDashboard::new();
    if let Err(e) = board.load(client).await {
        println!("Could not load the dashboard: {}", e);
    }

    loop {
        println!();
        println!(
            "Admin dashboard: {} users, {} courses, {} mentors",
            board.users.len(),
            board.courses.len(),
            board.mentors.len()
        );
        println!("  [1] Manage users");
        println!("  [2] Manage courses");
        println!("  [3] Create a course");
        println!("  [4] Create a mentor account");
        println!("  [5] Course roster");
        println!("  [r] Reload");
        println!("  [s] Sign out");
        match prompt::line("> ")?.as_str() {
            "1" => users(client, &mut board).await?,
            "2" => courses(client, &mut board).await?,
            "3" => create_course(client, &mut board).await?,
            "4" => create_mentor(client, &mut board).await?,
            "5" => roster(client, &mut board).await?,
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

async fn users(client: &ApiClient, board: &mut AdminDashboard) -> Result<()> {
    if board.users.is_empty() {
        println!("No users.");
        return Ok(());
    }
    for user in &board.users {
        let state = if user.is_active { "" } else { " (inactive)" };
        println!("  {:>4}  {:<24} {}{}", user.id, user.username, user.role, state);
    }
    let Some(user_id) = prompt::id("Delete which user id (blank to go back): ")? else {
        return Ok(());
    };
    if !prompt::confirm(&format!("Really delete user {}?", user_id))? {
        return Ok(());
    }
    match board.delete_user(client, user_id).await {
        Ok(true) => println!("User {} deleted.", user_id),
        Ok(false) => println!("User {} was already gone.", user_id),
        Err(e) => println!("Delete failed: {}", e),
    }
    Ok(())
}

async fn courses(client: &ApiClient, board: &mut AdminDashboard) -> Result<()> {
    if board.courses.is_empty() {
        println!("No courses yet.");
        return Ok(());
    }
    for course in &board.courses {
        let mentor = course
            .mentor
            .map(|id| format!("mentor {}", id))
            .unwrap_or_else(|| "unassigned".to_string());
        println!("  {:>4}  {:<32} {}", course.id, course.title, mentor);
    }
    println!("  [c] Chapters and lessons");
    println!("  [d] Delete a course");
    match prompt::line("> ")?.as_str() {
        "c" => {
            if let Some(course_id) = prompt::id("Course id: ")? {
                chapters(client, course_id).await?;
            }
        }
        "d" => {
            let Some(course_id) = prompt::id("Course id: ")? else {
                return Ok(());
            };
            if !prompt::confirm(&format!("Really delete course {}?", course_id))? {
                return Ok(());
            }
            match board.delete_course(client, course_id).await {
                Ok(true) => println!("Course {} deleted.", course_id),
                Ok(false) => println!("Course {} was already gone.", course_id),
                Err(e) => println!("Delete failed: {}", e),
            }
        }
        _ => {}
    }
    Ok(())
}

/// Chapter and lesson manager for one course.
async fn chapters(client: &ApiClient, course_id: i64) -> Result<()> {
    if !may_enter(Route::AdminCourseChapters(course_id), client) {
        return Ok(());
    }
    let mut manager = ChapterManager::new(course_id);
    if let Err(e) = manager.load(client).await {
        println!("Could not load chapters: {}", e);
    }

    loop {
        println!();
        println!("Course {}: {} chapters", manager.course_id, manager.chapters.len());
        for chapter in &manager.chapters {
            let marker = if manager.open_chapter == Some(chapter.id) { "*" } else { " " };
            println!("  {} {:>4}  {}", marker, chapter.id, chapter.title);
        }
        if manager.open_chapter.is_some() {
            for lesson in &manager.lessons {
                println!("        {:>4}  {}", lesson.id, lesson.title);
            }
        }
        println!("  [o] Open a chapter");
        println!("  [a] Add a chapter");
        println!("  [l] Add a lesson to the open chapter");
        println!("  [d] Delete a chapter");
        println!("  [b] Back");
        match prompt::line("> ")?.as_str() {
            "o" => {
                if let Some(chapter_id) = prompt::id("Chapter id: ")? {
                    if let Err(e) = manager.open_lessons(client, chapter_id).await {
                        println!("Could not load lessons: {}", e);
                    }
                }
            }
            "a" => {
                let title = prompt::line("Chapter title: ")?;
                let position = prompt::id("Position (blank for end): ")?;
                match manager.add_chapter(client, &title, position).await {
                    Ok(()) => println!("Chapter added."),
                    Err(e) => println!("Could not add the chapter: {}", e),
                }
            }
            "l" => add_lesson(client, &mut manager).await?,
            "d" => {
                if let Some(chapter_id) = prompt::id("Chapter id: ")? {
                    if !prompt::confirm(&format!("Really delete chapter {}?", chapter_id))? {
                        continue;
                    }
                    match manager.delete_chapter(client, chapter_id).await {
                        Ok(true) => println!("Chapter {} deleted.", chapter_id),
                        Ok(false) => println!("Chapter {} was already gone.", chapter_id),
                        Err(e) => println!("Delete failed: {}", e),
                    }
                }
            }
            "b" => {
                manager.leave();
                return Ok(());
            }
            _ => println!("Unknown choice."),
        }
    }
}

async fn add_lesson(client: &ApiClient, manager: &mut ChapterManager) -> Result<()> {
    let Some(chapter_id) = manager.open_chapter else {
        println!("Open a chapter first.");
        return Ok(());
    };
    let title = prompt::line("Lesson title: ")?;
    let content = prompt::optional("Content (blank for none): ")?;
    let video_url = prompt::optional("Video URL (blank for none): ")?;
    match manager
        .add_lesson(client, chapter_id, &title, content, video_url)
        .await
    {
        Ok(()) => println!("Lesson added."),
        Err(e) => println!("Could not add the lesson: {}", e),
    }
    Ok(())
}

async fn create_course(client: &ApiClient, board: &mut AdminDashboard) -> Result<()> {
    if !may_enter(Route::AdminCreateCourse, client) {
        return Ok(());
    }
    if board.mentors.is_empty() {
        println!("No mentors to assign; create a mentor account first.");
        return Ok(());
    }
    let title = prompt::line("Title: ")?;
    let description = prompt::line("Description: ")?;
    for mentor in &board.mentors {
        println!("  {:>4}  {}", mentor.id, mentor.username);
    }
    let mentor_id = prompt::id("Mentor id: ")?;
    match board.create_course(client, &title, &description, mentor_id).await {
        Ok(()) => println!("Course \"{}\" created.", title.trim()),
        Err(e) => println!("Could not create the course: {}", e),
    }
    Ok(())
}

async fn create_mentor(client: &ApiClient, board: &mut AdminDashboard) -> Result<()> {
    if !may_enter(Route::AdminCreateMentor, client) {
        return Ok(());
    }
    let username = prompt::line("Mentor username: ")?;
    let password = prompt::line("Mentor password: ")?;
    match board.create_mentor(client, &username, &password).await {
        Ok(()) => println!("Mentor account \"{}\" created.", username.trim()),
        Err(e) => println!("Could not create the mentor: {}", e),
    }
    Ok(())
}

async fn roster(client: &ApiClient, board: &mut AdminDashboard) -> Result<()> {
    let Some(course_id) = prompt::id("Course id: ")? else {
        return Ok(());
    };
    if let Err(e) = board.load_progress(client, course_id).await {
        println!("Could not load the roster: {}", e);
        return Ok(());
    }
    print_roster(&board.progress_rows);
    Ok(())
}

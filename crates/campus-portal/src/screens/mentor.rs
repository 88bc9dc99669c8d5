//! Mentor screens: student roster, course catalog, assignment, chapter authoring

use anyhow::Result;
use campus_sdk::{auth, ApiClient, AssignOutcome, MentorDashboard};

use crate::prompt;
use crate::screens::print_roster;

/// Mentor dashboard loop. Returns when the mentor signs out.
pub async fn show(client: &ApiClient) -> Result<()> {
    let mut board = MentorDashboard::new();
    if let Err(e) = board.load(client).await {
        println!("Could not load the dashboard: {}", e);
    }

    loop {
        println!();
        println!(
            "Mentor dashboard: {} students, {} courses",
            board.students.len(),
            board.courses.len()
        );
        println!("  [1] My students");
        println!("  [2] Course catalog");
        println!("  [3] Assign a course");
        println!("  [4] Add a chapter to a course");
        println!("  [5] Course roster");
        println!("  [r] Reload");
        println!("  [s] Sign out");
        match prompt::line("> ")?.as_str() {
            "1" => {
                for student in &board.students {
                    println!("  {:>4}  {}", student.id, student.username);
                }
            }
            "2" => {
                for course in &board.courses {
                    println!("  {:>4}  {}", course.id, course.title);
                }
            }
            "3" => assign(client, &board).await?,
            "4" => add_chapter(client, &board).await?,
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

async fn assign(client: &ApiClient, board: &MentorDashboard) -> Result<()> {
    let student_id = prompt::id("Student id: ")?;
    let course_id = prompt::id("Course id: ")?;
    match board.assign_course(client, student_id, course_id).await {
        Ok(AssignOutcome::Assigned) => println!("Course assigned."),
        Ok(AssignOutcome::AlreadyAssigned) => {
            println!("That student already has this course.")
        }
        Err(e) => println!("Could not assign the course: {}", e),
    }
    Ok(())
}

async fn add_chapter(client: &ApiClient, board: &MentorDashboard) -> Result<()> {
    let Some(course_id) = prompt::id("Course id: ")? else {
        return Ok(());
    };
    let title = prompt::line("Chapter title: ")?;
    match board.add_chapter(client, course_id, &title).await {
        Ok(()) => println!("Chapter added."),
        Err(e) => println!("Could not add the chapter: {}", e),
    }
    Ok(())
}

async fn roster(client: &ApiClient, board: &mut MentorDashboard) -> Result<()> {
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

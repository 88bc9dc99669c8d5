//! Interactive screens
//!
//! Every protected screen is entered through the access guard. A redirect
//! decision replaces the requested route with the guard's target, so a
//! session never renders a screen its role does not own.

pub mod admin;
pub mod entry;
pub mod mentor;
pub mod student;

use anyhow::Result;
use campus_sdk::types::StudentProgressRow;
use campus_sdk::{authorize_route, ApiClient, Decision, Route};
use tracing::info;

use crate::config::Args;

/// Top-level loop: entry menu until sign-in, the role's dashboard while
/// signed in, back to the entry menu after sign-out.
pub async fn run(client: &ApiClient, args: &Args) -> Result<()> {
    loop {
        match entry::show(client).await? {
            entry::EntryAction::Enter(route) => navigate(client, args, route).await?,
            entry::EntryAction::Quit => {
                println!("Bye.");
                return Ok(());
            }
        }
    }
}

/// Walk guard redirects until a route is allowed, then render it.
async fn navigate(client: &ApiClient, args: &Args, mut route: Route) -> Result<()> {
    loop {
        match authorize_route(route, client.session()) {
            Decision::Allow => break,
            Decision::Redirect(Route::Login) => {
                println!("Please sign in first.");
                return Ok(());
            }
            Decision::Redirect(target) => {
                info!(from = %route, to = %target, "redirecting");
                println!("No access to the {}; taking you to the {}.", route, target);
                route = target;
            }
        }
    }

    match route {
        Route::AdminDashboard => admin::show(client).await,
        Route::MentorDashboard => mentor::show(client).await,
        Route::StudentDashboard => student::show(client, args).await,
        // Public routes are reachable from the entry menu directly.
        _ => Ok(()),
    }
}

/// Guard check when stepping into a nested screen. False means the
/// session no longer satisfies the route.
pub(crate) fn may_enter(route: Route, client: &ApiClient) -> bool {
    match authorize_route(route, client.session()) {
        Decision::Allow => true,
        Decision::Redirect(target) => {
            println!("No access to the {}; back to the {}.", route, target);
            false
        }
    }
}

/// Print a per-student progress table.
pub(crate) fn print_roster(rows: &[StudentProgressRow]) {
    if rows.is_empty() {
        println!("Nobody is enrolled yet.");
        return;
    }
    for row in rows {
        println!("  {:<24} {:>5.1}%", row.student_name, row.percentage);
    }
}

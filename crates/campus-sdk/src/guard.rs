//! Role gate evaluated before every protected screen
//!
//! Pure functions over the current session snapshot: no state, no I/O.
//! A denial is always a redirect, never an error, so no protected view is
//! ever rendered and no protected fetch ever starts for an unauthorized
//! session.

use std::fmt;

use campus_client::{Role, Session, SessionStore};

/// Navigable screens of the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    VerifyCertificate,
    AdminDashboard,
    AdminCreateCourse,
    /// Chapter and lesson manager for one course
    AdminCourseChapters(i64),
    AdminCreateMentor,
    MentorDashboard,
    StudentDashboard,
    /// Detail view of one enrolled course
    StudentCourse(i64),
}

impl Route {
    /// Roles that may render this route. Empty means public.
    pub fn required_roles(&self) -> &'static [Role] {
        match self {
            Route::Login | Route::Register | Route::VerifyCertificate => &[],
            Route::AdminDashboard
            | Route::AdminCreateCourse
            | Route::AdminCourseChapters(_)
            | Route::AdminCreateMentor => &[Role::Admin],
            Route::MentorDashboard => &[Role::Mentor],
            Route::StudentDashboard | Route::StudentCourse(_) => &[Role::Student],
        }
    }

    /// Dashboard a freshly decoded role lands on
    pub fn landing(role: Role) -> Route {
        match role {
            Role::Admin => Route::AdminDashboard,
            Role::Mentor => Route::MentorDashboard,
            Role::Student => Route::StudentDashboard,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Login => write!(f, "sign-in"),
            Route::Register => write!(f, "registration"),
            Route::VerifyCertificate => write!(f, "certificate verification"),
            Route::AdminDashboard => write!(f, "admin dashboard"),
            Route::AdminCreateCourse => write!(f, "course creation"),
            Route::AdminCourseChapters(id) => write!(f, "chapter manager for course {}", id),
            Route::AdminCreateMentor => write!(f, "mentor creation"),
            Route::MentorDashboard => write!(f, "mentor dashboard"),
            Route::StudentDashboard => write!(f, "student dashboard"),
            Route::StudentCourse(id) => write!(f, "course {}", id),
        }
    }
}

/// Outcome of the access check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Render the requested route
    Allow,
    /// Do not render; go here instead
    Redirect(Route),
}

/// Decide whether the given session may render a route.
///
/// No session redirects to sign-in and the requested destination is
/// discarded. A session with the wrong role redirects to its own
/// dashboard. An empty requirement set marks a public route.
pub fn authorize(required: &[Role], session: Option<&Session>) -> Decision {
    if required.is_empty() {
        return Decision::Allow;
    }
    match session {
        None => Decision::Redirect(Route::Login),
        Some(session) if required.contains(&session.role) => Decision::Allow,
        Some(session) => Decision::Redirect(Route::landing(session.role)),
    }
}

/// Check a route against the store's session as of right now.
///
/// Re-reads the store on every call; callers must not cache a session
/// across navigations.
pub fn authorize_route(route: Route, store: &SessionStore) -> Decision {
    authorize(route.required_roles(), store.get().as_ref())
}

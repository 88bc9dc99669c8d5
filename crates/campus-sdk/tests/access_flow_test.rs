//! Session, guard, and certificate stage flow integration tests

use std::collections::HashSet;

use base64::{engine::general_purpose, Engine as _};
use campus_sdk::certificate::stage_for;
use campus_sdk::progress::completion_percentage;
use campus_sdk::types::TokenPair;
use campus_sdk::{authorize_route, CertificateStage, Decision, Role, Route, Session, SessionStore};

fn token(role: &str, user_id: i64) -> String {
    let claims = format!(
        r#"{{"role":"{}","user_id":{},"exp":4102444800}}"#,
        role, user_id
    );
    let payload = general_purpose::URL_SAFE_NO_PAD.encode(claims);
    format!("header.{}.signature", payload)
}

#[test]
fn test_sign_in_to_sign_out_guard_flow() {
    let store = SessionStore::new();

    // Nothing stored: every protected route bounces to sign-in.
    assert_eq!(
        authorize_route(Route::StudentDashboard, &store),
        Decision::Redirect(Route::Login)
    );

    // Token decode and store write, the way the sign-in flow does it.
    let session = Session::from_tokens(TokenPair {
        access: token("STUDENT", 7),
        refresh: "refresh".to_string(),
    })
    .expect("decodable token");
    assert_eq!(session.role, Role::Student);
    assert_eq!(session.user_id, Some(7));
    store.set(session);

    assert_eq!(
        authorize_route(Route::StudentDashboard, &store),
        Decision::Allow
    );
    assert_eq!(
        authorize_route(Route::StudentCourse(3), &store),
        Decision::Allow
    );
    // Wrong role goes to the holder's own dashboard, not to sign-in.
    assert_eq!(
        authorize_route(Route::AdminDashboard, &store),
        Decision::Redirect(Route::StudentDashboard)
    );

    // Public routes stay public while signed in.
    assert_eq!(
        authorize_route(Route::VerifyCertificate, &store),
        Decision::Allow
    );

    store.clear();
    assert_eq!(
        authorize_route(Route::MentorDashboard, &store),
        Decision::Redirect(Route::Login)
    );
}

#[test]
fn test_clones_share_one_session() {
    let store = SessionStore::new();
    let shared = store.clone();

    let session = Session::from_tokens(TokenPair {
        access: token("MENTOR", 2),
        refresh: "refresh".to_string(),
    })
    .expect("decodable token");
    store.set(session);

    assert_eq!(
        authorize_route(Route::MentorDashboard, &shared),
        Decision::Allow
    );
    shared.clear();
    assert!(!store.is_signed_in());
}

#[test]
fn test_certificate_stage_follows_progress() {
    let lessons: Vec<i64> = (1..=4).collect();
    let mut completed = HashSet::new();

    for (index, lesson) in lessons.iter().enumerate() {
        let before = completion_percentage(lessons.len(), &completed);
        completed.insert(*lesson);
        let after = completion_percentage(lessons.len(), &completed);
        assert!(after > before, "each completion raises the percentage");

        let stage = stage_for(after, None);
        if index + 1 == lessons.len() {
            assert_eq!(stage, CertificateStage::Eligible);
        } else {
            assert_eq!(stage, CertificateStage::NotEligible);
        }
    }

    // Once generated, the stage pins to the issued id.
    assert_eq!(
        stage_for(100, Some("CERT-7")),
        CertificateStage::Generated {
            certificate_id: "CERT-7".to_string()
        }
    );
}

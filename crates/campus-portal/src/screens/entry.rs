//! Entry menu: sign-in, registration, public certificate verification

use anyhow::Result;
use campus_sdk::{auth, certificate, ApiClient, Role, Route, VerificationOutcome};

use crate::prompt;

/// What the entry menu resolved to
pub enum EntryAction {
    /// Signed in; render this landing route
    Enter(Route),
    Quit,
}

/// Run the entry menu until the user signs in or quits.
pub async fn show(client: &ApiClient) -> Result<EntryAction> {
    loop {
        println!();
        println!("Campus Portal");
        println!("  [1] Sign in");
        println!("  [2] Register");
        println!("  [3] Verify a certificate");
        println!("  [q] Quit");
        match prompt::line("> ")?.as_str() {
            "1" => {
                if let Some(route) = sign_in(client).await? {
                    return Ok(EntryAction::Enter(route));
                }
            }
            "2" => register(client).await?,
            "3" => verify(client).await?,
            "q" => return Ok(EntryAction::Quit),
            _ => println!("Unknown choice."),
        }
    }
}

async fn sign_in(client: &ApiClient) -> Result<Option<Route>> {
    let username = prompt::line("Username: ")?;
    let password = prompt::line("Password: ")?;
    match auth::sign_in(client, &username, &password).await {
        Ok(signed_in) => {
            println!("Signed in as {}.", signed_in.role);
            Ok(Some(signed_in.landing))
        }
        Err(e) => {
            println!("Sign-in failed: {}", e);
            Ok(None)
        }
    }
}

async fn register(client: &ApiClient) -> Result<()> {
    let username = prompt::line("Username: ")?;
    let password = prompt::line("Password: ")?;
    println!("  [1] Student");
    println!("  [2] Mentor");
    let role = match prompt::line("Account type: ")?.as_str() {
        "1" => Role::Student,
        "2" => Role::Mentor,
        _ => {
            println!("Pick 1 or 2.");
            return Ok(());
        }
    };
    match auth::register(client, &username, &password, role).await {
        Ok(message) => println!("{}", message),
        Err(e) => println!("Registration failed: {}", e),
    }
    Ok(())
}

/// Public lookup; works without a session.
async fn verify(client: &ApiClient) -> Result<()> {
    let certificate_id = prompt::line("Certificate id: ")?;
    if certificate_id.is_empty() {
        return Ok(());
    }
    match certificate::verify(client, &certificate_id).await {
        Ok(VerificationOutcome::Valid {
            student,
            course,
            certificate_id,
        }) => {
            println!(
                "VALID: {} completed \"{}\" (certificate {}).",
                student, course, certificate_id
            );
        }
        Ok(VerificationOutcome::Invalid) => {
            println!("This certificate is not valid.");
        }
        Err(e) => println!("Verification unavailable: {}", e),
    }
    Ok(())
}

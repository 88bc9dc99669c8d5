//! Certificate lifecycle: eligibility, issue, download, public verify

use campus_client::{ApiClient, ApiError, VerifyResponse};
use tracing::info;

use crate::error::{Result, SdkError};

/// Where a (student, course) pair stands in the certificate lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertificateStage {
    /// Below full completion
    NotEligible,
    /// Fully complete; nothing issued yet this session
    Eligible,
    /// Issued; the artifact can be downloaded by id
    Generated { certificate_id: String },
}

/// Recompute the stage from the current percentage.
///
/// Read-only and idempotent; runs on every dashboard render. A known
/// certificate id pins the pair at Generated.
pub fn stage_for(percentage: u8, known_id: Option<&str>) -> CertificateStage {
    if let Some(id) = known_id {
        return CertificateStage::Generated {
            certificate_id: id.to_string(),
        };
    }
    if percentage >= 100 {
        CertificateStage::Eligible
    } else {
        CertificateStage::NotEligible
    }
}

/// Request a certificate for a course.
///
/// Refused locally below full completion, so Generated is only reachable
/// from Eligible. The backend issues idempotently and may return an
/// existing id; callers must not assume a fresh one.
pub async fn issue(client: &ApiClient, course_id: i64, percentage: u8) -> Result<String> {
    if percentage < 100 {
        return Err(SdkError::NotEligible { percentage });
    }

    let generated = client.generate_certificate(course_id).await?;
    if generated.certificate_id.is_empty() {
        return Err(SdkError::Api(ApiError::InvalidResponse(
            "certificate generation returned no id".to_string(),
        )));
    }
    info!(course_id, certificate_id = %generated.certificate_id, "certificate issued");
    Ok(generated.certificate_id)
}

/// Artifact bytes plus the name to save them under
#[derive(Debug, Clone)]
pub struct CertificateFile {
    pub bytes: Vec<u8>,
    pub suggested_name: String,
}

/// Download the artifact for an issued certificate.
///
/// Generation success never carries the file; this is always a second,
/// distinct request. An unknown id is an explicit failure, never an empty
/// success.
pub async fn download(client: &ApiClient, certificate_id: &str) -> Result<CertificateFile> {
    let bytes = client.download_certificate(certificate_id).await?;
    Ok(CertificateFile {
        bytes,
        suggested_name: "certificate.pdf".to_string(),
    })
}

/// Result of a public verification lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// The backend vouches for this certificate
    Valid {
        student: String,
        course: String,
        certificate_id: String,
    },
    /// Unknown, revoked, or unusable record. A normal outcome, not an error.
    Invalid,
}

/// Verify a certificate id against the public endpoint.
///
/// Needs no session. Lookup misses are the Invalid value; transport
/// failures stay errors, so an unreachable backend is never reported as
/// "certificate invalid".
pub async fn verify(client: &ApiClient, certificate_id: &str) -> Result<VerificationOutcome> {
    match client.verify_certificate(certificate_id).await {
        Ok(response) => Ok(outcome_from(response, certificate_id)),
        Err(ApiError::NotFound(_)) => Ok(VerificationOutcome::Invalid),
        Err(e) => Err(e.into()),
    }
}

/// Interpret a verification payload.
///
/// `valid: true` with missing fields is not a usable record and reads as
/// Invalid.
fn outcome_from(response: VerifyResponse, requested_id: &str) -> VerificationOutcome {
    if !response.valid {
        return VerificationOutcome::Invalid;
    }
    match (response.student, response.course) {
        (Some(student), Some(course)) => VerificationOutcome::Valid {
            student,
            course,
            certificate_id: response
                .certificate_id
                .unwrap_or_else(|| requested_id.to_string()),
        },
        _ => VerificationOutcome::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_client::{ClientConfig, SessionStore};

    #[test]
    fn test_stage_follows_percentage() {
        assert_eq!(stage_for(0, None), CertificateStage::NotEligible);
        assert_eq!(stage_for(99, None), CertificateStage::NotEligible);
        assert_eq!(stage_for(100, None), CertificateStage::Eligible);
    }

    #[test]
    fn test_known_id_pins_generated() {
        assert_eq!(
            stage_for(100, Some("CERT-7")),
            CertificateStage::Generated {
                certificate_id: "CERT-7".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_issue_refused_below_full_completion() {
        // Refusal happens before any request is built.
        let client = ApiClient::new(ClientConfig::default(), SessionStore::new());
        let err = issue(&client, 5, 80).await.unwrap_err();
        assert!(matches!(err, SdkError::NotEligible { percentage: 80 }));
    }

    #[test]
    fn test_outcome_from_valid_record() {
        let response = VerifyResponse {
            valid: true,
            student: Some("amara".to_string()),
            course: Some("Rust Basics".to_string()),
            certificate_id: Some("CERT-1".to_string()),
        };
        assert_eq!(
            outcome_from(response, "CERT-1"),
            VerificationOutcome::Valid {
                student: "amara".to_string(),
                course: "Rust Basics".to_string(),
                certificate_id: "CERT-1".to_string(),
            }
        );
    }

    #[test]
    fn test_outcome_from_invalid_flag() {
        let response = VerifyResponse {
            valid: false,
            student: None,
            course: None,
            certificate_id: None,
        };
        assert_eq!(outcome_from(response, "CERT-1"), VerificationOutcome::Invalid);
    }

    #[test]
    fn test_outcome_from_unusable_record() {
        let response = VerifyResponse {
            valid: true,
            student: Some("amara".to_string()),
            course: None,
            certificate_id: None,
        };
        assert_eq!(outcome_from(response, "CERT-1"), VerificationOutcome::Invalid);
    }

    #[test]
    fn test_outcome_falls_back_to_requested_id() {
        let response = VerifyResponse {
            valid: true,
            student: Some("amara".to_string()),
            course: Some("Rust Basics".to_string()),
            certificate_id: None,
        };
        match outcome_from(response, "CERT-9") {
            VerificationOutcome::Valid { certificate_id, .. } => {
                assert_eq!(certificate_id, "CERT-9")
            }
            other => panic!("expected valid outcome, got {other:?}"),
        }
    }
}

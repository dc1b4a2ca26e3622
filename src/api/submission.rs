//! Submission of a validated form

use super::traits::RegistrationClientTrait;
use crate::state::{FormData, SubmissionStatus};

/// Post `form` once and map the outcome to a [`SubmissionStatus`].
///
/// Validation is the caller's job. Every failure collapses to
/// [`SubmissionStatus::Error`]; the cause is only logged.
pub async fn submit<C>(client: &C, form: &FormData) -> SubmissionStatus
where
    C: RegistrationClientTrait + ?Sized,
{
    tracing::info!(batch = %form.selected_batch, "Submitting registration");

    match client.submit_form(form).await {
        Ok(response) => {
            tracing::info!(
                server_message = response.message.as_deref().unwrap_or_default(),
                "Registration accepted"
            );
            SubmissionStatus::Success
        }
        Err(err) => {
            tracing::error!("Form submission failed: {err}");
            SubmissionStatus::Error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::test_server::{direct_client, serve_once};
    use crate::api::{MockRegistrationClientTrait, SubmitError, SubmitResponse};
    use crate::state::{compute_age, validate, BIRTH_DATE_FORMAT};
    use chrono::{Local, Months};
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;
    use reqwest::StatusCode;

    fn jane() -> FormData {
        let birth = Local::now()
            .date_naive()
            .checked_sub_months(Months::new(30 * 12))
            .unwrap();
        FormData {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            birth_date: birth.format(BIRTH_DATE_FORMAT).to_string(),
            selected_batch: "7-8 AM".to_string(),
            agree_terms: true,
        }
    }

    #[tokio::test]
    async fn test_ok_response_is_success() {
        let mut client = MockRegistrationClientTrait::new();
        client
            .expect_submit_form()
            .with(eq(jane()))
            .times(1)
            .returning(|_| {
                Ok(SubmitResponse {
                    message: Some("ok".to_string()),
                })
            });

        assert_eq!(submit(&client, &jane()).await, SubmissionStatus::Success);
    }

    #[tokio::test]
    async fn test_status_error_is_error() {
        let mut client = MockRegistrationClientTrait::new();
        client
            .expect_submit_form()
            .times(1)
            .returning(|_| Err(SubmitError::Status(StatusCode::INTERNAL_SERVER_ERROR)));

        assert_eq!(submit(&client, &jane()).await, SubmissionStatus::Error);
    }

    #[tokio::test]
    async fn test_end_to_end_success() {
        let form = jane();
        assert!(validate(&form, compute_age(&form.birth_date)).is_empty());

        let (url, captured) = serve_once("200 OK", r#"{"message":"ok"}"#).await;
        let client = direct_client(url);

        assert_eq!(submit(&client, &form).await, SubmissionStatus::Success);

        let request = captured.await.unwrap();
        let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "fullName": "Jane Doe",
                "email": "jane@example.com",
                "birthDate": form.birth_date,
                "selectedBatch": "7-8 AM",
                "agreeTerms": true,
            })
        );
    }

    #[tokio::test]
    async fn test_end_to_end_server_error() {
        let (url, _captured) = serve_once("500 Internal Server Error", "").await;
        let client = direct_client(url);

        assert_eq!(submit(&client, &jane()).await, SubmissionStatus::Error);
    }
}

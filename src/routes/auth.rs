/// Authentication workflow endpoints
///
/// Four operations, each a flat sequence over the stores, the
/// credential primitives, and the mail transport:
///
/// - `POST /v1/auth/register` - Create an account and issue a token
/// - `POST /v1/auth/login` - Verify credentials and issue a token
/// - `POST /v1/auth/password/forgot` - Issue a reset ticket and email the code
/// - `POST /v1/auth/password/reset` - Redeem a ticket and set a new password
///
/// Authentication failures (unknown account, wrong password, missing
/// ticket) are a bare 403 with no body, so the caller cannot tell which
/// check failed. Everything else surfaces as a 500 carrying the
/// failure's message.

use crate::{
    app::AppState,
    auth::{code, password, token},
    error::{ApiError, ApiResult},
    mail::templates,
    models::{CreateAccount, CreateResetTicket},
};
use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Register request; the credentials arrive nested under `user`
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// New account credentials
    pub user: Credentials,
}

/// Email and plaintext password pair
#[derive(Debug, Deserialize)]
pub struct Credentials {
    /// Email address
    pub email: String,

    /// Plaintext password
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email address
    pub email: String,

    /// Plaintext password
    pub password: String,
}

/// Login response body
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// The account, without its credential
    pub user: crate::models::PublicAccount,

    /// The issued bearer token (also present in header and cookie)
    pub token: String,
}

/// Password-reset request ("forgot password")
#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    /// Email address to send the code to
    pub email: String,
}

/// Password-reset confirmation
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    /// Email address the code was issued for
    pub email: String,

    /// The emailed one-time code
    pub code: String,

    /// New plaintext password
    pub password: String,
}

/// Writes the token into the `X-Access-Token` header and `token` cookie
fn apply_token_headers(response: &mut Response, token: &str) -> ApiResult<()> {
    let header_value = HeaderValue::from_str(token)
        .map_err(|e| ApiError::Internal(format!("token is not a valid header value: {}", e)))?;

    let cookie = HeaderValue::from_str(&format!("token={}; Path=/; HttpOnly", token))
        .map_err(|e| ApiError::Internal(format!("token is not a valid cookie value: {}", e)))?;

    let headers = response.headers_mut();
    headers.insert("X-Access-Token", header_value);
    headers.insert(header::SET_COOKIE, cookie);
    Ok(())
}

/// Register a new account
///
/// # Endpoint
///
/// ```text
/// POST /v1/auth/register
/// Content-Type: application/json
///
/// { "user": { "email": "user@example.com", "password": "hunter2!" } }
/// ```
///
/// # Response
///
/// `201 Created` with `X-Access-Token` and `Location` headers, a
/// `token` cookie, and the public account as the JSON body.
///
/// # Failure policy
///
/// If anything after the input parse fails - hashing, the insert, the
/// registration email, token signing - any account matching the email
/// is deleted again on a best-effort basis and the response is a 500
/// with the original failure's message. A registration email that was
/// already accepted by the relay cannot be recalled, so the recipient
/// may hold a welcome notice for an account that no longer exists.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Response> {
    let Credentials { email, password } = req.user;

    match try_register(&state, &email, &password).await {
        Ok(response) => Ok(response),
        Err(err) => {
            // Best-effort compensation, not a transaction: a failed
            // registration must not leave a half-created account behind.
            // A failure of the delete itself is logged and swallowed.
            if let Err(cleanup) = state.accounts.delete_account_by_email(&email).await {
                tracing::warn!(
                    "cleanup after failed registration of {} did not complete: {}",
                    email,
                    cleanup
                );
            }
            Err(err)
        }
    }
}

/// The happy path of registration; errors bubble to the compensator
async fn try_register(state: &AppState, email: &str, plaintext: &str) -> ApiResult<Response> {
    let password_hash = password::hash_password(plaintext)?;

    let account = state
        .accounts
        .create_account(CreateAccount {
            email: email.to_string(),
            password_hash,
        })
        .await?;
    let user = account.public();

    state.mailer.send(templates::registration_email(email)).await?;

    let session = token::issue_token(&user, state.jwt_secret())?;

    let location = HeaderValue::from_str(&format!("/users/{}", user.id))
        .map_err(|e| ApiError::Internal(format!("invalid location header: {}", e)))?;

    let mut response = (StatusCode::CREATED, Json(user)).into_response();
    response.headers_mut().insert(header::LOCATION, location);
    apply_token_headers(&mut response, &session)?;

    tracing::info!("registered account for {}", email);
    Ok(response)
}

/// Login with email and password
///
/// # Endpoint
///
/// ```text
/// POST /v1/auth/login
/// Content-Type: application/json
///
/// { "email": "user@example.com", "password": "hunter2!" }
/// ```
///
/// # Response
///
/// `200 OK` with the `X-Access-Token` header, a `token` cookie, and a
/// JSON body `{ "user": ..., "token": ... }`. Unknown email and wrong
/// password both produce an empty 403.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Response> {
    let account = state
        .accounts
        .find_account_by_email(&req.email)
        .await?
        .ok_or(ApiError::Forbidden)?;

    if !password::verify_password(&req.password, &account.password_hash)? {
        return Err(ApiError::Forbidden);
    }

    let user = account.public();
    let session = token::issue_token(&user, state.jwt_secret())?;

    let mut response = (
        StatusCode::OK,
        Json(LoginResponse {
            user,
            token: session.clone(),
        }),
    )
        .into_response();
    apply_token_headers(&mut response, &session)?;

    Ok(response)
}

/// Request a password-reset code
///
/// # Endpoint
///
/// ```text
/// POST /v1/auth/password/forgot
/// Content-Type: application/json
///
/// { "email": "user@example.com" }
/// ```
///
/// # Response
///
/// `201 Created` with the text body "Code sent".
///
/// A ticket is created and the code emailed whether or not an account
/// exists for the address; the response does not reveal which. Repeated
/// requests stack additional tickets, all of them redeemable.
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(req): Json<ForgotPasswordRequest>,
) -> ApiResult<Response> {
    let reset_code = code::generate_reset_code();

    state
        .tickets
        .create_ticket(CreateResetTicket {
            email: req.email.clone(),
            code: reset_code.clone(),
        })
        .await?;

    state
        .mailer
        .send(templates::reset_code_email(&req.email, &reset_code))
        .await?;

    tracing::info!("password reset code issued for {}", req.email);
    Ok((StatusCode::CREATED, "Code sent").into_response())
}

/// Confirm a password reset with an emailed code
///
/// # Endpoint
///
/// ```text
/// POST /v1/auth/password/reset
/// Content-Type: application/json
///
/// { "email": "user@example.com", "code": "042137", "password": "new-pass!" }
/// ```
///
/// # Response
///
/// `204 No Content`. A ticket lookup miss is an empty 403; a valid
/// ticket pointing at a nonexistent account is a 500. The ticket stays
/// on record after redemption, and no confirmation email is sent.
pub async fn reset_password(
    State(state): State<AppState>,
    Json(req): Json<ResetPasswordRequest>,
) -> ApiResult<StatusCode> {
    state
        .tickets
        .find_ticket(&req.email, &req.code)
        .await?
        .ok_or(ApiError::Forbidden)?;

    let account = state
        .accounts
        .find_account_by_email(&req.email)
        .await?
        .ok_or_else(|| ApiError::Internal(format!("no account on file for {}", req.email)))?;

    let password_hash = password::hash_password(&req.password)?;

    state
        .accounts
        .update_password_hash(account.id, &password_hash)
        .await?
        .ok_or_else(|| {
            ApiError::Internal(format!("account for {} vanished during reset", req.email))
        })?;

    tracing::info!("password reset completed for {}", req.email);
    Ok(StatusCode::NO_CONTENT)
}

use std::str::FromStr;

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::{
    get, http::header::ContentType, http::StatusCode, web, HttpRequest, HttpResponse, Responder,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::ErrorResponse;
use crate::auth::application::domain::entities::{AuthenticatedSession, OAuthProvider};
use crate::auth::application::ports::incoming::use_cases::{OAuthLoginError, OAuthLoginStart};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Binds a login to the browser that started it.
pub const OAUTH_NONCE_COOKIE: &str = "oauth_nonce";
const CALLBACK_PATH: &str = "/auth/callback";

fn nonce_cookie(nonce: String, app_origin: &str) -> Cookie<'static> {
    Cookie::build(OAUTH_NONCE_COOKIE, nonce)
        .path(CALLBACK_PATH)
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(app_origin.starts_with("https://"))
        .max_age(Duration::minutes(10))
        .finish()
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthorizationUrlResponse {
    pub url: String,
}

/// Provider authorization URL for the login popup
#[utoipa::path(
    get,
    path = "/api/auth/url/{provider}",
    tag = "auth",
    params(("provider" = String, Path, description = "google | facebook | twitter")),
    responses(
        (status = 200, description = "Authorization URL; also sets the `oauth_nonce` cookie", body = AuthorizationUrlResponse),
        (status = 400, description = "Unknown or unconfigured provider", body = ErrorResponse),
    )
)]
#[get("/api/auth/url/{provider}")]
pub async fn oauth_url_handler(path: web::Path<String>, data: web::Data<AppState>) -> impl Responder {
    let provider = match OAuthProvider::from_str(&path.into_inner()) {
        Ok(provider) => provider,
        Err(e) => return ApiResponse::bad_request("UNKNOWN_PROVIDER", &e.to_string()),
    };

    match data.auth.start_oauth.execute(provider).await {
        Ok(OAuthLoginStart { url, nonce }) => HttpResponse::Ok()
            .cookie(nonce_cookie(nonce, &data.app_origin))
            .json(AuthorizationUrlResponse { url }),
        Err(e @ OAuthLoginError::ProviderNotConfigured(_)) => {
            warn!(provider = %provider, "OAuth login requested for unconfigured provider");
            ApiResponse::bad_request("PROVIDER_NOT_CONFIGURED", &e.to_string())
        }
        Err(e) => {
            error!(provider = %provider, error = %e, "Failed to build authorization URL");
            ApiResponse::internal_error()
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    /// Set by the provider when the user denies consent.
    pub error: Option<String>,
}

#[derive(Serialize)]
struct OpenerMessage<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(flatten)]
    session: &'a AuthenticatedSession,
}

/// OAuth redirect target
///
/// Exchanges the code with the provider named in the signed `state`, then
/// hands the session to the opener window, provided that window is the
/// storefront origin.
#[utoipa::path(
    get,
    path = "/auth/callback",
    tag = "auth",
    params(CallbackQuery),
    responses(
        (status = 200, description = "HTML page posting OAUTH_AUTH_SUCCESS to the opener", content_type = "text/html"),
        (status = 400, description = "Missing code, invalid state or nonce cookie", content_type = "text/html"),
        (status = 502, description = "Provider rejected the exchange", content_type = "text/html"),
        (status = 504, description = "Provider timed out", content_type = "text/html"),
    )
)]
#[get("/auth/callback")]
pub async fn oauth_callback_handler(
    req: HttpRequest,
    query: web::Query<CallbackQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    if let Some(reason) = query.error {
        warn!(reason = %reason, "OAuth consent denied");
        return failure_page(StatusCode::BAD_REQUEST, "Authentication was cancelled");
    }

    let (Some(code), Some(state)) = (query.code, query.state) else {
        return failure_page(StatusCode::BAD_REQUEST, "Authentication failed");
    };

    let Some(nonce) = req.cookie(OAUTH_NONCE_COOKIE) else {
        warn!("OAuth callback without nonce cookie");
        return failure_page(StatusCode::BAD_REQUEST, "Authentication failed");
    };

    match data
        .auth
        .complete_oauth
        .execute(&code, &state, nonce.value())
        .await
    {
        Ok(session) => {
            info!(user_id = %session.user.id, "OAuth login completed");
            let mut page = success_page(&session, &data.app_origin);
            let spent = nonce_cookie(String::new(), &data.app_origin);
            if let Err(e) = page.add_removal_cookie(&spent) {
                warn!(error = %e, "Failed to clear OAuth nonce cookie");
            }
            page
        }
        Err(OAuthLoginError::InvalidState) => {
            warn!("OAuth callback with invalid state");
            failure_page(StatusCode::BAD_REQUEST, "Authentication failed")
        }
        Err(OAuthLoginError::ProviderNotConfigured(provider)) => {
            warn!(provider = %provider, "OAuth callback for unconfigured provider");
            failure_page(StatusCode::BAD_REQUEST, "Authentication failed")
        }
        Err(OAuthLoginError::ProviderTimeout) => {
            error!("OAuth provider timed out");
            failure_page(StatusCode::GATEWAY_TIMEOUT, "The login provider did not respond")
        }
        Err(OAuthLoginError::ProviderError(e)) => {
            error!(error = %e, "OAuth provider error");
            failure_page(StatusCode::BAD_GATEWAY, "The login provider rejected the request")
        }
        Err(e) => {
            error!(error = %e, "OAuth login failed");
            failure_page(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error during authentication",
            )
        }
    }
}

/// JSON for an inline `<script>`; `</` would end the script early.
fn script_literal<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value).map(|json| json.replace("</", "<\\/"))
}

fn success_page(session: &AuthenticatedSession, app_origin: &str) -> HttpResponse {
    let message = OpenerMessage {
        kind: "OAUTH_AUTH_SUCCESS",
        session,
    };
    let literals = script_literal(&message).and_then(|payload| {
        script_literal(app_origin).map(|target_origin| (payload, target_origin))
    });
    let (payload, target_origin) = match literals {
        Ok(literals) => literals,
        Err(e) => {
            error!(error = %e, "Failed to serialize OAuth session");
            return failure_page(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error during authentication",
            );
        }
    };

    let body = format!(
        r#"<html>
  <body>
    <script>
      if (window.opener) {{
        window.opener.postMessage({payload}, {target_origin});
        window.close();
      }} else {{
        window.location.href = '/';
      }}
    </script>
    <p>Authentication successful. This window should close automatically.</p>
  </body>
</html>"#
    );

    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}

fn failure_page(status: StatusCode, text: &str) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(format!("<html><body><p>{text}</p></body></html>"))
}

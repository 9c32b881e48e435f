//! Bearer token acquisition.

use reqwest::blocking::Client;
use tracing::debug;

use freshcrawl_core::{CrawlError, Credentials, Settings};

use crate::wire::TokenPayload;

/// OAuth2 token endpoint for a tenant.
pub fn token_endpoint(tenant: &str) -> String {
    format!("https://login.microsoftonline.com/{tenant}/oauth2/v2.0/token")
}

/// Scope granting the tenant's SharePoint API.
pub fn scope(web_origin: &str) -> String {
    format!("{}/.default", web_origin.trim_end_matches('/'))
}

/// Obtain a bearer token for `site`.
///
/// Token credentials pass through unchanged. Password credentials go through
/// the resource-owner password grant of the configured public client.
pub(crate) fn acquire_token(
    http: &Client,
    settings: &Settings,
    site: &str,
    credentials: &Credentials,
) -> Result<String, CrawlError> {
    let (username, password) = match credentials {
        Credentials::AccessToken(token) => return Ok(token.clone()),
        Credentials::Password { username, password } => (username, password),
    };

    if settings.client_id.is_empty() {
        return Err(CrawlError::invalid_config(
            "client_id is required for password sign-in",
        ));
    }

    let username = settings.qualify_user(username);
    let endpoint = token_endpoint(&settings.tenant);
    let scope = scope(&settings.web_origin);
    debug!(%endpoint, user = %username, "requesting token");

    let form = [
        ("grant_type", "password"),
        ("client_id", settings.client_id.as_str()),
        ("scope", scope.as_str()),
        ("username", username.as_str()),
        ("password", password.as_str()),
    ];

    let auth_error = |message: String| CrawlError::Authentication {
        site: site.to_string(),
        message,
    };

    let response = http
        .post(&endpoint)
        .form(&form)
        .send()
        .map_err(|e| auth_error(e.to_string()))?;
    let status = response.status();
    let body = response.text().map_err(|e| auth_error(e.to_string()))?;

    parse_token(&body).map_err(|message| {
        debug!(%status, "token request rejected");
        auth_error(message)
    })
}

/// Extract the access token from a token endpoint body.
pub(crate) fn parse_token(body: &str) -> Result<String, String> {
    let payload: TokenPayload =
        serde_json::from_str(body).map_err(|e| format!("unreadable token response: {e}"))?;

    match payload {
        TokenPayload {
            access_token: Some(token),
            ..
        } => Ok(token),
        TokenPayload {
            error_description: Some(description),
            ..
        } => Err(first_line(&description).to_string()),
        TokenPayload {
            error: Some(error), ..
        } => Err(error),
        _ => Err("token response carried no access token".to_string()),
    }
}

// AAD descriptions append trace and correlation ids on later lines.
fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or(text).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(
            token_endpoint("contoso.onmicrosoft.com"),
            "https://login.microsoftonline.com/contoso.onmicrosoft.com/oauth2/v2.0/token"
        );
        assert_eq!(
            scope("https://contoso.sharepoint.com/"),
            "https://contoso.sharepoint.com/.default"
        );
    }

    #[test]
    fn test_parse_token_success() {
        let body = r#"{"token_type":"Bearer","expires_in":3599,"access_token":"eyJ0eXAi"}"#;
        assert_eq!(parse_token(body).unwrap(), "eyJ0eXAi");
    }

    #[test]
    fn test_parse_token_failure() {
        let body = r#"{"error":"invalid_grant",
            "error_description":"AADSTS50126: Error validating credentials.\r\nTrace ID: 1234"}"#;
        assert_eq!(
            parse_token(body).unwrap_err(),
            "AADSTS50126: Error validating credentials."
        );

        assert_eq!(
            parse_token(r#"{"error":"invalid_client"}"#).unwrap_err(),
            "invalid_client"
        );
        assert!(parse_token("not json").is_err());
    }

    #[test]
    fn test_token_credentials_skip_the_grant() {
        let http = Client::new();
        let settings = Settings::default();
        let token = acquire_token(
            &http,
            &settings,
            "axion",
            &Credentials::AccessToken("abc".to_string()),
        )
        .unwrap();
        assert_eq!(token, "abc");
    }

    #[test]
    fn test_password_grant_needs_client_id() {
        let http = Client::new();
        let settings = Settings::default();
        let result = acquire_token(
            &http,
            &settings,
            "axion",
            &Credentials::password("jdoe", "secret"),
        );
        assert!(matches!(result, Err(CrawlError::InvalidConfig { .. })));
    }
}

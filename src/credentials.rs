//! Credential resolution: flags and environment first, then prompts.

use freshcrawl_core::{CrawlError, Credentials, Prompt};

/// Build credentials from what was supplied, asking for anything missing.
///
/// A token wins over a username and password. Empty values count as missing.
pub fn resolve(
    user: Option<String>,
    password: Option<String>,
    token: Option<String>,
    prompt: &mut dyn Prompt,
) -> Result<Credentials, CrawlError> {
    if let Some(token) = supplied(token) {
        return Ok(Credentials::AccessToken(token));
    }

    let user = match supplied(user) {
        Some(user) => user,
        None => prompt.ask("Enter username: ")?.trim().to_string(),
    };
    if user.is_empty() {
        return Err(CrawlError::input_format(user, "a username"));
    }

    let password = match supplied(password) {
        Some(password) => password,
        None => prompt.ask_secret("Enter password: ")?,
    };

    Ok(Credentials::password(user, password))
}

fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use freshcrawl_core::ScriptedPrompt;

    #[test]
    fn test_supplied_values_skip_prompts() {
        let mut prompt = ScriptedPrompt::new(Vec::<String>::new());
        let creds = resolve(Some("jdoe".into()), Some("pw".into()), None, &mut prompt).unwrap();
        assert_eq!(creds, Credentials::password("jdoe", "pw"));
        assert!(prompt.transcript().is_empty());
    }

    #[test]
    fn test_token_wins() {
        let mut prompt = ScriptedPrompt::new(Vec::<String>::new());
        let creds = resolve(Some("jdoe".into()), None, Some("tok".into()), &mut prompt).unwrap();
        assert_eq!(creds, Credentials::AccessToken("tok".into()));
    }

    #[test]
    fn test_missing_values_are_prompted() {
        let mut prompt = ScriptedPrompt::new([" jdoe ", "hunter2"]);
        let creds = resolve(None, Some(String::new()), None, &mut prompt).unwrap();
        assert_eq!(creds, Credentials::password("jdoe", "hunter2"));
        assert!(prompt.saw("Enter password: "));
    }

    #[test]
    fn test_blank_username_rejected() {
        let mut prompt = ScriptedPrompt::new(["  "]);
        let result = resolve(None, None, None, &mut prompt);
        assert!(matches!(result, Err(CrawlError::InputFormat { .. })));
    }
}

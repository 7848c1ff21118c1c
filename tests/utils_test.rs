use std::collections::HashMap;

use moodlist::{
    config::Config,
    utils::{build_authorize_url, escape_html, generate_code_challenge, generate_code_verifier},
};
use reqwest::Url;

fn config() -> Config {
    Config::from_lookup(|key: &str| match key {
        "SPOTIFY_API_AUTH_CLIENT_ID" => Some("client-123".to_string()),
        "SPOTIFY_API_REDIRECT_URI" => Some("http://127.0.0.1:8080/callback".to_string()),
        _ => None,
    })
    .unwrap()
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    assert_eq!(verifier.len(), 128);
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(verifier, generate_code_verifier());
}

#[test]
fn test_generate_code_challenge() {
    let challenge = generate_code_challenge("test_verifier_123");

    // SHA-256 digest, base64url without padding
    assert_eq!(challenge.len(), 43);
    assert_eq!(challenge, generate_code_challenge("test_verifier_123"));
    assert_ne!(challenge, generate_code_challenge("different_verifier"));
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_code_challenge_matches_rfc7636_example() {
    // Appendix B of RFC 7636
    let verifier = "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk";
    assert_eq!(
        generate_code_challenge(verifier),
        "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"
    );
}

#[test]
fn test_build_authorize_url_encodes_parameters() {
    let url = build_authorize_url(&config(), "challenge-abc").unwrap();
    let parsed = Url::parse(&url).unwrap();

    assert_eq!(parsed.host_str(), Some("accounts.spotify.com"));
    assert_eq!(parsed.path(), "/authorize");

    let params: HashMap<String, String> = parsed.query_pairs().into_owned().collect();
    assert_eq!(params["client_id"], "client-123");
    assert_eq!(params["response_type"], "code");
    assert_eq!(params["redirect_uri"], "http://127.0.0.1:8080/callback");
    assert_eq!(params["code_challenge"], "challenge-abc");
    assert_eq!(params["code_challenge_method"], "S256");
    assert_eq!(
        params["scope"],
        "playlist-modify-private user-library-read user-top-read"
    );
    assert!(!url.contains(' '));
}

#[test]
fn test_build_authorize_url_rejects_invalid_base() {
    let mut config = config();
    config.auth_url = "not a url".to_string();
    assert!(build_authorize_url(&config, "c").is_err());
}

#[test]
fn test_escape_html() {
    assert_eq!(
        escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
        "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
    );
    assert_eq!(escape_html("plain text"), "plain text");
}

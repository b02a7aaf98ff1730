use super::*;

#[test]
fn default_config_uses_same_origin_and_token_key() {
    let config = AppConfig::default();
    assert_eq!(config.api_base_url, "");
    assert_eq!(config.token_storage_key, "token");
}

#[test]
fn from_base_url_trims_whitespace_and_trailing_slashes() {
    let config = AppConfig::from_base_url("  https://api.example.com//  ");
    assert_eq!(config.api_base_url, "https://api.example.com");
}

#[test]
fn endpoint_joins_base_prefix_and_path() {
    let config = AppConfig::from_base_url("https://api.example.com/");
    assert_eq!(config.endpoint("/login"), "https://api.example.com/api/v1/login");
    assert_eq!(config.endpoint("user"), "https://api.example.com/api/v1/user");
}

#[test]
fn endpoint_is_origin_relative_without_base() {
    let config = AppConfig::default();
    assert_eq!(config.endpoint("/logout"), "/api/v1/logout");
}

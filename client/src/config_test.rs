use super::*;

#[test]
fn defaults_apply_when_unset() {
    let endpoints = Endpoints::from_values(None, None, None);
    assert_eq!(endpoints.login, DEFAULT_LOGIN_API);
    assert_eq!(endpoints.signup, DEFAULT_SIGNUP_API);
    assert_eq!(endpoints.home, DEFAULT_HOME_API);
    assert_eq!(endpoints, Endpoints::default());
}

#[test]
fn provided_values_override_defaults() {
    let endpoints = Endpoints::from_values(
        Some("https://auth.example.test/login"),
        Some("https://auth.example.test/signup"),
        Some("https://auth.example.test/home"),
    );
    assert_eq!(endpoints.login, "https://auth.example.test/login");
    assert_eq!(endpoints.signup, "https://auth.example.test/signup");
    assert_eq!(endpoints.home, "https://auth.example.test/home");
}

#[test]
fn blank_values_fall_back_and_values_are_trimmed() {
    let endpoints = Endpoints::from_values(Some("   "), Some(""), Some("  /api/home  "));
    assert_eq!(endpoints.login, DEFAULT_LOGIN_API);
    assert_eq!(endpoints.signup, DEFAULT_SIGNUP_API);
    assert_eq!(endpoints.home, "/api/home");
}

#[test]
fn for_form_selects_matching_endpoint() {
    let endpoints = Endpoints::from_values(Some("/l"), Some("/s"), Some("/h"));
    assert_eq!(endpoints.for_form(FormKind::Login), "/l");
    assert_eq!(endpoints.for_form(FormKind::SignUp), "/s");
}

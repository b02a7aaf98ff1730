use super::*;

fn user(is_admin: bool) -> User {
    User {
        id: 1,
        name: "Ann".to_owned(),
        email: "a@b.com".to_owned(),
        is_admin,
    }
}

// =============================================================
// Derived flags
// =============================================================

#[test]
fn default_session_is_signed_out() {
    let session = Session::default();
    assert!(!session.is_authenticated());
    assert!(!session.is_admin());
    assert!(session.current_user().is_none());
}

#[test]
fn authenticated_session_exposes_user() {
    let session = Session::authenticated("T".to_owned(), user(false));
    assert!(session.is_authenticated());
    assert!(!session.is_admin());
    assert_eq!(session.current_user().map(|u| u.id), Some(1));
}

#[test]
fn admin_flag_follows_user() {
    let session = Session::authenticated("T".to_owned(), user(true));
    assert!(session.is_admin());
}

#[test]
fn user_without_token_is_ignored() {
    let session = Session {
        token: None,
        user: Some(user(true)),
    };
    assert!(!session.is_authenticated());
    assert!(!session.is_admin());
    assert!(session.current_user().is_none());
}

#[test]
fn token_without_user_is_authenticated_but_not_admin() {
    let session = Session {
        token: Some("T".to_owned()),
        user: None,
    };
    assert!(session.is_authenticated());
    assert!(!session.is_admin());
}

#[test]
fn empty_token_never_authenticates() {
    assert_eq!(Session::authenticated(String::new(), user(true)), Session::default());
    let session = Session {
        token: Some(String::new()),
        user: Some(user(true)),
    };
    assert!(!session.is_authenticated());
}

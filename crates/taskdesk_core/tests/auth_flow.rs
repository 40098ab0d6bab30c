use taskdesk_core::{
    open_store, AuthError, AuthService, JsonCredentialRepository, Profile, SignUpRequest,
};
use tempfile::tempdir;

fn signup(username: &str, password: &str) -> SignUpRequest {
    SignUpRequest {
        username: username.to_string(),
        password: password.to_string(),
        profile: Profile {
            name: Some("Alice Example".to_string()),
            address: Some("1 Main St".to_string()),
            age: Some(30),
        },
    }
}

#[test]
fn signup_then_login_succeeds() {
    let dir = tempdir().unwrap();
    let root = open_store(dir.path()).unwrap();
    let auth = AuthService::new(JsonCredentialRepository::new(&root));

    auth.sign_up(&signup("alice", "pw1")).unwrap();

    let session = auth.log_in("alice", "pw1").unwrap();
    assert_eq!(session.username(), "alice");
    session.log_out();
}

#[test]
fn login_with_wrong_password_is_rejected() {
    let dir = tempdir().unwrap();
    let root = open_store(dir.path()).unwrap();
    let auth = AuthService::new(JsonCredentialRepository::new(&root));

    auth.sign_up(&signup("alice", "pw1")).unwrap();

    let err = auth.log_in("alice", "wrong").unwrap_err();
    assert!(matches!(err, AuthError::WrongPassword(ref user) if user == "alice"));
}

#[test]
fn login_for_unknown_user_is_rejected() {
    let dir = tempdir().unwrap();
    let root = open_store(dir.path()).unwrap();
    let auth = AuthService::new(JsonCredentialRepository::new(&root));

    let err = auth.log_in("ghost", "pw").unwrap_err();
    assert!(matches!(err, AuthError::UnknownUser(ref user) if user == "ghost"));
}

#[test]
fn duplicate_signup_is_rejected_not_overwritten() {
    let dir = tempdir().unwrap();
    let root = open_store(dir.path()).unwrap();
    let auth = AuthService::new(JsonCredentialRepository::new(&root));

    auth.sign_up(&signup("alice", "pw1")).unwrap();
    let err = auth.sign_up(&signup("alice", "pw2")).unwrap_err();
    assert!(matches!(err, AuthError::AccountExists(ref user) if user == "alice"));

    // The original record survives: the first password still works.
    assert!(auth.log_in("alice", "pw1").is_ok());
    assert!(auth.log_in("alice", "pw2").is_err());
}

#[test]
fn signup_rejects_unsafe_usernames_and_empty_passwords() {
    let dir = tempdir().unwrap();
    let root = open_store(dir.path()).unwrap();
    let auth = AuthService::new(JsonCredentialRepository::new(&root));

    let err = auth.sign_up(&signup("../escape", "pw")).unwrap_err();
    assert!(matches!(err, AuthError::InvalidUsername(_)));

    let err = auth.sign_up(&signup("alice", "   ")).unwrap_err();
    assert!(matches!(err, AuthError::EmptyPassword));
}

#[test]
fn usernames_are_case_sensitive() {
    let dir = tempdir().unwrap();
    let root = open_store(dir.path()).unwrap();
    let auth = AuthService::new(JsonCredentialRepository::new(&root));

    auth.sign_up(&signup("Alice", "pw1")).unwrap();

    let err = auth.log_in("alice", "pw1").unwrap_err();
    assert!(matches!(err, AuthError::UnknownUser(_)));
}

#[test]
fn profile_is_readable_through_an_active_session() {
    let dir = tempdir().unwrap();
    let root = open_store(dir.path()).unwrap();
    let auth = AuthService::new(JsonCredentialRepository::new(&root));

    auth.sign_up(&signup("alice", "pw1")).unwrap();
    let session = auth.log_in("alice", "pw1").unwrap();

    let record = auth.profile(&session).unwrap();
    assert_eq!(record.username, "alice");
    assert_eq!(record.profile.name.as_deref(), Some("Alice Example"));
    assert_eq!(record.profile.age, Some(30));
    // The stored record never carries the plaintext password.
    assert_ne!(record.password_hash, "pw1");
}

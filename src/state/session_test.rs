use super::*;
use crate::util::storage::MemoryStore;

fn session() -> SessionStore<MemoryStore> {
    SessionStore::new(MemoryStore::new(), "pt_user")
}

fn alice() -> User {
    User { name: "Alice".to_owned(), email: "a@b.com".to_owned(), password: "x".to_owned() }
}

#[test]
fn load_without_record_is_none() {
    assert_eq!(session().load().expect("load"), None);
}

#[test]
fn save_writes_json_under_key() {
    let session = session();
    session.save(&alice()).expect("save");
    let raw = session.store().get("pt_user").expect("get").expect("raw");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(value, serde_json::json!({ "name": "Alice", "email": "a@b.com", "password": "x" }));
}

#[test]
fn save_overwrites_previous_record() {
    let session = session();
    session.save(&alice()).expect("save");
    let bob = User { name: "Bob".to_owned(), email: "bob@b.com".to_owned(), password: "y".to_owned() };
    session.save(&bob).expect("save");
    assert_eq!(session.load().expect("load"), Some(bob));
}

#[test]
fn clear_removes_record() {
    let session = session();
    session.save(&alice()).expect("save");
    session.clear().expect("clear");
    assert_eq!(session.load().expect("load"), None);
}

#[test]
fn load_tolerates_missing_name() {
    let session = session();
    session.store().set("pt_user", r#"{"email":"a@b.com","password":"x"}"#).expect("set");
    let user = session.load().expect("load").expect("user");
    assert_eq!(user.email, "a@b.com");
    assert!(user.name.is_empty());
}

#[test]
fn load_rejects_record_without_credentials() {
    let session = session();
    session.store().set("pt_user", r#"{"name":"Alice"}"#).expect("set");
    assert!(matches!(session.load(), Err(StoreError::Decode(_))));
    session.store().set("pt_user", r#"{"name":"Alice","email":"a@b.com"}"#).expect("set");
    assert!(matches!(session.load(), Err(StoreError::Decode(_))));
}

#[test]
fn load_reports_corrupt_record() {
    let session = session();
    session.store().set("pt_user", "not json").expect("set");
    assert!(matches!(session.load(), Err(StoreError::Decode(_))));
}

use super::*;

#[test]
fn user_deserializes_without_image_url() {
    let json = r#"{
        "id": "u1",
        "name": "Ada Lovelace",
        "username": "ada",
        "email": "ada@example.com"
    }"#;
    let user: User = serde_json::from_str(json).expect("valid user json");
    assert_eq!(user.username, "ada");
    assert_eq!(user.image_url, None);
}

#[test]
fn signup_payload_serializes_all_fields() {
    let payload = SignupPayload {
        name: "Ada Lovelace".to_owned(),
        username: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "correct horse".to_owned(),
    };
    let value = serde_json::to_value(&payload).expect("serializable");
    assert_eq!(value["username"], "ada");
    assert_eq!(value["password"], "correct horse");
}

use super::*;

#[test]
fn contact_request_serializes_expected_fields() {
    let req = ContactRequest {
        nombre: "Ana".to_owned(),
        correo: "ana@example.com".to_owned(),
        mensaje: "Hola".to_owned(),
        hp: String::new(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "nombre": "Ana", "correo": "ana@example.com", "mensaje": "Hola", "hp": "" })
    );
}

#[test]
fn contact_response_defaults_missing_fields() {
    let body: ContactResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(body, ContactResponse::default());
    assert!(!body.ok);
}

#[test]
fn contact_reply_accepted_requires_status_and_ok() {
    let ok_body = ContactResponse { ok: true, ..ContactResponse::default() };
    assert!(ContactReply { status_ok: true, body: ok_body.clone() }.accepted());
    assert!(!ContactReply { status_ok: false, body: ok_body }.accepted());
    assert!(!ContactReply { status_ok: true, body: ContactResponse::default() }.accepted());
}

#[test]
fn contact_reply_reason_prefers_error_over_message() {
    let body: ContactResponse =
        serde_json::from_str(r#"{"ok":false,"error":"¿Quisiste decir @gmail.com?","message":"otro"}"#).unwrap();
    let reply = ContactReply { status_ok: false, body };
    assert_eq!(reply.reason(), Some("¿Quisiste decir @gmail.com?"));

    let body: ContactResponse = serde_json::from_str(r#"{"ok":false,"message":"Límite alcanzado"}"#).unwrap();
    assert_eq!(ContactReply { status_ok: false, body }.reason(), Some("Límite alcanzado"));
}

#[test]
fn json_content_type_detection() {
    assert!(is_json_content_type("application/json"));
    assert!(is_json_content_type("Application/JSON; charset=utf-8"));
    assert!(!is_json_content_type("text/html; charset=utf-8"));
    assert!(!is_json_content_type(""));
}

#[test]
fn json_content_type_accepts_structured_suffixes() {
    assert!(is_json_content_type("application/problem+json"));
    assert!(is_json_content_type("application/vnd.api+json; charset=utf-8"));
    assert!(is_json_content_type("  APPLICATION/LD+JSON "));
}

#[test]
fn json_content_type_rejects_lookalikes() {
    assert!(!is_json_content_type("text/plain; note=application/json"));
    assert!(!is_json_content_type("application/jsonp"));
    assert!(!is_json_content_type("application/json-seq"));
    assert!(!is_json_content_type("json"));
    assert!(!is_json_content_type("/+json"));
}

#[test]
fn load_error_messages_name_the_failure() {
    assert_eq!(LoadError::Status(502).to_string(), "projects request returned status 502");
    assert!(LoadError::NotJson("text/html".to_owned()).to_string().contains("text/html"));
}

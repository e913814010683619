use super::*;

fn cerrada() -> NuevoEstado {
    NuevoEstado { id: None, nombre: "Cerrada".to_owned(), badge_class: "bg-success".to_owned() }
}

#[test]
fn form_body_encodes_both_fields() {
    let req = StatusChangeRequest::new("cerrada", "listo & revisado");
    assert_eq!(req.to_form_body(), "estado=cerrada&comentario=listo+%26+revisado");
}

#[test]
fn form_body_keeps_empty_comment() {
    let req = StatusChangeRequest::new("3", "");
    assert_eq!(req.to_form_body(), "estado=3&comentario=");
}

#[test]
fn badge_class_attr_wraps_server_class() {
    assert_eq!(cerrada().badge_class_attr(), "badge bg-success estado-badge");
}

#[test]
fn success_response_becomes_applied() {
    let body = r#"{"success":true,"message":"OK","nuevo_estado":{"nombre":"Cerrada","badge_class":"bg-success"}}"#;
    let outcome = StatusChangeResponse::parse(body).expect("outcome");
    assert_eq!(outcome, StatusChangeOutcome::Applied { message: "OK".to_owned(), estado: cerrada() });
}

#[test]
fn success_response_accepts_estado_id() {
    let body = r#"{"success":true,"message":"m","nuevo_estado":{"id":4,"nombre":"Cerrada","badge_class":"badge-cerrada"}}"#;
    let StatusChangeOutcome::Applied { estado, .. } = StatusChangeResponse::parse(body).expect("outcome") else {
        panic!("expected applied outcome");
    };
    assert_eq!(estado.id, Some(4));
}

#[test]
fn failure_response_becomes_rejected() {
    let body = r#"{"success":false,"message":"Estado no válido"}"#;
    let outcome = StatusChangeResponse::parse(body).expect("outcome");
    assert_eq!(outcome, StatusChangeOutcome::Rejected { message: "Estado no válido".to_owned() });
}

#[test]
fn failure_without_message_defaults_to_empty() {
    let outcome = StatusChangeResponse::parse(r#"{"success":false}"#).expect("outcome");
    assert_eq!(outcome, StatusChangeOutcome::Rejected { message: String::new() });
}

#[test]
fn success_without_nuevo_estado_is_contract_error() {
    let err = StatusChangeResponse::parse(r#"{"success":true,"message":"OK"}"#).expect_err("should fail");
    assert!(matches!(err, ContractError::MissingField("nuevo_estado")));
}

#[test]
fn success_with_blank_fields_is_contract_error() {
    let body = r#"{"success":true,"message":"OK","nuevo_estado":{"nombre":" ","badge_class":"x"}}"#;
    let err = StatusChangeResponse::parse(body).expect_err("should fail");
    assert!(matches!(err, ContractError::EmptyField("nuevo_estado.nombre")));

    let body = r#"{"success":true,"message":"OK","nuevo_estado":{"nombre":"Abierta","badge_class":""}}"#;
    let err = StatusChangeResponse::parse(body).expect_err("should fail");
    assert!(matches!(err, ContractError::EmptyField("nuevo_estado.badge_class")));
}

#[test]
fn missing_success_flag_is_json_error() {
    let err = StatusChangeResponse::parse(r#"{"message":"OK"}"#).expect_err("should fail");
    assert!(matches!(err, ContractError::Json(_)));
}

#[test]
fn rejected_constructor_omits_nuevo_estado_on_wire() {
    let json = serde_json::to_value(StatusChangeResponse::rejected("no")).expect("serialize");
    assert_eq!(json, serde_json::json!({"success": false, "message": "no"}));
}

#[test]
fn applied_constructor_serializes_nested_estado() {
    let json = serde_json::to_value(StatusChangeResponse::applied("ok", cerrada())).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "success": true,
            "message": "ok",
            "nuevo_estado": {"nombre": "Cerrada", "badge_class": "bg-success"}
        })
    );
}

use super::*;

use axum::http::{HeaderName, HeaderValue};
use contracts::StatusChangeOutcome;

const TOKEN: &str = "tok";

fn state() -> AppState {
    AppState::new(Fixtures::sample(), TOKEN)
}

fn headers(csrf: Option<&str>, xhr: bool) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Some(csrf) = csrf {
        let name = HeaderName::from_bytes(CSRF_HEADER.as_bytes()).expect("header name");
        headers.insert(name, HeaderValue::from_str(csrf).expect("header value"));
    }
    if xhr {
        let name = HeaderName::from_bytes(REQUESTED_WITH_HEADER.as_bytes()).expect("header name");
        headers.insert(name, HeaderValue::from_static(XHR_MARKER));
    }
    headers
}

async fn body_text(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf8")
}

// =============================================================
// apply_status_change
// =============================================================

#[test]
fn known_estado_is_applied_with_badge_class() {
    let mut fixtures = Fixtures::sample();
    let resp = apply_status_change(&mut fixtures, 42, &StatusChangeRequest::new("3", "ok")).expect("found");
    assert!(resp.success);
    assert_eq!(resp.message, "Estado cambiado a \"Cerrada\"");
    let nuevo = resp.nuevo_estado.expect("nuevo_estado");
    assert_eq!(nuevo.badge_class, "badge-cerrada");
}

#[test]
fn unknown_estado_is_rejected_in_body() {
    let mut fixtures = Fixtures::sample();
    let resp = apply_status_change(&mut fixtures, 42, &StatusChangeRequest::new("x", "")).expect("found");
    assert_eq!(resp, StatusChangeResponse::rejected("Estado no válido"));
}

#[test]
fn unknown_incident_is_not_found() {
    let mut fixtures = Fixtures::sample();
    let err = apply_status_change(&mut fixtures, 999, &StatusChangeRequest::new("1", "")).expect_err("missing");
    assert_eq!(err, StatusCode::NOT_FOUND);
}

// =============================================================
// cambiar_estado
// =============================================================

#[tokio::test]
async fn xhr_with_token_gets_json_the_widget_accepts() {
    let resp = cambiar_estado(
        State(state()),
        Path(42),
        headers(Some(TOKEN), true),
        Form(StatusChangeRequest::new("3", "")),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let outcome = StatusChangeResponse::parse(&body_text(resp).await).expect("contract");
    match outcome {
        StatusChangeOutcome::Applied { estado, .. } => {
            assert_eq!(estado.nombre, "Cerrada");
            assert_eq!(estado.badge_class_attr(), "badge badge-cerrada estado-badge");
        }
        StatusChangeOutcome::Rejected { message } => panic!("unexpected rejection: {message}"),
    }
}

#[tokio::test]
async fn missing_token_is_forbidden() {
    let resp =
        cambiar_estado(State(state()), Path(42), headers(None, true), Form(StatusChangeRequest::new("3", ""))).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn wrong_token_is_forbidden_and_changes_nothing() {
    let state = state();
    let resp = cambiar_estado(
        State(state.clone()),
        Path(42),
        headers(Some("other"), true),
        Form(StatusChangeRequest::new("3", "")),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(state.fixtures.read().await.incidencias.get(&42), Some(&2));
}

#[tokio::test]
async fn plain_form_post_redirects() {
    let resp = cambiar_estado(
        State(state()),
        Path(42),
        headers(Some(TOKEN), false),
        Form(StatusChangeRequest::new("3", "")),
    )
    .await;
    assert!(resp.status().is_redirection());
}

#[tokio::test]
async fn invalid_estado_answers_success_false() {
    let resp = cambiar_estado(
        State(state()),
        Path(41),
        headers(Some(TOKEN), true),
        Form(StatusChangeRequest::new("99", "")),
    )
    .await;
    let outcome = StatusChangeResponse::parse(&body_text(resp).await).expect("contract");
    assert_eq!(outcome, StatusChangeOutcome::Rejected { message: "Estado no válido".to_owned() });
}

use super::*;

use contracts::Lookup;

use crate::fixtures::Fixtures;

fn state() -> AppState {
    AppState::new(Fixtures::sample(), "tok")
}

fn region(id: &str) -> Query<RegionQuery> {
    Query(RegionQuery { region_id: Some(id.to_owned()) })
}

fn proyecto(id: &str) -> Query<ProyectoQuery> {
    Query(ProyectoQuery { proyecto_id: Some(id.to_owned()) })
}

#[test]
fn parse_parent_accepts_integers_only() {
    assert_eq!(parse_parent(Some(" 13 ")), Some(13));
    assert_eq!(parse_parent(Some("trece")), None);
    assert_eq!(parse_parent(Some("")), None);
    assert_eq!(parse_parent(None), None);
}

#[tokio::test]
async fn comunas_are_filtered_by_region() {
    let Json(body) = comunas(State(state()), region("13")).await;
    let ids: Vec<i64> = body.comunas.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn missing_region_returns_empty_list() {
    let Json(body) = comunas(State(state()), Query(RegionQuery::default())).await;
    assert!(body.comunas.is_empty());
}

#[tokio::test]
async fn viviendas_body_decodes_as_widget_options() {
    let Json(body) = viviendas(State(state()), proyecto("1")).await;
    let raw = serde_json::to_string(&body).expect("serialize");
    let options = Lookup::Viviendas.parse_options(&raw).expect("contract");
    let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["Vivienda A-01", "Vivienda A-02", "Vivienda B-01"]);
}

#[tokio::test]
async fn recintos_follow_project() {
    let Json(body) = recintos(State(state()), proyecto("2")).await;
    let names: Vec<&str> = body.recintos.iter().map(|r| r.nombre.as_str()).collect();
    assert_eq!(names, vec!["Dormitorio"]);
}

#[tokio::test]
async fn non_numeric_project_returns_empty_list() {
    let Json(body) = recintos(State(state()), proyecto("abc")).await;
    assert!(body.recintos.is_empty());
}

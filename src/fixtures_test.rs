use super::*;

#[test]
fn comunas_filter_by_region() {
    let names: Vec<String> = Fixtures::sample().comunas_for(5).into_iter().map(|c| c.nombre).collect();
    assert_eq!(names, vec!["Valparaíso", "Viña del Mar"]);
}

#[test]
fn unknown_region_has_no_comunas() {
    assert!(Fixtures::sample().comunas_for(99).is_empty());
}

#[test]
fn viviendas_are_active_and_sorted_by_code() {
    let codes: Vec<String> = Fixtures::sample().viviendas_for(1).into_iter().map(|v| v.codigo).collect();
    assert_eq!(codes, vec!["A-01", "A-02", "B-01"]);
}

#[test]
fn recintos_follow_project_typologies() {
    let ids: Vec<i64> = Fixtures::sample().recintos_for(2).into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![102]);

    let ids: Vec<i64> = Fixtures::sample().recintos_for(1).into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![100, 101, 102, 103]);
}

#[test]
fn badge_classes_map_known_states() {
    assert_eq!(badge_class("Abierta"), "badge-abierta");
    assert_eq!(badge_class("En Proceso"), "badge-proceso");
    assert_eq!(badge_class("Cerrada"), "badge-cerrada");
    assert_eq!(badge_class("Rechazada"), "badge-vencida");
    assert_eq!(badge_class("Archivada"), "bg-secondary");
}

#[test]
fn change_status_updates_incident() {
    let mut fixtures = Fixtures::sample();
    let nuevo = fixtures.change_status(42, "3").expect("known estado");
    assert_eq!(nuevo.nombre, "Cerrada");
    assert_eq!(nuevo.badge_class, "badge-cerrada");
    assert_eq!(nuevo.id, Some(3));
    assert_eq!(fixtures.incidencias.get(&42), Some(&3));
}

#[test]
fn change_status_rejects_unknown_estado() {
    let mut fixtures = Fixtures::sample();
    assert_eq!(fixtures.change_status(42, "cerrada"), Err(StatusChangeError::UnknownEstado("cerrada".to_owned())));
    assert_eq!(fixtures.change_status(42, "99"), Err(StatusChangeError::UnknownEstado("99".to_owned())));
    assert_eq!(fixtures.incidencias.get(&42), Some(&2));
}

#[test]
fn change_status_rejects_unknown_incident() {
    let mut fixtures = Fixtures::sample();
    assert_eq!(fixtures.change_status(7, "1"), Err(StatusChangeError::UnknownIncidencia(7)));
}

#[test]
fn fixtures_parse_with_defaults() {
    let json = r#"{
        "viviendas": [{"id": 1, "proyecto_id": 9, "codigo": "X-1", "tipologia_id": 4}],
        "incidencias": {"5": 1}
    }"#;
    let fixtures: Fixtures = serde_json::from_str(json).expect("fixture json");
    assert!(fixtures.viviendas[0].activa);
    assert!(fixtures.comunas.is_empty());
    assert!(fixtures.has_incidencia(5));
}

#[test]
fn load_reports_missing_file() {
    let err = Fixtures::load(Path::new("/nonexistent/fixtures.json")).expect_err("missing");
    assert!(matches!(err, FixtureError::Io(_)));
}

use super::*;

#[test]
fn urls_carry_parent_param() {
    assert_eq!(Lookup::Comunas.url("13"), "/ajax/comunas/?region_id=13");
    assert_eq!(Lookup::Viviendas.url("5"), "/incidencias/ajax/viviendas/?proyecto_id=5");
    assert_eq!(Lookup::Recintos.url("5"), "/incidencias/ajax/recintos/?proyecto_id=5");
}

#[test]
fn comunas_parse_to_id_and_name() {
    let body = r#"{"comunas":[{"id":1,"nombre":"Santiago"},{"id":2,"nombre":"Maipú"}]}"#;
    let options = Lookup::Comunas.parse_options(body).expect("parse");
    assert_eq!(options, vec![LookupOption::new("1", "Santiago"), LookupOption::new("2", "Maipú")]);
}

#[test]
fn viviendas_label_is_synthesized_from_code() {
    let body = r#"{"viviendas":[{"id":10,"codigo":"A-01"},{"id":11,"codigo":7}]}"#;
    let options = Lookup::Viviendas.parse_options(body).expect("parse");
    assert_eq!(options, vec![LookupOption::new("10", "Vivienda A-01"), LookupOption::new("11", "Vivienda 7")]);
}

#[test]
fn recintos_parse_to_id_and_name() {
    let body = r#"{"recintos":[{"id":3,"nombre":"Cocina"}]}"#;
    let options = Lookup::Recintos.parse_options(body).expect("parse");
    assert_eq!(options, vec![LookupOption::new("3", "Cocina")]);
}

#[test]
fn empty_list_is_valid() {
    let options = Lookup::Comunas.parse_options(r#"{"comunas":[]}"#).expect("parse");
    assert!(options.is_empty());
}

#[test]
fn wrong_envelope_is_rejected() {
    let err = Lookup::Recintos
        .parse_options(r#"{"comunas":[]}"#)
        .expect_err("envelope should mismatch");
    assert!(matches!(err, ContractError::Json(_)));
}

#[test]
fn vivienda_code_rejects_non_scalar() {
    let err = Lookup::Viviendas
        .parse_options(r#"{"viviendas":[{"id":1,"codigo":null}]}"#)
        .expect_err("null code should fail");
    assert!(matches!(err, ContractError::Json(_)));
}

#[test]
fn html_error_page_is_rejected() {
    let err = Lookup::Comunas.parse_options("<html>500</html>").expect_err("html should fail");
    assert!(matches!(err, ContractError::Json(_)));
}

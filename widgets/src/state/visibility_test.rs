use super::*;

const RULE: VisibilityRule = VisibilityRule { markers: &["Constructora", "CONSTRUCTORA"] };

#[test]
fn constructora_role_shows_group_and_keeps_value() {
    let vis = RULE.evaluate(Some("Constructora"));
    assert_eq!(vis, Visibility::Shown);
    assert_eq!(vis.display(), "");
    assert!(!vis.clears_field());
}

#[test]
fn marker_may_appear_anywhere_in_text() {
    assert_eq!(RULE.evaluate(Some("Supervisor CONSTRUCTORA norte")), Visibility::Shown);
    assert_eq!(RULE.evaluate(Some("Usuario Constructora")), Visibility::Shown);
}

#[test]
fn other_roles_hide_group_and_clear_value() {
    let vis = RULE.evaluate(Some("Administrador"));
    assert_eq!(vis, Visibility::Hidden);
    assert_eq!(vis.display(), "none");
    assert!(vis.clears_field());
}

#[test]
fn match_is_case_sensitive_beyond_the_two_variants() {
    assert_eq!(RULE.evaluate(Some("constructora")), Visibility::Hidden);
    assert_eq!(RULE.evaluate(Some("ConsTRUCTORA")), Visibility::Hidden);
}

#[test]
fn no_selection_hides_group() {
    assert_eq!(RULE.evaluate(None), Visibility::Hidden);
    assert_eq!(RULE.evaluate(Some("---------")), Visibility::Hidden);
}

#[test]
fn toggled_display_flips_between_none_and_block() {
    assert_eq!(toggled_display("none"), "block");
    assert_eq!(toggled_display("block"), "none");
    assert_eq!(toggled_display(""), "none");
}

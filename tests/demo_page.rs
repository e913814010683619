//! The demo page carries the markup every widget binds to.

use std::fs;
use std::path::PathBuf;

fn demo_page() -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("harness/static/index.html");
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

#[test]
fn status_dialog_markup_is_present() {
    let page = demo_page();
    for hook in [
        r#"id="modalCambioEstado""#,
        r#"id="formCambioEstado""#,
        r#"id="confirmarCambioEstado""#,
        r#"name="csrfmiddlewaretoken""#,
        r#"id="estado-badge-42""#,
    ] {
        assert!(page.contains(hook), "missing {hook}");
    }
}

#[test]
fn tooltip_trigger_has_a_title() {
    let page = demo_page();
    let start = page.find(r#"data-bs-toggle="tooltip""#).expect("tooltip trigger");
    let tag_end = start + page[start..].find('>').expect("closing bracket");
    assert!(page[start..tag_end].contains("title="), "tooltip trigger without title");
}

#[test]
fn flash_alert_can_fade_out() {
    let page = demo_page();
    let flash = page
        .lines()
        .find(|line| line.contains("class=\"alert ") && !line.contains("alert-permanent"))
        .expect("non-permanent alert");
    assert!(flash.contains("fade show"), "Bootstrap only animates the close of `.fade.show` alerts");
}

#[test]
fn chart_canvas_is_sized_by_css() {
    let page = demo_page();
    let line = page.lines().find(|line| line.contains(r#"id="statusChart""#)).expect("chart canvas");
    assert!(line.contains("width:") && line.contains("height:"));
}

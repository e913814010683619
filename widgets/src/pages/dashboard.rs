//! Dashboard chart, tooltips, flash alerts, and the helpers page scripts call.

use std::cell::Cell;
use std::time::Duration;

use chart::consts::DATA_ATTRS;
use chart::dataset::StatusCounts;
use chart::doughnut::Viewport;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlCanvasElement, HtmlElement};

use crate::consts::{
    CHART_CANVAS_ID, DELETE_CONFIRM_DEFAULT, FLASH_ALERT_SELECTOR, FLASH_ALERT_TIMEOUT_MS, METRIC_ANIMATION_MS,
    METRIC_FRAME_MS, TOOLTIP_SELECTOR,
};
use crate::state::metrics::{CounterAnimation, parse_metric, parse_metric_targets};
use crate::state::visibility::toggled_display;
use crate::util::{bootstrap, dom};

/// Draw the status doughnut if the page has `#statusChart`, and redraw it
/// whenever a window resize changes the canvas box.
pub fn install_chart() {
    let Some(canvas) = dom::by_id::<HtmlCanvasElement>(CHART_CANVAS_ID) else {
        return;
    };
    let [cerradas, abiertas, vencidas] = DATA_ATTRS.map(|attr| canvas.get_attribute(attr));
    let counts = StatusCounts::from_attrs(cerradas.as_deref(), abiertas.as_deref(), vencidas.as_deref());
    log::debug!("status chart counts: {counts:?}");

    let drawn = Cell::new(draw(&canvas, &counts));
    let Some(window) = web_sys::window() else {
        return;
    };
    dom::listen(window.as_ref(), "resize", move |_| {
        if drawn.get() != Some(chart::render::measure(&canvas)) {
            drawn.set(draw(&canvas, &counts));
        }
    });
}

fn draw(canvas: &HtmlCanvasElement, counts: &StatusCounts) -> Option<Viewport> {
    match chart::render::draw_on(canvas, counts) {
        Ok(viewport) => Some(viewport),
        Err(e) => {
            log::error!("status chart render failed: {e:?}");
            None
        }
    }
}

/// Attach Bootstrap tooltips to every `[data-bs-toggle="tooltip"]`.
pub fn install_tooltips() {
    for el in dom::query_all(TOOLTIP_SELECTOR) {
        bootstrap::enable_tooltip(&el);
    }
}

/// Fade out non-permanent flash alerts a few seconds after load.
pub fn install_flash_alerts() {
    leptos::task::spawn_local(async {
        gloo_timers::future::sleep(Duration::from_millis(u64::from(FLASH_ALERT_TIMEOUT_MS))).await;
        for alert in dom::query_all(FLASH_ALERT_SELECTOR) {
            bootstrap::close_alert(&alert);
        }
    });
}

async fn animate(element: Element, mut anim: CounterAnimation) {
    let frame = Duration::from_millis(u64::from(METRIC_FRAME_MS));
    while let Some(value) = anim.tick() {
        element.set_text_content(Some(&value.to_string()));
        if anim.is_done() {
            break;
        }
        gloo_timers::future::sleep(frame).await;
    }
}

/// Animate `[data-metric="{key}"]` tiles to new values.
///
/// `data` is a plain object mapping metric keys to numbers.
#[wasm_bindgen(js_name = updateMetrics)]
pub fn update_metrics(data: JsValue) {
    let json = match js_sys::JSON::stringify(&data) {
        Ok(json) => String::from(json),
        Err(e) => {
            log::warn!("updateMetrics: payload not serializable: {e:?}");
            return;
        }
    };
    let targets = match parse_metric_targets(&json) {
        Ok(targets) => targets,
        Err(e) => {
            log::warn!("updateMetrics: expected an object of numbers: {e}");
            return;
        }
    };
    for (key, target) in targets {
        let Some(element) = dom::query(&format!("[data-metric=\"{key}\"]")) else {
            continue;
        };
        let start = parse_metric(&element.text_content().unwrap_or_default());
        let anim = CounterAnimation::new(start, target, METRIC_ANIMATION_MS, METRIC_FRAME_MS);
        leptos::task::spawn_local(animate(element, anim));
    }
}

/// Flip `#{element_id}` between hidden and `display: block`.
#[wasm_bindgen(js_name = toggleElement)]
pub fn toggle_element(element_id: &str) {
    let Some(el) = dom::by_id::<HtmlElement>(element_id) else {
        return;
    };
    let current = el.style().get_property_value("display").unwrap_or_default();
    dom::set_style(&el, "display", toggled_display(&current));
}

/// Ask before deleting; `message` replaces the default question.
#[wasm_bindgen(js_name = confirmarEliminacion)]
pub fn confirmar_eliminacion(message: Option<String>) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let message = message.filter(|m| !m.is_empty());
    window
        .confirm_with_message(message.as_deref().unwrap_or(DELETE_CONFIRM_DEFAULT))
        .unwrap_or(false)
}

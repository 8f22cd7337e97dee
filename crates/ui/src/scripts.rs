use deck_core::{ScrollCommand, ViewportState};
use dioxus::document::eval;

/// Element id of the vertically scrolling slide container.
pub const DECK_SCROLL_ID: &str = "deck-scroll";

fn js_string_literal(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

pub fn read_viewport_script(element_id: &str) -> String {
    let id = js_string_literal(element_id);
    format!(
        r#"
        const el = document.getElementById({id});
        if (!el) {{ return null; }}
        return {{ scrollOffset: el.scrollTop, viewportHeight: window.innerHeight }};
        "#
    )
}

pub const READ_VIEWPORT_HEIGHT_SCRIPT: &str = "return window.innerHeight;";

/// `None` when the serialized command cannot be produced.
pub fn scroll_container_script(element_id: &str, command: &ScrollCommand) -> Option<String> {
    let id = js_string_literal(element_id);
    let options = serde_json::to_string(command).ok()?;
    Some(format!(
        r#"
        const el = document.getElementById({id});
        if (!el) {{ return false; }}
        el.scrollTo({options});
        return true;
        "#
    ))
}

/// Measures the container. `None` if it is not in the document.
pub async fn read_viewport(element_id: &str) -> Option<ViewportState> {
    let script = read_viewport_script(element_id);
    eval(&script)
        .join::<Option<ViewportState>>()
        .await
        .ok()
        .flatten()
}

pub async fn read_viewport_height() -> Option<f64> {
    eval(READ_VIEWPORT_HEIGHT_SCRIPT).join::<f64>().await.ok()
}

/// Starts the scroll and returns without waiting for the animation.
///
/// Returns false if the container was missing or the script failed.
pub async fn scroll_container(element_id: &str, command: &ScrollCommand) -> bool {
    let Some(script) = scroll_container_script(element_id, command) else {
        return false;
    };
    eval(&script).join::<bool>().await.unwrap_or(false)
}

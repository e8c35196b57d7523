use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn clean_title(input: &str) -> String {
    eizou_parse::clean_title(input)
}

/// Content type and region as JSON, e.g. `{"content_type":"series","region":"IN"}`.
#[wasm_bindgen]
pub fn detect(input: &str) -> String {
    let attributes = eizou_parse::detect(input);
    serde_json::to_string(&attributes).unwrap_or_else(|_| "{}".to_string())
}

//! Console output for the rolling logger

use log::Level;
use wasm_bindgen::JsValue;

/// Sink handed to `rolling_logger::init`
pub fn sink(level: Level, line: &str) {
    let line = JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Debug => web_sys::console::log_1(&line),
        Level::Trace => web_sys::console::debug_1(&line),
    }
}

/// Log a structured value so it can be expanded in devtools
pub fn log_value(label: &str, value: &JsValue) {
    web_sys::console::log_2(&JsValue::from_str(label), value);
}

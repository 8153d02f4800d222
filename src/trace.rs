// src/trace.rs
//
// 診断用トレース
// `trace-normalize` フィーチャ有効時、ブラウザのコンソールにのみ出力する

#[cfg(all(feature = "trace-normalize", target_arch = "wasm32"))]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(&format!($($arg)*)))
    };
}

#[cfg(not(all(feature = "trace-normalize", target_arch = "wasm32")))]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub(crate) use trace_log;

// src/wasm_api.rs
//
// JavaScript 向けバインディング
// すべてのメソッドはエンジンに委譲し、エラーは Display の文字列で返す

use serde_wasm_bindgen::to_value;
use std::cmp::Ordering;
use wasm_bindgen::prelude::*;

use crate::error::RationalError;
use crate::types::json::to_json;
use crate::types::parse::{parse_integer, parse_rational};
use crate::types::Rational;

/// toObject が返すレコードのフィールド（名前, 値）
fn record_fields(value: &Rational) -> [(&'static str, String); 3] {
    [
        ("numerator", value.numerator().to_string()),
        ("denominator", value.denominator().to_string()),
        ("text", value.to_string()),
    ]
}

fn error_text(e: RationalError) -> String {
    e.to_string()
}

fn rational_from_parts(numerator: &str, denominator: &str) -> Result<Rational, RationalError> {
    let text = format!("{}/{}", numerator, denominator);
    Rational::new(
        parse_integer(&text, numerator, "numerator")?,
        parse_integer(&text, denominator, "denominator")?,
    )
}

fn ordering_to_i32(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

#[wasm_bindgen(js_name = Rational)]
#[derive(Debug, Clone, PartialEq)]
pub struct JsRational {
    inner: Rational,
}

impl From<Rational> for JsRational {
    fn from(inner: Rational) -> Self {
        JsRational { inner }
    }
}

#[wasm_bindgen(js_class = Rational)]
impl JsRational {
    #[wasm_bindgen(constructor)]
    pub fn new(numerator: &str, denominator: &str) -> Result<JsRational, String> {
        rational_from_parts(numerator, denominator)
            .map(JsRational::from)
            .map_err(error_text)
    }

    #[wasm_bindgen(js_name = fromString)]
    pub fn from_string(text: &str) -> Result<JsRational, String> {
        parse_rational(text).map(JsRational::from).map_err(error_text)
    }

    #[wasm_bindgen(getter)]
    pub fn numerator(&self) -> String {
        self.inner.numerator().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn denominator(&self) -> String {
        self.inner.denominator().to_string()
    }

    pub fn add(&self, other: &JsRational) -> JsRational {
        self.inner.add(&other.inner).into()
    }

    pub fn sub(&self, other: &JsRational) -> JsRational {
        self.inner.subtract(&other.inner).into()
    }

    pub fn mul(&self, other: &JsRational) -> JsRational {
        self.inner.multiply(&other.inner).into()
    }

    pub fn div(&self, other: &JsRational) -> Result<JsRational, String> {
        self.inner
            .divide(&other.inner)
            .map(JsRational::from)
            .map_err(error_text)
    }

    pub fn neg(&self) -> JsRational {
        self.inner.negate().into()
    }

    pub fn compare(&self, other: &JsRational) -> i32 {
        ordering_to_i32(self.inner.compare_to(&other.inner))
    }

    pub fn equals(&self, other: &JsRational) -> bool {
        self.inner == other.inner
    }

    #[wasm_bindgen(js_name = inRange)]
    pub fn in_range(&self, start: &JsRational, end: &JsRational) -> bool {
        start.inner.range_to(&end.inner).contains(&self.inner)
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_text(&self) -> String {
        self.inner.to_string()
    }

    #[wasm_bindgen(js_name = toJSON)]
    pub fn to_json_value(&self) -> Result<JsValue, JsValue> {
        to_value(&to_json(&self.inner)).map_err(JsValue::from)
    }

    #[wasm_bindgen(js_name = toObject)]
    pub fn to_object(&self) -> Result<JsValue, JsValue> {
        let obj = js_sys::Object::new();
        for (key, value) in record_fields(&self.inner) {
            js_sys::Reflect::set(&obj, &key.into(), &value.into())?;
        }
        Ok(obj.into())
    }
}

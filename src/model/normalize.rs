/******************************************************************************
   Author: Suyatrade contributors
   Date: 19/10/26
******************************************************************************/

//! Response normalizer
//!
//! The mock service labels the same figure either in Korean (`예수금`) or in
//! English (`deposit`), and sends numbers as JSON numbers or as formatted
//! strings such as `"1,234,567"` or `"12.5%"`. The functions here read a figure
//! through an ordered alias list and coerce it.
//!
//! Coercion never fails. A value that cannot be read as a number yields `0`,
//! and so does a field that is missing entirely.

use crate::error::AppError;
use crate::model::responses::ResponseBody;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Target type of a coercion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Float-then-truncate integer
    Int,
    /// Float, tolerating a trailing percent sign
    Float,
}

/// A normalized value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalized {
    /// Integer result
    Int(i64),
    /// Float result
    Float(f64),
}

impl Normalized {
    /// Integer view; floats are truncated
    #[must_use]
    pub fn as_i64(self) -> i64 {
        match self {
            Normalized::Int(v) => v,
            Normalized::Float(v) => truncate(v),
        }
    }

    /// Float view
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Normalized::Int(v) => v as f64,
            Normalized::Float(v) => v,
        }
    }
}

/// Reads the first present alias of `body` and coerces it
pub fn normalize<S: AsRef<str>>(body: &ResponseBody, aliases: &[S], coercion: Coercion) -> Normalized {
    let value = body.get_first_present(aliases);
    match coercion {
        Coercion::Int => Normalized::Int(value.map_or(0, coerce_int)),
        Coercion::Float => Normalized::Float(value.map_or(0.0, coerce_float)),
    }
}

/// Shorthand for [`normalize`] with [`Coercion::Int`]
pub fn normalize_int<S: AsRef<str>>(body: &ResponseBody, aliases: &[S]) -> i64 {
    normalize(body, aliases, Coercion::Int).as_i64()
}

/// Shorthand for [`normalize`] with [`Coercion::Float`]
pub fn normalize_float<S: AsRef<str>>(body: &ResponseBody, aliases: &[S]) -> f64 {
    normalize(body, aliases, Coercion::Float).as_f64()
}

/// Coerces a JSON value to an integer, `0` on failure
///
/// Strings lose their thousands separators and whitespace and are parsed as a
/// float before truncation, so `"1,234.9"` reads as `1234`.
#[must_use]
pub fn coerce_int(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n.as_i64().unwrap_or_else(|| n.as_f64().map_or(0, truncate)),
        Value::String(s) => parse_number(s, false).map_or(0, truncate),
        _ => 0,
    }
}

/// Coerces a JSON value to a float, `0.0` on failure
///
/// Like [`coerce_int`], and a percent sign is stripped as well.
#[must_use]
pub fn coerce_float(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_number(s, true).unwrap_or(0.0),
        _ => 0.0,
    }
}

fn parse_number(raw: &str, strip_percent: bool) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace() && !(strip_percent && *c == '%'))
        .collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn truncate(value: f64) -> i64 {
    if value.is_finite() { value.trunc() as i64 } else { 0 }
}

/// Accepted key names for each figure of the account summary, in priority order
///
/// These lists were found empirically against the mock service and are
/// configuration, not contract: [`FieldAliases::from_file`] overrides any subset.
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FieldAliases {
    /// Total deposit
    pub deposit: Vec<String>,
    /// Orderable cash
    pub orderable_cash: Vec<String>,
    /// Realized profit/loss of the day
    pub today_realized_pl: Vec<String>,
    /// Total purchase amount
    pub total_purchase: Vec<String>,
    /// Total evaluation amount
    pub total_eval: Vec<String>,
    /// Total evaluation profit/loss
    pub total_pl: Vec<String>,
    /// Total return in percent
    pub total_return_pct: Vec<String>,
}

fn owned(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| (*k).to_string()).collect()
}

impl Default for FieldAliases {
    fn default() -> Self {
        Self {
            deposit: owned(&["예수금", "deposit", "DEPOSIT", "dnca_tot_amt"]),
            orderable_cash: owned(&["주문가능금액", "orderable_cash", "ORD_PSB", "ord_psbl_cash"]),
            today_realized_pl: owned(&["당일실현손익", "today_realized_pl", "thdt_pnl_amt"]),
            total_purchase: owned(&["총매입금액", "total_purchase", "pchs_amt_smtby"]),
            total_eval: owned(&["총평가금액", "total_eval", "tot_evlu_amt"]),
            total_pl: owned(&["총평가손익금액", "total_pl", "evlu_pfls_smtby"]),
            total_return_pct: owned(&["총수익률(%)", "total_return", "evlu_erng_rt"]),
        }
    }
}

impl FieldAliases {
    /// Loads alias lists from a JSON file; lists missing from the file keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| {
            AppError::Config(format!("invalid field alias file {}: {e}", path.display()))
        })
    }
}

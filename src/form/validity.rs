use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};

use regex::Regex;

use crate::dom::dom_model::Element;

/// Compiled `pattern` attributes, keyed by source. `None` marks a pattern
/// that does not compile.
static PATTERN_CACHE: LazyLock<Mutex<HashMap<String, Option<Regex>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

// ============================================================================
// Native constraint validation (the subset form controls on these pages use)
// ============================================================================

/// Why a control fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidityError {
    ValueMissing,
    PatternMismatch,
    BadInput,
    RangeUnderflow,
    RangeOverflow,
    StepMismatch,
}

/// `checkValidity()` for a single control.
///
/// Disabled controls are barred from constraint validation and always pass.
pub fn check_validity(el: &Element) -> Result<(), ValidityError> {
    if el.disabled {
        return Ok(());
    }

    if el.is_checkbox() {
        return if el.required && !el.checked {
            Err(ValidityError::ValueMissing)
        } else {
            Ok(())
        };
    }

    if el.required && el.value.is_empty() {
        return Err(ValidityError::ValueMissing);
    }

    if el.value.is_empty() || !el.tag_is("input") {
        return Ok(());
    }

    match el.input_type() {
        "number" => check_number(el),
        _ => check_pattern(el),
    }
}

pub fn is_valid(el: &Element) -> bool {
    check_validity(el).is_ok()
}

fn check_pattern(el: &Element) -> Result<(), ValidityError> {
    let Some(pattern) = el.pattern.as_deref() else {
        return Ok(());
    };

    // Patterns that fail to compile are ignored.
    match compiled_pattern(pattern) {
        Some(re) if !re.is_match(&el.value) => Err(ValidityError::PatternMismatch),
        _ => Ok(()),
    }
}

/// The pattern anchored to match the whole value, compiled once per
/// distinct source.
fn compiled_pattern(pattern: &str) -> Option<Regex> {
    let compile = || Regex::new(&format!("^(?:{})$", pattern)).ok();

    let mut cache = match PATTERN_CACHE.lock() {
        Ok(cache) => cache,
        Err(_) => return compile(),
    };
    cache
        .entry(pattern.to_string())
        .or_insert_with(compile)
        .clone()
}

fn check_number(el: &Element) -> Result<(), ValidityError> {
    let value: f64 = el
        .value
        .trim()
        .parse()
        .map_err(|_| ValidityError::BadInput)?;
    if !value.is_finite() {
        return Err(ValidityError::BadInput);
    }

    let min = parse_bound(el.min.as_deref());
    let max = parse_bound(el.max.as_deref());

    if let Some(min) = min {
        if value < min {
            return Err(ValidityError::RangeUnderflow);
        }
    }
    if let Some(max) = max {
        if value > max {
            return Err(ValidityError::RangeOverflow);
        }
    }

    let step = match el.step.as_deref() {
        Some(s) if s.eq_ignore_ascii_case("any") => None,
        Some(s) => parse_bound(Some(s)).filter(|v| *v > 0.0).or(Some(1.0)),
        None => Some(1.0),
    };

    if let Some(step) = step {
        let base = min.unwrap_or(0.0);
        let steps = (value - base) / step;
        if (steps - steps.round()).abs() > 1e-9 {
            return Err(ValidityError::StepMismatch);
        }
    }

    Ok(())
}

fn parse_bound(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

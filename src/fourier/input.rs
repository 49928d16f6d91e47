//! Text-field parsing for the Fourier form.
//!
//! Parsing happens in one place so evaluation never sees raw text: the form
//! is parsed into numbers, the numbers are validated into a [`FourierSpec`],
//! and only then is the series evaluated.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::{EngineError, EngineResult},
    fourier::series::{FourierSpec, Fundamental},
};

/// Which meaning the fundamental field carries.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FundamentalKind {
    #[default]
    W0,
    Period,
}

impl FundamentalKind {
    pub fn label(self) -> &'static str {
        match self {
            FundamentalKind::W0 => "w0",
            FundamentalKind::Period => "T",
        }
    }

    /// Hint shown in the empty value field.
    pub fn placeholder(self) -> String {
        format!("Enter value for {}", self.label())
    }

    pub fn toggled(self) -> Self {
        match self {
            FundamentalKind::W0 => FundamentalKind::Period,
            FundamentalKind::Period => FundamentalKind::W0,
        }
    }

    pub fn with_value(self, value: f64) -> Fundamental {
        match self {
            FundamentalKind::W0 => Fundamental::AngularFrequency(value),
            FundamentalKind::Period => Fundamental::Period(value),
        }
    }
}

/// Raw contents of the Fourier input fields.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FourierForm {
    /// Single number
    pub a0: String,
    /// Comma-separated cosine coefficients
    pub a_k: String,
    /// Comma-separated sine coefficients
    pub b_k: String,
    pub parameter: FundamentalKind,
    pub parameter_value: String,
}

impl FourierForm {
    pub fn new(
        a0: impl Into<String>,
        a_k: impl Into<String>,
        b_k: impl Into<String>,
        parameter: FundamentalKind,
        parameter_value: impl Into<String>,
    ) -> Self {
        Self {
            a0: a0.into(),
            a_k: a_k.into(),
            b_k: b_k.into(),
            parameter,
            parameter_value: parameter_value.into(),
        }
    }

    /// Parse every field and validate the result.
    ///
    /// Fields are checked in form order (a0, a_k, b_k, fundamental) and the
    /// first problem is reported.
    pub fn parse(&self) -> EngineResult<FourierSpec> {
        let a0 = parse_number("a0", &self.a0)?;
        let a_k = parse_list("a_k", &self.a_k)?;
        let b_k = parse_list("b_k", &self.b_k)?;
        let value = parse_number(self.parameter.label(), &self.parameter_value)?;

        FourierSpec::new(a0, a_k, b_k, self.parameter.with_value(value))
    }
}

/// Parse a single finite number, ignoring surrounding whitespace.
pub fn parse_number(field: &str, text: &str) -> EngineResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(EngineError::malformed(field, "value is missing"));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| EngineError::malformed(field, format!("'{trimmed}' is not a number")))?;
    if !value.is_finite() {
        return Err(EngineError::malformed(
            field,
            format!("'{trimmed}' is not a finite number"),
        ));
    }
    Ok(value)
}

/// Parse a comma-separated list of finite numbers.
///
/// Every item must be present: `"1,,3"` and a trailing comma are rejected.
pub fn parse_list(field: &str, text: &str) -> EngineResult<Vec<f64>> {
    if text.trim().is_empty() {
        return Err(EngineError::malformed(field, "value is missing"));
    }

    text.split(',')
        .enumerate()
        .map(|(i, item)| {
            let item = item.trim();
            if item.is_empty() {
                return Err(EngineError::malformed(
                    field,
                    format!("item {} is empty", i + 1),
                ));
            }
            match item.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(v),
                _ => Err(EngineError::malformed(
                    field,
                    format!("item {} ('{item}') is not a finite number", i + 1),
                )),
            }
        })
        .collect()
}

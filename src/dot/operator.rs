//! Comparison operators for `where` filters

use super::coerce;
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;

/// Comparison operator accepted by [`DotObject::where_cmp`](super::DotObject::where_cmp)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operator {
    /// `==`: matches the numeric or textual reading of the target
    LooseEq,
    /// `===`: structural equality
    #[default]
    StrictEq,
    /// `!=` or `<>`: neither the numeric nor the textual reading matches
    LooseNe,
    /// `!==`: structural inequality
    StrictNe,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl Operator {
    /// Operator symbol
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::LooseEq => "==",
            Operator::StrictEq => "===",
            Operator::LooseNe => "!=",
            Operator::StrictNe => "!==",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
        }
    }

    /// Apply the operator to a resolved value (or its absence) and a target
    pub fn evaluate(&self, value: Option<&Value>, target: &Value) -> bool {
        match self {
            Operator::LooseEq => coerce::loose_eq(value, target),
            Operator::StrictEq => value == Some(target),
            Operator::LooseNe => !coerce::loose_eq(value, target),
            Operator::StrictNe => value != Some(target),
            Operator::Lt => matches!(coerce::compare(value, target), Some(Ordering::Less)),
            Operator::Le => matches!(
                coerce::compare(value, target),
                Some(Ordering::Less | Ordering::Equal)
            ),
            Operator::Gt => matches!(coerce::compare(value, target), Some(Ordering::Greater)),
            Operator::Ge => matches!(
                coerce::compare(value, target),
                Some(Ordering::Greater | Ordering::Equal)
            ),
        }
    }
}

impl From<&str> for Operator {
    /// Unknown symbols fall back to strict equality.
    fn from(symbol: &str) -> Self {
        match symbol {
            "==" => Operator::LooseEq,
            "===" => Operator::StrictEq,
            "!=" | "<>" => Operator::LooseNe,
            "!==" => Operator::StrictNe,
            "<" => Operator::Lt,
            "<=" => Operator::Le,
            ">" => Operator::Gt,
            ">=" => Operator::Ge,
            other => {
                log::debug!("Unknown operator '{}', using strict equality", other);
                Operator::StrictEq
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

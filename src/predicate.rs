// Predicate - compiled, executable representation of a category label
//
// A Predicate is pure data: compiling a label binds field + parameters
// here, and evaluate() is the only place that looks at a record.
// Evaluation is total - missing numeric fields and foreign-domain fields
// simply evaluate false, never panic.

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::entities::{FlagField, GridEntity, NumericField, TextField};

// ============================================================================
// COMPARISON OPERATORS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CmpOp {
    Eq,
    Lt,
    Gt,
    Le,
    Ge,
}

impl CmpOp {
    pub fn apply(self, lhs: f64, rhs: f64) -> bool {
        match self {
            CmpOp::Eq => lhs == rhs,
            CmpOp::Lt => lhs < rhs,
            CmpOp::Gt => lhs > rhs,
            CmpOp::Le => lhs <= rhs,
            CmpOp::Ge => lhs >= rhs,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CmpOp::Eq => "=",
            CmpOp::Lt => "<",
            CmpOp::Gt => ">",
            CmpOp::Le => "<=",
            CmpOp::Ge => ">=",
        }
    }
}

// ============================================================================
// YEAR BOUNDS
// ============================================================================

/// Upper bound of a served-from range. "present" stays symbolic and is
/// resolved when the predicate is evaluated, not when it is compiled, so
/// a grid cached across a year boundary stays fresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YearBound {
    Year(i64),
    Present,
}

impl YearBound {
    fn resolve(self) -> i64 {
        match self {
            YearBound::Year(y) => y,
            // Matches the original game: "present" means current year + 1.
            YearBound::Present => i64::from(Local::now().year()) + 1,
        }
    }
}

// ============================================================================
// PREDICATE
// ============================================================================

/// Tagged union of every matching rule a label can compile to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    /// Exact match against the precomputed lowercase form.
    Equals(TextField, String),
    /// Case-insensitive substring containment.
    Contains(TextField, String),
    /// Single comparison against an optional numeric field.
    NumericCompare(NumericField, CmpOp, f64),
    /// Inclusive range, order-independent.
    NumericRange(NumericField, f64, f64),
    /// Inclusive start-year range whose upper bound may be "present".
    YearRange(NumericField, i64, YearBound),
    /// Inclusive-first-letter range, case-insensitive.
    LetterRange(TextField, char, char),
    /// Stored flag XOR the negated bit.
    BooleanFlag(FlagField, bool),
    /// The no-match fallback: unsatisfiable, never an error.
    Never,
}

impl Predicate {
    /// Build an inclusive numeric range regardless of bound order.
    pub fn range(field: NumericField, a: f64, b: f64) -> Predicate {
        Predicate::NumericRange(field, a.min(b), a.max(b))
    }
}

// ============================================================================
// EVALUATOR
// ============================================================================

/// Execute a compiled predicate against one record. Pure and total.
pub fn evaluate<E: GridEntity>(predicate: &Predicate, record: &E) -> bool {
    match predicate {
        Predicate::Equals(field, value) => {
            record.text(*field).is_some_and(|t| t == value)
        }
        Predicate::Contains(field, value) => {
            record.text(*field).is_some_and(|t| t.contains(value.as_str()))
        }
        Predicate::NumericCompare(field, op, value) => {
            record.number(*field).is_some_and(|n| op.apply(n, *value))
        }
        Predicate::NumericRange(field, a, b) => {
            let (lo, hi) = (a.min(*b), a.max(*b));
            record.number(*field).is_some_and(|n| n >= lo && n <= hi)
        }
        Predicate::YearRange(field, lo, hi) => {
            let hi = hi.resolve() as f64;
            let lo = *lo as f64;
            record.number(*field).is_some_and(|n| n >= lo && n <= hi)
        }
        Predicate::LetterRange(field, a, b) => {
            let lo = a.to_ascii_uppercase().min(b.to_ascii_uppercase());
            let hi = a.to_ascii_uppercase().max(b.to_ascii_uppercase());
            record
                .first_letter(*field)
                .is_some_and(|c| c >= lo && c <= hi)
        }
        Predicate::BooleanFlag(field, negated) => record.flag(*field) ^ negated,
        Predicate::Never => false,
    }
}

// ============================================================================
// TESTS
// ============================================================================

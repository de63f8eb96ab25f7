use maybe::{absent, present, Maybe};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::expr_parser::Expression;

/// Combinators applied to every quotient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    /// Used by `unwrap_or` when the quotient is absent
    pub fallback: i64,
    /// Quotients below this are filtered out
    pub min: Maybe<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRow {
    pub line: usize,
    pub expression: String,
    /// `divide(x, y)` before filtering
    pub quotient: Maybe<i64>,
    /// Quotient after the `min` filter
    pub kept: Maybe<i64>,
    pub value: i64,
    pub doubled: Maybe<i64>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub rows: Vec<EvaluationRow>,
    pub present: usize,
    pub absent: usize,
    pub filtered_out: usize,
}

/// `x / y`, absent when `y` is zero or the quotient overflows.
pub fn divide(x: i64, y: i64) -> Maybe<i64> {
    if y == 0 {
        absent()
    } else {
        x.checked_div(y).into()
    }
}

fn double(q: i64) -> Maybe<i64> {
    q.checked_mul(2).into()
}

/// Evaluate every expression through `pipeline`
pub fn evaluate(expressions: &[Expression], pipeline: &Pipeline) -> EvaluationResult {
    let mut result = EvaluationResult::default();

    for expr in expressions {
        let quotient = divide(expr.numerator, expr.denominator);
        let kept = match pipeline.min {
            Maybe::Present(min) => quotient.filter(|q| *q >= min),
            Maybe::Absent => quotient,
        };

        if kept.is_present() {
            result.present += 1;
        } else {
            result.absent += 1;
        }
        if quotient.is_present() && kept.is_absent() {
            result.filtered_out += 1;
        }

        let row = EvaluationRow {
            line: expr.line,
            expression: format!("{} / {}", expr.numerator, expr.denominator),
            quotient,
            kept,
            value: kept.unwrap_or(pipeline.fallback),
            doubled: kept.and_then(double),
        };
        debug!(line = row.line, expression = %row.expression, value = row.value, "evaluated");
        result.rows.push(row);
    }

    info!(
        rows = result.rows.len(),
        present = result.present,
        absent = result.absent,
        filtered_out = result.filtered_out,
        "evaluation finished"
    );
    result
}

/// Generate a plain-text summary report of the evaluation
pub fn generate_summary_report(result: &EvaluationResult, pipeline: &Pipeline) -> String {
    let mut report = String::new();

    report.push_str("Maybe Evaluation Summary Report\n");
    report.push_str("===============================\n\n");
    report.push_str(&format!("Fallback: {}\n", pipeline.fallback));
    report.push_str(&format!(
        "Minimum: {}\n\n",
        pipeline.min.map_or_else(|| "none".to_string(), |min| min.to_string())
    ));

    for row in &result.rows {
        let quotient = row.quotient.map_or_else(|| "absent".to_string(), |q| q.to_string());
        report.push_str(&format!("  line {:>3}: {} = {} -> {}\n", row.line, row.expression, quotient, row.value));
    }

    report.push_str(&format!(
        "\nPresent: {}  Absent: {}  Filtered out: {}\n",
        result.present, result.absent, result.filtered_out
    ));
    report
}

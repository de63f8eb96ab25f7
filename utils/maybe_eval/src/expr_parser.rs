use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expression {
    /// 1-based line number in the input file
    pub line: usize,
    pub numerator: i64,
    pub denominator: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    pub line: usize,
    pub text: String,
    pub reason: String,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ParsedInput {
    pub expressions: Vec<Expression>,
    pub skipped: Vec<SkippedLine>,
}

/// Parse the input file into division expressions, one `x / y` per line.
///
/// Blank lines and `#` comments are ignored. Lines that don't match, or whose
/// operands don't fit an `i64`, are collected in `skipped`.
pub fn parse_expressions(content: &str) -> Result<ParsedInput> {
    // Pattern for the format: 10 / 2, -7/3, +4 / -1
    let expression_re = Regex::new(r"^\s*([+-]?\d+)\s*/\s*([+-]?\d+)\s*$")?;

    let mut parsed = ParsedInput::default();

    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        let text = strip_comment(raw);
        if text.is_empty() {
            continue;
        }

        let Some(captures) = expression_re.captures(text) else {
            warn!(line, text, "line is not a division expression");
            parsed.skipped.push(SkippedLine {
                line,
                text: text.to_string(),
                reason: "expected `x / y`".to_string(),
            });
            continue;
        };

        match (captures[1].parse::<i64>(), captures[2].parse::<i64>()) {
            (Ok(numerator), Ok(denominator)) => {
                debug!(line, numerator, denominator, "parsed expression");
                parsed.expressions.push(Expression { line, numerator, denominator });
            }
            (Err(e), _) | (_, Err(e)) => {
                warn!(line, text, error = %e, "operand out of range");
                parsed.skipped.push(SkippedLine {
                    line,
                    text: text.to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(parsed)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => line[..pos].trim(),
        None => line.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_expressions_and_skips_noise() {
        let input = "\
# header comment
10 / 2
  -7/3   # trailing comment

not an expression
99999999999999999999 / 1
+4 / -1
";
        let parsed = parse_expressions(input).expect("parse input");
        assert_eq!(
            parsed.expressions,
            vec![
                Expression { line: 2, numerator: 10, denominator: 2 },
                Expression { line: 3, numerator: -7, denominator: 3 },
                Expression { line: 7, numerator: 4, denominator: -1 },
            ]
        );
        let skipped: Vec<usize> = parsed.skipped.iter().map(|s| s.line).collect();
        assert_eq!(skipped, vec![5, 6]);
        assert_eq!(parsed.skipped[0].reason, "expected `x / y`");
    }

    #[test]
    fn empty_input_yields_nothing() {
        let parsed = parse_expressions("").expect("parse empty input");
        assert!(parsed.expressions.is_empty());
        assert!(parsed.skipped.is_empty());
    }
}

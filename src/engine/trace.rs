//! Step records produced while a conversion runs.
//!
//! Steps carry the raw numbers of each arithmetic operation so the same trace
//! can be rendered as a table or serialised for inspection.

use serde::Serialize;

/// One arithmetic operation performed during a conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// Horner step while parsing source digits: `result = accumulated * base + digit_value`.
    Accumulate {
        accumulated: u128,
        base: u32,
        digit: char,
        digit_value: u32,
        result: u128,
    },
    /// Division with remainder while emitting target digits.
    Divide {
        dividend: u128,
        base: u32,
        remainder: u32,
        quotient: u128,
        digit: char,
    },
    /// Multiplication of a fractional remainder by the target base.
    Multiply {
        remainder: f64,
        base: u32,
        product: f64,
        digit_value: u32,
        digit: char,
    },
}

/// Discriminant of [`Step`], used to group rows into tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Accumulate,
    Divide,
    Multiply,
}

impl Step {
    pub fn kind(&self) -> StepKind {
        match self {
            Step::Accumulate { .. } => StepKind::Accumulate,
            Step::Divide { .. } => StepKind::Divide,
            Step::Multiply { .. } => StepKind::Multiply,
        }
    }

    /// Digit symbol this step contributed or produced.
    pub fn digit(&self) -> char {
        match self {
            Step::Accumulate { digit, .. }
            | Step::Divide { digit, .. }
            | Step::Multiply { digit, .. } => *digit,
        }
    }
}

/// Ordered sequence of steps for a single conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Digits in the order the steps produced them.
    pub fn digits(&self) -> String {
        self.steps.iter().map(Step::digit).collect()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Digit string produced by a converter, with its trace when one was requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub digits: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Trace>,
    /// Set when a digit cap cut the expansion short of an exact result.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub truncated: bool,
}

impl Conversion {
    pub(crate) fn new(digits: String, trace: Option<Trace>) -> Self {
        Self {
            digits,
            trace,
            truncated: false,
        }
    }

    pub(crate) fn truncated(mut self, truncated: bool) -> Self {
        self.truncated = truncated;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn divide(dividend: u128, remainder: u32, digit: char) -> Step {
        Step::Divide {
            dividend,
            base: 2,
            remainder,
            quotient: dividend / 2,
            digit,
        }
    }

    #[test]
    fn test_trace_digits_in_production_order() {
        let mut trace = Trace::new();
        trace.push(divide(6, 0, '0'));
        trace.push(divide(3, 1, '1'));
        trace.push(divide(1, 1, '1'));
        assert_eq!(trace.len(), 3);
        assert_eq!(trace.digits(), "011");
    }

    #[test]
    fn test_step_serialises_with_kind_tag() {
        let json = serde_json::to_value(divide(5, 1, '1')).unwrap();
        assert_eq!(json["kind"], "divide");
        assert_eq!(json["dividend"], 5);
        assert_eq!(json["quotient"], 2);
        assert_eq!(json["digit"], "1");
    }

    #[test]
    fn test_conversion_omits_missing_trace() {
        let conversion = Conversion::new("101".to_string(), None);
        let json = serde_json::to_value(&conversion).unwrap();
        assert_eq!(json["digits"], "101");
        assert!(json.get("trace").is_none());
        assert!(json.get("truncated").is_none());
    }

    #[test]
    fn test_conversion_reports_truncation() {
        let conversion = Conversion::new("0001".to_string(), None).truncated(true);
        let json = serde_json::to_value(&conversion).unwrap();
        assert_eq!(json["truncated"], true);
    }
}

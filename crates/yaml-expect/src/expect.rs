//! The fluent assertion chain and its finishers.
//!
//! The chain carries the host capabilities the engine rides on: per-chain
//! flags (`not`, `deep`), default plain-value behavior for every finisher,
//! and the node-mode slot the engine consults. Each finisher asks the
//! engine for a verdict first; `None` means "not applicable here" and the
//! host default runs instead, so assertions over plain values behave
//! exactly as if the node layer did not exist.

use serde_json::Value;
use yaml_tree::NodeKind;

use crate::engine;
use crate::error::{AssertionError, Result};
use crate::mode::NodeMode;
use crate::subject::{Expected, Subject};

/// Start an assertion chain on `subject`.
///
/// Subjects convert from borrowed nodes of any kind and from plain values:
///
/// ```rust
/// use yaml_expect::expect;
/// use yaml_tree::Scalar;
///
/// expect(&Scalar::new(11)).value().eq(11);
/// expect("plain").eq("plain");
/// ```
pub fn expect<'a>(subject: impl Into<Subject<'a>>) -> Assertion<'a> {
    Assertion::new(subject.into())
}

/// A single-use assertion chain.
///
/// Builder methods ([`value`](Assertion::value), [`deep`](Assertion::deep),
/// [`not`](Assertion::not)) set flags and return the chain; finisher
/// methods consume it and produce the verdict. Finishers panic with the
/// failure report; their `try_`-prefixed twins return it as a value.
#[derive(Debug, Clone)]
pub struct Assertion<'a> {
    subject: Subject<'a>,
    mode: NodeMode,
    negated: bool,
    deep: bool,
}

impl<'a> Assertion<'a> {
    fn new(subject: Subject<'a>) -> Self {
        Self {
            subject,
            mode: NodeMode::default(),
            negated: false,
            deep: false,
        }
    }

    /// Negate the chain: every finisher's verdict flips, and failures
    /// report the negated message template.
    pub fn not(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// Switch `eq` to deep (structural) comparison. Null and undefined
    /// checks have no deep variant and ignore the flag.
    pub fn deep(mut self) -> Self {
        self.deep = true;
        self
    }

    /// Enter value mode: later finishers compare the node's logical value
    /// rather than the node object. A no-op for plain subjects — the chain
    /// then behaves as if `value` was never called.
    pub fn value(mut self) -> Self {
        self.mode.enter_value(&self.subject);
        self
    }

    /// The per-chain mode state, as recorded so far.
    pub fn mode(&self) -> NodeMode {
        self.mode
    }

    /// Assert equality. See [`try_eq`](Assertion::try_eq) for semantics.
    #[track_caller]
    pub fn eq<'e>(self, expected: impl Into<Expected<'e>>) {
        if let Err(err) = self.try_eq(expected) {
            panic!("{err}");
        }
    }

    /// Alias for [`eq`](Assertion::eq).
    #[track_caller]
    pub fn equal<'e>(self, expected: impl Into<Expected<'e>>) {
        if let Err(err) = self.try_eq(expected) {
            panic!("{err}");
        }
    }

    /// Equality as a result.
    ///
    /// In value mode the node-aware engine decides: shallow equality is
    /// instance identity for containers and strict equality for unwrapped
    /// leaves; with [`deep`](Assertion::deep) both sides are compared by
    /// their serialized plain forms. Outside value mode the host default
    /// applies: strict equality for plain values, instance identity
    /// (structural when deep) for nodes.
    pub fn try_eq<'e>(self, expected: impl Into<Expected<'e>>) -> Result<()> {
        let expected = expected.into();
        let passed = match engine::value_eq(&self.mode, &self.subject, &expected, self.deep) {
            Some(verdict) => verdict,
            None => self.base_eq(&expected),
        };
        let check = if self.deep { "deeply equal" } else { "equal" };
        let actual = self.describe_subject();
        self.finish(passed, check, describe_expected(&expected), actual)
    }

    /// Assert the unwrapped value is exactly null.
    #[track_caller]
    pub fn is_null(self) {
        if let Err(err) = self.try_null() {
            panic!("{err}");
        }
    }

    /// Null check as a result. In value mode, true iff the unwrapped
    /// comparable is null — containers are never null, and an unset slot
    /// is not null. Outside value mode only a plain null subject passes.
    pub fn try_null(self) -> Result<()> {
        let passed = match engine::value_null(&self.mode, &self.subject) {
            Some(verdict) => verdict,
            None => matches!(&self.subject, Subject::Plain(Value::Null)),
        };
        let actual = self.describe_subject();
        self.finish(passed, "be", "null".to_string(), actual)
    }

    /// Assert the unwrapped value slot is unset.
    #[track_caller]
    pub fn is_undefined(self) {
        if let Err(err) = self.try_undefined() {
            panic!("{err}");
        }
    }

    /// Undefined check as a result. In value mode, true iff the unwrapped
    /// comparable is the unset state. Plain subjects are never undefined —
    /// the plain representation has no unset state.
    pub fn try_undefined(self) -> Result<()> {
        let passed = engine::value_undefined(&self.mode, &self.subject).unwrap_or(false);
        let actual = self.describe_subject();
        self.finish(passed, "be", "undefined".to_string(), actual)
    }

    /// Assert the subject is a node of exactly `kind`.
    #[track_caller]
    pub fn is_kind(self, kind: NodeKind) {
        if let Err(err) = self.try_is_kind(kind) {
            panic!("{err}");
        }
    }

    /// Kind check as a result. Plain subjects fail for every kind.
    pub fn try_is_kind(self, kind: NodeKind) -> Result<()> {
        let passed = self.subject.classify() == Some(kind);
        let actual = self.describe_subject();
        self.finish(passed, "be", format!("a {kind:?} node"), actual)
    }

    /// Assert a container's entries include the expected value.
    #[track_caller]
    pub fn contains_value<'e>(self, expected: impl Into<Expected<'e>>) {
        if let Err(err) = self.try_contains_value(expected) {
            panic!("{err}");
        }
    }

    /// Containment as a result. In value mode, true iff some map entry or
    /// sequence item unwraps equal to the expected comparable. Outside
    /// value mode, or for non-container subjects, the check fails.
    pub fn try_contains_value<'e>(self, expected: impl Into<Expected<'e>>) -> Result<()> {
        let expected = expected.into();
        let passed =
            engine::value_contains(&self.mode, &self.subject, &expected).unwrap_or(false);
        let actual = self.describe_subject();
        self.finish(passed, "contain value", describe_expected(&expected), actual)
    }

    /// Host default equality, used when the engine is not applicable.
    fn base_eq(&self, expected: &Expected<'_>) -> bool {
        match (&self.subject, expected) {
            (Subject::Plain(a), Expected::Plain(b)) => a == b,
            (Subject::Node(a), Expected::Node(b)) => {
                if self.deep {
                    a.to_plain() == b.to_plain()
                } else {
                    a.same_instance(*b)
                }
            }
            // A node never equals a plain value without value mode.
            _ => false,
        }
    }

    /// Render the subject for failure messages: the unwrapped comparable
    /// when in value mode, the serialized form otherwise.
    fn describe_subject(&self) -> String {
        match &self.subject {
            Subject::Node(node) if self.mode.is_value() => engine::describe(engine::unwrap(*node)),
            Subject::Node(node) => node.to_plain().to_string(),
            Subject::Plain(value) => value.to_string(),
        }
    }

    /// Resolve the verdict against the negation flag and build the failure
    /// report from the positive or negated message template.
    fn finish(&self, passed: bool, check: &str, expected: String, actual: String) -> Result<()> {
        if passed != self.negated {
            return Ok(());
        }
        let message = if self.negated {
            format!("expected {actual} to not {check} {expected}")
        } else {
            format!("expected {actual} to {check} {expected}")
        };
        Err(AssertionError {
            message,
            expected,
            actual,
        })
    }
}

fn describe_expected(expected: &Expected<'_>) -> String {
    match expected {
        Expected::Node(node) => engine::describe(engine::unwrap(*node)),
        Expected::Plain(value) => value.to_string(),
    }
}

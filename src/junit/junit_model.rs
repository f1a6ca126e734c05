// ============================================================================
// Report tree — AllTests > Suites > Groups > Cases
// ============================================================================

/// Root of a Bluepill JUnit report (`<testsuites>`).
///
/// Only the nesting Bluepill produces is kept: suites directly under the
/// root, groups (XCTest classes) inside each suite, cases inside each group.
/// Flat `<testcase>` entries at the upper levels are not part of the tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub name: Option<String>,
    pub counts: Counts,
    pub suites: Vec<Suite>,
}

/// A test bundle, e.g. `UITests.xctest`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Suite {
    pub name: Option<String>,
    pub counts: Counts,
    pub groups: Vec<Group>,
}

/// A test class inside a bundle, e.g. `MarketplaceTests`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    pub name: Option<String>,
    pub counts: Counts,
    pub cases: Vec<Case>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Case {
    pub classname: String,
    pub name: String,
    pub time: Option<String>,

    /// First `<failure>`, `<error>` or `<skipped>` child, in document order.
    pub result: Option<CaseResult>,

    pub system_out: Option<String>,
    pub system_err: Option<String>,
}

impl Case {
    /// Whether this case failed or errored (skipped and passing cases don't count).
    pub fn is_bad(&self) -> bool {
        matches!(
            self.result.as_ref().map(|r| r.kind),
            Some(ResultKind::Failure | ResultKind::Error)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Failure,
    Error,
    Skipped,
}

impl ResultKind {
    pub fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"failure" => Some(ResultKind::Failure),
            b"error" => Some(ResultKind::Error),
            b"skipped" => Some(ResultKind::Skipped),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResultKind::Failure => "Failure",
            ResultKind::Error => "Error",
            ResultKind::Skipped => "Skipped",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseResult {
    pub kind: ResultKind,
    pub message: Option<String>,

    /// The `type` attribute, e.g. "Failure" or "Error".
    pub error_type: Option<String>,

    /// Element text. For XCTest failures this holds `File.swift:122`.
    pub text: Option<String>,
}

// ============================================================================
// Counts
// ============================================================================

/// `tests`/`errors`/`failures` attributes of a container element.
///
/// A missing attribute is `None` ("unknown") rather than zero, so a level
/// without counts is never skipped during extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub tests: Option<u64>,
    pub errors: Option<u64>,
    pub failures: Option<u64>,
}

impl Counts {
    pub fn new(tests: u64, errors: u64, failures: u64) -> Self {
        Self {
            tests: Some(tests),
            errors: Some(errors),
            failures: Some(failures),
        }
    }

    /// True only when both errors and failures are known to be zero.
    pub fn is_clean(&self) -> bool {
        self.errors == Some(0) && self.failures == Some(0)
    }
}

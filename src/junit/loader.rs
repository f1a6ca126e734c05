use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use tracing::{debug, trace};

use crate::junit::error::ReportError;
use crate::junit::junit_model::{Case, CaseResult, Counts, Group, Report, ResultKind, Suite};

static TESTSUITES_TAG: &str = "testsuites";
static TESTSUITE_TAG: &str = "testsuite";
static TESTCASE_TAG: &str = "testcase";
static SYSTEM_OUT_TAG: &str = "system-out";
static SYSTEM_ERR_TAG: &str = "system-err";

// ============================================================================
// Entry points
// ============================================================================

/// Load a Bluepill JUnit report from disk.
pub fn load_report(path: impl AsRef<Path>) -> Result<Report, ReportError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading report");

    let content = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_report(&content)
}

/// Parse a Bluepill JUnit report from an XML string.
pub fn parse_report(xml: &str) -> Result<Report, ReportError> {
    let root = read_tree(xml)?;
    if root.tag != TESTSUITES_TAG {
        return Err(ReportError::UnexpectedRoot(root.tag));
    }

    let report = Report {
        name: root.attr("name").map(str::to_string),
        counts: root.counts()?,
        suites: root
            .children_named(TESTSUITE_TAG)
            .map(build_suite)
            .collect::<Result<_, _>>()?,
    };

    debug!(
        suites = report.suites.len(),
        errors = ?report.counts.errors,
        failures = ?report.counts.failures,
        "parsed report"
    );
    Ok(report)
}

// ============================================================================
// Typed tree builders
// ============================================================================

// Suites only look at nested <testsuite> children; flat <testcase> entries
// under a suite are not part of the Bluepill layout.
fn build_suite(node: &Node) -> Result<Suite, ReportError> {
    Ok(Suite {
        name: node.attr("name").map(str::to_string),
        counts: node.counts()?,
        groups: node
            .children_named(TESTSUITE_TAG)
            .map(build_group)
            .collect::<Result<_, _>>()?,
    })
}

fn build_group(node: &Node) -> Result<Group, ReportError> {
    Ok(Group {
        name: node.attr("name").map(str::to_string),
        counts: node.counts()?,
        cases: node.children_named(TESTCASE_TAG).map(build_case).collect(),
    })
}

fn build_case(node: &Node) -> Case {
    let result = node.children.iter().find_map(|child| {
        ResultKind::from_tag(child.tag.as_bytes()).map(|kind| CaseResult {
            kind,
            message: child.attr("message").map(str::to_string),
            error_type: child.attr("type").map(str::to_string),
            text: child.text(),
        })
    });

    let case = Case {
        classname: node.attr("classname").unwrap_or_default().to_string(),
        name: node.attr("name").unwrap_or_default().to_string(),
        time: node.attr("time").map(str::to_string),
        result,
        system_out: node.children_named(SYSTEM_OUT_TAG).next().and_then(Node::text),
        system_err: node.children_named(SYSTEM_ERR_TAG).next().and_then(Node::text),
    };
    trace!(classname = %case.classname, name = %case.name, bad = case.is_bad(), "case");
    case
}

// ============================================================================
// Generic element tree
// ============================================================================

#[derive(Debug, Default)]
struct Node {
    tag: String,
    attrs: Vec<(String, String)>,
    text: String,
    children: Vec<Node>,
}

impl Node {
    fn from_start(start: &BytesStart<'_>) -> Result<Self, ReportError> {
        let tag = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut attrs = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            attrs.push((key, value));
        }
        Ok(Self {
            tag,
            attrs,
            ..Self::default()
        })
    }

    fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.children.iter().filter(move |child| child.tag == tag)
    }

    fn text(&self) -> Option<String> {
        if self.text.is_empty() {
            None
        } else {
            Some(self.text.clone())
        }
    }

    fn counts(&self) -> Result<Counts, ReportError> {
        Ok(Counts {
            tests: self.count("tests")?,
            errors: self.count("errors")?,
            failures: self.count("failures")?,
        })
    }

    fn count(&self, attribute: &str) -> Result<Option<u64>, ReportError> {
        match self.attr(attribute) {
            None => Ok(None),
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map(Some)
                .map_err(|_| ReportError::InvalidCount {
                    element: self.tag.clone(),
                    attribute: attribute.to_string(),
                    value: value.to_string(),
                }),
        }
    }
}

/// Read the whole document into a `Node` tree and return its root element.
fn read_tree(xml: &str) -> Result<Node, ReportError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Node> = Vec::new();
    let mut root: Option<Node> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(Node::from_start(&start)?),
            Event::Empty(start) => {
                let node = Node::from_start(&start)?;
                attach(node, &mut stack, &mut root);
            }
            Event::End(_) => {
                // quick-xml checks that end names match, so the stack can't be empty here.
                if let Some(node) = stack.pop() {
                    attach(node, &mut stack, &mut root);
                }
            }
            Event::Text(text) => {
                if let Some(top) = leading_text_target(&mut stack) {
                    top.text.push_str(&text.unescape()?);
                }
            }
            Event::CData(cdata) => {
                if let Some(top) = leading_text_target(&mut stack) {
                    top.text.push_str(&String::from_utf8_lossy(&cdata.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(ReportError::Unclosed(open.tag));
    }
    root.ok_or(ReportError::Empty)
}

/// Element text only covers what comes before the first child element.
fn leading_text_target(stack: &mut [Node]) -> Option<&mut Node> {
    stack.last_mut().filter(|top| top.children.is_empty())
}

fn attach(node: Node, stack: &mut [Node], root: &mut Option<Node>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        // Only the first top-level element is the document root.
        None => {
            if root.is_none() {
                *root = Some(node);
            }
        }
    }
}

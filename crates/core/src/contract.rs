//! Offline check of the page's identifier contract.
//!
//! Parses the page markup and verifies every id the scenarios rely on is
//! present exactly once on an element of a usable kind, and that the logout
//! button carries a label the scenarios recognise.

use crate::dom::{self, DomNode};
use crate::page;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindMismatch {
    pub id: String,
    pub expected: &'static str,
    pub found: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelMismatch {
    pub id: String,
    pub expected: Vec<&'static str>,
    pub found: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContractReport {
    pub source: String,
    pub missing: Vec<String>,
    pub duplicated: Vec<String>,
    pub wrong_kind: Vec<KindMismatch>,
    pub wrong_label: Vec<LabelMismatch>,
}

impl ContractReport {
    pub fn is_satisfied(&self) -> bool {
        self.missing.is_empty()
            && self.duplicated.is_empty()
            && self.wrong_kind.is_empty()
            && self.wrong_label.is_empty()
    }

    pub fn to_compact_string(&self) -> String {
        let mut out = format!("source: {}\n", self.source);
        if self.is_satisfied() {
            out.push_str(&format!("ok: all {} ids present", page::REQUIRED_IDS.len()));
            return out;
        }
        for id in &self.missing {
            out.push_str(&format!("missing: #{}\n", id));
        }
        for id in &self.duplicated {
            out.push_str(&format!("duplicated: #{}\n", id));
        }
        for m in &self.wrong_kind {
            out.push_str(&format!(
                "wrong kind: #{} is {}, expected {}\n",
                m.id, m.found, m.expected
            ));
        }
        for m in &self.wrong_label {
            out.push_str(&format!(
                "wrong label: #{} reads {:?}, expected one of {:?}\n",
                m.id, m.found, m.expected
            ));
        }
        out.truncate(out.trim_end().len());
        out
    }
}

/// What kind of element an id must be on.
fn expected_kind(id: &str) -> Option<&'static str> {
    if page::TEXT_FIELDS.contains(&id) {
        Some("text input")
    } else if id == page::TERMS {
        Some("checkbox")
    } else if id == page::REGISTER_BUTTON || id == page::LOGOUT_BUTTON {
        Some("button")
    } else {
        None
    }
}

fn describe(node: &DomNode) -> String {
    if node.tag == "input" {
        format!("input[type={}]", node.input_type())
    } else {
        node.tag.clone()
    }
}

fn matches_kind(node: &DomNode, kind: &str) -> bool {
    match kind {
        "text input" => {
            node.tag == "textarea"
                || (node.tag == "input"
                    && !matches!(
                        node.input_type().as_str(),
                        "checkbox" | "radio" | "submit" | "button" | "reset" | "hidden"
                    ))
        }
        "checkbox" => node.tag == "input" && node.input_type() == "checkbox",
        "button" => {
            node.tag == "button"
                || (node.tag == "input"
                    && matches!(node.input_type().as_str(), "submit" | "button"))
        }
        _ => true,
    }
}

pub fn check_tree(tree: &DomNode, source: &str) -> ContractReport {
    let counts = tree.id_counts();
    let mut report = ContractReport {
        source: source.to_string(),
        ..Default::default()
    };

    for id in page::REQUIRED_IDS {
        match counts.get(id).copied().unwrap_or(0) {
            0 => {
                report.missing.push(id.to_string());
                continue;
            }
            1 => {}
            _ => report.duplicated.push(id.to_string()),
        }
        if let (Some(kind), Some(node)) = (expected_kind(id), tree.find_by_id(id)) {
            if !matches_kind(node, kind) {
                report.wrong_kind.push(KindMismatch {
                    id: id.to_string(),
                    expected: kind,
                    found: describe(node),
                });
            }
        }
    }

    // Case-sensitive, like the welcome-view assertion.
    if let Some(button) = tree.find_by_id(page::LOGOUT_BUTTON) {
        let label = button.label();
        if !page::LOGOUT_LABELS.iter().any(|l| label.contains(l)) {
            report.wrong_label.push(LabelMismatch {
                id: page::LOGOUT_BUTTON.to_string(),
                expected: page::LOGOUT_LABELS.to_vec(),
                found: label,
            });
        }
    }
    report
}

pub fn check_html(html: &str, source: &str) -> ContractReport {
    check_tree(&dom::parse_html(html), source)
}

/// Fetch the page over HTTP and check it.
#[cfg(feature = "fetch")]
pub async fn check_url(
    url: &str,
    config: &crate::fetch::FetchConfig,
) -> crate::error::Result<ContractReport> {
    let html = crate::fetch::fetch_html(url, config).await?;
    let report = check_html(&html, url);
    tracing::info!(
        url,
        missing = report.missing.len(),
        duplicated = report.duplicated.len(),
        wrong_kind = report.wrong_kind.len(),
        wrong_label = report.wrong_label.len(),
        "identifier contract checked"
    );
    Ok(report)
}

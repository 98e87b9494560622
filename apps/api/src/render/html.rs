use crate::engine::{FeedbackBlock, FeedbackFragment, Severity};

const SEPARATOR: &str = r#"<hr class="my-4 border-gray-300">"#;

fn severity_class(severity: Severity) -> Option<&'static str> {
    match severity {
        Severity::Neutral => None,
        Severity::Success => Some("text-green-600"),
        Severity::Warning => Some("text-orange-600"),
        Severity::Danger => Some("text-red-600"),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn block_to_html(block: &FeedbackBlock) -> String {
    let open = match severity_class(block.severity) {
        Some(class) => format!(r#"<p class="{class}">"#),
        None => "<p>".to_string(),
    };
    let label = block
        .label
        .as_deref()
        .map(|l| format!("<strong>{}:</strong> ", escape(l)))
        .unwrap_or_default();
    format!("{open}{label}{}</p>", escape(&block.text))
}

/// One `<h3>` heading per fragment, its blocks as severity-classed paragraphs,
/// and a rule after each fragment. User-derived text is escaped.
pub fn feedback_to_html(fragments: &[FeedbackFragment]) -> String {
    let mut html = String::new();
    for fragment in fragments {
        html.push_str(&format!(
            "<h3><strong>{}:</strong></h3>",
            escape(&fragment.heading)
        ));
        for block in &fragment.blocks {
            html.push_str(&block_to_html(block));
        }
        html.push_str(SEPARATOR);
    }
    html
}

use crate::orchestrator::Outcome;
use std::io::{self, Write};

pub const TITLE: &str = "🧪 SCD Test Case Generator (Databricks LLM)";
pub const CAPTION: &str = "Uses Databricks Model Serving + Workspace Token (no OpenAI).";
pub const FOOTER: &str = "Built on Databricks LLM";

pub fn render_banner<W: Write>(out: &mut W, endpoint_name: &str) -> io::Result<()> {
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{CAPTION}")?;
    writeln!(out, "ℹ️  Using Databricks Serving Endpoint: `{endpoint_name}`")?;
    writeln!(out)
}

/// Prints generated text as a fenced markdown block, or the failure message.
/// A fence the model wrapped around its whole answer is dropped, and the outer
/// fence is always longer than any backtick run left inside.
pub fn render_outcome<W: Write>(out: &mut W, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::Generated(text) => {
            let body = strip_surrounding_fence(text);
            let fence = "`".repeat(longest_backtick_run(body).max(2) + 1);
            writeln!(out, "✅ Generated!")?;
            writeln!(out, "{fence}markdown")?;
            writeln!(out, "{}", body.trim_end_matches('\n'))?;
            writeln!(out, "{fence}")
        }
        Outcome::Failed(message) => writeln!(out, "❌ Error: {message}"),
    }
}

fn strip_surrounding_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return text;
    };
    let Some((info, body)) = rest.split_once('\n') else {
        return text;
    };
    if info.contains('`') {
        return text;
    }
    match body.strip_suffix("```") {
        Some(inner) if !inner.ends_with('`') => inner.trim_end_matches(['\n', '\r']),
        _ => text,
    }
}

fn longest_backtick_run(text: &str) -> usize {
    text.split(|c: char| c != '`').map(str::len).max().unwrap_or(0)
}

pub fn render_footer<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(50))?;
    writeln!(out, "{FOOTER}")
}

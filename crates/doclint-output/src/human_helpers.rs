use doclint_enforce::types::{Failure, Severity};

pub(crate) fn format_failure_human(f: &Failure) -> String {
    let severity_label = match f.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Info => "info",
    };

    let mut out = format!(
        "{}[{}]: {}\n  --> {}:{}:{}\n",
        severity_label, f.lint_id, f.message, f.file, f.line, f.column,
    );

    if let Some(fix) = &f.fix_hint {
        out.push_str(&format!("   = fix: {}\n", fix));
    }

    if f.suppressed {
        if let Some(hint) = &f.suppress_hint {
            out.push_str(&format!("   = {}\n", hint));
        }
    }

    out
}

// Number and text formatting shared by the scene writer.

pub(super) fn fmt(v: f64) -> String {
    // Round-trippable decimal form, but without `-0` or float noise from the layout math
    // (e.g. `119.99999999999999` for `800 * 0.15`).
    if !v.is_finite() {
        return "0".to_string();
    }

    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    } else {
        v = (v * 1000.0).round() / 1000.0;
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}

pub(super) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub(super) fn escape_attr(text: &str) -> String {
    escape_xml(text)
}

/// Converts an arbitrary string into a conservative SVG `id` token.
///
/// Unsupported characters become `-`, runs of `-` collapse, and ids that do not start with an
/// ASCII letter get a `t-` prefix.
pub fn sanitize_svg_id(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return "topology".to_string();
    }

    let mut out = String::with_capacity(raw.len() + 2);
    for ch in raw.chars() {
        let ok = ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == '.';
        out.push(if ok { ch } else { '-' });
    }

    if !out.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
        out.insert_str(0, "t-");
    }
    while out.contains("--") {
        out = out.replace("--", "-");
    }
    let out = out.trim_matches('-');
    if out.is_empty() || out == "t" {
        return "topology".to_string();
    }
    out.to_string()
}

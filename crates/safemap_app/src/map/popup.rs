use safemap_core::domain::Incident;

pub(crate) fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

/// Popup body bound to an incident marker: title, description, severity chip and
/// an optional Verified chip. Reporter-supplied text is escaped.
pub fn popup_html(incident: &Incident) -> String {
    let color = incident.severity.presentation().marker_color;
    let mut html = format!(
        concat!(
            r#"<div class="incident-popup">"#,
            r#"<h3>{title}</h3>"#,
            r#"<p>{description}</p>"#,
            r#"<div class="chips">"#,
            r#"<span class="chip" style="background-color: {color}20; color: {color}; border: 1px solid {color}40;">{severity}</span>"#,
        ),
        title = escape_html(&incident.title),
        description = escape_html(&incident.description),
        color = color,
        severity = incident.severity.as_str(),
    );
    if incident.verified {
        html.push_str(r#"<span class="chip chip-verified">Verified</span>"#);
    }
    html.push_str("</div></div>");
    html
}

use std::fmt::Write;

use super::fields::FieldSet;
use crate::presenter::Presentation;

pub const CONTAINER_ID: &str = "input-container";
pub const TRIGGER_ID: &str = "predict-btn";
pub const RESULT_ID: &str = "result";

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

/// Renders the input container with one labeled group per control.
pub fn render_inputs(fields: &FieldSet) -> String {
    let mut html = format!("<div id=\"{}\">\n", CONTAINER_ID);
    for control in fields.controls() {
        let _ = write!(
            html,
            "  <div class=\"input-group\">\n    <label for=\"{id}\">{label}:</label>\n    \
             <input type=\"number\" step=\"{step}\" id=\"{id}\" value=\"{value}\"{required}>\n  </div>\n",
            id = control.id(),
            label = escape(control.label()),
            step = control.step(),
            value = escape(control.value()),
            required = if control.required() { " required" } else { "" },
        );
    }
    html.push_str("</div>\n");
    html
}

/// Renders the result area for a presented state.
pub fn render_result(presentation: &Presentation) -> String {
    let class = presentation
        .style
        .map(|style| format!(" class=\"{}\"", style.class_name()))
        .unwrap_or_default();
    let mut html = format!("<div id=\"{}\"{}>", RESULT_ID, class);
    if let Some(heading) = &presentation.heading {
        let _ = write!(html, "<h2>{}</h2>", escape(heading));
    }
    for line in &presentation.lines {
        let _ = write!(html, "<p>{}</p>", escape(line));
    }
    html.push_str("</div>\n");
    html
}

/// Renders the whole form: inputs, trigger and result area.
pub fn render_form(fields: &FieldSet, presentation: &Presentation, trigger_enabled: bool) -> String {
    let mut html = render_inputs(fields);
    let _ = writeln!(
        html,
        "<button id=\"{}\"{}>Predict</button>",
        TRIGGER_ID,
        if trigger_enabled { "" } else { " disabled" }
    );
    html.push_str(&render_result(presentation));
    html
}

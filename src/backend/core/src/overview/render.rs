//! HTML rendering of the finished overview.

use super::model::Overview;

const STYLE: &str = "\
    .A {
        background-color: beige;
    }

    .B {
        background-color: azure;
    }

    .error {
        background-color: red;
    }
";

/// Render the overview as a standalone HTML page.
///
/// Stateless: a pure function of its argument. Environment names in the
/// header link to their base URLs, rows alternate the `A`/`B` stripe
/// classes, failed cells carry the `error` class, and each cell's tooltip
/// sits in the `title` attribute.
pub fn render_html(overview: &Overview) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n    <title>Version Overview</title>\n");
    html.push_str("    <style>\n");
    html.push_str(STYLE);
    html.push_str("    </style>\n</head>\n<body>\n<table>\n");

    html.push_str("    <tr style=\"font-weight: bold\">\n        <td></td>\n");
    if overview.environments.is_empty() {
        html.push_str("        <td>(No environments found)</td>\n");
    } else {
        for environment in &overview.environments {
            html.push_str(&format!(
                "        <td><a href=\"{}\">{}</a></td>\n",
                escape(&environment.base_url),
                escape(&environment.name)
            ));
        }
    }
    html.push_str("    </tr>\n");

    for row in &overview.rows {
        let stripe = if row.even { "A" } else { "B" };
        html.push_str(&format!(
            "    <tr class=\"{}\">\n        <td>{}</td>\n",
            stripe,
            escape(&row.name)
        ));
        for cell in &row.cells {
            match &cell.content {
                Some(content) => {
                    let class = if content.is_error {
                        " class=\"error\""
                    } else {
                        ""
                    };
                    html.push_str(&format!(
                        "        <td{} title=\"{}\">{}</td>\n",
                        class,
                        escape(&content.title),
                        escape(&content.text)
                    ));
                }
                None => html.push_str("        <td></td>\n"),
            }
        }
        html.push_str("    </tr>\n");
    }

    html.push_str("</table>\n</body>\n</html>\n");
    html
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

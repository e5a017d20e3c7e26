//! The welcome page template.
//!
//! One template, one variable. The page lives in the source as a const
//! string with a single `{{ message }}` slot; a fixed document does not
//! need a runtime template engine.

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>CI/CD 101</title>
    <style>
        body {
            display: flex;
            align-items: center;
            justify-content: center;
            height: 100vh;
            margin: 0;
            background: #1a1a1a;
            color: #cccccc;
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
        }

        h1 {
            font-weight: normal;
            border-bottom: 3px solid #007acc;
            padding-bottom: 12px;
        }
    </style>
</head>
<body>
    <h1>{{ message }}</h1>
</body>
</html>
"#;

/// Renders the index page with `message` substituted into the template.
pub fn render_index(message: &str) -> String {
    INDEX_TEMPLATE.replacen("{{ message }}", &escape_html(message), 1)
}

/// Escaping for text interpolated into HTML. The welcome message is a
/// trusted literal today; the template boundary does not assume that.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

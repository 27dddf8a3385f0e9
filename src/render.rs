use crate::handlers::{Outcome, PageView};

/// Target languages offered in the selector as (code, label).
const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("fr", "French"),
    ("es", "Spanish"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("nl", "Dutch"),
    ("ru", "Russian"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese (Simplified)"),
];

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
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

fn language_options(selected: &str) -> String {
    let mut options = String::new();
    if !LANGUAGES.iter().any(|(code, _)| *code == selected) {
        let code = escape_html(selected);
        options.push_str(&format!(
            "<option value=\"{code}\" selected>{code}</option>\n"
        ));
    }
    for (code, label) in LANGUAGES {
        let selected_attr = if *code == selected { " selected" } else { "" };
        options.push_str(&format!(
            "<option value=\"{code}\"{selected_attr}>{label}</option>\n"
        ));
    }
    options
}

fn result_section(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Blank => String::new(),
        Outcome::Translated(text) => format!(
            "<section class=\"result\">\n<h2>Translation</h2>\n<pre id=\"translated-text\">{}</pre>\n</section>\n",
            escape_html(text)
        ),
        Outcome::Failed(error) => format!(
            "<section class=\"error\" role=\"alert\">{}</section>\n",
            escape_html(&error.to_string())
        ),
    }
}

pub fn render_page(view: &PageView) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Image &amp; Text Translator</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<main>
<h1>Image &amp; Text Translator</h1>
<form method="post" action="/" enctype="multipart/form-data">
<label for="language">Target language</label>
<select id="language" name="language">
{options}</select>
<label for="text_input">Text</label>
<textarea id="text_input" name="text_input" rows="6" placeholder="Type text to translate"></textarea>
<label for="image_file">Or upload an image (PNG/JPG/JPEG)</label>
<input id="image_file" name="image_file" type="file" accept=".png,.jpg,.jpeg">
<button type="submit">Translate</button>
</form>
{result}</main>
<script src="/static/script.js"></script>
</body>
</html>
"#,
        options = language_options(&view.language),
        result = result_section(&view.outcome),
    )
}

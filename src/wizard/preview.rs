use crate::wizard::WizardController;
use html_escape::encode_text;

/// Renders the simulated inbox view of the wizard's latest sample.
///
/// While a generation runs the page shows a progress notice even when older
/// content exists; before the first success it shows a placeholder.
pub fn render_preview(wizard: &WizardController) -> String {
    let generation = wizard.generation();
    let sender = encode_text(&wizard.config().company_name);

    let main = match generation.content() {
        _ if generation.is_loading() => r#"<section class="preview-status">
<h3>Crafting Content...</h3>
<p>Analyzing your brand values and generating a personalized newsletter structure.</p>
</section>"#
            .to_string(),
        None => r#"<section class="preview-status">
<p>Preview will appear here</p>
</section>"#
            .to_string(),
        Some(content) => format!(
            r##"<header class="email-meta">
<p class="sender">{sender}</p>
<h2 class="subject">{subject}</h2>
<p class="preheader"><span>Preheader:</span> {preheader}</p>
</header>
<section class="email-body">
{body}
</section>
<footer class="email-footer">
<p>Generated Newsletter Content.</p>
<p><a href="#">Unsubscribe</a> <a href="#">Privacy Policy</a></p>
</footer>"##,
            subject = encode_text(&content.subject),
            preheader = encode_text(&content.preheader),
            body = content.preview_body(),
        ),
    };

    let title = match generation.content() {
        Some(content) if !generation.is_loading() => encode_text(&content.subject),
        _ => "Newsletter preview".into(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<article class="email-preview">
{main}
</article>
</body>
</html>
"#
    )
}

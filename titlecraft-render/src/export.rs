//! Standalone HTML export with the current look baked in as literal CSS.

use std::path::Path;

use titlecraft_core::{compute_visuals, CharacterVisual, TitleConfig};
use tracing::debug;

use crate::css::{css_number, format_text_shadow, format_transform};
use crate::error::RenderError;
use crate::projection::{FLOAT_AMPLITUDE_PX, PERSPECTIVE_PX};

const DOCUMENT_TITLE: &str = "Custom 3D Title";

/// Escape a single character for HTML text content.
///
/// Spaces become `&nbsp;` so blank characters keep their own box.
fn escape_char(ch: char, out: &mut String) {
    match ch {
        ' ' => out.push_str("&nbsp;"),
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => out.push(ch),
    }
}

fn char_rules(visuals: &[CharacterVisual]) -> String {
    visuals
        .iter()
        .map(|v| {
            format!(
                "
    .epic-title .char:nth-child({nth}) {{
        transform: {transform};
        text-shadow: {shadow};
        z-index: {z};
        --char-index: {index};
    }}",
                nth = v.index + 1,
                transform = format_transform(&v.transform),
                shadow = format_text_shadow(&v.shadow_layers),
                z = v.transform.z_index,
                index = v.index,
            )
        })
        .collect()
}

fn char_spans(visuals: &[CharacterVisual]) -> String {
    let mut spans = String::new();
    for v in visuals {
        spans.push_str(&format!(
            "<span class=\"char\" style=\"--char-index: {}\">",
            v.index
        ));
        escape_char(v.ch, &mut spans);
        spans.push_str("</span>");
    }
    spans
}

/// Build a self-contained HTML page reproducing `config` with the given
/// per-character visuals.
///
/// The output is a static snapshot: every transform and shadow is written
/// out literally, so the page needs no script.
pub fn build_html(config: &TitleConfig, visuals: &[CharacterVisual]) -> String {
    let title_color = if config.rainbow_mode {
        "transparent".to_string()
    } else {
        config.text_color.to_string()
    };
    let (animation_name, animation_duration) = if config.float_animation {
        ("float", format!("{}s", css_number(config.animation_speed)))
    } else {
        ("none", String::from("0s"))
    };
    let title_class = if config.rainbow_mode {
        "epic-title rainbow"
    } else {
        "epic-title"
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{DOCUMENT_TITLE}</title>
<style>
    body {{
        display: flex;
        justify-content: center;
        align-items: center;
        min-height: 100vh;
        background: {background};
        font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
        overflow-x: hidden;
        margin: 0;
        padding: 20px;
        box-sizing: border-box;
        color: #f0f8ff;
    }}

    .epic-title {{
        font-size: clamp(40px, 10vw, 120px);
        font-weight: 800;
        display: flex;
        justify-content: center;
        flex-wrap: nowrap;
        perspective: {perspective}px;
        color: {title_color};
        -webkit-text-stroke: {outline_width}px {outline_color};
        letter-spacing: {letter_spacing}rem;
        animation-name: {animation_name};
        animation-duration: {animation_duration};
        animation-timing-function: ease-in-out;
        animation-iteration-count: infinite;
        animation-direction: alternate;
    }}

    .epic-title .char {{
        display: inline-block;
        position: relative;
        transition: transform 0.3s ease;
    }}

    .epic-title .char:hover {{
        transform: translateY(-5px) scale(1.1) !important;
    }}

    @keyframes float {{
        from {{ transform: translateY(0); }}
        to {{ transform: translateY(-{float_amplitude}px); }}
    }}

    .epic-title.rainbow .char {{
        color: hsl(calc(var(--char-index) * 57), 80%, 60%) !important;
        animation: rainbow-pulse 3s infinite alternate;
    }}

    @keyframes rainbow-pulse {{
        to {{ filter: brightness(1.2) hue-rotate(360deg); }}
    }}
{char_rules}

    @media (max-width: 1200px) {{
        .epic-title {{ font-size: clamp(35px, 8vw, 100px); }}
    }}

    @media (max-width: 768px) {{
        .epic-title {{
            flex-wrap: wrap;
            line-height: 1.1;
            font-size: clamp(30px, 10vw, 90px);
        }}
    }}

    @media (max-width: 480px) {{
        .epic-title {{
            font-size: clamp(25px, 12vw, 80px);
        }}
    }}
</style>
</head>
<body>
<h1 class="{title_class}">{spans}</h1>
</body>
</html>
"#,
        background = config.background_color,
        perspective = css_number(PERSPECTIVE_PX),
        outline_width = css_number(config.outline_width),
        outline_color = config.outline_color,
        letter_spacing = css_number(config.letter_spacing),
        float_amplitude = css_number(FLOAT_AMPLITUDE_PX),
        char_rules = char_rules(visuals),
        spans = char_spans(visuals),
    )
}

/// Build the HTML page for `config`, computing its visuals.
pub fn build_html_for(config: &TitleConfig) -> String {
    build_html(config, &compute_visuals(config))
}

/// Write the HTML page for `config` to `path`.
pub fn export_html(config: &TitleConfig, path: &Path) -> crate::Result<()> {
    if path.file_name().is_none() {
        return Err(RenderError::InvalidPath(path.to_path_buf()));
    }
    let html = build_html_for(config);
    std::fs::write(path, &html).map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Exported {} bytes of HTML to {}", html.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_and_spaces() {
        let mut out = String::new();
        for ch in "a <b> & 'c'".chars() {
            escape_char(ch, &mut out);
        }
        assert_eq!(out, "a&nbsp;&lt;b&gt;&nbsp;&amp;&nbsp;&#39;c&#39;");
    }

    #[test]
    fn one_rule_and_span_per_character() {
        let config = TitleConfig {
            text: "Wow!".into(),
            ..TitleConfig::default()
        };
        let html = build_html_for(&config);
        for nth in 1..=4 {
            assert!(html.contains(&format!(".char:nth-child({nth})")));
        }
        assert!(!html.contains(".char:nth-child(5)"));
        assert_eq!(html.matches("<span class=\"char\"").count(), 4);
        assert!(html.contains("<span class=\"char\" style=\"--char-index: 3\">!</span>"));
        assert!(html.contains("--char-index: 0;\n    }"));
    }

    #[test]
    fn title_styles_follow_config() {
        let config = TitleConfig {
            float_animation: true,
            animation_speed: 4.0,
            background_color: "#1a1a2e".parse().unwrap(),
            ..TitleConfig::default()
        };
        let html = build_html_for(&config);
        assert!(html.contains("color: #F8DB28;"));
        assert!(html.contains("-webkit-text-stroke: 3px #901F06;"));
        assert!(html.contains("letter-spacing: -0.25rem;"));
        assert!(html.contains("animation-name: float;"));
        assert!(html.contains("animation-duration: 4s;"));
        assert!(html.contains("background: #1A1A2E;"));
        assert!(html.contains("<h1 class=\"epic-title\">"));
    }

    #[test]
    fn rainbow_makes_title_transparent() {
        let config = TitleConfig {
            rainbow_mode: true,
            ..TitleConfig::default()
        };
        let html = build_html_for(&config);
        assert!(html.contains("color: transparent;"));
        assert!(html.contains("<h1 class=\"epic-title rainbow\">"));
        assert!(html.contains("animation-name: none;"));
    }

    #[test]
    fn empty_text_still_builds_page() {
        let config = TitleConfig {
            text: String::new(),
            ..TitleConfig::default()
        };
        let html = build_html_for(&config);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1 class=\"epic-title\"></h1>"));
    }
}

//! Dashboard JavaScript
//!
//! The only client-side behaviour left once the page is rendered: the
//! scroll listener that hides the fixed text box past the end of the content.
//! The comparison mirrors `scroll::text_box_visibility`.

use crate::page::TargetId;
use crate::scroll::Visibility;

pub fn script() -> String {
    format!(
        r#"
// ============================================================================
// Text box visibility
// ============================================================================
document.addEventListener('scroll', function () {{
    const box = document.getElementById('{id}');
    if (window.innerHeight + window.scrollY > document.body.clientHeight) {{
        box.style.display = '{hidden}';
    }} else {{
        box.style.display = '{shown}';
    }}
}});
"#,
        id = TargetId::TextBox.as_str(),
        hidden = Visibility::Hidden.css_display(),
        shown = Visibility::Shown.css_display(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_uses_rule_values() {
        let js = script();
        assert!(js.contains("getElementById('text-box')"));
        assert!(js.contains("box.style.display = 'none';"));
        assert!(js.contains("box.style.display = 'block';"));
        assert!(js.contains("window.innerHeight + window.scrollY > document.body.clientHeight"));
    }
}

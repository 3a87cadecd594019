//! Text box visibility on scroll
//!
//! The fixed info box hides once the viewport runs past the bottom of the
//! page content, and comes back when the reader scrolls up again.

/// CSS `display` state of the text box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    pub const fn css_display(self) -> &'static str {
        match self {
            Visibility::Shown => "block",
            Visibility::Hidden => "none",
        }
    }
}

/// Evaluated on every scroll event; stateless.
pub fn text_box_visibility(viewport_height: f64, scroll_y: f64, content_height: f64) -> Visibility {
    if viewport_height + scroll_y > content_height {
        Visibility::Hidden
    } else {
        Visibility::Shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shown_above_bottom() {
        assert_eq!(text_box_visibility(800.0, 0.0, 3000.0), Visibility::Shown);
        assert_eq!(text_box_visibility(800.0, 2199.0, 3000.0), Visibility::Shown);
    }

    #[test]
    fn test_exactly_at_bottom_is_still_shown() {
        assert_eq!(text_box_visibility(800.0, 2200.0, 3000.0), Visibility::Shown);
    }

    #[test]
    fn test_hidden_past_bottom() {
        assert_eq!(text_box_visibility(800.0, 2200.5, 3000.0), Visibility::Hidden);
        // short page: hidden without scrolling at all
        assert_eq!(text_box_visibility(800.0, 0.0, 600.0), Visibility::Hidden);
    }

    #[test]
    fn test_toggles_back() {
        let down = text_box_visibility(800.0, 2500.0, 3000.0);
        let up = text_box_visibility(800.0, 100.0, 3000.0);
        assert_eq!(down.css_display(), "none");
        assert_eq!(up.css_display(), "block");
    }
}

//! Icon grid generation
//!
//! One person glyph per death reported since the previous day, each on a
//! randomly chosen palette color.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::page::{Document, Element, TargetId};

/// Glyph shown in every icon
pub const PERSON_GLYPH: &str = "👤";

/// Colors an icon may be painted with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Build a palette; `None` if there is nothing to pick from
    pub fn new(colors: Vec<String>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Uniform pick, with replacement
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // colors is never empty, see Palette::new
        self.colors.choose(rng).map_or("", String::as_str)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec!["darkblue".to_string(), "tan".to_string(), "maroon".to_string()],
        }
    }
}

/// How many icons to draw for a reported count.
///
/// Negative counts draw nothing. Counts past `usize::MAX` (32-bit targets)
/// saturate. `cap` limits the grid when set.
pub fn icon_count(death_increase: i64, cap: Option<usize>) -> usize {
    let n = if death_increase <= 0 {
        0
    } else {
        usize::try_from(death_increase).unwrap_or(usize::MAX)
    };
    cap.map_or(n, |cap| n.min(cap))
}

/// Append `count` icons to the image section, in order. Returns how many were
/// appended.
pub fn generate_icons<D, R>(doc: &mut D, count: usize, palette: &Palette, rng: &mut R) -> usize
where
    D: Document + ?Sized,
    R: Rng + ?Sized,
{
    for _ in 0..count {
        doc.append_child(
            TargetId::ImageSection,
            Element {
                background_color: palette.pick(rng).to_string(),
                text: PERSON_GLYPH.to_string(),
            },
        );
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageDocument;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_icon_count() {
        assert_eq!(icon_count(3, None), 3);
        assert_eq!(icon_count(0, None), 0);
        assert_eq!(icon_count(-12, None), 0);
        assert_eq!(icon_count(4000, Some(1000)), 1000);
        assert_eq!(icon_count(12, Some(1000)), 12);
    }

    #[test]
    fn test_icon_count_saturates_instead_of_dropping() {
        let huge = i64::MAX;
        let expected = usize::try_from(huge).unwrap_or(usize::MAX);
        assert_eq!(icon_count(huge, None), expected);
        assert!(icon_count(huge, None) > 0);
        assert_eq!(icon_count(huge, Some(1000)), 1000);
        assert_eq!(icon_count(i64::MIN, Some(1000)), 0);
    }

    #[test]
    fn test_generates_exactly_n_icons() {
        let palette = Palette::default();
        let mut rng = StdRng::seed_from_u64(7);

        for n in [0usize, 1, 3, 250, 2048] {
            let mut doc = PageDocument::new();
            assert_eq!(generate_icons(&mut doc, n, &palette, &mut rng), n);

            let icons = doc.children(TargetId::ImageSection);
            assert_eq!(icons.len(), n);
            for icon in icons {
                assert_eq!(icon.text, PERSON_GLYPH);
                assert!(palette.colors().contains(&icon.background_color));
            }
        }
    }

    #[test]
    fn test_zero_icons_leave_page_untouched() {
        let mut doc = PageDocument::new();
        let mut rng = StdRng::seed_from_u64(1);
        generate_icons(&mut doc, 0, &Palette::default(), &mut rng);
        assert!(doc.is_untouched());
    }

    #[test]
    fn test_every_color_gets_used() {
        let palette = Palette::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut doc = PageDocument::new();
        generate_icons(&mut doc, 300, &palette, &mut rng);

        for color in palette.colors() {
            let hits = doc
                .children(TargetId::ImageSection)
                .iter()
                .filter(|icon| &icon.background_color == color)
                .count();
            // 100 expected per color; a fair pick never lands this far off
            assert!(hits > 50 && hits < 150, "{color}: {hits}");
        }
    }

    #[test]
    fn test_empty_palette_rejected() {
        assert!(Palette::new(vec![]).is_none());
        assert!(Palette::new(vec!["red".to_string()]).is_some());
    }
}

//! In-memory page model
//!
//! The updater never touches HTML directly. It writes through [`Document`],
//! and [`PageDocument`] records those writes so the dashboard module can
//! fill them into the page template.

use std::collections::HashMap;

/// Element ids the dashboard reads or writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetId {
    Overlay,
    DeathTotal,
    TotalDeath2,
    TotalCases,
    TotalIcu,
    HighlightLivesLost,
    DataDate,
    AssembledDate,
    ImageSection,
    ImageText,
    TextBox,
}

impl TargetId {
    pub const ALL: [TargetId; 11] = [
        TargetId::Overlay,
        TargetId::DeathTotal,
        TargetId::TotalDeath2,
        TargetId::TotalCases,
        TargetId::TotalIcu,
        TargetId::HighlightLivesLost,
        TargetId::DataDate,
        TargetId::AssembledDate,
        TargetId::ImageSection,
        TargetId::ImageText,
        TargetId::TextBox,
    ];

    /// The `id` attribute in the page
    pub const fn as_str(self) -> &'static str {
        match self {
            TargetId::Overlay => "overlay",
            TargetId::DeathTotal => "death-total",
            TargetId::TotalDeath2 => "total-death-2",
            TargetId::TotalCases => "total-cases",
            TargetId::TotalIcu => "total-ICU",
            TargetId::HighlightLivesLost => "highlight-lives-lost",
            TargetId::DataDate => "data-date",
            TargetId::AssembledDate => "assembled-date",
            TargetId::ImageSection => "image-section",
            TargetId::ImageText => "image-text",
            TargetId::TextBox => "text-box",
        }
    }

    /// Targets that hold generated children rather than text
    pub const fn is_container(self) -> bool {
        matches!(self, TargetId::ImageSection)
    }

    fn marker(self) -> String {
        format!("{{{{{}}}}}", self.as_str())
    }
}

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated child element (one icon in the grid)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub background_color: String,
    pub text: String,
}

impl Element {
    pub fn to_html(&self) -> String {
        format!(
            r#"<div style="background-color: {}">{}</div>"#,
            escape_html(&self.background_color),
            escape_html(&self.text)
        )
    }
}

/// Write side of a page
pub trait Document {
    /// Replace the text content of a target
    fn set_text(&mut self, target: TargetId, text: &str);

    /// Append a child to a container target, in document order
    fn append_child(&mut self, container: TargetId, child: Element);
}

/// Records every write so it can be rendered later
#[derive(Debug, Default)]
pub struct PageDocument {
    text: HashMap<TargetId, String>,
    children: HashMap<TargetId, Vec<Element>>,
}

/// Shown in text targets nothing has written to
pub const PLACEHOLDER: &str = "--";

impl PageDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text written to a target, if any
    pub fn text(&self, target: TargetId) -> Option<&str> {
        self.text.get(&target).map(String::as_str)
    }

    /// Children appended to a container
    pub fn children(&self, container: TargetId) -> &[Element] {
        self.children.get(&container).map(Vec::as_slice).unwrap_or_default()
    }

    /// True when nothing has been written yet
    pub fn is_untouched(&self) -> bool {
        self.text.is_empty() && self.children.values().all(Vec::is_empty)
    }

    /// Substitute `{{id}}` markers in a template with recorded content.
    ///
    /// Text targets get their escaped text (or [`PLACEHOLDER`]); containers get
    /// their children's markup.
    pub fn fill(&self, template: &str) -> String {
        let mut out = template.to_string();
        for target in TargetId::ALL {
            let marker = target.marker();
            if !out.contains(&marker) {
                continue;
            }

            let content = if target.is_container() {
                self.children(target).iter().map(Element::to_html).collect::<String>()
            } else {
                self.text(target)
                    .map(escape_html)
                    .unwrap_or_else(|| PLACEHOLDER.to_string())
            };
            out = out.replace(&marker, &content);
        }
        out
    }
}

impl Document for PageDocument {
    fn set_text(&mut self, target: TargetId, text: &str) {
        self.text.insert(target, text.to_string());
    }

    fn append_child(&mut self, container: TargetId, child: Element) {
        self.children.entry(container).or_default().push(child);
    }
}

/// Escape text for HTML body and attribute positions
pub fn escape_html(raw: &str) -> String {
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

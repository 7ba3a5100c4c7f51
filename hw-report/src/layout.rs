use hw_model::AttributeResult;
use std::fmt::Write;

const LABEL_WIDTH: usize = 24;

/// One fact. `value == None` means the line is not rendered at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub label: &'static str,
    pub value: Option<String>,
}

impl Line {
    pub fn new(label: &'static str, value: AttributeResult<String>) -> Self {
        Self {
            label,
            value: value.present(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub lines: Vec<Line>,
    pub children: Vec<Section>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn field(mut self, label: &'static str, value: AttributeResult<String>) -> Self {
        self.lines.push(Line::new(label, value));
        self
    }

    pub fn child(mut self, section: Section) -> Self {
        self.children.push(section);
        self
    }

    /// Lines that will actually be printed.
    pub fn visible_lines(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.lines
            .iter()
            .filter_map(|line| line.value.as_deref().map(|v| (line.label, v)))
    }

    fn write_to(&self, out: &mut String, depth: usize) {
        let indent = "\t".repeat(depth);
        let _ = writeln!(out, "{}{}:", indent, self.title);
        for (label, value) in self.visible_lines() {
            let _ = writeln!(
                out,
                "{}\t{:<width$} {}",
                indent,
                format!("{}:", label),
                value,
                width = LABEL_WIDTH
            );
        }
        for child in &self.children {
            child.write_to(out, depth + 1);
        }
    }
}

pub fn render_sections(sections: &[Section]) -> String {
    let mut out = String::new();
    for section in sections {
        section.write_to(&mut out, 0);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_lines_are_dropped() {
        let section = Section::new("Memory")
            .field("Page size", AttributeResult::Present("16384 bytes".into()))
            .field("L3 cache", AttributeResult::Unavailable);
        let text = render_sections(&[section]);

        assert_eq!(text, format!("Memory:\n\t{:<24} 16384 bytes\n", "Page size:"));
        assert!(!text.contains("L3"));
    }

    #[test]
    fn test_children_are_indented() {
        let section = Section::new("Processor").child(
            Section::new("Core type 0").field("L2 cache", AttributeResult::Present("4 MB".into())),
        );
        let text = render_sections(&[section]);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Processor:");
        assert_eq!(lines[1], "\tCore type 0:");
        assert!(lines[2].starts_with("\t\tL2 cache:"));
    }
}

//! Result card rendering.
//!
//! [`CardFields`] is the fully resolved view of a result: every field is a
//! display string, with `"NA"` standing in for anything the document left
//! out. [`render_card`] turns it into a boxed block of terminal text.

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::models::HadithResult;
use crate::utils::{display_width, wrap_text, MIN_CARD_WIDTH};

/// Placeholder for fields the document did not provide
pub const PLACEHOLDER: &str = "NA";

/// One resolved grade row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeRow {
    pub scholar: String,
    pub grade: String,
}

/// Display-ready card contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardFields {
    pub collection: String,
    pub section: String,
    pub hadith_number: String,
    pub text: String,
    /// `None` renders as the placeholder
    pub grades: Option<Vec<GradeRow>>,
    pub book_reference: String,
    pub hadith_reference: String,
}

fn or_placeholder(value: Option<&String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .cloned()
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

impl CardFields {
    /// Resolve a result, substituting the placeholder field by field.
    pub fn from_result(result: &HadithResult) -> Self {
        Self {
            collection: or_placeholder(result.collection_name.as_ref()),
            section: or_placeholder(result.section.as_ref()),
            hadith_number: or_placeholder(result.hadith_number.as_ref()),
            text: or_placeholder(result.text.as_ref()),
            grades: result.grades.as_ref().map(|grades| {
                grades
                    .iter()
                    .map(|g| GradeRow {
                        scholar: or_placeholder(g.scholar.as_ref()),
                        grade: or_placeholder(g.grade.as_ref()),
                    })
                    .collect()
            }),
            book_reference: or_placeholder(result.book_reference.as_ref()),
            hadith_reference: or_placeholder(result.hadith_reference.as_ref()),
        }
    }

    /// Sample contents used by `preview`.
    pub fn preview() -> Self {
        Self {
            collection: "Sunan Abu Dawud".to_string(),
            section: "Prayer (Kitab Al-Salat)".to_string(),
            hadith_number: "1035".to_string(),
            text: "This tradition (mentioned above)...".to_string(),
            grades: Some(vec![
                GradeRow {
                    scholar: "Al-Albani".to_string(),
                    grade: "Sahih".to_string(),
                },
                GradeRow {
                    scholar: "Zubair Ali Zai".to_string(),
                    grade: "Sahih Bukhari (1224)".to_string(),
                },
            ]),
            book_reference: "1".to_string(),
            hadith_reference: "Book 2, Hadith 646".to_string(),
        }
    }
}

impl Default for CardFields {
    fn default() -> Self {
        Self::preview()
    }
}

#[derive(Debug, Clone, Copy)]
enum Style {
    Plain,
    Title,
    Label,
    Text,
    Grade,
}

/// Segment of a card line: plain text plus how to style it
struct Span<'a> {
    text: &'a str,
    style: Style,
}

fn span(text: &str, style: Style) -> Span<'_> {
    Span { text, style }
}

impl Span<'_> {
    fn styled(&self, color: bool) -> String {
        if !color {
            return self.text.to_string();
        }
        match self.style {
            Style::Plain => self.text.to_string(),
            Style::Title => self.text.green().bold().to_string(),
            Style::Label => self.text.dimmed().to_string(),
            Style::Text => self.text.italic().to_string(),
            Style::Grade => self.text.green().to_string(),
        }
    }
}

struct CardWriter {
    inner: usize,
    color: bool,
    out: String,
}

impl CardWriter {
    fn new(width: usize, color: bool) -> Self {
        // "│ " + content + " │"
        let inner = width.saturating_sub(4);
        Self {
            inner,
            color,
            out: String::new(),
        }
    }

    fn rule(&mut self, left: char, right: char) {
        self.out.push(left);
        self.out.push_str(&"─".repeat(self.inner + 2));
        self.out.push(right);
        self.out.push('\n');
    }

    fn line(&mut self, spans: &[Span<'_>]) {
        let plain: String = spans.iter().map(|s| s.text).collect();
        let styled: String = spans.iter().map(|s| s.styled(self.color)).collect();
        let pad = self.inner.saturating_sub(display_width(&plain));
        self.out.push_str("│ ");
        self.out.push_str(&styled);
        self.out.push_str(&" ".repeat(pad));
        self.out.push_str(" │\n");
    }

    fn wrapped(&mut self, text: &str, indent: usize, style: Style) {
        let prefix = " ".repeat(indent);
        for chunk in wrap_text(text, self.inner.saturating_sub(indent)) {
            self.line(&[span(&prefix, Style::Plain), span(&chunk, style)]);
        }
    }

    /// `Label:` on the left, value flush right; wraps under the label when too long.
    fn field(&mut self, label: &str, value: &str) {
        let used = display_width(label) + 1 + display_width(value);
        if used <= self.inner {
            let gap = " ".repeat(self.inner - used + 1);
            self.line(&[
                span(label, Style::Label),
                span(&gap, Style::Plain),
                span(value, Style::Plain),
            ]);
        } else {
            self.line(&[span(label, Style::Label)]);
            self.wrapped(value, 2, Style::Plain);
        }
    }
}

/// Render `fields` as a boxed card `width` columns wide.
///
/// Widths below [`MIN_CARD_WIDTH`] are raised to it.
pub fn render_card(fields: &CardFields, width: usize, color: bool) -> String {
    let mut w = CardWriter::new(width.max(MIN_CARD_WIDTH), color);

    w.rule('┌', '┐');
    let title = format!("📖 {}", fields.collection);
    w.wrapped(&title, 0, Style::Title);
    w.rule('├', '┤');

    w.field("Section:", &fields.section);
    w.field("Hadith Number:", &fields.hadith_number);
    w.rule('├', '┤');

    w.wrapped(&fields.text, 0, Style::Text);
    w.rule('├', '┤');

    w.line(&[span("Grades:", Style::Label)]);
    match &fields.grades {
        Some(grades) => {
            for row in grades {
                let scholar = format!("  • {}: ", row.scholar);
                let used = display_width(&scholar) + display_width(&row.grade);
                if used <= w.inner {
                    w.line(&[span(&scholar, Style::Plain), span(&row.grade, Style::Grade)]);
                } else {
                    w.wrapped(scholar.trim_end(), 2, Style::Plain);
                    w.wrapped(&row.grade, 4, Style::Grade);
                }
            }
        }
        None => w.line(&[span("  ", Style::Plain), span(PLACEHOLDER, Style::Plain)]),
    }
    w.rule('├', '┤');

    let reference = format!(
        "Book : {} · Hadith : {}",
        fields.book_reference, fields.hadith_reference
    );
    w.line(&[span("Reference:", Style::Label)]);
    w.wrapped(&reference, 2, Style::Plain);
    w.rule('└', '┘');

    w.out
}

/// Render `fields` as unboxed `Key: value` lines.
pub fn render_plain(fields: &CardFields) -> String {
    let mut out = String::new();
    out.push_str(&format!("Collection: {}\n", fields.collection));
    out.push_str(&format!("Section: {}\n", fields.section));
    out.push_str(&format!("Hadith Number: {}\n", fields.hadith_number));
    out.push_str(&format!("Text: {}\n", fields.text));
    match &fields.grades {
        Some(grades) if !grades.is_empty() => {
            out.push_str("Grades:\n");
            for row in grades {
                out.push_str(&format!("  {}: {}\n", row.scholar, row.grade));
            }
        }
        Some(_) => out.push_str("Grades:\n"),
        None => out.push_str(&format!("Grades: {}\n", PLACEHOLDER)),
    }
    out.push_str(&format!(
        "Reference: Book {}, Hadith {}\n",
        fields.book_reference, fields.hadith_reference
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Grade;

    fn sample_result() -> HadithResult {
        HadithResult {
            collection_name: Some("Sunan Abu Dawud".to_string()),
            section: Some("Prayer".to_string()),
            hadith_number: Some("1035".to_string()),
            text: Some("Narrated Abu Hurairah: the Prophet prayed two rak'ahs.".to_string()),
            grades: Some(vec![Grade::new("Al-Albani", "Sahih")]),
            book_reference: Some("1".to_string()),
            hadith_reference: Some("Book 2, Hadith 646".to_string()),
        }
    }

    #[test]
    fn test_from_result_keeps_values() {
        let fields = CardFields::from_result(&sample_result());
        assert_eq!(fields.collection, "Sunan Abu Dawud");
        assert_eq!(fields.section, "Prayer");
        assert_eq!(fields.hadith_number, "1035");
        assert_eq!(fields.grades.as_ref().unwrap().len(), 1);
        assert_eq!(fields.book_reference, "1");
        assert_eq!(fields.hadith_reference, "Book 2, Hadith 646");
    }

    #[test]
    fn test_missing_field_becomes_placeholder_alone() {
        let mut result = sample_result();
        result.book_reference = None;
        let fields = CardFields::from_result(&result);
        assert_eq!(fields.book_reference, "NA");
        assert_eq!(fields.hadith_reference, "Book 2, Hadith 646");
        assert_eq!(fields.collection, "Sunan Abu Dawud");
    }

    #[test]
    fn test_empty_result_is_all_placeholders() {
        let fields = CardFields::from_result(&HadithResult::default());
        assert_eq!(fields.collection, "NA");
        assert_eq!(fields.section, "NA");
        assert_eq!(fields.hadith_number, "NA");
        assert_eq!(fields.text, "NA");
        assert_eq!(fields.grades, None);
        assert_eq!(fields.book_reference, "NA");
    }

    #[test]
    fn test_grade_with_missing_parts() {
        let mut result = sample_result();
        result.grades = Some(vec![Grade {
            scholar: None,
            grade: Some("Hasan".to_string()),
        }]);
        let fields = CardFields::from_result(&result);
        let rows = fields.grades.unwrap();
        assert_eq!(rows[0].scholar, "NA");
        assert_eq!(rows[0].grade, "Hasan");
    }

    #[test]
    fn test_render_card_contents() {
        let fields = CardFields::from_result(&sample_result());
        let card = render_card(&fields, 60, false);
        assert!(card.contains("Sunan Abu Dawud"));
        assert!(card.contains("Section:"));
        assert!(card.contains("Prayer"));
        assert!(card.contains("1035"));
        assert!(card.contains("• Al-Albani: Sahih"));
        assert!(card.contains("Book : 1"));
        assert!(card.contains("Hadith : Book 2, Hadith 646"));
        assert!(card.starts_with('┌'));
        assert!(card.trim_end().ends_with('┘'));
    }

    #[test]
    fn test_render_card_lines_have_equal_width() {
        let fields = CardFields::preview();
        for width in [30, 48, 72] {
            let card = render_card(&fields, width, false);
            let widths: Vec<usize> = card.lines().map(display_width).collect();
            assert!(widths.iter().all(|w| *w == widths[0]), "ragged card at {}", width);
        }
    }

    #[test]
    fn test_narrow_width_is_clamped() {
        let fields = CardFields::preview();
        for width in [0, 10, 18, MIN_CARD_WIDTH] {
            let card = render_card(&fields, width, false);
            assert!(
                card.lines().all(|line| display_width(line) == MIN_CARD_WIDTH),
                "ragged card at {}",
                width
            );
        }
    }

    #[test]
    fn test_render_card_without_grade_list() {
        let mut fields = CardFields::preview();
        fields.grades = None;
        let card = render_card(&fields, 50, false);
        assert!(card.contains("Grades:"));
        assert!(card.contains("  NA"));
    }

    #[test]
    fn test_preview_defaults() {
        let fields = CardFields::preview();
        assert_eq!(fields.collection, "Sunan Abu Dawud");
        assert_eq!(fields.section, "Prayer (Kitab Al-Salat)");
        assert_eq!(fields.grades.as_ref().unwrap().len(), 2);
        assert_eq!(fields.hadith_reference, "Book 2, Hadith 646");
    }

    #[test]
    fn test_render_plain() {
        let fields = CardFields::from_result(&sample_result());
        let plain = render_plain(&fields);
        assert!(plain.contains("Collection: Sunan Abu Dawud\n"));
        assert!(plain.contains("  Al-Albani: Sahih\n"));
        assert!(plain.contains("Reference: Book 1, Hadith Book 2, Hadith 646\n"));
    }
}

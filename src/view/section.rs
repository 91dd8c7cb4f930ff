//! Section rendering: a centered heading over a body.
//!
//! All functions return lines laid out for a column `width` cells wide,
//! left-aligned; the page adds the margin that centers the column.

use super::styles::PageStyles;
use super::wrap::wrap_text;
use crate::model::{Education, Experience, Section};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Shown in place of a section body with no entries.
pub const EMPTY_SECTION_TEXT: &str = "Nothing here yet.";

/// Render a section: heading, underline, blank, body, blank.
///
/// The heading is the first returned line, so its page row is the row the
/// section starts at.
pub fn render_section(
    section: Section,
    body: Vec<Line<'static>>,
    width: usize,
    styles: &PageStyles,
) -> Vec<Line<'static>> {
    let title = section.title();
    let rule = "─".repeat(title.width());

    let mut lines = Vec::with_capacity(body.len() + 4);
    lines.push(centered(vec![Span::styled(title, styles.heading)], width));
    lines.push(centered(vec![Span::styled(rule, styles.rule)], width));
    lines.push(Line::default());
    if body.is_empty() {
        lines.push(centered(
            vec![Span::styled(EMPTY_SECTION_TEXT, styles.muted)],
            width,
        ));
    } else {
        lines.extend(body);
    }
    lines.push(Line::default());
    lines
}

/// Center `spans` in `width` cells by left-padding with spaces.
pub fn centered(spans: Vec<Span<'static>>, width: usize) -> Line<'static> {
    let used: usize = spans.iter().map(|s| s.content.width()).sum();
    let pad = width.saturating_sub(used) / 2;
    let mut padded = Vec::with_capacity(spans.len() + 1);
    if pad > 0 {
        padded.push(Span::raw(" ".repeat(pad)));
    }
    padded.extend(spans);
    Line::from(padded)
}

fn wrapped(text: &str, width: usize, style: Style) -> impl Iterator<Item = Line<'static>> {
    wrap_text(text, width)
        .into_iter()
        .map(move |line| Line::from(Span::styled(line, style)))
}

/// About body: the text wrapped, blank lines between paragraphs.
pub fn about_body(about: &str, width: usize, styles: &PageStyles) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for paragraph in about.split("\n\n").filter(|p| !p.trim().is_empty()) {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.extend(wrapped(paragraph, width, styles.body));
    }
    lines
}

/// Skills body: `[skill]` chips packed into centered rows.
pub fn skills_body(skills: &[String], width: usize, styles: &PageStyles) -> Vec<Line<'static>> {
    const GAP: &str = "  ";

    let mut rows: Vec<Vec<Span<'static>>> = Vec::new();
    let mut row: Vec<Span<'static>> = Vec::new();
    let mut row_width = 0;

    for skill in skills.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        let chip = format!("[{}]", skill);
        let chip_width = chip.width();
        let needed = if row.is_empty() {
            chip_width
        } else {
            row_width + GAP.len() + chip_width
        };

        if needed > width && !row.is_empty() {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }
        if !row.is_empty() {
            row.push(Span::raw(GAP));
            row_width += GAP.len();
        }
        row.push(Span::styled(chip, styles.chip));
        row_width += chip_width;
    }
    if !row.is_empty() {
        rows.push(row);
    }

    rows.into_iter().map(|spans| centered(spans, width)).collect()
}

/// Experience body: title, company and duration, description per entry.
pub fn experience_body(
    entries: &[Experience],
    width: usize,
    styles: &PageStyles,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for entry in entries {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.extend(wrapped(&entry.title, width, styles.emphasis));
        lines.extend(wrapped(
            &format!("{} | {}", entry.company, entry.duration),
            width,
            styles.accent,
        ));
        lines.extend(wrapped(&entry.description, width, styles.body));
    }
    lines
}

/// Education body: institution, degree, duration and the optional score.
pub fn education_body(
    entries: &[Education],
    width: usize,
    styles: &PageStyles,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for entry in entries {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.extend(wrapped(&entry.institution, width, styles.emphasis));
        lines.extend(wrapped(&entry.degree, width, styles.accent));
        lines.extend(wrapped(&entry.duration, width, styles.muted));
        if let Some(percentage) = entry.percentage.as_deref().filter(|p| !p.trim().is_empty()) {
            lines.extend(wrapped(
                &format!("Percentage: {}", percentage.trim()),
                width,
                styles.muted,
            ));
        }
    }
    lines
}

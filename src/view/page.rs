//! Whole-page layout.
//!
//! The page is one tall column of lines: the hero banner, every section,
//! then the footer. It is rebuilt on every draw from the application state,
//! recording where each section heading and project card landed so the
//! navigation handlers can jump to them.

use super::card::{card_width, render_card, CardFace};
use super::constants::CONTENT_MAX_WIDTH;
use super::section::{
    about_body, centered, education_body, experience_body, render_section, skills_body,
};
use super::styles::PageStyles;
use super::wrap::wrap_text;
use crate::model::{Profile, Section};
use crate::state::{AppState, PageMetrics};
use crate::typing::TypingEffect;
use ratatui::text::{Line, Span};
use std::ops::Range;
use unicode_width::UnicodeWidthStr;

/// A laid-out page and its geometry.
#[derive(Debug, Clone)]
pub struct Page {
    /// Every row of the page, top to bottom.
    pub lines: Vec<Line<'static>>,
    /// Where sections and cards landed.
    pub metrics: PageMetrics,
}

/// Lines between a section's heading row and its first body row.
const SECTION_BODY_OFFSET: usize = 3;

/// Lay out the page for a terminal `width` cells wide whose page area is
/// `viewport_height` rows tall.
pub fn build_page(
    state: &AppState,
    width: u16,
    viewport_height: u16,
    styles: &PageStyles,
) -> Page {
    let column = usize::from(width.min(CONTENT_MAX_WIDTH)).max(1);
    let margin = usize::from(width).saturating_sub(column) / 2;
    let viewport = usize::from(viewport_height);
    let profile = state.profile();

    let mut lines = hero_lines(profile, state.hero(), column, viewport, styles);
    let mut section_rows = [0; Section::ALL.len()];
    let mut project_rows = Vec::new();

    for section in Section::ALL {
        lines.push(Line::default());
        let heading_row = lines.len();
        section_rows[section.index()] = heading_row;

        let body = match section {
            Section::About => about_body(&profile.about, column, styles),
            Section::Skills => skills_body(&profile.skills, column, styles),
            Section::Projects => {
                let (body, rows) = projects_body(state, column, styles);
                let body_start = heading_row + SECTION_BODY_OFFSET;
                project_rows = rows
                    .into_iter()
                    .map(|r| r.start + body_start..r.end + body_start)
                    .collect();
                body
            }
            Section::Experience => experience_body(&profile.experience, column, styles),
            Section::Education => education_body(&profile.education, column, styles),
        };
        lines.extend(render_section(section, body, column, styles));
    }

    lines.extend(footer_lines(profile, column, styles));

    if margin > 0 {
        let pad = " ".repeat(margin);
        for line in lines.iter_mut().filter(|l| !l.spans.is_empty()) {
            line.spans.insert(0, Span::raw(pad.clone()));
        }
    }

    let metrics = PageMetrics {
        content_height: lines.len(),
        viewport_height: viewport,
        section_rows,
        project_rows,
    };
    Page { lines, metrics }
}

/// Hero banner: name, typed tagline and social links, vertically centered
/// in at least one full viewport.
///
/// The tagline reserves the rows its full text needs, so the page below
/// does not move while it is being typed.
pub fn hero_lines(
    profile: &Profile,
    hero: &TypingEffect,
    column: usize,
    viewport: usize,
    styles: &PageStyles,
) -> Vec<Line<'static>> {
    let mut content: Vec<Line<'static>> = wrap_text(&profile.name, column)
        .into_iter()
        .map(|line| centered(vec![Span::styled(line, styles.name)], column))
        .collect();
    content.push(Line::default());

    let reserved = wrap_text(hero.target().as_str(), column).len().max(1);
    let typed = wrap_text(hero.displayed(), column);
    for row in 0..reserved {
        match typed.get(row) {
            Some(text) => content.push(centered(
                vec![Span::styled(text.clone(), styles.tagline)],
                column,
            )),
            None => content.push(Line::default()),
        }
    }

    if !profile.social.is_empty() {
        content.push(Line::default());
        for link in &profile.social {
            let label = format!("{}  ", link.label);
            if label.width() + link.url.width() <= column {
                content.push(centered(
                    vec![
                        Span::styled(label, styles.emphasis),
                        Span::styled(link.url.clone(), styles.link),
                    ],
                    column,
                ));
                continue;
            }
            // Too narrow for one row: label above, URL wrapped below.
            for text in wrap_text(&link.label, column) {
                content.push(centered(vec![Span::styled(text, styles.emphasis)], column));
            }
            for text in wrap_text(&link.url, column) {
                content.push(centered(vec![Span::styled(text, styles.link)], column));
            }
        }
    }

    let height = viewport.max(content.len() + 2);
    let top = (height - content.len()) / 2;
    let mut lines = Vec::with_capacity(height);
    lines.resize(top, Line::default());
    lines.extend(content);
    lines.resize(height, Line::default());
    lines
}

/// Project cards stacked with a blank row between them.
///
/// Returns the lines and each card's rows relative to the first line.
fn projects_body(
    state: &AppState,
    column: usize,
    styles: &PageStyles,
) -> (Vec<Line<'static>>, Vec<Range<usize>>) {
    let projects = &state.profile().projects;
    let indent = " ".repeat(column.saturating_sub(card_width(column)) / 2);
    let mut lines = Vec::new();
    let mut rows = Vec::with_capacity(projects.len());

    for (index, project) in projects.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        let face = CardFace::from_flipped(state.flipped.contains(&index));
        let focused = state.focused_project == Some(index);
        let card = render_card(project, face, focused, column, styles);

        let start = lines.len();
        lines.extend(card.into_iter().map(|mut line| {
            if !indent.is_empty() {
                line.spans.insert(0, Span::raw(indent.clone()));
            }
            line
        }));
        rows.push(start..lines.len());
    }
    (lines, rows)
}

/// Footer: `© {year} {name}. {note}` centered between blank rows.
pub fn footer_lines(profile: &Profile, column: usize, styles: &PageStyles) -> Vec<Line<'static>> {
    let text = format!(
        "© {} {}. {}",
        profile.copyright_year(),
        profile.name,
        profile.footer_note()
    );
    let mut lines = vec![Line::default()];
    lines.extend(
        wrap_text(&text, column)
            .into_iter()
            .map(|line| centered(vec![Span::styled(line, styles.muted)], column)),
    );
    lines.push(Line::default());
    lines
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;

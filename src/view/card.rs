//! Project card rendering.
//!
//! A card is a rounded box. The front shows the title and description; the
//! back shows the details and the project link.

use super::constants::{CARD_MAX_WIDTH, CARD_MIN_WIDTH};
use super::styles::PageStyles;
use super::wrap::{pad_to_width, wrap_text};
use crate::model::Project;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Which side of a card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    /// Title and description.
    Front,
    /// Details and link.
    Back,
}

impl CardFace {
    /// Face for a card that is (or isn't) flipped.
    pub fn from_flipped(flipped: bool) -> Self {
        if flipped {
            CardFace::Back
        } else {
            CardFace::Front
        }
    }
}

/// Outer width of a card placed in a column `available` cells wide.
pub fn card_width(available: usize) -> usize {
    available.clamp(CARD_MIN_WIDTH, CARD_MAX_WIDTH)
}

/// Render one project card into left-aligned lines of equal width.
///
/// `available` is the column width; the card is clamped between
/// [`CARD_MIN_WIDTH`] and [`CARD_MAX_WIDTH`].
pub fn render_card(
    project: &Project,
    face: CardFace,
    focused: bool,
    available: usize,
    styles: &PageStyles,
) -> Vec<Line<'static>> {
    let width = card_width(available);
    let inner = width - 4;
    let border = if focused {
        styles.card_border_focused
    } else {
        styles.card_border
    };

    let body = match face {
        CardFace::Front => front_body(project, inner, styles),
        CardFace::Back => back_body(project, inner, styles),
    };

    let horizontal = "─".repeat(width - 2);
    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(Line::from(Span::styled(
        format!("╭{}╮", horizontal),
        border,
    )));
    for (text, style) in body {
        lines.push(Line::from(vec![
            Span::styled("│ ", border),
            Span::styled(pad_to_width(&text, inner), style),
            Span::styled(" │", border),
        ]));
    }
    lines.push(Line::from(Span::styled(
        format!("╰{}╯", horizontal),
        border,
    )));
    lines
}

fn front_body(project: &Project, inner: usize, styles: &PageStyles) -> Vec<(String, Style)> {
    let mut body: Vec<(String, Style)> = wrap_text(&project.title, inner)
        .into_iter()
        .map(|line| (line, styles.card_title))
        .collect();

    let description = wrap_text(&project.description, inner);
    if !description.is_empty() {
        body.push((String::new(), styles.body));
        body.extend(description.into_iter().map(|line| (line, styles.body)));
    }
    body
}

fn back_body(project: &Project, inner: usize, styles: &PageStyles) -> Vec<(String, Style)> {
    let mut body: Vec<(String, Style)> = wrap_text(&project.details, inner)
        .into_iter()
        .map(|line| (line, styles.body))
        .collect();

    if !project.link.trim().is_empty() {
        if !body.is_empty() {
            body.push((String::new(), styles.body));
        }
        body.extend(
            wrap_text(&format!("Link: {}", project.link.trim()), inner)
                .into_iter()
                .map(|line| (line, styles.link)),
        );
    }

    if body.is_empty() {
        body.push(("No details.".to_string(), styles.muted));
    }
    body
}

//! Source code pane rendering with syntax highlighting
//!
//! This module renders the source code pane, which displays the robot program
//! being executed with keyword highlighting and execution indicators.
//!
//! # Features
//!
//! - Highlighting for structure keywords, primitives and repeat counts
//! - Current line highlighting, with the executing token shown reversed
//! - Scroll state that keeps the current line at a fixed row while stepping
//! - Line numbering

use crate::parser::ast::SourceLocation;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Highlight one source line. `current_column` marks the token to emphasise.
fn highlight_source_line(line: &str, current_column: Option<usize>) -> Line<'_> {
    let mut spans = Vec::new();
    let mut word = String::new();
    let mut word_column = 0;

    for (idx, c) in line.chars().enumerate() {
        let column = idx + 1;
        if c.is_whitespace() {
            if !word.is_empty() {
                let is_current = current_column == Some(word_column);
                spans.push(styled_word(std::mem::take(&mut word), is_current));
            }
            spans.push(Span::raw(c.to_string()));
        } else {
            if word.is_empty() {
                word_column = column;
            }
            word.push(c);
        }
    }

    if !word.is_empty() {
        let is_current = current_column == Some(word_column);
        spans.push(styled_word(word, is_current));
    }

    Line::from(spans)
}

fn styled_word(word: String, is_current: bool) -> Span<'static> {
    let style = get_keyword_style(&word);
    if is_current {
        Span::styled(word, style.add_modifier(Modifier::REVERSED | Modifier::BOLD))
    } else {
        Span::styled(word, style)
    }
}

fn get_keyword_style(word: &str) -> Style {
    match word {
        "program" | "repeat" | "end" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        "go" | "right" | "left" => Style::default().fg(DEFAULT_THEME.primitive),
        _ if word.bytes().all(|b| b.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ => Style::default().fg(DEFAULT_THEME.error), // Not part of the language
    }
}

/// Scroll state for the source pane
#[derive(Debug, Default)]
pub struct SourceScrollState {
    pub offset: usize,
    pub target_line_row: Option<usize>,
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    current: SourceLocation,
    is_focused: bool,
    scroll_state: &mut SourceScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Program ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines: Vec<&str> = source_code.lines().collect();
    let total_lines = lines.len();
    let current_line = current.line;

    // Account for borders (2), min 1
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Start with the current line centered
    let target_row = scroll_state
        .target_line_row
        .unwrap_or(visible_height / 2)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    // Keep current line at the target visual row
    if current_line > 0 && current_line <= total_lines {
        scroll_state.offset = (current_line - 1).saturating_sub(target_row);

        if total_lines > visible_height {
            scroll_state.offset = scroll_state.offset.min(total_lines - visible_height);
        } else {
            scroll_state.offset = 0;
        }
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_current = line_num == current_line;
            let line_num_str = format!("{:4} ", line_num);

            let num_style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut content_line =
                highlight_source_line(line, is_current.then_some(current.column));

            if is_current {
                let bg = Style::default().bg(DEFAULT_THEME.current_line_bg);
                for span in &mut content_line.spans {
                    span.style = span.style.patch(bg);
                }
            }

            let mut final_spans = vec![Span::styled(line_num_str, num_style)];
            final_spans.extend(content_line.spans);

            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

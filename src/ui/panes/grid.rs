//! Grid pane rendering
//!
//! Draws the robot and the cells it has visited up to the current step.
//! The viewport keeps the whole trail in view while it fits and otherwise
//! follows the robot. Each cell is two terminal columns wide so the grid
//! looks roughly square.

use crate::robot::trail::{bounds, visit_counts};
use crate::robot::{Heading, Position, Robot};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// What occupies one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Origin,
    Visited,
    Revisited,
    Robot(Heading),
}

/// Lay out a `cols` x `rows` window of the grid, top row first.
pub fn grid_cells(robot: &Robot, trail: &[Position], cols: usize, rows: usize) -> Vec<Vec<Cell>> {
    if cols == 0 || rows == 0 {
        return Vec::new();
    }

    let center = match bounds(trail) {
        Some((lo, hi))
            if ((hi.x - lo.x) as usize) < cols && ((hi.y - lo.y) as usize) < rows =>
        {
            Position::new(lo.x + (hi.x - lo.x) / 2, lo.y + (hi.y - lo.y) / 2)
        }
        _ => robot.position,
    };

    let left = center.x - (cols / 2) as i64;
    let top = center.y + (rows / 2) as i64;
    let visits = visit_counts(trail);

    (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| {
                    let pos = Position::new(left + c as i64, top - r as i64);
                    if pos == robot.position {
                        Cell::Robot(robot.heading)
                    } else if pos == Position::ORIGIN {
                        Cell::Origin
                    } else {
                        match visits.get(&pos) {
                            Some(1) => Cell::Visited,
                            Some(_) => Cell::Revisited,
                            None => Cell::Empty,
                        }
                    }
                })
                .collect()
        })
        .collect()
}

fn cell_span(cell: Cell) -> Span<'static> {
    match cell {
        Cell::Empty => Span::styled("· ", Style::default().fg(DEFAULT_THEME.current_line_bg)),
        Cell::Origin => Span::styled("+ ", Style::default().fg(DEFAULT_THEME.secondary)),
        Cell::Visited => Span::styled("■ ", Style::default().fg(DEFAULT_THEME.trail)),
        Cell::Revisited => Span::styled("■ ", Style::default().fg(DEFAULT_THEME.trail_revisited)),
        Cell::Robot(heading) => Span::styled(
            format!("{} ", heading.arrow()),
            Style::default()
                .fg(DEFAULT_THEME.robot)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

/// Render the grid pane
pub fn render_grid_pane(
    frame: &mut Frame,
    area: Rect,
    robot: &Robot,
    trail: &[Position],
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" Robot {} ", robot))
        .borders(Borders::ALL)
        .border_style(border_style);

    let cols = (area.width.saturating_sub(2) / 2) as usize;
    let rows = area.height.saturating_sub(2) as usize;

    let lines: Vec<Line> = grid_cells(robot, trail, cols, rows)
        .into_iter()
        .map(|row| Line::from(row.into_iter().map(cell_span).collect::<Vec<_>>()))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use blockfall::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use blockfall::game::{color_for_id, ColorKey, Snapshot};

pub fn ui(f: &mut Frame, snapshot: &Snapshot) {
    let size = f.size();

    let board_height = BOARD_HEIGHT as u16 + 2; // rows + borders
    let board_width = BOARD_WIDTH as u16 * 2 + 2; // 2 chars per cell + borders

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_height),
            Constraint::Min(1),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_width),
            Constraint::Length(20), // Info panel
            Constraint::Min(1),
        ])
        .split(vertical_chunks[1]);

    let board_area = horizontal_chunks[1];
    let info_area = horizontal_chunks[2];

    render_board(f, snapshot, board_area);
    render_info(f, snapshot, info_area);

    if snapshot.over {
        render_game_over_overlay(f, snapshot, board_area);
    }
}

pub fn terminal_color(key: ColorKey) -> Color {
    match key {
        ColorKey::Cyan => Color::Cyan,
        ColorKey::Yellow => Color::Yellow,
        ColorKey::Purple => Color::Magenta,
        ColorKey::Green => Color::Green,
        ColorKey::Red => Color::Red,
        ColorKey::Blue => Color::Blue,
        ColorKey::Orange => Color::Rgb(255, 165, 0),
        ColorKey::Gray => Color::DarkGray,
    }
}

fn render_board(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let mut board_lines = Vec::with_capacity(BOARD_HEIGHT);

    for row in 0..BOARD_HEIGHT {
        let mut line_spans = Vec::with_capacity(BOARD_WIDTH);
        for col in 0..BOARD_WIDTH {
            let id = snapshot.cell_id(row, col);
            if id == 0 {
                if (row + col) % 2 == 0 {
                    line_spans.push(Span::styled("░░", Style::default().fg(Color::DarkGray)));
                } else {
                    line_spans.push(Span::raw("  "));
                }
            } else {
                let color = terminal_color(color_for_id(id));
                line_spans.push(Span::styled("██", Style::default().fg(color)));
            }
        }
        board_lines.push(Line::from(line_spans));
    }

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default().borders(Borders::ALL).title("blockfall"));

    f.render_widget(board_widget, area);
}

fn render_info(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),  // Score
            Constraint::Length(10), // Controls
            Constraint::Min(1),
        ])
        .split(area);

    let score_text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(
            format!("Score: {}", snapshot.score),
            Style::default().fg(Color::Cyan),
        )]),
        Line::from(vec![Span::raw("")]),
    ];
    let score_widget = Paragraph::new(score_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(score_widget, chunks[0]);

    let controls_text = vec![
        Line::from(vec![Span::raw("← →  move")]),
        Line::from(vec![Span::raw("↓    down")]),
        Line::from(vec![Span::raw("↑ Spc rotate")]),
        Line::from(vec![Span::raw("R    restart")]),
        Line::from(vec![Span::raw("Q    quit")]),
    ];
    let controls_widget = Paragraph::new(controls_text)
        .block(Block::default().borders(Borders::ALL).title("Keys"));
    f.render_widget(controls_widget, chunks[1]);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_game_over_overlay(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let popup_area = centered_rect(90, 50, area);
    f.render_widget(Clear, popup_area);

    let over_text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("GAME OVER", Style::default().fg(Color::Red))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw(format!("Score: {}", snapshot.score))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("R to restart")]),
        Line::from(vec![Span::raw("Q to quit")]),
    ];

    let over_widget = Paragraph::new(over_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(over_widget, popup_area);
}

use crate::quiz::{KEYPAD_COLS, KEYPAD_LAYOUT};
use crate::ui::app::{App, Screen};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_column, layout_regions};
use crate::ui::quiz::QuizScreen;
use crate::ui::setup::{SetupField, SetupState};
use crate::ui::theme::{
    ACCENT, DISABLED_TEXT, GLOBAL_BORDER, HEADER_TEXT, INPUT_BACKGROUND, KEY_FACE, STATUS_OK,
};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const COLUMN_WIDTH: u16 = 40;
const KEY_WIDTH: u16 = 7;
const KEY_HEIGHT: u16 = 3;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.screen()), header);
    frame.render_widget(Clear, body);
    let column = centered_column(COLUMN_WIDTH, body);
    match app.screen() {
        Screen::Setup(state) => draw_setup(frame, state, column),
        Screen::Quiz(quiz) => draw_quiz(frame, quiz, column),
    }
    frame.render_widget(Footer::new().widget(app.screen(), footer), footer);
}

fn draw_setup(frame: &mut Frame<'_>, state: &SetupState, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from("Multiplication Table")).style(section_style()),
        rows[0],
    );
    frame.render_widget(
        stepper(
            format!("Table: {}", state.table),
            state.focused == SetupField::Table,
        ),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new(Line::from("Number of Questions")).style(section_style()),
        rows[2],
    );
    frame.render_widget(
        stepper(
            format!("Questions: {}", state.question_count),
            state.focused == SetupField::Questions,
        ),
        rows[3],
    );
    frame.render_widget(
        button("Start Quiz", state.focused == SetupField::Start, true),
        rows[5],
    );
}

fn draw_quiz(frame: &mut Frame<'_>, quiz: &QuizScreen, area: Rect) {
    let session = quiz.session();
    let keypad_height = KEY_HEIGHT * KEYPAD_LAYOUT.len() as u16;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(keypad_height),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let centered = |text: String, style: Style| {
        Paragraph::new(Line::from(text))
            .style(style)
            .alignment(Alignment::Center)
    };
    let bold = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);

    frame.render_widget(centered(format!("Score: {}", session.score()), bold), rows[0]);
    frame.render_widget(
        centered(
            format!(
                "Question {} of {}",
                session.current_question(),
                session.config().question_count()
            ),
            Style::default().fg(HEADER_TEXT),
        ),
        rows[1],
    );
    frame.render_widget(
        centered(
            format!(
                "{} × {} = ?",
                session.first_operand(),
                session.second_operand()
            ),
            bold,
        ),
        rows[3],
    );

    let input = if session.input().is_empty() {
        Paragraph::new(Line::from("Your answer")).style(Style::default().fg(DISABLED_TEXT))
    } else {
        Paragraph::new(Line::from(session.input().to_string())).style(bold)
    };
    frame.render_widget(
        input.alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER))
                .style(Style::default().bg(INPUT_BACKGROUND)),
        ),
        rows[4],
    );

    draw_keypad(frame, quiz, rows[5]);

    let finished = quiz.final_score();
    frame.render_widget(button("Submit", finished.is_none(), finished.is_none()), rows[6]);

    if let Some(score) = finished {
        frame.render_widget(
            centered(
                format!("Final Score: {}", score),
                Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
            ),
            rows[7],
        );
        frame.render_widget(
            centered("Press Enter for a New Game".to_string(), Style::default().fg(ACCENT)),
            rows[8],
        );
    }
}

fn draw_keypad(frame: &mut Frame<'_>, quiz: &QuizScreen, area: Rect) {
    let grid = centered_column(KEY_WIDTH * KEYPAD_COLS as u16, area);
    let enabled = quiz.final_score().is_none();
    let cursor = quiz.keypad().cursor();

    for (row, keys) in KEYPAD_LAYOUT.iter().enumerate() {
        for (col, key) in keys.iter().enumerate() {
            let cell = Rect {
                x: grid.x + col as u16 * KEY_WIDTH,
                y: grid.y + row as u16 * KEY_HEIGHT,
                width: KEY_WIDTH,
                height: KEY_HEIGHT,
            };
            if cell.bottom() > area.bottom() || cell.right() > area.right() {
                continue;
            }
            let style = if !enabled {
                Style::default().fg(DISABLED_TEXT)
            } else if cursor == (row, col) {
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(HEADER_TEXT).bg(KEY_FACE)
            };
            frame.render_widget(
                Paragraph::new(Line::from(key.label()))
                    .alignment(Alignment::Center)
                    .style(style)
                    .block(Block::default().borders(Borders::ALL).border_style(style)),
                cell,
            );
        }
    }
}

fn section_style() -> Style {
    Style::default()
        .fg(HEADER_TEXT)
        .add_modifier(Modifier::DIM | Modifier::BOLD)
}

fn stepper(label: String, focused: bool) -> Paragraph<'static> {
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    Paragraph::new(Line::from(format!(" {}   [-] [+]", label)))
        .style(Style::default().fg(HEADER_TEXT))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
}

fn button(label: &'static str, focused: bool, enabled: bool) -> Paragraph<'static> {
    let style = match (enabled, focused) {
        (false, _) => Style::default().fg(DISABLED_TEXT),
        (true, true) => Style::default()
            .fg(HEADER_TEXT)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(ACCENT),
    };
    Paragraph::new(Line::from(label))
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style))
}

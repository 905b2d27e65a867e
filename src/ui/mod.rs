pub mod game_common;
pub mod game_scene;

use crate::core::game_state::{GamePhase, GameState};
use game_common::{
    create_game_layout, render_game_over_banner, render_info_panel_frame, render_status_bar,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const CONTROLS: [(&str, &str); 2] = [("[Space]", "Flap/Restart"), ("[Esc/q]", "Quit")];

/// Draw one frame of the game.
pub fn draw(frame: &mut Frame, state: &GameState, tick_index: u64) {
    let layout = create_game_layout(frame, frame.size(), " Flappy ", Color::Cyan, 22);

    game_scene::render_play_area(frame, layout.content, state, tick_index);

    let (status, color) = status_message(state);
    render_status_bar(frame, layout.status_bar, &status, color, &CONTROLS);
    render_info_panel(frame, layout.info_panel, state);

    if state.phase == GamePhase::GameOver {
        render_game_over_banner(frame, layout.content, "SKILL ISSUE", "Press SPACE");
    }
}

/// Status line text and color for the current phase.
pub fn status_message(state: &GameState) -> (String, Color) {
    match state.phase {
        GamePhase::Playing => (format!("Score: {}", state.score.value()), Color::Green),
        GamePhase::GameOver => {
            let cause = state
                .last_collision
                .map(|c| c.describe())
                .unwrap_or("crashed");
            (
                format!("Score: {} ({})", state.score.value(), cause),
                Color::Red,
            )
        }
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, state: &GameState) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                state.score.value().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Round: ", label),
            Span::styled(state.rounds.to_string(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Pipes: ", label),
            Span::styled(state.pipes.len().to_string(), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled(" Speed: ", label),
            Span::styled(
                format!("{:+.2}", state.bird.velocity),
                Style::default().fg(Color::Yellow),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

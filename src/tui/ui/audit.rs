use crate::deck::DECK_SIZE;
use crate::fairness;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};
use super::table::{draw_fairness_header, draw_hand, short_card};

const DECK_ROW: usize = 13;

pub(super) fn draw_audit(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // commitment / seed
            Constraint::Length(6), // hand
            Constraint::Length(4), // verification
            Constraint::Length((DECK_SIZE / DECK_ROW) as u16 + 2),
            Constraint::Min(3),
        ])
        .split(size);

    draw_fairness_header(f, app, chunks[0], "Audit");
    draw_hand(f, app, chunks[1]);
    draw_verification(f, app, chunks[2]);
    draw_deck(f, app, chunks[3]);

    let mut status = vec![Line::from(match (app.round_state(), app.result()) {
        (_, Some(c)) => format!("Result: {c} ({}x). S to audit another seed.", c.payout()),
        (Some(_), None) => "Toggle holds with 1-5, then Enter to draw.".to_string(),
        (None, None) => "Press S to enter a seed.".to_string(),
    })];
    if let Some(err) = app.action_error() {
        status.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    let para = Paragraph::new(status)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Status").borders(Borders::ALL));
    f.render_widget(para, chunks[4]);

    if let Some(text) = app.seed_entry_text() {
        draw_seed_entry(f, text);
    }
}

fn draw_verification(f: &mut Frame, app: &AppState, area: Rect) {
    let dim = Style::default().add_modifier(Modifier::DIM);
    let ok = Style::default().fg(Color::Green);
    let bad = Style::default().fg(Color::Red);
    let lines = match (app.dealer.as_ref(), app.revealed_seed()) {
        (Some(dealer), Some(seed)) => {
            let commit_ok = fairness::verify(seed, dealer.commitment());
            let replayed = fairness::replay(seed);
            let deck_ok = dealer
                .revealed_deck()
                .map(|d| d.cards() == replayed.deck.cards())
                .unwrap_or(false);
            vec![
                check_line("SHA-256(seed) matches commitment", commit_ok, ok, bad),
                check_line("Replayed shuffle matches dealt deck", deck_ok, ok, bad),
            ]
        }
        _ => vec![Line::from(Span::styled("Available after the draw", dim))],
    };
    let para = Paragraph::new(lines).block(Block::default().title("Verify").borders(Borders::ALL));
    f.render_widget(para, area);
}

fn check_line(label: &str, passed: bool, ok: Style, bad: Style) -> Line<'static> {
    let (mark, style) = if passed { ("✔", ok) } else { ("✘", bad) };
    Line::from(vec![Span::styled(format!("{mark} "), style), Span::raw(label.to_string())])
}

/// Whole shuffled order; cards that reached the player are underlined.
fn draw_deck(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default().title("Deck").borders(Borders::ALL);
    let deck = app
        .dealer
        .as_ref()
        .filter(|_| app.round_complete())
        .and_then(|d| d.revealed_deck().ok());
    let Some(deck) = deck else {
        let para = Paragraph::new(Line::from(Span::styled(
            "Hidden until the round ends",
            Style::default().add_modifier(Modifier::DIM),
        )))
        .block(block);
        f.render_widget(para, area);
        return;
    };
    let lines: Vec<Line> = deck
        .cards()
        .chunks(DECK_ROW)
        .enumerate()
        .map(|(row, cards)| {
            let mut spans = Vec::with_capacity(cards.len() * 2);
            for (col, &card) in cards.iter().enumerate() {
                let span = short_card(card);
                if row * DECK_ROW + col < deck.cursor() {
                    spans.push(span.underlined().bold());
                } else {
                    spans.push(span.dim());
                }
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_seed_entry(f: &mut Frame, text: &str) {
    let area = centered_rect(60, 20, f.area());
    let block = Block::default().title("Seed (Enter = deal, blank = random)").borders(Borders::ALL);
    let lines = vec![
        Line::from(vec![Span::raw(text.to_string()), Span::styled("_", Style::default().fg(Color::Yellow))]),
        Line::from(Span::styled(
            format!("{}/{} • Esc cancel", text.chars().count(), AppState::MAX_SEED_LEN),
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines), inner(area));
}

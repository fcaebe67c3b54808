use crate::cards::{Card, Rank, Suit};
use crate::dealer::RoundState;
use crate::evaluator::Category;
use crate::hand::HAND_SIZE;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, columns, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),                        // commitment / seed
            Constraint::Length(Category::ALL.len() as u16 + 2), // paytable
            Constraint::Length(6),                        // hand
            Constraint::Min(4),                           // status bar
        ])
        .split(size);

    draw_fairness_header(f, app, chunks[0], "Jacks or Better");
    draw_paytable(f, app, chunks[1]);
    draw_hand(f, app, chunks[2]);

    let status_area = chunks[3];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner(status_area));

    let mut left_info = vec![Line::from(status_line(app))];
    if let Some(err) = app.action_error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    let right_keys = vec![Line::from("Space deal/draw • 1-5 hold"), Line::from("? help • M menu")];
    f.render_widget(Paragraph::new(left_info).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );

    if app.help_open() {
        draw_help(f);
    }
}

fn status_line(app: &AppState) -> String {
    if app.revealing() {
        return "Dealing…".to_string();
    }
    match (app.round_state(), app.result()) {
        (None, _) => "Press Space to deal.".to_string(),
        (Some(RoundState::Dealt), _) => "Choose holds with 1-5, then Space to draw.".to_string(),
        (_, Some(c)) if c.is_winning() => format!("{c}! Pays {}x. Space for a new round.", c.payout()),
        (_, Some(c)) => format!("{c}. No win. Space for a new round."),
        _ => String::new(),
    }
}

/// Commitment is always shown; the seed only once the round is over.
pub(super) fn draw_fairness_header(f: &mut Frame, app: &AppState, area: Rect, title: &str) {
    let dim = Style::default().add_modifier(Modifier::DIM);
    let commitment = app
        .dealer
        .as_ref()
        .map(|d| Span::raw(d.commitment().to_hex()))
        .unwrap_or_else(|| Span::styled("--", dim));
    let seed = match (app.revealed_seed(), app.dealer.is_some()) {
        (Some(s), _) => Span::styled(s.to_string(), Style::default().fg(Color::Green)),
        (None, true) => Span::styled("hidden until the round ends", dim),
        (None, false) => Span::styled("--", dim),
    };
    let lines = vec![
        Line::from(vec![Span::raw("Commitment: "), commitment]),
        Line::from(vec![Span::raw("Seed:       "), seed]),
    ];
    let para = Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(para, area);
}

fn draw_paytable(f: &mut Frame, app: &AppState, area: Rect) {
    let result = app.result();
    // winning row blinks
    let blink_on = (app.started.elapsed().as_millis() / 500) % 2 == 0;
    let lines: Vec<Line> = Category::ALL
        .iter()
        .map(|&c| {
            let text = format!("{:<18}{:>5}", c.label(), c.payout());
            let style = if result == Some(c) && c.is_winning() {
                let base = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
                if blink_on {
                    base.add_modifier(Modifier::REVERSED)
                } else {
                    base
                }
            } else if result == Some(c) {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(text, style))
        })
        .collect();
    let para = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title("Paytable").borders(Borders::ALL));
    f.render_widget(para, area);
}

pub(super) fn draw_hand(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default().title("Hand").borders(Borders::ALL);
    f.render_widget(block, area);
    let slots = columns(inner(area), HAND_SIZE as u16);
    let dealer = app.dealer.as_ref();
    for (i, slot) in slots.iter().enumerate() {
        let card = dealer.and_then(|d| d.hand()).and_then(|h| h.get(i));
        let held = dealer.map(|d| d.held().is_held(i)).unwrap_or(false);
        let face = if app.card_visible(i) { card } else { None };
        let border = if held { Some(Color::Cyan) } else { None };
        let title = if held { "HELD" } else { "" };
        render_card_widget(f, *slot, face, card.is_some(), border, title);
    }
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 60, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Play:", bold)),
        Line::from("- Space / Enter: deal a new round, or draw"),
        Line::from("- 1-5: hold / release a card"),
        Line::from(""),
        Line::from(Span::styled("Audit:", bold)),
        Line::from("- S or /: enter a seed (blank = random)"),
        Line::from("- Enter: draw, then the full deck is shown"),
        Line::from(""),
        Line::from(Span::styled("Fairness:", bold)),
        Line::from("- Commitment = SHA-256(seed), shown before the deal"),
        Line::from("- The seed is revealed after the draw"),
        Line::from(""),
        Line::from("- M: menu • Q: quit (menu)"),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

pub(super) fn suit_glyph_and_style(s: Suit) -> (char, Style) {
    match s {
        Suit::Hearts => ('♥', Style::default().fg(Color::Red)),
        Suit::Diamonds => ('♦', Style::default().fg(Color::Red)),
        Suit::Spades => ('♠', Style::default().fg(Color::White)),
        Suit::Clubs => ('♣', Style::default().fg(Color::White)),
    }
}

fn rank_label(r: Rank) -> &'static str {
    match r {
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
        other => other.name(),
    }
}

pub(super) fn short_card(c: Card) -> Span<'static> {
    let (sg, style) = suit_glyph_and_style(c.suit());
    Span::styled(format!("{}{}", rank_label(c.rank()), sg), style)
}

/// Face-up card, face-down back (`dealt` but hidden), or an empty slot.
fn render_card_widget(
    f: &mut Frame,
    area: Rect,
    face: Option<Card>,
    dealt: bool,
    border: Option<Color>,
    title: &str,
) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .title_alignment(Alignment::Center);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = match face {
        Some(c) => Line::from(short_card(c)),
        None if dealt => Line::from(Span::styled("▒▒", Style::default().fg(Color::Blue))),
        None => Line::from("[  ]"),
    };
    f.render_widget(Paragraph::new(content).alignment(Alignment::Center), inner);
}

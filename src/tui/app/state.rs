use crate::dealer::{Dealer, DealerError, RoundState};
use crate::evaluator::Category;
use crate::hand::HAND_SIZE;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    /// Normal play with a random seed per round.
    Play,
    /// Replay a round from a typed seed and inspect the whole deck.
    Audit,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    /// Deal a new round, or replace when cards are already dealt.
    DealOrDraw,
    ToggleHold(usize),
    SeedOpen,
    SeedChar(char),
    SeedBackspace,
    SeedSubmit,
    SeedCancel,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub started: Instant,
    // Current round; replaced wholesale on every deal
    pub dealer: Option<Dealer>,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_reveal_delay_ms: u64,
    pub cfg_start_scene: Scene,
    pub reveal_delay_ms: u64,
    pub(crate) return_scene: Scene,
    revealed: [bool; HAND_SIZE],
    reveal_queue: VecDeque<usize>,
    last_reveal: Instant,
    shown_seed: Option<String>,
    help_open: bool,
    seed_entry: Option<String>,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        let default_delay = 400;
        Self {
            scene: Scene::Menu,
            started: Instant::now(),
            dealer: None,
            menu_index: 0,
            cfg_reveal_delay_ms: default_delay,
            cfg_start_scene: Scene::Play,
            reveal_delay_ms: default_delay,
            return_scene: Scene::Play,
            revealed: [false; HAND_SIZE],
            reveal_queue: VecDeque::new(),
            last_reveal: Instant::now(),
            shown_seed: None,
            help_open: false,
            seed_entry: None,
            action_error: None,
            action_error_at: None,
        }
    }
}

impl AppState {
    pub const MAX_SEED_LEN: usize = 64;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    fn set_action_error(&mut self, err: impl ToString) {
        self.action_error = Some(err.to_string());
        self.action_error_at = Some(Instant::now());
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    pub fn seed_entry_active(&self) -> bool {
        self.seed_entry.is_some()
    }

    pub fn seed_entry_text(&self) -> Option<&str> {
        self.seed_entry.as_deref()
    }

    /// Cards still waiting to be turned face up.
    pub fn revealing(&self) -> bool {
        !self.reveal_queue.is_empty()
    }

    pub fn card_visible(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn round_state(&self) -> Option<RoundState> {
        self.dealer.as_ref().map(Dealer::state)
    }

    /// Round replaced and every card shown.
    pub fn round_complete(&self) -> bool {
        self.round_state() == Some(RoundState::Replaced) && !self.revealing()
    }

    /// Final category, shown once the last card is face up.
    pub fn result(&self) -> Option<Category> {
        if !self.round_complete() {
            return None;
        }
        self.dealer.as_ref().and_then(Dealer::evaluation)
    }

    /// Seed of the finished round; hidden while the round is live.
    pub fn revealed_seed(&self) -> Option<&str> {
        if !self.round_complete() {
            return None;
        }
        self.shown_seed.as_deref()
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene != Scene::Menu {
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::DealOrDraw => self.deal_or_draw(),
            InputAction::ToggleHold(idx) => self.toggle_hold(idx),
            InputAction::SeedOpen => self.open_seed_entry(),
            InputAction::SeedChar(c) => {
                self.seed_entry_push(c);
                false
            }
            InputAction::SeedBackspace => {
                if let Some(buf) = self.seed_entry.as_mut() {
                    buf.pop();
                }
                false
            }
            InputAction::SeedSubmit => self.seed_entry_submit(),
            InputAction::SeedCancel => {
                self.seed_entry = None;
                false
            }
        }
    }

    /// Space in play: start a round when idle, otherwise draw replacements.
    pub fn deal_or_draw(&mut self) -> bool {
        if self.scene == Scene::Menu || self.revealing() || self.seed_entry_active() {
            return false;
        }
        match self.round_state() {
            Some(RoundState::Dealt) => self.draw(),
            _ if self.scene == Scene::Audit => self.open_seed_entry(),
            _ => self.new_round(None),
        }
    }

    /// Start a fresh round and deal five cards face down for sequential reveal.
    pub fn new_round(&mut self, seed: Option<&str>) -> bool {
        let mut dealer = match Dealer::new(seed) {
            Ok(d) => d,
            Err(err) => {
                self.set_action_error(err);
                return false;
            }
        };
        if let Err(err) = dealer.deal() {
            self.set_action_error(err);
            return false;
        }
        self.dealer = Some(dealer);
        self.shown_seed = None;
        self.revealed = [false; HAND_SIZE];
        self.reveal_queue = (0..HAND_SIZE).collect();
        self.last_reveal = Instant::now();
        self.clear_action_error();
        true
    }

    fn draw(&mut self) -> bool {
        let Some(dealer) = self.dealer.as_mut() else {
            return false;
        };
        let unheld: Vec<usize> = dealer.held().unheld().collect();
        if let Err(err) = finish_round(dealer) {
            self.set_action_error(err);
            return false;
        }
        if self.scene == Scene::Audit {
            self.reveal_all();
        } else {
            for &i in &unheld {
                self.revealed[i] = false;
            }
            self.reveal_queue = unheld.into();
            self.last_reveal = Instant::now();
            self.settle_round();
        }
        self.clear_action_error();
        true
    }

    pub fn toggle_hold(&mut self, idx: usize) -> bool {
        if self.scene == Scene::Menu || self.revealing() {
            return false;
        }
        let Some(dealer) = self.dealer.as_mut() else {
            return false;
        };
        if dealer.state() != RoundState::Dealt {
            return false;
        }
        match dealer.toggle_held(idx) {
            Ok(_) => true,
            Err(err) => {
                self.set_action_error(err);
                false
            }
        }
    }

    fn open_seed_entry(&mut self) -> bool {
        if self.scene != Scene::Audit || self.round_state() == Some(RoundState::Dealt) {
            return false;
        }
        self.seed_entry = Some(String::new());
        true
    }

    fn seed_entry_push(&mut self, c: char) {
        if let Some(buf) = self.seed_entry.as_mut() {
            if buf.chars().count() < Self::MAX_SEED_LEN && !c.is_control() {
                buf.push(c);
            }
        }
    }

    /// Start an audit round from the typed seed; blank means random.
    fn seed_entry_submit(&mut self) -> bool {
        let Some(seed) = self.seed_entry.take() else {
            return false;
        };
        if !self.new_round(Some(&seed)) {
            return false;
        }
        self.reveal_all();
        true
    }

    fn reveal_all(&mut self) {
        self.reveal_queue.clear();
        self.revealed = [true; HAND_SIZE];
        self.settle_round();
    }

    /// Take the seed out of the dealer once the last card is face up.
    fn settle_round(&mut self) {
        if self.shown_seed.is_some() || !self.round_complete() {
            return;
        }
        self.shown_seed =
            self.dealer.as_ref().and_then(|d| d.reveal_seed().ok()).map(str::to_owned);
    }

    /// Periodic tick: turn the next card face up and expire stale errors.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
        if self.last_reveal.elapsed() < Duration::from_millis(self.reveal_delay_ms) {
            return;
        }
        if let Some(i) = self.reveal_queue.pop_front() {
            self.revealed[i] = true;
            self.last_reveal = Instant::now();
            self.settle_round();
        }
    }
}

fn finish_round(dealer: &mut Dealer) -> Result<Category, DealerError> {
    dealer.replace()?;
    dealer.evaluate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_ignored_while_cards_are_turning() {
        let mut app = AppState::default();
        app.apply_menu();
        assert!(app.new_round(Some("tick-test")));
        assert!(app.revealing());
        assert!(!app.toggle_hold(0));
        app.reveal_delay_ms = 0;
        for _ in 0..HAND_SIZE {
            app.on_tick();
        }
        assert!(!app.revealing());
        assert!(app.toggle_hold(0));
        assert!(app.dealer.as_ref().unwrap().held().is_held(0));
    }
}

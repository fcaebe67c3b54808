use super::{AppState, Scene};

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    RevealDelayMs,
    StartScene,
}

const MENU_ITEMS: [MenuItem; 2] = [MenuItem::RevealDelayMs, MenuItem::StartScene];

const MAX_REVEAL_DELAY_MS: u64 = 2000;

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::RevealDelayMs => format!("Reveal Delay (ms): {}", app.cfg_reveal_delay_ms),
            MenuItem::StartScene => format!("Mode: {}", AppState::scene_label(app.cfg_start_scene)),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::RevealDelayMs => {
                app.cfg_reveal_delay_ms =
                    app.cfg_reveal_delay_ms.saturating_add(100).min(MAX_REVEAL_DELAY_MS);
            }
            MenuItem::StartScene => app.cfg_start_scene = Self::other_mode(app.cfg_start_scene),
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::RevealDelayMs => {
                app.cfg_reveal_delay_ms = app.cfg_reveal_delay_ms.saturating_sub(100);
            }
            MenuItem::StartScene => app.cfg_start_scene = Self::other_mode(app.cfg_start_scene),
        }
    }

    fn other_mode(scene: Scene) -> Scene {
        match scene {
            Scene::Audit => Scene::Play,
            _ => Scene::Audit,
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn scene_label(scene: Scene) -> &'static str {
        match scene {
            Scene::Menu => "Menu",
            Scene::Play => "Play",
            Scene::Audit => "Audit",
        }
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        if self.seed_entry_active() || self.revealing() {
            return;
        }
        match self.scene {
            Scene::Menu => self.scene = self.return_scene,
            _ => self.open_menu(),
        }
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.menu_index = 0;
        self.return_scene = self.scene;
        self.cfg_reveal_delay_ms = self.reveal_delay_ms;
        self.cfg_start_scene = if self.scene == Scene::Menu { Scene::Play } else { self.scene };
        self.scene = Scene::Menu;
    }

    /// Apply settings. Switching mode abandons the round in progress.
    pub fn apply_menu(&mut self) {
        self.reveal_delay_ms = self.cfg_reveal_delay_ms.min(MAX_REVEAL_DELAY_MS);
        if self.cfg_start_scene != self.return_scene {
            self.dealer = None;
        }
        self.scene = match self.cfg_start_scene {
            Scene::Audit => Scene::Audit,
            _ => Scene::Play,
        };
        self.return_scene = self.scene;
    }

    pub fn cancel_menu(&mut self) {
        self.scene = self.return_scene;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}

mod audit;
mod layout;
mod menu;
mod table;

use crate::tui::app::{AppState, Scene};
use ratatui::prelude::Frame;

pub fn draw(f: &mut Frame, app: &AppState) {
    match app.scene {
        Scene::Menu => menu::draw_menu(f, app),
        Scene::Play => table::draw_table(f, app),
        Scene::Audit => audit::draw_audit(f, app),
    }
}

mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, hint_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // CABECERA DE PROGRESO (todo menos el informe)
        if self.state() != AppState::Results {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Aviso mientras la página no esté completa
        if self.state() == AppState::Questions && !self.is_page_complete() {
            hint_panel(ctx);
        }

        // Dispatch por estado a las vistas
        match self.state() {
            AppState::Intro => views::intro::ui_intro(self, ctx),
            AppState::ChapterCover => views::chapter_cover::ui_chapter_cover(self, ctx),
            AppState::Questions => views::questions::ui_questions(self, ctx),
            AppState::Results => views::results::ui_results(self, ctx),
        }

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }
    }
}

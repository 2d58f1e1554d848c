use crate::QuizApp;
use crate::ui::helpers::{ACCEPT_GREEN, big_button};
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

pub fn ui_chapter_cover(app: &mut QuizApp, ctx: &Context) {
    // Sin capítulo válido no hay portada que pintar
    let (title, description, count) = match app.current_chapter() {
        Some(ch) => (ch.title.clone(), ch.description.clone(), ch.questions.len()),
        None => return,
    };

    centered_panel(ctx, 240.0, 560.0, |ui| {
        ui.label(RichText::new("NUEVO CAPÍTULO").color(ACCEPT_GREEN).strong());
        ui.add_space(12.0);
        ui.heading(RichText::new(title).size(30.0).strong());
        ui.add_space(12.0);
        ui.label(RichText::new(description).size(16.0).weak());
        ui.label(RichText::new(format!("{count} preguntas")).small().weak());
        ui.add_space(28.0);

        let btn_w = (ui.available_width() * 0.5).clamp(160.0, 280.0);
        if big_button(ui, "Entrar en el capítulo", btn_w, 40.0, true) {
            app.entrar_en_capitulo();
        }
    });
}

use crate::QuizApp;
use crate::ui::helpers::big_button;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

pub fn ui_intro(app: &mut QuizApp, ctx: &Context) {
    let total = app.total_questions();
    let chapters = app.catalog.chapters().len();

    centered_panel(ctx, 260.0, 560.0, |ui| {
        ui.heading(RichText::new("Explora tus preferencias").size(34.0).strong());
        ui.add_space(18.0);
        ui.label(
            RichText::new(format!(
                "Un recorrido por la intimidad, el deseo y los límites. \
                 Con {total} preguntas repartidas en {chapters} capítulos \
                 dibujaremos tu propio mapa de preferencias."
            ))
            .size(16.0)
            .weak(),
        );
        ui.add_space(28.0);

        let btn_w = (ui.available_width() * 0.6).clamp(160.0, 320.0);
        if big_button(ui, "Empezar la exploración", btn_w, 44.0, true) {
            app.empezar_cuestionario();
        }
    });
}

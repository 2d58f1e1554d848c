use crate::QuizApp;
use crate::model::AppState;
use egui::{CentralPanel, Context, Frame, ProgressBar, RichText, ScrollArea, Ui, Visuals};

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    let info = app.progress_info();
    let can_restart = matches!(app.state(), AppState::ChapterCover | AppState::Questions);

    egui::TopBottomPanel::top("progress_panel").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.add(ProgressBar::new(info.fraction()).desired_height(6.0));
        ui.horizontal(|ui| {
            if can_restart && ui.button("🔄 Borrar respuestas y reiniciar").clicked() {
                app.empezar_de_nuevo();
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(info.label()).small().weak());
            });
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Modo oscuro").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀Modo claro").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

pub fn hint_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("hint_panel").show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Elige cuánto aceptas cada opción para continuar")
                    .weak()
                    .italics(),
            );
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    // Ajusta anchura
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    ui.vertical_centered(inner);
                });
        });
        ui.add_space(extra);
    });
}

/// Panel con scroll vertical para las vistas largas (preguntas e informe)
pub fn scroll_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_max_width(w);
                    inner(ui);
                });
            });
    });
}

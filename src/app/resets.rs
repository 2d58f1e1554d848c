use super::*;

impl QuizApp {
    /// Vuelve a la bienvenida y borra todas las respuestas. Siempre, desde cualquier estado.
    pub fn reset(&mut self) {
        log::info!(
            "Reinicio desde {:?} ({} respuestas descartadas)",
            self.state(),
            self.session.answers.len()
        );
        self.session = Session::default();
        self.confirm_reset = false;
        self.message.clear();
    }

    /// Pide confirmación si ya hay respuestas; si no, reinicia directamente
    pub fn empezar_de_nuevo(&mut self) {
        if self.session.answers.is_empty() {
            self.reset();
        } else {
            self.confirm_reset = true;
        }
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Confirmar reinicio")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("¿Seguro que quieres borrar todas tus respuestas? ¡Esta acción no se puede deshacer!");
                ui.horizontal(|ui| {
                    if ui.button("Sí, borrar").clicked() {
                        self.reset();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}

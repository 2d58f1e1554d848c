use crate::QuizApp;
use crate::model::{QuestionId, Score};
use crate::ui::helpers::{ACCEPT_GREEN, big_button, likert_scale};
use crate::ui::layout::scroll_panel;
use egui::{Color32, Context, RichText};

pub fn ui_questions(app: &mut QuizApp, ctx: &Context) {
    let cards = app.question_cards();
    let dots = app.page_dots();
    let chapter_title = app
        .current_chapter()
        .map(|c| c.title.clone())
        .unwrap_or_default();
    let complete = app.is_page_complete();
    let next_label = app.advance_label();
    let message = app.message.clone();

    let mut answered: Option<(QuestionId, Score)> = None;
    let mut next_clicked = false;

    scroll_panel(ctx, 760.0, |ui| {
        ui.add_space(16.0);
        ui.label(RichText::new(chapter_title.to_uppercase()).small().strong().weak());

        // Un punto por página, el actual en verde
        ui.horizontal_wrapped(|ui| {
            ui.add_space(((ui.available_width() - dots.len() as f32 * 14.0) / 2.0).max(0.0));
            for dot in &dots {
                let color = if dot.current {
                    ACCEPT_GREEN
                } else {
                    Color32::DARK_GRAY
                };
                ui.label(RichText::new("▬").color(color));
            }
        });

        for card in &cards {
            ui.add_space(36.0);
            let text = RichText::new(&card.text).size(24.0).strong();
            ui.label(if card.active { text } else { text.weak() });
            ui.add_space(12.0);
            if let Some(score) = likert_scale(ui, card.selected, card.active) {
                answered = Some((card.id, score));
            }
        }

        ui.add_space(40.0);
        let btn_w = (ui.available_width() * 0.5).clamp(180.0, 320.0);
        if big_button(ui, next_label, btn_w, 44.0, complete) {
            next_clicked = true;
        }

        if !message.is_empty() {
            ui.add_space(8.0);
            ui.label(&message);
        }
        ui.add_space(24.0);
    });

    if let Some((id, score)) = answered {
        if let Err(e) = app.record_answer(id, score) {
            app.message = format!("⚠ {e}");
        }
    }
    if next_clicked {
        app.advance();
    }
}

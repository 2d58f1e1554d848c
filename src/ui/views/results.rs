use crate::QuizApp;
use crate::report::Report;
use crate::ui::helpers::{ACCEPT_GREEN, band_color, big_button, score_color, score_dots};
use crate::ui::layout::scroll_panel;
use egui::{Context, Grid, ProgressBar, RichText, Ui};

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let report = app.report();
    let total = app.total_questions();
    let mut restart = false;

    scroll_panel(ctx, 900.0, |ui| {
        ui.add_space(24.0);
        ui.heading(RichText::new("Informe de exploración").size(34.0).strong());
        ui.label(RichText::new(format!("Basado en tus {total} respuestas")).weak());
        ui.add_space(24.0);

        chapter_chart(ui, &report);
        ui.add_space(16.0);
        tendency_and_buckets(ui, &report);

        for chapter in &report.details {
            ui.add_space(24.0);
            ui.separator();
            ui.horizontal(|ui| {
                ui.heading(&chapter.title);
                ui.label(
                    RichText::new(format!("{} preguntas", chapter.verdicts.len()))
                        .small()
                        .weak(),
                );
            });
            ui.add_space(8.0);

            Grid::new(("verdicts_grid", chapter.chapter_id))
                .striped(true)
                .num_columns(3)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    for v in &chapter.verdicts {
                        let text = RichText::new(&v.text);
                        ui.label(if v.answered { text } else { text.weak() });
                        ui.label(RichText::new(v.label()).small().strong().color(score_color(v.score)));
                        ui.label(score_dots(v.score, v.answered));
                        ui.end_row();
                    }
                });
        }

        ui.add_space(40.0);
        ui.label(RichText::new("« Mirarse con honestidad es el primer paso para explorar »").italics().weak());
        ui.add_space(12.0);
        let btn_w = (ui.available_width() * 0.5).clamp(200.0, 360.0);
        if big_button(ui, "Volver a empezar", btn_w, 48.0, true) {
            restart = true;
        }
        ui.add_space(24.0);
    });

    if restart {
        app.reset();
    }
}

/// Barras por capítulo con la puntuación normalizada (0-100 %)
fn chapter_chart(ui: &mut Ui, report: &Report) {
    ui.label(RichText::new("Tendencia por dimensión").size(18.0).strong().color(ACCEPT_GREEN));
    ui.add_space(8.0);
    Grid::new("chapter_chart_grid")
        .num_columns(3)
        .spacing([12.0, 10.0])
        .show(ui, |ui| {
            for ch in &report.chapters {
                ui.label(&ch.short_title);
                ui.add(
                    ProgressBar::new(f32::from(ch.normalized) / 100.0)
                        .fill(band_color(ch.band))
                        .desired_width(420.0)
                        .text(format!("{}%", ch.normalized)),
                );
                ui.label(RichText::new(format!("media {}", ch.average_label())).small().weak())
                    .on_hover_text(&ch.title);
                ui.end_row();
            }
        });
}

fn tendency_and_buckets(ui: &mut Ui, report: &Report) {
    ui.label(
        RichText::new(format!(
            "Tendencia global: {} (media {:.2})",
            report.tendency.label(),
            report.average
        ))
        .size(18.0)
        .strong(),
    );
    ui.add_space(8.0);
    Grid::new("bucket_grid")
        .striped(true)
        .num_columns(3)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            ui.label(RichText::new("Respuesta").strong());
            ui.label(RichText::new("Preguntas").strong());
            ui.label(RichText::new("%").strong());
            ui.end_row();

            for b in &report.buckets {
                ui.label(RichText::new(b.score.label()).color(score_color(b.score)));
                ui.label(b.count.to_string());
                ui.label(format!("{}%", b.percent));
                ui.end_row();
            }
        });
}

// src/ui/helpers.rs
use crate::model::Score;
use crate::report::ScoreBand;
use egui::{Button, Color32, RichText, Stroke, Ui, Vec2};

pub const ACCEPT_GREEN: Color32 = Color32::from_rgb(16, 185, 129);
pub const REJECT_PURPLE: Color32 = Color32::from_rgb(168, 85, 247);
pub const MID_INDIGO: Color32 = Color32::from_rgb(99, 102, 241);

pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

pub fn score_color(score: Score) -> Color32 {
    match score.value() {
        v if v > 0 => ACCEPT_GREEN,
        v if v < 0 => REJECT_PURPLE,
        _ => Color32::GRAY,
    }
}

pub fn band_color(band: ScoreBand) -> Color32 {
    match band {
        ScoreBand::High => ACCEPT_GREEN,
        ScoreBand::Mid => MID_INDIGO,
        ScoreBand::Low => REJECT_PURPLE,
    }
}

/// Fila de 7 botones de "Acepto" a "No acepto". Devuelve la puntuación pulsada, si hay.
/// Los botones crecen con |puntuación|, como en una escala Likert visual.
pub fn likert_scale(ui: &mut Ui, selected: Option<Score>, enabled: bool) -> Option<Score> {
    let row_width = 480.0;
    let mut clicked = None;

    ui.horizontal(|ui| {
        // espacio para centrar la fila
        ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
        ui.label(RichText::new("Acepto").color(ACCEPT_GREEN).strong());
        ui.add_space(8.0);

        for score in Score::ALL {
            let size = 22.0 + f32::from(score.value().unsigned_abs()) * 6.0;
            let color = score_color(score);
            let is_selected = selected == Some(score);
            let fill = if is_selected { color } else { Color32::TRANSPARENT };

            let button = Button::new(if is_selected { "●" } else { " " })
                .min_size(Vec2::splat(size))
                .fill(fill)
                .stroke(Stroke::new(2.0, color));
            if ui
                .add_enabled(enabled, button)
                .on_hover_text(score.label())
                .clicked()
            {
                clicked = Some(score);
            }
        }

        ui.add_space(8.0);
        ui.label(RichText::new("No acepto").color(REJECT_PURPLE).strong());
    });

    clicked
}

/// Siete puntos con el valor elegido resaltado (mini escala del informe)
pub fn score_dots(score: Score, answered: bool) -> RichText {
    let dots: String = Score::ALL
        .iter()
        .map(|s| if *s == score { '●' } else { '·' })
        .collect();
    let color = if answered {
        score_color(score)
    } else {
        Color32::DARK_GRAY
    };
    RichText::new(dots).monospace().color(color)
}

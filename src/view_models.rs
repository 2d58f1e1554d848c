// src/view_models.rs

use crate::model::{QuestionId, Score};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressInfo {
    pub answered: usize,
    pub total: usize,
    pub percent: u8,
}

/// Una pregunta tal y como se pinta en la página actual
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCard {
    pub id: QuestionId,
    pub text: String,
    pub selected: Option<Score>,
    pub active: bool, // false -> atenuada y sin interacción
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageDot {
    pub page: usize,
    pub current: bool,
}

impl ProgressInfo {
    pub fn label(&self) -> String {
        format!("Progreso: {}% ({}/{})", self.percent, self.answered, self.total)
    }

    pub fn fraction(&self) -> f32 {
        f32::from(self.percent) / 100.0
    }
}

impl QuestionCard {
    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }
}

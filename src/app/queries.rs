use super::*;
use crate::model::Chapter;
use crate::report::Report;

impl QuizApp {
    pub fn current_chapter(&self) -> Option<&Chapter> {
        self.catalog.chapter(self.session.navigation.chapter_index)
    }

    /// Preguntas de la página actual (vacío fuera de la fase de preguntas)
    pub fn page_questions(&self) -> &[Question] {
        self.session.navigation.page_questions(&self.catalog)
    }

    pub fn is_page_complete(&self) -> bool {
        self.session
            .navigation
            .is_page_complete(&self.catalog, &self.session.answers)
    }

    pub fn is_final_page(&self) -> bool {
        self.session.navigation.is_final_page(&self.catalog)
    }

    pub fn answered_count(&self) -> usize {
        self.session.answers.len()
    }

    pub fn total_questions(&self) -> usize {
        self.catalog.question_count()
    }

    pub fn progress_percent(&self) -> u8 {
        let total = self.total_questions();
        if total == 0 {
            return 0;
        }
        ((self.answered_count() as f64 / total as f64) * 100.0).round() as u8
    }

    /// Pregunta que toca contestar: la primera sin respuesta de la página,
    /// o la última si ya están todas.
    pub fn active_question_id(&self) -> Option<QuestionId> {
        let page = self.page_questions();
        page.iter()
            .find(|q| !self.session.answers.is_answered(q.id))
            .or(page.last())
            .map(|q| q.id)
    }

    pub fn report(&self) -> Report {
        Report::build(&self.catalog, &self.session.answers)
    }
}

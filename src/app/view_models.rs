use super::*;

impl QuizApp {
    pub fn progress_info(&self) -> ProgressInfo {
        ProgressInfo {
            answered: self.answered_count(),
            total: self.total_questions(),
            percent: self.progress_percent(),
        }
    }

    pub fn question_cards(&self) -> Vec<QuestionCard> {
        let active = self.active_question_id();
        self.page_questions()
            .iter()
            .map(|q| {
                let selected = self.session.answers.get(q.id);
                QuestionCard {
                    id: q.id,
                    text: q.text.clone(),
                    selected,
                    active: selected.is_some() || Some(q.id) == active,
                }
            })
            .collect()
    }

    /// Un punto por página del capítulo actual, marcando la página en curso
    pub fn page_dots(&self) -> Vec<PageDot> {
        let current = self.session.navigation.page_index;
        let pages = self.current_chapter().map(|c| c.page_count()).unwrap_or(0);
        (0..pages)
            .map(|page| PageDot {
                page,
                current: page == current,
            })
            .collect()
    }

    pub fn advance_label(&self) -> &'static str {
        if self.is_final_page() {
            "Generar informe"
        } else {
            "Siguiente grupo"
        }
    }
}

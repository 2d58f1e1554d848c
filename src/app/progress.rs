use super::*;
use std::collections::BTreeMap;

/// Almacén de respuestas: id de pregunta -> puntuación.
/// Solo crece (o sobrescribe) hasta que se reinicia la sesión.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Answers {
    scores: BTreeMap<QuestionId, Score>,
}

impl Answers {
    /// Registra una puntuación en bruto; valida escala e id antes de tocar el mapa
    pub fn record(
        &mut self,
        catalog: &Catalog,
        id: QuestionId,
        value: i8,
    ) -> Result<Score, InvalidInput> {
        let score = Score::try_from(value)?;
        self.record_score(catalog, id, score)?;
        Ok(score)
    }

    pub fn record_score(
        &mut self,
        catalog: &Catalog,
        id: QuestionId,
        score: Score,
    ) -> Result<(), InvalidInput> {
        if !catalog.contains(id) {
            return Err(InvalidInput::UnknownQuestion(id));
        }
        self.scores.insert(id, score);
        Ok(())
    }

    pub fn get(&self, id: QuestionId) -> Option<Score> {
        self.scores.get(&id).copied()
    }

    /// Puntuación para agregados: sin responder cuenta como neutral
    pub fn score_or_neutral(&self, id: QuestionId) -> Score {
        self.get(id).unwrap_or_default()
    }

    pub fn is_answered(&self, id: QuestionId) -> bool {
        self.scores.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.scores.keys().copied()
    }

    pub fn clear(&mut self) {
        self.scores.clear();
    }
}

impl QuizApp {
    /// Registra la respuesta del usuario. Una entrada inválida se rechaza sin modificar nada.
    pub fn record_answer(&mut self, id: QuestionId, score: Score) -> Result<(), InvalidInput> {
        match self.session.answers.record_score(&self.catalog, id, score) {
            Ok(()) => {
                log::debug!("Respuesta registrada: pregunta {id} -> {}", score.value());
                Ok(())
            }
            Err(e) => {
                log::warn!("Respuesta rechazada: {e}");
                Err(e)
            }
        }
    }

    /// Igual que [`QuizApp::record_answer`] pero con la puntuación sin validar
    pub fn record_raw_answer(&mut self, id: QuestionId, value: i8) -> Result<(), InvalidInput> {
        let score = Score::try_from(value).inspect_err(|e| log::warn!("Respuesta rechazada: {e}"))?;
        self.record_answer(id, score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::catalog_with_sizes;

    #[test]
    fn recording_overwrites_instead_of_growing() {
        let catalog = catalog_with_sizes(&[5]);
        let mut answers = Answers::default();
        answers.record(&catalog, 2, 3).unwrap();
        answers.record(&catalog, 2, -1).unwrap();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get(2), Some(Score::RejectSlight));
    }

    #[test]
    fn invalid_input_leaves_the_store_untouched() {
        let catalog = catalog_with_sizes(&[5]);
        let mut answers = Answers::default();
        answers.record(&catalog, 1, 1).unwrap();
        let before = answers.clone();

        assert_eq!(
            answers.record(&catalog, 6, 1),
            Err(InvalidInput::UnknownQuestion(6))
        );
        assert_eq!(
            answers.record(&catalog, 0, 1),
            Err(InvalidInput::UnknownQuestion(0))
        );
        assert_eq!(
            answers.record(&catalog, 2, 7),
            Err(InvalidInput::ScoreOutOfRange(7))
        );
        assert_eq!(answers, before);
    }

    #[test]
    fn store_never_exceeds_catalog() {
        let catalog = catalog_with_sizes(&[4, 3]);
        let mut answers = Answers::default();
        // Todas las combinaciones de id (incluidos fuera de rango) y puntuación
        for round in 0..3 {
            for id in 0..=10 {
                for v in -4..=4 {
                    let _ = answers.record(&catalog, id, (v + round) % 5);
                }
            }
        }
        assert_eq!(answers.len(), catalog.question_count());
        assert!(answers.ids().all(|id| catalog.contains(id)));
    }

    #[test]
    fn unanswered_defaults_to_neutral() {
        let answers = Answers::default();
        assert_eq!(answers.score_or_neutral(1), Score::Neutral);
        assert!(!answers.is_answered(1));
    }

    #[test]
    fn app_record_raw_answer_validates_scale() {
        let mut app = QuizApp::with_catalog(catalog_with_sizes(&[5]));
        assert_eq!(
            app.record_raw_answer(1, -5),
            Err(InvalidInput::ScoreOutOfRange(-5))
        );
        assert!(app.session.answers.is_empty());
        app.record_raw_answer(1, -3).unwrap();
        assert_eq!(app.session.answers.get(1), Some(Score::RejectStrong));
    }
}

use crate::error::{CatalogError, InvalidInput};
use serde::{Deserialize, Serialize};

pub type QuestionId = u32;

/// Preguntas por página dentro de un capítulo
pub const PAGE_SIZE: usize = 5;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,     // Enunciado
    pub category: String, // Tema del capítulo
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}

impl Chapter {
    /// Título sin el prefijo "Capítulo N:". Se usa como etiqueta del gráfico.
    pub fn short_title(&self) -> &str {
        self.title
            .split_once([':', '：'])
            .map(|(_, rest)| rest.trim())
            .filter(|rest| !rest.is_empty())
            .unwrap_or(self.title.as_str())
    }

    pub fn page_count(&self) -> usize {
        self.questions.len().div_ceil(PAGE_SIZE)
    }

    /// Preguntas de la página `page`; vacío si la página no existe
    pub fn page(&self, page: usize) -> &[Question] {
        let start = page.saturating_mul(PAGE_SIZE);
        if start >= self.questions.len() {
            return &[];
        }
        let end = (start + PAGE_SIZE).min(self.questions.len());
        &self.questions[start..end]
    }
}

/// Banco de preguntas validado. Solo se construye con [`Catalog::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    chapters: Vec<Chapter>,
}

impl Catalog {
    /// Valida que los ids, recorridos en orden de capítulo, sean 1..=N sin huecos ni duplicados
    /// y que ningún capítulo esté vacío.
    pub fn new(chapters: Vec<Chapter>) -> Result<Self, CatalogError> {
        if chapters.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut expected: QuestionId = 1;
        for chapter in &chapters {
            if chapter.questions.is_empty() {
                return Err(CatalogError::EmptyChapter(chapter.id));
            }
            for q in &chapter.questions {
                if q.id != expected {
                    return Err(CatalogError::UnexpectedId {
                        expected,
                        found: q.id,
                    });
                }
                expected += 1;
            }
        }
        Ok(Self { chapters })
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn chapter(&self, idx: usize) -> Option<&Chapter> {
        self.chapters.get(idx)
    }

    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.chapters.iter().flat_map(|c| c.questions.iter())
    }

    pub fn question_count(&self) -> usize {
        self.chapters.iter().map(|c| c.questions.len()).sum()
    }

    // Los ids son contiguos desde 1, así que basta con comprobar el rango
    pub fn contains(&self, id: QuestionId) -> bool {
        id >= 1 && (id as usize) <= self.question_count()
    }
}

/// Respuesta en la escala de 7 puntos. De "acepto" (+3) a "no acepto" (-3).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Score {
    RejectStrong,
    Reject,
    RejectSlight,
    Neutral,
    AcceptSlight,
    Accept,
    AcceptStrong,
}

impl Score {
    /// Orden de pantalla: aceptación a la izquierda, rechazo a la derecha
    pub const ALL: [Score; 7] = [
        Score::AcceptStrong,
        Score::Accept,
        Score::AcceptSlight,
        Score::Neutral,
        Score::RejectSlight,
        Score::Reject,
        Score::RejectStrong,
    ];

    pub fn value(self) -> i8 {
        match self {
            Score::AcceptStrong => 3,
            Score::Accept => 2,
            Score::AcceptSlight => 1,
            Score::Neutral => 0,
            Score::RejectSlight => -1,
            Score::Reject => -2,
            Score::RejectStrong => -3,
        }
    }

    /// Etiqueta de severidad para el informe
    pub fn label(self) -> &'static str {
        match self {
            Score::AcceptStrong => "Aceptación máxima",
            Score::Accept => "Aceptación alta",
            Score::AcceptSlight => "Aceptación leve",
            Score::Neutral => "Neutral",
            Score::RejectSlight => "Rechazo leve",
            Score::Reject => "Rechazo alto",
            Score::RejectStrong => "Rechazo máximo",
        }
    }
}

impl Default for Score {
    fn default() -> Self {
        Score::Neutral
    }
}

impl TryFrom<i8> for Score {
    type Error = InvalidInput;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Score::ALL
            .into_iter()
            .find(|s| s.value() == value)
            .ok_or(InvalidInput::ScoreOutOfRange(value))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Intro,
    ChapterCover,
    Questions,
    Results,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Intro
    }
}

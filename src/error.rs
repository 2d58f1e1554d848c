// src/error.rs

use crate::model::QuestionId;
use thiserror::Error;

/// Entrada rechazada. El almacén de respuestas no se toca cuando se devuelve uno de estos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("la pregunta {0} no existe en el catálogo")]
    UnknownQuestion(QuestionId),
    #[error("la puntuación {0} está fuera de la escala -3..=3")]
    ScoreOutOfRange(i8),
}

/// Problemas al cargar o validar el catálogo de preguntas
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no se pudo parsear el catálogo YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("el catálogo no tiene capítulos")]
    Empty,
    #[error("el capítulo {0} no tiene preguntas")]
    EmptyChapter(u32),
    #[error("se esperaba la pregunta {expected}, se encontró {found}")]
    UnexpectedId {
        expected: QuestionId,
        found: QuestionId,
    },
}

use crate::data::read_catalog_embedded;
use crate::error::{CatalogError, InvalidInput};
use crate::model::{AppState, Catalog, Question, QuestionId, Score};
use eframe::egui;

// Submódulos
pub mod navigation;
pub mod progress;
pub mod queries;
pub mod resets;
pub mod view_models;

pub use navigation::Navigation;
pub use progress::Answers;

// Re-export de view models
pub use crate::view_models::{PageDot, ProgressInfo, QuestionCard};

/// Todo el estado mutable de una sesión. Se crea vacío y solo vuelve a vacío con un reinicio.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub navigation: Navigation,
    pub answers: Answers,
}

pub struct QuizApp {
    pub catalog: Catalog,
    pub session: Session,
    pub confirm_reset: bool,
    pub message: String,
}

impl QuizApp {
    /// Arranca con el banco de preguntas embebido
    pub fn new() -> Result<Self, CatalogError> {
        let catalog = read_catalog_embedded()?;
        Ok(Self::with_catalog(catalog))
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            session: Session::default(),
            confirm_reset: false,
            message: String::new(),
        }
    }

    pub fn state(&self) -> AppState {
        self.session.navigation.view
    }
}

use super::*;

/// Posición del usuario: pantalla actual, capítulo y página dentro del capítulo.
///
/// Las transiciones son funciones puras: reciben el estado por valor y devuelven el siguiente,
/// sin tocar las respuestas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Navigation {
    pub view: AppState,
    pub chapter_index: usize,
    pub page_index: usize,
}

impl Navigation {
    /// Preguntas visibles en la página actual. Vacío fuera de `Questions` o con índices inválidos.
    pub fn page_questions<'a>(&self, catalog: &'a Catalog) -> &'a [Question] {
        if self.view != AppState::Questions {
            return &[];
        }
        catalog
            .chapter(self.chapter_index)
            .map(|ch| ch.page(self.page_index))
            .unwrap_or(&[])
    }

    /// Compuerta de avance: la página tiene preguntas y todas están respondidas
    pub fn is_page_complete(&self, catalog: &Catalog, answers: &Answers) -> bool {
        let page = self.page_questions(catalog);
        !page.is_empty() && page.iter().all(|q| answers.is_answered(q.id))
    }

    /// Última página del último capítulo (el botón pasa a "Generar informe")
    pub fn is_final_page(&self, catalog: &Catalog) -> bool {
        if self.view != AppState::Questions {
            return false;
        }
        let last_chapter = catalog.chapters().len().saturating_sub(1);
        match catalog.chapter(self.chapter_index) {
            Some(ch) => {
                self.chapter_index == last_chapter
                    && self.page_index == ch.page_count().saturating_sub(1)
            }
            None => false,
        }
    }

    /// Siguiente estado. Con la compuerta cerrada, o desde `Results`, devuelve el mismo estado.
    pub fn advance(self, catalog: &Catalog, answers: &Answers) -> Navigation {
        match self.view {
            AppState::Intro => Navigation {
                view: AppState::ChapterCover,
                chapter_index: 0,
                page_index: 0,
            },
            AppState::ChapterCover => Navigation {
                view: AppState::Questions,
                page_index: 0,
                ..self
            },
            AppState::Questions => {
                if !self.is_page_complete(catalog, answers) {
                    return self;
                }
                let page_count = catalog
                    .chapter(self.chapter_index)
                    .map(|ch| ch.page_count())
                    .unwrap_or(0);

                if self.page_index + 1 < page_count {
                    Navigation {
                        page_index: self.page_index + 1,
                        ..self
                    }
                } else if self.chapter_index + 1 < catalog.chapters().len() {
                    Navigation {
                        view: AppState::ChapterCover,
                        chapter_index: self.chapter_index + 1,
                        page_index: 0,
                    }
                } else {
                    Navigation {
                        view: AppState::Results,
                        ..self
                    }
                }
            }
            AppState::Results => self,
        }
    }
}

impl QuizApp {
    /// Avanza una pantalla/página. No hace nada si la página actual no está completa.
    pub fn advance(&mut self) {
        let current = self.session.navigation;
        let next = current.advance(&self.catalog, &self.session.answers);

        if next == current {
            log::debug!("Avance ignorado en {:?}", current.view);
            return;
        }
        if next.view != current.view {
            log::info!(
                "{:?} -> {:?} (capítulo {}, página {})",
                current.view,
                next.view,
                next.chapter_index + 1,
                next.page_index + 1
            );
        }
        self.session.navigation = next;
        self.message.clear();
    }

    /// Igual que `advance`, pero solo desde la pantalla de bienvenida
    pub fn empezar_cuestionario(&mut self) {
        if self.state() == AppState::Intro {
            self.advance();
        }
    }

    /// Entra en las preguntas del capítulo mostrado en la portada
    pub fn entrar_en_capitulo(&mut self) {
        if self.state() == AppState::ChapterCover {
            self.advance();
        }
    }
}

// src/report.rs
//
// Informe final. Función pura de (catálogo, respuestas): no hay camino de error,
// las preguntas sin responder cuentan como 0.

use crate::app::Answers;
use crate::model::{Catalog, Chapter, QuestionId, Score};

/// Etiqueta global según la media de todas las puntuaciones
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tendency {
    StronglyAccepting,
    Accepting,
    Balanced,
    Reserved,
    StronglyReserved,
}

impl Tendency {
    pub fn from_average(avg: f64) -> Self {
        if avg > 1.5 {
            Tendency::StronglyAccepting
        } else if avg > 0.5 {
            Tendency::Accepting
        } else if avg > -0.5 {
            Tendency::Balanced
        } else if avg > -1.5 {
            Tendency::Reserved
        } else {
            Tendency::StronglyReserved
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tendency::StronglyAccepting => "Muy abierto",
            Tendency::Accepting => "Abierto",
            Tendency::Balanced => "Equilibrado",
            Tendency::Reserved => "Reservado",
            Tendency::StronglyReserved => "Muy reservado",
        }
    }
}

/// Tramo de color de la barra de un capítulo
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Mid,
    Low,
}

impl ScoreBand {
    pub fn from_normalized(score: u8) -> Self {
        if score > 70 {
            ScoreBand::High
        } else if score > 40 {
            ScoreBand::Mid
        } else {
            ScoreBand::Low
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChapterScore {
    pub chapter_id: u32,
    pub title: String,
    pub short_title: String,
    pub average: f64,
    pub normalized: u8, // 0..=100
    pub band: ScoreBand,
}

impl ChapterScore {
    pub fn average_label(&self) -> String {
        format!("{:.1}", self.average)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bucket {
    pub score: Score,
    pub count: usize,
    pub percent: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVerdict {
    pub question_id: QuestionId,
    pub text: String,
    pub score: Score,
    pub answered: bool,
}

impl QuestionVerdict {
    pub fn label(&self) -> &'static str {
        self.score.label()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChapterVerdicts {
    pub chapter_id: u32,
    pub title: String,
    pub verdicts: Vec<QuestionVerdict>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub chapters: Vec<ChapterScore>,
    pub average: f64,
    pub tendency: Tendency,
    pub buckets: Vec<Bucket>,
    pub details: Vec<ChapterVerdicts>,
}

impl Report {
    pub fn build(catalog: &Catalog, answers: &Answers) -> Self {
        let chapters = catalog
            .chapters()
            .iter()
            .map(|ch| chapter_score(ch, answers))
            .collect();

        let scores: Vec<i8> = catalog
            .questions()
            .map(|q| answers.score_or_neutral(q.id).value())
            .collect();
        let average = mean(&scores);

        let total = scores.len();
        let buckets = Score::ALL
            .into_iter()
            .map(|score| {
                let count = scores.iter().filter(|&&v| v == score.value()).count();
                Bucket {
                    score,
                    count,
                    percent: percent(count, total),
                }
            })
            .collect();

        let details = catalog
            .chapters()
            .iter()
            .map(|ch| ChapterVerdicts {
                chapter_id: ch.id,
                title: ch.title.clone(),
                verdicts: ch
                    .questions
                    .iter()
                    .map(|q| QuestionVerdict {
                        question_id: q.id,
                        text: q.text.clone(),
                        score: answers.score_or_neutral(q.id),
                        answered: answers.is_answered(q.id),
                    })
                    .collect(),
            })
            .collect();

        Self {
            chapters,
            average,
            tendency: Tendency::from_average(average),
            buckets,
            details,
        }
    }

    pub fn bucket(&self, score: Score) -> Option<&Bucket> {
        self.buckets.iter().find(|b| b.score == score)
    }
}

fn chapter_score(chapter: &Chapter, answers: &Answers) -> ChapterScore {
    let scores: Vec<i8> = chapter
        .questions
        .iter()
        .map(|q| answers.score_or_neutral(q.id).value())
        .collect();
    let average = mean(&scores);
    let normalized = normalize(average);
    ChapterScore {
        chapter_id: chapter.id,
        title: chapter.title.clone(),
        short_title: chapter.short_title().to_owned(),
        average,
        normalized,
        band: ScoreBand::from_normalized(normalized),
    }
}

fn mean(scores: &[i8]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().map(|&v| f64::from(v)).sum::<f64>() / scores.len() as f64
}

/// Media en [-3, 3] llevada a porcentaje [0, 100]
fn normalize(avg: f64) -> u8 {
    (((avg + 3.0) / 6.0) * 100.0).round().clamp(0.0, 100.0) as u8
}

fn percent(count: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_catalog_embedded;
    use crate::model::tests::catalog_with_sizes;

    #[test]
    fn all_neutral_answers_are_balanced() {
        let catalog = read_catalog_embedded().unwrap();
        let mut answers = Answers::default();
        for q in catalog.questions() {
            answers.record(&catalog, q.id, 0).unwrap();
        }
        let report = Report::build(&catalog, &answers);

        assert_eq!(report.average, 0.0);
        assert_eq!(report.tendency, Tendency::Balanced);
        let neutral = report.bucket(Score::Neutral).unwrap();
        assert_eq!(neutral.count, 80);
        assert_eq!(neutral.percent, 100);
        assert!(
            report
                .buckets
                .iter()
                .filter(|b| b.score != Score::Neutral)
                .all(|b| b.count == 0 && b.percent == 0)
        );
        assert!(report.chapters.iter().all(|c| c.normalized == 50));
    }

    #[test]
    fn empty_answers_match_explicit_zeros() {
        let catalog = read_catalog_embedded().unwrap();
        let mut zeros = Answers::default();
        for q in catalog.questions() {
            zeros.record(&catalog, q.id, 0).unwrap();
        }
        let empty = Report::build(&catalog, &Answers::default());
        let explicit = Report::build(&catalog, &zeros);

        assert_eq!(empty.chapters, explicit.chapters);
        assert_eq!(empty.average, explicit.average);
        assert_eq!(empty.tendency, explicit.tendency);
        assert_eq!(empty.buckets, explicit.buckets);
        // Solo cambia la marca de "respondida"
        let labels = |r: &Report| -> Vec<(QuestionId, &'static str)> {
            r.details
                .iter()
                .flat_map(|c| c.verdicts.iter())
                .map(|v| (v.question_id, v.label()))
                .collect()
        };
        assert_eq!(labels(&empty), labels(&explicit));
        assert!(empty.details.iter().flat_map(|c| &c.verdicts).all(|v| !v.answered));
    }

    #[test]
    fn single_strong_answer_moves_only_its_chapter() {
        let catalog = read_catalog_embedded().unwrap();
        let mut answers = Answers::default();
        for q in catalog.questions() {
            answers.record(&catalog, q.id, 0).unwrap();
        }
        answers.record(&catalog, 1, 3).unwrap();
        let report = Report::build(&catalog, &answers);

        // ((3/20 + 3) / 6) * 100 = 52.5
        assert_eq!(report.chapters[0].normalized, 53);
        assert_eq!(report.chapters[0].average_label(), "0.1");
        assert_eq!(report.chapters[1].normalized, 50);
        assert_eq!(report.chapters[2].normalized, 50);
        assert_eq!(report.bucket(Score::AcceptStrong).unwrap().count, 1);
        assert_eq!(report.bucket(Score::AcceptStrong).unwrap().percent, 1);
        assert_eq!(report.bucket(Score::Neutral).unwrap().percent, 99);
    }

    #[test]
    fn extremes_normalize_to_bounds() {
        let catalog = catalog_with_sizes(&[4, 4]);
        let mut answers = Answers::default();
        for id in 1..=4 {
            answers.record(&catalog, id, 3).unwrap();
        }
        for id in 5..=8 {
            answers.record(&catalog, id, -3).unwrap();
        }
        let report = Report::build(&catalog, &answers);
        assert_eq!(report.chapters[0].normalized, 100);
        assert_eq!(report.chapters[0].band, ScoreBand::High);
        assert_eq!(report.chapters[1].normalized, 0);
        assert_eq!(report.chapters[1].band, ScoreBand::Low);
        assert_eq!(report.average, 0.0);
        assert_eq!(report.tendency, Tendency::Balanced);
    }

    #[test]
    fn tendency_bins_are_contiguous() {
        assert_eq!(Tendency::from_average(3.0), Tendency::StronglyAccepting);
        assert_eq!(Tendency::from_average(1.51), Tendency::StronglyAccepting);
        assert_eq!(Tendency::from_average(1.5), Tendency::Accepting);
        assert_eq!(Tendency::from_average(0.51), Tendency::Accepting);
        assert_eq!(Tendency::from_average(0.5), Tendency::Balanced);
        assert_eq!(Tendency::from_average(-0.49), Tendency::Balanced);
        assert_eq!(Tendency::from_average(-0.5), Tendency::Reserved);
        assert_eq!(Tendency::from_average(-1.49), Tendency::Reserved);
        assert_eq!(Tendency::from_average(-1.5), Tendency::StronglyReserved);
        assert_eq!(Tendency::from_average(-3.0), Tendency::StronglyReserved);
    }

    #[test]
    fn score_bands_follow_chart_thresholds() {
        assert_eq!(ScoreBand::from_normalized(71), ScoreBand::High);
        assert_eq!(ScoreBand::from_normalized(70), ScoreBand::Mid);
        assert_eq!(ScoreBand::from_normalized(41), ScoreBand::Mid);
        assert_eq!(ScoreBand::from_normalized(40), ScoreBand::Low);
    }

    #[test]
    fn buckets_cover_every_question_in_display_order() {
        let catalog = catalog_with_sizes(&[7]);
        let mut answers = Answers::default();
        for (id, v) in (1..=7).zip([3, 2, 1, 0, -1, -2, -3]) {
            answers.record(&catalog, id, v).unwrap();
        }
        let report = Report::build(&catalog, &answers);
        let order: Vec<i8> = report.buckets.iter().map(|b| b.score.value()).collect();
        assert_eq!(order, vec![3, 2, 1, 0, -1, -2, -3]);
        assert_eq!(report.buckets.iter().map(|b| b.count).sum::<usize>(), 7);
        assert!(report.buckets.iter().all(|b| b.percent == 14));
    }

    #[test]
    fn verdict_labels_cover_the_scale() {
        assert_eq!(Score::AcceptStrong.label(), "Aceptación máxima");
        assert_eq!(Score::Neutral.label(), "Neutral");
        assert_eq!(Score::RejectStrong.label(), "Rechazo máximo");
    }
}

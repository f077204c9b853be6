use crate::models::quiz::QuizQuestion;
use crate::models::selection::AnswerSelections;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOutcome {
    pub index: usize,
    pub question: String,
    pub selected: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizGrade {
    pub score: usize,
    pub total: usize,
    pub outcomes: Vec<QuestionOutcome>,
}

impl QuizGrade {
    pub fn incorrect(&self) -> impl Iterator<Item = &QuestionOutcome> {
        self.outcomes.iter().filter(|o| !o.is_correct)
    }
}

pub struct GradingService;

impl GradingService {
    /// Exact string comparison per question; unanswered questions never count.
    pub fn grade(quiz: &[QuizQuestion], selections: &AnswerSelections) -> QuizGrade {
        let outcomes: Vec<QuestionOutcome> = quiz
            .iter()
            .enumerate()
            .map(|(index, q)| {
                let selected = selections.get(index).map(str::to_string);
                let is_correct = selected.as_deref() == Some(q.answer.as_str());
                QuestionOutcome {
                    index,
                    question: q.question.clone(),
                    selected,
                    correct_answer: q.answer.clone(),
                    is_correct,
                }
            })
            .collect();

        QuizGrade {
            score: outcomes.iter().filter(|o| o.is_correct).count(),
            total: quiz.len(),
            outcomes,
        }
    }
}

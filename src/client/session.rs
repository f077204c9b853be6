use super::api_client::ApiClient;
use super::error::{ClientError, ClientResult};
use crate::models::quiz::GenerationResult;
use crate::models::selection::AnswerSelections;
use crate::services::grading_service::{GradingService, QuizGrade};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Input,
    Loading,
    Info,
    QuizActive,
    QuizGraded,
}

/// One user's pass through the app: enter an animal, read the card, take the quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    phase: Phase,
    animal: String,
    result: Option<GenerationResult>,
    selections: AnswerSelections,
    grade: Option<QuizGrade>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            phase: Phase::Input,
            animal: String::new(),
            result: None,
            selections: AnswerSelections::new(),
            grade: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn animal(&self) -> &str {
        &self.animal
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        self.result.as_ref()
    }

    pub fn selections(&self) -> &AnswerSelections {
        &self.selections
    }

    pub fn grade(&self) -> Option<&QuizGrade> {
        self.grade.as_ref()
    }

    fn expect_phase(&self, expected: Phase, action: &'static str) -> ClientResult<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(ClientError::InvalidState {
                action,
                phase: self.phase,
            })
        }
    }

    /// Blank names are rejected here and never reach the network.
    pub fn begin_submit(&mut self, animal: &str) -> ClientResult<()> {
        self.expect_phase(Phase::Input, "submit an animal")?;
        if animal.trim().is_empty() {
            return Err(ClientError::EmptyAnimal);
        }
        self.animal = animal.to_string();
        self.phase = Phase::Loading;
        Ok(())
    }

    pub fn finish_submit(
        &mut self,
        outcome: ClientResult<GenerationResult>,
    ) -> ClientResult<()> {
        self.expect_phase(Phase::Loading, "accept a generation result")?;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.selections.clear();
                self.grade = None;
                self.phase = Phase::Info;
                Ok(())
            }
            Err(e) => {
                self.result = None;
                self.phase = Phase::Input;
                Err(e)
            }
        }
    }

    pub async fn submit(&mut self, api: &ApiClient, animal: &str) -> ClientResult<()> {
        self.begin_submit(animal)?;
        let outcome = api.generate(&self.animal).await;
        if let Err(e) = &outcome {
            tracing::error!(animal = %self.animal, error = %e, "Error fetching data");
        }
        self.finish_submit(outcome)
    }

    pub fn start_quiz(&mut self) -> ClientResult<()> {
        self.expect_phase(Phase::Info, "start the quiz")?;
        self.phase = Phase::QuizActive;
        Ok(())
    }

    /// Overwrites any earlier choice for the same question.
    pub fn select(&mut self, index: usize, option: &str) -> ClientResult<()> {
        self.expect_phase(Phase::QuizActive, "select an answer")?;
        let question = self
            .result
            .as_ref()
            .and_then(|r| r.quiz.get(index))
            .ok_or_else(|| ClientError::InvalidSelection(format!("no question {}", index + 1)))?;
        if !question.options.iter().any(|o| o == option) {
            return Err(ClientError::InvalidSelection(format!(
                "'{}' is not an option for question {}",
                option,
                index + 1
            )));
        }
        self.selections.select(index, option);
        Ok(())
    }

    /// Selects by 0-based option position.
    pub fn select_option(&mut self, index: usize, option_index: usize) -> ClientResult<()> {
        let option = self
            .result
            .as_ref()
            .and_then(|r| r.quiz.get(index))
            .and_then(|q| q.options.get(option_index))
            .cloned()
            .ok_or_else(|| {
                ClientError::InvalidSelection(format!(
                    "no option {} for question {}",
                    option_index + 1,
                    index + 1
                ))
            })?;
        self.select(index, &option)
    }

    pub fn submit_quiz(&mut self) -> ClientResult<&QuizGrade> {
        self.expect_phase(Phase::QuizActive, "submit the quiz")?;
        let quiz = self
            .result
            .as_ref()
            .map(|r| r.quiz.as_slice())
            .unwrap_or_default();
        let grade = GradingService::grade(quiz, &self.selections);
        self.phase = Phase::QuizGraded;
        Ok(self.grade.insert(grade))
    }

    /// Drops everything and goes back to an empty input.
    pub fn restart(&mut self) {
        *self = Self::new();
    }
}

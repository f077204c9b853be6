use serde::{Deserialize, Serialize};
use validator::Validate;

use super::animal::AnimalRecord;

pub const QUIZ_LENGTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct QuizQuestion {
    #[validate(length(min = 1))]
    pub question: String,
    #[validate(length(equal = 4))]
    pub options: Vec<String>,
    #[validate(length(min = 1))]
    pub answer: String,
}

impl QuizQuestion {
    /// The answer is expected to be one of the options but nothing enforces it.
    pub fn answer_in_options(&self) -> bool {
        self.options.iter().any(|o| o == &self.answer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct GenerationResult {
    pub info: AnimalRecord,
    #[validate(length(equal = 10), nested)]
    pub quiz: Vec<QuizQuestion>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::animal::Classification;

    fn question(answer: &str) -> QuizQuestion {
        QuizQuestion {
            question: "Which continent?".into(),
            options: vec!["Africa".into(), "Asia".into(), "Europe".into(), "Oceania".into()],
            answer: answer.into(),
        }
    }

    fn result_with(quiz: Vec<QuizQuestion>) -> GenerationResult {
        GenerationResult {
            info: AnimalRecord {
                scientific_name: "Loxodonta africana".into(),
                classification: Classification {
                    kingdom: "Animalia".into(),
                    phylum: "Chordata".into(),
                    class: "Mammalia".into(),
                    order: "Proboscidea".into(),
                    family: "Elephantidae".into(),
                    genus: "Loxodonta".into(),
                },
                habitat: "Savanna".into(),
                geographical_distribution: "Sub-Saharan Africa".into(),
                diet: "Herbivore".into(),
                average_lifespan: "60-70 years".into(),
                physical_characteristics: "Large ears".into(),
                behavior_and_social_structure: "Matriarchal herds".into(),
                reproduction_and_offspring: "22 month gestation".into(),
                conservation_status: "Endangered".into(),
                interesting_facts: vec!["They can hear through their feet.".into()],
            },
            quiz,
        }
    }

    #[test]
    fn ten_four_option_questions_pass_validation() {
        let result = result_with(vec![question("Africa"); QUIZ_LENGTH]);
        assert!(result.validate().is_ok());
    }

    #[test]
    fn short_quiz_fails_validation() {
        let result = result_with(vec![question("Africa"); 9]);
        assert!(result.validate().is_err());
    }

    #[test]
    fn three_options_fail_validation() {
        let mut q = question("Africa");
        q.options.pop();
        let mut quiz = vec![question("Africa"); QUIZ_LENGTH - 1];
        quiz.push(q);
        assert!(result_with(quiz).validate().is_err());
    }

    #[test]
    fn answer_outside_options_is_still_valid_shape() {
        let q = question("Antarctica");
        assert!(!q.answer_in_options());
        assert!(result_with(vec![q; QUIZ_LENGTH]).validate().is_ok());
    }

    #[test]
    fn deserializes_prompt_schema_field_names() {
        let raw = serde_json::json!({
            "question": "What do elephants eat?",
            "options": ["Grass", "Fish", "Insects", "Meat"],
            "answer": "Grass"
        });
        let q: QuizQuestion = serde_json::from_value(raw).unwrap();
        assert!(q.answer_in_options());
    }
}

use super::error::ClientError;
use crate::models::animal::AnimalRecord;
use crate::models::quiz::QuizQuestion;
use crate::models::selection::AnswerSelections;
use crate::services::grading_service::QuizGrade;

pub const NOT_ANSWERED: &str = "Not answered";

pub fn info_card(animal: &str, info: &AnimalRecord) -> String {
    let c = &info.classification;
    let mut lines = vec![
        format!("🐾 {}", animal.to_uppercase()),
        String::new(),
        format!("Scientific Name: {}", info.scientific_name),
        format!(
            "Classification: {} › {} › {} › {} › {} › {}",
            c.kingdom, c.phylum, c.class, c.order, c.family, c.genus
        ),
        format!("Habitat: {}", info.habitat),
        format!("Geographical Distribution: {}", info.geographical_distribution),
        format!("Diet: {}", info.diet),
        format!("Lifespan: {}", info.average_lifespan),
        format!("Physical Characteristics: {}", info.physical_characteristics),
        format!("Behavior: {}", info.behavior_and_social_structure),
        format!("Reproduction: {}", info.reproduction_and_offspring),
        format!("Conservation Status: {}", info.conservation_status),
    ];

    if !info.interesting_facts.is_empty() {
        lines.push(String::new());
        lines.push("🌟 Interesting Facts".to_string());
        lines.extend(info.interesting_facts.iter().map(|fact| format!("  • {}", fact)));
    }
    lines.join("\n")
}

/// Questions with numbered options; `>` marks the current selection.
/// With a grade, each question also gets its verdict and, when wrong, the correct answer.
pub fn quiz_view(
    quiz: &[QuizQuestion],
    selections: &AnswerSelections,
    grade: Option<&QuizGrade>,
) -> String {
    let mut lines = vec!["🧠 Quiz Time".to_string()];

    for (i, q) in quiz.iter().enumerate() {
        let selected = selections.get(i);
        let verdict = grade.and_then(|g| g.outcomes.get(i)).map(|o| o.is_correct);
        let marker = match verdict {
            Some(true) => "✅ ",
            Some(false) => "❌ ",
            None => "",
        };

        lines.push(String::new());
        lines.push(format!("{}Q{}: {}", marker, i + 1, q.question));
        for (j, option) in q.options.iter().enumerate() {
            let pointer = if selected == Some(option.as_str()) { '>' } else { ' ' };
            lines.push(format!("  {} {}) {}", pointer, j + 1, option));
        }

        if verdict == Some(false) {
            lines.push(format!("  ❌ Your answer: {}", selected.unwrap_or(NOT_ANSWERED)));
            lines.push(format!("  ✅ Correct answer: {}", q.answer));
        }
    }
    lines.join("\n")
}

pub fn progress_line(selections: &AnswerSelections, total: usize) -> String {
    format!("📝 Answered {} / {}", selections.len(), total)
}

pub fn score_line(grade: &QuizGrade) -> String {
    format!("🎉 You scored {} / {}", grade.score, grade.total)
}

/// User-facing text for a failed action.
pub fn alert_message(err: &ClientError) -> String {
    match err {
        ClientError::EmptyAnimal => "Please enter an animal name".to_string(),
        ClientError::InvalidSelection(msg) => msg.clone(),
        _ => "Something went wrong. Please try again.".to_string(),
    }
}

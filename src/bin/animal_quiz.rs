use animal_quiz::client::{render, ApiClient, ClientConfig, Phase, QuizSession};
use animal_quiz::utils::telemetry::init_tracing;
use reqwest::Client;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

type Input = Lines<BufReader<Stdin>>;

async fn prompt(input: &mut Input, text: &str) -> anyhow::Result<Option<String>> {
    print!("{} ", text);
    std::io::stdout().flush()?;
    Ok(input.next_line().await?.map(|line| line.trim().to_string()))
}

/// Accepts `<question> <option>` with 1-based numbers.
fn parse_answer(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let question: usize = parts.next()?.parse().ok()?;
    let option: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() || question == 0 || option == 0 {
        return None;
    }
    Some((question - 1, option - 1))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("warn");
    let config = ClientConfig::from_env();
    let api = ApiClient::new(&config, Client::new())?;
    let mut session = QuizSession::new();
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    println!("🐾 Animal Encyclopedia & Quiz");

    loop {
        match session.phase() {
            Phase::Input => {
                let Some(animal) =
                    prompt(&mut input, "\nEnter an animal name (e.g., Elephant):").await?
                else {
                    break;
                };
                if !animal.is_empty() {
                    println!("⏳ Generating...");
                }
                if let Err(e) = session.submit(&api, &animal).await {
                    println!("⚠️  {}", render::alert_message(&e));
                }
            }
            Phase::Loading => anyhow::bail!("generation request did not resolve"),
            Phase::Info => {
                if let Some(result) = session.result() {
                    println!("\n{}", render::info_card(session.animal(), &result.info));
                }
                match prompt(&mut input, "\nPress Enter to take the quiz, or 'q' to quit:").await? {
                    Some(line) if line.eq_ignore_ascii_case("q") => break,
                    Some(_) => session.start_quiz()?,
                    None => break,
                }
            }
            Phase::QuizActive => {
                if let Some(result) = session.result() {
                    println!("\n{}", render::quiz_view(&result.quiz, session.selections(), None));
                    println!(
                        "\n{}",
                        render::progress_line(session.selections(), result.quiz.len())
                    );
                }
                let Some(line) = prompt(
                    &mut input,
                    "\nAnswer with '<question> <option>' (e.g. '3 2'), 'submit' to finish:",
                )
                .await?
                else {
                    break;
                };
                if line.eq_ignore_ascii_case("submit") {
                    session.submit_quiz()?;
                    continue;
                }
                match parse_answer(&line) {
                    Some((question, option)) => {
                        if let Err(e) = session.select_option(question, option) {
                            println!("⚠️  {}", render::alert_message(&e));
                        }
                    }
                    None => println!("⚠️  Could not read '{}'", line),
                }
            }
            Phase::QuizGraded => {
                if let (Some(result), Some(grade)) = (session.result(), session.grade()) {
                    println!(
                        "\n{}",
                        render::quiz_view(&result.quiz, session.selections(), Some(grade))
                    );
                    println!("\n{}", render::score_line(grade));
                }
                match prompt(&mut input, "\n🔁 Try another animal? [y/N]").await? {
                    Some(line) if line.eq_ignore_ascii_case("y") => session.restart(),
                    _ => break,
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_answer;

    #[test]
    fn answers_are_one_based_pairs() {
        assert_eq!(parse_answer("3 2"), Some((2, 1)));
        assert_eq!(parse_answer("  10   4 "), Some((9, 3)));
        assert_eq!(parse_answer("0 1"), None);
        assert_eq!(parse_answer("3"), None);
        assert_eq!(parse_answer("3 2 1"), None);
        assert_eq!(parse_answer("three two"), None);
    }
}

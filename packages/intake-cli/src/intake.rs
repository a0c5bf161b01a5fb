use anyhow::Result;
use colored::Colorize;
use dialoguer::{Input, Select};
use marketplace_core::domains::catalog::AnswerKind;
use marketplace_core::domains::intake::{
    category_def, current_faq, faq_progress, AnswerValue, ChatStep, IntakeSession,
};
use marketplace_core::domains::matching::WorkerScore;
use marketplace_core::domains::workers::WorkerProfile;

use crate::app::{worker_line, App};

const BACK: &str = "← Back";
const CANCEL: &str = "✖ Cancel";
const SKIP: &str = "Skip";

/// What the customer picked on a question screen
enum Navigation {
    Answer(AnswerValue),
    Skip,
    Retry,
    Back,
    Cancel,
}

pub async fn run(app: &App) -> Result<()> {
    let mut session = IntakeSession::new(app.customer_id, app.store.roster(), app.dispatcher.clone());
    session.open();

    collect_problem(app, &mut session)?;

    while session.state().step == ChatStep::AnsweringFaqs {
        match ask_current_question(app, &session)? {
            Navigation::Answer(value) => {
                let draft = value.as_text().map(str::to_string);
                session.answer(value);
                session.advance(draft.as_deref());
            }
            Navigation::Skip => session.advance(None),
            Navigation::Retry => {}
            Navigation::Back => session.retreat(),
            Navigation::Cancel => {
                session.close();
                println!("{}", "Intake cancelled.".dimmed());
                return Ok(());
            }
        }
    }

    choose_worker(app, &mut session)
}

fn collect_problem(app: &App, session: &mut IntakeSession) -> Result<()> {
    while session.state().step == ChatStep::CollectingProblem {
        let text: String = Input::with_theme(&app.theme)
            .with_prompt("What do you need help with?")
            .allow_empty(true)
            .interact_text_on(&app.term)?;

        session.submit_problem(&text);
        if session.state().step == ChatStep::CollectingProblem {
            println!("{}", "Tell us a little about the job first.".yellow());
        }
    }

    let category = category_def(session.state());
    println!();
    println!(
        "{} {}",
        category.icon,
        format!("Sounds like a job for: {}", category.title).bright_green().bold()
    );
    Ok(())
}

fn ask_current_question(app: &App, session: &IntakeSession) -> Result<Navigation> {
    let state = session.state();
    let faq = current_faq(state);
    let (number, total) = faq_progress(state);
    let previous = state.answers.get(faq.id);

    println!();
    println!("{}", format!("Question {} of {}", number, total).dimmed());

    match faq.kind {
        AnswerKind::Text => {
            let initial = previous.and_then(AnswerValue::as_text).unwrap_or_default();
            let text: String = Input::with_theme(&app.theme)
                .with_prompt(faq.question)
                .with_initial_text(initial)
                .allow_empty(true)
                .interact_text_on(&app.term)?;

            if !text.trim().is_empty() {
                return Ok(Navigation::Answer(AnswerValue::Text(text.trim().to_string())));
            }

            println!("{}", "This one needs an answer.".yellow());
            let items = ["Try again", BACK, CANCEL];
            let selection = Select::with_theme(&app.theme)
                .items(&items)
                .default(0)
                .interact_on(&app.term)?;
            Ok(match selection {
                1 => Navigation::Back,
                2 => Navigation::Cancel,
                _ => Navigation::Retry,
            })
        }

        AnswerKind::YesNo => {
            let items = ["Yes", "No", BACK, CANCEL];
            let default = match previous {
                Some(AnswerValue::YesNo(false)) => 1,
                _ => 0,
            };
            let selection = Select::with_theme(&app.theme)
                .with_prompt(faq.question)
                .items(&items)
                .default(default)
                .interact_on(&app.term)?;
            Ok(match selection {
                0 => Navigation::Answer(AnswerValue::YesNo(true)),
                1 => Navigation::Answer(AnswerValue::YesNo(false)),
                2 => Navigation::Back,
                _ => Navigation::Cancel,
            })
        }

        AnswerKind::Choice(options) => {
            let mut items: Vec<&str> = options.to_vec();
            items.extend([SKIP, BACK, CANCEL]);
            let default = previous
                .and_then(AnswerValue::as_text)
                .and_then(|answer| options.iter().position(|option| *option == answer))
                .unwrap_or(0);

            let selection = Select::with_theme(&app.theme)
                .with_prompt(faq.question)
                .items(&items)
                .default(default)
                .interact_on(&app.term)?;
            Ok(match selection {
                i if i < options.len() => Navigation::Answer(AnswerValue::from(options[i])),
                i if i == options.len() => Navigation::Skip,
                i if i == options.len() + 1 => Navigation::Back,
                _ => Navigation::Cancel,
            })
        }
    }
}

fn choose_worker(app: &App, session: &mut IntakeSession) -> Result<()> {
    let ranked = session.state().ranked.clone();

    println!();
    if ranked.is_empty() {
        println!("{}", "No workers are on the roster right now.".yellow());
        session.close();
        return Ok(());
    }

    println!("{}", "🏆 Recommended workers".bright_blue().bold());
    for (worker, score) in ranked.iter().zip(session.scores()) {
        print_recommendation(worker, score);
    }
    println!();

    let mut items: Vec<String> = ranked.iter().map(|w| format!("Book {}", w.name)).collect();
    items.push(CANCEL.to_string());

    let selection = Select::with_theme(&app.theme)
        .with_prompt("Who should take the job?")
        .items(&items)
        .default(0)
        .interact_on(&app.term)?;

    let Some(worker) = ranked.get(selection) else {
        session.close();
        println!("{}", "Intake cancelled.".dimmed());
        return Ok(());
    };

    if session.select_worker(worker.id).is_some() {
        println!(
            "{}",
            format!("✅ Request sent to {}. They'll confirm shortly.", worker.name).bright_green()
        );
    }
    Ok(())
}

fn print_recommendation(worker: &WorkerProfile, score: &WorkerScore) {
    println!("  {}", worker_line(worker));
    println!(
        "    {}",
        format!(
            "score {:.2} = {} skill match(es) + {:.1} specialty + {:.1}★ rating + {:.1} availability",
            score.total(),
            score.skill_matches,
            score.specialty_boost,
            score.rating_score,
            score.availability_bonus
        )
        .dimmed()
    );
    if !worker.bio.is_empty() {
        println!("    {}", worker.bio.italic());
    }
}

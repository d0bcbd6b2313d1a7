//! hangul-drill - 한글 받아쓰기 채점 도구

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use hangul_drill::config::load_config;
use hangul_drill::{
    normalize, select_best_answer, split_by_class, to_display_jamos, to_keystroke_units,
    ScoringMode,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score an input against one or more accepted answers
    Check {
        /// Accepted answer (repeatable)
        #[arg(short, long = "answer", required = true)]
        answers: Vec<String>,

        /// Progress unit: jamo or keystroke (defaults to the config file)
        #[arg(short, long)]
        mode: Option<ScoringMode>,

        /// The learner's current input
        input: String,
    },
    /// Split text into runs of the same Hangul character class
    Split { text: String },
    /// Show the jamo and keystroke decomposition of text
    Decompose { text: String },
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    answer: &'a str,
    mode: ScoringMode,
    correct: usize,
    total: usize,
    is_exact_match: bool,
}

#[derive(Serialize)]
struct DecomposeOutput {
    normalized: String,
    jamos: String,
    keystrokes: String,
}

fn main() -> anyhow::Result<()> {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = load_config();
    let json = args.json || config.json_output;
    log::debug!("설정: {:?}", config);

    match args.command {
        Command::Check {
            answers,
            mode,
            input,
        } => {
            let mode = mode.unwrap_or(config.scoring_mode);
            let best = select_best_answer(answers.as_slice(), &input);
            // 정답 선택은 항상 키 입력 단위, 표시 단위만 설정을 따른다
            let progress = mode.score(&best.answer, &input);
            log::debug!("선택된 정답: {} ({})", best.answer, best);

            if json {
                let output = CheckOutput {
                    answer: &best.answer,
                    mode,
                    correct: progress.correct,
                    total: progress.total,
                    is_exact_match: best.is_exact_match,
                };
                println!(
                    "{}",
                    serde_json::to_string(&output).context("결과 직렬화 실패")?
                );
            } else {
                let marker = if best.is_exact_match { " (exact)" } else { "" };
                println!(
                    "{}: {} {} correct{}",
                    best.answer,
                    progress,
                    mode.unit_name(),
                    marker
                );
            }
        }
        Command::Split { text } => {
            let runs = split_by_class(&text);
            if json {
                println!(
                    "{}",
                    serde_json::to_string(&runs).context("결과 직렬화 실패")?
                );
            } else {
                for (class, run) in runs {
                    println!("{:?}\t{:?}", class, run);
                }
            }
        }
        Command::Decompose { text } => {
            let output = DecomposeOutput {
                normalized: normalize(&text),
                jamos: to_display_jamos(&text).into_iter().collect(),
                keystrokes: to_keystroke_units(&text).into_iter().collect(),
            };
            if json {
                println!(
                    "{}",
                    serde_json::to_string(&output).context("결과 직렬화 실패")?
                );
            } else {
                println!("normalized: {}", output.normalized);
                println!("jamos:      {}", output.jamos);
                println!("keystrokes: {}", output.keystrokes);
            }
        }
    }

    Ok(())
}

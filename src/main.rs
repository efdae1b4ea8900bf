use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use interview_ready::api::{ReadinessApi, create_client};
use interview_ready::config::ApiConfig;
use interview_ready::report::{scorecard, share};
use interview_ready::wizard::{
    Answer, ProfileDraft, Status, SubmitOutcome, WizardSession, WizardStep,
};

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let config = ApiConfig::from_env();
    eprintln!("🎯 Interview Ready v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   API: {}", config.base_url);

    let api = create_client(config)?;

    // Fire-and-forget page-view beacon; failures are ignored.
    {
        let api = Arc::clone(&api);
        tokio::spawn(async move {
            if let Err(e) = api.track_page_view().await {
                tracing::debug!(error = %e, "Track beacon failed");
            }
        });
    }

    // Usage counter; failure shows a placeholder.
    let checks = match api.fetch_stats().await {
        Ok(stats) if stats.count() > 0 => format_count(stats.count()),
        Ok(_) => "—".to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "Stats fetch failed");
            "—".to_string()
        }
    };
    eprintln!("   Readiness checks so far: {checks}\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut session = WizardSession::new(Arc::clone(&api));
    run_wizard(&mut session, &mut lines).await
}

async fn run_wizard(session: &mut WizardSession, input: &mut Input) -> anyhow::Result<()> {
    loop {
        // A banner means the last remote call failed; show it on the step
        // the wizard fell back to.
        if let Some(banner) = session.banner() {
            eprintln!("⚠️  {}", banner.message);
            session.dismiss_banner();
        }

        match session.step() {
            WizardStep::Intro => {
                eprintln!("Am I interview ready? Answer a few questions to find out.");
                match prompt(input, "Press Enter to start ('q' to quit): ").await? {
                    Some(line) if line.eq_ignore_ascii_case("q") => return Ok(()),
                    Some(_) => session.start()?,
                    None => return Ok(()),
                }
            }
            WizardStep::Profile => {
                let Some(draft) = read_profile(input).await? else {
                    return Ok(());
                };
                if let SubmitOutcome::Invalid(errors) = session.submit_profile(draft).await? {
                    eprintln!("Please fix the following:");
                    for (field, message) in errors.iter() {
                        eprintln!("  - {field}: {message}");
                    }
                }
            }
            WizardStep::Questions => {
                if !question_round(session, input).await? {
                    return Ok(());
                }
            }
            WizardStep::Results => {
                if !results_round(session, input).await? {
                    return Ok(());
                }
            }
            // Loading steps only exist inside submit_* awaits.
            WizardStep::PlanLoading | WizardStep::EvalLoading => unreachable!(),
        }
    }
}

async fn read_profile(input: &mut Input) -> anyhow::Result<Option<ProfileDraft>> {
    eprintln!("— Your profile —");
    let Some(status_line) = prompt(
        input,
        "Status (3rd_year / 4th_year / professional): ",
    )
    .await?
    else {
        return Ok(None);
    };
    let status = Status::parse(&status_line);

    let mut draft = ProfileDraft {
        status,
        ..Default::default()
    };

    if matches!(status, Some(Status::Professional)) {
        if let Some(years) = prompt(input, "Years of experience: ").await? {
            draft.experience_years = years.trim().parse().unwrap_or(0);
        }
        draft.target_role = prompt(input, "Target role: ").await?.unwrap_or_default();
    } else {
        draft.placement_type = prompt(input, "Placement type: ").await?.unwrap_or_default();
    }

    draft.primary_skill = prompt(input, "Primary skill / tech stack: ")
        .await?
        .unwrap_or_default();
    draft.email = prompt(input, "Email: ").await?.unwrap_or_default();
    draft.phone = prompt(input, "Phone: ").await?.unwrap_or_default();

    eprintln!("⏳ Building your question plan...");
    Ok(Some(draft))
}

/// One round of the question list. Returns false to quit.
async fn question_round(
    session: &mut WizardSession,
    input: &mut Input,
) -> anyhow::Result<bool> {
    let Some(plan) = session.plan() else {
        return Ok(true);
    };
    eprintln!("— Questions —");
    for (i, entry) in plan.entries().iter().enumerate() {
        let marker = match session.answer(i) {
            Some(answer) => format!("[{answer}]"),
            None => "[ ]".to_string(),
        };
        eprintln!("  {:>2}. {} {}", i + 1, entry.question, marker);
    }
    eprintln!("  {}", session.progress());

    let hint = if session.can_submit_answers() {
        "Answer with '<n> yes/no', or 'submit', 'back', 'q': "
    } else {
        "Answer with '<n> yes/no' ('back', 'q'): "
    };
    let Some(line) = prompt(input, hint).await? else {
        return Ok(false);
    };

    match line.trim() {
        "q" => return Ok(false),
        "back" => {
            session.back(WizardStep::Profile)?;
        }
        "submit" => {
            if session.can_submit_answers() {
                eprintln!("⏳ Evaluating your answers...");
                session.submit_answers().await?;
            } else {
                eprintln!("Answer every question first ({}).", session.progress());
            }
        }
        other => {
            let mut parts = other.split_whitespace();
            let index = parts.next().and_then(|n| n.parse::<usize>().ok());
            let answer = parts.next().and_then(Answer::parse);
            match (index, answer) {
                (Some(n), Some(answer)) if n >= 1 => {
                    if let Err(e) = session.select_answer(n - 1, answer) {
                        eprintln!("{e}");
                    }
                }
                _ => eprintln!("Didn't understand — try '2 yes'."),
            }
        }
    }
    Ok(true)
}

/// Show the report and handle share/export/retake. Returns false to quit.
async fn results_round(
    session: &mut WizardSession,
    input: &mut Input,
) -> anyhow::Result<bool> {
    let Some(report) = session.report() else {
        return Ok(true);
    };
    eprintln!("\n{}\n", report.render_text());
    eprintln!("Share: {}", share::share_text(report));
    eprintln!("  WhatsApp: {}", share::whatsapp_share_url(report));
    if let Ok(page) = std::env::var("INTERVIEW_READY_SHARE_URL") {
        eprintln!("  LinkedIn: {}", share::linkedin_share_url(&page));
    }

    let Some(line) = prompt(
        input,
        "'save <path>' for a scorecard PNG, 'retake', or 'q' to quit: ",
    )
    .await?
    else {
        return Ok(false);
    };

    match line.trim() {
        "q" => return Ok(false),
        "retake" => session.retake()?,
        other => {
            if let Some(path) = other.strip_prefix("save ") {
                match scorecard::save(report, std::path::Path::new(path.trim())) {
                    Ok(()) => eprintln!("✅ Scorecard saved to {}", path.trim()),
                    Err(e) => eprintln!("❌ {e}"),
                }
            } else {
                eprintln!("Didn't understand — 'save card.png', 'retake', or 'q'.");
            }
        }
    }
    Ok(true)
}

async fn prompt(input: &mut Input, text: &str) -> anyhow::Result<Option<String>> {
    eprint!("{text}");
    Ok(input.next_line().await?)
}

/// "12345" → "12,345".
fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

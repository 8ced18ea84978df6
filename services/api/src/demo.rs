use crate::infra::InMemoryProfileRepository;
use clap::Args;
use std::sync::Arc;
use talenta::error::AppError;
use talenta::talent::{CandidateRecord, TalentService, UserId};

#[derive(Args, Debug, Default)]
pub(crate) struct MeritBoardArgs {
    /// Limit the number of candidates printed
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Run the anomaly checklist for each listed candidate
    #[arg(long)]
    pub(crate) with_checklist: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// User walked through the demo flow
    #[arg(long, default_value = "user-001")]
    pub(crate) user: String,
    /// Training program completed during the demo
    #[arg(long, default_value = "train-001")]
    pub(crate) training: String,
    /// Skip the committee fraud-checklist portion of the demo
    #[arg(long)]
    pub(crate) skip_checklist: bool,
}

fn build_service() -> Result<TalentService<InMemoryProfileRepository>, AppError> {
    let repository = Arc::new(InMemoryProfileRepository::default());
    Ok(TalentService::new(repository)?)
}

pub(crate) fn run_merit_board(args: MeritBoardArgs) -> Result<(), AppError> {
    let service = build_service()?;
    let board = service.merit_board().map_err(AppError::from)?;
    let limit = args.limit.unwrap_or(board.len());

    println!("Merit board ({} candidates)", board.len());
    for (rank, candidate) in board.iter().take(limit).enumerate() {
        render_candidate(rank + 1, candidate);
        if args.with_checklist {
            let report = service.fraud_checklist(candidate);
            println!(
                "   checklist: {} risk | {}",
                report.overall_risk.label(),
                report.summary
            );
        }
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        user,
        training,
        skip_checklist,
    } = args;
    let user = UserId(user);

    let service = build_service()?;

    println!("Talenta merit platform demo");
    let profile = service.profile(&user).map_err(AppError::from)?;
    println!(
        "\n{} ({}) starts at merit {} with {} completed trainings",
        profile.name,
        profile.role.label(),
        profile.merit_score,
        profile.training_completed.len()
    );

    let completion = service
        .apply_training_completion(&user, &training)
        .map_err(AppError::from)?;
    println!(
        "Completed '{training}': merit {} ({:+})",
        completion.profile.merit_score, completion.profile.merit_change
    );
    if let Some(certificate) = &completion.certificate {
        println!(
            "Certificate {} | verify at {}",
            certificate.certificate_id, certificate.verification_url
        );
    }

    let recommendation = service.career_recommendation(&user);
    println!(
        "\nCareer guidance toward {} ({}% match, {} timeline, {}% projected success)",
        recommendation.next_role,
        recommendation.match_percentage,
        recommendation.timeline,
        recommendation.success_rate
    );
    for gap in &recommendation.gaps {
        println!(
            "- {}: {} -> {} (gap {}{})",
            gap.competency.label(),
            gap.current,
            gap.required,
            gap.gap,
            if gap.critical { ", critical" } else { "" }
        );
    }
    println!("Action plan:");
    for step in &recommendation.action_plan {
        match &step.duration {
            Some(duration) => println!("{}. {} [{}]", step.step, step.action, duration),
            None => println!("{}. {}", step.step, step.action),
        }
        println!("   {}", step.expected_gain);
    }

    let board = service.merit_board().map_err(AppError::from)?;
    println!("\nMerit board after the update");
    for (rank, candidate) in board.iter().enumerate() {
        render_candidate(rank + 1, candidate);
    }

    if !skip_checklist {
        if let Some(top) = board.first() {
            let report = service.fraud_checklist(top);
            println!(
                "\nAnomaly checklist for {} ({} risk)",
                report.user_name,
                report.overall_risk.label()
            );
            for item in &report.items_to_review {
                println!(
                    "- [{}] {}: {}",
                    item.severity.label(),
                    item.category,
                    item.concern
                );
                println!("  data: {} | next: {}", item.data_point, item.recommendation);
            }
            println!("{}", report.summary);
        }
    }

    Ok(())
}

fn render_candidate(rank: usize, candidate: &CandidateRecord) {
    println!(
        "{rank}. {} | merit {} | competency match {} | {} trainings | {} certificates",
        candidate.name,
        candidate.merit_score,
        candidate.competency_match,
        candidate.training_completed,
        candidate.certifications_earned.len()
    );
}

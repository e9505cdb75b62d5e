use crate::infra::{
    default_verification_config, InMemoryAlertPublisher, InMemoryProApplicationRepository,
};
use chrono::{Local, NaiveDate};
use clap::Args;
use hometrust::error::AppError;
use hometrust::workflows::directory::{
    ClientReference, CredentialKind, CredentialValue, InsuranceCertificate, LicenseRecord,
    ProApplicationRepository, ProVerificationService, SuretyBond, TradeCategory,
    VerificationSubmission,
};
use hometrust::workflows::pricing::PriceCatalog;
use hometrust::workflows::triage::report::views::{TriageInsights, TriageSummaryView};
use hometrust::workflows::triage::{build_context, TriageClassifier, TriageReport};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Project list for the triage portion of the demo.
    #[arg(
        long,
        default_value = "Leaking sink under the kitchen, AC not cooling upstairs, Paint the hallway"
    )]
    pub(crate) projects: String,
    /// Review date for the verification portion (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Skip the pro verification portion of the demo.
    #[arg(long)]
    pub(crate) skip_verification: bool,
}

#[derive(Args, Debug)]
pub(crate) struct TriageReportArgs {
    /// Comma- or newline-separated project phrases
    #[arg(long)]
    pub(crate) projects: String,
    /// Include flat-rate quotes for phrases on the price grid
    #[arg(long)]
    pub(crate) include_quotes: bool,
}

pub(crate) fn run_triage_report(args: TriageReportArgs) -> Result<(), AppError> {
    let TriageReportArgs {
        projects,
        include_quotes,
    } = args;

    let classifier = TriageClassifier::standard();
    let report = TriageReport::new(classifier.classify_list(&projects));
    let summary = report.summary();
    let insights = summary.insights();
    render_triage_report(&summary, &insights, include_quotes);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        projects,
        today,
        skip_verification,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());

    println!("HomeTrust platform demo");
    let classifier = TriageClassifier::standard();
    let report = TriageReport::new(classifier.classify_list(&projects));
    let summary = report.summary();
    let insights = summary.insights();
    render_triage_report(&summary, &insights, true);

    match build_context(&classifier, &projects) {
        Ok(context) => {
            println!("\nExpert sync briefing");
            println!("- {}", context.summary());
            println!(
                "- Mix: {} critical / {} functional / {} aesthetic",
                context.critical_count, context.functional_count, context.aesthetic_count
            );
        }
        Err(err) => println!("\nExpert sync briefing unavailable: {}", err),
    }

    if skip_verification {
        return Ok(());
    }

    println!("\nPro verification demo");
    let repository = Arc::new(InMemoryProApplicationRepository::default());
    let alerts = Arc::new(InMemoryAlertPublisher::default());
    let service = Arc::new(ProVerificationService::new(
        repository.clone(),
        alerts.clone(),
        default_verification_config(),
    ));

    let submission = demo_verification_submission(today);
    let record = match service.submit(submission) {
        Ok(record) => record,
        Err(err) => {
            println!("  Submission rejected: {}", err);
            return Ok(());
        }
    };
    let public_view = record.status_view();
    println!(
        "- Received application {} -> status {}",
        public_view.application_id.0, public_view.status
    );
    println!("  Decision rationale: {}", public_view.decision_rationale);

    let outcome = match service.evaluate(&record.profile.application_id, today) {
        Ok(outcome) => outcome,
        Err(err) => {
            println!("  Review unavailable: {}", err);
            return Ok(());
        }
    };
    println!(
        "  Review decision: {} (score {})",
        outcome.decision.summary(),
        outcome.total_score
    );
    println!(
        "  Dossier summary: {} ({}, {} years in trade)",
        record.profile.business_name,
        record.profile.trade.label(),
        record.profile.years_in_trade
    );
    println!("  Score components:");
    for component in &outcome.components {
        println!(
            "    - {:?}: {} ({})",
            component.credential, component.score, component.notes
        );
    }

    if let Some(CredentialValue::Decimal(rate)) =
        record.profile.credentials.get(&CredentialKind::References)
    {
        println!("  Reference rehire share: {:.2}", rate);
    }

    let stored_view = match repository.fetch(&record.profile.application_id) {
        Ok(Some(record)) => record.status_view(),
        Ok(None) => {
            println!("  Repository lookup returned no record");
            return Ok(());
        }
        Err(err) => {
            println!("  Repository unavailable: {}", err);
            return Ok(());
        }
    };
    match serde_json::to_string_pretty(&stored_view) {
        Ok(json) => println!("  Public status payload:\n{}", json),
        Err(err) => println!("  Public status payload unavailable: {}", err),
    }

    let events = alerts.events();
    if events.is_empty() {
        println!("  External alerts: none dispatched");
    } else {
        println!("  External alerts:");
        for alert in events {
            println!(
                "    - template={} -> {}",
                alert.template, alert.application_id.0
            );
        }
    }

    Ok(())
}

/// A complete dossier dated relative to `today` so the demo lists cleanly no
/// matter when it runs.
fn demo_verification_submission(today: NaiveDate) -> VerificationSubmission {
    let license_expiry = today
        .checked_add_signed(chrono::Duration::days(365 * 2))
        .unwrap_or(today);
    let coi_issued = today
        .checked_sub_signed(chrono::Duration::days(30))
        .unwrap_or(today);

    VerificationSubmission {
        business_name: "Davis Electrical Group".to_string(),
        trade: TradeCategory::Electrical,
        years_in_trade: 22,
        license: Some(LicenseRecord {
            number: "IA-EL-20443".to_string(),
            issuing_state: "IA".to_string(),
            expires_on: license_expiry,
        }),
        insurance: Some(InsuranceCertificate {
            carrier: "Hartwell Mutual".to_string(),
            issued_on: coi_issued,
            liability_limit: 2_000_000,
        }),
        bond: Some(SuretyBond {
            provider: "Cornerstone Surety".to_string(),
            amount: 50_000,
        }),
        references: vec![
            ClientReference {
                project: "Panel upgrade to 200A service".to_string(),
                completed_on: today
                    .checked_sub_signed(chrono::Duration::days(90))
                    .unwrap_or(today),
                would_rehire: true,
            },
            ClientReference {
                project: "Whole-home rewire after inspection".to_string(),
                completed_on: today
                    .checked_sub_signed(chrono::Duration::days(200))
                    .unwrap_or(today),
                would_rehire: true,
            },
        ],
    }
}

pub(crate) fn render_triage_report(
    summary: &TriageSummaryView,
    insights: &TriageInsights,
    include_quotes: bool,
) {
    println!("Maintenance triage demo");
    println!("Projects evaluated: {}", summary.results.len());
    match summary.headline_tier_label {
        Some(label) => println!("Headline tier: {}", label),
        None => println!("Headline tier: none (no usable phrases)"),
    }

    if summary.tier_breakdown.is_empty() {
        println!("\nTier breakdown: empty list");
    } else {
        println!("\nTier breakdown");
        for entry in &summary.tier_breakdown {
            println!("- {}: {} item(s)", entry.tier_label, entry.count);
        }
    }

    if !summary.results.is_empty() {
        println!("\nLine items");
        for result in &summary.results {
            let keyword_note = match &result.matched_keyword {
                Some(keyword) => format!(" [matched \"{}\"]", keyword),
                None => " [no keyword match]".to_string(),
            };
            let ignore_note = if result.ignorable {
                " (permission to ignore)"
            } else {
                ""
            };
            println!(
                "- {} -> {}{}{}",
                result.phrase, result.tier_label, keyword_note, ignore_note
            );
        }
    }

    println!(
        "\nAttention level: {} ({:.0}% of the list is ignorable)",
        insights.attention_label,
        insights.ignorable_pct * 100.0
    );
    if let Some(phrase) = &insights.focus_phrase {
        println!("Focus phrase: {}", phrase);
    }

    if !insights.observations.is_empty() {
        println!("\nObservations");
        for note in &insights.observations {
            println!("- {}", note);
        }
    }

    if !insights.recommended_actions.is_empty() {
        println!("\nRecommended actions");
        for action in &insights.recommended_actions {
            println!("- {}", action);
        }
    }

    if include_quotes && !summary.results.is_empty() {
        let catalog = PriceCatalog::standard();
        println!("\nFlat-rate quotes");
        for result in &summary.results {
            match catalog.match_phrase(&result.phrase) {
                Some(offer) => println!(
                    "- {}: from ${} for {} ({})",
                    result.phrase, offer.price, offer.job, offer.detail
                ),
                None => println!("- {}: no flat-rate match, a pro will scope on site", result.phrase),
            }
        }
    }
}

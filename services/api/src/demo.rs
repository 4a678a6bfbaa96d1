use std::time::Duration;

use clap::Args;
use credit_portal::analytics::{risk_distribution, ScoreBreakdown};
use credit_portal::config::SimulationConfig;
use credit_portal::error::AppError;
use credit_portal::workflows::beneficiaries::{BeneficiaryQuery, BeneficiaryStatus};
use credit_portal::workflows::borrower::{
    ApplicationId, BorrowerServiceError, DocumentKind, FileCandidate, PersonalInfoUpdate,
    VerificationStatus, WizardView,
};

use crate::infra::PortalServices;

const VERIFICATION_POLL: Duration = Duration::from_millis(25);
const VERIFICATION_ATTEMPTS: usize = 200;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Stop at the review step instead of submitting for verification.
    #[arg(long)]
    pub(crate) skip_verification: bool,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let services = PortalServices::in_memory(SimulationConfig::instant());

    println!("CreditLend portal demo");
    println!("\nBorrower application");
    let view = walk_wizard(&services, args.skip_verification).await?;
    render_application(&view);

    println!("\nAdmin dashboard");
    let beneficiaries = &services.beneficiaries;
    let metrics = beneficiaries.metrics()?;
    println!(
        "  Total beneficiaries: {}\n  Approval rate: {}%\n  Average credit score: {}\n  Low risk: {}%",
        metrics.total_beneficiaries,
        metrics.approval_rate,
        metrics.average_credit_score,
        metrics.low_risk_percentage
    );

    let rows = beneficiaries.rows()?;
    println!("\nRisk distribution");
    for slice in risk_distribution(&rows) {
        println!("  {:<12} {:>2} ({}%)", slice.name, slice.count, slice.percentage);
    }

    let pending = BeneficiaryQuery {
        status: Some(BeneficiaryStatus::Pending),
        ..BeneficiaryQuery::default()
    };
    println!("\nAwaiting review");
    for row in beneficiaries.list(&pending)? {
        println!(
            "  #{} {:<18} score {} ({})",
            row.id,
            row.name,
            row.credit_score,
            row.risk_band.label()
        );
    }

    if let Some(first) = rows.first() {
        let detail = beneficiaries.detail(first.id)?;
        render_breakdown(&first.name, &detail.score);
    }

    Ok(())
}

/// Fill every step, then optionally submit and wait for the verifier.
async fn walk_wizard(
    services: &PortalServices,
    skip_verification: bool,
) -> Result<WizardView, BorrowerServiceError> {
    let borrower = &services.borrower;
    let id = borrower.start()?.application_id;
    println!("  Started {id}");

    borrower.update_personal_info(&id, sample_personal_info())?;
    for (kind, candidate) in sample_documents() {
        borrower.upload_document(&id, kind.id(), candidate).await?;
    }

    let mut view = borrower.get(&id)?;
    while view.step < 5 {
        view = borrower.next(&id)?;
        println!("  Step {}: {}", view.step, view.step_title);
    }

    if skip_verification {
        println!("  Verification skipped");
        return Ok(view);
    }

    borrower.submit(&id).await?;
    println!("  Submitted for verification");
    wait_for_verification(services, &id).await
}

async fn wait_for_verification(
    services: &PortalServices,
    id: &ApplicationId,
) -> Result<WizardView, BorrowerServiceError> {
    for _ in 0..VERIFICATION_ATTEMPTS {
        let view = services.borrower.get(id)?;
        if view.verification.status != VerificationStatus::InProgress {
            return Ok(view);
        }
        tokio::time::sleep(VERIFICATION_POLL).await;
    }
    services.borrower.get(id)
}

fn sample_personal_info() -> PersonalInfoUpdate {
    PersonalInfoUpdate {
        full_name: Some("Meena Kumari".to_string()),
        phone_number: Some("+91 98450 11223".to_string()),
        email: Some("meena.kumari@example.in".to_string()),
        aadhaar_number: Some("5123 4488 9021".to_string()),
        pan_number: Some("ABCPK1234M".to_string()),
        address: Some("14 Gandhi Nagar, Jaipur, Rajasthan".to_string()),
    }
}

fn sample_documents() -> Vec<(DocumentKind, FileCandidate)> {
    vec![
        (DocumentKind::Aadhaar, FileCandidate::new("aadhaar-front.jpg", 640_000)),
        (DocumentKind::Pan, FileCandidate::new("pan-card.png", 410_000)),
        (DocumentKind::Electricity, FileCandidate::new("electricity-aug.pdf", 1_200_000)),
        (DocumentKind::BankStatement, FileCandidate::new("bank-statement.pdf", 3_800_000)),
        (DocumentKind::MobileRecharge, FileCandidate::new("recharge-history.png", 520_000)),
    ]
}

fn render_application(view: &WizardView) {
    println!(
        "  {} on step {} of {} with {} document(s)",
        view.application_id,
        view.step,
        view.total_steps,
        view.documents.len()
    );
    println!("  Verification: {}", view.verification.title);
    if let Some(income) = &view.verification.estimated_income {
        println!("  Estimated monthly income: {income}");
    }
    if let Some(score) = view.verification.composite_score {
        println!("  Composite score: {score}");
    }
}

fn render_breakdown(name: &str, summary: &ScoreBreakdown) {
    println!(
        "\nScore breakdown for {name}: {} ({}% of max, {:?})",
        summary.composite_score, summary.score_percentage, summary.tier
    );
    for factor in &summary.factors {
        println!(
            "  {:<22} {:>3} x {:>2}% = {:>5.2}",
            factor.name, factor.value, factor.weight, factor.contribution
        );
    }
}

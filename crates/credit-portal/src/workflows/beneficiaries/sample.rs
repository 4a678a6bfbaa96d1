use chrono::{Days, NaiveDate};

use super::domain::{
    Beneficiary, BeneficiaryId, BeneficiaryProfile, BeneficiaryStatus, DocumentVerification,
    RiskAssessment, RiskBand, SubmittedDocument, SubmittedDocumentType,
};
use super::repository::BeneficiaryRecord;
use crate::analytics::{MonthlyPayment, ScoreFactors};
use crate::workflows::shared::IncomeBand;

type Row = (
    u32,
    &'static str,
    &'static str,
    (u32, u32),
    u16,
    RiskBand,
    (i32, u32, u32),
    BeneficiaryStatus,
);

const ROWS: [Row; 8] = [
    (1, "Rajesh Kumar Singh", "rajesh.singh@email.com", (25_000, 35_000), 720, RiskBand::Low, (2024, 9, 15), BeneficiaryStatus::Approved),
    (2, "Priya Sharma", "priya.sharma@email.com", (15_000, 25_000), 680, RiskBand::Medium, (2024, 9, 20), BeneficiaryStatus::Pending),
    (3, "Mohammed Ali Khan", "ali.khan@email.com", (35_000, 50_000), 780, RiskBand::Low, (2024, 9, 18), BeneficiaryStatus::Approved),
    (4, "Sunita Devi", "sunita.devi@email.com", (10_000, 15_000), 620, RiskBand::High, (2024, 9, 22), BeneficiaryStatus::Rejected),
    (5, "Amit Patel", "amit.patel@email.com", (20_000, 30_000), 710, RiskBand::Low, (2024, 9, 25), BeneficiaryStatus::Approved),
    (6, "Kavita Reddy", "kavita.reddy@email.com", (18_000, 28_000), 650, RiskBand::Medium, (2024, 9, 28), BeneficiaryStatus::Pending),
    (7, "Ravi Gupta", "ravi.gupta@email.com", (12_000, 18_000), 590, RiskBand::High, (2024, 9, 26), BeneficiaryStatus::Pending),
    (8, "Meera Joshi", "meera.joshi@email.com", (30_000, 45_000), 750, RiskBand::Low, (2024, 9, 24), BeneficiaryStatus::Approved),
];

/// Phone, address, requested amount (rupees) and tenure (months) per sample row.
const CONTACTS: [(&str, &str, u64, u16); 8] = [
    ("+91 98765 43210", "123 Gandhi Nagar, Sector 15, New Delhi - 110001", 250_000, 24),
    ("+91 98111 22334", "45 Shivaji Park, Dadar, Mumbai - 400028", 150_000, 18),
    ("+91 99001 77665", "9 Frazer Town, Bengaluru - 560005", 400_000, 36),
    ("+91 94150 33221", "Village Rampur, District Gaya, Bihar - 823001", 60_000, 12),
    ("+91 98250 44556", "17 Satellite Road, Ahmedabad - 380015", 200_000, 24),
    ("+91 98490 66778", "8-2-293 Banjara Hills, Hyderabad - 500034", 175_000, 24),
    ("+91 97180 99001", "22 Civil Lines, Kanpur - 208001", 90_000, 12),
    ("+91 98220 11223", "5 Model Colony, Pune - 411016", 300_000, 30),
];

const OFFICERS: [&str; 3] = ["Priya Patel", "Arjun Mehta", "Neha Iyer"];

fn date((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// The eight rows shown on the admin dashboard.
pub fn sample_beneficiaries() -> Vec<Beneficiary> {
    ROWS.iter()
        .map(|&(id, name, email, (min, max), score, risk, applied, status)| Beneficiary {
            id: BeneficiaryId(id),
            name: name.to_string(),
            email: email.to_string(),
            income_band: IncomeBand::new(min, max),
            credit_score: score,
            risk_band: risk,
            application_date: date(applied),
            status,
        })
        .collect()
}

/// Full records behind the sample rows, used to seed the in-memory store.
pub fn sample_records() -> Vec<BeneficiaryRecord> {
    sample_beneficiaries()
        .into_iter()
        .zip(CONTACTS)
        .enumerate()
        .map(|(index, (summary, contact))| build_record(index, summary, contact))
        .collect()
}

fn build_record(
    index: usize,
    summary: Beneficiary,
    (phone, address, loan_amount, tenure): (&str, &str, u64, u16),
) -> BeneficiaryRecord {
    let applied = summary.application_date;
    let processing_days = 5 + (index as u16 % 4);
    let profile = BeneficiaryProfile {
        phone: phone.to_string(),
        address: address.to_string(),
        estimated_income: (summary.income_band.min + summary.income_band.max) / 2,
        loan_amount,
        loan_tenure_months: tenure,
        assigned_officer: OFFICERS[index % OFFICERS.len()].to_string(),
        processing_days,
        last_updated: applied
            .checked_add_days(Days::new(u64::from(processing_days) + 8))
            .unwrap_or(applied),
    };

    let risk = risk_assessment(summary.risk_band, loan_amount);
    let score = ScoreFactors {
        composite_score: summary.credit_score,
        repayment_history: 85,
        utility_data: 78,
        recharge_data: 82,
        income_stability: 75,
        confidence_level: 88,
    };

    BeneficiaryRecord {
        documents: documents(applied),
        summary,
        profile,
        score,
        risk,
        payments: payment_history(),
        notes: Vec::new(),
        decision: None,
    }
}

fn risk_assessment(band: RiskBand, loan_amount: u64) -> RiskAssessment {
    let (risk_score, default_probability, recovery_rate, factors) = match band {
        RiskBand::Low => (20, 4.0, 90, [RiskBand::Low, RiskBand::Low, RiskBand::Low, RiskBand::Low, RiskBand::Low]),
        RiskBand::Medium => (35, 8.5, 85, [RiskBand::Low, RiskBand::Medium, RiskBand::Low, RiskBand::Low, RiskBand::Medium]),
        RiskBand::High => (62, 18.0, 70, [RiskBand::High, RiskBand::Medium, RiskBand::High, RiskBand::Medium, RiskBand::Medium]),
    };

    RiskAssessment {
        overall_risk: band,
        risk_score,
        payment_history_risk: factors[0],
        income_stability_risk: factors[1],
        debt_to_income_risk: factors[2],
        geographic_risk: factors[3],
        behavioral_risk: factors[4],
        default_probability,
        expected_loss: (loan_amount as f64 * default_probability / 100.0).round() as u64,
        recovery_rate,
    }
}

fn documents(applied: NaiveDate) -> Vec<SubmittedDocument> {
    let entries = [
        ("doc_001", SubmittedDocumentType::ElectricityBill, 0, DocumentVerification::Verified, "2.3 MB", "PDF", "Monthly consumption: 245 units, Amount: ₹2,450, Payment date: 10th of each month"),
        ("doc_002", SubmittedDocumentType::MobileRecharge, 0, DocumentVerification::Verified, "1.8 MB", "JPG", "Plan: ₹599/month, Validity: 84 days, Regular recharge pattern"),
        ("doc_003", SubmittedDocumentType::Aadhaar, 1, DocumentVerification::Pending, "1.2 MB", "PDF", "Identity details match application, address verified"),
        ("doc_004", SubmittedDocumentType::BankStatement, 1, DocumentVerification::Verified, "3.1 MB", "PDF", "Average monthly balance: ₹52,000, Salary credit: ₹45,000, Regular transactions"),
        ("doc_005", SubmittedDocumentType::WaterBill, 2, DocumentVerification::Rejected, "1.5 MB", "JPG", "Document quality insufficient for verification"),
        ("doc_006", SubmittedDocumentType::GasBill, 2, DocumentVerification::Verified, "2.0 MB", "PDF", "Monthly consumption: 28 units, Amount: ₹850, Regular payment history"),
    ];

    entries
        .into_iter()
        .map(|(id, document_type, offset, status, size, format, extracted)| SubmittedDocument {
            id: id.to_string(),
            document_type,
            upload_date: applied.checked_add_days(Days::new(offset)).unwrap_or(applied),
            verification_status: status,
            file_size: size.to_string(),
            format: format.to_string(),
            extracted_data: extracted.to_string(),
        })
        .collect()
}

fn payment_history() -> Vec<MonthlyPayment> {
    vec![
        MonthlyPayment::new("Jan", 8.0, 2.0, 2400.0),
        MonthlyPayment::new("Feb", 9.0, 1.0, 2350.0),
        MonthlyPayment::new("Mar", 10.0, 0.0, 2500.0),
        MonthlyPayment::new("Apr", 8.0, 2.0, 2450.0),
        MonthlyPayment::new("May", 9.0, 1.0, 2600.0),
        MonthlyPayment::new("Jun", 10.0, 0.0, 2550.0),
    ]
}

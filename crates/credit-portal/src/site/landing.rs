use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub label: &'static str,
    pub path: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub badge: &'static str,
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub actions: [CallToAction; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub content: &'static str,
    pub rating: u8,
    pub loan_amount: &'static str,
    pub approval_time: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImpactMetric {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingContent {
    pub hero: Hero,
    pub features: [Feature; 4],
    pub testimonials: [Testimonial; 3],
    pub impact_metrics: [ImpactMetric; 4],
}

pub const LANDING: LandingContent = LandingContent {
    hero: Hero {
        badge: "AI-Powered Credit Scoring",
        heading: "Unlock Credit Access with Digital Intelligence",
        subtitle: "Empowering underserved communities with AI-driven credit scoring through utility bills and mobile recharge data. Fast, transparent, and inclusive financial access.",
        actions: [
            CallToAction {
                label: "Check Eligibility",
                path: "/borrower-portal",
            },
            CallToAction {
                label: "Partner Login",
                path: "/admin-partner-login",
            },
        ],
    },
    features: [
        Feature {
            title: "AI-Powered Credit Scoring",
            description: "Advanced machine learning algorithms analyze utility bills and mobile recharge patterns to generate accurate credit scores for underserved populations.",
        },
        Feature {
            title: "Income Verification",
            description: "Seamless verification through electricity bills, water bills, gas bills, and mobile recharge data to establish reliable income patterns.",
        },
        Feature {
            title: "Digital Loan Sanctioning",
            description: "Instant loan approval and sanctioning through automated risk assessment and digital document processing for faster financial access.",
        },
        Feature {
            title: "Transparent Risk Bands",
            description: "Clear risk categorization with detailed score breakdown showing repayment history, utility data analysis, and composite scoring methodology.",
        },
    ],
    testimonials: [
        Testimonial {
            name: "Priya Sharma",
            role: "Small Business Owner",
            location: "Mumbai, Maharashtra",
            content: "CreditLend Pro changed my life! As a street vendor, I never had access to formal credit. Through my electricity bills and mobile recharge history, I got approved for ₹50,000 in just 2 hours. Now I've expanded my business and employ 3 people.",
            rating: 5,
            loan_amount: "₹50,000",
            approval_time: "2 hours",
        },
        Testimonial {
            name: "Rajesh Kumar",
            role: "Auto Rickshaw Driver",
            location: "Delhi, NCR",
            content: "I was skeptical about digital lending, but CreditLend Pro's transparent process won me over. They explained every step of my credit score calculation. Got ₹75,000 to buy a new rickshaw. The AI really understood my income pattern from my phone recharges.",
            rating: 5,
            loan_amount: "₹75,000",
            approval_time: "1.5 hours",
        },
        Testimonial {
            name: "Sunita Devi",
            role: "Domestic Worker",
            location: "Bangalore, Karnataka",
            content: "Traditional banks rejected me because I don't have salary slips. But CreditLend Pro saw my consistent utility bill payments and regular mobile recharges. Got ₹25,000 for my daughter's education. The process was so simple and respectful.",
            rating: 5,
            loan_amount: "₹25,000",
            approval_time: "3 hours",
        },
    ],
    impact_metrics: [
        ImpactMetric {
            value: "2,50,000+",
            label: "Beneficiaries Served",
            description: "Underserved individuals empowered",
        },
        ImpactMetric {
            value: "₹500 Cr+",
            label: "Loans Disbursed",
            description: "Total credit access provided",
        },
        ImpactMetric {
            value: "2.5 Hours",
            label: "Average Approval Time",
            description: "From application to sanction",
        },
        ImpactMetric {
            value: "94.2%",
            label: "Approval Rate",
            description: "Successful loan applications",
        },
    ],
};

pub fn landing_content() -> &'static LandingContent {
    &LANDING
}

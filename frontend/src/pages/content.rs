use crate::components::icon::IconKind;
use crate::models::Plan;

pub struct Feature {
    pub icon: IconKind,
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct Step {
    pub number: &'static str,
    pub icon: IconKind,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(PartialEq)]
pub struct PlanOffer {
    pub plan: Plan,
    pub desc: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub icon: IconKind,
    pub features: &'static [&'static str],
    pub button_text: &'static str,
}

pub static FEATURES: [Feature; 6] = [
    Feature {
        icon: IconKind::QrCode,
        title: "Unique ID & QR Codes",
        desc: "Every document gets a cryptographic unique identifier and scannable QR code that can't be duplicated or forged.",
    },
    Feature {
        icon: IconKind::Shield,
        title: "AI Document Scanning",
        desc: "Advanced AI detects tampering, edits, and forgeries by analyzing document hashes and signatures.",
    },
    Feature {
        icon: IconKind::Mail,
        title: "Direct Email Integration",
        desc: "Send verified documents directly through our platform with embedded authenticity codes.",
    },
    Feature {
        icon: IconKind::Zap,
        title: "Instant Verification",
        desc: "Verify any document in seconds - just upload the file or scan the QR code for immediate results.",
    },
    Feature {
        icon: IconKind::Lock,
        title: "Bank-Grade Security",
        desc: "Enterprise-level encryption and secure cloud storage keep all documents protected from unauthorized access.",
    },
    Feature {
        icon: IconKind::BarChart,
        title: "Analytics Dashboard",
        desc: "Track documents issued, verification success rates, and detailed analytics for your organization.",
    },
];

pub static STEPS: [Step; 4] = [
    Step {
        number: "01",
        icon: IconKind::UploadCloud,
        title: "Upload Document",
        desc: "Companies upload certificates, offer letters, or any official document to our secure platform.",
    },
    Step {
        number: "02",
        icon: IconKind::ScanLine,
        title: "AI Verification",
        desc: "Our AI scans the document for authenticity, assigns a unique cryptographic ID, and embeds a QR code.",
    },
    Step {
        number: "03",
        icon: IconKind::Mail,
        title: "Secure Distribution",
        desc: "Send verified documents directly through our platform or download them with embedded verification codes.",
    },
    Step {
        number: "04",
        icon: IconKind::Check,
        title: "Instant Verification",
        desc: "Anyone can verify document authenticity by uploading it or scanning the QR code - results in seconds.",
    },
];

static BASIC: PlanOffer = PlanOffer {
    plan: Plan::Basic,
    desc: "Perfect for small businesses and startups",
    price: "₹149",
    period: "/month",
    icon: IconKind::Zap,
    features: &[
        "Upload up to 150 documents/month",
        "Generate unique IDs & QR codes",
        "Document download (no email sending)",
        "Basic AI scanning",
        "Standard support",
    ],
    button_text: "Start Basic",
};

static PROFESSIONAL: PlanOffer = PlanOffer {
    plan: Plan::Professional,
    desc: "For growing companies with verification needs",
    price: "₹229",
    period: "/month",
    icon: IconKind::FileCheck,
    features: &[
        "Upload 150 + Send 150 documents",
        "Direct email integration",
        "Advanced AI tamper detection",
        "Priority scanning",
        "Email & chat support",
        "Custom branding options",
    ],
    button_text: "Start Professional",
};

static ENTERPRISE: PlanOffer = PlanOffer {
    plan: Plan::Enterprise,
    desc: "For large organizations and institutions",
    price: "₹2,199",
    period: "/year",
    icon: IconKind::Shield,
    features: &[
        "Upload 250 + Send 250 documents/month",
        "Full white-label branding",
        "Advanced analytics dashboard",
        "Multi-user access",
        "API integration support",
        "Dedicated account manager",
        "Priority support 24/7",
    ],
    button_text: "Start Enterprise",
};

pub fn offer(plan: Plan) -> &'static PlanOffer {
    match plan {
        Plan::Basic => &BASIC,
        Plan::Professional => &PROFESSIONAL,
        Plan::Enterprise => &ENTERPRISE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_plan_has_its_own_offer() {
        for plan in Plan::ALL {
            let offer = offer(plan);
            assert_eq!(offer.plan, plan);
            assert!(offer.button_text.ends_with(plan.label()));
            assert!(!offer.features.is_empty());
        }
    }

    #[test]
    fn steps_are_numbered_in_order() {
        let numbers: Vec<&str> = STEPS.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec!["01", "02", "03", "04"]);
    }
}

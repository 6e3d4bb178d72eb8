//! Static page copy. Everything here is built once and never mutated.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolutionGroup {
    pub title: &'static str,
    pub description: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Demo {
    pub title: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub quote: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Select(&'static [SelectOption]),
    TextArea { rows: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormField {
    pub id: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub kind: FieldKind,
    pub placeholder: Option<&'static str>,
    /// Shares a row with the neighbouring half-width field on wide screens.
    pub half_width: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormSpec {
    pub id: &'static str,
    pub aria_label: &'static str,
    pub fields: &'static [FormField],
    pub submit_label: &'static str,
    pub booking_label: &'static str,
    /// `{brand}` is replaced with the site brand when rendered.
    pub acknowledgement: &'static str,
    pub footnote: Option<&'static str>,
}

pub const TRUST_SECTORS: &[&str] = &[
    "Retail",
    "Professional Services",
    "Real Estate",
    "Healthcare",
    "Logistics",
    "SaaS",
];

pub const SOLUTION_GROUPS: &[SolutionGroup] = &[
    SolutionGroup {
        title: "Sales & Marketing Automation",
        description: "Prospect, engage, qualify, and book calls automatically.",
        items: &[
            "AI outreach & follow-up sequences",
            "Lead qualification bots",
            "CRM & lead scoring automation",
            "Social content & scheduling",
            "Ad campaign optimization",
        ],
    },
    SolutionGroup {
        title: "Operations & Delivery Automation",
        description: "Streamline service delivery and internal workflows.",
        items: &[
            "Service delivery pipelines",
            "Document & contract automation",
            "Scheduling & task orchestration",
            "Finance & invoice workflows",
            "HR & recruitment automation",
        ],
    },
    SolutionGroup {
        title: "Communication & Support Automation",
        description: "Voice and chat agents for routine communication.",
        items: &[
            "AI phone callers / voice agents",
            "Tier-1 support agents (chat/email/ticketing)",
            "Appointment reminders & confirmations",
            "Sentiment & intent analysis",
            "FAQ & knowledge bots",
        ],
    },
    SolutionGroup {
        title: "Digital Presence & Commerce",
        description: "Intelligent websites, apps, and e-commerce experiences.",
        items: &[
            "Websites & web apps",
            "E-commerce automations",
            "Website chatbots & lead capture",
            "Analytics & user insights",
        ],
    },
];

pub const DEMOS: &[Demo] = &[
    Demo { title: "Lead Enrichment", href: "#" },
    Demo { title: "RAG on Company Docs", href: "#" },
    Demo { title: "Support Draft Reply", href: "#" },
];

pub const STATS: &[Stat] = &[
    Stat { label: "Time to first value", value: "≤ 2 weeks" },
    Stat { label: "Pilot → Production", value: "80%+" },
    Stat { label: "Avg. handle time", value: "-30–45%" },
];

pub const WORK_WITH_US_POINTS: &[&str] = &[
    "No fixed pricing, every solution is tailored to your goals.",
    "From startups to enterprises, we scale with your ambitions.",
    "Empowering businesses to operate smarter, faster, and more efficiently in any industry.",
];

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep { title: "Discovery", description: "Goals, constraints, data sources, and success metrics." },
    ProcessStep { title: "Design", description: "Architecture, safety, evaluations, and rollout plan." },
    ProcessStep { title: "Build", description: "Integrations, agents, and dashboards with observability." },
    ProcessStep { title: "Launch", description: "Guardrails, monitoring, and iteration on real usage." },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Operations Lead (anonymized)",
        quote: "Automation shipped safely and fast; meaningful impact on cycle time.",
    },
    Testimonial {
        name: "Growth Lead (anonymized)",
        quote: "Assistants paid for themselves within weeks. Clean integrations.",
    },
];

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "Which tools do you integrate?",
        answer: "HubSpot, Salesforce, Zendesk, Intercom, Notion, Postgres, S3, Google Drive, Slack, and custom APIs.",
    },
    FaqEntry {
        question: "How do you handle safety?",
        answer: "Evals, rate limits, content filters, human-in-the-loop options, and full observability with quick rollback.",
    },
    FaqEntry {
        question: "What’s the typical timeline?",
        answer: "Discovery in days, first value within two weeks, production rollout depending on scope.",
    },
];

const BUDGET_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "", label: "Prefer not to say" },
    SelectOption { value: "5-10", label: "$5k–$10k" },
    SelectOption { value: "10-25", label: "$10k–$25k" },
    SelectOption { value: "25-50", label: "$25k–$50k" },
    SelectOption { value: "50plus", label: "$50k+" },
];

pub static PLAN_FORM: FormSpec = FormSpec {
    id: "plan",
    aria_label: "Custom plan form",
    fields: &[
        FormField {
            id: "name",
            label: "Name",
            required: true,
            kind: FieldKind::Text,
            placeholder: Some("Jane Doe"),
            half_width: true,
        },
        FormField {
            id: "email",
            label: "Email",
            required: true,
            kind: FieldKind::Email,
            placeholder: Some("jane@company.com"),
            half_width: true,
        },
        FormField {
            id: "company",
            label: "Company / Business type",
            required: false,
            kind: FieldKind::Text,
            placeholder: Some("Acme Inc. (B2B services)"),
            half_width: false,
        },
        FormField {
            id: "budget",
            label: "Approximate budget (optional)",
            required: false,
            kind: FieldKind::Select(BUDGET_OPTIONS),
            placeholder: None,
            half_width: false,
        },
        FormField {
            id: "message",
            label: "What would you like to automate?",
            required: true,
            kind: FieldKind::TextArea { rows: 4 },
            placeholder: Some("Goals, systems, and timeline"),
            half_width: false,
        },
    ],
    submit_label: "Get my custom plan",
    booking_label: "Or book a call",
    acknowledgement: "Thank you, an {brand} specialist will contact you shortly.",
    footnote: None,
};

pub static CONTACT_FORM: FormSpec = FormSpec {
    id: "contact",
    aria_label: "Contact form",
    fields: &[
        FormField {
            id: "name",
            label: "Name",
            required: true,
            kind: FieldKind::Text,
            placeholder: Some("Jane Doe"),
            half_width: true,
        },
        FormField {
            id: "email",
            label: "Email",
            required: true,
            kind: FieldKind::Email,
            placeholder: Some("jane@brand.com"),
            half_width: true,
        },
        FormField {
            id: "message",
            label: "Message",
            required: false,
            kind: FieldKind::TextArea { rows: 4 },
            placeholder: Some("How can we help?"),
            half_width: false,
        },
    ],
    submit_label: "Send message",
    booking_label: "Or book on Calendly",
    acknowledgement: "Thanks for reaching out. {brand} will reply within 1 business day.",
    footnote: Some("We’ll only use your info to respond. No spam."),
};

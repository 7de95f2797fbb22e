//! Research page model.
//!
//! The page has three sections switched by a nav bar. Question cards expand
//! one at a time and, while hovered, highlight the topics and policies they
//! connect to. Topics and policies open a shared detail panel.

use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResearchSection {
    #[default]
    Questions,
    Topics,
    Policy,
}

impl ResearchSection {
    pub const ALL: [ResearchSection; 3] = [
        ResearchSection::Questions,
        ResearchSection::Topics,
        ResearchSection::Policy,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ResearchSection::Questions => "questions",
            ResearchSection::Topics => "topics",
            ResearchSection::Policy => "policy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResearchSection::Questions => "Research Questions",
            ResearchSection::Topics => "Topics",
            ResearchSection::Policy => "Policy",
        }
    }
}

/// Something a question card can point at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Connection {
    Topic(&'static str),
    Policy(&'static str),
}

impl Connection {
    pub fn id(&self) -> &'static str {
        match self {
            Connection::Topic(id) | Connection::Policy(id) => id,
        }
    }
}

/// The research questions, numbered from 1.
pub const QUESTIONS: [&str; 5] = [
    "How can garments sense and adapt to the climates their wearers move through?",
    "Who owns the data a connected garment collects about its wearer?",
    "How do we keep adaptive systems fair when their models learn from biased data?",
    "Can adaptive clothing ease the unequal burden of urban heat?",
    "What would a circular, adaptive wardrobe look like in practice?",
];

/// Topics and policies a question card highlights while hovered.
pub fn connections(question: u8) -> &'static [Connection] {
    match question {
        1 => &[Connection::Topic("climate"), Connection::Topic("smart-cities")],
        2 => &[Connection::Topic("privacy"), Connection::Policy("governance")],
        3 => &[Connection::Topic("privacy"), Connection::Policy("bias")],
        4 => &[Connection::Topic("climate"), Connection::Policy("justice")],
        5 => &[Connection::Topic("fashion"), Connection::Policy("justice")],
        _ => &[],
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailKind {
    /// Items are "Key Implications"
    Topic,
    /// Items are "Policy Recommendations"
    Policy,
}

impl DetailKind {
    pub fn items_heading(&self) -> &'static str {
        match self {
            DetailKind::Topic => "Key Implications",
            DetailKind::Policy => "Policy Recommendations",
        }
    }
}

/// Content of the detail panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Detail {
    pub kind: DetailKind,
    pub title: &'static str,
    pub description: &'static str,
    pub items: &'static [&'static str],
}

impl Detail {
    fn new(
        kind: DetailKind,
        title: &'static str,
        description: &'static str,
        items: &'static [&'static str],
    ) -> Self {
        Self {
            kind,
            title,
            description,
            items,
        }
    }
}

pub const TOPIC_IDS: [&str; 4] = ["climate", "smart-cities", "privacy", "fashion"];
pub const POLICY_IDS: [&str; 3] = ["governance", "bias", "justice"];

pub fn topic_detail(id: &str) -> Option<Detail> {
    let detail = |title, description, items: &'static [&'static str]| {
        Detail::new(DetailKind::Topic, title, description, items)
    };
    Some(match id {
        "climate" => detail(
            "Climate Adaptation",
            "Exploring how adaptive garments can respond to changing environmental conditions and contribute to climate resilience strategies.",
            &[
                "Temperature-responsive materials",
                "Weather prediction integration",
                "Urban heat island mitigation",
                "Seasonal adaptation systems",
            ],
        ),
        "smart-cities" => detail(
            "Smart Cities",
            "Investigating the role of wearable technology in smart city infrastructure and urban data ecosystems.",
            &[
                "IoT integration",
                "Urban mobility optimization",
                "Environmental monitoring",
                "Citizen data participation",
            ],
        ),
        "privacy" => detail(
            "Privacy in IoT",
            "Examining privacy concerns and data protection in the context of connected wearable devices.",
            &[
                "Data encryption standards",
                "User consent frameworks",
                "Anonymization techniques",
                "Regulatory compliance",
            ],
        ),
        "fashion" => detail(
            "Sustainable Fashion Futures",
            "Reimagining fashion consumption through adaptive, long-lasting garments that reduce environmental impact.",
            &[
                "Circular design principles",
                "Material innovation",
                "Consumer behavior change",
                "Supply chain transparency",
            ],
        ),
        _ => return None,
    })
}

pub fn policy_detail(id: &str) -> Option<Detail> {
    let detail = |title, description, items: &'static [&'static str]| {
        Detail::new(DetailKind::Policy, title, description, items)
    };
    Some(match id {
        "governance" => detail(
            "Data Governance",
            "Establishing frameworks for responsible data collection, storage, and usage in adaptive systems.",
            &[
                "Clear data ownership policies",
                "Transparent data processing",
                "User control mechanisms",
                "Cross-border data regulations",
            ],
        ),
        "bias" => detail(
            "Algorithmic Bias Prevention",
            "Implementing safeguards to prevent discrimination and ensure fairness in AI-driven decision making.",
            &[
                "Diverse training datasets",
                "Bias detection algorithms",
                "Regular fairness audits",
                "Inclusive design principles",
            ],
        ),
        "justice" => detail(
            "Environmental Justice",
            "Ensuring equitable access to adaptive technologies and their benefits across different communities.",
            &[
                "Affordable technology access",
                "Community engagement programs",
                "Local manufacturing support",
                "Education and training initiatives",
            ],
        ),
        _ => return None,
    })
}

/// Interactive state of the research page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResearchPage {
    section: ResearchSection,
    open_question: Option<u8>,
    highlighted: BTreeSet<Connection>,
    detail: Option<Detail>,
}

impl ResearchPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self) -> ResearchSection {
        self.section
    }

    pub fn show_section(&mut self, section: ResearchSection) {
        self.section = section;
    }

    pub fn open_question(&self) -> Option<u8> {
        self.open_question
    }

    /// Open `question`, closing any other; clicking the open card closes it.
    pub fn toggle_question(&mut self, question: u8) {
        self.open_question = if self.open_question == Some(question) {
            None
        } else {
            Some(question)
        };
    }

    pub fn hover_question(&mut self, question: u8) {
        self.highlighted = connections(question).iter().copied().collect();
    }

    pub fn clear_highlights(&mut self) {
        self.highlighted.clear();
    }

    pub fn is_highlighted(&self, connection: &Connection) -> bool {
        self.highlighted.contains(connection)
    }

    pub fn highlighted(&self) -> impl Iterator<Item = &Connection> {
        self.highlighted.iter()
    }

    /// Open the detail panel for a topic. Unknown ids leave it untouched.
    pub fn show_topic(&mut self, id: &str) -> bool {
        self.show_detail(topic_detail(id))
    }

    pub fn show_policy(&mut self, id: &str) -> bool {
        self.show_detail(policy_detail(id))
    }

    pub fn detail(&self) -> Option<&Detail> {
        self.detail.as_ref()
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    fn show_detail(&mut self, detail: Option<Detail>) -> bool {
        match detail {
            Some(detail) => {
                tracing::info!("Research detail opened: {}", detail.title);
                self.detail = Some(detail);
                true
            }
            None => false,
        }
    }
}

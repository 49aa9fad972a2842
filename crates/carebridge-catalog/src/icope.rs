use std::sync::LazyLock;

use crate::types::{AnswerOption, Domain, Question, WizardStep};
use crate::Catalog;

impl Catalog {
    /// The standard WHO ICOPE screening catalog: twelve domains, each with
    /// 1–2 questions valued 0–2 points, grouped into six wizard steps.
    /// 0 = no concern, 2 = most impaired.
    pub fn icope() -> &'static Catalog {
        &ICOPE
    }
}

fn question(id: &str, prompt: &str, options: &[(&str, u8)]) -> Question {
    Question {
        id: id.to_string(),
        prompt: prompt.to_string(),
        options: options
            .iter()
            .map(|(label, points)| AnswerOption {
                label: label.to_string(),
                points: *points,
            })
            .collect(),
    }
}

fn domain(id: &str, name: &str, icon: &str, questions: Vec<Question>) -> Domain {
    Domain {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        questions,
    }
}

fn step(title: &str, domain_ids: &[&str]) -> WizardStep {
    WizardStep {
        title: title.to_string(),
        domain_ids: domain_ids.iter().map(|id| id.to_string()).collect(),
    }
}

static ICOPE: LazyLock<Catalog> = LazyLock::new(|| {
    let domains = vec![
        domain(
            "cognition",
            "Cognition",
            "brain",
            vec![
                question(
                    "memory_complaints",
                    "Does the elder forget recent events or repeat the same questions?",
                    &[("No", 0), ("Occasionally", 1), ("Frequently", 2)],
                ),
                question(
                    "orientation",
                    "Can they state today's date and where they are?",
                    &[("Both", 0), ("Only one of the two", 1), ("Neither", 2)],
                ),
            ],
        ),
        domain(
            "mood",
            "Mood",
            "heart",
            vec![
                question(
                    "low_mood",
                    "Over the past two weeks, have they felt down, depressed, or hopeless?",
                    &[
                        ("Not at all", 0),
                        ("Several days", 1),
                        ("More than half the days", 2),
                    ],
                ),
                question(
                    "loss_of_interest",
                    "Little interest or pleasure in doing things they used to enjoy?",
                    &[
                        ("Not at all", 0),
                        ("Several days", 1),
                        ("More than half the days", 2),
                    ],
                ),
            ],
        ),
        domain(
            "mobility",
            "Mobility",
            "walking",
            vec![
                question(
                    "chair_stand",
                    "Can they rise from a chair five times in a row without using their arms?",
                    &[("Easily", 0), ("With difficulty", 1), ("Unable", 2)],
                ),
                question(
                    "balance",
                    "Any falls or unsteadiness while walking in the last year?",
                    &[
                        ("None", 0),
                        ("One fall or occasional unsteadiness", 1),
                        ("Repeated falls", 2),
                    ],
                ),
            ],
        ),
        domain(
            "vision",
            "Vision",
            "eye",
            vec![question(
                "eyesight",
                "Difficulty seeing at a distance or reading, even with glasses?",
                &[("None", 0), ("Some difficulty", 1), ("Severe difficulty", 2)],
            )],
        ),
        domain(
            "hearing",
            "Hearing",
            "ear",
            vec![question(
                "conversation",
                "Trouble following a conversation or hearing a whispered voice?",
                &[("None", 0), ("Some trouble", 1), ("Severe trouble", 2)],
            )],
        ),
        domain(
            "vitality",
            "Vitality",
            "battery",
            vec![
                question(
                    "appetite_loss",
                    "Reduced appetite or unintended weight loss in the last three months?",
                    &[
                        ("No change", 0),
                        ("Reduced appetite", 1),
                        ("Weight loss over 3 kg", 2),
                    ],
                ),
                question(
                    "fatigue",
                    "Exhausted by ordinary daily activities?",
                    &[("Rarely", 0), ("Sometimes", 1), ("Most days", 2)],
                ),
            ],
        ),
        domain(
            "sleep",
            "Sleep",
            "moon",
            vec![
                question(
                    "falling_asleep",
                    "Trouble falling asleep or staying asleep at night?",
                    &[("Rarely", 0), ("Some nights", 1), ("Most nights", 2)],
                ),
                question(
                    "daytime_drowsiness",
                    "Dozing off unintentionally during the day?",
                    &[("Rarely", 0), ("Sometimes", 1), ("Daily", 2)],
                ),
            ],
        ),
        domain(
            "continence",
            "Continence",
            "droplet",
            vec![question(
                "leakage",
                "Any urine leakage in the past month?",
                &[("Never", 0), ("Occasionally", 1), ("Daily", 2)],
            )],
        ),
        domain(
            "self_care",
            "Basic Self-care",
            "bath",
            vec![
                question(
                    "bathing_dressing",
                    "Help needed with bathing or dressing?",
                    &[("None", 0), ("Some help", 1), ("Fully dependent", 2)],
                ),
                question(
                    "eating_toileting",
                    "Help needed with eating or using the toilet?",
                    &[("None", 0), ("Some help", 1), ("Fully dependent", 2)],
                ),
            ],
        ),
        domain(
            "daily_tasks",
            "Daily Tasks",
            "clipboard",
            vec![
                question(
                    "medication_finances",
                    "Manages their own medication and finances?",
                    &[
                        ("Without help", 0),
                        ("With reminders", 1),
                        ("Not without help", 2),
                    ],
                ),
                question(
                    "shopping_meals",
                    "Shops and prepares meals independently?",
                    &[
                        ("Independently", 0),
                        ("With some help", 1),
                        ("Not at all", 2),
                    ],
                ),
            ],
        ),
        domain(
            "social",
            "Social Engagement",
            "users",
            vec![
                question(
                    "contact",
                    "How often do they see family, friends, or neighbours?",
                    &[
                        ("Weekly or more", 0),
                        ("About monthly", 1),
                        ("Rarely or never", 2),
                    ],
                ),
                question(
                    "loneliness",
                    "Do they report feeling lonely?",
                    &[("Rarely", 0), ("Sometimes", 1), ("Often", 2)],
                ),
            ],
        ),
        domain(
            "care_access",
            "Care Access",
            "hospital",
            vec![question(
                "checkups",
                "Attended routine health checkups in the past year?",
                &[
                    ("Yes", 0),
                    ("Missed some", 1),
                    ("None, barriers to access", 2),
                ],
            )],
        ),
    ];

    let steps = vec![
        step("Mind & Mood", &["cognition", "mood"]),
        step("Movement & Vitality", &["mobility", "vitality"]),
        step("Senses", &["vision", "hearing"]),
        step("Rest & Continence", &["sleep", "continence"]),
        step("Daily Living", &["self_care", "daily_tasks"]),
        step("Connection & Care", &["social", "care_access"]),
    ];

    // Constructed directly: the table is maintained alongside the
    // validation rules, and the catalog tests assert it passes
    // `Catalog::new`.
    Catalog { domains, steps }
});

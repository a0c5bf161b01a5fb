//! Static service catalog.
//!
//! Plain data, fixed at compile time. `lookup` is total over `CategoryId`.

use super::models::{AnswerKind, CategoryDefinition, CategoryId, FaqItem};

/// Category used whenever classification finds no keyword at all
pub const FALLBACK_CATEGORY: CategoryId = CategoryId::General;

const PLUMBER_FAQS: &[FaqItem] = &[
    FaqItem {
        id: "location",
        kind: AnswerKind::Choice(&["Kitchen", "Bathroom", "Basement", "Laundry room", "Outdoor"]),
        question: "Where is the problem located?",
    },
    FaqItem {
        id: "severity",
        kind: AnswerKind::Choice(&["Dripping", "Steady leak", "Flooding", "No water"]),
        question: "How bad is it right now?",
    },
    FaqItem {
        id: "shutoff",
        kind: AnswerKind::YesNo,
        question: "Have you been able to shut off the water supply?",
    },
    FaqItem {
        id: "age",
        kind: AnswerKind::Choice(&["Less than 1 year", "1-3 years", "3-10 years", "Over 10 years"]),
        question: "How old are the fixtures or pipes involved?",
    },
];

const ELECTRICIAN_FAQS: &[FaqItem] = &[
    FaqItem {
        id: "issue",
        kind: AnswerKind::Choice(&[
            "No power",
            "Flickering lights",
            "Sparking outlet",
            "New installation",
            "Something else",
        ]),
        question: "What best describes the issue?",
    },
    FaqItem {
        id: "rooms",
        kind: AnswerKind::Text,
        question: "Which rooms or areas are affected?",
    },
    FaqItem {
        id: "breaker_tripped",
        kind: AnswerKind::YesNo,
        question: "Has a breaker tripped or a fuse blown?",
    },
    FaqItem {
        id: "permit",
        kind: AnswerKind::YesNo,
        question: "Will the work need a permit or inspection?",
    },
];

const PAINTER_FAQS: &[FaqItem] = &[
    FaqItem {
        id: "surface",
        kind: AnswerKind::Choice(&["Interior walls", "Exterior", "Ceiling", "Trim and doors", "Furniture"]),
        question: "What needs painting?",
    },
    FaqItem {
        id: "area",
        kind: AnswerKind::Text,
        question: "Roughly how large is the area (rooms or square feet)?",
    },
    FaqItem {
        id: "supplies",
        kind: AnswerKind::YesNo,
        question: "Do you already have the paint and supplies?",
    },
];

const DRIVER_FAQS: &[FaqItem] = &[
    FaqItem {
        id: "trip",
        kind: AnswerKind::Choice(&["Airport run", "Furniture move", "Grocery delivery", "Personal ride"]),
        question: "What kind of trip is it?",
    },
    FaqItem {
        id: "route",
        kind: AnswerKind::Text,
        question: "Where are you going from and to?",
    },
    FaqItem {
        id: "heavy_items",
        kind: AnswerKind::YesNo,
        question: "Will there be heavy items to load?",
    },
];

const GENERAL_FAQS: &[FaqItem] = &[
    FaqItem {
        id: "task",
        kind: AnswerKind::Text,
        question: "Describe the task in a few words.",
    },
    FaqItem {
        id: "duration",
        kind: AnswerKind::Choice(&["Under an hour", "A few hours", "A full day", "Several days"]),
        question: "How long do you expect it to take?",
    },
    FaqItem {
        id: "tools",
        kind: AnswerKind::YesNo,
        question: "Do you have the tools needed?",
    },
];

static CATALOG: [CategoryDefinition; 5] = [
    CategoryDefinition {
        id: CategoryId::Plumber,
        title: "Plumber",
        icon: "🔧",
        keywords: &[
            "plumb",
            "plumbing",
            "leak",
            "pipe",
            "drain",
            "sink",
            "toilet",
            "faucet",
            "clog",
            "shower",
            "water heater",
        ],
        faqs: PLUMBER_FAQS,
    },
    CategoryDefinition {
        id: CategoryId::Electrician,
        title: "Electrician",
        icon: "⚡",
        keywords: &[
            "electric", "wiring", "outlet", "socket", "breaker", "fuse", "switch", "light", "power",
            "volt",
        ],
        faqs: ELECTRICIAN_FAQS,
    },
    CategoryDefinition {
        id: CategoryId::Painter,
        title: "Painter",
        icon: "🎨",
        keywords: &[
            "paint", "wall", "ceiling", "primer", "stain", "wallpaper", "trim", "colour", "color",
        ],
        faqs: PAINTER_FAQS,
    },
    CategoryDefinition {
        id: CategoryId::Driver,
        title: "Driver",
        icon: "🚗",
        keywords: &[
            "drive",
            "ride",
            "deliver",
            "move",
            "moving",
            "pickup",
            "pick up",
            "transport",
            "airport",
            "errand",
        ],
        faqs: DRIVER_FAQS,
    },
    CategoryDefinition {
        id: CategoryId::General,
        title: "General Help",
        icon: "🛠️",
        keywords: &[
            "help",
            "fix",
            "repair",
            "assemble",
            "furniture",
            "mount",
            "yard",
            "clean",
            "handyman",
        ],
        faqs: GENERAL_FAQS,
    },
];

/// All categories in catalog order
pub fn all() -> &'static [CategoryDefinition] {
    &CATALOG
}

pub fn lookup(id: CategoryId) -> &'static CategoryDefinition {
    &CATALOG[id.index()]
}

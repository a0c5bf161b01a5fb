//! Test fixtures for building rosters.

use marketplace_core::domains::catalog::CategoryId;
use marketplace_core::domains::workers::WorkerProfile;

/// Plumber with one skill that matches the plumbing keywords
pub fn plumber() -> WorkerProfile {
    WorkerProfile::builder()
        .name("Rosa Alvarez")
        .location("Minneapolis, MN")
        .specialty(CategoryId::Plumber)
        .skills(&["plumbing", "leak repair"])
        .rating(4.8)
        .completed_jobs(112)
        .hourly_rate(65.0)
        .build()
}

/// Better-rated electrician with nothing relevant to plumbing
pub fn electrician() -> WorkerProfile {
    WorkerProfile::builder()
        .name("Sam Okafor")
        .location("St. Paul, MN")
        .specialty(CategoryId::Electrician)
        .skills(&["wiring", "outlet"])
        .rating(4.9)
        .completed_jobs(87)
        .hourly_rate(70.0)
        .build()
}

pub fn painter() -> WorkerProfile {
    WorkerProfile::builder()
        .name("June Park")
        .specialty(CategoryId::Painter)
        .skills(&["paint", "ceiling", "trim"])
        .rating(4.2)
        .build()
}

pub fn driver() -> WorkerProfile {
    WorkerProfile::builder()
        .name("Dee Halvorsen")
        .specialty(CategoryId::Driver)
        .skills(&["airport", "moving"])
        .rating(4.6)
        .build()
}

/// Highly rated handyman who is currently off the clock
pub fn unavailable_handyman() -> WorkerProfile {
    WorkerProfile::builder()
        .name("Ike Brandt")
        .specialty(CategoryId::General)
        .skills(&["handyman", "plumbing"])
        .rating(5.0)
        .available(false)
        .build()
}

pub fn sample_roster() -> Vec<WorkerProfile> {
    vec![
        plumber(),
        electrician(),
        painter(),
        driver(),
        unavailable_handyman(),
    ]
}

/// Worker documents the way the store serves them, gaps included
pub const ROSTER_JSON: &str = r#"[
    {
        "displayName": "Rosa Alvarez",
        "specialty": "Plumber",
        "skills": ["plumbing", "leak repair"],
        "rating": 4.8,
        "jobsCompleted": 112,
        "hourlyRate": 65
    },
    {
        "name": "Nameless Newcomer",
        "specialty": "carpenter"
    },
    {
        "name": "Overrated",
        "specialty": "electrician",
        "rating": 9.5,
        "available": false
    }
]"#;

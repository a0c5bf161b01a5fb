pub mod roster;

pub use roster::{parse_roster, sort_roster, RosterFeed, RosterReader, RosterSnapshot};

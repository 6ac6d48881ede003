//! Entity model: characters, monsters, encounters and adventures.

pub mod adventure;
pub mod character;
pub mod class;
pub mod encounter;
pub mod monster;

pub use adventure::Adventure;
pub use character::{Character, Stats, level_for_xp, xp_for_level};
pub use class::{CharacterClass, ClassProfile, Stat};
pub use encounter::Encounter;
pub use monster::{Challenge, Monster};

/// Join names as "A", "A and B" or "A, B and C".
pub fn join_names<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let names: Vec<&str> = names.into_iter().collect();
    match names.split_last() {
        None => String::new(),
        Some((last, [])) => (*last).to_string(),
        Some((last, rest)) => format!("{} and {last}", rest.join(", ")),
    }
}

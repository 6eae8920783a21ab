//! Compiled-in anatomical path data, one module per (gender, view) variant.
//!
//! The paths are schematic. Hosts with their own artwork build a [`Dataset`] with the same
//! slugs and pass it to the reconciler directly.

mod female_back;
mod female_front;
mod male_back;
mod male_front;

use crate::{Dataset, Gender, View};

pub use female_back::FEMALE_BACK;
pub use female_front::FEMALE_FRONT;
pub use male_back::MALE_BACK;
pub use male_front::MALE_FRONT;

pub fn dataset(gender: Gender, view: View) -> &'static Dataset {
    match (gender, view) {
        (Gender::Male, View::Front) => &MALE_FRONT,
        (Gender::Male, View::Back) => &MALE_BACK,
        (Gender::Female, View::Front) => &FEMALE_FRONT,
        (Gender::Female, View::Back) => &FEMALE_BACK,
    }
}

pub fn all_datasets() -> [&'static Dataset; 4] {
    [&MALE_FRONT, &MALE_BACK, &FEMALE_FRONT, &FEMALE_BACK]
}

mod domain;
mod letter;

pub use domain::{DataCategory, DataRight, LetterForm};
pub use letter::generate_letter;

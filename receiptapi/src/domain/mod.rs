pub mod points;
pub mod receipts;

pub mod prelude {
    pub use super::{
        points::{score, ScoringError},
        receipts::{Item, Receipt, ScoreRecord},
    };
}

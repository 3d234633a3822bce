pub mod catalogue;
pub mod game;
pub mod question;

pub use catalogue::{Catalogue, Theme};
pub use game::{Player, QuizGame, TurnEnd};
pub use question::Question;

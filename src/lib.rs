pub mod catalog;
pub mod config;
pub mod quiz;
pub mod radical;
pub mod random;
pub mod session;
#[cfg(not(target_arch = "wasm32"))]
pub mod terminal;
pub mod view;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use catalog::{CatalogLoadError, RadicalCatalog};
pub use config::{ConfigError, QuizConfig};
pub use quiz::{AnswerOption, OPTION_COUNT, QuizRound, generate_round};
pub use radical::{KANGXI_BASE_CODE_POINT, RADICAL_COUNT, RadicalEntry, glyph_for_index};
pub use random::Randomness;
pub use session::{
    Advance, AdvanceTicket, DEFAULT_REVEAL_DELAY, QuizSession, ResetPrompt, Reveal, SessionError,
    schedule_advance,
};
pub use view::{OptionHighlight, OptionView, Phase, Progress, SessionView};

use crate::catalog::RadicalCatalog;
use crate::random::Randomness;

/// Number of answer options shown per round.
pub const OPTION_COUNT: usize = 4;

/// Number of incorrect options drawn per round.
pub const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

/// One answer button.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AnswerOption {
    /// Meaning text shown on the button.
    pub value: String,
    /// Whether this option is the meaning of the radical being asked.
    pub correct: bool,
}

/// A single generated quiz question.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct QuizRound {
    /// Catalog index of the radical being asked.
    pub radical_index: usize,
    pub glyph: char,
    pub pronunciation: String,
    /// Exactly one option has `correct == true`. Distractor text may repeat, including the
    /// correct meaning.
    pub options: [AnswerOption; OPTION_COUNT],
}

impl QuizRound {
    /// Position of the correct option.
    pub fn correct_index(&self) -> usize {
        self.options
            .iter()
            .position(|option| option.correct)
            .expect("every round carries a correct option")
    }

    /// Whether `option_index` is the correct answer, or `None` if there is no such option.
    pub fn is_correct(&self, option_index: usize) -> Option<bool> {
        self.options.get(option_index).map(|option| option.correct)
    }
}

/// Builds the question for the radical at `radical_index`.
///
/// The correct meaning is joined by [`DISTRACTOR_COUNT`] meanings drawn uniformly from the whole
/// catalog. Distractors are not excluded from matching the asked radical or each other, so the
/// same text may appear on several buttons. The four options are then shuffled.
///
/// # Panics
/// Panics if `radical_index` is not a valid catalog index.
pub fn generate_round<R: Randomness + ?Sized>(
    rng: &mut R,
    catalog: &RadicalCatalog,
    radical_index: usize,
) -> QuizRound {
    let radical = catalog.entry(radical_index);

    let correct = AnswerOption {
        value: radical.meaning.clone(),
        correct: true,
    };
    let mut options = [
        correct,
        random_distractor(rng, catalog),
        random_distractor(rng, catalog),
        random_distractor(rng, catalog),
    ];

    rng.shuffle(&mut options);

    QuizRound {
        radical_index,
        glyph: radical.glyph,
        pronunciation: radical.pronunciation.clone(),
        options,
    }
}

fn random_distractor<R: Randomness + ?Sized>(
    rng: &mut R,
    catalog: &RadicalCatalog,
) -> AnswerOption {
    let index = rng.index_below(catalog.len());

    AnswerOption {
        value: catalog.meaning(index).to_string(),
        correct: false,
    }
}

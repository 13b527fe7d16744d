use std::fmt;

use crate::quiz::{AnswerOption, QuizRound};

/// Visual treatment of an answer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum OptionHighlight {
    /// No answer revealed yet, or a wrong option that was neither picked nor faded.
    Neutral,
    /// The correct answer once revealed.
    Correct,
    /// A wrong answer the user picked.
    Incorrect,
    /// A wrong answer the user did not pick, dimmed during the reveal window.
    Faded,
}

impl OptionHighlight {
    pub fn for_option(option: &AnswerOption, revealed: bool, picked: bool) -> Self {
        if !revealed {
            return Self::Neutral;
        }

        match (option.correct, picked) {
            (true, _) => Self::Correct,
            (false, true) => Self::Incorrect,
            (false, false) => Self::Faded,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Neutral => "option",
            Self::Correct => "option correct",
            Self::Incorrect => "option incorrect",
            Self::Faded => "option faded",
        }
    }
}

/// Phase of the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Phase {
    /// A radical is shown and the user may pick.
    Asking,
    /// An option was picked; picks are disabled until the reveal window ends.
    Revealed,
    /// Every radical has been seen. Only a reset leaves this phase.
    Exhausted,
}

/// Counter shown as `seen/total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Progress {
    pub seen: usize,
    pub total: usize,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.seen, self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct OptionView {
    pub value: String,
    pub highlight: OptionHighlight,
    /// Buttons accept input only while asking.
    pub enabled: bool,
}

/// Everything a renderer needs after a state change.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SessionView {
    pub phase: Phase,
    pub glyph: Option<char>,
    pub pronunciation: Option<String>,
    pub options: Vec<OptionView>,
    pub revealed: bool,
    pub picked: Option<usize>,
    pub progress: Progress,
}

impl SessionView {
    pub(crate) fn new(round: Option<&QuizRound>, picked: Option<usize>, progress: Progress) -> Self {
        let Some(round) = round else {
            return Self {
                phase: Phase::Exhausted,
                glyph: None,
                pronunciation: None,
                options: Vec::new(),
                revealed: false,
                picked: None,
                progress,
            };
        };

        let revealed = picked.is_some();
        let options = round
            .options
            .iter()
            .enumerate()
            .map(|(index, option)| OptionView {
                value: option.value.clone(),
                highlight: OptionHighlight::for_option(option, revealed, picked == Some(index)),
                enabled: !revealed,
            })
            .collect();

        Self {
            phase: if revealed {
                Phase::Revealed
            } else {
                Phase::Asking
            },
            glyph: Some(round.glyph),
            pronunciation: Some(round.pronunciation.clone()),
            options,
            revealed,
            picked,
            progress,
        }
    }

    /// Whether the picked option, if any, was the correct one.
    pub fn picked_correctly(&self) -> Option<bool> {
        let picked = self.picked?;
        self.options
            .get(picked)
            .map(|option| option.highlight == OptionHighlight::Correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::OPTION_COUNT;

    fn option(value: &str, correct: bool) -> AnswerOption {
        AnswerOption {
            value: value.to_string(),
            correct,
        }
    }

    fn sample_round() -> QuizRound {
        QuizRound {
            radical_index: 85,
            glyph: '\u{2F55}',
            pronunciation: "huǒ".to_string(),
            options: [
                option("water", false),
                option("fire", true),
                option("tree", false),
                option("gold", false),
            ],
        }
    }

    fn progress(seen: usize) -> Progress {
        Progress { seen, total: 214 }
    }

    #[test]
    fn asking_view_is_neutral_and_enabled() {
        let round = sample_round();
        let view = SessionView::new(Some(&round), None, progress(0));

        assert_eq!(view.phase, Phase::Asking);
        assert_eq!(view.glyph, Some('\u{2F55}'));
        assert_eq!(view.pronunciation.as_deref(), Some("huǒ"));
        assert_eq!(view.options.len(), OPTION_COUNT);
        assert!(view.options.iter().all(|option| option.enabled));
        assert!(
            view.options
                .iter()
                .all(|option| option.highlight == OptionHighlight::Neutral)
        );
        assert_eq!(view.picked_correctly(), None);
    }

    #[test]
    fn wrong_pick_marks_picked_and_correct_and_fades_the_rest() {
        let round = sample_round();
        let view = SessionView::new(Some(&round), Some(2), progress(1));

        let highlights: Vec<OptionHighlight> =
            view.options.iter().map(|option| option.highlight).collect();

        assert_eq!(view.phase, Phase::Revealed);
        assert_eq!(
            highlights,
            vec![
                OptionHighlight::Faded,
                OptionHighlight::Correct,
                OptionHighlight::Incorrect,
                OptionHighlight::Faded,
            ]
        );
        assert!(view.options.iter().all(|option| !option.enabled));
        assert_eq!(view.picked_correctly(), Some(false));
    }

    #[test]
    fn correct_pick_fades_every_distractor() {
        let round = sample_round();
        let view = SessionView::new(Some(&round), Some(1), progress(1));

        assert_eq!(view.options[1].highlight, OptionHighlight::Correct);
        assert_eq!(
            view.options
                .iter()
                .filter(|option| option.highlight == OptionHighlight::Faded)
                .count(),
            3
        );
        assert_eq!(view.picked_correctly(), Some(true));
    }

    #[test]
    fn exhausted_view_has_no_round() {
        let view = SessionView::new(None, None, progress(214));

        assert_eq!(view.phase, Phase::Exhausted);
        assert!(view.glyph.is_none());
        assert!(view.options.is_empty());
        assert_eq!(view.progress.to_string(), "214/214");
    }
}

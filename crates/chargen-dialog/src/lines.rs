//! Fixed phrase lines owned by the dialog layer.

use chargen_core::rng::{DeterministicRng, pick};

/// Preambles spoken before re-emitting a stored character. Each reads
/// naturally in front of a full "heading character" utterance, so none of
/// them ends in an article.
const REPEAT_PREAMBLES: &[&str] = &[
    "Listen the fuck up this time.",
    "I said,",
    "Pay attention bro.",
    "That's right,",
    "You heard me just fine.",
    "I'll say it again, but only because I love talking about this shit.",
    "Ya snooze ya lose. Shit, fine.",
    "How did you already forget that shit?",
    "Repeat that? Fine.",
];

const FOLLOW_UP_QUESTIONS: &[&str] = &[
    "What else can I do for you?",
    "What else do you want to do?",
    "How else can I help you?",
    "What else do you need bro?",
    "What should I do now?",
    "What else would you like me to do?",
];

pub(crate) fn pick_repeat_preamble(rng: &mut dyn DeterministicRng) -> &'static str {
    pick(rng, REPEAT_PREAMBLES)
}

pub(crate) fn pick_follow_up_question(rng: &mut dyn DeterministicRng) -> &'static str {
    pick(rng, FOLLOW_UP_QUESTIONS)
}

#[cfg(test)]
mod tests {
    use chargen_test_support::SequenceRng;

    use super::*;

    #[test]
    fn test_picks_are_driven_by_the_rng() {
        let mut rng = SequenceRng::new(vec![1, 0]);
        assert_eq!(pick_repeat_preamble(&mut rng), "I said,");
        assert_eq!(pick_follow_up_question(&mut rng), "What else can I do for you?");
    }

    #[test]
    fn test_no_repeat_preamble_ends_in_an_article() {
        for preamble in REPEAT_PREAMBLES {
            assert!(!preamble.ends_with(" a"), "{preamble}");
            assert!(!preamble.ends_with(" an"), "{preamble}");
        }
    }
}

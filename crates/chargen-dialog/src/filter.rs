//! Profanity filtering for composed responses.
//!
//! Two mutually exclusive transforms: render profane tokens as SSML
//! phoneme markup (profanity permitted) or replace them with sanitized
//! substitutes (profanity disallowed). Both case-fold first. Substitution
//! order constraint: a longer token must precede its substrings, so
//! "fucking" is consumed before "fuck" ever matches.

use chargen_core::envelope::DialogResponse;

const SSML_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("fucking", "<phoneme ph=\"f\u{28c}kIn\" />"),
    ("shit", "<phoneme ph=\"\u{283}It\" />"),
    ("fuck", "<phoneme ph=\"f\u{28c}k\" />"),
    ("bitchy", "<phoneme ph=\"bIt\u{283}i\" />"),
];

const CLEAN_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("fucking", "friggin"),
    ("shit", "crap"),
    ("fuck", "f."),
    ("gotdamn", "got dang."),
    ("ass", "bottom"),
    ("bitchy", "prissy"),
];

/// Case-folds `input` and renders profane tokens as phoneme markup.
#[must_use]
pub fn profanity_to_ssml(input: &str) -> String {
    substitute(input, SSML_SUBSTITUTIONS)
}

/// Case-folds `input` and replaces profane tokens with sanitized words.
#[must_use]
pub fn profanity_to_clean(input: &str) -> String {
    substitute(input, CLEAN_SUBSTITUTIONS)
}

fn substitute(input: &str, table: &[(&str, &str)]) -> String {
    let mut output = input.to_lowercase();
    for (token, replacement) in table {
        output = output.replace(token, replacement);
    }
    output
}

/// Applies the transform selected by `allow_profanity` to the spoken
/// channels. The visual title is sanitized only on the disallowed path;
/// rendered markup never belongs on a card.
pub fn apply(response: &mut DialogResponse, allow_profanity: bool) {
    if allow_profanity {
        response.voice_output.ssml_text = profanity_to_ssml(&response.voice_output.ssml_text);
        response.delayed_voice_output.ssml_text =
            profanity_to_ssml(&response.delayed_voice_output.ssml_text);
    } else {
        response.voice_output.ssml_text = profanity_to_clean(&response.voice_output.ssml_text);
        response.delayed_voice_output.ssml_text =
            profanity_to_clean(&response.delayed_voice_output.ssml_text);
        response.visual_output.title = profanity_to_clean(&response.visual_output.title);
    }
}

#[cfg(test)]
mod tests {
    use chargen_core::envelope::DialogResponse;
    use chargen_core::metadata::SessionMetadata;

    use super::*;

    const PROFANE_TOKENS: &[&str] = &["fucking", "shit", "fuck", "gotdamn", "bitchy"];

    #[test]
    fn test_sanitize_removes_every_profane_token() {
        let input = "A fucking great shit, fuck, gotdamn ass, bitchy nonsense";

        let output = profanity_to_clean(input);

        for token in PROFANE_TOKENS {
            assert!(!output.contains(token), "'{token}' survived in '{output}'");
        }
        assert!(!output.contains(" ass"));
    }

    #[test]
    fn test_longer_tokens_are_substituted_before_substrings() {
        // "fucking" must never degrade to "f.ing".
        assert_eq!(profanity_to_clean("FUCKING"), "friggin");
        assert!(!profanity_to_clean("fucking").contains("f.ing"));
        assert!(profanity_to_ssml("fucking").contains("f\u{28c}kIn"));
    }

    #[test]
    fn test_render_and_sanitize_disagree_on_profane_input() {
        let input = "what a shit show";
        assert_ne!(profanity_to_ssml(input), profanity_to_clean(input));
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let input = "Listen the fuck up, it's a gotdamn mess";
        let once = profanity_to_clean(input);
        assert_eq!(profanity_to_clean(&once), once);
    }

    #[test]
    fn test_apply_sanitizes_title_only_on_the_clean_path() {
        let mut clean = DialogResponse::continuing(SessionMetadata::default());
        clean.voice_output.ssml_text = "It's a fucking elf".to_owned();
        clean.delayed_voice_output.ssml_text = "I outdid myself on that shit".to_owned();
        clean.visual_output.title = "Shit, this one's good".to_owned();
        let mut rendered = clean.clone();

        apply(&mut clean, false);
        assert_eq!(clean.voice_output.ssml_text, "it's a friggin elf");
        assert_eq!(clean.delayed_voice_output.ssml_text, "i outdid myself on that crap");
        assert_eq!(clean.visual_output.title, "crap, this one's good");

        apply(&mut rendered, true);
        assert!(rendered.voice_output.ssml_text.contains("<phoneme"));
        assert!(rendered.delayed_voice_output.ssml_text.contains("<phoneme"));
        // Title untouched on the render path.
        assert_eq!(rendered.visual_output.title, "Shit, this one's good");
    }
}

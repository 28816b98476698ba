//! Integration tests for speaktex end-to-end transcompilation

use pretty_assertions::assert_eq;
use speaktex::{
    cheatsheet::cheat_sheet_for,
    diagnostics::check_latex,
    script::{plan_segments, split_sentences, PauseSettings, Segment},
    transcompile, transcompile_with, transcompile_with_diagnostics, CommandMapping,
    PrefixCategories, SymbolCategory, Transcompiler, VerbalizationOptions, WarningKind,
};

fn spoken(input: &str) -> String {
    transcompile(input).parsed_text
}

// ============================================================================
// Equations - extraction and announcement
// ============================================================================

mod equations {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extraction_order() {
        let result = transcompile("$a$ text $$b$$");
        assert_eq!(result.equations, vec!["a", "b"]);
    }

    #[test]
    fn test_duplicates_preserved() {
        let result = transcompile(r"$\alpha$ then $\alpha$ again");
        assert_eq!(result.equations, vec![r"\alpha", r"\alpha"]);
    }

    #[test]
    fn test_announcement_wraps_content() {
        assert_eq!(
            spoken("$x^2$"),
            "Starting a math equation, x superscript 2 end-superscript, end of equation"
        );
    }

    #[test]
    fn test_announcement_can_be_disabled() {
        let result = transcompile_with(
            "see $x$ here",
            &CommandMapping::default(),
            &VerbalizationOptions {
                announce_math: false,
                ..Default::default()
            },
        );
        assert_eq!(result.parsed_text, "see x here");
        assert_eq!(result.equations, vec!["x"]);
    }

    #[test]
    fn test_unpaired_dollar_does_not_panic() {
        let out = transcompile_with_diagnostics(
            "price $x$ then $",
            &CommandMapping::default(),
            &VerbalizationOptions::default(),
        );
        assert_eq!(out.result.equations.len(), 1);
        assert!(!out.warnings.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let result = transcompile("");
        assert_eq!(result.parsed_text, "");
        assert!(result.equations.is_empty());
    }
}

// ============================================================================
// Structural stages
// ============================================================================

mod structure {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flat_fraction() {
        assert!(spoken(r"\frac{1}{2}").contains(
            "start-first-fraction-where-the-numerator-is 1 \
             and-the-first-fraction-denominator-is 2 end-first-fraction"
        ));
    }

    #[test]
    fn test_nested_fraction_ordinals() {
        let text = spoken(r"\frac{\frac{1}{2}}{3}");
        assert_eq!(
            text,
            "start-second-fraction-where-the-numerator-is \
             start-first-fraction-where-the-numerator-is 1 \
             and-the-first-fraction-denominator-is 2 end-first-fraction \
             and-the-second-fraction-denominator-is 3 end-second-fraction"
        );
    }

    #[test]
    fn test_fraction_with_braced_script() {
        let text = spoken(r"\frac{x^{2}}{y}");
        assert!(text.contains("numerator-is x superscript 2 end-superscript and-the"));
    }

    #[test]
    fn test_nested_roots() {
        assert_eq!(
            spoken(r"\sqrt{\sqrt{x}}"),
            "inner-square-root-of outer-square-root-of x"
        );
        assert_eq!(spoken(r"\sqrt[3]{8}"), "outer-3rd-root-of 8");
    }

    #[test]
    fn test_nested_scripts_tagged_outer() {
        assert_eq!(
            spoken("x^{y^{2}}"),
            "x outer-superscript y superscript 2 end-superscript end-outer-superscript"
        );
        assert_eq!(spoken("a_i"), "a subscript i end-subscript");
    }

    #[test]
    fn test_summation_with_limits() {
        assert_eq!(
            spoken(r"\sum_{i=1}^{n} i"),
            "summation, from start-subscript, i equals 1, end-subscript, \
             to start-superscript, n, end-superscript i"
        );
    }

    #[test]
    fn test_limit() {
        assert_eq!(
            spoken(r"$\lim_{x \to 0} f(x)$"),
            "Starting a math equation, limit as start-subscript, x approaches 0, \
             end-subscript f(x), end of equation"
        );
    }

    #[test]
    fn test_parenthesis_true_depth() {
        assert_eq!(
            spoken(r"\left(\left(x\right)\right)"),
            "outer-open-parenthesis inner-open-parenthesis x \
             inner-close-parenthesis outer-close-parenthesis"
        );
    }

    #[test]
    fn test_sized_delimiters() {
        assert_eq!(
            spoken(r"\Bigg( x \Bigg)"),
            "largest-open-parenthesis x largest-close-parenthesis"
        );
    }

    #[test]
    fn test_sized_braces_and_bars() {
        assert_eq!(
            spoken(r"\Bigg\{ x \Bigg\}"),
            "largest-open-brace x largest-close-brace"
        );
        assert_eq!(spoken(r"\big| y \big|"), "big-vertical-bar y big-vertical-bar");
    }

    #[test]
    fn test_decoration_postfix() {
        assert_eq!(spoken(r"\bar{x}"), "x with-straight-top-hat");
        assert_eq!(
            spoken(r"\hat{\bar{x}}"),
            "x with-straight-top-hat with-hat"
        );
    }

    #[test]
    fn test_iteration_ceiling_returns_partial() {
        let options = VerbalizationOptions {
            max_iterations: 1,
            ..Default::default()
        };
        let out = transcompile_with_diagnostics(
            r"\frac{\frac{1}{2}}{3}",
            &CommandMapping::default(),
            &options,
        );
        assert!(out
            .result
            .parsed_text
            .contains("start-first-fraction-where-the-numerator-is 1"));
        assert!(out.warnings.iter().any(|w| matches!(
            w.kind,
            WarningKind::IterationLimit { stage: "fractions" }
        )));
    }
}

// ============================================================================
// Substitution and prefixing
// ============================================================================

mod substitution {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_prefix_grouping_toggle() {
        let grouped = VerbalizationOptions::prefixed();
        let spaced = VerbalizationOptions {
            group_symbols: false,
            ..VerbalizationOptions::prefixed()
        };
        let mappings = CommandMapping::default();

        assert_eq!(
            transcompile_with(r"\alpha", &mappings, &grouped).parsed_text,
            "symbol-of-alpha"
        );
        assert_eq!(
            transcompile_with(r"\alpha", &mappings, &spaced).parsed_text,
            "symbol of alpha"
        );
    }

    #[test]
    fn test_prefix_disabled_category() {
        let options = VerbalizationOptions {
            prefix_categories: PrefixCategories::only(&[SymbolCategory::Comparison]),
            ..VerbalizationOptions::prefixed()
        };
        let text = transcompile_with(r"\alpha \leq \beta", &CommandMapping::default(), &options)
            .parsed_text;
        assert_eq!(text, "alpha symbol-of-less-than-or-equal-to beta");
    }

    #[test]
    fn test_custom_prefix_text() {
        let options = VerbalizationOptions {
            symbol_prefix: "the symbol".to_string(),
            ..VerbalizationOptions::prefixed()
        };
        let text = transcompile_with(r"\in", &CommandMapping::default(), &options).parsed_text;
        assert_eq!(text, "the-symbol-element-of");
    }

    #[test]
    fn test_statistics_notation() {
        assert_eq!(
            spoken(r"X \sim N(0, 1)"),
            "X distributed as normal distribution (0 comma 1)"
        );
    }

    #[test]
    fn test_longest_command_wins() {
        assert_eq!(spoken(r"x \in \infty"), "x element of infinity");
    }

    #[test]
    fn test_unknown_command_degrades_to_name() {
        assert_eq!(spoken(r"\foo x"), "foo x");
    }

    #[test]
    fn test_missing_mapping_entries_skip_substitution() {
        let mut mappings = CommandMapping::default();
        mappings.remove("\\bar");
        mappings.insert("\\alpha", "alfa");
        let text = transcompile_with(r"\bar{x} \alpha", &mappings, &VerbalizationOptions::default())
            .parsed_text;
        assert_eq!(text, "bar x alfa");
    }

    #[test]
    fn test_transcompiler_reuse() {
        let transcompiler = Transcompiler::new().with_options(VerbalizationOptions::plain());
        let first = transcompiler.transcompile(r"$\beta$");
        let second = transcompiler.transcompile(r"$\beta$");
        assert_eq!(first, second);
        assert_eq!(first.parsed_text, "beta");
    }
}

// ============================================================================
// Punctuation and cleanup
// ============================================================================

mod punctuation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decimal_vs_period() {
        assert_eq!(spoken("x = 3.14. Done"), "x equals 3 point 14 period Done");
    }

    #[test]
    fn test_literal_commas_spoken() {
        let text = spoken("a, b, c");
        assert_eq!(text, "a comma b comma c");
        assert!(!text.contains(','));
    }

    #[test]
    fn test_structural_pauses_are_the_only_commas() {
        assert_eq!(
            spoken("$a, b$"),
            "Starting a math equation, a comma b, end of equation"
        );
    }

    #[test]
    fn test_negative_numbers_and_dashes() {
        assert_eq!(spoken("x = -2 - y"), "x equals negative 2 dash y");
    }

    #[test]
    fn test_math_minus_between_operands() {
        assert_eq!(
            spoken("$2-3$"),
            "Starting a math equation, 2 minus 3, end of equation"
        );
        let text = spoken("$a-b$");
        assert!(text.contains("a minus b"));
        assert!(!text.contains("a-b"));
    }

    #[test]
    fn test_math_unary_minus() {
        assert_eq!(
            spoken("$e^{-x}$"),
            "Starting a math equation, e superscript negative x end-superscript, end of equation"
        );
        assert!(spoken("$y = -x$").contains("y equals negative x"));
    }

    #[test]
    fn test_prose_hyphens_untouched() {
        assert_eq!(spoken("a well-known result"), "a well-known result");
    }

    #[test]
    fn test_minus_is_spoken_in_playback() {
        let segments = plan_segments(&spoken("$2-3$"), &PauseSettings::default());
        let words: Vec<&str> = segments
            .iter()
            .filter_map(|s| match s {
                Segment::Speak(word) => Some(word.as_str()),
                Segment::Pause(_) => None,
            })
            .collect();
        let at = words.iter().position(|w| *w == "2");
        assert_eq!(at.map(|i| &words[i..i + 3]), Some(&["2", "minus", "3"][..]));
    }

    #[test]
    fn test_decimal_without_integer_part() {
        assert_eq!(
            spoken("$x = .5$"),
            "Starting a math equation, x equals point 5, end of equation"
        );
    }

    #[test]
    fn test_escaped_dollar() {
        let result = transcompile(r"costs \$5, not $x$");
        assert_eq!(result.equations, vec!["x"]);
        assert!(result.parsed_text.starts_with("costs dollar 5 comma not"));
    }

    #[test]
    fn test_transcompile_is_stable_on_its_output() {
        let plain = |input: &str| {
            transcompile_with(input, &CommandMapping::default(), &VerbalizationOptions::plain())
                .parsed_text
        };
        let once = plain(r"Let $x = \frac{1}{2}$. Then $y \geq x$.");
        assert!(once.ends_with("greater than or equal to x period"));
        assert_eq!(plain(&once), once);
    }
}

// ============================================================================
// Diagnostics, cheat sheets and playback plans
// ============================================================================

mod extras {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_check_reports_unclosed_brace() {
        let result = check_latex(r"$\frac{1}{2$", &CommandMapping::default());
        assert!(result.has_errors());
    }

    #[test]
    fn test_cheat_sheet_for_input() {
        let pairs = cheat_sheet_for(r"$\beta \leq \alpha$", &CommandMapping::default());
        let commands: Vec<&str> = pairs.iter().map(|p| p.command.as_str()).collect();
        assert_eq!(commands, vec![r"\alpha", r"\beta", r"\leq"]);
    }

    #[test]
    fn test_sentences_from_spoken_text() {
        let sentences = split_sentences(&spoken("First. Second!"));
        assert_eq!(sentences, vec!["First period", "Second!"]);
    }

    #[test]
    fn test_segments_for_prefixed_symbol() {
        let text = transcompile_with(
            r"\alpha, x",
            &CommandMapping::default(),
            &VerbalizationOptions::prefixed(),
        )
        .parsed_text;
        let segments = plan_segments(&text, &PauseSettings::default());
        assert_eq!(
            segments,
            vec![
                Segment::Speak("symbol".to_string()),
                Segment::Pause(40),
                Segment::Speak("of".to_string()),
                Segment::Pause(40),
                Segment::Speak("alpha".to_string()),
                Segment::Pause(200),
                Segment::Speak("comma".to_string()),
                Segment::Pause(200),
                Segment::Speak("x".to_string()),
            ]
        );
    }
}

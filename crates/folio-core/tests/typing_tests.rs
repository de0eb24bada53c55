// Host-side tests for the typewriter phrase cycle.

use folio_core::constants::{DELETE_INTERVAL, HOLD_BEFORE_DELETE, TYPE_INTERVAL};
use folio_core::{ConfigError, PhraseCycle, TypingPhase};
use std::time::Duration;

fn cycle(phrases: &[&str]) -> PhraseCycle {
    PhraseCycle::new(phrases.iter().map(|p| p.to_string()).collect()).unwrap()
}

fn run(c: &mut PhraseCycle, ticks: usize) -> Vec<(String, Duration)> {
    (0..ticks)
        .map(|_| {
            let f = c.tick();
            (f.text, f.delay)
        })
        .collect()
}

#[test]
fn empty_phrase_list_is_rejected() {
    let err = PhraseCycle::new(Vec::new()).unwrap_err();
    assert_eq!(err, ConfigError::EmptyPhraseList);
}

#[test]
fn starts_blank_on_first_phrase() {
    let c = cycle(&["Hello"]);
    assert_eq!(c.text(), "");
    assert_eq!(c.phrase_index(), 0);
    assert_eq!(c.phase(), TypingPhase::Typing);
    assert!(!c.is_deleting());
}

#[test]
fn two_phrase_cycle_is_deterministic() {
    let mut c = cycle(&["A", "BC"]);
    let frames = run(&mut c, 14);
    let expected = [
        ("A", HOLD_BEFORE_DELETE),
        ("", TYPE_INTERVAL),
        ("B", TYPE_INTERVAL),
        ("BC", HOLD_BEFORE_DELETE),
        ("B", DELETE_INTERVAL),
        ("", TYPE_INTERVAL),
    ];
    for (i, (text, delay)) in frames.iter().enumerate() {
        let (want_text, want_delay) = expected[i % expected.len()];
        assert_eq!(text, want_text, "frame {i}");
        assert_eq!(*delay, want_delay, "frame {i}");
    }
}

#[test]
fn phases_and_deleting_flag_follow_the_text() {
    let mut c = cycle(&["AB"]);
    assert_eq!(c.tick().text, "A");
    assert_eq!(c.phase(), TypingPhase::Typing);

    assert_eq!(c.tick().text, "AB");
    assert_eq!(c.phase(), TypingPhase::Holding);
    assert!(!c.is_deleting());

    let f = c.tick();
    assert_eq!(f.text, "A");
    assert_eq!(f.delay, DELETE_INTERVAL);
    assert_eq!(c.phase(), TypingPhase::Deleting);
    assert!(c.is_deleting());

    assert_eq!(c.tick().text, "");
    assert_eq!(c.phase(), TypingPhase::Typing);
    assert!(!c.is_deleting());
    // single phrase wraps onto itself
    assert_eq!(c.phrase_index(), 0);
    assert_eq!(c.tick().text, "A");
}

#[test]
fn phrase_index_wraps_modulo_count() {
    let mut c = cycle(&["x", "y", "z"]);
    let mut seen = Vec::new();
    for _ in 0..12 {
        let f = c.tick();
        if f.delay == HOLD_BEFORE_DELETE {
            seen.push(f.text);
        }
    }
    assert_eq!(seen, vec!["x", "y", "z", "x", "y", "z"]);
}

#[test]
fn empty_phrase_holds_blank_then_moves_on() {
    let mut c = cycle(&["", "X"]);
    let frames = run(&mut c, 3);
    assert_eq!(frames[0], (String::new(), HOLD_BEFORE_DELETE));
    assert_eq!(frames[1], (String::new(), TYPE_INTERVAL));
    assert_eq!(frames[2], ("X".to_string(), HOLD_BEFORE_DELETE));
}

#[test]
fn text_never_exceeds_current_phrase() {
    let mut c = cycle(&["Frontend Developer", "UI/UX Designer", "héllo wörld", "日本語"]);
    for _ in 0..2_000 {
        let typed_into = c.current_phrase().to_string();
        let f = c.tick();
        assert!(typed_into.starts_with(&f.text));
        let phrase = c.current_phrase();
        assert!(c.char_index() <= phrase.chars().count());
        assert!(phrase.starts_with(c.text()));
    }
}

#[test]
fn multibyte_prefixes_split_on_char_boundaries() {
    let mut c = cycle(&["日本語"]);
    assert_eq!(c.tick().text, "日");
    assert_eq!(c.tick().text, "日本");
    assert_eq!(c.tick().text, "日本語");
    assert_eq!(c.tick().text, "日本");
}

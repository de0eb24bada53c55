//! Typewriter effect: types a phrase, holds it, deletes it, moves to the next.

use crate::config::ConfigError;
use crate::constants::{DELETE_INTERVAL, HOLD_BEFORE_DELETE, TYPE_INTERVAL};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    Holding,
    Deleting,
}

/// Text to show after a tick and how long to wait before the next one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay: Duration,
}

#[derive(Clone, Debug)]
pub struct PhraseCycle {
    phrases: Vec<String>,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
    phase: TypingPhase,
}

impl PhraseCycle {
    pub fn new(phrases: Vec<String>) -> Result<Self, ConfigError> {
        if phrases.is_empty() {
            return Err(ConfigError::EmptyPhraseList);
        }
        Ok(Self {
            phrases,
            phrase_index: 0,
            char_index: 0,
            deleting: false,
            phase: TypingPhase::Typing,
        })
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.phrase_index]
    }

    /// Prefix of the current phrase that is on screen.
    pub fn text(&self) -> &str {
        let phrase = self.current_phrase();
        match phrase.char_indices().nth(self.char_index) {
            Some((byte, _)) => &phrase[..byte],
            None => phrase,
        }
    }

    fn phrase_len(&self) -> usize {
        self.current_phrase().chars().count()
    }

    /// Run one step of the state machine.
    pub fn tick(&mut self) -> TypingFrame {
        let delay = match self.phase {
            TypingPhase::Typing => {
                let len = self.phrase_len();
                if self.char_index < len {
                    self.char_index += 1;
                }
                if self.char_index == len {
                    self.phase = TypingPhase::Holding;
                    HOLD_BEFORE_DELETE
                } else {
                    TYPE_INTERVAL
                }
            }
            TypingPhase::Holding | TypingPhase::Deleting => {
                self.deleting = true;
                self.phase = TypingPhase::Deleting;
                self.char_index = self.char_index.saturating_sub(1);
                if self.char_index == 0 {
                    self.deleting = false;
                    self.phase = TypingPhase::Typing;
                    let text = self.text().to_string();
                    self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                    return TypingFrame {
                        text,
                        delay: TYPE_INTERVAL,
                    };
                }
                DELETE_INTERVAL
            }
        };
        TypingFrame {
            text: self.text().to_string(),
            delay,
        }
    }
}

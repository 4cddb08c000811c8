//! Typing-text cycler.
//!
//! Types a phrase out one character at a time, holds it, deletes it one
//! character at a time, then moves on to the next phrase, forever. The cycler
//! itself owns no timer: each [`TypingCycler::step`] returns the text to show
//! and how long to wait before the next step, and the caller schedules the
//! next call. Offsets count Unicode scalar values, so phrases with non-ASCII
//! text never split a character.

use crate::config::TypingConfig;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingMode {
    Typing,
    Deleting,
}

/// Output of a single step: what to display and when to step again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub next_delay: Duration,
}

#[derive(Debug, Clone)]
pub struct TypingCycler {
    phrases: Vec<String>,
    phrase_index: usize,
    char_offset: usize,
    mode: TypingMode,
    type_delay: Duration,
    delete_delay: Duration,
    pause: Duration,
    next_phrase_pause: Duration,
}

impl TypingCycler {
    /// Build a cycler over the configured phrases.
    ///
    /// Returns `None` when there is nothing to type: the phrase list is empty
    /// or contains an empty phrase (which would never reach "fully typed").
    pub fn new(config: &TypingConfig) -> Option<Self> {
        if config.phrases.is_empty() || config.phrases.iter().any(|p| p.is_empty()) {
            return None;
        }
        Some(Self {
            phrases: config.phrases.clone(),
            phrase_index: 0,
            char_offset: 0,
            mode: TypingMode::Typing,
            type_delay: Duration::from_millis(config.type_delay_ms.into()),
            delete_delay: Duration::from_millis(config.delete_delay_ms.into()),
            pause: Duration::from_millis(config.pause_ms.into()),
            next_phrase_pause: Duration::from_millis(config.next_phrase_ms.into()),
        })
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_offset(&self) -> usize {
        self.char_offset
    }

    pub fn mode(&self) -> TypingMode {
        self.mode
    }

    fn current_len(&self) -> usize {
        self.phrases[self.phrase_index].chars().count()
    }

    fn visible_text(&self) -> String {
        self.phrases[self.phrase_index]
            .chars()
            .take(self.char_offset)
            .collect()
    }

    /// Advance by one character in the current mode.
    pub fn step(&mut self) -> TypingFrame {
        match self.mode {
            TypingMode::Typing => {
                self.char_offset += 1;
                let text = self.visible_text();
                if self.char_offset >= self.current_len() {
                    self.char_offset = self.current_len();
                    self.mode = TypingMode::Deleting;
                    TypingFrame {
                        text,
                        next_delay: self.pause,
                    }
                } else {
                    TypingFrame {
                        text,
                        next_delay: self.type_delay,
                    }
                }
            }
            TypingMode::Deleting => {
                self.char_offset = self.char_offset.saturating_sub(1);
                let text = self.visible_text();
                if self.char_offset == 0 {
                    self.mode = TypingMode::Typing;
                    self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                    TypingFrame {
                        text,
                        next_delay: self.next_phrase_pause,
                    }
                } else {
                    TypingFrame {
                        text,
                        next_delay: self.delete_delay,
                    }
                }
            }
        }
    }
}

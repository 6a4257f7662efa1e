//! In-game message log.
//!
//! Consecutive identical messages are folded into one entry with a repeat
//! count. Every push bumps a revision counter so callers can ask for
//! "everything touched since mark" even when an entry was stacked.
use std::collections::VecDeque;

use crate::palette::Rgb;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub text: String,
    pub color: Rgb,
    pub count: u32,
    /// Turn on which the message was (last) emitted.
    pub turn: u64,
    revision: u64,
}

impl Message {
    /// Text with a `(xN)` suffix when stacked.
    pub fn full_text(&self) -> String {
        if self.count > 1 {
            format!("{} (x{})", self.text, self.count)
        } else {
            self.text.clone()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageLog {
    entries: VecDeque<Message>,
    capacity: usize,
    revision: u64,
}

impl MessageLog {
    pub const DEFAULT_CAPACITY: usize = 256;

    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
            revision: 0,
        }
    }

    pub fn add(&mut self, text: impl Into<String>, color: Rgb, turn: u64) {
        let text = text.into();
        self.revision += 1;

        if let Some(last) = self.entries.back_mut().filter(|last| last.text == text) {
            last.count += 1;
            last.turn = turn;
            last.revision = self.revision;
            return;
        }

        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(Message {
            text,
            color,
            count: 1,
            turn,
            revision: self.revision,
        });
    }

    /// Opaque marker for [`MessageLog::since`].
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Entries added or stacked after `mark`, oldest first.
    pub fn since(&self, mark: u64) -> impl Iterator<Item = &Message> {
        self.entries.iter().filter(move |message| message.revision > mark)
    }

    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &Message> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;

    #[test]
    fn identical_messages_stack() {
        let mut log = MessageLog::default();
        log.add("That way is blocked.", palette::IMPOSSIBLE, 1);
        log.add("That way is blocked.", palette::IMPOSSIBLE, 2);

        assert_eq!(log.len(), 1);
        let last = log.last().unwrap();
        assert_eq!(last.count, 2);
        assert_eq!(last.turn, 2);
        assert_eq!(last.full_text(), "That way is blocked. (x2)");
    }

    #[test]
    fn since_includes_stacked_entries() {
        let mut log = MessageLog::default();
        log.add("a", palette::WHITE, 0);
        log.add("b", palette::WHITE, 0);
        let mark = log.revision();
        log.add("b", palette::WHITE, 1);
        log.add("c", palette::WHITE, 1);

        let texts: Vec<_> = log.since(mark).map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["b", "c"]);
    }

    #[test]
    fn capacity_drops_oldest() {
        let mut log = MessageLog::new(2);
        log.add("a", palette::WHITE, 0);
        log.add("b", palette::WHITE, 0);
        log.add("c", palette::WHITE, 0);
        let texts: Vec<_> = log.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["b", "c"]);
    }
}

//! Append-only history of the locations the player has occupied.
//!
//! One [`Event`] is recorded per turn, starting with the location the game
//! opens in. Entries are never edited or removed, so the log doubles as the
//! trace a replay is verified against.

use deadline_data::LocationId;
use std::fmt::Write;

/// A single turn's record: where the player ended up and what led there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub location_id: LocationId,
    pub description: String,
    /// The command that produced this event; `None` only for the opening event.
    pub command: Option<String>,
}

/// One printable log line: a description and the choice that followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub description: String,
    pub next_command: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<Event>,
}
impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, location_id: LocationId, description: impl Into<String>, command: Option<&str>) {
        self.events.push(Event {
            location_id,
            description: description.into(),
            command: command.map(str::to_string),
        });
    }

    /// Location ids in the order they were recorded.
    pub fn visited_ids(&self) -> Vec<LocationId> {
        self.events.iter().map(|event| event.location_id).collect()
    }

    /// Pairs each event's description with the command that led to the *next* event.
    pub fn lines(&self) -> Vec<LogLine> {
        self.events
            .iter()
            .enumerate()
            .map(|(idx, event)| LogLine {
                description: event.description.clone(),
                next_command: self.events.get(idx + 1).and_then(|next| next.command.clone()),
            })
            .collect()
    }

    /// Render the whole log as plain text.
    pub fn display(&self) -> String {
        let mut out = String::new();
        for line in self.lines() {
            let _ = writeln!(out, "{}", line.description);
            if let Some(command) = line.next_command {
                let _ = writeln!(out, "You choose: {command}");
            }
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_log() -> EventLog {
        let mut log = EventLog::new();
        log.append(1, "Dorm.", None);
        log.append(2, "Hallway.", Some("go north"));
        log.append(2, "Hallway.", Some("inventory"));
        log
    }

    #[test]
    fn visited_ids_preserve_order() {
        assert_eq!(sample_log().visited_ids(), vec![1, 2, 2]);
    }

    #[test]
    fn lines_pair_description_with_following_command() {
        let lines = sample_log().lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].description, "Dorm.");
        assert_eq!(lines[0].next_command.as_deref(), Some("go north"));
        assert_eq!(lines[1].next_command.as_deref(), Some("inventory"));
        assert_eq!(lines[2].next_command, None);
    }

    #[test]
    fn display_renders_choices_between_descriptions() {
        let text = sample_log().display();
        assert_eq!(
            text,
            "Dorm.\nYou choose: go north\nHallway.\nYou choose: inventory\nHallway.\n"
        );
    }

    #[test]
    fn empty_log_has_no_last_event() {
        let log = EventLog::new();
        assert!(log.is_empty());
        assert!(log.last().is_none());
        assert_eq!(log.display(), "");
    }

    #[test]
    fn opening_event_has_no_command() {
        let log = sample_log();
        assert_eq!(log.iter().next().and_then(|e| e.command.as_deref()), None);
        assert_eq!(log.last().map(|e| e.location_id), Some(2));
        assert_eq!(log.len(), 3);
    }
}

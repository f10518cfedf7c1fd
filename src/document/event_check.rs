use std::collections::HashSet;

use saphyr_parser::{Event, Parser};
use snafu::prelude::*;
use tracing::trace;

use super::tree_document::{MalformedReason, ParseSnafu, TreeDocumentError, malformed};

/// Checks the raw event stream of the first document for what the node
/// loader hides: repeated mapping keys (the loader keeps only the last one)
/// and aliases (the loader silently copies the anchored node).
pub(super) fn check_events(contents: &str, files_key: &str) -> Result<(), TreeDocumentError> {
    let mut checker = EventChecker {
        files_key,
        frames: Vec::new(),
        location: Vec::new(),
    };

    for event in Parser::new_from_str(contents) {
        let (event, _) = event.context(ParseSnafu)?;
        if let Event::DocumentEnd = event {
            break;
        }
        checker.accept(event)?;
    }

    Ok(())
}

#[derive(Debug, Default)]
struct MappingState {
    keys: HashSet<String>,
    awaiting_value: bool,
    pending_label: Option<String>,
}

impl MappingState {
    fn key_done(&mut self, label: Option<String>) {
        self.awaiting_value = true;
        self.pending_label = label;
    }

    fn value_done(&mut self) {
        self.awaiting_value = false;
        self.pending_label = None;
    }
}

#[derive(Debug)]
enum FrameKind {
    Mapping(MappingState),
    Sequence,
}

#[derive(Debug)]
struct Frame {
    kind: FrameKind,
    /// Label pushed onto the location while this collection is open.
    label: Option<String>,
    /// The collection is itself a mapping key.
    is_key: bool,
}

struct EventChecker<'a> {
    files_key: &'a str,
    frames: Vec<Frame>,
    location: Vec<String>,
}

impl EventChecker<'_> {
    fn accept(&mut self, event: Event) -> Result<(), TreeDocumentError> {
        match event {
            Event::Scalar(value, ..) => self.scalar(&value),
            Event::Alias(_) => malformed(&self.location, MalformedReason::AliasNotAllowed),
            Event::MappingStart(..) => {
                self.open(FrameKind::Mapping(MappingState::default()));
                Ok(())
            }
            Event::SequenceStart(..) => {
                self.open(FrameKind::Sequence);
                Ok(())
            }
            Event::MappingEnd | Event::SequenceEnd => {
                self.close();
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn scalar(&mut self, value: &str) -> Result<(), TreeDocumentError> {
        let Some(Frame {
            kind: FrameKind::Mapping(mapping),
            ..
        }) = self.frames.last_mut()
        else {
            return Ok(());
        };

        if mapping.awaiting_value {
            mapping.value_done();
            return Ok(());
        }

        if !mapping.keys.insert(value.to_string()) {
            let reason = if value == self.files_key {
                MalformedReason::DuplicateFilesKey(value.to_string())
            } else {
                MalformedReason::DuplicateLabel(value.to_string())
            };
            return malformed(&self.location, reason);
        }

        let label = (value != self.files_key).then(|| value.to_string());
        mapping.key_done(label);
        Ok(())
    }

    fn open(&mut self, kind: FrameKind) {
        let (label, is_key) = match self.frames.last_mut() {
            Some(Frame {
                kind: FrameKind::Mapping(mapping),
                ..
            }) if mapping.awaiting_value => (mapping.pending_label.take(), false),
            Some(Frame {
                kind: FrameKind::Mapping(_),
                ..
            }) => (None, true),
            _ => (None, false),
        };

        if let Some(label) = &label {
            trace!("Entering '{}'", label);
            self.location.push(label.clone());
        }
        self.frames.push(Frame {
            kind,
            label,
            is_key,
        });
    }

    fn close(&mut self) {
        let Some(frame) = self.frames.pop() else {
            return;
        };
        if frame.label.is_some() {
            self.location.pop();
        }

        if let Some(Frame {
            kind: FrameKind::Mapping(mapping),
            ..
        }) = self.frames.last_mut()
        {
            if frame.is_key {
                mapping.key_done(None);
            } else {
                mapping.value_done();
            }
        }
    }
}

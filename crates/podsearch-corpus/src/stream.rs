use std::collections::VecDeque;
use std::sync::mpsc::Receiver;

use podsearch_feed::FlatRecord;

/// Lazy fan-in over per-file record channels. Receivers are drained in
/// file-enumeration order, so all records of an earlier file are yielded
/// before any record of a later one while workers keep filling the
/// channels behind the cursor.
pub struct CorpusStream {
    current: Option<Receiver<FlatRecord>>,
    pending: VecDeque<Receiver<FlatRecord>>,
}

impl CorpusStream {
    pub(crate) fn from_receivers(receivers: Vec<Receiver<FlatRecord>>) -> Self {
        Self {
            current: None,
            pending: receivers.into(),
        }
    }

    /// An already-finished stream with no records.
    pub fn empty() -> Self {
        Self {
            current: None,
            pending: VecDeque::new(),
        }
    }
}

impl Iterator for CorpusStream {
    type Item = FlatRecord;

    fn next(&mut self) -> Option<FlatRecord> {
        loop {
            if let Some(receiver) = &self.current {
                match receiver.recv() {
                    Ok(record) => return Some(record),
                    Err(_) => self.current = None,
                }
            }
            self.current = Some(self.pending.pop_front()?);
        }
    }
}

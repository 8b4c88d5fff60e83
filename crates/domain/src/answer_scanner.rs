use crate::decoded_message::{MessageLine, SectionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    BeforeAnswers,
    InAnswers,
    Done,
}

/// Isolates the record lines of the first answer section of a message.
pub struct AnswerScanner;

impl AnswerScanner {
    /// Returns `None` when no answers marker is ever seen. Only the first
    /// answer section is collected; scanning stops as soon as it closes.
    pub fn scan<'a, I>(lines: I) -> Option<Vec<&'a str>>
    where
        I: IntoIterator<Item = MessageLine<'a>>,
    {
        let mut state = ScanState::BeforeAnswers;
        let mut group: Option<Vec<&'a str>> = None;

        for line in lines {
            state = match (state, line) {
                (ScanState::Done, _) => break,
                (_, MessageLine::Blank) => state,
                (ScanState::BeforeAnswers, MessageLine::SectionHeader(SectionKind::Answer)) => {
                    group = Some(Vec::new());
                    ScanState::InAnswers
                }
                (ScanState::BeforeAnswers, _) => ScanState::BeforeAnswers,
                (ScanState::InAnswers, MessageLine::SectionHeader(SectionKind::Answer)) => {
                    ScanState::InAnswers
                }
                (ScanState::InAnswers, l) if l.is_comment() => ScanState::Done,
                (ScanState::InAnswers, MessageLine::Record(record)) => {
                    if let Some(group) = group.as_mut() {
                        group.push(record);
                    }
                    ScanState::InAnswers
                }
                (ScanState::InAnswers, _) => ScanState::InAnswers,
            };
        }

        group
    }

    /// Same as [`AnswerScanner::scan`] over a textual rendering.
    pub fn scan_text(text: &str) -> Option<Vec<&str>> {
        Self::scan(text.lines().map(MessageLine::classify))
    }
}

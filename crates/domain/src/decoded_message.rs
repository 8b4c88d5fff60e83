//! Line-oriented model of a decoded DNS response.
//!
//! A [`DecodedMessage`] keeps each section's records in presentation format
//! (`name ttl class type rdata`). It can be walked as a sequence of
//! [`MessageLine`]s without going through text, and its `Display` rendering
//! classifies back into the same walk.

use std::fmt;

const COMMENT_PREFIX: &str = ";;";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Question,
    Answer,
    Authority,
    Additional,
}

impl SectionKind {
    pub fn marker(&self) -> &'static str {
        match self {
            SectionKind::Question => ";; QUESTIONS:",
            SectionKind::Answer => ";; ANSWERS:",
            SectionKind::Authority => ";; AUTHORITY RECORDS:",
            SectionKind::Additional => ";; ADDITIONAL RECORDS:",
        }
    }

    pub fn from_marker(line: &str) -> Option<Self> {
        match line.trim() {
            ";; QUESTIONS:" => Some(SectionKind::Question),
            ";; ANSWERS:" => Some(SectionKind::Answer),
            ";; AUTHORITY RECORDS:" => Some(SectionKind::Authority),
            ";; ADDITIONAL RECORDS:" => Some(SectionKind::Additional),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSection {
    pub kind: SectionKind,
    pub records: Vec<String>,
}

impl MessageSection {
    pub fn new(kind: SectionKind, records: Vec<String>) -> Self {
        Self { kind, records }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMessage {
    pub id: u16,
    pub response_code: String,
    pub truncated: bool,
    pub sections: Vec<MessageSection>,
}

impl DecodedMessage {
    pub fn section(&self, kind: SectionKind) -> Option<&MessageSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn answer_count(&self) -> usize {
        self.section(SectionKind::Answer)
            .map_or(0, |s| s.records.len())
    }

    /// Structured walk over the message: header comment, then each section
    /// marker followed by its records, sections separated by blank lines.
    pub fn lines(&self) -> impl Iterator<Item = MessageLine<'_>> + '_ {
        let header = std::iter::once(MessageLine::Comment);
        let body = self.sections.iter().flat_map(|section| {
            std::iter::once(MessageLine::Blank)
                .chain(std::iter::once(MessageLine::SectionHeader(section.kind)))
                .chain(section.records.iter().map(|r| MessageLine::Record(r.as_str())))
        });
        header.chain(body)
    }
}

impl fmt::Display for DecodedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            ";; ->>HEADER<<- id: {}, status: {}{}",
            self.id,
            self.response_code,
            if self.truncated { ", flags: tc" } else { "" }
        )?;
        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "{}", section.kind.marker())?;
            for record in &section.records {
                writeln!(f, "{}", record)?;
            }
        }
        Ok(())
    }
}

/// One classified line of a rendered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLine<'a> {
    Blank,
    SectionHeader(SectionKind),
    /// Any other `;;` line.
    Comment,
    Record(&'a str),
}

impl<'a> MessageLine<'a> {
    pub fn classify(line: &'a str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return MessageLine::Blank;
        }
        if let Some(kind) = SectionKind::from_marker(trimmed) {
            return MessageLine::SectionHeader(kind);
        }
        if trimmed.starts_with(COMMENT_PREFIX) {
            return MessageLine::Comment;
        }
        MessageLine::Record(line)
    }

    /// True for every line that starts with the comment prefix, section
    /// markers included.
    pub fn is_comment(&self) -> bool {
        matches!(self, MessageLine::SectionHeader(_) | MessageLine::Comment)
    }
}

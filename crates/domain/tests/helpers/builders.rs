#![allow(dead_code)]
use ferrous_pdns_domain::{DecodedMessage, MessageSection, SectionKind};

pub struct DecodedMessageBuilder {
    id: u16,
    response_code: String,
    questions: Vec<String>,
    answers: Option<Vec<String>>,
    authority: Vec<String>,
}

impl DecodedMessageBuilder {
    pub fn new() -> Self {
        Self {
            id: 4242,
            response_code: "NOERROR".to_string(),
            questions: vec!["example.com. IN A".to_string()],
            answers: Some(Vec::new()),
            authority: Vec::new(),
        }
    }

    pub fn answer(mut self, line: &str) -> Self {
        self.answers
            .get_or_insert_with(Vec::new)
            .push(line.to_string());
        self
    }

    pub fn without_answer_section(mut self) -> Self {
        self.answers = None;
        self
    }

    pub fn authority(mut self, line: &str) -> Self {
        self.authority.push(line.to_string());
        self
    }

    pub fn build(self) -> DecodedMessage {
        let mut sections = vec![MessageSection::new(SectionKind::Question, self.questions)];
        if let Some(answers) = self.answers {
            sections.push(MessageSection::new(SectionKind::Answer, answers));
        }
        sections.push(MessageSection::new(SectionKind::Authority, self.authority));
        sections.push(MessageSection::new(SectionKind::Additional, Vec::new()));

        DecodedMessage {
            id: self.id,
            response_code: self.response_code,
            truncated: false,
            sections,
        }
    }
}

impl Default for DecodedMessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn a_record(name: &str, ip: &str) -> String {
    format!("{} 300 IN A {}", name, ip)
}

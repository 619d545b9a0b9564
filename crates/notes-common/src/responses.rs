//! Scripted stand-ins for the "AI" features: chatbot replies, note
//! summaries, and handwriting scans. Nothing here calls a model.

use crate::normalization;

pub const CHAT_GREETING: &str =
    "Hi there! I'm your NoteNexus AI assistant. How can I help you today?";

pub const CHAT_FALLBACK: &str = "I can help you find notes, summarize content, create study plans, or answer questions about your courses. What would you like to know more about?";

/// Trigger substrings (lowercase) and the reply they select.
pub const CHAT_RULES: &[(&[&str], &str)] = &[
    (
        &["dbms", "database"],
        "I found several DBMS notes from top universities. Would you like me to show you the most popular ones or help you with a specific DBMS concept?",
    ),
    (
        &["summarize"],
        "I can summarize your notes using AI. Just upload the document or paste the text you want to summarize.",
    ),
    (
        &["exam", "test"],
        "I can help you prepare for exams by creating practice questions or a study schedule. What subject are you studying for?",
    ),
];

/// Who wrote a chat line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    Bot,
    User,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Bot,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Trigger-pattern to canned-response table. First matching rule wins.
#[derive(Clone, Debug)]
pub struct ChatScript {
    rules: Vec<(Vec<String>, String)>,
    fallback: String,
}

impl Default for ChatScript {
    fn default() -> Self {
        Self::new(CHAT_RULES, CHAT_FALLBACK)
    }
}

impl ChatScript {
    pub fn new(rules: &[(&[&str], &str)], fallback: &str) -> Self {
        Self {
            rules: rules
                .iter()
                .map(|(triggers, reply)| {
                    (
                        triggers
                            .iter()
                            .map(|t| normalization::fold_for_search(t))
                            .collect(),
                        reply.to_string(),
                    )
                })
                .collect(),
            fallback: fallback.to_string(),
        }
    }

    /// Reply for `message`, or None for a blank message (which is not sent).
    pub fn reply_to(&self, message: &str) -> Option<&str> {
        if message.trim().is_empty() {
            return None;
        }
        let folded = normalization::fold_for_search(message);
        let reply = self
            .rules
            .iter()
            .find(|(triggers, _)| triggers.iter().any(|t| folded.contains(t.as_str())))
            .map(|(_, reply)| reply.as_str())
            .unwrap_or(&self.fallback);
        Some(reply)
    }
}

/// Chat transcript for one chatbot window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::bot(CHAT_GREETING)],
        }
    }
}

impl ChatLog {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append the user's line. Returns false (and appends nothing) when blank.
    pub fn push_user(&mut self, message: &str) -> bool {
        if message.trim().is_empty() {
            return false;
        }
        self.messages.push(ChatMessage::user(message));
        true
    }

    pub fn push_bot(&mut self, reply: &str) {
        self.messages.push(ChatMessage::bot(reply));
    }
}

/// Result payload of the note summarizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub text: String,
    pub key_points: Vec<String>,
}

pub fn canned_summary() -> Summary {
    Summary {
        text: "This comprehensive guide covers relational database concepts including normalization, SQL queries, transaction management, and database design principles. It explains the theoretical foundations of DBMS while providing practical examples of implementation. The notes include diagrams of entity-relationship models and detailed explanations of query optimization techniques.".to_string(),
        key_points: [
            "Covers normalization forms (1NF, 2NF, 3NF, BCNF)",
            "Explains transaction ACID properties with examples",
            "Details SQL syntax for complex queries and joins",
            "Includes database security best practices",
            "Provides case studies of real-world database implementations",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    }
}

/// Result payload of the handwriting scanner.
pub const SCANNED_TEXT: &str = "Database Management Systems (DBMS)

1. Introduction to DBMS
   - A database is a collection of related data
   - DBMS is software that manages databases
   - Provides interface between data and applications

2. Relational Database Concepts
   - Tables (relations) store data in rows and columns
   - Primary keys uniquely identify records
   - Foreign keys establish relationships between tables

3. Normalization
   - 1NF: Eliminate repeating groups
   - 2NF: Remove partial dependencies
   - 3NF: Remove transitive dependencies
   - BCNF: More stringent form of 3NF

4. SQL Fundamentals
   - SELECT, INSERT, UPDATE, DELETE operations
   - JOIN operations for combining data from multiple tables
   - Aggregate functions: COUNT, SUM, AVG, MIN, MAX";

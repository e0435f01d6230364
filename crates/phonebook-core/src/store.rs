//! The contact store and command execution.
//!
//! `PhoneBook` is owned by the caller and mutated only through parsed
//! commands, so two books never share state and a dropped book takes its
//! contacts with it.

use crate::command::{parse_query, Command, Field};
use crate::error::Result;

/// A single directory entry. Phones are stored as the ten digits they
/// were written with; formatting happens at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phones: Vec<String>,
    pub emails: Vec<String>,
}

/// An insertion-ordered contact directory.
#[derive(Debug, Clone, Default)]
pub struct PhoneBook {
    contacts: Vec<Contact>,
}

impl PhoneBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Contacts in insertion order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Parses `query` and executes every command in it, returning the
    /// lines produced by `Покажи` commands in execution order.
    ///
    /// Execution starts only after the whole query has parsed, so a
    /// syntax error anywhere leaves the book untouched.
    pub fn run(&mut self, query: &str) -> Result<Vec<String>> {
        let commands = parse_query(query)?;
        let mut output = Vec::new();
        for command in &commands {
            output.extend(self.apply(command));
        }
        Ok(output)
    }

    /// Executes one command. Only `Show` produces output lines, one per
    /// matching contact.
    pub fn apply(&mut self, command: &Command) -> Vec<String> {
        match command {
            Command::Create { name } => {
                if self.position(name).is_none() {
                    self.contacts.push(Contact {
                        name: name.clone(),
                        ..Contact::default()
                    });
                }
                Vec::new()
            }
            Command::DeleteContact { name } => {
                if let Some(index) = self.position(name) {
                    self.contacts.remove(index);
                }
                Vec::new()
            }
            Command::DeleteWhere { needle } => {
                // An empty needle would match every contact, so it is a no-op
                // instead of wiping the book.
                if !needle.is_empty() {
                    self.contacts.retain(|contact| !contact.name.contains(needle.as_str()));
                }
                Vec::new()
            }
            Command::AddEntries {
                name,
                phones,
                emails,
            } => {
                if let Some(index) = self.position(name) {
                    let contact = &mut self.contacts[index];
                    extend_unique(&mut contact.phones, phones);
                    extend_unique(&mut contact.emails, emails);
                }
                Vec::new()
            }
            Command::RemoveEntries {
                name,
                phones,
                emails,
            } => {
                if let Some(index) = self.position(name) {
                    let contact = &mut self.contacts[index];
                    contact.phones.retain(|value| !phones.contains(value));
                    contact.emails.retain(|value| !emails.contains(value));
                }
                Vec::new()
            }
            Command::Show { fields, needle } => self.render_matching(fields, needle),
        }
    }

    /// Renders the requested fields of every contact whose name contains
    /// `needle`, one line per contact in insertion order. Fields are
    /// joined with `;` in the requested order, values within a field
    /// with `,`.
    pub fn render_matching(&self, fields: &[Field], needle: &str) -> Vec<String> {
        self.contacts
            .iter()
            .filter(|contact| contact.name.contains(needle))
            .map(|contact| {
                fields
                    .iter()
                    .map(|field| match field {
                        Field::Name => contact.name.clone(),
                        Field::Phones => contact
                            .phones
                            .iter()
                            .map(|digits| format_phone(digits))
                            .collect::<Vec<_>>()
                            .join(","),
                        Field::Emails => contact.emails.join(","),
                    })
                    .collect::<Vec<_>>()
                    .join(";")
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.contacts.iter().position(|contact| contact.name == name)
    }
}

/// Appends each value missing from `existing`, keeping first-seen order.
fn extend_unique(existing: &mut Vec<String>, incoming: &[String]) {
    for value in incoming {
        if !existing.contains(value) {
            existing.push(value.clone());
        }
    }
}

/// Renders ten stored digits as `+7 (XXX) XXX-XX-XX`.
fn format_phone(digits: &str) -> String {
    format!(
        "+7 ({}) {}-{}-{}",
        &digits[..3],
        &digits[3..6],
        &digits[6..8],
        &digits[8..]
    )
}

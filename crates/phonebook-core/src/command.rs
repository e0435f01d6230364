//! Parser for the phonebook command language.
//!
//! A query is a sequence of Russian imperative sentences separated by `;`.
//! Any text after the final `;` is ignored, so a query without a single
//! semicolon parses to no commands at all.
//!
//! Key design decisions:
//! - Commands are recognized by sentence prefix, longest prefix first, so
//!   `Удали контакты, где есть` is tried before `Удали контакт`.
//! - Entry lists are scanned left to right; a value ends at the earliest
//!   ` и ` or terminal clause, which also means values themselves may not
//!   contain those separators.
//! - Errors carry the 1-based command index and the 0-based character
//!   offset where scanning stopped, counted in characters rather than
//!   bytes so the position matches what a reader of the query sees.

use crate::error::{PhonebookError, Result};

const AND: &str = " и ";
const FOR_CONTACT: &str = " для контакта ";
const WHERE_CONTAINS: &str = " для контактов, где есть ";

/// One parsed command, carrying only the data its sentence form names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `Создай контакт <имя>` adds an empty contact; an existing name is
    /// left untouched.
    Create { name: String },
    /// `Удали контакт <имя>` removes the contact if present.
    DeleteContact { name: String },
    /// `Удали контакты, где есть <подстрока>` removes every contact whose
    /// name contains the needle. An empty needle removes nothing.
    DeleteWhere { needle: String },
    /// `Добавь <записи> для контакта <имя>` appends phones and emails,
    /// skipping values the contact already holds.
    AddEntries {
        name: String,
        phones: Vec<String>,
        emails: Vec<String>,
    },
    /// `Удали <записи> для контакта <имя>` drops the listed phones and
    /// emails; values the contact never held are ignored.
    RemoveEntries {
        name: String,
        phones: Vec<String>,
        emails: Vec<String>,
    },
    /// `Покажи <поля> для контактов, где есть <подстрока>` renders the
    /// requested fields of every contact whose name contains the needle.
    /// An empty needle matches every contact.
    Show { fields: Vec<Field>, needle: String },
}

/// A field selectable in a `Покажи` command, in query spelling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phones,
    Emails,
}

/// Parses a whole query into its command list.
///
/// Parsing is all-or-nothing: the first syntax error aborts the query and
/// nothing before it is returned, which lets callers execute the result
/// without partially applied queries.
pub fn parse_query(query: &str) -> Result<Vec<Command>> {
    let pieces: Vec<&str> = query.split(';').collect();
    let mut commands = Vec::with_capacity(pieces.len().saturating_sub(1));
    // The text after the last `;` is not a command and is dropped.
    for (index, piece) in pieces[..pieces.len() - 1].iter().enumerate() {
        commands.push(parse_command(index + 1, piece)?);
    }
    Ok(commands)
}

/// Parses a single `;`-delimited command. `line` is its 1-based index in
/// the query and is only used for error reporting.
fn parse_command(line: usize, text: &str) -> Result<Command> {
    if let Some(name) = text.strip_prefix("Создай контакт ") {
        return Ok(Command::Create {
            name: name.to_string(),
        });
    }
    if let Some(needle) = text.strip_prefix("Удали контакты, где есть ") {
        return Ok(Command::DeleteWhere {
            needle: needle.to_string(),
        });
    }
    if let Some(name) = text.strip_prefix("Удали контакт ") {
        return Ok(Command::DeleteContact {
            name: name.to_string(),
        });
    }
    if let Some(rest) = text.strip_prefix("Добавь ") {
        let (phones, emails, name) = parse_entries(line, text, rest)?;
        return Ok(Command::AddEntries {
            name,
            phones,
            emails,
        });
    }
    if let Some(rest) = text.strip_prefix("Удали ") {
        let (phones, emails, name) = parse_entries(line, text, rest)?;
        return Ok(Command::RemoveEntries {
            name,
            phones,
            emails,
        });
    }
    if let Some(rest) = text.strip_prefix("Покажи ") {
        return parse_show(line, text, rest);
    }
    Err(unexpected(line, text, text))
}

/// What follows a scanned token: an ` и ` continuation, the terminal
/// clause of the sentence, or the end of the command.
enum Next<'a> {
    And(&'a str),
    Terminal(&'a str),
    End,
}

/// Splits `cursor` at the earliest of ` и ` or `terminal` and reports
/// which one matched. The two separators can never start at the same
/// offset because they differ right after the leading space.
fn next_token<'a>(cursor: &'a str, terminal: &str) -> (&'a str, Next<'a>) {
    let and = cursor.find(AND);
    let term = cursor.find(terminal);
    match (and, term) {
        (Some(a), Some(t)) if a < t => (&cursor[..a], Next::And(&cursor[a + AND.len()..])),
        (_, Some(t)) => (&cursor[..t], Next::Terminal(&cursor[t + terminal.len()..])),
        (Some(a), None) => (&cursor[..a], Next::And(&cursor[a + AND.len()..])),
        (None, None) => (cursor, Next::End),
    }
}

/// Parses `телефон <10 цифр>` / `почту <адрес>` entries joined by ` и `
/// and closed by ` для контакта <имя>`. Returns phones, emails and the
/// contact name.
fn parse_entries(line: usize, command: &str, rest: &str) -> Result<(Vec<String>, Vec<String>, String)> {
    let mut phones = Vec::new();
    let mut emails = Vec::new();
    let mut cursor = rest;
    loop {
        if let Some(after) = cursor.strip_prefix("телефон ") {
            let (value, next) = next_token(after, FOR_CONTACT);
            if !is_phone(value) {
                return Err(unexpected(line, command, after));
            }
            phones.push(value.to_string());
            cursor = match next {
                Next::And(tail) => tail,
                Next::Terminal(name) => return Ok((phones, emails, name.to_string())),
                Next::End => return Err(unexpected(line, command, "")),
            };
        } else if let Some(after) = cursor.strip_prefix("почту ") {
            let (value, next) = next_token(after, FOR_CONTACT);
            emails.push(value.to_string());
            cursor = match next {
                Next::And(tail) => tail,
                Next::Terminal(name) => return Ok((phones, emails, name.to_string())),
                Next::End => return Err(unexpected(line, command, "")),
            };
        } else {
            return Err(unexpected(line, command, cursor));
        }
    }
}

/// Parses the field list of a `Покажи` command up to the
/// ` для контактов, где есть ` clause.
fn parse_show(line: usize, command: &str, rest: &str) -> Result<Command> {
    let mut fields = Vec::new();
    let mut cursor = rest;
    loop {
        let (token, next) = next_token(cursor, WHERE_CONTAINS);
        let field = match token {
            "имя" => Field::Name,
            "телефоны" => Field::Phones,
            "почты" => Field::Emails,
            _ => return Err(unexpected(line, command, cursor)),
        };
        fields.push(field);
        cursor = match next {
            Next::And(tail) => tail,
            Next::Terminal(needle) => {
                return Ok(Command::Show {
                    fields,
                    needle: needle.to_string(),
                })
            }
            Next::End => return Err(unexpected(line, command, "")),
        };
    }
}

/// A phone is exactly ten ASCII digits.
fn is_phone(value: &str) -> bool {
    value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit())
}

/// Builds the error for a scan that stopped with `tail` left unread.
/// `tail` must be a suffix of `command`; the column is the character
/// count of everything already consumed.
fn unexpected(line: usize, command: &str, tail: &str) -> PhonebookError {
    let column = command[..command.len() - tail.len()].chars().count();
    PhonebookError::UnexpectedToken { line, column }
}

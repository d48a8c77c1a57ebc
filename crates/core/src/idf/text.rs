//! IDF text layout
//!
//! ```text
//! ! Custom Object
//! OS:Timestep,
//!   {8a1c7e52-2a5e-4c4e-9a51-0c1b3a1c9f10}, !- Handle
//!   6;                                      !- Number of Timesteps per Hour
//! ```

use std::fmt;

use osmodel_idd::IddFieldType;

use super::store::FieldStore;
use crate::handle::Handle;
use crate::schema::idd_object_by_name;

/// Column at which field comments start
pub const DEFAULT_FIELD_SPACE: usize = 38;

/// Errors from parsing object text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdfError {
    #[error("No object found in text")]
    Empty,

    #[error("Unknown object type: {0}")]
    UnknownObjectType(String),

    #[error("{object} given {found} fields but its schema defines {expected}")]
    TooManyFields {
        object: String,
        found: usize,
        expected: usize,
    },

    #[error("Invalid handle: {0}")]
    InvalidHandle(String),

    #[error("Invalid value '{value}' for {object} field '{field}'")]
    InvalidField {
        object: String,
        field: String,
        value: String,
    },
}

impl FieldStore {
    /// Print the object with field comments starting at `field_space`
    pub fn to_idf_string(&self, field_space: usize) -> String {
        let mut out = String::new();
        for line in self.comment().lines() {
            out.push_str(line);
            out.push('\n');
        }

        let idd = self.idd_object();
        let printed = (0..self.num_fields())
            .rev()
            .find(|i| !self.is_empty(*i))
            .map_or(0, |i| i + 1);

        if printed == 0 {
            out.push_str(idd.name);
            out.push_str(";\n");
            return out;
        }

        out.push_str(idd.name);
        out.push_str(",\n");
        for index in 0..printed {
            let field = &idd.fields[index];
            let terminator = if index + 1 == printed { ';' } else { ',' };
            let value = format!("  {}{}", self.field_text(index), terminator);
            let units = field.units.map(|u| format!(" {{{}}}", u)).unwrap_or_default();
            out.push_str(&format!(
                "{:<width$} !- {}{}\n",
                value,
                field.name,
                units,
                width = field_space
            ));
        }
        out
    }

    /// Parse one object
    ///
    /// Comment lines before the type name become the object comment. Field
    /// comments (`!-`) are dropped. A handle field restores the handle and
    /// `{uuid}` text in an object-list field becomes a reference.
    pub fn load(text: &str) -> Result<FieldStore, IdfError> {
        let mut comments = Vec::new();
        let mut body = String::new();

        for line in text.lines() {
            let (content, comment) = split_comment(line);
            if body.trim().is_empty() && content.trim().is_empty() {
                if let Some(c) = comment.filter(|c| !c.starts_with("!-")) {
                    comments.push(c.trim_end());
                }
                continue;
            }
            body.push_str(content);
            body.push('\n');
        }

        let body = body.split(';').next().unwrap_or_default();
        let mut tokens = body.split(',').map(str::trim);
        let type_name = tokens
            .next()
            .filter(|t| !t.is_empty())
            .ok_or(IdfError::Empty)?;
        let idd = idd_object_by_name(type_name)
            .map_err(|_| IdfError::UnknownObjectType(type_name.to_string()))?;
        let values: Vec<&str> = tokens.collect();

        if values.len() > idd.num_fields() {
            return Err(IdfError::TooManyFields {
                object: idd.name.to_string(),
                found: values.len(),
                expected: idd.num_fields(),
            });
        }

        let handle = match values.first() {
            Some(text) if idd.has_handle_field && !text.is_empty() => {
                Handle::parse(text).ok_or_else(|| IdfError::InvalidHandle(text.to_string()))?
            }
            _ => Handle::new(),
        };

        let mut store = FieldStore::with_handle(idd.object_type, handle);
        for (index, value) in values.iter().enumerate() {
            let field = &idd.fields[index];
            if value.is_empty() || field.field_type == IddFieldType::Handle {
                continue;
            }
            let accepted = match field.field_type {
                IddFieldType::ObjectList => {
                    Handle::parse(value).is_some_and(|h| store.set_pointer(index, h))
                }
                _ => store.set_string(index, &decode_field_text(value)),
            };
            if !accepted {
                return Err(IdfError::InvalidField {
                    object: idd.name.to_string(),
                    field: field.name.to_string(),
                    value: value.to_string(),
                });
            }
        }

        store.set_comment(&comments.join("\n"));
        Ok(store)
    }
}

impl fmt::Display for FieldStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_idf_string(DEFAULT_FIELD_SPACE))
    }
}

// Characters that would end a field, an object or a line
const ESCAPES: [(char, &str); 5] = [
    ('\n', "&#10"),
    ('\r', "&#13"),
    ('!', "&#33"),
    (',', "&#44"),
    (';', "&#59"),
];

/// Escape the delimiters in a text value for printing
pub(crate) fn encode_field_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match ESCAPES.iter().find(|(ch, _)| *ch == c) {
            Some((_, code)) => out.push_str(code),
            None => out.push(c),
        }
    }
    out
}

/// Reverse [`encode_field_text`]; unknown `&#` sequences are kept as is
pub(crate) fn decode_field_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(i) = rest.find("&#") {
        out.push_str(&rest[..i]);
        rest = &rest[i..];
        match ESCAPES.iter().find(|(_, code)| rest.starts_with(code)) {
            Some((ch, code)) => {
                out.push(*ch);
                rest = &rest[code.len()..];
            }
            None => {
                out.push_str("&#");
                rest = &rest[2..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn split_comment(line: &str) -> (&str, Option<&str>) {
    match line.find('!') {
        Some(i) => (&line[..i], Some(&line[i..])),
        None => (line, None),
    }
}

/// Split a document into the text of its objects
///
/// An object ends at the first `;` outside a comment. Chunks holding only
/// comments or whitespace are dropped.
pub fn split_objects(text: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        let (content, comment) = split_comment(line);
        let mut rest = content;
        while let Some(end) = rest.find(';') {
            current.push_str(&rest[..=end]);
            chunks.push(std::mem::take(&mut current));
            rest = &rest[end + 1..];
        }
        current.push_str(rest);
        if let Some(comment) = comment {
            current.push_str(comment);
        }
        current.push('\n');
    }
    chunks.push(current);

    chunks.retain(|chunk| {
        chunk
            .lines()
            .any(|line| !split_comment(line).0.trim().is_empty())
    });
    chunks
}

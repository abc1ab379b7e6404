//! Named-field template rendering.
//!
//! Templates reference fields with `{{.Name}}` (inner whitespace allowed).
//! A template is parsed once when its factory is created, so malformed syntax
//! surfaces at declaration time and rendering only has to look fields up.

use smallvec::SmallVec;

use crate::render::Fields;
use crate::types::alloc_type::String;
use crate::types::{ConfigError, RenderError};

const NO_VALUE: &str = "<no value>";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Field(String),
}

/// A parsed named-dialect template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: SmallVec<[Segment; 4]>,
}

impl Template {
    /// Parses `spec`, rejecting unclosed or malformed actions.
    pub fn parse(spec: &str) -> Result<Self, ConfigError> {
        let mut segments = SmallVec::new();
        let mut rest = spec;
        let mut offset = 0;

        while let Some(open) = rest.find("{{") {
            if open > 0 {
                segments.push(Segment::Text(rest[..open].into()));
            }
            let at = offset + open;
            let body_start = open + 2;
            let Some(len) = rest[body_start..].find("}}") else {
                return Err(ConfigError::InvalidTemplate { offset: at, reason: "unclosed action" });
            };

            let action = rest[body_start..body_start + len].trim();
            segments.push(Segment::Field(parse_field(action, at)?.into()));

            let consumed = body_start + len + 2;
            rest = &rest[consumed..];
            offset += consumed;
        }

        if !rest.is_empty() {
            segments.push(Segment::Text(rest.into()));
        }

        Ok(Self { segments })
    }

    /// Renders the template against `input`.
    pub fn render<T: Fields + ?Sized>(&self, input: &T) -> Result<String, RenderError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Field(name) => {
                    let value = input
                        .field(name)
                        .ok_or_else(|| RenderError::MissingField { field: name.clone() })?;
                    out.push_str(&value);
                },
            }
        }
        Ok(out)
    }

    /// Renders the template, writing `<no value>` for fields `input` lacks.
    pub fn render_lossy<T: Fields + ?Sized>(&self, input: &T) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Field(name) => match input.field(name) {
                    Some(value) => out.push_str(&value),
                    None => out.push_str(NO_VALUE),
                },
            }
        }
        out
    }

    /// Names of the fields referenced by this template, in order of appearance.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field(name) => Some(name.as_str()),
            Segment::Text(_) => None,
        })
    }
}

fn parse_field(action: &str, offset: usize) -> Result<&str, ConfigError> {
    if action.is_empty() {
        return Err(ConfigError::InvalidTemplate { offset, reason: "empty action" });
    }
    let Some(name) = action.strip_prefix('.') else {
        return Err(ConfigError::InvalidTemplate { offset, reason: "action must be a field reference" });
    };
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
        return Err(ConfigError::InvalidTemplate { offset, reason: "invalid field name" });
    }
    Ok(name)
}

/// Returns true if `text` contains the start of a template action.
pub fn has_actions(text: &str) -> bool {
    text.contains("{{")
}

impl core::fmt::Display for Template {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => f.write_str(text)?,
                Segment::Field(name) => write!(f, "{{{{.{name}}}}}")?,
            }
        }
        Ok(())
    }
}

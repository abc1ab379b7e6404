//! Rendering strategies: how a format spec and its inputs become a message.
//!
//! Two dialects are supported:
//!
//! - [`Dialect::Positional`] substitutes printf-style verbs (`%s`, `%d`, ...)
//!   from an ordered list of [`Args`]. It never fails.
//! - [`Dialect::Named`] substitutes `{{.Field}}` placeholders from any value
//!   implementing [`Fields`]. Syntax is checked once when the factory is created;
//!   a missing field fails the render.
//!
//! # Examples
//!
//! ```
//! use falta::render::{printf, Template};
//! use falta::{m, Args};
//!
//! let args = Args::from(["dog", "black"]);
//! assert_eq!(printf::render("the %s is %s", &args), "the dog is black");
//!
//! let tmpl = Template::parse("radius ({{.Radius}}) <= 0").unwrap();
//! assert_eq!(tmpl.render(&m! { "Radius" => -1 }).unwrap(), "radius (-1) <= 0");
//! ```

mod arg;
mod fields;
pub mod printf;
pub mod template;

use core::fmt::{self, Display};

pub use arg::{Arg, Args};
pub use fields::{Fields, M};
pub use template::Template;

/// The substitution mode of a factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Positional,
    Named,
}

impl Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Positional => "positional",
            Self::Named => "named",
        })
    }
}

/// Returns true if `text` contains substitution syntax of either dialect.
///
/// Fixed messages and annotations are rejected when this holds, so that text
/// is never templated twice.
pub fn has_substitutions(text: &str) -> bool {
    printf::has_verbs(text) || template::has_actions(text)
}

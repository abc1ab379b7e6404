use core::error::Error;
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::Falta;

impl Display for Falta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return f.write_str(self.message());
        }

        // `{:#}` lists the chain one link per line.
        write!(f, "{}", self.message())?;
        for link in self.chain().skip(1) {
            write!(f, "\n  caused by: {link}")?;
        }
        Ok(())
    }
}

impl Error for Falta {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.unwrap_cause().map(|cause| &**cause as &(dyn Error + 'static))
    }
}

#[cfg(feature = "serde")]
impl Serialize for Falta {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use crate::types::alloc_type::{String, ToString, Vec};

        let causes: Vec<String> = self.chain().skip(1).map(|link| link.to_string()).collect();
        let mut state = serializer.serialize_struct("Falta", 3)?;
        state.serialize_field("spec", self.spec())?;
        state.serialize_field("message", self.message())?;
        state.serialize_field("causes", &causes)?;
        state.end()
    }
}

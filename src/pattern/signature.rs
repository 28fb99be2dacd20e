use regex::Regex;

use crate::document::{SourceDocument, SourceLine};

/// Name of the program entry point.
pub const ENTRY_POINT: &str = "Main";

const ACCESS: &str = r"(?:public|private|protected|internal)";
const TYPE_TOKEN: &str = r"[\w.<>\[\],?]+";
const IDENT: &str = r"(?P<name>[A-Za-z_]\w*)";

/// A subroutine declaration recognized on a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature<'a> {
    pub name: &'a str,
}

impl Signature<'_> {
    #[must_use]
    pub fn is_entry_point(&self) -> bool {
        self.name == ENTRY_POINT
    }
}

/// A field declaration recognized on a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDeclaration<'a> {
    pub name: &'a str,
}

/// Line-level recognizer for subroutine, field and class declarations.
///
/// Purely textual: generics containing spaces and signatures split across
/// lines are not recognized.
#[allow(clippy::struct_field_names)]
pub struct SignaturePattern {
    subroutine_pattern: Regex,
    field_pattern: Regex,
    class_pattern: Regex,
}

impl Default for SignaturePattern {
    fn default() -> Self {
        Self::new()
    }
}

impl SignaturePattern {
    #[must_use]
    pub fn new() -> Self {
        Self {
            subroutine_pattern: Regex::new(&format!(
                r"^\s*{ACCESS}\s+(?:(?:static|virtual|override|abstract|async|sealed|extern|unsafe|new|partial)\s+)*{TYPE_TOKEN}\s+{IDENT}\s*\([^)]*\)"
            ))
            .expect("Invalid regex"),
            field_pattern: Regex::new(&format!(
                r"^\s*{ACCESS}\s+(?:(?:static|readonly|const|volatile|new)\s+)*{TYPE_TOKEN}\s+{IDENT}\s*(?:=[^;]*)?;\s*(?://.*)?$"
            ))
            .expect("Invalid regex"),
            class_pattern: Regex::new(
                r"^\s*(?:(?:public|private|protected|internal|static|abstract|sealed|partial)\s+)*class\s+(?P<name>[A-Za-z_]\w*)",
            )
            .expect("Invalid regex"),
        }
    }

    /// Recognize a subroutine signature on a line.
    #[must_use]
    pub fn subroutine<'a>(&self, line: &'a str) -> Option<Signature<'a>> {
        let caps = self.subroutine_pattern.captures(line)?;
        Some(Signature {
            name: caps.name("name").map_or("", |m| m.as_str()),
        })
    }

    /// Recognize a field declaration on a line.
    #[must_use]
    pub fn field<'a>(&self, line: &'a str) -> Option<FieldDeclaration<'a>> {
        let caps = self.field_pattern.captures(line)?;
        Some(FieldDeclaration {
            name: caps.name("name").map_or("", |m| m.as_str()),
        })
    }

    /// Name of the class declared on a line, if any.
    #[must_use]
    pub fn class_name<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.class_pattern
            .captures(line)
            .and_then(|caps| caps.name("name"))
            .map(|m| m.as_str())
    }

    /// Every subroutine signature in the document, in file order.
    pub fn subroutines<'d>(
        &'d self,
        doc: &'d SourceDocument,
    ) -> impl Iterator<Item = (usize, &'d SourceLine, Signature<'d>)> + 'd {
        doc.lines()
            .iter()
            .enumerate()
            .filter_map(|(i, line)| self.subroutine(&line.raw).map(|sig| (i, line, sig)))
    }
}

#[cfg(test)]
#[path = "signature_tests.rs"]
mod tests;

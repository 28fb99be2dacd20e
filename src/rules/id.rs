use std::fmt;

/// Stable identifier of a rule in the catalog.
///
/// Variants are declared in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleId {
    MethodNaming = 1,
    PublicStaticField = 2,
    StaticReadonlyMedia = 3,
    DuplicateBlock = 4,
    CollectionUsage = 5,
    LoopUsage = 6,
    MagicNumber = 7,
    MethodSpacing = 8,
    DeclarationComment = 9,
    MethodPresence = 10,
}

impl RuleId {
    pub const ALL: [Self; 10] = [
        Self::MethodNaming,
        Self::PublicStaticField,
        Self::StaticReadonlyMedia,
        Self::DuplicateBlock,
        Self::CollectionUsage,
        Self::LoopUsage,
        Self::MagicNumber,
        Self::MethodSpacing,
        Self::DeclarationComment,
        Self::MethodPresence,
    ];

    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.number() == number)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MethodNaming => "method-naming",
            Self::PublicStaticField => "public-static-field",
            Self::StaticReadonlyMedia => "static-readonly-media",
            Self::DuplicateBlock => "duplicate-block",
            Self::CollectionUsage => "collection-usage",
            Self::LoopUsage => "loop-usage",
            Self::MagicNumber => "magic-number",
            Self::MethodSpacing => "method-spacing",
            Self::DeclarationComment => "declaration-comment",
            Self::MethodPresence => "method-presence",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::MethodNaming => {
                "Method names start with an uppercase letter (PascalCase). The program entry point is exempt."
            }
            Self::PublicStaticField => {
                "Fields are not both public and static unless they are const or readonly."
            }
            Self::StaticReadonlyMedia => {
                "Declarations of media resources (images, sprites, textures, sounds, audio, video, animations) are 'static readonly'."
            }
            Self::DuplicateBlock => {
                "No block of three consecutive non-trivial lines appears twice. Only the first duplicate in a file is reported."
            }
            Self::CollectionUsage => "The file uses at least one array or list.",
            Self::LoopUsage => "The file uses at least one for, foreach, while or do loop.",
            Self::MagicNumber => {
                "Integer literals other than 0, 1 and -1 do not appear in assignments or comparisons outside const declarations."
            }
            Self::MethodSpacing => {
                "Every method body is followed by two blank lines, unless the enclosing scope closes right after it."
            }
            Self::DeclarationComment => {
                "Every class and method declaration is directly preceded by a comment line."
            }
            Self::MethodPresence => "The file declares at least one method.",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number(), self.name())
    }
}

impl std::str::FromStr for RuleId {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        s.parse::<u8>()
            .ok()
            .and_then(Self::from_number)
            .or_else(|| Self::ALL.into_iter().find(|id| id.name() == s))
            .ok_or_else(|| format!("Unknown rule: {s}"))
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;

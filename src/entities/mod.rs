// Entity Models - structured records the predicate engine evaluates against
//
// Each record is:
// - Immutable after construction (the engine never mutates it)
// - Pre-normalized at load time: lowercase text forms, derived first
//   letters, and vowel flags are computed once, never per evaluation
// - Addressed through field enums, so predicates stay pure data

pub mod country;
pub mod office_holder;

pub use country::{Country, CountryInit};
pub use office_holder::{OfficeHolder, OfficeHolderInit};

use serde::{Deserialize, Serialize};

// ============================================================================
// DOMAIN
// ============================================================================

/// Which dataset a grid is played against. Picks the compiler's rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Domain {
    Country,
    OfficeHolder,
}

impl Domain {
    pub fn name(&self) -> &'static str {
        match self {
            Domain::Country => "Country",
            Domain::OfficeHolder => "President",
        }
    }
}

// ============================================================================
// FIELD ADDRESSING
// ============================================================================

/// Text attributes. Accessors return the precomputed lowercase form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextField {
    Name,
    FirstName,
    LastName,
    Capital,
    Continent,
    Region,
    Religion,
    Party,
    BirthState,
}

/// Numeric attributes. All optional: missing source data stays missing,
/// and numeric predicates against a missing value evaluate false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericField {
    PopulationRank,
    AreaRank,
    BorderCount,
    TermStart,
    TermEnd,
    YearsInOffice,
    AgeAtStart,
    PresidencyNumber,
    HeightInches,
    WeightLbs,
}

/// Boolean attributes, normalized from "y"/"yes"/"true"/"1" at load time.
/// Includes the derived vowel-start flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagField {
    // Country flags
    NameInCapital,
    Landlocked,
    OnEquator,
    IslandNation,
    BordersChina,
    BordersRussia,
    HostsOlympics,
    WorldCupWinner,
    NatoMember,
    NameVowel,

    // Office-holder flags
    Assassinated,
    DiedInOffice,
    MilitaryService,
    ServedInCongress,
    ServedInHouse,
    ServedInSenate,
    VicePresident,
    FacialHair,
    FoundingFather,
    SecretaryOfState,
    Governor,
    IvyLeague,
    NobelPrize,
    Impeached,
    CollegeDegree,
    LostPopularVote,
    ColdWar,
    OnCurrency,
    MountRushmore,
    MetQueenElizabethII,
    UnmarriedInOffice,
    TiedWar1812,
    RelatedToPresident,
    AlliterativeName,
    ReElected,
    BornBefore1800,
    Born1800To1900,
    Born1900To2000,
    FirstNameVowel,
    LastNameVowel,
}

// ============================================================================
// CONSUMPTION CONTRACT
// ============================================================================

/// Shared consumption contract for all entity records.
///
/// The evaluator only ever goes through these accessors, so a predicate
/// compiled for one domain evaluates false (never panics) against a
/// record from the other: unknown text/numeric fields come back `None`,
/// unknown flags come back `false`.
pub trait GridEntity {
    /// Canonical display name, unique within a dataset.
    fn canonical_name(&self) -> &str;

    /// Case-insensitive guess resolution, including aliases.
    /// `guess` is expected lowercase and trimmed.
    fn matches_name(&self, guess: &str) -> bool;

    /// Precomputed lowercase form of a text attribute.
    fn text(&self, field: TextField) -> Option<&str>;

    /// Numeric attribute, `None` when the source value was missing.
    fn number(&self, field: NumericField) -> Option<f64>;

    /// Normalized boolean attribute. Unknown fields are `false`.
    fn flag(&self, field: FlagField) -> bool;

    /// Precomputed uppercase first letter of a text attribute.
    fn first_letter(&self, field: TextField) -> Option<char>;
}

/// First character, uppercased. Computed once at load time.
pub(crate) fn initial(text: &str) -> Option<char> {
    text.chars().next().map(|c| c.to_ascii_uppercase())
}

/// Vowel-start flag, derived once at load time.
pub(crate) fn starts_with_vowel(text: &str) -> bool {
    matches!(
        text.chars().next().map(|c| c.to_ascii_lowercase()),
        Some('a' | 'e' | 'i' | 'o' | 'u')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_uppercases() {
        assert_eq!(initial("france"), Some('F'));
        assert_eq!(initial("Oslo"), Some('O'));
        assert_eq!(initial(""), None);
    }

    #[test]
    fn test_vowel_start() {
        assert!(starts_with_vowel("Australia"));
        assert!(starts_with_vowel("iceland"));
        assert!(!starts_with_vowel("France"));
        assert!(!starts_with_vowel(""));
    }
}

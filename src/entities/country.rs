// Country Entity - one structured, immutable row of geography data
//
// All lowercase forms and derived first-letter/vowel attributes are
// computed once in the constructor. The engine never re-parses raw text.

use super::{initial, starts_with_vowel, FlagField, GridEntity, NumericField, TextField};

// ============================================================================
// CONSTRUCTION INPUT
// ============================================================================

/// Plain construction input for a [`Country`]. Filled in by the data
/// loader after coercing messy source values; everything here is already
/// typed (booleans normalized, numerics `None` when unparsable).
#[derive(Debug, Clone, Default)]
pub struct CountryInit {
    pub name: String,
    pub aliases: Vec<String>,
    pub capital: String,
    pub continent: String,
    pub region: String,
    pub primary_religion: String,

    pub population_rank: Option<i64>,
    pub area_rank: Option<i64>,
    pub border_count: Option<i64>,

    pub name_in_capital: bool,
    pub landlocked: bool,
    pub on_equator: bool,
    pub island_nation: bool,
    pub borders_china: bool,
    pub borders_russia: bool,
    pub hosts_olympics: bool,
    pub world_cup_winner: bool,
    pub nato_member: bool,
}

// ============================================================================
// COUNTRY ENTITY
// ============================================================================

/// Country record. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Country {
    pub name: String,
    name_lc: String,
    pub aliases: Vec<String>,
    aliases_lc: Vec<String>,

    pub capital: String,
    capital_lc: String,
    pub continent: String,
    continent_lc: String,
    pub region: String,
    region_lc: String,
    pub primary_religion: String,
    religion_lc: String,

    pub population_rank: Option<i64>,
    pub area_rank: Option<i64>,
    pub border_count: Option<i64>,

    pub name_in_capital: bool,
    pub landlocked: bool,
    pub on_equator: bool,
    pub island_nation: bool,
    pub borders_china: bool,
    pub borders_russia: bool,
    pub hosts_olympics: bool,
    pub world_cup_winner: bool,
    pub nato_member: bool,

    // Derived once at load time
    name_initial: Option<char>,
    capital_initial: Option<char>,
    name_vowel: bool,
}

impl Country {
    pub fn new(init: CountryInit) -> Self {
        let name_lc = init.name.to_lowercase();
        let aliases_lc = init.aliases.iter().map(|a| a.to_lowercase()).collect();
        let capital_lc = init.capital.to_lowercase();

        Country {
            name_initial: initial(&init.name),
            capital_initial: initial(&init.capital),
            name_vowel: starts_with_vowel(&init.name),
            name_lc,
            aliases_lc,
            capital_lc,
            continent_lc: init.continent.to_lowercase(),
            region_lc: init.region.to_lowercase(),
            religion_lc: init.primary_religion.to_lowercase(),
            name: init.name,
            aliases: init.aliases,
            capital: init.capital,
            continent: init.continent,
            region: init.region,
            primary_religion: init.primary_religion,
            population_rank: init.population_rank,
            area_rank: init.area_rank,
            border_count: init.border_count,
            name_in_capital: init.name_in_capital,
            landlocked: init.landlocked,
            on_equator: init.on_equator,
            island_nation: init.island_nation,
            borders_china: init.borders_china,
            borders_russia: init.borders_russia,
            hosts_olympics: init.hosts_olympics,
            world_cup_winner: init.world_cup_winner,
            nato_member: init.nato_member,
        }
    }
}

impl GridEntity for Country {
    fn canonical_name(&self) -> &str {
        &self.name
    }

    fn matches_name(&self, guess: &str) -> bool {
        self.name_lc == guess || self.aliases_lc.iter().any(|a| a == guess)
    }

    fn text(&self, field: TextField) -> Option<&str> {
        match field {
            TextField::Name => Some(&self.name_lc),
            TextField::Capital => Some(&self.capital_lc),
            TextField::Continent => Some(&self.continent_lc),
            TextField::Region => Some(&self.region_lc),
            TextField::Religion => Some(&self.religion_lc),
            _ => None,
        }
    }

    fn number(&self, field: NumericField) -> Option<f64> {
        match field {
            NumericField::PopulationRank => self.population_rank.map(|n| n as f64),
            NumericField::AreaRank => self.area_rank.map(|n| n as f64),
            NumericField::BorderCount => self.border_count.map(|n| n as f64),
            _ => None,
        }
    }

    fn flag(&self, field: FlagField) -> bool {
        match field {
            FlagField::NameInCapital => self.name_in_capital,
            FlagField::Landlocked => self.landlocked,
            FlagField::OnEquator => self.on_equator,
            FlagField::IslandNation => self.island_nation,
            FlagField::BordersChina => self.borders_china,
            FlagField::BordersRussia => self.borders_russia,
            FlagField::HostsOlympics => self.hosts_olympics,
            FlagField::WorldCupWinner => self.world_cup_winner,
            FlagField::NatoMember => self.nato_member,
            FlagField::NameVowel => self.name_vowel,
            _ => false,
        }
    }

    fn first_letter(&self, field: TextField) -> Option<char> {
        match field {
            TextField::Name => self.name_initial,
            TextField::Capital => self.capital_initial,
            _ => None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn mongolia() -> Country {
        Country::new(CountryInit {
            name: "Mongolia".to_string(),
            capital: "Ulaanbaatar".to_string(),
            continent: "Asia".to_string(),
            region: "Eastern Asia".to_string(),
            population_rank: Some(134),
            border_count: Some(2),
            landlocked: true,
            borders_china: true,
            borders_russia: true,
            ..Default::default()
        })
    }

    #[test]
    fn test_lowercase_forms_precomputed() {
        let c = mongolia();
        assert_eq!(c.text(TextField::Name), Some("mongolia"));
        assert_eq!(c.text(TextField::Capital), Some("ulaanbaatar"));
        assert_eq!(c.text(TextField::Continent), Some("asia"));
    }

    #[test]
    fn test_derived_initials_and_vowel() {
        let c = mongolia();
        assert_eq!(c.first_letter(TextField::Name), Some('M'));
        assert_eq!(c.first_letter(TextField::Capital), Some('U'));
        assert!(!c.flag(FlagField::NameVowel));

        let india = Country::new(CountryInit {
            name: "India".to_string(),
            ..Default::default()
        });
        assert!(india.flag(FlagField::NameVowel));
    }

    #[test]
    fn test_name_matching_with_aliases() {
        let c = Country::new(CountryInit {
            name: "United States".to_string(),
            aliases: vec!["USA".to_string(), "America".to_string()],
            ..Default::default()
        });
        assert!(c.matches_name("united states"));
        assert!(c.matches_name("usa"));
        assert!(c.matches_name("america"));
        assert!(!c.matches_name("canada"));
    }

    #[test]
    fn test_foreign_domain_fields_are_absent() {
        let c = mongolia();
        assert_eq!(c.text(TextField::Party), None);
        assert_eq!(c.number(NumericField::TermStart), None);
        assert!(!c.flag(FlagField::Assassinated));
        assert_eq!(c.first_letter(TextField::LastName), None);
    }
}

// OfficeHolder Entity - one structured, immutable row of presidential data
//
// Same consumption contract as Country; a guess may match the full name
// or the bare last name.

use super::{initial, starts_with_vowel, FlagField, GridEntity, NumericField, TextField};

// ============================================================================
// CONSTRUCTION INPUT
// ============================================================================

/// Plain construction input for an [`OfficeHolder`]. Filled in by the
/// data loader after coercing messy source values.
#[derive(Debug, Clone, Default)]
pub struct OfficeHolderInit {
    pub first_name: String,
    pub last_name: String,
    pub party: String,
    pub birth_state: String,

    pub term_start: Option<i64>,
    pub term_end: Option<i64>,
    pub years_in_office: Option<f64>,
    pub age_at_start: Option<i64>,
    pub presidency_number: Option<i64>,
    pub height_inches: Option<f64>,
    pub weight_lbs: Option<f64>,

    pub assassinated: bool,
    pub died_in_office: bool,
    pub military_service: bool,
    pub served_in_congress: bool,
    pub served_in_house: bool,
    pub served_in_senate: bool,
    pub vice_president: bool,
    pub facial_hair: bool,
    pub founding_father: bool,
    pub secretary_of_state: bool,
    pub governor: bool,
    pub ivy_league: bool,
    pub nobel_prize: bool,
    pub impeached: bool,
    pub college_degree: bool,
    pub lost_popular_vote: bool,
    pub cold_war: bool,
    pub on_currency: bool,
    pub mount_rushmore: bool,
    pub met_queen_elizabeth_ii: bool,
    pub unmarried_in_office: bool,
    pub tied_war_1812: bool,
    pub related_to_president: bool,
    pub alliterative_name: bool,
    pub re_elected: bool,
    pub born_before_1800: bool,
    pub born_1800_to_1900: bool,
    pub born_1900_to_2000: bool,
}

// ============================================================================
// OFFICE HOLDER ENTITY
// ============================================================================

/// Office-holder record. Immutable after construction.
#[derive(Debug, Clone)]
pub struct OfficeHolder {
    pub name: String,
    name_lc: String,
    pub first_name: String,
    first_name_lc: String,
    pub last_name: String,
    last_name_lc: String,

    pub party: String,
    party_lc: String,
    pub birth_state: String,
    birth_state_lc: String,

    pub term_start: Option<i64>,
    pub term_end: Option<i64>,
    pub years_in_office: Option<f64>,
    pub age_at_start: Option<i64>,
    pub presidency_number: Option<i64>,
    pub height_inches: Option<f64>,
    pub weight_lbs: Option<f64>,

    flags: OfficeFlags,

    // Derived once at load time
    first_initial: Option<char>,
    last_initial: Option<char>,
    first_name_vowel: bool,
    last_name_vowel: bool,
}

#[derive(Debug, Clone, Default)]
struct OfficeFlags {
    assassinated: bool,
    died_in_office: bool,
    military_service: bool,
    served_in_congress: bool,
    served_in_house: bool,
    served_in_senate: bool,
    vice_president: bool,
    facial_hair: bool,
    founding_father: bool,
    secretary_of_state: bool,
    governor: bool,
    ivy_league: bool,
    nobel_prize: bool,
    impeached: bool,
    college_degree: bool,
    lost_popular_vote: bool,
    cold_war: bool,
    on_currency: bool,
    mount_rushmore: bool,
    met_queen_elizabeth_ii: bool,
    unmarried_in_office: bool,
    tied_war_1812: bool,
    related_to_president: bool,
    alliterative_name: bool,
    re_elected: bool,
    born_before_1800: bool,
    born_1800_to_1900: bool,
    born_1900_to_2000: bool,
}

impl OfficeHolder {
    pub fn new(init: OfficeHolderInit) -> Self {
        let name = format!("{} {}", init.first_name, init.last_name)
            .trim()
            .to_string();

        OfficeHolder {
            name_lc: name.to_lowercase(),
            name,
            first_name_lc: init.first_name.to_lowercase(),
            last_name_lc: init.last_name.to_lowercase(),
            party_lc: init.party.to_lowercase(),
            birth_state_lc: init.birth_state.to_lowercase(),
            first_initial: initial(&init.first_name),
            last_initial: initial(&init.last_name),
            first_name_vowel: starts_with_vowel(&init.first_name),
            last_name_vowel: starts_with_vowel(&init.last_name),
            first_name: init.first_name,
            last_name: init.last_name,
            party: init.party,
            birth_state: init.birth_state,
            term_start: init.term_start,
            term_end: init.term_end,
            years_in_office: init.years_in_office,
            age_at_start: init.age_at_start,
            presidency_number: init.presidency_number,
            height_inches: init.height_inches,
            weight_lbs: init.weight_lbs,
            flags: OfficeFlags {
                assassinated: init.assassinated,
                died_in_office: init.died_in_office,
                military_service: init.military_service,
                served_in_congress: init.served_in_congress,
                served_in_house: init.served_in_house,
                served_in_senate: init.served_in_senate,
                vice_president: init.vice_president,
                facial_hair: init.facial_hair,
                founding_father: init.founding_father,
                secretary_of_state: init.secretary_of_state,
                governor: init.governor,
                ivy_league: init.ivy_league,
                nobel_prize: init.nobel_prize,
                impeached: init.impeached,
                college_degree: init.college_degree,
                lost_popular_vote: init.lost_popular_vote,
                cold_war: init.cold_war,
                on_currency: init.on_currency,
                mount_rushmore: init.mount_rushmore,
                met_queen_elizabeth_ii: init.met_queen_elizabeth_ii,
                unmarried_in_office: init.unmarried_in_office,
                tied_war_1812: init.tied_war_1812,
                related_to_president: init.related_to_president,
                alliterative_name: init.alliterative_name,
                re_elected: init.re_elected,
                born_before_1800: init.born_before_1800,
                born_1800_to_1900: init.born_1800_to_1900,
                born_1900_to_2000: init.born_1900_to_2000,
            },
        }
    }
}

impl GridEntity for OfficeHolder {
    fn canonical_name(&self) -> &str {
        &self.name
    }

    fn matches_name(&self, guess: &str) -> bool {
        self.name_lc == guess || self.last_name_lc == guess
    }

    fn text(&self, field: TextField) -> Option<&str> {
        match field {
            TextField::Name => Some(&self.name_lc),
            TextField::FirstName => Some(&self.first_name_lc),
            TextField::LastName => Some(&self.last_name_lc),
            TextField::Party => Some(&self.party_lc),
            TextField::BirthState => Some(&self.birth_state_lc),
            _ => None,
        }
    }

    fn number(&self, field: NumericField) -> Option<f64> {
        match field {
            NumericField::TermStart => self.term_start.map(|n| n as f64),
            NumericField::TermEnd => self.term_end.map(|n| n as f64),
            NumericField::YearsInOffice => self.years_in_office,
            NumericField::AgeAtStart => self.age_at_start.map(|n| n as f64),
            NumericField::PresidencyNumber => self.presidency_number.map(|n| n as f64),
            NumericField::HeightInches => self.height_inches,
            NumericField::WeightLbs => self.weight_lbs,
            _ => None,
        }
    }

    fn flag(&self, field: FlagField) -> bool {
        let f = &self.flags;
        match field {
            FlagField::Assassinated => f.assassinated,
            FlagField::DiedInOffice => f.died_in_office,
            FlagField::MilitaryService => f.military_service,
            FlagField::ServedInCongress => f.served_in_congress,
            FlagField::ServedInHouse => f.served_in_house,
            FlagField::ServedInSenate => f.served_in_senate,
            FlagField::VicePresident => f.vice_president,
            FlagField::FacialHair => f.facial_hair,
            FlagField::FoundingFather => f.founding_father,
            FlagField::SecretaryOfState => f.secretary_of_state,
            FlagField::Governor => f.governor,
            FlagField::IvyLeague => f.ivy_league,
            FlagField::NobelPrize => f.nobel_prize,
            FlagField::Impeached => f.impeached,
            FlagField::CollegeDegree => f.college_degree,
            FlagField::LostPopularVote => f.lost_popular_vote,
            FlagField::ColdWar => f.cold_war,
            FlagField::OnCurrency => f.on_currency,
            FlagField::MountRushmore => f.mount_rushmore,
            FlagField::MetQueenElizabethII => f.met_queen_elizabeth_ii,
            FlagField::UnmarriedInOffice => f.unmarried_in_office,
            FlagField::TiedWar1812 => f.tied_war_1812,
            FlagField::RelatedToPresident => f.related_to_president,
            FlagField::AlliterativeName => f.alliterative_name,
            FlagField::ReElected => f.re_elected,
            FlagField::BornBefore1800 => f.born_before_1800,
            FlagField::Born1800To1900 => f.born_1800_to_1900,
            FlagField::Born1900To2000 => f.born_1900_to_2000,
            FlagField::FirstNameVowel => self.first_name_vowel,
            FlagField::LastNameVowel => self.last_name_vowel,
            _ => false,
        }
    }

    fn first_letter(&self, field: TextField) -> Option<char> {
        match field {
            TextField::FirstName => self.first_initial,
            TextField::LastName => self.last_initial,
            TextField::Name => self.first_initial,
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

    fn lincoln() -> OfficeHolder {
        OfficeHolder::new(OfficeHolderInit {
            first_name: "Abraham".to_string(),
            last_name: "Lincoln".to_string(),
            party: "Republican".to_string(),
            birth_state: "Kentucky".to_string(),
            term_start: Some(1861),
            term_end: Some(1865),
            presidency_number: Some(16),
            assassinated: true,
            died_in_office: true,
            facial_hair: true,
            on_currency: true,
            mount_rushmore: true,
            ..Default::default()
        })
    }

    #[test]
    fn test_full_name_composed() {
        let p = lincoln();
        assert_eq!(p.canonical_name(), "Abraham Lincoln");
        assert_eq!(p.text(TextField::Name), Some("abraham lincoln"));
    }

    #[test]
    fn test_matches_full_or_last_name() {
        let p = lincoln();
        assert!(p.matches_name("abraham lincoln"));
        assert!(p.matches_name("lincoln"));
        assert!(!p.matches_name("abraham"));
    }

    #[test]
    fn test_derived_initials_and_vowels() {
        let p = lincoln();
        assert_eq!(p.first_letter(TextField::FirstName), Some('A'));
        assert_eq!(p.first_letter(TextField::LastName), Some('L'));
        assert!(p.flag(FlagField::FirstNameVowel));
        assert!(!p.flag(FlagField::LastNameVowel));
    }

    #[test]
    fn test_foreign_domain_fields_are_absent() {
        let p = lincoln();
        assert_eq!(p.text(TextField::Capital), None);
        assert_eq!(p.number(NumericField::PopulationRank), None);
        assert!(!p.flag(FlagField::Landlocked));
    }
}

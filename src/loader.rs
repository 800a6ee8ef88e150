// Dataset Loader - CSV entity sheets and the daily grid schedule
//
// The source spreadsheets are community-maintained and carry typo'd
// headers ("Landloicked", "World Culp Winner", "Foundng father"). Those
// headers are load-bearing: serde aliases accept both the typo'd and
// the corrected form, so a cleaned-up sheet keeps working.
//
// Cell coercion is forgiving the same way: yes/no columns accept
// y/yes/true/1 in any case, numeric columns strip grouping characters
// ("1,234" parses as 1234), and anything unparseable becomes None
// rather than an error.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::entities::country::{Country, CountryInit};
use crate::entities::office_holder::{OfficeHolder, OfficeHolderInit};
use crate::session::DailyGrid;

// ============================================================================
// CELL COERCIONS
// ============================================================================

fn yes(value: &Option<String>) -> bool {
    match value {
        Some(v) => matches!(
            v.trim().to_lowercase().as_str(),
            "y" | "yes" | "true" | "1"
        ),
        None => false,
    }
}

fn int(value: &Option<String>) -> Option<i64> {
    let digits: String = value
        .as_deref()?
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();
    digits.parse().ok()
}

fn float(value: &Option<String>) -> Option<f64> {
    let cleaned: String = value
        .as_deref()?
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse().ok()
}

fn text(value: &Option<String>) -> String {
    value.as_deref().unwrap_or("").trim().to_string()
}

// ============================================================================
// COUNTRY SHEET
// ============================================================================

#[derive(Debug, Deserialize)]
struct CountryRow {
    #[serde(rename = "Country Name", alias = "Country", default)]
    name: Option<String>,
    #[serde(rename = "Aliases", default)]
    aliases: Option<String>,
    #[serde(rename = "Capital", default)]
    capital: Option<String>,
    #[serde(rename = "Country Name in Capital", default)]
    name_in_capital: Option<String>,
    #[serde(rename = "Continent", alias = "continent", default)]
    continent: Option<String>,
    #[serde(rename = "Region", default)]
    region: Option<String>,
    #[serde(rename = "Population #", default)]
    population_rank: Option<String>,
    #[serde(rename = "Largest Country", default)]
    area_rank: Option<String>,
    #[serde(rename = "Landlocked", alias = "Landloicked", default)]
    landlocked: Option<String>,
    #[serde(rename = "Primary Religion", default)]
    primary_religion: Option<String>,
    #[serde(rename = "Countries on the equator", default)]
    on_equator: Option<String>,
    #[serde(rename = "Island Nation", alias = "Island nation", default)]
    island_nation: Option<String>,
    #[serde(rename = "Borders China", default)]
    borders_china: Option<String>,
    #[serde(rename = "Borders Russia", alias = "Border Russia", default)]
    borders_russia: Option<String>,
    #[serde(rename = "Number of bordering countries", default)]
    border_count: Option<String>,
    #[serde(rename = "Hosts Olympics", alias = "To his olympics", default)]
    hosts_olympics: Option<String>,
    #[serde(rename = "World Cup Winner", alias = "World Culp Winner", default)]
    world_cup_winner: Option<String>,
    #[serde(rename = "NATO Membership", alias = "Nato Membership", default)]
    nato_member: Option<String>,
}

impl CountryRow {
    fn into_country(self) -> Country {
        Country::new(CountryInit {
            name: text(&self.name),
            aliases: text(&self.aliases)
                .split(';')
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(String::from)
                .collect(),
            capital: text(&self.capital),
            continent: text(&self.continent),
            region: text(&self.region),
            primary_religion: text(&self.primary_religion),
            population_rank: int(&self.population_rank),
            area_rank: int(&self.area_rank),
            border_count: int(&self.border_count),
            name_in_capital: yes(&self.name_in_capital),
            landlocked: yes(&self.landlocked),
            on_equator: yes(&self.on_equator),
            island_nation: yes(&self.island_nation),
            borders_china: yes(&self.borders_china),
            borders_russia: yes(&self.borders_russia),
            hosts_olympics: yes(&self.hosts_olympics),
            world_cup_winner: yes(&self.world_cup_winner),
            nato_member: yes(&self.nato_member),
        })
    }
}

/// Load the country sheet. Rows without a name are skipped.
pub fn load_countries(csv_path: &Path) -> Result<Vec<Country>> {
    let mut rdr = csv::Reader::from_path(csv_path)
        .with_context(|| format!("Failed to open country sheet {}", csv_path.display()))?;

    let mut countries = Vec::new();
    for result in rdr.deserialize() {
        let row: CountryRow = result.context("Failed to parse country row")?;
        let country = row.into_country();
        if !country.name.is_empty() {
            countries.push(country);
        }
    }
    Ok(countries)
}

// ============================================================================
// PRESIDENT SHEET
// ============================================================================

#[derive(Debug, Deserialize)]
struct PresidentRow {
    #[serde(rename = "First Name", default)]
    first_name: Option<String>,
    #[serde(rename = "Last Name", default)]
    last_name: Option<String>,
    #[serde(rename = "Political Party", default)]
    party: Option<String>,
    #[serde(rename = "Birth State", default)]
    birth_state: Option<String>,
    #[serde(rename = "Start Year", default)]
    term_start: Option<String>,
    #[serde(rename = "End Year", default)]
    term_end: Option<String>,
    #[serde(rename = "Years in Office", default)]
    years_in_office: Option<String>,
    #[serde(rename = "Age at Start of presidency", default)]
    age_at_start: Option<String>,
    #[serde(rename = "presidency number", alias = "Presidency Number", default)]
    presidency_number: Option<String>,
    #[serde(
        rename = "Height (inches)",
        alias = "Height Inches",
        alias = "Height",
        default
    )]
    height_inches: Option<String>,
    #[serde(
        rename = "Weight (lbs)",
        alias = "Weight (pounds)",
        alias = "Weight Lbs",
        alias = "Weight",
        default
    )]
    weight_lbs: Option<String>,
    #[serde(rename = "Assassinated", default)]
    assassinated: Option<String>,
    #[serde(rename = "Died in Office", default)]
    died_in_office: Option<String>,
    #[serde(rename = "Serve in Military", alias = "Served in Military", default)]
    military_service: Option<String>,
    #[serde(rename = "Served in Congress", default)]
    served_in_congress: Option<String>,
    #[serde(rename = "Served in the House of Representatives", default)]
    served_in_house: Option<String>,
    #[serde(rename = "Served in the Senate", default)]
    served_in_senate: Option<String>,
    #[serde(rename = "Serve as Vice President", alias = "Served as Vice President", default)]
    vice_president: Option<String>,
    #[serde(rename = "Has Facial Hair", default)]
    facial_hair: Option<String>,
    #[serde(rename = "Founding Father", alias = "Foundng father", default)]
    founding_father: Option<String>,
    #[serde(
        rename = "Served as Secretary of State",
        alias = "Serve as Secretary of State",
        alias = "Secretary of State",
        default
    )]
    secretary_of_state: Option<String>,
    #[serde(rename = "Former State Governors", alias = "Governor", default)]
    governor: Option<String>,
    #[serde(rename = "Attended Ivy League School", default)]
    ivy_league: Option<String>,
    #[serde(rename = "Nobel Prize Winner", default)]
    nobel_prize: Option<String>,
    #[serde(rename = "Impeached", default)]
    impeached: Option<String>,
    #[serde(rename = "College Degree", default)]
    college_degree: Option<String>,
    #[serde(rename = "Won without Popular Vote", default)]
    lost_popular_vote: Option<String>,
    #[serde(rename = "Cold War President", default)]
    cold_war: Option<String>,
    #[serde(rename = "Appears on Currency", default)]
    on_currency: Option<String>,
    #[serde(rename = "Appears on Mount Rushmore", default)]
    mount_rushmore: Option<String>,
    #[serde(rename = "Met Queen Elizabeth II", default)]
    met_queen_elizabeth_ii: Option<String>,
    #[serde(
        rename = "Unmarried while in office",
        alias = "Unmarried in office",
        default
    )]
    unmarried_in_office: Option<String>,
    #[serde(rename = "Tied to War of 1812", alias = "War of 1812 tied", default)]
    tied_war_1812: Option<String>,
    #[serde(
        rename = "Related to another President",
        alias = "Related to President",
        default
    )]
    related_to_president: Option<String>,
    #[serde(rename = "Alliterative Name", alias = "Alliterative", default)]
    alliterative_name: Option<String>,
    #[serde(rename = "Won Re-election", default)]
    re_elected: Option<String>,
    #[serde(rename = "Born Before 1800", default)]
    born_before_1800: Option<String>,
    #[serde(rename = "Born 1800 - 1900", alias = "Born 1800-1900", default)]
    born_1800_to_1900: Option<String>,
    #[serde(rename = "Born 1900-2000", alias = "Born 1900 - 2000", default)]
    born_1900_to_2000: Option<String>,
}

impl PresidentRow {
    fn into_office_holder(self) -> OfficeHolder {
        // A missing party reads as "none" so "Independent" labels match
        let mut party = text(&self.party).to_lowercase();
        if party.is_empty() {
            party = "none".to_string();
        }

        OfficeHolder::new(OfficeHolderInit {
            first_name: text(&self.first_name),
            last_name: text(&self.last_name),
            party,
            birth_state: text(&self.birth_state),
            term_start: int(&self.term_start),
            term_end: int(&self.term_end),
            years_in_office: float(&self.years_in_office),
            age_at_start: int(&self.age_at_start),
            presidency_number: int(&self.presidency_number),
            height_inches: float(&self.height_inches),
            weight_lbs: float(&self.weight_lbs),
            assassinated: yes(&self.assassinated),
            died_in_office: yes(&self.died_in_office),
            military_service: yes(&self.military_service),
            served_in_congress: yes(&self.served_in_congress),
            served_in_house: yes(&self.served_in_house),
            served_in_senate: yes(&self.served_in_senate),
            vice_president: yes(&self.vice_president),
            facial_hair: yes(&self.facial_hair),
            founding_father: yes(&self.founding_father),
            secretary_of_state: yes(&self.secretary_of_state),
            governor: yes(&self.governor),
            ivy_league: yes(&self.ivy_league),
            nobel_prize: yes(&self.nobel_prize),
            impeached: yes(&self.impeached),
            college_degree: yes(&self.college_degree),
            lost_popular_vote: yes(&self.lost_popular_vote),
            cold_war: yes(&self.cold_war),
            on_currency: yes(&self.on_currency),
            mount_rushmore: yes(&self.mount_rushmore),
            met_queen_elizabeth_ii: yes(&self.met_queen_elizabeth_ii),
            unmarried_in_office: yes(&self.unmarried_in_office),
            tied_war_1812: yes(&self.tied_war_1812),
            related_to_president: yes(&self.related_to_president),
            alliterative_name: yes(&self.alliterative_name),
            re_elected: yes(&self.re_elected),
            born_before_1800: yes(&self.born_before_1800),
            born_1800_to_1900: yes(&self.born_1800_to_1900),
            born_1900_to_2000: yes(&self.born_1900_to_2000),
        })
    }
}

/// Load the president sheet. Rows without a name are skipped.
pub fn load_office_holders(csv_path: &Path) -> Result<Vec<OfficeHolder>> {
    let mut rdr = csv::Reader::from_path(csv_path)
        .with_context(|| format!("Failed to open president sheet {}", csv_path.display()))?;

    let mut holders = Vec::new();
    for result in rdr.deserialize() {
        let row: PresidentRow = result.context("Failed to parse president row")?;
        let holder = row.into_office_holder();
        if !holder.name.is_empty() {
            holders.push(holder);
        }
    }
    Ok(holders)
}

// ============================================================================
// DAILY SCHEDULE
// ============================================================================

/// Day number -> grid, one entry per published day.
pub type GridSchedule = BTreeMap<u32, DailyGrid>;

pub fn load_schedule(json_path: &Path) -> Result<GridSchedule> {
    let raw = fs::read_to_string(json_path)
        .with_context(|| format!("Failed to read schedule {}", json_path.display()))?;
    serde_json::from_str(&raw).context("Failed to parse grid schedule")
}

/// Day numbers start at 1 on the launch date.
pub fn current_day(launch: NaiveDate, today: NaiveDate) -> i64 {
    (today - launch).num_days() + 1
}

/// First published day of the country grids.
pub fn country_launch_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 20).unwrap_or_default()
}

/// First published day of the president grids.
pub fn president_launch_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 12).unwrap_or_default()
}

// ============================================================================
// TESTS
// ============================================================================

// Predicate Compiler - ordered matcher tables, label text in, Predicate out
//
// Each domain has a fixed-priority list of (recognizer, builder) matchers;
// the first recognizer that fires wins. Order is a correctness
// requirement: specific recognizers ("country name in capital") run
// before generic fallbacks (bare "name <text>"), so a generic rule can
// never swallow a specific one.
//
// An unmatched label compiles to Predicate::Never - a typo'd category
// never crashes the game, the cell just can't be won.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::entities::{Domain, FlagField, NumericField, TextField};
use crate::normalize::{is_negated, normalize_label};
use crate::predicate::{CmpOp, Predicate, YearBound};

// ============================================================================
// ENTRY POINT
// ============================================================================

/// Normalized label plus the separately-detected negation signal.
#[derive(Debug, Clone)]
pub struct LabelCtx {
    pub text: String,
    pub negated: bool,
}

type Matcher = fn(&LabelCtx) -> Option<Predicate>;

/// Compile a raw category label into an executable predicate.
///
/// Deterministic: the same label text always yields the same predicate.
/// Never fails; unrecognized labels come back as [`Predicate::Never`].
pub fn compile(label: &str, domain: Domain) -> Predicate {
    let text = normalize_label(label);
    if text.is_empty() {
        return Predicate::Never;
    }
    let ctx = LabelCtx {
        negated: is_negated(label),
        text,
    };

    let table: &[Matcher] = match domain {
        Domain::Country => COUNTRY_MATCHERS,
        Domain::OfficeHolder => OFFICE_MATCHERS,
    };
    table.iter().find_map(|m| m(&ctx)).unwrap_or(Predicate::Never)
}

// ============================================================================
// SHARED NUMERIC GRAMMAR
//
// One reusable sub-routine parameterized by the field-name alternation:
// recognizes =, <=, >=, <, >, between/from..to, bare hyphen ranges, and
// the "top N" alias for <= N.
// ============================================================================

struct NumericGrammar {
    keyword: Regex,
    between: Regex,
    attached_range: Regex,
    cmp: Regex,
    top: Regex,
}

impl NumericGrammar {
    fn new(prefix: &str) -> Self {
        NumericGrammar {
            keyword: Regex::new(&format!(r"\b(?:{prefix})\b")).expect("keyword pattern"),
            between: Regex::new(r"(?:between|from)\s*(\d+)\s*(?:and|to|-)\s*(\d+)")
                .expect("between pattern"),
            attached_range: Regex::new(&format!(
                r"(?:{prefix})\D*?(\d+)\s*(?:-|to)\s*(\d+)"
            ))
            .expect("range pattern"),
            cmp: Regex::new(r"(<=|>=|<|>|=)\s*(\d+(?:\.\d+)?)").expect("cmp pattern"),
            top: Regex::new(r"\btop\s+(\d+)\b").expect("top pattern"),
        }
    }

    fn apply(&self, text: &str, field: NumericField) -> Option<Predicate> {
        if !self.keyword.is_match(text) {
            return None;
        }

        if let Some(c) = self.between.captures(text) {
            return Some(Predicate::range(field, num(&c, 1)?, num(&c, 2)?));
        }
        if let Some(c) = self.attached_range.captures(text) {
            return Some(Predicate::range(field, num(&c, 1)?, num(&c, 2)?));
        }
        if let Some(c) = self.cmp.captures(text) {
            let op = match &c[1] {
                "<=" => CmpOp::Le,
                ">=" => CmpOp::Ge,
                "<" => CmpOp::Lt,
                ">" => CmpOp::Gt,
                _ => CmpOp::Eq,
            };
            return Some(Predicate::NumericCompare(field, op, num(&c, 2)?));
        }
        if let Some(c) = self.top.captures(text) {
            return Some(Predicate::NumericCompare(field, CmpOp::Le, num(&c, 1)?));
        }
        None
    }
}

fn num(captures: &regex::Captures, index: usize) -> Option<f64> {
    captures.get(index)?.as_str().parse().ok()
}

fn num_i64(captures: &regex::Captures, index: usize) -> Option<i64> {
    captures.get(index)?.as_str().parse().ok()
}

// ============================================================================
// SHARED BOOLEAN-FLAG TABLES
//
// Rules as data: each entry recognizes one or more phrasings (typo
// synonyms from the source dataset included) and yields
// BooleanFlag(field, negated). Negation comes from the global detector
// OR a hardcoded negative phrasing; when the matched phrase itself
// carries a negation marker ("no spouse in office"), the detector signal
// is already spent on the phrase and is not applied a second time.
// ============================================================================

struct FlagRule {
    field: FlagField,
    any_of: &'static [&'static str],
    negators: &'static [&'static str],
}

fn match_flag_table(ctx: &LabelCtx, rules: &[FlagRule]) -> Option<Predicate> {
    for rule in rules {
        if let Some(phrase) = rule.any_of.iter().find(|p| ctx.text.contains(*p)) {
            let explicit = rule.negators.iter().any(|p| ctx.text.contains(p));
            let global = ctx.negated && !is_negated(phrase);
            return Some(Predicate::BooleanFlag(rule.field, explicit || global));
        }
    }
    None
}

// ============================================================================
// COUNTRY MATCHERS
// ============================================================================

static COUNTRY_MATCHERS: &[Matcher] = &[
    country_letter_range,
    country_vowel_start,
    region_contains,
    continent_equals,
    religion_contains,
    capital_contains,
    population_rank_rule,
    area_rank_rule,
    border_count_rule,
    country_flags,
    country_name_contains,
];

static COUNTRY_NAME_LETTERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:country\s+)?name\s+(?:starts\s+with\s+)?\b([a-z])\s*(?:-|to\s)\s*([a-z])\b")
        .expect("name letter-range pattern")
});
static CAPITAL_LETTERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bcapital\s+(?:starts\s+with\s+)?\b([a-z])\s*(?:-|to\s)\s*([a-z])\b")
        .expect("capital letter-range pattern")
});

fn country_letter_range(ctx: &LabelCtx) -> Option<Predicate> {
    let (field, c) = if let Some(c) = COUNTRY_NAME_LETTERS.captures(&ctx.text) {
        (TextField::Name, c)
    } else if let Some(c) = CAPITAL_LETTERS.captures(&ctx.text) {
        (TextField::Capital, c)
    } else {
        return None;
    };
    let lo = c[1].chars().next()?;
    let hi = c[2].chars().next()?;
    Some(Predicate::LetterRange(field, lo, hi))
}

fn country_vowel_start(ctx: &LabelCtx) -> Option<Predicate> {
    let l = &ctx.text;
    if l.contains("name") && l.contains("vowel") {
        return Some(Predicate::BooleanFlag(FlagField::NameVowel, ctx.negated));
    }
    None
}

static REGION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"region:?\s+([a-z -]+)").expect("region pattern")
});

fn region_contains(ctx: &LabelCtx) -> Option<Predicate> {
    let c = REGION.captures(&ctx.text)?;
    Some(Predicate::Contains(
        TextField::Region,
        c[1].trim().to_string(),
    ))
}

/// Closed set of continents; anything else falls through.
const CONTINENTS: &[&str] = &[
    "africa",
    "asia",
    "europe",
    "oceania",
    "north america",
    "south america",
    "antarctica",
];

static CONTINENT_PREFIXED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:in|continent:?)\s+(africa|asia|europe|oceania|north america|south america|antarctica)\b",
    )
    .expect("continent pattern")
});

fn continent_equals(ctx: &LabelCtx) -> Option<Predicate> {
    // Bare continent name is an exact label; "In Africa" / "Continent:
    // Europe" are prefixed. A continent word buried in a longer phrase
    // ("Southern Europe") is NOT a continent label.
    if CONTINENTS.contains(&ctx.text.as_str()) {
        return Some(Predicate::Equals(TextField::Continent, ctx.text.clone()));
    }
    let c = CONTINENT_PREFIXED.captures(&ctx.text)?;
    Some(Predicate::Equals(TextField::Continent, c[1].to_string()))
}

static RELIGION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:primary\s+)?religion:?\s+([a-z -]+)").expect("religion pattern")
});

fn religion_contains(ctx: &LabelCtx) -> Option<Predicate> {
    let c = RELIGION.captures(&ctx.text)?;
    Some(Predicate::Contains(
        TextField::Religion,
        c[1].trim().to_string(),
    ))
}

static CAPITAL_CONTAINS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"capital\s+contains\s+([a-z' -]+)").expect("capital-contains pattern")
});

fn capital_contains(ctx: &LabelCtx) -> Option<Predicate> {
    let c = CAPITAL_CONTAINS.captures(&ctx.text)?;
    Some(Predicate::Contains(
        TextField::Capital,
        c[1].trim().to_string(),
    ))
}

static POPULATION_GRAMMAR: Lazy<NumericGrammar> =
    Lazy::new(|| NumericGrammar::new(r"population\s+rank|most\s+populated|population"));

fn population_rank_rule(ctx: &LabelCtx) -> Option<Predicate> {
    POPULATION_GRAMMAR.apply(&ctx.text, NumericField::PopulationRank)
}

static AREA_GRAMMAR: Lazy<NumericGrammar> = Lazy::new(|| {
    NumericGrammar::new(r"area\s+rank|largest\s+country\s+rank|largest\s+country")
});

fn area_rank_rule(ctx: &LabelCtx) -> Option<Predicate> {
    AREA_GRAMMAR.apply(&ctx.text, NumericField::AreaRank)
}

static BORDER_GRAMMAR: Lazy<NumericGrammar> = Lazy::new(|| {
    NumericGrammar::new(r"number\s+of\s+bordering\s+countries|bordering\s+countries|border\s+count|borders")
});
static PLUS_BORDERING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*\+\s*bordering").expect("plus-bordering pattern")
});

fn border_count_rule(ctx: &LabelCtx) -> Option<Predicate> {
    // "5+ bordering countries" means >= 5
    if let Some(c) = PLUS_BORDERING.captures(&ctx.text) {
        return Some(Predicate::NumericCompare(
            NumericField::BorderCount,
            CmpOp::Ge,
            num(&c, 1)?,
        ));
    }
    BORDER_GRAMMAR.apply(&ctx.text, NumericField::BorderCount)
}

static COUNTRY_FLAG_RULES: &[FlagRule] = &[
    FlagRule {
        field: FlagField::NameInCapital,
        any_of: &["country name in capital", "name in capital"],
        negators: &[],
    },
    FlagRule {
        field: FlagField::Landlocked,
        // "landloicked" is a header typo in the source dataset, kept as
        // an accepted synonym
        any_of: &["landlocked", "landloicked"],
        negators: &["non-landlocked"],
    },
    FlagRule {
        field: FlagField::IslandNation,
        any_of: &["island nation"],
        negators: &[],
    },
    FlagRule {
        field: FlagField::OnEquator,
        any_of: &["on the equator", "equator"],
        negators: &[],
    },
    FlagRule {
        field: FlagField::BordersChina,
        any_of: &["borders china", "border china"],
        negators: &[],
    },
    FlagRule {
        field: FlagField::BordersRussia,
        any_of: &["borders russia", "border russia"],
        negators: &[],
    },
    FlagRule {
        field: FlagField::HostsOlympics,
        any_of: &[
            "hosts olympics",
            "hosted the olympics",
            "hosted olympics",
            "olympics host",
            "to his olympics", // source dataset typo
        ],
        negators: &[],
    },
    FlagRule {
        field: FlagField::WorldCupWinner,
        any_of: &["world cup winner", "world culp winner", "won the world cup"],
        negators: &[],
    },
    FlagRule {
        field: FlagField::NatoMember,
        any_of: &["nato member", "nato membership", "in nato", "nato"],
        negators: &["non-nato"],
    },
];

fn country_flags(ctx: &LabelCtx) -> Option<Predicate> {
    match_flag_table(ctx, COUNTRY_FLAG_RULES)
}

static NAME_CONTAINS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bname\s+([a-z][a-z ]*)").expect("name-contains pattern")
});

fn country_name_contains(ctx: &LabelCtx) -> Option<Predicate> {
    let c = NAME_CONTAINS.captures(&ctx.text)?;
    Some(Predicate::Contains(
        TextField::Name,
        c[1].trim().to_string(),
    ))
}

// ============================================================================
// OFFICE-HOLDER MATCHERS
// ============================================================================

static OFFICE_MATCHERS: &[Matcher] = &[
    office_letter_range,
    office_vowel_start,
    party_rule,
    served_year_rule,
    presidency_number_rule,
    years_in_office_rule,
    age_rule,
    office_flags,
    height_rule,
    weight_rule,
    birth_state_rule,
    office_name_contains,
];

static OFFICE_NAME_LETTERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(first|last)\s+name\s+(?:starts\s+with\s+)?\b([a-z])\s*(?:-|to\s)\s*([a-z])\b")
        .expect("office letter-range pattern")
});

fn office_letter_range(ctx: &LabelCtx) -> Option<Predicate> {
    let c = OFFICE_NAME_LETTERS.captures(&ctx.text)?;
    let field = match &c[1] {
        "first" => TextField::FirstName,
        _ => TextField::LastName,
    };
    let lo = c[2].chars().next()?;
    let hi = c[3].chars().next()?;
    Some(Predicate::LetterRange(field, lo, hi))
}

fn office_vowel_start(ctx: &LabelCtx) -> Option<Predicate> {
    let l = &ctx.text;
    if !l.contains("vowel") {
        return None;
    }
    if l.contains("first name") {
        return Some(Predicate::BooleanFlag(FlagField::FirstNameVowel, ctx.negated));
    }
    if l.contains("last name") {
        return Some(Predicate::BooleanFlag(FlagField::LastNameVowel, ctx.negated));
    }
    None
}

fn party_rule(ctx: &LabelCtx) -> Option<Predicate> {
    let l = &ctx.text;
    // "democratic-republican" must be checked before either of its halves
    if l.contains("federalist") {
        return Some(Predicate::Contains(TextField::Party, "federalist".to_string()));
    }
    if l.contains("democratic-republican") {
        return Some(Predicate::Contains(
            TextField::Party,
            "democratic-republican".to_string(),
        ));
    }
    if l.contains("republican") {
        return Some(Predicate::Equals(TextField::Party, "republican".to_string()));
    }
    if l.contains("democratic") {
        return Some(Predicate::Equals(TextField::Party, "democratic".to_string()));
    }
    if l.contains("whig") {
        return Some(Predicate::Equals(TextField::Party, "whig".to_string()));
    }
    if l.contains("independent") || l == "none" || l.contains("no party") {
        return Some(Predicate::Equals(TextField::Party, "none".to_string()));
    }
    None
}

// --- Term-year filters -------------------------------------------------

static SERVED_FROM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"served.*?from\s+(\d{3,4})\s*(?:-|to\s|and\s)\s*(\d{3,4}|present)")
        .expect("served-from pattern")
});
static ENDED_CENTURY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"ended?\s+in\s+(?:the\s+)?(18th|19th|20th|21st)\s+century")
        .expect("ended-century pattern")
});
static CENTURY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(18th|19th|20th|21st)\s+century\b").expect("century pattern")
});
static END_BETWEEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"end(?:ed)?.*?between\s+(\d{4})\s*(?:and\s|to\s|-)\s*(\d{4})")
        .expect("end-between pattern")
});
static END_BEFORE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:ended|end|served\s.*?until).*?\bbefore\s+(\d{4})").expect("end-before pattern")
});
static END_AFTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:ended|end|served\s.*?until).*?\bafter\s+(\d{4})").expect("end-after pattern")
});
static START_BEFORE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:served|started).*?\bbefore\s+(\d{4})").expect("start-before pattern")
});
static START_AFTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:served|started|began\s+presidency|took\s+office).*?\b(?:after|past)\s+(\d{4})")
        .expect("start-after pattern")
});

fn century_bounds(word: &str) -> (f64, f64) {
    match word {
        "18th" => (1701.0, 1800.0),
        "19th" => (1801.0, 1900.0),
        "20th" => (1901.0, 2000.0),
        _ => (2001.0, 2100.0),
    }
}

fn served_year_rule(ctx: &LabelCtx) -> Option<Predicate> {
    let l = &ctx.text;

    if let Some(c) = SERVED_FROM.captures(l) {
        let lo = num_i64(&c, 1)?;
        let hi = match &c[2] {
            "present" => YearBound::Present,
            other => {
                let y: i64 = other.parse().ok()?;
                // order-independent when both bounds are literal
                let (a, b) = (lo.min(y), lo.max(y));
                return Some(Predicate::YearRange(
                    NumericField::TermStart,
                    a,
                    YearBound::Year(b),
                ));
            }
        };
        return Some(Predicate::YearRange(NumericField::TermStart, lo, hi));
    }

    // "ended in Nth century" is more specific than the bare century rule
    if let Some(c) = ENDED_CENTURY.captures(l) {
        let (lo, hi) = century_bounds(&c[1]);
        return Some(Predicate::range(NumericField::TermEnd, lo, hi));
    }
    if let Some(c) = CENTURY.captures(l) {
        let (lo, hi) = century_bounds(&c[1]);
        return Some(Predicate::range(NumericField::TermStart, lo, hi));
    }

    if let Some(c) = END_BETWEEN.captures(l) {
        return Some(Predicate::range(NumericField::TermEnd, num(&c, 1)?, num(&c, 2)?));
    }
    if let Some(c) = END_BEFORE.captures(l) {
        return Some(Predicate::NumericCompare(
            NumericField::TermEnd,
            CmpOp::Lt,
            num(&c, 1)?,
        ));
    }
    if let Some(c) = END_AFTER.captures(l) {
        return Some(Predicate::NumericCompare(
            NumericField::TermEnd,
            CmpOp::Gt,
            num(&c, 1)?,
        ));
    }
    if let Some(c) = START_BEFORE.captures(l) {
        return Some(Predicate::NumericCompare(
            NumericField::TermStart,
            CmpOp::Lt,
            num(&c, 1)?,
        ));
    }
    if let Some(c) = START_AFTER.captures(l) {
        return Some(Predicate::NumericCompare(
            NumericField::TermStart,
            CmpOp::Gt,
            num(&c, 1)?,
        ));
    }
    None
}

static PRESIDENCY_GRAMMAR: Lazy<NumericGrammar> =
    Lazy::new(|| NumericGrammar::new(r"presidency\s+number"));

fn presidency_number_rule(ctx: &LabelCtx) -> Option<Predicate> {
    PRESIDENCY_GRAMMAR.apply(&ctx.text, NumericField::PresidencyNumber)
}

static SERVED_YEARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"served\s+(more|less)\s+than\s+(\d+(?:\.\d+)?)\s+years")
        .expect("served-years pattern")
});
static YEARS_IN_OFFICE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"years\s+in\s+office\s*(<|>)\s*(\d+(?:\.\d+)?)").expect("years-cmp pattern")
});

fn years_in_office_rule(ctx: &LabelCtx) -> Option<Predicate> {
    if let Some(c) = SERVED_YEARS.captures(&ctx.text) {
        let op = if &c[1] == "more" { CmpOp::Gt } else { CmpOp::Lt };
        return Some(Predicate::NumericCompare(
            NumericField::YearsInOffice,
            op,
            num(&c, 2)?,
        ));
    }
    if let Some(c) = YEARS_IN_OFFICE.captures(&ctx.text) {
        let op = if &c[1] == ">" { CmpOp::Gt } else { CmpOp::Lt };
        return Some(Predicate::NumericCompare(
            NumericField::YearsInOffice,
            op,
            num(&c, 2)?,
        ));
    }
    None
}

static AGE_AT_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"age\s+at\s+start\s*(<|>)\s*(\d+)").expect("age-cmp pattern")
});
static INAUGURATED_OLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"inaugurated.*?older\s+than\s+(\d+)").expect("older pattern")
});
static INAUGURATED_YOUNGER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"inaugurated.*?younger\s+than\s+(\d+)").expect("younger pattern")
});
static INAUGURATED_AT_AGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"inaugurated.*?\bage\s+(\d+)").expect("at-age pattern")
});

fn age_rule(ctx: &LabelCtx) -> Option<Predicate> {
    let l = &ctx.text;
    if let Some(c) = AGE_AT_START.captures(l) {
        let op = if &c[1] == ">" { CmpOp::Gt } else { CmpOp::Lt };
        return Some(Predicate::NumericCompare(NumericField::AgeAtStart, op, num(&c, 2)?));
    }
    if let Some(c) = INAUGURATED_OLDER.captures(l) {
        return Some(Predicate::NumericCompare(
            NumericField::AgeAtStart,
            CmpOp::Gt,
            num(&c, 1)?,
        ));
    }
    if let Some(c) = INAUGURATED_YOUNGER.captures(l) {
        return Some(Predicate::NumericCompare(
            NumericField::AgeAtStart,
            CmpOp::Lt,
            num(&c, 1)?,
        ));
    }
    if let Some(c) = INAUGURATED_AT_AGE.captures(l) {
        return Some(Predicate::NumericCompare(
            NumericField::AgeAtStart,
            CmpOp::Eq,
            num(&c, 1)?,
        ));
    }
    None
}

static OFFICE_FLAG_RULES: &[FlagRule] = &[
    FlagRule {
        field: FlagField::Assassinated,
        any_of: &["assassin"],
        negators: &[],
    },
    FlagRule {
        field: FlagField::DiedInOffice,
        any_of: &["died in office", "die in office", "dies in office"],
        negators: &[],
    },
    FlagRule {
        field: FlagField::MilitaryService,
        any_of: &["in the military", "in military"],
        negators: &[],
    },
    FlagRule {
        field: FlagField::ServedInCongress,
        any_of: &["in congress", "in the congress"],
        negators: &[],
    },
    FlagRule {
        field: FlagField::ServedInHouse,
        any_of: &["in the house", "in house"],
        negators: &[],
    },
    FlagRule {
        field: FlagField::ServedInSenate,
        any_of: &["in the senate", "in senate"],
        negators: &[],
    },
    FlagRule {
        field: FlagField::VicePresident,
        any_of: &["vice president"],
        negators: &[],
    },
    FlagRule {
        field: FlagField::FacialHair,
        any_of: &["facial hair"],
        negators: &[],
    },
    FlagRule {
        field: FlagField::FoundingFather,
        // "foundng father" is a header typo in the source dataset
        any_of: &["founding father", "foundng father"],
        negators: &[],
    },
    FlagRule {
        field: FlagField::SecretaryOfState,
        any_of: &["secretary of state"],
        negators: &[],
    },
    FlagRule {
        field: FlagField::Governor,
        any_of: &["governor"],
        negators: &[],
    },
    FlagRule {
        field: FlagField::IvyLeague,
        any_of: &["ivy"],
        negators: &[],
    },
    FlagRule {
        field: FlagField::NobelPrize,
        any_of: &["nobel"],
        negators: &[],
    },
    FlagRule {
        field: FlagField::Impeached,
        any_of: &["impeach"],
        negators: &[],
    },
    FlagRule {
        field: FlagField::CollegeDegree,
        any_of: &["college degree"],
        negators: &["no college degree"],
    },
    FlagRule {
        field: FlagField::LostPopularVote,
        any_of: &[
            "without popular vote",
            "lost popular vote",
            "lost the popular vote",
        ],
        negators: &[],
    },
    FlagRule {
        field: FlagField::ColdWar,
        any_of: &["cold war"],
        negators: &[],
    },
    FlagRule {
        field: FlagField::OnCurrency,
        any_of: &["currency"],
        negators: &[],
    },
    FlagRule {
        field: FlagField::MountRushmore,
        any_of: &["mount rushmore", "rushmore"],
        negators: &[],
    },
    FlagRule {
        field: FlagField::MetQueenElizabethII,
        any_of: &["met queen elizabeth ii", "met queen elizabeth"],
        negators: &[],
    },
    FlagRule {
        field: FlagField::UnmarriedInOffice,
        any_of: &[
            "unmarried while in office",
            "unmarried in office",
            "no spouse in office",
        ],
        negators: &[],
    },
    FlagRule {
        field: FlagField::TiedWar1812,
        any_of: &[
            "tied to war of 1812",
            "tied to the war of 1812",
            "related to the war of 1812",
            "war of 1812",
        ],
        negators: &[],
    },
    FlagRule {
        field: FlagField::RelatedToPresident,
        any_of: &[
            "related to another president",
            "related to a president",
            "related to president",
            "presidential relative",
            "family of a president",
        ],
        negators: &[],
    },
    FlagRule {
        field: FlagField::AlliterativeName,
        any_of: &[
            "alliterative",
            "same first and last initial",
            "matching initials",
        ],
        negators: &[],
    },
    FlagRule {
        field: FlagField::ReElected,
        any_of: &["re-elect", "reelect"],
        negators: &["lost re-election", "lost reelection"],
    },
    FlagRule {
        field: FlagField::BornBefore1800,
        any_of: &["born before 1800"],
        negators: &[],
    },
    FlagRule {
        field: FlagField::Born1800To1900,
        any_of: &["born 1800 - 1900", "born 1800-1900"],
        negators: &[],
    },
    FlagRule {
        field: FlagField::Born1900To2000,
        any_of: &["born 1900-2000", "born 1900 - 2000"],
        negators: &[],
    },
];

fn office_flags(ctx: &LabelCtx) -> Option<Predicate> {
    match_flag_table(ctx, OFFICE_FLAG_RULES)
}

fn height_rule(ctx: &LabelCtx) -> Option<Predicate> {
    let l = &ctx.text;
    let tall = ["6 feet or taller", "at least 6 feet", ">= 6 feet", "six feet or taller"];
    if tall.iter().any(|p| l.contains(p)) {
        return Some(Predicate::NumericCompare(
            NumericField::HeightInches,
            CmpOp::Ge,
            72.0,
        ));
    }
    let short = ["shorter than 6 feet", "under 6 feet", "< 6 feet", "under six feet"];
    if short.iter().any(|p| l.contains(p)) {
        return Some(Predicate::NumericCompare(
            NumericField::HeightInches,
            CmpOp::Lt,
            72.0,
        ));
    }
    None
}

static POUNDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*(?:pounds?|lbs?)\b").expect("pounds pattern")
});
static GREATER_THAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"greater\s+than|>\s*\d").expect("greater-than pattern")
});

fn weight_rule(ctx: &LabelCtx) -> Option<Predicate> {
    let l = &ctx.text;
    let c = POUNDS.captures(l)?;
    let n = num(&c, 1)?;

    let ge = ["or greater", "or more", "at least", ">="];
    if ge.iter().any(|p| l.contains(p)) {
        return Some(Predicate::NumericCompare(NumericField::WeightLbs, CmpOp::Ge, n));
    }
    if GREATER_THAN.is_match(l) {
        return Some(Predicate::NumericCompare(NumericField::WeightLbs, CmpOp::Gt, n));
    }
    let lt = ["less than", "under", "<"];
    if lt.iter().any(|p| l.contains(p)) {
        return Some(Predicate::NumericCompare(NumericField::WeightLbs, CmpOp::Lt, n));
    }
    if l.contains("exactly") {
        return Some(Predicate::NumericCompare(NumericField::WeightLbs, CmpOp::Eq, n));
    }
    None
}

static BORN_IN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"born\s+in\s+([a-z ]+)").expect("born-in pattern")
});

fn birth_state_rule(ctx: &LabelCtx) -> Option<Predicate> {
    let c = BORN_IN.captures(&ctx.text)?;
    Some(Predicate::Contains(
        TextField::BirthState,
        c[1].trim().to_string(),
    ))
}

fn office_name_contains(ctx: &LabelCtx) -> Option<Predicate> {
    let c = NAME_CONTAINS.captures(&ctx.text)?;
    Some(Predicate::Contains(
        TextField::Name,
        c[1].trim().to_string(),
    ))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Domain;

    fn country(label: &str) -> Predicate {
        compile(label, Domain::Country)
    }

    fn office(label: &str) -> Predicate {
        compile(label, Domain::OfficeHolder)
    }

    // --- letter ranges --------------------------------------------------

    #[test]
    fn test_country_name_letter_range() {
        assert_eq!(
            country("Country Name A-J"),
            Predicate::LetterRange(TextField::Name, 'a', 'j')
        );
        assert_eq!(
            country("Name starts with K-Z"),
            Predicate::LetterRange(TextField::Name, 'k', 'z')
        );
        assert_eq!(
            country("Capital L-Z"),
            Predicate::LetterRange(TextField::Capital, 'l', 'z')
        );
    }

    #[test]
    fn test_letter_range_accepts_to_joiner() {
        assert_eq!(
            country("Country Name A to J"),
            Predicate::LetterRange(TextField::Name, 'a', 'j')
        );
    }

    #[test]
    fn test_office_letter_ranges() {
        assert_eq!(
            office("First Name A-J"),
            Predicate::LetterRange(TextField::FirstName, 'a', 'j')
        );
        assert_eq!(
            office("Last Name starts with K-Z"),
            Predicate::LetterRange(TextField::LastName, 'k', 'z')
        );
    }

    #[test]
    fn test_en_dash_letter_range() {
        assert_eq!(
            office("First Name A\u{2013}J"),
            Predicate::LetterRange(TextField::FirstName, 'a', 'j')
        );
    }

    // --- vowels ---------------------------------------------------------

    #[test]
    fn test_vowel_rules() {
        assert_eq!(
            country("Name starts with vowel"),
            Predicate::BooleanFlag(FlagField::NameVowel, false)
        );
        assert_eq!(
            office("First Name starts with vowel"),
            Predicate::BooleanFlag(FlagField::FirstNameVowel, false)
        );
        assert_eq!(
            office("Last Name Vowel"),
            Predicate::BooleanFlag(FlagField::LastNameVowel, false)
        );
    }

    // --- categorical ----------------------------------------------------

    #[test]
    fn test_continent_bare_and_prefixed() {
        assert_eq!(
            country("Africa"),
            Predicate::Equals(TextField::Continent, "africa".to_string())
        );
        assert_eq!(
            country("In South America"),
            Predicate::Equals(TextField::Continent, "south america".to_string())
        );
        assert_eq!(
            country("Continent: Europe"),
            Predicate::Equals(TextField::Continent, "europe".to_string())
        );
    }

    #[test]
    fn test_region_beats_buried_continent_word() {
        assert_eq!(
            country("Region: Southern Europe"),
            Predicate::Contains(TextField::Region, "southern europe".to_string())
        );
    }

    #[test]
    fn test_religion_and_capital_contains() {
        assert_eq!(
            country("Primary Religion: Islam"),
            Predicate::Contains(TextField::Religion, "islam".to_string())
        );
        assert_eq!(
            country("Capital contains San"),
            Predicate::Contains(TextField::Capital, "san".to_string())
        );
    }

    #[test]
    fn test_party_rules_in_specific_order() {
        assert_eq!(
            office("Democratic-Republican"),
            Predicate::Contains(TextField::Party, "democratic-republican".to_string())
        );
        assert_eq!(
            office("Republican"),
            Predicate::Equals(TextField::Party, "republican".to_string())
        );
        assert_eq!(
            office("Democratic"),
            Predicate::Equals(TextField::Party, "democratic".to_string())
        );
        assert_eq!(
            office("Whig"),
            Predicate::Equals(TextField::Party, "whig".to_string())
        );
        assert_eq!(
            office("Independent"),
            Predicate::Equals(TextField::Party, "none".to_string())
        );
    }

    // --- numeric grammar ------------------------------------------------

    #[test]
    fn test_population_rank_range() {
        assert_eq!(
            country("Population Rank 1-50"),
            Predicate::NumericRange(NumericField::PopulationRank, 1.0, 50.0)
        );
        assert_eq!(
            country("Population rank between 50 and 10"),
            Predicate::NumericRange(NumericField::PopulationRank, 10.0, 50.0)
        );
    }

    #[test]
    fn test_population_rank_comparisons() {
        assert_eq!(
            country("Population rank <= 10"),
            Predicate::NumericCompare(NumericField::PopulationRank, CmpOp::Le, 10.0)
        );
        assert_eq!(
            country("Population rank = 1"),
            Predicate::NumericCompare(NumericField::PopulationRank, CmpOp::Eq, 1.0)
        );
        assert_eq!(
            country("Top 10 most populated"),
            Predicate::NumericCompare(NumericField::PopulationRank, CmpOp::Le, 10.0)
        );
    }

    #[test]
    fn test_area_rank_aliases() {
        assert_eq!(
            country("Largest Country Rank 1-5"),
            Predicate::NumericRange(NumericField::AreaRank, 1.0, 5.0)
        );
        assert_eq!(
            country("Area rank = 1"),
            Predicate::NumericCompare(NumericField::AreaRank, CmpOp::Eq, 1.0)
        );
    }

    #[test]
    fn test_border_count_grammar() {
        assert_eq!(
            country("Borders = 2"),
            Predicate::NumericCompare(NumericField::BorderCount, CmpOp::Eq, 2.0)
        );
        assert_eq!(
            country("Borders between 3-6"),
            Predicate::NumericRange(NumericField::BorderCount, 3.0, 6.0)
        );
        assert_eq!(
            country("5+ bordering countries"),
            Predicate::NumericCompare(NumericField::BorderCount, CmpOp::Ge, 5.0)
        );
    }

    #[test]
    fn test_borders_china_is_a_flag_not_a_count() {
        assert_eq!(
            country("Borders China"),
            Predicate::BooleanFlag(FlagField::BordersChina, false)
        );
        assert_eq!(
            country("Borders Russia"),
            Predicate::BooleanFlag(FlagField::BordersRussia, false)
        );
    }

    // --- boolean flags and negation ------------------------------------

    #[test]
    fn test_country_flags() {
        assert_eq!(
            country("Landlocked"),
            Predicate::BooleanFlag(FlagField::Landlocked, false)
        );
        assert_eq!(
            country("Island Nation"),
            Predicate::BooleanFlag(FlagField::IslandNation, false)
        );
        assert_eq!(
            country("On the equator"),
            Predicate::BooleanFlag(FlagField::OnEquator, false)
        );
        assert_eq!(
            country("World Cup Winner"),
            Predicate::BooleanFlag(FlagField::WorldCupWinner, false)
        );
        assert_eq!(
            country("NATO Member"),
            Predicate::BooleanFlag(FlagField::NatoMember, false)
        );
    }

    #[test]
    fn test_typo_synonyms_preserved() {
        assert_eq!(
            country("World Culp Winner"),
            Predicate::BooleanFlag(FlagField::WorldCupWinner, false)
        );
        assert_eq!(
            country("Landloicked"),
            Predicate::BooleanFlag(FlagField::Landlocked, false)
        );
        assert_eq!(
            office("Foundng Father"),
            Predicate::BooleanFlag(FlagField::FoundingFather, false)
        );
    }

    #[test]
    fn test_global_negation_marker() {
        assert_eq!(
            country("Not Landlocked"),
            Predicate::BooleanFlag(FlagField::Landlocked, true)
        );
        assert_eq!(
            office("Did not serve in the military"),
            Predicate::BooleanFlag(FlagField::MilitaryService, true)
        );
        assert_eq!(
            office("Wasn't assassinated"),
            Predicate::BooleanFlag(FlagField::Assassinated, true)
        );
    }

    #[test]
    fn test_hardcoded_negative_phrasing() {
        assert_eq!(
            country("Non-landlocked"),
            Predicate::BooleanFlag(FlagField::Landlocked, true)
        );
        assert_eq!(
            office("Lost re-election"),
            Predicate::BooleanFlag(FlagField::ReElected, true)
        );
        assert_eq!(
            office("Not re-elected"),
            Predicate::BooleanFlag(FlagField::ReElected, true)
        );
    }

    #[test]
    fn test_negation_marker_inside_phrase_is_not_double_counted() {
        // "no spouse in office" IS the unmarried flag, not its inverse
        assert_eq!(
            office("No spouse in office"),
            Predicate::BooleanFlag(FlagField::UnmarriedInOffice, false)
        );
    }

    #[test]
    fn test_office_flag_sampler() {
        assert_eq!(
            office("Assassinated"),
            Predicate::BooleanFlag(FlagField::Assassinated, false)
        );
        assert_eq!(
            office("Died in Office"),
            Predicate::BooleanFlag(FlagField::DiedInOffice, false)
        );
        assert_eq!(
            office("Served in the Senate"),
            Predicate::BooleanFlag(FlagField::ServedInSenate, false)
        );
        assert_eq!(
            office("Appears on Mount Rushmore"),
            Predicate::BooleanFlag(FlagField::MountRushmore, false)
        );
        assert_eq!(
            office("Tied to War of 1812"),
            Predicate::BooleanFlag(FlagField::TiedWar1812, false)
        );
        assert_eq!(
            office("Related to another President"),
            Predicate::BooleanFlag(FlagField::RelatedToPresident, false)
        );
        assert_eq!(
            office("Alliterative Name"),
            Predicate::BooleanFlag(FlagField::AlliterativeName, false)
        );
    }

    // --- tie-breaks -----------------------------------------------------

    #[test]
    fn test_specific_rule_beats_generic_name_rule() {
        // Must hit the boolean flag, not the generic "name <text>" rule
        assert_eq!(
            country("Country Name in Capital"),
            Predicate::BooleanFlag(FlagField::NameInCapital, false)
        );
    }

    #[test]
    fn test_vice_president_beats_related_to_president() {
        assert_eq!(
            office("Served as Vice President"),
            Predicate::BooleanFlag(FlagField::VicePresident, false)
        );
        assert_eq!(
            office("Cold War President"),
            Predicate::BooleanFlag(FlagField::ColdWar, false)
        );
    }

    #[test]
    fn test_name_contains_fallback() {
        assert_eq!(
            country("Name Stan"),
            Predicate::Contains(TextField::Name, "stan".to_string())
        );
        assert_eq!(
            office("Name Roosevelt"),
            Predicate::Contains(TextField::Name, "roosevelt".to_string())
        );
    }

    // --- year filters ---------------------------------------------------

    #[test]
    fn test_served_from_range() {
        assert_eq!(
            office("Served from 1850 to 1900"),
            Predicate::YearRange(NumericField::TermStart, 1850, YearBound::Year(1900))
        );
        // reversed bounds normalize
        assert_eq!(
            office("Served from 1900 to 1850"),
            Predicate::YearRange(NumericField::TermStart, 1850, YearBound::Year(1900))
        );
    }

    #[test]
    fn test_served_to_present_stays_symbolic() {
        assert_eq!(
            office("Served from 1950 to present"),
            Predicate::YearRange(NumericField::TermStart, 1950, YearBound::Present)
        );
    }

    #[test]
    fn test_centuries() {
        assert_eq!(
            office("18th Century"),
            Predicate::NumericRange(NumericField::TermStart, 1701.0, 1800.0)
        );
        assert_eq!(
            office("20th Century"),
            Predicate::NumericRange(NumericField::TermStart, 1901.0, 2000.0)
        );
        assert_eq!(
            office("Ended in 19th Century"),
            Predicate::NumericRange(NumericField::TermEnd, 1801.0, 1900.0)
        );
    }

    #[test]
    fn test_start_and_end_comparisons() {
        assert_eq!(
            office("Served past 1900"),
            Predicate::NumericCompare(NumericField::TermStart, CmpOp::Gt, 1900.0)
        );
        assert_eq!(
            office("Started before 1850"),
            Predicate::NumericCompare(NumericField::TermStart, CmpOp::Lt, 1850.0)
        );
        assert_eq!(
            office("Term ended after 1950"),
            Predicate::NumericCompare(NumericField::TermEnd, CmpOp::Gt, 1950.0)
        );
        assert_eq!(
            office("Term end between 1900 and 1950"),
            Predicate::NumericRange(NumericField::TermEnd, 1900.0, 1950.0)
        );
    }

    // --- misc office numerics -------------------------------------------

    #[test]
    fn test_presidency_number_range() {
        assert_eq!(
            office("Presidency Number 1-15"),
            Predicate::NumericRange(NumericField::PresidencyNumber, 1.0, 15.0)
        );
    }

    #[test]
    fn test_years_in_office() {
        assert_eq!(
            office("Served more than 5 years"),
            Predicate::NumericCompare(NumericField::YearsInOffice, CmpOp::Gt, 5.0)
        );
        assert_eq!(
            office("Years in Office < 4"),
            Predicate::NumericCompare(NumericField::YearsInOffice, CmpOp::Lt, 4.0)
        );
    }

    #[test]
    fn test_age_rules() {
        assert_eq!(
            office("Age at Start > 55"),
            Predicate::NumericCompare(NumericField::AgeAtStart, CmpOp::Gt, 55.0)
        );
        assert_eq!(
            office("Inaugurated older than 60"),
            Predicate::NumericCompare(NumericField::AgeAtStart, CmpOp::Gt, 60.0)
        );
        assert_eq!(
            office("Inaugurated at age 46"),
            Predicate::NumericCompare(NumericField::AgeAtStart, CmpOp::Eq, 46.0)
        );
    }

    #[test]
    fn test_height_and_weight_buckets() {
        assert_eq!(
            office("6 feet or taller"),
            Predicate::NumericCompare(NumericField::HeightInches, CmpOp::Ge, 72.0)
        );
        assert_eq!(
            office("Under six feet"),
            Predicate::NumericCompare(NumericField::HeightInches, CmpOp::Lt, 72.0)
        );
        assert_eq!(
            office("180 pounds or more"),
            Predicate::NumericCompare(NumericField::WeightLbs, CmpOp::Ge, 180.0)
        );
        assert_eq!(
            office("Less than 200 lbs"),
            Predicate::NumericCompare(NumericField::WeightLbs, CmpOp::Lt, 200.0)
        );
    }

    #[test]
    fn test_birth_state() {
        assert_eq!(
            office("Born in Virginia"),
            Predicate::Contains(TextField::BirthState, "virginia".to_string())
        );
    }

    #[test]
    fn test_born_range_flags_not_swallowed_by_born_in() {
        assert_eq!(
            office("Born before 1800"),
            Predicate::BooleanFlag(FlagField::BornBefore1800, false)
        );
        assert_eq!(
            office("Born 1800 - 1900"),
            Predicate::BooleanFlag(FlagField::Born1800To1900, false)
        );
        assert_eq!(
            office("Born 1900-2000"),
            Predicate::BooleanFlag(FlagField::Born1900To2000, false)
        );
    }

    // --- safety nets ----------------------------------------------------

    #[test]
    fn test_gibberish_compiles_to_never() {
        assert_eq!(country("xyzzy plugh 42!!"), Predicate::Never);
        assert_eq!(office("qwerty asdf"), Predicate::Never);
        assert_eq!(country(""), Predicate::Never);
        assert_eq!(country("   "), Predicate::Never);
    }

    #[test]
    fn test_compile_is_deterministic() {
        for label in ["Borders Russia", "Population Rank 1-50", "gibberish here!"] {
            assert_eq!(country(label), country(label));
        }
    }
}

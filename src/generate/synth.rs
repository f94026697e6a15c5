//! Synthetic text and date helpers.
//!
//! Word-list generation standing in for a fake-data library: company names
//! for organizations, corporate catch-phrases for description fields, and
//! dates within the current decade for emission logs.

use chrono::{Datelike, Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::Rng;

const COMPANY_STEMS: &[&str] = &[
    "Atlas", "Northwind", "Helios", "Vanguard", "Meridian", "Cascade", "Orion", "Summit",
    "Pinnacle", "Horizon", "Sterling", "Redwood", "Lakeside", "Ironbridge", "Bluepeak",
    "Crestline", "Solstice", "Harbor", "Granite", "Foxglove",
];

const COMPANY_SUFFIXES: &[&str] = &[
    "Holdings", "Industries", "Group", "Logistics", "Energy", "Partners", "Manufacturing",
    "Ltd", "GmbH", "PLC",
];

const BUZZ_VERBS: &[&str] = &[
    "streamline", "optimize", "leverage", "orchestrate", "consolidate", "harness",
    "benchmark", "integrate", "scale", "transform",
];

const BUZZ_ADJECTIVES: &[&str] = &[
    "scalable", "sustainable", "carbon-aware", "end-to-end", "cross-functional",
    "next-generation", "distributed", "resilient", "granular", "holistic",
];

const BUZZ_NOUNS: &[&str] = &[
    "supply chains", "reporting workflows", "energy portfolios", "abatement pathways",
    "compliance baselines", "asset inventories", "intensity metrics", "audit trails",
    "procurement channels", "disclosure frameworks",
];

/// Uniform pick from a non-empty slice.
pub fn pick<'a, T>(rng: &mut StdRng, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

pub fn company_name(rng: &mut StdRng) -> String {
    format!(
        "{} {}",
        pick(rng, COMPANY_STEMS),
        pick(rng, COMPANY_SUFFIXES)
    )
}

/// A free-text description in corporate register, e.g.
/// "leverage sustainable audit trails".
pub fn catch_phrase(rng: &mut StdRng) -> String {
    format!(
        "{} {} {}",
        pick(rng, BUZZ_VERBS),
        pick(rng, BUZZ_ADJECTIVES),
        pick(rng, BUZZ_NOUNS)
    )
}

/// Uniform date between the start of `today`'s decade and `today` inclusive.
pub fn date_this_decade(rng: &mut StdRng, today: NaiveDate) -> NaiveDate {
    let decade_start =
        NaiveDate::from_ymd_opt(today.year() - today.year().rem_euclid(10), 1, 1).unwrap_or(today);
    let span = (today - decade_start).num_days();
    decade_start + Duration::days(rng.gen_range(0..=span))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_company_name_is_two_words() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(company_name(&mut rng).split(' ').count(), 2);
        }
    }

    #[test]
    fn test_date_this_decade_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let decade_start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        for _ in 0..200 {
            let date = date_this_decade(&mut rng, today);
            assert!(date >= decade_start && date <= today);
        }
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let a = catch_phrase(&mut StdRng::seed_from_u64(99));
        let b = catch_phrase(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}

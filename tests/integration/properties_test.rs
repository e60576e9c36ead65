//! Invariants of extraction and aggregation over generated documents

use pagestat::stats::{distinct_membership, frequency, pair_frequency, top_n};
use pagestat::{AggregatedStats, Field, RawPage, Record, RecordExtractor, SummaryReporter};

/// Small deterministic generator so that failures are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: u64) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) % bound
    }
}

/// Pages mixing valid rows, short rows, extra tokens and narrative text.
fn generated_pages(seed: u64, pages: usize) -> Vec<RawPage> {
    let mut rng = Lcg(seed);
    (1..=pages)
        .map(|number| {
            let mut text = String::from("Quarterly roster\n");
            for _ in 0..rng.next(30) {
                let person = rng.next(12);
                let division = rng.next(4);
                let group = rng.next(5);
                let department = rng.next(3);
                match rng.next(6) {
                    0 => text.push_str(&format!("Person_{} D{}\n", person, division)),
                    1 => text.push_str("Narrative text between rows\n"),
                    2 => text.push_str(&format!(
                        "Person_{}  D{}\tG{} Dept{} trailing note\n",
                        person, division, group, department
                    )),
                    _ => text.push_str(&format!(
                        "Person_{} D{} G{} Dept{}\n",
                        person, division, group, department
                    )),
                }
            }
            RawPage::new(number as u32, text)
        })
        .collect()
}

fn records_for(seed: u64) -> Vec<Record> {
    RecordExtractor::default().extract(&generated_pages(seed, 6))
}

#[test]
fn extraction_is_deterministic() {
    for seed in 0..20 {
        let pages = generated_pages(seed, 8);
        let extractor = RecordExtractor::default();
        assert_eq!(extractor.extract(&pages), extractor.extract(&pages));
    }
}

#[test]
fn records_have_four_non_empty_fields() {
    for seed in 0..20 {
        for record in records_for(seed) {
            for field in Field::ALL {
                let value = record.get(field);
                assert!(!value.is_empty());
                assert!(!value.contains(char::is_whitespace));
            }
        }
    }
}

#[test]
fn record_count_is_bounded_by_lines() {
    for seed in 0..20 {
        let pages = generated_pages(seed, 5);
        let lines: usize = pages.iter().map(|p| p.text.trim().lines().count()).sum();
        let (records, stats) = RecordExtractor::default().extract_with_stats(&pages);

        assert!(records.len() <= lines);
        assert_eq!(stats.records, records.len());
        assert_eq!(stats.candidate_lines, stats.records + stats.malformed_lines);
    }
}

#[test]
fn frequency_counts_sum_to_record_count() {
    for seed in 0..20 {
        let records = records_for(seed);
        for field in Field::ALL {
            assert_eq!(frequency(&records, field).total(), records.len());
        }
        assert_eq!(
            pair_frequency(&records, Field::Division, Field::Group).total(),
            records.len()
        );
    }
}

#[test]
fn membership_is_bounded_by_frequency() {
    for seed in 0..20 {
        let records = records_for(seed);
        for group_field in Field::ALL {
            let counts = frequency(&records, group_field);
            for member_field in Field::ALL {
                let membership = distinct_membership(&records, group_field, member_field);
                assert_eq!(membership.len(), counts.len());
                for (group, members) in membership.iter() {
                    assert!(members.len() <= counts.get(group).unwrap());
                }
            }
        }
    }
}

#[test]
fn top_n_is_bounded_and_non_increasing() {
    for seed in 0..20 {
        let table = frequency(&records_for(seed), Field::Person);
        for n in [0, 1, 3, 10, 100] {
            let ranking = top_n(&table, n);
            assert_eq!(ranking.len(), n.min(table.len()));
            let counts: Vec<_> = ranking.iter().map(|e| e.count).collect();
            assert!(counts.windows(2).all(|w| w[0] >= w[1]));
        }
    }
}

#[test]
fn equal_counts_rank_by_first_appearance() {
    for seed in 0..20 {
        let records = records_for(seed);
        let first_seen = |value: &str| {
            records
                .iter()
                .position(|r| r.division == value)
                .unwrap()
        };

        let ranking = top_n(&frequency(&records, Field::Division), usize::MAX);
        for pair in ranking.entries().windows(2) {
            if pair[0].count == pair[1].count {
                assert!(first_seen(&pair[0].key) < first_seen(&pair[1].key));
            }
        }
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn three_rows_rank_division_with_two_records_first() {
    let pages = vec![RawPage::new(
        1,
        "Person_1 D1 G1 Dept1\nPerson_2 D1 G2 Dept1\nPerson_3 D2 G1 Dept2",
    )];

    let records = RecordExtractor::default().extract(&pages);
    let divisions = frequency(&records, Field::Division);

    assert_eq!(records.len(), 3);
    assert_eq!(divisions.get("D1"), Some(2));
    assert_eq!(divisions.get("D2"), Some(1));
    let top = top_n(&divisions, 1);
    assert_eq!(top.len(), 1);
    assert_eq!((top.entries()[0].key.as_str(), top.entries()[0].count), ("D1", 2));
}

#[test]
fn short_row_does_not_affect_totals() {
    let pages = vec![RawPage::new(1, "Person_1 D1 G1 Dept1\nPerson_9 D1 G1\n")];

    let records = RecordExtractor::default().extract(&pages);

    assert_eq!(records, vec![Record::new("Person_1", "D1", "G1", "Dept1")]);
    assert_eq!(AggregatedStats::compute(&records, 5).total_records, 1);
}

#[test]
fn repeated_person_across_pages_is_counted_once_per_division() {
    let pages = vec![
        RawPage::new(1, "Person_1 D1 G1 Dept1"),
        RawPage::new(2, "Person_1 D1 G2 Dept2"),
    ];

    let records = RecordExtractor::default().extract(&pages);

    assert_eq!(frequency(&records, Field::Division).get("D1"), Some(2));
    let membership = distinct_membership(&records, Field::Division, Field::Person);
    assert_eq!(membership.cardinality("D1"), 1);
}

#[test]
fn no_pages_render_zero_report() {
    let records = RecordExtractor::default().extract(&[]);
    let stats = AggregatedStats::compute(&records, 5);

    assert!(frequency(&records, Field::Group).is_empty());
    assert!(stats.top_divisions.is_empty());
    assert!(stats.persons_per_division.is_empty());

    let report = SummaryReporter::default().render(&stats);
    assert!(report.contains("Total records: 0\n"));
    assert!(report.contains("Unique persons: 0\n"));
}

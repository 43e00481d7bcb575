//! Evidence index export: canonical pair key to hit list.
//!
//! Statistics fields are dropped; only each pair's hits are kept, keyed by
//! [`crate::Pair::evidence_key`]. Pair order is significant, so `(a, b)` and
//! `(b, a)` produce two entries. Hits holding NaN or an infinity are refused.

use std::collections::HashMap;
use std::io::Write;

use camino::Utf8Path;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::ReportError;
use crate::records::{Hit, PairDetail, non_finite_hit_field};

use super::destination::write_artifact;

/// Ordered mapping from canonical pair key to that pair's hits.
///
/// Keys keep the order in which their pair first appears. When a pair is
/// repeated, the entry stays in its first position and takes the hits of
/// the last occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct EvidenceIndex<'a> {
    entries: Vec<(String, &'a [Hit])>,
}

impl<'a> EvidenceIndex<'a> {
    /// Builds the index from detail records.
    #[must_use]
    pub fn from_details(details: &'a [PairDetail]) -> Self {
        let mut positions: HashMap<String, usize> = HashMap::with_capacity(details.len());
        let mut entries: Vec<(String, &'a [Hit])> = Vec::with_capacity(details.len());

        for detail in details {
            let key = detail.pair.evidence_key();
            if let Some(entry) = positions
                .get(&key)
                .and_then(|&position| entries.get_mut(position))
            {
                entry.1 = detail.hits.as_slice();
                continue;
            }
            positions.insert(key.clone(), entries.len());
            entries.push((key, detail.hits.as_slice()));
        }

        Self { entries }
    }

    /// Returns the keys in output order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Returns the hits recorded under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a [Hit]> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, hits)| *hits)
    }

    /// Returns the number of distinct pairs.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the index holds no pairs.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn ensure_finite(&self) -> Result<(), ReportError> {
        self.entries
            .iter()
            .find_map(|(key, hits)| {
                non_finite_hit_field(hits)
                    .map(|field| ReportError::non_finite(format_args!("evidence key {key}"), &field))
            })
            .map_or(Ok(()), Err)
    }
}

impl Serialize for EvidenceIndex<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, hits) in &self.entries {
            map.serialize_entry(key, hits)?;
        }
        map.end()
    }
}

/// Writes the evidence index to `path`.
///
/// # Errors
///
/// Returns [`ReportError::Filesystem`] if the destination cannot be created
/// or written, or [`ReportError::Serialization`] if a hit holds a
/// non-finite number. Nothing is written in that case.
pub fn write_evidence_top(path: &Utf8Path, details: &[PairDetail]) -> Result<(), ReportError> {
    let index = EvidenceIndex::from_details(details);
    index.ensure_finite()?;
    write_artifact(path, "evidence index", |writer| write_json(writer, &index))?;
    tracing::info!(path = %path, pairs = index.len(), "wrote evidence index");
    Ok(())
}

/// Writes an evidence index as indented JSON to the given writer.
///
/// # Errors
///
/// Returns [`ReportError::Filesystem`] if writing fails, or
/// [`ReportError::Serialization`] before anything is written if a hit holds
/// a non-finite number.
pub fn write_evidence_index_to<W: Write>(
    writer: &mut W,
    index: &EvidenceIndex<'_>,
) -> Result<(), ReportError> {
    index.ensure_finite()?;
    write_json(writer, index)
}

fn write_json<W: Write>(writer: &mut W, index: &EvidenceIndex<'_>) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(writer, index)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::Value;

    use super::*;
    use crate::export::test_helpers::{DetailBuilder, HitBuilder};

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn index_to_value(details: &[PairDetail]) -> Result<Value, Box<dyn std::error::Error>> {
        let mut buffer = Vec::new();
        write_evidence_index_to(&mut buffer, &EvidenceIndex::from_details(details))?;
        Ok(serde_json::from_slice(&buffer)?)
    }

    #[rstest]
    fn key_is_tuple_style_text() -> TestResult {
        let details = vec![
            DetailBuilder::new("stu1", "stu2")
                .count(9)
                .score(0.9)
                .hit(HitBuilder::new(1).sim(0.8).build())
                .build(),
        ];

        let parsed = index_to_value(&details)?;
        let object = parsed.as_object().ok_or("expected object")?;

        assert_eq!(object.keys().collect::<Vec<_>>(), ["('stu1', 'stu2')"]);
        let hits = object
            .get("('stu1', 'stu2')")
            .and_then(Value::as_array)
            .ok_or("expected hit list")?;
        assert_eq!(hits.len(), 1);
        Ok(())
    }

    #[rstest]
    fn statistics_fields_are_dropped() -> TestResult {
        let details = vec![DetailBuilder::new("a", "b").count(4).mean_sim(0.3).build()];

        let output = {
            let mut buffer = Vec::new();
            write_evidence_index_to(&mut buffer, &EvidenceIndex::from_details(&details))?;
            String::from_utf8(buffer)?
        };

        assert!(!output.contains("mean_sim"));
        assert!(!output.contains("count"));
        Ok(())
    }

    #[rstest]
    fn reversed_pairs_are_distinct_keys() {
        let details = vec![
            DetailBuilder::new("a", "b").hit(HitBuilder::new(1).build()).build(),
            DetailBuilder::new("b", "a").build(),
        ];

        let index = EvidenceIndex::from_details(&details);

        assert_eq!(index.keys().collect::<Vec<_>>(), ["('a', 'b')", "('b', 'a')"]);
        assert_eq!(index.get("('a', 'b')").map(<[Hit]>::len), Some(1));
        assert_eq!(index.get("('b', 'a')").map(<[Hit]>::len), Some(0));
    }

    #[rstest]
    fn repeated_pair_keeps_first_position_and_last_hits() {
        let details = vec![
            DetailBuilder::new("a", "b").hit(HitBuilder::new(1).build()).build(),
            DetailBuilder::new("c", "d").build(),
            DetailBuilder::new("a", "b")
                .hit(HitBuilder::new(2).build())
                .hit(HitBuilder::new(3).build())
                .build(),
        ];

        let index = EvidenceIndex::from_details(&details);

        assert_eq!(index.len(), 2);
        assert_eq!(index.keys().collect::<Vec<_>>(), ["('a', 'b')", "('c', 'd')"]);
        let hits = index.get("('a', 'b')").unwrap_or_default();
        assert_eq!(
            hits.iter().map(|hit| hit.sent_id_i).collect::<Vec<_>>(),
            [2, 3]
        );
    }

    #[rstest]
    fn non_finite_hit_is_refused() {
        let details = vec![
            DetailBuilder::new("a", "b").hit(HitBuilder::new(1).build()).build(),
            DetailBuilder::new("c", "d")
                .hit(HitBuilder::new(1).citation_penalty(f64::NAN).build())
                .build(),
        ];
        let mut buffer = Vec::new();

        let result = write_evidence_index_to(&mut buffer, &EvidenceIndex::from_details(&details));

        assert!(matches!(
            result,
            Err(ReportError::Serialization { ref message })
                if message.contains("('c', 'd')") && message.contains("'hits[0].citation_penalty'")
        ));
        assert!(buffer.is_empty());
    }

    #[rstest]
    fn non_finite_statistics_are_not_exported() -> TestResult {
        let details = vec![
            DetailBuilder::new("a", "b")
                .score(f64::NAN)
                .mean_sim(f64::INFINITY)
                .hit(HitBuilder::new(1).sim(0.5).build())
                .build(),
        ];

        let parsed = index_to_value(&details)?;

        assert_eq!(
            parsed
                .get("('a', 'b')")
                .and_then(Value::as_array)
                .map(Vec::len),
            Some(1)
        );
        Ok(())
    }

    #[rstest]
    fn empty_details_write_empty_object() -> TestResult {
        assert_eq!(index_to_value(&[])?, serde_json::json!({}));
        assert!(EvidenceIndex::from_details(&[]).is_empty());
        Ok(())
    }
}

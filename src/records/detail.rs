//! Per-pair match details and the individual hits they carry.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::Pair;

/// Penalty assumed when a hit carries no `citation_penalty`.
pub const DEFAULT_CITATION_PENALTY: f64 = 1.0;

/// One matched-segment correspondence between two documents.
///
/// Deserialization is lenient: absent fields take their default. Optional
/// fields remember whether they were present, so the detail exporters write
/// back exactly what the comparison engine supplied, including an explicit
/// `"adjusted_sim": null`. Fields beyond the ones named here are kept in
/// `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hit {
    /// Segment identifier on the first side.
    pub sid_i: String,
    /// Segment identifier on the second side.
    pub sid_j: String,
    /// Positional index of the segment on the first side.
    pub sent_id_i: u64,
    /// Positional index of the segment on the second side.
    pub sent_id_j: u64,
    /// Excerpt from the first document.
    pub text_i: String,
    /// Excerpt from the second document.
    pub text_j: String,
    /// Raw similarity.
    pub sim: f64,
    /// Similarity after upstream adjustment.
    ///
    /// `None` when the field was absent, `Some(None)` when it was `null`.
    #[serde(
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub adjusted_sim: Option<Option<f64>>,
    /// Multiplier applied when the match looks properly cited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation_penalty: Option<f64>,
    /// Upstream fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Hit {
    /// Returns the similarity a reader should see: the adjusted value when
    /// one is set, the raw value otherwise.
    #[must_use]
    pub fn effective_sim(&self) -> f64 {
        self.adjusted_sim.flatten().unwrap_or(self.sim)
    }

    /// Returns the citation penalty, defaulting to
    /// [`DEFAULT_CITATION_PENALTY`].
    #[must_use]
    pub fn citation_penalty(&self) -> f64 {
        self.citation_penalty.unwrap_or(DEFAULT_CITATION_PENALTY)
    }

    /// Reports whether a citation penalty was applied to this hit.
    #[must_use]
    pub fn is_possible_citation(&self) -> bool {
        self.citation_penalty() < 1.0
    }

    /// Names the first float field holding NaN or an infinity.
    #[must_use]
    pub fn non_finite_field(&self) -> Option<&'static str> {
        [
            ("sim", Some(self.sim)),
            ("adjusted_sim", self.adjusted_sim.flatten()),
            ("citation_penalty", self.citation_penalty),
        ]
        .into_iter()
        .find(|(_, value)| value.is_some_and(|number| !number.is_finite()))
        .map(|(name, _)| name)
    }
}

/// Names the first hit field holding NaN or an infinity as `hits[i].field`.
#[must_use]
pub fn non_finite_hit_field(hits: &[Hit]) -> Option<String> {
    hits.iter().enumerate().find_map(|(index, hit)| {
        hit.non_finite_field()
            .map(|field| format!("hits[{index}].{field}"))
    })
}

/// Marks a field as present even when its value is `null`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(Some)
}

/// Full match details for one compared pair.
///
/// `count` is carried as supplied and is not reconciled with `hits.len()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairDetail {
    /// The compared pair, in upstream order.
    pub pair: Pair,
    /// Number of matched segments reported upstream.
    pub count: u64,
    /// Mean similarity over the matches.
    pub mean_sim: f64,
    /// Aggregate risk score.
    pub score: f64,
    /// Matched segments in caller-determined order.
    pub hits: Vec<Hit>,
    /// Upstream fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PairDetail {
    /// Names the first float field, here or in a hit, holding NaN or an
    /// infinity.
    ///
    /// JSON has no representation for such values, so the detail exporters
    /// refuse records for which this returns `Some`.
    #[must_use]
    pub fn non_finite_field(&self) -> Option<String> {
        [("mean_sim", self.mean_sim), ("score", self.score)]
            .into_iter()
            .find(|(_, value)| !value.is_finite())
            .map(|(name, _)| name.to_owned())
            .or_else(|| non_finite_hit_field(&self.hits))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    fn missing_hit_fields_take_defaults() -> Result<(), serde_json::Error> {
        let hit: Hit = serde_json::from_value(json!({ "sim": 0.8 }))?;

        assert!(hit.sid_i.is_empty());
        assert_eq!(hit.sent_id_j, 0);
        assert_eq!(hit.adjusted_sim, None);
        assert_eq!(hit.citation_penalty, None);
        assert!((hit.citation_penalty() - DEFAULT_CITATION_PENALTY).abs() < f64::EPSILON);
        assert!(!hit.is_possible_citation());
        Ok(())
    }

    #[rstest]
    #[case::raw_only(0.8, None, 0.8)]
    #[case::explicit_null(0.8, Some(None), 0.8)]
    #[case::adjusted(0.8, Some(Some(0.4)), 0.4)]
    #[case::adjusted_zero(0.8, Some(Some(0.0)), 0.0)]
    fn effective_sim_prefers_adjusted(
        #[case] sim: f64,
        #[case] adjusted_sim: Option<Option<f64>>,
        #[case] expected: f64,
    ) {
        let hit = Hit {
            sim,
            adjusted_sim,
            ..Hit::default()
        };

        assert!((hit.effective_sim() - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case(1.0, false)]
    #[case(0.999, true)]
    #[case(0.5, true)]
    fn citation_flag_follows_penalty(#[case] citation_penalty: f64, #[case] expected: bool) {
        let hit = Hit {
            citation_penalty: Some(citation_penalty),
            ..Hit::default()
        };

        assert_eq!(hit.is_possible_citation(), expected);
    }

    #[rstest]
    fn unknown_fields_survive_round_trip() -> Result<(), serde_json::Error> {
        let source = json!({
            "pair": ["a", "b"],
            "count": 1,
            "mean_sim": 0.5,
            "score": 0.4,
            "engine": "tfidf",
            "hits": [{
                "sid_i": "a-1",
                "sid_j": "b-7",
                "sent_id_i": 1,
                "sent_id_j": 7,
                "text_i": "x",
                "text_j": "y",
                "sim": 0.5,
                "citation_penalty": 1.0,
                "window": [3, 4],
            }],
        });

        let detail: PairDetail = serde_json::from_value(source.clone())?;
        assert_eq!(detail.extra.get("engine"), Some(&json!("tfidf")));

        assert_eq!(serde_json::to_value(&detail)?, source);
        Ok(())
    }

    #[rstest]
    #[case::bare(json!({ "sim": 0.5 }))]
    #[case::null_adjusted(json!({ "sim": 0.5, "adjusted_sim": null }))]
    #[case::explicit_penalty(json!({ "sim": 0.5, "adjusted_sim": 0.25, "citation_penalty": 1.0 }))]
    fn optional_fields_are_written_back_as_supplied(
        #[case] source: Value,
    ) -> Result<(), serde_json::Error> {
        let hit: Hit = serde_json::from_value(source.clone())?;

        let written = serde_json::to_value(&hit)?;

        assert_eq!(written.get("adjusted_sim"), source.get("adjusted_sim"));
        assert_eq!(
            written.get("citation_penalty"),
            source.get("citation_penalty")
        );
        Ok(())
    }

    #[rstest]
    #[case::finite(Hit { sim: 0.5, ..Hit::default() }, None)]
    #[case::nan_sim(Hit { sim: f64::NAN, ..Hit::default() }, Some("sim"))]
    #[case::infinite_adjusted(
        Hit { adjusted_sim: Some(Some(f64::INFINITY)), ..Hit::default() },
        Some("adjusted_sim")
    )]
    #[case::null_adjusted(Hit { adjusted_sim: Some(None), ..Hit::default() }, None)]
    #[case::negative_infinite_penalty(
        Hit { citation_penalty: Some(f64::NEG_INFINITY), ..Hit::default() },
        Some("citation_penalty")
    )]
    fn hit_reports_first_non_finite_field(#[case] hit: Hit, #[case] expected: Option<&str>) {
        assert_eq!(hit.non_finite_field(), expected);
    }

    #[rstest]
    fn detail_reports_record_fields_before_hits() {
        let detail = PairDetail {
            score: f64::NAN,
            hits: vec![Hit {
                sim: f64::NAN,
                ..Hit::default()
            }],
            ..PairDetail::default()
        };

        assert_eq!(detail.non_finite_field().as_deref(), Some("score"));
        assert_eq!(
            non_finite_hit_field(&detail.hits).as_deref(),
            Some("hits[0].sim")
        );
    }
}

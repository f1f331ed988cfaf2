//! Progressive reveal of a streamed JSON document.
//!
//! The generation service emits one JSON document as a sequence of text
//! fragments in stable key order. Rather than parsing JSON incrementally,
//! this accumulator appends each fragment to a raw buffer and re-attempts a
//! whole-buffer parse: early fragments start parsing as soon as the
//! document's prefix closes into a syntactically valid value, and every
//! successful parse becomes the new best-known snapshot. A failed parse is
//! the normal state between fragments, never an error.
//!
//! One accumulator is owned by one in-flight generation; it is created when
//! the stream starts and discarded when the stream ends.

use serde_json::Value;

/// Top-level document fields whose first appearance drives a user-facing
/// progress message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    Summary,
    CareerPath,
    GrowthPlan,
}

impl Milestone {
    pub fn status_message(self) -> &'static str {
        match self {
            Milestone::Summary => "Crafting your career summary...",
            Milestone::CareerPath => "Building your 5-10 year career timeline...",
            Milestone::GrowthPlan => "Calculating your Career Readiness Score...",
        }
    }
}

/// Which milestone fields have been observed so far. Flags only ever turn
/// on; the set never shrinks across successive successful parses.
#[derive(Debug, Default)]
struct MilestoneSet {
    summary: bool,
    career_path: bool,
    growth_plan: bool,
}

impl MilestoneSet {
    fn observe(&mut self, doc: &Value) -> Vec<Milestone> {
        let mut reached = Vec::new();

        if !self.summary
            && doc
                .get("summary")
                .and_then(Value::as_str)
                .is_some_and(|s| !s.is_empty())
        {
            self.summary = true;
            reached.push(Milestone::Summary);
        }

        if !self.career_path
            && doc
                .get("careerPath")
                .and_then(Value::as_array)
                .is_some_and(|steps| !steps.is_empty())
        {
            self.career_path = true;
            reached.push(Milestone::CareerPath);
        }

        if !self.growth_plan && doc.get("growthPlan").is_some_and(|v| !v.is_null()) {
            self.growth_plan = true;
            reached.push(Milestone::GrowthPlan);
        }

        reached
    }
}

/// A successful intermediate parse: the new best-known value plus any
/// milestone fields that first appeared in it.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub value: Value,
    pub newly_reached: Vec<Milestone>,
}

#[derive(Debug, Default)]
pub struct RevealAccumulator {
    buffer: String,
    best: Option<Value>,
    milestones: MilestoneSet,
}

impl RevealAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the buffer, best-known value, and milestone set for a fresh
    /// stream.
    pub fn start(&mut self) {
        *self = Self::default();
    }

    /// Appends `fragment` and attempts to parse the entire buffer.
    ///
    /// Returns `None` when the buffer is not yet a complete JSON document —
    /// the common case for every fragment except the last. That is not an
    /// error and must not be surfaced or logged as one.
    pub fn ingest(&mut self, fragment: &str) -> Option<Snapshot> {
        self.buffer.push_str(fragment);
        let parsed: Value = serde_json::from_str(&self.buffer).ok()?;
        let newly_reached = self.milestones.observe(&parsed);
        self.best = Some(parsed.clone());
        Some(Snapshot {
            value: parsed,
            newly_reached,
        })
    }

    /// The most recent successfully parsed snapshot, if any fragment sequence
    /// so far has formed a complete document.
    pub fn best_known(&self) -> Option<&Value> {
        self.best.as_ref()
    }

    /// One last parse of the final buffer contents. An error here is the
    /// terminal failure of the stream; the caller substitutes its fallback
    /// result. Typed validation of required fields happens in the caller,
    /// on this terminal value only.
    pub fn finish(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_incomplete_then_complete() {
        // Scenario A: first fragment leaves the buffer unparseable, second
        // closes the document.
        let mut acc = RevealAccumulator::new();
        assert!(acc.ingest("{\"summary\":\"ok\"").is_none());
        assert!(acc.best_known().is_none());

        let snapshot = acc.ingest(",\"careerPath\":[]}").unwrap();
        assert_eq!(snapshot.value, json!({"summary": "ok", "careerPath": []}));
        assert_eq!(acc.best_known(), Some(&snapshot.value));
    }

    #[test]
    fn test_single_fragment_finish() {
        // Scenario B: one complete fragment, then the stream ends.
        let mut acc = RevealAccumulator::new();
        acc.ingest("{\"a\":1}");
        assert_eq!(acc.finish().unwrap(), json!({"a": 1}));
    }

    #[test]
    fn test_non_json_is_terminal_failure() {
        // Scenario C.
        let mut acc = RevealAccumulator::new();
        assert!(acc.ingest("not json").is_none());
        assert!(acc.finish().is_err());
    }

    #[test]
    fn test_empty_stream_is_terminal_failure() {
        // Scenario D: zero fragments.
        let acc = RevealAccumulator::new();
        assert!(acc.finish().is_err());
    }

    #[test]
    fn test_finish_equals_direct_parse_of_concatenation() {
        let parts = ["{\"summary\":\"s\",", "\"careerPath\":[{\"a\"", ":1}]}"];
        let mut acc = RevealAccumulator::new();
        for part in parts {
            acc.ingest(part);
        }
        let direct: Value = serde_json::from_str(&parts.concat()).unwrap();
        assert_eq!(acc.finish().unwrap(), direct);
    }

    #[test]
    fn test_empty_fragment_is_a_no_op() {
        let mut acc = RevealAccumulator::new();
        acc.ingest("{\"summary\":\"ok\",\"careerPath\":[]}");
        let before = acc.best_known().cloned();

        let snapshot = acc.ingest("");
        assert_eq!(acc.best_known().cloned(), before);
        // Re-parsing an already-complete buffer reports no new milestones.
        assert!(snapshot.unwrap().newly_reached.is_empty());

        // On an empty buffer it is equally harmless.
        let mut fresh = RevealAccumulator::new();
        assert!(fresh.ingest("").is_none());
    }

    #[test]
    fn test_failed_parse_keeps_best_known() {
        let mut acc = RevealAccumulator::new();
        acc.ingest("{\"summary\":\"ok\",\"careerPath\":[]}");
        let best = acc.best_known().cloned().unwrap();

        // The buffer grows past the closed document and stops parsing; the
        // best-known value must stay at the last successful parse.
        assert!(acc.ingest("garbage").is_none());
        assert_eq!(acc.best_known(), Some(&best));
    }

    #[test]
    fn test_milestones_fire_once_in_arrival_order() {
        let mut acc = RevealAccumulator::new();

        let first = acc.ingest("{\"summary\":\"ok\",\"careerPath\":[]}").unwrap();
        assert_eq!(first.newly_reached, vec![Milestone::Summary]);

        acc.start();
        let full = acc
            .ingest(
                "{\"summary\":\"ok\",\"careerPath\":[{\"title\":\"SDE\"}],\"growthPlan\":{\"readinessScore\":50}}",
            )
            .unwrap();
        assert_eq!(
            full.newly_reached,
            vec![
                Milestone::Summary,
                Milestone::CareerPath,
                Milestone::GrowthPlan
            ]
        );
    }

    #[test]
    fn test_milestone_set_never_shrinks() {
        let mut set = MilestoneSet::default();
        let reached = set.observe(&json!({"summary": "s", "careerPath": [1]}));
        assert_eq!(reached.len(), 2);

        // A later snapshot without those fields must not re-arm them.
        assert!(set.observe(&json!({})).is_empty());
        assert!(set.observe(&json!({"summary": "s"})).is_empty());

        // And growthPlan still fires exactly once.
        let late = set.observe(&json!({"growthPlan": {"readinessScore": 10}}));
        assert_eq!(late, vec![Milestone::GrowthPlan]);
        assert!(set.observe(&json!({"growthPlan": {}})).is_empty());
    }

    #[test]
    fn test_empty_summary_is_not_a_milestone() {
        let mut set = MilestoneSet::default();
        assert!(set.observe(&json!({"summary": ""})).is_empty());
        assert!(set.observe(&json!({"careerPath": []})).is_empty());
        assert!(set.observe(&json!({"growthPlan": null})).is_empty());
    }

    #[test]
    fn test_start_resets_state() {
        let mut acc = RevealAccumulator::new();
        acc.ingest("{\"summary\":\"ok\",\"careerPath\":[]}");
        assert!(acc.best_known().is_some());

        acc.start();
        assert!(acc.best_known().is_none());
        assert!(acc.finish().is_err());

        // Milestones re-arm after a reset.
        let snapshot = acc.ingest("{\"summary\":\"again\",\"careerPath\":[]}").unwrap();
        assert_eq!(snapshot.newly_reached, vec![Milestone::Summary]);
    }

    #[test]
    fn test_best_value_replaced_wholesale() {
        let mut acc = RevealAccumulator::new();
        acc.start();
        acc.ingest("{\"summary\":\"short\"}");
        let first = acc.best_known().cloned().unwrap();
        assert_eq!(first, json!({"summary": "short"}));

        // Growing the buffer invalidates it until the document closes again;
        // once it does, the snapshot is a fresh parse, not a field merge.
        acc.start();
        acc.ingest("{\"summary\":\"short\",\"careerPath\"");
        assert_eq!(acc.best_known(), None);
        let snapshot = acc.ingest(":[]}").unwrap();
        assert_eq!(snapshot.value, json!({"summary": "short", "careerPath": []}));
    }
}

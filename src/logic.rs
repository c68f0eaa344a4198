//! Scoring core: slate validation, aggregation, quadrant classification and
//! chart placement.
//!
//! Everything here is a pure function over caller-supplied data. The session
//! coordinator in `state` and both transports call into this module; none of
//! them keep a validity flag of their own.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::domain::{AxisDeltas, LearningStyle, PlotPoint, ResponseSet, ScoreResult, Slate, Totals, MAX_RANK};
use crate::error::{Error, Result};
use crate::seeds::QUESTION_COUNT;

/// Feedback level for one question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlateStatus {
  /// Nothing assigned yet.
  Unanswered,
  /// Some ranks assigned, no conflict so far.
  Incomplete,
  /// A rank is used twice, or lies outside 1-4.
  Conflicting,
  /// A full permutation of 1-4.
  Complete,
}

pub fn slate_status(slate: &Slate) -> SlateStatus {
  let mut seen = [false; MAX_RANK as usize + 1];
  let mut zeros = 0;
  for v in slate.values() {
    match v {
      0 => zeros += 1,
      1..=MAX_RANK => {
        if seen[v as usize] {
          return SlateStatus::Conflicting;
        }
        seen[v as usize] = true;
      }
      _ => return SlateStatus::Conflicting,
    }
  }
  match zeros {
    0 => SlateStatus::Complete,
    4 => SlateStatus::Unanswered,
    _ => SlateStatus::Incomplete,
  }
}

pub fn is_slate_valid(slate: &Slate) -> bool {
  slate_status(slate) == SlateStatus::Complete
}

/// True iff every slate holds a full ranking.
pub fn is_complete(responses: &ResponseSet) -> bool {
  responses.slates().iter().all(is_slate_valid)
}

/// Number of fully ranked questions (the progress counter).
pub fn completed_count(responses: &ResponseSet) -> usize {
  responses.slates().iter().filter(|s| is_slate_valid(s)).count()
}

/// Indices of the slates that are not yet valid.
pub fn invalid_indices(responses: &ResponseSet) -> Vec<usize> {
  responses
    .slates()
    .iter()
    .enumerate()
    .filter(|(_, s)| !is_slate_valid(s))
    .map(|(i, _)| i)
    .collect()
}

/// Fresh, all-zero response set for the built-in questionnaire.
pub fn reset() -> ResponseSet {
  ResponseSet::blank(QUESTION_COUNT)
}

pub fn totals(responses: &ResponseSet) -> Totals {
  responses.slates().iter().fold(Totals::default(), |acc, s| Totals {
    ce: acc.ce + u32::from(s.ce),
    ro: acc.ro + u32::from(s.ro),
    ac: acc.ac + u32::from(s.ac),
    ae: acc.ae + u32::from(s.ae),
  })
}

pub fn axis_deltas(t: &Totals) -> AxisDeltas {
  AxisDeltas {
    x: t.ae as i32 - t.ro as i32,
    y: t.ac as i32 - t.ce as i32,
  }
}

/// Zero on either axis counts as the non-negative side.
pub fn classify(axes: AxisDeltas) -> LearningStyle {
  match (axes.x >= 0, axes.y >= 0) {
    (true, true) => LearningStyle::Converging,
    (true, false) => LearningStyle::Accommodating,
    (false, true) => LearningStyle::Assimilating,
    (false, false) => LearningStyle::Diverging,
  }
}

/// Map axis deltas onto a 0-100 chart for `question_count` questions.
///
/// The largest reachable delta is `3n` (all 4s on one side, all 1s on the
/// other), so the point never leaves the chart; the clamp only matters for
/// inputs built outside `score`.
pub fn plot_point(axes: AxisDeltas, question_count: usize) -> PlotPoint {
  let max = (3 * question_count).max(1) as f64;
  let x = 50.0 + (axes.x as f64 / max) * 50.0;
  let y = 50.0 - (axes.y as f64 / max) * 50.0;
  PlotPoint { x: x.clamp(0.0, 100.0), y: y.clamp(0.0, 100.0) }
}

/// Score a fully ranked response set.
///
/// Fails with `Error::IncompleteResponses` instead of classifying partial
/// data.
#[instrument(level = "debug", skip(responses), fields(questions = responses.len()))]
pub fn score(responses: &ResponseSet) -> Result<ScoreResult> {
  if responses.is_empty() {
    return Err(Error::EmptyResponseSet);
  }
  let invalid = invalid_indices(responses);
  if !invalid.is_empty() {
    return Err(Error::IncompleteResponses { invalid });
  }

  let totals = totals(responses);
  let axes = axis_deltas(&totals);
  let style = classify(axes);
  let plot = plot_point(axes, responses.len());
  debug!(target: "scoring", ?totals, x = axes.x, y = axes.y, %style, "Scored response set");
  Ok(ScoreResult { totals, axes, style, plot })
}

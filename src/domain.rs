//! Domain models: category tags, questions, answer slates, response sets and
//! the scoring result types.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Highest rank a respondent can assign to a tag within one question.
pub const MAX_RANK: u8 = 4;

/// The four experiential-learning modes each question offers one slot for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
  /// Concrete Experience
  CE,
  /// Reflective Observation
  RO,
  /// Abstract Conceptualization
  AC,
  /// Active Experimentation
  AE,
}

impl Tag {
  /// Display order used by the questionnaire.
  pub const ALL: [Tag; 4] = [Tag::CE, Tag::RO, Tag::AC, Tag::AE];

  pub fn code(self) -> &'static str {
    match self {
      Tag::CE => "CE",
      Tag::RO => "RO",
      Tag::AC => "AC",
      Tag::AE => "AE",
    }
  }

  /// Korean label shown next to the per-tag totals.
  pub fn label(self) -> &'static str {
    match self {
      Tag::CE => "구체적 경험",
      Tag::RO => "반성적 관찰",
      Tag::AC => "추상적 개념화",
      Tag::AE => "능동적 실험",
    }
  }
}

impl std::fmt::Display for Tag {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.code())
  }
}

/// Option texts of one question, one per tag.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Options {
  pub ce: &'static str,
  pub ro: &'static str,
  pub ac: &'static str,
  pub ae: &'static str,
}

/// One questionnaire item. Built into the binary, never mutated.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Question {
  pub id: u8,
  pub question: &'static str,
  pub options: Options,
}

/// Ranks assigned to the four tags of a single question. `0` means unanswered.
///
/// Duplicates are representable: reassigning one tag never touches the others,
/// so conflicts are left for the validator to flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slate {
  #[serde(rename = "CE", default)] pub ce: u8,
  #[serde(rename = "RO", default)] pub ro: u8,
  #[serde(rename = "AC", default)] pub ac: u8,
  #[serde(rename = "AE", default)] pub ae: u8,
}

impl Slate {
  pub fn new(ce: u8, ro: u8, ac: u8, ae: u8) -> Self {
    Self { ce, ro, ac, ae }
  }

  pub fn get(&self, tag: Tag) -> u8 {
    match tag {
      Tag::CE => self.ce,
      Tag::RO => self.ro,
      Tag::AC => self.ac,
      Tag::AE => self.ae,
    }
  }

  pub fn set(&mut self, tag: Tag, value: u8) {
    match tag {
      Tag::CE => self.ce = value,
      Tag::RO => self.ro = value,
      Tag::AC => self.ac = value,
      Tag::AE => self.ae = value,
    }
  }

  /// Values in `Tag::ALL` order.
  pub fn values(&self) -> [u8; 4] {
    [self.ce, self.ro, self.ac, self.ae]
  }

  pub fn is_blank(&self) -> bool {
    self.values().iter().all(|v| *v == 0)
  }
}

/// One slate per question, index-aligned with the questionnaire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet {
  slates: Vec<Slate>,
}

impl ResponseSet {
  /// All-zero set with `len` slates.
  pub fn blank(len: usize) -> Self {
    Self { slates: vec![Slate::default(); len] }
  }

  pub fn from_slates(slates: Vec<Slate>) -> Self {
    Self { slates }
  }

  pub fn slates(&self) -> &[Slate] {
    &self.slates
  }

  pub fn len(&self) -> usize {
    self.slates.len()
  }

  pub fn is_empty(&self) -> bool {
    self.slates.is_empty()
  }

  /// Overwrite one slot. Other tags of the same question keep their ranks.
  pub fn record_rank(&mut self, question_index: usize, tag: Tag, value: u8) -> Result<()> {
    if value > MAX_RANK {
      return Err(Error::RankOutOfRange(value));
    }
    let len = self.slates.len();
    let slate = self
      .slates
      .get_mut(question_index)
      .ok_or(Error::QuestionOutOfRange { index: question_index, len })?;
    slate.set(tag, value);
    Ok(())
  }

  /// Zero every slate, keeping the length.
  pub fn reset(&mut self) {
    self.slates.iter_mut().for_each(|s| *s = Slate::default());
  }
}

/// Sum of each tag's rank over all questions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
  #[serde(rename = "CE")] pub ce: u32,
  #[serde(rename = "RO")] pub ro: u32,
  #[serde(rename = "AC")] pub ac: u32,
  #[serde(rename = "AE")] pub ae: u32,
}

/// `x = AE - RO` (doing vs watching), `y = AC - CE` (thinking vs feeling).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisDeltas {
  pub x: i32,
  pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LearningStyle {
  Converging,
  Accommodating,
  Assimilating,
  Diverging,
}

impl LearningStyle {
  pub const ALL: [LearningStyle; 4] = [
    LearningStyle::Accommodating,
    LearningStyle::Diverging,
    LearningStyle::Converging,
    LearningStyle::Assimilating,
  ];
}

impl std::fmt::Display for LearningStyle {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let s = match self {
      LearningStyle::Converging => "Converging",
      LearningStyle::Accommodating => "Accommodating",
      LearningStyle::Assimilating => "Assimilating",
      LearningStyle::Diverging => "Diverging",
    };
    f.write_str(s)
  }
}

/// Position on the style chart, in percent of its width/height.
/// `y` grows downwards, so a positive `AxisDeltas::y` plots above the middle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
  pub x: f64,
  pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
  pub totals: Totals,
  pub axes: AxisDeltas,
  pub style: LearningStyle,
  pub plot: PlotPoint,
}

/// Static narrative shown for a classified style.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDescription {
  pub title: &'static str,
  pub korean_title: &'static str,
  pub description: &'static str,
  pub characteristics: &'static [&'static str],
}

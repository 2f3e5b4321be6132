use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::worksheet_engine::error::{GenerationError, ValidationError};

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyTier {
    pub const ALL: [DifficultyTier; 3] = [
        DifficultyTier::Beginner,
        DifficultyTier::Intermediate,
        DifficultyTier::Advanced,
    ];

    /// Wire identifier (`"beginner"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            DifficultyTier::Beginner     => "beginner",
            DifficultyTier::Intermediate => "intermediate",
            DifficultyTier::Advanced     => "advanced",
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyTier::Beginner     => write!(f, "Beginner"),
            DifficultyTier::Intermediate => write!(f, "Intermediate"),
            DifficultyTier::Advanced     => write!(f, "Advanced"),
        }
    }
}

impl FromStr for DifficultyTier {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner"     => Ok(DifficultyTier::Beginner),
            "intermediate" => Ok(DifficultyTier::Intermediate),
            "advanced"     => Ok(DifficultyTier::Advanced),
            _ => Err(GenerationError::UnsupportedDifficulty(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Topic / skill identifiers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    NumberSense,
    Addition,
    Subtraction,
    TimeTelling,
    MoneyCounting,
    PlaceValue,
    WordProblems,
    Shapes,
    SkipCounting,
    Fractions,
    Measurement,
    Patterns,
    Graphing,
    OddEven,
}

impl Category {
    /// All fourteen topics in catalog order.
    pub const ALL: [Category; 14] = [
        Category::NumberSense,
        Category::Addition,
        Category::Subtraction,
        Category::TimeTelling,
        Category::MoneyCounting,
        Category::PlaceValue,
        Category::WordProblems,
        Category::Shapes,
        Category::SkipCounting,
        Category::Fractions,
        Category::Measurement,
        Category::Patterns,
        Category::Graphing,
        Category::OddEven,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::NumberSense   => "number_sense",
            Category::Addition      => "addition",
            Category::Subtraction   => "subtraction",
            Category::TimeTelling   => "time_telling",
            Category::MoneyCounting => "money_counting",
            Category::PlaceValue    => "place_value",
            Category::WordProblems  => "word_problems",
            Category::Shapes        => "shapes",
            Category::SkipCounting  => "skip_counting",
            Category::Fractions     => "fractions",
            Category::Measurement   => "measurement",
            Category::Patterns      => "patterns",
            Category::Graphing      => "graphing",
            Category::OddEven       => "odd_even",
        }
    }

    /// Every subcategory owned by this topic, in catalog order.
    ///
    /// Spiral worksheets expand a bare topic in exactly this order.
    pub fn subcategories(self) -> &'static [Subcategory] {
        use Subcategory::*;
        match self {
            Category::NumberSense   => &[Comparison, Ordering, BeforeAfter, MissingNumbers],
            Category::Addition      => &[AddZero, AddOne, SameNumberAddition, NearDoubles, AddRandomNumbers],
            Category::Subtraction   => &[
                SubtractZero, SubtractOne, SameNumberSubtraction,
                NearDoublesSubtraction, SubtractRandomNumbers,
            ],
            Category::TimeTelling   => &[WholeHours, HalfHours, QuarterHours, FiveMinuteIncrements],
            Category::MoneyCounting => &[IdentifyingCoins, CountingPenniesNickels, MixedCoins, MakingChange],
            Category::PlaceValue    => &[OnesTens, OnesTensHundreds, ExpandedForm],
            Category::WordProblems  => &[OneStep, TwoStep, MultiStep],
            Category::Shapes        => &[Basic2d3d, EdgesFacesVertices],
            Category::SkipCounting  => &[ByOnesTwos, ByFivesTens, ByHundreds],
            Category::Fractions     => &[HalvesWholes, ThirdsFourths, ComparingFractions],
            Category::Measurement   => &[ComparingObjects, NonStandardUnits, RulersInchesCm],
            Category::Patterns      => &[AbabPatterns, ExtendingPatterns, CreatingPatterns],
            Category::Graphing      => &[Pictographs, BarGraphs, AnalyzingData],
            Category::OddEven       => &[Identifying, Sorting, ProblemSolving],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::NumberSense   => "Number Sense",
            Category::Addition      => "Addition",
            Category::Subtraction   => "Subtraction",
            Category::TimeTelling   => "Time Telling",
            Category::MoneyCounting => "Money Counting",
            Category::PlaceValue    => "Place Value",
            Category::WordProblems  => "Word Problems",
            Category::Shapes        => "Shapes",
            Category::SkipCounting  => "Skip Counting",
            Category::Fractions     => "Fractions",
            Category::Measurement   => "Measurement",
            Category::Patterns      => "Patterns & Algebra",
            Category::Graphing      => "Graphing & Data",
            Category::OddEven       => "Odd & Even Numbers",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Category {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| GenerationError::UnknownConcept(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subcategory {
    // number_sense
    Comparison,
    Ordering,
    BeforeAfter,
    MissingNumbers,
    // addition
    AddZero,
    AddOne,
    SameNumberAddition,
    NearDoubles,
    AddRandomNumbers,
    // subtraction
    SubtractZero,
    SubtractOne,
    SameNumberSubtraction,
    NearDoublesSubtraction,
    SubtractRandomNumbers,
    // time_telling
    WholeHours,
    HalfHours,
    QuarterHours,
    FiveMinuteIncrements,
    // money_counting
    IdentifyingCoins,
    CountingPenniesNickels,
    MixedCoins,
    MakingChange,
    // place_value
    OnesTens,
    OnesTensHundreds,
    ExpandedForm,
    // word_problems
    OneStep,
    TwoStep,
    MultiStep,
    // shapes
    #[serde(rename = "basic_2d_3d")]
    Basic2d3d,
    EdgesFacesVertices,
    // skip_counting
    ByOnesTwos,
    ByFivesTens,
    ByHundreds,
    // fractions
    HalvesWholes,
    ThirdsFourths,
    ComparingFractions,
    // measurement
    ComparingObjects,
    NonStandardUnits,
    RulersInchesCm,
    // patterns
    AbabPatterns,
    ExtendingPatterns,
    CreatingPatterns,
    // graphing
    Pictographs,
    BarGraphs,
    AnalyzingData,
    // odd_even
    Identifying,
    Sorting,
    ProblemSolving,
}

impl Subcategory {
    pub fn as_str(self) -> &'static str {
        use Subcategory::*;
        match self {
            Comparison             => "comparison",
            Ordering               => "ordering",
            BeforeAfter            => "before_after",
            MissingNumbers         => "missing_numbers",
            AddZero                => "add_zero",
            AddOne                 => "add_one",
            SameNumberAddition     => "same_number_addition",
            NearDoubles            => "near_doubles",
            AddRandomNumbers       => "add_random_numbers",
            SubtractZero           => "subtract_zero",
            SubtractOne            => "subtract_one",
            SameNumberSubtraction  => "same_number_subtraction",
            NearDoublesSubtraction => "near_doubles_subtraction",
            SubtractRandomNumbers  => "subtract_random_numbers",
            WholeHours             => "whole_hours",
            HalfHours              => "half_hours",
            QuarterHours           => "quarter_hours",
            FiveMinuteIncrements   => "five_minute_increments",
            IdentifyingCoins       => "identifying_coins",
            CountingPenniesNickels => "counting_pennies_nickels",
            MixedCoins             => "mixed_coins",
            MakingChange           => "making_change",
            OnesTens               => "ones_tens",
            OnesTensHundreds       => "ones_tens_hundreds",
            ExpandedForm           => "expanded_form",
            OneStep                => "one_step",
            TwoStep                => "two_step",
            MultiStep              => "multi_step",
            Basic2d3d              => "basic_2d_3d",
            EdgesFacesVertices     => "edges_faces_vertices",
            ByOnesTwos             => "by_ones_twos",
            ByFivesTens            => "by_fives_tens",
            ByHundreds             => "by_hundreds",
            HalvesWholes           => "halves_wholes",
            ThirdsFourths          => "thirds_fourths",
            ComparingFractions     => "comparing_fractions",
            ComparingObjects       => "comparing_objects",
            NonStandardUnits       => "non_standard_units",
            RulersInchesCm         => "rulers_inches_cm",
            AbabPatterns           => "abab_patterns",
            ExtendingPatterns      => "extending_patterns",
            CreatingPatterns       => "creating_patterns",
            Pictographs            => "pictographs",
            BarGraphs              => "bar_graphs",
            AnalyzingData          => "analyzing_data",
            Identifying            => "identifying",
            Sorting                => "sorting",
            ProblemSolving         => "problem_solving",
        }
    }

    /// Reverse lookup: the single topic that owns this subcategory.
    pub fn category(self) -> Category {
        use Subcategory::*;
        match self {
            Comparison | Ordering | BeforeAfter | MissingNumbers => Category::NumberSense,
            AddZero | AddOne | SameNumberAddition | NearDoubles | AddRandomNumbers => Category::Addition,
            SubtractZero | SubtractOne | SameNumberSubtraction | NearDoublesSubtraction
            | SubtractRandomNumbers => Category::Subtraction,
            WholeHours | HalfHours | QuarterHours | FiveMinuteIncrements => Category::TimeTelling,
            IdentifyingCoins | CountingPenniesNickels | MixedCoins | MakingChange => Category::MoneyCounting,
            OnesTens | OnesTensHundreds | ExpandedForm => Category::PlaceValue,
            OneStep | TwoStep | MultiStep => Category::WordProblems,
            Basic2d3d | EdgesFacesVertices => Category::Shapes,
            ByOnesTwos | ByFivesTens | ByHundreds => Category::SkipCounting,
            HalvesWholes | ThirdsFourths | ComparingFractions => Category::Fractions,
            ComparingObjects | NonStandardUnits | RulersInchesCm => Category::Measurement,
            AbabPatterns | ExtendingPatterns | CreatingPatterns => Category::Patterns,
            Pictographs | BarGraphs | AnalyzingData => Category::Graphing,
            Identifying | Sorting | ProblemSolving => Category::OddEven,
        }
    }

    /// Every subcategory across all topics.
    pub fn all() -> impl Iterator<Item = Subcategory> {
        Category::ALL.into_iter().flat_map(|c| c.subcategories().iter().copied())
    }
}

impl fmt::Display for Subcategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subcategory {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subcategory::all()
            .find(|sub| sub.as_str() == s)
            .ok_or_else(|| GenerationError::UnknownConcept(s.to_string()))
    }
}

/// A resolved entry of a worksheet's `concepts` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Concept {
    /// A bare topic such as `"addition"`.
    Topic(Category),
    /// One skill such as `"add_zero"`.
    Skill(Subcategory),
}

// ---------------------------------------------------------------------------
// Problem record
// ---------------------------------------------------------------------------

/// Layout hint for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayType {
    Vertical,
    Horizontal,
    List,
    NumberLine,
    Sequence,
    Clock,
    Image,
    Coins,
    Text,
    PlaceValueBlocks,
    Shape,
    Fraction,
    Comparison,
    Measurement,
    Ruler,
    Pattern,
    NumberPattern,
    NumberPatternGaps,
    Pictograph,
    BarGraph,
}

/// The expected answer. Most problems answer with text; gap-filling patterns
/// answer with the removed values in sequence order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Text(String),
    Values(Vec<i64>),
}

impl Answer {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Answer::Text(s) => Some(s),
            Answer::Values(_) => None,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Text(s) => f.write_str(s),
            Answer::Values(v) => f.write_str(&join(v)),
        }
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Answer::Text(s)
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Answer::Text(s.to_string())
    }
}

/// Comma-join any displayable values (`"3, 5, 8"`).
pub fn join<T: fmt::Display>(values: &[T]) -> String {
    values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
}

impl Operator {
    pub fn apply(self, a: u32, b: u32) -> i64 {
        match self {
            Operator::Plus  => a as i64 + b as i64,
            Operator::Minus => a as i64 - b as i64,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Plus  => "+",
            Operator::Minus => "-",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeforeAfter {
    Before,
    After,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coin {
    Penny,
    Nickel,
    Dime,
    Quarter,
}

impl Coin {
    pub const ALL: [Coin; 4] = [Coin::Penny, Coin::Nickel, Coin::Dime, Coin::Quarter];

    /// Value in cents.
    pub fn cents(self) -> u32 {
        match self {
            Coin::Penny   => 1,
            Coin::Nickel  => 5,
            Coin::Dime    => 10,
            Coin::Quarter => 25,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Coin::Penny   => "penny",
            Coin::Nickel  => "nickel",
            Coin::Dime    => "dime",
            Coin::Quarter => "quarter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Place {
    Ones,
    Tens,
    Hundreds,
}

impl Place {
    pub fn digit_of(self, number: u32) -> u32 {
        match self {
            Place::Ones     => number % 10,
            Place::Tens     => (number / 10) % 10,
            Place::Hundreds => (number / 100) % 10,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Place::Ones     => "ones",
            Place::Tens     => "tens",
            Place::Hundreds => "hundreds",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpandedDirection {
    ToExpanded,
    ToStandard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeDimension {
    #[serde(rename = "2d")]
    Flat,
    #[serde(rename = "3d")]
    Solid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolidProperty {
    Faces,
    Edges,
    Vertices,
}

impl SolidProperty {
    pub fn name(self) -> &'static str {
        match self {
            SolidProperty::Faces    => "faces",
            SolidProperty::Edges    => "edges",
            SolidProperty::Vertices => "vertices",
        }
    }
}

/// Countable features of a named shape. Flat shapes carry `sides`, solids carry
/// `faces` and `edges`; both carry `vertices`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sides: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faces: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edges: Option<u32>,
    pub vertices: u32,
}

impl ShapeProperties {
    pub fn count(&self, property: SolidProperty) -> Option<u32> {
        match property {
            SolidProperty::Faces    => self.faces,
            SolidProperty::Edges    => self.edges,
            SolidProperty::Vertices => Some(self.vertices),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fraction {
    pub numerator: u32,
    pub denominator: u32,
}

impl Fraction {
    pub fn new(numerator: u32, denominator: u32) -> Self {
        Fraction { numerator, denominator }
    }

    /// Exact comparison by cross-multiplication.
    pub fn compare(self, other: Fraction) -> std::cmp::Ordering {
        (self.numerator as u64 * other.denominator as u64)
            .cmp(&(other.numerator as u64 * self.denominator as u64))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureProperty {
    Length,
    Height,
    Size,
    Weight,
}

impl MeasureProperty {
    pub fn comparative(self) -> &'static str {
        match self {
            MeasureProperty::Length => "longer",
            MeasureProperty::Height => "taller",
            MeasureProperty::Size   => "bigger",
            MeasureProperty::Weight => "heavier",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Inches,
    Centimeters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternElement {
    Shapes,
    Colors,
    Letters,
    Numbers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternOp {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
}

impl PatternOp {
    pub fn apply(self, value: i64, step: i64) -> i64 {
        match self {
            PatternOp::Add      => value + step,
            PatternOp::Subtract => value - step,
            PatternOp::Multiply => value * step,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphQuestion {
    ReadValue,
    MaxValue,
    MinValue,
    Difference,
    Total,
    Comparison,
    MoreThan,
    LessThan,
    Average,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    pub fn of(n: u32) -> Parity {
        if n % 2 == 0 { Parity::Even } else { Parity::Odd }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Odd  => write!(f, "odd"),
            Parity::Even => write!(f, "even"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParityQuestion {
    NextEven,
    NextOdd,
    SumProperty,
    ProductProperty,
}

/// Topic-specific fields of a problem, flattened into the problem record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "body", rename_all = "snake_case")]
pub enum ProblemBody {
    Arithmetic { first_number: u32, second_number: u32, operator: Operator },
    Comparison { first_number: u32, second_number: u32 },
    Ordering { numbers: Vec<u32> },
    BeforeAfter { number: u32, question_type: BeforeAfter },
    /// Arithmetic run with one `None` blank at `blank_index`.
    Sequence { sequence: Vec<Option<i64>>, step: i64, blank_index: usize },
    Clock { hour: u8, minute: u8 },
    Coin { coin_type: Coin },
    CoinCount { coin_type: Coin, count: u32, total_value: u32 },
    CoinMix { coins: Vec<Coin>, total_value: u32 },
    Change { cost: u32, payment: u32, change: u32 },
    PlaceValue { number: u32, place: Place },
    ExpandedForm { number: u32, expanded_form: String, question: String, direction: ExpandedDirection },
    /// `terms` are the signed quantities of each step; the answer is their sum.
    WordProblem { text: String, terms: Vec<i64> },
    Shape { shape_name: String, shape_type: ShapeDimension, properties: ShapeProperties },
    SolidCount { shape_name: String, shape_type: ShapeDimension, question_type: SolidProperty, properties: ShapeProperties },
    FractionShading { shape: String, fraction: Fraction, shaded_parts: u32, total_parts: u32 },
    FractionComparison { fraction1: Fraction, fraction2: Fraction },
    ObjectComparison { object1: String, object2: String, property: MeasureProperty, larger: String },
    NonStandardMeasure { measuring_object: String, item_to_measure: String, measurement: u32 },
    /// `quarters` counts quarter inches past `whole`; always 0 for centimetres.
    Ruler { unit: LengthUnit, whole: u32, quarters: u8 },
    Pattern { pattern: Vec<String>, element_type: PatternElement },
    NumberPattern { pattern: Vec<i64>, operation: PatternOp, step: i64 },
    PatternGaps { pattern: Vec<Option<i64>>, operation: PatternOp, step: i64, blank_indices: Vec<usize> },
    Graph {
        title: String,
        data: Vec<DataPoint>,
        question: String,
        question_type: GraphQuestion,
        /// Labels the question refers to, in question order.
        focus: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        threshold: Option<u32>,
    },
    Parity { number: u32, is_even: bool, question: String },
    ParitySort { numbers: Vec<u32>, odd_numbers: Vec<u32>, even_numbers: Vec<u32>, question: String },
    ParityReasoning { question: String, question_type: ParityQuestion, numbers: Vec<u32> },
}

/// One generated worksheet problem.
///
/// A problem is self-describing: every value needed to show the question and
/// check the answer is stored on it, so renderers never re-run randomness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub category: Category,
    pub subcategory: Subcategory,
    /// The recipe that produced this problem. Differs from `subcategory` only when
    /// the requested skill is unavailable at the tier and a fallback was drawn.
    #[serde(rename = "type")]
    pub kind: Subcategory,
    pub display_type: DisplayType,
    pub answer: Answer,
    #[serde(flatten)]
    pub body: ProblemBody,
}

// ---------------------------------------------------------------------------
// Worksheet request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorksheetType {
    /// Many skills, one problem each.
    Spiral,
    /// One skill, drilled `question_count` times.
    Fluency,
}

impl WorksheetType {
    pub fn as_str(self) -> &'static str {
        match self {
            WorksheetType::Spiral  => "spiral",
            WorksheetType::Fluency => "fluency",
        }
    }
}

impl fmt::Display for WorksheetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorksheetType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spiral"  => Ok(WorksheetType::Spiral),
            "fluency" => Ok(WorksheetType::Fluency),
            _ => Err(ValidationError::InvalidWorksheetType(s.to_string())),
        }
    }
}

/// Default number of problems on a fluency worksheet.
pub const DEFAULT_QUESTION_COUNT: usize = 15;
/// Largest fluency worksheet accepted unless configured otherwise.
pub const MAX_QUESTION_COUNT: usize = 100;

/// Fluency question-count policy applied during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionLimits {
    pub default_question_count: usize,
    pub max_question_count: usize,
}

impl Default for QuestionLimits {
    fn default() -> Self {
        QuestionLimits {
            default_question_count: DEFAULT_QUESTION_COUNT,
            max_question_count: MAX_QUESTION_COUNT,
        }
    }
}

/// Worksheet request as received from a client; checked by
/// [`WorksheetRequest::validate`] before anything is generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorksheetRequest {
    pub worksheet_type: String,
    pub difficulty: String,
    pub concepts: Vec<String>,
    /// Fluency only; defaults to [`DEFAULT_QUESTION_COUNT`].
    #[serde(default)]
    pub question_count: Option<usize>,
    #[serde(default)]
    pub include_answer_key: bool,
    /// `Some` reproduces the exact worksheet; `None` draws from entropy.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl WorksheetRequest {
    /// Single-skill drill with the default question count.
    pub fn fluency(concept: impl Into<String>, difficulty: DifficultyTier) -> Self {
        WorksheetRequest {
            worksheet_type: WorksheetType::Fluency.as_str().to_string(),
            difficulty: difficulty.as_str().to_string(),
            concepts: vec![concept.into()],
            question_count: None,
            include_answer_key: false,
            rng_seed: None,
        }
    }

    /// Mixed review over the given topics and skills.
    pub fn spiral<S: Into<String>>(concepts: impl IntoIterator<Item = S>, difficulty: DifficultyTier) -> Self {
        WorksheetRequest {
            worksheet_type: WorksheetType::Spiral.as_str().to_string(),
            difficulty: difficulty.as_str().to_string(),
            concepts: concepts.into_iter().map(Into::into).collect(),
            question_count: None,
            include_answer_key: false,
            rng_seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_question_count(mut self, count: usize) -> Self {
        self.question_count = Some(count);
        self
    }

    pub fn with_answer_key(mut self) -> Self {
        self.include_answer_key = true;
        self
    }
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorksheetPlan {
    pub worksheet_type: WorksheetType,
    pub difficulty: DifficultyTier,
    pub concepts: Vec<String>,
    pub question_count: usize,
    pub include_answer_key: bool,
}

/// Generated problems plus the request context the renderer needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worksheet {
    pub worksheet_type: WorksheetType,
    pub difficulty: DifficultyTier,
    pub concepts: Vec<String>,
    pub include_answer_key: bool,
    pub problems: Vec<Problem>,
}

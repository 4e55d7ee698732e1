//! Two-phase confirmation of recognized shapes.
//!
//! Finishing a stroke in [`InkMode::ShapeRecognition`] never commits a shape
//! directly. It returns a [`PendingDecision`] (the propose phase); the host
//! shows it to the user and later hands it back to [`Session::resolve`] (the
//! completion phase). Nothing is added to a [`Page`] until a [`Commit`] is
//! applied to it.

use crate::config::{InkMode, RecognizerConfig, RejectPolicy};
use crate::recognize::{RecognitionResult, Recognizer};
use crate::shape::{Shape, ShapeId};
use crate::types::{Point, Stroke};

/// The single thing a finished gesture adds to a page
#[derive(Debug, Clone, PartialEq)]
pub enum Commit {
    Shape(Shape),
    Ink(Stroke),
    /// A rejected proposal under [`RejectPolicy::Discard`]
    Discarded,
}

/// A proposed shape awaiting the user's verdict
#[derive(Debug, Clone, PartialEq)]
#[must_use = "a pending decision must be resolved or dismissed"]
pub struct PendingDecision {
    shape: Shape,
    stroke: Stroke,
    result: RecognitionResult,
}

impl PendingDecision {
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Lets the host restyle the proposal before accepting it
    pub fn shape_mut(&mut self) -> &mut Shape {
        &mut self.shape
    }

    /// The raw ink the proposal would replace
    pub fn stroke(&self) -> &Stroke {
        &self.stroke
    }

    pub fn result(&self) -> RecognitionResult {
        self.result
    }
}

/// Result of finishing a stroke
#[derive(Debug, Clone, PartialEq)]
pub enum StrokeOutcome {
    /// Nothing to confirm
    Committed(Commit),
    /// A shape was recognized and needs confirmation
    Proposed(PendingDecision),
}

/// Synchronous confirmation, for hosts that can block on the user
pub trait Confirmer {
    /// `true` to accept the proposed shape
    fn confirm(&mut self, shape: &Shape) -> bool;
}

impl<F> Confirmer for F
where
    F: FnMut(&Shape) -> bool,
{
    fn confirm(&mut self, shape: &Shape) -> bool {
        self(shape)
    }
}

/// Routes finished strokes through the recognizer and the confirmation flow
#[derive(Debug, Clone, Copy, Default)]
pub struct Session {
    recognizer: Recognizer,
    reject_policy: RejectPolicy,
}

impl Session {
    pub fn new(config: RecognizerConfig) -> Self {
        Session {
            recognizer: Recognizer::new(config),
            reject_policy: config.reject_policy,
        }
    }

    pub fn recognizer(&self) -> &Recognizer {
        &self.recognizer
    }

    pub fn reject_policy(&self) -> RejectPolicy {
        self.reject_policy
    }

    /// Propose phase. Freehand strokes and unrecognized strokes commit as ink.
    pub fn finish_stroke(&self, stroke: Stroke, mode: InkMode) -> StrokeOutcome {
        if mode == InkMode::Freehand {
            return StrokeOutcome::Committed(Commit::Ink(stroke));
        }
        match self.recognizer.recognize_detailed(stroke.points()) {
            Some(recognition) => StrokeOutcome::Proposed(PendingDecision {
                shape: recognition.shape,
                stroke,
                result: recognition.result,
            }),
            None => StrokeOutcome::Committed(Commit::Ink(stroke)),
        }
    }

    /// Completion phase
    pub fn resolve(&self, pending: PendingDecision, accepted: bool) -> Commit {
        if accepted {
            crate::log::debug!(id = %pending.shape.id(), "proposal accepted");
            return Commit::Shape(pending.shape);
        }
        crate::log::debug!(policy = ?self.reject_policy, "proposal rejected");
        match self.reject_policy {
            RejectPolicy::RecommitInk => Commit::Ink(pending.stroke),
            RejectPolicy::Discard => Commit::Discarded,
        }
    }

    /// The proposal was closed without an answer; treated as a reject
    pub fn dismiss(&self, pending: PendingDecision) -> Commit {
        self.resolve(pending, false)
    }

    /// Both phases in one call
    pub fn finish_stroke_with(
        &self,
        stroke: Stroke,
        mode: InkMode,
        confirmer: &mut impl Confirmer,
    ) -> Commit {
        match self.finish_stroke(stroke, mode) {
            StrokeOutcome::Committed(commit) => commit,
            StrokeOutcome::Proposed(pending) => {
                let accepted = confirmer.confirm(pending.shape());
                self.resolve(pending, accepted)
            }
        }
    }
}

/// Committed content of one page, in drawing order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    shapes: Vec<Shape>,
    ink: Vec<Stroke>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn ink(&self) -> &[Stroke] {
        &self.ink
    }

    pub fn apply(&mut self, commit: Commit) {
        match commit {
            Commit::Shape(shape) => self.shapes.push(shape),
            Commit::Ink(stroke) => self.ink.push(stroke),
            Commit::Discarded => {}
        }
    }

    /// Topmost (most recently committed) shape under `point`
    pub fn shape_at(&self, point: Point) -> Option<&Shape> {
        self.shapes.iter().rev().find(|s| s.contains(point))
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Remove every shape under `point`, returning them in drawing order
    pub fn erase_at(&mut self, point: Point) -> Vec<Shape> {
        let (erased, kept): (Vec<Shape>, Vec<Shape>) = std::mem::take(&mut self.shapes)
            .into_iter()
            .partition(|s| s.contains(point));
        self.shapes = kept;
        erased
    }
}

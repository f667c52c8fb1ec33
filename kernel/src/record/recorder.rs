//! `RecorderV1`: the operation recorder.
//!
//! Arithmetic applied to a recorder appends an ordered log entry instead of
//! computing a numeric result. [`RecorderV1::record`] is the single
//! recording entry point — it validates the exponent contract, draws the
//! sequence number, and appends — and the `std::ops` impls below are sugar
//! over it for the four binary operators, in both operand positions.
//!
//! The entry log is authoritative; the text output
//! ([`RecorderV1::show_history`]) is a derived view rendered by
//! [`crate::render::render_history`].

use crate::record::op::OpKind;
use crate::record::operand::OperandV1;
use crate::record::sequencer::SequencerV1;

/// One recorded operation: `(sequence number, operator, operand)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceEntryV1 {
    /// Sequence number drawn from the recorder's sequencer.
    pub seq: u64,
    /// The operator applied.
    pub op: OpKind,
    /// The other operand of the expression.
    pub operand: OperandV1,
}

/// Typed failure for recording. Fail-closed: nothing is appended and the
/// sequencer is not advanced on the error path.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordError {
    /// Exponentiation was attempted with a non-numeric exponent.
    NonNumericExponent {
        /// The rejected operand.
        operand: OperandV1,
    },
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonNumericExponent { operand } => {
                write!(
                    f,
                    "exponent operand must be numeric, got {} `{operand}`",
                    operand.kind()
                )
            }
        }
    }
}

impl std::error::Error for RecordError {}

/// A stateful value that records arithmetic applied to it.
///
/// Created empty over a caller-owned [`SequencerV1`] handle; every recorded
/// operation appends one [`TraceEntryV1`]. The log only grows. Cloning
/// copies the log but shares the sequencer handle, so a clone keeps drawing
/// from the same sequence.
///
/// The operator impls consume and return the recorder by value, so
/// expressions chain the way they would over an ordinary number:
///
/// ```
/// use mathtrace_kernel::record::recorder::RecorderV1;
/// use mathtrace_kernel::record::sequencer::SequencerV1;
///
/// let recorder = RecorderV1::new(SequencerV1::new());
/// let recorder = recorder + 1 - 2;
/// assert_eq!(recorder.show_history(), "0 add 1\n1 sub 2");
/// ```
#[derive(Debug, Clone)]
pub struct RecorderV1 {
    sequencer: SequencerV1,
    entries: Vec<TraceEntryV1>,
}

impl RecorderV1 {
    /// Create an empty recorder drawing sequence numbers from `sequencer`.
    ///
    /// Pass clones of one sequencer to several recorders to interleave
    /// their entries into a single global order.
    #[must_use]
    pub fn new(sequencer: SequencerV1) -> Self {
        Self {
            sequencer,
            entries: Vec::new(),
        }
    }

    /// Record one operation: validate, draw the sequence number, append.
    ///
    /// Returns `&mut Self` so explicit recording chains like the operator
    /// sugar does. Total for the eight binary operators; for
    /// [`OpKind::Pow`] the operand must be numeric.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::NonNumericExponent`] for `Pow` with a
    /// non-numeric operand. The log and the sequencer are left untouched.
    pub fn record(
        &mut self,
        op: OpKind,
        operand: impl Into<OperandV1>,
    ) -> Result<&mut Self, RecordError> {
        let operand = operand.into();
        if op == OpKind::Pow && !operand.is_numeric() {
            return Err(RecordError::NonNumericExponent { operand });
        }
        self.append(op, operand);
        Ok(self)
    }

    /// Record exponentiation with the recorder as the base.
    ///
    /// Forward-only: there is no reflected exponentiation. By-value so it
    /// chains with the operator sugar: `(recorder + 1).pow(2)?`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::NonNumericExponent`] if `exponent` is not
    /// numeric. The log and the sequencer are left untouched.
    pub fn pow(mut self, exponent: impl Into<OperandV1>) -> Result<Self, RecordError> {
        self.record(OpKind::Pow, exponent)?;
        Ok(self)
    }

    /// The recorded entries, oldest first.
    #[must_use]
    pub fn history(&self) -> &[TraceEntryV1] {
        &self.entries
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The sequencer handle this recorder draws from.
    #[must_use]
    pub fn sequencer(&self) -> &SequencerV1 {
        &self.sequencer
    }

    /// Render the history as text: one `"{seq} {op} {operand}"` line per
    /// entry, oldest first, newline-joined, no trailing newline. Empty
    /// history renders as the empty string.
    #[must_use]
    pub fn show_history(&self) -> String {
        crate::render::render_history(&self.entries)
    }

    /// Append without validation. Callers have already checked the
    /// operand contract for `op`.
    fn append(&mut self, op: OpKind, operand: OperandV1) {
        let seq = self.sequencer.next();
        self.entries.push(TraceEntryV1 { seq, op, operand });
    }
}

// ---------------------------------------------------------------------------
// Operator sugar
// ---------------------------------------------------------------------------

/// Generates the forward `std::ops` impls (recorder on the left) from one
/// list. Generic over the RHS so any operand-convertible value works.
macro_rules! forward_binop {
    ($($trait:ident::$method:ident => $op:expr),+ $(,)?) => {
        $(
            impl<T: Into<OperandV1>> std::ops::$trait<T> for RecorderV1 {
                type Output = RecorderV1;

                fn $method(mut self, rhs: T) -> RecorderV1 {
                    self.append($op, rhs.into());
                    self
                }
            }
        )+
    };
}

forward_binop! {
    Add::add => OpKind::Add,
    Sub::sub => OpKind::Sub,
    Mul::mul => OpKind::Mul,
    Div::div => OpKind::Div,
}

/// Generates the reflected `std::ops` impls (recorder on the right) for the
/// numeric primitive LHS types, from one list per type.
macro_rules! reflected_binop {
    ($($t:ty),+ $(,)?) => {
        $(
            impl std::ops::Add<RecorderV1> for $t {
                type Output = RecorderV1;

                fn add(self, mut rhs: RecorderV1) -> RecorderV1 {
                    rhs.append(OpKind::RAdd, self.into());
                    rhs
                }
            }

            impl std::ops::Sub<RecorderV1> for $t {
                type Output = RecorderV1;

                fn sub(self, mut rhs: RecorderV1) -> RecorderV1 {
                    rhs.append(OpKind::RSub, self.into());
                    rhs
                }
            }

            impl std::ops::Mul<RecorderV1> for $t {
                type Output = RecorderV1;

                fn mul(self, mut rhs: RecorderV1) -> RecorderV1 {
                    rhs.append(OpKind::RMul, self.into());
                    rhs
                }
            }

            impl std::ops::Div<RecorderV1> for $t {
                type Output = RecorderV1;

                fn div(self, mut rhs: RecorderV1) -> RecorderV1 {
                    rhs.append(OpKind::RDiv, self.into());
                    rhs
                }
            }
        )+
    };
}

reflected_binop!(i32, i64, u32, f32, f64);

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

/// Classification for the trading-day resolver's retry policy.
///
/// Used to decide whether a failed single-day lookup may be repeated for the
/// previous calendar day.
///
/// # Behavior Summary
///
/// | Class | Step back one day? | Surfaces to caller? |
/// |-------|--------------------|---------------------|
/// | `PreviousDay` | Yes, while inside the search horizon | No |
/// | `Never` | No | Yes, unchanged |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// The date had no published quotation (weekend or holiday).
    /// The previous calendar day may have one.
    PreviousDay,

    /// Terminal for this resolution - transport failure, rejected input or an
    /// unknown currency. Moving the date cannot fix it.
    Never,
}

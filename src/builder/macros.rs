//! Macros for declaring transition tables.

/// Declare a transition table in one expression.
///
/// Expands to [`TableBuilder`](crate::builder::TableBuilder) calls and
/// evaluates to `Result<TransitionTable, BuildError>`. Transitions are
/// written `(from, symbol) => to`. `start`, `accept` and `transitions` are
/// optional but must appear in that order.
///
/// # Example
///
/// ```
/// use tablefsm::transition_table;
///
/// let table = transition_table! {
///     states: 3,
///     symbols: 1,
///     start: 0,
///     accept: [2],
///     transitions: {
///         (0, 0) => 1,
///         (1, 0) => 2,
///         (2, 0) => 0,
///     },
/// }
/// .unwrap();
///
/// assert_eq!(table.transition(2, 0).unwrap(), Some(0));
/// ```
#[macro_export]
macro_rules! transition_table {
    (
        states: $states:expr,
        symbols: $symbols:expr
        $(, start: $start:expr)?
        $(, accept: [$($accept:expr),* $(,)?])?
        $(, transitions: { $(($from:expr, $symbol:expr) => $to:expr),* $(,)? })?
        $(,)?
    ) => {{
        let builder = $crate::builder::TableBuilder::new($states, $symbols);
        $(let builder = builder.start($start);)?
        $($(let builder = builder.accept($accept);)*)?
        $($(let builder = builder.transition($from, $to, $symbol);)*)?
        builder.build()
    }};
}

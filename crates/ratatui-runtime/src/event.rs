use crossterm::event::Event as CrosstermEvent;

/// What one frame's input wait produced.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant, derive_more::From)]
pub(super) enum TuiEvent {
    /// The poll timeout elapsed without input.
    Timeout,
    /// Terminal events such as key input, mouse, and resize.
    Crossterm(CrosstermEvent),
}

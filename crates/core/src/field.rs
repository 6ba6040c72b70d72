use crate::State;

/// A time-independent vector field over phase space.
///
/// Implementors map a state to its instantaneous derivative. The map must be
/// pure: calling [`derivative`](VectorField::derivative) twice with the same
/// state returns the same result, with no side effects.
///
/// Non-finite inputs are not rejected. If a state contains `NaN` or an
/// infinity, the derivative propagates it and downstream arithmetic carries
/// it along.
pub trait VectorField {
    /// Evaluates the field at `state`.
    fn derivative(&self, state: State) -> State;
}

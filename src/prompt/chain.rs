// src/prompt/chain.rs

// dependencies
use tracing::trace;

/// A boxed chain step.
pub type Step<'a, T> = Box<dyn Fn(T) -> T + Send + Sync + 'a>;

/// Apply `steps` in order, feeding each the previous step's output.
pub fn run_chain<T, F>(steps: &[F], initial: T) -> T
where
    F: Fn(T) -> T,
{
    steps.iter().fold(initial, |value, step| step(value))
}

/// An ordered sequence of transformations over `T`.
///
/// ```rust
/// use prompt_limiter::prompt::Chain;
///
/// let chain = Chain::new()
///     .then(|s: String| s.to_uppercase())
///     .then(|s: String| s + "!!!");
/// assert_eq!(chain.run("hello".to_string()), "HELLO!!!");
/// ```
pub struct Chain<'a, T> {
    steps: Vec<Step<'a, T>>,
}

impl<'a, T> Chain<'a, T> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step.
    pub fn then<F>(mut self, step: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'a,
    {
        self.steps.push(Box::new(step));
        self
    }

    /// Run every step in order. An empty chain returns `initial` unchanged.
    pub fn run(&self, initial: T) -> T {
        self.steps.iter().enumerate().fold(initial, |value, (index, step)| {
            trace!(step = index, "Running chain step");
            step(value)
        })
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<T> Default for Chain<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Yes/no gate consulted before an irreversible action.
pub trait ConfirmationGate {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> ConfirmationGate for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Answer collected by the shell before the command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preanswered(pub bool);

impl ConfirmationGate for Preanswered {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}

/// Outcome of a location permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionResult {
    Granted,
    Denied,
}

/// Gatekeeper for location access.
///
/// Requests are answered asynchronously: after [`Permissions::request`] the
/// host polls [`Permissions::poll_result`] from the UI thread until it gets
/// an answer.
pub trait Permissions {
    fn are_granted(&self) -> bool;

    fn request(&mut self);

    /// Takes the answer to the last request, once.
    fn poll_result(&mut self) -> Option<PermissionResult>;
}

/// Asks the user for consent through an in-app prompt.
///
/// The prompt itself is drawn by [`crate::widgets::WidgetConsent`], which
/// calls [`ConsentPrompt::answer`] when a button is pressed.
#[derive(Debug, Default)]
pub struct ConsentPrompt {
    granted: bool,
    pending: bool,
    answer: Option<PermissionResult>,
}

impl ConsentPrompt {
    /// Creates the prompt. With `pre_granted` no question is ever asked.
    pub fn new(pre_granted: bool) -> Self {
        Self {
            granted: pre_granted,
            pending: false,
            answer: None,
        }
    }

    /// True while a request waits for the user.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Records the user's answer to the pending request.
    pub fn answer(&mut self, result: PermissionResult) {
        if !self.pending {
            return;
        }
        self.pending = false;
        self.granted = result == PermissionResult::Granted;
        self.answer = Some(result);
    }
}

impl Permissions for ConsentPrompt {
    fn are_granted(&self) -> bool {
        self.granted
    }

    fn request(&mut self) {
        if self.granted {
            self.answer = Some(PermissionResult::Granted);
        } else {
            self.pending = true;
        }
    }

    fn poll_result(&mut self) -> Option<PermissionResult> {
        self.answer.take()
    }
}

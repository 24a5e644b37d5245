#[derive(Debug, Clone)]
pub enum LoginEvent {
    EmailEdited(String),
    PasswordEdited(String),
    SubmitStarted,
    SubmitResolved(Result<(), String>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub busy: bool,
    /// Provider message from the last rejected attempt.
    pub error: Option<String>,
}

impl LoginState {
    pub fn apply(mut self, event: LoginEvent) -> Self {
        match event {
            LoginEvent::EmailEdited(email) => self.email = email,
            LoginEvent::PasswordEdited(password) => self.password = password,
            LoginEvent::SubmitStarted => {
                self.busy = true;
                self.error = None;
            }
            LoginEvent::SubmitResolved(result) => {
                self.busy = false;
                self.error = result.err();
            }
        }
        self
    }

    pub fn button_label(&self) -> &'static str {
        if self.busy {
            "Verifying..."
        } else {
            "Login"
        }
    }
}

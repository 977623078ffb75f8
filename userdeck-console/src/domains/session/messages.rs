use userdeck_contracts::LoginResponse;

#[derive(Clone)]
pub enum Message {
    /// Credentials submitted from the sign-in form.
    LoginSubmitted { email: String, password: String },

    /// Outcome of the login round trip.
    LoginCompleted(Result<LoginResponse, String>),

    /// Operator-initiated sign out.
    Logout,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoginSubmitted { .. } => "Session::LoginSubmitted",
            Self::LoginCompleted(_) => "Session::LoginCompleted",
            Self::Logout => "Session::Logout",
        }
    }
}

// Credentials never reach logs.
impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LoginSubmitted { email, .. } => {
                write!(f, "LoginSubmitted({email}, ***)")
            }
            Self::LoginCompleted(result) => write!(
                f,
                "LoginCompleted({:?})",
                result.as_ref().map(|response| &response.user.email)
            ),
            Self::Logout => write!(f, "Logout"),
        }
    }
}

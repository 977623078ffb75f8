use userdeck_model::UserId;

#[derive(Clone)]
pub enum Message {
    // Sign-in form
    LoginEmailChanged(String),
    LoginPasswordChanged(String),
    LoginSubmitted,

    // Sign-up form
    SignupEmailChanged(String),
    SignupNameChanged(String),
    SignupPasswordChanged(String),
    SignupSubmitted,

    // Navigation between the signed-out screens
    GoToLogin,
    GoToSignup,

    // Home screen
    FilterChanged(String),
    ToggleEmailSort,
    RowToggled(UserId),
    SelectAllToggled,
    BlockPressed,
    UnblockPressed,
    DeletePressed,
    SignOutPressed,
    DismissNotice,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoginEmailChanged(_) => "Ui::LoginEmailChanged",
            Self::LoginPasswordChanged(_) => "Ui::LoginPasswordChanged",
            Self::LoginSubmitted => "Ui::LoginSubmitted",
            Self::SignupEmailChanged(_) => "Ui::SignupEmailChanged",
            Self::SignupNameChanged(_) => "Ui::SignupNameChanged",
            Self::SignupPasswordChanged(_) => "Ui::SignupPasswordChanged",
            Self::SignupSubmitted => "Ui::SignupSubmitted",
            Self::GoToLogin => "Ui::GoToLogin",
            Self::GoToSignup => "Ui::GoToSignup",
            Self::FilterChanged(_) => "Ui::FilterChanged",
            Self::ToggleEmailSort => "Ui::ToggleEmailSort",
            Self::RowToggled(_) => "Ui::RowToggled",
            Self::SelectAllToggled => "Ui::SelectAllToggled",
            Self::BlockPressed => "Ui::BlockPressed",
            Self::UnblockPressed => "Ui::UnblockPressed",
            Self::DeletePressed => "Ui::DeletePressed",
            Self::SignOutPressed => "Ui::SignOutPressed",
            Self::DismissNotice => "Ui::DismissNotice",
        }
    }
}

// Password edits never reach logs.
impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LoginEmailChanged(value) => {
                write!(f, "LoginEmailChanged({value})")
            }
            Self::LoginPasswordChanged(_) => {
                write!(f, "LoginPasswordChanged(***)")
            }
            Self::SignupEmailChanged(value) => {
                write!(f, "SignupEmailChanged({value})")
            }
            Self::SignupNameChanged(value) => {
                write!(f, "SignupNameChanged({value})")
            }
            Self::SignupPasswordChanged(_) => {
                write!(f, "SignupPasswordChanged(***)")
            }
            Self::FilterChanged(value) => {
                write!(f, "FilterChanged({value})")
            }
            Self::RowToggled(id) => write!(f, "RowToggled({id})"),
            other => f.write_str(other.name()),
        }
    }
}

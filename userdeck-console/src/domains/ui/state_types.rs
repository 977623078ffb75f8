//! Screen and form state for the ui domain.

use std::collections::HashSet;

use userdeck_model::{UserId, UserRecord};

/// Which screen the console is presenting.
#[derive(Debug, Clone)]
pub enum Screen {
    Login(LoginForm),
    Signup(SignupForm),
    Home(HomeView),
}

/// Sign-in form state.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// Client-side validation notice, shown before any network call.
    pub notice: Option<String>,
}

/// Sign-up form state.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub email: String,
    pub name: String,
    pub password: String,
    pub notice: Option<String>,
}

/// Sort direction for the email column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortOrder::Ascending => "↑",
            SortOrder::Descending => "↓",
        }
    }
}

/// A transient notice line on the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Home screen state: filter, sort, and the ephemeral selection set.
#[derive(Debug, Clone, Default)]
pub struct HomeView {
    pub filter: String,
    pub sort_order: SortOrder,
    pub selected: HashSet<UserId>,
    pub notice: Option<Notice>,
}

impl HomeView {
    /// Rows after the name filter and email sort, in display order.
    pub fn visible_rows<'a>(
        &self,
        users: &'a [UserRecord],
    ) -> Vec<&'a UserRecord> {
        let needle = self.filter.to_lowercase();
        let mut rows: Vec<&UserRecord> = users
            .iter()
            .filter(|user| {
                needle.is_empty()
                    || user.name.to_lowercase().contains(&needle)
            })
            .collect();
        rows.sort_by(|a, b| match self.sort_order {
            SortOrder::Ascending => a.email.cmp(&b.email),
            SortOrder::Descending => b.email.cmp(&a.email),
        });
        rows
    }

    pub fn toggle_selected(&mut self, id: UserId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Select every visible row, or clear the selection when all of them
    /// are already selected.
    pub fn toggle_select_all(&mut self, users: &[UserRecord]) {
        let visible: Vec<UserId> = self
            .visible_rows(users)
            .iter()
            .map(|user| user.id.clone())
            .collect();
        let all_selected = !visible.is_empty()
            && visible.iter().all(|id| self.selected.contains(id));
        if all_selected {
            self.selected.clear();
        } else {
            self.selected = visible.into_iter().collect();
        }
    }
}

/// UI domain state.
#[derive(Debug)]
pub struct UiDomainState {
    pub screen: Screen,
}

impl Default for UiDomainState {
    fn default() -> Self {
        Self {
            screen: Screen::Login(LoginForm::default()),
        }
    }
}

use derive_getters::Getters;

/// Role of a button whose action must be confirmed before it proceeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRole {
    EditRole,
    Delete,
    Confirm,
    Lend,
}

impl ButtonRole {
    /// Item roles in precedence order.
    const ITEM_ROLES: [ButtonRole; 3] = [ButtonRole::Delete, ButtonRole::Confirm, ButtonRole::Lend];

    pub const fn class_name(&self) -> &'static str {
        match self {
            ButtonRole::EditRole => "edit-role",
            ButtonRole::Delete => "delete",
            ButtonRole::Confirm => "confirm",
            ButtonRole::Lend => "lend",
        }
    }

    /// Selector matching every button carrying a role class.
    pub fn selector() -> String {
        [
            ButtonRole::EditRole,
            ButtonRole::Delete,
            ButtonRole::Confirm,
            ButtonRole::Lend,
        ]
        .iter()
        .map(|role| format!(".{}", role.class_name()))
        .collect::<Vec<_>>()
        .join(", ")
    }

    /// Infer the role from a class list: `edit-role` first, then `delete` > `confirm` > `lend`.
    pub fn from_classes<'a, I>(classes: I) -> Option<ButtonRole>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let classes = classes.into_iter().collect::<Vec<_>>();
        let has = |role: &ButtonRole| classes.contains(&role.class_name());

        if has(&ButtonRole::EditRole) {
            return Some(ButtonRole::EditRole);
        }
        Self::ITEM_ROLES.into_iter().find(|role| has(role))
    }

    fn verb(&self) -> &'static str {
        match self {
            ButtonRole::EditRole => "edit",
            ButtonRole::Delete => "delete",
            ButtonRole::Confirm => "return",
            ButtonRole::Lend => "lend",
        }
    }
}

/// Data attributes read from a button when it is clicked.
#[derive(Debug, Default, Getters, PartialEq, Eq)]
pub struct ButtonData {
    title: String,
    username: String,
    current_role: String,
}

impl ButtonData {
    pub fn new(title: String, username: String, current_role: String) -> Self {
        Self {
            title,
            username,
            current_role,
        }
    }
}

/// Build the text of the confirmation prompt for a button.
pub fn confirmation_message(role: ButtonRole, data: &ButtonData) -> String {
    match role {
        ButtonRole::EditRole => format!(
            "Are you sure you want to change the role of user \"{}\" (current role: {})?",
            data.username, data.current_role
        ),
        ButtonRole::Delete | ButtonRole::Confirm | ButtonRole::Lend => format!(
            "Are you sure you want to {} the book \"{}\"?",
            role.verb(),
            data.title
        ),
    }
}

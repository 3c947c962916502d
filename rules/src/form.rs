use crate::field_rule::FieldRule;

/// How a form reports its failing fields to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Unhide the `<field-id>-error` element of every failing field.
    Inline,
    /// Show a single blocking alert.
    Alert(&'static str),
}

#[derive(Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: &'static str,
    pub rule: FieldRule,
}

impl FieldSpec {
    pub fn error_element_id(&self) -> String {
        format!("{}-error", self.id)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct FormSpec {
    pub id: &'static str,
    pub fields: &'static [FieldSpec],
    pub feedback: Feedback,
}

pub const REGISTRATION_FORM: FormSpec = FormSpec {
    id: "register-form",
    fields: &[
        FieldSpec {
            id: "name",
            rule: FieldRule::Required,
        },
        FieldSpec {
            id: "email",
            rule: FieldRule::Email,
        },
        FieldSpec {
            id: "password",
            rule: FieldRule::Required,
        },
    ],
    feedback: Feedback::Inline,
};

pub const LOGIN_FORM: FormSpec = FormSpec {
    id: "login-form",
    fields: &[
        FieldSpec {
            id: "email",
            rule: FieldRule::Required,
        },
        FieldSpec {
            id: "password",
            rule: FieldRule::Required,
        },
    ],
    feedback: Feedback::Inline,
};

pub const SEARCH_FORM: FormSpec = FormSpec {
    id: "search-form",
    fields: &[FieldSpec {
        id: "search-query",
        rule: FieldRule::Required,
    }],
    feedback: Feedback::Alert("Please enter a search term."),
};

/// Every form whose submission is guarded by field rules.
pub const VALIDATED_FORMS: [&FormSpec; 3] = [&REGISTRATION_FORM, &LOGIN_FORM, &SEARCH_FORM];

#[derive(Debug, PartialEq, Eq)]
pub struct FieldOutcome<'a> {
    pub field: &'a FieldSpec,
    pub valid: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct FormOutcome<'a> {
    pub fields: Vec<FieldOutcome<'a>>,
}

impl FormOutcome<'_> {
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|outcome| outcome.valid)
    }
}

impl FormSpec {
    /// Check every declared field, without stopping at the first failure.
    /// Fields for which `value_of` returns `None` are not on the page and are skipped.
    pub fn validate<F>(&self, value_of: F) -> FormOutcome<'_>
    where
        F: Fn(&FieldSpec) -> Option<String>,
    {
        let fields = self
            .fields
            .iter()
            .filter_map(|field| {
                value_of(field).map(|value| FieldOutcome {
                    field,
                    valid: field.rule.accepts(&value),
                })
            })
            .collect();

        FormOutcome { fields }
    }
}

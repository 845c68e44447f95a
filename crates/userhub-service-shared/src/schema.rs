//! Declarative input schemas.
//!
//! A [`Schema`] is a closed set of node variants: an object with named,
//! rule-carrying string fields, a refinement wrapping a base schema with a
//! cross-field check, and an intersection of two schemas. Checking a schema
//! produces an ordered list of [`Violation`]s; the order doubles as the wire
//! order of the reported field errors, so it is part of the contract:
//! field checks run in declaration order, then refinements in attachment
//! order.
//!
//! Refinements always run when the input is an object, even if field checks
//! already failed, so that every invalid field surfaces in a single response.
//!
//! Each field may carry an explicit default value; [`Schema::defaults`] is
//! the visitor that collects them (no runtime shape inspection happens
//! anywhere).

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

/// One broken constraint, attributed to a named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Ordered sink handed to refinement functions.
#[derive(Debug, Default)]
pub struct Issues {
    items: Vec<Violation>,
}

impl Issues {
    /// Report a violation against a named field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.items.push(Violation::new(field, message));
    }

    fn drain_into(&mut self, out: &mut Vec<Violation>) {
        out.append(&mut self.items);
    }
}

/// A cross-field refinement: reads the raw input object, reports through
/// the [`Issues`] sink.
pub type RefineFn = Arc<dyn Fn(&Map<String, Value>, &mut Issues) + Send + Sync>;

/// Per-field rule. Fields are strings; anything richer belongs in a
/// refinement.
#[derive(Debug, Clone)]
enum Rule {
    MinLen { min: usize, message: String },
}

/// A named string field with its rules and optional default.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    name: String,
    rules: Vec<Rule>,
    default: Option<Value>,
}

impl FieldSchema {
    /// A required string field.
    pub fn string(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
            default: None,
        }
    }

    /// Require a minimum character count, reported with `message`.
    pub fn min_len(mut self, min: usize, message: impl Into<String>) -> Self {
        self.rules.push(Rule::MinLen {
            min,
            message: message.into(),
        });
        self
    }

    /// Record a default for this field, surfaced by [`Schema::defaults`].
    pub fn default_value(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    fn check(&self, object: &Map<String, Value>, out: &mut Vec<Violation>) {
        match object.get(&self.name) {
            None | Some(Value::Null) => out.push(Violation::new(&self.name, "Required")),
            Some(Value::String(s)) => {
                for rule in &self.rules {
                    match rule {
                        Rule::MinLen { min, message } => {
                            if s.chars().count() < *min {
                                out.push(Violation::new(&self.name, message.clone()));
                            }
                        }
                    }
                }
            }
            Some(_) => out.push(Violation::new(&self.name, "Expected string")),
        }
    }
}

/// A declarative input schema over JSON objects.
pub enum Schema {
    /// Named fields checked in declaration order.
    Object(Vec<FieldSchema>),
    /// A base schema plus a cross-field refinement.
    Refined { base: Box<Schema>, refine: RefineFn },
    /// Both sides apply; violations concatenate left-to-right.
    Intersection { left: Box<Schema>, right: Box<Schema> },
}

impl Schema {
    /// An object schema with the given fields.
    pub fn object(fields: Vec<FieldSchema>) -> Self {
        Schema::Object(fields)
    }

    /// Attach a cross-field refinement. Refinements see the raw input object
    /// and report through the [`Issues`] sink.
    pub fn refine(
        self,
        refine: impl Fn(&Map<String, Value>, &mut Issues) + Send + Sync + 'static,
    ) -> Self {
        Schema::Refined {
            base: Box::new(self),
            refine: Arc::new(refine),
        }
    }

    /// Intersect with another schema.
    pub fn and(self, other: Schema) -> Self {
        Schema::Intersection {
            left: Box::new(self),
            right: Box::new(other),
        }
    }

    /// Check `input`, returning every violation in reporting order.
    ///
    /// A non-object input yields a single unnamed violation; refinements are
    /// skipped since there are no fields to inspect.
    pub fn check(&self, input: &Value) -> Vec<Violation> {
        let Some(object) = input.as_object() else {
            return vec![Violation::new("", "Expected object")];
        };

        let mut out = Vec::new();
        self.check_object(object, &mut out);
        out
    }

    fn check_object(&self, object: &Map<String, Value>, out: &mut Vec<Violation>) {
        match self {
            Schema::Object(fields) => {
                for field in fields {
                    field.check(object, out);
                }
            }
            Schema::Refined { base, refine } => {
                base.check_object(object, out);
                let mut issues = Issues::default();
                refine(object, &mut issues);
                issues.drain_into(out);
            }
            Schema::Intersection { left, right } => {
                left.check_object(object, out);
                right.check_object(object, out);
            }
        }
    }

    /// Collect declared field defaults.
    ///
    /// Refinements are transparent; intersections merge with the right side
    /// winning on duplicate field names.
    pub fn defaults(&self) -> Map<String, Value> {
        match self {
            Schema::Object(fields) => fields
                .iter()
                .filter_map(|f| f.default.clone().map(|v| (f.name.clone(), v)))
                .collect(),
            Schema::Refined { base, .. } => base.defaults(),
            Schema::Intersection { left, right } => {
                let mut merged = left.defaults();
                merged.extend(right.defaults());
                merged
            }
        }
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::Object(fields) => f.debug_tuple("Object").field(fields).finish(),
            Schema::Refined { base, .. } => f.debug_struct("Refined").field("base", base).finish(),
            Schema::Intersection { left, right } => f
                .debug_struct("Intersection")
                .field("left", left)
                .field("right", right)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field_of(v: &Violation) -> &str {
        &v.field
    }

    #[test]
    fn valid_object_has_no_violations() {
        let schema = Schema::object(vec![
            FieldSchema::string("name").min_len(3, "Name is required"),
            FieldSchema::string("email"),
        ]);
        assert!(schema.check(&json!({"name": "Ada", "email": "a@b.com"})).is_empty());
    }

    #[test]
    fn missing_field_is_required() {
        let schema = Schema::object(vec![FieldSchema::string("email")]);
        let violations = schema.check(&json!({}));
        assert_eq!(violations, vec![Violation::new("email", "Required")]);
    }

    #[test]
    fn null_counts_as_missing() {
        let schema = Schema::object(vec![FieldSchema::string("email")]);
        let violations = schema.check(&json!({ "email": null }));
        assert_eq!(violations, vec![Violation::new("email", "Required")]);
    }

    #[test]
    fn wrong_type_is_reported() {
        let schema = Schema::object(vec![FieldSchema::string("email")]);
        let violations = schema.check(&json!({ "email": 42 }));
        assert_eq!(violations, vec![Violation::new("email", "Expected string")]);
    }

    #[test]
    fn min_len_uses_custom_message() {
        let schema = Schema::object(vec![FieldSchema::string("name").min_len(3, "Name is required")]);
        let violations = schema.check(&json!({ "name": "" }));
        assert_eq!(violations, vec![Violation::new("name", "Name is required")]);
    }

    #[test]
    fn violations_follow_declaration_order() {
        let schema = Schema::object(vec![
            FieldSchema::string("email"),
            FieldSchema::string("password"),
        ]);
        let violations = schema.check(&json!({}));
        let fields: Vec<_> = violations.iter().map(field_of).collect();
        assert_eq!(fields, vec!["email", "password"]);
    }

    #[test]
    fn refinement_runs_even_when_fields_fail() {
        let schema = Schema::object(vec![FieldSchema::string("name").min_len(3, "Name is required")])
            .refine(|input, issues| {
                let email = input.get("email").and_then(Value::as_str).unwrap_or("");
                if !email.contains('@') {
                    issues.add("email", "Invalid email format");
                }
            });

        let violations = schema.check(&json!({"name": "", "email": "bad"}));
        let fields: Vec<_> = violations.iter().map(field_of).collect();
        assert_eq!(fields, vec!["name", "email"]);
    }

    #[test]
    fn intersection_concatenates_left_to_right() {
        let left = Schema::object(vec![FieldSchema::string("a")]);
        let right = Schema::object(vec![FieldSchema::string("b")]);
        let violations = left.and(right).check(&json!({}));
        let fields: Vec<_> = violations.iter().map(field_of).collect();
        assert_eq!(fields, vec!["a", "b"]);
    }

    #[test]
    fn non_object_input_short_circuits() {
        let schema = Schema::object(vec![FieldSchema::string("a")]).refine(|_, issues| {
            issues.add("a", "should not run");
        });
        let violations = schema.check(&json!("not an object"));
        assert_eq!(violations, vec![Violation::new("", "Expected object")]);
    }

    #[test]
    fn defaults_visitor_collects_declared_values() {
        let schema = Schema::object(vec![
            FieldSchema::string("role").default_value(json!("member")),
            FieldSchema::string("name"),
        ])
        .refine(|_, _| {});

        let defaults = schema.defaults();
        assert_eq!(defaults.get("role"), Some(&json!("member")));
        assert!(!defaults.contains_key("name"));
    }

    #[test]
    fn intersection_defaults_right_wins() {
        let left = Schema::object(vec![FieldSchema::string("role").default_value(json!("member"))]);
        let right = Schema::object(vec![FieldSchema::string("role").default_value(json!("admin"))]);
        let defaults = left.and(right).defaults();
        assert_eq!(defaults.get("role"), Some(&json!("admin")));
    }
}

use std::fmt;

/// Terminal (non-structural) value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Scalar {
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "bool",
            Scalar::Int(_) => "int",
            Scalar::Float(_) => "float",
            Scalar::Str(_) => "string",
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Float(n) => write!(f, "{}", n),
            Scalar::Str(s) => write!(f, "{}", s),
        }
    }
}

/// One named field of a [`Record`], in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub value: Value,
}

/// An aggregate with named fields. Field order is the declaration order and
/// is preserved through traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub type_name: String,
    pub fields: Vec<Field>,
}

impl Record {
    pub fn new(type_name: impl Into<String>) -> Self {
        Record {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field, builder-style. Callers describe their domain objects
    /// declaratively instead of relying on runtime reflection.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push(Field {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// The type name with any namespace qualification removed
    /// (`crate::module::User` and `pkg.User` both reduce to `User`).
    pub fn simple_name(&self) -> &str {
        let tail = self.type_name.rsplit("::").next().unwrap_or(&self.type_name);
        tail.rsplit('.').next().unwrap_or(tail)
    }
}

/// The closed set of value shapes the traverser understands: record, optional
/// wrapper, homogeneous list, or scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    Record(Record),
    List(Vec<Value>),
    Optional(Option<Box<Value>>),
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Scalar(s) => s.kind(),
            Value::Record(_) => "record",
            Value::List(_) => "list",
            Value::Optional(_) => "optional",
        }
    }

    /// Strip at most one optional wrapper. Returns `None` only for an absent
    /// optional; every other value comes back unchanged.
    pub fn deref_once(&self) -> Option<&Value> {
        match self {
            Value::Optional(inner) => inner.as_deref(),
            other => Some(other),
        }
    }

    /// The record behind at most one optional wrapper, if any.
    pub fn as_record(&self) -> Option<&Record> {
        match self.deref_once()? {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(s) => write!(f, "{}", s),
            Value::Record(record) => {
                write!(f, "{} {{", record.simple_name())?;
                for (i, field) in record.fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, " {}: {}", field.name, field.value)?;
                }
                if record.fields.is_empty() {
                    write!(f, "}}")
                } else {
                    write!(f, " }}")
                }
            }
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Optional(Some(inner)) => write!(f, "{}", inner),
            Value::Optional(None) => write!(f, "null"),
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(record)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Scalar(Scalar::Int(n as i64))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Scalar(Scalar::Int(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Scalar(Scalar::Int(n as i64))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Scalar(Scalar::Float(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(Scalar::Str(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(Scalar::Str(s))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        Value::Optional(opt.map(|v| Box::new(v.into())))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_name_strips_qualification() {
        assert_eq!(Record::new("User").simple_name(), "User");
        assert_eq!(Record::new("crate::domain::User").simple_name(), "User");
        assert_eq!(Record::new("pkg.User").simple_name(), "User");
    }

    #[test]
    fn deref_once_strips_a_single_optional_level() {
        let plain = Value::from(1);
        assert_eq!(plain.deref_once(), Some(&Value::Scalar(Scalar::Int(1))));

        let wrapped = Value::from(Some(1));
        assert_eq!(wrapped.deref_once(), Some(&Value::Scalar(Scalar::Int(1))));

        let absent = Value::Optional(None);
        assert_eq!(absent.deref_once(), None);
    }

    #[test]
    fn display_is_a_human_readable_string_form() {
        let record = Record::new("Address")
            .field("city", "Berlin")
            .field("zip", 10115);
        assert_eq!(
            Value::from(record).to_string(),
            "Address { city: Berlin, zip: 10115 }"
        );
        assert_eq!(Value::from(Vec::<i32>::new()).to_string(), "[]");
        assert_eq!(Value::from(vec!["a", "b"]).to_string(), "[a, b]");
        assert_eq!(Value::Optional(None).to_string(), "null");
    }

    #[test]
    fn empty_record_displays_without_inner_space() {
        assert_eq!(Value::from(Record::new("Unit")).to_string(), "Unit {}");
    }
}

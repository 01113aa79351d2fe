use serde_json::{Map, Value};
use std::fmt;

/// Renders one field value for the debug representation of a record.
pub trait RenderField {
    fn render(&self) -> String;
}

macro_rules! render_with_to_string {
    ($($ty:ty),*) => {
        $(
            impl RenderField for $ty {
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

render_with_to_string!(String, bool, i32, i64, u16, u32, u64, f64);

impl<T: RenderField> RenderField for Option<T> {
    fn render(&self) -> String {
        match self {
            Some(value) => value.render(),
            None => "None".to_string(),
        }
    }
}

impl<T: RenderField> RenderField for Vec<T> {
    fn render(&self) -> String {
        format!("[{}]", self.iter().map(RenderField::render).collect::<Vec<_>>().join(", "))
    }
}

impl RenderField for Map<String, Value> {
    fn render(&self) -> String {
        Value::Object(self.clone()).to_string()
    }
}

pub fn write_record(f: &mut fmt::Formatter<'_>, name: &str, fields: &[(&str, &dyn RenderField)]) -> fmt::Result {
    writeln!(f, "{}(", name)?;
    for (field, value) in fields {
        writeln!(f, "    {}: {},", field, value.render())?;
    }
    write!(f, ")")
}

pub fn inline_record(name: &str, fields: &[(&str, &dyn RenderField)]) -> String {
    let rendered = fields
        .iter()
        .map(|(field, value)| format!("{}: {}", field, value.render()))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}({})", name, rendered)
}

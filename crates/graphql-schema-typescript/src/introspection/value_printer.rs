use crate::ast;

/// Prints a constant GraphQL value in GraphQL syntax, the way introspection
/// reports `defaultValue`.
pub(crate) fn print_value(value: &ast::schema::Value) -> String {
    use ast::schema::Value;
    match value {
        Value::Boolean(b) => b.to_string(),
        Value::Enum(name) => name.to_owned(),
        Value::Float(f) => {
            let printed = f.to_string();
            if printed.contains(['.', 'e', 'E']) || !f.is_finite() {
                printed
            } else {
                format!("{printed}.0")
            }
        },
        Value::Int(num) => num.as_i64()
            .map(|n| n.to_string())
            .unwrap_or_default(),
        Value::List(items) => format!(
            "[{}]",
            items.iter()
                .map(print_value)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::Null => "null".to_string(),
        Value::Object(fields) => format!(
            "{{{}}}",
            fields.iter()
                .map(|(name, value)| format!("{name}: {}", print_value(value)))
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::String(s) => print_string(s),
        Value::Variable(name) => format!("${name}"),
    }
}

fn print_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::print_value;

    fn default_value_of(sdl_arg: &str) -> String {
        let doc = graphql_parser::schema::parse_schema::<String>(
            &format!("type Query {{ f(a: Int = {sdl_arg}): Int }}"),
        ).unwrap().into_static();
        let graphql_parser::schema::Definition::TypeDefinition(
            graphql_parser::schema::TypeDefinition::Object(obj),
        ) = &doc.definitions[0] else {
            panic!("expected an object type definition");
        };
        print_value(obj.fields[0].arguments[0].default_value.as_ref().unwrap())
    }

    #[test]
    fn prints_scalars() {
        assert_eq!(default_value_of("10"), "10");
        assert_eq!(default_value_of("1.5"), "1.5");
        assert_eq!(default_value_of("true"), "true");
        assert_eq!(default_value_of("null"), "null");
        assert_eq!(default_value_of("RED"), "RED");
    }

    #[test]
    fn prints_strings_with_escapes() {
        assert_eq!(default_value_of(r#""say \"hi\"""#), r#""say \"hi\"""#);
    }

    #[test]
    fn prints_lists_and_objects() {
        assert_eq!(default_value_of("[1, 2, 3]"), "[1, 2, 3]");
        assert_eq!(default_value_of("{a: 1, b: \"x\"}"), "{a: 1, b: \"x\"}");
    }
}

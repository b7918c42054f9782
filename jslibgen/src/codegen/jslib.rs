//! `.jslib` emitter: one `LibraryManager.library` entry per native-exposed
//! declaration, forwarding into `Module.<Container>`

use crate::naming;
use crate::types::{CallDeclaration, ContainerUnit};

pub fn generate(unit: &ContainerUnit, debug_prints: bool) -> String {
    let mut output = String::from("mergeInto(LibraryManager.library, {\n");

    for decl in &unit.native_exposed {
        output.push_str(&generate_entry(unit.simple_name(), decl, debug_prints));
    }

    output.push_str("});\n");
    output
}

fn generate_entry(container: &str, decl: &CallDeclaration, debug_prints: bool) -> String {
    let mut entry = format!(
        "\t{}: function ({}) {{",
        decl.qualified_name,
        decl.parameter_list()
    );

    if debug_prints {
        entry.push_str(&generate_log(decl));
    }

    entry.push_str(&format!(
        "Module.{}.{}({}); }},\n",
        container,
        naming::short_name(&decl.qualified_name),
        decl.argument_list()
    ));
    entry
}

// console.log('Foo_bar ('+a+', '+UTF8ToString(b)+')');
fn generate_log(decl: &CallDeclaration) -> String {
    if decl.parameters.is_empty() {
        return format!("console.log('{} ()');", decl.qualified_name);
    }

    let values: Vec<String> = decl.parameters.iter().map(|p| p.marshalled()).collect();
    format!(
        "console.log('{} ('+{}+')');",
        decl.qualified_name,
        values.join("+', '+")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContainerType, ParameterSpec};

    fn unit_with(decls: Vec<CallDeclaration>) -> ContainerUnit {
        let mut unit = ContainerUnit::new(ContainerType::new("Foo", Some("Bar.Baz")));
        unit.native_exposed = decls;
        unit
    }

    #[test]
    fn test_empty_unit() {
        let output = generate(&unit_with(vec![]), true);
        assert_eq!(output, "mergeInto(LibraryManager.library, {\n});\n");
    }

    #[test]
    fn test_string_param_without_debug() {
        let unit = unit_with(vec![CallDeclaration::new(
            "Foo_sayHi",
            vec![ParameterSpec::string("name")],
        )]);

        let output = generate(&unit, false);
        assert_eq!(
            output,
            "mergeInto(LibraryManager.library, {\n\
             \tFoo_sayHi: function (name) {Module.Foo.sayHi(UTF8ToString(name)); },\n\
             });\n"
        );
        assert!(!output.contains("console.log"));
    }

    #[test]
    fn test_string_param_with_debug() {
        let unit = unit_with(vec![CallDeclaration::new(
            "Foo_sayHi",
            vec![ParameterSpec::string("name")],
        )]);

        let output = generate(&unit, true);
        assert!(output.contains(
            "\tFoo_sayHi: function (name) {console.log('Foo_sayHi ('+UTF8ToString(name)+')');\
             Module.Foo.sayHi(UTF8ToString(name)); },\n"
        ));
    }

    #[test]
    fn test_mixed_params_with_debug() {
        let unit = unit_with(vec![CallDeclaration::new(
            "Foo_Send",
            vec![
                ParameterSpec::primitive("id"),
                ParameterSpec::string("topic"),
                ParameterSpec::primitive("flags"),
            ],
        )]);

        let output = generate(&unit, true);
        assert!(output.contains("Foo_Send: function (id, topic, flags) {"));
        assert!(output.contains("console.log('Foo_Send ('+id+', '+UTF8ToString(topic)+', '+flags+')');"));
        assert!(output.contains("Module.Foo.send(id, UTF8ToString(topic), flags); },"));
    }

    #[test]
    fn test_no_params_with_debug() {
        let unit = unit_with(vec![CallDeclaration::new("Foo_Ping", vec![])]);

        let output = generate(&unit, true);
        assert!(output.contains(
            "\tFoo_Ping: function () {console.log('Foo_Ping ()');Module.Foo.ping(); },\n"
        ));
    }

    #[test]
    fn test_primitive_params_are_not_marshalled() {
        let unit = unit_with(vec![CallDeclaration::new(
            "Foo_Resize",
            vec![ParameterSpec::primitive("w"), ParameterSpec::primitive("h")],
        )]);

        let output = generate(&unit, true);
        assert!(!output.contains("UTF8ToString"));
        assert!(output.contains("Module.Foo.resize(w, h);"));
    }

    #[test]
    fn test_declaration_order_and_duplicates_kept() {
        let unit = unit_with(vec![
            CallDeclaration::new("Foo_B", vec![]),
            CallDeclaration::new("Foo_A", vec![]),
            CallDeclaration::new("Foo_B", vec![]),
        ]);

        let output = generate(&unit, false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("\tFoo_B:"));
        assert!(lines[2].starts_with("\tFoo_A:"));
        assert!(lines[3].starts_with("\tFoo_B:"));
    }

    #[test]
    fn test_reserved_name_still_emitted() {
        let unit = unit_with(vec![CallDeclaration::new(
            "Foo__name_",
            vec![ParameterSpec::string("mapping")],
        )]);

        let output = generate(&unit, false);
        assert!(output.contains("Foo__name_: function (mapping) {Module.Foo._name_(UTF8ToString(mapping)); },"));
    }
}

//! `.jspre` emitter: a host-side class registered as `Module.<Container>` with
//! an empty stub per native-exposed function and a `SendMessage` relay per
//! callback

use crate::naming;
use crate::types::{CallDeclaration, ContainerUnit};

pub fn generate(unit: &ContainerUnit) -> String {
    let name = unit.simple_name();
    let mut output = format!("Module['{name}'] = Module['{name}'] || {{}};\nclass {name} {{\n");

    for decl in &unit.native_exposed {
        let short_name = naming::short_name(&decl.qualified_name);
        if naming::is_reserved_short_name(&short_name) {
            log::trace!("skip reserved stub {} in {}", decl.qualified_name, name);
            continue;
        }
        output.push_str(&format!("\t{}({}) {{}}\n", short_name, decl.parameter_list()));
    }

    for decl in &unit.callbacks {
        output.push_str(&generate_relay(decl));
    }

    output.push_str(&format!("}}\nModule.{name} = new {name}();\n"));
    output
}

// the method name is lower-cased for script callers, the relay keeps the
// native receiver's spelling
fn generate_relay(decl: &CallDeclaration) -> String {
    let receiver = naming::strip_prefix_to_first_separator(&decl.qualified_name);

    let mut params = String::from("id");
    let mut args = format!("id, '{}'", receiver);
    for param in &decl.parameters {
        params.push_str(", ");
        params.push_str(&param.name);
        args.push_str(", ");
        args.push_str(&param.name);
    }

    format!(
        "\t{}({}) {{Module.SendMessage({});}}\n",
        naming::lower_first(receiver),
        params,
        args
    )
}

//! Type expression rendering.

use dts_dom_core::naming::quote_string;
use dts_dom_core::{Parameter, ParameterFlags, Type, TypeParameter};

use super::Emitter;

/// Array element kinds that are parenthesized before `[]`.
pub(crate) fn array_element_needs_parens(element: &Type) -> bool {
    matches!(
        element,
        Type::Array { .. }
            | Type::Alias { .. }
            | Type::Interface { .. }
            | Type::Class { .. }
            | Type::Union { .. }
    )
}

/// Shortest round-trip decimal, with JavaScript's exponent form outside
/// `[1e-6, 1e21)`.
pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Also folds -0.
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&value.abs()) {
        return value.to_string();
    }
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

impl Emitter {
    pub(super) fn write_reference(&mut self, ty: &Type) {
        match ty {
            Type::String => self.print("string"),
            Type::Number => self.print("number"),
            Type::Boolean => self.print("boolean"),
            Type::Any => self.print("any"),
            Type::Void => self.print("void"),
            Type::Object => self.print("object"),
            Type::Null => self.print("null"),
            Type::Undefined => self.print("undefined"),
            Type::True => self.print("true"),
            Type::False => self.print("false"),
            Type::This => self.print("this"),
            Type::StringLiteral { value } => self.print(&quote_string(value)),
            Type::NumberLiteral { value } => {
                if value.is_nan() {
                    self.print("typeof NaN");
                } else if value.is_infinite() {
                    self.print("typeof Infinity");
                } else {
                    self.print(&format_number(*value));
                }
            }
            Type::Array { element } => {
                let parens = array_element_needs_parens(element);
                if parens {
                    self.print("(");
                }
                self.write_reference(element);
                if parens {
                    self.print(")");
                }
                self.print("[]");
            }
            Type::Union { members } => self.write_delimited(members, " | ", Self::write_operand),
            Type::Intersection { members } => {
                self.write_delimited(members, " & ", Self::write_operand)
            }
            Type::TypeLiteral { members } => self.write_object_members(members),
            Type::FunctionType {
                parameters,
                return_type,
            } => self.write_function_type(parameters, return_type),
            Type::Name {
                name,
                type_arguments,
            } => {
                self.print(name);
                if !type_arguments.is_empty() {
                    self.print("<");
                    self.write_delimited(type_arguments, ", ", Self::write_reference);
                    self.print(">");
                }
            }
            Type::Typeof { name } => {
                self.print("typeof ");
                self.print(name);
            }
            Type::TypeParameter { name }
            | Type::Interface { name }
            | Type::Class { name }
            | Type::Alias { name } => self.print(name),
        }
    }

    /// Union or intersection member; function types need parens there.
    fn write_operand(&mut self, ty: &Type) {
        if matches!(ty, Type::FunctionType { .. }) {
            self.print("(");
            self.write_reference(ty);
            self.print(")");
        } else {
            self.write_reference(ty);
        }
    }

    fn write_function_type(&mut self, parameters: &[Parameter], return_type: &Type) {
        self.write_parameters(parameters);
        self.print("=>");
        self.write_reference(return_type);
    }

    pub(super) fn write_parameters(&mut self, parameters: &[Parameter]) {
        self.print("(");
        self.write_delimited(parameters, ", ", Self::write_parameter);
        self.print(")");
    }

    fn write_parameter(&mut self, parameter: &Parameter) {
        if parameter.flags.contains(ParameterFlags::REST) {
            self.print("...");
        }
        self.print(&parameter.name);
        if parameter.flags.contains(ParameterFlags::OPTIONAL) {
            self.print("?");
        }
        self.print(": ");
        self.write_reference(&parameter.ty);
    }

    pub(super) fn write_type_parameters(&mut self, type_parameters: &[TypeParameter]) {
        if type_parameters.is_empty() {
            return;
        }
        self.print("<");
        self.write_delimited(type_parameters, ", ", |this, tp| {
            this.print(&tp.name);
            if let Some(base) = &tp.base_type {
                this.print(" extends ");
                this.write_reference(base);
            }
            if let Some(default) = &tp.default_type {
                this.print(" = ");
                this.write_reference(default);
            }
        });
        self.print(">");
    }

    /// `<T>(params): ret`, shared by functions, methods and call signatures.
    pub(super) fn write_signature(
        &mut self,
        type_parameters: &[TypeParameter],
        parameters: &[Parameter],
        return_type: &Type,
    ) {
        self.write_type_parameters(type_parameters);
        self.write_parameters(parameters);
        self.print(": ");
        self.write_reference(return_type);
    }
}

//! Indented structural rendering for debugging.
//!
//! One value per line; aggregates with more than one element open a
//! bracketed block indented two spaces per level:
//!
//! ```text
//! agg: 2 elements [
//!   int: 1
//!   agg: 1 elt: string: "a"
//! ]
//! ```

use std::fmt::{self, Write};

use crate::stack::ensure_sufficient_stack;
use crate::{AccessPath, ConstCx, Kind, SymbolicValue};

impl SymbolicValue {
    /// Write the structural form of this value to `out`, starting at
    /// `indent` levels.
    pub fn print(self, cx: ConstCx<'_>, out: &mut dyn Write, indent: usize) -> fmt::Result {
        self.print_at(cx, out, indent, false)
    }

    /// Print to stderr.
    pub fn dump(self, cx: ConstCx<'_>) {
        let mut text = String::new();
        if self.print(cx, &mut text, 0).is_ok() {
            eprint!("{text}");
        }
    }

    /// `inline` values continue the current line instead of starting one.
    fn print_at(
        self,
        cx: ConstCx<'_>,
        out: &mut dyn Write,
        indent: usize,
        inline: bool,
    ) -> fmt::Result {
        if !inline {
            write!(out, "{:width$}", "", width = indent * 2)?;
        }
        match self.kind() {
            Kind::UninitMemory => writeln!(out, "uninit"),
            Kind::Unknown => {
                let (node, reason) = self.unknown_value();
                match cx.ir.node_description(node) {
                    Some(desc) => writeln!(out, "unknown: {reason} at {desc}"),
                    None => writeln!(out, "unknown: {reason} at {node:?}"),
                }
            }
            Kind::Metatype => {
                writeln!(out, "metatype: {}", cx.ir.type_name(self.metatype_value()))
            }
            Kind::Function => {
                writeln!(out, "fn: {}", cx.ir.function_name(self.function_value()))
            }
            Kind::Integer => writeln!(out, "int: {}", self.integer_value(cx)),
            Kind::Float => writeln!(out, "float: {}", self.float_value(cx)),
            Kind::String => writeln!(out, "string: {:?}", self.string_value(cx)),
            Kind::Aggregate => {
                let elements = self.aggregate_value(cx.arena);
                match elements {
                    [] => writeln!(out, "agg: 0 elements []"),
                    [only] => {
                        write!(out, "agg: 1 elt: ")?;
                        ensure_sufficient_stack(|| only.print_at(cx, out, indent, true))
                    }
                    _ => {
                        writeln!(out, "agg: {} elements [", elements.len())?;
                        for element in elements {
                            ensure_sufficient_stack(|| {
                                element.print_at(cx, out, indent + 1, false)
                            })?;
                        }
                        writeln!(out, "{:width$}]", "", width = indent * 2)
                    }
                }
            }
            Kind::Enum => {
                let case = cx.ir.enum_case_name(self.enum_value(cx.arena));
                writeln!(out, "enum: {case}")
            }
            Kind::EnumWithPayload => {
                let case = cx.ir.enum_case_name(self.enum_value(cx.arena));
                write!(out, "enum: {case}, payload: ")?;
                let payload = self.enum_payload_value(cx.arena);
                ensure_sufficient_stack(|| payload.print_at(cx, out, indent, true))
            }
            Kind::Address => {
                let mut path = AccessPath::new();
                let object = self.address_value(cx.arena, &mut path);
                write!(out, "address[{}]", object.raw())?;
                for (i, step) in path.iter().enumerate() {
                    let sep = if i == 0 { " " } else { ", " };
                    write!(out, "{sep}{step}")?;
                }
                writeln!(out)
            }
        }
    }
}

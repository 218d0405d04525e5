// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Renders expression trees to concrete syntax.
//!
//! The central dispatch is `render_value_specification`. Function
//! applications are the precedence-sensitive part: a reserved set of
//! special forms renders with hand-coded surface syntax, a mapped set of
//! function names renders infix with precedence-driven parenthesization,
//! and everything else renders as a generic `receiver->function(args)`
//! call.

use super::context::RenderContext;
use super::literal_renderer;
use itertools::Itertools;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use strata_model::{
    AppliedFunction, AppliedProperty, GraphFetchTree, LambdaFunction, NavigationPath,
    ValueSpecification, Variable,
};

/// Receiver token that triggers the legacy bracket rendering for
/// property accesses
const SOURCE_RECEIVER: &str = "$src";

/// An infix surface operator mapped from a function name
#[derive(Debug, Clone, Copy)]
struct InfixOperator {
    symbol: &'static str,
    /// Higher binds tighter: multiplicative > additive > relational >
    /// boolean. Operands of strictly lower precedence get parenthesized;
    /// same-precedence chains render flat (left associative).
    precedence: u8,
}

impl InfixOperator {
    /// Additive or multiplicative: the classes that flatten a sole
    /// collection argument into an n-ary chain
    fn is_arithmetic(&self) -> bool {
        self.precedence >= 3
    }
}

static INFIX_OPERATORS: Lazy<HashMap<&'static str, InfixOperator>> = Lazy::new(|| {
    let mut operators = HashMap::new();
    let mut add = |name, symbol, precedence| {
        operators.insert(name, InfixOperator { symbol, precedence });
    };
    add("times", "*", 4);
    add("divide", "/", 4);
    add("plus", "+", 3);
    add("minus", "-", 3);
    add("equal", "==", 2);
    add("lessThan", "<", 2);
    add("lessThanEqual", "<=", 2);
    add("greaterThan", ">", 2);
    add("greaterThanEqual", ">=", 2);
    add("and", "&&", 1);
    add("or", "||", 1);
    operators
});

fn infix_operator(function: &str) -> Option<InfixOperator> {
    INFIX_OPERATORS.get(function).copied()
}

/// Render an expression tree node to text.
pub fn render_value_specification(value: &ValueSpecification, ctx: &RenderContext) -> String {
    match value {
        ValueSpecification::String(v) => literal_renderer::render_string(v, ctx),
        ValueSpecification::Integer(v) => literal_renderer::render_integer(v),
        ValueSpecification::Float(v) => literal_renderer::render_float(*v),
        ValueSpecification::Decimal(v) => literal_renderer::render_decimal(v),
        ValueSpecification::Boolean(v) => literal_renderer::render_boolean(*v),
        ValueSpecification::DateTime(v) | ValueSpecification::StrictDate(v) => {
            literal_renderer::render_date(v, ctx)
        }
        ValueSpecification::StrictTime(v) => literal_renderer::render_strict_time(v, ctx),
        ValueSpecification::LatestDate => literal_renderer::render_latest_date(),

        ValueSpecification::Collection {
            multiplicity,
            values,
        } => render_collection(multiplicity, values, ctx),

        ValueSpecification::Variable(var) => render_variable(var, ctx),
        ValueSpecification::Lambda(lambda) => render_lambda(lambda, ctx),
        ValueSpecification::AppliedFunction(func) => render_applied_function(func, ctx),
        ValueSpecification::AppliedProperty(prop) => render_applied_property(prop, ctx),
        ValueSpecification::Path(path) => render_path(path),
        ValueSpecification::GraphFetch(tree) => render_graph_fetch_root(tree, ctx),

        ValueSpecification::Pair { first, second } => format!(
            "pair({}, {})",
            render_value_specification(first, ctx),
            render_value_specification(second, ctx)
        ),

        ValueSpecification::UnitInstance { unit, value } => {
            format!("{} {}", render_value_specification(value, ctx), unit)
        }
        ValueSpecification::UnitType(unit) => unit.clone(),
        ValueSpecification::ElementPointer(path) => path.clone(),

        ValueSpecification::Unsupported(kind) => {
            ctx.record_unsupported("value specification", kind)
        }
    }
}

/// Render only a lambda's body, for grammar positions where the
/// surrounding syntax already declares the signature (constraints,
/// mapping transforms). Works on the statements alone - the shared
/// lambda node is never modified.
pub fn render_lambda_body(lambda: &LambdaFunction, ctx: &RenderContext) -> String {
    render_statements(&lambda.body, ctx)
}

pub(crate) fn render_statements(statements: &[ValueSpecification], ctx: &RenderContext) -> String {
    if ctx.is_pretty() && statements.len() > 1 {
        statements
            .iter()
            .map(|s| render_value_specification(s, ctx))
            .join(&format!(";{}", ctx.break_line()))
    } else {
        statements
            .iter()
            .map(|s| render_value_specification(s, ctx))
            .join("; ")
    }
}

// ----------------------------------------------------------------------
// Collections and variables
// ----------------------------------------------------------------------

/// True for nodes a bracketed collection may keep on one line in the
/// pretty styles
fn is_atomic_element(value: &ValueSpecification) -> bool {
    value.is_primitive_literal() || matches!(value, ValueSpecification::Variable(_))
}

fn render_collection(
    multiplicity: &strata_model::Multiplicity,
    values: &[ValueSpecification],
    ctx: &RenderContext,
) -> String {
    if values.is_empty() {
        return "[]".to_string();
    }
    // A to-one usage unwraps its sole element; a declared upper bound
    // above one keeps brackets even around a single element
    if multiplicity.is_to_one() && values.len() == 1 {
        return render_value_specification(&values[0], ctx);
    }
    let single_atomic = values.len() == 1 && is_atomic_element(&values[0]);
    if ctx.is_pretty() && !single_atomic {
        let inner = ctx.indented(1);
        let body = values
            .iter()
            .map(|v| format!("{}{}", inner.break_line(), render_value_specification(v, &inner)))
            .join(",");
        format!("[{}{}]", body, ctx.break_line())
    } else {
        format!(
            "[{}]",
            values
                .iter()
                .map(|v| render_value_specification(v, ctx))
                .join(", ")
        )
    }
}

pub(crate) fn render_variable(var: &Variable, ctx: &RenderContext) -> String {
    if ctx.is_variable_in_signature() {
        match &var.class {
            Some(class) => {
                let multiplicity = var.multiplicity.unwrap_or(strata_model::Multiplicity::ONE);
                format!(
                    "{}: {}[{}]",
                    var.name,
                    class,
                    literal_renderer::render_multiplicity(&multiplicity)
                )
            }
            None => var.name.clone(),
        }
    } else {
        format!("${}", var.name)
    }
}

// ----------------------------------------------------------------------
// Lambdas
// ----------------------------------------------------------------------

pub(crate) fn render_lambda(lambda: &LambdaFunction, ctx: &RenderContext) -> String {
    let signature_ctx = ctx.with_variable_in_signature(true);
    let parameters = lambda
        .parameters
        .iter()
        .map(|p| render_variable(p, &signature_ctx))
        .join(",");

    // Single parameter, single statement: inline without braces
    if lambda.parameters.len() <= 1 && lambda.body.len() == 1 {
        return format!(
            "{}|{}",
            parameters,
            render_value_specification(&lambda.body[0], ctx)
        );
    }

    if ctx.is_pretty() {
        let inner = ctx.indented(1);
        let body = lambda
            .body
            .iter()
            .map(|s| format!("{}{}", inner.break_line(), render_value_specification(s, &inner)))
            .join(";");
        format!("{{{}|{}{}}}", parameters, body, ctx.break_line())
    } else {
        let body = lambda
            .body
            .iter()
            .map(|s| render_value_specification(s, ctx))
            .join("; ");
        format!("{{{}|{}}}", parameters, body)
    }
}

// ----------------------------------------------------------------------
// Function applications
// ----------------------------------------------------------------------

fn render_applied_function(func: &AppliedFunction, ctx: &RenderContext) -> String {
    match func.function.as_str() {
        "getAll" => render_get_all(func, "all", ctx),
        "getAllVersions" => render_get_all(func, "allVersions", ctx),
        "letFunction" => render_let(func, ctx),
        "new" => render_new(func, ctx),
        "not" => render_not(func, ctx),
        "if" => render_if(func, ctx),
        name => match infix_operator(name) {
            Some(op) => render_infix(func, op, ctx),
            None => render_generic_call(func, ctx),
        },
    }
}

/// `getAll(Type, dates...)` -> `Type.all(dates...)`
fn render_get_all(func: &AppliedFunction, surface: &str, ctx: &RenderContext) -> String {
    let Some((class, rest)) = func.parameters.split_first() else {
        return render_generic_call(func, ctx);
    };
    let arguments = rest
        .iter()
        .map(|a| render_value_specification(a, ctx))
        .join(", ");
    format!(
        "{}.{}({})",
        render_value_specification(class, ctx),
        surface,
        arguments
    )
}

/// `letFunction('name', value)` -> `let name = value`
fn render_let(func: &AppliedFunction, ctx: &RenderContext) -> String {
    let [name, value] = func.parameters.as_slice() else {
        return render_generic_call(func, ctx);
    };
    let name_text = match name {
        ValueSpecification::String(s) => s.clone(),
        other => render_value_specification(other, ctx),
    };
    format!(
        "let {} = {}",
        name_text,
        render_value_specification(value, ctx)
    )
}

/// `new(Type, name, [key = value, ...])` -> `^Type(key = value, ...)`
fn render_new(func: &AppliedFunction, ctx: &RenderContext) -> String {
    let Some(class) = func.parameters.first() else {
        return render_generic_call(func, ctx);
    };
    let class_text = match class {
        ValueSpecification::ElementPointer(path) => path.clone(),
        ValueSpecification::String(name) => name.clone(),
        other => render_value_specification(other, ctx),
    };
    let key_expressions: &[ValueSpecification] = match func.parameters.get(2) {
        Some(ValueSpecification::Collection { values, .. }) => values,
        Some(other) => std::slice::from_ref(other),
        None => &[],
    };
    let assignments = key_expressions
        .iter()
        .map(|kv| match kv {
            ValueSpecification::Pair { first, second } => {
                let key = match first.as_ref() {
                    ValueSpecification::String(s) => s.clone(),
                    other => render_value_specification(other, ctx),
                };
                format!("{} = {}", key, render_value_specification(second, ctx))
            }
            other => render_value_specification(other, ctx),
        })
        .join(", ");
    format!("^{}({})", class_text, assignments)
}

/// `not(x)` -> `!x` for atomic operands, `!(x)` otherwise
fn render_not(func: &AppliedFunction, ctx: &RenderContext) -> String {
    let [operand] = func.parameters.as_slice() else {
        return render_generic_call(func, ctx);
    };
    let text = render_value_specification(operand, ctx);
    let atomic = is_atomic_element(operand)
        || matches!(
            operand,
            ValueSpecification::AppliedProperty(_) | ValueSpecification::ElementPointer(_)
        );
    if atomic {
        format!("!{}", text)
    } else {
        format!("!({})", text)
    }
}

/// Three-argument `if`, laid out over multiple lines in the pretty styles
fn render_if(func: &AppliedFunction, ctx: &RenderContext) -> String {
    if func.parameters.len() != 3 {
        return render_generic_call(func, ctx);
    }
    format!("if{}", render_argument_list(&func.parameters, ctx))
}

fn render_infix(func: &AppliedFunction, op: InfixOperator, ctx: &RenderContext) -> String {
    let params = &func.parameters;
    if params.len() == 1 {
        // A sole collection argument of an arithmetic operator flattens
        // into an n-ary chain
        if op.is_arithmetic() {
            if let ValueSpecification::Collection { values, .. } = &params[0] {
                if values.len() > 1 {
                    return values
                        .iter()
                        .map(|v| render_operand(v, op, ctx))
                        .join(&format!(" {} ", op.symbol));
                }
            }
        }
        // One operand cannot be expressed infix
        return render_generic_call(func, ctx);
    }
    if params.len() < 2 {
        return render_generic_call(func, ctx);
    }
    format!(
        "{} {} {}",
        render_operand(&params[0], op, ctx),
        op.symbol,
        render_operand(&params[1], op, ctx)
    )
}

/// Render an infix operand, parenthesizing it when it is itself an
/// applied function whose operator binds strictly looser than the
/// enclosing one.
fn render_operand(
    value: &ValueSpecification,
    enclosing: InfixOperator,
    ctx: &RenderContext,
) -> String {
    let text = render_value_specification(value, ctx);
    if let ValueSpecification::AppliedFunction(inner) = value {
        if let Some(inner_op) = infix_operator(&inner.function) {
            if inner_op.precedence < enclosing.precedence {
                return format!("({})", text);
            }
        }
    }
    text
}

fn render_generic_call(func: &AppliedFunction, ctx: &RenderContext) -> String {
    let params = &func.parameters;
    if params.is_empty() {
        return format!("{}()", func.function);
    }
    // The arrow form is syntactically invalid when the receiver is a
    // lambda; fall back to plain call syntax
    if matches!(params[0], ValueSpecification::Lambda(_)) {
        let arguments = params
            .iter()
            .map(|p| render_value_specification(p, ctx))
            .join(", ");
        return format!("{}({})", func.function, arguments);
    }
    let receiver = render_value_specification(&params[0], ctx);
    format!(
        "{}->{}{}",
        receiver,
        func.function,
        render_argument_list(&params[1..], ctx)
    )
}

/// Render a parenthesized argument list. A single bare primitive literal
/// stays inline; any other arity forces one line plus one indent level
/// per argument in the pretty styles.
fn render_argument_list(arguments: &[ValueSpecification], ctx: &RenderContext) -> String {
    match arguments {
        [] => "()".to_string(),
        [single] if single.is_primitive_literal() => {
            format!("({})", render_value_specification(single, ctx))
        }
        _ => {
            if ctx.is_pretty() {
                let inner = ctx.indented(1);
                let body = arguments
                    .iter()
                    .map(|a| {
                        format!("{}{}", inner.break_line(), render_value_specification(a, &inner))
                    })
                    .join(",");
                format!("({}{})", body, ctx.break_line())
            } else {
                format!(
                    "({})",
                    arguments
                        .iter()
                        .map(|a| render_value_specification(a, ctx))
                        .join(", ")
                )
            }
        }
    }
}

// ----------------------------------------------------------------------
// Property accesses, paths, graph fetch trees
// ----------------------------------------------------------------------

fn render_applied_property(prop: &AppliedProperty, ctx: &RenderContext) -> String {
    let receiver = render_value_specification(&prop.receiver, ctx);
    if ctx.is_property_bracket_expression() && receiver == SOURCE_RECEIVER {
        return format!("{}['{}']", receiver, prop.property);
    }
    if prop.parameters.is_empty() {
        format!("{}.{}", receiver, prop.property)
    } else {
        format!(
            "{}.{}({})",
            receiver,
            prop.property,
            prop.parameters
                .iter()
                .map(|p| render_value_specification(p, ctx))
                .join(", ")
        )
    }
}

fn render_path(path: &NavigationPath) -> String {
    let mut out = format!("#/{}", path.start_type);
    for segment in &path.path {
        out.push('/');
        out.push_str(segment);
    }
    if let Some(alias) = &path.alias {
        out.push('!');
        out.push_str(alias);
    }
    out.push('#');
    out
}

fn render_graph_fetch_root(tree: &GraphFetchTree, ctx: &RenderContext) -> String {
    if ctx.is_pretty() {
        let inner = ctx.indented(1);
        format!(
            "#{{{}{}{}}}#",
            inner.break_line(),
            render_graph_fetch_node(tree, &inner),
            ctx.break_line()
        )
    } else {
        format!("#{{{}}}#", render_graph_fetch_node(tree, ctx))
    }
}

fn render_graph_fetch_node(tree: &GraphFetchTree, ctx: &RenderContext) -> String {
    match tree {
        GraphFetchTree::Root { class, subtrees } => {
            format!("{}{}", class, render_graph_fetch_subtrees(subtrees, ctx))
        }
        GraphFetchTree::Property {
            property,
            alias,
            parameters,
            subtype,
            subtrees,
        } => {
            let mut out = String::new();
            if let Some(alias) = alias {
                out.push_str(alias);
                out.push(':');
            }
            out.push_str(property);
            if !parameters.is_empty() {
                out.push_str(&format!(
                    "({})",
                    parameters
                        .iter()
                        .map(|p| render_value_specification(p, ctx))
                        .join(", ")
                ));
            }
            if let Some(subtype) = subtype {
                out.push_str(&format!("->subType(@{})", subtype));
            }
            out.push_str(&render_graph_fetch_subtrees(subtrees, ctx));
            out
        }
    }
}

fn render_graph_fetch_subtrees(subtrees: &[GraphFetchTree], ctx: &RenderContext) -> String {
    if subtrees.is_empty() {
        return String::new();
    }
    if ctx.is_pretty() {
        let inner = ctx.indented(1);
        let body = subtrees
            .iter()
            .map(|t| format!("{}{}", inner.break_line(), render_graph_fetch_node(t, &inner)))
            .join(",");
        format!("{{{}{}}}", body, ctx.break_line())
    } else {
        format!(
            "{{{}}}",
            subtrees
                .iter()
                .map(|t| render_graph_fetch_node(t, ctx))
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::context::RenderStyle;
    use strata_model::Multiplicity;

    fn standard() -> RenderContext {
        RenderContext::new(RenderStyle::Standard)
    }

    fn pretty() -> RenderContext {
        RenderContext::new(RenderStyle::Pretty)
    }

    fn var(name: &str) -> ValueSpecification {
        ValueSpecification::variable(name)
    }

    fn call(function: &str, parameters: Vec<ValueSpecification>) -> ValueSpecification {
        ValueSpecification::AppliedFunction(AppliedFunction::new(function, parameters))
    }

    #[test]
    fn lower_precedence_operand_is_parenthesized() {
        // (a + b) * c
        let expr = call("times", vec![call("plus", vec![var("a"), var("b")]), var("c")]);
        assert_eq!(render_value_specification(&expr, &standard()), "($a + $b) * $c");
    }

    #[test]
    fn higher_precedence_operand_is_not_parenthesized() {
        // a * b + c
        let expr = call("plus", vec![call("times", vec![var("a"), var("b")]), var("c")]);
        assert_eq!(render_value_specification(&expr, &standard()), "$a * $b + $c");
    }

    #[test]
    fn same_precedence_chain_renders_flat() {
        let expr = call("minus", vec![call("plus", vec![var("a"), var("b")]), var("c")]);
        assert_eq!(render_value_specification(&expr, &standard()), "$a + $b - $c");
    }

    #[test]
    fn relational_operands_of_boolean_render_flat() {
        let expr = call(
            "and",
            vec![
                call("lessThan", vec![var("a"), var("b")]),
                call("equal", vec![var("c"), var("d")]),
            ],
        );
        assert_eq!(
            render_value_specification(&expr, &standard()),
            "$a < $b && $c == $d"
        );
    }

    #[test]
    fn boolean_operand_of_relational_is_parenthesized() {
        let expr = call("equal", vec![call("and", vec![var("a"), var("b")]), var("c")]);
        assert_eq!(
            render_value_specification(&expr, &standard()),
            "($a && $b) == $c"
        );
    }

    #[test]
    fn arithmetic_collection_argument_flattens() {
        let expr = call(
            "plus",
            vec![ValueSpecification::Collection {
                multiplicity: Multiplicity::ZERO_MANY,
                values: vec![var("a"), var("b"), var("c")],
            }],
        );
        assert_eq!(render_value_specification(&expr, &standard()), "$a + $b + $c");
    }

    #[test]
    fn lone_operand_falls_back_to_call_syntax() {
        let expr = call("minus", vec![ValueSpecification::integer(5)]);
        assert_eq!(render_value_specification(&expr, &standard()), "5->minus()");
    }

    #[test]
    fn collection_unwrap_rules() {
        let single = ValueSpecification::Collection {
            multiplicity: Multiplicity::ONE,
            values: vec![ValueSpecification::integer(5)],
        };
        assert_eq!(render_value_specification(&single, &standard()), "5");

        let single_of_many = ValueSpecification::Collection {
            multiplicity: Multiplicity::ZERO_MANY,
            values: vec![ValueSpecification::integer(5)],
        };
        assert_eq!(render_value_specification(&single_of_many, &standard()), "[5]");

        let empty = ValueSpecification::Collection {
            multiplicity: Multiplicity::ONE,
            values: vec![],
        };
        assert_eq!(render_value_specification(&empty, &standard()), "[]");
    }

    #[test]
    fn pretty_collection_breaks_lines() {
        let coll = ValueSpecification::Collection {
            multiplicity: Multiplicity::ZERO_MANY,
            values: vec![ValueSpecification::integer(1), ValueSpecification::integer(2)],
        };
        assert_eq!(render_value_specification(&coll, &pretty()), "[\n  1,\n  2\n]");
        assert_eq!(render_value_specification(&coll, &standard()), "[1, 2]");
    }

    #[test]
    fn inline_lambda() {
        let lambda = ValueSpecification::Lambda(LambdaFunction {
            parameters: vec![Variable::named("x")],
            body: vec![call("plus", vec![var("x"), ValueSpecification::integer(1)])],
        });
        assert_eq!(render_value_specification(&lambda, &standard()), "x|$x + 1");
    }

    #[test]
    fn multi_statement_lambda_wraps_in_braces() {
        let lambda = ValueSpecification::Lambda(LambdaFunction {
            parameters: vec![Variable::named("x")],
            body: vec![var("x"), var("x")],
        });
        assert_eq!(render_value_specification(&lambda, &standard()), "{x|$x; $x}");
        assert_eq!(
            render_value_specification(&lambda, &pretty()),
            "{x|\n  $x;\n  $x\n}"
        );
    }

    #[test]
    fn two_parameter_lambda_wraps_in_braces() {
        let lambda = ValueSpecification::Lambda(LambdaFunction {
            parameters: vec![Variable::named("x"), Variable::named("y")],
            body: vec![call("plus", vec![var("x"), var("y")])],
        });
        assert_eq!(render_value_specification(&lambda, &standard()), "{x,y|$x + $y}");
    }

    #[test]
    fn get_all_special_form() {
        let expr = call(
            "getAll",
            vec![ValueSpecification::ElementPointer("model::Person".to_string())],
        );
        assert_eq!(
            render_value_specification(&expr, &standard()),
            "model::Person.all()"
        );
    }

    #[test]
    fn let_special_form() {
        let expr = call(
            "letFunction",
            vec![
                ValueSpecification::string("total"),
                call("plus", vec![var("a"), var("b")]),
            ],
        );
        assert_eq!(
            render_value_specification(&expr, &standard()),
            "let total = $a + $b"
        );
    }

    #[test]
    fn new_special_form() {
        let expr = call(
            "new",
            vec![
                ValueSpecification::ElementPointer("model::Person".to_string()),
                ValueSpecification::string(""),
                ValueSpecification::Collection {
                    multiplicity: Multiplicity::ZERO_MANY,
                    values: vec![ValueSpecification::Pair {
                        first: Box::new(ValueSpecification::string("name")),
                        second: Box::new(ValueSpecification::string("Ada")),
                    }],
                },
            ],
        );
        assert_eq!(
            render_value_specification(&expr, &standard()),
            "^model::Person(name = 'Ada')"
        );
    }

    #[test]
    fn not_parenthesizes_composite_operands_only() {
        let atomic = call("not", vec![var("flag")]);
        assert_eq!(render_value_specification(&atomic, &standard()), "!$flag");

        let composite = call("not", vec![call("equal", vec![var("a"), var("b")])]);
        assert_eq!(
            render_value_specification(&composite, &standard()),
            "!($a == $b)"
        );
    }

    #[test]
    fn if_layout_per_style() {
        let expr = call(
            "if",
            vec![
                call("greaterThan", vec![var("x"), ValueSpecification::integer(1)]),
                ValueSpecification::Lambda(LambdaFunction::of(ValueSpecification::string("a"))),
                ValueSpecification::Lambda(LambdaFunction::of(ValueSpecification::string("b"))),
            ],
        );
        assert_eq!(
            render_value_specification(&expr, &standard()),
            "if($x > 1, |'a', |'b')"
        );
        assert_eq!(
            render_value_specification(&expr, &pretty()),
            "if(\n  $x > 1,\n  |'a',\n  |'b'\n)"
        );
    }

    #[test]
    fn generic_call_arrow_form() {
        let expr = call("trim", vec![var("name")]);
        assert_eq!(render_value_specification(&expr, &standard()), "$name->trim()");

        let with_arg = call("startsWith", vec![var("name"), ValueSpecification::string("A")]);
        assert_eq!(
            render_value_specification(&with_arg, &standard()),
            "$name->startsWith('A')"
        );
    }

    #[test]
    fn lambda_receiver_uses_plain_call_syntax() {
        let lambda = ValueSpecification::Lambda(LambdaFunction::of(var("x")));
        let expr = call("eval", vec![lambda, ValueSpecification::integer(1)]);
        assert_eq!(render_value_specification(&expr, &standard()), "eval(|$x, 1)");
    }

    #[test]
    fn pretty_call_breaks_non_primitive_arguments() {
        let lambda = ValueSpecification::Lambda(LambdaFunction {
            parameters: vec![Variable::named("p")],
            body: vec![ValueSpecification::AppliedProperty(AppliedProperty {
                receiver: Box::new(var("p")),
                property: "active".to_string(),
                parameters: vec![],
            })],
        });
        let expr = call("filter", vec![var("people"), lambda]);
        assert_eq!(
            render_value_specification(&expr, &standard()),
            "$people->filter(p|$p.active)"
        );
        assert_eq!(
            render_value_specification(&expr, &pretty()),
            "$people->filter(\n  p|$p.active\n)"
        );
    }

    #[test]
    fn qualified_property_arguments() {
        let expr = ValueSpecification::AppliedProperty(AppliedProperty {
            receiver: Box::new(var("this")),
            property: "nameWithTitle".to_string(),
            parameters: vec![ValueSpecification::string("Dr")],
        });
        assert_eq!(
            render_value_specification(&expr, &standard()),
            "$this.nameWithTitle('Dr')"
        );
    }

    #[test]
    fn property_bracket_mode_rewrites_source_receiver() {
        let expr = ValueSpecification::AppliedProperty(AppliedProperty {
            receiver: Box::new(var("src")),
            property: "name".to_string(),
            parameters: vec![],
        });
        let ctx = standard().with_property_bracket_expression(true);
        assert_eq!(render_value_specification(&expr, &ctx), "$src['name']");
        assert_eq!(render_value_specification(&expr, &standard()), "$src.name");
    }

    #[test]
    fn navigation_path() {
        let expr = ValueSpecification::Path(NavigationPath {
            start_type: "Person".to_string(),
            path: vec!["firm".to_string(), "legalName".to_string()],
            alias: Some("firmName".to_string()),
        });
        assert_eq!(
            render_value_specification(&expr, &standard()),
            "#/Person/firm/legalName!firmName#"
        );
    }

    #[test]
    fn graph_fetch_tree_per_style() {
        let tree = ValueSpecification::GraphFetch(GraphFetchTree::Root {
            class: "model::Person".to_string(),
            subtrees: vec![
                GraphFetchTree::Property {
                    property: "name".to_string(),
                    alias: None,
                    parameters: vec![],
                    subtype: None,
                    subtrees: vec![],
                },
                GraphFetchTree::Property {
                    property: "address".to_string(),
                    alias: Some("home".to_string()),
                    parameters: vec![],
                    subtype: Some("model::StreetAddress".to_string()),
                    subtrees: vec![GraphFetchTree::Property {
                        property: "street".to_string(),
                        alias: None,
                        parameters: vec![],
                        subtype: None,
                        subtrees: vec![],
                    }],
                },
            ],
        });
        assert_eq!(
            render_value_specification(&tree, &standard()),
            "#{model::Person{name, home:address->subType(@model::StreetAddress){street}}}#"
        );
        assert_eq!(
            render_value_specification(&tree, &pretty()),
            "#{\n  model::Person{\n    name,\n    home:address->subType(@model::StreetAddress){\n      street\n    }\n  }\n}#"
        );
    }

    #[test]
    fn unsupported_kind_yields_marker_and_continues() {
        let ctx = standard();
        let coll = ValueSpecification::Collection {
            multiplicity: Multiplicity::ZERO_MANY,
            values: vec![
                ValueSpecification::integer(1),
                ValueSpecification::Unsupported("Projection".to_string()),
                ValueSpecification::integer(2),
            ],
        };
        let text = render_value_specification(&coll, &ctx);
        assert_eq!(text, "[1, /* Unsupported value specification: Projection */, 2]");
        assert_eq!(ctx.unsupported_constructs().len(), 1);
    }

    #[test]
    fn signature_variables_render_without_sigil() {
        let typed = ValueSpecification::Variable(Variable::typed(
            "x",
            "Integer",
            Multiplicity::ONE,
        ));
        let ctx = standard().with_variable_in_signature(true);
        assert_eq!(render_value_specification(&typed, &ctx), "x: Integer[1]");
        assert_eq!(render_value_specification(&typed, &standard()), "$x");
    }
}

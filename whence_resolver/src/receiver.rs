//! Minimal structural parse of a call line.
//!
//! The line is handed to `syn` as the body of a block. Only thin wrappers
//! around the assertion call are looked through (`let`, assignment, `?`,
//! `.await`, `&`, `return`, `Ok(..)`/`Some(..)`/`Err(..)`, macro arguments
//! and trailing adaptors like `.unwrap()`); the call must then have a bare
//! identifier as its receiver.

use syn::ext::IdentExt;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Block, Expr, Macro, Stmt, Token};

use crate::Identifier;
use crate::error::ResolveError;

/// The expression immediately before `.invoked_name(..)` on a line.
#[derive(Debug, Clone)]
pub struct ReceiverExpression {
    expr: Expr,
}

impl ReceiverExpression {
    /// Finds the single call of `invoked_name` in `code`.
    pub fn parse(code: &str, invoked_name: &str) -> Result<Self, ResolveError> {
        let mut stmts = Block::parse_within.parse_str(code)?;
        let stmt = match stmts.len() {
            0 => {
                return Err(ResolveError::NoMatchingCall {
                    name: invoked_name.to_string(),
                });
            },
            1 => stmts.remove(0),
            n => return Err(ResolveError::MultipleStatements(n)),
        };

        let mut receivers = Vec::new();
        collect_stmt(&stmt, invoked_name, &mut receivers);

        match receivers.len() {
            0 => Err(ResolveError::NoMatchingCall {
                name: invoked_name.to_string(),
            }),
            1 => Ok(Self {
                expr: receivers.remove(0),
            }),
            count => Err(ResolveError::AmbiguousCall {
                name: invoked_name.to_string(),
                count,
            }),
        }
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// The receiver's name, if it is a bare identifier.
    pub fn identifier(&self) -> Result<Identifier, ResolveError> {
        match &self.expr {
            Expr::Path(path) if path.qself.is_none() => path
                .path
                .get_ident()
                .map(|ident| Identifier::new(ident.unraw().to_string()))
                .ok_or(ResolveError::UnsupportedReceiver("a qualified path")),
            other => Err(ResolveError::UnsupportedReceiver(describe(other))),
        }
    }
}

fn collect_stmt(stmt: &Stmt, name: &str, out: &mut Vec<Expr>) {
    match stmt {
        Stmt::Local(local) => {
            if let Some(init) = &local.init {
                collect_expr(&init.expr, name, out);
            }
        },
        Stmt::Expr(expr, _) => collect_expr(expr, name, out),
        Stmt::Macro(stmt) => collect_macro(&stmt.mac, name, out),
        _ => {},
    }
}

fn collect_expr(expr: &Expr, name: &str, out: &mut Vec<Expr>) {
    match expr {
        Expr::MethodCall(call) if call.method.unraw() == name => out.push((*call.receiver).clone()),
        // adaptor such as `.unwrap()` or `.is_err()` after the call
        Expr::MethodCall(call) => collect_expr(&call.receiver, name, out),
        Expr::Try(e) => collect_expr(&e.expr, name, out),
        Expr::Await(e) => collect_expr(&e.base, name, out),
        Expr::Assign(e) => collect_expr(&e.right, name, out),
        Expr::Macro(e) => collect_macro(&e.mac, name, out),
        Expr::Reference(e) => collect_expr(&e.expr, name, out),
        Expr::Return(e) => {
            if let Some(inner) = &e.expr {
                collect_expr(inner, name, out);
            }
        },
        // `Ok(..)`, `Some(..)` and `Err(..)` around a tail call
        Expr::Call(call) if call.args.len() == 1 && is_variant_ctor(&call.func) => {
            collect_expr(&call.args[0], name, out);
        },
        _ => {},
    }
}

fn is_variant_ctor(func: &Expr) -> bool {
    match func {
        Expr::Path(path) if path.qself.is_none() => path
            .path
            .get_ident()
            .is_some_and(|ident| ident == "Ok" || ident == "Some" || ident == "Err"),
        _ => false,
    }
}

fn collect_macro(mac: &Macro, name: &str, out: &mut Vec<Expr>) {
    // bodies that are not plain expression lists are skipped
    if let Ok(args) = mac.parse_body_with(Punctuated::<Expr, Token![,]>::parse_terminated) {
        for arg in &args {
            collect_expr(arg, name, out);
        }
    }
}

fn describe(expr: &Expr) -> &'static str {
    match expr {
        Expr::Lit(_) => "a literal",
        Expr::Field(_) => "a field access",
        Expr::Paren(_) => "a parenthesized expression",
        Expr::Index(_) => "an index expression",
        Expr::Call(_) => "a function call",
        Expr::MethodCall(_) => "a method call",
        Expr::Reference(_) => "a reference",
        Expr::Unary(_) => "a unary expression",
        Expr::Binary(_) => "a binary expression",
        Expr::Macro(_) => "a macro invocation",
        Expr::Path(_) => "a qualified path",
        _ => "a compound expression",
    }
}

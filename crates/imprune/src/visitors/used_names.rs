//! Reference collector: one traversal of the module tree producing the set
//! of identifier names that are read as a value, referenced in JSX markup,
//! or named in a type annotation.
//!
//! The collection points are deliberately narrow. There is no `visit_ident`
//! override, so an identifier is only recorded from the positions listed on
//! the visitor below; import-specifier locals, property keys,
//! member-expression property names, declaration names and binding patterns
//! never reach the set. That asymmetry is what lets the rewriter tell
//! "declared but unused" apart from "used".

use indexmap::IndexSet;
use swc_core::ecma::ast::{
    Expr, ExportSpecifier, Ident, JSXElementName, JSXObject, Module, ModuleExportName,
    NamedExport, Prop, TsEntityName, TsTypeQuery, TsTypeQueryExpr, TsTypeRef,
};
use swc_core::ecma::visit::{Visit, VisitWith};

pub struct UsedNameCollector {
    used: IndexSet<String>,
}

impl UsedNameCollector {
    /// Walk `module` once and return every name it references.
    pub fn collect(module: &Module) -> IndexSet<String> {
        let mut collector = Self {
            used: IndexSet::new(),
        };
        module.visit_with(&mut collector);
        collector.used
    }

    fn mark(&mut self, ident: &Ident) {
        self.used.insert(ident.sym.to_string());
    }
}

/// Left-most identifier of a possibly qualified type name: `A.B.C` binds `A`.
fn entity_root(name: &TsEntityName) -> &Ident {
    match name {
        TsEntityName::Ident(ident) => ident,
        TsEntityName::TsQualifiedName(qualified) => entity_root(&qualified.left),
    }
}

/// Root object of a JSX member expression: `<Foo.Bar.Baz />` binds `Foo`.
fn jsx_root(object: &JSXObject) -> &Ident {
    match object {
        JSXObject::Ident(ident) => ident,
        JSXObject::JSXMemberExpr(member) => jsx_root(&member.obj),
    }
}

impl Visit for UsedNameCollector {
    // Expression-position identifiers resolve to a binding.
    fn visit_expr(&mut self, expr: &Expr) {
        if let Expr::Ident(ident) = expr {
            self.mark(ident);
        }
        expr.visit_children_with(self);
    }

    // Object shorthand `{ foo }` reads `foo`; keyed properties do not read
    // their key.
    fn visit_prop(&mut self, prop: &Prop) {
        if let Prop::Shorthand(ident) = prop {
            self.mark(ident);
        }
        prop.visit_children_with(self);
    }

    // JSX element names live in their own node category but reference
    // bindings the same way expression identifiers do. Namespaced names
    // (`<svg:path />`) are literal markup, not references.
    fn visit_jsx_element_name(&mut self, name: &JSXElementName) {
        match name {
            JSXElementName::Ident(ident) => self.mark(ident),
            JSXElementName::JSXMemberExpr(member) => self.mark(jsx_root(&member.obj)),
            JSXElementName::JSXNamespacedName(_) => {}
        }
    }

    // A type annotation referencing an imported name keeps that import
    // alive even though the reference never appears in emitted code.
    fn visit_ts_type_ref(&mut self, type_ref: &TsTypeRef) {
        self.mark(entity_root(&type_ref.type_name));
        // Type arguments may reference further names.
        type_ref.visit_children_with(self);
    }

    // `typeof X` in a type position reads the value binding `X`.
    fn visit_ts_type_query(&mut self, query: &TsTypeQuery) {
        if let TsTypeQueryExpr::TsEntityName(name) = &query.expr_name {
            self.mark(entity_root(name));
        }
        query.visit_children_with(self);
    }

    // `export { foo }` reads the local binding; `export { foo } from '...'`
    // does not touch any local name.
    fn visit_named_export(&mut self, export: &NamedExport) {
        if export.src.is_none() {
            for specifier in &export.specifiers {
                if let ExportSpecifier::Named(named) = specifier {
                    if let ModuleExportName::Ident(ident) = &named.orig {
                        self.mark(ident);
                    }
                }
            }
        }
        export.visit_children_with(self);
    }
}

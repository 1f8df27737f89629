use std::cell::RefCell;
use std::collections::HashMap;
use std::mem;
use std::rc::Rc;

use crate::error::{Diagnostics, ResolveError};
use crate::expr::*;
use crate::interpreter::Interpreter;
use crate::stmt::*;
use crate::token::Token;

#[derive(Clone, Copy, PartialEq)]
enum FunctionType {
    None,
    Function,
    Initializer,
    Method,
}

#[derive(Clone, Copy, PartialEq)]
enum ClassType {
    None,
    Class,
    Subclass,
}

/// Static pass over the AST that determines, for every variable
/// reference, how many enclosing scopes separate it from its
/// declaration. The result is recorded on the interpreter keyed by each
/// expression's `NodeId`, not by source text or token identity.
pub struct Resolver<'a> {
    interpreter: &'a mut Interpreter,
    diagnostics: Rc<RefCell<Diagnostics>>,
    scopes: Vec<HashMap<String, bool>>,
    current_function: FunctionType,
    current_class: ClassType,
}

impl<'a> Resolver<'a> {
    pub fn new(interpreter: &'a mut Interpreter, diagnostics: Rc<RefCell<Diagnostics>>) -> Self {
        Resolver {
            interpreter,
            diagnostics,
            scopes: Vec::new(),
            current_function: FunctionType::None,
            current_class: ClassType::None,
        }
    }

    pub fn resolve(&mut self, statements: &[Stmt]) {
        for statement in statements {
            self.resolve_stmt(statement);
        }
    }

    fn resolve_stmt(&mut self, stmt: &Stmt) {
        stmt.accept(self);
    }

    fn resolve_expr(&mut self, expr: &Expr) {
        expr.accept(self);
    }

    fn resolve_function(&mut self, params: &[Token], body: &[Stmt], kind: FunctionType) {
        let enclosing_function = mem::replace(&mut self.current_function, kind);

        self.begin_scope();
        for param in params {
            self.declare(param);
            self.define(param);
        }
        self.resolve(body);
        self.end_scope();

        self.current_function = enclosing_function;
    }

    fn begin_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    fn end_scope(&mut self) {
        self.scopes.pop();
    }

    fn declare(&mut self, name: &Token) {
        let Some(scope) = self.scopes.last_mut() else { return };

        if scope.contains_key(&name.lexeme) {
            self.diagnostics.borrow_mut().resolve_error(&ResolveError {
                token: name.clone(),
                message: format!("Already a variable with this name '{}' in this scope.", name.lexeme),
            });
        }
        scope.insert(name.lexeme.clone(), false);
    }

    fn define(&mut self, name: &Token) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.lexeme.clone(), true);
        }
    }

    fn resolve_local(&mut self, id: NodeId, name: &Token) {
        for (depth, scope) in self.scopes.iter().rev().enumerate() {
            if scope.contains_key(&name.lexeme) {
                self.interpreter.resolve(id, depth);
                return;
            }
        }
    }
}

impl<'a> ExprVisitor<()> for Resolver<'a> {
    fn visit_variable_expr(&mut self, data: &VariableData) {
        if let Some(scope) = self.scopes.last() {
            if scope.get(&data.name.lexeme) == Some(&false) {
                self.diagnostics.borrow_mut().resolve_error(&ResolveError {
                    token: data.name.clone(),
                    message: "Can't read local variable in its own initializer.".to_string(),
                });
            }
        }

        self.resolve_local(data.id, &data.name);
    }

    fn visit_assign_expr(&mut self, data: &AssignData) {
        self.resolve_expr(&data.value);
        self.resolve_local(data.id, &data.name);
    }

    fn visit_literal_expr(&mut self, _literal: &crate::literal::Literal) {}

    fn visit_logical_expr(&mut self, data: &LogicalData) {
        self.resolve_expr(&data.left);
        self.resolve_expr(&data.right);
    }

    fn visit_unary_expr(&mut self, data: &UnaryData) {
        self.resolve_expr(&data.expr);
    }

    fn visit_binary_expr(&mut self, data: &BinaryData) {
        self.resolve_expr(&data.left);
        self.resolve_expr(&data.right);
    }

    fn visit_grouping_expr(&mut self, data: &GroupingData) {
        self.resolve_expr(&data.expr);
    }

    fn visit_call_expr(&mut self, data: &CallData) {
        self.resolve_expr(&data.callee);
        for argument in &data.arguments {
            self.resolve_expr(argument);
        }
    }

    fn visit_get_expr(&mut self, data: &GetData) {
        self.resolve_expr(&data.object);
    }

    fn visit_set_expr(&mut self, data: &SetData) {
        self.resolve_expr(&data.value);
        self.resolve_expr(&data.object);
    }

    fn visit_this_expr(&mut self, data: &ThisData) {
        if self.current_class == ClassType::None {
            self.diagnostics.borrow_mut().resolve_error(&ResolveError {
                token: data.keyword.clone(),
                message: "Can't use 'this' outside of a class.".to_string(),
            });
            return;
        }

        self.resolve_local(data.id, &data.keyword);
    }

    fn visit_super_expr(&mut self, data: &SuperData) {
        match self.current_class {
            ClassType::Subclass => {},
            ClassType::None => self.diagnostics.borrow_mut().resolve_error(&ResolveError {
                token: data.keyword.clone(),
                message: "Can't use 'super' outside of a class.".to_string(),
            }),
            ClassType::Class => self.diagnostics.borrow_mut().resolve_error(&ResolveError {
                token: data.keyword.clone(),
                message: "Can't use 'super' in a class with no superclass.".to_string(),
            }),
        }

        self.resolve_local(data.id, &data.keyword);
    }
}

impl<'a> StmtVisitor<()> for Resolver<'a> {
    fn visit_block_stmt(&mut self, data: &BlockData) {
        self.begin_scope();
        self.resolve(&data.statements);
        self.end_scope();
    }

    fn visit_var_stmt(&mut self, data: &VarData) {
        self.declare(&data.name);
        if let Some(initializer) = &data.initializer {
            self.resolve_expr(initializer);
        }
        self.define(&data.name);
    }

    fn visit_function_stmt(&mut self, data: &FunctionData) {
        self.declare(&data.name);
        self.define(&data.name);

        self.resolve_function(&data.params, &data.body, FunctionType::Function);
    }

    fn visit_expression_stmt(&mut self, data: &ExpressionData) {
        self.resolve_expr(&data.expr);
    }

    fn visit_if_stmt(&mut self, data: &IfData) {
        self.resolve_expr(&data.condition);
        self.resolve_stmt(&data.then_branch);
        if let Some(else_branch) = &data.else_branch {
            self.resolve_stmt(else_branch);
        }
    }

    fn visit_print_stmt(&mut self, data: &PrintData) {
        self.resolve_expr(&data.expr);
    }

    fn visit_return_stmt(&mut self, data: &ReturnData) {
        if self.current_function == FunctionType::None {
            self.diagnostics.borrow_mut().resolve_error(&ResolveError {
                token: data.keyword.clone(),
                message: "Can't return from top-level code.".to_string(),
            });
        }

        if let Some(value) = &data.value {
            if self.current_function == FunctionType::Initializer {
                self.diagnostics.borrow_mut().resolve_error(&ResolveError {
                    token: data.keyword.clone(),
                    message: "Can't return a value from an initializer.".to_string(),
                });
                return;
            }

            self.resolve_expr(value);
        }
    }

    fn visit_while_stmt(&mut self, data: &WhileData) {
        self.resolve_expr(&data.condition);
        self.resolve_stmt(&data.body);
    }

    fn visit_class_stmt(&mut self, data: &ClassData) {
        let enclosing_class = mem::replace(&mut self.current_class, ClassType::Class);

        self.declare(&data.name);
        self.define(&data.name);

        if let Some(Expr::Variable(superclass)) = &data.superclass {
            if data.name.lexeme == superclass.name.lexeme {
                self.diagnostics.borrow_mut().resolve_error(&ResolveError {
                    token: superclass.name.clone(),
                    message: "A class can't inherit from itself.".to_string(),
                });
            }

            self.current_class = ClassType::Subclass;
            self.resolve_expr(data.superclass.as_ref().unwrap());

            self.begin_scope();
            self.scopes.last_mut().expect("scope just pushed").insert("super".to_string(), true);
        }

        self.begin_scope();
        self.scopes.last_mut().expect("scope just pushed").insert("this".to_string(), true);

        for method in &data.methods {
            if let Stmt::Function(function) = method {
                let kind = if function.name.lexeme == "init" {
                    FunctionType::Initializer
                } else {
                    FunctionType::Method
                };
                self.resolve_function(&function.params, &function.body, kind);
            }
        }

        self.end_scope();

        if data.superclass.is_some() {
            self.end_scope();
        }

        self.current_class = enclosing_class;
    }
}

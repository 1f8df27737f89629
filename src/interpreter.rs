use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::rc::Rc;

use tracing::trace;

use crate::class::{Class, Instance};
use crate::environment::Environment;
use crate::error::{Diagnostics, RuntimeError};
use crate::expr::*;
use crate::function::{Function, NativeFunction};
use crate::literal::Literal;
use crate::object::{Callable, Object};
use crate::stmt::*;
use crate::token::{Token, TokenKind};

/// The non-local control flow a statement can produce: either normal
/// completion, or a `return` unwinding to the enclosing function call.
pub enum Signal {
    Normal,
    Return(Object),
}

/// Walks the AST and evaluates it against a chain of environments.
pub struct Interpreter {
    pub globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    locals: HashMap<NodeId, usize>,
    diagnostics: Rc<RefCell<Diagnostics>>,
    stdout: Box<dyn Write>,
}

impl Interpreter {
    pub fn new(diagnostics: Rc<RefCell<Diagnostics>>, stdout: Box<dyn Write>) -> Self {
        let globals = Rc::new(RefCell::new(Environment::default()));

        for native in NativeFunction::globals() {
            let name = native.name.to_string();
            globals.borrow_mut().define(&name, Object::NativeFunction(Rc::new(native)));
        }

        Interpreter {
            environment: Rc::clone(&globals),
            globals,
            locals: HashMap::new(),
            diagnostics,
            stdout,
        }
    }

    /// Records the lexical depth the resolver computed for an expression.
    pub fn resolve(&mut self, id: NodeId, depth: usize) {
        self.locals.insert(id, depth);
    }

    pub fn interpret(&mut self, statements: &[Stmt]) {
        for statement in statements {
            if let Err(error) = self.execute(statement) {
                self.diagnostics.borrow_mut().runtime_error(&error);
                return;
            }
        }
    }

    fn execute(&mut self, stmt: &Stmt) -> Result<Signal, RuntimeError> {
        stmt.accept(self)
    }

    pub fn execute_block(&mut self, statements: &[Stmt], environment: Rc<RefCell<Environment>>) -> Result<Signal, RuntimeError> {
        let previous = std::mem::replace(&mut self.environment, environment);

        let result = (|| {
            for statement in statements {
                match self.execute(statement)? {
                    Signal::Normal => continue,
                    signal @ Signal::Return(_) => return Ok(signal),
                }
            }
            Ok(Signal::Normal)
        })();

        self.environment = previous;
        result
    }

    fn evaluate(&mut self, expr: &Expr) -> Result<Object, RuntimeError> {
        expr.accept(self)
    }

    fn lookup_variable(&self, id: NodeId, name: &Token) -> Result<Object, RuntimeError> {
        match self.locals.get(&id) {
            Some(&depth) => self.environment.borrow().get_at(depth, name),
            None => self.globals.borrow().get(name),
        }
    }

    fn check_number_operand(&self, operator: &Token, operand: &Object) -> Result<f64, RuntimeError> {
        match operand {
            Object::Number(n) => Ok(*n),
            _ => Err(RuntimeError { token: operator.clone(), message: "Operand must be a number.".to_string() }),
        }
    }

    fn check_number_operands(&self, operator: &Token, left: &Object, right: &Object) -> Result<(f64, f64), RuntimeError> {
        match (left, right) {
            (Object::Number(l), Object::Number(r)) => Ok((*l, *r)),
            _ => Err(RuntimeError { token: operator.clone(), message: "Operands must be numbers.".to_string() }),
        }
    }
}

impl ExprVisitor<Result<Object, RuntimeError>> for Interpreter {
    fn visit_literal_expr(&mut self, literal: &Literal) -> Result<Object, RuntimeError> {
        Ok(Object::from(literal.clone()))
    }

    fn visit_grouping_expr(&mut self, data: &GroupingData) -> Result<Object, RuntimeError> {
        self.evaluate(&data.expr)
    }

    fn visit_unary_expr(&mut self, data: &UnaryData) -> Result<Object, RuntimeError> {
        let right = self.evaluate(&data.expr)?;

        match data.operator.kind {
            TokenKind::Minus => Ok(Object::Number(-self.check_number_operand(&data.operator, &right)?)),
            TokenKind::Bang => Ok(Object::Bool(!right.is_truthy())),
            _ => unreachable!("parser only produces '-' and '!' unary operators"),
        }
    }

    fn visit_binary_expr(&mut self, data: &BinaryData) -> Result<Object, RuntimeError> {
        let left = self.evaluate(&data.left)?;
        let right = self.evaluate(&data.right)?;
        let operator = &data.operator;

        match operator.kind {
            TokenKind::Plus => match (&left, &right) {
                (Object::Number(l), Object::Number(r)) => Ok(Object::Number(l + r)),
                (Object::String(l), Object::String(r)) => Ok(Object::String(format!("{l}{r}"))),
                _ => Err(RuntimeError {
                    token: operator.clone(),
                    message: "Operands must be two numbers or two strings.".to_string(),
                }),
            },
            TokenKind::Minus => {
                let (l, r) = self.check_number_operands(operator, &left, &right)?;
                Ok(Object::Number(l - r))
            },
            TokenKind::Star => {
                let (l, r) = self.check_number_operands(operator, &left, &right)?;
                Ok(Object::Number(l * r))
            },
            TokenKind::Slash => {
                let (l, r) = self.check_number_operands(operator, &left, &right)?;
                if r == 0.0 {
                    return Err(RuntimeError { token: operator.clone(), message: "Division by zero error.".to_string() });
                }
                Ok(Object::Number(l / r))
            },
            TokenKind::Greater => {
                let (l, r) = self.check_number_operands(operator, &left, &right)?;
                Ok(Object::Bool(l > r))
            },
            TokenKind::GreaterEqual => {
                let (l, r) = self.check_number_operands(operator, &left, &right)?;
                Ok(Object::Bool(l >= r))
            },
            TokenKind::Less => {
                let (l, r) = self.check_number_operands(operator, &left, &right)?;
                Ok(Object::Bool(l < r))
            },
            TokenKind::LessEqual => {
                let (l, r) = self.check_number_operands(operator, &left, &right)?;
                Ok(Object::Bool(l <= r))
            },
            // Both operands must be numbers for equality too; this is a
            // deliberately preserved quirk, not an oversight.
            TokenKind::EqualEqual => {
                let (l, r) = self.check_number_operands(operator, &left, &right)?;
                Ok(Object::Bool(l == r))
            },
            TokenKind::BangEqual => {
                let (l, r) = self.check_number_operands(operator, &left, &right)?;
                Ok(Object::Bool(l != r))
            },
            _ => unreachable!("parser only produces arithmetic/comparison/equality binary operators"),
        }
    }

    fn visit_logical_expr(&mut self, data: &LogicalData) -> Result<Object, RuntimeError> {
        let left = self.evaluate(&data.left)?;

        let short_circuits = match data.operator.kind {
            TokenKind::Or => left.is_truthy(),
            _ => !left.is_truthy(),
        };

        if short_circuits {
            Ok(left)
        } else {
            self.evaluate(&data.right)
        }
    }

    fn visit_variable_expr(&mut self, data: &VariableData) -> Result<Object, RuntimeError> {
        self.lookup_variable(data.id, &data.name)
    }

    fn visit_assign_expr(&mut self, data: &AssignData) -> Result<Object, RuntimeError> {
        let value = self.evaluate(&data.value)?;

        match self.locals.get(&data.id) {
            Some(&depth) => self.environment.borrow_mut().assign_at(depth, &data.name, value.clone())?,
            None => self.globals.borrow_mut().assign(&data.name, value.clone())?,
        }

        Ok(value)
    }

    fn visit_call_expr(&mut self, data: &CallData) -> Result<Object, RuntimeError> {
        let callee = self.evaluate(&data.callee)?;

        let mut arguments = Vec::with_capacity(data.arguments.len());
        for argument in &data.arguments {
            arguments.push(self.evaluate(argument)?);
        }

        let arity = match &callee {
            Object::Function(function) => function.arity(),
            Object::NativeFunction(function) => function.arity(),
            Object::Class(class) => class.arity(),
            _ => {
                return Err(RuntimeError {
                    token: data.paren.clone(),
                    message: "Can only call functions and classes.".to_string(),
                });
            }
        };

        let argument_count = arguments.len();
        if argument_count != arity {
            return Err(RuntimeError {
                token: data.paren.clone(),
                message: format!("Expected {arity} arguments but got {argument_count}."),
            });
        }

        match &callee {
            Object::Function(function) => function.call(self, arguments),
            Object::NativeFunction(function) => function.call(self, arguments),
            Object::Class(class) => class.call(self, arguments),
            _ => unreachable!("non-callable callee already rejected above"),
        }
    }

    fn visit_get_expr(&mut self, data: &GetData) -> Result<Object, RuntimeError> {
        let object = self.evaluate(&data.object)?;

        match object {
            Object::Instance(instance) => Instance::get(&instance, &data.name),
            _ => Err(RuntimeError { token: data.name.clone(), message: "Only instances have properties.".to_string() }),
        }
    }

    fn visit_set_expr(&mut self, data: &SetData) -> Result<Object, RuntimeError> {
        let object = self.evaluate(&data.object)?;

        let Object::Instance(instance) = object else {
            return Err(RuntimeError { token: data.name.clone(), message: "Only instances have fields.".to_string() });
        };

        let value = self.evaluate(&data.value)?;
        instance.borrow_mut().set(&data.name, value.clone());
        Ok(value)
    }

    fn visit_this_expr(&mut self, data: &ThisData) -> Result<Object, RuntimeError> {
        self.lookup_variable(data.id, &data.keyword)
    }

    fn visit_super_expr(&mut self, data: &SuperData) -> Result<Object, RuntimeError> {
        let depth = *self.locals.get(&data.id).expect("resolver records a depth for every 'super' reference");

        let superclass = self.environment.borrow().get_at(depth, &data.keyword)?;
        let Object::Class(superclass) = superclass else {
            unreachable!("resolver only allows 'super' inside a class with a superclass");
        };

        let this_token = Token::new(TokenKind::This, "this".to_string(), None, data.keyword.line);
        let instance = self.environment.borrow().get_at(depth - 1, &this_token)?;

        let method = superclass.borrow().find_method(&data.method.lexeme).ok_or_else(|| RuntimeError {
            token: data.method.clone(),
            message: format!("Undefined property '{}'.", data.method.lexeme),
        })?;

        Ok(Object::Function(Rc::new(method.bind(instance))))
    }
}

impl StmtVisitor<Result<Signal, RuntimeError>> for Interpreter {
    fn visit_expression_stmt(&mut self, data: &ExpressionData) -> Result<Signal, RuntimeError> {
        self.evaluate(&data.expr)?;
        Ok(Signal::Normal)
    }

    fn visit_print_stmt(&mut self, data: &PrintData) -> Result<Signal, RuntimeError> {
        let value = self.evaluate(&data.expr)?;
        let _ = writeln!(self.stdout, "{value}");
        Ok(Signal::Normal)
    }

    fn visit_var_stmt(&mut self, data: &VarData) -> Result<Signal, RuntimeError> {
        let value = match &data.initializer {
            Some(initializer) => self.evaluate(initializer)?,
            None => Object::Nil,
        };

        self.environment.borrow_mut().define(&data.name.lexeme, value);
        Ok(Signal::Normal)
    }

    fn visit_block_stmt(&mut self, data: &BlockData) -> Result<Signal, RuntimeError> {
        let environment = Rc::new(RefCell::new(Environment::new(Some(Rc::clone(&self.environment)))));
        self.execute_block(&data.statements, environment)
    }

    fn visit_if_stmt(&mut self, data: &IfData) -> Result<Signal, RuntimeError> {
        if self.evaluate(&data.condition)?.is_truthy() {
            self.execute(&data.then_branch)
        } else if let Some(else_branch) = &data.else_branch {
            self.execute(else_branch)
        } else {
            Ok(Signal::Normal)
        }
    }

    fn visit_while_stmt(&mut self, data: &WhileData) -> Result<Signal, RuntimeError> {
        while self.evaluate(&data.condition)?.is_truthy() {
            match self.execute(&data.body)? {
                Signal::Normal => continue,
                signal @ Signal::Return(_) => return Ok(signal),
            }
        }

        Ok(Signal::Normal)
    }

    fn visit_function_stmt(&mut self, data: &FunctionData) -> Result<Signal, RuntimeError> {
        let function = Function::new(Rc::new(data.clone()), Rc::clone(&self.environment), false);
        self.environment.borrow_mut().define(&data.name.lexeme, Object::Function(Rc::new(function)));
        Ok(Signal::Normal)
    }

    fn visit_return_stmt(&mut self, data: &ReturnData) -> Result<Signal, RuntimeError> {
        let value = match &data.value {
            Some(expr) => self.evaluate(expr)?,
            None => Object::Nil,
        };

        Ok(Signal::Return(value))
    }

    fn visit_class_stmt(&mut self, data: &ClassData) -> Result<Signal, RuntimeError> {
        let superclass = match &data.superclass {
            Some(expr) => {
                let value = self.evaluate(expr)?;
                let Object::Class(class) = value else {
                    let Expr::Variable(variable) = expr else { unreachable!() };
                    return Err(RuntimeError {
                        token: variable.name.clone(),
                        message: "Superclass must be a class.".to_string(),
                    });
                };
                Some(class)
            }
            None => None,
        };

        self.environment.borrow_mut().define(&data.name.lexeme, Object::Nil);

        let method_environment = if let Some(superclass) = &superclass {
            let environment = Rc::new(RefCell::new(Environment::new(Some(Rc::clone(&self.environment)))));
            environment.borrow_mut().define("super", Object::Class(Rc::clone(superclass)));
            environment
        } else {
            Rc::clone(&self.environment)
        };

        let mut methods = HashMap::new();
        for method in &data.methods {
            let Stmt::Function(declaration) = method else { unreachable!() };
            let is_initializer = declaration.name.lexeme == "init";
            let function = Function::new(Rc::new(declaration.clone()), Rc::clone(&method_environment), is_initializer);
            methods.insert(declaration.name.lexeme.clone(), Rc::new(function));
        }

        let class = Rc::new(RefCell::new(Class::new(data.name.lexeme.clone(), superclass, methods)));

        trace!(class = %data.name.lexeme, "defined class");

        self.environment.borrow_mut().assign(&data.name, Object::Class(class))?;
        Ok(Signal::Normal)
    }
}

use std::collections::HashMap;
use std::rc::Rc;

use crate::environment::{EnvRef, Environment};
use crate::error::RuntimeError;
use crate::expr::{
    AssignData, BinaryData, CallData, Expr, ExprVisitor, GroupingData, LiteralValue, LogicalData,
    UnaryData, VariableData,
};
use crate::function::{clock, Function};
use crate::object::{Callable, Object};
use crate::stmt::{
    BlockData, ExpressionData, FunctionData, IfData, PrintData, ReturnData, Stmt, StmtVisitor,
    VarData, WhileData,
};
use crate::token::{Token, Type};

/// The result of executing a statement: either it ran to completion, or a
/// `return` unwound through it carrying a value. Threaded explicitly through
/// statement execution rather than thrown as an exception, so a function
/// body's result is just whichever `Signal` its last executed statement
/// produced.
#[derive(Debug, Clone)]
pub enum Signal {
    Normal,
    Return(Object),
}

/// Walks the tree, consulting the resolver's side table for local variable
/// lookups and falling back to `globals` for anything left untagged.
pub struct Interpreter {
    pub globals: EnvRef,
    environment: EnvRef,
    locals: HashMap<u64, usize>,
}

impl Interpreter {
    pub fn new() -> Self {
        let globals = Environment::new(None);
        globals.borrow_mut().define("clock", Object::from(clock()));

        Interpreter {
            environment: Rc::clone(&globals),
            globals,
            locals: HashMap::new(),
        }
    }

    /// Called by the resolver once per variable-use node that resolved to a
    /// local: records how many `enclosing` hops separate the use from its
    /// declaring scope.
    pub fn resolve(&mut self, id: u64, depth: usize) {
        self.locals.insert(id, depth);
    }

    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for statement in statements {
            if let Signal::Return(_) = self.execute(statement)? {
                break;
            }
        }
        Ok(())
    }

    fn execute(&mut self, stmt: &Stmt) -> Result<Signal, RuntimeError> {
        stmt.accept(self)
    }

    /// Executes `statements` inside `environment`, guaranteeing that the
    /// interpreter's current environment is restored to whatever it was
    /// before the call on every exit path: normal completion, an early
    /// `Signal::Return`, or a propagated runtime error.
    pub fn execute_block(&mut self, statements: &[Stmt], environment: EnvRef) -> Result<Signal, RuntimeError> {
        let previous = std::mem::replace(&mut self.environment, environment);

        let result = (|| {
            for statement in statements {
                match self.execute(statement)? {
                    Signal::Normal => {}
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

    fn look_up_variable(&self, id: u64, name: &Token) -> Result<Object, RuntimeError> {
        match self.locals.get(&id) {
            Some(&distance) => Environment::get_at(&self.environment, distance, name),
            None => self.globals.borrow().get(name),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

fn number_operand(operator: &Token, value: &Object) -> Result<f64, RuntimeError> {
    match value {
        Object::Number(n) => Ok(*n),
        _ => Err(RuntimeError {
            token: operator.clone(),
            message: "Operand must be a number.".to_string(),
        }),
    }
}

fn number_operands(operator: &Token, left: &Object, right: &Object) -> Result<(f64, f64), RuntimeError> {
    match (left, right) {
        (Object::Number(l), Object::Number(r)) => Ok((*l, *r)),
        _ => Err(RuntimeError {
            token: operator.clone(),
            message: "Operands must be numbers.".to_string(),
        }),
    }
}

impl ExprVisitor<Result<Object, RuntimeError>> for Interpreter {
    fn visit_literal_expr(&mut self, data: &LiteralValue) -> Result<Object, RuntimeError> {
        Ok(match data {
            LiteralValue::Nil => Object::Nil,
            LiteralValue::True => Object::Bool(true),
            LiteralValue::False => Object::Bool(false),
            LiteralValue::Number(n) => Object::Number(*n),
            LiteralValue::String(s) => Object::String(s.clone()),
        })
    }

    fn visit_unary_expr(&mut self, data: &UnaryData) -> Result<Object, RuntimeError> {
        let right = self.evaluate(&data.right)?;

        match data.operator.kind {
            Type::Minus => Ok(Object::Number(-number_operand(&data.operator, &right)?)),
            Type::Bang => Ok(Object::Bool(!right.is_truthy())),
            _ => unreachable!("unary operator {:?} never produced by the parser", data.operator.kind),
        }
    }

    fn visit_binary_expr(&mut self, data: &BinaryData) -> Result<Object, RuntimeError> {
        let left = self.evaluate(&data.left)?;
        let right = self.evaluate(&data.right)?;

        match data.operator.kind {
            Type::Minus => {
                let (l, r) = number_operands(&data.operator, &left, &right)?;
                Ok(Object::Number(l - r))
            }
            Type::Slash => {
                let (l, r) = number_operands(&data.operator, &left, &right)?;
                Ok(Object::Number(l / r))
            }
            Type::Star => {
                let (l, r) = number_operands(&data.operator, &left, &right)?;
                Ok(Object::Number(l * r))
            }
            Type::Plus => match (&left, &right) {
                (Object::Number(l), Object::Number(r)) => Ok(Object::Number(l + r)),
                (Object::String(l), Object::String(r)) => Ok(Object::String(format!("{l}{r}"))),
                _ => Err(RuntimeError {
                    token: data.operator.clone(),
                    message: "Operands must be two numbers or two strings.".to_string(),
                }),
            },
            Type::Greater => {
                let (l, r) = number_operands(&data.operator, &left, &right)?;
                Ok(Object::Bool(l > r))
            }
            Type::GreaterEqual => {
                let (l, r) = number_operands(&data.operator, &left, &right)?;
                Ok(Object::Bool(l >= r))
            }
            Type::Less => {
                let (l, r) = number_operands(&data.operator, &left, &right)?;
                Ok(Object::Bool(l < r))
            }
            Type::LessEqual => {
                let (l, r) = number_operands(&data.operator, &left, &right)?;
                Ok(Object::Bool(l <= r))
            }
            Type::EqualEqual => Ok(Object::Bool(left == right)),
            Type::BangEqual => Ok(Object::Bool(left != right)),
            _ => unreachable!("binary operator {:?} never produced by the parser", data.operator.kind),
        }
    }

    fn visit_logical_expr(&mut self, data: &LogicalData) -> Result<Object, RuntimeError> {
        let left = self.evaluate(&data.left)?;

        match data.operator.kind {
            Type::Or if left.is_truthy() => Ok(left),
            Type::Or => self.evaluate(&data.right),
            Type::And if !left.is_truthy() => Ok(left),
            Type::And => self.evaluate(&data.right),
            _ => unreachable!("logical operator {:?} never produced by the parser", data.operator.kind),
        }
    }

    fn visit_grouping_expr(&mut self, data: &GroupingData) -> Result<Object, RuntimeError> {
        self.evaluate(&data.expr)
    }

    fn visit_variable_expr(&mut self, data: &VariableData) -> Result<Object, RuntimeError> {
        self.look_up_variable(data.id, &data.name)
    }

    fn visit_assign_expr(&mut self, data: &AssignData) -> Result<Object, RuntimeError> {
        let value = self.evaluate(&data.value)?;

        match self.locals.get(&data.id) {
            Some(&distance) => {
                Environment::assign_at(&self.environment, distance, &data.name, value.clone());
            }
            None => {
                self.globals.borrow_mut().assign(&data.name, value.clone())?;
            }
        }

        Ok(value)
    }

    fn visit_call_expr(&mut self, data: &CallData) -> Result<Object, RuntimeError> {
        let callee = self.evaluate(&data.callee)?;

        let mut arguments = Vec::with_capacity(data.arguments.len());
        for argument in &data.arguments {
            arguments.push(self.evaluate(argument)?);
        }

        let callable: &dyn Callable = match &callee {
            Object::Function(function) => function.as_ref(),
            Object::NativeFunction(native) => native.as_ref(),
            _ => {
                return Err(RuntimeError {
                    token: data.paren.clone(),
                    message: "Can only call functions and classes.".to_string(),
                })
            }
        };

        if arguments.len() != callable.arity() {
            return Err(RuntimeError {
                token: data.paren.clone(),
                message: format!("Expected {} arguments but got {}.", callable.arity(), arguments.len()),
            });
        }

        callable.call(self, arguments)
    }
}

impl StmtVisitor<Result<Signal, RuntimeError>> for Interpreter {
    fn visit_expression_stmt(&mut self, data: &ExpressionData) -> Result<Signal, RuntimeError> {
        self.evaluate(&data.expr)?;
        Ok(Signal::Normal)
    }

    fn visit_print_stmt(&mut self, data: &PrintData) -> Result<Signal, RuntimeError> {
        let value = self.evaluate(&data.expr)?;
        println!("{}", value.stringify());
        Ok(Signal::Normal)
    }

    fn visit_var_stmt(&mut self, data: &VarData) -> Result<Signal, RuntimeError> {
        let value = match &data.initializer {
            Some(expr) => self.evaluate(expr)?,
            None => Object::Nil,
        };
        self.environment.borrow_mut().define(&data.name.lexeme, value);
        Ok(Signal::Normal)
    }

    fn visit_block_stmt(&mut self, data: &BlockData) -> Result<Signal, RuntimeError> {
        let environment = Environment::new(Some(Rc::clone(&self.environment)));
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
                Signal::Normal => {}
                signal @ Signal::Return(_) => return Ok(signal),
            }
        }
        Ok(Signal::Normal)
    }

    fn visit_function_stmt(&mut self, data: &FunctionData) -> Result<Signal, RuntimeError> {
        let function = Function::new(data.clone(), Rc::clone(&self.environment));
        self.environment.borrow_mut().define(&data.name.lexeme, Object::from(function));
        Ok(Signal::Normal)
    }

    fn visit_return_stmt(&mut self, data: &ReturnData) -> Result<Signal, RuntimeError> {
        let value = match &data.value {
            Some(expr) => self.evaluate(expr)?,
            None => Object::Nil,
        };
        Ok(Signal::Return(value))
    }
}

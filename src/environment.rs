use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::RuntimeError;
use crate::object::Object;
use crate::token::Token;

/// A shared handle to an [`Environment`]. Environments form a DAG, not a
/// tree, because multiple closures can share an enclosing chain; ownership
/// is therefore shared (`Rc`) rather than exclusive. A closure that outlives
/// the block that created it keeps its captured chain alive through this
/// handle.
pub type EnvRef = Rc<RefCell<Environment>>;

/// One lexical scope: a name-to-value map plus an optional link to the
/// enclosing scope. The chain is acyclic and rooted at a single globals
/// environment with no enclosing parent.
#[derive(Debug)]
pub struct Environment {
    pub enclosing: Option<EnvRef>,
    values: HashMap<String, Object>,
}

impl Environment {
    pub fn new(enclosing: Option<EnvRef>) -> EnvRef {
        Rc::new(RefCell::new(Environment {
            enclosing,
            values: HashMap::new(),
        }))
    }

    /// Unconditionally writes to this scope, overwriting any existing
    /// binding of the same name in it.
    pub fn define(&mut self, name: &str, value: Object) {
        self.values.insert(name.to_string(), value);
    }

    /// Walks outward until `name` is found or the chain is exhausted.
    pub fn get(&self, name: &Token) -> Result<Object, RuntimeError> {
        if let Some(value) = self.values.get(&name.lexeme) {
            return Ok(value.clone());
        }

        if let Some(enclosing) = &self.enclosing {
            return enclosing.borrow().get(name);
        }

        Err(undefined(name))
    }

    /// Symmetric with [`Environment::get`]: walks outward, writing the
    /// first scope that already binds `name`.
    pub fn assign(&mut self, name: &Token, value: Object) -> Result<(), RuntimeError> {
        if self.values.contains_key(&name.lexeme) {
            self.values.insert(name.lexeme.clone(), value);
            return Ok(());
        }

        if let Some(enclosing) = &self.enclosing {
            return enclosing.borrow_mut().assign(name, value);
        }

        Err(undefined(name))
    }

    fn ancestor(env: &EnvRef, distance: usize) -> EnvRef {
        log::trace!("walking {distance} environment hop(s)");
        let mut current = Rc::clone(env);
        for _ in 0..distance {
            let next = current
                .borrow()
                .enclosing
                .clone()
                .expect("resolver-computed depth to match the live environment chain");
            current = next;
        }
        current
    }

    /// Walks exactly `distance` hops via `enclosing`, then reads the local
    /// binding directly: no chain-fallback, since the resolver guarantees
    /// the name is bound there. O(distance) hops, O(1) final lookup.
    pub fn get_at(env: &EnvRef, distance: usize, name: &Token) -> Result<Object, RuntimeError> {
        let target = Self::ancestor(env, distance);
        let found = target.borrow().values.get(&name.lexeme).cloned();
        found.ok_or_else(|| undefined(name))
    }

    /// Symmetric write counterpart of [`Environment::get_at`].
    pub fn assign_at(env: &EnvRef, distance: usize, name: &Token, value: Object) {
        let target = Self::ancestor(env, distance);
        target.borrow_mut().values.insert(name.lexeme.clone(), value);
    }
}

fn undefined(name: &Token) -> RuntimeError {
    RuntimeError {
        token: name.clone(),
        message: format!("Undefined variable '{}'.", name.lexeme),
    }
}

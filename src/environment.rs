use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::RuntimeError;
use crate::object::Object;
use crate::token::Token;

/// A single scope in the environment chain: a map of names to values plus
/// an optional link to the enclosing scope.
#[derive(Debug)]
pub struct Environment {
    pub enclosing: Option<Rc<RefCell<Environment>>>,
    values: HashMap<String, Object>,
}

impl Environment {
    pub fn new(enclosing: Option<Rc<RefCell<Environment>>>) -> Self {
        Environment { enclosing, values: HashMap::new() }
    }

    pub fn define(&mut self, name: &str, value: Object) {
        self.values.insert(name.to_string(), value);
    }

    fn ancestor(&self, distance: usize) -> Rc<RefCell<Environment>> {
        let mut environment = self.enclosing.clone()
            .expect("resolver-reported distance should have an enclosing environment");

        for _ in 1..distance {
            let parent = environment.borrow().enclosing.clone()
                .expect("resolver-reported distance should have an enclosing environment");
            environment = parent;
        }

        environment
    }

    pub fn get(&self, name: &Token) -> Result<Object, RuntimeError> {
        if let Some(value) = self.values.get(&name.lexeme) {
            return Ok(value.clone());
        }

        if let Some(enclosing) = &self.enclosing {
            return enclosing.borrow().get(name);
        }

        Err(RuntimeError {
            token: name.clone(),
            message: format!("Undefined variable '{}'.", name.lexeme),
        })
    }

    pub fn get_at(&self, distance: usize, name: &Token) -> Result<Object, RuntimeError> {
        if distance == 0 {
            self.get(name)
        } else {
            match self.ancestor(distance).borrow().values.get(&name.lexeme) {
                Some(value) => Ok(value.clone()),
                None => Err(RuntimeError {
                    token: name.clone(),
                    message: format!("Undefined variable '{}'.", name.lexeme),
                }),
            }
        }
    }

    pub fn assign(&mut self, name: &Token, value: Object) -> Result<(), RuntimeError> {
        if self.values.contains_key(&name.lexeme) {
            self.values.insert(name.lexeme.clone(), value);
            return Ok(());
        }

        if let Some(enclosing) = &self.enclosing {
            return enclosing.borrow_mut().assign(name, value);
        }

        Err(RuntimeError {
            token: name.clone(),
            message: format!("Undefined variable '{}'.", name.lexeme),
        })
    }

    pub fn assign_at(&mut self, distance: usize, name: &Token, value: Object) -> Result<(), RuntimeError> {
        if distance == 0 {
            self.assign(name, value)
        } else {
            self.ancestor(distance).borrow_mut().values.insert(name.lexeme.clone(), value);
            Ok(())
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    fn ident(name: &str) -> Token {
        Token::new(TokenKind::Identifier, name.to_string(), None, 1)
    }

    #[test]
    fn defines_and_reads_a_variable() {
        let mut env = Environment::default();
        env.define("a", Object::from(1.0));
        assert_eq!(env.get(&ident("a")).unwrap(), Object::from(1.0));
    }

    #[test]
    fn reads_through_enclosing_scopes() {
        let global = Rc::new(RefCell::new(Environment::default()));
        global.borrow_mut().define("a", Object::from(1.0));

        let local = Environment::new(Some(Rc::clone(&global)));
        assert_eq!(local.get(&ident("a")).unwrap(), Object::from(1.0));
    }

    #[test]
    fn undefined_variable_is_a_runtime_error() {
        let env = Environment::default();
        assert!(env.get(&ident("missing")).is_err());
    }

    #[test]
    fn assign_at_distance_mutates_ancestor() {
        let global = Rc::new(RefCell::new(Environment::default()));
        global.borrow_mut().define("a", Object::from(1.0));

        let local = Rc::new(RefCell::new(Environment::new(Some(Rc::clone(&global)))));
        local.borrow_mut().assign_at(1, &ident("a"), Object::from(2.0)).unwrap();

        assert_eq!(global.borrow().get(&ident("a")).unwrap(), Object::from(2.0));
    }
}

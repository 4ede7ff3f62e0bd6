use super::Val;
use std::collections::HashMap;

/// ## Variable memory
///
/// Names are case sensitive and untyped. A trailing `$` is only a
/// naming convention. Unlike classic BASIC there are no implicit
/// zero values. A name that was never stored is simply absent, and the
/// evaluator goes on to read the text as a number or arithmetic.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<String, Val>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn get(&self, var_name: &str) -> Option<&Val> {
        self.vars.get(var_name)
    }

    /// Binds `value` to `var_name`, replacing any previous value and type.
    pub fn store(&mut self, var_name: &str, value: Val) {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.to_string(), value);
            }
        };
    }
}

use crate::lang::Error;
use crate::mach::{Expression, Runtime, Scripted, Val, Var};


fn run(program: &str) -> String {
    let mut r = Runtime::with_console(Scripted::default());
    let result = r.run(program);
    let mut s = String::new();
    for line in r.output() {
        s.push_str(&format!("{}\n", line));
    }
    if let Err(error) = result {
        s.push_str(&format!("{}\n", error));
    }
    s
}

fn eval(vars: &[(&str, Val)], expr: &str) -> Result<Val, Error> {
    let mut var = Var::new();
    for (name, val) in vars {
        var.store(name, val.clone());
    }
    Expression::new(&var).evaluate(expr)
}

fn condition(vars: &[(&str, Val)], cond: &str) -> Result<bool, Error> {
    let mut var = Var::new();
    for (name, val) in vars {
        var.store(name, val.clone());
    }
    Expression::new(&var).condition(cond)
}

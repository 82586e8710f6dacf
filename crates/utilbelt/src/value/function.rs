use super::Value;
use std::fmt;
use std::rc::Rc;

type NativeFn = dyn Fn(&Value, &[Value]) -> Value;

/// A shared callable value.
///
/// A function receives its execution context (`this`) and its argument list.
/// Clones share the same underlying closure, so strict equality between two
/// `Function`s is identity of that closure.
#[derive(Clone)]
pub struct Function {
    inner: Rc<NativeFn>,
}

impl Function {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Value + 'static,
    {
        Self { inner: Rc::new(f) }
    }

    /// Calls the function with an explicit `this`.
    pub fn call(&self, this: &Value, args: &[Value]) -> Value {
        (self.inner)(this, args)
    }

    /// Calls the function with `this` set to `undefined`.
    pub fn invoke(&self, args: &[Value]) -> Value {
        self.call(&Value::Undefined, args)
    }

    /// True when both handles share the same closure.
    pub fn ptr_eq(&self, other: &Function) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.inner), Rc::as_ptr(&other.inner))
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[Function]")
    }
}

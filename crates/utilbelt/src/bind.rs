use crate::value::{Function, Value};

/// Fixes the execution context of `f` and prepends `preset` arguments.
///
/// Calling the returned function with `args` runs `f` with `this = scope`
/// (whatever `this` the caller passes is ignored) and the arguments
/// `preset ++ args`. `scope` may be `Value::Null`.
///
/// # Examples
///
/// ```
/// use utilbelt::{bind, Function, Value};
/// use serde_json::json;
///
/// let greet = Function::new(|this, args| {
///     let greeting = args[0].as_str().unwrap_or_default();
///     let name = this.get("hello").and_then(Value::as_str).unwrap_or_default();
///     Value::from(format!("{} {}", greeting, name))
/// });
/// let scope = Value::from(json!({"hello": "world"}));
/// let bound = bind(&greet, scope, [Value::from("hello")]);
/// assert_eq!(bound.invoke(&[]), Value::from("hello world"));
/// ```
pub fn bind<I>(f: &Function, scope: Value, preset: I) -> Function
where
    I: IntoIterator<Item = Value>,
{
    let target = f.clone();
    let preset: Vec<Value> = preset.into_iter().collect();
    Function::new(move |_this, args| {
        if preset.is_empty() {
            return target.call(&scope, args);
        }
        let mut all = Vec::with_capacity(preset.len() + args.len());
        all.extend_from_slice(&preset);
        all.extend_from_slice(args);
        target.call(&scope, &all)
    })
}

//! Nullary closures that hand back a message captured when they were made.

pub fn message(msg: impl Into<String>) -> impl Fn() -> String + Clone {
    let msg = msg.into();
    move || msg.clone()
}

pub fn logger(msg: impl Into<String>) -> impl Fn() -> String + Clone {
    let line = format!("Log: {}", msg.into());
    move || line.clone()
}

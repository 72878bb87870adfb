/// A runnable helper script: a name plus the lines it prints.
pub trait Script {
    fn name(&self) -> &str;
    fn lines(&self) -> &[&str];
}

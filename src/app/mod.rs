pub mod example_script;

pub use example_script::ExampleScript;

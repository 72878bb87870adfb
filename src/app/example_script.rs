use crate::domain::ports::Script;

pub const TOOLSET_NAME: &str = "devvit-mobile-ui-reconstruction";

const LINES: [&str; 2] = [
    "This is an example script for devvit-mobile-ui-reconstruction",
    "Replace with actual automation logic or delete if not needed",
];

/// Placeholder helper for the mobile UI reconstruction toolset.
///
/// Prints a fixed greeting and a reminder to replace it. Component audits,
/// viewport testing, Blocks validation and touch-target checks are not
/// implemented here.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExampleScript;

impl ExampleScript {
    pub fn new() -> Self {
        Self
    }
}

impl Script for ExampleScript {
    fn name(&self) -> &str {
        TOOLSET_NAME
    }

    fn lines(&self) -> &[&str] {
        &LINES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_fixed_and_ordered() {
        let script = ExampleScript::new();
        assert_eq!(
            script.lines(),
            &[
                "This is an example script for devvit-mobile-ui-reconstruction",
                "Replace with actual automation logic or delete if not needed",
            ]
        );
    }

    #[test]
    fn test_first_line_names_the_toolset() {
        let script = ExampleScript::new();
        assert_eq!(
            script.lines()[0],
            format!("This is an example script for {}", script.name())
        );
    }

    #[test]
    fn test_lines_have_no_embedded_newlines() {
        for line in ExampleScript::new().lines() {
            assert!(!line.contains('\n'), "line contains newline: {line:?}");
        }
    }
}

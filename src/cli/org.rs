//! Organization command implementations

use crate::cli::prompt::Prompter;
use crate::output::{bold, indent};

/// Run the orgs command: list the configured organizations in order
pub fn show(prompter: &mut dyn Prompter, orgs: &[String]) {
    prompter.newline();
    prompter.say(&bold(&format!("Found {} orgs:", orgs.len())));
    for org in orgs {
        prompter.say(&indent(org));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::prompt::ScriptedPrompter;

    #[test]
    fn test_show_lists_orgs_in_order() {
        let mut prompter = ScriptedPrompter::new(&[]);
        let orgs = vec!["acme".to_string(), "globex".to_string()];

        show(&mut prompter, &orgs);

        assert_eq!(prompter.output, vec!["", "Found 2 orgs:", "   acme", "   globex"]);
    }

    #[test]
    fn test_show_empty_fleet() {
        let mut prompter = ScriptedPrompter::new(&[]);
        show(&mut prompter, &[]);
        assert!(prompter.printed("Found 0 orgs:"));
    }
}

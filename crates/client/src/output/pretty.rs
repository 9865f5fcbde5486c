//! Pretty output formatting.

use tutorials_core::tutorial::Tutorial;

/// Values with a human-readable layout.
pub trait Pretty {
    fn pretty(&self) -> String;
}

impl Pretty for Tutorial {
    fn pretty(&self) -> String {
        format_tutorial(self)
    }
}

impl Pretty for Vec<Tutorial> {
    fn pretty(&self) -> String {
        format_tutorials(self)
    }
}

/// Format a tutorial for display.
pub fn format_tutorial(tutorial: &Tutorial) -> String {
    let status = if tutorial.published {
        "published"
    } else {
        "draft"
    };
    let mut output = format!(
        "{} [{}]\n  ID: {}",
        tutorial.title, status, tutorial.unique_id
    );
    if let Some(desc) = &tutorial.description {
        output.push_str(&format!("\n  Description: {}", desc));
    }
    output
}

/// Format tutorials for display.
pub fn format_tutorials(tutorials: &[Tutorial]) -> String {
    if tutorials.is_empty() {
        return "No tutorials found.".to_string();
    }
    let mut output = format!("TUTORIALS ({})\n", tutorials.len());
    output.push_str(&"-".repeat(40));
    for tutorial in tutorials {
        output.push_str(&format!("\n{}", format_tutorial(tutorial)));
        output.push('\n');
    }
    output
}

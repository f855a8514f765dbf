//! Subject selection and the fixed instruction templates sent ahead of a
//! transcript.

use std::fmt;

use clap::ValueEnum;

/// The fixed set of subjects a user can pick notes tailored for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Subject {
    Physics,
    Chemistry,
    Mathematics,
    #[value(name = "data-science")]
    DataScienceAndStatistics,
    Biology,
    Economics,
}

impl Subject {
    pub const ALL: [Subject; 6] = [
        Subject::Physics,
        Subject::Chemistry,
        Subject::Mathematics,
        Subject::DataScienceAndStatistics,
        Subject::Biology,
        Subject::Economics,
    ];

    /// The instruction template mapped to this subject.
    pub fn instruction(&self) -> &'static str {
        match self {
            Subject::Physics => include_str!("./prompts/physics.txt"),
            Subject::Chemistry => include_str!("./prompts/chemistry.txt"),
            Subject::Mathematics => include_str!("./prompts/mathematics.txt"),
            Subject::DataScienceAndStatistics => include_str!("./prompts/data_science.txt"),
            Subject::Biology => include_str!("./prompts/biology.txt"),
            Subject::Economics => include_str!("./prompts/economics.txt"),
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Mathematics => "Mathematics",
            Subject::DataScienceAndStatistics => "Data Science and Statistics",
            Subject::Biology => "Biology",
            Subject::Economics => "Economics",
        };
        f.write_str(name)
    }
}

/// What steers the notes generation: a fixed subject template or a
/// user-supplied custom instruction passed through verbatim.
#[derive(Debug, Clone)]
pub enum NotesPrompt {
    Subject(Subject),
    Custom(String),
}

impl NotesPrompt {
    pub fn instruction(&self) -> &str {
        match self {
            NotesPrompt::Subject(subject) => subject.instruction(),
            NotesPrompt::Custom(text) => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_subject_maps_to_its_template() {
        let expected_titles = [
            (Subject::Physics, "Detailed Physics Notes"),
            (Subject::Chemistry, "Detailed Chemistry Notes"),
            (Subject::Mathematics, "Detailed Mathematics Notes"),
            (
                Subject::DataScienceAndStatistics,
                "Comprehensive Notes on Data Science and Statistics",
            ),
            (Subject::Biology, "Detailed Biology Notes"),
            (Subject::Economics, "Detailed Economics Notes"),
        ];

        for (subject, title) in expected_titles {
            let instruction = subject.instruction();
            assert!(
                instruction.contains(title),
                "Template for {subject} should contain '{title}'"
            );
        }
    }

    #[test]
    fn test_templates_are_distinct() {
        for a in Subject::ALL {
            for b in Subject::ALL {
                if a != b {
                    assert_ne!(a.instruction(), b.instruction());
                }
            }
        }
    }

    #[test]
    fn test_custom_prompt_passes_through_verbatim() {
        let prompt = NotesPrompt::Custom("Explain this like I am five.".into());
        assert_eq!(prompt.instruction(), "Explain this like I am five.");
    }
}

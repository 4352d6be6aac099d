//! Text command language understood by the shell and `exec`.
//!
//! A command line is a keyword (case-insensitive) followed by names. A single
//! person is `<given> <family...>`, so family names may span several words the
//! way they do in genealogy files. `ancestor` takes exactly two words per person.
//! `help` and `exit` ignore anything after the keyword.

use thiserror::Error;

use crate::domain::Person;

/// Help text shown for `help`.
pub const HELP: &str = "
help
contains <given> <family> : whether this professor is in the PhD tree
size [<given> <family>] : number of persons in the tree rooted at the professor (default: whole tree)
depth [<given> <family>] : longest advisor chain below the professor (default: whole tree)
advisor <given> <family> : the direct advisor of the professor
ancestor <given1> <family1> <given2> <family2> : the closest common ancestor of two professors
find <given> <family> : the PhD tree rooted at the professor
lineage <given> <family> : the chain of advisors from the root down to the professor
print : every professor of the PhD tree with the year of their degree
tree [<given> <family>] : the PhD tree drawn as an outline
exit : leave the program
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Contains(Person),
    Size(Option<Person>),
    Depth(Option<Person>),
    Advisor(Person),
    Ancestor(Person, Person),
    Find(Person),
    Lineage(Person),
    Print,
    Tree(Option<Person>),
    Exit,
}

/// A command line that could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("This is not a valid command. For help, enter the command \"help\"")]
    Unknown(String),

    #[error("Invalid {input} command. Enter the command \"help\" for information about that command.")]
    InvalidArguments { input: String },
}

impl Command {
    /// Parse one command line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((keyword, args)) = words.split_first() else {
            return Ok(None);
        };
        let invalid = || CommandError::InvalidArguments {
            input: words.join(" "),
        };

        let command = match keyword.to_lowercase().as_str() {
            "help" => Some(Command::Help),
            "contains" => one_person(args).map(Command::Contains),
            "size" => optional_person(args).map(Command::Size),
            "depth" => optional_person(args).map(Command::Depth),
            "advisor" => one_person(args).map(Command::Advisor),
            "ancestor" => match args {
                [g1, f1, g2, f2] => Some(Command::Ancestor(
                    Person::new(*g1, *f1),
                    Person::new(*g2, *f2),
                )),
                _ => None,
            },
            "find" => one_person(args).map(Command::Find),
            "lineage" => one_person(args).map(Command::Lineage),
            "print" => no_args(args).map(|_| Command::Print),
            "tree" => optional_person(args).map(Command::Tree),
            "exit" => Some(Command::Exit),
            _ => return Err(CommandError::Unknown(keyword.to_string())),
        };
        command.map(Some).ok_or_else(invalid)
    }
}

fn no_args(args: &[&str]) -> Option<()> {
    args.is_empty().then_some(())
}

/// First word is the given name, the rest the family name.
fn one_person(args: &[&str]) -> Option<Person> {
    match args {
        [given, family @ ..] if !family.is_empty() => {
            Some(Person::new(*given, family.join(" ")))
        }
        _ => None,
    }
}

fn optional_person(args: &[&str]) -> Option<Option<Person>> {
    if args.is_empty() {
        return Some(None);
    }
    one_person(args).map(Some)
}
